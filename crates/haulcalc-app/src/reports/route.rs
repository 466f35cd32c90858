//! Single-vehicle route reports

use haulcalc_domain::model::{InputValues, RouteParameters};
use haulcalc_domain::numeric::{format_number, round};
use haulcalc_domain::service::route::delivery::{
    mixed_route, small_shipments, MixedRouteInput, SmallShipmentsInput,
};
use haulcalc_domain::service::route::pendulum::{
    empty_return, partial_loaded, unequal_load, PartialLoadedInput, UnequalLoadInput,
};
use haulcalc_domain::service::route::ring::{ring_route, RingInput};
use haulcalc_types::{Report, ReportTable};

use super::{beta, count, num};
use crate::catalogue::ids;

pub fn pendulum_empty_return(values: &InputValues) -> Report {
    let route = RouteParameters::from_values(values, "payloadCapacity", "serviceTime");
    let shift = empty_return(&route, values.number("shiftDuration"));
    let decision = &shift.decision;

    let mut report = Report::new(ids::PENDULUM_EMPTY_RETURN);
    report
        .scalar("Длина маршрута (lₘ = l_g + lₓ), км", num(shift.route_length))
        .scalar("Время ездки (tₑ,ₒ), ч", num(shift.trip_time))
        .scalar("Выработка за ездку (Qₑ,ₒ), т", num(shift.tonnage_per_trip))
        .scalar("Тонно-километры за ездку (Pₑ,ₒ), т·км", num(shift.ton_km_per_trip))
        .scalar("Теоретическое число ездок (Tₙ / tₑ,ₒ)", num(decision.theoretical))
        .scalar("Целое число ездок [Tₙ / tₑ,ₒ], шт", count(decision.whole))
        .scalar("Остаток времени после целых ездок (ΔTₙ), ч", num(decision.delta_time))
        .scalar("Необходимое время дополнительной ездки (tₑₙ), ч", num(decision.required_time))
        .scalar("Решение о дополнительной ездке", decision.verdict())
        .scalar("Фактическое число ездок (Zₑ,ₒ факт), шт", count(shift.actual_trips))
        .scalar("Выработка в тоннах за смену (Qₙ), т", num(shift.total_tonnage))
        .scalar("Тонно-километры за смену (Pₙ), т·км", num(shift.total_ton_km))
        .scalar("Общий пробег за смену (Lₒбщ), км", num(shift.total_distance))
        .scalar("Фактическое время в наряде (Tₙ факт), ч", num(shift.actual_shift_time))
        .scalar("Коэффициент использования пробега за ездку (βₑ,ₒ)", beta(shift.beta_trip))
        .scalar("Коэффициент использования пробега за день (βд)", beta(shift.beta_day));
    report
}

pub fn pendulum_partial_loaded(values: &InputValues) -> Report {
    let result = partial_loaded(&PartialLoadedInput::from_values(values));
    let shift = &result.shift;
    let decision = &shift.decision;

    let mut report = Report::new(ids::PENDULUM_PARTIAL_LOADED);
    report
        .scalar("Длина маршрута (lₘ = l_g₁ + l_g₂ + lₓ₂), км", num(shift.route_length))
        .scalar("Время первой ездки (tₑ₁), ч", num(shift.first_trip_time))
        .scalar("Время второй ездки (tₑ₂), ч", num(shift.second_trip_time))
        .scalar("Время оборота (tₒ), ч", num(shift.cycle_time))
        .scalar("Выработка за любую ездку (Qₑ), т", num(shift.tonnage_first_trip))
        .scalar("Выработка за оборот (Qₒ), т", num(shift.tonnage_per_cycle))
        .scalar("Тонно-километры первой ездки (Pₑ₁), ткм", num(shift.ton_km_first_trip))
        .scalar("Тонно-километры второй ездки (Pₑ₂), ткм", num(shift.ton_km_second_trip))
        .scalar("Тонно-километры за оборот (Pₒ), ткм", num(shift.ton_km_per_cycle))
        .scalar("Теоретическое число оборотов (Zₒ = Tₙ / tₒ)", num(decision.theoretical))
        .scalar("Целое число оборотов [Tₙ / tₒ], шт", count(decision.whole))
        .scalar("Остаток времени после целых оборотов (ΔTₙ), ч", num(decision.delta_time))
        .scalar("Необходимое время дополнительной ездки (tₑₙ), ч", num(decision.required_time))
        .scalar("Решение о дополнительной ездке", decision.verdict())
        .scalar("Число ездок с учётом проверки (Zₑ факт), шт", count(shift.total_trips))
        .scalar("Число ездок на l_g₁ (Zₑ₁), шт", count(shift.trips_first))
        .scalar("Число ездок на l_g₂ (Zₑ₂), шт", count(shift.trips_second))
        .scalar("Выработка в тоннах за смену (Qₙ), т", num(shift.total_tonnage))
        .scalar("Тонно-километры за смену (Pₙ), ткм", num(shift.total_ton_km))
        .scalar("Общий пробег за смену (Lₒбщ), км", num(shift.total_distance))
        .scalar("Фактическое время в наряде (Tₙ факт), ч", num(shift.actual_shift_time))
        .scalar("Коэффициент использования пробега первой ездки (βₑ₁)", beta(1.0))
        .scalar(
            "Коэффициент использования пробега второй ездки (βₑ₂)",
            beta(result.beta_second_trip),
        )
        .scalar("Коэффициент использования пробега за день (βд)", beta(shift.beta_day))
        .scalar("Коэффициент использования пробега за оборот (βₒ)", beta(result.beta_cycle));
    report
}

pub fn pendulum_unequal_load(values: &InputValues) -> Report {
    let shift = unequal_load(&UnequalLoadInput::from_values(values));
    let decision = &shift.decision;

    let mut report = Report::new(ids::PENDULUM_UNEQUAL_LOAD);
    report
        .scalar("Длина маршрута (lₘ = l_g₁ + l_g₂), км", num(shift.route_length))
        .scalar("Время первой ездки (tₑ₁), ч", num(shift.first_trip_time))
        .scalar("Время второй ездки (tₑ₂), ч", num(shift.second_trip_time))
        .scalar("Время оборота (tₒ), ч", num(shift.cycle_time))
        .scalar("Выработка первой ездки (Qₑ₁), т", num(shift.tonnage_first_trip))
        .scalar("Выработка второй ездки (Qₑ₂), т", num(shift.tonnage_second_trip))
        .scalar("Выработка за оборот (Qₒ), т", num(shift.tonnage_per_cycle))
        .scalar("Тонно-километры первой ездки (Pₑ₁), ткм", num(shift.ton_km_first_trip))
        .scalar("Тонно-километры второй ездки (Pₑ₂), ткм", num(shift.ton_km_second_trip))
        .scalar("Тонно-километры за оборот (Pₒ), ткм", num(shift.ton_km_per_cycle))
        .scalar("Теоретическое число оборотов (Zₒ = Tₙ / tₒ)", num(decision.theoretical))
        .scalar("Целое число оборотов [Tₙ / tₒ], шт", count(decision.whole))
        .scalar("Остаток времени после целых оборотов (ΔTₙ), ч", num(decision.delta_time))
        .scalar("Необходимое время дополнительной ездки (tₑₙ), ч", num(decision.required_time))
        .scalar("Решение о дополнительной ездке", decision.verdict())
        .scalar("Число ездок на l_g₁ (Zₑ₁), шт", count(shift.trips_first))
        .scalar("Число ездок на l_g₂ (Zₑ₂), шт", count(shift.trips_second))
        .scalar("Выработка в тоннах за смену (Qₙ), т", num(shift.total_tonnage))
        .scalar("Тонно-километры за смену (Pₙ), ткм", num(shift.total_ton_km))
        .scalar("Общий пробег за смену (Lₒбщ), км", num(shift.total_distance))
        .scalar("Фактическое время в наряде (Tₙ факт), ч", num(shift.actual_shift_time))
        .scalar("Коэффициент использования пробега за любую ездку (βₑ)", format_number(1.0, 0))
        .scalar("Коэффициент использования пробега за оборот (βₒ)", format_number(1.0, 0))
        .scalar("Коэффициент использования пробега за день (βд)", beta(shift.beta_day));
    report
}

pub fn ring_route_report(values: &InputValues) -> Report {
    let result = ring_route(&RingInput::from_values(values));
    let shift = &result.shift;
    let decision = &shift.decision;
    // Half turnarounds show as x,5
    let turns_display = round(shift.actual_turns * 2.0, 0) / 2.0;

    let mut report = Report::new(ids::RING_ROUTE);
    report
        .scalar("Длина маршрута (lₘ = l_g₁ + lₓ₁ + l_g₂ + lₓ₂), км", num(shift.route_length))
        .scalar("Время первой ездки (tₑ₁), ч", num(shift.first_trip_time))
        .scalar("Время второй ездки (tₑ₂), ч", num(shift.second_trip_time))
        .scalar("Время оборота (tₒ), ч", num(shift.cycle_time))
        .scalar("Выработка первой ездки (Qₑ₁), т", num(shift.tonnage_first_trip))
        .scalar("Выработка второй ездки (Qₑ₂), т", num(shift.tonnage_second_trip))
        .scalar("Выработка за оборот (Qₒ), т", num(shift.tonnage_per_cycle))
        .scalar("Тонно-километры первой ездки (Pₑ₁), ткм", num(shift.ton_km_first_trip))
        .scalar("Тонно-километры второй ездки (Pₑ₂), ткм", num(shift.ton_km_second_trip))
        .scalar("Тонно-километры за оборот (Pₒ), ткм", num(shift.ton_km_per_cycle))
        .scalar("Теоретическое число оборотов (Tₙ / tₒ)", num(decision.theoretical))
        .scalar("Целое число оборотов [Tₙ / tₒ], шт", count(decision.whole))
        .scalar("Фактическое число оборотов (Zₒ факт), шт", format_number(turns_display, 1))
        .scalar("Остаток времени после целых оборотов (ΔTₙ), ч", num(decision.delta_time))
        .scalar("Необходимое время второй ездки (tₑₙ₂), ч", num(decision.required_time))
        .scalar("Решение о дополнительной ездке", decision.verdict())
        .scalar("Число ездок на l_g₁ (Zₑ₁), шт", count(shift.trips_first))
        .scalar("Число ездок на l_g₂ (Zₑ₂), шт", count(shift.trips_second))
        .scalar("Выработка в тоннах за смену (Qₙ), т", num(shift.total_tonnage))
        .scalar("Тонно-километры за смену (Pₙ), ткм", num(shift.total_ton_km))
        .scalar("Общий пробег за смену (Lₒбщ), км", num(shift.total_distance))
        .scalar("Фактическое время в наряде (Tₙ факт), ч", num(shift.actual_shift_time))
        .scalar("Коэффициент использования пробега первой ездки (βₑ₁)", beta(result.beta_trip1))
        .scalar("Коэффициент использования пробега второй ездки (βₑ₂)", beta(result.beta_trip2))
        .scalar("Коэффициент использования пробега за оборот (βₒ)", beta(result.beta_cycle))
        .scalar("Коэффициент использования пробега за день (βд)", beta(shift.beta_day));
    report
}

pub fn delivery_small_shipments(values: &InputValues) -> Report {
    let trip = small_shipments(&SmallShipmentsInput::from_values(values));

    let mut report = Report::new(ids::DELIVERY_SMALL_SHIPMENTS);
    report
        .scalar("Длина маршрута lₘ = l_g₁ + l_g₂ + l_g₃ + lₓ, км", num(trip.route_length))
        .scalar("Время ездки (tₑₒ), ч", num(trip.trip_time))
        .scalar("Выработка за ездку Qₑ, т", num(trip.effective_load))
        .scalar("Выработка в тонно-километрах за ездку (Pₑ), т·км", num(trip.ton_km))
        .scalar("Tн факт (фактическое время в наряде), ч", num(trip.trip_time))
        .scalar(
            "Фактическая загрузка из пункта A (q_A = q_B + q_C + q_D), т",
            num(trip.loaded_at_origin),
        )
        .scalar("Проверка баланса груза (q_A / q·γ)", num(trip.load_balance));
    report
}

const LEG_NAMES: [&str; 4] = ["A→B", "B→C", "C→D", "D→A"];

pub fn mixed_delivery_collection(values: &InputValues) -> Report {
    let turn = mixed_route(&MixedRouteInput::from_values(values));

    let mut legs = ReportTable::new(&[("leg", "плечо"), ("load", "загрузка")]);
    for (name, load) in LEG_NAMES.iter().zip(turn.leg_loads) {
        legs.push_row([name.to_string(), num(load)]);
    }

    let mut report = Report::new(ids::MIXED_DELIVERY_COLLECTION);
    report
        .scalar("Длина маршрута lₘ = l_g₁ + l_g₂ + l_g₃ + l_g₄, км", num(turn.route_length))
        .scalar(
            "Время оборота tₒ,д = (lₘ/Vₜ) + tₚₚᵥ + tₛₚᵥ + t_z·(K−2), ч",
            num(turn.time_per_turn),
        )
        .scalar("Выработка за оборот Qₒ,д = q_A + |−q_A|, т", num(turn.tonnage_per_turn))
        .scalar("Тонно-километры за оборот Pₒ,д, т·км", num(turn.ton_km))
        .scalar("Tн факт (фактическое время в наряде), ч", num(turn.time_per_turn))
        .scalar(
            "Доставлено всего (q_B_need + q_C_need + q_D_need), т",
            num(turn.total_delivered),
        )
        .scalar("Собрано всего (q_B_pick + q_C_pick + q_D_pick), т", num(turn.total_picked))
        .table("Загрузка на плечах (после операций)", legs)
        .scalar(
            "Соотношение полезной массы к грузоподъёмности (q_A / q)",
            num(turn.payload_ratio),
        );
    report
}
