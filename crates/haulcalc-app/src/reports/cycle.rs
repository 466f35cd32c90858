//! Segment-cycle reports

use haulcalc_domain::model::InputValues;
use haulcalc_domain::service::cycle::{
    full_return, ring_segments, FullReturnInput, RingSegmentsInput,
};
use haulcalc_types::Report;

use super::{beta, count, num};
use crate::catalogue::ids;

pub fn pendulum_full_return(values: &InputValues) -> Report {
    let shift = full_return(&FullReturnInput::from_values(values));
    let metrics = &shift.metrics;

    let mut report = Report::new(ids::PENDULUM_FULL_RETURN);
    report
        .scalar("Длина маршрута (lₘ), км", num(shift.route_length))
        .scalar("Время гружёной ездки вперёд, ч", num(shift.forward_time))
        .scalar("Время гружёной ездки обратно, ч", num(shift.return_time))
        .scalar("Простои под грузовыми операциями, ч", num(shift.service_time))
        .scalar("Полное время оборота (tₒб), ч", num(metrics.cycle_time))
        .scalar("Эффективное сменное время, ч", num(metrics.effective_shift))
        .scalar("Выполнимое число ездок (Zₑ), шт", count(metrics.trips))
        .scalar("Остаток сменного времени (ΔTₙ), ч", num(metrics.remaining_time))
        .scalar("Общий пробег за смену (Lₒбщ), км", num(metrics.total_distance))
        .scalar("Выработка в тоннах за смену (Qₛ), т", num(metrics.total_tonnage))
        .scalar("Тонно-километровая работа (Wₜ), ткм", num(metrics.total_ton_km))
        .scalar("Коэффициент использования пробега за ездку (βₑ,ₒ)", beta(metrics.beta_trip))
        .scalar("Коэффициент использования пробега за день (βд)", beta(metrics.beta_day));
    report
}

pub fn ring_segments_report(values: &InputValues) -> Report {
    let shift = ring_segments(&RingSegmentsInput::from_values(values));
    let metrics = &shift.metrics;

    let mut report = Report::new(ids::RING_SEGMENTS);
    report
        .scalar("Число участков кольца, шт", count(shift.segment_count))
        .scalar("Суммарный пробег за оборот, км", num(metrics.distance_per_cycle))
        .scalar("Время движения за оборот, ч", num(metrics.driving_time))
        .scalar("Полное время оборота (tₒб), ч", num(metrics.cycle_time))
        .scalar("Эффективное сменное время, ч", num(metrics.effective_shift))
        .scalar("Выполнимое число оборотов (Zₒ), шт", count(metrics.trips))
        .scalar("Остаток сменного времени (ΔTₙ), ч", num(metrics.remaining_time))
        .scalar("Общий пробег за смену (Lₒбщ), км", num(metrics.total_distance))
        .scalar("Выработка в тоннах за смену (Qₛ), т", num(metrics.total_tonnage))
        .scalar("Тонно-километровая работа (Wₜ), ткм", num(metrics.total_ton_km))
        .scalar("Фактическое время в наряде (Tₙ факт), ч", num(metrics.actual_shift_time))
        .scalar("Коэффициент использования пробега за оборот (βₑ,ₒ)", beta(metrics.beta_trip))
        .scalar("Коэффициент использования пробега за день (βд)", beta(metrics.beta_day));
    report
}
