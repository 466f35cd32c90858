//! Aggregate group reports over shift averages

use haulcalc_domain::model::InputValues;
use haulcalc_domain::numeric::format_number;
use haulcalc_domain::service::fleet_summary::{
    capacity, multi_route, shift_balance, time_balance, utilization, FleetSummaryInput,
};
use haulcalc_types::Report;

use super::{beta, num, whole};
use crate::catalogue::ids;

pub fn shift_balance_report(values: &InputValues) -> Report {
    let balance = shift_balance(&FleetSummaryInput::from_values(values));
    let mut report = Report::new(ids::FLEET_SHIFT_BALANCE);
    report
        .scalar("Всего ездок за смену, шт", format_number(balance.total_trips, 1))
        .scalar("Общий объём перевозок, т", num(balance.total_payload))
        .scalar("Суммарный пробег группы, км", num(balance.total_distance));
    report
}

pub fn utilization_report(values: &InputValues) -> Report {
    let usage = utilization(&FleetSummaryInput::from_values(values));
    let mut report = Report::new(ids::FLEET_UTILIZATION);
    report
        .scalar("Эффективное сменное время, ч", num(usage.effective_time))
        .scalar("Готовность парка (доля)", beta(usage.readiness))
        .scalar("Коэффициент использования времени", beta(usage.utilization))
        .scalar("Время работы всего парка, чел·ч", num(usage.vehicle_hours));
    report
}

pub fn multi_route_report(values: &InputValues) -> Report {
    let legs = multi_route(&FleetSummaryInput::from_values(values));
    let mut report = Report::new(ids::FLEET_MULTI_ROUTE);
    report
        .scalar("Средняя загрузка на ездку, т", num(legs.average_payload))
        .scalar("Условная длина плеча, км", num(legs.weighted_distance))
        .scalar("Суточный объём перевозок, т", num(legs.total_payload));
    report
}

pub fn time_balance_report(values: &InputValues) -> Report {
    let balance = time_balance(&FleetSummaryInput::from_values(values));
    let mut report = Report::new(ids::FLEET_TIME_BALANCE);
    report
        .scalar("Суммарное время, ч", num(balance.total_time))
        .scalar("В движении, доля смены", beta(balance.driving_share))
        .scalar("На обслуживании, доля смены", beta(balance.service_share))
        .scalar("Простой, доля смены", beta(balance.idle_share))
        .scalar("Затраты времени группы, чел·ч", num(balance.vehicle_hours));
    report
}

pub fn capacity_report(values: &InputValues) -> Report {
    let fleet = capacity(&FleetSummaryInput::from_values(values));
    let mut report = Report::new(ids::FLEET_CAPACITY);
    report
        .scalar("Ездок на машину за смену, шт", whole(fleet.trips_per_vehicle))
        .scalar("Всего ездок за смену, шт", whole(fleet.total_trips))
        .scalar("Загрузка на ездку, т", num(fleet.payload_per_trip))
        .scalar("Сменный объём перевозок, т", num(fleet.total_payload));
    report
}
