//! Group scheduling reports

use haulcalc_domain::model::{
    GroupSlot, InputValues, ShiftTotals, SlotResult, Throughput, MAX_SLOTS,
};
use haulcalc_domain::service::fleet::{
    empty_return, loaded_return, partial_loaded_return, ring_route, EmptyReturnFleetInput,
    LoadedReturnFleetInput, PartialLoadedFleetInput, RingFleetInput, TwoLegFleet,
};
use haulcalc_types::{Report, ReportTable};
use tracing::warn;

use super::{count, num};
use crate::catalogue::ids;

const VEHICLE_TABLE: &str = "Показатели по автомобилям";
const GROUP_TABLE: &str = "Расчёт для подачи в два пункта (j группы)";

fn vehicle_table(vehicles: &[SlotResult]) -> ReportTable {
    let mut table = ReportTable::new(&[
        ("index", "i"),
        ("trips", "Число ездок Zₑᵢ, шт"),
        ("tonnage", "Выработка Qнᵢ, т"),
        ("tonneKm", "Тонно-километры Pнᵢ, ткм"),
        ("totalDistance", "Общий пробег Lобщᵢ, км"),
        ("actualDutyTime", "Фактическое время в наряде Tнᵢ факт, ч"),
    ]);
    for vehicle in vehicles {
        table.push_row([
            count(vehicle.index),
            num(f64::from(vehicle.trips)),
            num(vehicle.tonnage),
            num(vehicle.ton_km),
            num(vehicle.total_distance),
            num(vehicle.actual_duty_time),
        ]);
    }
    table
}

fn group_table(groups: &[GroupSlot]) -> ReportTable {
    let mut table = ReportTable::new(&[
        ("index", "j"),
        ("availableTime", "Tмj, ч"),
        ("intTurnovers", "Zоj = INT(Tмj/tо)"),
        ("remainder", "ΔTнj, ч"),
        ("tripsOnLeg1", "Zе₁"),
        ("tripsOnLeg2", "Zе₂"),
        ("totalTrips", "Zе"),
        ("tonnage", "Qнj, т"),
        ("tonneKm", "Pнj, ткм"),
    ]);
    for group in groups {
        table.push_row([
            count(group.index),
            num(group.schedule.available_time),
            num(f64::from(group.schedule.int_turnovers)),
            num(group.schedule.remainder),
            num(f64::from(group.trips_leg1)),
            num(f64::from(group.trips_leg2)),
            num(f64::from(group.total_trips)),
            num(group.tonnage),
            num(group.ton_km),
        ]);
    }
    table
}

fn warn_if_capped(id: &str, what: &str, throughput: &Throughput) {
    if throughput.is_capped() {
        warn!(
            method = id,
            raw = throughput.raw,
            limit = MAX_SLOTS,
            "{} throughput cut to the slot limit",
            what
        );
    }
}

fn push_totals(report: &mut Report, totals: &ShiftTotals) {
    report
        .scalar("Суммарная выработка Qн = Σ Qᵢ, т", num(totals.tonnage))
        .scalar("Суммарные тонно-километры Pн = Σ Pᵢ, ткм", num(totals.ton_km))
        .scalar("Суммарный пробег Lобщ = Σ Lобщᵢ, км", num(totals.distance))
        .scalar(
            "Суммарное фактическое время Tн факт = Σ Tн фактᵢ, ч",
            num(totals.duty_time),
        );
}

pub fn pendulum_empty_return(values: &InputValues) -> Report {
    let fleet = empty_return(&EmptyReturnFleetInput::from_values(values));
    warn_if_capped(ids::FLEET_PENDULUM_EMPTY_RETURN, "vehicle", &fleet.throughput);

    let mut report = Report::new(ids::FLEET_PENDULUM_EMPTY_RETURN);
    report
        .scalar("Длина маршрута lм, км", num(fleet.route_length))
        .scalar("Время ездки tₑₒ, ч", num(fleet.trip_time))
        .scalar(
            "Пропускная способность Аэ′ (неокруглённо), авто",
            num(fleet.throughput.raw),
        )
        .scalar(
            "Принятое количество авто Аэ (округлено вниз), авто",
            count(fleet.throughput.accepted),
        )
        .scalar("Выработка за ездку Qₑₒ, т", num(fleet.payload_per_trip))
        .scalar("Тонно-километры за ездку Pₑₒ, ткм", num(fleet.ton_km_per_trip))
        .table(VEHICLE_TABLE, vehicle_table(&fleet.vehicles));
    push_totals(&mut report, &fleet.totals);
    report
}

/// Shared layout of the two-point routes; the ring labels per-trip output
/// separately because its legs may carry different loads.
fn two_leg_report(id: &str, fleet: &TwoLegFleet, split_payload: bool) -> Report {
    let timing = &fleet.timing;
    warn_if_capped(id, "group", &fleet.throughput_dual);
    let mut report = Report::new(id);
    report
        .scalar("Длина маршрута lм, км", num(timing.route_length))
        .scalar("Время первой ездки tе₁, ч", num(timing.trip_time1))
        .scalar("Время второй ездки tе₂, ч", num(timing.trip_time2))
        .scalar("Время оборота tо, ч", num(timing.turnaround_time))
        .scalar("Среднее время ездки tеср, ч", num(timing.avg_trip_time));
    if split_payload {
        report
            .scalar("Выработка за первую ездку Qе₁, т", num(timing.payload_per_trip1))
            .scalar("Выработка за вторую ездку Qе₂, т", num(timing.payload_per_trip2));
    } else {
        report.scalar("Выработка за ездку Qе, т", num(timing.payload_per_trip1));
    }
    report
        .scalar("Выработка за оборот Qо, т", num(timing.tonnage_per_turn()))
        .scalar("Тонно-километры за первую ездку Pе₁, ткм", num(timing.ton_km_trip1))
        .scalar("Тонно-километры за вторую ездку Pе₂, ткм", num(timing.ton_km_trip2))
        .scalar("Тонно-километры за оборот Pо, ткм", num(timing.ton_km_per_turn()))
        .scalar(
            "Пропускная способность Aэ′ (один пункт), авто",
            num(fleet.throughput_single.raw),
        )
        .scalar(
            "Принятое количество авто Aэ (один пункт), авто",
            count(fleet.throughput_single.accepted),
        )
        .scalar(
            "Пропускная способность Aэ′ (два пункта), группы",
            num(fleet.throughput_dual.raw),
        )
        .scalar(
            "Принятое число групп Aэ (два пункта), группы",
            count(fleet.throughput_dual.accepted),
        )
        .table(GROUP_TABLE, group_table(&fleet.groups))
        .table(VEHICLE_TABLE, vehicle_table(&fleet.vehicles));
    push_totals(&mut report, &fleet.totals);
    report
}

pub fn pendulum_partial_loaded_return(values: &InputValues) -> Report {
    let fleet = partial_loaded_return(&PartialLoadedFleetInput::from_values(values));
    two_leg_report(ids::FLEET_PENDULUM_PARTIAL_LOADED_RETURN, &fleet, false)
}

pub fn pendulum_loaded_return(values: &InputValues) -> Report {
    let fleet = loaded_return(&LoadedReturnFleetInput::from_values(values));
    two_leg_report(ids::FLEET_PENDULUM_LOADED_RETURN, &fleet, false)
}

pub fn ring_route_report(values: &InputValues) -> Report {
    let fleet = ring_route(&RingFleetInput::from_values(values));
    two_leg_report(ids::FLEET_RING_ROUTE, &fleet, true)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn partial_values() -> InputValues {
        InputValues::new()
            .with("payload", 10.0)
            .with("dutyTime", 10.0)
            .with("loadUnloadTime", 0.4)
            .with("loadedDistance1", 16.0)
            .with("loadedDistance2", 10.0)
            .with("zeroRun1", 13.0)
            .with("zeroRun2", 8.0)
            .with("zeroRun3", 6.0)
            .with("emptyDistance2", 5.0)
            .with("technicalSpeed", 25.0)
            .with("loadFactor", 1.0)
    }

    #[test]
    fn test_tiny_operation_time_stops_at_slot_limit() {
        let values = InputValues::new()
            .with("payload", 8.0)
            .with("loadFactor", 1.0)
            .with("loadUnloadTime", 0.4)
            .with("loadedDistance", 12.0)
            .with("emptyDistance", 12.0)
            .with("technicalSpeed", 25.0)
            .with("dutyTime", 8.0)
            .with("singleOperationTime", "0,000001");
        let report = pendulum_empty_return(&values);
        assert_eq!(
            report.scalar_value("Принятое количество авто Аэ (округлено вниз), авто"),
            Some("1000")
        );
        let (_, vehicles) = report.tables().next().unwrap();
        assert_eq!(vehicles.rows.len(), MAX_SLOTS as usize);
    }

    #[test]
    fn test_partial_loaded_tables() {
        let report = pendulum_partial_loaded_return(&partial_values());
        assert_eq!(report.method, "fleet-pendulum-partial-loaded-return");
        assert_eq!(report.scalar_value("Время оборота tо, ч"), Some("2,04"));
        assert_eq!(
            report.scalar_value("Принятое число групп Aэ (два пункта), группы"),
            Some("5")
        );

        let tables: Vec<_> = report.tables().collect();
        assert_eq!(tables.len(), 2);
        let (_, groups) = tables[0];
        let (_, vehicles) = tables[1];
        assert_eq!(groups.rows.len(), 5);
        assert_eq!(vehicles.rows.len(), 10);
        assert_eq!(groups.row_cells(0)[0], "1");
        assert_eq!(vehicles.row_cells(1)[4], "145,00");
        assert_eq!(vehicles.row_cells(2)[4], "133,00");
        assert_eq!(
            report.scalar_value("Суммарный пробег Lобщ = Σ Lобщᵢ, км"),
            Some("701,00")
        );
    }

    #[test]
    fn test_ring_splits_payload_lines() {
        let report = ring_route_report(&InputValues::new());
        assert!(report.scalar_value("Выработка за первую ездку Qе₁, т").is_some());
        assert!(report.scalar_value("Выработка за ездку Qе, т").is_none());
    }
}
