//! Staggered group scheduling
//!
//! Vehicles (or dispatch groups of two) leave one operation apart, so slot
//! `j` works `operation_time · (j − 1)` hours less than the first. Each slot
//! fits whole trips or turnarounds into its time, then spends the remainder
//! on one more trip if the route's rule allows it.

pub mod pendulum;
pub mod ring;

use serde::{Deserialize, Serialize};

use crate::model::{
    ExtraTrip, GroupSlot, ShiftBudget, ShiftTotals, SlotResult, Throughput, TurnoverSchedule,
};
use crate::numeric::safe_divide;

pub use pendulum::{
    empty_return, loaded_return, partial_loaded_return, EmptyReturnFleetInput,
    LoadedReturnFleetInput, PartialLoadedFleetInput,
};
pub use ring::{ring_route, RingFleetInput};

/// Explicit operation time, or half the handling time when none is given
pub fn operation_time_or_half(single_operation_time: f64, load_unload_time: f64) -> f64 {
    if single_operation_time != 0.0 {
        single_operation_time
    } else if load_unload_time > 0.0 {
        load_unload_time / 2.0
    } else {
        0.0
    }
}

/// Single-leg shift of every vehicle in the group
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SingleLegFleet {
    pub route_length: f64,
    pub trip_time: f64,
    pub essential_trip_time: f64,
    pub operation_time: f64,
    pub throughput: Throughput,
    pub payload_per_trip: f64,
    pub ton_km_per_trip: f64,
    pub vehicles: Vec<SlotResult>,
    pub totals: ShiftTotals,
}

/// Per-trip figures of a route driven as two trips per turnaround
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TwoLegTiming {
    pub route_length: f64,
    pub trip_time1: f64,
    pub trip_time2: f64,
    pub turnaround_time: f64,
    /// `tо / 2`; the dual-point throughput is taken over it
    pub avg_trip_time: f64,
    pub payload_per_trip1: f64,
    pub payload_per_trip2: f64,
    pub ton_km_trip1: f64,
    pub ton_km_trip2: f64,
}

impl TwoLegTiming {
    pub fn tonnage_per_turn(&self) -> f64 {
        self.payload_per_trip1 + self.payload_per_trip2
    }

    pub fn ton_km_per_turn(&self) -> f64 {
        self.ton_km_trip1 + self.ton_km_trip2
    }
}

/// Rules that differ between two-leg routes
pub trait TwoLegRoute {
    fn timing(&self) -> TwoLegTiming;

    fn technical_speed(&self) -> f64;

    fn load_unload_time(&self) -> f64;

    /// Which legs get one more trip out of the slot's remainder
    fn extra_trip(&self, timing: &TwoLegTiming, schedule: &TurnoverSchedule) -> ExtraTrip;

    /// Total distance of a slot given `turnover_distance = lм · Zо`.
    /// Odd slots start at the first loading point, even ones at the second.
    fn closing_distance(
        &self,
        starts_at_first_point: bool,
        whole_turn: bool,
        turnover_distance: f64,
    ) -> f64;
}

/// Two-leg group shift: dispatch groups plus their vehicles
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TwoLegFleet {
    pub timing: TwoLegTiming,
    pub operation_time: f64,
    pub throughput_single: Throughput,
    pub throughput_dual: Throughput,
    pub groups: Vec<GroupSlot>,
    pub vehicles: Vec<SlotResult>,
    pub totals: ShiftTotals,
}

/// Schedule `throughput_dual.accepted` groups on `route`
pub fn schedule_two_leg<R: TwoLegRoute>(
    route: &R,
    duty_time: f64,
    operation_time: f64,
) -> TwoLegFleet {
    let timing = route.timing();
    let throughput_single = Throughput::compute(timing.turnaround_time, operation_time);
    let throughput_dual = Throughput::compute(timing.avg_trip_time, operation_time);
    let budget = ShiftBudget::new(duty_time, operation_time);

    let groups: Vec<GroupSlot> = (1..=throughput_dual.accepted)
        .map(|index| schedule_group(route, &timing, &budget, index))
        .collect();
    let vehicles = vehicles_from_groups(&groups);
    let totals = groups.iter().collect();

    TwoLegFleet {
        timing,
        operation_time,
        throughput_single,
        throughput_dual,
        groups,
        vehicles,
        totals,
    }
}

fn schedule_group<R: TwoLegRoute>(
    route: &R,
    timing: &TwoLegTiming,
    budget: &ShiftBudget,
    index: u32,
) -> GroupSlot {
    let schedule = TurnoverSchedule::for_slot(budget, index, timing.turnaround_time);
    let extra = route.extra_trip(timing, &schedule);

    let trips_leg1 = schedule.int_turnovers + extra.first_leg();
    let trips_leg2 = schedule.int_turnovers + extra.second_leg();
    let total_trips = trips_leg1 + trips_leg2;

    let turnover_distance = timing.route_length * f64::from(schedule.int_turnovers);
    let starts_at_first_point = !index.is_multiple_of(2);
    let total_distance = route
        .closing_distance(starts_at_first_point, schedule.is_whole_turn(), turnover_distance)
        .max(0.0);

    GroupSlot {
        index,
        schedule,
        extra,
        trips_leg1,
        trips_leg2,
        total_trips,
        tonnage: timing.payload_per_trip1 * f64::from(trips_leg1)
            + timing.payload_per_trip2 * f64::from(trips_leg2),
        ton_km: timing.ton_km_trip1 * f64::from(trips_leg1)
            + timing.ton_km_trip2 * f64::from(trips_leg2),
        total_distance,
        actual_duty_time: safe_divide(total_distance, route.technical_speed())
            + f64::from(total_trips) * route.load_unload_time(),
    }
}

/// Both vehicles of group `j` are numbered `2j − 1` and `2j` and share
/// the group's figures
pub fn vehicles_from_groups(groups: &[GroupSlot]) -> Vec<SlotResult> {
    groups
        .iter()
        .flat_map(|group| {
            let base = (group.index - 1) * 2;
            (1..=2).map(move |offset| SlotResult {
                index: base + offset,
                trips: group.total_trips,
                tonnage: group.tonnage,
                ton_km: group.ton_km,
                total_distance: group.total_distance,
                actual_duty_time: group.actual_duty_time,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Fixed timing; the closing distance shifts by a different amount
    /// depending on whether the slot ends on a whole turnaround
    struct FixedRoute {
        avg_trip_time: f64,
        whole_offset: f64,
        partial_offset: f64,
    }

    impl TwoLegRoute for FixedRoute {
        fn timing(&self) -> TwoLegTiming {
            TwoLegTiming {
                route_length: 10.0,
                trip_time1: 1.0,
                trip_time2: 1.0,
                turnaround_time: 2.0,
                avg_trip_time: self.avg_trip_time,
                payload_per_trip1: 8.0,
                payload_per_trip2: 6.0,
                ton_km_trip1: 40.0,
                ton_km_trip2: 30.0,
            }
        }

        fn technical_speed(&self) -> f64 {
            25.0
        }

        fn load_unload_time(&self) -> f64 {
            0.3
        }

        fn extra_trip(&self, _timing: &TwoLegTiming, _schedule: &TurnoverSchedule) -> ExtraTrip {
            ExtraTrip::None
        }

        fn closing_distance(
            &self,
            _starts_at_first_point: bool,
            whole_turn: bool,
            turnover_distance: f64,
        ) -> f64 {
            if whole_turn {
                turnover_distance + self.whole_offset
            } else {
                turnover_distance + self.partial_offset
            }
        }
    }

    #[test]
    fn test_closing_distance_follows_whole_turn() {
        let route = FixedRoute {
            avg_trip_time: 1.0,
            whole_offset: 0.0,
            partial_offset: 7.0,
        };

        let fleet = schedule_two_leg(&route, 6.0 + 1e-9, 0.6);
        assert_eq!(fleet.groups.len(), 1);
        assert_eq!(fleet.groups[0].schedule.int_turnovers, 3);
        assert!(fleet.groups[0].schedule.is_whole_turn());
        assert_eq!(fleet.groups[0].total_distance, 30.0);

        let fleet = schedule_two_leg(&route, 6.0 + 2e-6, 0.6);
        assert_eq!(fleet.groups[0].schedule.int_turnovers, 3);
        assert!(!fleet.groups[0].schedule.is_whole_turn());
        assert_eq!(fleet.groups[0].total_distance, 37.0);
    }

    #[test]
    fn test_late_groups_run_dry() {
        let route = FixedRoute {
            avg_trip_time: 4.0,
            whole_offset: -5.0,
            partial_offset: 0.0,
        };
        let fleet = schedule_two_leg(&route, 3.1, 0.25);
        assert_eq!(fleet.groups.len(), 16);
        assert_eq!(fleet.groups[0].schedule.int_turnovers, 1);

        let mut previous = u32::MAX;
        for group in &fleet.groups {
            assert!(group.schedule.int_turnovers <= previous, "group {}", group.index);
            assert!(group.total_distance >= 0.0, "group {}", group.index);
            previous = group.schedule.int_turnovers;
        }
        for group in fleet.groups.iter().filter(|g| g.index >= 14) {
            assert!(group.schedule.available_time < 0.0);
            assert_eq!(group.total_trips, 0);
            assert_eq!(group.tonnage, 0.0);
            assert_eq!(group.total_distance, 0.0);
        }
        assert_eq!(fleet.vehicles.len(), 32);
    }

    #[test]
    fn test_operation_time_fallback() {
        assert_eq!(operation_time_or_half(0.1, 0.2), 0.1);
        assert_eq!(operation_time_or_half(0.0, 0.4), 0.2);
        assert_eq!(operation_time_or_half(0.0, 0.0), 0.0);
        assert_eq!(operation_time_or_half(-0.5, 0.4), -0.5);
    }

    #[test]
    fn test_vehicle_numbering() {
        let schedule = TurnoverSchedule {
            available_time: 8.0,
            raw_turnovers: 4.0,
            int_turnovers: 4,
            remainder: 0.0,
        };
        let group = |index| GroupSlot {
            index,
            schedule,
            extra: ExtraTrip::None,
            trips_leg1: 4,
            trips_leg2: 4,
            total_trips: 8,
            tonnage: f64::from(index),
            ton_km: 0.0,
            total_distance: 0.0,
            actual_duty_time: 0.0,
        };
        let vehicles = vehicles_from_groups(&[group(1), group(2)]);
        let indexes: Vec<u32> = vehicles.iter().map(|v| v.index).collect();
        assert_eq!(indexes, vec![1, 2, 3, 4]);
        assert_eq!(vehicles[2].tonnage, 2.0);
        assert_eq!(vehicles[3].tonnage, 2.0);
    }
}
