//! Whole-cycle shift model over a list of driven segments
//!
//! A cycle is every segment driven once plus a fixed service time. Only
//! complete cycles count: the preparation time comes off the shift first
//! and the leftover after the last whole cycle is reported, not used.

use serde::{Deserialize, Serialize};

use crate::model::InputValues;
use crate::numeric::{parse_number, round, safe_divide};

pub const MIN_RING_SEGMENTS: u32 = 2;
pub const MAX_RING_SEGMENTS: u32 = 6;

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub distance: f64,
    pub speed: f64,
    /// Share of the segment driven loaded; 0 for an empty run
    pub load_factor: f64,
    pub payload: f64,
}

impl Segment {
    pub fn new(distance: f64, speed: f64, load_factor: f64, payload: f64) -> Self {
        Self {
            distance,
            speed,
            load_factor,
            payload,
        }
    }

    /// Ring filler for segments the operator left out
    pub fn padding() -> Self {
        Self::new(0.0, 1.0, 0.0, 0.0)
    }

    pub fn driving_time(&self) -> f64 {
        safe_divide(self.distance, self.speed)
    }

    pub fn is_loaded(&self) -> bool {
        self.load_factor > 0.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CycleMetrics {
    pub driving_time: f64,
    pub cycle_time: f64,
    pub effective_shift: f64,
    pub trips: u32,
    pub remaining_time: f64,
    pub distance_per_cycle: f64,
    pub total_distance: f64,
    pub loaded_distance: f64,
    pub total_tonnage: f64,
    pub total_ton_km: f64,
    pub actual_shift_time: f64,
    pub beta_trip: f64,
    pub beta_day: f64,
}

pub fn compute_cycle_metrics(
    segments: &[Segment],
    service_time: f64,
    shift_duration: f64,
    prep_time: f64,
) -> CycleMetrics {
    let driving_time: f64 = segments.iter().map(Segment::driving_time).sum();
    let cycle_time = driving_time + service_time;
    let effective_shift = (shift_duration - prep_time).max(0.0);
    let whole = safe_divide(effective_shift, cycle_time).max(0.0).floor();
    let remaining_time = effective_shift - whole * cycle_time;

    let distance_per_cycle: f64 = segments.iter().map(|s| s.distance).sum();
    let loaded_per_cycle: f64 = segments
        .iter()
        .filter(|s| s.is_loaded())
        .map(|s| s.distance * s.load_factor)
        .sum();
    let loaded_length: f64 = segments
        .iter()
        .filter(|s| s.is_loaded())
        .map(|s| s.distance)
        .sum();
    let tonnage_per_cycle: f64 = segments.iter().map(|s| s.payload).sum();
    let ton_km_per_cycle: f64 = segments.iter().map(|s| s.distance * s.payload).sum();

    let total_distance = whole * distance_per_cycle;
    let loaded_distance = whole * loaded_per_cycle;

    CycleMetrics {
        driving_time,
        cycle_time,
        effective_shift,
        trips: whole as u32,
        remaining_time,
        distance_per_cycle,
        total_distance,
        loaded_distance,
        total_tonnage: whole * tonnage_per_cycle,
        total_ton_km: whole * ton_km_per_cycle,
        actual_shift_time: prep_time + whole * cycle_time,
        beta_trip: safe_divide(loaded_length, distance_per_cycle),
        beta_day: safe_divide(loaded_distance, total_distance),
    }
}

/// Pendulum loaded in both directions
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct FullReturnInput {
    pub distance: f64,
    pub loaded_speed_forward: f64,
    pub loaded_speed_return: f64,
    pub loading_time: f64,
    pub unloading_time_forward: f64,
    pub unloading_time_return: f64,
    pub prep_time: f64,
    pub shift_duration: f64,
    pub payload_forward: f64,
    pub payload_return: f64,
}

impl FullReturnInput {
    pub fn from_values(values: &InputValues) -> Self {
        Self {
            distance: values.number("distance"),
            loaded_speed_forward: values.number("loadedSpeedForward"),
            loaded_speed_return: values.number("loadedSpeedReturn"),
            loading_time: values.number("loadingTime"),
            unloading_time_forward: values.number("unloadingTimeForward"),
            unloading_time_return: values.number("unloadingTimeReturn"),
            prep_time: values.number("prepTime"),
            shift_duration: values.number("shiftDuration"),
            payload_forward: values.number("payloadForward"),
            payload_return: values.number("payloadReturn"),
        }
    }

    pub fn service_time(&self) -> f64 {
        self.loading_time + self.unloading_time_forward + self.unloading_time_return
    }

    pub fn segments(&self) -> [Segment; 2] {
        [
            Segment::new(self.distance, self.loaded_speed_forward, 1.0, self.payload_forward),
            Segment::new(self.distance, self.loaded_speed_return, 1.0, self.payload_return),
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FullReturnShift {
    pub route_length: f64,
    pub forward_time: f64,
    pub return_time: f64,
    pub service_time: f64,
    pub metrics: CycleMetrics,
}

pub fn full_return(input: &FullReturnInput) -> FullReturnShift {
    let segments = input.segments();
    let service_time = input.service_time();
    FullReturnShift {
        route_length: 2.0 * input.distance,
        forward_time: segments[0].driving_time(),
        return_time: segments[1].driving_time(),
        service_time,
        metrics: compute_cycle_metrics(
            &segments,
            service_time,
            input.shift_duration,
            input.prep_time,
        ),
    }
}

/// Ring split into 2..=6 segments given as `"distance,speed,payload; …"`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RingSegmentsInput {
    pub segment_count: u32,
    pub shift_duration: f64,
    pub prep_time: f64,
    pub service_time: f64,
    pub total_payload: f64,
    pub segments: Vec<Segment>,
}

impl RingSegmentsInput {
    pub fn from_values(values: &InputValues) -> Self {
        let segment_count = clamp_segment_count(values.number("segmentCount"));
        Self {
            segment_count,
            shift_duration: values.number("shiftDuration"),
            prep_time: values.number("prepTime"),
            service_time: values.number("serviceTime"),
            total_payload: values.number("totalPayload"),
            segments: parse_segments(&values.text("segmentData"), segment_count),
        }
    }
}

pub fn clamp_segment_count(raw: f64) -> u32 {
    let rounded = round(raw, 0).clamp(f64::from(MIN_RING_SEGMENTS), f64::from(MAX_RING_SEGMENTS));
    rounded as u32
}

/// Parse up to `count` segments and pad the rest with empty filler.
/// A segment is loaded when its payload is positive.
pub fn parse_segments(data: &str, count: u32) -> Vec<Segment> {
    let count = count as usize;
    let mut segments: Vec<Segment> = data
        .split(';')
        .map(str::trim)
        .filter(|chunk| !chunk.is_empty())
        .take(count)
        .map(|chunk| {
            let mut fields = chunk.split(',').map(|field| parse_number(field.trim()));
            let distance = fields.next().unwrap_or(0.0);
            let speed = fields.next().unwrap_or(0.0);
            let payload = fields.next().unwrap_or(0.0);
            let load_factor = if payload > 0.0 { 1.0 } else { 0.0 };
            Segment::new(distance, speed, load_factor, payload)
        })
        .collect();
    segments.resize(count.max(segments.len()), Segment::padding());
    segments
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RingSegmentsShift {
    pub segment_count: u32,
    pub metrics: CycleMetrics,
}

/// Tonnage per turnaround is the operator's `totalPayload`, not the sum of
/// segment payloads.
pub fn ring_segments(input: &RingSegmentsInput) -> RingSegmentsShift {
    let mut metrics = compute_cycle_metrics(
        &input.segments,
        input.service_time,
        input.shift_duration,
        input.prep_time,
    );
    metrics.total_tonnage = f64::from(metrics.trips) * input.total_payload;
    RingSegmentsShift {
        segment_count: input.segment_count,
        metrics,
    }
}
