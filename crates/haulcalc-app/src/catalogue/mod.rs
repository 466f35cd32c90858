//! Method catalogue
//!
//! Every calculator is registered once with its form fields and a report
//! builder. Single-vehicle methods come first, then group methods.

mod fleet;
mod single;

use serde::Serialize;
use tracing::{debug, warn};

use haulcalc_domain::model::InputValues;
use haulcalc_types::{Error, MethodMode, Report, Result};

pub use fleet::FLEET_METHODS;
pub use single::SINGLE_METHODS;

/// Catalogue ids
pub mod ids {
    pub const PENDULUM_EMPTY_RETURN: &str = "pendulum-empty-return";
    pub const PENDULUM_PARTIAL_LOADED: &str = "pendulum-partial-loaded";
    pub const PENDULUM_FULL_RETURN: &str = "pendulum-full-return";
    pub const PENDULUM_UNEQUAL_LOAD: &str = "pendulum-unequal-load";
    pub const RING_ROUTE: &str = "ring-route";
    pub const RING_SEGMENTS: &str = "ring-segments";
    pub const DELIVERY_SMALL_SHIPMENTS: &str = "delivery-route-small-shipments";
    pub const MIXED_DELIVERY_COLLECTION: &str = "mixed-delivery-collection-route";

    pub const FLEET_PENDULUM_EMPTY_RETURN: &str = "fleet-pendulum-empty-return";
    pub const FLEET_PENDULUM_PARTIAL_LOADED_RETURN: &str = "fleet-pendulum-partial-loaded-return";
    pub const FLEET_PENDULUM_LOADED_RETURN: &str = "fleet-pendulum-loaded-return";
    pub const FLEET_RING_ROUTE: &str = "fleet-ring-route";
    pub const FLEET_SHIFT_BALANCE: &str = "fleet-shift-balance";
    pub const FLEET_UTILIZATION: &str = "fleet-utilization";
    pub const FLEET_MULTI_ROUTE: &str = "fleet-multi-route";
    pub const FLEET_TIME_BALANCE: &str = "fleet-time-balance";
    pub const FLEET_CAPACITY: &str = "fleet-capacity";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    Number,
    Text,
}

/// One form input of a calculator
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FieldSpec {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub step: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<&'static str>,
}

impl FieldSpec {
    /// Non-negative number with a 0.1 step, the most common form field
    pub const fn number(name: &'static str, label: &'static str) -> Self {
        Self {
            name,
            label,
            kind: FieldKind::Number,
            min: Some(0.0),
            max: None,
            step: Some(0.1),
            default: None,
            placeholder: None,
        }
    }

    pub const fn text(name: &'static str, label: &'static str) -> Self {
        Self {
            name,
            label,
            kind: FieldKind::Text,
            min: None,
            max: None,
            step: None,
            default: None,
            placeholder: None,
        }
    }

    /// Fraction in `0..=1` with a 0.01 step
    pub const fn ratio(name: &'static str, label: &'static str) -> Self {
        Self::number(name, label).max(1.0).step(0.01)
    }

    pub const fn min(mut self, min: f64) -> Self {
        self.min = Some(min);
        self
    }

    pub const fn max(mut self, max: f64) -> Self {
        self.max = Some(max);
        self
    }

    pub const fn step(mut self, step: f64) -> Self {
        self.step = Some(step);
        self
    }

    pub const fn default(mut self, default: f64) -> Self {
        self.default = Some(default);
        self
    }

    pub const fn placeholder(mut self, placeholder: &'static str) -> Self {
        self.placeholder = Some(placeholder);
        self
    }
}

pub type Calculate = fn(&InputValues) -> Report;

/// A registered calculator
#[derive(Serialize)]
pub struct MethodSpec {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub mode: MethodMode,
    pub inputs: &'static [FieldSpec],
    #[serde(skip)]
    pub calculate: Calculate,
}

impl MethodSpec {
    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.inputs.iter().find(|field| field.name == name)
    }

    /// Values of every field that declares a default
    pub fn default_values(&self) -> InputValues {
        self.inputs
            .iter()
            .filter_map(|field| field.default.map(|value| (field.name, value)))
            .collect()
    }
}

impl std::fmt::Debug for MethodSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MethodSpec")
            .field("id", &self.id)
            .field("mode", &self.mode)
            .field("inputs", &self.inputs.len())
            .finish()
    }
}

pub fn methods() -> impl Iterator<Item = &'static MethodSpec> {
    SINGLE_METHODS.iter().chain(FLEET_METHODS.iter())
}

pub fn methods_by_mode(mode: MethodMode) -> impl Iterator<Item = &'static MethodSpec> {
    methods().filter(move |method| method.mode == mode)
}

pub fn find_method(id: &str) -> Result<&'static MethodSpec> {
    methods()
        .find(|method| method.id == id)
        .ok_or_else(|| Error::UnknownMethod(id.to_string()))
}

/// Run calculator `id` with `values` laid over its field defaults
pub fn run(id: &str, values: &InputValues) -> Result<Report> {
    let method = find_method(id)?;

    for (name, _) in values.iter() {
        if method.field(name).is_none() {
            warn!(method = id, field = name, "Ignoring input the method does not use");
        }
    }

    let mut inputs = method.default_values();
    inputs.merge(values.clone());
    debug!(method = id, inputs = inputs.len(), "Running calculator");

    let report = (method.calculate)(&inputs);
    debug!(method = id, entries = report.entries.len(), "Calculator finished");
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_ids_are_unique() {
        let mut seen = HashSet::new();
        for method in methods() {
            assert!(seen.insert(method.id), "duplicate id {}", method.id);
        }
        assert_eq!(seen.len(), 17);
    }

    #[test]
    fn test_single_methods_listed_first() {
        let modes: Vec<_> = methods().map(|method| method.mode).collect();
        let first_fleet = modes.iter().position(|mode| *mode == MethodMode::Fleet).unwrap();
        assert!(modes[first_fleet..].iter().all(|mode| *mode == MethodMode::Fleet));
        assert_eq!(methods_by_mode(MethodMode::Single).count(), 8);
    }

    #[test]
    fn test_every_report_carries_its_id() {
        for method in methods() {
            let report = run(method.id, &InputValues::new()).unwrap();
            assert_eq!(report.method, method.id);
            assert!(!report.entries.is_empty());
        }
    }

    #[test]
    fn test_unknown_method() {
        let err = find_method("no-such-method").unwrap_err();
        assert!(matches!(err, Error::UnknownMethod(ref id) if id == "no-such-method"));
    }

    #[test]
    fn test_defaults_fill_missing_inputs() {
        let method = find_method(ids::RING_SEGMENTS).unwrap();
        let defaults = method.default_values();
        assert_eq!(defaults.number("segmentCount"), 4.0);
        assert_eq!(defaults.len(), 1);
    }

    #[test]
    fn test_explicit_value_overrides_default() {
        let values = InputValues::new().with("segmentCount", 3.0);
        let report = run(ids::RING_SEGMENTS, &values).unwrap();
        assert_eq!(report.scalar_value("Число участков кольца, шт"), Some("3"));
    }

    #[test]
    fn test_fleet_defaults_reproduce_reference_shift() {
        let report = run(ids::FLEET_PENDULUM_PARTIAL_LOADED_RETURN, &InputValues::new()).unwrap();
        assert_eq!(
            report.scalar_value("Суммарная выработка Qн = Σ Qᵢ, т"),
            Some("450,00")
        );
    }
}
