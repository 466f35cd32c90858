//! Flat name → value input mapping

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::numeric::{to_number, RawValue};

/// Parameters collected for one calculator run
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InputValues(BTreeMap<String, RawValue>);

impl InputValues {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, name: impl Into<String>, value: impl Into<RawValue>) -> &mut Self {
        self.0.insert(name.into(), value.into());
        self
    }

    pub fn with(mut self, name: impl Into<String>, value: impl Into<RawValue>) -> Self {
        self.set(name, value);
        self
    }

    /// Numeric value of `name`; missing or unparsable values are 0
    pub fn number(&self, name: &str) -> f64 {
        self.0.get(name).map(to_number).unwrap_or(0.0)
    }

    /// Text form of `name`; numbers are rendered back to text
    pub fn text(&self, name: &str) -> String {
        match self.0.get(name) {
            Some(RawValue::Text(text)) => text.clone(),
            Some(RawValue::Number(value)) => value.to_string(),
            None => String::new(),
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    /// Overlay `other` on top of these values
    pub fn merge(&mut self, other: InputValues) {
        self.0.extend(other.0);
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &RawValue)> {
        self.0.iter().map(|(name, value)| (name.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: Into<RawValue>> FromIterator<(K, V)> for InputValues {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self(
            iter.into_iter()
                .map(|(name, value)| (name.into(), value.into()))
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_value_is_zero() {
        let values = InputValues::new();
        assert_eq!(values.number("payload"), 0.0);
        assert_eq!(values.text("segmentData"), "");
    }

    #[test]
    fn test_mixed_values() {
        let values: InputValues = [
            ("payload", RawValue::from(10.0)),
            ("loadFactor", RawValue::from("0,9")),
        ]
        .into_iter()
        .collect();
        assert_eq!(values.number("payload"), 10.0);
        assert!((values.number("loadFactor") - 0.9).abs() < f64::EPSILON);
    }

    #[test]
    fn test_merge_overrides() {
        let mut base = InputValues::new().with("dutyTime", 10.0).with("payload", 5.0);
        base.merge(InputValues::new().with("payload", "7"));
        assert_eq!(base.number("payload"), 7.0);
        assert_eq!(base.number("dutyTime"), 10.0);
        assert_eq!(base.len(), 2);
    }

    #[test]
    fn test_deserialize_from_json_object() {
        let values: InputValues =
            serde_json::from_str(r#"{"payload": 10, "technicalSpeed": "25,5"}"#).unwrap();
        assert_eq!(values.number("payload"), 10.0);
        assert_eq!(values.number("technicalSpeed"), 25.5);
    }
}
