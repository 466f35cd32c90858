//! Method inputs from files and `name=value` arguments

use std::fs;
use std::path::Path;

use haulcalc_domain::model::InputValues;
use haulcalc_domain::numeric::RawValue;
use haulcalc_types::{Error, InputError, Result};

use crate::FileFormat;

/// Load a flat table of inputs from a TOML or JSON file
pub fn load_input_values(path: &Path) -> Result<InputValues> {
    if !path.exists() {
        return Err(Error::FileNotFound(path.display().to_string()));
    }
    let format = FileFormat::from_path(path)?;
    let content = fs::read_to_string(path)?;
    let values = parse_input_values(&content, format, &path.display().to_string())?;
    tracing::debug!(path = %path.display(), count = values.len(), "loaded input values");
    Ok(values)
}

/// Parse a flat table; `source` names the origin in errors
pub fn parse_input_values(content: &str, format: FileFormat, source: &str) -> Result<InputValues> {
    match format {
        FileFormat::Toml => {
            let table: toml::Table = content.parse()?;
            table
                .into_iter()
                .map(|(name, value)| -> Result<(String, RawValue)> {
                    let raw = match value {
                        toml::Value::Integer(number) => RawValue::Number(number as f64),
                        toml::Value::Float(number) => RawValue::Number(number),
                        toml::Value::String(text) => RawValue::Text(text),
                        _ => return Err(InputError::UnsupportedValue { name }.into()),
                    };
                    Ok((name, raw))
                })
                .collect()
        }
        FileFormat::Json => {
            let value: serde_json::Value = serde_json::from_str(content)?;
            let serde_json::Value::Object(object) = value else {
                return Err(InputError::NotATable(source.to_string()).into());
            };
            object
                .into_iter()
                .map(|(name, value)| -> Result<(String, RawValue)> {
                    let raw = match value {
                        serde_json::Value::Number(number) => {
                            RawValue::Number(number.as_f64().unwrap_or(0.0))
                        }
                        serde_json::Value::String(text) => RawValue::Text(text),
                        _ => return Err(InputError::UnsupportedValue { name }.into()),
                    };
                    Ok((name, raw))
                })
                .collect()
        }
    }
}

/// Split a `name=value` argument. The value is kept as text and coerced
/// by the calculator, so `12,5` works as well as `12.5`.
pub fn parse_assignment(argument: &str) -> Result<(String, RawValue)> {
    let (name, value) = argument
        .split_once('=')
        .ok_or_else(|| InputError::MalformedAssignment(argument.to_string()))?;
    let name = name.trim();
    if name.is_empty() {
        return Err(InputError::MalformedAssignment(argument.to_string()).into());
    }
    Ok((name.to_string(), RawValue::Text(value.trim().to_string())))
}

/// Apply assignments on top of `values`, later ones winning
pub fn apply_assignments<'a, I>(values: &mut InputValues, assignments: I) -> Result<()>
where
    I: IntoIterator<Item = &'a str>,
{
    for argument in assignments {
        let (name, raw) = parse_assignment(argument)?;
        values.set(name, raw);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_toml_table() {
        let values = parse_input_values(
            "payload = 10\nloadFactor = 0.9\ntechnicalSpeed = \"25,5\"\n",
            FileFormat::Toml,
            "inline",
        )
        .unwrap();
        assert_eq!(values.number("payload"), 10.0);
        assert_eq!(values.number("loadFactor"), 0.9);
        assert_eq!(values.number("technicalSpeed"), 25.5);
    }

    #[test]
    fn test_parse_json_rejects_nested_values() {
        let err = parse_input_values(r#"{"payload": [1, 2]}"#, FileFormat::Json, "inline")
            .unwrap_err();
        assert!(matches!(
            err,
            Error::Input(InputError::UnsupportedValue { ref name }) if name == "payload"
        ));

        let err = parse_input_values("[1, 2]", FileFormat::Json, "inline").unwrap_err();
        assert!(matches!(err, Error::Input(InputError::NotATable(_))));
    }

    #[test]
    fn test_parse_assignment() {
        let (name, raw) = parse_assignment(" dutyTime = 9,5 ").unwrap();
        assert_eq!(name, "dutyTime");
        assert_eq!(haulcalc_domain::numeric::to_number(&raw), 9.5);

        assert!(parse_assignment("dutyTime").is_err());
        assert!(parse_assignment("=5").is_err());
    }

    #[test]
    fn test_later_assignments_win() {
        let mut values = InputValues::new().with("payload", 5.0);
        apply_assignments(&mut values, ["payload=7", "payload=8"]).unwrap();
        assert_eq!(values.number("payload"), 8.0);
    }
}
