//! Labelled calculation output
//!
//! A report is an ordered list of entries; each value is either a
//! preformatted scalar or a small table of per-slot rows.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A table of rows keyed by column id; `headers[n]` labels `columns[n]`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReportTable {
    pub headers: Vec<String>,
    pub columns: Vec<String>,
    pub rows: Vec<BTreeMap<String, String>>,
}

impl ReportTable {
    pub fn new(columns: &[(&str, &str)]) -> Self {
        Self {
            headers: columns.iter().map(|(_, header)| header.to_string()).collect(),
            columns: columns.iter().map(|(column, _)| column.to_string()).collect(),
            rows: Vec::new(),
        }
    }

    /// Append a row; cells are matched to `columns` by position
    pub fn push_row<I, S>(&mut self, cells: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let row = self
            .columns
            .iter()
            .cloned()
            .zip(cells.into_iter().map(Into::into))
            .collect();
        self.rows.push(row);
    }

    /// Cells of a row in column order; missing cells render empty
    pub fn row_cells(&self, index: usize) -> Vec<&str> {
        let Some(row) = self.rows.get(index) else {
            return Vec::new();
        };
        self.columns
            .iter()
            .map(|column| row.get(column).map(String::as_str).unwrap_or(""))
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ReportValue {
    Scalar { value: String },
    Table(ReportTable),
}

impl ReportValue {
    pub fn as_scalar(&self) -> Option<&str> {
        match self {
            ReportValue::Scalar { value } => Some(value),
            ReportValue::Table(_) => None,
        }
    }

    pub fn as_table(&self) -> Option<&ReportTable> {
        match self {
            ReportValue::Table(table) => Some(table),
            ReportValue::Scalar { .. } => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportEntry {
    pub label: String,
    pub value: ReportValue,
}

/// Output of one calculator run
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub method: String,
    pub entries: Vec<ReportEntry>,
}

impl Report {
    pub fn new(method: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            entries: Vec::new(),
        }
    }

    pub fn scalar(&mut self, label: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.entries.push(ReportEntry {
            label: label.into(),
            value: ReportValue::Scalar {
                value: value.into(),
            },
        });
        self
    }

    pub fn table(&mut self, label: impl Into<String>, table: ReportTable) -> &mut Self {
        self.entries.push(ReportEntry {
            label: label.into(),
            value: ReportValue::Table(table),
        });
        self
    }

    pub fn get(&self, label: &str) -> Option<&ReportValue> {
        self.entries
            .iter()
            .find(|entry| entry.label == label)
            .map(|entry| &entry.value)
    }

    /// Scalar value by label, if the entry exists and is a scalar
    pub fn scalar_value(&self, label: &str) -> Option<&str> {
        self.get(label).and_then(ReportValue::as_scalar)
    }

    pub fn tables(&self) -> impl Iterator<Item = (&str, &ReportTable)> {
        self.entries.iter().filter_map(|entry| {
            entry
                .value
                .as_table()
                .map(|table| (entry.label.as_str(), table))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entries_keep_insertion_order() {
        let mut report = Report::new("demo");
        report.scalar("b", "2").scalar("a", "1");
        let labels: Vec<_> = report.entries.iter().map(|e| e.label.as_str()).collect();
        assert_eq!(labels, vec!["b", "a"]);
        assert_eq!(report.scalar_value("a"), Some("1"));
    }

    #[test]
    fn test_table_rows_follow_columns() {
        let mut table = ReportTable::new(&[("index", "i"), ("trips", "Z")]);
        table.push_row(["1", "7"]);
        assert_eq!(table.headers, vec!["i", "Z"]);
        assert_eq!(table.row_cells(0), vec!["1", "7"]);
        assert!(table.row_cells(3).is_empty());
    }

    #[test]
    fn test_value_serializes_with_type_tag() {
        let value = ReportValue::Scalar {
            value: "1,00".to_string(),
        };
        let json = serde_json::to_string(&value).unwrap();
        assert_eq!(json, r#"{"type":"scalar","value":"1,00"}"#);

        let table = ReportValue::Table(ReportTable::new(&[("index", "i")]));
        let json = serde_json::to_value(&table).unwrap();
        assert_eq!(json["type"], "table");
        assert_eq!(json["columns"][0], "index");
    }
}
