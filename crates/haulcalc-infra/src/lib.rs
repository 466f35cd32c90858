//! Infrastructure layer - input files, planning fixtures, CSV loaders

pub mod input_file;
pub mod persistence;
pub mod requests_csv;

use std::path::Path;

use haulcalc_types::{InputError, Result};

/// File formats accepted for inputs and fixtures
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    Toml,
    Json,
}

impl FileFormat {
    /// Pick the format from the file extension (case-insensitive)
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase())
            .unwrap_or_default();
        match extension.as_str() {
            "toml" => Ok(FileFormat::Toml),
            "json" => Ok(FileFormat::Json),
            _ => Err(InputError::UnsupportedFormat(path.display().to_string()).into()),
        }
    }
}
