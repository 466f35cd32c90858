//! Error types for haulcalc
//!
//! Formula code never fails: degenerate numbers collapse to zero. These
//! errors only cover the surroundings (files, arguments, export).

use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration directory not found")]
    NotFound,

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Failed to save configuration: {0}")]
    SaveError(String),
}

/// Problems with user-supplied input files or arguments
#[derive(Debug, Error)]
pub enum InputError {
    #[error("Expected NAME=VALUE, got '{0}'")]
    MalformedAssignment(String),

    #[error("Unsupported input file extension: {0}")]
    UnsupportedFormat(String),

    #[error("Input value '{name}' must be a number or a string")]
    UnsupportedValue { name: String },

    #[error("Input file {0} must hold a flat table of values")]
    NotATable(String),

    #[error("No method given and no default method configured")]
    MissingMethod,
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Input error: {0}")]
    Input(#[from] InputError),

    #[error("Unknown method: {0}")]
    UnknownMethod(String),

    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Excel export error: {0}")]
    Excel(String),

    #[error("Planning failed: {0}")]
    PlanningFailed(String),
}

pub type Result<T> = std::result::Result<T, Error>;
