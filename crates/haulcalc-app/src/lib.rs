//! Application service layer - method catalogue, reports, config, export

pub mod app;
pub mod catalogue;
pub mod config;
pub mod export;
pub mod reports;
pub mod repository;
