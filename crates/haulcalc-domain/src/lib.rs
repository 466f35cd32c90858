//! Haulage domain: numeric helpers, value models and calculation services

pub mod model;
pub mod numeric;
pub mod repository;
pub mod service;
