//! Report builders: run a calculator and label its figures
//!
//! Labels keep the wording of the printed methodology so that tables can
//! be checked against it line by line.

pub mod cycle;
pub mod fleet;
pub mod plan;
pub mod route;
pub mod summary;

use haulcalc_domain::numeric::{format_count, format_number};

/// Figures in hours, km, t and t·km
pub(crate) fn num(value: f64) -> String {
    format_number(value, 2)
}

/// Mileage utilisation coefficients (β)
pub(crate) fn beta(value: f64) -> String {
    format_number(value, 3)
}

pub(crate) fn count(value: u32) -> String {
    format_count(value)
}

pub(crate) fn whole(value: f64) -> String {
    format_number(value, 0)
}
