//! Calculation logic for the wage/CPI comparison engine.
//!
//! This module contains the comparison series filter (wage growth against CPI
//! over a year window), wage growth derivation from salary schedules,
//! starting salary lookup, and the CPI-versus-wage salary projection.
//!
//! Every function here is pure: it reads an immutable
//! [`AgencyDataset`](crate::config::AgencyDataset) and returns freshly
//! allocated results.

mod salary_projection;
mod series_filter;
mod starting_salary;
mod wage_growth;

pub use salary_projection::{CURRENCY_DP, project_salary, round_currency};
pub use series_filter::{filter_classification_series, filter_series};
pub use starting_salary::{resolve_starting_salary, select_projection_mode};
pub use wage_growth::{WAGE_GROWTH_DP, derive_wage_growth};
