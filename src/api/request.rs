//! Request types for the wage/CPI comparison API.
//!
//! This module defines the JSON request structures for the `/series` and
//! `/projection` endpoints.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Request body for the `/series` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeriesRequest {
    /// The agency code (e.g., "APS").
    pub agency: String,
    /// The first year of the window (inclusive).
    pub start_year: i32,
    /// The last year of the window (inclusive).
    pub end_year: i32,
    /// Classification level to derive wage growth from salaries.
    #[serde(default)]
    pub level: Option<String>,
    /// Classification step to derive wage growth from salaries.
    #[serde(default)]
    pub step: Option<String>,
}

/// Request body for the `/projection` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectionRequest {
    /// The agency code (e.g., "APS").
    pub agency: String,
    /// The year the projection starts from.
    pub projection_start_year: i32,
    /// The last year to project (inclusive).
    pub end_year: i32,
    /// Starting salary; looked up from `level`/`step` when absent.
    #[serde(default)]
    pub starting_salary: Option<Decimal>,
    /// Classification level (e.g., "APS6").
    #[serde(default)]
    pub level: Option<String>,
    /// Classification step (e.g., "Step 1").
    #[serde(default)]
    pub step: Option<String>,
    /// The year treated as "now"; defaults to the current UTC year.
    #[serde(default)]
    pub current_year: Option<i32>,
}
