//! Salary projection models.
//!
//! This module contains the parameters and outputs of a salary projection:
//! the [`ProjectionMode`] that decides how the "actual" salary evolves, the
//! [`ProjectionParams`] selection, and the per-year [`ProjectionPoint`]s.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// How the "actual" salary is advanced from one year to the next.
///
/// # Example
///
/// ```
/// use wage_cpi_engine::models::ProjectionMode;
///
/// assert_eq!(ProjectionMode::default(), ProjectionMode::WageGrowth);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ProjectionMode {
    /// Compound the salary by each year's wage-growth percentage.
    #[default]
    WageGrowth,
    /// Take each year's salary from the agency's per-year salary schedule.
    SalaryTable {
        /// The classification level (e.g. "APS6").
        level: String,
        /// The increment within the level (e.g. "Step 1").
        step: String,
    },
}

/// Selection parameters for a salary projection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectionParams {
    /// The agency whose wage data drives the projection.
    pub agency_code: String,
    /// The salary at the projection start year.
    pub starting_salary: Decimal,
    /// The year the projection starts from.
    pub projection_start_year: i32,
    /// The last year to project (inclusive).
    pub end_year: i32,
    /// The current calendar year, used to flag future points.
    pub current_year: i32,
    /// How the actual salary evolves.
    pub mode: ProjectionMode,
}

/// One year of a salary projection.
///
/// `expected_salary` preserves purchasing power (compounded by CPI);
/// `actual_salary` follows the agency's pay outcomes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectionPoint {
    /// The calendar year.
    pub year: i32,
    /// Salary compounded by CPI.
    pub expected_salary: Decimal,
    /// Salary compounded by wage growth, or taken from the salary schedule.
    pub actual_salary: Decimal,
    /// `actual_salary - expected_salary`.
    pub difference_salary: Decimal,
    /// Whether the year is after the current calendar year.
    pub is_future: bool,
}

/// Where a starting salary came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SalarySource {
    /// Supplied directly by the caller.
    Override,
    /// Looked up in the agency's per-year salary schedule.
    SalaryHistory,
    /// Looked up in the agency's current salary table.
    SalaryTable,
    /// Nothing was supplied; the amount is zero.
    None,
}

/// A resolved starting salary and its provenance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StartingSalary {
    /// The salary amount.
    pub amount: Decimal,
    /// Where the amount came from.
    pub source: SalarySource,
}

/// The complete result of a salary projection request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectionResult {
    /// Unique identifier for this calculation.
    pub calculation_id: Uuid,
    /// When the calculation was performed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that performed the calculation.
    pub engine_version: String,
    /// The agency code the projection is for.
    pub agency_code: String,
    /// The agency's display name.
    pub agency_name: String,
    /// The starting salary used.
    pub starting_salary: StartingSalary,
    /// How the actual salary evolved.
    pub mode: ProjectionMode,
    /// The projection points, ascending by year.
    pub points: Vec<ProjectionPoint>,
    /// The calculation duration in microseconds.
    pub duration_us: u64,
}
