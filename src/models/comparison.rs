//! Wage-versus-CPI comparison models.
//!
//! This module contains the [`ComparisonPoint`] produced for each year of a
//! comparison series, and the [`SeriesResult`] envelope returned by the API.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One year of a wage-growth versus CPI comparison.
///
/// `gap_pct` is always `wage_pct - cpi_pct`; a positive gap is a real
/// (inflation-adjusted) pay rise.
///
/// # Example
///
/// ```
/// use wage_cpi_engine::models::ComparisonPoint;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let point = ComparisonPoint::new(
///     2016,
///     Decimal::from_str("2.0").unwrap(),
///     Decimal::from_str("1.0").unwrap(),
///     false,
/// );
/// assert_eq!(point.gap_pct, Decimal::from_str("1.0").unwrap());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparisonPoint {
    /// The calendar year.
    pub year: i32,
    /// The agency's wage growth for the year, in percent.
    pub wage_pct: Decimal,
    /// CPI change for the year, in percent (zero when no figure exists).
    pub cpi_pct: Decimal,
    /// Whether the CPI figure is a forecast.
    pub is_projected: bool,
    /// Wage growth minus CPI, in percent.
    pub gap_pct: Decimal,
}

impl ComparisonPoint {
    /// Creates a point, deriving the gap from the wage and CPI figures.
    pub fn new(year: i32, wage_pct: Decimal, cpi_pct: Decimal, is_projected: bool) -> Self {
        Self {
            year,
            wage_pct,
            cpi_pct,
            is_projected,
            gap_pct: wage_pct - cpi_pct,
        }
    }
}

/// The complete result of a comparison series request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeriesResult {
    /// Unique identifier for this calculation.
    pub calculation_id: Uuid,
    /// When the calculation was performed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that performed the calculation.
    pub engine_version: String,
    /// The agency code the series is for.
    pub agency_code: String,
    /// The agency's display name.
    pub agency_name: String,
    /// The classification level, when wage growth was derived from salaries.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub level: Option<String>,
    /// The classification step, when wage growth was derived from salaries.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub step: Option<String>,
    /// The comparison points, ascending by year.
    pub points: Vec<ComparisonPoint>,
    /// The calculation duration in microseconds.
    pub duration_us: u64,
}
