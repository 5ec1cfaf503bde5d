//! Salary projection against CPI.
//!
//! This module walks an agency's years forward from a starting salary,
//! comparing a CPI-compounded "expected" salary (purchasing power held
//! constant) with the "actual" salary the agency's pay outcomes produce.

use rust_decimal::prelude::*;

use crate::config::{AgencyDataset, YearRecord};
use crate::error::{EngineError, EngineResult};
use crate::models::{ProjectionMode, ProjectionParams, ProjectionPoint};

/// Decimal places salaries are rounded to at every step.
pub const CURRENCY_DP: u32 = 2;

/// Rounds a currency amount to cents, halves away from zero.
///
/// The result always carries exactly two decimal places.
///
/// # Examples
///
/// ```
/// use wage_cpi_engine::calculation::round_currency;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let amount = Decimal::from_str("61811.995").unwrap();
/// assert_eq!(round_currency(amount), Decimal::from_str("61812.00").unwrap());
/// ```
pub fn round_currency(amount: Decimal) -> Decimal {
    let mut rounded =
        amount.round_dp_with_strategy(CURRENCY_DP, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(CURRENCY_DP);
    rounded
}

/// Applies a percentage change to an amount and rounds to cents.
fn compound(amount: Decimal, pct: Decimal, year: i32) -> EngineResult<Decimal> {
    amount
        .checked_mul(Decimal::ONE + pct / Decimal::ONE_HUNDRED)
        .map(round_currency)
        .ok_or(EngineError::SalaryOutOfRange { year })
}

/// Projects a salary year by year from `projection_start_year` to `end_year`.
///
/// The first point is the starting salary rounded to cents, with zero
/// difference; both running salaries are seeded from that rounded value.
/// Each later agency year then advances both running salaries:
///
/// - expected: compounded by that year's CPI (zero when no figure exists)
/// - actual: compounded by that year's wage growth in
///   [`ProjectionMode::WageGrowth`], or replaced by the schedule salary in
///   [`ProjectionMode::SalaryTable`]. A schedule gap falls back to wage
///   growth for that year.
///
/// Both running salaries are rounded to cents after every update, so
/// rounding carries forward from year to year.
///
/// The result is empty when the starting salary is not positive, when the
/// agency has no record for `projection_start_year`, or when `end_year` is
/// before `projection_start_year`.
///
/// # Errors
///
/// - `UnknownAgency` if `params.agency_code` is not in the dataset
/// - `SalaryOutOfRange` if compounding overflows the decimal range
///
/// # Examples
///
/// ```no_run
/// use wage_cpi_engine::calculation::project_salary;
/// use wage_cpi_engine::config::DatasetLoader;
/// use wage_cpi_engine::models::{ProjectionMode, ProjectionParams};
/// use rust_decimal::Decimal;
///
/// let loader = DatasetLoader::load("./config")?;
/// let params = ProjectionParams {
///     agency_code: "APS".to_string(),
///     starting_salary: Decimal::from(60000),
///     projection_start_year: 2015,
///     end_year: 2030,
///     current_year: 2026,
///     mode: ProjectionMode::WageGrowth,
/// };
/// let points = project_salary(loader.dataset(), &params)?;
/// println!("{} points", points.len());
/// # Ok::<(), wage_cpi_engine::error::EngineError>(())
/// ```
pub fn project_salary(
    dataset: &AgencyDataset,
    params: &ProjectionParams,
) -> EngineResult<Vec<ProjectionPoint>> {
    let agency = dataset.agency(&params.agency_code)?;

    if params.starting_salary <= Decimal::ZERO || params.end_year < params.projection_start_year {
        return Ok(Vec::new());
    }

    let Some(start_index) = agency
        .year_records
        .iter()
        .position(|r| r.year == params.projection_start_year)
    else {
        return Ok(Vec::new());
    };

    let mut expected = round_currency(params.starting_salary);
    let mut actual = expected;

    let mut points = vec![ProjectionPoint {
        year: params.projection_start_year,
        expected_salary: expected,
        actual_salary: actual,
        difference_salary: Decimal::ZERO,
        is_future: params.projection_start_year > params.current_year,
    }];

    for record in agency.year_records[start_index + 1..]
        .iter()
        .take_while(|r| r.year <= params.end_year)
    {
        let cpi_pct = dataset
            .cpi_for(record.year)
            .map(|cpi| cpi.value_pct)
            .unwrap_or(Decimal::ZERO);

        expected = compound(expected, cpi_pct, record.year)?;
        actual = advance_actual(dataset, params, record, actual)?;

        points.push(ProjectionPoint {
            year: record.year,
            expected_salary: expected,
            actual_salary: actual,
            difference_salary: round_currency(actual - expected),
            is_future: record.year > params.current_year,
        });
    }

    Ok(points)
}

/// Advances the actual salary by one agency year.
fn advance_actual(
    dataset: &AgencyDataset,
    params: &ProjectionParams,
    record: &YearRecord,
    actual: Decimal,
) -> EngineResult<Decimal> {
    match &params.mode {
        ProjectionMode::WageGrowth => compound(actual, record.wage_pct, record.year),
        ProjectionMode::SalaryTable { level, step } => {
            match dataset.historical_salary(&params.agency_code, record.year, level, step) {
                Some(salary) => Ok(round_currency(salary)),
                None => compound(actual, record.wage_pct, record.year),
            }
        }
    }
}
