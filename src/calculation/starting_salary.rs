//! Starting salary and projection mode selection.
//!
//! This module decides what salary a projection starts from and whether the
//! agency's data supports a table-driven projection for a classification.

use rust_decimal::Decimal;

use crate::config::AgencyDataset;
use crate::error::{EngineError, EngineResult};
use crate::models::{ProjectionMode, SalarySource, StartingSalary};

/// Resolves the salary a projection starts from.
///
/// The salary is chosen by the following priority:
/// 1. `override_salary`, if the caller supplied one
/// 2. The agency's per-year schedule for `level`/`step` in `year`
/// 3. The agency's current salary table for `level`/`step`
///
/// When no override and no classification are given, the amount is zero
/// with source [`SalarySource::None`]; a projection from it is empty.
///
/// # Errors
///
/// - `UnknownAgency` if `agency_code` is not in the dataset
/// - `SalaryNotFound` if a classification was given but neither salary
///   source has it
///
/// # Examples
///
/// ```no_run
/// use wage_cpi_engine::calculation::resolve_starting_salary;
/// use wage_cpi_engine::config::DatasetLoader;
///
/// let loader = DatasetLoader::load("./config")?;
/// let start = resolve_starting_salary(
///     loader.dataset(),
///     "Defence",
///     2025,
///     Some("APS6"),
///     Some("Step 1"),
///     None,
/// )?;
/// println!("Starting from ${} ({:?})", start.amount, start.source);
/// # Ok::<(), wage_cpi_engine::error::EngineError>(())
/// ```
pub fn resolve_starting_salary(
    dataset: &AgencyDataset,
    agency_code: &str,
    year: i32,
    level: Option<&str>,
    step: Option<&str>,
    override_salary: Option<Decimal>,
) -> EngineResult<StartingSalary> {
    dataset.agency(agency_code)?;

    if let Some(amount) = override_salary {
        return Ok(StartingSalary {
            amount,
            source: SalarySource::Override,
        });
    }

    let (Some(level), Some(step)) = (level, step) else {
        return Ok(StartingSalary {
            amount: Decimal::ZERO,
            source: SalarySource::None,
        });
    };

    if let Some(amount) = dataset.historical_salary(agency_code, year, level, step) {
        return Ok(StartingSalary {
            amount,
            source: SalarySource::SalaryHistory,
        });
    }

    dataset
        .table_salary(agency_code, level, step)
        .map(|amount| StartingSalary {
            amount,
            source: SalarySource::SalaryTable,
        })
        .ok_or_else(|| EngineError::SalaryNotFound {
            agency: agency_code.to_string(),
            level: level.to_string(),
            step: step.to_string(),
        })
}

/// Chooses the projection mode the agency's data supports.
///
/// Returns [`ProjectionMode::SalaryTable`] when the agency has a per-year
/// schedule that contains `level`/`step` in at least one year, and
/// [`ProjectionMode::WageGrowth`] otherwise.
pub fn select_projection_mode(
    dataset: &AgencyDataset,
    agency_code: &str,
    level: Option<&str>,
    step: Option<&str>,
) -> ProjectionMode {
    let (Some(level), Some(step)) = (level, step) else {
        return ProjectionMode::WageGrowth;
    };

    let has_schedule = dataset.salary_history(agency_code).is_some_and(|history| {
        history
            .values()
            .any(|levels| levels.get(level).is_some_and(|steps| steps.contains_key(step)))
    });

    if has_schedule {
        ProjectionMode::SalaryTable {
            level: level.to_string(),
            step: step.to_string(),
        }
    } else {
        ProjectionMode::WageGrowth
    }
}
