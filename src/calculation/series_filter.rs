//! Wage growth versus CPI comparison series.
//!
//! This module produces the per-year [`ComparisonPoint`] series charted on
//! the dashboard: an agency's wage growth restricted to a year window, paired
//! with that year's CPI figure and the gap between the two.

use rust_decimal::Decimal;

use crate::config::{AgencyDataset, YearRecord};
use crate::error::EngineResult;
use crate::models::ComparisonPoint;

use super::wage_growth::derive_wage_growth;

/// Builds the comparison series for an agency over `[start_year, end_year]`.
///
/// Records outside the window are dropped and the rest are ordered by year.
/// A year without a CPI figure compares against zero and is not flagged as
/// projected. An inverted window yields an empty series.
///
/// # Errors
///
/// Returns `UnknownAgency` if `agency_code` is not in the dataset.
///
/// # Examples
///
/// ```no_run
/// use wage_cpi_engine::calculation::filter_series;
/// use wage_cpi_engine::config::DatasetLoader;
///
/// let loader = DatasetLoader::load("./config")?;
/// let points = filter_series(loader.dataset(), "APS", 2015, 2020)?;
/// for point in points {
///     println!("{}: gap {}%", point.year, point.gap_pct);
/// }
/// # Ok::<(), wage_cpi_engine::error::EngineError>(())
/// ```
pub fn filter_series(
    dataset: &AgencyDataset,
    agency_code: &str,
    start_year: i32,
    end_year: i32,
) -> EngineResult<Vec<ComparisonPoint>> {
    let agency = dataset.agency(agency_code)?;
    Ok(compare_with_cpi(
        dataset,
        &agency.year_records,
        start_year,
        end_year,
    ))
}

/// Builds the comparison series for one classification's salary schedule.
///
/// Wage growth is derived from the agency's per-year salaries for
/// `level`/`step` (see [`derive_wage_growth`]) across the whole schedule,
/// then windowed and compared exactly as [`filter_series`] does. An agency
/// without a schedule yields an empty series.
///
/// The window's first year is measured against the schedule year before
/// it, so it shows real growth rather than zero. Only the schedule's own
/// first year has zero growth.
///
/// # Errors
///
/// Returns `UnknownAgency` if `agency_code` is not in the dataset.
pub fn filter_classification_series(
    dataset: &AgencyDataset,
    agency_code: &str,
    level: &str,
    step: &str,
    start_year: i32,
    end_year: i32,
) -> EngineResult<Vec<ComparisonPoint>> {
    dataset.agency(agency_code)?;

    let Some(history) = dataset.salary_history(agency_code) else {
        return Ok(Vec::new());
    };

    // Derive before windowing so the first windowed year keeps its growth.
    let records = derive_wage_growth(history, level, step);
    Ok(compare_with_cpi(dataset, &records, start_year, end_year))
}

/// Windows, orders and pairs wage records with CPI.
fn compare_with_cpi(
    dataset: &AgencyDataset,
    records: &[YearRecord],
    start_year: i32,
    end_year: i32,
) -> Vec<ComparisonPoint> {
    let mut retained: Vec<&YearRecord> = records
        .iter()
        .filter(|r| start_year <= r.year && r.year <= end_year)
        .collect();
    retained.sort_by_key(|r| r.year);

    retained
        .into_iter()
        .map(|record| {
            let (cpi_pct, is_projected) = dataset
                .cpi_for(record.year)
                .map(|cpi| (cpi.value_pct, cpi.is_projected))
                .unwrap_or((Decimal::ZERO, false));
            ComparisonPoint::new(record.year, record.wage_pct, cpi_pct, is_projected)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{
        Agency, CpiRecord, LevelSalaries, SalaryHistory, SalaryTable, StepSalaries,
    };
    use crate::error::EngineError;
    use proptest::prelude::*;
    use std::collections::{BTreeMap, HashMap};
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn record(year: i32, wage: &str) -> YearRecord {
        YearRecord {
            year,
            wage_pct: dec(wage),
        }
    }

    fn cpi(year: i32, value: &str, is_projected: bool) -> (i32, CpiRecord) {
        (
            year,
            CpiRecord {
                year,
                value_pct: dec(value),
                is_projected,
            },
        )
    }

    fn create_test_dataset() -> AgencyDataset {
        let mut agencies = HashMap::new();
        agencies.insert(
            "APS".to_string(),
            Agency::new(
                "Australian Public Service Commission",
                vec![
                    record(2015, "1.5"),
                    record(2016, "2.0"),
                    record(2017, "2.0"),
                    record(2024, "4.0"),
                    record(2025, "3.8"),
                    record(2031, "2.8"),
                ],
            ),
        );
        agencies.insert(
            "ATO".to_string(),
            Agency::new("Australian Taxation Office", vec![record(2016, "2.0")]),
        );

        let cpi: BTreeMap<i32, CpiRecord> = [
            cpi(2015, "1.5", false),
            cpi(2016, "1.0", false),
            cpi(2017, "1.9", false),
            cpi(2024, "3.8", false),
            cpi(2025, "2.8", true),
        ]
        .into_iter()
        .collect();

        let mut history = SalaryHistory::new();
        for (year, salary) in [(2023, "75000"), (2024, "78000"), (2025, "81115")] {
            let mut steps = StepSalaries::new();
            steps.insert("Step 1".to_string(), dec(salary));
            let mut levels = LevelSalaries::new();
            levels.insert("APS6".to_string(), steps);
            history.insert(year, levels);
        }
        let mut salary_history = HashMap::new();
        salary_history.insert("APS".to_string(), history);

        AgencyDataset::new(agencies, cpi, SalaryTable::new(), salary_history)
    }

    /// SF-001: two-year window pairs wage with CPI
    #[test]
    fn test_two_year_window_pairs_wage_with_cpi() {
        let dataset = create_test_dataset();

        let points = filter_series(&dataset, "APS", 2015, 2016).unwrap();

        assert_eq!(
            points,
            vec![
                ComparisonPoint {
                    year: 2015,
                    wage_pct: dec("1.5"),
                    cpi_pct: dec("1.5"),
                    is_projected: false,
                    gap_pct: dec("0"),
                },
                ComparisonPoint {
                    year: 2016,
                    wage_pct: dec("2.0"),
                    cpi_pct: dec("1.0"),
                    is_projected: false,
                    gap_pct: dec("1.0"),
                },
            ]
        );
    }

    /// SF-002: unknown agency is an error
    #[test]
    fn test_unknown_agency_returns_error() {
        let dataset = create_test_dataset();

        match filter_series(&dataset, "NOPE", 2015, 2020) {
            Err(EngineError::UnknownAgency { code }) => assert_eq!(code, "NOPE"),
            other => panic!("Expected UnknownAgency, got {:?}", other),
        }
    }

    /// SF-003: inverted window is empty, not an error
    #[test]
    fn test_inverted_window_is_empty() {
        let dataset = create_test_dataset();

        let points = filter_series(&dataset, "APS", 2020, 2015).unwrap();

        assert!(points.is_empty());
    }

    #[test]
    fn test_window_bounds_are_inclusive() {
        let dataset = create_test_dataset();

        let points = filter_series(&dataset, "APS", 2016, 2024).unwrap();

        assert_eq!(
            points.iter().map(|p| p.year).collect::<Vec<_>>(),
            vec![2016, 2017, 2024]
        );
    }

    #[test]
    fn test_projected_cpi_is_flagged() {
        let dataset = create_test_dataset();

        let points = filter_series(&dataset, "APS", 2025, 2025).unwrap();

        assert_eq!(points.len(), 1);
        assert!(points[0].is_projected);
        assert_eq!(points[0].gap_pct, dec("1.0"));
    }

    #[test]
    fn test_missing_cpi_year_compares_against_zero() {
        let dataset = create_test_dataset();

        let points = filter_series(&dataset, "APS", 2030, 2035).unwrap();

        assert_eq!(points.len(), 1);
        assert_eq!(points[0].year, 2031);
        assert_eq!(points[0].cpi_pct, Decimal::ZERO);
        assert!(!points[0].is_projected);
        assert_eq!(points[0].gap_pct, dec("2.8"));
    }

    #[test]
    fn test_window_outside_agency_years_is_empty() {
        let dataset = create_test_dataset();

        let points = filter_series(&dataset, "ATO", 2000, 2010).unwrap();

        assert!(points.is_empty());
    }

    /// SF-004: growth at the window start is measured against the prior schedule year
    #[test]
    fn test_classification_series_window_start_keeps_growth() {
        let dataset = create_test_dataset();

        let points =
            filter_classification_series(&dataset, "APS", "APS6", "Step 1", 2024, 2025).unwrap();

        assert_eq!(points.len(), 2);
        assert_eq!(points[0].year, 2024);
        assert_eq!(points[0].wage_pct, dec("4"));
        assert_eq!(points[0].gap_pct, dec("0.2"));
        assert_eq!(points[1].wage_pct, dec("3.9936"));
        assert_eq!(points[1].gap_pct, dec("1.1936"));
        assert!(points[1].is_projected);
    }

    #[test]
    fn test_classification_series_schedule_start_has_zero_growth() {
        let dataset = create_test_dataset();

        let points =
            filter_classification_series(&dataset, "APS", "APS6", "Step 1", 2015, 2030).unwrap();

        assert_eq!(points[0].year, 2023);
        assert_eq!(points[0].wage_pct, Decimal::ZERO);
        assert_eq!(points[1].wage_pct, dec("4"));
    }

    #[test]
    fn test_classification_series_without_history_is_empty() {
        let dataset = create_test_dataset();

        let points =
            filter_classification_series(&dataset, "ATO", "APS6", "Step 1", 2015, 2030).unwrap();

        assert!(points.is_empty());
    }

    #[test]
    fn test_classification_series_unknown_agency_returns_error() {
        let dataset = create_test_dataset();

        let result = filter_classification_series(&dataset, "NOPE", "APS6", "Step 1", 2015, 2030);

        assert!(matches!(result, Err(EngineError::UnknownAgency { .. })));
    }

    proptest! {
        #[test]
        fn prop_filter_is_deterministic(start in 2000i32..2040, end in 2000i32..2040) {
            let dataset = create_test_dataset();
            let first = filter_series(&dataset, "APS", start, end).unwrap();
            let second = filter_series(&dataset, "APS", start, end).unwrap();
            prop_assert_eq!(first, second);
        }

        #[test]
        fn prop_points_stay_inside_window(start in 2000i32..2040, end in 2000i32..2040) {
            let dataset = create_test_dataset();
            let points = filter_series(&dataset, "APS", start, end).unwrap();
            prop_assert!(points.iter().all(|p| start <= p.year && p.year <= end));
            prop_assert!(points.windows(2).all(|w| w[0].year < w[1].year));
            if start > end {
                prop_assert!(points.is_empty());
            }
        }

        #[test]
        fn prop_gap_is_wage_minus_cpi(start in 2000i32..2040, end in 2000i32..2040) {
            let dataset = create_test_dataset();
            let points = filter_series(&dataset, "APS", start, end).unwrap();
            for point in points {
                prop_assert_eq!(point.gap_pct, point.wage_pct - point.cpi_pct);
            }
        }
    }
}
