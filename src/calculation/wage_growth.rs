//! Wage growth derivation from absolute salary schedules.
//!
//! Some agencies publish a salary per year rather than an agreed percentage
//! increase. This module turns one level/step of such a schedule into the
//! same [`YearRecord`] series the percentage-based agencies carry.

use rust_decimal::Decimal;

use crate::config::{SalaryHistory, YearRecord};

/// Decimal places kept on derived growth percentages.
pub const WAGE_GROWTH_DP: u32 = 4;

/// Derives year-over-year wage growth for one classification.
///
/// Growth for a year is `(salary - previous) / previous * 100`, where
/// `previous` is the salary in the closest earlier year that has this
/// level/step. The first year with a salary has zero growth. Years without
/// the level/step are skipped.
///
/// # Examples
///
/// ```
/// use wage_cpi_engine::calculation::derive_wage_growth;
/// use wage_cpi_engine::config::{LevelSalaries, SalaryHistory, StepSalaries};
/// use rust_decimal::Decimal;
///
/// let mut history = SalaryHistory::new();
/// for (year, salary) in [(2023, 75000), (2024, 78000)] {
///     let mut steps = StepSalaries::new();
///     steps.insert("Step 1".to_string(), Decimal::from(salary));
///     let mut levels = LevelSalaries::new();
///     levels.insert("APS6".to_string(), steps);
///     history.insert(year, levels);
/// }
///
/// let records = derive_wage_growth(&history, "APS6", "Step 1");
/// assert_eq!(records[0].wage_pct, Decimal::ZERO);
/// assert_eq!(records[1].wage_pct, Decimal::from(4));
/// ```
pub fn derive_wage_growth(history: &SalaryHistory, level: &str, step: &str) -> Vec<YearRecord> {
    let mut previous: Option<Decimal> = None;

    history
        .iter()
        .filter_map(|(year, levels)| {
            let salary = *levels.get(level)?.get(step)?;
            let wage_pct = match previous {
                Some(prev) if !prev.is_zero() => ((salary - prev) / prev * Decimal::ONE_HUNDRED)
                    .round_dp(WAGE_GROWTH_DP)
                    .normalize(),
                _ => Decimal::ZERO,
            };
            previous = Some(salary);
            Some(YearRecord {
                year: *year,
                wage_pct,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{LevelSalaries, StepSalaries};
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn add_salary(history: &mut SalaryHistory, year: i32, level: &str, step: &str, amount: &str) {
        history
            .entry(year)
            .or_insert_with(LevelSalaries::new)
            .entry(level.to_string())
            .or_insert_with(StepSalaries::new)
            .insert(step.to_string(), dec(amount));
    }

    #[test]
    fn test_first_year_has_zero_growth() {
        let mut history = SalaryHistory::new();
        add_salary(&mut history, 2023, "APS6", "Step 1", "75000");

        let records = derive_wage_growth(&history, "APS6", "Step 1");

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].year, 2023);
        assert_eq!(records[0].wage_pct, Decimal::ZERO);
    }

    #[test]
    fn test_growth_is_rounded_to_four_places() {
        let mut history = SalaryHistory::new();
        add_salary(&mut history, 2023, "APS6", "Step 1", "75000");
        add_salary(&mut history, 2024, "APS6", "Step 1", "78000");
        add_salary(&mut history, 2025, "APS6", "Step 1", "81115");

        let records = derive_wage_growth(&history, "APS6", "Step 1");

        assert_eq!(records.len(), 3);
        assert_eq!(records[1].wage_pct, dec("4"));
        // 3115 / 78000 * 100 = 3.99358...
        assert_eq!(records[2].wage_pct, dec("3.9936"));
    }

    #[test]
    fn test_years_missing_classification_are_skipped() {
        let mut history = SalaryHistory::new();
        add_salary(&mut history, 2022, "APS6", "Step 1", "50000");
        add_salary(&mut history, 2023, "EL1", "Step 1", "90000");
        add_salary(&mut history, 2024, "APS6", "Step 1", "51000");

        let records = derive_wage_growth(&history, "APS6", "Step 1");

        assert_eq!(
            records.iter().map(|r| r.year).collect::<Vec<_>>(),
            vec![2022, 2024]
        );
        assert_eq!(records[1].wage_pct, dec("2"));
    }

    #[test]
    fn test_pay_cut_gives_negative_growth() {
        let mut history = SalaryHistory::new();
        add_salary(&mut history, 2020, "APS1", "Step 1", "50000");
        add_salary(&mut history, 2021, "APS1", "Step 1", "49000");

        let records = derive_wage_growth(&history, "APS1", "Step 1");

        assert_eq!(records[1].wage_pct, dec("-2"));
    }

    #[test]
    fn test_unknown_classification_yields_nothing() {
        let mut history = SalaryHistory::new();
        add_salary(&mut history, 2024, "APS6", "Step 1", "78000");

        assert!(derive_wage_growth(&history, "SES1", "Step 1").is_empty());
        assert!(derive_wage_growth(&history, "APS6", "Step 4").is_empty());
    }
}
