//! Reference data types for wage/CPI comparison.
//!
//! This module contains the strongly-typed structures deserialized from the
//! YAML reference files, and the [`AgencyDataset`] aggregate that every
//! computation reads from.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

use crate::error::{EngineError, EngineResult};

/// An agency's wage-growth percentage for one calendar year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearRecord {
    /// The calendar year.
    pub year: i32,
    /// The agreed pay increase for the year, in percent.
    #[serde(rename = "wage")]
    pub wage_pct: Decimal,
}

/// National CPI change for one year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CpiRecord {
    /// The calendar year.
    pub year: i32,
    /// Annual CPI change, in percent.
    pub value_pct: Decimal,
    /// Whether the figure is a forecast rather than a published value.
    pub is_projected: bool,
}

/// Salaries for one classification level, keyed by step (e.g. "Step 1").
pub type StepSalaries = BTreeMap<String, Decimal>;

/// Salaries keyed by level (e.g. "APS6") then step.
pub type LevelSalaries = BTreeMap<String, StepSalaries>;

/// Current salary tables keyed by agency code.
pub type SalaryTable = HashMap<String, LevelSalaries>;

/// One agency's absolute salary schedule keyed by year.
pub type SalaryHistory = BTreeMap<i32, LevelSalaries>;

/// An agency and its wage-growth series.
#[derive(Debug, Clone, PartialEq)]
pub struct Agency {
    /// The human-readable agency name.
    pub display_name: String,
    /// Wage-growth records, ordered by year.
    pub year_records: Vec<YearRecord>,
}

impl Agency {
    /// Creates an agency, ordering its records by year.
    pub fn new(display_name: impl Into<String>, year_records: Vec<YearRecord>) -> Self {
        let mut year_records = year_records;
        year_records.sort_by_key(|r| r.year);
        Self {
            display_name: display_name.into(),
            year_records,
        }
    }

    /// Returns the years covered by this agency's records, ascending.
    pub fn years(&self) -> Vec<i32> {
        self.year_records.iter().map(|r| r.year).collect()
    }
}

/// A wage-growth entry as written in `agencies.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct AgencyEntry {
    /// The human-readable agency name.
    pub name: String,
    /// The agency's annual wage increases.
    pub wage_growth: Vec<YearRecord>,
}

/// Structure of `agencies.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct AgenciesConfig {
    /// Map of agency code to agency details.
    pub agencies: HashMap<String, AgencyEntry>,
}

/// A CPI entry as written in `cpi.yaml`.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct CpiEntry {
    /// Annual CPI change, in percent.
    pub value: Decimal,
    /// Whether the figure is a forecast.
    #[serde(default)]
    pub projected: bool,
}

/// Structure of `cpi.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct CpiConfig {
    /// Where the CPI figures come from.
    #[serde(default)]
    pub source: Option<String>,
    /// Map of year to CPI entry.
    pub cpi: BTreeMap<i32, CpiEntry>,
}

impl CpiConfig {
    /// Converts the file entries into [`CpiRecord`]s keyed by year.
    pub fn into_records(self) -> BTreeMap<i32, CpiRecord> {
        self.cpi
            .into_iter()
            .map(|(year, entry)| {
                (
                    year,
                    CpiRecord {
                        year,
                        value_pct: entry.value,
                        is_projected: entry.projected,
                    },
                )
            })
            .collect()
    }
}

/// Structure of `salaries.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct SalariesConfig {
    /// Map of agency code to level/step salaries.
    pub salaries: SalaryTable,
}

/// Structure of one file in `salary_history/`.
#[derive(Debug, Clone, Deserialize)]
pub struct SalaryHistoryConfig {
    /// The agency the schedule belongs to.
    pub agency: String,
    /// Map of year to level/step salaries.
    pub years: SalaryHistory,
}

/// The complete reference dataset.
///
/// Aggregates per-agency wage growth, national CPI figures, the current
/// salary tables and any per-year salary schedules. Immutable once built.
#[derive(Debug, Clone, Default)]
pub struct AgencyDataset {
    agencies: HashMap<String, Agency>,
    cpi: BTreeMap<i32, CpiRecord>,
    salaries: SalaryTable,
    salary_history: HashMap<String, SalaryHistory>,
}

impl AgencyDataset {
    /// Creates a new dataset from its component parts.
    pub fn new(
        agencies: HashMap<String, Agency>,
        cpi: BTreeMap<i32, CpiRecord>,
        salaries: SalaryTable,
        salary_history: HashMap<String, SalaryHistory>,
    ) -> Self {
        let agencies = agencies
            .into_iter()
            .map(|(code, agency)| (code, Agency::new(agency.display_name, agency.year_records)))
            .collect();
        Self {
            agencies,
            cpi,
            salaries,
            salary_history,
        }
    }

    /// Looks up an agency by code.
    ///
    /// Returns `UnknownAgency` if the code is not present.
    pub fn agency(&self, code: &str) -> EngineResult<&Agency> {
        self.agencies
            .get(code)
            .ok_or_else(|| EngineError::UnknownAgency {
                code: code.to_string(),
            })
    }

    /// Returns all agencies keyed by code.
    pub fn agencies(&self) -> &HashMap<String, Agency> {
        &self.agencies
    }

    /// Returns the agency codes in sorted order.
    pub fn agency_codes(&self) -> Vec<&str> {
        let mut codes: Vec<&str> = self.agencies.keys().map(String::as_str).collect();
        codes.sort_unstable();
        codes
    }

    /// Returns the CPI record for a year, if one exists.
    pub fn cpi_for(&self, year: i32) -> Option<&CpiRecord> {
        self.cpi.get(&year)
    }

    /// Returns every CPI record keyed by year.
    pub fn cpi(&self) -> &BTreeMap<i32, CpiRecord> {
        &self.cpi
    }

    /// Returns the current salary tables.
    pub fn salary_table(&self) -> &SalaryTable {
        &self.salaries
    }

    /// Returns an agency's per-year salary schedule, if it has one.
    pub fn salary_history(&self, agency: &str) -> Option<&SalaryHistory> {
        self.salary_history.get(agency)
    }

    /// Looks up a salary in the current salary table.
    pub fn table_salary(&self, agency: &str, level: &str, step: &str) -> Option<Decimal> {
        self.salaries
            .get(agency)
            .and_then(|levels| levels.get(level))
            .and_then(|steps| steps.get(step))
            .copied()
    }

    /// Looks up a salary in an agency's per-year schedule.
    pub fn historical_salary(
        &self,
        agency: &str,
        year: i32,
        level: &str,
        step: &str,
    ) -> Option<Decimal> {
        self.salary_history(agency)
            .and_then(|history| history.get(&year))
            .and_then(|levels| levels.get(level))
            .and_then(|steps| steps.get(step))
            .copied()
    }

    /// Returns the levels known for an agency across both salary sources.
    pub fn levels(&self, agency: &str) -> Vec<String> {
        let mut levels: Vec<String> = self
            .salaries
            .get(agency)
            .into_iter()
            .flat_map(|levels| levels.keys().cloned())
            .chain(
                self.salary_history(agency)
                    .into_iter()
                    .flat_map(|history| history.values())
                    .flat_map(|levels| levels.keys().cloned()),
            )
            .collect();
        levels.sort();
        levels.dedup();
        levels
    }
}
