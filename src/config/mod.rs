//! Reference data loading and management.
//!
//! This module loads the agency dataset from YAML files: per-agency wage
//! growth, national CPI figures, level/step salary tables and optional
//! per-year salary schedules.
//!
//! # Example
//!
//! ```no_run
//! use wage_cpi_engine::config::DatasetLoader;
//!
//! let loader = DatasetLoader::load("./config").unwrap();
//! println!("Agencies: {:?}", loader.dataset().agency_codes());
//! ```

mod loader;
mod types;

pub use loader::DatasetLoader;
pub use types::{
    Agency, AgenciesConfig, AgencyDataset, AgencyEntry, CpiConfig, CpiEntry, CpiRecord,
    LevelSalaries, SalariesConfig, SalaryHistory, SalaryHistoryConfig, SalaryTable, StepSalaries,
    YearRecord,
};
