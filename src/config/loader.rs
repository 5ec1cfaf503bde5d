//! Reference data loading functionality.
//!
//! This module provides the [`DatasetLoader`] type for loading the agency
//! dataset from YAML files.

use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{EngineError, EngineResult};

use super::types::{
    Agency, AgenciesConfig, AgencyDataset, CpiConfig, SalariesConfig, SalaryHistory,
    SalaryHistoryConfig,
};

/// Loads and provides access to the agency dataset.
///
/// # Directory Structure
///
/// The configuration directory should have the following structure:
/// ```text
/// config/
/// ├── agencies.yaml        # Agency names and annual wage growth
/// ├── cpi.yaml             # Annual CPI figures
/// ├── salaries.yaml        # Current level/step salary tables
/// └── salary_history/      # Optional per-year salary schedules
///     └── APS.yaml
/// ```
///
/// # Example
///
/// ```no_run
/// use wage_cpi_engine::config::DatasetLoader;
///
/// let loader = DatasetLoader::load("./config").unwrap();
/// let agency = loader.dataset().agency("APS").unwrap();
/// println!("Agency: {}", agency.display_name);
/// ```
#[derive(Debug, Clone)]
pub struct DatasetLoader {
    dataset: AgencyDataset,
    cpi_source: Option<String>,
}

impl DatasetLoader {
    /// Loads the dataset from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration directory (e.g., "./config")
    ///
    /// # Returns
    ///
    /// Returns a `DatasetLoader` instance on success, or an error if:
    /// - Any required file is missing
    /// - Any file contains invalid YAML
    /// - The files disagree with each other (duplicate years, unknown agencies)
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let agencies_config = Self::load_yaml::<AgenciesConfig>(&path.join("agencies.yaml"))?;
        let cpi_config = Self::load_yaml::<CpiConfig>(&path.join("cpi.yaml"))?;
        let salaries_config = Self::load_yaml::<SalariesConfig>(&path.join("salaries.yaml"))?;
        let salary_history = Self::load_salary_history(&path.join("salary_history"))?;

        let mut agencies = HashMap::new();
        for (code, entry) in agencies_config.agencies {
            let mut seen = HashSet::new();
            if let Some(duplicate) = entry.wage_growth.iter().find(|r| !seen.insert(r.year)) {
                return Err(EngineError::InvalidDataset {
                    message: format!("duplicate year {} for agency '{}'", duplicate.year, code),
                });
            }
            agencies.insert(code, Agency::new(entry.name, entry.wage_growth));
        }

        for code in salaries_config
            .salaries
            .keys()
            .chain(salary_history.keys())
        {
            if !agencies.contains_key(code) {
                return Err(EngineError::InvalidDataset {
                    message: format!("salary data references unknown agency '{}'", code),
                });
            }
        }

        let cpi_source = cpi_config.source.clone();
        let cpi = cpi_config.into_records();

        debug!(
            agencies = agencies.len(),
            cpi_years = cpi.len(),
            salary_histories = salary_history.len(),
            "Loaded agency dataset"
        );

        let dataset = AgencyDataset::new(agencies, cpi, salaries_config.salaries, salary_history);

        Ok(Self {
            dataset,
            cpi_source,
        })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Loads every schedule in the salary history directory.
    ///
    /// A missing directory means no agency has a per-year schedule.
    fn load_salary_history(history_dir: &Path) -> EngineResult<HashMap<String, SalaryHistory>> {
        let mut histories = HashMap::new();

        if !history_dir.exists() {
            return Ok(histories);
        }

        let history_dir_str = history_dir.display().to_string();
        let entries = fs::read_dir(history_dir).map_err(|_| EngineError::ConfigNotFound {
            path: history_dir_str.clone(),
        })?;

        for entry in entries {
            let entry = entry.map_err(|_| EngineError::ConfigNotFound {
                path: history_dir_str.clone(),
            })?;

            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "yaml") {
                let config = Self::load_yaml::<SalaryHistoryConfig>(&path)?;
                if histories.contains_key(&config.agency) {
                    return Err(EngineError::InvalidDataset {
                        message: format!(
                            "more than one salary history for agency '{}'",
                            config.agency
                        ),
                    });
                }
                histories.insert(config.agency, config.years);
            }
        }

        Ok(histories)
    }

    /// Returns the loaded dataset.
    pub fn dataset(&self) -> &AgencyDataset {
        &self.dataset
    }

    /// Returns the attribution for the CPI figures, if the file gave one.
    pub fn cpi_source(&self) -> Option<&str> {
        self.cpi_source.as_deref()
    }
}
