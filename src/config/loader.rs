//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading a contribution
//! rate table and its activity catalog from YAML files.

use rust_decimal::Decimal;
use std::fs;
use std::path::Path;

use tracing::info;

use crate::error::{EngineError, EngineResult};

use super::types::{
    ActivitiesConfig, ContributionGroup, ContributionRates, EconomicActivity, GroupsConfig,
    RateTable, RateTableMetadata, TableConfig,
};

/// Loads and provides access to a rate table snapshot.
///
/// The `ConfigLoader` reads YAML configuration files from a directory,
/// validates them into a [`RateTable`], and answers catalog queries for the
/// input boundary (group labels, economic activities).
///
/// # Directory Structure
///
/// ```text
/// config/es_2024/
/// ├── table.yaml          # Snapshot metadata, default group, unknown-group policy
/// ├── groups.yaml         # Contribution groups and their annual bands
/// ├── contributions.yaml  # Employer and employee rates
/// └── activities.yaml     # Economic activities and work-accident rates
/// ```
///
/// # Example
///
/// ```no_run
/// use employer_cost_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/es_2024").unwrap();
/// println!("Loaded rate table: {}", loader.metadata().name);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    table: RateTable,
    activities: Vec<EconomicActivity>,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Any required file is missing (`ConfigNotFound`)
    /// - Any file contains invalid YAML or misses a field (`ConfigParseError`)
    /// - The table is inconsistent (`InvalidConfig`)
    ///
    /// # Example
    ///
    /// ```no_run
    /// use employer_cost_engine::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::load("./config/es_2024")?;
    /// # Ok::<(), employer_cost_engine::error::EngineError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let table_config = Self::load_yaml::<TableConfig>(&path.join("table.yaml"))?;
        let groups_config = Self::load_yaml::<GroupsConfig>(&path.join("groups.yaml"))?;
        let rates = Self::load_yaml::<ContributionRates>(&path.join("contributions.yaml"))?;
        let activities_config = Self::load_yaml::<ActivitiesConfig>(&path.join("activities.yaml"))?;

        let table = RateTable::new(
            table_config.metadata,
            groups_config.groups,
            rates,
            table_config.default_group,
            table_config.unknown_group_policy,
        )?;

        let loader = Self::from_parts(table, activities_config.activities)?;

        info!(
            path = %path.display(),
            code = %loader.metadata().code,
            version = %loader.metadata().version,
            groups = loader.table.groups().len(),
            activities = loader.activities.len(),
            "Rate table loaded"
        );

        Ok(loader)
    }

    /// Builds a loader from an already validated table and an activity
    /// catalog.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if two activities share a code or an activity
    /// rate lies outside `[0, 1)`.
    pub fn from_parts(table: RateTable, activities: Vec<EconomicActivity>) -> EngineResult<Self> {
        for (index, activity) in activities.iter().enumerate() {
            if activity.work_accident_rate < Decimal::ZERO
                || activity.work_accident_rate >= Decimal::ONE
            {
                return Err(EngineError::InvalidConfig {
                    message: format!(
                        "activity '{}' work-accident rate must be in [0, 1), got {}",
                        activity.code, activity.work_accident_rate
                    ),
                });
            }
            if activities[..index].iter().any(|a| a.code == activity.code) {
                return Err(EngineError::InvalidConfig {
                    message: format!("duplicate activity code '{}'", activity.code),
                });
            }
        }

        Ok(Self { table, activities })
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

    /// Returns the validated rate table.
    pub fn table(&self) -> &RateTable {
        &self.table
    }

    /// Returns the rate table metadata.
    pub fn metadata(&self) -> &RateTableMetadata {
        self.table.metadata()
    }

    /// Returns the economic activity catalog, in display order.
    pub fn activities(&self) -> &[EconomicActivity] {
        &self.activities
    }

    /// Gets a contribution group by id.
    ///
    /// Unlike the engine, this lookup never falls back; it is meant for
    /// catalog display.
    pub fn get_group(&self, id: i64) -> Option<&ContributionGroup> {
        let id = u8::try_from(id).ok()?;
        self.table.groups().get(&id)
    }

    /// Gets an economic activity by its code.
    ///
    /// # Returns
    ///
    /// Returns the activity if found, or `ActivityNotFound` error.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use employer_cost_engine::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::load("./config/es_2024")?;
    /// let activity = loader.get_activity("hospitality")?;
    /// println!("AT/EP rate: {}", activity.work_accident_rate);
    /// # Ok::<(), employer_cost_engine::error::EngineError>(())
    /// ```
    pub fn get_activity(&self, code: &str) -> EngineResult<&EconomicActivity> {
        self.activities
            .iter()
            .find(|a| a.code == code)
            .ok_or_else(|| EngineError::ActivityNotFound {
                code: code.to_string(),
            })
    }

    /// Returns the rate of the first catalog activity, the lowest-risk
    /// default offered to callers that select nothing.
    pub fn default_work_accident_rate(&self) -> Option<Decimal> {
        self.activities.first().map(|a| a.work_accident_rate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::types::fixtures::{dec, spain_2024};
    use crate::config::UnknownGroupPolicy;

    fn config_path() -> &'static str {
        "./config/es_2024"
    }

    #[test]
    fn test_load_valid_configuration() {
        let result = ConfigLoader::load(config_path());
        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());

        let loader = result.unwrap();
        assert_eq!(loader.metadata().code, "ES-RG-2024");
        assert_eq!(loader.metadata().version, "2024");
    }

    #[test]
    fn test_loaded_table_matches_published_rates() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        assert_eq!(loader.table().rates(), spain_2024().rates());
        assert_eq!(loader.table().default_group(), 7);
        assert_eq!(
            loader.table().unknown_group_policy(),
            UnknownGroupPolicy::Fallback
        );
    }

    #[test]
    fn test_loaded_groups_cover_one_to_eleven() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        let ids: Vec<u8> = loader.table().groups().keys().copied().collect();
        assert_eq!(ids, (1..=11).collect::<Vec<u8>>());

        let group_1 = loader.get_group(1).unwrap();
        assert_eq!(group_1.min_base, dec("22168.80"));
        assert_eq!(group_1.max_base, dec("56646.00"));
        assert_eq!(group_1.label, "Grupo 1: Ingenieros y Licenciados");
    }

    #[test]
    fn test_get_activity() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        let activity = loader.get_activity("construction_agriculture").unwrap();
        assert_eq!(activity.work_accident_rate, dec("0.0670"));
    }

    #[test]
    fn test_get_activity_unknown_returns_error() {
        let loader = ConfigLoader::load(config_path()).unwrap();

        match loader.get_activity("mining") {
            Err(EngineError::ActivityNotFound { code }) => assert_eq!(code, "mining"),
            other => panic!("Expected ActivityNotFound error, got {:?}", other),
        }
    }

    #[test]
    fn test_default_work_accident_rate_is_lowest_risk() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        assert_eq!(loader.default_work_accident_rate(), Some(dec("0.0150")));
    }

    #[test]
    fn test_load_missing_directory_returns_error() {
        let result = ConfigLoader::load("/nonexistent/path");

        match result {
            Err(EngineError::ConfigNotFound { path }) => {
                assert!(path.contains("table.yaml"));
            }
            other => panic!("Expected ConfigNotFound error, got {:?}", other),
        }
    }

    #[test]
    fn test_duplicate_activity_codes_are_rejected() {
        let activity = EconomicActivity {
            code: "offices_education".to_string(),
            label: "Oficinas".to_string(),
            cnae_examples: vec![],
            work_accident_rate: dec("0.0150"),
        };
        let result = ConfigLoader::from_parts(spain_2024(), vec![activity.clone(), activity]);
        assert!(matches!(result, Err(EngineError::InvalidConfig { .. })));
    }

    #[test]
    fn test_out_of_range_activity_rate_is_rejected() {
        let activity = EconomicActivity {
            code: "bad".to_string(),
            label: "Bad".to_string(),
            cnae_examples: vec![],
            work_accident_rate: dec("1.5"),
        };
        let result = ConfigLoader::from_parts(spain_2024(), vec![activity]);
        assert!(matches!(result, Err(EngineError::InvalidConfig { .. })));
    }
}
