//! Configuration loading and management for the employer cost engine.
//!
//! This module provides functionality to load a contribution rate table from
//! YAML files: snapshot metadata, contribution groups with their bands,
//! employer/employee rates, and the economic activity catalog.
//!
//! # Example
//!
//! ```no_run
//! use employer_cost_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/es_2024").unwrap();
//! println!("Loaded rate table: {}", config.metadata().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    BandLookup, ContributionBand, ContributionGroup, ContributionRates, EconomicActivity,
    EmployeeRates, EmployerRates, RateTable, RateTableMetadata, UnemploymentRates,
    UnknownGroupPolicy,
};

#[cfg(test)]
pub(crate) use types::fixtures;
