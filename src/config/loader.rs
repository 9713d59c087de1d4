//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading a rate table
//! from a YAML file.

use std::fs;
use std::path::Path;
use std::sync::Arc;

use tracing::info;

use crate::error::{EngineError, EngineResult};

use super::types::RateConfiguration;

/// Loads and holds a validated rate configuration.
///
/// The YAML layout mirrors [`RateConfiguration`] field for field:
///
/// ```text
/// tax_year: 2024
/// income_tax:
///   annual_threshold: "1500096"
///   brackets:
///     - { min: "0", max: "1500096", rate: "0", label: "0 - 1,500,096 (Threshold)" }
///     - ...
///     - { min: "7500096", max: null, rate: "0.30", label: "Above 7,500,096 (30%)" }
/// nis: { employee_rate: "0.03", employer_rate: "0.03", annual_ceiling: "5000000" }
/// nht: { employee_rate: "0.02", employer_rate: "0.03" }
/// education_tax: { employee_rate: "0.0225", employer_rate: "0.035" }
/// heart_nta: { rate: "0.03" }
/// ```
///
/// # Example
///
/// ```no_run
/// use jamaica_payroll::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/jamaica_2024.yaml")?;
/// println!("Loaded rates for {}", loader.config().tax_year);
/// # Ok::<(), jamaica_payroll::error::EngineError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: Arc<RateConfiguration>,
}

impl ConfigLoader {
    /// Loads a rate table from the specified YAML file.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` on success, or an error if:
    /// - The file is missing (`ConfigNotFound`)
    /// - The file contains invalid YAML or misses a field (`ConfigParseError`)
    /// - The table breaks a rate or bracket invariant (`InvalidConfig`)
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let config: RateConfiguration =
            serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
                path: path_str.clone(),
                message: e.to_string(),
            })?;
        config.validate()?;

        info!(path = %path_str, tax_year = config.tax_year, "Loaded rate configuration");
        Ok(Self::from_config(config))
    }

    /// Parses and validates a rate table held in memory.
    pub fn from_yaml_str(content: &str) -> EngineResult<Self> {
        let config: RateConfiguration =
            serde_yaml::from_str(content).map_err(|e| EngineError::ConfigParseError {
                path: "<inline>".to_string(),
                message: e.to_string(),
            })?;
        config.validate()?;
        Ok(Self::from_config(config))
    }

    /// Wraps the built-in 2024 rate table.
    pub fn builtin() -> Self {
        Self::from_config(RateConfiguration::jamaica_2024())
    }

    fn from_config(config: RateConfiguration) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Returns the loaded rate configuration.
    pub fn config(&self) -> &RateConfiguration {
        &self.config
    }

    /// Returns a shared handle to the rate configuration.
    pub fn shared(&self) -> Arc<RateConfiguration> {
        Arc::clone(&self.config)
    }
}
