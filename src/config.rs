//! Scenario configuration for the runner binary.
//!
//! A scenario is a small JSON file with the run inputs; every field has a
//! default so partial files are fine. The behavioral parameter distributions
//! themselves (`Ne`, `Ps`, `Nl`) are code-level inputs, see
//! [`crate::parameters`].

use std::fs;
use std::path::Path;

use serde_derive::{Deserialize, Serialize};

use crate::error::OutbreakError;
use crate::runner::DEFAULT_DISCOVERY_EFFICIENCY;

/// The inputs of one simulation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScenarioConfig {
    /// Number of people in the population.
    pub population: usize,
    /// Number of people infected on day zero.
    pub initial_infected: usize,
    /// Number of simulated days, including day zero.
    pub days: u32,
    /// Daily probability that an eligible case is detected.
    pub discovery_efficiency: f64,
    /// Base seed for the random number generator.
    pub random_seed: u64,
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        ScenarioConfig {
            population: 1000,
            initial_infected: 5,
            days: 120,
            discovery_efficiency: DEFAULT_DISCOVERY_EFFICIENCY,
            random_seed: 0,
        }
    }
}

impl ScenarioConfig {
    /// Loads a scenario from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns an `OutbreakError` if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self, OutbreakError> {
        let contents = fs::read_to_string(path)?;
        let config: ScenarioConfig = serde_json::from_str(&contents)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::tempdir;

    #[test]
    fn loads_a_complete_scenario() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("scenario.json");
        let mut file = fs::File::create(&path).unwrap();
        write!(
            file,
            r#"{{
                "population": 200,
                "initial_infected": 10,
                "days": 30,
                "discovery_efficiency": 0.5,
                "random_seed": 7
            }}"#
        )
        .unwrap();

        let config = ScenarioConfig::from_file(&path).unwrap();
        assert_eq!(
            config,
            ScenarioConfig {
                population: 200,
                initial_infected: 10,
                days: 30,
                discovery_efficiency: 0.5,
                random_seed: 7,
            }
        );
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("scenario.json");
        let mut file = fs::File::create(&path).unwrap();
        write!(file, r#"{{ "population": 50 }}"#).unwrap();

        let config = ScenarioConfig::from_file(&path).unwrap();
        assert_eq!(config.population, 50);
        assert_eq!(config.initial_infected, 5);
        assert_eq!(config.days, 120);
        assert_eq!(config.discovery_efficiency, DEFAULT_DISCOVERY_EFFICIENCY);
        assert_eq!(config.random_seed, 0);
    }

    #[test]
    fn malformed_json_is_an_error() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("scenario.json");
        let mut file = fs::File::create(&path).unwrap();
        write!(file, "not json").unwrap();

        assert!(matches!(
            ScenarioConfig::from_file(&path),
            Err(OutbreakError::JsonError(_))
        ));
    }

    #[test]
    fn missing_file_is_an_error() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("does_not_exist.json");
        assert!(matches!(
            ScenarioConfig::from_file(&path),
            Err(OutbreakError::IoError(_))
        ));
    }
}
