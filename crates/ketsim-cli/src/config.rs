//! Configuration management for the ketsim CLI.
//!
//! Supports loading configuration from:
//! 1. Configuration files (YAML)
//! 2. Environment variables (with KETSIM_ prefix)
//!
//! Configuration precedence (highest to lowest):
//! 1. Command-line flags
//! 2. Environment variables
//! 3. Configuration file
//! 4. Default values

use ketsim_adapter_sim::{DEFAULT_PARALLEL_THRESHOLD, KernelConfig};
use ketsim_circuit::CircuitSpec;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Complete CLI configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Random circuit parameters
    #[serde(default)]
    pub circuit: CircuitSettings,

    /// Kernel threading settings
    #[serde(default)]
    pub kernel: KernelSettings,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingSettings,
}

/// Random circuit parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CircuitSettings {
    /// Number of qubits
    #[serde(default = "default_width")]
    pub width: u32,

    /// Number of gates
    #[serde(default = "default_depth")]
    pub depth: usize,

    /// Probability of a two-qubit gate
    #[serde(default = "default_two_qubit_weight")]
    pub two_qubit_weight: f64,

    /// Seed of the random source
    #[serde(default = "default_seed")]
    pub seed: u64,
}

/// Kernel threading settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KernelSettings {
    /// Split amplitude loops across threads
    #[serde(default = "default_true")]
    pub parallel: bool,

    /// Minimum amplitudes before a loop is split
    #[serde(default = "default_parallel_threshold")]
    pub parallel_threshold: usize,
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingSettings {
    /// Log level: "trace", "debug", "info", "warn", "error"
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log format: "console" or "json"
    #[serde(default = "default_log_format")]
    pub format: String,
}

// Default value functions
fn default_width() -> u32 {
    4
}

fn default_depth() -> usize {
    20
}

fn default_two_qubit_weight() -> f64 {
    0.5
}

fn default_seed() -> u64 {
    27
}

fn default_true() -> bool {
    true
}

fn default_parallel_threshold() -> usize {
    DEFAULT_PARALLEL_THRESHOLD
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_log_format() -> String {
    "console".to_string()
}

impl Default for CircuitSettings {
    fn default() -> Self {
        CircuitSettings {
            width: default_width(),
            depth: default_depth(),
            two_qubit_weight: default_two_qubit_weight(),
            seed: default_seed(),
        }
    }
}

impl Default for KernelSettings {
    fn default() -> Self {
        KernelSettings {
            parallel: default_true(),
            parallel_threshold: default_parallel_threshold(),
        }
    }
}

impl Default for LoggingSettings {
    fn default() -> Self {
        LoggingSettings {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Config {
    /// Load configuration from a YAML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::IoError(e.to_string()))?;
        let config: Config = serde_yaml_ng::from_str(&contents)
            .map_err(|e| ConfigError::ParseError(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration with the following precedence:
    /// 1. Load from file if provided
    /// 2. Apply environment variable overrides
    pub fn load(config_file: Option<&str>) -> Result<Self, ConfigError> {
        let config = if let Some(path) = config_file {
            Self::from_file(path)?
        } else {
            Config::default()
        };

        let config = config.merge_env();
        config.validate()?;
        Ok(config)
    }

    /// Merge process environment variables into this configuration.
    pub fn merge_env(self) -> Self {
        self.merge_vars(|key| std::env::var(key).ok())
    }

    /// Merge variables from `lookup` into this configuration.
    ///
    /// Only variables that are set override the current values; values that
    /// fail to parse are ignored.
    pub fn merge_vars<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        // Circuit
        if let Some(v) = lookup("KETSIM_WIDTH") {
            if let Ok(val) = v.parse() {
                self.circuit.width = val;
            }
        }
        if let Some(v) = lookup("KETSIM_DEPTH") {
            if let Ok(val) = v.parse() {
                self.circuit.depth = val;
            }
        }
        if let Some(v) = lookup("KETSIM_TWO_QUBIT_WEIGHT") {
            if let Ok(val) = v.parse() {
                self.circuit.two_qubit_weight = val;
            }
        }
        if let Some(v) = lookup("KETSIM_SEED") {
            if let Ok(val) = v.parse() {
                self.circuit.seed = val;
            }
        }

        // Kernel
        if let Some(v) = lookup("KETSIM_PARALLEL") {
            if let Ok(val) = v.parse() {
                self.kernel.parallel = val;
            }
        }
        if let Some(v) = lookup("KETSIM_PARALLEL_THRESHOLD") {
            if let Ok(val) = v.parse() {
                self.kernel.parallel_threshold = val;
            }
        }

        // Logging
        if let Some(v) = lookup("KETSIM_LOG_LEVEL") {
            self.logging.level = v;
        }
        if let Some(v) = lookup("KETSIM_LOG_FORMAT") {
            self.logging.format = v;
        }

        self
    }

    /// Validate configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.circuit_spec()
            .validate()
            .map_err(|e| ConfigError::ValidationError(e.to_string()))?;

        // Validate log level
        match self.logging.level.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => {}
            other => {
                return Err(ConfigError::ValidationError(format!(
                    "Invalid log level: {other}"
                )));
            }
        }

        // Validate log format
        match self.logging.format.as_str() {
            "console" | "json" => {}
            other => {
                return Err(ConfigError::ValidationError(format!(
                    "Invalid log format: {other}"
                )));
            }
        }

        Ok(())
    }

    /// Circuit parameters as a generator spec.
    pub fn circuit_spec(&self) -> CircuitSpec {
        CircuitSpec {
            width: self.circuit.width,
            depth: self.circuit.depth,
            two_qubit_weight: self.circuit.two_qubit_weight,
            seed: self.circuit.seed,
        }
    }

    /// Kernel settings for the emulator.
    pub fn kernel_config(&self) -> KernelConfig {
        KernelConfig {
            parallel: self.kernel.parallel,
            parallel_threshold: self.kernel.parallel_threshold,
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    IoError(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Validation error: {0}")]
    ValidationError(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    fn vars(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.circuit.width, 4);
        assert_eq!(config.circuit.depth, 20);
        assert_eq!(config.circuit.two_qubit_weight, 0.5);
        assert_eq!(config.circuit.seed, 27);
        assert!(config.kernel.parallel);
        assert_eq!(config.kernel.parallel_threshold, 1 << 14);
        assert_eq!(config.logging.level, "warn");
        assert_eq!(config.logging.format, "console");
    }

    #[test]
    fn test_validate_valid_config() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_validate_zero_width() {
        let mut config = Config::default();
        config.circuit.width = 0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ValidationError(_))
        ));
    }

    #[test]
    fn test_validate_weight_out_of_range() {
        let mut config = Config::default();
        config.circuit.two_qubit_weight = 1.01;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_invalid_log_level() {
        let mut config = Config::default();
        config.logging.level = "loud".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_invalid_log_format() {
        let mut config = Config::default();
        config.logging.format = "xml".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_merge_vars_overrides() {
        let config = Config::default().merge_vars(vars(&[
            ("KETSIM_WIDTH", "6"),
            ("KETSIM_DEPTH", "100"),
            ("KETSIM_TWO_QUBIT_WEIGHT", "0.25"),
            ("KETSIM_SEED", "99"),
            ("KETSIM_PARALLEL", "false"),
            ("KETSIM_PARALLEL_THRESHOLD", "64"),
            ("KETSIM_LOG_LEVEL", "debug"),
            ("KETSIM_LOG_FORMAT", "json"),
        ]));
        assert_eq!(config.circuit.width, 6);
        assert_eq!(config.circuit.depth, 100);
        assert_eq!(config.circuit.two_qubit_weight, 0.25);
        assert_eq!(config.circuit.seed, 99);
        assert!(!config.kernel.parallel);
        assert_eq!(config.kernel.parallel_threshold, 64);
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.format, "json");
    }

    #[test]
    fn test_merge_vars_ignores_unparsable() {
        let config = Config::default().merge_vars(vars(&[("KETSIM_WIDTH", "many")]));
        assert_eq!(config.circuit.width, 4);
    }

    #[test]
    fn test_from_file_partial() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "circuit:\n  width: 3\n  seed: 5\nkernel:\n  parallel: false").unwrap();
        let config = Config::from_file(file.path()).unwrap();
        assert_eq!(config.circuit.width, 3);
        assert_eq!(config.circuit.seed, 5);
        assert_eq!(config.circuit.depth, 20);
        assert!(!config.kernel.parallel);
        assert_eq!(config.logging, LoggingSettings::default());
    }

    #[test]
    fn test_from_file_invalid() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "circuit:\n  two_qubit_weight: 3.0").unwrap();
        assert!(matches!(
            Config::from_file(file.path()),
            Err(ConfigError::ValidationError(_))
        ));
    }

    #[test]
    fn test_from_file_missing() {
        assert!(matches!(
            Config::from_file("/nonexistent/ketsim.yaml"),
            Err(ConfigError::IoError(_))
        ));
    }

    #[test]
    fn test_from_file_malformed() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "circuit: [1, 2").unwrap();
        assert!(matches!(
            Config::from_file(file.path()),
            Err(ConfigError::ParseError(_))
        ));
    }
}
