//! Generator configuration
//!
//! A configuration names the weight vector and, optionally, where the table goes.
//! It can be built in code or loaded from TOML:
//!
//! ```toml
//! weights = [10, -1, 3, -5]
//! output_path = "sac_W_n4"
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{GeneratorError, Result};
use crate::pla::TableSummary;
use crate::weights::{validate_dimensions, REFERENCE_WEIGHTS};
use crate::writer::write_pla_file;

/// Weight vector and output destination for one generation run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Threshold weights; the input count is their length
    pub weights: Vec<i64>,
    /// Destination file; [`default_output_name`] is used when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_path: Option<PathBuf>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        GeneratorConfig {
            weights: REFERENCE_WEIGHTS.to_vec(),
            output_path: None,
        }
    }
}

/// Default file name for a table with `n` inputs: `sac_W_n<n>`
pub fn default_output_name(n: usize) -> PathBuf {
    PathBuf::from(format!("sac_W_n{}", n))
}

impl GeneratorConfig {
    /// Create a configuration for `weights` with the default output path
    pub fn new(weights: Vec<i64>) -> Self {
        GeneratorConfig {
            weights,
            output_path: None,
        }
    }

    /// Set the destination file
    pub fn with_output_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_path = Some(path.into());
        self
    }

    /// Number of inputs described by the weight vector
    pub fn num_inputs(&self) -> usize {
        self.weights.len()
    }

    /// Parse and validate a TOML configuration
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: GeneratorConfig = toml::from_str(text).map_err(|e| GeneratorError::Config {
            message: format!("Failed to parse config: {}", e),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a TOML configuration file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| GeneratorError::Config {
            message: format!("Failed to read config file {}: {}", path.display(), e),
        })?;
        debug!(path = %path.display(), "loaded generator config");
        Self::from_toml_str(&content)
    }

    /// Serialize this configuration as TOML
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string(self).map_err(|e| GeneratorError::Config {
            message: format!("Failed to serialize config: {}", e),
        })
    }

    /// Check the weight vector against the input-count rules
    pub fn validate(&self) -> Result<()> {
        validate_dimensions(&self.weights, self.num_inputs())
    }

    /// The configured output path, or `sac_W_n<n>` when none is set
    pub fn resolved_output_path(&self) -> PathBuf {
        self.output_path
            .clone()
            .unwrap_or_else(|| default_output_name(self.num_inputs()))
    }

    /// Generate the table and write it to [`resolved_output_path`](Self::resolved_output_path)
    pub fn run(&self) -> Result<TableSummary> {
        self.validate()?;
        write_pla_file(&self.weights, self.num_inputs(), self.resolved_output_path())
    }
}
