//! Run configuration for the merge CLI

use serde::Deserialize;
use thiserror::Error;

use unirank_io::TableSpec;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {message}")]
    Read { path: String, message: String },

    #[error("Failed to parse config {path}: {message}")]
    Parse { path: String, message: String },

    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// One run of the merger: which tables to fold, in which order, and
/// where the results go
#[derive(Debug, Deserialize)]
pub struct RunConfig {
    /// Path for the merged CSV table
    pub output: String,
    /// Optional path for the human-readable merge audit log
    #[serde(default)]
    pub audit_log: Option<String>,
    /// Raw region strings to drop before merging
    #[serde(default)]
    pub exclude_countries: Vec<String>,
    #[serde(default)]
    pub dedup: DedupOptions,
    /// Source tables in application order; the first is the base table
    pub tables: Vec<TableConfig>,
}

#[derive(Debug, Deserialize)]
pub struct TableConfig {
    pub path: String,
    #[serde(flatten)]
    pub spec: TableSpec,
}

#[derive(Debug, Deserialize)]
pub struct DedupOptions {
    /// Run the bracket-aware dedup pass after the cross-table merge
    #[serde(default = "default_true")]
    pub enabled: bool,
}

impl Default for DedupOptions {
    fn default() -> Self {
        Self { enabled: true }
    }
}

fn default_true() -> bool {
    true
}

impl RunConfig {
    /// Load and validate a run configuration from a TOML file
    pub fn load(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Read {
            path: path.to_string(),
            message: e.to_string(),
        })?;
        let config = Self::from_toml(&contents).map_err(|e| match e {
            ConfigError::Parse { message, .. } => ConfigError::Parse {
                path: path.to_string(),
                message,
            },
            other => other,
        })?;
        Ok(config)
    }

    /// Parse and validate a run configuration from TOML text
    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        let config: RunConfig = toml::from_str(contents).map_err(|e| ConfigError::Parse {
            path: String::new(),
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.tables.is_empty() {
            return Err(ConfigError::Invalid(
                "at least one table must be configured".to_string(),
            ));
        }
        if self.output.trim().is_empty() {
            return Err(ConfigError::Invalid("output path must not be empty".to_string()));
        }

        let mut seen = std::collections::HashSet::new();
        for table in &self.tables {
            if !seen.insert(table.spec.source.as_str()) {
                return Err(ConfigError::Invalid(format!(
                    "duplicate source id '{}'",
                    table.spec.source
                )));
            }
        }
        Ok(())
    }

    /// Source ids in table application order
    pub fn sources(&self) -> Vec<String> {
        self.tables.iter().map(|t| t.spec.source.clone()).collect()
    }
}
