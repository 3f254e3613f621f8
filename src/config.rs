// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! TOML configuration for the generator.
//!
//! Every field is optional; a missing file section or key keeps its default.
//! Command-line flags are applied on top of the loaded values.
//!
//! ```toml
//! [search]
//! max_steps = 200000
//! detect_oscillation = true
//!
//! [output]
//! format = "c"
//! declaration = "static"
//! index = true
//!
//! [log]
//! level = "info"
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::emit::Declaration;
use crate::error::ConfigError;
use crate::search::{SearchLimits, DEFAULT_MAX_STEPS};

/// Top-level configuration, parsed from TOML.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    pub search: SearchSection,
    pub output: OutputSection,
    pub log: LogSection,
}

/// `[search]` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchSection {
    /// Step budget. Zero disables the limit.
    pub max_steps: u64,
    /// Stop as soon as the search revisits a state.
    pub detect_oscillation: bool,
}

impl Default for SearchSection {
    fn default() -> Self {
        Self {
            max_steps: DEFAULT_MAX_STEPS,
            detect_oscillation: true,
        }
    }
}

/// Output format for code tables.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// C array definitions.
    #[default]
    C,
    /// One JSON object per line.
    Json,
}

/// `[output]` section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputSection {
    pub format: OutputFormat,
    pub declaration: Declaration,
    /// Append pointer tables indexed by `k` (C format only).
    pub index: bool,
}

/// `[log]` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogSection {
    /// Log level filter (e.g. `"info"`, `"debug"`, `"warn"`).
    pub level: String,
}

impl Default for LogSection {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
        }
    }
}

impl GeneratorConfig {
    /// Load config from a TOML file, or use defaults if no path is given.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(p) => {
                let content = std::fs::read_to_string(p).map_err(|source| ConfigError::Read {
                    path: p.to_path_buf(),
                    source,
                })?;
                toml::from_str(&content).map_err(|source| ConfigError::Parse {
                    path: p.to_path_buf(),
                    source,
                })
            }
            None => Ok(Self::default()),
        }
    }

    /// Search bounds described by the `[search]` section.
    pub fn limits(&self) -> SearchLimits {
        SearchLimits {
            max_steps: (self.search.max_steps > 0).then_some(self.search.max_steps),
            detect_oscillation: self.search.detect_oscillation,
        }
    }
}
