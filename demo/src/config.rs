//! Configuration for the demo binary.
//!
//! Values come from an optional TOML file; command-line flags override them.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::ValueEnum;
use objency_json::JToken;
use serde::{Deserialize, Serialize};

/// Input used when neither the config file nor the command line names one.
pub const SAMPLE_JSON: &str = r#"{"foo": "bar", "baz": {"qux": "quux"}, "71": ["corge"]}"#;

/// Which values survive the filter step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ValueKind {
    #[default]
    String,
    Number,
    Boolean,
    Array,
    Object,
    /// Any value that is truthy in JavaScript terms.
    Truthy,
}

impl ValueKind {
    pub fn matches(self, token: &JToken) -> bool {
        match self {
            ValueKind::String => token.is_string(),
            ValueKind::Number => token.is_number(),
            ValueKind::Boolean => token.is_boolean(),
            ValueKind::Array => token.is_array(),
            ValueKind::Object => token.is_object(),
            ValueKind::Truthy => token.as_boolean(),
        }
    }
}

/// Demo configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    /// JSON file holding the object to wrap. The built-in sample is used when unset.
    pub input: Option<PathBuf>,
    /// Filter applied before the first pass.
    pub keep: ValueKind,
    /// `tracing_subscriber::EnvFilter` directive.
    pub log_level: String,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            input: None,
            keep: ValueKind::default(),
            log_level: "info".to_string(),
        }
    }
}

/// Command-line overrides
#[derive(Debug, Default, Clone)]
pub struct Overrides {
    pub input: Option<PathBuf>,
    pub keep: Option<ValueKind>,
    pub log_level: Option<String>,
}

impl DemoConfig {
    /// Loads the file at `path` (if given) and applies `overrides` on top.
    pub fn load(path: Option<&Path>, overrides: &Overrides) -> Result<Self> {
        let mut config = match path {
            Some(path) => Self::load_from_file(path)?,
            None => Self::default(),
        };
        config.apply_overrides(overrides);
        Ok(config)
    }

    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read configuration file {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("failed to parse configuration file {}", path.display()))
    }

    fn apply_overrides(&mut self, overrides: &Overrides) {
        if let Some(input) = &overrides.input {
            self.input = Some(input.clone());
        }
        if let Some(keep) = overrides.keep {
            self.keep = keep;
        }
        if let Some(level) = &overrides.log_level {
            self.log_level = level.clone();
        }
    }

    /// Reads the configured input, falling back to [`SAMPLE_JSON`].
    pub fn read_input(&self) -> Result<JToken> {
        match &self.input {
            Some(path) => {
                let bytes = std::fs::read(path)
                    .with_context(|| format!("failed to read input {}", path.display()))?;
                JToken::parse_bytes(&bytes)
                    .with_context(|| format!("input {} is not valid JSON", path.display()))
            }
            None => JToken::parse(SAMPLE_JSON).context("built-in sample is not valid JSON"),
        }
    }
}
