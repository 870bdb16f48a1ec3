//! Project configuration (icongen.yaml) parsing.
//!
//! The config file is optional. Without it the generator writes to
//! `public/` and stops at the first failed file.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{IconError, Result};
use crate::export::FailurePolicy;

/// Default config file name, looked up in the working directory.
pub const CONFIG_FILENAME: &str = "icongen.yaml";

/// Generator settings loaded from icongen.yaml.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Output directory for the icon set.
    pub output: PathBuf,

    /// Behaviour when a file cannot be written.
    pub on_error: FailurePolicy,
}

fn default_output() -> PathBuf {
    PathBuf::from("public")
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output: default_output(),
            on_error: FailurePolicy::default(),
        }
    }
}

impl Config {
    /// Load config from a YAML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| IconError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read config: {}", e),
        })?;

        Self::parse(&content)
    }

    /// Parse config from a YAML string.
    pub fn parse(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content).map_err(|e| IconError::Config {
            message: format!("Invalid config: {}", e),
            help: Some(format!(
                "Check {} syntax; supported keys are `output` and `on_error` (abort | continue)",
                CONFIG_FILENAME
            )),
        })
    }

    /// Resolve the config to use.
    ///
    /// An explicit path must exist. Otherwise `icongen.yaml` in `dir` is used
    /// when present, and the defaults when not.
    pub fn resolve(explicit: Option<&Path>, dir: &Path) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        let path = dir.join(CONFIG_FILENAME);
        if path.is_file() {
            Self::load(&path)
        } else {
            Ok(Self::default())
        }
    }
}
