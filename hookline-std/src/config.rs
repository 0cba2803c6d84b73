//! Host configuration.
//!
//! A JSON document selecting the completion hook and the catalog plugins to
//! load, in order:
//!
//! ```json
//! {
//!   "completion_hook": "afterProcess",
//!   "plugins": ["logger"]
//! }
//! ```
//!
//! Every field is optional.

use hookline_core::{HookName, hooks};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur while loading a [`HostConfig`].
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("failed to read config file {}", path.display())]
    Io {
        /// The file that failed.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    /// The document is not a valid configuration.
    #[error("invalid host configuration")]
    Parse(#[from] serde_json::Error),
}

/// How a host wires its plugins and announces completion.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HostConfig {
    /// Hook announced with the output record after every run.
    pub completion_hook: HookName,
    /// Catalog plugins to load, in load order.
    pub plugins: Vec<String>,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            completion_hook: hooks::AFTER_PROCESS,
            plugins: Vec::new(),
        }
    }
}

impl HostConfig {
    /// Parse a configuration from JSON text.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a configuration file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&text)
    }

    /// Set the completion hook.
    pub fn with_completion_hook(mut self, name: HookName) -> Self {
        self.completion_hook = name;
        self
    }

    /// Append a catalog plugin to the load list.
    pub fn with_plugin(mut self, name: impl Into<String>) -> Self {
        self.plugins.push(name.into());
        self
    }
}
