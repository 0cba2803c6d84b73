//! The host: wires the façade, loads plugins, runs the processor and
//! announces completion.
//!
//! Loading happens on [`HostBuilder`], running on [`Host`]. A `Host` can
//! only be obtained by finishing the builder, so every plugin initializer
//! has run, once and in order, before the first processing cycle.

use crate::{
    config::{ConfigError, HostConfig},
    facade::Core,
};
use hookline_core::{
    BoxError, DispatchError, HookName, InputRecord, OutputRecord, Plugin, Processor,
};
use thiserror::Error;
use std::path::Path;
use tracing::debug;

/// Errors surfaced by a host.
#[derive(Error, Debug)]
pub enum HostError {
    /// The processor failed.
    #[error("processing failed")]
    Processing(#[source] BoxError),

    /// A completion listener failed.
    #[error(transparent)]
    Dispatch(#[from] DispatchError),

    /// A configured plugin is not in the catalog.
    #[error("no plugin named `{0}` in the catalog")]
    UnknownPlugin(String),

    /// The configuration could not be loaded.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Loads plugins into a fresh façade.
///
/// # Example
///
/// ```rust,ignore
/// let host = HostBuilder::new(Identity)
///     .plugin(LoggerPlugin::new())
///     .build();
///
/// let output = host.run(record! { "foo": "bar" })?;
/// ```
pub struct HostBuilder<P> {
    core: Core<P>,
    config: HostConfig,
    loaded: Vec<String>,
}

impl<P: Processor> HostBuilder<P> {
    /// Start a host around `processor`.
    pub fn new(processor: P) -> Self {
        Self {
            core: Core::new(processor),
            config: HostConfig::default(),
            loaded: Vec::new(),
        }
    }

    /// Start a host around `processor`, configured from a JSON file.
    pub fn from_config_path(processor: P, path: impl AsRef<Path>) -> Result<Self, HostError> {
        let config = HostConfig::from_path(path)?;
        Ok(Self::new(processor).with_config(config))
    }

    /// Replace the configuration.
    ///
    /// Both the completion hook and the pending plugin list are replaced,
    /// including a hook set earlier with [`completion_hook`](Self::completion_hook).
    /// The plugin list is only loaded by
    /// [`configured_plugins`](Self::configured_plugins).
    pub fn with_config(mut self, config: HostConfig) -> Self {
        self.config = config;
        self
    }

    /// Announce completion on `name` instead of `afterProcess`.
    ///
    /// Catalog plugins are built for the completion hook current at load
    /// time, so set it before loading them.
    pub fn completion_hook(mut self, name: HookName) -> Self {
        self.config.completion_hook = name;
        self
    }

    /// Append catalog plugin names to the pending list.
    pub fn with_plugins<I>(mut self, names: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.config.plugins.extend(names.into_iter().map(Into::into));
        self
    }

    /// The configuration applied so far.
    pub fn config(&self) -> &HostConfig {
        &self.config
    }

    /// Load a plugin now.
    pub fn plugin<L: Plugin + 'static>(self, plugin: L) -> Self {
        self.boxed_plugin(Box::new(plugin))
    }

    /// Load an already boxed plugin now.
    pub fn boxed_plugin(mut self, plugin: Box<dyn Plugin>) -> Self {
        self.loaded.push(plugin.name().to_owned());
        self.core.load(plugin);
        self
    }

    /// Load the catalog plugin submitted under `name`, built for the current
    /// completion hook.
    #[cfg(feature = "inventory")]
    pub fn catalog_plugin(self, name: &str) -> Result<Self, HostError> {
        let entry =
            crate::catalog::find(name).ok_or_else(|| HostError::UnknownPlugin(name.to_owned()))?;
        let plugin = entry.create(&self.config.completion_hook);
        Ok(self.boxed_plugin(plugin))
    }

    /// Load every pending catalog plugin from the configuration, in order.
    ///
    /// The pending list is consumed. Stops at the first name missing from
    /// the catalog.
    #[cfg(feature = "inventory")]
    pub fn configured_plugins(mut self) -> Result<Self, HostError> {
        let names = std::mem::take(&mut self.config.plugins);
        names
            .iter()
            .try_fold(self, |builder, name| builder.catalog_plugin(name))
    }

    /// Finish loading.
    pub fn build(self) -> Host<P> {
        debug!(
            plugins = ?self.loaded,
            completion_hook = %self.config.completion_hook,
            "host ready"
        );
        Host {
            core: self.core,
            completion_hook: self.config.completion_hook,
            plugins: self.loaded,
        }
    }
}

/// A wired engine: processor, registry and loaded plugins.
pub struct Host<P> {
    core: Core<P>,
    completion_hook: HookName,
    plugins: Vec<String>,
}

impl<P: Processor> Host<P> {
    /// Process `input`, then announce the output on the completion hook.
    ///
    /// A processing failure returns before anything is dispatched. A failing
    /// completion listener aborts the remaining listeners and the output is
    /// not returned.
    pub fn run(&self, input: InputRecord) -> Result<OutputRecord, HostError> {
        let output = self
            .core
            .run_processor(input)
            .map_err(|e| HostError::Processing(e.into()))?;
        self.core.dispatch(self.completion_hook.as_str(), &output)?;
        debug!(hook = %self.completion_hook, "run complete");
        Ok(output)
    }

    /// Invoke the listeners of any hook with a record. Host-only.
    pub fn dispatch(&self, name: &str, record: &OutputRecord) -> Result<(), DispatchError> {
        self.core.dispatch(name, record)
    }

    /// The hook announced after every run.
    pub fn completion_hook(&self) -> &HookName {
        &self.completion_hook
    }

    /// Names of the loaded plugins, in load order.
    pub fn plugins(&self) -> &[String] {
        &self.plugins
    }

    /// The underlying façade.
    pub fn core(&self) -> &Core<P> {
        &self.core
    }
}
