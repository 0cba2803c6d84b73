//! # hookline-std
//!
//! Standard implementations for the Hookline hook and plugin engine.
//!
//! This crate provides:
//! - **Hook registry**: [`HookRegistry`]
//! - **Façade**: [`Core`], binding a processor to a registry
//! - **Host**: [`HostBuilder`] / [`Host`], configured by [`HostConfig`]
//! - **Plugin catalog**: [`catalog`] (with the `inventory` feature)
//! - **Bundled plugins**: [`LoggerPlugin`]
//! - **Testing utilities**: [`testing`]

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

// Re-export core traits
pub use hookline_core;

// Modules
#[cfg(feature = "inventory")]
pub mod catalog;
pub mod config;
pub mod facade;
pub mod host;
pub mod plugins;
pub mod registry;
pub mod testing;

pub use config::{ConfigError, HostConfig};
pub use facade::Core;
pub use host::{Host, HostBuilder, HostError};
pub use plugins::LoggerPlugin;
pub use registry::HookRegistry;

#[cfg(feature = "inventory")]
pub use inventory;
