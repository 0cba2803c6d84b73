//! Bundled plugins.

pub mod logger;

pub use logger::LoggerPlugin;
