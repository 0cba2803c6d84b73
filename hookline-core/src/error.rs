//! Error types for Hookline.
//!
//! The taxonomy is intentionally narrow:
//!
//! - [`DispatchError`] - A listener failed; the rest of that dispatch was skipped
//! - [`HookNameError`] - A string could not be used as a hook name
//!
//! Registration has no error kind. Processing failures stay opaque
//! ([`BoxError`]) and are surfaced by the host.

use crate::hook::HookName;
use thiserror::Error;

/// A boxed error type for dynamic error handling.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors that can occur during hook dispatch.
#[derive(Error, Debug)]
pub enum DispatchError {
    /// A listener returned an error. Listeners registered after it were not
    /// invoked for this dispatch.
    #[error("listener #{index} for hook `{hook}` failed")]
    Listener {
        /// The hook being dispatched.
        hook: HookName,
        /// Position of the failing listener in registration order.
        index: usize,
        /// The listener's error.
        #[source]
        source: BoxError,
    },
}

impl DispatchError {
    /// The hook whose dispatch failed.
    pub fn hook(&self) -> &HookName {
        match self {
            DispatchError::Listener { hook, .. } => hook,
        }
    }

    /// Position of the failing listener in registration order.
    pub fn index(&self) -> usize {
        match self {
            DispatchError::Listener { index, .. } => *index,
        }
    }

    /// Consume the error, returning the listener's own error.
    pub fn into_source(self) -> BoxError {
        match self {
            DispatchError::Listener { source, .. } => source,
        }
    }
}

/// Errors that can occur when building a [`HookName`] at runtime.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HookNameError {
    /// The name was empty.
    #[error("hook name must not be empty")]
    Empty,

    /// The name contained whitespace or control characters.
    #[error("hook name must not contain whitespace: {0:?}")]
    Whitespace(String),
}
