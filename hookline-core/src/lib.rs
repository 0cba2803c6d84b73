//! # hookline-core
//!
//! Core traits for the Hookline hook and plugin engine.
//!
//! This crate has minimal dependencies and is designed to be imported by
//! plugins that don't need the full `hookline-std` implementation.
//!
//! # Pieces
//!
//! ## Hook names ([`HookName`])
//!
//! A hook is a named extension point at which the host announces that
//! something happened. Names are plain identifiers, not namespaced: several
//! plugins registering under the same name is expected.
//!
//! ## Listeners ([`Listener`])
//!
//! Side-effecting callables registered against a hook. A listener receives
//! the arguments the host announces and reports only failure back.
//!
//! ## Processing ([`Processor`])
//!
//! The pure transformation from an input [`Record`] to an output [`Record`].
//! It knows nothing about hooks; the host dispatches after it returns.
//!
//! ## Plugins ([`Plugin`], [`CoreApi`])
//!
//! Plugins receive the façade exactly once, through the [`CoreApi`]
//! capability trait, and may only *add* listeners. Dispatching is reserved
//! to the host.
//!
//! # Error Types
//!
//! - [`DispatchError`] - A listener failed during dispatch
//! - [`HookNameError`] - A hook name was rejected
//! - [`BoxError`] - Opaque listener and processor failures

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

mod api;
mod error;
mod hook;
mod listener;
mod plugin;
mod processor;
mod record;

// Re-exports
pub use api::{CoreApi, CoreApiExt};
pub use error::{BoxError, DispatchError, HookNameError};
pub use hook::{HookName, hooks};
pub use listener::{BoxListener, FnListener, Listener, listener_fn};
pub use plugin::{FnPlugin, Plugin, plugin_fn};
pub use processor::{Identity, ProcessFn, Processor, process_fn};
pub use record::{InputRecord, OutputRecord, Record};

#[doc(hidden)]
pub mod __private {
    pub use serde_json;
}
