//! # hookline - a minimal processing engine with plugins
//!
//! `hookline` pairs a pure processing function with a name-keyed hook
//! registry. Plugins receive the engine once at startup and register
//! listeners; the host runs the processor and then announces the result on a
//! completion hook. The processor never knows plugins exist.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use hookline::prelude::*;
//!
//! #[hookline::plugin]
//! fn shout(core: &mut dyn CoreApi) {
//!     core.on(hooks::AFTER_PROCESS, |record| {
//!         println!("processed {record}");
//!         Ok(())
//!     });
//! }
//!
//! let host = HostBuilder::new(Identity).plugin(shout).build();
//! let output = host.run(record! { "foo": "bar" })?;
//! ```
//!
//! ## Who may do what
//!
//! - Plugins get `&mut dyn CoreApi`: they can register listeners and run the
//!   processor, but cannot dispatch.
//! - The host owns the [`Core`] (usually through a [`Host`]) and is the only
//!   party able to dispatch.
//! - Listeners for one name run in registration order; the first failure
//!   stops the rest and is returned to the host.

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

pub use hookline_core::{
    // Errors
    BoxError,
    // Listeners
    BoxListener,
    // Plugin capability surface
    CoreApi,
    CoreApiExt,
    DispatchError,
    FnListener,
    FnPlugin,
    // Hook names
    HookName,
    HookNameError,
    // Processing
    Identity,
    // Records
    InputRecord,
    Listener,
    OutputRecord,
    Plugin,
    ProcessFn,
    Processor,
    Record,
    hooks,
    listener_fn,
    plugin_fn,
    process_fn,
    record,
};

pub use hookline_std::{
    ConfigError, Core, HookRegistry, Host, HostBuilder, HostConfig, HostError, LoggerPlugin,
};

/// Bundled plugins.
pub mod plugins {
    pub use hookline_std::plugins::{LoggerPlugin, logger};
}

/// Testing utilities.
pub mod testing {
    pub use hookline_std::testing::{CallLog, FailingListener, RecordingListener, TaggedListener};
}

/// Link-time plugin catalog.
#[cfg(feature = "inventory")]
pub mod catalog {
    pub use hookline_std::catalog::{PluginEntry, PluginFactory, find, names};
}

/// Prelude module - common imports for Hookline.
///
/// # Usage
///
/// ```rust,ignore
/// use hookline::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{
        BoxError, Core, CoreApi, CoreApiExt, HookName, Host, HostBuilder, Identity, Listener,
        Plugin, Processor, Record, hooks, record,
    };
}

#[cfg(feature = "macros")]
pub use hookline_macros::plugin;

#[cfg(feature = "inventory")]
pub use inventory;
