//! Plugins.
//!
//! A plugin is an independently written unit that receives the façade once,
//! at startup, and registers listeners through it. It must not assume any
//! hook has fired yet. Load order is the host's business.

use crate::{api::CoreApi, record::OutputRecord};
use std::fmt;

/// An extension loaded by the host.
///
/// `init` consumes the plugin, so it runs at most once per value.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a `Plugin` for `{A}`",
    label = "missing `Plugin` implementation",
    note = "Implement `Plugin`, wrap a function with `plugin_fn`, or use `#[hookline::plugin]`."
)]
pub trait Plugin<A: 'static = OutputRecord> {
    /// Name used in logs and in the plugin catalog.
    fn name(&self) -> &str;

    /// Register this plugin's listeners.
    fn init(self: Box<Self>, core: &mut dyn CoreApi<A>);
}

/// Adapter turning a function into a [`Plugin`].
///
/// Created by [`plugin_fn`].
pub struct FnPlugin<F> {
    name: String,
    init: F,
}

impl<A, F> Plugin<A> for FnPlugin<F>
where
    A: 'static,
    F: FnOnce(&mut dyn CoreApi<A>),
{
    fn name(&self) -> &str {
        &self.name
    }

    fn init(self: Box<Self>, core: &mut dyn CoreApi<A>) {
        let FnPlugin { init, .. } = *self;
        init(core)
    }
}

impl<F> fmt::Debug for FnPlugin<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnPlugin")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// Wrap an initializer function as a named [`Plugin`].
///
/// ```rust,ignore
/// let audit = plugin_fn("audit", |core: &mut dyn CoreApi| {
///     core.on(hooks::AFTER_PROCESS, |record| Ok(()));
/// });
/// ```
pub fn plugin_fn<A, F>(name: impl Into<String>, init: F) -> FnPlugin<F>
where
    A: 'static,
    F: FnOnce(&mut dyn CoreApi<A>),
{
    FnPlugin {
        name: name.into(),
        init,
    }
}
