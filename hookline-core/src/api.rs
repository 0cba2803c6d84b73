//! The capability surface handed to plugins.
//!
//! [`CoreApi`] exposes exactly two operations: add a listener, and run the
//! processor. It deliberately has no way to dispatch a hook. Plugins receive
//! `&mut dyn CoreApi<A>`, so they can only *add* observers, never trigger
//! them; dispatching stays with whoever owns the concrete façade.

use crate::{
    error::BoxError,
    hook::HookName,
    listener::{BoxListener, Listener, listener_fn},
    record::{InputRecord, OutputRecord},
};

/// Registration and processing capabilities of the engine façade.
///
/// `A` is the argument type listeners receive at dispatch.
pub trait CoreApi<A: 'static = OutputRecord> {
    /// Append `listener` to the listeners of `name`.
    ///
    /// Listeners for one name fire in the order they were registered.
    fn register_hook(&mut self, name: HookName, listener: BoxListener<A>);

    /// Run the processor on `input`.
    ///
    /// By convention only the host processes; this is exposed so a plugin
    /// could if it had to.
    fn process(&self, input: InputRecord) -> Result<OutputRecord, BoxError>;
}

/// Conveniences over [`CoreApi`], available on every implementor including
/// `dyn CoreApi<A>`.
pub trait CoreApiExt<A: 'static>: CoreApi<A> {
    /// Register any [`Listener`] under `name`.
    fn listen<L>(&mut self, name: HookName, listener: L)
    where
        L: Listener<A>,
    {
        self.register_hook(name, listener.boxed());
    }

    /// Register a closure under `name`.
    ///
    /// ```rust,ignore
    /// core.on(hooks::AFTER_PROCESS, |record| {
    ///     tracing::info!(%record, "processed");
    ///     Ok(())
    /// });
    /// ```
    fn on<F>(&mut self, name: HookName, f: F)
    where
        F: Fn(&A) -> Result<(), BoxError> + 'static,
    {
        self.register_hook(name, listener_fn(f).boxed());
    }
}

impl<A: 'static, T: CoreApi<A> + ?Sized> CoreApiExt<A> for T {}
