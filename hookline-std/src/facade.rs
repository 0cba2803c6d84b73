//! The core façade: one processor plus one hook registry.
//!
//! Plugins never see [`Core`] itself, only `&mut dyn CoreApi<A>`, which has
//! no dispatch method. Only the owner of the `Core` value can dispatch.

use crate::registry::HookRegistry;
use hookline_core::{
    BoxError, BoxListener, CoreApi, DispatchError, HookName, InputRecord, OutputRecord, Plugin,
    Processor,
};
use std::fmt;
use tracing::info;

/// Binds a [`Processor`] and a [`HookRegistry`].
///
/// Constructed once per process; owns the registry exclusively.
pub struct Core<P, A = OutputRecord> {
    processor: P,
    registry: HookRegistry<A>,
}

impl<P: Processor, A: 'static> Core<P, A> {
    /// Create a façade around `processor` with an empty registry.
    pub fn new(processor: P) -> Self {
        Self {
            processor,
            registry: HookRegistry::new(),
        }
    }

    /// Hand this façade to `plugin` so it can register its listeners.
    ///
    /// Call this for every plugin before the first dispatch; the registry
    /// does not enforce it.
    pub fn load(&mut self, plugin: Box<dyn Plugin<A>>) {
        let name = plugin.name().to_owned();
        plugin.init(self);
        info!(plugin = %name, "plugin loaded");
    }

    /// Run the processor, keeping its concrete error type.
    pub fn run_processor(&self, input: InputRecord) -> Result<OutputRecord, P::Error> {
        self.processor.process(input)
    }

    /// Invoke the listeners registered for `name`. Host-only.
    ///
    /// See [`HookRegistry::dispatch`].
    pub fn dispatch(&self, name: &str, args: &A) -> Result<(), DispatchError> {
        self.registry.dispatch(name, args)
    }

    /// The processor.
    pub fn processor(&self) -> &P {
        &self.processor
    }

    /// Read-only view of the registry.
    pub fn registry(&self) -> &HookRegistry<A> {
        &self.registry
    }
}

impl<P: Processor, A: 'static> CoreApi<A> for Core<P, A> {
    fn register_hook(&mut self, name: HookName, listener: BoxListener<A>) {
        self.registry.register(name, listener);
    }

    fn process(&self, input: InputRecord) -> Result<OutputRecord, BoxError> {
        self.processor.process(input).map_err(Into::into)
    }
}

impl<P: fmt::Debug, A> fmt::Debug for Core<P, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Core")
            .field("processor", &self.processor)
            .field("registry", &self.registry)
            .finish()
    }
}
