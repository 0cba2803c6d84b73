//! Hook registry: per hook name, the listeners in registration order.

use hookline_core::{BoxListener, DispatchError, HookName, Listener};
use std::{collections::HashMap, fmt};
use tracing::{debug, trace};

/// Listeners keyed by hook name.
///
/// The registry only grows: there is no way to remove a listener. It is
/// owned by one façade for the life of the process.
pub struct HookRegistry<A> {
    hooks: HashMap<HookName, Vec<BoxListener<A>>>,
}

impl<A: 'static> HookRegistry<A> {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            hooks: HashMap::new(),
        }
    }

    /// Append a listener for `name`.
    ///
    /// The first registration for a name creates its list. Cannot fail.
    pub fn register<L: Listener<A>>(&mut self, name: HookName, listener: L) {
        let listeners = self.hooks.entry(name.clone()).or_default();
        listeners.push(listener.boxed());
        debug!(hook = %name, listeners = listeners.len(), "listener registered");
    }

    /// Invoke every listener registered for `name`, in registration order,
    /// each with the same `args`.
    ///
    /// A name nobody registered for is a no-op. The first listener to return
    /// an error stops the dispatch: later listeners are not invoked and the
    /// error is returned as-is, wrapped with the hook name and the listener's
    /// position.
    pub fn dispatch(&self, name: &str, args: &A) -> Result<(), DispatchError> {
        let Some((hook, listeners)) = self.hooks.get_key_value(name) else {
            trace!(hook = %name, "no listeners registered");
            return Ok(());
        };

        trace!(hook = %hook, listeners = listeners.len(), "dispatching hook");
        for (index, listener) in listeners.iter().enumerate() {
            listener
                .on_hook(args)
                .map_err(|source| DispatchError::Listener {
                    hook: hook.clone(),
                    index,
                    source,
                })?;
        }
        Ok(())
    }

    /// Number of listeners registered for `name`.
    pub fn listener_count(&self, name: &str) -> usize {
        self.hooks.get(name).map_or(0, Vec::len)
    }

    /// Whether anything is registered for `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.hooks.contains_key(name)
    }

    /// Every hook name with at least one listener, in no particular order.
    pub fn hook_names(&self) -> impl Iterator<Item = &HookName> {
        self.hooks.keys()
    }

    /// Whether no listener has been registered at all.
    pub fn is_empty(&self) -> bool {
        self.hooks.is_empty()
    }
}

impl<A: 'static> Default for HookRegistry<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A> fmt::Debug for HookRegistry<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut map = f.debug_map();
        for (name, listeners) in &self.hooks {
            map.entry(&name.as_str(), &listeners.len());
        }
        map.finish()
    }
}
