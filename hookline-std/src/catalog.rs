//! Link-time plugin catalog.
//!
//! Crates submit plugin factories with `inventory::submit!` (or the
//! `#[hookline::plugin]` attribute) and hosts look them up by name. The
//! bundled [`LoggerPlugin`](crate::LoggerPlugin) is always listed as
//! `"logger"`. The catalog only constructs plugins; which ones load, and in
//! what order, is always the host's decision.
//!
//! Factories receive the host's completion hook so that plugins reacting to
//! a finished run listen where the host actually announces it.
//!
//! ```rust,ignore
//! fn make_audit(completion_hook: &HookName) -> Box<dyn Plugin> {
//!     Box::new(AuditPlugin::on_hook(completion_hook.clone()))
//! }
//!
//! inventory::submit! { PluginEntry::new("audit", make_audit) }
//! ```

use hookline_core::{HookName, Plugin};
use std::fmt;

/// Builds a catalog plugin for a host announcing completion on the given hook.
pub type PluginFactory = fn(&HookName) -> Box<dyn Plugin>;

/// A named plugin factory collected into the catalog.
pub struct PluginEntry {
    name: &'static str,
    factory: PluginFactory,
}

impl PluginEntry {
    /// Create a catalog entry.
    pub const fn new(name: &'static str, factory: PluginFactory) -> Self {
        Self { name, factory }
    }

    /// The catalog name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Build a fresh plugin instance for a host completing on `completion_hook`.
    pub fn create(&self, completion_hook: &HookName) -> Box<dyn Plugin> {
        (self.factory)(completion_hook)
    }
}

impl fmt::Debug for PluginEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PluginEntry")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

inventory::collect!(PluginEntry);

// Bundled plugins are listed here rather than submitted, so they are present
// even when the linker drops unreferenced objects from this crate.
static BUILTIN: [PluginEntry; 1] = [PluginEntry::new(
    "logger",
    crate::plugins::logger::make_logger,
)];

/// Every entry: bundled plugins first, then submitted ones.
pub fn entries() -> impl Iterator<Item = &'static PluginEntry> {
    BUILTIN.iter().chain(inventory::iter::<PluginEntry>)
}

/// Find the entry registered under `name`.
///
/// Bundled plugins take precedence. If several crates submit the same name,
/// the first one found wins; which one that is depends on link order.
pub fn find(name: &str) -> Option<&'static PluginEntry> {
    entries().find(|entry| entry.name == name)
}

/// All catalog names, sorted and deduplicated.
pub fn names() -> Vec<&'static str> {
    let mut names: Vec<&'static str> = entries().map(PluginEntry::name).collect();
    names.sort_unstable();
    names.dedup();
    names
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::facade::Core;
    use hookline_core::{Identity, hooks};

    #[test]
    fn builtin_logger_is_listed() {
        assert!(names().contains(&"logger"));
        let entry = find("logger").unwrap();
        assert_eq!(entry.name(), "logger");
        assert_eq!(entry.create(&hooks::AFTER_PROCESS).name(), "logger");
    }

    #[test]
    fn factory_receives_completion_hook() {
        let done = HookName::new("done").unwrap();
        let mut core: Core<_> = Core::new(Identity);
        core.load(find("logger").unwrap().create(&done));

        assert_eq!(core.registry().listener_count("done"), 1);
        assert_eq!(core.registry().listener_count("afterProcess"), 0);
    }

    #[test]
    fn unknown_names_are_absent() {
        assert!(find("no-such-plugin").is_none());
    }
}
