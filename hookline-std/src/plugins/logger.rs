//! Logger plugin - logs every processed result.

use hookline_core::{BoxError, CoreApi, CoreApiExt, HookName, OutputRecord, Plugin, hooks};
use tracing::info;

/// Logs the output record each time the completion hook fires.
///
/// Listens on [`hooks::AFTER_PROCESS`] unless told otherwise.
///
/// # Example
///
/// ```rust,ignore
/// let host = HostBuilder::new(Identity)
///     .plugin(LoggerPlugin::new())
///     .build();
/// ```
#[derive(Debug, Clone)]
pub struct LoggerPlugin {
    hook: HookName,
    target: &'static str,
}

impl LoggerPlugin {
    /// Log on `afterProcess`.
    pub fn new() -> Self {
        Self {
            hook: hooks::AFTER_PROCESS,
            target: "logger",
        }
    }

    /// Log on a different hook.
    pub fn on_hook(hook: HookName) -> Self {
        Self {
            hook,
            ..Self::new()
        }
    }

    /// Use a custom label in log lines.
    pub fn labelled(mut self, label: &'static str) -> Self {
        self.target = label;
        self
    }
}

impl Default for LoggerPlugin {
    fn default() -> Self {
        Self::new()
    }
}

impl Plugin for LoggerPlugin {
    fn name(&self) -> &str {
        "logger"
    }

    fn init(self: Box<Self>, core: &mut dyn CoreApi) {
        let LoggerPlugin { hook, target } = *self;
        let hook_label = hook.clone();
        core.on(hook, move |result: &OutputRecord| -> Result<(), BoxError> {
            info!(plugin = target, hook = %hook_label, %result, "processed result");
            Ok(())
        });
    }
}

#[cfg(feature = "inventory")]
pub(crate) fn make_logger(completion_hook: &HookName) -> Box<dyn Plugin> {
    Box::new(LoggerPlugin::on_hook(completion_hook.clone()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::facade::Core;
    use hookline_core::{Identity, record};

    #[test]
    fn registers_one_listener_on_after_process() {
        let mut core: Core<_> = Core::new(Identity);
        core.load(Box::new(LoggerPlugin::new()));

        assert_eq!(core.registry().listener_count("afterProcess"), 1);
        assert!(core.dispatch("afterProcess", &record! { "foo": "bar" }).is_ok());
    }

    #[test]
    fn custom_hook() {
        let mut core: Core<_> = Core::new(Identity);
        let done = HookName::new("done").unwrap();
        core.load(Box::new(LoggerPlugin::on_hook(done).labelled("audit")));

        assert_eq!(core.registry().listener_count("afterProcess"), 0);
        assert_eq!(core.registry().listener_count("done"), 1);
    }
}
