#![allow(dead_code)]

use hookline::{BoxError, CoreApi, CoreApiExt, HookName, Listener, Plugin, Record};
use std::{cell::RefCell, rc::Rc};

// ============================================================================
// Shared state
// ============================================================================

/// An external list listeners append to, shared by clones.
pub type Sink<T> = Rc<RefCell<Vec<T>>>;

pub fn sink<T>() -> Sink<T> {
    Rc::new(RefCell::new(Vec::new()))
}

// ============================================================================
// Test Listeners
// ============================================================================

/// Appends `(id, record)` for every call.
pub struct IdRecordingListener {
    pub id: usize,
    pub seen: Sink<(usize, Record)>,
}

impl Listener<Record> for IdRecordingListener {
    fn on_hook(&self, record: &Record) -> Result<(), BoxError> {
        self.seen.borrow_mut().push((self.id, record.clone()));
        Ok(())
    }
}

/// Fails on every call after recording that it ran.
pub struct ExplodingListener {
    pub ran: Sink<&'static str>,
}

impl Listener<Record> for ExplodingListener {
    fn on_hook(&self, _record: &Record) -> Result<(), BoxError> {
        self.ran.borrow_mut().push("exploding");
        Err(std::io::Error::other("listener exploded").into())
    }
}

// ============================================================================
// Test Plugins
// ============================================================================

/// Registers one `IdRecordingListener` under `hook`.
pub struct ObserverPlugin {
    pub name: &'static str,
    pub id: usize,
    pub hook: HookName,
    pub seen: Sink<(usize, Record)>,
}

impl Plugin for ObserverPlugin {
    fn name(&self) -> &str {
        self.name
    }

    fn init(self: Box<Self>, core: &mut dyn CoreApi) {
        let ObserverPlugin { id, hook, seen, .. } = *self;
        core.listen(hook, IdRecordingListener { id, seen });
    }
}
