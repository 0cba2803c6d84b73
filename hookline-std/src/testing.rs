//! Testing utilities for Hookline.
//!
//! This module provides listeners that make assertions about dispatch easy.
//!
//! # Features
//!
//! - [`CallLog`]: A shared, ordered log that several listeners can append to
//! - [`RecordingListener`]: A listener that records every argument it receives
//! - [`TaggedListener`]: A listener that records a fixed tag, for ordering checks
//! - [`FailingListener`]: A listener that always fails and counts its calls

use hookline_core::{BoxError, Listener};
use std::{
    cell::{Cell, RefCell},
    fmt,
    rc::Rc,
};

// ============================================================================
// Call Log
// ============================================================================

/// A shared, ordered log.
///
/// Clones share the same storage, so a test keeps one clone and hands the
/// others to listeners.
pub struct CallLog<T> {
    entries: Rc<RefCell<Vec<T>>>,
}

impl<T> CallLog<T> {
    /// Create an empty log.
    pub fn new() -> Self {
        Self {
            entries: Rc::new(RefCell::new(Vec::new())),
        }
    }

    /// Append an entry.
    pub fn push(&self, entry: T) {
        self.entries.borrow_mut().push(entry);
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    /// Whether the log is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }

    /// Remove all entries.
    pub fn clear(&self) {
        self.entries.borrow_mut().clear();
    }
}

impl<T: Clone> CallLog<T> {
    /// A copy of the entries, oldest first.
    pub fn entries(&self) -> Vec<T> {
        self.entries.borrow().clone()
    }
}

impl<T> Clone for CallLog<T> {
    fn clone(&self) -> Self {
        Self {
            entries: self.entries.clone(),
        }
    }
}

impl<T> Default for CallLog<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for CallLog<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.entries.borrow().iter()).finish()
    }
}

// ============================================================================
// Recording Listener
// ============================================================================

/// A listener that records every argument it receives.
///
/// # Example
///
/// ```rust,ignore
/// let recorder = RecordingListener::<Record>::new();
/// registry.register(hooks::AFTER_PROCESS, recorder.clone());
///
/// registry.dispatch("afterProcess", &record)?;
/// assert_eq!(recorder.events(), vec![record]);
/// ```
pub struct RecordingListener<A> {
    log: CallLog<A>,
}

impl<A: Clone> RecordingListener<A> {
    /// Create a recorder with its own log.
    pub fn new() -> Self {
        Self { log: CallLog::new() }
    }

    /// Create a recorder appending to an existing log.
    pub fn with_log(log: CallLog<A>) -> Self {
        Self { log }
    }

    /// A copy of everything recorded so far.
    pub fn events(&self) -> Vec<A> {
        self.log.entries()
    }

    /// Number of calls recorded.
    pub fn count(&self) -> usize {
        self.log.len()
    }

    /// The underlying log.
    pub fn log(&self) -> CallLog<A> {
        self.log.clone()
    }
}

impl<A: Clone> Default for RecordingListener<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A> Clone for RecordingListener<A> {
    fn clone(&self) -> Self {
        Self {
            log: self.log.clone(),
        }
    }
}

impl<A: Clone + 'static> Listener<A> for RecordingListener<A> {
    fn on_hook(&self, args: &A) -> Result<(), BoxError> {
        self.log.push(args.clone());
        Ok(())
    }
}

// ============================================================================
// Tagged Listener
// ============================================================================

/// A listener that appends a fixed tag to a shared log on every call.
///
/// Register several with distinct tags against one log to check the order
/// they were invoked in.
#[derive(Clone)]
pub struct TaggedListener {
    tag: &'static str,
    log: CallLog<&'static str>,
}

impl TaggedListener {
    /// Create a listener that writes `tag` into `log`.
    pub fn new(tag: &'static str, log: &CallLog<&'static str>) -> Self {
        Self {
            tag,
            log: log.clone(),
        }
    }
}

impl<A: 'static> Listener<A> for TaggedListener {
    fn on_hook(&self, _args: &A) -> Result<(), BoxError> {
        self.log.push(self.tag);
        Ok(())
    }
}

// ============================================================================
// Failing Listener
// ============================================================================

/// A listener that always fails.
pub struct FailingListener {
    message: String,
    calls: Rc<Cell<usize>>,
}

impl FailingListener {
    /// Create a listener failing with `message`.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            calls: Rc::new(Cell::new(0)),
        }
    }

    /// Number of times it was invoked.
    pub fn calls(&self) -> usize {
        self.calls.get()
    }
}

impl Clone for FailingListener {
    fn clone(&self) -> Self {
        Self {
            message: self.message.clone(),
            calls: self.calls.clone(),
        }
    }
}

impl<A: 'static> Listener<A> for FailingListener {
    fn on_hook(&self, _args: &A) -> Result<(), BoxError> {
        self.calls.set(self.calls.get() + 1);
        Err(self.message.clone().into())
    }
}
