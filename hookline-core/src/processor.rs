//! The processing function.
//!
//! A [`Processor`] turns an [`InputRecord`] into an [`OutputRecord`]. It is
//! deterministic and has no knowledge of hooks: the host calls it directly
//! and dispatches completion hooks only after it returns. That keeps the
//! transformation testable without any plugin wiring.

use crate::{
    error::BoxError,
    record::{InputRecord, OutputRecord},
};
use std::{convert::Infallible, fmt};

/// A pure transformation from one record to another.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a `Processor`",
    label = "missing `Processor` implementation",
    note = "Implement `process`, or wrap a closure with `process_fn`."
)]
pub trait Processor: 'static {
    /// Failure reported by [`process`](Processor::process). Opaque to the engine.
    type Error: Into<BoxError>;

    /// Transform `input` into an output record.
    fn process(&self, input: InputRecord) -> Result<OutputRecord, Self::Error>;
}

/// Returns its input unchanged.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Identity;

impl Processor for Identity {
    type Error = Infallible;

    fn process(&self, input: InputRecord) -> Result<OutputRecord, Self::Error> {
        Ok(input)
    }
}

/// Adapter turning a closure into a [`Processor`].
///
/// Created by [`process_fn`].
#[derive(Clone, Copy)]
pub struct ProcessFn<F>(F);

impl<F, E> Processor for ProcessFn<F>
where
    F: Fn(InputRecord) -> Result<OutputRecord, E> + 'static,
    E: Into<BoxError>,
{
    type Error = E;

    fn process(&self, input: InputRecord) -> Result<OutputRecord, Self::Error> {
        (self.0)(input)
    }
}

impl<F> fmt::Debug for ProcessFn<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ProcessFn").finish()
    }
}

/// Wrap a closure as a [`Processor`].
pub fn process_fn<F, E>(f: F) -> ProcessFn<F>
where
    F: Fn(InputRecord) -> Result<OutputRecord, E> + 'static,
    E: Into<BoxError>,
{
    ProcessFn(f)
}
