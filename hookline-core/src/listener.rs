//! Listeners.
//!
//! A listener is registered against a [`HookName`] and invoked with the
//! arguments the host announces for that hook. It reports nothing back
//! except failure: an `Err` aborts the rest of the dispatch.
//!
//! The argument type `A` is agreed per registry between the host and its
//! plugins. Hooks that announce several values use a tuple or an enum.
//!
//! [`HookName`]: crate::HookName

use crate::error::BoxError;
use std::fmt;

/// A callable registered against a hook.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a `Listener` for `{A}`",
    label = "missing `Listener` implementation",
    note = "Listeners must implement `on_hook(&self, args: &{A})`, or be wrapped with `listener_fn`."
)]
pub trait Listener<A>: 'static {
    /// Called when the hook this listener is registered under is dispatched.
    fn on_hook(&self, args: &A) -> Result<(), BoxError>;

    /// Boxes the listener.
    fn boxed(self) -> BoxListener<A>
    where
        Self: Sized,
    {
        BoxListener::new(self)
    }
}

/// A type-erased listener, as stored by the registry.
pub struct BoxListener<A> {
    inner: Box<dyn Listener<A>>,
}

impl<A> BoxListener<A> {
    /// Erase the type of `listener`.
    pub fn new<L>(listener: L) -> Self
    where
        L: Listener<A>,
    {
        Self {
            inner: Box::new(listener),
        }
    }
}

impl<A: 'static> Listener<A> for BoxListener<A> {
    fn on_hook(&self, args: &A) -> Result<(), BoxError> {
        self.inner.on_hook(args)
    }

    fn boxed(self) -> BoxListener<A> {
        self
    }
}

impl<A> fmt::Debug for BoxListener<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoxListener").finish_non_exhaustive()
    }
}

/// Adapter turning a closure into a [`Listener`].
///
/// Created by [`listener_fn`].
#[derive(Clone, Copy)]
pub struct FnListener<F>(F);

impl<A, F> Listener<A> for FnListener<F>
where
    A: 'static,
    F: Fn(&A) -> Result<(), BoxError> + 'static,
{
    fn on_hook(&self, args: &A) -> Result<(), BoxError> {
        (self.0)(args)
    }
}

impl<F> fmt::Debug for FnListener<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("FnListener").finish()
    }
}

/// Wrap a closure as a [`Listener`].
///
/// # Example
///
/// ```rust,ignore
/// let log = listener_fn(|record: &Record| {
///     println!("{record}");
///     Ok(())
/// });
/// ```
pub fn listener_fn<A, F>(f: F) -> FnListener<F>
where
    A: 'static,
    F: Fn(&A) -> Result<(), BoxError> + 'static,
{
    FnListener(f)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{cell::RefCell, rc::Rc};

    #[test]
    fn fn_listener_receives_args() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        let listener = listener_fn(move |n: &u32| {
            sink.borrow_mut().push(*n);
            Ok(())
        })
        .boxed();

        listener.on_hook(&3).unwrap();
        listener.on_hook(&5).unwrap();
        assert_eq!(*seen.borrow(), vec![3, 5]);
    }

    #[test]
    fn errors_pass_through() {
        let listener = listener_fn(|_: &()| Err("nope".into())).boxed();
        let err = listener.on_hook(&()).unwrap_err();
        assert_eq!(err.to_string(), "nope");
    }
}
