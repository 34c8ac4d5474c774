//! Callback registry and dispatch.

use crate::callbacks::error::{CallbackFailure, CallbackPanic};
use crate::callbacks::hook::Hook;
use crate::core::{Event, State};
use std::fmt;
use std::panic::{catch_unwind, AssertUnwindSafe};

/// Outcome of a guard callback.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Verdict {
    /// Let the transition continue
    Proceed,
    /// Veto the transition; the machine stays where it is
    Cancel,
}

/// Guard handler registered on a `Before*` or `Leave*` hook.
pub type GuardFn<S> = Box<dyn FnMut(&Event<S>) -> Verdict + Send>;

/// Observer handler registered on an `Enter*` or `After*` hook.
pub type ObserverFn<S> = Box<dyn FnMut(&Event<S>) -> Result<(), CallbackFailure> + Send>;

enum Handler<S: State> {
    Guard(GuardFn<S>),
    Observer(ObserverFn<S>),
}

/// Typed callback table, keyed by [`Hook`].
///
/// At most one handler is kept per hook; registering the same hook again
/// replaces the earlier handler.
///
/// # Example
///
/// ```rust
/// use turnstile::callbacks::{Callbacks, Verdict};
/// use turnstile::core::Event;
///
/// let callbacks: Callbacks<String> = Callbacks::new()
///     .before_event("Timeout", |_| Verdict::Cancel)
///     .enter_any(|e: &Event<String>| {
///         println!("{} to {}", e.from, e.to);
///         Ok(())
///     });
///
/// assert_eq!(callbacks.len(), 2);
/// ```
pub struct Callbacks<S: State> {
    entries: Vec<(Hook<S>, Handler<S>)>,
}

impl<S: State> Default for Callbacks<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State> fmt::Debug for Callbacks<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.entries.iter().map(|(hook, _)| hook.to_string()))
            .finish()
    }
}

impl<S: State> Callbacks<S> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Guard run when `event` is submitted.
    pub fn before_event<F>(self, event: impl Into<String>, guard: F) -> Self
    where
        F: FnMut(&Event<S>) -> Verdict + Send + 'static,
    {
        self.with_guard(Hook::BeforeEvent(event.into()), guard)
    }

    /// Guard run for every submitted event that matches the table.
    pub fn before_any<F>(self, guard: F) -> Self
    where
        F: FnMut(&Event<S>) -> Verdict + Send + 'static,
    {
        self.with_guard(Hook::BeforeAny, guard)
    }

    /// Guard run when the machine is about to leave `state`.
    pub fn leave_state<F>(self, state: S, guard: F) -> Self
    where
        F: FnMut(&Event<S>) -> Verdict + Send + 'static,
    {
        self.with_guard(Hook::LeaveState(state), guard)
    }

    pub fn leave_any<F>(self, guard: F) -> Self
    where
        F: FnMut(&Event<S>) -> Verdict + Send + 'static,
    {
        self.with_guard(Hook::LeaveAny, guard)
    }

    /// Observer run after the machine has entered `state`.
    pub fn enter_state<F>(self, state: S, observer: F) -> Self
    where
        F: FnMut(&Event<S>) -> Result<(), CallbackFailure> + Send + 'static,
    {
        self.with_observer(Hook::EnterState(state), observer)
    }

    pub fn enter_any<F>(self, observer: F) -> Self
    where
        F: FnMut(&Event<S>) -> Result<(), CallbackFailure> + Send + 'static,
    {
        self.with_observer(Hook::EnterAny, observer)
    }

    /// Observer run after `event` has moved the machine.
    pub fn after_event<F>(self, event: impl Into<String>, observer: F) -> Self
    where
        F: FnMut(&Event<S>) -> Result<(), CallbackFailure> + Send + 'static,
    {
        self.with_observer(Hook::AfterEvent(event.into()), observer)
    }

    pub fn after_any<F>(self, observer: F) -> Self
    where
        F: FnMut(&Event<S>) -> Result<(), CallbackFailure> + Send + 'static,
    {
        self.with_observer(Hook::AfterAny, observer)
    }

    /// Whether a handler is registered for `hook`.
    pub fn contains(&self, hook: &Hook<S>) -> bool {
        self.entries.iter().any(|(h, _)| h == hook)
    }

    /// Registered hooks in registration order.
    pub fn hooks(&self) -> impl Iterator<Item = &Hook<S>> {
        self.entries.iter().map(|(hook, _)| hook)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn with_guard<F>(mut self, hook: Hook<S>, guard: F) -> Self
    where
        F: FnMut(&Event<S>) -> Verdict + Send + 'static,
    {
        self.insert(hook, Handler::Guard(Box::new(guard)));
        self
    }

    fn with_observer<F>(mut self, hook: Hook<S>, observer: F) -> Self
    where
        F: FnMut(&Event<S>) -> Result<(), CallbackFailure> + Send + 'static,
    {
        self.insert(hook, Handler::Observer(Box::new(observer)));
        self
    }

    fn insert(&mut self, hook: Hook<S>, handler: Handler<S>) {
        match self.entries.iter_mut().find(|(h, _)| *h == hook) {
            Some(entry) => entry.1 = handler,
            None => self.entries.push((hook, handler)),
        }
    }

    fn handler_mut(&mut self, hook: &Hook<S>) -> Option<&mut Handler<S>> {
        self.entries
            .iter_mut()
            .find(|(h, _)| h == hook)
            .map(|(_, handler)| handler)
    }

    /// Run the guard registered on `hook`, if any.
    ///
    /// A missing guard proceeds. A panicking guard is reported as an error.
    pub(crate) fn run_guard(
        &mut self,
        hook: &Hook<S>,
        event: &Event<S>,
    ) -> Result<Verdict, CallbackFailure> {
        match self.handler_mut(hook) {
            Some(Handler::Guard(guard)) => catch_unwind(AssertUnwindSafe(|| guard(event)))
                .map_err(|payload| CallbackPanic::from_payload(payload).into()),
            _ => Ok(Verdict::Proceed),
        }
    }

    /// Run the observer registered on `hook`, if any.
    pub(crate) fn run_observer(
        &mut self,
        hook: &Hook<S>,
        event: &Event<S>,
    ) -> Result<(), CallbackFailure> {
        match self.handler_mut(hook) {
            Some(Handler::Observer(observer)) => {
                match catch_unwind(AssertUnwindSafe(|| observer(event))) {
                    Ok(result) => result,
                    Err(payload) => Err(CallbackPanic::from_payload(payload).into()),
                }
            }
            _ => Ok(()),
        }
    }
}
