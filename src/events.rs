//! A named, ordered callback registry.

use std::collections::HashMap;
use std::fmt;

type Handler<'a, A> = Box<dyn FnMut(&A) + 'a>;

/// Maps event names to the handlers registered under them.
///
/// Handlers run in registration order and receive the arguments passed to
/// [`trigger`](EventEmitter::trigger). There is no way to remove a handler.
///
/// # Examples
///
/// ```
/// use std::cell::Cell;
/// use coinchange::EventEmitter;
///
/// let changes = Cell::new(0);
/// let mut emitter = EventEmitter::new();
/// emitter.on("ageChange", |age: &u32| {
///     assert_eq!(*age, 31);
///     changes.set(changes.get() + 1);
/// });
///
/// assert_eq!(emitter.trigger("ageChange", &31), 1);
/// assert_eq!(emitter.trigger("nameChange", &0), 0);
/// assert_eq!(changes.get(), 1);
/// ```
pub struct EventEmitter<'a, A> {
    handlers: HashMap<String, Vec<Handler<'a, A>>>,
}

impl<'a, A> fmt::Debug for EventEmitter<'a, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut events: Vec<(&str, usize)> = self
            .handlers
            .iter()
            .map(|(name, handlers)| (name.as_str(), handlers.len()))
            .collect();
        events.sort_unstable();

        f.debug_struct("EventEmitter")
            .field("events", &events)
            .finish()
    }
}

impl<'a, A> Default for EventEmitter<'a, A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, A> EventEmitter<'a, A> {
    pub fn new() -> Self {
        Self {
            handlers: HashMap::new(),
        }
    }

    /// Registers `handler` under `event`, after any already registered.
    pub fn on<F>(&mut self, event: impl Into<String>, handler: F)
    where
        F: FnMut(&A) + 'a,
    {
        self.handlers
            .entry(event.into())
            .or_default()
            .push(Box::new(handler));
    }

    /// Calls every handler registered under `event` with `args`.
    ///
    /// Unknown events do nothing. Returns how many handlers ran.
    pub fn trigger(&mut self, event: &str, args: &A) -> usize {
        match self.handlers.get_mut(event) {
            Some(handlers) => {
                for handler in handlers.iter_mut() {
                    handler(args);
                }
                handlers.len()
            }
            None => 0,
        }
    }

    pub fn listener_count(&self, event: &str) -> usize {
        self.handlers.get(event).map_or(0, Vec::len)
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}
