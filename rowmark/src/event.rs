//! Outbound notifications.
//!
//! The table never relies on the host observing its fields. Everything a
//! renderer or consumer needs to react to is pushed through a [`Listeners`]
//! registry: [`SelectionEvent`]s from the selection coordinator and
//! [`StoreEvent`]s from the row status store.
//!
//! Listeners run synchronously, in registration order, on the thread that
//! triggered the event. They are owned by the table and therefore cannot
//! call back into it during the same cycle.

use std::fmt;

// =============================================================================
// Events
// =============================================================================

/// Emitted by the selection coordinator on every toggle.
#[derive(Debug, Clone, PartialEq)]
pub enum SelectionEvent<T> {
    /// Visible rows that are currently checked, in display order.
    Change(Vec<T>),
    /// The single row whose checkbox triggered the toggle.
    Select(T),
    /// A current-page toggle finished; `true` if anything is selected.
    CurrentPage(bool),
    /// An all-pages toggle finished; `true` if anything is selected.
    AllPage(bool),
}

impl<T> SelectionEvent<T> {
    /// Event name as exposed to host bindings.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Change(_) => "selection-change",
            Self::Select(_) => "selection-select",
            Self::CurrentPage(_) => "selection-current-page",
            Self::AllPage(_) => "selection-all-page",
        }
    }
}

/// Emitted by the row status store after a dataset mutation completes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreEvent {
    /// The dataset was replaced wholesale.
    Replaced { len: usize },
    /// A row was inserted at `index`.
    Inserted { index: usize },
    /// The row at `index` was removed.
    Removed { index: usize },
    /// The error list of the row at `index` changed.
    ErrorsChanged { index: usize },
    /// One or more checked flags changed.
    CheckedChanged,
}

// =============================================================================
// Listener registry
// =============================================================================

/// Handle returned by [`Listeners::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(usize);

impl fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "__subscription_{}", self.0)
    }
}

type Listener<E> = Box<dyn FnMut(&E) + Send>;

/// Ordered set of callbacks for one event type.
pub struct Listeners<E> {
    entries: Vec<(SubscriptionId, Listener<E>)>,
    next_id: usize,
}

impl<E> Listeners<E> {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            next_id: 0,
        }
    }

    /// Register a callback. Returns the handle used to remove it.
    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: FnMut(&E) + Send + 'static,
    {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, Box::new(listener)));
        id
    }

    /// Remove a callback. Returns false if the handle was unknown.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry_id, _)| *entry_id != id);
        self.entries.len() != before
    }

    /// Deliver an event to every callback in registration order.
    pub fn emit(&mut self, event: &E) {
        for (_, listener) in &mut self.entries {
            listener(event);
        }
    }

    /// Get the number of registered callbacks.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if no callbacks are registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<E> Default for Listeners<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> fmt::Debug for Listeners<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Listeners")
            .field("len", &self.entries.len())
            .finish()
    }
}
