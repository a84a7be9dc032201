//! Header checkbox state.
//!
//! A split table renders its header twice: once above the scrollable columns
//! and once above the pinned columns. Both checkboxes must show the same
//! state, so every write goes through a [`HeaderSink`] that fans a single
//! [`HeaderUpdate`] out to both targets.

/// Tri-state value shown by a header checkbox.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum HeaderIndicator {
    /// Nothing is fully selected.
    #[default]
    Unchecked,
    /// Every row is checked, selected through the current page.
    CurrentPageChecked,
    /// Every row is checked, selected across all pages.
    AllChecked,
}

/// Raw flags held by one header target.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HeaderState {
    pub checked_all: bool,
    pub checked_current: bool,
}

impl HeaderState {
    /// Apply an update to these flags.
    pub fn apply(&mut self, update: HeaderUpdate) {
        match update {
            HeaderUpdate::Clear => {
                self.checked_all = false;
                self.checked_current = false;
            }
            HeaderUpdate::MarkCurrent => {
                self.checked_current = true;
            }
            HeaderUpdate::MarkAll => {
                self.checked_current = true;
                self.checked_all = true;
            }
        }
    }

    /// Derive the tri-state indicator.
    pub fn indicator(&self) -> HeaderIndicator {
        if self.checked_all {
            HeaderIndicator::AllChecked
        } else if self.checked_current {
            HeaderIndicator::CurrentPageChecked
        } else {
            HeaderIndicator::Unchecked
        }
    }
}

/// A write to the header flags.
///
/// `MarkCurrent` leaves `checked_all` as it was.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderUpdate {
    /// Clear both flags.
    Clear,
    /// Set `checked_current`.
    MarkCurrent,
    /// Set `checked_current` and `checked_all`.
    MarkAll,
}

/// A rendered header checkbox the sink writes to.
pub trait HeaderTarget: Send + std::fmt::Debug {
    /// Apply an update.
    fn apply(&mut self, update: HeaderUpdate);

    /// Current flags.
    fn state(&self) -> HeaderState;
}

/// In-memory header target.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HeaderCheckbox {
    state: HeaderState,
}

impl HeaderCheckbox {
    /// Create an unchecked header checkbox.
    pub fn new() -> Self {
        Self::default()
    }
}

impl HeaderTarget for HeaderCheckbox {
    fn apply(&mut self, update: HeaderUpdate) {
        self.state.apply(update);
    }

    fn state(&self) -> HeaderState {
        self.state
    }
}

/// Fans header updates out to the primary and pinned header targets.
#[derive(Debug)]
pub struct HeaderSink {
    primary: Box<dyn HeaderTarget>,
    pinned: Box<dyn HeaderTarget>,
}

impl Default for HeaderSink {
    fn default() -> Self {
        Self::new()
    }
}

impl HeaderSink {
    /// Create a sink with two in-memory targets.
    pub fn new() -> Self {
        Self::with_targets(Box::new(HeaderCheckbox::new()), Box::new(HeaderCheckbox::new()))
    }

    /// Create a sink writing to host-supplied targets.
    pub fn with_targets(primary: Box<dyn HeaderTarget>, pinned: Box<dyn HeaderTarget>) -> Self {
        Self { primary, pinned }
    }

    /// Write an update to both targets.
    pub fn push(&mut self, update: HeaderUpdate) {
        self.primary.apply(update);
        self.pinned.apply(update);
        debug_assert_eq!(self.primary.state(), self.pinned.state());
    }

    /// Flags on the primary (scrollable) header.
    pub fn primary(&self) -> HeaderState {
        self.primary.state()
    }

    /// Flags on the pinned (frozen columns) header.
    pub fn pinned(&self) -> HeaderState {
        self.pinned.state()
    }

    /// Tri-state indicator shown by both headers.
    pub fn indicator(&self) -> HeaderIndicator {
        self.primary.state().indicator()
    }
}
