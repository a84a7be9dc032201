//! Selection coordinator.
//!
//! Turns a checkbox toggle into outbound notifications and a header update.
//! The coordinator keeps no selection state of its own: it reads the checked
//! flags from the [`RowStatusStore`] every time.

use log::{debug, warn};

use crate::event::{Listeners, SelectionEvent, SubscriptionId};
use crate::header::{HeaderIndicator, HeaderSink, HeaderUpdate};
use crate::row::TableRow;
use crate::store::RowStatusStore;
use crate::view::RowView;

/// What a selection toggle applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionScope {
    /// The currently visible page.
    Current,
    /// The whole dataset.
    All,
}

/// Result of processing one toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionSummary {
    /// Number of visible rows that are checked.
    pub selected: usize,
    /// Whether every row in the dataset is checked.
    pub all_checked: bool,
    /// Header indicator after the update.
    pub indicator: HeaderIndicator,
}

/// Processes selection toggles and drives the header checkboxes.
#[derive(Debug)]
pub struct SelectionCoordinator<T> {
    header: HeaderSink,
    listeners: Listeners<SelectionEvent<T>>,
}

impl<T: TableRow> Default for SelectionCoordinator<T> {
    fn default() -> Self {
        Self::new(HeaderSink::new())
    }
}

impl<T: TableRow> SelectionCoordinator<T> {
    /// Create a coordinator writing to the given header sink.
    pub fn new(header: HeaderSink) -> Self {
        Self {
            header,
            listeners: Listeners::new(),
        }
    }

    /// The header sink.
    pub fn header(&self) -> &HeaderSink {
        &self.header
    }

    /// Register a callback for selection events.
    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: FnMut(&SelectionEvent<T>) + Send + 'static,
    {
        self.listeners.subscribe(listener)
    }

    /// Remove a selection callback.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.listeners.unsubscribe(id)
    }

    /// Checked rows among the visible ones, in display order.
    pub fn selection(store: &RowStatusStore<T>, view: &dyn RowView) -> Vec<T> {
        view.visible_indices(store.len())
            .into_iter()
            .filter(|&index| store.status(index).is_some_and(|s| s.checked))
            .filter_map(|index| store.row(index).cloned())
            .collect()
    }

    /// Process a toggle.
    ///
    /// `row_index` is the dataset index of the row whose checkbox triggered
    /// the toggle, or `None` for a header checkbox.
    pub fn toggle(
        &mut self,
        store: &RowStatusStore<T>,
        view: &dyn RowView,
        scope: SelectionScope,
        row_index: Option<usize>,
    ) -> SelectionSummary {
        let selection = Self::selection(store, view);
        let selected = selection.len();
        let any_selected = selected != 0;

        self.listeners.emit(&SelectionEvent::Change(selection));

        if let Some(index) = row_index {
            match store.row(index) {
                Some(row) => self.listeners.emit(&SelectionEvent::Select(row.clone())),
                None => warn!(
                    "Toggle for row {} ignored, table has {} rows",
                    index,
                    store.len()
                ),
            }
        }

        match scope {
            SelectionScope::Current => self.listeners.emit(&SelectionEvent::CurrentPage(any_selected)),
            SelectionScope::All => self.listeners.emit(&SelectionEvent::AllPage(any_selected)),
        }

        let all_checked = store.is_all_checked();
        let update = match (all_checked, scope) {
            (false, _) => HeaderUpdate::Clear,
            (true, SelectionScope::Current) => HeaderUpdate::MarkCurrent,
            (true, SelectionScope::All) => HeaderUpdate::MarkAll,
        };
        self.header.push(update);

        let indicator = self.header.indicator();
        debug!(
            "Toggle {:?} (row {:?}): {} selected, all checked: {}, header {:?}",
            scope, row_index, selected, all_checked, indicator
        );

        SelectionSummary {
            selected,
            all_checked,
            indicator,
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::{Value, json};

    use super::*;
    use crate::view::AllRows;

    #[test]
    fn test_selection_follows_view_order() {
        let mut store = RowStatusStore::with_rows(vec![json!({"id": 1}), json!({"id": 2}), json!({"id": 3})]);
        store.set_checked_where(&[0, 2], true);

        let view: Vec<usize> = vec![2, 1, 0];
        let selection = SelectionCoordinator::<Value>::selection(&store, &view);

        assert_eq!(selection, vec![json!({"id": 3}), json!({"id": 1})]);
    }

    #[test]
    fn test_out_of_range_row_index_skips_select() {
        let store = RowStatusStore::with_rows(vec![json!({"id": 1})]);
        let mut coordinator = SelectionCoordinator::<Value>::default();
        let names = std::sync::Arc::new(std::sync::Mutex::new(Vec::new()));
        let sink = std::sync::Arc::clone(&names);
        coordinator.subscribe(move |e| sink.lock().unwrap().push(e.name()));

        coordinator.toggle(&store, &AllRows, SelectionScope::Current, Some(5));

        assert_eq!(*names.lock().unwrap(), vec!["selection-change", "selection-current-page"]);
    }
}
