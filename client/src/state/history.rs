//! Session history store.
//!
//! DESIGN
//! ======
//! The store is an explicitly owned value provided through Leptos context
//! as `RwSignal<HistoryState>`. It only grows at the front (`prepend`); the
//! startup fetch (`finish_loading`) appends the backend's sessions behind
//! any created locally before it returned.

#[cfg(test)]
#[path = "history_test.rs"]
mod history_test;

use crate::net::types::HistoryItem;

/// Ordered sessions, newest first, plus the startup loading flag.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HistoryState {
    items: Vec<HistoryItem>,
    loading: bool,
}

impl Default for HistoryState {
    /// The store starts in the loading state; the page fetches on mount.
    fn default() -> Self {
        Self { items: Vec::new(), loading: true }
    }
}

impl HistoryState {
    #[must_use]
    pub fn items(&self) -> &[HistoryItem] {
        &self.items
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Replace the whole sequence.
    pub fn load(&mut self, items: Vec<HistoryItem>) {
        self.items = items;
    }

    /// Record the outcome of the startup fetch and clear the loading flag.
    ///
    /// Sessions prepended while the fetch was in flight are newer than
    /// anything the backend returned, so they stay in front.
    pub fn finish_loading(&mut self, fetched: Vec<HistoryItem>) {
        let prepended = std::mem::take(&mut self.items);
        self.load(prepended.into_iter().chain(fetched).collect());
        self.loading = false;
    }

    /// Insert a newly completed session at the front.
    pub fn prepend(&mut self, item: HistoryItem) {
        self.items.insert(0, item);
    }

    /// Whether any session refers to `locator` as its original upload.
    #[must_use]
    pub fn references_upload(&self, locator: &str) -> bool {
        self.items.iter().any(|item| item.uploaded == locator)
    }

    /// Display number for the session at `index` (oldest is 1).
    #[must_use]
    pub fn session_number(&self, index: usize) -> usize {
        self.items.len().saturating_sub(index)
    }
}
