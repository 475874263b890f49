/*
 * pending.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Per-pass bookkeeping of pending includes
//!
//! Each pass groups the markers found by a scan under their resource
//! name, so every resource is fetched at most once per pass no matter
//! how many markers name it. Entries keep first-seen order; marker
//! handles within an entry keep document order.

use indexmap::IndexMap;

/// The includes one pass has to handle, keyed by resource name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingSet<H> {
    entries: IndexMap<String, Vec<H>>,
}

impl<H> PendingSet<H> {
    pub fn new() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }

    /// Record a marker for `target`. Repeated targets share one entry.
    pub fn insert(&mut self, target: &str, handle: H) {
        match self.entries.get_mut(target) {
            Some(handles) => handles.push(handle),
            None => {
                self.entries.insert(target.to_string(), vec![handle]);
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of distinct resources, i.e. fetches a pass will issue
    pub fn resource_count(&self) -> usize {
        self.entries.len()
    }

    /// Total number of markers across all resources
    pub fn marker_count(&self) -> usize {
        self.entries.values().map(Vec::len).sum()
    }

    /// Resource names in first-seen order
    pub fn targets(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// `(resource name, markers)` pairs in first-seen order; markers
    /// are in document order
    pub fn entries(&self) -> impl Iterator<Item = (&str, &[H])> {
        self.entries
            .iter()
            .map(|(target, handles)| (target.as_str(), handles.as_slice()))
    }

    /// Iterate every marker handle in the set
    pub fn handles(&self) -> impl Iterator<Item = &H> {
        self.entries.values().flatten()
    }
}

impl<H> Default for PendingSet<H> {
    fn default() -> Self {
        Self::new()
    }
}
