//! Application state for the ROI calculator API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::ReferenceTable;

/// Shared application state.
///
/// Holds the reference table. It is immutable, so handlers share it
/// without locking.
#[derive(Clone)]
pub struct AppState {
    table: Arc<ReferenceTable>,
}

impl AppState {
    /// Creates a new application state around a reference table.
    pub fn new(table: ReferenceTable) -> Self {
        Self {
            table: Arc::new(table),
        }
    }

    /// Returns a reference to the reference table.
    pub fn table(&self) -> &ReferenceTable {
        &self.table
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(ReferenceTable::embedded())
    }
}
