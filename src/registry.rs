//! Multi-table registry.

extern crate alloc;

use alloc::sync::Arc;
use core::sync::atomic::{AtomicU64, Ordering};

#[cfg(all(not(feature = "std"), feature = "alloc"))]
use hashbrown::HashMap;
#[cfg(feature = "std")]
use std::collections::HashMap;

#[cfg(feature = "std")]
use crate::rules::TableRules;
use crate::sync::Mutex;
use crate::table::Table;

/// Identifier of a table within a [`TableRegistry`].
pub type TableId = u64;

/// Owns any number of independent tables.
///
/// Each table keeps its own deck, hands, rules, and shuffle state; nothing
/// is shared, so rounds on different tables cannot influence each other.
pub struct TableRegistry {
    /// Next table ID to assign.
    next_id: AtomicU64,
    /// Open tables by ID.
    tables: Mutex<HashMap<TableId, Arc<Table>>>,
}

impl TableRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            next_id: AtomicU64::new(0),
            tables: Mutex::new(HashMap::new()),
        }
    }

    /// Opens a new table with the given rules and returns its ID.
    #[cfg(feature = "std")]
    pub fn create(&self, rules: TableRules) -> TableId {
        self.insert(Table::new(rules))
    }

    /// Adds a caller-built table and returns its ID.
    pub fn insert(&self, table: Table) -> TableId {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        self.tables.lock().insert(id, Arc::new(table));
        log::info!("table {id} opened");
        id
    }

    /// Looks up a table by ID.
    pub fn get(&self, id: TableId) -> Option<Arc<Table>> {
        self.tables.lock().get(&id).cloned()
    }

    /// Closes a table, returning it if it was open.
    pub fn remove(&self, id: TableId) -> Option<Arc<Table>> {
        let removed = self.tables.lock().remove(&id);
        if removed.is_some() {
            log::info!("table {id} closed");
        }
        removed
    }

    /// Returns the number of open tables.
    pub fn len(&self) -> usize {
        self.tables.lock().len()
    }

    /// Returns whether no tables are open.
    pub fn is_empty(&self) -> bool {
        self.tables.lock().is_empty()
    }
}

impl Default for TableRegistry {
    fn default() -> Self {
        Self::new()
    }
}
