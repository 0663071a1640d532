//! Repository layer: the in-memory book store

pub mod books;

use indexmap::IndexMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::models::Book;

/// Books keyed by id, in insertion order, plus the id counter
#[derive(Debug)]
pub(crate) struct BookTable {
    books: IndexMap<i64, Book>,
    next_id: i64,
}

impl Default for BookTable {
    fn default() -> Self {
        Self {
            books: IndexMap::new(),
            next_id: 1,
        }
    }
}

/// Main repository struct holding the shared book table.
///
/// Cloning is cheap and every clone sees the same table.
#[derive(Clone, Debug, Default)]
pub struct Repository {
    table: Arc<Mutex<BookTable>>,
}

impl Repository {
    /// Create an empty repository; the first book gets id 1
    pub fn new() -> Self {
        Self::default()
    }

    /// Every operation holds this guard for its whole read or mutation.
    /// No mutation can panic halfway, so a poisoned table is still consistent.
    fn lock(&self) -> MutexGuard<'_, BookTable> {
        self.table.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
