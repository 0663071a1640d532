//! Book domain methods on Repository

use super::Repository;
use crate::models::Book;

impl Repository {
    /// List books in insertion order.
    ///
    /// With a limit, at most `limit` books are returned; a limit of zero or
    /// below returns nothing.
    pub fn books_list(&self, limit: Option<i64>) -> Vec<Book> {
        let table = self.lock();
        match limit {
            None => table.books.values().cloned().collect(),
            Some(limit) => {
                let take = usize::try_from(limit).unwrap_or(0);
                table.books.values().take(take).cloned().collect()
            }
        }
    }

    /// Get book by ID
    pub fn books_get(&self, id: i64) -> Option<Book> {
        self.lock().books.get(&id).cloned()
    }

    /// Store a new book under the next id, whatever id it came with
    pub fn books_create(&self, mut book: Book) -> Book {
        let mut table = self.lock();
        book.id = table.next_id;
        table.next_id += 1;
        table.books.insert(book.id, book.clone());
        book
    }

    /// Replace the whole record at `id`, keeping the id
    pub fn books_update(&self, id: i64, mut book: Book) -> Option<Book> {
        let mut table = self.lock();
        let slot = table.books.get_mut(&id)?;
        book.id = id;
        *slot = book.clone();
        Some(book)
    }

    /// Remove a book; returns whether it existed
    pub fn books_delete(&self, id: i64) -> bool {
        self.lock().books.shift_remove(&id).is_some()
    }

    /// Number of stored books
    pub fn books_count(&self) -> usize {
        self.lock().books.len()
    }
}
