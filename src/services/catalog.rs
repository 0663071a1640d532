//! Catalog management service

use crate::{
    error::{AppError, AppResult},
    models::Book,
    repository::Repository,
};

#[derive(Clone)]
pub struct CatalogService {
    repository: Repository,
}

impl CatalogService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// List books, optionally capped at `limit`
    pub fn list_books(&self, limit: Option<i64>) -> Vec<Book> {
        self.repository.books_list(limit)
    }

    /// Get book by ID
    pub fn get_book(&self, id: i64) -> AppResult<Book> {
        self.repository
            .books_get(id)
            .ok_or_else(|| not_found(id))
    }

    pub fn create_book(&self, book: Book) -> Book {
        let created = self.repository.books_create(book);
        tracing::info!("Catalog: created book id={}", created.id);
        created
    }

    /// Replace an existing book wholesale
    pub fn update_book(&self, id: i64, book: Book) -> AppResult<Book> {
        let updated = self
            .repository
            .books_update(id, book)
            .ok_or_else(|| not_found(id))?;
        tracing::info!("Catalog: replaced book id={}", id);
        Ok(updated)
    }

    pub fn delete_book(&self, id: i64) -> AppResult<()> {
        if !self.repository.books_delete(id) {
            return Err(not_found(id));
        }
        tracing::info!(
            "Catalog: deleted book id={} ({} remaining)",
            id,
            self.repository.books_count()
        );
        Ok(())
    }
}

fn not_found(id: i64) -> AppError {
    AppError::NotFound(format!("Book {} not found", id))
}
