//! Book endpoints

use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use utoipa::IntoParams;

use crate::{error::AppResult, models::Book, AppState};

use super::{parse_int_lenient, BookId, BookPayload};

#[derive(Debug, Default, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListBooksQuery {
    /// Maximum number of books to return
    pub limit: Option<String>,
}

impl ListBooksQuery {
    /// Keep the first `limit` pair; repeats and unknown keys are ignored
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let limit = pairs
            .into_iter()
            .find(|(key, _)| key == "limit")
            .map(|(_, value)| value);

        Self { limit }
    }

    /// An absent or empty `limit` means no limit; anything non-numeric counts as 0
    pub fn limit(&self) -> Option<i64> {
        match self.limit.as_deref() {
            None | Some("") => None,
            Some(raw) => Some(parse_int_lenient(raw)),
        }
    }
}

/// List books
#[utoipa::path(
    get,
    path = "/books",
    tag = "books",
    params(ListBooksQuery),
    responses(
        (status = 200, description = "Books in insertion order", body = Vec<Book>)
    )
)]
pub async fn list_books(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Json<Vec<Book>> {
    let query = ListBooksQuery::from_pairs(pairs);
    Json(state.services.catalog.list_books(query.limit()))
}

/// Get a book by ID
#[utoipa::path(
    get,
    path = "/books/{id}",
    tag = "books",
    params(("id" = i64, Path, description = "Book ID")),
    responses(
        (status = 200, description = "Book details", body = Book),
        (status = 404, description = "Book not found")
    )
)]
pub async fn get_book(
    State(state): State<AppState>,
    BookId(id): BookId,
) -> AppResult<Json<Book>> {
    let book = state.services.catalog.get_book(id)?;
    Ok(Json(book))
}

/// Create a new book
#[utoipa::path(
    post,
    path = "/books",
    tag = "books",
    request_body = Book,
    responses(
        (status = 201, description = "Book created", body = Book)
    )
)]
pub async fn create_book(
    State(state): State<AppState>,
    BookPayload(book): BookPayload,
) -> (StatusCode, Json<Book>) {
    let created = state.services.catalog.create_book(book);
    (StatusCode::CREATED, Json(created))
}

/// Replace an existing book
#[utoipa::path(
    put,
    path = "/books/{id}",
    tag = "books",
    params(("id" = i64, Path, description = "Book ID")),
    request_body = Book,
    responses(
        (status = 200, description = "Book replaced", body = Book),
        (status = 404, description = "Book not found")
    )
)]
pub async fn update_book(
    State(state): State<AppState>,
    BookId(id): BookId,
    BookPayload(book): BookPayload,
) -> AppResult<Json<Book>> {
    let updated = state.services.catalog.update_book(id, book)?;
    Ok(Json(updated))
}

/// Delete a book
#[utoipa::path(
    delete,
    path = "/books/{id}",
    tag = "books",
    params(("id" = i64, Path, description = "Book ID")),
    responses(
        (status = 204, description = "Book deleted"),
        (status = 404, description = "Book not found")
    )
)]
pub async fn delete_book(
    State(state): State<AppState>,
    BookId(id): BookId,
) -> AppResult<StatusCode> {
    state.services.catalog.delete_book(id)?;
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(limit: Option<&str>) -> ListBooksQuery {
        ListBooksQuery {
            limit: limit.map(str::to_string),
        }
    }

    #[test]
    fn test_limit_parsing() {
        assert_eq!(query(None).limit(), None);
        assert_eq!(query(Some("")).limit(), None);
        assert_eq!(query(Some("3")).limit(), Some(3));
        assert_eq!(query(Some("-1")).limit(), Some(-1));
        assert_eq!(query(Some("lots")).limit(), Some(0));
        assert_eq!(query(Some("99999999999999999999")).limit(), Some(i64::MAX));
    }

    #[test]
    fn test_first_limit_wins() {
        let pairs = vec![
            ("sort".to_string(), "title".to_string()),
            ("limit".to_string(), "1".to_string()),
            ("limit".to_string(), "2".to_string()),
        ];
        assert_eq!(ListBooksQuery::from_pairs(pairs).limit(), Some(1));
        assert_eq!(ListBooksQuery::from_pairs(Vec::new()).limit(), None);
    }
}
