//! API handlers for the bookstore REST endpoints

pub mod books;
pub mod health;
pub mod openapi;

use std::{convert::Infallible, num::IntErrorKind};

use axum::{
    async_trait,
    body::Bytes,
    extract::{FromRequest, FromRequestParts, Path, Request, State},
    http::{request::Parts, Uri},
};

use crate::{error::AppError, models::Book, AppState};

/// Parse a decimal integer the forgiving way: out-of-range values clamp to
/// the i64 bounds, anything else unparseable is 0.
pub fn parse_int_lenient(raw: &str) -> i64 {
    match raw.parse::<i64>() {
        Ok(n) => n,
        Err(e) => match e.kind() {
            IntErrorKind::PosOverflow => i64::MAX,
            IntErrorKind::NegOverflow => i64::MIN,
            _ => 0,
        },
    }
}

/// Book id taken from everything after `/books/`.
///
/// A rest that is not an integer (empty, `abc`, `1/x`) becomes id 0, which
/// never matches a stored book, so the request ends in a 404 rather than a 400.
pub struct BookId(pub i64);

impl BookId {
    pub fn parse(raw: &str) -> Self {
        BookId(parse_int_lenient(raw))
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for BookId
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        // `/books/` has no captured segment at all
        let id = match Path::<String>::from_request_parts(parts, state).await {
            Ok(Path(raw)) => BookId::parse(&raw),
            Err(_) => BookId(0),
        };

        Ok(id)
    }
}

/// Book request body, decoded without ever rejecting the request.
///
/// The content type is not checked and an unreadable or malformed body
/// decodes to an all-zero book.
pub struct BookPayload(pub Book);

#[async_trait]
impl<S> FromRequest<S> for BookPayload
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let book = match Bytes::from_request(req, state).await {
            Ok(body) => Book::from_json_lenient(&body),
            Err(e) => {
                tracing::debug!("Unreadable book payload, using defaults: {}", e.body_text());
                Book::default()
            }
        };

        Ok(BookPayload(book))
    }
}

/// Fallback for a known path hit with an unsupported method
pub async fn method_not_allowed(State(state): State<AppState>) -> AppError {
    AppError::MethodNotAllowed(state.config.messages.method_not_allowed.clone())
}

/// Fallback for unknown paths
pub async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("No route for {}", uri.path()))
}
