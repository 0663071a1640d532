//! OpenAPI documentation

use axum::{
    http::header::CONTENT_TYPE,
    response::{IntoResponse, Response},
};
use utoipa::OpenApi;

use crate::{
    api::{books, health},
    error::{AppError, AppResult},
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Bookstore API",
        version = "0.1.0",
        description = "In-memory book catalog REST API"
    ),
    paths(
        // Health
        health::health_check,
        // Books
        books::list_books,
        books::get_book,
        books::create_book,
        books::update_book,
        books::delete_book,
    ),
    components(
        schemas(
            crate::models::book::Book,
            health::HealthResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "books", description = "Book catalog management")
    )
)]
pub struct ApiDoc;

/// Serve the generated OpenAPI document
pub async fn openapi_json() -> AppResult<Response> {
    let body = ApiDoc::openapi()
        .to_pretty_json()
        .map_err(|e| AppError::Internal(format!("OpenAPI serialization failed: {}", e)))?;

    Ok(([(CONTENT_TYPE, "application/json")], body).into_response())
}
