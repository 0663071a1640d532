//! Bookstore Server
//!
//! An in-memory book catalog exposed as a REST JSON API.

use std::sync::Arc;

use axum::{
    routing::{get, MethodRouter},
    Router,
};
use tower_http::trace::TraceLayer;

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

use repository::Repository;
use services::Services;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub repository: Repository,
    pub services: Arc<Services>,
}

impl AppState {
    /// Build the state around a fresh, empty book store
    pub fn new(config: AppConfig) -> Self {
        let repository = Repository::new();
        let services = Services::new(repository.clone());

        Self {
            config: Arc::new(config),
            repository,
            services: Arc::new(services),
        }
    }
}

/// Create the application router with all routes
pub fn create_router(state: AppState) -> Router {
    // Everything under /books/ is one item, even /books/ and /books/1/x
    let book_item = book_item_routes();

    Router::new()
        // Health check
        .route("/health", get(api::health::health_check))
        // Books
        .route(
            "/books",
            get(api::books::list_books)
                .post(api::books::create_book)
                .head(api::method_not_allowed)
                .fallback(api::method_not_allowed),
        )
        .route("/books/", book_item.clone())
        .route("/books/*id", book_item)
        // OpenAPI documentation
        .route("/api-docs/openapi.json", get(api::openapi::openapi_json))
        .fallback(api::not_found)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

/// GET/PUT/DELETE on a single book; HEAD is refused rather than served by GET
fn book_item_routes() -> MethodRouter<AppState> {
    get(api::books::get_book)
        .put(api::books::update_book)
        .delete(api::books::delete_book)
        .head(api::method_not_allowed)
        .fallback(api::method_not_allowed)
}
