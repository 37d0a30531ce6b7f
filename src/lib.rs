//! Book Registry
//!
//! A small REST JSON API serving create/read/update/delete operations over
//! an in-memory collection of book records.

use std::sync::Arc;

use axum::{routing::get, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod server;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};
pub use server::ServerHandle;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub services: Arc<services::Services>,
}

impl AppState {
    /// Build state around a freshly seeded book collection
    pub fn new(config: AppConfig) -> Self {
        Self::with_repository(config, repository::Repository::new())
    }

    pub fn with_repository(config: AppConfig, repository: repository::Repository) -> Self {
        Self {
            config: Arc::new(config),
            services: Arc::new(services::Services::new(repository)),
        }
    }
}

/// Create the application router with all routes
pub fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let routes = Router::new()
        // Health check
        .route("/health", get(api::health::health_check))
        // Books
        .route(
            "/api/books",
            get(api::books::list_books).post(api::books::create_book),
        )
        .route(
            "/api/books/:id",
            get(api::books::get_book)
                .put(api::books::update_book)
                .delete(api::books::delete_book),
        )
        .with_state(state);

    // OpenAPI documentation
    let openapi = api::openapi::create_openapi_router();

    Router::new()
        .merge(routes)
        .merge(openapi)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
