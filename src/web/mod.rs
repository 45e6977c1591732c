//! HTTP surface: router, shared state and session wiring.

mod error;
mod handlers;
pub mod session;

pub use error::AppError;

use std::path::Path;
use std::sync::Arc;

use axum::{middleware, routing::{get, post}, Json, Router};
use tokio::task::JoinHandle;
use tower_http::{services::ServeDir, trace::TraceLayer};

use crate::catalog::{CatalogLoader, CatalogStore};
use crate::services::{SaleService, SessionStore};

#[derive(Clone, Debug)]
pub struct AppState {
    pub catalog: Arc<CatalogStore>,
    pub loader: CatalogLoader,
    pub sessions: Arc<SessionStore>,
    pub sale: SaleService,
}

impl AppState {
    pub fn new(loader: CatalogLoader) -> Self {
        Self {
            catalog: Arc::new(CatalogStore::new()),
            loader,
            sessions: Arc::new(SessionStore::new()),
            sale: SaleService::new(),
        }
    }

    pub fn with_session_store(mut self, sessions: SessionStore) -> Self {
        self.sessions = Arc::new(sessions);
        self
    }

    /// Starts (or restarts) loading the catalog in the background.
    pub fn load_catalog(&self) -> JoinHandle<()> { self.catalog.spawn_load(self.loader.clone()) }
}

pub fn router(state: AppState, static_dir: impl AsRef<Path>) -> Router {
    Router::new()
        .route("/", get(handlers::pages::home))
        .route("/products", get(handlers::pages::products))
        .route("/cart", get(handlers::cart::show))
        .route("/cart/items", post(handlers::cart::add_item))
        .route("/cart/checkout", post(handlers::cart::begin_checkout))
        .route("/cart/checkout/confirm", post(handlers::cart::confirm_checkout))
        .route("/cart/checkout/cancel", post(handlers::cart::cancel_checkout))
        .route("/login", get(handlers::admin::login_form).post(handlers::admin::login))
        .route("/admin", get(handlers::admin::portal))
        .route("/admin/sale", post(handlers::admin::set_sale))
        .route("/admin/sale/end", post(handlers::admin::end_sale))
        .route("/admin/catalog/reload", post(handlers::admin::reload_catalog))
        .route("/reviews/:product_id", get(handlers::reviews::show).post(handlers::reviews::submit))
        .layer(middleware::from_fn_with_state(state.sessions.clone(), session::attach))
        .route("/health", get(|| async { Json(serde_json::json!({"status": "healthy", "service": "daily-harvest"})) }))
        .nest_service("/products/productImages", ServeDir::new(static_dir.as_ref()))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
