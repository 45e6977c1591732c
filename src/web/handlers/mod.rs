pub mod admin;
pub mod cart;
pub mod pages;
pub mod reviews;

use axum::Extension;

use crate::catalog::CatalogState;
use crate::domain::aggregates::Product;
use crate::domain::value_objects::ProductId;
use crate::services::Session;
use crate::web::session::SessionScope;
use crate::StorefrontError;

/// The caller's session for reading, if the route sits inside the session layer.
fn view(scope: Option<Extension<SessionScope>>) -> Option<Session> {
    scope.map(|Extension(scope)| scope.view())
}

/// The session scope, required by handlers that read or change shopper state.
fn required(scope: Option<Extension<SessionScope>>) -> Result<SessionScope, StorefrontError> {
    scope.map(|Extension(scope)| scope).ok_or(StorefrontError::CartProviderMissing)
}

fn find_product(catalog: &CatalogState, raw_id: String) -> Result<Product, StorefrontError> {
    let id = ProductId::new(raw_id)?;
    catalog.find(&id).cloned().ok_or(StorefrontError::ProductNotFound)
}
