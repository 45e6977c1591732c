use axum::{
    extract::State,
    response::{Html, Redirect},
    Extension, Form,
};
use serde::Deserialize;

use crate::domain::aggregates::CheckoutError;
use crate::views::CartPage;
use crate::web::{
    handlers::{find_product, required, view},
    session::SessionScope,
    AppError, AppState,
};
use crate::StorefrontError;

#[derive(Debug, Deserialize)]
pub struct AddItemForm {
    pub product_id: String,
}

pub async fn show(scope: Option<Extension<SessionScope>>) -> Result<Html<String>, AppError> {
    let session = view(scope);
    let page = CartPage::new(session.as_ref().map(|s| s.cart.clone()))?;
    let checkout = session.map(|s| s.checkout).unwrap_or_default();
    Ok(Html(page.render(&checkout).to_html()))
}

pub async fn add_item(
    State(state): State<AppState>,
    scope: Option<Extension<SessionScope>>,
    Form(form): Form<AddItemForm>,
) -> Result<Redirect, AppError> {
    let scope = required(scope)?;
    let product = find_product(&state.catalog.current(), form.product_id)?;
    if !product.is_in_stock() {
        return Err(StorefrontError::OutOfStock.into());
    }
    scope.ensure().cart.add_to_cart(&product);
    Ok(Redirect::to("/products"))
}

// The checkout steps only act on an existing cart, so a caller without a
// session sees an empty one and nothing is stored.

pub async fn begin_checkout(scope: Option<Extension<SessionScope>>) -> Result<Redirect, AppError> {
    let session = required(scope)?.view();
    match session.checkout.begin(&session.cart) {
        // A repeated click on "Checkout" just shows the prompt again.
        Ok(()) | Err(CheckoutError::AlreadyPending) => Ok(Redirect::to("/cart")),
        Err(error) => Err(error.into()),
    }
}

pub async fn confirm_checkout(scope: Option<Extension<SessionScope>>) -> Result<Redirect, AppError> {
    let session = required(scope)?.view();
    session.checkout.confirm(&session.cart)?;
    Ok(Redirect::to("/cart"))
}

pub async fn cancel_checkout(scope: Option<Extension<SessionScope>>) -> Result<Redirect, AppError> {
    let session = required(scope)?.view();
    match session.checkout.cancel() {
        Ok(()) | Err(CheckoutError::NotPending) => Ok(Redirect::to("/cart")),
        Err(error) => Err(error.into()),
    }
}
