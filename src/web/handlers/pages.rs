use axum::{extract::State, response::Html, Extension};

use crate::views::{home as home_page, ProductsPage};
use crate::web::{handlers::view, session::SessionScope, AppError, AppState};

pub async fn home() -> Html<String> { Html(home_page::render().to_html()) }

pub async fn products(
    State(state): State<AppState>,
    scope: Option<Extension<SessionScope>>,
) -> Result<Html<String>, AppError> {
    let session = view(scope);
    let page = ProductsPage::new(session.as_ref().map(|s| s.cart.clone()))?;
    let reviews = session.map(|s| s.reviews).unwrap_or_default();
    Ok(Html(page.render(&state.catalog.current(), &reviews).to_html()))
}
