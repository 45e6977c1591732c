use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
    Extension, Form,
};
use validator::Validate;

use crate::services::reviews::ReviewDraft;
use crate::views::reviews;
use crate::web::{
    handlers::{find_product, required, view},
    session::SessionScope,
    AppError, AppState,
};

const INCOMPLETE_REVIEW: &str = "Please enter your name and a review.";

pub async fn show(
    State(state): State<AppState>,
    scope: Option<Extension<SessionScope>>,
    Path(product_id): Path<String>,
) -> Result<Html<String>, AppError> {
    let product = find_product(&state.catalog.current(), product_id)?;
    let list = match view(scope) {
        Some(session) => session.reviews.reviews_for(&product),
        None => product.reviews().to_vec(),
    };
    Ok(Html(reviews::render(&product, &list, None).to_html()))
}

pub async fn submit(
    State(state): State<AppState>,
    scope: Option<Extension<SessionScope>>,
    Path(product_id): Path<String>,
    Form(draft): Form<ReviewDraft>,
) -> Result<Response, AppError> {
    let scope = required(scope)?;
    let product = find_product(&state.catalog.current(), product_id)?;

    // Validate before touching the store so a rejected form starts no session.
    let draft = draft.trimmed();
    let added = match draft.validate() {
        Ok(()) => scope.ensure().reviews.add(product.id(), draft),
        Err(errors) => Err(errors),
    };

    match added {
        Ok(_) => Ok(Redirect::to(&format!("/reviews/{}", product.id())).into_response()),
        Err(errors) => {
            tracing::debug!(%errors, "review rejected");
            let page = reviews::render(&product, &scope.view().reviews.reviews_for(&product), Some(INCOMPLETE_REVIEW));
            Ok((StatusCode::UNPROCESSABLE_ENTITY, Html(page.to_html())).into_response())
        }
    }
}
