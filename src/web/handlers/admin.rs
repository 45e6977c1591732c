use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
    Form,
};
use serde::Deserialize;

use crate::services::{sale::SaleView, LoginForm, LoginOutcome};
use crate::views::{admin, login};
use crate::web::AppState;

#[derive(Debug, Deserialize)]
pub struct SaleForm {
    #[serde(default)]
    pub percent: String,
}

pub async fn login_form() -> Html<String> { Html(login::render(&LoginForm::default()).to_html()) }

pub async fn login(Form(mut form): Form<LoginForm>) -> Response {
    match form.submit() {
        LoginOutcome::NavigateToAdmin => Redirect::to("/admin").into_response(),
        LoginOutcome::Rejected => (StatusCode::UNAUTHORIZED, Html(login::render(&form).to_html())).into_response(),
    }
}

pub async fn portal(State(state): State<AppState>) -> Html<String> { render_portal(&state, &state.sale.view()) }

pub async fn set_sale(State(state): State<AppState>, Form(form): Form<SaleForm>) -> (StatusCode, Html<String>) {
    match state.sale.submit(&form.percent) {
        Ok(view) => (StatusCode::OK, render_portal(&state, &view)),
        Err(view) => (StatusCode::UNPROCESSABLE_ENTITY, render_portal(&state, &view)),
    }
}

pub async fn end_sale(State(state): State<AppState>) -> Html<String> {
    let view = state.sale.end_sale();
    render_portal(&state, &view)
}

pub async fn reload_catalog(State(state): State<AppState>) -> Redirect {
    tracing::info!("catalog reload requested");
    state.load_catalog();
    Redirect::to("/admin")
}

fn render_portal(state: &AppState, view: &SaleView) -> Html<String> {
    let catalog = state.catalog.current();
    let size = (!catalog.is_loading()).then(|| catalog.products().len());
    Html(admin::render(view, size).to_html())
}
