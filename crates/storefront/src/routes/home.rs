//! Home page route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{extract::State, response::IntoResponse};
use tracing::instrument;

use crate::filters;
use crate::state::AppState;

/// Home page template.
///
/// The page itself is static copy; the mini-cart is an HTMX fragment host
/// that loads on arrival and re-fetches on every `cart-updated` event.
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub user_email: Option<String>,
}

/// Display the home page.
#[instrument(skip(state))]
pub async fn home(State(state): State<AppState>) -> impl IntoResponse {
    let user_email = state
        .sessions()
        .current_session()
        .map(|s| s.email.into_inner());

    HomeTemplate { user_email }
}
