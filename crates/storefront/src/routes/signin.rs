//! Mock sign-in route handlers.
//!
//! The flow stores an email and nothing else. Validation failures re-render
//! the form with an inline message; no error escapes the handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    response::{IntoResponse, Redirect, Response},
};
use secrecy::SecretString;
use serde::Deserialize;
use tracing::instrument;

use crate::error::AppError;
use crate::filters;
use crate::state::AppState;
use crate::stores::SignInError;

/// Sign-in form data.
///
/// No `Debug` derive: the password must not end up in logs, even though it is
/// discarded right after validation.
#[derive(Deserialize)]
pub struct SignInForm {
    pub email: String,
    pub password: String,
}

/// Sign-in page template.
#[derive(Template, WebTemplate)]
#[template(path = "auth/signin.html")]
pub struct SigninTemplate {
    pub error: Option<String>,
    pub email: String,
    pub user_email: Option<String>,
}

/// Display the sign-in page.
#[instrument(skip(state))]
pub async fn signin_page(State(state): State<AppState>) -> impl IntoResponse {
    SigninTemplate {
        error: None,
        email: String::new(),
        user_email: state
            .sessions()
            .current_session()
            .map(|s| s.email.into_inner()),
    }
}

/// Handle sign-in form submission.
///
/// On success the session is persisted and the visitor lands on the shop.
/// On validation failure the form re-renders with the message inline and the
/// email field repopulated.
#[instrument(skip(state, form))]
pub async fn sign_in(State(state): State<AppState>, Form(form): Form<SignInForm>) -> Response {
    let password = SecretString::from(form.password);

    match state.sessions().sign_in(&form.email, &password) {
        Ok(_) => Redirect::to("/shop").into_response(),
        Err(SignInError::Storage(err)) => AppError::from(err).into_response(),
        Err(validation) => SigninTemplate {
            error: Some(validation.to_string()),
            email: form.email,
            user_email: None,
        }
        .into_response(),
    }
}

/// Continue as guest: clear any persisted session.
#[instrument(skip(state))]
pub async fn guest(State(state): State<AppState>) -> Result<Response, AppError> {
    state.sessions().continue_as_guest()?;
    Ok(Redirect::to("/shop").into_response())
}
