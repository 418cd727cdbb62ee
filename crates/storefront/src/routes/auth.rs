//! Authentication route handlers.
//!
//! Login checks credentials against the read-only user directory and
//! attaches the identity to the session. Registration validates the form
//! like a real signup but is a demo stub: the directory never changes,
//! and the login page says so via the success message.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Query, State},
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use crate::error::Result;
use crate::filters;
use crate::middleware::{clear_current_user, set_current_user};
use crate::routes::{MessageQuery, Nav};
use crate::services::auth::{AuthError, AuthService};
use crate::state::AppState;

// =============================================================================
// Form Types
// =============================================================================

/// Login form data.
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

/// Registration form data.
#[derive(Debug, Deserialize)]
pub struct RegisterForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub password_confirm: String,
}

// =============================================================================
// Templates
// =============================================================================

/// Login page template.
#[derive(Template, WebTemplate)]
#[template(path = "auth/login.html")]
pub struct LoginTemplate {
    pub nav: Nav,
    pub error: Option<String>,
    pub success: Option<String>,
}

/// Register page template.
#[derive(Template, WebTemplate)]
#[template(path = "auth/register.html")]
pub struct RegisterTemplate {
    pub nav: Nav,
    pub error: Option<String>,
}

// =============================================================================
// Login Routes
// =============================================================================

/// Display the login page. Already-authenticated visitors go home.
#[instrument(skip(session))]
pub async fn login_page(session: Session, Query(query): Query<MessageQuery>) -> Result<Response> {
    let nav = Nav::load(&session).await?;
    if nav.current_user.is_some() {
        return Ok(Redirect::to("/").into_response());
    }

    Ok(LoginTemplate {
        nav,
        error: query.error,
        success: query.success,
    }
    .into_response())
}

/// Handle login form submission.
#[instrument(skip(state, session, form))]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<LoginForm>,
) -> Result<Response> {
    let auth = AuthService::new(state.users());

    match auth.login(&form.email, &form.password) {
        Ok(identity) => {
            set_current_user(&session, &identity).await?;
            tracing::info!(user_id = %identity.id, "login succeeded");
            Ok(Redirect::to("/").into_response())
        }
        Err(e) => {
            tracing::warn!("login failed: {e}");
            Ok(Redirect::to("/login?error=credentials").into_response())
        }
    }
}

/// Handle logout. Idempotent: logging out while logged out is fine.
#[instrument(skip(session))]
pub async fn logout(session: Session) -> Result<Redirect> {
    clear_current_user(&session).await?;
    Ok(Redirect::to("/"))
}

// =============================================================================
// Registration Routes
// =============================================================================

/// Display the registration page. Already-authenticated visitors go home.
#[instrument(skip(session))]
pub async fn register_page(
    session: Session,
    Query(query): Query<MessageQuery>,
) -> Result<Response> {
    let nav = Nav::load(&session).await?;
    if nav.current_user.is_some() {
        return Ok(Redirect::to("/").into_response());
    }

    Ok(RegisterTemplate {
        nav,
        error: query.error,
    }
    .into_response())
}

/// Handle registration form submission (demo stub).
///
/// The submission is validated but nothing is persisted - the user
/// directory is read-only. The visitor lands on the login page with a
/// message explaining exactly that.
#[instrument(skip(state, form))]
pub async fn register(State(state): State<AppState>, Form(form): Form<RegisterForm>) -> Response {
    let auth = AuthService::new(state.users());

    match auth.register(&form.email, &form.password, &form.password_confirm) {
        Ok(()) => {
            tracing::info!(
                name = %form.name,
                email = %form.email,
                "registration accepted (demo stub, directory unchanged)"
            );
            Redirect::to("/login?success=registered_demo").into_response()
        }
        Err(e) => {
            tracing::warn!("registration rejected: {e}");
            let code = match e {
                AuthError::InvalidEmail(_) => "invalid_email",
                AuthError::WeakPassword { .. } => "weak_password",
                AuthError::PasswordMismatch => "password_mismatch",
                AuthError::InvalidCredentials => "failed",
            };
            Redirect::to(&format!("/register?error={code}")).into_response()
        }
    }
}
