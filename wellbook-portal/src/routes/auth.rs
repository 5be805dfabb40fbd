//! Account and session endpoints

use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tower_cookies::Cookies;

use wellbook_core::{Account, Role};

use crate::error::PortalError;
use crate::identity::resolve_identity;
use crate::session;
use crate::state::AppState;
use crate::store::{AccountStore, DirectoryStore, NewAccount};

/// Minimum password length
const MIN_PASSWORD_LENGTH: usize = 8;
/// Maximum password length
const MAX_PASSWORD_LENGTH: usize = 80;

#[derive(Deserialize)]
pub struct SignupRequest {
    pub email: String,
    pub password: String,
    pub name: String,
    #[serde(default)]
    pub phone: Option<String>,
}

#[derive(Serialize)]
pub struct SignupResponse {
    pub success: bool,
    pub account: Account,
}

/// POST /api/auth/signup
/// Register an account and open a session for it
pub async fn signup<A, D>(
    State(state): State<Arc<AppState<A, D>>>,
    cookies: Cookies,
    Json(req): Json<SignupRequest>,
) -> Result<Json<SignupResponse>, PortalError>
where
    A: AccountStore,
    D: DirectoryStore,
{
    // Validate the registration form
    if req.name.trim().is_empty() {
        return Err(PortalError::Validation("Name is required".to_string()));
    }
    if !req.email.contains('@') {
        return Err(PortalError::Validation(
            "A valid email is required".to_string(),
        ));
    }
    if req.password.len() < MIN_PASSWORD_LENGTH {
        return Err(PortalError::Validation("Password is too short".to_string()));
    }
    if req.password.len() > MAX_PASSWORD_LENGTH {
        return Err(PortalError::Validation("Password is too long".to_string()));
    }

    let account = state
        .accounts
        .create_account(NewAccount {
            email: req.email.clone(),
            password: req.password.clone(),
            name: req.name,
            phone: req.phone,
        })
        .await?;

    // Open a session so the new account is signed in immediately
    let session = state
        .accounts
        .create_session(&req.email, &req.password)
        .await?;
    session::set_session_cookie(&cookies, &session.token);

    Ok(Json(SignupResponse {
        success: true,
        account,
    }))
}

#[derive(Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Serialize)]
pub struct LoginResponse {
    pub success: bool,
    pub role: Role,
    pub landing_path: &'static str,
    pub account: Account,
}

/// POST /api/auth/login
/// Authenticate and report where the client should land
pub async fn login<A, D>(
    State(state): State<Arc<AppState<A, D>>>,
    cookies: Cookies,
    Json(req): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, PortalError>
where
    A: AccountStore,
    D: DirectoryStore,
{
    let session = state
        .accounts
        .create_session(&req.email, &req.password)
        .await?;
    session::set_session_cookie(&cookies, &session.token);

    // Resolve the role so the client lands on the right dashboard
    let identity = resolve_identity(&state, &session.token).await?;

    Ok(Json(LoginResponse {
        success: true,
        role: identity.role,
        landing_path: identity.role.landing_path(),
        account: identity.account,
    }))
}

#[derive(Serialize)]
pub struct LogoutResponse {
    pub success: bool,
    pub redirect: &'static str,
}

/// POST /api/auth/logout
pub async fn logout<A, D>(
    State(state): State<Arc<AppState<A, D>>>,
    cookies: Cookies,
) -> Json<LogoutResponse>
where
    A: AccountStore,
    D: DirectoryStore,
{
    // The cookie is cleared even when the backend call fails
    if let Some(token) = session::token_from_cookies(&cookies) {
        if let Err(e) = state.accounts.delete_session(&token).await {
            tracing::warn!("Failed to delete session: {}", e);
        }
    }
    session::clear_session_cookie(&cookies);

    Json(LogoutResponse {
        success: true,
        redirect: "/login",
    })
}

#[derive(Serialize)]
pub struct SessionContext {
    pub authenticated: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account: Option<Account>,
    pub server_time: i64,
}

/// GET /api/auth/session
/// Lightweight session check for the shell; never fails
pub async fn get_session_context<A, D>(
    State(state): State<Arc<AppState<A, D>>>,
    cookies: Cookies,
) -> Json<SessionContext>
where
    A: AccountStore,
    D: DirectoryStore,
{
    let account = match session::token_from_cookies(&cookies) {
        Some(token) => match state.accounts.get_session(&token).await {
            Ok(Some(session)) => state
                .accounts
                .get_account(&session.account_id)
                .await
                .ok()
                .flatten(),
            _ => None,
        },
        None => None,
    };

    Json(SessionContext {
        authenticated: account.is_some(),
        account,
        server_time: Utc::now().timestamp(),
    })
}
