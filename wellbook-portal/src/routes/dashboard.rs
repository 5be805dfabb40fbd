//! Role-guarded dashboard pages
//!
//! Page guards redirect rather than erroring: failed resolution goes to
//! the login page, a disallowed role goes home.

use std::sync::Arc;

use axum::extract::State;
use axum::response::{IntoResponse, Redirect, Response};
use axum::Json;
use serde::Serialize;
use tower_cookies::Cookies;

use wellbook_core::{Account, ClientProfile, GuardDecision, MatchedProfile, ProviderProfile};

use crate::error::PortalError;
use crate::guard::{self, ADMIN_ONLY, PROVIDER_OR_ADMIN};
use crate::state::AppState;
use crate::store::{AccountStore, DirectoryStore};

#[derive(Serialize)]
pub struct AdminCounts {
    pub providers: usize,
    pub clients: usize,
    pub disciplines: usize,
    pub appointments: usize,
    pub pending_verifications: usize,
}

#[derive(Serialize)]
pub struct AdminDashboard {
    pub success: bool,
    pub counts: AdminCounts,
    pub recent_providers: Vec<ProviderProfile>,
    pub recent_clients: Vec<ClientProfile>,
}

/// GET /admin/dashboard
pub async fn admin_dashboard<A, D>(
    State(state): State<Arc<AppState<A, D>>>,
    cookies: Cookies,
) -> Result<Response, PortalError>
where
    A: AccountStore,
    D: DirectoryStore,
{
    match guard::page(&state, &cookies, ADMIN_ONLY).await {
        GuardDecision::Grant(_) => {}
        GuardDecision::Redirect(path) => return Ok(Redirect::to(path).into_response()),
    }

    let providers = state.directory.list_providers().await?;
    let clients = state.directory.list_clients().await?;
    let disciplines = state.directory.list_disciplines().await?;
    let appointments = state.directory.list_appointments().await?;

    let counts = AdminCounts {
        providers: providers.len(),
        clients: clients.len(),
        disciplines: disciplines.len(),
        appointments: appointments.len(),
        pending_verifications: providers.iter().filter(|p| !p.verified).count(),
    };

    // Listings run oldest-first, so the newest records sit at the end
    let recent_providers = providers.iter().rev().take(5).cloned().collect();
    let recent_clients = clients.iter().rev().take(5).cloned().collect();

    Ok(Json(AdminDashboard {
        success: true,
        counts,
        recent_providers,
        recent_clients,
    })
    .into_response())
}

#[derive(Serialize)]
pub struct ProviderDashboard {
    pub success: bool,
    pub account: Account,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile: Option<ProviderProfile>,
}

/// GET /provider/dashboard
pub async fn provider_dashboard<A, D>(
    State(state): State<Arc<AppState<A, D>>>,
    cookies: Cookies,
) -> Result<Response, PortalError>
where
    A: AccountStore,
    D: DirectoryStore,
{
    let identity = match guard::page(&state, &cookies, PROVIDER_OR_ADMIN).await {
        GuardDecision::Grant(identity) => identity,
        GuardDecision::Redirect(path) => return Ok(Redirect::to(path).into_response()),
    };

    let profile = match identity.profile {
        Some(MatchedProfile::Provider(profile)) => Some(profile),
        _ => None,
    };

    Ok(Json(ProviderDashboard {
        success: true,
        account: identity.account,
        profile,
    })
    .into_response())
}
