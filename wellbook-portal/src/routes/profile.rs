//! Identity and profile setup endpoints

use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};
use tower_cookies::Cookies;

use wellbook_core::{
    find_client_match, find_provider_match, Account, MatchedProfile, ProbeStatus, ProfileKind,
    Role,
};

use crate::error::PortalError;
use crate::guard;
use crate::state::AppState;
use crate::store::{AccountStore, DirectoryStore, NewClient, NewProvider};

#[derive(Serialize)]
pub struct IdentityResponse {
    pub success: bool,
    pub account: Account,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile: Option<MatchedProfile>,
    pub role: Role,
    pub kind: ProfileKind,
    pub provider_probe: ProbeStatus,
    pub client_probe: ProbeStatus,
    pub landing_path: &'static str,
}

/// GET /api/identity
/// The caller's resolved identity, with probe provenance
pub async fn get_identity<A, D>(
    State(state): State<Arc<AppState<A, D>>>,
    cookies: Cookies,
) -> Result<Json<IdentityResponse>, PortalError>
where
    A: AccountStore,
    D: DirectoryStore,
{
    let identity = guard::require_identity(&state, &cookies).await?;
    let landing_path = identity.role.landing_path();

    Ok(Json(IdentityResponse {
        success: true,
        account: identity.account,
        profile: identity.profile,
        role: identity.role,
        kind: identity.kind,
        provider_probe: identity.provider_probe,
        client_probe: identity.client_probe,
        landing_path,
    }))
}

fn default_provider_role() -> String {
    "provider".to_string()
}

#[derive(Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum SetupProfileRequest {
    Provider {
        #[serde(default)]
        specialty: Option<String>,
        #[serde(default)]
        license_number: Option<String>,
        #[serde(default)]
        phone: Option<String>,
        #[serde(default = "default_provider_role")]
        role: String,
    },
    Client {
        #[serde(default)]
        phone: Option<String>,
        #[serde(default)]
        address: Option<String>,
        #[serde(default)]
        emergency_contact: Option<String>,
    },
}

#[derive(Serialize)]
pub struct SetupProfileResponse {
    pub success: bool,
    pub profile: MatchedProfile,
    pub role: Role,
    pub landing_path: &'static str,
}

/// POST /api/profile/setup
/// Create the caller's own profile record
///
/// Name, email and the account link always come from the session
/// account, never from the form. One profile per collection per
/// account; setting up the other kind stays possible, with provider
/// precedence applying at resolution time.
pub async fn setup_profile<A, D>(
    State(state): State<Arc<AppState<A, D>>>,
    cookies: Cookies,
    Json(req): Json<SetupProfileRequest>,
) -> Result<Json<SetupProfileResponse>, PortalError>
where
    A: AccountStore,
    D: DirectoryStore,
{
    let identity = guard::require_identity(&state, &cookies).await?;
    let account = identity.account;

    match req {
        SetupProfileRequest::Provider {
            specialty,
            license_number,
            phone,
            role,
        } => {
            if role != "provider" && role != "admin" {
                return Err(PortalError::Validation(
                    "Role must be provider or admin".to_string(),
                ));
            }

            // Refuse a second provider record for the same account
            let providers = state.directory.list_providers().await?;
            if find_provider_match(&providers, &account).is_some() {
                return Err(PortalError::ProfileExists);
            }

            let profile = state
                .directory
                .create_provider(NewProvider {
                    account_id: Some(account.id.clone()),
                    name: account.name.clone(),
                    email: account.email.clone(),
                    phone,
                    specialty,
                    license_number,
                    verified: role == "admin",
                    role: Some(role.clone()),
                })
                .await?;

            let resolved_role = Role::parse(&role);
            Ok(Json(SetupProfileResponse {
                success: true,
                profile: MatchedProfile::Provider(profile),
                role: resolved_role,
                landing_path: resolved_role.landing_path(),
            }))
        }
        SetupProfileRequest::Client {
            phone,
            address,
            emergency_contact,
        } => {
            // Refuse a second client record for the same account
            let clients = state.directory.list_clients().await?;
            if find_client_match(&clients, &account).is_some() {
                return Err(PortalError::ProfileExists);
            }

            let profile = state
                .directory
                .create_client(NewClient {
                    account_id: Some(account.id.clone()),
                    name: account.name.clone(),
                    email: account.email.clone(),
                    phone,
                    address,
                    emergency_contact,
                })
                .await?;

            Ok(Json(SetupProfileResponse {
                success: true,
                profile: MatchedProfile::Client(profile),
                role: Role::Client,
                landing_path: Role::Client.landing_path(),
            }))
        }
    }
}
