//! Diagnostic endpoints for checking the backend and the caller's identity

use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use chrono::Utc;
use serde::Serialize;
use serde_json::Value;
use tower_cookies::Cookies;

use wellbook_core::{Account, MatchedProfile, ProbeStatus, ProfileKind, Role};

use crate::error::PortalError;
use crate::guard::{self, ADMIN_ONLY};
use crate::state::AppState;
use crate::store::{AccountStore, DirectoryStore};

#[derive(Serialize)]
pub struct HealthResponse {
    pub success: bool,
    pub backend_reachable: bool,
    pub server_time: i64,
}

/// GET /api/debug/health
/// Backend reachability, probed with a single collection read
pub async fn health<A, D>(State(state): State<Arc<AppState<A, D>>>) -> Json<HealthResponse>
where
    A: AccountStore,
    D: DirectoryStore,
{
    let backend_reachable = state.directory.list_disciplines().await.is_ok();

    Json(HealthResponse {
        success: true,
        backend_reachable,
        server_time: Utc::now().timestamp(),
    })
}

#[derive(Serialize)]
pub struct AuthProbeResponse {
    pub success: bool,
    pub account: Account,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile: Option<MatchedProfile>,
    pub role: Role,
    pub kind: ProfileKind,
    pub provider_probe: ProbeStatus,
    pub client_probe: ProbeStatus,
    pub is_admin: bool,
    pub is_provider: bool,
}

/// GET /api/debug/auth
/// Dump of the caller's account and resolved profile
pub async fn auth_probe<A, D>(
    State(state): State<Arc<AppState<A, D>>>,
    cookies: Cookies,
) -> Result<Json<AuthProbeResponse>, PortalError>
where
    A: AccountStore,
    D: DirectoryStore,
{
    let identity = guard::require_identity(&state, &cookies).await?;

    Ok(Json(AuthProbeResponse {
        success: true,
        is_admin: identity.role == Role::Admin,
        is_provider: matches!(identity.role, Role::Provider | Role::Admin),
        account: identity.account,
        profile: identity.profile,
        role: identity.role,
        kind: identity.kind,
        provider_probe: identity.provider_probe,
        client_probe: identity.client_probe,
    }))
}

#[derive(Serialize)]
pub struct CollectionSchema {
    pub count: usize,
    pub attributes: Vec<String>,
}

#[derive(Serialize)]
pub struct SchemaResponse {
    pub success: bool,
    pub providers: CollectionSchema,
    pub clients: CollectionSchema,
    pub disciplines: CollectionSchema,
    pub services: CollectionSchema,
    pub certifications: CollectionSchema,
    pub appointments: CollectionSchema,
}

/// GET /api/debug/schema
/// Document counts and attribute names for every collection
pub async fn schema<A, D>(
    State(state): State<Arc<AppState<A, D>>>,
    cookies: Cookies,
) -> Result<Json<SchemaResponse>, PortalError>
where
    A: AccountStore,
    D: DirectoryStore,
{
    guard::require_role(&state, &cookies, ADMIN_ONLY).await?;

    let providers = state.directory.list_providers().await?;
    let clients = state.directory.list_clients().await?;
    let disciplines = state.directory.list_disciplines().await?;
    let services = state.directory.list_services().await?;
    let certifications = state.directory.list_certifications().await?;
    let appointments = state.directory.list_appointments().await?;

    Ok(Json(SchemaResponse {
        success: true,
        providers: collection_schema(&providers),
        clients: collection_schema(&clients),
        disciplines: collection_schema(&disciplines),
        services: collection_schema(&services),
        certifications: collection_schema(&certifications),
        appointments: collection_schema(&appointments),
    }))
}

fn collection_schema<T: Serialize>(documents: &[T]) -> CollectionSchema {
    CollectionSchema {
        count: documents.len(),
        attributes: attribute_names(documents),
    }
}

/// Attribute names taken from the first document, empty when the
/// collection has none
fn attribute_names<T: Serialize>(documents: &[T]) -> Vec<String> {
    documents
        .first()
        .and_then(|doc| serde_json::to_value(doc).ok())
        .and_then(|value| match value {
            Value::Object(map) => Some(map.keys().cloned().collect()),
            _ => None,
        })
        .unwrap_or_default()
}
