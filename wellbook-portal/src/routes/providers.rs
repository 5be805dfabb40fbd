//! Provider administration endpoints

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::Json;
use serde::{Deserialize, Serialize};
use tower_cookies::Cookies;

use wellbook_core::{AccountId, DocumentId, ProviderProfile};

use crate::error::PortalError;
use crate::guard::{self, ADMIN_ONLY};
use crate::state::AppState;
use crate::store::{AccountStore, DirectoryStore, NewProvider};

#[derive(Serialize)]
pub struct ProviderStats {
    pub total: usize,
    pub verified: usize,
    pub pending: usize,
    pub admins: usize,
}

#[derive(Serialize)]
pub struct ProviderListResponse {
    pub success: bool,
    pub providers: Vec<ProviderProfile>,
    pub stats: ProviderStats,
}

/// GET /api/admin/providers
pub async fn list_providers<A, D>(
    State(state): State<Arc<AppState<A, D>>>,
    cookies: Cookies,
) -> Result<Json<ProviderListResponse>, PortalError>
where
    A: AccountStore,
    D: DirectoryStore,
{
    guard::require_role(&state, &cookies, ADMIN_ONLY).await?;

    let providers = state.directory.list_providers().await?;
    let stats = ProviderStats {
        total: providers.len(),
        verified: providers.iter().filter(|p| p.verified).count(),
        pending: providers.iter().filter(|p| !p.verified).count(),
        admins: providers
            .iter()
            .filter(|p| p.role.as_deref() == Some("admin"))
            .count(),
    };

    Ok(Json(ProviderListResponse {
        success: true,
        providers,
        stats,
    }))
}

/// Admin form for creating or replacing a provider record
///
/// `role` is stored as given; resolution maps unrecognized values to the
/// unknown role rather than rejecting them here.
#[derive(Deserialize)]
pub struct ProviderForm {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub specialty: Option<String>,
    #[serde(default)]
    pub license_number: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub verified: bool,
    #[serde(default)]
    pub account_id: Option<AccountId>,
}

impl ProviderForm {
    fn validate(&self) -> Result<(), PortalError> {
        if self.name.trim().is_empty() {
            return Err(PortalError::Validation("Name is required".to_string()));
        }
        if !self.email.contains('@') {
            return Err(PortalError::Validation(
                "A valid email is required".to_string(),
            ));
        }
        Ok(())
    }

    fn into_new_provider(self) -> NewProvider {
        NewProvider {
            account_id: self.account_id,
            name: self.name,
            email: self.email,
            phone: self.phone,
            specialty: self.specialty,
            license_number: self.license_number,
            role: self.role,
            verified: self.verified,
        }
    }
}

#[derive(Serialize)]
pub struct ProviderResponse {
    pub success: bool,
    pub provider: ProviderProfile,
}

/// POST /api/admin/providers
pub async fn create_provider<A, D>(
    State(state): State<Arc<AppState<A, D>>>,
    cookies: Cookies,
    Json(form): Json<ProviderForm>,
) -> Result<Json<ProviderResponse>, PortalError>
where
    A: AccountStore,
    D: DirectoryStore,
{
    guard::require_role(&state, &cookies, ADMIN_ONLY).await?;
    form.validate()?;

    let provider = state
        .directory
        .create_provider(form.into_new_provider())
        .await?;
    Ok(Json(ProviderResponse {
        success: true,
        provider,
    }))
}

/// PUT /api/admin/providers/{id}
pub async fn update_provider<A, D>(
    State(state): State<Arc<AppState<A, D>>>,
    cookies: Cookies,
    Path(id): Path<String>,
    Json(form): Json<ProviderForm>,
) -> Result<Json<ProviderResponse>, PortalError>
where
    A: AccountStore,
    D: DirectoryStore,
{
    guard::require_role(&state, &cookies, ADMIN_ONLY).await?;
    form.validate()?;

    let provider = state
        .directory
        .update_provider(&DocumentId(id), form.into_new_provider())
        .await?;
    Ok(Json(ProviderResponse {
        success: true,
        provider,
    }))
}

#[derive(Serialize)]
pub struct DeleteResponse {
    pub success: bool,
}

/// DELETE /api/admin/providers/{id}
pub async fn delete_provider<A, D>(
    State(state): State<Arc<AppState<A, D>>>,
    cookies: Cookies,
    Path(id): Path<String>,
) -> Result<Json<DeleteResponse>, PortalError>
where
    A: AccountStore,
    D: DirectoryStore,
{
    guard::require_role(&state, &cookies, ADMIN_ONLY).await?;

    state.directory.delete_provider(&DocumentId(id)).await?;
    Ok(Json(DeleteResponse { success: true }))
}

/// POST /api/admin/providers/{id}/verification
/// Flip the provider's verified flag
pub async fn toggle_verification<A, D>(
    State(state): State<Arc<AppState<A, D>>>,
    cookies: Cookies,
    Path(id): Path<String>,
) -> Result<Json<ProviderResponse>, PortalError>
where
    A: AccountStore,
    D: DirectoryStore,
{
    guard::require_role(&state, &cookies, ADMIN_ONLY).await?;

    let id = DocumentId(id);
    let current = state.directory.get_provider(&id).await?;
    let mut new = NewProvider::from(current);
    new.verified = !new.verified;

    let provider = state.directory.update_provider(&id, new).await?;
    Ok(Json(ProviderResponse {
        success: true,
        provider,
    }))
}
