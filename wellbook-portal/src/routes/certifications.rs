//! Certification administration endpoints

use std::collections::HashSet;
use std::sync::Arc;

use axum::extract::{Path, State};
use axum::Json;
use serde::{Deserialize, Serialize};
use tower_cookies::Cookies;

use wellbook_core::DocumentId;

use crate::error::PortalError;
use crate::guard::{self, ADMIN_ONLY};
use crate::state::AppState;
use crate::store::{
    AccountStore, Certification, CertificationLevel, DirectoryStore, NewCertification,
};

#[derive(Serialize)]
pub struct CertificationStats {
    pub total: usize,
    pub active: usize,
    /// Distinct providers holding at least one certification
    pub providers: usize,
    /// Distinct disciplines covered
    pub disciplines: usize,
}

#[derive(Serialize)]
pub struct CertificationListResponse {
    pub success: bool,
    pub certifications: Vec<Certification>,
    pub stats: CertificationStats,
}

/// GET /api/admin/certifications
pub async fn list_certifications<A, D>(
    State(state): State<Arc<AppState<A, D>>>,
    cookies: Cookies,
) -> Result<Json<CertificationListResponse>, PortalError>
where
    A: AccountStore,
    D: DirectoryStore,
{
    guard::require_role(&state, &cookies, ADMIN_ONLY).await?;

    let certifications = state.directory.list_certifications().await?;
    let providers: HashSet<&DocumentId> =
        certifications.iter().map(|c| &c.provider_id).collect();
    let disciplines: HashSet<&DocumentId> =
        certifications.iter().map(|c| &c.discipline_id).collect();
    let stats = CertificationStats {
        total: certifications.len(),
        active: certifications.iter().filter(|c| c.is_active).count(),
        providers: providers.len(),
        disciplines: disciplines.len(),
    };

    Ok(Json(CertificationListResponse {
        success: true,
        certifications,
        stats,
    }))
}

fn default_role() -> String {
    "Provider".to_string()
}

fn default_active() -> bool {
    true
}

#[derive(Deserialize)]
pub struct CertificationForm {
    pub provider_id: DocumentId,
    pub discipline_id: DocumentId,
    #[serde(default = "default_role")]
    pub role: String,
    #[serde(default)]
    pub level: CertificationLevel,
    #[serde(default)]
    pub service_ids: Vec<DocumentId>,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

#[derive(Serialize)]
pub struct CertificationResponse {
    pub success: bool,
    pub certification: Certification,
}

/// POST /api/admin/certifications
/// Certify a provider in a discipline; both must exist
pub async fn create_certification<A, D>(
    State(state): State<Arc<AppState<A, D>>>,
    cookies: Cookies,
    Json(form): Json<CertificationForm>,
) -> Result<Json<CertificationResponse>, PortalError>
where
    A: AccountStore,
    D: DirectoryStore,
{
    guard::require_role(&state, &cookies, ADMIN_ONLY).await?;

    match state.directory.get_provider(&form.provider_id).await {
        Ok(_) => {}
        Err(PortalError::NotFound) => {
            return Err(PortalError::Validation("Unknown provider".to_string()))
        }
        Err(e) => return Err(e),
    }
    match state.directory.get_discipline(&form.discipline_id).await {
        Ok(_) => {}
        Err(PortalError::NotFound) => {
            return Err(PortalError::Validation("Unknown discipline".to_string()))
        }
        Err(e) => return Err(e),
    }

    let certification = state
        .directory
        .create_certification(NewCertification {
            provider_id: form.provider_id,
            discipline_id: form.discipline_id,
            role: form.role,
            level: form.level,
            service_ids: form.service_ids,
            is_active: form.is_active,
        })
        .await?;

    Ok(Json(CertificationResponse {
        success: true,
        certification,
    }))
}

/// POST /api/admin/certifications/{id}/activation
/// Flip the certification's active flag
pub async fn toggle_activation<A, D>(
    State(state): State<Arc<AppState<A, D>>>,
    cookies: Cookies,
    Path(id): Path<String>,
) -> Result<Json<CertificationResponse>, PortalError>
where
    A: AccountStore,
    D: DirectoryStore,
{
    guard::require_role(&state, &cookies, ADMIN_ONLY).await?;

    let id = DocumentId(id);
    let current = state.directory.get_certification(&id).await?;
    let mut new = NewCertification::from(current);
    new.is_active = !new.is_active;

    let certification = state.directory.update_certification(&id, new).await?;
    Ok(Json(CertificationResponse {
        success: true,
        certification,
    }))
}

#[derive(Serialize)]
pub struct DeleteResponse {
    pub success: bool,
}

/// DELETE /api/admin/certifications/{id}
pub async fn delete_certification<A, D>(
    State(state): State<Arc<AppState<A, D>>>,
    cookies: Cookies,
    Path(id): Path<String>,
) -> Result<Json<DeleteResponse>, PortalError>
where
    A: AccountStore,
    D: DirectoryStore,
{
    guard::require_role(&state, &cookies, ADMIN_ONLY).await?;

    state.directory.delete_certification(&DocumentId(id)).await?;
    Ok(Json(DeleteResponse { success: true }))
}
