//! Service administration endpoints

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::Json;
use serde::{Deserialize, Serialize};
use tower_cookies::Cookies;

use wellbook_core::{DocumentId, ResolvedIdentity};

use crate::error::PortalError;
use crate::guard::{self, ADMIN_ONLY};
use crate::state::AppState;
use crate::store::{AccountStore, CatalogStatus, DirectoryStore, NewService, Service};

#[derive(Serialize)]
pub struct ServiceStats {
    pub total: usize,
    pub active: usize,
    pub clinical: usize,
    pub community: usize,
    pub paid: usize,
}

#[derive(Serialize)]
pub struct ServiceListResponse {
    pub success: bool,
    pub services: Vec<Service>,
    pub stats: ServiceStats,
}

/// GET /api/admin/services
pub async fn list_services<A, D>(
    State(state): State<Arc<AppState<A, D>>>,
    cookies: Cookies,
) -> Result<Json<ServiceListResponse>, PortalError>
where
    A: AccountStore,
    D: DirectoryStore,
{
    guard::require_role(&state, &cookies, ADMIN_ONLY).await?;

    let services = state.directory.list_services().await?;
    let stats = ServiceStats {
        total: services.len(),
        active: services
            .iter()
            .filter(|s| s.status == CatalogStatus::Active)
            .count(),
        clinical: services
            .iter()
            .filter(|s| s.service_type == "clinical")
            .count(),
        community: services
            .iter()
            .filter(|s| s.service_type == "community")
            .count(),
        paid: services.iter().filter(|s| s.cost > 0.0).count(),
    };

    Ok(Json(ServiceListResponse {
        success: true,
        services,
        stats,
    }))
}

fn default_service_type() -> String {
    "clinical".to_string()
}

fn default_duration() -> u32 {
    60
}

fn default_capacity() -> u32 {
    1
}

#[derive(Deserialize)]
pub struct ServiceForm {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub discipline_id: DocumentId,
    #[serde(default = "default_service_type")]
    pub service_type: String,
    #[serde(default = "default_duration")]
    pub duration_minutes: u32,
    #[serde(default)]
    pub cost: f64,
    #[serde(default = "default_capacity")]
    pub capacity: u32,
    #[serde(default)]
    pub status: CatalogStatus,
    #[serde(default)]
    pub require_approval: bool,
}

impl ServiceForm {
    /// Build the store payload; an active service records who approved it
    fn into_new_service(self, admin: &ResolvedIdentity) -> NewService {
        let approved_by = if self.status == CatalogStatus::Active {
            Some(admin.account.id.clone())
        } else {
            None
        };

        NewService {
            name: self.name,
            description: self.description,
            discipline_id: self.discipline_id,
            service_type: self.service_type,
            duration_minutes: self.duration_minutes,
            cost: self.cost,
            capacity: self.capacity,
            status: self.status,
            require_approval: self.require_approval,
            approved_by,
        }
    }
}

/// Name must be present and the discipline must exist
async fn validate_form<A, D>(
    state: &AppState<A, D>,
    form: &ServiceForm,
) -> Result<(), PortalError>
where
    A: AccountStore,
    D: DirectoryStore,
{
    if form.name.trim().is_empty() {
        return Err(PortalError::Validation("Name is required".to_string()));
    }
    match state.directory.get_discipline(&form.discipline_id).await {
        Ok(_) => Ok(()),
        Err(PortalError::NotFound) => {
            Err(PortalError::Validation("Unknown discipline".to_string()))
        }
        Err(e) => Err(e),
    }
}

#[derive(Serialize)]
pub struct ServiceResponse {
    pub success: bool,
    pub service: Service,
}

/// POST /api/admin/services
pub async fn create_service<A, D>(
    State(state): State<Arc<AppState<A, D>>>,
    cookies: Cookies,
    Json(form): Json<ServiceForm>,
) -> Result<Json<ServiceResponse>, PortalError>
where
    A: AccountStore,
    D: DirectoryStore,
{
    let admin = guard::require_role(&state, &cookies, ADMIN_ONLY).await?;
    validate_form(&state, &form).await?;

    let service = state
        .directory
        .create_service(form.into_new_service(&admin))
        .await?;
    Ok(Json(ServiceResponse {
        success: true,
        service,
    }))
}

/// PUT /api/admin/services/{id}
pub async fn update_service<A, D>(
    State(state): State<Arc<AppState<A, D>>>,
    cookies: Cookies,
    Path(id): Path<String>,
    Json(form): Json<ServiceForm>,
) -> Result<Json<ServiceResponse>, PortalError>
where
    A: AccountStore,
    D: DirectoryStore,
{
    let admin = guard::require_role(&state, &cookies, ADMIN_ONLY).await?;
    validate_form(&state, &form).await?;

    let service = state
        .directory
        .update_service(&DocumentId(id), form.into_new_service(&admin))
        .await?;
    Ok(Json(ServiceResponse {
        success: true,
        service,
    }))
}

#[derive(Serialize)]
pub struct DeleteResponse {
    pub success: bool,
}

/// DELETE /api/admin/services/{id}
pub async fn delete_service<A, D>(
    State(state): State<Arc<AppState<A, D>>>,
    cookies: Cookies,
    Path(id): Path<String>,
) -> Result<Json<DeleteResponse>, PortalError>
where
    A: AccountStore,
    D: DirectoryStore,
{
    guard::require_role(&state, &cookies, ADMIN_ONLY).await?;

    state.directory.delete_service(&DocumentId(id)).await?;
    Ok(Json(DeleteResponse { success: true }))
}
