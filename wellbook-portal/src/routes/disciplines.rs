//! Discipline administration endpoints

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
    AccountStore, CatalogStatus, DirectoryStore, Discipline, MinCertificationLevel, NewDiscipline,
};

/// Lowercased name with whitespace runs collapsed to hyphens
fn slugify(name: &str) -> String {
    name.trim()
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
}

#[derive(Serialize)]
pub struct DisciplineStats {
    pub total: usize,
    pub active: usize,
    pub license_required: usize,
    pub with_lead: usize,
}

#[derive(Serialize)]
pub struct DisciplineListResponse {
    pub success: bool,
    pub disciplines: Vec<Discipline>,
    pub stats: DisciplineStats,
}

/// GET /api/admin/disciplines
pub async fn list_disciplines<A, D>(
    State(state): State<Arc<AppState<A, D>>>,
    cookies: Cookies,
) -> Result<Json<DisciplineListResponse>, PortalError>
where
    A: AccountStore,
    D: DirectoryStore,
{
    guard::require_role(&state, &cookies, ADMIN_ONLY).await?;

    let disciplines = state.directory.list_disciplines().await?;
    let stats = DisciplineStats {
        total: disciplines.len(),
        active: disciplines
            .iter()
            .filter(|d| d.status == CatalogStatus::Active)
            .count(),
        license_required: disciplines.iter().filter(|d| d.license_required).count(),
        with_lead: disciplines
            .iter()
            .filter(|d| d.lead_provider_id.is_some())
            .count(),
    };

    Ok(Json(DisciplineListResponse {
        success: true,
        disciplines,
        stats,
    }))
}

#[derive(Deserialize)]
pub struct DisciplineForm {
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Generated from the name when empty
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub status: CatalogStatus,
    #[serde(default)]
    pub license_required: bool,
    #[serde(default)]
    pub license_type: Option<String>,
    #[serde(default)]
    pub min_certification_level: MinCertificationLevel,
    #[serde(default)]
    pub lead_provider_id: Option<DocumentId>,
    #[serde(default)]
    pub is_public: bool,
    #[serde(default)]
    pub is_internal: bool,
}

impl DisciplineForm {
    fn validate(&self) -> Result<(), PortalError> {
        if self.name.trim().is_empty() {
            return Err(PortalError::Validation("Name is required".to_string()));
        }
        Ok(())
    }

    /// Apply the slug and license-type rules and build the store payload
    fn into_new_discipline(self) -> NewDiscipline {
        let slug = self
            .slug
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| slugify(&self.name));

        // licenseType only carries meaning when a license is required
        let license_type = if self.license_required {
            self.license_type.unwrap_or_else(|| "n/a".to_string())
        } else {
            "n/a".to_string()
        };

        NewDiscipline {
            name: self.name,
            description: self.description,
            slug,
            image_url: self.image_url,
            status: self.status,
            license_required: self.license_required,
            license_type,
            min_certification_level: self.min_certification_level,
            lead_provider_id: self.lead_provider_id,
            is_public: self.is_public,
            is_internal: self.is_internal,
        }
    }
}

#[derive(Serialize)]
pub struct DisciplineResponse {
    pub success: bool,
    pub discipline: Discipline,
}

/// GET /api/admin/disciplines/{id}
pub async fn get_discipline<A, D>(
    State(state): State<Arc<AppState<A, D>>>,
    cookies: Cookies,
    Path(id): Path<String>,
) -> Result<Json<DisciplineResponse>, PortalError>
where
    A: AccountStore,
    D: DirectoryStore,
{
    guard::require_role(&state, &cookies, ADMIN_ONLY).await?;

    let discipline = state.directory.get_discipline(&DocumentId(id)).await?;
    Ok(Json(DisciplineResponse {
        success: true,
        discipline,
    }))
}

/// POST /api/admin/disciplines
pub async fn create_discipline<A, D>(
    State(state): State<Arc<AppState<A, D>>>,
    cookies: Cookies,
    Json(form): Json<DisciplineForm>,
) -> Result<Json<DisciplineResponse>, PortalError>
where
    A: AccountStore,
    D: DirectoryStore,
{
    guard::require_role(&state, &cookies, ADMIN_ONLY).await?;
    form.validate()?;

    let discipline = state
        .directory
        .create_discipline(form.into_new_discipline())
        .await?;
    Ok(Json(DisciplineResponse {
        success: true,
        discipline,
    }))
}

/// PUT /api/admin/disciplines/{id}
pub async fn update_discipline<A, D>(
    State(state): State<Arc<AppState<A, D>>>,
    cookies: Cookies,
    Path(id): Path<String>,
    Json(form): Json<DisciplineForm>,
) -> Result<Json<DisciplineResponse>, PortalError>
where
    A: AccountStore,
    D: DirectoryStore,
{
    guard::require_role(&state, &cookies, ADMIN_ONLY).await?;
    form.validate()?;

    let discipline = state
        .directory
        .update_discipline(&DocumentId(id), form.into_new_discipline())
        .await?;
    Ok(Json(DisciplineResponse {
        success: true,
        discipline,
    }))
}

#[derive(Serialize)]
pub struct DeleteResponse {
    pub success: bool,
}

/// DELETE /api/admin/disciplines/{id}
pub async fn delete_discipline<A, D>(
    State(state): State<Arc<AppState<A, D>>>,
    cookies: Cookies,
    Path(id): Path<String>,
) -> Result<Json<DeleteResponse>, PortalError>
where
    A: AccountStore,
    D: DirectoryStore,
{
    guard::require_role(&state, &cookies, ADMIN_ONLY).await?;

    state.directory.delete_discipline(&DocumentId(id)).await?;
    Ok(Json(DeleteResponse { success: true }))
}
