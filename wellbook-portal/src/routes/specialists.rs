//! Public specialists directory

use std::collections::HashSet;
use std::sync::Arc;

use axum::extract::{Path, State};
use axum::Json;
use serde::Serialize;

use wellbook_core::{DocumentId, ProviderProfile};

use crate::error::PortalError;
use crate::state::AppState;
use crate::store::{
    AccountStore, CatalogStatus, Certification, DirectoryStore, Discipline, Service,
};

#[derive(Serialize)]
pub struct SpecialistsResponse {
    pub success: bool,
    pub disciplines: Vec<Discipline>,
}

/// GET /api/specialists
/// Active, public disciplines only
pub async fn list_specialists<A, D>(
    State(state): State<Arc<AppState<A, D>>>,
) -> Result<Json<SpecialistsResponse>, PortalError>
where
    A: AccountStore,
    D: DirectoryStore,
{
    let disciplines = state
        .directory
        .list_disciplines()
        .await?
        .into_iter()
        .filter(|d| d.status == CatalogStatus::Active && d.is_public)
        .collect();

    Ok(Json(SpecialistsResponse {
        success: true,
        disciplines,
    }))
}

#[derive(Serialize)]
pub struct CategoryResponse {
    pub success: bool,
    pub discipline: Discipline,
    pub services: Vec<Service>,
    pub certifications: Vec<Certification>,
    pub providers: Vec<ProviderProfile>,
}

/// GET /api/specialists/{category}
/// Look the category up by slug, falling back to the document id
pub async fn get_category<A, D>(
    State(state): State<Arc<AppState<A, D>>>,
    Path(category): Path<String>,
) -> Result<Json<CategoryResponse>, PortalError>
where
    A: AccountStore,
    D: DirectoryStore,
{
    let disciplines = state.directory.list_disciplines().await?;
    let discipline = disciplines
        .iter()
        .find(|d| d.slug == category)
        .or_else(|| disciplines.iter().find(|d| d.id.0 == category))
        .cloned()
        .ok_or(PortalError::NotFound)?;

    let services: Vec<Service> = state
        .directory
        .list_services()
        .await?
        .into_iter()
        .filter(|s| s.discipline_id == discipline.id && s.status == CatalogStatus::Active)
        .collect();

    let certifications: Vec<Certification> = state
        .directory
        .list_certifications()
        .await?
        .into_iter()
        .filter(|c| c.discipline_id == discipline.id && c.is_active)
        .collect();

    // Only verified providers with an active certification are listed
    let certified: HashSet<&DocumentId> =
        certifications.iter().map(|c| &c.provider_id).collect();
    let providers = state
        .directory
        .list_providers()
        .await?
        .into_iter()
        .filter(|p| p.verified && certified.contains(&p.id))
        .collect();

    Ok(Json(CategoryResponse {
        success: true,
        discipline,
        services,
        certifications,
        providers,
    }))
}
