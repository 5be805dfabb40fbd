//! Client administration endpoints

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::Json;
use serde::{Deserialize, Serialize};
use tower_cookies::Cookies;

use wellbook_core::{AccountId, ClientProfile, DocumentId};

use crate::error::PortalError;
use crate::guard::{self, ADMIN_ONLY};
use crate::state::AppState;
use crate::store::{AccountStore, DirectoryStore, NewClient};

#[derive(Serialize)]
pub struct ClientStats {
    pub total: usize,
}

#[derive(Serialize)]
pub struct ClientListResponse {
    pub success: bool,
    pub clients: Vec<ClientProfile>,
    pub stats: ClientStats,
}

/// GET /api/admin/clients
pub async fn list_clients<A, D>(
    State(state): State<Arc<AppState<A, D>>>,
    cookies: Cookies,
) -> Result<Json<ClientListResponse>, PortalError>
where
    A: AccountStore,
    D: DirectoryStore,
{
    guard::require_role(&state, &cookies, ADMIN_ONLY).await?;

    let clients = state.directory.list_clients().await?;
    let stats = ClientStats {
        total: clients.len(),
    };

    Ok(Json(ClientListResponse {
        success: true,
        clients,
        stats,
    }))
}

#[derive(Deserialize)]
pub struct ClientForm {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub emergency_contact: Option<String>,
    #[serde(default)]
    pub account_id: Option<AccountId>,
}

impl ClientForm {
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

    fn into_new_client(self) -> NewClient {
        NewClient {
            account_id: self.account_id,
            name: self.name,
            email: self.email,
            phone: self.phone,
            address: self.address,
            emergency_contact: self.emergency_contact,
        }
    }
}

#[derive(Serialize)]
pub struct ClientResponse {
    pub success: bool,
    pub client: ClientProfile,
}

/// POST /api/admin/clients
pub async fn create_client<A, D>(
    State(state): State<Arc<AppState<A, D>>>,
    cookies: Cookies,
    Json(form): Json<ClientForm>,
) -> Result<Json<ClientResponse>, PortalError>
where
    A: AccountStore,
    D: DirectoryStore,
{
    guard::require_role(&state, &cookies, ADMIN_ONLY).await?;
    form.validate()?;

    let client = state.directory.create_client(form.into_new_client()).await?;
    Ok(Json(ClientResponse {
        success: true,
        client,
    }))
}

/// PUT /api/admin/clients/{id}
pub async fn update_client<A, D>(
    State(state): State<Arc<AppState<A, D>>>,
    cookies: Cookies,
    Path(id): Path<String>,
    Json(form): Json<ClientForm>,
) -> Result<Json<ClientResponse>, PortalError>
where
    A: AccountStore,
    D: DirectoryStore,
{
    guard::require_role(&state, &cookies, ADMIN_ONLY).await?;
    form.validate()?;

    let client = state
        .directory
        .update_client(&DocumentId(id), form.into_new_client())
        .await?;
    Ok(Json(ClientResponse {
        success: true,
        client,
    }))
}

#[derive(Serialize)]
pub struct DeleteResponse {
    pub success: bool,
}

/// DELETE /api/admin/clients/{id}
pub async fn delete_client<A, D>(
    State(state): State<Arc<AppState<A, D>>>,
    cookies: Cookies,
    Path(id): Path<String>,
) -> Result<Json<DeleteResponse>, PortalError>
where
    A: AccountStore,
    D: DirectoryStore,
{
    guard::require_role(&state, &cookies, ADMIN_ONLY).await?;

    state.directory.delete_client(&DocumentId(id)).await?;
    Ok(Json(DeleteResponse { success: true }))
}
