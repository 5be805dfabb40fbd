//! Appointment endpoints: administration, booking, own listings

use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::Json;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tower_cookies::Cookies;

use wellbook_core::{find_client_match, DocumentId, MatchedProfile};

use crate::error::PortalError;
use crate::guard::{self, ADMIN_ONLY};
use crate::state::AppState;
use crate::store::{AccountStore, Appointment, AppointmentStatus, DirectoryStore, NewAppointment};

#[derive(Serialize)]
pub struct AppointmentStats {
    pub total: usize,
    pub pending: usize,
    pub confirmed: usize,
    pub completed: usize,
    pub cancelled: usize,
}

impl AppointmentStats {
    fn tally(appointments: &[Appointment]) -> Self {
        let count = |status: AppointmentStatus| {
            appointments.iter().filter(|a| a.status == status).count()
        };
        Self {
            total: appointments.len(),
            pending: count(AppointmentStatus::Pending),
            confirmed: count(AppointmentStatus::Confirmed),
            completed: count(AppointmentStatus::Completed),
            cancelled: count(AppointmentStatus::Cancelled),
        }
    }
}

#[derive(Deserialize, Default)]
pub struct AppointmentFilter {
    pub status: Option<AppointmentStatus>,
    pub provider_id: Option<String>,
    /// Inclusive lower date bound
    pub from: Option<NaiveDate>,
    /// Inclusive upper date bound
    pub to: Option<NaiveDate>,
}

#[derive(Serialize)]
pub struct AppointmentListResponse {
    pub success: bool,
    pub appointments: Vec<Appointment>,
    pub stats: AppointmentStats,
}

/// GET /api/admin/appointments
/// Stats describe the whole collection, not the filtered view
pub async fn list_appointments<A, D>(
    State(state): State<Arc<AppState<A, D>>>,
    cookies: Cookies,
    Query(filter): Query<AppointmentFilter>,
) -> Result<Json<AppointmentListResponse>, PortalError>
where
    A: AccountStore,
    D: DirectoryStore,
{
    guard::require_role(&state, &cookies, ADMIN_ONLY).await?;

    let all = state.directory.list_appointments().await?;
    let stats = AppointmentStats::tally(&all);

    let appointments = all
        .into_iter()
        .filter(|a| filter.status.map_or(true, |s| a.status == s))
        .filter(|a| {
            filter
                .provider_id
                .as_deref()
                .map_or(true, |p| a.provider_id.0 == p)
        })
        .filter(|a| filter.from.map_or(true, |from| a.date >= from))
        .filter(|a| filter.to.map_or(true, |to| a.date <= to))
        .collect();

    Ok(Json(AppointmentListResponse {
        success: true,
        appointments,
        stats,
    }))
}

#[derive(Deserialize)]
pub struct AdminAppointmentForm {
    pub client_id: DocumentId,
    pub provider_id: DocumentId,
    pub date: NaiveDate,
    #[serde(default)]
    pub time: Option<String>,
    #[serde(default)]
    pub specialty: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub status: AppointmentStatus,
}

#[derive(Serialize)]
pub struct AppointmentResponse {
    pub success: bool,
    pub appointment: Appointment,
}

/// POST /api/admin/appointments
/// Book on behalf of any client; both parties must exist
pub async fn create_appointment<A, D>(
    State(state): State<Arc<AppState<A, D>>>,
    cookies: Cookies,
    Json(form): Json<AdminAppointmentForm>,
) -> Result<Json<AppointmentResponse>, PortalError>
where
    A: AccountStore,
    D: DirectoryStore,
{
    guard::require_role(&state, &cookies, ADMIN_ONLY).await?;

    match state.directory.get_client(&form.client_id).await {
        Ok(_) => {}
        Err(PortalError::NotFound) => {
            return Err(PortalError::Validation("Unknown client".to_string()))
        }
        Err(e) => return Err(e),
    }
    let provider = match state.directory.get_provider(&form.provider_id).await {
        Ok(provider) => provider,
        Err(PortalError::NotFound) => {
            return Err(PortalError::Validation("Unknown provider".to_string()))
        }
        Err(e) => return Err(e),
    };

    let appointment = state
        .directory
        .create_appointment(NewAppointment {
            client_id: form.client_id,
            provider_id: form.provider_id,
            specialty: form.specialty.or(provider.specialty),
            date: form.date,
            time: form.time,
            status: form.status,
            notes: form.notes,
        })
        .await?;

    Ok(Json(AppointmentResponse {
        success: true,
        appointment,
    }))
}

#[derive(Deserialize)]
pub struct StatusForm {
    pub status: AppointmentStatus,
}

/// PUT /api/admin/appointments/{id}/status
/// Apply a status transition; illegal moves are rejected
pub async fn update_status<A, D>(
    State(state): State<Arc<AppState<A, D>>>,
    cookies: Cookies,
    Path(id): Path<String>,
    Json(form): Json<StatusForm>,
) -> Result<Json<AppointmentResponse>, PortalError>
where
    A: AccountStore,
    D: DirectoryStore,
{
    guard::require_role(&state, &cookies, ADMIN_ONLY).await?;

    let id = DocumentId(id);
    let current = state.directory.get_appointment(&id).await?;
    if !current.status.can_transition_to(form.status) {
        return Err(PortalError::InvalidTransition);
    }

    let mut new = NewAppointment::from(current);
    new.status = form.status;

    let appointment = state.directory.update_appointment(&id, new).await?;
    Ok(Json(AppointmentResponse {
        success: true,
        appointment,
    }))
}

#[derive(Serialize)]
pub struct DeleteResponse {
    pub success: bool,
}

/// DELETE /api/admin/appointments/{id}
pub async fn delete_appointment<A, D>(
    State(state): State<Arc<AppState<A, D>>>,
    cookies: Cookies,
    Path(id): Path<String>,
) -> Result<Json<DeleteResponse>, PortalError>
where
    A: AccountStore,
    D: DirectoryStore,
{
    guard::require_role(&state, &cookies, ADMIN_ONLY).await?;

    state.directory.delete_appointment(&DocumentId(id)).await?;
    Ok(Json(DeleteResponse { success: true }))
}

#[derive(Deserialize)]
pub struct BookingRequest {
    pub provider_id: DocumentId,
    pub date: NaiveDate,
    #[serde(default)]
    pub time: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

/// POST /api/appointments
/// Book an appointment as the caller's own client profile
///
/// The client record is the caller's resolved match; a caller whose
/// client match was shadowed by a provider match is looked up directly.
/// No client record at all refuses the booking.
pub async fn book_appointment<A, D>(
    State(state): State<Arc<AppState<A, D>>>,
    cookies: Cookies,
    Json(req): Json<BookingRequest>,
) -> Result<Json<AppointmentResponse>, PortalError>
where
    A: AccountStore,
    D: DirectoryStore,
{
    let identity = guard::require_identity(&state, &cookies).await?;

    let client = match identity.profile {
        Some(MatchedProfile::Client(client)) => client,
        _ => {
            let clients = state.directory.list_clients().await?;
            find_client_match(&clients, &identity.account)
                .ok_or(PortalError::NoClientProfile)?
        }
    };

    let provider = match state.directory.get_provider(&req.provider_id).await {
        Ok(provider) => provider,
        Err(PortalError::NotFound) => {
            return Err(PortalError::Validation("Unknown provider".to_string()))
        }
        Err(e) => return Err(e),
    };

    // New bookings always start out pending
    let appointment = state
        .directory
        .create_appointment(NewAppointment {
            client_id: client.id,
            provider_id: provider.id,
            specialty: provider.specialty,
            date: req.date,
            time: req.time,
            status: AppointmentStatus::Pending,
            notes: req.notes,
        })
        .await?;

    Ok(Json(AppointmentResponse {
        success: true,
        appointment,
    }))
}

#[derive(Serialize)]
pub struct MyAppointmentsResponse {
    pub success: bool,
    pub appointments: Vec<Appointment>,
}

/// GET /api/me/appointments
/// The caller's appointments, as provider or client per their profile
pub async fn my_appointments<A, D>(
    State(state): State<Arc<AppState<A, D>>>,
    cookies: Cookies,
) -> Result<Json<MyAppointmentsResponse>, PortalError>
where
    A: AccountStore,
    D: DirectoryStore,
{
    let identity = guard::require_identity(&state, &cookies).await?;

    let appointments = match &identity.profile {
        Some(MatchedProfile::Provider(provider)) => {
            let all = state.directory.list_appointments().await?;
            all.into_iter()
                .filter(|a| a.provider_id == provider.id)
                .collect()
        }
        Some(MatchedProfile::Client(client)) => {
            let all = state.directory.list_appointments().await?;
            all.into_iter()
                .filter(|a| a.client_id == client.id)
                .collect()
        }
        // No profile, nothing booked under this account
        None => Vec::new(),
    };

    Ok(Json(MyAppointmentsResponse {
        success: true,
        appointments,
    }))
}
