//! Directory document models for the catalog and booking collections

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use wellbook_core::{AccountId, DocumentId};

/// Lifecycle status shared by disciplines and services
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CatalogStatus {
    #[default]
    Active,
    Inactive,
    Archived,
}

impl CatalogStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            CatalogStatus::Active => "active",
            CatalogStatus::Inactive => "inactive",
            CatalogStatus::Archived => "archived",
        }
    }
}

/// Status of an appointment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppointmentStatus {
    #[default]
    Pending,
    Confirmed,
    Completed,
    Cancelled,
}

impl AppointmentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AppointmentStatus::Pending => "pending",
            AppointmentStatus::Confirmed => "confirmed",
            AppointmentStatus::Completed => "completed",
            AppointmentStatus::Cancelled => "cancelled",
        }
    }

    /// Whether a status change is a legal transition
    ///
    /// Pending bookings get confirmed or cancelled; confirmed ones get
    /// completed. Completed and cancelled are terminal.
    pub fn can_transition_to(&self, next: AppointmentStatus) -> bool {
        matches!(
            (*self, next),
            (AppointmentStatus::Pending, AppointmentStatus::Confirmed)
                | (AppointmentStatus::Pending, AppointmentStatus::Cancelled)
                | (AppointmentStatus::Confirmed, AppointmentStatus::Completed)
        )
    }
}

/// Certification depth within a discipline
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub enum CertificationLevel {
    #[default]
    Foundational,
    Intermediate,
    Advanced,
    Expert,
    Master,
    Grandmaster,
}

/// Minimum provider seniority a discipline demands
///
/// A coarser scale than [`CertificationLevel`]; the two are not
/// interchangeable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MinCertificationLevel {
    #[default]
    Provider,
    Advanced,
    Master,
}

/// A practice discipline offered by the clinic
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Discipline {
    pub id: DocumentId,
    pub name: String,
    pub description: String,
    /// URL path segment in the public directory
    pub slug: String,
    pub image_url: Option<String>,
    pub status: CatalogStatus,
    pub license_required: bool,
    /// License class; "n/a" whenever no license is required
    pub license_type: String,
    pub min_certification_level: MinCertificationLevel,
    pub lead_provider_id: Option<DocumentId>,
    pub is_public: bool,
    pub is_internal: bool,
    pub created_at: DateTime<Utc>,
}

/// A bookable service within a discipline
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Service {
    pub id: DocumentId,
    pub name: String,
    pub description: String,
    pub discipline_id: DocumentId,
    pub service_type: String,
    pub duration_minutes: u32,
    pub cost: f64,
    pub capacity: u32,
    pub status: CatalogStatus,
    pub require_approval: bool,
    /// Administrator who approved the service for the active catalog
    pub approved_by: Option<AccountId>,
    pub created_at: DateTime<Utc>,
}

/// A provider's certification in a discipline
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Certification {
    pub id: DocumentId,
    pub provider_id: DocumentId,
    pub discipline_id: DocumentId,
    /// Practice role the certification grants, e.g. "Lead Provider"
    pub role: String,
    pub level: CertificationLevel,
    /// Services the provider may deliver under this certification
    pub service_ids: Vec<DocumentId>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

/// A booked appointment
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Appointment {
    pub id: DocumentId,
    pub client_id: DocumentId,
    pub provider_id: DocumentId,
    /// Service label captured at booking time
    pub specialty: Option<String>,
    pub date: NaiveDate,
    /// Display time as captured, e.g. "14:30"
    pub time: Option<String>,
    pub status: AppointmentStatus,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Fields for creating or replacing a provider profile
#[derive(Debug, Clone, Serialize)]
pub struct NewProvider {
    pub account_id: Option<AccountId>,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub specialty: Option<String>,
    pub license_number: Option<String>,
    pub role: Option<String>,
    pub verified: bool,
}

impl From<wellbook_core::ProviderProfile> for NewProvider {
    fn from(p: wellbook_core::ProviderProfile) -> Self {
        Self {
            account_id: p.account_id,
            name: p.name,
            email: p.email,
            phone: p.phone,
            specialty: p.specialty,
            license_number: p.license_number,
            role: p.role,
            verified: p.verified,
        }
    }
}

/// Fields for creating or replacing a client profile
#[derive(Debug, Clone, Serialize)]
pub struct NewClient {
    pub account_id: Option<AccountId>,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub emergency_contact: Option<String>,
}

/// Fields for creating or replacing a discipline
#[derive(Debug, Clone, Serialize)]
pub struct NewDiscipline {
    pub name: String,
    pub description: String,
    pub slug: String,
    pub image_url: Option<String>,
    pub status: CatalogStatus,
    pub license_required: bool,
    pub license_type: String,
    pub min_certification_level: MinCertificationLevel,
    pub lead_provider_id: Option<DocumentId>,
    pub is_public: bool,
    pub is_internal: bool,
}

/// Fields for creating or replacing a service
#[derive(Debug, Clone, Serialize)]
pub struct NewService {
    pub name: String,
    pub description: String,
    pub discipline_id: DocumentId,
    pub service_type: String,
    pub duration_minutes: u32,
    pub cost: f64,
    pub capacity: u32,
    pub status: CatalogStatus,
    pub require_approval: bool,
    pub approved_by: Option<AccountId>,
}

/// Fields for creating or replacing a certification
#[derive(Debug, Clone, Serialize)]
pub struct NewCertification {
    pub provider_id: DocumentId,
    pub discipline_id: DocumentId,
    pub role: String,
    pub level: CertificationLevel,
    pub service_ids: Vec<DocumentId>,
    pub is_active: bool,
}

impl From<Certification> for NewCertification {
    fn from(c: Certification) -> Self {
        Self {
            provider_id: c.provider_id,
            discipline_id: c.discipline_id,
            role: c.role,
            level: c.level,
            service_ids: c.service_ids,
            is_active: c.is_active,
        }
    }
}

/// Fields for creating or replacing an appointment
#[derive(Debug, Clone, Serialize)]
pub struct NewAppointment {
    pub client_id: DocumentId,
    pub provider_id: DocumentId,
    pub specialty: Option<String>,
    pub date: NaiveDate,
    pub time: Option<String>,
    pub status: AppointmentStatus,
    pub notes: Option<String>,
}

impl From<Appointment> for NewAppointment {
    fn from(a: Appointment) -> Self {
        Self {
            client_id: a.client_id,
            provider_id: a.provider_id,
            specialty: a.specialty,
            date: a.date,
            time: a.time,
            status: a.status,
            notes: a.notes,
        }
    }
}
