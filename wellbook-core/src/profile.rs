//! Directory profile records

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::account::AccountId;

/// Unique document identifier assigned by the directory
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DocumentId(pub String);

/// A practitioner record in the provider directory
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderProfile {
    pub id: DocumentId,
    /// Link to the auth account, when the record carries one
    pub account_id: Option<AccountId>,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    /// Primary discipline, as entered by an administrator
    pub specialty: Option<String>,
    pub license_number: Option<String>,
    /// Stored role string; absent means an ordinary provider
    pub role: Option<String>,
    pub verified: bool,
    pub created_at: DateTime<Utc>,
}

/// A client record in the client directory
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientProfile {
    pub id: DocumentId,
    pub account_id: Option<AccountId>,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub emergency_contact: Option<String>,
    pub created_at: DateTime<Utc>,
}
