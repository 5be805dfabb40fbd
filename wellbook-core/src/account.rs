//! Account and session types from the auth service

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Unique account identifier assigned by the auth service
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AccountId(pub String);

/// Opaque session token issued at login
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionToken(pub String);

/// An account as the auth service reports it
///
/// The portal never stores accounts; it reads them through the session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    pub id: AccountId,
    pub email: String,
    pub name: String,
    pub phone: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// An open session at the auth service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthSession {
    pub token: SessionToken,
    pub account_id: AccountId,
    pub created_at: DateTime<Utc>,
}
