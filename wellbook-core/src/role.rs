//! Roles and their landing pages

use serde::{Deserialize, Serialize};

/// Role attached to a resolved identity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Provider,
    Client,
    /// Stored role string not recognized; satisfies no role gate
    Unknown,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Provider => "provider",
            Role::Client => "client",
            Role::Unknown => "unknown",
        }
    }

    /// Parse a stored role string; anything unrecognized maps to Unknown
    pub fn parse(s: &str) -> Self {
        match s {
            "admin" => Role::Admin,
            "provider" => Role::Provider,
            "client" => Role::Client,
            _ => Role::Unknown,
        }
    }

    /// Where a role lands after login
    pub fn landing_path(&self) -> &'static str {
        match self {
            Role::Admin => "/admin/dashboard",
            Role::Provider => "/provider/dashboard",
            Role::Client => "/home",
            Role::Unknown => "/home",
        }
    }
}
