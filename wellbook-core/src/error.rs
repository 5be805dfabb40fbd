//! Error types for identity resolution

use thiserror::Error;

/// Hard failures of identity resolution
///
/// Everything else (unreachable directories, malformed records) degrades into
/// the resolved identity instead of failing it.
#[derive(Debug, Error)]
pub enum IdentityError {
    #[error("Not authenticated")]
    Unauthenticated,

    #[error("Identity resolution timed out")]
    Timeout,
}

/// Failure probing a profile directory
#[derive(Debug, Clone, Error)]
pub enum DirectoryError {
    #[error("Directory query failed: {0}")]
    Query(String),

    #[error("Directory query timed out")]
    Timeout,
}
