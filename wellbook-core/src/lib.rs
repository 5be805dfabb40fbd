//! Wellbook Core Library
//!
//! Identity resolution and role gating for the wellness practice portal:
//! - Accounts authenticate against an external auth service
//! - Profiles live in provider and client directories
//! - Each request probes the directories and derives a role from what it finds

pub mod account;
pub mod error;
pub mod guard;
pub mod identity;
pub mod profile;
pub mod role;

pub use account::{Account, AccountId, AuthSession, SessionToken};
pub use error::{DirectoryError, IdentityError};
pub use guard::{evaluate, GuardDecision, GuardPolicy, ADMIN_ONLY, PROVIDER_OR_ADMIN};
pub use identity::{
    find_client_match, find_provider_match, MatchedProfile, ProbeOutcome, ProbeStatus,
    ProfileKind, ResolvedIdentity,
};
pub use profile::{ClientProfile, DocumentId, ProviderProfile};
pub use role::Role;
