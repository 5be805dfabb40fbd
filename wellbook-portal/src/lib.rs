//! Wellbook Portal
//!
//! Booking and administration portal for a wellness practice, backed
//! by in-process stores or a hosted directory service.

pub mod config;
pub mod crypto;
pub mod error;
pub mod guard;
pub mod identity;
pub mod routes;
pub mod session;
pub mod state;
pub mod store;

pub use config::{BackendKind, CollectionIds, Config, RemoteConfig};
pub use error::PortalError;
pub use state::AppState;
pub use store::{AccountStore, DirectoryStore, MemoryAccounts, MemoryDirectory, RemoteBackend};
