//! Storage abstractions for the portal

pub mod memory;
pub mod models;
pub mod remote;

pub use memory::{MemoryAccounts, MemoryDirectory};
pub use models::*;
pub use remote::RemoteBackend;

use async_trait::async_trait;

use wellbook_core::{
    Account, AccountId, AuthSession, ClientProfile, DocumentId, ProviderProfile, SessionToken,
};

use crate::error::PortalError;

/// Result type for store operations
pub type StoreResult<T> = Result<T, PortalError>;

/// Fields for registering a new account
#[derive(Debug, Clone)]
pub struct NewAccount {
    pub email: String,
    pub password: String,
    pub name: String,
    pub phone: Option<String>,
}

/// Trait for account and session storage
#[async_trait]
pub trait AccountStore: Send + Sync {
    /// Register a new account
    async fn create_account(&self, new: NewAccount) -> StoreResult<Account>;

    /// Create a session from email and password credentials
    async fn create_session(&self, email: &str, password: &str) -> StoreResult<AuthSession>;

    /// Look up a session by token
    async fn get_session(&self, token: &SessionToken) -> StoreResult<Option<AuthSession>>;

    /// Look up an account by ID
    async fn get_account(&self, account_id: &AccountId) -> StoreResult<Option<Account>>;

    /// Delete a session, ending it
    async fn delete_session(&self, token: &SessionToken) -> StoreResult<()>;
}

/// Trait for the profile, catalog and booking collections
#[async_trait]
pub trait DirectoryStore: Send + Sync {
    /// List all provider profiles in creation order
    async fn list_providers(&self) -> StoreResult<Vec<ProviderProfile>>;

    /// Get a provider profile by ID
    async fn get_provider(&self, id: &DocumentId) -> StoreResult<ProviderProfile>;

    /// Create a provider profile
    async fn create_provider(&self, new: NewProvider) -> StoreResult<ProviderProfile>;

    /// Replace a provider profile's fields
    async fn update_provider(&self, id: &DocumentId, new: NewProvider)
        -> StoreResult<ProviderProfile>;

    /// Delete a provider profile
    async fn delete_provider(&self, id: &DocumentId) -> StoreResult<()>;

    /// List all client profiles in creation order
    async fn list_clients(&self) -> StoreResult<Vec<ClientProfile>>;

    /// Get a client profile by ID
    async fn get_client(&self, id: &DocumentId) -> StoreResult<ClientProfile>;

    /// Create a client profile
    async fn create_client(&self, new: NewClient) -> StoreResult<ClientProfile>;

    /// Replace a client profile's fields
    async fn update_client(&self, id: &DocumentId, new: NewClient) -> StoreResult<ClientProfile>;

    /// Delete a client profile
    async fn delete_client(&self, id: &DocumentId) -> StoreResult<()>;

    /// List all disciplines in creation order
    async fn list_disciplines(&self) -> StoreResult<Vec<Discipline>>;

    /// Get a discipline by ID
    async fn get_discipline(&self, id: &DocumentId) -> StoreResult<Discipline>;

    /// Create a discipline
    async fn create_discipline(&self, new: NewDiscipline) -> StoreResult<Discipline>;

    /// Replace a discipline's fields
    async fn update_discipline(&self, id: &DocumentId, new: NewDiscipline)
        -> StoreResult<Discipline>;

    /// Delete a discipline
    async fn delete_discipline(&self, id: &DocumentId) -> StoreResult<()>;

    /// List all services in creation order
    async fn list_services(&self) -> StoreResult<Vec<Service>>;

    /// Get a service by ID
    async fn get_service(&self, id: &DocumentId) -> StoreResult<Service>;

    /// Create a service
    async fn create_service(&self, new: NewService) -> StoreResult<Service>;

    /// Replace a service's fields
    async fn update_service(&self, id: &DocumentId, new: NewService) -> StoreResult<Service>;

    /// Delete a service
    async fn delete_service(&self, id: &DocumentId) -> StoreResult<()>;

    /// List all certifications in creation order
    async fn list_certifications(&self) -> StoreResult<Vec<Certification>>;

    /// Get a certification by ID
    async fn get_certification(&self, id: &DocumentId) -> StoreResult<Certification>;

    /// Create a certification
    async fn create_certification(&self, new: NewCertification) -> StoreResult<Certification>;

    /// Replace a certification's fields
    async fn update_certification(
        &self,
        id: &DocumentId,
        new: NewCertification,
    ) -> StoreResult<Certification>;

    /// Delete a certification
    async fn delete_certification(&self, id: &DocumentId) -> StoreResult<()>;

    /// List all appointments in creation order
    async fn list_appointments(&self) -> StoreResult<Vec<Appointment>>;

    /// Get an appointment by ID
    async fn get_appointment(&self, id: &DocumentId) -> StoreResult<Appointment>;

    /// Create an appointment
    async fn create_appointment(&self, new: NewAppointment) -> StoreResult<Appointment>;

    /// Replace an appointment's fields
    async fn update_appointment(
        &self,
        id: &DocumentId,
        new: NewAppointment,
    ) -> StoreResult<Appointment>;

    /// Delete an appointment
    async fn delete_appointment(&self, id: &DocumentId) -> StoreResult<()>;
}
