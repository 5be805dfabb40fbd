//! In-memory storage implementations

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, RwLock};
use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use wellbook_core::{
    Account, AccountId, AuthSession, ClientProfile, DocumentId, ProviderProfile, SessionToken,
};

use super::{
    AccountStore, Appointment, Certification, DirectoryStore, Discipline, NewAccount,
    NewAppointment, NewCertification, NewClient, NewDiscipline, NewProvider, NewService,
    Service, StoreResult,
};
use crate::crypto;
use crate::error::PortalError;

struct StoredAccount {
    account: Account,
    password_hash: String,
}

#[derive(Default)]
struct AccountsInner {
    accounts: RwLock<Vec<StoredAccount>>,
    sessions: RwLock<Vec<AuthSession>>,
    session_delay: RwLock<Duration>,
}

/// In-memory account and session store
///
/// Cloning yields a handle to the same underlying data.
#[derive(Clone, Default)]
pub struct MemoryAccounts {
    inner: Arc<AccountsInner>,
}

impl MemoryAccounts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Delay every session lookup by the given duration (for testing purposes)
    pub fn set_session_delay(&self, delay: Duration) {
        *self.inner.session_delay.write().unwrap() = delay;
    }
}

#[async_trait]
impl AccountStore for MemoryAccounts {
    async fn create_account(&self, new: NewAccount) -> StoreResult<Account> {
        let mut accounts = self.inner.accounts.write().unwrap();
        if accounts.iter().any(|a| a.account.email == new.email) {
            return Err(PortalError::EmailTaken);
        }

        let password_hash = crypto::hash_password(&new.password)
            .map_err(|e| PortalError::Internal(e.to_string()))?;
        let account = Account {
            id: AccountId(Uuid::new_v4().to_string()),
            email: new.email,
            name: new.name,
            phone: new.phone,
            created_at: Utc::now(),
        };
        accounts.push(StoredAccount {
            account: account.clone(),
            password_hash,
        });
        Ok(account)
    }

    async fn create_session(&self, email: &str, password: &str) -> StoreResult<AuthSession> {
        let account_id = {
            let accounts = self.inner.accounts.read().unwrap();
            let stored = accounts
                .iter()
                .find(|a| a.account.email == email)
                .ok_or(PortalError::InvalidCredentials)?;
            let valid = crypto::verify_password(password, &stored.password_hash)
                .map_err(|e| PortalError::Internal(e.to_string()))?;
            if !valid {
                return Err(PortalError::InvalidCredentials);
            }
            stored.account.id.clone()
        };

        let session = AuthSession {
            token: SessionToken(Uuid::new_v4().to_string()),
            account_id,
            created_at: Utc::now(),
        };
        self.inner.sessions.write().unwrap().push(session.clone());
        Ok(session)
    }

    async fn get_session(&self, token: &SessionToken) -> StoreResult<Option<AuthSession>> {
        let delay = *self.inner.session_delay.read().unwrap();
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }

        Ok(self
            .inner
            .sessions
            .read()
            .unwrap()
            .iter()
            .find(|s| &s.token == token)
            .cloned())
    }

    async fn get_account(&self, account_id: &AccountId) -> StoreResult<Option<Account>> {
        Ok(self
            .inner
            .accounts
            .read()
            .unwrap()
            .iter()
            .find(|a| &a.account.id == account_id)
            .map(|a| a.account.clone()))
    }

    async fn delete_session(&self, token: &SessionToken) -> StoreResult<()> {
        self.inner
            .sessions
            .write()
            .unwrap()
            .retain(|s| &s.token != token);
        Ok(())
    }
}

#[derive(Default)]
struct DirectoryInner {
    providers: RwLock<Vec<ProviderProfile>>,
    clients: RwLock<Vec<ClientProfile>>,
    disciplines: RwLock<Vec<Discipline>>,
    services: RwLock<Vec<Service>>,
    certifications: RwLock<Vec<Certification>>,
    appointments: RwLock<Vec<Appointment>>,
    fail_providers: AtomicBool,
    fail_clients: AtomicBool,
}

/// In-memory directory store
///
/// Documents are kept in creation order, so listings always return the
/// oldest record first. Cloning yields a handle to the same underlying
/// data.
#[derive(Clone, Default)]
pub struct MemoryDirectory {
    inner: Arc<DirectoryInner>,
}

impl MemoryDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make provider listings fail with a backend error (for testing purposes)
    pub fn set_providers_failing(&self, failing: bool) {
        self.inner.fail_providers.store(failing, Ordering::SeqCst);
    }

    /// Make client listings fail with a backend error (for testing purposes)
    pub fn set_clients_failing(&self, failing: bool) {
        self.inner.fail_clients.store(failing, Ordering::SeqCst);
    }

    fn new_id() -> DocumentId {
        DocumentId(Uuid::new_v4().to_string())
    }
}

#[async_trait]
impl DirectoryStore for MemoryDirectory {
    async fn list_providers(&self) -> StoreResult<Vec<ProviderProfile>> {
        if self.inner.fail_providers.load(Ordering::SeqCst) {
            return Err(PortalError::Backend(
                "provider collection unavailable".to_string(),
            ));
        }
        Ok(self.inner.providers.read().unwrap().clone())
    }

    async fn get_provider(&self, id: &DocumentId) -> StoreResult<ProviderProfile> {
        self.inner
            .providers
            .read()
            .unwrap()
            .iter()
            .find(|p| &p.id == id)
            .cloned()
            .ok_or(PortalError::NotFound)
    }

    async fn create_provider(&self, new: NewProvider) -> StoreResult<ProviderProfile> {
        let provider = ProviderProfile {
            id: Self::new_id(),
            account_id: new.account_id,
            name: new.name,
            email: new.email,
            phone: new.phone,
            specialty: new.specialty,
            license_number: new.license_number,
            role: new.role,
            verified: new.verified,
            created_at: Utc::now(),
        };
        self.inner.providers.write().unwrap().push(provider.clone());
        Ok(provider)
    }

    async fn update_provider(
        &self,
        id: &DocumentId,
        new: NewProvider,
    ) -> StoreResult<ProviderProfile> {
        let mut providers = self.inner.providers.write().unwrap();
        let existing = providers
            .iter_mut()
            .find(|p| &p.id == id)
            .ok_or(PortalError::NotFound)?;
        existing.account_id = new.account_id;
        existing.name = new.name;
        existing.email = new.email;
        existing.phone = new.phone;
        existing.specialty = new.specialty;
        existing.license_number = new.license_number;
        existing.role = new.role;
        existing.verified = new.verified;
        Ok(existing.clone())
    }

    async fn delete_provider(&self, id: &DocumentId) -> StoreResult<()> {
        let mut providers = self.inner.providers.write().unwrap();
        let pos = providers
            .iter()
            .position(|p| &p.id == id)
            .ok_or(PortalError::NotFound)?;
        providers.remove(pos);
        Ok(())
    }

    async fn list_clients(&self) -> StoreResult<Vec<ClientProfile>> {
        if self.inner.fail_clients.load(Ordering::SeqCst) {
            return Err(PortalError::Backend(
                "client collection unavailable".to_string(),
            ));
        }
        Ok(self.inner.clients.read().unwrap().clone())
    }

    async fn get_client(&self, id: &DocumentId) -> StoreResult<ClientProfile> {
        self.inner
            .clients
            .read()
            .unwrap()
            .iter()
            .find(|c| &c.id == id)
            .cloned()
            .ok_or(PortalError::NotFound)
    }

    async fn create_client(&self, new: NewClient) -> StoreResult<ClientProfile> {
        let client = ClientProfile {
            id: Self::new_id(),
            account_id: new.account_id,
            name: new.name,
            email: new.email,
            phone: new.phone,
            address: new.address,
            emergency_contact: new.emergency_contact,
            created_at: Utc::now(),
        };
        self.inner.clients.write().unwrap().push(client.clone());
        Ok(client)
    }

    async fn update_client(&self, id: &DocumentId, new: NewClient) -> StoreResult<ClientProfile> {
        let mut clients = self.inner.clients.write().unwrap();
        let existing = clients
            .iter_mut()
            .find(|c| &c.id == id)
            .ok_or(PortalError::NotFound)?;
        existing.account_id = new.account_id;
        existing.name = new.name;
        existing.email = new.email;
        existing.phone = new.phone;
        existing.address = new.address;
        existing.emergency_contact = new.emergency_contact;
        Ok(existing.clone())
    }

    async fn delete_client(&self, id: &DocumentId) -> StoreResult<()> {
        let mut clients = self.inner.clients.write().unwrap();
        let pos = clients
            .iter()
            .position(|c| &c.id == id)
            .ok_or(PortalError::NotFound)?;
        clients.remove(pos);
        Ok(())
    }

    async fn list_disciplines(&self) -> StoreResult<Vec<Discipline>> {
        Ok(self.inner.disciplines.read().unwrap().clone())
    }

    async fn get_discipline(&self, id: &DocumentId) -> StoreResult<Discipline> {
        self.inner
            .disciplines
            .read()
            .unwrap()
            .iter()
            .find(|d| &d.id == id)
            .cloned()
            .ok_or(PortalError::NotFound)
    }

    async fn create_discipline(&self, new: NewDiscipline) -> StoreResult<Discipline> {
        let discipline = Discipline {
            id: Self::new_id(),
            name: new.name,
            description: new.description,
            slug: new.slug,
            image_url: new.image_url,
            status: new.status,
            license_required: new.license_required,
            license_type: new.license_type,
            min_certification_level: new.min_certification_level,
            lead_provider_id: new.lead_provider_id,
            is_public: new.is_public,
            is_internal: new.is_internal,
            created_at: Utc::now(),
        };
        self.inner
            .disciplines
            .write()
            .unwrap()
            .push(discipline.clone());
        Ok(discipline)
    }

    async fn update_discipline(
        &self,
        id: &DocumentId,
        new: NewDiscipline,
    ) -> StoreResult<Discipline> {
        let mut disciplines = self.inner.disciplines.write().unwrap();
        let existing = disciplines
            .iter_mut()
            .find(|d| &d.id == id)
            .ok_or(PortalError::NotFound)?;
        existing.name = new.name;
        existing.description = new.description;
        existing.slug = new.slug;
        existing.image_url = new.image_url;
        existing.status = new.status;
        existing.license_required = new.license_required;
        existing.license_type = new.license_type;
        existing.min_certification_level = new.min_certification_level;
        existing.lead_provider_id = new.lead_provider_id;
        existing.is_public = new.is_public;
        existing.is_internal = new.is_internal;
        Ok(existing.clone())
    }

    async fn delete_discipline(&self, id: &DocumentId) -> StoreResult<()> {
        let mut disciplines = self.inner.disciplines.write().unwrap();
        let pos = disciplines
            .iter()
            .position(|d| &d.id == id)
            .ok_or(PortalError::NotFound)?;
        disciplines.remove(pos);
        Ok(())
    }

    async fn list_services(&self) -> StoreResult<Vec<Service>> {
        Ok(self.inner.services.read().unwrap().clone())
    }

    async fn get_service(&self, id: &DocumentId) -> StoreResult<Service> {
        self.inner
            .services
            .read()
            .unwrap()
            .iter()
            .find(|s| &s.id == id)
            .cloned()
            .ok_or(PortalError::NotFound)
    }

    async fn create_service(&self, new: NewService) -> StoreResult<Service> {
        let service = Service {
            id: Self::new_id(),
            name: new.name,
            description: new.description,
            discipline_id: new.discipline_id,
            service_type: new.service_type,
            duration_minutes: new.duration_minutes,
            cost: new.cost,
            capacity: new.capacity,
            status: new.status,
            require_approval: new.require_approval,
            approved_by: new.approved_by,
            created_at: Utc::now(),
        };
        self.inner.services.write().unwrap().push(service.clone());
        Ok(service)
    }

    async fn update_service(&self, id: &DocumentId, new: NewService) -> StoreResult<Service> {
        let mut services = self.inner.services.write().unwrap();
        let existing = services
            .iter_mut()
            .find(|s| &s.id == id)
            .ok_or(PortalError::NotFound)?;
        existing.name = new.name;
        existing.description = new.description;
        existing.discipline_id = new.discipline_id;
        existing.service_type = new.service_type;
        existing.duration_minutes = new.duration_minutes;
        existing.cost = new.cost;
        existing.capacity = new.capacity;
        existing.status = new.status;
        existing.require_approval = new.require_approval;
        existing.approved_by = new.approved_by;
        Ok(existing.clone())
    }

    async fn delete_service(&self, id: &DocumentId) -> StoreResult<()> {
        let mut services = self.inner.services.write().unwrap();
        let pos = services
            .iter()
            .position(|s| &s.id == id)
            .ok_or(PortalError::NotFound)?;
        services.remove(pos);
        Ok(())
    }

    async fn list_certifications(&self) -> StoreResult<Vec<Certification>> {
        Ok(self.inner.certifications.read().unwrap().clone())
    }

    async fn get_certification(&self, id: &DocumentId) -> StoreResult<Certification> {
        self.inner
            .certifications
            .read()
            .unwrap()
            .iter()
            .find(|c| &c.id == id)
            .cloned()
            .ok_or(PortalError::NotFound)
    }

    async fn create_certification(&self, new: NewCertification) -> StoreResult<Certification> {
        let certification = Certification {
            id: Self::new_id(),
            provider_id: new.provider_id,
            discipline_id: new.discipline_id,
            role: new.role,
            level: new.level,
            service_ids: new.service_ids,
            is_active: new.is_active,
            created_at: Utc::now(),
        };
        self.inner
            .certifications
            .write()
            .unwrap()
            .push(certification.clone());
        Ok(certification)
    }

    async fn update_certification(
        &self,
        id: &DocumentId,
        new: NewCertification,
    ) -> StoreResult<Certification> {
        let mut certifications = self.inner.certifications.write().unwrap();
        let existing = certifications
            .iter_mut()
            .find(|c| &c.id == id)
            .ok_or(PortalError::NotFound)?;
        existing.provider_id = new.provider_id;
        existing.discipline_id = new.discipline_id;
        existing.role = new.role;
        existing.level = new.level;
        existing.service_ids = new.service_ids;
        existing.is_active = new.is_active;
        Ok(existing.clone())
    }

    async fn delete_certification(&self, id: &DocumentId) -> StoreResult<()> {
        let mut certifications = self.inner.certifications.write().unwrap();
        let pos = certifications
            .iter()
            .position(|c| &c.id == id)
            .ok_or(PortalError::NotFound)?;
        certifications.remove(pos);
        Ok(())
    }

    async fn list_appointments(&self) -> StoreResult<Vec<Appointment>> {
        Ok(self.inner.appointments.read().unwrap().clone())
    }

    async fn get_appointment(&self, id: &DocumentId) -> StoreResult<Appointment> {
        self.inner
            .appointments
            .read()
            .unwrap()
            .iter()
            .find(|a| &a.id == id)
            .cloned()
            .ok_or(PortalError::NotFound)
    }

    async fn create_appointment(&self, new: NewAppointment) -> StoreResult<Appointment> {
        let appointment = Appointment {
            id: Self::new_id(),
            client_id: new.client_id,
            provider_id: new.provider_id,
            specialty: new.specialty,
            date: new.date,
            time: new.time,
            status: new.status,
            notes: new.notes,
            created_at: Utc::now(),
        };
        self.inner
            .appointments
            .write()
            .unwrap()
            .push(appointment.clone());
        Ok(appointment)
    }

    async fn update_appointment(
        &self,
        id: &DocumentId,
        new: NewAppointment,
    ) -> StoreResult<Appointment> {
        let mut appointments = self.inner.appointments.write().unwrap();
        let existing = appointments
            .iter_mut()
            .find(|a| &a.id == id)
            .ok_or(PortalError::NotFound)?;
        existing.client_id = new.client_id;
        existing.provider_id = new.provider_id;
        existing.specialty = new.specialty;
        existing.date = new.date;
        existing.time = new.time;
        existing.status = new.status;
        existing.notes = new.notes;
        Ok(existing.clone())
    }

    async fn delete_appointment(&self, id: &DocumentId) -> StoreResult<()> {
        let mut appointments = self.inner.appointments.write().unwrap();
        let pos = appointments
            .iter()
            .position(|a| &a.id == id)
            .ok_or(PortalError::NotFound)?;
        appointments.remove(pos);
        Ok(())
    }
}
