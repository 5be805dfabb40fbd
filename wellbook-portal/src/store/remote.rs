//! Hosted backend client
//!
//! Implements both store traits over the hosted service's REST surface.
//! Auth lives under `/v1/accounts` and `/v1/sessions`; the collections live
//! under the document API, where records carry `$id` and `$createdAt`
//! metadata and the attribute names the original deployment used
//! (`userId`, `licenseNumber`, `patientId`, ...).

use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use reqwest::{Method, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use wellbook_core::{
    Account, AccountId, AuthSession, ClientProfile, DocumentId, ProviderProfile, SessionToken,
};

use super::{
    AccountStore, Appointment, AppointmentStatus, CatalogStatus, Certification,
    CertificationLevel, DirectoryStore, Discipline, MinCertificationLevel, NewAccount,
    NewAppointment, NewCertification, NewClient, NewDiscipline, NewProvider, NewService,
    Service, StoreResult,
};
use crate::config::RemoteConfig;
use crate::error::PortalError;

const HTTP_TIMEOUT: Duration = Duration::from_secs(30);

/// Client for the hosted auth and directory service
#[derive(Clone)]
pub struct RemoteBackend {
    client: reqwest::Client,
    config: RemoteConfig,
}

impl RemoteBackend {
    pub fn new(config: &RemoteConfig) -> Result<Self, PortalError> {
        let client = reqwest::Client::builder()
            .timeout(HTTP_TIMEOUT)
            .build()
            .map_err(|e| PortalError::Internal(e.to_string()))?;
        Ok(Self {
            client,
            config: config.clone(),
        })
    }

    fn request(&self, method: Method, url: String) -> RequestBuilder {
        self.client
            .request(method, url)
            .header("X-Wellbook-Project", &self.config.project)
            .header("X-Wellbook-Key", &self.config.api_key)
    }

    fn documents_url(&self, collection: &str) -> String {
        format!(
            "{}/v1/databases/{}/collections/{}/documents",
            self.config.endpoint, self.config.database_id, collection
        )
    }

    fn document_url(&self, collection: &str, id: &DocumentId) -> String {
        format!("{}/{}", self.documents_url(collection), id.0)
    }

    fn error_for(status: StatusCode) -> PortalError {
        match status {
            StatusCode::NOT_FOUND => PortalError::NotFound,
            StatusCode::UNAUTHORIZED => PortalError::InvalidCredentials,
            StatusCode::CONFLICT => PortalError::EmailTaken,
            _ => PortalError::Backend(format!("unexpected status {status}")),
        }
    }

    async fn execute<T: DeserializeOwned>(&self, request: RequestBuilder) -> StoreResult<T> {
        let response = request
            .send()
            .await
            .map_err(|e| PortalError::Backend(e.to_string()))?;
        let status = response.status();
        if !status.is_success() {
            return Err(Self::error_for(status));
        }
        response
            .json()
            .await
            .map_err(|e| PortalError::Backend(e.to_string()))
    }

    async fn execute_empty(&self, request: RequestBuilder) -> StoreResult<()> {
        let response = request
            .send()
            .await
            .map_err(|e| PortalError::Backend(e.to_string()))?;
        let status = response.status();
        if !status.is_success() {
            return Err(Self::error_for(status));
        }
        Ok(())
    }

    async fn list_documents<T: DeserializeOwned>(
        &self,
        collection: &str,
    ) -> StoreResult<Vec<RemoteDocument<T>>> {
        let list: DocumentList<T> = self
            .execute(self.request(Method::GET, self.documents_url(collection)))
            .await?;
        Ok(list.documents)
    }

    async fn get_document<T: DeserializeOwned>(
        &self,
        collection: &str,
        id: &DocumentId,
    ) -> StoreResult<RemoteDocument<T>> {
        self.execute(self.request(Method::GET, self.document_url(collection, id)))
            .await
    }

    async fn create_document<T: DeserializeOwned, P: Serialize>(
        &self,
        collection: &str,
        data: P,
    ) -> StoreResult<RemoteDocument<T>> {
        let body = CreateDocument {
            document_id: "unique()",
            data,
        };
        self.execute(
            self.request(Method::POST, self.documents_url(collection))
                .json(&body),
        )
        .await
    }

    async fn update_document<T: DeserializeOwned, P: Serialize>(
        &self,
        collection: &str,
        id: &DocumentId,
        data: P,
    ) -> StoreResult<RemoteDocument<T>> {
        let body = UpdateDocument { data };
        self.execute(
            self.request(Method::PATCH, self.document_url(collection, id))
                .json(&body),
        )
        .await
    }

    async fn delete_document(&self, collection: &str, id: &DocumentId) -> StoreResult<()> {
        self.execute_empty(self.request(Method::DELETE, self.document_url(collection, id)))
            .await
    }
}

#[derive(Deserialize)]
struct DocumentList<T> {
    documents: Vec<RemoteDocument<T>>,
}

#[derive(Deserialize)]
struct RemoteDocument<T> {
    #[serde(rename = "$id")]
    id: String,
    #[serde(rename = "$createdAt")]
    created_at: DateTime<Utc>,
    #[serde(flatten)]
    data: T,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CreateDocument<T> {
    document_id: &'static str,
    data: T,
}

#[derive(Serialize)]
struct UpdateDocument<T> {
    data: T,
}

#[derive(Deserialize)]
struct RemoteAccount {
    #[serde(rename = "$id")]
    id: String,
    email: String,
    name: String,
    #[serde(default)]
    phone: Option<String>,
    #[serde(rename = "$createdAt")]
    created_at: DateTime<Utc>,
}

impl From<RemoteAccount> for Account {
    fn from(a: RemoteAccount) -> Self {
        Account {
            id: AccountId(a.id),
            email: a.email,
            name: a.name,
            phone: a.phone,
            created_at: a.created_at,
        }
    }
}

#[derive(Deserialize)]
struct RemoteSession {
    token: String,
    #[serde(rename = "userId")]
    account_id: String,
    #[serde(rename = "$createdAt")]
    created_at: DateTime<Utc>,
}

impl From<RemoteSession> for AuthSession {
    fn from(s: RemoteSession) -> Self {
        AuthSession {
            token: SessionToken(s.token),
            account_id: AccountId(s.account_id),
            created_at: s.created_at,
        }
    }
}

#[derive(Serialize)]
struct CreateAccountBody<'a> {
    email: &'a str,
    password: &'a str,
    name: &'a str,
    phone: Option<&'a str>,
}

#[derive(Serialize)]
struct CredentialsBody<'a> {
    email: &'a str,
    password: &'a str,
}

/// Optional attributes come back as missing, null, or an empty string
fn non_empty(raw: Option<String>) -> Option<String> {
    raw.filter(|s| !s.is_empty())
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireProvider {
    #[serde(default)]
    user_id: Option<String>,
    name: String,
    email: String,
    #[serde(default)]
    phone: Option<String>,
    #[serde(default)]
    specialty: Option<String>,
    #[serde(default)]
    license_number: Option<String>,
    #[serde(default)]
    role: Option<String>,
    #[serde(default)]
    verified: bool,
}

impl From<RemoteDocument<WireProvider>> for ProviderProfile {
    fn from(doc: RemoteDocument<WireProvider>) -> Self {
        ProviderProfile {
            id: DocumentId(doc.id),
            account_id: non_empty(doc.data.user_id).map(AccountId),
            name: doc.data.name,
            email: doc.data.email,
            phone: doc.data.phone,
            specialty: doc.data.specialty,
            license_number: doc.data.license_number,
            role: doc.data.role,
            verified: doc.data.verified,
            created_at: doc.created_at,
        }
    }
}

impl From<NewProvider> for WireProvider {
    fn from(new: NewProvider) -> Self {
        WireProvider {
            user_id: new.account_id.map(|a| a.0),
            name: new.name,
            email: new.email,
            phone: new.phone,
            specialty: new.specialty,
            license_number: new.license_number,
            role: new.role,
            verified: new.verified,
        }
    }
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireClient {
    #[serde(default)]
    user_id: Option<String>,
    name: String,
    email: String,
    #[serde(default)]
    phone: Option<String>,
    #[serde(default)]
    address: Option<String>,
    #[serde(default)]
    emergency_contact: Option<String>,
}

impl From<RemoteDocument<WireClient>> for ClientProfile {
    fn from(doc: RemoteDocument<WireClient>) -> Self {
        ClientProfile {
            id: DocumentId(doc.id),
            account_id: non_empty(doc.data.user_id).map(AccountId),
            name: doc.data.name,
            email: doc.data.email,
            phone: doc.data.phone,
            address: doc.data.address,
            emergency_contact: doc.data.emergency_contact,
            created_at: doc.created_at,
        }
    }
}

impl From<NewClient> for WireClient {
    fn from(new: NewClient) -> Self {
        WireClient {
            user_id: new.account_id.map(|a| a.0),
            name: new.name,
            email: new.email,
            phone: new.phone,
            address: new.address,
            emergency_contact: new.emergency_contact,
        }
    }
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireDiscipline {
    name: String,
    #[serde(default)]
    description: String,
    slug: String,
    #[serde(default)]
    image_url: Option<String>,
    #[serde(default)]
    status: CatalogStatus,
    #[serde(default)]
    license_required: bool,
    #[serde(default)]
    license_type: Option<String>,
    #[serde(default)]
    min_certification_level: MinCertificationLevel,
    #[serde(default)]
    lead_provider_id: Option<String>,
    #[serde(default)]
    is_public: bool,
    #[serde(default)]
    is_internal: bool,
}

impl From<RemoteDocument<WireDiscipline>> for Discipline {
    fn from(doc: RemoteDocument<WireDiscipline>) -> Self {
        Discipline {
            id: DocumentId(doc.id),
            name: doc.data.name,
            description: doc.data.description,
            slug: doc.data.slug,
            image_url: non_empty(doc.data.image_url),
            status: doc.data.status,
            license_required: doc.data.license_required,
            license_type: doc.data.license_type.unwrap_or_else(|| "n/a".to_string()),
            min_certification_level: doc.data.min_certification_level,
            lead_provider_id: non_empty(doc.data.lead_provider_id).map(DocumentId),
            is_public: doc.data.is_public,
            is_internal: doc.data.is_internal,
            created_at: doc.created_at,
        }
    }
}

impl From<NewDiscipline> for WireDiscipline {
    fn from(new: NewDiscipline) -> Self {
        WireDiscipline {
            name: new.name,
            description: new.description,
            slug: new.slug,
            image_url: new.image_url,
            status: new.status,
            license_required: new.license_required,
            license_type: Some(new.license_type),
            min_certification_level: new.min_certification_level,
            lead_provider_id: new.lead_provider_id.map(|d| d.0),
            is_public: new.is_public,
            is_internal: new.is_internal,
        }
    }
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireService {
    name: String,
    #[serde(default)]
    description: String,
    discipline_id: String,
    #[serde(default)]
    service_type: Option<String>,
    /// Minutes
    #[serde(default)]
    duration: Option<u32>,
    #[serde(default)]
    cost: Option<f64>,
    #[serde(default)]
    capacity: Option<u32>,
    #[serde(default)]
    status: CatalogStatus,
    #[serde(default)]
    require_approval: bool,
    #[serde(default)]
    approved_by: Option<String>,
}

impl From<RemoteDocument<WireService>> for Service {
    fn from(doc: RemoteDocument<WireService>) -> Self {
        Service {
            id: DocumentId(doc.id),
            name: doc.data.name,
            description: doc.data.description,
            discipline_id: DocumentId(doc.data.discipline_id),
            service_type: doc
                .data
                .service_type
                .unwrap_or_else(|| "clinical".to_string()),
            duration_minutes: doc.data.duration.unwrap_or(60),
            cost: doc.data.cost.unwrap_or(0.0),
            capacity: doc.data.capacity.unwrap_or(1),
            status: doc.data.status,
            require_approval: doc.data.require_approval,
            approved_by: non_empty(doc.data.approved_by).map(AccountId),
            created_at: doc.created_at,
        }
    }
}

impl From<NewService> for WireService {
    fn from(new: NewService) -> Self {
        WireService {
            name: new.name,
            description: new.description,
            discipline_id: new.discipline_id.0,
            service_type: Some(new.service_type),
            duration: Some(new.duration_minutes),
            cost: Some(new.cost),
            capacity: Some(new.capacity),
            status: new.status,
            require_approval: new.require_approval,
            approved_by: new.approved_by.map(|a| a.0),
        }
    }
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireCertification {
    provider_id: String,
    discipline_id: String,
    role: String,
    certification_level: CertificationLevel,
    #[serde(default)]
    service_ids: Vec<String>,
    #[serde(default)]
    is_active: bool,
}

impl From<RemoteDocument<WireCertification>> for Certification {
    fn from(doc: RemoteDocument<WireCertification>) -> Self {
        Certification {
            id: DocumentId(doc.id),
            provider_id: DocumentId(doc.data.provider_id),
            discipline_id: DocumentId(doc.data.discipline_id),
            role: doc.data.role,
            level: doc.data.certification_level,
            service_ids: doc.data.service_ids.into_iter().map(DocumentId).collect(),
            is_active: doc.data.is_active,
            created_at: doc.created_at,
        }
    }
}

impl From<NewCertification> for WireCertification {
    fn from(new: NewCertification) -> Self {
        WireCertification {
            provider_id: new.provider_id.0,
            discipline_id: new.discipline_id.0,
            role: new.role,
            certification_level: new.level,
            service_ids: new.service_ids.into_iter().map(|d| d.0).collect(),
            is_active: new.is_active,
        }
    }
}

/// Appointment attributes keep the deployment's legacy names
#[derive(Serialize, Deserialize)]
struct WireAppointment {
    #[serde(rename = "patientId")]
    client_id: String,
    #[serde(rename = "doctorId")]
    provider_id: String,
    #[serde(default)]
    specialty: Option<String>,
    date: NaiveDate,
    #[serde(default)]
    time: Option<String>,
    #[serde(default)]
    status: AppointmentStatus,
    #[serde(default)]
    notes: Option<String>,
}

impl From<RemoteDocument<WireAppointment>> for Appointment {
    fn from(doc: RemoteDocument<WireAppointment>) -> Self {
        Appointment {
            id: DocumentId(doc.id),
            client_id: DocumentId(doc.data.client_id),
            provider_id: DocumentId(doc.data.provider_id),
            specialty: doc.data.specialty,
            date: doc.data.date,
            time: doc.data.time,
            status: doc.data.status,
            notes: doc.data.notes,
            created_at: doc.created_at,
        }
    }
}

impl From<NewAppointment> for WireAppointment {
    fn from(new: NewAppointment) -> Self {
        WireAppointment {
            client_id: new.client_id.0,
            provider_id: new.provider_id.0,
            specialty: new.specialty,
            date: new.date,
            time: new.time,
            status: new.status,
            notes: new.notes,
        }
    }
}

#[async_trait]
impl AccountStore for RemoteBackend {
    async fn create_account(&self, new: NewAccount) -> StoreResult<Account> {
        let url = format!("{}/v1/accounts", self.config.endpoint);
        let body = CreateAccountBody {
            email: &new.email,
            password: &new.password,
            name: &new.name,
            phone: new.phone.as_deref(),
        };
        let account: RemoteAccount = self
            .execute(self.request(Method::POST, url).json(&body))
            .await?;
        Ok(account.into())
    }

    async fn create_session(&self, email: &str, password: &str) -> StoreResult<AuthSession> {
        let url = format!("{}/v1/sessions", self.config.endpoint);
        let body = CredentialsBody { email, password };
        let session: RemoteSession = self
            .execute(self.request(Method::POST, url).json(&body))
            .await?;
        Ok(session.into())
    }

    async fn get_session(&self, token: &SessionToken) -> StoreResult<Option<AuthSession>> {
        let url = format!("{}/v1/sessions/{}", self.config.endpoint, token.0);
        match self
            .execute::<RemoteSession>(self.request(Method::GET, url))
            .await
        {
            Ok(session) => Ok(Some(session.into())),
            Err(PortalError::NotFound) => Ok(None),
            Err(e) => Err(e),
        }
    }

    async fn get_account(&self, account_id: &AccountId) -> StoreResult<Option<Account>> {
        let url = format!("{}/v1/accounts/{}", self.config.endpoint, account_id.0);
        match self
            .execute::<RemoteAccount>(self.request(Method::GET, url))
            .await
        {
            Ok(account) => Ok(Some(account.into())),
            Err(PortalError::NotFound) => Ok(None),
            Err(e) => Err(e),
        }
    }

    async fn delete_session(&self, token: &SessionToken) -> StoreResult<()> {
        let url = format!("{}/v1/sessions/{}", self.config.endpoint, token.0);
        match self.execute_empty(self.request(Method::DELETE, url)).await {
            Ok(()) | Err(PortalError::NotFound) => Ok(()),
            Err(e) => Err(e),
        }
    }
}

#[async_trait]
impl DirectoryStore for RemoteBackend {
    async fn list_providers(&self) -> StoreResult<Vec<ProviderProfile>> {
        let docs = self
            .list_documents::<WireProvider>(&self.config.collections.providers)
            .await?;
        Ok(docs.into_iter().map(Into::into).collect())
    }

    async fn get_provider(&self, id: &DocumentId) -> StoreResult<ProviderProfile> {
        let doc = self
            .get_document::<WireProvider>(&self.config.collections.providers, id)
            .await?;
        Ok(doc.into())
    }

    async fn create_provider(&self, new: NewProvider) -> StoreResult<ProviderProfile> {
        let doc = self
            .create_document::<WireProvider, _>(
                &self.config.collections.providers,
                WireProvider::from(new),
            )
            .await?;
        Ok(doc.into())
    }

    async fn update_provider(
        &self,
        id: &DocumentId,
        new: NewProvider,
    ) -> StoreResult<ProviderProfile> {
        let doc = self
            .update_document::<WireProvider, _>(
                &self.config.collections.providers,
                id,
                WireProvider::from(new),
            )
            .await?;
        Ok(doc.into())
    }

    async fn delete_provider(&self, id: &DocumentId) -> StoreResult<()> {
        self.delete_document(&self.config.collections.providers, id)
            .await
    }

    async fn list_clients(&self) -> StoreResult<Vec<ClientProfile>> {
        let docs = self
            .list_documents::<WireClient>(&self.config.collections.clients)
            .await?;
        Ok(docs.into_iter().map(Into::into).collect())
    }

    async fn get_client(&self, id: &DocumentId) -> StoreResult<ClientProfile> {
        let doc = self
            .get_document::<WireClient>(&self.config.collections.clients, id)
            .await?;
        Ok(doc.into())
    }

    async fn create_client(&self, new: NewClient) -> StoreResult<ClientProfile> {
        let doc = self
            .create_document::<WireClient, _>(
                &self.config.collections.clients,
                WireClient::from(new),
            )
            .await?;
        Ok(doc.into())
    }

    async fn update_client(&self, id: &DocumentId, new: NewClient) -> StoreResult<ClientProfile> {
        let doc = self
            .update_document::<WireClient, _>(
                &self.config.collections.clients,
                id,
                WireClient::from(new),
            )
            .await?;
        Ok(doc.into())
    }

    async fn delete_client(&self, id: &DocumentId) -> StoreResult<()> {
        self.delete_document(&self.config.collections.clients, id)
            .await
    }

    async fn list_disciplines(&self) -> StoreResult<Vec<Discipline>> {
        let docs = self
            .list_documents::<WireDiscipline>(&self.config.collections.disciplines)
            .await?;
        Ok(docs.into_iter().map(Into::into).collect())
    }

    async fn get_discipline(&self, id: &DocumentId) -> StoreResult<Discipline> {
        let doc = self
            .get_document::<WireDiscipline>(&self.config.collections.disciplines, id)
            .await?;
        Ok(doc.into())
    }

    async fn create_discipline(&self, new: NewDiscipline) -> StoreResult<Discipline> {
        let doc = self
            .create_document::<WireDiscipline, _>(
                &self.config.collections.disciplines,
                WireDiscipline::from(new),
            )
            .await?;
        Ok(doc.into())
    }

    async fn update_discipline(
        &self,
        id: &DocumentId,
        new: NewDiscipline,
    ) -> StoreResult<Discipline> {
        let doc = self
            .update_document::<WireDiscipline, _>(
                &self.config.collections.disciplines,
                id,
                WireDiscipline::from(new),
            )
            .await?;
        Ok(doc.into())
    }

    async fn delete_discipline(&self, id: &DocumentId) -> StoreResult<()> {
        self.delete_document(&self.config.collections.disciplines, id)
            .await
    }

    async fn list_services(&self) -> StoreResult<Vec<Service>> {
        let docs = self
            .list_documents::<WireService>(&self.config.collections.services)
            .await?;
        Ok(docs.into_iter().map(Into::into).collect())
    }

    async fn get_service(&self, id: &DocumentId) -> StoreResult<Service> {
        let doc = self
            .get_document::<WireService>(&self.config.collections.services, id)
            .await?;
        Ok(doc.into())
    }

    async fn create_service(&self, new: NewService) -> StoreResult<Service> {
        let doc = self
            .create_document::<WireService, _>(
                &self.config.collections.services,
                WireService::from(new),
            )
            .await?;
        Ok(doc.into())
    }

    async fn update_service(&self, id: &DocumentId, new: NewService) -> StoreResult<Service> {
        let doc = self
            .update_document::<WireService, _>(
                &self.config.collections.services,
                id,
                WireService::from(new),
            )
            .await?;
        Ok(doc.into())
    }

    async fn delete_service(&self, id: &DocumentId) -> StoreResult<()> {
        self.delete_document(&self.config.collections.services, id)
            .await
    }

    async fn list_certifications(&self) -> StoreResult<Vec<Certification>> {
        let docs = self
            .list_documents::<WireCertification>(&self.config.collections.certifications)
            .await?;
        Ok(docs.into_iter().map(Into::into).collect())
    }

    async fn get_certification(&self, id: &DocumentId) -> StoreResult<Certification> {
        let doc = self
            .get_document::<WireCertification>(&self.config.collections.certifications, id)
            .await?;
        Ok(doc.into())
    }

    async fn create_certification(&self, new: NewCertification) -> StoreResult<Certification> {
        let doc = self
            .create_document::<WireCertification, _>(
                &self.config.collections.certifications,
                WireCertification::from(new),
            )
            .await?;
        Ok(doc.into())
    }

    async fn update_certification(
        &self,
        id: &DocumentId,
        new: NewCertification,
    ) -> StoreResult<Certification> {
        let doc = self
            .update_document::<WireCertification, _>(
                &self.config.collections.certifications,
                id,
                WireCertification::from(new),
            )
            .await?;
        Ok(doc.into())
    }

    async fn delete_certification(&self, id: &DocumentId) -> StoreResult<()> {
        self.delete_document(&self.config.collections.certifications, id)
            .await
    }

    async fn list_appointments(&self) -> StoreResult<Vec<Appointment>> {
        let docs = self
            .list_documents::<WireAppointment>(&self.config.collections.appointments)
            .await?;
        Ok(docs.into_iter().map(Into::into).collect())
    }

    async fn get_appointment(&self, id: &DocumentId) -> StoreResult<Appointment> {
        let doc = self
            .get_document::<WireAppointment>(&self.config.collections.appointments, id)
            .await?;
        Ok(doc.into())
    }

    async fn create_appointment(&self, new: NewAppointment) -> StoreResult<Appointment> {
        let doc = self
            .create_document::<WireAppointment, _>(
                &self.config.collections.appointments,
                WireAppointment::from(new),
            )
            .await?;
        Ok(doc.into())
    }

    async fn update_appointment(
        &self,
        id: &DocumentId,
        new: NewAppointment,
    ) -> StoreResult<Appointment> {
        let doc = self
            .update_document::<WireAppointment, _>(
                &self.config.collections.appointments,
                id,
                WireAppointment::from(new),
            )
            .await?;
        Ok(doc.into())
    }

    async fn delete_appointment(&self, id: &DocumentId) -> StoreResult<()> {
        self.delete_document(&self.config.collections.appointments, id)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_document_decoding() {
        let raw = serde_json::json!({
            "$id": "prov-1",
            "$createdAt": "2025-03-01T10:00:00Z",
            "userId": "",
            "name": "Dana",
            "email": "dana@example.com",
            "licenseNumber": "LIC-9",
            "verified": true
        });
        let doc: RemoteDocument<WireProvider> = serde_json::from_value(raw).unwrap();
        let provider = ProviderProfile::from(doc);

        assert_eq!(provider.id.0, "prov-1");
        // Empty userId means the record is not linked to an account
        assert!(provider.account_id.is_none());
        assert_eq!(provider.license_number.as_deref(), Some("LIC-9"));
        assert!(provider.role.is_none());
        assert!(provider.verified);
    }

    #[test]
    fn test_service_defaults_fill_missing_attributes() {
        let raw = serde_json::json!({
            "$id": "svc-1",
            "$createdAt": "2025-03-01T10:00:00Z",
            "name": "Consultation",
            "disciplineId": "disc-1"
        });
        let doc: RemoteDocument<WireService> = serde_json::from_value(raw).unwrap();
        let service = Service::from(doc);

        assert_eq!(service.service_type, "clinical");
        assert_eq!(service.duration_minutes, 60);
        assert_eq!(service.cost, 0.0);
        assert_eq!(service.capacity, 1);
        assert_eq!(service.status, CatalogStatus::Active);
    }

    #[test]
    fn test_appointment_wire_names() {
        let new = NewAppointment {
            client_id: DocumentId("cli-1".to_string()),
            provider_id: DocumentId("prov-1".to_string()),
            specialty: None,
            date: NaiveDate::from_ymd_opt(2025, 6, 15).unwrap(),
            time: Some("14:30".to_string()),
            status: AppointmentStatus::Pending,
            notes: None,
        };
        let value = serde_json::to_value(WireAppointment::from(new)).unwrap();

        assert_eq!(value["patientId"], "cli-1");
        assert_eq!(value["doctorId"], "prov-1");
        assert_eq!(value["status"], "pending");
    }
}
