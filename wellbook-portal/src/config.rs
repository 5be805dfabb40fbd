//! Portal configuration

use std::env;
use std::time::Duration;

/// Which backend pair serves the portal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendKind {
    /// In-process stores, for development and tests
    Memory,
    /// Hosted auth and directory service over HTTP
    Remote,
}

#[derive(Debug, Clone)]
pub struct Config {
    /// Port to listen on
    pub port: u16,

    /// Directory served for the site shell
    pub static_dir: String,

    /// Budget for identity resolution calls
    pub resolve_timeout: Duration,

    pub backend: BackendKind,

    /// Connection settings for the hosted backend
    pub remote: RemoteConfig,
}

#[derive(Debug, Clone)]
pub struct RemoteConfig {
    pub endpoint: String,
    pub project: String,
    pub api_key: String,
    pub database_id: String,
    pub collections: CollectionIds,
}

/// Directory collection identifiers
///
/// The hosted service addresses collections by id; deployments that kept the
/// logical names need no overrides.
#[derive(Debug, Clone)]
pub struct CollectionIds {
    pub providers: String,
    pub clients: String,
    pub disciplines: String,
    pub services: String,
    pub certifications: String,
    pub appointments: String,
}

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_RESOLVE_TIMEOUT_MS: u64 = 5000;

fn env_or(name: &str, default: &str) -> String {
    env::var(name).unwrap_or_else(|_| default.to_string())
}

impl Config {
    /// Load configuration from WELLBOOK_* environment variables
    pub fn from_env() -> Self {
        let port = env::var("WELLBOOK_PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(DEFAULT_PORT);

        let resolve_timeout_ms = env::var("WELLBOOK_RESOLVE_TIMEOUT_MS")
            .ok()
            .and_then(|t| t.parse().ok())
            .unwrap_or(DEFAULT_RESOLVE_TIMEOUT_MS);

        let backend = match env_or("WELLBOOK_BACKEND", "memory").as_str() {
            "remote" => BackendKind::Remote,
            _ => BackendKind::Memory,
        };

        Self {
            port,
            static_dir: env_or("WELLBOOK_STATIC_DIR", "static"),
            resolve_timeout: Duration::from_millis(resolve_timeout_ms),
            backend,
            remote: RemoteConfig::from_env(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            static_dir: "static".to_string(),
            resolve_timeout: Duration::from_millis(DEFAULT_RESOLVE_TIMEOUT_MS),
            backend: BackendKind::Memory,
            remote: RemoteConfig::default(),
        }
    }
}

impl RemoteConfig {
    fn from_env() -> Self {
        Self {
            endpoint: env_or("WELLBOOK_BACKEND_ENDPOINT", "http://localhost:8080"),
            project: env_or("WELLBOOK_BACKEND_PROJECT", ""),
            api_key: env_or("WELLBOOK_BACKEND_KEY", ""),
            database_id: env_or("WELLBOOK_DATABASE_ID", "wellbook"),
            collections: CollectionIds {
                providers: env_or("WELLBOOK_COLLECTION_PROVIDERS", "providers"),
                clients: env_or("WELLBOOK_COLLECTION_CLIENTS", "clients"),
                disciplines: env_or("WELLBOOK_COLLECTION_DISCIPLINES", "disciplines"),
                services: env_or("WELLBOOK_COLLECTION_SERVICES", "services"),
                certifications: env_or("WELLBOOK_COLLECTION_CERTIFICATIONS", "certifications"),
                appointments: env_or("WELLBOOK_COLLECTION_APPOINTMENTS", "appointments"),
            },
        }
    }
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            endpoint: "http://localhost:8080".to_string(),
            project: String::new(),
            api_key: String::new(),
            database_id: "wellbook".to_string(),
            collections: CollectionIds {
                providers: "providers".to_string(),
                clients: "clients".to_string(),
                disciplines: "disciplines".to_string(),
                services: "services".to_string(),
                certifications: "certifications".to_string(),
                appointments: "appointments".to_string(),
            },
        }
    }
}
