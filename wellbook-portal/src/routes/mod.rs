//! HTTP routes for the portal

mod appointments;
mod auth;
mod certifications;
mod clients;
mod dashboard;
mod debug;
mod disciplines;
mod profile;
mod providers;
mod services;
mod specialists;

use std::sync::Arc;

use axum::routing::{delete, get, post, put};
use axum::Router;
use tower_cookies::CookieManagerLayer;
use tower_http::services::ServeDir;

use crate::state::AppState;
use crate::store::{AccountStore, DirectoryStore};

/// Create the router with all routes
pub fn create_router<A, D>(state: Arc<AppState<A, D>>) -> Router
where
    A: AccountStore + 'static,
    D: DirectoryStore + 'static,
{
    create_router_with_static_path(state, "static")
}

/// Create the router with a custom static file path
pub fn create_router_with_static_path<A, D>(
    state: Arc<AppState<A, D>>,
    static_path: &str,
) -> Router
where
    A: AccountStore + 'static,
    D: DirectoryStore + 'static,
{
    Router::new()
        .route("/api/auth/signup", post(auth::signup))
        .route("/api/auth/login", post(auth::login))
        .route("/api/auth/logout", post(auth::logout))
        .route("/api/auth/session", get(auth::get_session_context))
        .route("/api/identity", get(profile::get_identity))
        .route("/api/profile/setup", post(profile::setup_profile))
        .route(
            "/api/admin/providers",
            get(providers::list_providers).post(providers::create_provider),
        )
        .route(
            "/api/admin/providers/{id}",
            put(providers::update_provider).delete(providers::delete_provider),
        )
        .route(
            "/api/admin/providers/{id}/verification",
            post(providers::toggle_verification),
        )
        .route(
            "/api/admin/clients",
            get(clients::list_clients).post(clients::create_client),
        )
        .route(
            "/api/admin/clients/{id}",
            put(clients::update_client).delete(clients::delete_client),
        )
        .route(
            "/api/admin/disciplines",
            get(disciplines::list_disciplines).post(disciplines::create_discipline),
        )
        .route(
            "/api/admin/disciplines/{id}",
            get(disciplines::get_discipline)
                .put(disciplines::update_discipline)
                .delete(disciplines::delete_discipline),
        )
        .route(
            "/api/admin/services",
            get(services::list_services).post(services::create_service),
        )
        .route(
            "/api/admin/services/{id}",
            put(services::update_service).delete(services::delete_service),
        )
        .route(
            "/api/admin/certifications",
            get(certifications::list_certifications).post(certifications::create_certification),
        )
        .route(
            "/api/admin/certifications/{id}",
            delete(certifications::delete_certification),
        )
        .route(
            "/api/admin/certifications/{id}/activation",
            post(certifications::toggle_activation),
        )
        .route(
            "/api/admin/appointments",
            get(appointments::list_appointments).post(appointments::create_appointment),
        )
        .route(
            "/api/admin/appointments/{id}/status",
            put(appointments::update_status),
        )
        .route(
            "/api/admin/appointments/{id}",
            delete(appointments::delete_appointment),
        )
        .route("/admin/dashboard", get(dashboard::admin_dashboard))
        .route("/provider/dashboard", get(dashboard::provider_dashboard))
        .route("/api/appointments", post(appointments::book_appointment))
        .route("/api/me/appointments", get(appointments::my_appointments))
        .route("/api/specialists", get(specialists::list_specialists))
        .route("/api/specialists/{category}", get(specialists::get_category))
        .route("/api/debug/health", get(debug::health))
        .route("/api/debug/auth", get(debug::auth_probe))
        .route("/api/debug/schema", get(debug::schema))
        // Serve the site shell (login page, dashboards, assets)
        .fallback_service(ServeDir::new(static_path))
        .layer(CookieManagerLayer::new())
        .with_state(state)
}
