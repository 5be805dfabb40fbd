//! Identity resolution over the configured stores
//!
//! Binds the session token to an account, then probes the provider and
//! client collections for a matching profile. Only a missing/invalid
//! session (or a hung auth backend) fails resolution; profile-store
//! trouble degrades the affected probe and resolution carries on.

use tokio::time::timeout;
use tower_cookies::Cookies;

use wellbook_core::{
    find_client_match, find_provider_match, Account, ClientProfile, DirectoryError,
    IdentityError, ProbeOutcome, ProviderProfile, ResolvedIdentity, Role, SessionToken,
};

use crate::session::token_from_cookies;
use crate::state::AppState;
use crate::store::{AccountStore, DirectoryStore};

/// Resolve the identity behind a session token
///
/// Session and account fetches are hard requirements: a failure or
/// missing record is `Unauthenticated`, exceeding the configured budget
/// is `Timeout`. The client collection is only consulted when the
/// provider collection did not match.
pub async fn resolve_identity<A, D>(
    state: &AppState<A, D>,
    token: &SessionToken,
) -> Result<ResolvedIdentity, IdentityError>
where
    A: AccountStore,
    D: DirectoryStore,
{
    let budget = state.config.resolve_timeout;

    let session = match timeout(budget, state.accounts.get_session(token)).await {
        Err(_) => return Err(IdentityError::Timeout),
        Ok(Err(e)) => {
            tracing::debug!("Session lookup failed: {}", e);
            return Err(IdentityError::Unauthenticated);
        }
        Ok(Ok(None)) => return Err(IdentityError::Unauthenticated),
        Ok(Ok(Some(session))) => session,
    };

    let account = match timeout(budget, state.accounts.get_account(&session.account_id)).await {
        Err(_) => return Err(IdentityError::Timeout),
        Ok(Err(e)) => {
            tracing::debug!("Account fetch failed: {}", e);
            return Err(IdentityError::Unauthenticated);
        }
        Ok(Ok(None)) => return Err(IdentityError::Unauthenticated),
        Ok(Ok(Some(account))) => account,
    };

    let provider_probe = probe_providers(state, &account).await;
    let identity = if matches!(provider_probe, ProbeOutcome::Match(_)) {
        ResolvedIdentity::from_probes(account, provider_probe, None)
    } else {
        let client_probe = probe_clients(state, &account).await;
        ResolvedIdentity::from_probes(account, provider_probe, Some(client_probe))
    };

    tracing::debug!(
        account = %identity.account.id.0,
        role = identity.role.as_str(),
        kind = ?identity.kind,
        "Resolved identity"
    );
    Ok(identity)
}

/// Resolve the identity behind the request's session cookie
pub async fn resolve_from_cookies<A, D>(
    state: &AppState<A, D>,
    cookies: &Cookies,
) -> Result<ResolvedIdentity, IdentityError>
where
    A: AccountStore,
    D: DirectoryStore,
{
    let token = token_from_cookies(cookies).ok_or(IdentityError::Unauthenticated)?;
    resolve_identity(state, &token).await
}

/// Whether the caller resolves to the admin role; false on any failure
pub async fn is_admin<A, D>(state: &AppState<A, D>, cookies: &Cookies) -> bool
where
    A: AccountStore,
    D: DirectoryStore,
{
    matches!(
        resolve_from_cookies(state, cookies).await,
        Ok(identity) if identity.role == Role::Admin
    )
}

/// Whether the caller resolves to the provider or admin role; false on
/// any failure
pub async fn is_provider<A, D>(state: &AppState<A, D>, cookies: &Cookies) -> bool
where
    A: AccountStore,
    D: DirectoryStore,
{
    matches!(
        resolve_from_cookies(state, cookies).await,
        Ok(identity) if matches!(identity.role, Role::Provider | Role::Admin)
    )
}

async fn probe_providers<A, D>(
    state: &AppState<A, D>,
    account: &Account,
) -> ProbeOutcome<ProviderProfile>
where
    A: AccountStore,
    D: DirectoryStore,
{
    match timeout(state.config.resolve_timeout, state.directory.list_providers()).await {
        Err(_) => {
            tracing::warn!("Provider probe timed out");
            ProbeOutcome::QueryFailed(DirectoryError::Timeout)
        }
        Ok(Err(e)) => {
            tracing::warn!("Provider probe failed: {}", e);
            ProbeOutcome::QueryFailed(DirectoryError::Query(e.to_string()))
        }
        Ok(Ok(providers)) => match find_provider_match(&providers, account) {
            Some(profile) => ProbeOutcome::Match(profile),
            None => ProbeOutcome::NoMatch,
        },
    }
}

async fn probe_clients<A, D>(
    state: &AppState<A, D>,
    account: &Account,
) -> ProbeOutcome<ClientProfile>
where
    A: AccountStore,
    D: DirectoryStore,
{
    match timeout(state.config.resolve_timeout, state.directory.list_clients()).await {
        Err(_) => {
            tracing::warn!("Client probe timed out");
            ProbeOutcome::QueryFailed(DirectoryError::Timeout)
        }
        Ok(Err(e)) => {
            tracing::warn!("Client probe failed: {}", e);
            ProbeOutcome::QueryFailed(DirectoryError::Query(e.to_string()))
        }
        Ok(Ok(clients)) => match find_client_match(&clients, account) {
            Some(profile) => ProbeOutcome::Match(profile),
            None => ProbeOutcome::NoMatch,
        },
    }
}
