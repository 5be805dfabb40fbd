//! Route guards over resolved identities
//!
//! Page routes redirect on failure; API routes answer 401/403 instead.

use tower_cookies::Cookies;

pub use wellbook_core::guard::{ADMIN_ONLY, PROVIDER_OR_ADMIN};
use wellbook_core::{evaluate, GuardDecision, GuardPolicy, ResolvedIdentity, Role};

use crate::error::PortalError;
use crate::identity::resolve_from_cookies;
use crate::state::AppState;
use crate::store::{AccountStore, DirectoryStore};

/// Gate a page route: grant, or name the path to redirect to
pub async fn page<A, D>(
    state: &AppState<A, D>,
    cookies: &Cookies,
    allowed: &'static [Role],
) -> GuardDecision
where
    A: AccountStore,
    D: DirectoryStore,
{
    let resolution = resolve_from_cookies(state, cookies).await;
    evaluate(&GuardPolicy::new(allowed), resolution)
}

/// Gate an API route on authentication alone
pub async fn require_identity<A, D>(
    state: &AppState<A, D>,
    cookies: &Cookies,
) -> Result<ResolvedIdentity, PortalError>
where
    A: AccountStore,
    D: DirectoryStore,
{
    Ok(resolve_from_cookies(state, cookies).await?)
}

/// Gate an API route on a role set
pub async fn require_role<A, D>(
    state: &AppState<A, D>,
    cookies: &Cookies,
    allowed: &[Role],
) -> Result<ResolvedIdentity, PortalError>
where
    A: AccountStore,
    D: DirectoryStore,
{
    let identity = resolve_from_cookies(state, cookies).await?;
    if !allowed.contains(&identity.role) {
        return Err(PortalError::Forbidden);
    }
    Ok(identity)
}
