//! Role gating for guarded pages
//!
//! A convenience gate for the portal UI, not an authorization boundary; the
//! backing services enforce their own access rules.

use crate::error::IdentityError;
use crate::identity::ResolvedIdentity;
use crate::role::Role;

/// Path visitors are sent to when resolution fails
pub const LOGIN_PATH: &str = "/login";
/// Path visitors are sent to when their role is not accepted
pub const HOME_PATH: &str = "/home";

/// Roles accepted by administrator-only pages
pub const ADMIN_ONLY: &[Role] = &[Role::Admin];
/// Roles accepted by provider pages; administrators may view them too
pub const PROVIDER_OR_ADMIN: &[Role] = &[Role::Provider, Role::Admin];

/// What a guarded page accepts and where it turns visitors away to
#[derive(Debug, Clone)]
pub struct GuardPolicy {
    pub allowed: &'static [Role],
    pub login_path: &'static str,
    pub fallback_path: &'static str,
}

impl GuardPolicy {
    pub fn new(allowed: &'static [Role]) -> Self {
        Self {
            allowed,
            login_path: LOGIN_PATH,
            fallback_path: HOME_PATH,
        }
    }
}

/// Outcome of evaluating a guard
#[derive(Debug)]
pub enum GuardDecision {
    /// Render the page for this identity
    Grant(ResolvedIdentity),
    /// Send the visitor elsewhere
    Redirect(&'static str),
}

/// Decide whether a visitor may see a guarded page
///
/// Membership is plain set containment; there is no role hierarchy.
pub fn evaluate(
    policy: &GuardPolicy,
    resolution: Result<ResolvedIdentity, IdentityError>,
) -> GuardDecision {
    match resolution {
        Err(_) => GuardDecision::Redirect(policy.login_path),
        Ok(identity) if policy.allowed.contains(&identity.role) => GuardDecision::Grant(identity),
        Ok(_) => GuardDecision::Redirect(policy.fallback_path),
    }
}
