//! Identity resolution over the provider and client directories
//!
//! An authenticated account is matched against the provider directory first,
//! then the client directory. Whatever matches decides the role; nothing
//! matching still yields a usable identity with the default role.

use serde::Serialize;

use crate::account::{Account, AccountId};
use crate::error::DirectoryError;
use crate::profile::{ClientProfile, ProviderProfile};
use crate::role::Role;

/// Which directory a matched profile came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ProfileKind {
    Provider,
    Client,
    /// Authenticated account with no profile in either directory
    Unknown,
}

/// Outcome of probing one directory
#[derive(Debug)]
pub enum ProbeOutcome<T> {
    /// A record matched the account
    Match(T),
    /// The directory answered and no record matched
    NoMatch,
    /// The directory could not be queried
    QueryFailed(DirectoryError),
}

impl<T> ProbeOutcome<T> {
    pub fn status(&self) -> ProbeStatus {
        match self {
            ProbeOutcome::Match(_) => ProbeStatus::Matched,
            ProbeOutcome::NoMatch => ProbeStatus::NoMatch,
            ProbeOutcome::QueryFailed(_) => ProbeStatus::QueryFailed,
        }
    }
}

/// Flattened probe outcome recorded on the resolved identity
///
/// Lets callers tell "genuinely absent" apart from "directory unreachable".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ProbeStatus {
    Matched,
    NoMatch,
    QueryFailed,
    /// Not probed because an earlier directory already matched
    Skipped,
}

/// The profile a resolution matched, if any
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum MatchedProfile {
    Provider(ProviderProfile),
    Client(ClientProfile),
}

/// A fully resolved identity
///
/// Recomputed on every request and never persisted; a profile edit is
/// visible on the next request.
#[derive(Debug, Clone, Serialize)]
pub struct ResolvedIdentity {
    pub account: Account,
    pub profile: Option<MatchedProfile>,
    pub role: Role,
    pub kind: ProfileKind,
    pub provider_probe: ProbeStatus,
    pub client_probe: ProbeStatus,
}

/// Whether a record belongs to the account: linked by id, or an exact
/// (case-sensitive) email match
fn record_matches(linked: Option<&AccountId>, email: &str, account: &Account) -> bool {
    linked == Some(&account.id) || email == account.email
}

/// First provider record belonging to the account, in listing order
pub fn find_provider_match(records: &[ProviderProfile], account: &Account) -> Option<ProviderProfile> {
    records
        .iter()
        .find(|record| record_matches(record.account_id.as_ref(), &record.email, account))
        .cloned()
}

/// First client record belonging to the account, in listing order
pub fn find_client_match(records: &[ClientProfile], account: &Account) -> Option<ClientProfile> {
    records
        .iter()
        .find(|record| record_matches(record.account_id.as_ref(), &record.email, account))
        .cloned()
}

impl ResolvedIdentity {
    /// Combine directory probes into an identity
    ///
    /// A provider match decides the role: the record's stored role when it
    /// carries one, plain provider otherwise. Failing that, a client match
    /// yields the client role. Neither matching (including failed probes)
    /// defaults to the client role with no profile.
    ///
    /// `client_probe` is `None` when the client directory was never
    /// consulted because the provider directory already matched.
    pub fn from_probes(
        account: Account,
        provider_probe: ProbeOutcome<ProviderProfile>,
        client_probe: Option<ProbeOutcome<ClientProfile>>,
    ) -> Self {
        let provider_status = provider_probe.status();
        let client_status = client_probe
            .as_ref()
            .map(|probe| probe.status())
            .unwrap_or(ProbeStatus::Skipped);

        if let ProbeOutcome::Match(profile) = provider_probe {
            let role = profile
                .role
                .as_deref()
                .map(Role::parse)
                .unwrap_or(Role::Provider);
            return Self {
                account,
                profile: Some(MatchedProfile::Provider(profile)),
                role,
                kind: ProfileKind::Provider,
                provider_probe: provider_status,
                client_probe: client_status,
            };
        }

        if let Some(ProbeOutcome::Match(profile)) = client_probe {
            return Self {
                account,
                profile: Some(MatchedProfile::Client(profile)),
                role: Role::Client,
                kind: ProfileKind::Client,
                provider_probe: provider_status,
                client_probe: client_status,
            };
        }

        Self {
            account,
            profile: None,
            role: Role::Client,
            kind: ProfileKind::Unknown,
            provider_probe: provider_status,
            client_probe: client_status,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::DocumentId;
    use chrono::Utc;

    fn account(id: &str, email: &str) -> Account {
        Account {
            id: AccountId(id.to_string()),
            email: email.to_string(),
            name: "Test Person".to_string(),
            phone: None,
            created_at: Utc::now(),
        }
    }

    fn provider(id: &str, linked: Option<&str>, email: &str, role: Option<&str>) -> ProviderProfile {
        ProviderProfile {
            id: DocumentId(id.to_string()),
            account_id: linked.map(|a| AccountId(a.to_string())),
            name: "Provider".to_string(),
            email: email.to_string(),
            phone: None,
            specialty: None,
            license_number: None,
            role: role.map(|r| r.to_string()),
            verified: false,
            created_at: Utc::now(),
        }
    }

    fn client(id: &str, linked: Option<&str>, email: &str) -> ClientProfile {
        ClientProfile {
            id: DocumentId(id.to_string()),
            account_id: linked.map(|a| AccountId(a.to_string())),
            name: "Client".to_string(),
            email: email.to_string(),
            phone: None,
            address: None,
            emergency_contact: None,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_match_by_linked_account_id() {
        let acct = account("a1", "alice@example.com");
        let records = vec![provider("d1", Some("a1"), "other@example.com", None)];

        let matched = find_provider_match(&records, &acct).unwrap();
        assert_eq!(matched.id, DocumentId("d1".to_string()));
    }

    #[test]
    fn test_match_by_email() {
        let acct = account("a1", "alice@example.com");
        let records = vec![provider("d1", None, "alice@example.com", None)];

        assert!(find_provider_match(&records, &acct).is_some());
    }

    #[test]
    fn test_email_match_is_case_sensitive() {
        let acct = account("a1", "alice@example.com");
        let records = vec![provider("d1", None, "Alice@Example.com", None)];

        assert!(find_provider_match(&records, &acct).is_none());
    }

    #[test]
    fn test_first_match_wins() {
        let acct = account("a1", "alice@example.com");
        let records = vec![
            provider("d1", Some("a1"), "alice@example.com", Some("admin")),
            provider("d2", Some("a1"), "alice@example.com", Some("provider")),
        ];

        let matched = find_provider_match(&records, &acct).unwrap();
        assert_eq!(matched.id, DocumentId("d1".to_string()));
    }

    #[test]
    fn test_provider_match_decides_role() {
        let acct = account("a1", "alice@example.com");
        let probe = ProbeOutcome::Match(provider("d1", Some("a1"), "alice@example.com", Some("admin")));

        let identity = ResolvedIdentity::from_probes(acct, probe, None);
        assert_eq!(identity.role, Role::Admin);
        assert_eq!(identity.kind, ProfileKind::Provider);
        assert_eq!(identity.provider_probe, ProbeStatus::Matched);
        assert_eq!(identity.client_probe, ProbeStatus::Skipped);
    }

    #[test]
    fn test_provider_role_defaults_to_provider() {
        let acct = account("a1", "alice@example.com");
        let probe = ProbeOutcome::Match(provider("d1", Some("a1"), "alice@example.com", None));

        let identity = ResolvedIdentity::from_probes(acct, probe, None);
        assert_eq!(identity.role, Role::Provider);
    }

    #[test]
    fn test_unrecognized_role_satisfies_no_gate() {
        let acct = account("a1", "alice@example.com");
        let probe = ProbeOutcome::Match(provider("d1", Some("a1"), "alice@example.com", Some("chief")));

        let identity = ResolvedIdentity::from_probes(acct, probe, None);
        assert_eq!(identity.role, Role::Unknown);
        assert_eq!(identity.kind, ProfileKind::Provider);
        // Still lands on the generic home page
        assert_eq!(identity.role.landing_path(), "/home");
    }

    #[test]
    fn test_client_match_when_no_provider() {
        let acct = account("a1", "alice@example.com");
        let client_probe = ProbeOutcome::Match(client("c1", Some("a1"), "alice@example.com"));

        let identity = ResolvedIdentity::from_probes(acct, ProbeOutcome::NoMatch, Some(client_probe));
        assert_eq!(identity.role, Role::Client);
        assert_eq!(identity.kind, ProfileKind::Client);
        assert_eq!(identity.provider_probe, ProbeStatus::NoMatch);
        assert_eq!(identity.client_probe, ProbeStatus::Matched);
    }

    #[test]
    fn test_no_match_defaults_to_client_with_unknown_kind() {
        let acct = account("a1", "alice@example.com");

        let identity = ResolvedIdentity::from_probes(
            acct,
            ProbeOutcome::NoMatch,
            Some(ProbeOutcome::NoMatch),
        );
        assert_eq!(identity.role, Role::Client);
        assert_eq!(identity.kind, ProfileKind::Unknown);
        assert!(identity.profile.is_none());
    }

    #[test]
    fn test_provider_probe_failure_degrades_to_client_match() {
        let acct = account("a1", "alice@example.com");
        let failed = ProbeOutcome::QueryFailed(DirectoryError::Query("unreachable".to_string()));
        let client_probe = ProbeOutcome::Match(client("c1", Some("a1"), "alice@example.com"));

        let identity = ResolvedIdentity::from_probes(acct, failed, Some(client_probe));
        assert_eq!(identity.role, Role::Client);
        assert_eq!(identity.kind, ProfileKind::Client);
        assert_eq!(identity.provider_probe, ProbeStatus::QueryFailed);
        assert_eq!(identity.client_probe, ProbeStatus::Matched);
    }

    #[test]
    fn test_both_probes_failing_still_resolves() {
        let acct = account("a1", "alice@example.com");
        let identity = ResolvedIdentity::from_probes(
            acct,
            ProbeOutcome::QueryFailed(DirectoryError::Timeout),
            Some(ProbeOutcome::QueryFailed(DirectoryError::Query("down".to_string()))),
        );

        assert_eq!(identity.role, Role::Client);
        assert_eq!(identity.kind, ProfileKind::Unknown);
        assert_eq!(identity.provider_probe, ProbeStatus::QueryFailed);
        assert_eq!(identity.client_probe, ProbeStatus::QueryFailed);
    }

    #[test]
    fn test_provider_match_shadows_client_record() {
        // The same person can hold both profiles; the provider one wins
        let acct = account("a1", "alice@example.com");
        let provider_probe = ProbeOutcome::Match(provider("d1", Some("a1"), "alice@example.com", None));

        let identity = ResolvedIdentity::from_probes(acct, provider_probe, None);
        assert_eq!(identity.kind, ProfileKind::Provider);
        assert_eq!(identity.client_probe, ProbeStatus::Skipped);
    }
}
