//! Publication target resolution: endpoints, staging profile and credentials.

use serde::{Serialize, Serializer};
use url::Url;

use super::chain::FallbackChain;
use super::schemes::{self, SNAPSHOT_URL_VAR, STAGING_URL_VAR};
use crate::context::InvocationContext;
use crate::error::{ConfigurationError, ReleaseError, Result};
use crate::gates::FeatureDecision;

/// Repository username and password
#[derive(Clone, Default, PartialEq, Eq, Serialize)]
pub struct CredentialPair {
    /// Repository user
    pub username: Option<String>,
    /// Repository password or token
    #[serde(serialize_with = "redact")]
    pub password: Option<String>,
}

impl CredentialPair {
    /// Both halves present
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: Some(username.into()),
            password: Some(password.into()),
        }
    }

    /// Whether both username and password are present
    pub fn is_complete(&self) -> bool {
        self.username.is_some() && self.password.is_some()
    }
}

impl std::fmt::Debug for CredentialPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialPair")
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| "***"))
            .finish()
    }
}

/// Serialize a secret as a fixed mask
pub(crate) fn redact<S: Serializer>(value: &Option<String>, serializer: S) -> std::result::Result<S::Ok, S::Error> {
    match value {
        Some(_) => serializer.serialize_some("***"),
        None => serializer.serialize_none(),
    }
}

/// Where and as whom artifacts get published
///
/// Endpoints are overrides; `None` means the publisher's built-in default.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PublicationTarget {
    /// Release staging repository override
    pub release_repository_url: Option<Url>,
    /// Snapshot repository override
    pub snapshot_repository_url: Option<Url>,
    /// Pre-created staging profile; the server auto-detects when absent
    pub staging_profile_id: Option<String>,
    /// Repository credentials
    pub credentials: CredentialPair,
    /// Naming scheme the credentials came from
    pub scheme: Option<String>,
}

/// Resolves a [`PublicationTarget`] through the naming-scheme fallback chains
#[derive(Debug, Clone)]
pub struct ReleaseTargetResolver {
    credentials: FallbackChain,
    staging_profile: FallbackChain,
}

impl Default for ReleaseTargetResolver {
    fn default() -> Self {
        Self::new(schemes::credential_chain(), schemes::staging_profile_chain())
    }
}

impl ReleaseTargetResolver {
    /// Create a resolver with custom chains
    pub fn new(credentials: FallbackChain, staging_profile: FallbackChain) -> Self {
        Self {
            credentials,
            staging_profile,
        }
    }

    /// Resolve the target for this invocation
    ///
    /// When publishing is disabled nothing is looked up and an empty target
    /// is returned. When enabled, a complete credential pair is required.
    pub fn resolve(
        &self,
        context: &InvocationContext,
        publish_decision: &FeatureDecision,
    ) -> Result<PublicationTarget> {
        if !publish_decision.enabled {
            log::debug!(
                "Remote publishing disabled ({}), skipping target resolution",
                publish_decision.reason
            );
            return Ok(PublicationTarget::default());
        }

        let found = self
            .credentials
            .resolve(context)?
            .ok_or_else(|| ReleaseError::MissingCredentials {
                expected: self.credentials.expected_keys(),
            })?;
        let scheme = found.group.to_string();
        let mut values = found.into_values().into_iter();
        let credentials = CredentialPair {
            username: values.next(),
            password: values.next(),
        };
        if !credentials.is_complete() {
            return Err(ReleaseError::MissingCredentials {
                expected: self.credentials.expected_keys(),
            });
        }

        let staging_profile_id = self
            .staging_profile
            .resolve(context)?
            .and_then(|found| found.into_values().into_iter().next());
        if staging_profile_id.is_none() {
            log::debug!("No staging profile id set, leaving detection to the repository");
        }

        Ok(PublicationTarget {
            release_repository_url: endpoint_override(context, STAGING_URL_VAR)?,
            snapshot_repository_url: endpoint_override(context, SNAPSHOT_URL_VAR)?,
            staging_profile_id,
            credentials,
            scheme: Some(scheme),
        })
    }
}

/// Parse an optional endpoint override
fn endpoint_override(context: &InvocationContext, variable: &str) -> Result<Option<Url>> {
    let Some(raw) = context.non_blank_env(variable) else {
        return Ok(None);
    };
    let url = Url::parse(raw.trim()).map_err(|e| ConfigurationError::InvalidEndpoint {
        variable: variable.to_string(),
        value: raw.to_string(),
        reason: e.to_string(),
    })?;
    log::info!("Using endpoint override {}={}", variable, url);
    Ok(Some(url))
}
