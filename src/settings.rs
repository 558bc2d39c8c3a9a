//! Publish settings and publication metadata.
//!
//! Defaults match the project's release setup. A TOML settings file can
//! override them, and timeouts can be tuned from the environment on top of
//! that.

use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

use crate::context::InvocationContext;
use crate::error::{ConfigurationError, Result};

/// Default connect and client timeout for the remote repository (5 minutes)
pub const DEFAULT_TIMEOUT_SECS: u64 = 300;
/// Upper bound for timeout overrides (1 hour)
pub const MAX_TIMEOUT_SECS: u64 = 3600;

/// Env override for the connect timeout, in seconds
pub const CONNECT_TIMEOUT_VAR: &str = "QUARK_PUBLISH_CONNECT_TIMEOUT_SECS";
/// Env override for the client timeout, in seconds
pub const CLIENT_TIMEOUT_VAR: &str = "QUARK_PUBLISH_CLIENT_TIMEOUT_SECS";

/// Network settings handed to the remote publisher
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PublishSettings {
    /// Connection timeout in seconds
    pub connect_timeout_secs: u64,
    /// Overall client timeout in seconds
    pub client_timeout_secs: u64,
}

impl Default for PublishSettings {
    fn default() -> Self {
        Self {
            connect_timeout_secs: DEFAULT_TIMEOUT_SECS,
            client_timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl PublishSettings {
    /// Parse a timeout override, clamped to [`MAX_TIMEOUT_SECS`]
    ///
    /// Unparseable values fall back to `default` with a warning.
    fn parse_timeout_env(context: &InvocationContext, var_name: &str, default: u64) -> u64 {
        let Some(raw) = context.non_blank_env(var_name) else {
            return default;
        };
        match raw.trim().parse::<u64>() {
            Ok(value) if value > MAX_TIMEOUT_SECS => {
                log::warn!(
                    "{}={} exceeds the maximum, using {}",
                    var_name,
                    value,
                    MAX_TIMEOUT_SECS
                );
                MAX_TIMEOUT_SECS
            }
            Ok(value) => value,
            Err(_) => {
                log::warn!("Ignoring {}='{}': not a number of seconds", var_name, raw);
                default
            }
        }
    }

    /// Apply environment overrides on top of `self`
    pub fn with_env_overrides(self, context: &InvocationContext) -> Self {
        Self {
            connect_timeout_secs: Self::parse_timeout_env(
                context,
                CONNECT_TIMEOUT_VAR,
                self.connect_timeout_secs,
            ),
            client_timeout_secs: Self::parse_timeout_env(
                context,
                CLIENT_TIMEOUT_VAR,
                self.client_timeout_secs,
            ),
        }
    }

    /// Validate timeouts are usable
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("connect_timeout_secs", self.connect_timeout_secs),
            ("client_timeout_secs", self.client_timeout_secs),
        ] {
            if value == 0 || value > MAX_TIMEOUT_SECS {
                return Err(ConfigurationError::InvalidSetting {
                    name: name.to_string(),
                    reason: format!("must be between 1 and {MAX_TIMEOUT_SECS} seconds, got {value}"),
                }
                .into());
            }
        }
        Ok(())
    }

    /// Connection timeout
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }

    /// Client timeout
    pub fn client_timeout(&self) -> Duration {
        Duration::from_secs(self.client_timeout_secs)
    }
}

/// A person credited in the published metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Developer {
    /// Handle
    pub id: String,
    /// Display name
    pub name: String,
    /// Contact address
    pub email: String,
}

/// Project metadata written into the published descriptor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PublicationMetadata {
    /// Maven group
    pub group_id: String,
    /// Maven artifact, the project name
    pub artifact_id: String,
    /// Display name of the project
    pub name: String,
    /// One-line description
    pub description: String,
    /// Project home page
    pub url: String,
    /// Publishing organization
    pub organization_name: String,
    /// Organization home page
    pub organization_url: String,
    /// License name
    pub license_name: String,
    /// License text location
    pub license_url: String,
    /// How the license is distributed, `repo` or `manual`
    pub license_distribution: String,
    /// Credited developers
    pub developers: Vec<Developer>,
    /// Read-only SCM connection
    pub scm_connection: String,
    /// SCM connection used by developers
    pub scm_developer_connection: String,
    /// Browsable repository
    pub scm_url: String,
    /// Issue tracker system name
    pub issues_system: String,
    /// Issue tracker location
    pub issues_url: String,
}

impl Default for PublicationMetadata {
    fn default() -> Self {
        Self {
            group_id: "com.coditory.quark".to_string(),
            artifact_id: "quark-config".to_string(),
            name: "quark-config".to_string(),
            description: "Coditory Quark Config - Configuration Library".to_string(),
            url: "https://github.com/coditory/quark-config".to_string(),
            organization_name: "Coditory".to_string(),
            organization_url: "https://coditory.com".to_string(),
            license_name: "The Apache License, Version 2.0".to_string(),
            license_url: "http://www.apache.org/licenses/LICENSE-2.0.txt".to_string(),
            license_distribution: "repo".to_string(),
            developers: vec![Developer {
                id: "coditory".to_string(),
                name: "Coditory".to_string(),
                email: "admin@coditory.com".to_string(),
            }],
            scm_connection: "scm:git@github.com:coditory/quark-config.git".to_string(),
            scm_developer_connection: "scm:git@github.com:coditory/quark-config.git".to_string(),
            scm_url: "https://github.com/coditory/quark-config".to_string(),
            issues_system: "GitHub".to_string(),
            issues_url: "https://github.com/coditory/quark-config/issues".to_string(),
        }
    }
}

/// Contents of the optional settings file
///
/// ```toml
/// [publish]
/// connect_timeout_secs = 120
///
/// [metadata]
/// artifact_id = "quark-config-yaml"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SettingsFile {
    /// Network settings
    pub publish: PublishSettings,
    /// Published descriptor metadata
    pub metadata: PublicationMetadata,
}

impl SettingsFile {
    /// Parse settings from TOML text
    pub fn parse(content: &str) -> Result<Self> {
        let settings: SettingsFile = toml::from_str(content)?;
        settings.publish.validate()?;
        Ok(settings)
    }

    /// Load settings from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings file {}", path.display()))?;
        log::debug!("Loaded settings from {}", path.display());
        Self::parse(&content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ReleaseError;

    #[test]
    fn test_defaults_are_five_minutes() {
        let settings = PublishSettings::default();
        assert_eq!(settings.connect_timeout(), Duration::from_secs(300));
        assert_eq!(settings.client_timeout(), Duration::from_secs(300));
    }

    #[test]
    fn test_env_override_is_clamped() {
        let ctx = InvocationContext::builder()
            .env(CONNECT_TIMEOUT_VAR, "99999")
            .env(CLIENT_TIMEOUT_VAR, "60")
            .build();
        let settings = PublishSettings::default().with_env_overrides(&ctx);
        assert_eq!(settings.connect_timeout_secs, MAX_TIMEOUT_SECS);
        assert_eq!(settings.client_timeout_secs, 60);
    }

    #[test]
    fn test_invalid_env_override_keeps_previous_value() {
        let ctx = InvocationContext::builder().env(CONNECT_TIMEOUT_VAR, "5m").build();
        let base = PublishSettings {
            connect_timeout_secs: 42,
            client_timeout_secs: 42,
        };
        assert_eq!(base.clone().with_env_overrides(&ctx), base);
    }

    #[test]
    fn test_parse_partial_file_keeps_defaults() {
        let settings = SettingsFile::parse(
            r#"
            [publish]
            client_timeout_secs = 120

            [metadata]
            artifact_id = "quark-config-yaml"
            "#,
        );
        let Ok(settings) = settings else {
            panic!("settings should parse: {settings:?}");
        };
        assert_eq!(settings.publish.connect_timeout_secs, DEFAULT_TIMEOUT_SECS);
        assert_eq!(settings.publish.client_timeout_secs, 120);
        assert_eq!(settings.metadata.artifact_id, "quark-config-yaml");
        assert_eq!(settings.metadata.group_id, "com.coditory.quark");
        assert_eq!(settings.metadata.license_distribution, "repo");
        assert_eq!(settings.metadata.issues_system, "GitHub");
    }

    #[test]
    fn test_default_metadata_is_complete() {
        let metadata = PublicationMetadata::default();
        assert_eq!(metadata.name, "quark-config");
        assert_eq!(metadata.scm_developer_connection, metadata.scm_connection);
        assert_eq!(metadata.license_distribution, "repo");
        assert_eq!(metadata.issues_system, "GitHub");
        assert_eq!(metadata.developers.len(), 1);
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let result = SettingsFile::parse("[publish]\nconnect_timeout_secs = 0\n");
        assert!(matches!(
            result,
            Err(ReleaseError::Configuration(ConfigurationError::InvalidSetting { .. }))
        ));
    }

    #[test]
    fn test_unknown_section_rejected() {
        assert!(matches!(
            SettingsFile::parse("[signing]\nkey = \"x\"\n"),
            Err(ReleaseError::Toml(_))
        ));
    }
}
