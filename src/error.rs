//! Error types for build gate resolution.
//!
//! Every error here is raised at configuration time, before any build stage
//! runs, and carries an actionable message plus recovery suggestions.

use thiserror::Error;

/// Result type alias for build gate operations
pub type Result<T> = std::result::Result<T, ReleaseError>;

/// Main error type for all build gate operations
#[derive(Error, Debug)]
pub enum ReleaseError {
    /// Inconsistent or invalid build configuration
    #[error("Configuration error: {0}")]
    Configuration(#[from] ConfigurationError),

    /// Publishing was requested but no naming scheme yields a full credential pair
    #[error(
        "Publishing is enabled but no repository credentials were found. Define one of: {}",
        .expected.join(", ")
    )]
    MissingCredentials {
        /// Variable groups that were searched, formatted as `NAME_A + NAME_B`
        expected: Vec<String>,
    },

    /// CLI argument errors
    #[error("CLI error: {0}")]
    Cli(#[from] CliError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing errors
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Generic errors from anyhow
    #[error("{0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Configuration errors that abort the build before any stage starts
#[derive(Error, Debug)]
pub enum ConfigurationError {
    /// Two mutually exclusive naming schemes carry different values
    #[error(
        "Ambiguous credentials: schemes '{first}' ({first_keys}) and '{second}' ({second_keys}) are both set with different values"
    )]
    AmbiguousCredentials {
        /// First scheme name
        first: String,
        /// Variables of the first scheme
        first_keys: String,
        /// Second scheme name
        second: String,
        /// Variables of the second scheme
        second_keys: String,
    },

    /// Endpoint override is not a valid URL
    #[error("Invalid repository endpoint in {variable}: '{value}' ({reason})")]
    InvalidEndpoint {
        /// Environment variable holding the endpoint
        variable: String,
        /// Offending value
        value: String,
        /// Parser message
        reason: String,
    },

    /// Publish setting could not be applied
    #[error("Invalid setting '{name}': {reason}")]
    InvalidSetting {
        /// Setting name
        name: String,
        /// Reason for the error
        reason: String,
    },
}

/// CLI-specific errors
#[derive(Error, Debug)]
pub enum CliError {
    /// Invalid command line arguments
    #[error("Invalid arguments: {reason}")]
    InvalidArguments {
        /// Reason for the error
        reason: String,
    },
}

impl ReleaseError {
    /// Get actionable recovery suggestions for this error
    pub fn recovery_suggestions(&self) -> Vec<String> {
        match self {
            ReleaseError::MissingCredentials { expected } => {
                let mut suggestions: Vec<String> = expected
                    .iter()
                    .map(|group| format!("Export {group}"))
                    .collect();
                suggestions.push(
                    "Or drop -Ppublish / the publish task to build without publishing".to_string(),
                );
                suggestions
            }
            ReleaseError::Configuration(ConfigurationError::AmbiguousCredentials {
                first_keys,
                second_keys,
                ..
            }) => vec![
                format!("Unset either {first_keys} or {second_keys}"),
                "Prefer the SONATYPE_* variables, which supersede older schemes".to_string(),
            ],
            ReleaseError::Configuration(ConfigurationError::InvalidEndpoint {
                variable, ..
            }) => vec![
                format!("Set {variable} to an absolute URL, e.g. https://host/service/local/"),
                format!("Or unset {variable} to use the publisher's default endpoint"),
            ],
            _ => vec!["Check the error message above for specific details".to_string()],
        }
    }

    /// Check if this error is recoverable by changing the environment and retrying
    pub fn is_recoverable(&self) -> bool {
        !matches!(
            self,
            ReleaseError::Io(_) | ReleaseError::Json(_) | ReleaseError::Anyhow(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_credentials_message_lists_variables() {
        let err = ReleaseError::MissingCredentials {
            expected: vec![
                "SONATYPE_USERNAME + SONATYPE_PASSWORD".to_string(),
                "NEXUS_USERNAME + NEXUS_PASSWORD".to_string(),
            ],
        };
        let message = err.to_string();
        assert!(message.contains("SONATYPE_USERNAME + SONATYPE_PASSWORD"));
        assert!(message.contains("NEXUS_USERNAME + NEXUS_PASSWORD"));
        assert_eq!(err.recovery_suggestions().len(), 3);
    }

    #[test]
    fn test_ambiguous_credentials_suggests_unsetting() {
        let err = ReleaseError::from(ConfigurationError::AmbiguousCredentials {
            first: "ossrh".to_string(),
            first_keys: "OSSRH_USERNAME + OSSRH_PASSWORD".to_string(),
            second: "nexus".to_string(),
            second_keys: "NEXUS_USERNAME + NEXUS_PASSWORD".to_string(),
        });
        let suggestions = err.recovery_suggestions();
        assert!(suggestions[0].contains("OSSRH_USERNAME"));
        assert!(err.is_recoverable());
    }
}
