//! Environment variable naming generations.
//!
//! Newest first. The oldest builds only knew `NEXUS_*`, the next generation
//! switched to `OSSRH_*` and added a staging profile, the current one uses
//! `SONATYPE_*` with explicit endpoint overrides. Signing variables never
//! changed.

use super::chain::{FallbackChain, VariableGroup};

/// Current generation credentials
pub const SONATYPE_CREDENTIALS: VariableGroup =
    VariableGroup::new("sonatype", &["SONATYPE_USERNAME", "SONATYPE_PASSWORD"]);
/// Previous generation credentials
pub const OSSRH_CREDENTIALS: VariableGroup =
    VariableGroup::new("ossrh", &["OSSRH_USERNAME", "OSSRH_PASSWORD"]);
/// Oldest generation credentials
pub const NEXUS_CREDENTIALS: VariableGroup =
    VariableGroup::new("nexus", &["NEXUS_USERNAME", "NEXUS_PASSWORD"]);

/// Current generation staging profile
pub const SONATYPE_STAGING_PROFILE: VariableGroup =
    VariableGroup::new("sonatype", &["SONATYPE_STAGING_PROFILE_ID"]);
/// Previous generation staging profile
pub const OSSRH_STAGING_PROFILE: VariableGroup =
    VariableGroup::new("ossrh", &["OSSRH_STAGING_PROFILE_ID"]);

/// In-memory PGP key and its passphrase
pub const SIGNING_KEY_PAIR: VariableGroup =
    VariableGroup::new("signing", &["SIGNING_KEY", "SIGNING_PASSWORD"]);

/// Release staging endpoint override
pub const STAGING_URL_VAR: &str = "SONATYPE_STAGING_URL";
/// Snapshot repository endpoint override
pub const SNAPSHOT_URL_VAR: &str = "SONATYPE_SNAPSHOT_URL";

/// Set by CI systems; enables build scan publication
pub const CI_VAR: &str = "CI";

/// Repository credentials across all three generations
pub fn credential_chain() -> FallbackChain {
    FallbackChain::new(
        "repository credentials",
        [SONATYPE_CREDENTIALS, OSSRH_CREDENTIALS, NEXUS_CREDENTIALS],
    )
    .mutually_exclusive(OSSRH_CREDENTIALS.name, NEXUS_CREDENTIALS.name)
}

/// Staging profile id; only the two newer generations define one
pub fn staging_profile_chain() -> FallbackChain {
    FallbackChain::new(
        "staging profile",
        [SONATYPE_STAGING_PROFILE, OSSRH_STAGING_PROFILE],
    )
}

/// Signing key material
pub fn signing_chain() -> FallbackChain {
    FallbackChain::new("signing key", [SIGNING_KEY_PAIR])
}
