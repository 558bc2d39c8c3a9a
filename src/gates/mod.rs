//! Feature gates for optional, expensive build stages.
//!
//! A stage is off unless the user asked for it with an explicit property or
//! requested a task that clearly implies it.

mod resolver;

pub use resolver::FeatureGateResolver;

use serde::Serialize;

/// Property enabling coverage instrumentation (`-Pcoverage`)
pub const COVERAGE_PROPERTY: &str = "coverage";
/// Task producing the combined coverage report
pub const COVERAGE_TASK: &str = "coverage";
/// Property enabling publishing extras, signing and remote publication (`-Ppublish`)
pub const PUBLISH_PROPERTY: &str = "publish";
/// Task publishing to the remote release repository
pub const PUBLISH_REMOTE_TASK: &str = "publishToSonatype";
/// Task publishing to the local maven repository
pub const PUBLISH_LOCAL_TASK: &str = "publishToMavenLocal";

/// Why a gate ended up enabled or disabled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum DecisionReason {
    /// Decided by a user-supplied property
    ExplicitFlag,
    /// A requested task implies the feature
    TaskNameMatch,
    /// Nothing asked for the feature
    DefaultOff,
}

impl std::fmt::Display for DecisionReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            DecisionReason::ExplicitFlag => "explicit-flag",
            DecisionReason::TaskNameMatch => "task-name-match",
            DecisionReason::DefaultOff => "default-off",
        };
        f.write_str(s)
    }
}

/// Enablement decision for one optional stage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FeatureDecision {
    /// Whether the stage should run
    pub enabled: bool,
    /// What decided it
    pub reason: DecisionReason,
}

impl FeatureDecision {
    /// Enabled decision
    pub fn enabled(reason: DecisionReason) -> Self {
        Self {
            enabled: true,
            reason,
        }
    }

    /// Disabled decision
    pub fn disabled(reason: DecisionReason) -> Self {
        Self {
            enabled: false,
            reason,
        }
    }
}

/// Static description of a gate: its property and the tasks that imply it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeatureGate {
    /// Human readable feature name, used in logs
    pub name: &'static str,
    /// Build property that switches the feature explicitly
    pub property: &'static str,
    /// Tasks whose presence enables the feature
    pub trigger_tasks: &'static [&'static str],
}

impl FeatureGate {
    /// Coverage instrumentation of test tasks
    pub const fn coverage() -> Self {
        Self {
            name: "coverage",
            property: COVERAGE_PROPERTY,
            trigger_tasks: &[COVERAGE_TASK],
        }
    }

    /// Publishable artifacts: sources and javadoc jars, signing
    pub const fn publish() -> Self {
        Self {
            name: "publish",
            property: PUBLISH_PROPERTY,
            trigger_tasks: &[PUBLISH_REMOTE_TASK, PUBLISH_LOCAL_TASK],
        }
    }

    /// Upload to the remote release repository, which needs credentials
    pub const fn remote_publish() -> Self {
        Self {
            name: "remote-publish",
            property: PUBLISH_PROPERTY,
            trigger_tasks: &[
                PUBLISH_REMOTE_TASK,
                "closeSonatypeStagingRepository",
                "releaseSonatypeStagingRepository",
                "closeAndReleaseSonatypeStagingRepository",
            ],
        }
    }
}
