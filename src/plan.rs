//! The complete per-invocation decision: which optional stages run and with
//! which parameters.

use serde::Serialize;

use crate::context::InvocationContext;
use crate::error::Result;
use crate::gates::{COVERAGE_TASK, FeatureDecision, FeatureGate, FeatureGateResolver};
use crate::release::schemes::CI_VAR;
use crate::release::{PublicationTarget, ReleaseTargetResolver, SigningPlan, SigningResolver};
use crate::settings::{PublicationMetadata, PublishSettings, SettingsFile};

/// Coverage instrumentation and report stage
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CoveragePlan {
    /// Whether test tasks are instrumented
    pub decision: FeatureDecision,
    /// Task producing the combined report
    pub report_task: &'static str,
    /// Tasks whose execution data feeds the report
    pub depends_on: &'static [&'static str],
    /// Report formats to produce
    pub reports: &'static [&'static str],
}

impl CoveragePlan {
    fn new(decision: FeatureDecision) -> Self {
        Self {
            decision,
            report_task: COVERAGE_TASK,
            depends_on: &["test", "integrationTest"],
            reports: &["xml", "html"],
        }
    }
}

/// Extra jars attached to the publication
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PackagingPlan {
    /// Follows the publish gate
    pub decision: FeatureDecision,
    /// Attach a sources jar
    pub sources_jar: bool,
    /// Attach a javadoc jar
    pub javadoc_jar: bool,
}

/// Everything the build stages need to know, resolved once
#[derive(Debug, Clone, Serialize)]
pub struct BuildPlan {
    /// Coverage stage
    pub coverage: CoveragePlan,
    /// Extra jars
    pub packaging: PackagingPlan,
    /// Publishable artifacts requested (remote or local)
    pub publish: FeatureDecision,
    /// Upload to the remote repository requested
    pub remote_publish: FeatureDecision,
    /// Where to publish; empty unless `remote_publish` is enabled
    pub target: PublicationTarget,
    /// Signing stage
    pub signing: SigningPlan,
    /// Build scans are only published from CI
    pub build_scan: bool,
    /// Network settings for the remote publisher
    pub settings: PublishSettings,
    /// Published descriptor metadata
    pub metadata: PublicationMetadata,
    /// Non-fatal problems found during resolution
    pub warnings: Vec<String>,
}

impl BuildPlan {
    /// Resolve the plan with default settings
    pub fn resolve(context: &InvocationContext) -> Result<Self> {
        Self::resolve_with(context, SettingsFile::default())
    }

    /// Resolve the plan on top of a loaded settings file
    ///
    /// Fails on ambiguous or missing credentials and invalid endpoints,
    /// before any stage has a chance to run.
    pub fn resolve_with(context: &InvocationContext, file: SettingsFile) -> Result<Self> {
        let gates = FeatureGateResolver::new();
        let coverage = gates.resolve_gate(context, &FeatureGate::coverage());
        let publish = gates.resolve_gate(context, &FeatureGate::publish());
        let remote_publish = gates.resolve_gate(context, &FeatureGate::remote_publish());

        let target = ReleaseTargetResolver::default().resolve(context, &remote_publish)?;
        let signing = SigningResolver::default().resolve(context, &publish)?;

        let settings = file.publish.with_env_overrides(context);
        settings.validate()?;

        let warnings = signing.warning.iter().cloned().collect();
        let build_scan = context.env(CI_VAR).is_some_and(|ci| !ci.is_empty());

        Ok(Self {
            coverage: CoveragePlan::new(coverage),
            packaging: PackagingPlan {
                decision: publish,
                sources_jar: publish.enabled,
                javadoc_jar: publish.enabled,
            },
            publish,
            remote_publish,
            target,
            signing,
            build_scan,
            settings,
            metadata: file.metadata,
            warnings,
        })
    }
}
