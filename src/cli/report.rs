//! Human readable rendering of a [`BuildPlan`].

use super::OutputManager;
use crate::gates::FeatureDecision;
use crate::plan::BuildPlan;
use crate::release::SigningSkip;

fn describe(name: &str, decision: &FeatureDecision) -> String {
    format!("{name} ({})", decision.reason)
}

fn stage(output: &OutputManager, name: &str, decision: &FeatureDecision) -> std::io::Result<()> {
    if decision.enabled {
        output.enabled(&describe(name, decision))
    } else {
        output.disabled(&describe(name, decision))
    }
}

/// Print the plan section by section
pub fn print_plan(output: &OutputManager, plan: &BuildPlan) -> std::io::Result<()> {
    output.section("Build stages")?;
    stage(output, "coverage", &plan.coverage.decision)?;
    if plan.coverage.decision.enabled {
        output.indent(&format!(
            "report task '{}' after {} ({})",
            plan.coverage.report_task,
            plan.coverage.depends_on.join(", "),
            plan.coverage.reports.join(" + ")
        ))?;
    }
    stage(output, "sources and javadoc jars", &plan.packaging.decision)?;
    stage(output, "remote publishing", &plan.remote_publish)?;

    if plan.signing.enabled {
        output.enabled("signing")?;
    } else {
        let why = match plan.signing.skipped {
            Some(SigningSkip::LocalPublish) => "local publish",
            Some(SigningSkip::MissingMaterial) => "no key",
            Some(SigningSkip::PublishDisabled) | None => "publishing disabled",
        };
        output.disabled(&format!("signing ({why})"))?;
    }

    if plan.build_scan {
        output.enabled("build scan (CI)")?;
    } else {
        output.disabled("build scan (not on CI)")?;
    }

    if plan.remote_publish.enabled {
        output.section("Publication target")?;
        let target = &plan.target;
        output.indent(&format!(
            "credentials: {} via {}",
            target.credentials.username.as_deref().unwrap_or("-"),
            target.scheme.as_deref().unwrap_or("-")
        ))?;
        output.indent(&format!(
            "staging profile: {}",
            target.staging_profile_id.as_deref().unwrap_or("auto-detect")
        ))?;
        let release = target
            .release_repository_url
            .as_ref()
            .map_or_else(|| "publisher default".to_string(), |u| u.to_string());
        let snapshot = target
            .snapshot_repository_url
            .as_ref()
            .map_or_else(|| "publisher default".to_string(), |u| u.to_string());
        output.indent(&format!("release repository: {release}"))?;
        output.indent(&format!("snapshot repository: {snapshot}"))?;
        output.indent(&format!(
            "timeouts: connect {}s, client {}s",
            plan.settings.connect_timeout_secs, plan.settings.client_timeout_secs
        ))?;
        output.indent(&format!(
            "artifact: {}:{}",
            plan.metadata.group_id, plan.metadata.artifact_id
        ))?;
    }

    for warning in &plan.warnings {
        output.warn(warning)?;
    }
    Ok(())
}
