//! Decision rule shared by every feature gate.

use super::{DecisionReason, FeatureDecision, FeatureGate};
use crate::context::InvocationContext;

/// Literal property value that forces a feature off
const NEGATION: &str = "false";

/// Turns an [`InvocationContext`] into per-stage enablement decisions
#[derive(Debug, Clone, Copy, Default)]
pub struct FeatureGateResolver;

impl FeatureGateResolver {
    /// Create a resolver
    pub fn new() -> Self {
        Self
    }

    /// Decide whether `feature_name` is enabled
    ///
    /// Precedence:
    /// 1. `default_property` set to anything but `"false"` enables it
    /// 2. `default_property` set to exactly `"false"` disables it, even when
    ///    a trigger task was requested
    /// 3. any requested task in `trigger_task_names` enables it
    /// 4. otherwise it stays off
    pub fn resolve(
        &self,
        context: &InvocationContext,
        feature_name: &str,
        trigger_task_names: &[&str],
        default_property: &str,
    ) -> FeatureDecision {
        let decision = match context.flag(default_property) {
            Some(NEGATION) => FeatureDecision::disabled(DecisionReason::ExplicitFlag),
            Some(_) => FeatureDecision::enabled(DecisionReason::ExplicitFlag),
            None if context.requests_any_task(trigger_task_names) => {
                FeatureDecision::enabled(DecisionReason::TaskNameMatch)
            }
            None => FeatureDecision::disabled(DecisionReason::DefaultOff),
        };

        log::debug!(
            "Feature '{}' {} ({})",
            feature_name,
            if decision.enabled { "enabled" } else { "disabled" },
            decision.reason
        );
        decision
    }

    /// Decide a predefined gate
    pub fn resolve_gate(&self, context: &InvocationContext, gate: &FeatureGate) -> FeatureDecision {
        self.resolve(context, gate.name, gate.trigger_tasks, gate.property)
    }
}
