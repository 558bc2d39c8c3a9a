#[cfg(test)]
mod tests {
    use quark_build_gates::{
        BuildPlan, ConfigurationError, CredentialPair, DecisionReason, FeatureDecision,
        InvocationContext, ReleaseError, ReleaseTargetResolver,
    };

    fn publish_enabled() -> FeatureDecision {
        FeatureDecision::enabled(DecisionReason::ExplicitFlag)
    }

    #[test]
    fn test_oldest_generation_alone_resolves() {
        let ctx = InvocationContext::builder()
            .env("NEXUS_USERNAME", "a")
            .env("NEXUS_PASSWORD", "b")
            .build();
        let target = ReleaseTargetResolver::default().resolve(&ctx, &publish_enabled());
        let Ok(target) = target else {
            panic!("nexus credentials should resolve: {target:?}");
        };
        assert_eq!(target.credentials, CredentialPair::new("a", "b"));
        assert_eq!(target.scheme.as_deref(), Some("nexus"));
        assert_eq!(target.release_repository_url, None);
        assert_eq!(target.staging_profile_id, None);
    }

    #[test]
    fn test_newest_generation_wins_without_merging() {
        let ctx = InvocationContext::builder()
            .env("OSSRH_USERNAME", "x")
            .env("OSSRH_PASSWORD", "x-secret")
            .env("SONATYPE_USERNAME", "y")
            .env("SONATYPE_PASSWORD", "y-secret")
            .build();
        let target = ReleaseTargetResolver::default().resolve(&ctx, &publish_enabled());
        let Ok(target) = target else {
            panic!("sonatype credentials should resolve: {target:?}");
        };
        assert_eq!(target.credentials, CredentialPair::new("y", "y-secret"));
        assert_eq!(target.scheme.as_deref(), Some("sonatype"));
    }

    #[test]
    fn test_half_set_newest_generation_falls_back_as_a_pair() {
        let ctx = InvocationContext::builder()
            .env("SONATYPE_USERNAME", "y")
            .env("OSSRH_USERNAME", "x")
            .env("OSSRH_PASSWORD", "x-secret")
            .build();
        let target = ReleaseTargetResolver::default().resolve(&ctx, &publish_enabled());
        assert_eq!(
            target.ok().map(|t| t.credentials),
            Some(CredentialPair::new("x", "x-secret"))
        );
    }

    #[test]
    fn test_blank_credentials_fail_when_publishing() {
        let ctx = InvocationContext::builder()
            .env("SONATYPE_USERNAME", "")
            .env("SONATYPE_PASSWORD", "")
            .env("OSSRH_USERNAME", " ")
            .env("OSSRH_PASSWORD", " ")
            .env("NEXUS_USERNAME", "")
            .env("NEXUS_PASSWORD", "")
            .build();
        let result = ReleaseTargetResolver::default().resolve(&ctx, &publish_enabled());
        match result {
            Err(ReleaseError::MissingCredentials { expected }) => {
                assert_eq!(expected.len(), 3);
                assert!(expected.iter().any(|g| g.contains("NEXUS_PASSWORD")));
            }
            other => panic!("expected MissingCredentials, got {other:?}"),
        }
    }

    #[test]
    fn test_conflicting_legacy_generations_are_ambiguous() {
        let ctx = InvocationContext::builder()
            .env("OSSRH_USERNAME", "x")
            .env("OSSRH_PASSWORD", "x-secret")
            .env("NEXUS_USERNAME", "z")
            .env("NEXUS_PASSWORD", "z-secret")
            .build();
        let result = ReleaseTargetResolver::default().resolve(&ctx, &publish_enabled());
        assert!(matches!(
            result,
            Err(ReleaseError::Configuration(
                ConfigurationError::AmbiguousCredentials { .. }
            ))
        ));
    }

    #[test]
    fn test_newest_generation_wins_over_conflicting_legacy_leftovers() {
        let ctx = InvocationContext::builder()
            .env("SONATYPE_USERNAME", "y")
            .env("SONATYPE_PASSWORD", "y-secret")
            .env("OSSRH_USERNAME", "x")
            .env("OSSRH_PASSWORD", "x-secret")
            .env("NEXUS_USERNAME", "z")
            .env("NEXUS_PASSWORD", "z-secret")
            .build();
        let target = ReleaseTargetResolver::default().resolve(&ctx, &publish_enabled());
        let Ok(target) = target else {
            panic!("sonatype credentials should win: {target:?}");
        };
        assert_eq!(target.scheme.as_deref(), Some("sonatype"));
        assert_eq!(target.credentials, CredentialPair::new("y", "y-secret"));
    }

    #[test]
    fn test_identical_legacy_generations_are_not_ambiguous() {
        let ctx = InvocationContext::builder()
            .env("OSSRH_USERNAME", "x")
            .env("OSSRH_PASSWORD", "x-secret")
            .env("NEXUS_USERNAME", "x")
            .env("NEXUS_PASSWORD", "x-secret")
            .build();
        let target = ReleaseTargetResolver::default().resolve(&ctx, &publish_enabled());
        assert_eq!(target.ok().and_then(|t| t.scheme), Some("ossrh".to_string()));
    }

    #[test]
    fn test_missing_signing_key_still_publishes() {
        let ctx = InvocationContext::builder()
            .flag("publish", "true")
            .task("publishToSonatype")
            .env("SONATYPE_USERNAME", "u")
            .env("SONATYPE_PASSWORD", "p")
            .env("SIGNING_KEY", "")
            .env("SIGNING_PASSWORD", "pass")
            .build();
        let plan = BuildPlan::resolve(&ctx);
        let Ok(plan) = plan else {
            panic!("publish must proceed unsigned: {plan:?}");
        };
        assert!(plan.remote_publish.enabled);
        assert!(plan.target.credentials.is_complete());
        assert!(!plan.signing.enabled);
        assert_eq!(plan.warnings.len(), 1);
        assert!(plan.warnings[0].contains("SIGNING_KEY"));
    }

    #[test]
    fn test_publish_task_without_credentials_aborts_plan() {
        let ctx = InvocationContext::builder().task("publishToSonatype").build();
        assert!(matches!(
            BuildPlan::resolve(&ctx),
            Err(ReleaseError::MissingCredentials { .. })
        ));
    }
}
