//! # Quark Build Gates
//!
//! Build-time decision layer for the Quark Config project.
//!
//! Given one immutable snapshot of an invocation (build properties, requested
//! task names and environment), this crate decides which optional and
//! expensive stages run and with which parameters. It performs no packaging,
//! signing or uploading itself.
//!
//! ## Features
//!
//! - **Feature Gates**: coverage and publishing are opt-in via `-Pcoverage` /
//!   `-Ppublish`, or implied by requesting the matching task
//! - **Migration-Tolerant Credentials**: `SONATYPE_*`, `OSSRH_*` and
//!   `NEXUS_*` variables are read through one ordered fallback chain
//! - **Fail Fast**: missing or ambiguous credentials abort before any stage runs
//! - **Soft Signing**: missing GPG key material only skips signing, with a warning
//!
//! ## Usage
//!
//! ```bash
//! quark_build_gates test coverage                # coverage enabled by task name
//! quark_build_gates -P publish publishToSonatype # full release plan
//! quark_build_gates --json -P coverage=false coverage
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]
#![warn(rust_2018_idioms)]

pub mod cli;
pub mod context;
pub mod error;
pub mod gates;
pub mod plan;
pub mod release;
pub mod settings;

pub use context::InvocationContext;
pub use error::{ConfigurationError, ReleaseError, Result};
pub use gates::{DecisionReason, FeatureDecision, FeatureGate, FeatureGateResolver};
pub use plan::BuildPlan;
pub use release::{
    CredentialPair, FallbackChain, PublicationTarget, ReleaseTargetResolver, SigningPlan,
    SigningResolver,
};
pub use settings::{PublicationMetadata, PublishSettings, SettingsFile};
