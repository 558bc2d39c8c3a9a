//! Release target and signing resolution.
//!
//! Credentials, staging profile and signing keys are each looked up through
//! a [`FallbackChain`] of naming generations, newest first.

mod chain;
pub mod schemes;
mod signing;
mod target;

pub use chain::{ChainMatch, FallbackChain, VariableGroup};
pub use signing::{SigningMaterial, SigningPlan, SigningResolver, SigningSkip};
pub use target::{CredentialPair, PublicationTarget, ReleaseTargetResolver};
