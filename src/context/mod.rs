//! Immutable snapshot of everything a build invocation was started with.
//!
//! The context is captured once, before any decision is made, and passed
//! explicitly to every resolver. Nothing downstream reads the process
//! environment again.

use std::collections::{BTreeMap, BTreeSet};

/// Raw triggers available at build start
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InvocationContext {
    explicit_flags: BTreeMap<String, String>,
    requested_tasks: BTreeSet<String>,
    environment: BTreeMap<String, String>,
}

impl InvocationContext {
    /// Start building a context from injected values
    pub fn builder() -> InvocationContextBuilder {
        InvocationContextBuilder::default()
    }

    /// Capture the current process environment together with the given flags and tasks
    ///
    /// Variables whose name or value is not valid unicode are skipped.
    pub fn from_process<F, T>(flags: F, tasks: T) -> Self
    where
        F: IntoIterator<Item = (String, String)>,
        T: IntoIterator<Item = String>,
    {
        let environment: BTreeMap<String, String> = std::env::vars_os()
            .filter_map(|(k, v)| Some((k.into_string().ok()?, v.into_string().ok()?)))
            .collect();
        log::debug!(
            "Captured invocation context with {} environment variables",
            environment.len()
        );
        Self {
            explicit_flags: flags.into_iter().collect(),
            requested_tasks: tasks.into_iter().collect(),
            environment,
        }
    }

    /// Value of a user-supplied build property, if present
    pub fn flag(&self, name: &str) -> Option<&str> {
        self.explicit_flags.get(name).map(String::as_str)
    }

    /// All user-supplied build properties
    pub fn explicit_flags(&self) -> &BTreeMap<String, String> {
        &self.explicit_flags
    }

    /// Whether the invocation asked for a task with exactly this name
    pub fn requests_task(&self, task: &str) -> bool {
        self.requested_tasks.contains(task)
    }

    /// Whether any of the given task names was requested
    pub fn requests_any_task(&self, tasks: &[&str]) -> bool {
        tasks.iter().any(|task| self.requests_task(task))
    }

    /// Names of the requested tasks
    pub fn requested_tasks(&self) -> &BTreeSet<String> {
        &self.requested_tasks
    }

    /// Raw environment variable value
    pub fn env(&self, name: &str) -> Option<&str> {
        self.environment.get(name).map(String::as_str)
    }

    /// Environment variable value, treating empty and whitespace-only values as absent
    pub fn non_blank_env(&self, name: &str) -> Option<&str> {
        self.env(name).filter(|value| !is_blank(value))
    }

    /// The captured environment snapshot
    pub fn environment(&self) -> &BTreeMap<String, String> {
        &self.environment
    }
}

/// Builder for [`InvocationContext`], mainly for tests and embedding
#[derive(Debug, Default)]
pub struct InvocationContextBuilder {
    inner: InvocationContext,
}

impl InvocationContextBuilder {
    /// Add an explicit build property
    pub fn flag(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.inner.explicit_flags.insert(name.into(), value.into());
        self
    }

    /// Add a requested task
    pub fn task(mut self, name: impl Into<String>) -> Self {
        self.inner.requested_tasks.insert(name.into());
        self
    }

    /// Add several requested tasks
    pub fn tasks<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.inner
            .requested_tasks
            .extend(names.into_iter().map(Into::into));
        self
    }

    /// Add an environment variable
    pub fn env(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.inner.environment.insert(name.into(), value.into());
        self
    }

    /// Replace the whole environment snapshot
    pub fn environment<I, K, V>(mut self, vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.inner.environment = vars
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        self
    }

    /// Freeze the context
    pub fn build(self) -> InvocationContext {
        self.inner
    }
}

/// Empty or whitespace-only
pub(crate) fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_collects_all_inputs() {
        let ctx = InvocationContext::builder()
            .flag("coverage", "")
            .tasks(["build", "coverage"])
            .env("CI", "true")
            .build();

        assert_eq!(ctx.flag("coverage"), Some(""));
        assert!(ctx.requests_task("coverage"));
        assert!(!ctx.requests_task("Coverage"));
        assert_eq!(ctx.env("CI"), Some("true"));
    }

    #[test]
    fn test_non_blank_env_skips_whitespace() {
        let ctx = InvocationContext::builder()
            .env("EMPTY", "")
            .env("SPACES", "  \t")
            .env("SET", " x ")
            .build();

        assert_eq!(ctx.non_blank_env("EMPTY"), None);
        assert_eq!(ctx.non_blank_env("SPACES"), None);
        assert_eq!(ctx.non_blank_env("MISSING"), None);
        assert_eq!(ctx.non_blank_env("SET"), Some(" x "));
    }

    #[test]
    fn test_requests_any_task() {
        let ctx = InvocationContext::builder().task("publishToMavenLocal").build();
        assert!(ctx.requests_any_task(&["publishToSonatype", "publishToMavenLocal"]));
        assert!(!ctx.requests_any_task(&["publishToSonatype"]));
        assert!(!ctx.requests_any_task(&[]));
    }
}
