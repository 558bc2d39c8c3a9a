//! Ordered fallback over groups of environment variables.
//!
//! Each group is one naming generation for the same logical value. Groups are
//! tried in order and the first one whose variables are all non-blank wins.
//! Values are never mixed across groups.

use crate::context::InvocationContext;
use crate::error::{ConfigurationError, Result};

/// One naming generation: a name and the variables that must all be set
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VariableGroup {
    /// Scheme name used in logs and errors
    pub name: &'static str,
    /// Variables read together, in positional order
    pub keys: &'static [&'static str],
}

impl VariableGroup {
    /// Declare a group
    pub const fn new(name: &'static str, keys: &'static [&'static str]) -> Self {
        Self { name, keys }
    }

    /// Variables joined for messages, e.g. `A_USERNAME + A_PASSWORD`
    pub fn describe(&self) -> String {
        self.keys.join(" + ")
    }

    /// All values if every key is non-blank
    fn lookup(&self, context: &InvocationContext) -> Option<Vec<String>> {
        self.keys
            .iter()
            .map(|key| context.non_blank_env(key).map(str::to_string))
            .collect()
    }

    /// Some but not all keys are set
    fn is_partial(&self, context: &InvocationContext) -> bool {
        let set = self
            .keys
            .iter()
            .filter(|key| context.non_blank_env(key).is_some())
            .count();
        set > 0 && set < self.keys.len()
    }
}

/// Winning group of a chain
#[derive(Clone, PartialEq, Eq)]
pub struct ChainMatch {
    /// Name of the group that supplied the values
    pub group: &'static str,
    /// Values in the group's key order
    pub values: Vec<String>,
}

impl ChainMatch {
    /// Value at `index`, if the group declared that many keys
    pub fn value(&self, index: usize) -> Option<&str> {
        self.values.get(index).map(String::as_str)
    }

    /// Consume into the values
    pub fn into_values(self) -> Vec<String> {
        self.values
    }
}

// Values are frequently secrets
impl std::fmt::Debug for ChainMatch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChainMatch")
            .field("group", &self.group)
            .field("values", &format_args!("[{} redacted]", self.values.len()))
            .finish()
    }
}

/// Priority list of variable groups for one logical value
#[derive(Debug, Clone, Default)]
pub struct FallbackChain {
    concept: &'static str,
    groups: Vec<VariableGroup>,
    exclusive: Vec<(&'static str, &'static str)>,
}

impl FallbackChain {
    /// Create a chain for `concept`, newest group first
    pub fn new<I>(concept: &'static str, groups: I) -> Self
    where
        I: IntoIterator<Item = VariableGroup>,
    {
        Self {
            concept,
            groups: groups.into_iter().collect(),
            exclusive: Vec::new(),
        }
    }

    /// Declare two groups that must not carry different values at the same time
    pub fn mutually_exclusive(mut self, first: &'static str, second: &'static str) -> Self {
        self.exclusive.push((first, second));
        self
    }

    /// Groups in lookup order
    pub fn groups(&self) -> &[VariableGroup] {
        &self.groups
    }

    /// Every group's variables, formatted for messages
    pub fn expected_keys(&self) -> Vec<String> {
        self.groups.iter().map(VariableGroup::describe).collect()
    }

    /// Find the first complete group
    ///
    /// Fails when the winning group and a group declared mutually exclusive
    /// with it are both complete with different values. Conflicts among
    /// shadowed groups do not matter. Returns `Ok(None)` when no group is
    /// complete.
    pub fn resolve(&self, context: &InvocationContext) -> Result<Option<ChainMatch>> {
        let complete: Vec<(&VariableGroup, Vec<String>)> = self
            .groups
            .iter()
            .filter_map(|group| {
                if group.is_partial(context) {
                    log::debug!(
                        "Ignoring incomplete {} scheme '{}': all of {} must be set",
                        self.concept,
                        group.name,
                        group.describe()
                    );
                }
                group.lookup(context).map(|values| (group, values))
            })
            .collect();

        if let Some((winner, _)) = complete.first() {
            self.check_exclusive(winner.name, &complete)?;
        }

        let mut found = complete.into_iter();
        let Some((winner, values)) = found.next() else {
            log::debug!("No {} scheme is set", self.concept);
            return Ok(None);
        };

        log::info!(
            "Using {} from scheme '{}' ({})",
            self.concept,
            winner.name,
            winner.describe()
        );
        for (shadowed, _) in found {
            log::debug!(
                "Scheme '{}' for {} is also set but shadowed by '{}'",
                shadowed.name,
                self.concept,
                winner.name
            );
        }

        Ok(Some(ChainMatch {
            group: winner.name,
            values,
        }))
    }

    fn check_exclusive(
        &self,
        winner: &str,
        complete: &[(&VariableGroup, Vec<String>)],
    ) -> Result<()> {
        let find = |name: &str| complete.iter().find(|(group, _)| group.name == name);

        for (first, second) in self
            .exclusive
            .iter()
            .filter(|(first, second)| *first == winner || *second == winner)
        {
            if let (Some((a, a_values)), Some((b, b_values))) = (find(first), find(second))
                && a_values != b_values
            {
                return Err(ConfigurationError::AmbiguousCredentials {
                    first: a.name.to_string(),
                    first_keys: a.describe(),
                    second: b.name.to_string(),
                    second_keys: b.describe(),
                }
                .into());
            }
        }
        Ok(())
    }
}
