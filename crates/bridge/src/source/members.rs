//! Member-to-validators grouping returned by `RuleSet::create_descriptor`.

use crate::source::PropertyValidator;
use indexmap::IndexMap;
use std::sync::Arc;

/// Shared handle to a property validator.
pub type SharedValidator = Arc<dyn PropertyValidator>;

/// Every member of a model with the property validators bound to it.
///
/// Iteration follows insertion order, both across members and within one
/// member's validators.
#[derive(Debug, Clone, Default)]
pub struct MemberValidators {
    members: IndexMap<String, Vec<SharedValidator>>,
}

impl MemberValidators {
    /// Creates an empty grouping.
    #[must_use]
    pub fn new() -> Self {
        Self {
            members: IndexMap::new(),
        }
    }

    /// Adds `validator` to `member`, builder style.
    #[must_use = "builder methods must be chained or built"]
    pub fn with(mut self, member: impl Into<String>, validator: impl PropertyValidator) -> Self {
        self.push(member, Arc::new(validator));
        self
    }

    /// Appends `validator` to the validators of `member`.
    pub fn push(&mut self, member: impl Into<String>, validator: SharedValidator) {
        self.members
            .entry(member.into())
            .or_default()
            .push(validator);
    }

    /// Returns the validators bound to `member` (empty if unknown).
    #[must_use]
    pub fn validators_for(&self, member: &str) -> &[SharedValidator] {
        self.members.get(member).map(Vec::as_slice).unwrap_or_default()
    }

    /// Iterates members with their validators.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[SharedValidator])> {
        self.members
            .iter()
            .map(|(member, validators)| (member.as_str(), validators.as_slice()))
    }

    /// Iterates every (member, validator) pair.
    pub fn pairs(&self) -> impl Iterator<Item = (&str, &SharedValidator)> {
        self.iter()
            .flat_map(|(member, validators)| validators.iter().map(move |v| (member, v)))
    }

    /// Number of members.
    #[must_use]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Returns `true` if no member has validators.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Number of (member, validator) pairs.
    #[must_use]
    pub fn pair_count(&self) -> usize {
        self.members.values().map(Vec::len).sum()
    }
}

impl FromIterator<(String, SharedValidator)> for MemberValidators {
    fn from_iter<I: IntoIterator<Item = (String, SharedValidator)>>(iter: I) -> Self {
        let mut members = Self::new();
        for (member, validator) in iter {
            members.push(member, validator);
        }
        members
    }
}
