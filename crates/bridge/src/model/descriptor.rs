//! Validation descriptors: which rules exist for a validator.

use crate::model::ValidationRule;

/// Immutable, ordered collection of [`ValidationRule`]s.
///
/// Rules keep the order in which the wrapped library enumerated its members
/// and validators; nothing is sorted or deduplicated.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ValidationDescriptor {
    rules: Vec<ValidationRule>,
}

impl ValidationDescriptor {
    /// Creates a descriptor from `rules`, in order.
    pub fn new(rules: impl IntoIterator<Item = ValidationRule>) -> Self {
        Self {
            rules: rules.into_iter().collect(),
        }
    }

    /// All rules.
    #[must_use]
    pub fn rules(&self) -> &[ValidationRule] {
        &self.rules
    }

    /// Rules that apply to `member`.
    pub fn rules_for<'a>(&'a self, member: &'a str) -> impl Iterator<Item = &'a ValidationRule> {
        self.rules.iter().filter(move |rule| rule.applies_to(member))
    }

    /// Distinct member names, in first-seen order.
    #[must_use]
    pub fn member_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::new();
        for name in self.rules.iter().flat_map(|rule| rule.member_names()) {
            if !names.contains(&name.as_str()) {
                names.push(name);
            }
        }
        names
    }

    /// Number of rules.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Returns `true` if there are no rules.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Iterates rules.
    pub fn iter(&self) -> std::slice::Iter<'_, ValidationRule> {
        self.rules.iter()
    }

    /// Consumes the descriptor, returning its rules.
    #[must_use]
    pub fn into_rules(self) -> Vec<ValidationRule> {
        self.rules
    }

    /// Converts the descriptor to a JSON value.
    ///
    /// Returns `null` if serialization fails, which no field type can cause.
    #[cfg(feature = "serde")]
    pub fn to_json_value(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or(serde_json::Value::Null)
    }
}

impl FromIterator<ValidationRule> for ValidationDescriptor {
    fn from_iter<I: IntoIterator<Item = ValidationRule>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl IntoIterator for ValidationDescriptor {
    type Item = ValidationRule;
    type IntoIter = std::vec::IntoIter<ValidationRule>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.into_iter()
    }
}

impl<'a> IntoIterator for &'a ValidationDescriptor {
    type Item = &'a ValidationRule;
    type IntoIter = std::slice::Iter<'a, ValidationRule>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.iter()
    }
}
