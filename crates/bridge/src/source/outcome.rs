//! Validation outcome reported by a rule set.

/// One failed rule on one member.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Failure {
    /// Name of the member that failed.
    pub property_name: String,
    /// Message configured in the rule set, already formatted.
    pub error_message: String,
}

impl Failure {
    /// Creates a failure for `property_name`.
    pub fn new(property_name: impl Into<String>, error_message: impl Into<String>) -> Self {
        Self {
            property_name: property_name.into(),
            error_message: error_message.into(),
        }
    }
}

/// Result of running a rule set against an instance.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Outcome {
    errors: Vec<Failure>,
}

impl Outcome {
    /// A passing outcome.
    #[must_use]
    pub fn success() -> Self {
        Self::default()
    }

    /// An outcome holding `failures`, in order.
    pub fn from_failures(failures: impl IntoIterator<Item = Failure>) -> Self {
        Self {
            errors: failures.into_iter().collect(),
        }
    }

    /// Records a failure.
    pub fn push(&mut self, failure: Failure) {
        self.errors.push(failure);
    }

    /// Returns `true` when no rule failed.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Failures in the order the rule set reported them.
    #[must_use]
    pub fn errors(&self) -> &[Failure] {
        &self.errors
    }

    /// Consumes the outcome, returning its failures.
    #[must_use]
    pub fn into_errors(self) -> Vec<Failure> {
        self.errors
    }
}

impl FromIterator<Failure> for Outcome {
    fn from_iter<I: IntoIterator<Item = Failure>>(iter: I) -> Self {
        Self::from_failures(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_outcome_is_valid() {
        assert!(Outcome::success().is_valid());
        assert!(Outcome::from_failures([]).is_valid());
    }

    #[test]
    fn failures_keep_order() {
        let mut outcome = Outcome::success();
        outcome.push(Failure::new("b", "second"));
        outcome.push(Failure::new("a", "first"));

        assert!(!outcome.is_valid());
        let names: Vec<_> = outcome.errors().iter().map(|f| f.property_name.as_str()).collect();
        assert_eq!(names, ["b", "a"]);
    }
}
