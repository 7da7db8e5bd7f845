//! String length adapter.

use crate::adapters::{RuleAdapter, Rules, single};
use crate::model::{RuleConstraint, ValidationRule};

/// Describes a length or exact-length validator as a `StringLength` rule.
///
/// Exact lengths are reported as `min == max`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LengthAdapter {
    member_name: String,
    min: usize,
    max: Option<usize>,
}

impl LengthAdapter {
    /// Length within `min..=max`; `max = None` leaves it unbounded.
    pub fn new(member_name: impl Into<String>, min: usize, max: Option<usize>) -> Self {
        Self {
            member_name: member_name.into(),
            min,
            max,
        }
    }

    /// Length of exactly `length`.
    pub fn exact(member_name: impl Into<String>, length: usize) -> Self {
        Self::new(member_name, length, Some(length))
    }

    #[must_use]
    pub fn min(&self) -> usize {
        self.min
    }

    #[must_use]
    pub fn max(&self) -> Option<usize> {
        self.max
    }
}

impl RuleAdapter for LengthAdapter {
    fn member_name(&self) -> &str {
        &self.member_name
    }

    fn rules(self) -> Rules {
        single(ValidationRule::new(
            self.member_name,
            RuleConstraint::StringLength {
                min: self.min,
                max: self.max,
            },
        ))
    }
}
