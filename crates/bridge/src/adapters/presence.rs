//! Presence adapters: not-null and not-empty.

use crate::adapters::{RuleAdapter, Rules, single};
use crate::model::{RuleConstraint, ValidationRule};

/// Describes a not-null validator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotNullAdapter {
    member_name: String,
}

impl NotNullAdapter {
    pub fn new(member_name: impl Into<String>) -> Self {
        Self {
            member_name: member_name.into(),
        }
    }
}

impl RuleAdapter for NotNullAdapter {
    fn member_name(&self) -> &str {
        &self.member_name
    }

    fn rules(self) -> Rules {
        single(ValidationRule::new(self.member_name, RuleConstraint::NotNull))
    }
}

/// Describes a not-empty validator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotEmptyAdapter {
    member_name: String,
}

impl NotEmptyAdapter {
    pub fn new(member_name: impl Into<String>) -> Self {
        Self {
            member_name: member_name.into(),
        }
    }
}

impl RuleAdapter for NotEmptyAdapter {
    fn member_name(&self) -> &str {
        &self.member_name
    }

    fn rules(self) -> Rules {
        single(ValidationRule::new(self.member_name, RuleConstraint::NotEmpty))
    }
}
