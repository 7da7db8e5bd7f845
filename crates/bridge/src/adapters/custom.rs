//! Fallback adapter for validators without a dedicated adapter.

use crate::adapters::{RuleAdapter, Rules, single};
use crate::model::{RuleConstraint, ValidationRule};
use crate::source::SharedValidator;

/// Describes any validator as a single `Custom` rule.
///
/// The rule keeps a handle to the original validator; consumers that know
/// its concrete type can downcast it.
#[derive(Debug, Clone)]
pub struct CustomAdapter {
    member_name: String,
    validator: SharedValidator,
}

impl CustomAdapter {
    pub fn new(member_name: impl Into<String>, validator: SharedValidator) -> Self {
        Self {
            member_name: member_name.into(),
            validator,
        }
    }

    /// The original validator.
    #[must_use]
    pub fn validator(&self) -> &SharedValidator {
        &self.validator
    }
}

impl RuleAdapter for CustomAdapter {
    fn member_name(&self) -> &str {
        &self.member_name
    }

    fn rules(self) -> Rules {
        single(ValidationRule::new(
            self.member_name,
            RuleConstraint::Custom {
                validator: self.validator,
            },
        ))
    }
}
