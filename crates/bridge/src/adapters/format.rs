//! Format adapters: regular expressions and email addresses.

use crate::adapters::{RuleAdapter, Rules, single};
use crate::model::{RuleConstraint, ValidationRule};

/// Describes a regular-expression validator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegexAdapter {
    member_name: String,
    pattern: String,
}

impl RegexAdapter {
    /// Creates an adapter for `member_name` matching `pattern`.
    pub fn new(member_name: impl Into<String>, pattern: impl Into<String>) -> Self {
        Self {
            member_name: member_name.into(),
            pattern: pattern.into(),
        }
    }

    /// The configured expression.
    #[must_use]
    pub fn pattern(&self) -> &str {
        &self.pattern
    }
}

impl RuleAdapter for RegexAdapter {
    fn member_name(&self) -> &str {
        &self.member_name
    }

    fn rules(self) -> Rules {
        single(ValidationRule::new(
            self.member_name,
            RuleConstraint::Regex {
                pattern: self.pattern,
            },
        ))
    }
}

/// Describes an email validator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailAdapter {
    member_name: String,
}

impl EmailAdapter {
    pub fn new(member_name: impl Into<String>) -> Self {
        Self {
            member_name: member_name.into(),
        }
    }
}

impl RuleAdapter for EmailAdapter {
    fn member_name(&self) -> &str {
        &self.member_name
    }

    fn rules(self) -> Rules {
        single(ValidationRule::new(self.member_name, RuleConstraint::Email))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn regex_emits_one_rule_with_pattern() {
        let adapter = RegexAdapter::new("Name", "^[A-Z]");
        assert_eq!(adapter.pattern(), "^[A-Z]");

        let rules: Vec<_> = adapter.rules().collect();
        assert_eq!(rules.len(), 1);
        assert_eq!(rules[0].rule_type, "Regex");
        assert_eq!(rules[0].member_names(), ["Name"]);
        assert_eq!(
            rules[0].constraint,
            RuleConstraint::Regex {
                pattern: "^[A-Z]".into()
            }
        );
    }

    #[test]
    fn email_emits_one_rule() {
        let rules: Vec<_> = EmailAdapter::new("Contact").rules().collect();
        assert_eq!(rules.len(), 1);
        assert_eq!(rules[0].rule_type, "Email");
        assert!(rules[0].applies_to("Contact"));
    }
}
