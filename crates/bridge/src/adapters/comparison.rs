//! Comparison and range adapters.

use crate::adapters::{RuleAdapter, Rules, single};
use crate::model::{RuleConstraint, ValidationRule};
use crate::source::ComparisonOperator;
use serde_json::Value;

/// Describes a comparison validator (`>`, `>=`, `<`, `<=`, `==`, `!=`).
#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonAdapter {
    member_name: String,
    operator: ComparisonOperator,
    value: Value,
}

impl ComparisonAdapter {
    pub fn new(member_name: impl Into<String>, operator: ComparisonOperator, value: Value) -> Self {
        Self {
            member_name: member_name.into(),
            operator,
            value,
        }
    }

    #[must_use]
    pub fn operator(&self) -> ComparisonOperator {
        self.operator
    }
}

impl RuleAdapter for ComparisonAdapter {
    fn member_name(&self) -> &str {
        &self.member_name
    }

    fn rules(self) -> Rules {
        single(ValidationRule::new(
            self.member_name,
            RuleConstraint::Comparison {
                operator: self.operator,
                value: self.value,
            },
        ))
    }
}

/// Describes an inclusive or exclusive between validator.
#[derive(Debug, Clone, PartialEq)]
pub struct BetweenAdapter {
    member_name: String,
    from: Value,
    to: Value,
    inclusive: bool,
}

impl BetweenAdapter {
    pub fn new(member_name: impl Into<String>, from: Value, to: Value, inclusive: bool) -> Self {
        Self {
            member_name: member_name.into(),
            from,
            to,
            inclusive,
        }
    }

    #[must_use]
    pub fn is_inclusive(&self) -> bool {
        self.inclusive
    }
}

impl RuleAdapter for BetweenAdapter {
    fn member_name(&self) -> &str {
        &self.member_name
    }

    fn rules(self) -> Rules {
        single(ValidationRule::new(
            self.member_name,
            RuleConstraint::Between {
                from: self.from,
                to: self.to,
                inclusive: self.inclusive,
            },
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn comparison_keeps_operator_and_value() {
        let adapter = ComparisonAdapter::new("Age", ComparisonOperator::GreaterThanOrEqual, json!(0));
        assert_eq!(adapter.operator(), ComparisonOperator::GreaterThanOrEqual);

        let rules: Vec<_> = adapter.rules().collect();
        assert_eq!(rules.len(), 1);
        assert_eq!(rules[0].rule_type, "Comparison");
        assert_eq!(
            rules[0].constraint,
            RuleConstraint::Comparison {
                operator: ComparisonOperator::GreaterThanOrEqual,
                value: json!(0),
            }
        );
    }

    #[test]
    fn between_keeps_bounds() {
        let adapter = BetweenAdapter::new("Score", json!(1), json!(10), false);
        assert!(!adapter.is_inclusive());

        let rules: Vec<_> = adapter.rules().collect();
        assert_eq!(rules[0].rule_type, "Between");
        assert_eq!(rules[0].member_names(), ["Score"]);
        assert_eq!(
            rules[0].constraint,
            RuleConstraint::Between {
                from: json!(1),
                to: json!(10),
                inclusive: false,
            }
        );
    }
}
