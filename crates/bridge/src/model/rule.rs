//! Descriptive validation rules.
//!
//! A [`ValidationRule`] says *what* is checked on which members, without
//! checking anything. Rules are produced by adapters and collected into a
//! [`ValidationDescriptor`](crate::model::ValidationDescriptor).

use crate::source::{ComparisonOperator, SharedValidator};
use serde_json::Value;
use smallvec::SmallVec;
use std::borrow::Cow;
use std::fmt;

// ============================================================================
// RULE CONSTRAINT
// ============================================================================

/// The constraint a rule describes, with its parameters.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "snake_case"))]
#[non_exhaustive]
pub enum RuleConstraint {
    /// Value must match `pattern`.
    Regex { pattern: String },

    /// Value must be present.
    NotNull,

    /// Value must be present and non-empty.
    NotEmpty,

    /// Value must be an email address.
    Email,

    /// String length must be within `min..=max`.
    StringLength {
        min: usize,
        #[cfg_attr(
            feature = "serde",
            serde(default, skip_serializing_if = "Option::is_none")
        )]
        max: Option<usize>,
    },

    /// Value must compare against `value`.
    Comparison {
        operator: ComparisonOperator,
        value: Value,
    },

    /// Value must lie between `from` and `to`.
    Between {
        from: Value,
        to: Value,
        inclusive: bool,
    },

    /// A validator the bridge has no dedicated adapter for.
    ///
    /// Carries the original validator so consumers can inspect it further.
    /// Serializes as the validator's name.
    Custom {
        #[cfg_attr(feature = "serde", serde(serialize_with = "serialize_validator_name"))]
        validator: SharedValidator,
    },
}

impl RuleConstraint {
    /// The rule type name reported for this constraint.
    #[must_use]
    pub fn rule_type(&self) -> &'static str {
        match self {
            Self::Regex { .. } => "Regex",
            Self::NotNull => "NotNull",
            Self::NotEmpty => "NotEmpty",
            Self::Email => "Email",
            Self::StringLength { .. } => "StringLength",
            Self::Comparison { .. } => "Comparison",
            Self::Between { .. } => "Between",
            Self::Custom { .. } => "Custom",
        }
    }
}

// Custom constraints compare by validator name; the validator itself is opaque.
impl PartialEq for RuleConstraint {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Regex { pattern: a }, Self::Regex { pattern: b }) => a == b,
            (Self::NotNull, Self::NotNull)
            | (Self::NotEmpty, Self::NotEmpty)
            | (Self::Email, Self::Email) => true,
            (
                Self::StringLength { min: a_min, max: a_max },
                Self::StringLength { min: b_min, max: b_max },
            ) => a_min == b_min && a_max == b_max,
            (
                Self::Comparison { operator: a_op, value: a },
                Self::Comparison { operator: b_op, value: b },
            ) => a_op == b_op && a == b,
            (
                Self::Between { from: a_from, to: a_to, inclusive: a_inc },
                Self::Between { from: b_from, to: b_to, inclusive: b_inc },
            ) => a_from == b_from && a_to == b_to && a_inc == b_inc,
            (Self::Custom { validator: a }, Self::Custom { validator: b }) => {
                a.name() == b.name()
            }
            _ => false,
        }
    }
}

#[cfg(feature = "serde")]
fn serialize_validator_name<S>(
    validator: &SharedValidator,
    serializer: S,
) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.serialize_str(validator.name())
}

// ============================================================================
// VALIDATION RULE
// ============================================================================

/// A named rule tied to one or more members.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ValidationRule {
    /// Rule name, e.g. `"Regex"` or `"Custom"`.
    pub rule_type: Cow<'static, str>,

    /// Members the rule applies to (typically one).
    pub member_names: SmallVec<[String; 1]>,

    /// What the rule checks.
    pub constraint: RuleConstraint,
}

impl ValidationRule {
    /// Creates a rule for a single member, named after its constraint.
    pub fn new(member_name: impl Into<String>, constraint: RuleConstraint) -> Self {
        Self {
            rule_type: Cow::Borrowed(constraint.rule_type()),
            member_names: smallvec::smallvec![member_name.into()],
            constraint,
        }
    }

    /// Creates a rule with an explicit name and member list.
    pub fn named<I, S>(
        rule_type: impl Into<Cow<'static, str>>,
        member_names: I,
        constraint: RuleConstraint,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            rule_type: rule_type.into(),
            member_names: member_names.into_iter().map(Into::into).collect(),
            constraint,
        }
    }

    /// Members the rule applies to.
    #[must_use]
    pub fn member_names(&self) -> &[String] {
        &self.member_names
    }

    /// Returns `true` if the rule applies to `member`.
    #[must_use]
    pub fn applies_to(&self, member: &str) -> bool {
        self.member_names.iter().any(|m| m == member)
    }

    /// Renders the default message for a failure of this rule on `display_name`.
    #[must_use]
    pub fn error_message(&self, display_name: &str) -> String {
        match &self.constraint {
            RuleConstraint::Regex { .. } => {
                format!("'{display_name}' is not in the correct format.")
            }
            RuleConstraint::NotNull => format!("'{display_name}' must not be empty."),
            RuleConstraint::NotEmpty => format!("'{display_name}' should not be empty."),
            RuleConstraint::Email => format!("'{display_name}' is not a valid email address."),
            RuleConstraint::StringLength { min, max: Some(max) } if min == max => {
                format!("'{display_name}' must be {max} characters in length.")
            }
            RuleConstraint::StringLength { min, max: Some(max) } => {
                format!("'{display_name}' must be between {min} and {max} characters.")
            }
            RuleConstraint::StringLength { min, max: None } => {
                format!("'{display_name}' must be at least {min} characters.")
            }
            RuleConstraint::Comparison { operator, value } => {
                let verb: Cow<'_, str> = match operator {
                    ComparisonOperator::Equal => "should be equal to".into(),
                    ComparisonOperator::NotEqual => "should not be equal to".into(),
                    other => format!("must be {}", other.phrase()).into(),
                };
                format!("'{display_name}' {verb} '{}'.", display_value(value))
            }
            RuleConstraint::Between { from, to, inclusive } => {
                let suffix = if *inclusive { "" } else { " (exclusive)" };
                format!(
                    "'{display_name}' must be between {} and {}{suffix}.",
                    display_value(from),
                    display_value(to)
                )
            }
            RuleConstraint::Custom { .. } => format!("'{display_name}' is invalid."),
        }
    }
}

impl fmt::Display for ValidationRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]", self.rule_type, self.member_names.join(", "))
    }
}

/// Strings render without JSON quotes.
fn display_value(value: &Value) -> Cow<'_, str> {
    match value {
        Value::String(s) => Cow::Borrowed(s),
        other => Cow::Owned(other.to_string()),
    }
}
