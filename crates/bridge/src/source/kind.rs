//! Validator kinds reported by property validators.
//!
//! A property validator identifies itself through a [`ValidatorKind`]
//! variant carrying the parameters an adapter needs. Kinds the bridge has
//! no specific adapter for report [`ValidatorKind::Unrecognized`].

use serde_json::Value;
use std::fmt;

// ============================================================================
// COMPARISON OPERATOR
// ============================================================================

/// Operator of a comparison validator (`value <op> operand`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ComparisonOperator {
    /// `==`
    Equal,
    /// `!=`
    NotEqual,
    /// `<`
    LessThan,
    /// `<=`
    LessThanOrEqual,
    /// `>`
    GreaterThan,
    /// `>=`
    GreaterThanOrEqual,
}

impl ComparisonOperator {
    /// Returns the operator symbol.
    #[must_use]
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Equal => "==",
            Self::NotEqual => "!=",
            Self::LessThan => "<",
            Self::LessThanOrEqual => "<=",
            Self::GreaterThan => ">",
            Self::GreaterThanOrEqual => ">=",
        }
    }

    /// Returns the operator as a phrase, e.g. "greater than or equal to".
    #[must_use]
    pub fn phrase(self) -> &'static str {
        match self {
            Self::Equal => "equal to",
            Self::NotEqual => "not equal to",
            Self::LessThan => "less than",
            Self::LessThanOrEqual => "less than or equal to",
            Self::GreaterThan => "greater than",
            Self::GreaterThanOrEqual => "greater than or equal to",
        }
    }
}

impl fmt::Display for ComparisonOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

// ============================================================================
// VALIDATOR KIND
// ============================================================================

/// The runtime kind of a property validator, with the parameters adapters
/// extract from it.
///
/// Borrowed from the validator: adapters copy what they keep.
#[derive(Debug, Clone, Copy, PartialEq)]
#[non_exhaustive]
pub enum ValidatorKind<'a> {
    /// Value must match a regular expression.
    RegularExpression {
        /// The configured expression, verbatim.
        pattern: &'a str,
    },
    /// Value must be present.
    NotNull,
    /// Value must be present and non-empty (not blank, not an empty collection).
    NotEmpty,
    /// Value must be an email address.
    Email,
    /// String length must fall within `min..=max` (`max = None` is unbounded).
    Length { min: usize, max: Option<usize> },
    /// String length must be exactly `length`.
    ExactLength { length: usize },
    /// Value must compare against `value` with `operator`.
    Comparison {
        operator: ComparisonOperator,
        value: &'a Value,
    },
    /// Value must lie between `from` and `to`.
    Between {
        from: &'a Value,
        to: &'a Value,
        inclusive: bool,
    },
    /// Any validator without a dedicated adapter.
    Unrecognized,
}

impl ValidatorKind<'_> {
    /// Short, stable tag for logging.
    #[must_use]
    pub fn tag(&self) -> &'static str {
        match self {
            Self::RegularExpression { .. } => "regular_expression",
            Self::NotNull => "not_null",
            Self::NotEmpty => "not_empty",
            Self::Email => "email",
            Self::Length { .. } => "length",
            Self::ExactLength { .. } => "exact_length",
            Self::Comparison { .. } => "comparison",
            Self::Between { .. } => "between",
            Self::Unrecognized => "unrecognized",
        }
    }

    /// Returns `true` for [`ValidatorKind::Unrecognized`].
    #[must_use]
    pub fn is_unrecognized(&self) -> bool {
        matches!(self, Self::Unrecognized)
    }
}
