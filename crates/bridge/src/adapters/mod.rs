//! Rule adapters.
//!
//! An adapter wraps one (member, property validator) pair and describes it
//! as [`ValidationRule`]s. Each known [`ValidatorKind`](crate::source::ValidatorKind)
//! has its own adapter; everything else is described by [`CustomAdapter`].
//! [`dispatch::resolve`] picks the adapter for a validator.
//!
//! # Examples
//!
//! ```rust,ignore
//! use fluent_bridge::adapters::{RegexAdapter, RuleAdapter};
//!
//! let rules: Vec<_> = RegexAdapter::new("Name", "^[A-Z]").rules().collect();
//! assert_eq!(rules[0].rule_type, "Regex");
//! ```

mod comparison;
mod custom;
pub mod dispatch;
mod format;
mod length;
mod presence;

pub use comparison::{BetweenAdapter, ComparisonAdapter};
pub use custom::CustomAdapter;
pub use dispatch::resolve;
pub use format::{EmailAdapter, RegexAdapter};
pub use length::LengthAdapter;
pub use presence::{NotEmptyAdapter, NotNullAdapter};

use crate::model::ValidationRule;
use smallvec::SmallVec;

/// Rules produced by one adapter. Finite; consumed once.
pub type Rules = smallvec::IntoIter<[ValidationRule; 1]>;

/// Describes one validator bound to one member.
pub trait RuleAdapter {
    /// The member the adapter describes.
    fn member_name(&self) -> &str;

    /// Consumes the adapter, producing its rules.
    fn rules(self) -> Rules
    where
        Self: Sized;
}

fn single(rule: ValidationRule) -> Rules {
    let mut rules = SmallVec::new();
    rules.push(rule);
    rules.into_iter()
}

// ============================================================================
// ADAPTER
// ============================================================================

/// Any adapter, as chosen by the dispatch table.
#[derive(Debug, Clone)]
pub enum Adapter {
    Regex(RegexAdapter),
    Email(EmailAdapter),
    NotNull(NotNullAdapter),
    NotEmpty(NotEmptyAdapter),
    Length(LengthAdapter),
    Comparison(ComparisonAdapter),
    Between(BetweenAdapter),
    Custom(CustomAdapter),
}

impl Adapter {
    /// Returns `true` for the fallback adapter.
    #[must_use]
    pub fn is_custom(&self) -> bool {
        matches!(self, Self::Custom(_))
    }
}

impl RuleAdapter for Adapter {
    fn member_name(&self) -> &str {
        match self {
            Self::Regex(a) => a.member_name(),
            Self::Email(a) => a.member_name(),
            Self::NotNull(a) => a.member_name(),
            Self::NotEmpty(a) => a.member_name(),
            Self::Length(a) => a.member_name(),
            Self::Comparison(a) => a.member_name(),
            Self::Between(a) => a.member_name(),
            Self::Custom(a) => a.member_name(),
        }
    }

    fn rules(self) -> Rules {
        match self {
            Self::Regex(a) => a.rules(),
            Self::Email(a) => a.rules(),
            Self::NotNull(a) => a.rules(),
            Self::NotEmpty(a) => a.rules(),
            Self::Length(a) => a.rules(),
            Self::Comparison(a) => a.rules(),
            Self::Between(a) => a.rules(),
            Self::Custom(a) => a.rules(),
        }
    }
}
