//! Interface consumed from the rule-set validation library.
//!
//! A rule set validates one model type. It reports two things the bridge
//! needs:
//!
//! - an [`Outcome`] for a validated instance, carrying one [`Failure`] per
//!   failed rule;
//! - a [`MemberValidators`] grouping, listing every member with the
//!   [`PropertyValidator`]s bound to it.
//!
//! Property validators describe themselves through [`ValidatorKind`], a
//! closed set of known kinds plus an explicit `Unrecognized` fallback.

mod kind;
mod members;
mod outcome;
mod traits;

pub use kind::{ComparisonOperator, ValidatorKind};
pub use members::{MemberValidators, SharedValidator};
pub use outcome::{Failure, Outcome};
pub use traits::{PropertyValidator, RuleSet, TypedRuleSet};
