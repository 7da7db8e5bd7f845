//! Dispatch table: validator kind to adapter.
//!
//! The table is the `match` in [`resolve`]: one arm per known
//! [`ValidatorKind`], each extracting the parameters its adapter needs, and
//! an explicit default arm for [`ValidatorKind::Unrecognized`]. It is
//! fixed at compile time, so concurrent lookups need no synchronization.
//!
//! Resolution never fails. A validator without a dedicated adapter is
//! described as `Custom`, which keeps the rule set extensible: new validator
//! kinds show up in descriptors before the bridge learns about them.

use crate::adapters::{
    Adapter, BetweenAdapter, ComparisonAdapter, CustomAdapter, EmailAdapter, LengthAdapter,
    NotEmptyAdapter, NotNullAdapter, RegexAdapter, RuleAdapter, Rules,
};
use crate::source::{SharedValidator, ValidatorKind};
use std::sync::Arc;

/// Returns the adapter describing `validator` bound to `member_name`.
pub fn resolve(member_name: &str, validator: &SharedValidator) -> Adapter {
    match validator.kind() {
        ValidatorKind::RegularExpression { pattern } => {
            Adapter::Regex(RegexAdapter::new(member_name, pattern))
        }
        ValidatorKind::NotNull => Adapter::NotNull(NotNullAdapter::new(member_name)),
        ValidatorKind::NotEmpty => Adapter::NotEmpty(NotEmptyAdapter::new(member_name)),
        ValidatorKind::Email => Adapter::Email(EmailAdapter::new(member_name)),
        ValidatorKind::Length { min, max } => {
            Adapter::Length(LengthAdapter::new(member_name, min, max))
        }
        ValidatorKind::ExactLength { length } => {
            Adapter::Length(LengthAdapter::exact(member_name, length))
        }
        ValidatorKind::Comparison { operator, value } => Adapter::Comparison(
            ComparisonAdapter::new(member_name, operator, value.clone()),
        ),
        ValidatorKind::Between {
            from,
            to,
            inclusive,
        } => Adapter::Between(BetweenAdapter::new(
            member_name,
            from.clone(),
            to.clone(),
            inclusive,
        )),
        ValidatorKind::Unrecognized => {
            tracing::debug!(
                member = member_name,
                validator = validator.name(),
                "no dedicated adapter, describing validator as custom"
            );
            Adapter::Custom(CustomAdapter::new(member_name, Arc::clone(validator)))
        }
    }
}

/// Resolves the adapter for `validator` and returns its rules.
pub fn rules_for(member_name: &str, validator: &SharedValidator) -> Rules {
    resolve(member_name, validator).rules()
}
