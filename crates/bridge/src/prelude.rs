//! Prelude module for convenient imports.
//!
//! `use fluent_bridge::prelude::*;` brings in the facade, the host-side
//! types and the traits a rule-set library implements.

// ============================================================================
// HOST SIDE
// ============================================================================

pub use crate::model::{
    ModelValidator, RuleConstraint, ValidationDescriptor, ValidationError, ValidationResult,
    ValidationRule,
};

// ============================================================================
// RULE-SET SIDE
// ============================================================================

pub use crate::source::{
    ComparisonOperator, Failure, MemberValidators, Outcome, PropertyValidator, RuleSet,
    SharedValidator, TypedRuleSet, ValidatorKind,
};

// ============================================================================
// BRIDGE
// ============================================================================

pub use crate::adapters::RuleAdapter;
pub use crate::factory::ValidatorFactory;
pub use crate::{Error, FluentValidator, SourceError};
