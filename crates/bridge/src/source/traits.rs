//! Traits implemented by the wrapped rule-set library.

use crate::error::SourceError;
use crate::source::{MemberValidators, Outcome, ValidatorKind};
use std::any::Any;
use std::fmt;

// ============================================================================
// PROPERTY VALIDATOR
// ============================================================================

/// A single rule bound to one member of a model.
///
/// The bridge never runs a property validator; it only asks for its
/// [`kind`](PropertyValidator::kind) to describe it.
///
/// # Examples
///
/// ```rust,ignore
/// use fluent_bridge::source::{PropertyValidator, ValidatorKind};
///
/// #[derive(Debug)]
/// struct Matches(regex::Regex);
///
/// impl PropertyValidator for Matches {
///     fn kind(&self) -> ValidatorKind<'_> {
///         ValidatorKind::RegularExpression { pattern: self.0.as_str() }
///     }
/// }
/// ```
pub trait PropertyValidator: Any + fmt::Debug + Send + Sync {
    /// Returns the validator's kind and the parameters that go with it.
    fn kind(&self) -> ValidatorKind<'_>;

    /// Returns the name of this validator.
    ///
    /// Used for logging and for describing custom rules.
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }
}

impl dyn PropertyValidator {
    /// Returns `true` if the validator is of type `T`.
    pub fn is<T: PropertyValidator>(&self) -> bool {
        (self as &dyn Any).is::<T>()
    }

    /// Downcasts to the concrete validator type.
    ///
    /// Lets consumers of `Custom` rules inspect the original validator.
    pub fn downcast_ref<T: PropertyValidator>(&self) -> Option<&T> {
        (self as &dyn Any).downcast_ref::<T>()
    }
}

// ============================================================================
// RULE SET
// ============================================================================

/// A validator for one kind of model, as exposed by the rule-set library.
pub trait RuleSet: Send + Sync {
    /// Validates `instance`.
    ///
    /// Fails with [`SourceError::IncompatibleInstance`] when `instance` is
    /// not the model this rule set checks.
    fn validate(&self, instance: &dyn Any) -> Result<Outcome, SourceError>;

    /// Returns every member with its property validators, in declaration order.
    fn create_descriptor(&self) -> MemberValidators;
}

/// A [`RuleSet`] for a statically known model type.
///
/// Implementors get [`RuleSet`] for free; the blanket impl downcasts the
/// instance and reports [`SourceError::IncompatibleInstance`] on mismatch.
///
/// # Examples
///
/// ```rust,ignore
/// use fluent_bridge::source::{MemberValidators, Outcome, TypedRuleSet};
///
/// struct PersonRules { /* ... */ }
///
/// impl TypedRuleSet for PersonRules {
///     type Model = Person;
///
///     fn validate_model(&self, person: &Person) -> Outcome { /* ... */ }
///
///     fn members(&self) -> MemberValidators { /* ... */ }
/// }
/// ```
pub trait TypedRuleSet: Send + Sync {
    /// The model type this rule set validates.
    type Model: Any;

    /// Validates a model instance.
    fn validate_model(&self, model: &Self::Model) -> Outcome;

    /// Returns every member with its property validators, in declaration order.
    fn members(&self) -> MemberValidators;
}

impl<T: TypedRuleSet> RuleSet for T {
    fn validate(&self, instance: &dyn Any) -> Result<Outcome, SourceError> {
        let model = instance
            .downcast_ref::<T::Model>()
            .ok_or_else(SourceError::incompatible::<T::Model>)?;
        Ok(self.validate_model(model))
    }

    fn create_descriptor(&self) -> MemberValidators {
        self.members()
    }
}
