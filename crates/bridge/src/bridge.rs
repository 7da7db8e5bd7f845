//! The bridge: descriptor builder, result translator and validator facade.

use crate::adapters::dispatch;
use crate::error::Error;
use crate::model::{ModelValidator, ValidationDescriptor, ValidationError, ValidationResult};
use crate::source::{Outcome, RuleSet};
use std::any::Any;

// ============================================================================
// DESCRIPTOR BUILDER
// ============================================================================

/// Builds a descriptor for `rule_set`.
///
/// Every (member, validator) pair reported by the rule set goes through the
/// dispatch table exactly once; rules keep the rule set's member and
/// validator order. A rule set without validators yields an empty
/// descriptor.
pub fn describe<R: RuleSet + ?Sized>(rule_set: &R) -> ValidationDescriptor {
    let members = rule_set.create_descriptor();

    let rules: Vec<_> = members
        .pairs()
        .flat_map(|(member, validator)| dispatch::rules_for(member, validator))
        .collect();

    tracing::trace!(
        members = members.len(),
        validators = members.pair_count(),
        rules = rules.len(),
        "built validation descriptor"
    );

    ValidationDescriptor::new(rules)
}

// ============================================================================
// RESULT TRANSLATOR
// ============================================================================

/// Converts a rule-set outcome into a [`ValidationResult`].
///
/// Each failure becomes one error for its property, carrying the rule set's
/// message unchanged. Order is preserved.
pub fn translate(outcome: Outcome) -> ValidationResult {
    if outcome.is_valid() {
        return ValidationResult::valid();
    }

    let result: ValidationResult = outcome
        .into_errors()
        .into_iter()
        .map(|failure| ValidationError::fixed([failure.property_name], failure.error_message))
        .collect();

    tracing::trace!(errors = result.error_count(), "translated failed outcome");
    result
}

// ============================================================================
// VALIDATOR FACADE
// ============================================================================

/// Exposes a [`RuleSet`] as a [`ModelValidator`].
///
/// # Examples
///
/// ```rust,ignore
/// use fluent_bridge::prelude::*;
///
/// let validator = FluentValidator::new(PersonRules::default());
///
/// let descriptor = validator.description();
/// assert_eq!(descriptor.len(), 2);
///
/// let result = validator.validate_model(&Person { name: "bob".into(), age: 5 })?;
/// assert!(!result.is_valid());
/// ```
#[derive(Debug, Clone, Default)]
pub struct FluentValidator<R> {
    rule_set: R,
}

impl<R: RuleSet> FluentValidator<R> {
    /// Wraps `rule_set`.
    pub fn new(rule_set: R) -> Self {
        Self { rule_set }
    }

    /// The wrapped rule set.
    pub fn rule_set(&self) -> &R {
        &self.rule_set
    }

    /// Unwraps the rule set.
    pub fn into_inner(self) -> R {
        self.rule_set
    }

    /// Validates a statically typed model.
    pub fn validate_model<T: Any>(&self, model: &T) -> Result<ValidationResult, Error> {
        ModelValidator::validate(self, model)
    }
}

impl<R: RuleSet> ModelValidator for FluentValidator<R> {
    /// Rebuilt on every call; nothing is cached.
    fn description(&self) -> ValidationDescriptor {
        describe(&self.rule_set)
    }

    fn validate(&self, instance: &dyn Any) -> Result<ValidationResult, Error> {
        let outcome = self.rule_set.validate(instance)?;
        Ok(translate(outcome))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SourceError;
    use crate::model::RuleConstraint;
    use crate::source::{Failure, MemberValidators, PropertyValidator, ValidatorKind};
    use pretty_assertions::assert_eq;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Debug)]
    struct Pattern(&'static str);

    impl PropertyValidator for Pattern {
        fn kind(&self) -> ValidatorKind<'_> {
            ValidatorKind::RegularExpression { pattern: self.0 }
        }
    }

    #[derive(Debug)]
    struct Opaque;

    impl PropertyValidator for Opaque {
        fn kind(&self) -> ValidatorKind<'_> {
            ValidatorKind::Unrecognized
        }
    }

    /// Rule set answering with canned data and counting descriptor requests.
    #[derive(Default)]
    struct Canned {
        failures: Vec<Failure>,
        descriptor_calls: AtomicUsize,
    }

    impl RuleSet for Canned {
        fn validate(&self, instance: &dyn Any) -> Result<Outcome, SourceError> {
            if instance.is::<()>() {
                return Err(SourceError::incompatible::<String>());
            }
            Ok(Outcome::from_failures(self.failures.clone()))
        }

        fn create_descriptor(&self) -> MemberValidators {
            self.descriptor_calls.fetch_add(1, Ordering::SeqCst);
            MemberValidators::new()
                .with("Name", Pattern("^[A-Z]"))
                .with("Age", Opaque)
        }
    }

    #[test]
    fn describe_maps_each_pair() {
        let descriptor = describe(&Canned::default());
        let summary: Vec<_> = descriptor
            .iter()
            .map(|r| (&*r.rule_type, r.member_names()[0].as_str()))
            .collect();
        assert_eq!(summary, [("Regex", "Name"), ("Custom", "Age")]);
    }

    #[test]
    fn description_is_rebuilt_each_time() {
        let validator = FluentValidator::new(Canned::default());
        let first = validator.description();
        let second = validator.description();

        assert_eq!(first, second);
        assert_eq!(validator.rule_set().descriptor_calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn translate_valid_outcome() {
        assert!(translate(Outcome::success()).is_valid());
    }

    #[test]
    fn translate_keeps_order_and_messages() {
        let outcome = Outcome::from_failures([
            Failure::new("Name", "'Name' is not in the correct format."),
            Failure::new("Age", "'Age' must be greater than or equal to '0'."),
        ]);
        let result = translate(outcome);

        let pairs: Vec<_> = result
            .errors()
            .iter()
            .map(|e| (e.member_names().to_vec(), e.message("ignored")))
            .collect();
        assert_eq!(
            pairs,
            vec![
                (vec!["Name".to_owned()], "'Name' is not in the correct format.".to_owned()),
                (vec!["Age".to_owned()], "'Age' must be greater than or equal to '0'.".to_owned()),
            ]
        );
    }

    #[test]
    fn validate_translates_outcome() {
        let validator = FluentValidator::new(Canned {
            failures: vec![Failure::new("Name", "bad name")],
            ..Canned::default()
        });
        let result = validator.validate_model(&"bob".to_owned()).unwrap();
        assert!(!result.is_valid());
        assert_eq!(result.errors()[0].default_message(), "bad name");
    }

    #[test]
    fn validate_propagates_rule_set_errors() {
        let validator = FluentValidator::new(Canned::default());
        let err = validator.validate(&()).unwrap_err();
        assert!(matches!(
            err,
            Error::Source(SourceError::IncompatibleInstance { .. })
        ));
    }

    #[test]
    fn custom_rule_keeps_validator() {
        let descriptor = describe(&Canned::default());
        let custom = descriptor.rules_for("Age").next().unwrap();
        let RuleConstraint::Custom { validator } = &custom.constraint else {
            panic!("expected a custom constraint");
        };
        assert!(validator.is::<Opaque>());
    }
}
