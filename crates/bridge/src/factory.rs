//! Validator factory: model type to validator.
//!
//! Hosts look validators up by the type of the model they are about to
//! validate. The factory is assembled once through
//! [`ValidatorFactoryBuilder`] and is read-only afterwards, so it can be
//! shared across threads behind an `Arc` without locking.
//!
//! # Examples
//!
//! ```rust,ignore
//! use fluent_bridge::factory::ValidatorFactory;
//!
//! let factory = ValidatorFactory::builder()
//!     .register(PersonRules::default())
//!     .build();
//!
//! let result = factory.validate(&person)?;
//! ```

use crate::bridge::FluentValidator;
use crate::error::Error;
use crate::model::{ModelValidator, ValidationResult};
use crate::source::TypedRuleSet;
use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

#[derive(Clone)]
struct Registration {
    model: &'static str,
    validator: Arc<dyn ModelValidator>,
}

// ============================================================================
// VALIDATOR FACTORY
// ============================================================================

/// Immutable registry of validators keyed by model type.
#[derive(Clone, Default)]
pub struct ValidatorFactory {
    validators: HashMap<TypeId, Registration>,
}

impl ValidatorFactory {
    /// Starts building a factory.
    #[must_use]
    pub fn builder() -> ValidatorFactoryBuilder {
        ValidatorFactoryBuilder::default()
    }

    /// Returns the validator registered for `T`.
    #[must_use]
    pub fn create<T: Any>(&self) -> Option<Arc<dyn ModelValidator>> {
        self.create_for(TypeId::of::<T>())
    }

    /// Returns the validator registered for the model with `type_id`.
    #[must_use]
    pub fn create_for(&self, type_id: TypeId) -> Option<Arc<dyn ModelValidator>> {
        self.validators
            .get(&type_id)
            .map(|registration| Arc::clone(&registration.validator))
    }

    /// Returns `true` if a validator is registered for `T`.
    #[must_use]
    pub fn contains<T: Any>(&self) -> bool {
        self.validators.contains_key(&TypeId::of::<T>())
    }

    /// Validates `model` with its registered validator.
    ///
    /// Models without a registered validator are valid.
    pub fn validate<T: Any>(&self, model: &T) -> Result<ValidationResult, Error> {
        match self.create::<T>() {
            Some(validator) => validator.validate(model),
            None => {
                tracing::trace!(
                    model = std::any::type_name::<T>(),
                    "no validator registered, treating model as valid"
                );
                Ok(ValidationResult::valid())
            }
        }
    }

    /// Number of registered models.
    #[must_use]
    pub fn len(&self) -> usize {
        self.validators.len()
    }

    /// Returns `true` if nothing is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.validators.is_empty()
    }
}

impl fmt::Debug for ValidatorFactory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut models: Vec<_> = self.validators.values().map(|r| r.model).collect();
        models.sort_unstable();
        f.debug_struct("ValidatorFactory")
            .field("models", &models)
            .finish()
    }
}

// ============================================================================
// BUILDER
// ============================================================================

/// Builder for [`ValidatorFactory`].
#[derive(Default)]
pub struct ValidatorFactoryBuilder {
    validators: HashMap<TypeId, Registration>,
}

impl ValidatorFactoryBuilder {
    /// Registers `rule_set` for its model type.
    #[must_use = "builder methods must be chained or built"]
    pub fn register<R>(self, rule_set: R) -> Self
    where
        R: TypedRuleSet + 'static,
    {
        self.register_validator::<R::Model>(Arc::new(FluentValidator::new(rule_set)))
    }

    /// Registers an arbitrary validator for model type `T`.
    ///
    /// A later registration for the same model replaces the earlier one.
    #[must_use = "builder methods must be chained or built"]
    pub fn register_validator<T: Any>(mut self, validator: Arc<dyn ModelValidator>) -> Self {
        let model = std::any::type_name::<T>();
        let replaced = self
            .validators
            .insert(TypeId::of::<T>(), Registration { model, validator });
        if replaced.is_some() {
            tracing::warn!(model, "replacing previously registered validator");
        }
        self
    }

    /// Finishes the factory.
    #[must_use]
    pub fn build(self) -> ValidatorFactory {
        tracing::debug!(models = self.validators.len(), "validator factory built");
        ValidatorFactory {
            validators: self.validators,
        }
    }
}
