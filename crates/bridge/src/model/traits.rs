//! The validator contract the host framework consumes.

use crate::error::Error;
use crate::model::{ValidationDescriptor, ValidationResult};
use std::any::Any;

/// A validator for one model type, as seen by the host framework.
///
/// # Examples
///
/// ```rust,ignore
/// use fluent_bridge::model::ModelValidator;
///
/// fn check(validator: &dyn ModelValidator, model: &dyn std::any::Any) -> bool {
///     validator.validate(model).map(|r| r.is_valid()).unwrap_or(false)
/// }
/// ```
pub trait ModelValidator: Send + Sync {
    /// Describes the rules this validator applies.
    fn description(&self) -> ValidationDescriptor;

    /// Validates `instance`.
    ///
    /// Validation failures are reported in the returned
    /// [`ValidationResult`]; `Err` means the validator itself could not run.
    fn validate(&self, instance: &dyn Any) -> Result<ValidationResult, Error>;
}
