//! Interface exposed to the host framework.
//!
//! - [`ModelValidator`]: `validate` + `description`
//! - [`ValidationDescriptor`] / [`ValidationRule`] / [`RuleConstraint`]:
//!   what rules exist
//! - [`ValidationResult`] / [`ValidationError`]: what failed

mod descriptor;
mod result;
mod rule;
mod traits;

pub use descriptor::ValidationDescriptor;
pub use result::{MessageFormatter, ValidationError, ValidationResult};
pub use rule::{RuleConstraint, ValidationRule};
pub use traits::ModelValidator;
