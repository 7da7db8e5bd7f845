//! # fluent-bridge
//!
//! Adapts rule-set validators (a member-by-member list of property
//! validators) to the model-validation abstraction consumed by the host:
//! a [`ModelValidator`](model::ModelValidator) exposing `validate` and
//! `description`.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use fluent_bridge::prelude::*;
//!
//! let validator = FluentValidator::new(PersonRules::default());
//!
//! // Which rules exist, independent of any instance.
//! for rule in validator.description().rules() {
//!     println!("{} -> {:?}", rule.rule_type, rule.member_names());
//! }
//!
//! // Validate an instance and read uniform errors back.
//! let result = validator.validate(&person)?;
//! if !result.is_valid() {
//!     for error in result.errors() {
//!         println!("{error}");
//!     }
//! }
//! ```
//!
//! ## Layout
//!
//! - [`source`]: the interface consumed from the rule-set library
//!   ([`RuleSet`](source::RuleSet), [`PropertyValidator`](source::PropertyValidator),
//!   [`ValidatorKind`](source::ValidatorKind)).
//! - [`model`]: the interface exposed to the host (descriptors, rules, errors).
//! - [`adapters`]: one adapter per known validator kind, plus the dispatch table.
//! - [`bridge`]: the descriptor builder, the result translator and the facade.
//! - [`factory`]: an immutable model-type to validator registry.

pub mod adapters;
pub mod bridge;
mod error;
pub mod factory;
pub mod model;
pub mod prelude;
pub mod source;

pub use bridge::FluentValidator;
pub use error::{Error, Result, SourceError};
