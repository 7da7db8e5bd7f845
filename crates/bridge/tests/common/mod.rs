//! Fixture rule sets shared by the integration tests.
//!
//! These stand in for the wrapped rule-set library: a handful of property
//! validators that actually check values, and rule sets built from them.

#![allow(dead_code)]

use fluent_bridge::prelude::*;
use regex::Regex;
use serde_json::{Value, json};

// ============================================================================
// PROPERTY VALIDATORS
// ============================================================================

#[derive(Debug)]
pub struct Matches {
    regex: Regex,
}

impl Matches {
    pub fn new(pattern: &str) -> Self {
        Self {
            regex: Regex::new(pattern).expect("fixture pattern compiles"),
        }
    }

    pub fn is_match(&self, value: &str) -> bool {
        self.regex.is_match(value)
    }
}

impl PropertyValidator for Matches {
    fn kind(&self) -> ValidatorKind<'_> {
        ValidatorKind::RegularExpression {
            pattern: self.regex.as_str(),
        }
    }

    fn name(&self) -> &str {
        "Matches"
    }
}

/// Checked by the rule set, unknown to the bridge.
#[derive(Debug)]
pub struct NonNegative;

impl PropertyValidator for NonNegative {
    fn kind(&self) -> ValidatorKind<'_> {
        ValidatorKind::Unrecognized
    }

    fn name(&self) -> &str {
        "NonNegative"
    }
}

/// Describes itself only; used to build descriptors covering every kind.
#[derive(Debug)]
pub enum Declared {
    Required,
    NonBlank,
    Mail,
    Len(usize, Option<usize>),
    Exact(usize),
    Compare(ComparisonOperator, Value),
    Range(Value, Value, bool),
}

impl PropertyValidator for Declared {
    fn kind(&self) -> ValidatorKind<'_> {
        match self {
            Self::Required => ValidatorKind::NotNull,
            Self::NonBlank => ValidatorKind::NotEmpty,
            Self::Mail => ValidatorKind::Email,
            Self::Len(min, max) => ValidatorKind::Length {
                min: *min,
                max: *max,
            },
            Self::Exact(length) => ValidatorKind::ExactLength { length: *length },
            Self::Compare(operator, value) => ValidatorKind::Comparison {
                operator: *operator,
                value,
            },
            Self::Range(from, to, inclusive) => ValidatorKind::Between {
                from,
                to,
                inclusive: *inclusive,
            },
        }
    }
}

// ============================================================================
// PERSON
// ============================================================================

#[derive(Debug, Clone)]
pub struct Person {
    pub name: String,
    pub age: i32,
}

impl Person {
    pub fn new(name: &str, age: i32) -> Self {
        Self {
            name: name.to_owned(),
            age,
        }
    }
}

/// `Name` must match `^[A-Z]`, `Age` must be non-negative.
pub struct PersonRules {
    name: std::sync::Arc<Matches>,
}

impl Default for PersonRules {
    fn default() -> Self {
        Self {
            name: std::sync::Arc::new(Matches::new("^[A-Z]")),
        }
    }
}

pub const NAME_MESSAGE: &str = "'Name' is not in the correct format.";
pub const AGE_MESSAGE: &str = "'Age' must not be negative.";

impl TypedRuleSet for PersonRules {
    type Model = Person;

    fn validate_model(&self, person: &Person) -> Outcome {
        let mut outcome = Outcome::success();
        if !self.name.is_match(&person.name) {
            outcome.push(Failure::new("Name", NAME_MESSAGE));
        }
        if person.age < 0 {
            outcome.push(Failure::new("Age", AGE_MESSAGE));
        }
        outcome
    }

    fn members(&self) -> MemberValidators {
        let mut members = MemberValidators::new();
        members.push("Name", self.name.clone());
        members.push("Age", std::sync::Arc::new(NonNegative));
        members
    }
}

// ============================================================================
// ACCOUNT: one member per known kind
// ============================================================================

pub struct Account;

pub struct AccountRules;

impl TypedRuleSet for AccountRules {
    type Model = Account;

    fn validate_model(&self, _account: &Account) -> Outcome {
        Outcome::success()
    }

    fn members(&self) -> MemberValidators {
        MemberValidators::new()
            .with("Id", Declared::Required)
            .with("Username", Declared::NonBlank)
            .with("Username", Declared::Len(3, Some(20)))
            .with("Username", Matches::new(r"^[a-z0-9_]+$"))
            .with("Email", Declared::Mail)
            .with("Pin", Declared::Exact(4))
            .with(
                "Age",
                Declared::Compare(ComparisonOperator::GreaterThanOrEqual, json!(18)),
            )
            .with("Score", Declared::Range(json!(0), json!(100), true))
            .with("Referrer", NonNegative)
    }
}
