//! Property-based tests for descriptor building and result translation.

use fluent_bridge::bridge::{describe, translate};
use fluent_bridge::prelude::*;
use proptest::prelude::*;
use std::any::Any;

#[derive(Debug)]
struct Tagged(u8);

impl PropertyValidator for Tagged {
    fn kind(&self) -> ValidatorKind<'_> {
        match self.0 % 4 {
            0 => ValidatorKind::NotNull,
            1 => ValidatorKind::NotEmpty,
            2 => ValidatorKind::Email,
            _ => ValidatorKind::Unrecognized,
        }
    }
}

fn expected_type(tag: u8) -> &'static str {
    match tag % 4 {
        0 => "NotNull",
        1 => "NotEmpty",
        2 => "Email",
        _ => "Custom",
    }
}

struct Declared(Vec<(String, u8)>);

impl RuleSet for Declared {
    fn validate(&self, _instance: &dyn Any) -> Result<Outcome, SourceError> {
        Ok(Outcome::success())
    }

    fn create_descriptor(&self) -> MemberValidators {
        self.0
            .iter()
            .map(|(member, tag)| {
                let validator: SharedValidator = std::sync::Arc::new(Tagged(*tag));
                (member.clone(), validator)
            })
            .collect()
    }
}

fn member() -> impl Strategy<Value = String> {
    "[A-E]"
}

proptest! {
    #[test]
    fn translate_preserves_count_and_order(
        failures in prop::collection::vec(("[A-Za-z]{1,8}", "[ -~]{0,24}"), 0..16)
    ) {
        let outcome: Outcome = failures
            .iter()
            .map(|(property, message)| Failure::new(property.as_str(), message.as_str()))
            .collect();
        let result = translate(outcome);

        prop_assert_eq!(result.is_valid(), failures.is_empty());
        prop_assert_eq!(result.error_count(), failures.len());
        for (error, (property, message)) in result.errors().iter().zip(&failures) {
            prop_assert_eq!(error.member_names(), std::slice::from_ref(property));
            prop_assert_eq!(&error.message("any"), message);
        }
    }

    #[test]
    fn describe_emits_one_rule_per_pair(
        pairs in prop::collection::vec((member(), any::<u8>()), 0..24)
    ) {
        let rule_set = Declared(pairs.clone());
        let members = rule_set.create_descriptor();
        let descriptor = describe(&rule_set);

        prop_assert_eq!(descriptor.len(), pairs.len());

        // Pairs come back grouped by member in first-seen order.
        let expected: Vec<_> = members.pairs().map(|(member, _)| member.to_owned()).collect();
        let actual: Vec<_> = descriptor
            .iter()
            .map(|rule| rule.member_names()[0].clone())
            .collect();
        prop_assert_eq!(actual, expected);
    }

    #[test]
    fn describe_picks_adapter_by_kind(tag in any::<u8>()) {
        let rule_set = Declared(vec![("Field".to_owned(), tag)]);
        let descriptor = describe(&rule_set);

        prop_assert_eq!(descriptor.len(), 1);
        prop_assert_eq!(&*descriptor.rules()[0].rule_type, expected_type(tag));
    }

    #[test]
    fn describe_is_deterministic(
        pairs in prop::collection::vec((member(), any::<u8>()), 0..12)
    ) {
        let rule_set = Declared(pairs);
        prop_assert_eq!(describe(&rule_set), describe(&rule_set));
    }
}
