use contact_core::form::validate;
use contact_core::{AppState, Event, Field, FieldError};
use proptest::prelude::*;
use proptest::test_runner::Config;

fn field_strategy() -> impl Strategy<Value = Field> {
    prop_oneof![
        Just(Field::Name),
        Just(Field::Email),
        Just(Field::Phone),
        Just(Field::Message),
    ]
}

fn value_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        "[ \t]{1,4}",
        "[A-Za-z ]{1,12}",
        "[a-z]{1,6}@[a-z]{1,6}\\.[a-z]{2,3}",
        "[a-z@. ]{1,12}",
        "[0-9+\\- ]{8,17}",
        "[0-9a-z()]{10,12}",
    ]
}

proptest! {
    #![proptest_config(Config::with_cases(256))]

    #[test]
    fn blank_names_are_required(blank in "[ \t\n]*") {
        prop_assert_eq!(validate(Field::Name, &blank), Some(FieldError::NameRequired));
    }

    #[test]
    fn well_formed_emails_pass(local in "[a-z0-9._+-]{1,10}", host in "[a-z0-9-]{1,10}", tld in "[a-z]{2,6}") {
        let email = format!("{local}@{host}.{tld}");
        prop_assert_eq!(validate(Field::Email, &email), None);
    }

    #[test]
    fn emails_without_a_dotted_domain_fail(local in "[a-z0-9]{1,10}", host in "[a-z0-9]{1,10}") {
        let email = format!("{local}@{host}");
        prop_assert_eq!(validate(Field::Email, &email), Some(FieldError::InvalidEmail));
    }

    #[test]
    fn emails_with_spaces_fail(head in "[a-z]{1,5}", tail in "[a-z]{1,5}") {
        let email = format!("{head} {tail}@x.io");
        prop_assert_eq!(validate(Field::Email, &email), Some(FieldError::InvalidEmail));
    }

    #[test]
    fn phone_length_outside_range_fails(digits in "[0-9]{1,9}|[0-9]{16,24}") {
        prop_assert_eq!(validate(Field::Phone, &digits), Some(FieldError::InvalidPhone));
    }

    #[test]
    fn phone_with_foreign_characters_fails(prefix in "[0-9]{5}", bad in "[a-z().#]", suffix in "[0-9]{5}") {
        let phone = format!("{prefix}{bad}{suffix}");
        prop_assert_eq!(validate(Field::Phone, &phone), Some(FieldError::InvalidPhone));
    }

    #[test]
    fn phone_in_range_passes(phone in "[0-9][0-9+\\- ]{8,13}[0-9]") {
        prop_assert_eq!(validate(Field::Phone, &phone), None);
    }

    #[test]
    fn submit_enablement_matches_latest_edits(
        edits in proptest::collection::vec((field_strategy(), value_strategy()), 0..24)
    ) {
        let mut state = AppState::default();
        let mut latest: [Option<String>; 3] = Default::default();
        for (field, value) in edits {
            state.apply(Event::FieldEdited(field, value.clone()));
            let slot = match field {
                Field::Name => 0,
                Field::Email => 1,
                Field::Phone => 2,
                Field::Message => continue,
            };
            latest[slot] = Some(value);
        }

        let expected = [Field::Name, Field::Email, Field::Phone]
            .into_iter()
            .zip(latest.iter())
            .all(|(field, value)| match value {
                Some(v) => !v.is_empty() && validate(field, v).is_none(),
                None => false,
            });
        prop_assert_eq!(state.can_submit(), expected);
    }
}
