use address_book::{Phone, ValidationError};
use proptest::prelude::*;

proptest! {
    #[test]
    fn ten_digit_strings_are_accepted_and_preserved(s in "[0-9]{10}") {
        let phone = Phone::new(s.clone()).unwrap();
        prop_assert_eq!(phone.as_str(), s.as_str());
        prop_assert_eq!(phone.to_string(), s);
    }

    #[test]
    fn wrong_length_digit_strings_are_rejected(s in "[0-9]{0,9}|[0-9]{11,20}") {
        prop_assert_eq!(
            Phone::new(s.clone()),
            Err(ValidationError::InvalidPhone(s))
        );
    }

    #[test]
    fn strings_with_a_non_digit_are_rejected(
        prefix in "[0-9]{0,9}",
        bad in "[^0-9]",
        suffix in "[0-9]{0,9}",
    ) {
        let s = format!("{prefix}{bad}{suffix}");
        prop_assert!(!Phone::validate(&s));
        prop_assert!(Phone::new(s).is_err());
    }
}
