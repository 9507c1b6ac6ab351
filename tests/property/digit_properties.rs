// Property-based tests for the flip digit display

use flip_countdown::services::countdown::{two_digits, DigitDisplay};
use proptest::prelude::*;

proptest! {
    /// Property: transitions happen exactly when the formatted value changes
    #[test]
    fn prop_generation_counts_changes(values in prop::collection::vec(0i64..100, 0..50)) {
        let mut display = DigitDisplay::new("SEC", 0);
        let mut expected = 0u64;
        let mut shown = "00".to_string();

        for value in values {
            let next = two_digits(value);
            let flipped = display.update(value);
            prop_assert_eq!(flipped, next != shown);
            if flipped {
                expected += 1;
                prop_assert_eq!(display.previous_value(), Some(shown.as_str()));
                shown = next;
            }
        }

        prop_assert_eq!(display.generation(), expected);
        prop_assert_eq!(display.current_value(), shown.as_str());
    }

    /// Property: any integer formats to exactly two digits
    #[test]
    fn prop_two_digits_always_two_chars(value in any::<i64>()) {
        let text = two_digits(value);
        prop_assert_eq!(text.len(), 2);
        prop_assert!(text.chars().all(|c| c.is_ascii_digit()));
    }
}
