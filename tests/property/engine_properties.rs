// Property-based tests for the countdown engine
// Random durations and inputs against the clamp and completion guarantees

use crate::fixtures::{counting_engine, run_seconds};
use flip_countdown::services::countdown::MAX_TOTAL_SECONDS;
use proptest::prelude::*;

proptest! {
    /// Property: set(n) always holds clamp(n, 0, 5999) and leaves the engine idle
    #[test]
    fn prop_set_clamps_and_pauses(n in any::<i64>(), started in any::<bool>()) {
        let (mut engine, _) = counting_engine();
        engine.set(30);
        if started {
            engine.start();
        }

        engine.set(n);
        prop_assert_eq!(i64::from(engine.remaining()), n.clamp(0, i64::from(MAX_TOTAL_SECONDS)));
        prop_assert!(!engine.is_running());
    }

    /// Property: n ticks after set(n) finish the countdown exactly once
    #[test]
    fn prop_run_to_zero_fires_once(n in 1u32..=600) {
        let (mut engine, fired) = counting_engine();
        engine.set(i64::from(n));
        engine.start();

        let outcome = run_seconds(&mut engine, n);
        prop_assert_eq!(outcome.ticks, n);
        prop_assert!(outcome.finished);
        prop_assert_eq!(engine.remaining(), 0);
        prop_assert_eq!(fired.get(), 1);

        run_seconds(&mut engine, 3);
        prop_assert_eq!(fired.get(), 1);
    }

    /// Property: the cards always show floor(t / 60) and t % 60
    #[test]
    fn prop_cards_match_remaining(n in 0i64..=5999, elapsed in 0u32..120) {
        let (mut engine, _) = counting_engine();
        engine.set(n);
        engine.start();
        run_seconds(&mut engine, elapsed);

        let remaining = engine.remaining();
        prop_assert_eq!(
            engine.minutes_display().current_value(),
            format!("{:02}", remaining / 60)
        );
        prop_assert_eq!(
            engine.seconds_display().current_value(),
            format!("{:02}", remaining % 60)
        );
    }

    /// Property: malformed text never panics and loads a clamped value
    #[test]
    fn prop_set_from_input_is_total(text in ".{0,24}") {
        let (mut engine, _) = counting_engine();
        engine.set_from_input(&text);
        prop_assert!(engine.remaining() <= MAX_TOTAL_SECONDS);
    }
}
