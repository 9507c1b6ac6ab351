//! Coercion of user-typed minute/second text into a countdown duration.

use crate::models::settings::{MAX_INPUT_MINUTES, MAX_INPUT_SECONDS};

/// Parse the leading integer of `text`.
///
/// Leading whitespace and a single sign are accepted, parsing stops at the
/// first non-digit, and overflow saturates. Text without leading digits
/// yields 0.
pub fn parse_int_lenient(text: &str) -> i64 {
    let trimmed = text.trim_start();
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let mut value: i64 = 0;
    for byte in digits.bytes().take_while(u8::is_ascii_digit) {
        let digit = i64::from(byte - b'0');
        value = value.saturating_mul(10).saturating_add(digit);
    }

    if negative {
        -value
    } else {
        value
    }
}

/// Minute and second inputs after clamping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClampedInputs {
    pub minutes: u32,
    pub seconds: u32,
}

impl ClampedInputs {
    pub fn total_seconds(&self) -> u32 {
        self.minutes * 60 + self.seconds
    }

    /// Text to write back into the minutes field.
    pub fn minutes_text(&self) -> String {
        self.minutes.to_string()
    }

    /// Text to write back into the seconds field, always two digits.
    pub fn seconds_text(&self) -> String {
        format!("{:02}", self.seconds)
    }
}

/// Clamp minutes into 0..=99 and seconds into 0..=59.
pub fn clamp_inputs(minutes: &str, seconds: &str) -> ClampedInputs {
    let clamp = |text: &str, max: u32| -> u32 {
        // In range after the clamp, so the cast is lossless.
        parse_int_lenient(text).clamp(0, i64::from(max)) as u32
    };

    ClampedInputs {
        minutes: clamp(minutes, MAX_INPUT_MINUTES),
        seconds: clamp(seconds, MAX_INPUT_SECONDS),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_numbers() {
        assert_eq!(parse_int_lenient("42"), 42);
        assert_eq!(parse_int_lenient("  7"), 7);
        assert_eq!(parse_int_lenient("-15"), -15);
        assert_eq!(parse_int_lenient("+3"), 3);
    }

    #[test]
    fn stops_at_first_non_digit() {
        assert_eq!(parse_int_lenient("12abc"), 12);
        assert_eq!(parse_int_lenient("3.9"), 3);
    }

    #[test]
    fn malformed_text_is_zero() {
        assert_eq!(parse_int_lenient(""), 0);
        assert_eq!(parse_int_lenient("abc"), 0);
        assert_eq!(parse_int_lenient("-"), 0);
        assert_eq!(parse_int_lenient("ß12"), 0);
    }

    #[test]
    fn overflow_saturates() {
        assert_eq!(parse_int_lenient("99999999999999999999999"), i64::MAX);
    }

    #[test]
    fn clamp_inputs_bounds_both_fields() {
        let inputs = clamp_inputs("150", "75");
        assert_eq!(inputs, ClampedInputs { minutes: 99, seconds: 59 });
        assert_eq!(inputs.total_seconds(), 5999);

        let inputs = clamp_inputs("-4", "");
        assert_eq!(inputs.total_seconds(), 0);
    }

    #[test]
    fn clamped_text_is_normalized() {
        let inputs = clamp_inputs("05", "7");
        assert_eq!(inputs.minutes_text(), "5");
        assert_eq!(inputs.seconds_text(), "07");
    }
}
