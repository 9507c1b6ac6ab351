#[cfg(test)]
mod tests {
    use flip_countdown::services::countdown::{clamp_inputs, parse_int_lenient};
    use test_case::test_case;

    #[test_case("25", 25; "plain")]
    #[test_case("007", 7; "leading zeros")]
    #[test_case("4min", 4; "trailing text")]
    #[test_case("  -3", -3; "negative with spaces")]
    #[test_case("x9", 0; "no leading digits")]
    fn test_parse_int_lenient(input: &str, expected: i64) {
        assert_eq!(parse_int_lenient(input), expected);
    }

    #[test_case("1", "5", 65, "1", "05"; "one minute five")]
    #[test_case("", "", 0, "0", "00"; "empty fields")]
    #[test_case("120", "90", 5999, "99", "59"; "both clamped")]
    #[test_case("-1", "-1", 0, "0", "00"; "negatives")]
    fn test_clamp_inputs(min: &str, sec: &str, total: u32, min_text: &str, sec_text: &str) {
        let inputs = clamp_inputs(min, sec);
        assert_eq!(inputs.total_seconds(), total);
        assert_eq!(inputs.minutes_text(), min_text);
        assert_eq!(inputs.seconds_text(), sec_text);
    }
}
