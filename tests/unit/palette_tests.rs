#[cfg(test)]
mod tests {
    use flip_countdown::services::palette::{shade, to_hex, PalettePreset};
    use test_case::test_case;

    #[test_case("#abc", "#aabbcc"; "short hex expands")]
    #[test_case("#2b1e11", "#2b1e11"; "long hex passes through")]
    #[test_case("rgb(255, 0, 16)", "#ff0010"; "rgb function")]
    #[test_case("rgba(1,2,3,0.5)", "#010203"; "rgba ignores alpha")]
    #[test_case("tomato", "#222222"; "named colour falls back")]
    #[test_case("", "#222222"; "empty falls back")]
    fn test_to_hex(input: &str, expected: &str) {
        assert_eq!(to_hex(input), expected);
    }

    #[test_case("#000000", 10, "#1a1a1a"; "lighten black")]
    #[test_case("#ffffff", -14, "#dbdbdb"; "face bottom shade")]
    #[test_case("#808080", 0, "#808080"; "zero is identity")]
    #[test_case("#f00", -100, "#000000"; "short hex clamps to black")]
    fn test_shade(hex: &str, percent: i32, expected: &str) {
        assert_eq!(shade(hex, percent), expected);
    }

    #[test_case(PalettePreset::Tangerine, "#2b1e11", "#fffef8"; "tangerine")]
    #[test_case(PalettePreset::Juice, "#183028", "#e8fff9"; "juice")]
    #[test_case(PalettePreset::Indigo, "#1f1b3a", "#f1efff"; "indigo")]
    #[test_case(PalettePreset::Mint, "#10332f", "#eafff8"; "mint")]
    #[test_case(PalettePreset::Tomato, "#2c0f0f", "#ffecec"; "tomato")]
    fn test_preset_colours(preset: PalettePreset, face: &str, digit: &str) {
        let palette = preset.palette();
        assert_eq!(palette.face.to_hex(), face);
        assert_eq!(palette.digit.to_hex(), digit);
        assert_eq!(PalettePreset::from_name(preset.name()), preset);
    }
}
