//! Integration tests for length and color values.

use notch_css::{ColorValue, LengthUnit, LengthValue, ValueError, parse_length, sanitize_tokens};

#[test]
fn test_sanitize_drops_empty_tokens() {
    assert_eq!(sanitize_tokens("  10px   5px "), vec!["10px", "5px"]);
}

#[test]
fn test_sanitize_splits_on_any_whitespace() {
    assert_eq!(sanitize_tokens("10px\t5px\n2px"), vec!["10px", "5px", "2px"]);
}

#[test]
fn test_sanitize_empty_input() {
    assert!(sanitize_tokens("   ").is_empty());
}

#[test]
fn test_parse_length_px() {
    let len = parse_length("10px").unwrap();
    assert_eq!(len, LengthValue::px(10.0));
}

#[test]
fn test_parse_length_keeps_percentage_magnitude() {
    let len = parse_length("50%").unwrap();
    assert_eq!(len.unit, LengthUnit::Percent);
    assert_eq!(len.value, 50.0);
}

#[test]
fn test_parse_length_all_units() {
    for (token, unit) in [
        ("1em", LengthUnit::Em),
        ("1rem", LengthUnit::Rem),
        ("1vw", LengthUnit::Vw),
        ("1vmax", LengthUnit::Vmax),
        ("1cm", LengthUnit::Cm),
        ("1in", LengthUnit::In),
        ("1Q", LengthUnit::Q),
    ] {
        assert_eq!(parse_length(token).unwrap().unit, unit, "token {token}");
    }
}

#[test]
fn test_parse_length_requires_unit() {
    assert_eq!(
        parse_length("10"),
        Err(ValueError::InvalidLength("10".to_string()))
    );
}

#[test]
fn test_parse_length_requires_magnitude() {
    assert_eq!(
        parse_length("px"),
        Err(ValueError::InvalidLength("px".to_string()))
    );
}

#[test]
fn test_parse_length_rejects_fraction() {
    // The digit run stops at '.', leaving ".5px" as the unit.
    assert_eq!(
        parse_length("1.5px"),
        Err(ValueError::UnknownUnit {
            token: "1.5px".to_string(),
            unit: ".5px".to_string(),
        })
    );
}

#[test]
fn test_parse_length_rejects_sign() {
    assert!(matches!(
        parse_length("-4px"),
        Err(ValueError::InvalidLength(_))
    ));
}

#[test]
fn test_parse_length_rejects_unknown_unit() {
    assert!(matches!(
        parse_length("10foo"),
        Err(ValueError::UnknownUnit { .. })
    ));
}

#[test]
fn test_length_from_str() {
    let len: LengthValue = "7pt".parse().unwrap();
    assert_eq!(len, LengthValue::new(7.0, LengthUnit::Pt));
}

#[test]
fn test_color_from_hex_6() {
    assert_eq!(
        ColorValue::parse("#ff0000"),
        Some(ColorValue::rgba(255, 0, 0, 255))
    );
}

#[test]
fn test_color_from_hex_3() {
    assert_eq!(
        ColorValue::parse("#f00"),
        Some(ColorValue::rgba(255, 0, 0, 255))
    );
}

#[test]
fn test_color_from_hex_8() {
    assert_eq!(
        ColorValue::parse("#00ff0080"),
        Some(ColorValue::rgba(0, 255, 0, 128))
    );
}

#[test]
fn test_color_from_hex_invalid() {
    assert_eq!(ColorValue::parse("#ggg"), None);
    assert_eq!(ColorValue::parse("#12345"), None);
}

#[test]
fn test_color_named_case_insensitive() {
    assert_eq!(
        ColorValue::parse("  RebeccaPurple "),
        None,
        "extended keywords are not supported"
    );
    assert_eq!(
        ColorValue::parse("Navy"),
        Some(ColorValue::rgba(0, 0, 128, 255))
    );
    assert_eq!(ColorValue::parse("transparent"), Some(ColorValue::TRANSPARENT));
}

#[test]
fn test_color_rgb_legacy_syntax() {
    assert_eq!(
        ColorValue::parse("rgb(255, 128, 0)"),
        Some(ColorValue::rgba(255, 128, 0, 255))
    );
}

#[test]
fn test_color_rgba_with_alpha() {
    assert_eq!(
        ColorValue::parse("rgba(0, 0, 255, 0.5)"),
        Some(ColorValue::rgba(0, 0, 255, 128))
    );
}

#[test]
fn test_color_rgb_modern_syntax() {
    assert_eq!(
        ColorValue::parse("rgb(100% 0% 0% / 50%)"),
        Some(ColorValue::rgba(255, 0, 0, 128))
    );
}

#[test]
fn test_color_rgb_clamps_channels() {
    assert_eq!(
        ColorValue::parse("rgb(300, -20, 0)"),
        Some(ColorValue::rgba(255, 0, 0, 255))
    );
}

#[test]
fn test_color_hsl() {
    assert_eq!(
        ColorValue::parse("hsl(120, 100%, 50%)"),
        Some(ColorValue::rgba(0, 255, 0, 255))
    );
    assert_eq!(
        ColorValue::parse("hsl(240deg 100% 50%)"),
        Some(ColorValue::rgba(0, 0, 255, 255))
    );
}

#[test]
fn test_color_function_errors() {
    assert_eq!(ColorValue::parse("rgb(1, 2)"), None);
    assert_eq!(ColorValue::parse("rgb(1, 2, 3"), None);
    assert_eq!(ColorValue::parse("lab(50% 20 30)"), None);
    assert_eq!(ColorValue::parse("rgb(a, b, c)"), None);
}

#[test]
fn test_color_to_hex_string() {
    assert_eq!(ColorValue::rgba(255, 165, 0, 255).to_hex_string(), "#ffa500");
    assert_eq!(ColorValue::rgba(0, 0, 0, 0).to_hex_string(), "#00000000");
}
