//! Color name and hex parsing helpers.
//!
//! Used by the configuration file and the gesture script, which both accept
//! colors as palette names (`"red"`) or hex strings (`"#ff8000"`).

use crate::draw::{Color, color::*};

/// Maps color name strings to Color values.
///
/// # Supported Names (case-insensitive)
/// - "red", "green", "blue", "yellow", "orange", "pink", "white", "black", "transparent"
pub fn name_to_color(name: &str) -> Option<Color> {
    match name.to_lowercase().as_str() {
        "red" => Some(RED),
        "green" => Some(GREEN),
        "blue" => Some(BLUE),
        "yellow" => Some(YELLOW),
        "orange" => Some(ORANGE),
        "pink" => Some(PINK),
        "white" => Some(WHITE),
        "black" => Some(BLACK),
        "transparent" => Some(TRANSPARENT),
        _ => None,
    }
}

/// Parses `#rrggbb` or `#rrggbbaa` into a color.
pub fn hex_to_color(hex: &str) -> Option<Color> {
    let digits = hex.strip_prefix('#')?;
    if !digits.is_ascii() || !matches!(digits.len(), 6 | 8) {
        return None;
    }

    let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
    let (r, g, b) = (channel(0)?, channel(2)?, channel(4)?);
    let a = if digits.len() == 8 { channel(6)? } else { 255 };

    Some(Color::from_rgb8(r, g, b).with_alpha(a as f64 / 255.0))
}

/// Parses a palette name or a hex string.
pub fn parse_color(spec: &str) -> Option<Color> {
    let spec = spec.trim();
    if spec.starts_with('#') {
        hex_to_color(spec)
    } else {
        name_to_color(spec)
    }
}

/// Maps a Color value to its human-readable name.
///
/// Uses approximate matching (threshold-based) to identify colors; anything
/// outside the palette is reported as "Custom".
pub fn color_to_name(color: &Color) -> &'static str {
    if color.a < 0.01 {
        "Transparent"
    } else if color.r > 0.9 && color.g < 0.1 && color.b < 0.1 {
        "Red"
    } else if color.r < 0.1 && color.g > 0.9 && color.b < 0.1 {
        "Green"
    } else if color.r < 0.1 && color.g < 0.1 && color.b > 0.9 {
        "Blue"
    } else if color.r > 0.9 && color.g > 0.9 && color.b < 0.1 {
        "Yellow"
    } else if color.r > 0.9 && (0.4..=0.6).contains(&color.g) && color.b < 0.1 {
        "Orange"
    } else if color.r > 0.9 && color.g < 0.1 && color.b > 0.9 {
        "Pink"
    } else if color.r > 0.9 && color.g > 0.9 && color.b > 0.9 {
        "White"
    } else if color.r < 0.1 && color.g < 0.1 && color.b < 0.1 {
        "Black"
    } else {
        "Custom"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_mappings() {
        assert_eq!(name_to_color("white").unwrap(), WHITE);
        assert_eq!(name_to_color("BLACK").unwrap(), BLACK);
        assert!(name_to_color("chartreuse").is_none());
    }

    #[test]
    fn hex_parsing() {
        assert_eq!(hex_to_color("#ff0000").unwrap(), RED);
        let translucent = hex_to_color("#0000ff80").unwrap();
        assert_eq!(translucent.b, 1.0);
        assert!((translucent.a - 128.0 / 255.0).abs() < 1e-9);
        assert!(hex_to_color("ff0000").is_none());
        assert!(hex_to_color("#ff00").is_none());
        assert!(hex_to_color("#gg0000").is_none());
    }

    #[test]
    fn parse_color_accepts_names_and_hex() {
        assert_eq!(parse_color(" orange ").unwrap(), ORANGE);
        assert_eq!(parse_color("#ffffff").unwrap(), WHITE);
        assert!(parse_color("").is_none());
    }

    #[test]
    fn color_to_name_matches_known_colors() {
        assert_eq!(color_to_name(&RED), "Red");
        assert_eq!(color_to_name(&BLACK), "Black");
        assert_eq!(color_to_name(&TRANSPARENT), "Transparent");
        assert_eq!(color_to_name(&Color::new(0.42, 0.42, 0.42, 1.0)), "Custom");
    }
}
