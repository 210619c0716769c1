// Helper utilities for tab components
use std::str::FromStr;

use ratatui::style::Color;

/// Convert hex color to ratatui Color
pub const fn hex_color(hex: u32) -> Color {
    Color::Rgb(
        ((hex >> 16) & 0xFF) as u8,
        ((hex >> 8) & 0xFF) as u8,
        (hex & 0xFF) as u8,
    )
}

/// Parse a color string from configuration.
///
/// Accepts `#RRGGBB`, `#RGB`, named colors ("cyan", "light-blue", ...), palette
/// indices ("42") and "transparent", which maps to the terminal default.
pub fn parse_color(value: &str) -> Option<Color> {
    let value = value.trim();
    if value.eq_ignore_ascii_case("transparent") {
        return Some(Color::Reset);
    }

    if let Some(short) = value.strip_prefix('#').filter(|hex| hex.len() == 3) {
        let expanded: String = short.chars().flat_map(|c| [c, c]).collect();
        return u32::from_str_radix(&expanded, 16).ok().map(hex_color);
    }

    Color::from_str(value).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_color() {
        assert_eq!(hex_color(0x007AFF), Color::Rgb(0x00, 0x7A, 0xFF));
    }

    #[test]
    fn test_parse_color_forms() {
        assert_eq!(parse_color("#007AFF"), Some(Color::Rgb(0x00, 0x7A, 0xFF)));
        assert_eq!(parse_color("#fff"), Some(Color::Rgb(0xFF, 0xFF, 0xFF)));
        assert_eq!(parse_color("cyan"), Some(Color::Cyan));
        assert_eq!(parse_color("transparent"), Some(Color::Reset));
        assert_eq!(parse_color("#12"), None);
        assert_eq!(parse_color("not-a-color"), None);
    }
}
