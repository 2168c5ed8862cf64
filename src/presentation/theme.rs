//! Color theme derived from a single accent color.

use coolor::{Hsl, Rgb};
use ratatui::style::{Color, Modifier, Style};
use std::str::FromStr;

const FALLBACK_ACCENT: Color = Color::LightBlue;

/// Colors and styles derived from one accent color.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    /// Focused borders and highlights.
    pub accent: Color,
    /// Dark tint of the accent, used behind key hints and badges.
    pub accent_muted: Color,
    /// Success toasts and the copy indicator.
    pub success: Color,
    /// Warning toasts.
    pub warning: Color,
    /// Error toasts.
    pub error: Color,
    /// Hints, placeholders and unfocused borders.
    pub dimmed_style: Style,
    /// Body text.
    pub text_style: Style,
    /// Pane titles.
    pub title_style: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self::from_color(FALLBACK_ACCENT)
    }
}

impl Theme {
    /// Builds a theme from a color name (`"LightBlue"`) or hex code (`"#3b82f6"`).
    #[must_use]
    pub fn new(accent: &str) -> Self {
        Self::from_color(parse_color(accent))
    }

    /// Builds the palette around an already parsed accent color.
    #[must_use]
    pub fn from_color(accent: Color) -> Self {
        Self {
            accent,
            accent_muted: shade(accent, 0.5, 0.1),
            success: Color::Green,
            warning: Color::Yellow,
            error: Color::Red,
            dimmed_style: Style::default().fg(Color::DarkGray),
            text_style: Style::default().fg(Color::Reset),
            title_style: Style::default().fg(accent).add_modifier(Modifier::BOLD),
        }
    }
}

/// Re-tints `color` with the given HSL saturation and lightness.
fn shade(color: Color, saturation: f32, lightness: f32) -> Color {
    let (r, g, b) = to_rgb(color);
    let mut hsl: Hsl = Rgb::new(r, g, b).to_hsl();
    hsl.s = saturation;
    hsl.l = lightness;
    let rgb: Rgb = hsl.to_rgb();
    Color::Rgb(rgb.r, rgb.g, rgb.b)
}

fn to_rgb(color: Color) -> (u8, u8, u8) {
    match color {
        Color::Rgb(r, g, b) => (r, g, b),
        Color::Black => (0, 0, 0),
        Color::Red => (170, 0, 0),
        Color::Green => (0, 170, 0),
        Color::Yellow => (170, 85, 0),
        Color::Blue => (0, 0, 170),
        Color::Magenta => (170, 0, 170),
        Color::Cyan => (0, 170, 170),
        Color::Gray => (170, 170, 170),
        Color::DarkGray => (85, 85, 85),
        Color::LightRed => (255, 85, 85),
        Color::LightGreen => (85, 255, 85),
        Color::LightYellow => (255, 255, 85),
        Color::LightBlue => (85, 85, 255),
        Color::LightMagenta => (255, 85, 255),
        Color::LightCyan => (85, 255, 255),
        Color::Indexed(i) => indexed_to_rgb(i),
        _ => (255, 255, 255),
    }
}

fn indexed_to_rgb(i: u8) -> (u8, u8, u8) {
    match i {
        0..=15 => to_rgb(ANSI_16[usize::from(i)]),
        16..=231 => {
            let i = i - 16;
            let level = |c: u8| if c == 0 { 0 } else { c * 40 + 55 };
            (level(i / 36), level((i / 6) % 6), level(i % 6))
        }
        _ => {
            let v = (i - 232) * 10 + 8;
            (v, v, v)
        }
    }
}

const ANSI_16: [Color; 16] = [
    Color::Black,
    Color::Red,
    Color::Green,
    Color::Yellow,
    Color::Blue,
    Color::Magenta,
    Color::Cyan,
    Color::Gray,
    Color::DarkGray,
    Color::LightRed,
    Color::LightGreen,
    Color::LightYellow,
    Color::LightBlue,
    Color::LightMagenta,
    Color::LightCyan,
    Color::White,
];

fn parse_color(s: &str) -> Color {
    Color::from_str(s.trim()).unwrap_or(FALLBACK_ACCENT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_color() {
        assert_eq!(parse_color("Red"), Color::Red);
        assert_eq!(parse_color("lightblue"), Color::LightBlue);
        assert_eq!(parse_color("#FF0000"), Color::Rgb(255, 0, 0));
        assert_eq!(parse_color("Invalid"), FALLBACK_ACCENT);
    }

    #[test]
    fn test_muted_accent_is_dark() {
        let theme = Theme::from_color(Color::Rgb(59, 130, 246));
        let Color::Rgb(r, g, b) = theme.accent_muted else {
            panic!("Expected RGB color");
        };
        assert!(r < 60 && g < 60 && b < 60);
    }

    #[test]
    fn test_indexed_cube() {
        assert_eq!(indexed_to_rgb(208), (255, 135, 0));
        assert_eq!(indexed_to_rgb(16), (0, 0, 0));
        assert_eq!(indexed_to_rgb(231), (255, 255, 255));
        assert_eq!(indexed_to_rgb(1), (170, 0, 0));
    }
}
