//! Terminal color theme.

use ratatui::style::{Color, Modifier, Style};
use std::str::FromStr;

const DEFAULT_ACCENT: Color = Color::Cyan;

/// Derived styles for the detail screen.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    /// Accent color driving the chrome and headings.
    pub accent: Color,
    /// Title bar style.
    pub chrome_style: Style,
    /// Section heading style.
    pub heading_style: Style,
    /// Section body style.
    pub body_style: Style,
    /// De-emphasized text, e.g. the version tag.
    pub dimmed_style: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self::from_color(DEFAULT_ACCENT)
    }
}

impl Theme {
    /// Builds a theme from a color name or hex code.
    ///
    /// Unparseable input falls back to the default accent.
    #[must_use]
    pub fn new(accent_color_str: &str) -> Self {
        Self::from_color(parse_color(accent_color_str))
    }

    /// Builds a theme from a concrete accent color.
    #[must_use]
    pub fn from_color(accent: Color) -> Self {
        Self {
            accent,
            chrome_style: Style::default()
                .bg(accent)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
            heading_style: Style::default().fg(accent).add_modifier(Modifier::BOLD),
            body_style: Style::default().fg(Color::Reset),
            dimmed_style: Style::default().fg(Color::DarkGray),
        }
    }
}

fn parse_color(s: &str) -> Color {
    if let Ok(c) = Color::from_str(s) {
        return c;
    }

    if s.starts_with('#')
        && let Ok((r, g, b)) = parse_hex_color(s)
    {
        return Color::Rgb(r, g, b);
    }

    DEFAULT_ACCENT
}

fn parse_hex_color(s: &str) -> Result<(u8, u8, u8), ()> {
    let s = s.trim_start_matches('#');

    if !s.is_ascii() {
        return Err(());
    }

    if s.len() == 6 {
        let r = u8::from_str_radix(&s[0..2], 16).map_err(|_| ())?;
        let g = u8::from_str_radix(&s[2..4], 16).map_err(|_| ())?;
        let b = u8::from_str_radix(&s[4..6], 16).map_err(|_| ())?;
        Ok((r, g, b))
    } else if s.len() == 3 {
        let r = u8::from_str_radix(&format!("{}{}", &s[0..1], &s[0..1]), 16).map_err(|_| ())?;
        let g = u8::from_str_radix(&format!("{}{}", &s[1..2], &s[1..2]), 16).map_err(|_| ())?;
        let b = u8::from_str_radix(&format!("{}{}", &s[2..3], &s[2..3]), 16).map_err(|_| ())?;
        Ok((r, g, b))
    } else {
        Err(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_color() {
        assert_eq!(parse_color("Red"), Color::Red);
        assert_eq!(parse_color("blue"), Color::Blue);
        assert_eq!(parse_color("#FF0000"), Color::Rgb(255, 0, 0));
        assert_eq!(parse_color("#0f0"), Color::Rgb(0, 255, 0));
        assert_eq!(parse_color("Invalid"), DEFAULT_ACCENT);
    }

    #[test]
    fn test_theme_styles_follow_accent() {
        let theme = Theme::new("Magenta");
        assert_eq!(theme.accent, Color::Magenta);
        assert_eq!(theme.chrome_style.bg, Some(Color::Magenta));
        assert_eq!(theme.heading_style.fg, Some(Color::Magenta));
    }
}
