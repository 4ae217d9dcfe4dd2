//! Labeled text section widget.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Paragraph, Widget},
};

use crate::presentation::theme::Theme;

/// Styling for a [`DetailSection`].
#[derive(Debug, Clone, Copy)]
pub struct DetailSectionStyle {
    /// Heading line style.
    pub heading: Style,
    /// Body text style.
    pub body: Style,
}

impl Default for DetailSectionStyle {
    fn default() -> Self {
        Self {
            heading: Style::default().add_modifier(Modifier::BOLD),
            body: Style::default(),
        }
    }
}

impl DetailSectionStyle {
    /// Derives section styles from a theme.
    #[must_use]
    pub const fn from_theme(theme: &Theme) -> Self {
        Self {
            heading: theme.heading_style,
            body: theme.body_style,
        }
    }
}

/// A heading line followed by multi-line body text.
///
/// Renders as `"{heading}:"` in the heading style, then one row per body
/// line. Blank body lines keep their row.
#[derive(Debug, Clone)]
pub struct DetailSection<'a> {
    heading: &'a str,
    text: &'a str,
    style: DetailSectionStyle,
}

impl<'a> DetailSection<'a> {
    /// Creates a section from a heading and its body text.
    #[must_use]
    pub fn new(heading: &'a str, text: &'a str) -> Self {
        Self {
            heading,
            text,
            style: DetailSectionStyle::default(),
        }
    }

    /// Sets the section style.
    #[must_use]
    pub const fn style(mut self, style: DetailSectionStyle) -> Self {
        self.style = style;
        self
    }

    /// Rows needed to render the full section.
    #[must_use]
    pub fn height(&self) -> u16 {
        u16::try_from(1 + self.text.lines().count()).unwrap_or(u16::MAX)
    }

    fn lines(&self) -> Vec<Line<'a>> {
        let mut lines = vec![Line::from(Span::styled(
            format!("{}:", self.heading),
            self.style.heading,
        ))];

        for body_line in self.text.lines() {
            lines.push(Line::from(Span::styled(body_line, self.style.body)));
        }

        lines
    }
}

impl Widget for DetailSection<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width == 0 {
            return;
        }

        Paragraph::new(Text::from(self.lines())).render(area, buf);
    }
}
