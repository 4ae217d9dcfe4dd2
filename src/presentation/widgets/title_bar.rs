//! Screen title chrome.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::presentation::theme::Theme;

/// Styling for a [`TitleBar`].
#[derive(Debug, Clone, Copy)]
pub struct TitleBarStyle {
    /// Bar background fill.
    pub background: Style,
    /// Screen title style.
    pub title: Style,
    /// App name/version tag style.
    pub app_tag: Style,
}

impl Default for TitleBarStyle {
    fn default() -> Self {
        Self {
            background: Style::default(),
            title: Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            app_tag: Style::default().fg(Color::DarkGray),
        }
    }
}

impl TitleBarStyle {
    /// Derives bar styles from a theme.
    #[must_use]
    pub const fn from_theme(theme: &Theme) -> Self {
        Self {
            background: Style::new(),
            title: theme.chrome_style,
            app_tag: theme.dimmed_style,
        }
    }
}

/// Single-row chrome showing the screen title and the app tag.
#[derive(Debug, Clone)]
pub struct TitleBar<'a> {
    title: &'a str,
    app_name: &'a str,
    version: &'a str,
    style: TitleBarStyle,
}

impl<'a> TitleBar<'a> {
    /// Creates a title bar.
    #[must_use]
    pub fn new(title: &'a str, app_name: &'a str, version: &'a str) -> Self {
        Self {
            title,
            app_name,
            version,
            style: TitleBarStyle::default(),
        }
    }

    /// Sets the bar style.
    #[must_use]
    pub const fn style(mut self, style: TitleBarStyle) -> Self {
        self.style = style;
        self
    }
}

impl Widget for TitleBar<'_> {
    #[allow(clippy::cast_possible_truncation)]
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width == 0 {
            return;
        }

        for x in area.left()..area.right() {
            buf[(x, area.y)]
                .set_char(' ')
                .set_style(self.style.background);
        }

        let title_text = format!(" {} ", self.title);
        let title_width = title_text.chars().count() as u16;
        let title_line = Line::from(Span::styled(title_text, self.style.title));
        let title_area = Rect::new(area.x, area.y, title_width.min(area.width), 1);
        Paragraph::new(title_line).render(title_area, buf);

        let tag_text = format!(" {} v{} ", self.app_name, self.version);
        let tag_width = tag_text.chars().count() as u16;

        if tag_width < area.width.saturating_sub(title_width) {
            let tag_x = area.right().saturating_sub(tag_width);
            let tag_area = Rect::new(tag_x, area.y, tag_width, 1);
            let tag_line = Line::from(Span::styled(tag_text, self.style.app_tag));
            Paragraph::new(tag_line).render(tag_area, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width)
            .map(|x| buf[(x, y)].symbol())
            .collect::<String>()
            .trim_end()
            .to_string()
    }

    #[test]
    fn test_title_bar_creation() {
        let bar = TitleBar::new("Person Details", "snapview", "0.1.0");

        assert_eq!(bar.title, "Person Details");
        assert_eq!(bar.app_name, "snapview");
        assert_eq!(bar.version, "0.1.0");
    }

    #[test]
    fn test_render_title_left_and_tag_right() {
        let area = Rect::new(0, 0, 40, 1);
        let mut buf = Buffer::empty(area);

        TitleBar::new("Person Details", "snapview", "0.1.0").render(area, &mut buf);

        let content = row(&buf, 0);
        assert!(content.starts_with(" Person Details"));
        assert!(content.ends_with("snapview v0.1.0"));
    }

    #[test]
    fn test_tag_dropped_when_bar_is_narrow() {
        let area = Rect::new(0, 0, 20, 1);
        let mut buf = Buffer::empty(area);

        TitleBar::new("Person Details", "snapview", "0.1.0").render(area, &mut buf);

        let content = row(&buf, 0);
        assert!(content.starts_with(" Person Details"));
        assert!(!content.contains("snapview"));
    }

    #[test]
    fn test_zero_area_is_noop() {
        let area = Rect::new(0, 0, 0, 0);
        let mut buf = Buffer::empty(area);

        TitleBar::new("Person Details", "snapview", "0.1.0").render(area, &mut buf);
    }
}
