//! Person detail screen.

use ratatui::{
    buffer::Buffer,
    layout::{Margin, Rect},
    widgets::Widget,
};

use crate::application::view_models::PersonDetails;
use crate::domain::mvvm::View;
use crate::presentation::theme::Theme;
use crate::presentation::widgets::{DetailSection, DetailSectionStyle, TitleBar, TitleBarStyle};

const DEFAULT_PADDING: u16 = 2;
const DEFAULT_SECTION_SPACING: u16 = 1;

/// Styling and layout for a [`PersonScreen`].
#[derive(Debug, Clone, Copy)]
pub struct PersonScreenStyle {
    /// Chrome style.
    pub title_bar: TitleBarStyle,
    /// Style shared by both sections.
    pub section: DetailSectionStyle,
    /// Outer padding around the content block.
    pub padding: u16,
    /// Blank rows between the two sections.
    pub section_spacing: u16,
    /// Whether the chrome row is drawn.
    pub show_title_bar: bool,
}

impl Default for PersonScreenStyle {
    fn default() -> Self {
        Self {
            title_bar: TitleBarStyle::default(),
            section: DetailSectionStyle::default(),
            padding: DEFAULT_PADDING,
            section_spacing: DEFAULT_SECTION_SPACING,
            show_title_bar: true,
        }
    }
}

impl PersonScreenStyle {
    /// Derives screen styles from a theme, keeping the default layout.
    #[must_use]
    pub fn from_theme(theme: &Theme) -> Self {
        Self {
            title_bar: TitleBarStyle::from_theme(theme),
            section: DetailSectionStyle::from_theme(theme),
            ..Self::default()
        }
    }
}

/// Detail screen for one person record.
///
/// The screen reads its view model exactly once, at construction, into an
/// owned snapshot of display strings; the view model is dropped afterwards.
/// Later changes to the source record are never reflected.
#[derive(Debug)]
pub struct PersonScreen {
    title: String,
    name_heading: String,
    name: String,
    address_heading: String,
    address: String,
    style: PersonScreenStyle,
}

impl View for PersonScreen {
    type ViewModel = PersonDetails;

    fn from_view_model(view_model: PersonDetails) -> Self {
        // The one and only read of the view model.
        Self {
            title: view_model.title().to_string(),
            name_heading: view_model.name_heading().to_string(),
            name: view_model.name(),
            address_heading: view_model.address_heading().to_string(),
            address: view_model.address(),
            style: PersonScreenStyle::default(),
        }
    }
}

impl PersonScreen {
    /// Sets the screen style.
    #[must_use]
    pub const fn style(mut self, style: PersonScreenStyle) -> Self {
        self.style = style;
        self
    }

    /// Screen title shown in the chrome.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Snapshotted display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Snapshotted multi-line address.
    #[must_use]
    pub fn address(&self) -> &str {
        &self.address
    }
}

impl Widget for &PersonScreen {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width == 0 {
            return;
        }

        let mut content = area;
        if self.style.show_title_bar {
            TitleBar::new(&self.title, crate::NAME, crate::VERSION)
                .style(self.style.title_bar)
                .render(Rect::new(area.x, area.y, area.width, 1), buf);

            content.y += 1;
            content.height = content.height.saturating_sub(1);
        }

        let content = content.inner(Margin::new(self.style.padding, self.style.padding));
        if content.height == 0 || content.width == 0 {
            return;
        }

        let name = DetailSection::new(&self.name_heading, &self.name).style(self.style.section);
        let name_height = name.height().min(content.height);
        name.render(
            Rect::new(content.x, content.y, content.width, name_height),
            buf,
        );

        let address_y = (content.y + name_height).saturating_add(self.style.section_spacing);
        if address_y >= content.bottom() {
            return;
        }

        let address =
            DetailSection::new(&self.address_heading, &self.address).style(self.style.section);
        let address_height = address.height().min(content.bottom() - address_y);
        address.render(
            Rect::new(content.x, address_y, content.width, address_height),
            buf,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::Person;
    use crate::domain::mvvm::{ViewModel, compose};

    fn sample_person() -> Person {
        Person::new(
            "Mrs",
            "Theresa",
            "May",
            "8 Downing Street",
            "London",
            "SW1A 2AA",
            "United Kingdom",
        )
    }

    fn row(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width)
            .map(|x| buf[(x, y)].symbol())
            .collect::<String>()
            .trim()
            .to_string()
    }

    #[test]
    fn test_snapshot_matches_view_model() {
        let screen: PersonScreen = compose(sample_person());

        assert_eq!(screen.title(), "Person Details");
        assert_eq!(screen.name(), "Mrs Theresa May");
        assert_eq!(
            screen.address(),
            "8 Downing Street\nLondon\nSW1A 2AA\nUnited Kingdom"
        );
    }

    #[test]
    fn test_snapshot_survives_source_changes() {
        let mut person = sample_person();
        let screen: PersonScreen = compose(person.clone());

        person = Person::new("Mr", "John", "Doe", "1 Main St", "Leeds", "LS1 1AA", "UK");

        assert_eq!(person.first_name(), "John");
        assert_eq!(screen.name(), "Mrs Theresa May");
        assert_eq!(
            screen.address(),
            "8 Downing Street\nLondon\nSW1A 2AA\nUnited Kingdom"
        );
    }

    #[test]
    fn test_compose_matches_direct_construction() {
        let composed: PersonScreen = compose(sample_person());
        let direct = PersonScreen::from_view_model(PersonDetails::from_model(sample_person()));

        assert_eq!(composed.name(), direct.name());
        assert_eq!(composed.address(), direct.address());
    }

    #[test]
    fn test_render_stacks_sections_under_chrome() {
        let area = Rect::new(0, 0, 40, 14);
        let mut buf = Buffer::empty(area);
        let screen: PersonScreen = compose(sample_person());

        (&screen).render(area, &mut buf);

        // Row 0 is chrome, rows 1-2 padding, content starts at row 3.
        assert!(row(&buf, 0).starts_with("Person Details"));
        assert_eq!(row(&buf, 3), "Name:");
        assert_eq!(row(&buf, 4), "Mrs Theresa May");
        assert_eq!(row(&buf, 5), "");
        assert_eq!(row(&buf, 6), "Address:");
        assert_eq!(row(&buf, 7), "8 Downing Street");
        assert_eq!(row(&buf, 8), "London");
        assert_eq!(row(&buf, 9), "SW1A 2AA");
        assert_eq!(row(&buf, 10), "United Kingdom");
    }

    #[test]
    fn test_render_without_chrome() {
        let area = Rect::new(0, 0, 40, 12);
        let mut buf = Buffer::empty(area);

        let style = PersonScreenStyle {
            show_title_bar: false,
            ..PersonScreenStyle::default()
        };
        let screen = PersonScreen::from_view_model(PersonDetails::from_model(sample_person()))
            .style(style);

        (&screen).render(area, &mut buf);

        assert_eq!(row(&buf, 2), "Name:");
    }

    #[test]
    fn test_render_clips_to_small_area() {
        let area = Rect::new(0, 0, 10, 4);
        let mut buf = Buffer::empty(area);
        let screen: PersonScreen = compose(sample_person());

        (&screen).render(area, &mut buf);
    }

    #[test]
    fn test_zero_area_is_noop() {
        let area = Rect::new(0, 0, 0, 0);
        let mut buf = Buffer::empty(area);
        let screen: PersonScreen = compose(sample_person());

        (&screen).render(area, &mut buf);
    }
}
