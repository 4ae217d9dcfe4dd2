//! Presentation values derived from a person record.

use crate::domain::entities::Person;
use crate::domain::mvvm::ViewModel;

/// View model for a single [`Person`].
///
/// Owns exactly one record and exposes derived, read-only display strings.
/// Every accessor is a pure function of the held record; there is no internal
/// mutable state. No validation happens here: empty fields render as empty
/// segments.
#[derive(Debug, Clone)]
pub struct PersonDetails {
    model: Person,
}

impl ViewModel for PersonDetails {
    type Model = Person;

    fn from_model(model: Person) -> Self {
        Self { model }
    }
}

impl PersonDetails {
    /// Single-line display name, `"{title} {first} {last}"`.
    #[must_use]
    pub fn name(&self) -> String {
        format!(
            "{} {} {}",
            self.model.title(),
            self.model.first_name(),
            self.model.last_name()
        )
    }

    /// Heading for the name section.
    #[must_use]
    pub const fn name_heading(&self) -> &'static str {
        "Name"
    }

    /// Four-line postal address, newline-joined with no trailing newline.
    #[must_use]
    pub fn address(&self) -> String {
        format!(
            "{}\n{}\n{}\n{}",
            self.model.address(),
            self.model.city(),
            self.model.postcode(),
            self.model.country()
        )
    }

    /// Heading for the address section.
    #[must_use]
    pub const fn address_heading(&self) -> &'static str {
        "Address"
    }

    /// Screen title for the enclosing chrome.
    #[must_use]
    pub const fn title(&self) -> &'static str {
        "Person Details"
    }
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;

    fn details(person: Person) -> PersonDetails {
        PersonDetails::from_model(person)
    }

    #[test_case("Mrs", "Theresa", "May" => "Mrs Theresa May".to_string() ; "full name")]
    #[test_case("", "Ada", "Lovelace" => " Ada Lovelace".to_string() ; "empty title keeps separator")]
    #[test_case("Dr", "", "" => "Dr  ".to_string() ; "empty names keep separators")]
    fn name_formatting(title: &str, first: &str, last: &str) -> String {
        details(Person::new(title, first, last, "", "", "", "")).name()
    }

    #[test]
    fn test_address_joins_four_lines_without_trailing_newline() {
        let vm = details(Person::new(
            "Mrs",
            "Theresa",
            "May",
            "8 Downing Street",
            "London",
            "SW1A 2AA",
            "United Kingdom",
        ));

        assert_eq!(vm.address(), "8 Downing Street\nLondon\nSW1A 2AA\nUnited Kingdom");
        assert!(!vm.address().ends_with('\n'));
    }

    #[test]
    fn test_empty_address_fields_render_as_blank_lines() {
        let vm = details(Person::new("Mr", "John", "Doe", "", "Leeds", "", "UK"));
        assert_eq!(vm.address(), "\nLeeds\n\nUK");
    }

    #[test]
    fn test_headings_are_constant() {
        let a = details(Person::new("Mrs", "Theresa", "May", "", "", "", ""));
        let b = details(Person::new("", "", "", "", "", "", ""));

        assert_eq!(a.name_heading(), "Name");
        assert_eq!(b.name_heading(), "Name");
        assert_eq!(a.address_heading(), "Address");
        assert_eq!(b.address_heading(), "Address");
        assert_eq!(a.title(), "Person Details");
        assert_eq!(b.title(), "Person Details");
    }
}
