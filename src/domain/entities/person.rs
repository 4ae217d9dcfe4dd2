//! Person entity.

use serde::{Deserialize, Serialize};

use crate::domain::mvvm::Model;

/// An immutable person record.
///
/// Pure data with value equality; no identity and no behavior beyond
/// construction and read access. Empty fields are legal and carried as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    title: String,
    first_name: String,
    last_name: String,
    address: String,
    city: String,
    postcode: String,
    country: String,
}

impl Person {
    /// Creates a new person record.
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        address: impl Into<String>,
        city: impl Into<String>,
        postcode: impl Into<String>,
        country: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            address: address.into(),
            city: city.into(),
            postcode: postcode.into(),
            country: country.into(),
        }
    }

    /// Honorific, e.g. "Mrs".
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// First name.
    #[must_use]
    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    /// Last name.
    #[must_use]
    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    /// Street address line.
    #[must_use]
    pub fn address(&self) -> &str {
        &self.address
    }

    /// City.
    #[must_use]
    pub fn city(&self) -> &str {
        &self.city
    }

    /// Postcode.
    #[must_use]
    pub fn postcode(&self) -> &str {
        &self.postcode
    }

    /// Country.
    #[must_use]
    pub fn country(&self) -> &str {
        &self.country
    }
}

impl Model for Person {}
