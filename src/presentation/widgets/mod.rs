//! Reusable widgets.

mod detail_section;
mod title_bar;

pub use detail_section::{DetailSection, DetailSectionStyle};
pub use title_bar::{TitleBar, TitleBarStyle};
