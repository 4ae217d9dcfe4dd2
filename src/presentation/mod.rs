//! Presentation layer with UI screens, widgets and theming.

/// Color theme.
pub mod theme;
/// UI screens.
pub mod ui;
/// Reusable widgets.
pub mod widgets;

pub use ui::App;
