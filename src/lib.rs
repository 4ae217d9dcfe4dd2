//! Snapview - a snapshot-binding MVVM person details viewer for the terminal.
//!
//! This crate demonstrates the Model-View-ViewModel pattern with one-shot
//! snapshot binding: a view reads its view model exactly once, at
//! construction, and never re-synchronizes afterwards.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

/// Application layer containing view models.
pub mod application;
/// Domain layer containing entities and the MVVM role contracts.
pub mod domain;
/// Infrastructure layer containing configuration handling.
pub mod infrastructure;
/// Presentation layer containing UI screens and widgets.
pub mod presentation;

/// Current version of the application.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name.
pub const NAME: &str = "snapview";
