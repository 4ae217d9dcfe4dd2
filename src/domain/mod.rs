//! Domain layer with the core entity and the MVVM role contracts.

/// Entity definitions.
pub mod entities;
/// MVVM role contracts.
pub mod mvvm;

pub use entities::Person;
pub use mvvm::{Model, View, ViewModel, compose};
