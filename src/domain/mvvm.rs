//! Role contracts for one-way MVVM composition.
//!
//! The three traits bind statically: each view model declares the one model
//! type it wraps, and each view declares the one view model type it renders.
//! Composition is resolved entirely at compile time; there is no runtime
//! dispatch and no reverse data flow.

/// Marker for passive data holders.
///
/// A model carries fields and nothing else; all presentation logic lives in
/// the [`ViewModel`] wrapping it.
pub trait Model {}

/// Derives presentation-ready values from exactly one [`Model`].
pub trait ViewModel {
    /// The model type this view model is specialized for.
    type Model: Model;

    /// Wraps the model by value. Total over all well-formed inputs.
    fn from_model(model: Self::Model) -> Self;
}

/// Renders exactly one [`ViewModel`], once, at construction.
///
/// Implementations read the view model's derived values into an internal
/// snapshot and drop the view model; later changes to the source data are
/// never reflected. A view can only be built from the one view model type it
/// declares:
///
/// ```compile_fail
/// use snapview::domain::mvvm::{Model, View, ViewModel};
/// use snapview::presentation::ui::PersonScreen;
///
/// struct Recipe;
/// impl Model for Recipe {}
///
/// struct RecipeCard;
/// impl ViewModel for RecipeCard {
///     type Model = Recipe;
///     fn from_model(_: Recipe) -> Self {
///         Self
///     }
/// }
///
/// // PersonScreen is specialized for PersonDetails, not RecipeCard.
/// let _ = PersonScreen::from_view_model(RecipeCard);
/// ```
pub trait View {
    /// The view model type this view is specialized for.
    type ViewModel: ViewModel;

    /// Builds the view, taking its one-time snapshot of `view_model`.
    fn from_view_model(view_model: Self::ViewModel) -> Self;
}

/// Runs the full composition chain for a view type.
///
/// ```
/// use snapview::domain::entities::Person;
/// use snapview::domain::mvvm::compose;
/// use snapview::presentation::ui::PersonScreen;
///
/// let person = Person::new(
///     "Mrs",
///     "Theresa",
///     "May",
///     "8 Downing Street",
///     "London",
///     "SW1A 2AA",
///     "United Kingdom",
/// );
/// let screen: PersonScreen = compose(person);
/// assert_eq!(screen.title(), "Person Details");
/// ```
pub fn compose<V>(model: <V::ViewModel as ViewModel>::Model) -> V
where
    V: View,
{
    V::from_view_model(V::ViewModel::from_model(model))
}
