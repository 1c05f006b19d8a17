//! Score free text against a user's cuisine preferences.
//!
//! The `TextRelevance` trait assigns a similarity in `0.0..=1.0` to a
//! candidate string (typically a menu item name). Implementations are built
//! once per request from the user's cuisine list and then queried for every
//! item in the catalog.

/// Calculate how closely a piece of text matches a user's cuisines.
///
/// Implementations must be thread-safe (`Send` + `Sync`) so a model can be
/// shared by the request that built it. The methods are infallible;
/// implementers must return `0.0` when no information is available, such as
/// an empty cuisine list.
///
/// Implementations must:
/// - Produce finite (`f64::is_finite`) scores.
/// - Return non-negative values.
/// - Normalise results to the range `0.0..=1.0`.
///
/// Use [`TextRelevance::sanitise`] to apply these guards.
///
/// # Examples
///
/// ```rust
/// use forkcast_core::TextRelevance;
///
/// struct SoupLover;
///
/// impl TextRelevance for SoupLover {
///     fn score(&self, text: &str) -> f64 {
///         if text.to_lowercase().contains("soup") { 1.0 } else { 0.0 }
///     }
/// }
///
/// assert_eq!(SoupLover.score("Crab Soup"), 1.0);
/// assert_eq!(SoupLover.best_score(&["Rice", "Noodle Soup"]), 1.0);
/// assert_eq!(SoupLover.best_score(&[]), 0.0);
/// ```
pub trait TextRelevance: Send + Sync {
    /// Return the similarity of `text` to the closest preferred cuisine.
    fn score(&self, text: &str) -> f64;

    /// Return the highest similarity across a batch of texts.
    ///
    /// An empty batch scores exactly `0.0`.
    fn best_score(&self, texts: &[&str]) -> f64 {
        texts
            .iter()
            .map(|text| self.score(text))
            .fold(0.0, f64::max)
    }

    /// Clamp and validate a raw score.
    ///
    /// Returns `0.0` for non-finite values and clamps to `0.0..=1.0`.
    fn sanitise(score: f64) -> f64
    where
        Self: Sized,
    {
        if !score.is_finite() {
            return 0.0;
        }
        score.clamp(0.0, 1.0)
    }
}

impl<T: TextRelevance + ?Sized> TextRelevance for &T {
    fn score(&self, text: &str) -> f64 {
        (**self).score(text)
    }

    fn best_score(&self, texts: &[&str]) -> f64 {
        (**self).best_score(texts)
    }
}
