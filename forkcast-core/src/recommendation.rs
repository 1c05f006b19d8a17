//! Scored candidate records produced by the catalog scan.
//!
//! Distances and similarities are rounded to two decimal places when a record
//! is built; ranking then operates on the rounded values.

use crate::{Identifier, Price};

/// Round `value` to two decimal places, sending exact halves to the even
/// neighbour.
///
/// # Examples
/// ```
/// use forkcast_core::round_to_hundredths;
///
/// assert_eq!(round_to_hundredths(1.420_701), 1.42);
/// assert_eq!(round_to_hundredths(0.707_106), 0.71);
/// assert_eq!(round_to_hundredths(16.625), 16.62);
/// ```
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "rounding scales by one hundred and back"
)]
pub fn round_to_hundredths(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}

/// Access to the two ranking keys shared by every candidate type.
pub trait Ranked {
    /// Similarity to the user's cuisines in `0.0..=1.0` (higher ranks first).
    fn similarity_score(&self) -> f64;
    /// Distance from the user in kilometres (closer ranks first on ties).
    fn distance_km(&self) -> f64;
}

/// A recommended menu item.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScoredItem {
    /// Identifier of the restaurant serving the item.
    pub restaurant_id: Identifier,
    /// Name of the restaurant serving the item.
    pub restaurant_name: String,
    /// Identifier of the menu listing the item.
    pub menu_id: Identifier,
    /// Name of the menu listing the item.
    pub menu_name: String,
    /// Identifier of the item.
    pub item_id: Identifier,
    /// Name of the item.
    pub item_name: String,
    /// Listed price, as the catalog supplied it.
    pub price: Price,
    /// Distance from the user, rounded to two decimal places.
    pub distance_km: f64,
    /// Cuisine similarity, rounded to two decimal places.
    pub similarity_score: f64,
}

impl Ranked for ScoredItem {
    fn similarity_score(&self) -> f64 {
        self.similarity_score
    }

    fn distance_km(&self) -> f64 {
        self.distance_km
    }
}

/// A recommended restaurant.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScoredRestaurant {
    /// Identifier of the restaurant.
    pub restaurant_id: Identifier,
    /// Name of the restaurant.
    pub restaurant_name: String,
    /// Distance from the user, rounded to two decimal places.
    pub distance_km: f64,
    /// Best similarity across all of the restaurant's items, rounded to two
    /// decimal places; `0.0` when the restaurant lists no items.
    pub similarity_score: f64,
}

impl Ranked for ScoredRestaurant {
    fn similarity_score(&self) -> f64 {
        self.similarity_score
    }

    fn distance_km(&self) -> f64 {
        self.distance_km
    }
}
