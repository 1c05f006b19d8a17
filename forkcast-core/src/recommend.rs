//! One scan-and-rank pass over a catalog for one user.

use crate::{
    CatalogScanner, Restaurant, ScanMode, ScoredItem, ScoredRestaurant, TextRelevance,
    UserProfile, rank,
};

/// Candidates for one request, either items or restaurants.
///
/// With the `serde` feature enabled the value serialises as a bare JSON array
/// of its records.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize), serde(untagged))]
pub enum Recommendations {
    /// Item-mode candidates.
    Items(Vec<ScoredItem>),
    /// Restaurant-mode candidates.
    Restaurants(Vec<ScoredRestaurant>),
}

impl Recommendations {
    /// Number of candidates.
    #[must_use]
    pub const fn len(&self) -> usize {
        match self {
            Self::Items(items) => items.len(),
            Self::Restaurants(restaurants) => restaurants.len(),
        }
    }

    /// Whether there are no candidates.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The scan mode these candidates came from.
    #[must_use]
    pub const fn mode(&self) -> ScanMode {
        match self {
            Self::Items(_) => ScanMode::Items,
            Self::Restaurants(_) => ScanMode::Restaurants,
        }
    }

    /// Rank the candidates and keep the best `limit`.
    #[must_use]
    pub fn ranked(self, limit: usize) -> Self {
        match self {
            Self::Items(items) => Self::Items(rank(items, limit)),
            Self::Restaurants(restaurants) => Self::Restaurants(rank(restaurants, limit)),
        }
    }
}

/// Scan `catalog` for `profile` in `mode` and return the top `limit` results.
///
/// `relevance` must have been built from `profile`'s cuisines; the profile
/// contributes its location here.
///
/// # Examples
/// ```
/// use forkcast_core::{
///     Coordinate, Menu, MenuItem, Recommendations, Restaurant, ScanMode, TextRelevance,
///     UserProfile, recommend,
/// };
///
/// struct NoSignal;
///
/// impl TextRelevance for NoSignal {
///     fn score(&self, _text: &str) -> f64 {
///         0.0
///     }
/// }
///
/// let profile = UserProfile::new(Coordinate::new(0.0, 0.0), Vec::<String>::new());
/// let catalog = vec![
///     Restaurant::new(1, "Far", Some("0.0,0.2".into())),
///     Restaurant::new(2, "Near", Some("0.0,0.1".into()))
///         .with_menu(Menu::new(1, "Menu", vec![MenuItem::new(1, "Rice", 1.0)])),
/// ];
///
/// assert!(recommend(&profile, &catalog, &NoSignal, ScanMode::Items, 6).is_empty());
///
/// let Recommendations::Restaurants(by_distance) =
///     recommend(&profile, &catalog, &NoSignal, ScanMode::Restaurants, 6)
/// else {
///     unreachable!("restaurant mode yields restaurants");
/// };
/// assert_eq!(by_distance[0].restaurant_name, "Near");
/// ```
pub fn recommend<R>(
    profile: &UserProfile,
    catalog: &[Restaurant],
    relevance: &R,
    mode: ScanMode,
    limit: usize,
) -> Recommendations
where
    R: TextRelevance + ?Sized,
{
    CatalogScanner::new(profile.coordinate(), relevance)
        .scan(catalog, mode)
        .ranked(limit)
}
