//! Turn a catalog into scored candidates for one user.
//!
//! A [`CatalogScanner`] walks restaurants, menus, and items once per request.
//! Restaurants whose location is missing or malformed are skipped silently;
//! every other restaurant has its distance computed exactly once.
//!
//! The scan runs in one of two [`ScanMode`]s:
//! - [`ScanMode::Items`] emits one [`ScoredItem`] per item whose similarity
//!   clears the [`RELEVANCE_FLOOR`].
//! - [`ScanMode::Restaurants`] emits one [`ScoredRestaurant`] per located
//!   restaurant, scored by its best-matching item, with no floor.

use log::debug;

use crate::{
    Coordinate, Recommendations, Restaurant, ScoredItem, ScoredRestaurant, TextRelevance,
    haversine_km, round_to_hundredths,
};

/// Item similarities must be strictly greater than this to be recommended.
pub const RELEVANCE_FLOOR: f64 = 0.1;

/// Which kind of candidate a scan produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScanMode {
    /// One candidate per sufficiently relevant menu item.
    Items,
    /// One candidate per located restaurant.
    Restaurants,
}

impl ScanMode {
    /// The threshold policy applied by this mode.
    ///
    /// # Examples
    /// ```
    /// use forkcast_core::{RELEVANCE_FLOOR, ScanMode, ThresholdPolicy};
    ///
    /// assert_eq!(ScanMode::Items.threshold(), ThresholdPolicy::Above(RELEVANCE_FLOOR));
    /// assert_eq!(ScanMode::Restaurants.threshold(), ThresholdPolicy::Unfiltered);
    /// ```
    #[must_use]
    pub const fn threshold(self) -> ThresholdPolicy {
        match self {
            Self::Items => ThresholdPolicy::Above(RELEVANCE_FLOOR),
            Self::Restaurants => ThresholdPolicy::Unfiltered,
        }
    }
}

/// Decide whether a candidate's raw similarity is high enough to emit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ThresholdPolicy {
    /// Admit only similarities strictly greater than the bound.
    Above(f64),
    /// Admit every candidate.
    Unfiltered,
}

impl ThresholdPolicy {
    /// Whether `similarity` passes this policy.
    #[must_use]
    pub fn admits(self, similarity: f64) -> bool {
        match self {
            Self::Above(bound) => similarity > bound,
            Self::Unfiltered => true,
        }
    }
}

/// Scores a catalog against one user's location and cuisine model.
///
/// # Examples
/// ```
/// use forkcast_core::{CatalogScanner, Coordinate, Menu, MenuItem, Restaurant, TextRelevance};
///
/// struct Exact(&'static str);
///
/// impl TextRelevance for Exact {
///     fn score(&self, text: &str) -> f64 {
///         if text == self.0 { 1.0 } else { 0.0 }
///     }
/// }
///
/// let catalog = vec![
///     Restaurant::new(1, "Near", Some("0.0,0.01".into()))
///         .with_menu(Menu::new(1, "All day", vec![
///             MenuItem::new(1, "Pho", 40.0),
///             MenuItem::new(2, "Tea", 5.0),
///         ])),
///     Restaurant::new(2, "Unknown", None),
/// ];
/// let relevance = Exact("Pho");
/// let scanner = CatalogScanner::new(Coordinate::new(0.0, 0.0), &relevance);
///
/// let items = scanner.scan_items(&catalog);
/// assert_eq!(items.len(), 1);
/// assert_eq!(items[0].item_name, "Pho");
/// assert_eq!(items[0].distance_km, 1.11);
///
/// let restaurants = scanner.scan_restaurants(&catalog);
/// assert_eq!(restaurants.len(), 1);
/// assert_eq!(restaurants[0].similarity_score, 1.0);
/// ```
pub struct CatalogScanner<'a, R: ?Sized> {
    origin: Coordinate,
    relevance: &'a R,
    threshold: Option<ThresholdPolicy>,
}

impl<'a, R> CatalogScanner<'a, R>
where
    R: TextRelevance + ?Sized,
{
    /// Build a scanner for a user at `origin`.
    ///
    /// Each scan uses its mode's default [`ThresholdPolicy`] unless
    /// [`CatalogScanner::with_threshold`] overrides it.
    pub const fn new(origin: Coordinate, relevance: &'a R) -> Self {
        Self {
            origin,
            relevance,
            threshold: None,
        }
    }

    /// Override the threshold policy for every mode.
    #[must_use]
    pub const fn with_threshold(mut self, threshold: ThresholdPolicy) -> Self {
        self.threshold = Some(threshold);
        self
    }

    fn policy(&self, mode: ScanMode) -> ThresholdPolicy {
        self.threshold.unwrap_or_else(|| mode.threshold())
    }

    /// Yield every restaurant with a usable location alongside its distance.
    fn located<'c>(
        &self,
        catalog: &'c [Restaurant],
    ) -> impl Iterator<Item = (&'c Restaurant, f64)> {
        catalog.iter().filter_map(|restaurant| match restaurant.coordinate() {
            Ok(coordinate) => Some((restaurant, haversine_km(self.origin, coordinate))),
            Err(err) => {
                debug!(
                    "skipping restaurant {} ({}): {err}",
                    restaurant.id, restaurant.name
                );
                None
            }
        })
    }

    /// Score every menu item and keep those the item policy admits.
    pub fn scan_items(&self, catalog: &[Restaurant]) -> Vec<ScoredItem> {
        let policy = self.policy(ScanMode::Items);
        let mut scored = Vec::new();
        for (restaurant, distance) in self.located(catalog) {
            for menu in &restaurant.menus {
                for item in &menu.items {
                    let similarity = self.relevance.score(&item.name);
                    if !policy.admits(similarity) {
                        continue;
                    }
                    scored.push(ScoredItem {
                        restaurant_id: restaurant.id.clone(),
                        restaurant_name: restaurant.name.clone(),
                        menu_id: menu.id.clone(),
                        menu_name: menu.name.clone(),
                        item_id: item.id.clone(),
                        item_name: item.name.clone(),
                        price: item.price,
                        distance_km: round_to_hundredths(distance),
                        similarity_score: round_to_hundredths(similarity),
                    });
                }
            }
        }
        scored
    }

    /// Score every located restaurant by its best-matching item.
    pub fn scan_restaurants(&self, catalog: &[Restaurant]) -> Vec<ScoredRestaurant> {
        let policy = self.policy(ScanMode::Restaurants);
        self.located(catalog)
            .filter_map(|(restaurant, distance)| {
                let names: Vec<&str> = restaurant.item_names().collect();
                let similarity = if names.is_empty() {
                    0.0
                } else {
                    self.relevance.best_score(&names)
                };
                policy.admits(similarity).then(|| ScoredRestaurant {
                    restaurant_id: restaurant.id.clone(),
                    restaurant_name: restaurant.name.clone(),
                    distance_km: round_to_hundredths(distance),
                    similarity_score: round_to_hundredths(similarity),
                })
            })
            .collect()
    }

    /// Scan in `mode`, returning candidates ready for ranking.
    pub fn scan(&self, catalog: &[Restaurant], mode: ScanMode) -> Recommendations {
        match mode {
            ScanMode::Items => Recommendations::Items(self.scan_items(catalog)),
            ScanMode::Restaurants => Recommendations::Restaurants(self.scan_restaurants(catalog)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Identifier, Menu, MenuItem, Price};
    use rstest::{fixture, rstest};

    /// Scores names by a fixed lookup table; unknown names score zero.
    struct TableRelevance(Vec<(&'static str, f64)>);

    impl TextRelevance for TableRelevance {
        fn score(&self, text: &str) -> f64 {
            self.0
                .iter()
                .find(|(name, _)| *name == text)
                .map_or(0.0, |(_, score)| *score)
        }
    }

    #[fixture]
    fn relevance() -> TableRelevance {
        TableRelevance(vec![
            ("Pho Bo", 1.0),
            ("Bun Cha", 0.71),
            ("Iced Tea", 0.1),
            ("Spring Rolls", 0.05),
        ])
    }

    #[fixture]
    fn catalog() -> Vec<Restaurant> {
        vec![
            Restaurant::new(1, "Pho 24", Some("21.0245,105.8412".into())).with_menu(Menu::new(
                10,
                "Noodles",
                vec![
                    MenuItem::new(100, "Pho Bo", 45_000.0),
                    MenuItem::new(101, "Iced Tea", 10_000.0),
                ],
            )),
            Restaurant::new(2, "No Address", None).with_menu(Menu::new(
                20,
                "Hidden",
                vec![MenuItem::new(200, "Pho Bo", 1.0)],
            )),
            Restaurant::new(3, "Broken Address", Some("21.0;105.8".into())).with_menu(Menu::new(
                30,
                "Hidden",
                vec![MenuItem::new(300, "Pho Bo", 1.0)],
            )),
            Restaurant::new(4, "Bun Cha Huong Lien", Some("21.0180,105.8530".into()))
                .with_menu(Menu::new(
                    40,
                    "Lunch",
                    vec![
                        MenuItem::new(400, "Bun Cha", 50_000.0),
                        MenuItem::new(401, "Spring Rolls", 20_000.0),
                    ],
                )),
            Restaurant::new(5, "Empty Kitchen", Some("21.0300,105.8500".into())),
        ]
    }

    fn origin() -> Coordinate {
        Coordinate::new(21.0285, 105.8542)
    }

    #[rstest]
    fn item_mode_applies_strict_floor(relevance: TableRelevance, catalog: Vec<Restaurant>) {
        let items = CatalogScanner::new(origin(), &relevance).scan_items(&catalog);
        let names: Vec<&str> = items.iter().map(|item| item.item_name.as_str()).collect();
        // "Iced Tea" sits exactly on the floor and "Spring Rolls" below it.
        assert_eq!(names, ["Pho Bo", "Bun Cha"]);
    }

    #[rstest]
    fn item_mode_carries_ids_and_rounded_keys(
        relevance: TableRelevance,
        catalog: Vec<Restaurant>,
    ) {
        let items = CatalogScanner::new(origin(), &relevance).scan_items(&catalog);
        let first = items.first().expect("pho should be recommended");
        assert_eq!(first.restaurant_id, Identifier::Integer(1));
        assert_eq!(first.menu_id, Identifier::Integer(10));
        assert_eq!(first.item_id, Identifier::Integer(100));
        assert_eq!(first.price, Price::Decimal(45_000.0));
        assert_eq!(first.distance_km, 1.42);
        assert_eq!(first.similarity_score, 1.0);
    }

    #[rstest]
    fn restaurant_mode_skips_unlocated_and_keeps_empty(
        relevance: TableRelevance,
        catalog: Vec<Restaurant>,
    ) {
        let restaurants = CatalogScanner::new(origin(), &relevance).scan_restaurants(&catalog);
        let summary: Vec<(String, f64)> = restaurants
            .iter()
            .map(|r| (r.restaurant_id.to_string(), r.similarity_score))
            .collect();
        assert_eq!(
            summary,
            [
                ("1".to_owned(), 1.0),
                ("4".to_owned(), 0.71),
                ("5".to_owned(), 0.0),
            ]
        );
    }

    #[rstest]
    fn threshold_override_applies_to_items(relevance: TableRelevance, catalog: Vec<Restaurant>) {
        let items = CatalogScanner::new(origin(), &relevance)
            .with_threshold(ThresholdPolicy::Unfiltered)
            .scan_items(&catalog);
        assert_eq!(items.len(), 4);
    }

    #[rstest]
    #[case(ScanMode::Items, 2)]
    #[case(ScanMode::Restaurants, 3)]
    fn scan_dispatches_on_mode(
        relevance: TableRelevance,
        catalog: Vec<Restaurant>,
        #[case] mode: ScanMode,
        #[case] expected: usize,
    ) {
        let output = CatalogScanner::new(origin(), &relevance).scan(&catalog, mode);
        assert_eq!(output.len(), expected);
    }

    #[rstest]
    fn empty_catalog_yields_nothing(relevance: TableRelevance) {
        let scanner = CatalogScanner::new(origin(), &relevance);
        assert!(scanner.scan(&[], ScanMode::Items).is_empty());
        assert!(scanner.scan(&[], ScanMode::Restaurants).is_empty());
    }
}
