//! Deterministic doubles and fixtures for unit, behaviour, and benchmark code.

use crate::{Menu, MenuItem, Restaurant, TextRelevance, UserProfile};

/// Test `TextRelevance` based on case-insensitive keyword overlap.
///
/// An exact phrase match scores `1.0`, sharing at least one word with a
/// cuisine scores `0.5`, and anything else scores `0.0`.
#[derive(Debug, Clone, Default)]
pub struct KeywordRelevance {
    cuisines: Vec<String>,
}

impl KeywordRelevance {
    /// Build from raw cuisine phrases.
    pub fn new<I, S>(cuisines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            cuisines: cuisines
                .into_iter()
                .map(|cuisine| cuisine.as_ref().to_lowercase())
                .collect(),
        }
    }

    /// Build from a profile's cuisines.
    #[must_use]
    pub fn from_profile(profile: &UserProfile) -> Self {
        Self::new(profile.cuisines())
    }
}

impl TextRelevance for KeywordRelevance {
    fn score(&self, text: &str) -> f64 {
        let lowered = text.to_lowercase();
        if self.cuisines.iter().any(|cuisine| *cuisine == lowered) {
            return 1.0;
        }
        let shares_word = self.cuisines.iter().any(|cuisine| {
            cuisine
                .split_whitespace()
                .any(|word| lowered.split_whitespace().any(|other| other == word))
        });
        if shares_word { 0.5 } else { 0.0 }
    }
}

/// A small Hanoi catalog with one unlocated and one malformed restaurant.
#[must_use]
pub fn sample_catalog() -> Vec<Restaurant> {
    vec![
        Restaurant::new(1, "Pho Thin", Some("21.0245,105.8412".into())).with_menu(Menu::new(
            11,
            "Noodles",
            vec![
                MenuItem::new(111, "Pho", 50_000.0),
                MenuItem::new(112, "Pho Cuon", 60_000.0),
            ],
        )),
        Restaurant::new(2, "Bun Cha Huong Lien", Some("21.0180,105.8530".into())).with_menu(
            Menu::new(
                21,
                "Lunch",
                vec![
                    MenuItem::new(211, "Bun Cha", 55_000.0),
                    MenuItem::new(212, "Nem Ran", 30_000.0),
                ],
            ),
        ),
        Restaurant::new(3, "Cafe Giang", Some("21.0337,105.8540".into())).with_menu(Menu::new(
            31,
            "Drinks",
            vec![MenuItem::new(311, "Egg Coffee", 35_000.0)],
        )),
        Restaurant::new(4, "Ghost Kitchen", None).with_menu(Menu::new(
            41,
            "Secret",
            vec![MenuItem::new(411, "Pho", 1.0)],
        )),
        Restaurant::new(5, "Typo Street", Some("21.03;105.85".into())).with_menu(Menu::new(
            51,
            "Secret",
            vec![MenuItem::new(511, "Bun Cha", 1.0)],
        )),
        Restaurant::new(6, "Empty Stall", Some("21.0290,105.8550".into())),
    ]
}
