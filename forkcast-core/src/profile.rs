//! User profiles: where the user is and which cuisines they prefer.

use crate::Coordinate;

/// Separator between phrases in an upstream cuisine string.
pub const CUISINE_SEPARATOR: &str = ", ";

/// A user's location and ordered cuisine preferences.
///
/// # Examples
/// ```
/// use forkcast_core::{Coordinate, UserProfile};
///
/// let profile = UserProfile::new(Coordinate::new(21.0, 105.8), ["Pho", "Bun Cha"]);
/// assert_eq!(profile.cuisines(), ["Pho", "Bun Cha"]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct UserProfile {
    coordinate: Coordinate,
    cuisines: Vec<String>,
}

impl UserProfile {
    /// Construct a profile, trimming cuisine phrases and dropping empty ones.
    pub fn new<I, S>(coordinate: Coordinate, cuisines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let cleaned = cuisines
            .into_iter()
            .map(|cuisine| cuisine.as_ref().trim().to_owned())
            .filter(|cuisine| !cuisine.is_empty())
            .collect();
        Self {
            coordinate,
            cuisines: cleaned,
        }
    }

    /// Build a profile from an upstream `"c1, c2, ..."` cuisine string.
    ///
    /// # Examples
    /// ```
    /// use forkcast_core::{Coordinate, UserProfile};
    ///
    /// let profile = UserProfile::from_cuisine_list(Coordinate::new(0.0, 0.0), "Thai, , Sushi ");
    /// assert_eq!(profile.cuisines(), ["Thai", "Sushi"]);
    /// ```
    #[must_use]
    pub fn from_cuisine_list(coordinate: Coordinate, cuisines: &str) -> Self {
        Self::new(coordinate, parse_cuisines(cuisines))
    }

    /// The user's location.
    #[must_use]
    pub const fn coordinate(&self) -> Coordinate {
        self.coordinate
    }

    /// Preferred cuisine phrases, in upstream order.
    #[must_use]
    pub const fn cuisines(&self) -> &[String] {
        self.cuisines.as_slice()
    }
}

/// Split an upstream cuisine string into trimmed, non-empty phrases.
///
/// An empty string yields no phrases.
pub fn parse_cuisines(raw: &str) -> impl Iterator<Item = &str> {
    raw.split(CUISINE_SEPARATOR)
        .map(str::trim)
        .filter(|phrase| !phrase.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("Vietnamese, Italian", &["Vietnamese", "Italian"])]
    #[case("Bun Cha", &["Bun Cha"])]
    #[case("", &[])]
    #[case(" , ", &[])]
    #[case("Thai,  Sushi", &["Thai", "Sushi"])]
    fn cuisine_lists_split_on_comma_space(#[case] raw: &str, #[case] expected: &[&str]) {
        let phrases: Vec<&str> = parse_cuisines(raw).collect();
        assert_eq!(phrases, expected);
    }

    #[rstest]
    fn commas_without_space_stay_in_one_phrase() {
        let phrases: Vec<&str> = parse_cuisines("Thai,Sushi").collect();
        assert_eq!(phrases, ["Thai,Sushi"]);
    }

    #[rstest]
    fn new_drops_blank_phrases() {
        let profile = UserProfile::new(Coordinate::new(0.0, 0.0), ["  ", "Pho "]);
        assert_eq!(profile.cuisines(), ["Pho"]);
    }
}
