//! Restaurant catalog: restaurants, their menus, and menu items.
//!
//! Restaurants keep their raw `"lat,lon"` location string. Parsing is
//! deferred to [`Restaurant::coordinate`] so that malformed upstream data only
//! excludes the affected restaurant when the catalog is scanned.

use std::fmt;

use crate::{Coordinate, CoordinateError, parse_coordinate};

/// An upstream identifier, carried through to responses unchanged.
///
/// Upstream services emit either integer or string identifiers; both are
/// preserved so a response echoes exactly what the catalog supplied.
///
/// # Examples
/// ```
/// use forkcast_core::Identifier;
///
/// assert_eq!(Identifier::from(7).to_string(), "7");
/// assert_eq!(Identifier::from("r-7").to_string(), "r-7");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(untagged)
)]
pub enum Identifier {
    /// A numeric identifier.
    Integer(i64),
    /// A textual identifier.
    Text(String),
}

impl From<i64> for Identifier {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<i32> for Identifier {
    fn from(value: i32) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<&str> for Identifier {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for Identifier {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(value) => write!(f, "{value}"),
            Self::Text(value) => f.write_str(value),
        }
    }
}

/// A listed price, carried through to responses in its upstream form.
///
/// Integer prices stay integers and fractional prices stay fractional, so a
/// response echoes `50000` rather than `50000.0`.
///
/// # Examples
/// ```
/// use forkcast_core::Price;
///
/// assert_eq!(Price::from(50_000).to_string(), "50000");
/// assert_eq!(Price::from(49.5).to_string(), "49.5");
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(untagged)
)]
pub enum Price {
    /// A whole-number price.
    Integer(i64),
    /// A whole-number price above `i64::MAX`.
    Unsigned(u64),
    /// A fractional price.
    Decimal(f64),
}

impl From<i64> for Price {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<i32> for Price {
    fn from(value: i32) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<u64> for Price {
    fn from(value: u64) -> Self {
        i64::try_from(value).map_or(Self::Unsigned(value), Self::Integer)
    }
}

impl From<f64> for Price {
    fn from(value: f64) -> Self {
        Self::Decimal(value)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(value) => write!(f, "{value}"),
            Self::Unsigned(value) => write!(f, "{value}"),
            Self::Decimal(value) => write!(f, "{value}"),
        }
    }
}

/// A single dish offered on a menu.
#[derive(Debug, Clone, PartialEq)]
pub struct MenuItem {
    /// Upstream identifier.
    pub id: Identifier,
    /// Display name, scored against the user's cuisines.
    pub name: String,
    /// Listed price, passed through unchanged.
    pub price: Price,
}

impl MenuItem {
    /// Construct a menu item.
    pub fn new(
        id: impl Into<Identifier>,
        name: impl Into<String>,
        price: impl Into<Price>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price: price.into(),
        }
    }
}

/// A named group of menu items.
#[derive(Debug, Clone, PartialEq)]
pub struct Menu {
    /// Upstream identifier.
    pub id: Identifier,
    /// Display name.
    pub name: String,
    /// Items in upstream order.
    pub items: Vec<MenuItem>,
}

impl Menu {
    /// Construct a menu.
    pub fn new(id: impl Into<Identifier>, name: impl Into<String>, items: Vec<MenuItem>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            items,
        }
    }
}

/// A restaurant together with its menus.
///
/// # Examples
/// ```
/// use forkcast_core::{Coordinate, Menu, MenuItem, Restaurant};
///
/// let restaurant = Restaurant::new(1, "Pho 24", Some("21.0245,105.8412".into()))
///     .with_menu(Menu::new(10, "Lunch", vec![MenuItem::new(100, "Pho Bo", 45_000.0)]));
///
/// assert_eq!(restaurant.coordinate(), Ok(Coordinate::new(21.0245, 105.8412)));
/// assert_eq!(restaurant.item_names().collect::<Vec<_>>(), ["Pho Bo"]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Restaurant {
    /// Upstream identifier.
    pub id: Identifier,
    /// Display name.
    pub name: String,
    /// Raw `"lat,lon"` location, if the upstream supplied one.
    pub geo_location: Option<String>,
    /// Menus in upstream order.
    pub menus: Vec<Menu>,
}

impl Restaurant {
    /// Construct a restaurant without menus.
    pub fn new(
        id: impl Into<Identifier>,
        name: impl Into<String>,
        geo_location: Option<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            geo_location,
            menus: Vec::new(),
        }
    }

    /// Append a menu while returning `self` for chaining.
    #[must_use]
    pub fn with_menu(mut self, menu: Menu) -> Self {
        self.menus.push(menu);
        self
    }

    /// Parse the restaurant's location.
    ///
    /// # Errors
    /// Returns [`CoordinateError::Missing`] when no location was supplied and
    /// the parse error otherwise.
    pub fn coordinate(&self) -> Result<Coordinate, CoordinateError> {
        self.geo_location
            .as_deref()
            .ok_or(CoordinateError::Missing)
            .and_then(parse_coordinate)
    }

    /// Iterate over every item name across all menus, in menu order.
    pub fn item_names(&self) -> impl Iterator<Item = &str> {
        self.menus
            .iter()
            .flat_map(|menu| menu.items.iter().map(|item| item.name.as_str()))
    }
}
