//! Geographic coordinates and the `"lat,lon"` wire format.
//!
//! Coordinates are WGS84 degrees stored as a [`geo::Point`] with
//! `x = longitude` and `y = latitude`. Range checks are deliberately absent:
//! any pair of finite numbers is accepted and passed through.

use std::fmt;
use std::str::FromStr;

use geo::Point;
use thiserror::Error;

/// A latitude/longitude pair in degrees.
///
/// # Examples
/// ```
/// use forkcast_core::Coordinate;
///
/// let hanoi = Coordinate::new(21.0285, 105.8542);
/// assert_eq!(hanoi.latitude(), 21.0285);
/// assert_eq!(hanoi.longitude(), 105.8542);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coordinate {
    point: Point<f64>,
}

impl Coordinate {
    /// Construct a coordinate from latitude and longitude in degrees.
    #[must_use]
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            point: Point::new(longitude, latitude),
        }
    }

    /// Latitude in degrees.
    #[must_use]
    pub fn latitude(&self) -> f64 {
        self.point.y()
    }

    /// Longitude in degrees.
    #[must_use]
    pub fn longitude(&self) -> f64 {
        self.point.x()
    }

    /// Borrow the underlying `geo` point (`x = longitude`, `y = latitude`).
    #[must_use]
    pub const fn as_point(&self) -> &Point<f64> {
        &self.point
    }
}

impl From<Coordinate> for Point<f64> {
    fn from(value: Coordinate) -> Self {
        value.point
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.latitude(), self.longitude())
    }
}

/// Errors returned by [`parse_coordinate`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoordinateError {
    /// No coordinate was supplied at all.
    #[error("coordinate is missing")]
    Missing,
    /// The value did not split into exactly two comma-separated parts.
    #[error("expected \"lat,lon\" but found {parts} comma-separated part(s) in {raw:?}")]
    WrongArity {
        /// Number of parts found.
        parts: usize,
        /// The offending input.
        raw: String,
    },
    /// One component was not a finite decimal number.
    #[error("{component} {value:?} is not a finite number")]
    InvalidNumber {
        /// Which component failed (`"latitude"` or `"longitude"`).
        component: &'static str,
        /// The offending component text.
        value: String,
    },
}

/// Parse a `"lat,lon"` string into a [`Coordinate`].
///
/// Whitespace around each number is tolerated. NaN and infinities are
/// rejected.
///
/// # Errors
/// Returns [`CoordinateError`] when the input does not contain exactly two
/// finite, comma-separated numbers.
///
/// # Examples
/// ```
/// use forkcast_core::{Coordinate, CoordinateError, parse_coordinate};
///
/// assert_eq!(parse_coordinate("21.0285,105.8542"), Ok(Coordinate::new(21.0285, 105.8542)));
/// assert!(matches!(parse_coordinate("21.0285"), Err(CoordinateError::WrongArity { .. })));
/// ```
pub fn parse_coordinate(raw: &str) -> Result<Coordinate, CoordinateError> {
    let parts: Vec<&str> = raw.split(',').collect();
    let [lat, lon] = parts.as_slice() else {
        return Err(CoordinateError::WrongArity {
            parts: parts.len(),
            raw: raw.to_owned(),
        });
    };
    let latitude = parse_component(lat, "latitude")?;
    let longitude = parse_component(lon, "longitude")?;
    Ok(Coordinate::new(latitude, longitude))
}

fn parse_component(text: &str, component: &'static str) -> Result<f64, CoordinateError> {
    text.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or_else(|| CoordinateError::InvalidNumber {
            component,
            value: text.to_owned(),
        })
}

impl FromStr for Coordinate {
    type Err = CoordinateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_coordinate(s)
    }
}
