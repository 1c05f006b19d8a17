//! Great-circle distance between coordinates.

use crate::Coordinate;

/// Mean Earth radius used by [`haversine_km`], in kilometres.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Great-circle distance between `a` and `b` in kilometres.
///
/// Uses the haversine formula on a sphere of radius [`EARTH_RADIUS_KM`].
/// Every finite input produces a finite result; pole and antipode cases are
/// not special-cased.
///
/// # Examples
/// ```
/// use forkcast_core::{Coordinate, haversine_km};
///
/// let origin = Coordinate::new(0.0, 0.0);
/// let east = Coordinate::new(0.0, 1.0);
/// assert!((haversine_km(origin, east) - 111.195).abs() < 0.001);
/// assert_eq!(haversine_km(origin, origin), 0.0);
/// ```
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "the haversine formula is floating-point trigonometry"
)]
pub fn haversine_km(a: Coordinate, b: Coordinate) -> f64 {
    let lat_a = a.latitude().to_radians();
    let lat_b = b.latitude().to_radians();
    let delta_lat = (b.latitude() - a.latitude()).to_radians();
    let delta_lon = (b.longitude() - a.longitude()).to_radians();

    let raw = (delta_lat / 2.0).sin().powi(2)
        + lat_a.cos() * lat_b.cos() * (delta_lon / 2.0).sin().powi(2);
    // Rounding near antipodes can push `h` just past 1.0.
    let h = raw.clamp(0.0, 1.0);
    2.0 * EARTH_RADIUS_KM * h.sqrt().atan2((1.0 - h).sqrt())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rstest::rstest;

    const TOLERANCE_KM: f64 = 1e-3;

    #[rstest]
    #[case((21.0285, 105.8542), (21.0245, 105.8412), 1.420_7)]
    #[case((0.0, 0.0), (0.0, 1.0), 111.194_9)]
    #[case((51.5, -0.1), (51.6, -0.2), 13.094_0)]
    #[case((0.0, 0.0), (0.0, 180.0), 20_015.087)]
    fn known_distances(#[case] a: (f64, f64), #[case] b: (f64, f64), #[case] expected: f64) {
        let distance = haversine_km(Coordinate::new(a.0, a.1), Coordinate::new(b.0, b.1));
        assert!(
            (distance - expected).abs() < TOLERANCE_KM,
            "expected {expected}, got {distance}"
        );
    }

    #[rstest]
    fn identical_points_are_zero_apart() {
        let point = Coordinate::new(-45.0, 170.0);
        assert_eq!(haversine_km(point, point), 0.0);
    }

    proptest! {
        #[test]
        fn distance_is_symmetric(
            lat_a in -90.0_f64..=90.0,
            lon_a in -180.0_f64..=180.0,
            lat_b in -90.0_f64..=90.0,
            lon_b in -180.0_f64..=180.0,
        ) {
            let a = Coordinate::new(lat_a, lon_a);
            let b = Coordinate::new(lat_b, lon_b);
            let forward = haversine_km(a, b);
            let backward = haversine_km(b, a);
            prop_assert!((forward - backward).abs() < 1e-9);
            prop_assert!(forward.is_finite());
            prop_assert!(forward >= 0.0);
        }

        #[test]
        fn self_distance_is_zero(lat in -90.0_f64..=90.0, lon in -180.0_f64..=180.0) {
            let point = Coordinate::new(lat, lon);
            prop_assert_eq!(haversine_km(point, point), 0.0);
        }
    }
}
