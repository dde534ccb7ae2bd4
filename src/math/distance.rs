use super::{GeoPoint, EARTH_RADIUS_M};

/// Great-circle distance between two points, in meters (haversine formula).
///
/// The square-root argument is clamped to `1.0` so that floating-point
/// overshoot near antipodal points cannot push `asin` out of its domain.
#[must_use]
pub fn distance_meters(a: GeoPoint, b: GeoPoint) -> f64 {
    let lat1 = a.lat().to_radians();
    let lat2 = b.lat().to_radians();
    let dlat = lat2 - lat1;
    let dlon = (b.lon() - a.lon()).to_radians();

    let h = (dlat * 0.5).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon * 0.5).sin().powi(2);
    let c = 2.0 * h.sqrt().min(1.0).asin();

    EARTH_RADIUS_M * c
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use std::f64::consts::PI;

    fn p(lat: f64, lon: f64) -> GeoPoint {
        GeoPoint::new(lat, lon)
    }

    #[test]
    fn identical_points_are_zero() {
        for pt in [p(0.0, 0.0), p(41.0, 1.0), p(-89.9, 179.9), p(90.0, 0.0)] {
            assert_abs_diff_eq!(distance_meters(pt, pt), 0.0);
        }
    }

    #[test]
    fn symmetric() {
        let pairs = [
            (p(41.0, 1.0), p(41.0, 1.1)),
            (p(-33.9, 151.2), p(51.5, -0.1)),
            (p(0.0, 179.5), p(0.0, -179.5)),
        ];
        for (a, b) in pairs {
            assert_abs_diff_eq!(distance_meters(a, b), distance_meters(b, a), epsilon = 1e-6);
        }
    }

    #[test]
    fn antipodal_is_half_circumference() {
        let expected = PI * EARTH_RADIUS_M;
        for (a, b) in [
            (p(0.0, 0.0), p(0.0, 180.0)),
            (p(45.0, 10.0), p(-45.0, -170.0)),
            (p(90.0, 0.0), p(-90.0, 0.0)),
        ] {
            let d = distance_meters(a, b);
            assert!(d.is_finite());
            assert_relative_eq!(d, expected, max_relative = 1e-9);
        }
    }

    #[test]
    fn one_degree_of_latitude() {
        // R * pi / 180
        let d = distance_meters(p(0.0, 0.0), p(1.0, 0.0));
        assert_relative_eq!(d, 111_194.926_644_558_7, max_relative = 1e-9);
    }

    #[test]
    fn crossing_the_antimeridian_takes_the_short_way() {
        let d = distance_meters(p(0.0, 179.5), p(0.0, -179.5));
        let one_degree = distance_meters(p(0.0, 0.0), p(0.0, 1.0));
        assert_relative_eq!(d, one_degree, max_relative = 1e-9);
    }
}
