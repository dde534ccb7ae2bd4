use super::{GeoPoint, EARTH_RADIUS_M};

/// Area enclosed by a ring on the sphere, in square meters.
///
/// The ring is implicitly closed: the last point connects back to the first,
/// so callers must not repeat the first point at the end. Rings with fewer than
/// three points are degenerate and have zero area.
///
/// Uses the spherical excess approximation, summing
/// `(lon2 - lon1) * (2 + sin(lat1) + sin(lat2))` over every edge. The result is
/// meaningful only for simple rings that do not enclose a pole; self-intersecting
/// rings still produce a finite value.
#[must_use]
pub fn ring_area_square_meters(ring: &[GeoPoint]) -> f64 {
    let n = ring.len();
    if n < 3 {
        return 0.0;
    }
    let mut sum = 0.0;
    for i in 0..n {
        let a = ring[i];
        let b = ring[(i + 1) % n];
        let dlon = (b.lon() - a.lon()).to_radians();
        sum += dlon * (2.0 + a.lat().to_radians().sin() + b.lat().to_radians().sin());
    }
    (sum * EARTH_RADIUS_M * EARTH_RADIUS_M * 0.5).abs()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    fn p(lat: f64, lon: f64) -> GeoPoint {
        GeoPoint::new(lat, lon)
    }

    fn one_degree_square() -> Vec<GeoPoint> {
        vec![p(0.0, 0.0), p(0.0, 1.0), p(1.0, 1.0), p(1.0, 0.0)]
    }

    #[test]
    fn degenerate_rings_are_zero() {
        assert_abs_diff_eq!(ring_area_square_meters(&[]), 0.0);
        assert_abs_diff_eq!(ring_area_square_meters(&[p(1.0, 1.0)]), 0.0);
        assert_abs_diff_eq!(ring_area_square_meters(&[p(1.0, 1.0), p(2.0, 2.0)]), 0.0);
    }

    #[test]
    fn one_degree_square_at_equator() {
        // Exact lat/lon cell area: R^2 * dlon * (sin(lat2) - sin(lat1)).
        let one = 1.0_f64.to_radians();
        let expected = EARTH_RADIUS_M * EARTH_RADIUS_M * one * one.sin();
        let area = ring_area_square_meters(&one_degree_square());
        assert_relative_eq!(area, expected, max_relative = 1e-9);
    }

    #[test]
    fn winding_order_does_not_matter() {
        let ccw = one_degree_square();
        let cw: Vec<_> = ccw.iter().rev().copied().collect();
        assert_relative_eq!(
            ring_area_square_meters(&ccw),
            ring_area_square_meters(&cw),
            max_relative = 1e-12
        );
    }

    #[test]
    fn invariant_under_rotation() {
        let ring = vec![
            p(41.0, 1.0),
            p(41.001, 1.0),
            p(41.001, 1.001),
            p(41.0005, 1.002),
            p(40.9995, 1.0008),
        ];
        let base = ring_area_square_meters(&ring);
        assert!(base > 0.0);
        for shift in 1..ring.len() {
            let mut rotated = ring.clone();
            rotated.rotate_left(shift);
            assert_relative_eq!(ring_area_square_meters(&rotated), base, max_relative = 1e-9);
        }
    }

    #[test]
    fn collinear_ring_is_zero() {
        let ring = [p(0.0, 0.0), p(0.0, 1.0), p(0.0, 2.0)];
        assert_abs_diff_eq!(ring_area_square_meters(&ring), 0.0, epsilon = 1e-6);
    }

    #[test]
    fn small_triangle_matches_planar_estimate() {
        // Right triangle with ~111 m legs at the equator: ~6182 m^2.
        let ring = [p(0.0, 0.0), p(0.001, 0.0), p(0.0, 0.001)];
        let leg = 111_194.926_644_558_7 * 0.001;
        assert_relative_eq!(ring_area_square_meters(&ring), leg * leg * 0.5, max_relative = 1e-4);
    }
}
