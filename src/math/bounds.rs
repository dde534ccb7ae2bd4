use super::{GeoPoint, Point2};

/// An axis-aligned latitude/longitude bounding box.
///
/// Corners are stored in planar form, `x` = longitude and `y` = latitude.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoBounds {
    /// South-west corner.
    pub min: Point2,
    /// North-east corner.
    pub max: Point2,
}

impl GeoBounds {
    /// Computes the bounds of a set of points, or `None` if it is empty.
    #[must_use]
    pub fn from_points(points: &[GeoPoint]) -> Option<Self> {
        let (first, rest) = points.split_first()?;
        let start = first.to_planar();
        let mut bounds = Self {
            min: start,
            max: start,
        };
        for pt in rest {
            bounds.extend(pt);
        }
        Some(bounds)
    }

    /// Grows the box to contain `point`.
    pub fn extend(&mut self, point: &GeoPoint) {
        let p = point.to_planar();
        self.min = self.min.inf(&p);
        self.max = self.max.sup(&p);
    }

    /// Center of the box.
    #[must_use]
    pub fn centroid(&self) -> GeoPoint {
        GeoPoint::from_planar(&nalgebra::center(&self.min, &self.max))
    }

    /// Returns `true` if `point` lies inside or on the edge of the box.
    #[must_use]
    pub fn contains(&self, point: &GeoPoint) -> bool {
        let p = point.to_planar();
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::TOLERANCE;

    #[test]
    fn empty_has_no_bounds() {
        assert!(GeoBounds::from_points(&[]).is_none());
    }

    #[test]
    fn single_point_is_its_own_centroid() {
        let p = GeoPoint::new(41.0, 1.0);
        let bounds = GeoBounds::from_points(&[p]).unwrap();
        assert_eq!(bounds.centroid(), p);
    }

    #[test]
    fn centroid_of_triangle_is_box_center() {
        let pts = [
            GeoPoint::new(41.0, 1.0),
            GeoPoint::new(41.001, 1.0),
            GeoPoint::new(41.001, 1.001),
        ];
        let bounds = GeoBounds::from_points(&pts).unwrap();
        let c = bounds.centroid();
        assert!((c.lat() - 41.0005).abs() < TOLERANCE);
        assert!((c.lon() - 1.0005).abs() < TOLERANCE);
        assert!(pts.iter().all(|p| bounds.contains(p)));
        assert!(!bounds.contains(&GeoPoint::new(42.0, 1.0)));
    }
}
