//! Spherical-earth geometry used by the measurement engine.
//!
//! Everything in this module is pure: no allocation beyond return values, no
//! logging and no failure modes. Degenerate input yields zero-valued results.

pub mod bounds;
pub mod distance;
pub mod format;
pub mod ring;

pub use bounds::GeoBounds;
pub use distance::distance_meters;
pub use format::{format_area, format_distance, AreaUnits};
pub use ring::ring_area_square_meters;

/// Planar point type. For geographic data `x` is longitude and `y` latitude.
pub type Point2 = nalgebra::Point2<f64>;

/// Mean earth radius used for every spherical computation, in meters.
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Global tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;

/// A latitude/longitude pair in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPoint {
    lat: f64,
    lon: f64,
}

impl GeoPoint {
    /// Creates a point from latitude and longitude in decimal degrees.
    #[must_use]
    pub const fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Latitude in decimal degrees.
    #[must_use]
    pub const fn lat(&self) -> f64 {
        self.lat
    }

    /// Longitude in decimal degrees.
    #[must_use]
    pub const fn lon(&self) -> f64 {
        self.lon
    }

    /// Returns the point as `(lon, lat)` in the plane.
    #[must_use]
    pub fn to_planar(&self) -> Point2 {
        Point2::new(self.lon, self.lat)
    }

    /// Builds a point back from its planar `(lon, lat)` form.
    #[must_use]
    pub fn from_planar(p: &Point2) -> Self {
        Self::new(p.y, p.x)
    }
}

impl From<(f64, f64)> for GeoPoint {
    /// Converts a `(lat, lon)` tuple.
    fn from((lat, lon): (f64, f64)) -> Self {
        Self::new(lat, lon)
    }
}
