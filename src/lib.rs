//! Interactive distance and area measurement for geographic map viewports.
//!
//! The [`math`] module holds the spherical geometry; [`engine::MeasureEngine`]
//! turns viewport clicks into measurements and draws them through a
//! [`viewport::Viewport`] implementation supplied by the host.

pub mod annotation;
pub mod engine;
pub mod error;
pub mod math;
pub mod viewport;

pub use engine::{MeasureConfig, MeasureEngine, MeasureMode, MeasurementResult};
pub use error::{MeasureError, Result};
pub use math::GeoPoint;
