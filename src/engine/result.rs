use crate::annotation::AnnotationId;
use crate::math::GeoPoint;

/// What a measurement measured.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MeasurementKind {
    /// Great-circle distance in meters.
    Distance,
    /// Enclosed area in square meters.
    Area,
}

/// A finished measurement and the annotations it owns on the viewport.
#[derive(Debug, Clone, PartialEq)]
pub struct MeasurementResult {
    kind: MeasurementKind,
    magnitude: f64,
    anchor: GeoPoint,
    text: String,
    label: AnnotationId,
    shape: AnnotationId,
    markers: Vec<AnnotationId>,
}

impl MeasurementResult {
    pub(crate) fn new(
        kind: MeasurementKind,
        magnitude: f64,
        anchor: GeoPoint,
        text: String,
        label: AnnotationId,
        shape: AnnotationId,
        markers: Vec<AnnotationId>,
    ) -> Self {
        Self {
            kind,
            magnitude,
            anchor,
            text,
            label,
            shape,
            markers,
        }
    }

    #[must_use]
    pub fn kind(&self) -> MeasurementKind {
        self.kind
    }

    /// Meters for distances, square meters for areas.
    #[must_use]
    pub fn magnitude(&self) -> f64 {
        self.magnitude
    }

    /// Where the label is placed.
    #[must_use]
    pub fn anchor(&self) -> GeoPoint {
        self.anchor
    }

    /// The formatted label text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn label(&self) -> AnnotationId {
        self.label
    }

    /// The finalized line or polygon.
    #[must_use]
    pub fn shape(&self) -> AnnotationId {
        self.shape
    }

    /// Vertex markers left on the map by this measurement.
    #[must_use]
    pub fn markers(&self) -> &[AnnotationId] {
        &self.markers
    }
}
