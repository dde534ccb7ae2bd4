use crate::annotation::AnnotationId;
use crate::math::GeoPoint;

/// Which tool is active.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum MeasureMode {
    #[default]
    Idle,
    MeasuringDistance,
    MeasuringArea,
}

impl MeasureMode {
    /// Vertices needed before a measurement in this mode can be finalized.
    #[must_use]
    pub fn min_vertices(self) -> usize {
        match self {
            Self::Idle => 0,
            Self::MeasuringDistance => 2,
            Self::MeasuringArea => 3,
        }
    }

    #[must_use]
    pub fn is_idle(self) -> bool {
        self == Self::Idle
    }
}

/// State of the measurement currently being placed.
///
/// `vertices` and `vertex_markers` run in parallel, and `pending_shape` is
/// present exactly when at least one vertex has been placed.
#[derive(Debug, Default)]
pub struct MeasurementSession {
    mode: MeasureMode,
    vertices: Vec<GeoPoint>,
    vertex_markers: Vec<AnnotationId>,
    pending_shape: Option<AnnotationId>,
    hover: Option<GeoPoint>,
}

/// Handles and geometry released when a session ends.
#[derive(Debug)]
pub(crate) struct DrainedSession {
    pub vertices: Vec<GeoPoint>,
    pub vertex_markers: Vec<AnnotationId>,
    pub pending_shape: Option<AnnotationId>,
}

impl MeasurementSession {
    #[must_use]
    pub fn mode(&self) -> MeasureMode {
        self.mode
    }

    /// Placed vertices in click order.
    #[must_use]
    pub fn vertices(&self) -> &[GeoPoint] {
        &self.vertices
    }

    #[must_use]
    pub fn vertex_markers(&self) -> &[AnnotationId] {
        &self.vertex_markers
    }

    /// Handle of the in-progress line or polygon.
    #[must_use]
    pub fn pending_shape(&self) -> Option<AnnotationId> {
        self.pending_shape
    }

    /// Last pointer position seen since the latest vertex, if any.
    #[must_use]
    pub fn hover(&self) -> Option<GeoPoint> {
        self.hover
    }

    /// Vertices followed by the hover point, if one is set.
    #[must_use]
    pub fn preview_points(&self) -> Vec<GeoPoint> {
        self.vertices.iter().copied().chain(self.hover).collect()
    }

    /// Returns `true` if the documented invariants hold.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        let parallel = self.vertices.len() == self.vertex_markers.len();
        let shape = self.pending_shape.is_some() == !self.vertices.is_empty();
        let idle_empty = !self.mode.is_idle() || self.vertices.is_empty();
        parallel && shape && idle_empty
    }

    pub(crate) fn set_mode(&mut self, mode: MeasureMode) {
        self.mode = mode;
    }

    pub(crate) fn set_pending_shape(&mut self, id: AnnotationId) {
        self.pending_shape = Some(id);
    }

    pub(crate) fn set_hover(&mut self, point: Option<GeoPoint>) {
        self.hover = point;
    }

    pub(crate) fn push_vertex(&mut self, point: GeoPoint, marker: AnnotationId) {
        self.vertices.push(point);
        self.vertex_markers.push(marker);
        self.hover = None;
    }

    /// Empties the session, keeping the mode.
    pub(crate) fn drain(&mut self) -> DrainedSession {
        self.hover = None;
        DrainedSession {
            vertices: std::mem::take(&mut self.vertices),
            vertex_markers: std::mem::take(&mut self.vertex_markers),
            pending_shape: self.pending_shape.take(),
        }
    }
}
