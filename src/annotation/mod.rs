//! Ownership-tracked storage for everything the engine draws.

use crate::error::AnnotationError;
use crate::math::GeoPoint;
use slotmap::SlotMap;

slotmap::new_key_type! {
    /// Opaque handle to a drawn annotation.
    pub struct AnnotationId;
}

/// A drawn object on the viewport.
#[derive(Debug, Clone, PartialEq)]
pub enum Annotation {
    /// Marker drawn at a placed vertex.
    VertexMarker(GeoPoint),
    /// Open line through the given points.
    Polyline(Vec<GeoPoint>),
    /// Closed polygon through the given points.
    Polygon(Vec<GeoPoint>),
    /// Permanent text label anchored at a point.
    Label { anchor: GeoPoint, text: String },
}

impl Annotation {
    /// Short name of the annotation kind, used in error messages.
    #[must_use]
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::VertexMarker(_) => "vertex marker",
            Self::Polyline(_) => "polyline",
            Self::Polygon(_) => "polygon",
            Self::Label { .. } => "label",
        }
    }

    /// The points describing this annotation's geometry.
    #[must_use]
    pub fn points(&self) -> &[GeoPoint] {
        match self {
            Self::VertexMarker(p) | Self::Label { anchor: p, .. } => std::slice::from_ref(p),
            Self::Polyline(pts) | Self::Polygon(pts) => pts,
        }
    }
}

/// Arena that owns every annotation created by the engine.
///
/// Handles are generational indices: once an annotation is removed, or the
/// whole layer is cleared, its old handle never resolves again.
#[derive(Debug, Default)]
pub struct AnnotationLayer {
    annotations: SlotMap<AnnotationId, Annotation>,
}

impl AnnotationLayer {
    /// Creates a new, empty layer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts an annotation and returns its handle.
    pub fn insert(&mut self, annotation: Annotation) -> AnnotationId {
        self.annotations.insert(annotation)
    }

    /// Returns a reference to the annotation, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the handle is stale or unknown.
    pub fn get(&self, id: AnnotationId) -> Result<&Annotation, AnnotationError> {
        self.annotations.get(id).ok_or(AnnotationError::NotFound)
    }

    /// Replaces the points of a polyline or polygon.
    ///
    /// # Errors
    ///
    /// Returns an error if the handle is unknown, or if it refers to a marker
    /// or label.
    pub fn update_points(
        &mut self,
        id: AnnotationId,
        points: Vec<GeoPoint>,
    ) -> Result<(), AnnotationError> {
        let annotation = self
            .annotations
            .get_mut(id)
            .ok_or(AnnotationError::NotFound)?;
        match annotation {
            Annotation::Polyline(pts) | Annotation::Polygon(pts) => {
                *pts = points;
                Ok(())
            }
            other => Err(AnnotationError::KindMismatch {
                expected: "polyline or polygon",
                actual: other.kind_name(),
            }),
        }
    }

    /// Removes an annotation, returning it if it was present.
    pub fn remove(&mut self, id: AnnotationId) -> Option<Annotation> {
        self.annotations.remove(id)
    }

    /// Returns `true` if the handle resolves to a live annotation.
    #[must_use]
    pub fn contains(&self, id: AnnotationId) -> bool {
        self.annotations.contains_key(id)
    }

    /// Drops every annotation, invalidating all outstanding handles.
    pub fn clear(&mut self) {
        self.annotations.clear();
    }

    /// Number of live annotations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.annotations.len()
    }

    /// Returns `true` if the layer holds no annotations.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.annotations.is_empty()
    }

    /// Iterates over all live annotations.
    pub fn iter(&self) -> impl Iterator<Item = (AnnotationId, &Annotation)> {
        self.annotations.iter()
    }

    /// Iterates over the live labels.
    pub fn labels(&self) -> impl Iterator<Item = (AnnotationId, &str)> {
        self.annotations.iter().filter_map(|(id, a)| match a {
            Annotation::Label { text, .. } => Some((id, text.as_str())),
            _ => None,
        })
    }
}
