use slotmap::SecondaryMap;

use super::Viewport;
use crate::annotation::{Annotation, AnnotationId};
use crate::math::GeoPoint;

/// A retained, in-memory viewport.
///
/// Keeps the last drawn state of every handle so it can be inspected or
/// handed to a renderer. Useful for headless hosts and tests.
#[derive(Debug, Default)]
pub struct SceneViewport {
    objects: SecondaryMap<AnnotationId, Annotation>,
}

impl SceneViewport {
    /// Creates an empty scene.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the object drawn for `id`, if any.
    #[must_use]
    pub fn get(&self, id: AnnotationId) -> Option<&Annotation> {
        self.objects.get(id)
    }

    /// Number of drawn objects.
    #[must_use]
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Returns `true` if nothing is drawn.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Iterates over every drawn object.
    pub fn iter(&self) -> impl Iterator<Item = (AnnotationId, &Annotation)> {
        self.objects.iter()
    }

    /// Texts of all drawn labels.
    #[must_use]
    pub fn label_texts(&self) -> Vec<&str> {
        self.objects
            .values()
            .filter_map(|a| match a {
                Annotation::Label { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Number of drawn vertex markers.
    #[must_use]
    pub fn marker_count(&self) -> usize {
        self.objects
            .values()
            .filter(|a| matches!(a, Annotation::VertexMarker(_)))
            .count()
    }
}

impl Viewport for SceneViewport {
    fn draw_vertex_marker(&mut self, id: AnnotationId, point: GeoPoint) {
        self.objects.insert(id, Annotation::VertexMarker(point));
    }

    fn draw_or_update_polyline(&mut self, id: AnnotationId, points: &[GeoPoint]) {
        self.objects.insert(id, Annotation::Polyline(points.to_vec()));
    }

    fn draw_or_update_polygon(&mut self, id: AnnotationId, points: &[GeoPoint]) {
        self.objects.insert(id, Annotation::Polygon(points.to_vec()));
    }

    fn place_permanent_label(&mut self, id: AnnotationId, anchor: GeoPoint, text: &str) {
        self.objects.insert(
            id,
            Annotation::Label {
                anchor,
                text: text.to_owned(),
            },
        );
    }

    fn remove_handle(&mut self, id: AnnotationId) {
        self.objects.remove(id);
    }

    fn clear_all_handles(&mut self) {
        self.objects.clear();
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::annotation::AnnotationLayer;

    fn p(lat: f64, lon: f64) -> GeoPoint {
        GeoPoint::new(lat, lon)
    }

    #[test]
    fn redraw_replaces_geometry() {
        let mut layer = AnnotationLayer::new();
        let mut scene = SceneViewport::new();
        let id = layer.insert(Annotation::Polygon(vec![]));

        scene.draw_or_update_polygon(id, &[p(0.0, 0.0)]);
        scene.draw_or_update_polygon(id, &[p(0.0, 0.0), p(1.0, 0.0), p(1.0, 1.0)]);

        assert_eq!(scene.len(), 1);
        assert_eq!(scene.get(id).unwrap().points().len(), 3);
    }

    #[test]
    fn remove_and_clear() {
        let mut layer = AnnotationLayer::new();
        let mut scene = SceneViewport::new();
        let marker = layer.insert(Annotation::VertexMarker(p(0.0, 0.0)));
        let label = layer.insert(Annotation::Label {
            anchor: p(0.0, 0.0),
            text: "5.0 m".into(),
        });

        scene.draw_vertex_marker(marker, p(0.0, 0.0));
        scene.place_permanent_label(label, p(0.0, 0.0), "5.0 m");
        assert_eq!(scene.marker_count(), 1);
        assert_eq!(scene.label_texts(), vec!["5.0 m"]);

        scene.remove_handle(marker);
        scene.remove_handle(marker);
        assert_eq!(scene.len(), 1);

        scene.clear_all_handles();
        assert!(scene.is_empty());
    }

    #[test]
    fn default_centroid_uses_bounding_box() {
        let scene = SceneViewport::new();
        assert!(scene.bounding_box_centroid(&[]).is_none());
        let c = scene
            .bounding_box_centroid(&[p(0.0, 0.0), p(2.0, 4.0), p(1.0, 1.0)])
            .unwrap();
        assert_eq!(c, p(1.0, 2.0));
    }
}
