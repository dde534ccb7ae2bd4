//! The map canvas the engine draws on.

mod scene;

pub use scene::SceneViewport;

use crate::annotation::AnnotationId;
use crate::math::{GeoBounds, GeoPoint};

/// Input forwarded from the host map to the engine.
///
/// The host owns event subscription; it translates its own click, double-click
/// and pointer events into these values and hands them to
/// [`MeasureEngine::handle_event`](crate::engine::MeasureEngine::handle_event).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ViewportEvent {
    Click(GeoPoint),
    DoubleClick,
    PointerMove(GeoPoint),
}

/// Rendering primitives a map viewport exposes to the engine.
///
/// Handles are allocated by the engine's [`AnnotationLayer`](crate::annotation::AnnotationLayer)
/// and passed in; calling a `draw_or_update_*` method again with the same
/// handle replaces the previously drawn geometry.
pub trait Viewport {
    /// Draws a marker at a placed vertex.
    fn draw_vertex_marker(&mut self, id: AnnotationId, point: GeoPoint);

    /// Draws, or redraws, an open line through `points`.
    fn draw_or_update_polyline(&mut self, id: AnnotationId, points: &[GeoPoint]);

    /// Draws, or redraws, a closed polygon through `points`.
    fn draw_or_update_polygon(&mut self, id: AnnotationId, points: &[GeoPoint]);

    /// Places a label that stays until removed.
    fn place_permanent_label(&mut self, id: AnnotationId, anchor: GeoPoint, text: &str);

    /// Removes a single drawn object. Unknown handles are ignored.
    fn remove_handle(&mut self, id: AnnotationId);

    /// Removes every object drawn through this trait.
    fn clear_all_handles(&mut self);

    /// Center of the bounding box of `points`, or `None` if there are none.
    fn bounding_box_centroid(&self, points: &[GeoPoint]) -> Option<GeoPoint> {
        GeoBounds::from_points(points).map(|b| b.centroid())
    }
}
