//! Click-driven measurement state machine.
//!
//! A [`MeasureEngine`] owns one [`MeasurementSession`] at a time together with
//! the [`AnnotationLayer`] holding every handle it has drawn. The host forwards
//! viewport input to it; every transition completes synchronously inside the
//! call that triggered it.

mod config;
mod result;
mod session;

pub use config::{ClosureStrategy, MeasureConfig, DEFAULT_PROXIMITY_THRESHOLD_M};
pub use result::{MeasurementKind, MeasurementResult};
pub use session::{MeasureMode, MeasurementSession};

use std::fmt;

use tracing::{debug, info, trace, warn};

use crate::annotation::{Annotation, AnnotationId, AnnotationLayer};
use crate::error::Result;
use crate::math::{distance_meters, format_distance, ring_area_square_meters, GeoPoint};
use crate::viewport::{Viewport, ViewportEvent};

/// What an input event did to the engine.
#[derive(Debug, Clone, PartialEq)]
pub enum EventOutcome {
    /// No measurement is active, or the event does not apply.
    Ignored,
    /// A vertex was placed; `count` is the session's vertex count.
    VertexAdded { count: usize },
    /// The pending shape now follows the pointer.
    Previewed { magnitude: Option<f64> },
    /// The measurement was finalized.
    Completed(MeasurementResult),
    /// The session ended without a result.
    Discarded,
}

type ModeListener = Box<dyn FnMut(MeasureMode)>;

/// Interactive distance and area measurement over a [`Viewport`].
pub struct MeasureEngine<V: Viewport> {
    viewport: V,
    config: MeasureConfig,
    layer: AnnotationLayer,
    session: MeasurementSession,
    results: Vec<MeasurementResult>,
    mode_listener: Option<ModeListener>,
}

impl<V: Viewport> MeasureEngine<V> {
    /// Creates an idle engine drawing on `viewport`.
    ///
    /// # Errors
    ///
    /// Returns an error if `config` does not validate.
    pub fn new(viewport: V, config: MeasureConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::build(viewport, config))
    }

    /// Creates an idle engine with [`MeasureConfig::default`].
    #[must_use]
    pub fn with_defaults(viewport: V) -> Self {
        Self::build(viewport, MeasureConfig::default())
    }

    fn build(viewport: V, config: MeasureConfig) -> Self {
        Self {
            viewport,
            config,
            layer: AnnotationLayer::new(),
            session: MeasurementSession::default(),
            results: Vec::new(),
            mode_listener: None,
        }
    }

    #[must_use]
    pub fn mode(&self) -> MeasureMode {
        self.session.mode()
    }

    #[must_use]
    pub fn session(&self) -> &MeasurementSession {
        &self.session
    }

    #[must_use]
    pub fn config(&self) -> &MeasureConfig {
        &self.config
    }

    #[must_use]
    pub fn layer(&self) -> &AnnotationLayer {
        &self.layer
    }

    #[must_use]
    pub fn viewport(&self) -> &V {
        &self.viewport
    }

    /// Finalized measurements, oldest first.
    #[must_use]
    pub fn results(&self) -> &[MeasurementResult] {
        &self.results
    }

    /// Registers a callback run on every mode change, replacing any previous one.
    pub fn set_mode_listener(&mut self, listener: impl FnMut(MeasureMode) + 'static) {
        self.mode_listener = Some(Box::new(listener));
    }

    /// Starts a two-point distance measurement, discarding any unfinished one.
    pub fn start_distance(&mut self) {
        self.start(MeasureMode::MeasuringDistance);
    }

    /// Starts an area measurement, discarding any unfinished one.
    pub fn start_area(&mut self) {
        self.start(MeasureMode::MeasuringArea);
    }

    /// Aborts the measurement in progress without touching finished ones.
    ///
    /// Returns `false` if the engine was already idle.
    pub fn cancel(&mut self) -> bool {
        if self.mode().is_idle() {
            return false;
        }
        self.discard_pending();
        self.set_mode(MeasureMode::Idle);
        true
    }

    /// Removes every annotation, finished or pending, and returns to idle.
    pub fn clear_all(&mut self) {
        self.session.drain();
        self.layer.clear();
        self.viewport.clear_all_handles();
        self.results.clear();
        debug!("cleared all measurements");
        self.set_mode(MeasureMode::Idle);
    }

    /// Tears the engine down, erasing its drawings and returning the viewport.
    pub fn dispose(mut self) -> V {
        self.viewport.clear_all_handles();
        self.viewport
    }

    /// Routes a viewport event to the matching handler.
    pub fn handle_event(&mut self, event: ViewportEvent) -> EventOutcome {
        match event {
            ViewportEvent::Click(point) => self.on_viewport_click(point),
            ViewportEvent::DoubleClick => self.on_viewport_double_click(),
            ViewportEvent::PointerMove(point) => self.on_pointer_move(point),
        }
    }

    /// Places a vertex, finalizing the measurement when it is complete.
    pub fn on_viewport_click(&mut self, point: GeoPoint) -> EventOutcome {
        let outcome = match self.mode() {
            MeasureMode::Idle => {
                trace!(lat = point.lat(), lon = point.lon(), "click ignored while idle");
                EventOutcome::Ignored
            }
            MeasureMode::MeasuringDistance => {
                self.add_vertex(point);
                if self.session.vertices().len() >= MeasureMode::MeasuringDistance.min_vertices() {
                    self.finalize(MeasurementKind::Distance)
                } else {
                    self.vertex_added()
                }
            }
            MeasureMode::MeasuringArea => {
                if self.closes_ring(point) {
                    debug!("click near first vertex closes ring");
                    self.finalize(MeasurementKind::Area)
                } else {
                    self.add_vertex(point);
                    self.vertex_added()
                }
            }
        };
        debug_assert!(self.session.is_consistent());
        outcome
    }

    /// Finishes the measurement, or discards it if too few vertices are placed.
    pub fn on_viewport_double_click(&mut self) -> EventOutcome {
        let mode = self.mode();
        let kind = match mode {
            MeasureMode::Idle => return EventOutcome::Ignored,
            MeasureMode::MeasuringDistance => MeasurementKind::Distance,
            MeasureMode::MeasuringArea => MeasurementKind::Area,
        };
        let count = self.session.vertices().len();
        let outcome = if count < mode.min_vertices() {
            debug!(?mode, count, "double-click before minimum vertex count, discarding");
            self.discard_pending();
            self.set_mode(MeasureMode::Idle);
            EventOutcome::Discarded
        } else {
            self.finalize(kind)
        };
        debug_assert!(self.session.is_consistent());
        outcome
    }

    /// Stretches the pending shape to the pointer without placing a vertex.
    pub fn on_pointer_move(&mut self, point: GeoPoint) -> EventOutcome {
        if self.mode().is_idle() || self.session.vertices().is_empty() {
            return EventOutcome::Ignored;
        }
        self.session.set_hover(Some(point));
        self.redraw_pending();
        EventOutcome::Previewed {
            magnitude: self.live_measurement(),
        }
    }

    /// Running magnitude of the shape being placed, including the hover point.
    ///
    /// `None` while idle or while the shape is too small to measure.
    #[must_use]
    pub fn live_measurement(&self) -> Option<f64> {
        let points = self.session.preview_points();
        match self.mode() {
            MeasureMode::Idle => None,
            MeasureMode::MeasuringDistance => match points.as_slice() {
                [a, b, ..] => Some(distance_meters(*a, *b)),
                _ => None,
            },
            MeasureMode::MeasuringArea => {
                (points.len() >= 3).then(|| ring_area_square_meters(&points))
            }
        }
    }

    fn start(&mut self, mode: MeasureMode) {
        self.discard_pending();
        self.set_mode(mode);
    }

    fn set_mode(&mut self, mode: MeasureMode) {
        let previous = self.session.mode();
        self.session.set_mode(mode);
        if previous != mode {
            debug!(?previous, ?mode, "measurement mode changed");
            if let Some(listener) = self.mode_listener.as_mut() {
                listener(mode);
            }
        }
    }

    fn vertex_added(&self) -> EventOutcome {
        EventOutcome::VertexAdded {
            count: self.session.vertices().len(),
        }
    }

    fn closes_ring(&self, point: GeoPoint) -> bool {
        if !self.config.closure.closes_on_proximity() {
            return false;
        }
        let vertices = self.session.vertices();
        vertices.len() >= MeasureMode::MeasuringArea.min_vertices()
            && distance_meters(point, vertices[0]) <= self.config.proximity_threshold_m
    }

    fn add_vertex(&mut self, point: GeoPoint) {
        let marker = self.layer.insert(Annotation::VertexMarker(point));
        self.viewport.draw_vertex_marker(marker, point);
        self.session.push_vertex(point, marker);
        debug!(
            lat = point.lat(),
            lon = point.lon(),
            count = self.session.vertices().len(),
            "vertex placed"
        );

        if self.session.pending_shape().is_none() {
            let shape = match self.mode() {
                MeasureMode::MeasuringArea => Annotation::Polygon(Vec::new()),
                _ => Annotation::Polyline(Vec::new()),
            };
            let id = self.layer.insert(shape);
            self.session.set_pending_shape(id);
        }
        self.redraw_pending();
    }

    /// Pushes the session's current geometry to the pending shape.
    fn redraw_pending(&mut self) {
        let Some(id) = self.session.pending_shape() else {
            return;
        };
        let points = self.session.preview_points();
        self.draw_shape(id, points);
    }

    fn draw_shape(&mut self, id: AnnotationId, points: Vec<GeoPoint>) {
        match self.mode() {
            MeasureMode::MeasuringArea => self.viewport.draw_or_update_polygon(id, &points),
            _ => self.viewport.draw_or_update_polyline(id, &points),
        }
        if let Err(err) = self.layer.update_points(id, points) {
            warn!(%err, "pending shape missing from annotation layer");
        }
    }

    /// Removes the unfinished session's drawings, keeping the mode.
    fn discard_pending(&mut self) {
        let drained = self.session.drain();
        for id in drained.vertex_markers.into_iter().chain(drained.pending_shape) {
            self.layer.remove(id);
            self.viewport.remove_handle(id);
        }
    }

    fn finalize(&mut self, kind: MeasurementKind) -> EventOutcome {
        self.session.set_hover(None);
        self.redraw_pending();
        let drained = self.session.drain();
        let Some(shape) = drained.pending_shape else {
            self.set_mode(MeasureMode::Idle);
            return EventOutcome::Discarded;
        };
        let vertices = drained.vertices;

        let (magnitude, anchor, text) = match kind {
            MeasurementKind::Distance => {
                let magnitude = match vertices.as_slice() {
                    [a, b, ..] => distance_meters(*a, *b),
                    _ => 0.0,
                };
                let anchor = vertices.last().copied().unwrap_or(GeoPoint::new(0.0, 0.0));
                (magnitude, anchor, format_distance(magnitude))
            }
            MeasurementKind::Area => {
                let magnitude = ring_area_square_meters(&vertices);
                let anchor = self
                    .viewport
                    .bounding_box_centroid(&vertices)
                    .or_else(|| vertices.first().copied())
                    .unwrap_or(GeoPoint::new(0.0, 0.0));
                (magnitude, anchor, self.config.area_units.format(magnitude))
            }
        };

        let label = self.layer.insert(Annotation::Label {
            anchor,
            text: text.clone(),
        });
        self.viewport.place_permanent_label(label, anchor, &text);
        info!(?kind, magnitude, label = %text, "measurement finalized");

        let result = MeasurementResult::new(
            kind,
            magnitude,
            anchor,
            text,
            label,
            shape,
            drained.vertex_markers,
        );
        self.results.push(result.clone());
        self.set_mode(MeasureMode::Idle);
        EventOutcome::Completed(result)
    }
}

impl<V: Viewport + fmt::Debug> fmt::Debug for MeasureEngine<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MeasureEngine")
            .field("viewport", &self.viewport)
            .field("config", &self.config)
            .field("session", &self.session)
            .field("annotations", &self.layer.len())
            .field("results", &self.results.len())
            .finish_non_exhaustive()
    }
}
