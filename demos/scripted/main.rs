//! Headless walkthrough of the measurement engine.
//!
//! Usage:
//! ```text
//! cargo run --example scripted                 # distance and area
//! cargo run --example scripted -- hectares     # area labels in hectares
//! RUST_LOG=geomeasure=debug cargo run --example scripted
//! ```

use geomeasure::math::AreaUnits;
use geomeasure::viewport::{SceneViewport, ViewportEvent};
use geomeasure::{GeoPoint, MeasureConfig, MeasureEngine};

fn main() -> geomeasure::Result<()> {
    // Default: WARN for everything, INFO for geomeasure.
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("geomeasure=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let mut config = MeasureConfig::default();
    if std::env::args().nth(1).as_deref() == Some("hectares") {
        config = config.with_area_units(AreaUnits::Hectares);
    }
    let mut engine = MeasureEngine::new(SceneViewport::new(), config)?;
    engine.set_mode_listener(|mode| println!("tool: {mode:?}"));

    engine.start_distance();
    for event in [
        ViewportEvent::Click(GeoPoint::new(41.0, 1.0)),
        ViewportEvent::PointerMove(GeoPoint::new(41.0, 1.05)),
        ViewportEvent::Click(GeoPoint::new(41.0, 1.1)),
    ] {
        println!("{event:?} -> {:?}", engine.handle_event(event));
    }

    engine.start_area();
    for event in [
        ViewportEvent::Click(GeoPoint::new(41.0, 1.0)),
        ViewportEvent::Click(GeoPoint::new(41.001, 1.0)),
        ViewportEvent::Click(GeoPoint::new(41.001, 1.001)),
        ViewportEvent::Click(GeoPoint::new(41.000_05, 1.000_05)),
    ] {
        println!("{event:?} -> {:?}", engine.handle_event(event));
    }

    for result in engine.results() {
        println!("{:?}: {} at {:?}", result.kind(), result.text(), result.anchor());
    }
    println!("{} objects on the map", engine.viewport().len());

    engine.clear_all();
    println!("after clear: {} objects", engine.viewport().len());
    Ok(())
}
