//! The `MapControl` trait — the consumed slippy-map capability interface.
//!
//! The real pan/zoom/projection engine is out of scope; the flow-map core
//! talks to it exclusively through this trait.  Hosts wrap their map engine
//! (Mapbox GL, MapLibre, a test double) in an implementation and hand it to
//! `FlowViz`.
//!
//! Camera-change events are not subscribed to here: the host forwards its
//! engine's `{zoom, move, rotate, pitch}` events by calling
//! `FlowViz::handle_camera_event` directly, which keeps the handler
//! synchronous and non-reentrant.

use crate::{CameraRequest, CameraState, GeoPoint, ScreenPoint};

/// Capability interface onto the host mapping engine.
pub trait MapControl {
    /// Project a geographic coordinate to drawing-surface pixel space under
    /// the current camera.
    fn project(&self, point: GeoPoint) -> ScreenPoint;

    /// Snapshot of the current camera.
    fn camera(&self) -> CameraState;

    /// Animated transition with the engine's default easing curve ("fly").
    fn fly_to(&mut self, request: &CameraRequest);

    /// Animated transition with a linear-ish ease ("ease").
    fn ease_to(&mut self, request: &CameraRequest);

    /// Instantaneous camera move; `request.duration_ms` is ignored.
    fn jump_to(&mut self, request: &CameraRequest);

    /// Current zoom level, as a convenience over `camera().zoom`.
    fn zoom(&self) -> f64 {
        self.camera().zoom
    }
}
