//! The `LabelOverlay` trait — DOM-label abstraction.
//!
//! Label DOM construction and styling are out of scope; the core only
//! decides *which* labels exist this frame and *where* they sit.  Overlays
//! are cleared and repopulated every frame so labels track pan/zoom/rotate
//! continuously (projections of label anchors are intentionally uncached).
//!
//! Municipality label clicks flow back into the core through
//! [`FlowViz::toggle_municipality`][crate::FlowViz::toggle_municipality];
//! the host wires its click handler to that method.

use fv_core::ScreenPoint;

/// Overlay placement capability consumed by the label renderer.
pub trait LabelOverlay {
    /// Remove all labels placed in the previous frame.
    fn clear(&mut self);

    /// Place a landfill label at a projected position.
    fn place_landfill(&mut self, name: &str, position: ScreenPoint);

    /// Place a municipality pin + label.  `selected` mirrors membership in
    /// the active municipality filter and drives the selected visual state.
    fn place_municipality(&mut self, name: &str, position: ScreenPoint, selected: bool);
}

/// A [`LabelOverlay`] that places nothing.
pub struct NoopOverlay;

impl LabelOverlay for NoopOverlay {
    fn clear(&mut self) {}
    fn place_landfill(&mut self, _name: &str, _position: ScreenPoint) {}
    fn place_municipality(&mut self, _name: &str, _position: ScreenPoint, _selected: bool) {}
}
