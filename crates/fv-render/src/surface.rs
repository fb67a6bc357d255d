//! The `DrawSurface` trait — drawing abstraction over the host canvas.
//!
//! The core renders through this seam so the animation pipeline is testable
//! without a real display.  Implementations map directly onto a 2D canvas
//! context: blend mode ↔ composite operation, glow ↔ shadow blur/color.
//!
//! Surface state (blend, alpha, glow) is sticky; the particle animator
//! resets all three to the defaults after each flow so flows don't bleed
//! visual state into each other.

use fv_core::{Color, ScreenPoint};

/// Pixel compositing mode.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum BlendMode {
    /// Normal painting.
    SourceOver,
    /// Additive blending, used for glowing trails.
    Lighter,
}

/// Minimal drawing capability consumed by the render pipeline.
pub trait DrawSurface {
    /// Resize the backing buffer to match its container if it changed.
    /// Returns the current size in pixels.
    fn sync_size(&mut self) -> (u32, u32);

    /// Clear the whole surface to transparent.
    fn clear(&mut self);

    fn set_blend(&mut self, mode: BlendMode);

    /// Global alpha for subsequent strokes/fills, in `[0, 1]`.
    fn set_alpha(&mut self, alpha: f64);

    /// Enable glow shading: subsequent strokes/fills cast a blurred shadow
    /// of `color` with the given blur radius.
    fn set_glow(&mut self, color: Color, blur: f64);

    /// Disable glow shading (blur radius back to zero).
    fn clear_glow(&mut self);

    /// Stroke a polyline through `points` (at least 2).
    fn stroke_path(&mut self, points: &[ScreenPoint], color: Color, width: f64);

    /// Fill a disc of `radius` pixels centered at `center`.
    fn fill_disc(&mut self, center: ScreenPoint, radius: f64, color: Color);
}

/// A [`DrawSurface`] that draws nothing.  Useful for headless hosts that
/// only need the flow model and camera/story machinery.
pub struct NoopSurface;

impl DrawSurface for NoopSurface {
    fn sync_size(&mut self) -> (u32, u32) {
        (0, 0)
    }
    fn clear(&mut self) {}
    fn set_blend(&mut self, _mode: BlendMode) {}
    fn set_alpha(&mut self, _alpha: f64) {}
    fn set_glow(&mut self, _color: Color, _blur: f64) {}
    fn clear_glow(&mut self) {}
    fn stroke_path(&mut self, _points: &[ScreenPoint], _color: Color, _width: f64) {}
    fn fill_disc(&mut self, _center: ScreenPoint, _radius: f64, _color: Color) {}
}
