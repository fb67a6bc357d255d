//! Geographic and screen-space coordinate types.
//!
//! `GeoPoint` uses `f64` longitude/latitude in lng-first order, matching the
//! convention of slippy-map engines.  Double precision is required: camera
//! change detection compares centers against a 0.001° tolerance, well inside
//! `f32` noise at continental longitudes.

/// A WGS-84 geographic coordinate (longitude first).
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeoPoint {
    pub lng: f64,
    pub lat: f64,
}

impl GeoPoint {
    #[inline]
    pub fn new(lng: f64, lat: f64) -> Self {
        Self { lng, lat }
    }
}

impl std::fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.5}, {:.5})", self.lng, self.lat)
    }
}

// ── ScreenPoint ───────────────────────────────────────────────────────────────

/// A projected point in drawing-surface pixel space.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScreenPoint {
    pub x: f64,
    pub y: f64,
}

impl ScreenPoint {
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Linear interpolation from `self` toward `other`; `t` is not clamped —
    /// callers keep it in `[0, 1]`.
    #[inline]
    pub fn lerp(self, other: ScreenPoint, t: f64) -> ScreenPoint {
        ScreenPoint {
            x: self.x + (other.x - self.x) * t,
            y: self.y + (other.y - self.y) * t,
        }
    }
}

impl std::fmt::Display for ScreenPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.1}, {:.1})", self.x, self.y)
    }
}
