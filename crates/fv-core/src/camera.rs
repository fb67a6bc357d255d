//! Camera state snapshots and transition requests.
//!
//! # Tolerance model
//!
//! Re-projecting every flow path on every sub-pixel camera wiggle would waste
//! most of the frame budget.  `CameraState::differs_from` therefore compares
//! snapshots field-by-field against fixed tolerances; only a movement beyond
//! tolerance counts as a camera change and invalidates cached projections.

use crate::GeoPoint;

/// Zoom delta above which cached projections are considered stale.
pub const ZOOM_TOLERANCE: f64 = 0.01;
/// Center delta (degrees, either axis) above which projections are stale.
pub const CENTER_TOLERANCE_DEG: f64 = 0.001;
/// Bearing/pitch delta (degrees) above which projections are stale.
pub const ANGLE_TOLERANCE_DEG: f64 = 0.5;

// ── CameraState ───────────────────────────────────────────────────────────────

/// Snapshot of the host map's camera: `{zoom, center, bearing, pitch}`.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CameraState {
    pub center:  GeoPoint,
    pub zoom:    f64,
    pub bearing: f64,
    pub pitch:   f64,
}

impl CameraState {
    pub fn new(center: GeoPoint, zoom: f64) -> Self {
        Self {
            center,
            zoom,
            bearing: 0.0,
            pitch:   0.0,
        }
    }

    /// `true` if any field of `self` deviates from `other` beyond its
    /// tolerance (zoom 0.01, center 0.001°, bearing/pitch 0.5°).
    pub fn differs_from(&self, other: &CameraState) -> bool {
        (self.zoom - other.zoom).abs() > ZOOM_TOLERANCE
            || (self.center.lng - other.center.lng).abs() > CENTER_TOLERANCE_DEG
            || (self.center.lat - other.center.lat).abs() > CENTER_TOLERANCE_DEG
            || (self.bearing - other.bearing).abs() > ANGLE_TOLERANCE_DEG
            || (self.pitch - other.pitch).abs() > ANGLE_TOLERANCE_DEG
    }
}

// ── CameraRequest ─────────────────────────────────────────────────────────────

/// A camera transition target passed to `fly_to`/`ease_to`/`jump_to`.
///
/// `duration_ms` applies to animated transitions only; `jump_to` ignores it.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CameraRequest {
    pub center:      GeoPoint,
    pub zoom:        f64,
    pub bearing:     f64,
    pub pitch:       f64,
    pub duration_ms: u64,
    /// Marks the transition as essential so the host does not skip it under
    /// reduced-motion preferences.
    pub essential:   bool,
}

impl CameraRequest {
    /// Request targeting `state` with the given animation duration.
    pub fn to_state(state: CameraState, duration_ms: u64) -> Self {
        Self {
            center: state.center,
            zoom: state.zoom,
            bearing: state.bearing,
            pitch: state.pitch,
            duration_ms,
            essential: true,
        }
    }

    /// The camera state this request lands on once the transition completes.
    pub fn target(&self) -> CameraState {
        CameraState {
            center:  self.center,
            zoom:    self.zoom,
            bearing: self.bearing,
            pitch:   self.pitch,
        }
    }
}
