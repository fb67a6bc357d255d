//! Chapter definitions — one entry per story stop.

use fv_core::{CameraRequest, CameraState};

// ── CameraStyle ───────────────────────────────────────────────────────────────

/// Which animated transition a chapter uses to reach its camera target.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum CameraStyle {
    /// Arced zoom-out/zoom-in path (the default).
    #[default]
    Fly,
    /// Direct interpolation between the two camera states.
    Ease,
}

// ── ChapterDirective ──────────────────────────────────────────────────────────

/// What a chapter does to the visualization once its camera transition
/// settles: replace both filters and set the paused state.
///
/// Directives are absolute, not incremental — every chapter fully specifies
/// the filter state so chapters can be entered in any order.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ChapterDirective {
    /// Landfill filter; empty means all landfills.
    pub landfills:      Vec<String>,
    /// Municipality filter; `None` means no filter.
    pub municipalities: Option<Vec<String>>,
    /// Freeze particle animation while this chapter is shown.
    pub pause:          bool,
}

// ── ChapterStats ──────────────────────────────────────────────────────────────

/// Optional figures the host panel shows for a chapter.  All fields are
/// optional; the panel renders whichever are present.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ChapterStats {
    pub total_tons:         Option<f64>,
    pub recycled_tons:      Option<f64>,
    pub municipality_count: Option<u32>,
    pub landfill_count:     Option<u32>,
    /// Pre-formatted distance text, e.g. "≈ 90 km por viaje".
    pub distance:           Option<String>,
    /// One-line callout shown above the figures.
    pub highlight:          Option<String>,
}

// ── Chapter ───────────────────────────────────────────────────────────────────

/// One story stop: narrative text, a camera target with its transition
/// style and duration, the directive to apply on arrival, and optional
/// panel statistics.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Chapter {
    pub id:          String,
    pub title:       String,
    pub description: String,
    pub camera:      CameraState,
    #[cfg_attr(feature = "serde", serde(default))]
    pub animation:   CameraStyle,
    /// Camera transition duration.  The directive is applied only after
    /// this duration (plus the settings' transition buffer) has elapsed.
    pub duration_ms: u64,
    #[cfg_attr(feature = "serde", serde(default))]
    pub directive:   ChapterDirective,
    #[cfg_attr(feature = "serde", serde(default))]
    pub stats:       Option<ChapterStats>,
}

impl Chapter {
    /// The transition request for this chapter's camera target.
    pub fn camera_request(&self) -> CameraRequest {
        CameraRequest::to_state(self.camera, self.duration_ms)
    }
}
