//! `ProjectionCache` — memoized screen-space projections of flow paths.
//!
//! # Why this exists
//!
//! Projecting every vertex of every flow path through the map engine each
//! frame dominates the frame budget once routes have hundreds of vertices.
//! Projections only change when the camera moves, so they are memoized and
//! invalidated as a whole when a camera snapshot deviates beyond tolerance
//! (see [`CameraState::differs_from`]).
//!
//! # Invalidation protocol
//!
//! `sync_camera` is called once at the top of each frame.  On a detected
//! change the cache is cleared in full and the `stale` flag is set; the
//! render loop then recomputes every flow's projection exactly once and
//! calls `mark_fresh`.  Entries are additionally keyed on the zoom level at
//! which they were computed, so an entry from a previous camera state is
//! never served as current even if an explicit clear was missed.
//!
//! Single render thread; no locking.

use fv_core::{CameraState, FlowId, GeoPoint, MapControl, ScreenPoint};
use rustc_hash::FxHashMap;

/// Cache key: the flow plus a discriminant of the camera state the entry was
/// computed under.  Zoom is the discriminant — any meaningful camera change
/// either shifts zoom or triggers the full clear.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
struct CacheKey {
    flow:      FlowId,
    zoom_bits: u64,
}

/// Memo table from (flow, camera discriminant) to projected screen path.
pub struct ProjectionCache {
    entries:     FxHashMap<CacheKey, Vec<ScreenPoint>>,
    last_camera: Option<CameraState>,
    stale:       bool,
}

impl Default for ProjectionCache {
    fn default() -> Self {
        Self::new()
    }
}

impl ProjectionCache {
    /// A new cache starts stale: the first frame always projects fresh.
    pub fn new() -> Self {
        Self {
            entries:     FxHashMap::default(),
            last_camera: None,
            stale:       true,
        }
    }

    /// Compare `current` against the last recorded snapshot.  The first call
    /// always reports a change.  Records `current` whenever a change is
    /// detected.
    pub fn camera_changed(&mut self, current: CameraState) -> bool {
        match &self.last_camera {
            None => {
                self.last_camera = Some(current);
                true
            }
            Some(last) if current.differs_from(last) => {
                self.last_camera = Some(current);
                true
            }
            Some(_) => false,
        }
    }

    /// Per-frame camera sync: on a change beyond tolerance, clears the cache
    /// in full and sets the stale flag.  Returns whether a change occurred.
    pub fn sync_camera(&mut self, current: CameraState) -> bool {
        if self.camera_changed(current) {
            self.invalidate();
            true
        } else {
            false
        }
    }

    /// Projected screen path for `flow`'s `waypoints`.
    ///
    /// Reuses the cached entry when present and the cache is not stale;
    /// otherwise projects through `map` and records the result under the
    /// current zoom discriminant.
    pub fn project<M: MapControl>(
        &mut self,
        flow:      FlowId,
        waypoints: &[GeoPoint],
        map:       &M,
    ) -> Vec<ScreenPoint> {
        let zoom = self.last_camera.map(|c| c.zoom).unwrap_or(0.0);
        let key = CacheKey {
            flow,
            zoom_bits: zoom.to_bits(),
        };

        if !self.stale {
            if let Some(projected) = self.entries.get(&key) {
                return projected.clone();
            }
        }

        let projected: Vec<ScreenPoint> =
            waypoints.iter().map(|&point| map.project(point)).collect();
        self.entries.insert(key, projected.clone());
        projected
    }

    /// Drop all entries and force reprojection on the next pass.
    pub fn invalidate(&mut self) {
        self.entries.clear();
        self.stale = true;
    }

    /// Force reprojection without dropping entries (a flow rebuild changed
    /// the flow set; stale entries are unreachable under their new IDs and
    /// the zoom discriminant guards the rest).
    pub fn mark_stale(&mut self) {
        self.stale = true;
    }

    /// Called by the render loop after every flow has reprojected.
    pub fn mark_fresh(&mut self) {
        self.stale = false;
    }

    pub fn is_stale(&self) -> bool {
        self.stale
    }

    /// Number of cached paths (performance introspection).
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Last recorded camera snapshot, if any.
    pub fn last_camera(&self) -> Option<CameraState> {
        self.last_camera
    }
}
