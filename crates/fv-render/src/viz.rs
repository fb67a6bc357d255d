//! `FlowViz` — the render-loop context and public control API.
//!
//! All previously-global mutable state (current flows, active filters,
//! camera snapshot, projection cache) lives in this one context object.
//! The host's frame-pacing primitive calls [`FlowViz::render_frame`] once
//! per animation frame; external panels and the story controller drive the
//! control API between frames.  Everything runs on the single render
//! thread.

use fv_core::{CameraRequest, CameraState, MapControl};
use fv_model::{Dataset, Filters, Flow, build_flows};
use fv_core::PhaseRng;

use crate::labels::update_labels;
use crate::overlay::LabelOverlay;
use crate::particles::animate_flows;
use crate::projection::ProjectionCache;
use crate::surface::{BlendMode, DrawSurface};

/// Width of the faint static guide line drawn under every flow.
pub const BASE_ROUTE_WIDTH: f64 = 2.0;
pub const BASE_ROUTE_ALPHA: f64 = 0.18;

/// Performance introspection snapshot.
#[derive(Clone, Debug, PartialEq)]
pub struct PerfStats {
    pub flow_count: usize,
    pub cache_size: usize,
    /// Camera snapshot the cache was last synced against.
    pub camera:     Option<CameraState>,
}

// ── FlowViz ───────────────────────────────────────────────────────────────────

/// The visualization context: owns the map handle, drawing surface, label
/// overlay, dataset, filters, flow list, and projection cache.
///
/// Flows are rebuilt (and particle phases re-randomized) whenever filters
/// change or a camera event arrives; between rebuilds only the animator
/// mutates per-flow state.
pub struct FlowViz<M: MapControl, S: DrawSurface, L: LabelOverlay> {
    map:     M,
    surface: S,
    overlay: L,
    dataset: Dataset,
    filters: Filters,
    flows:   Vec<Flow>,
    cache:   ProjectionCache,
    rng:     PhaseRng,
    paused:  bool,
    ready:   bool,
}

impl<M: MapControl, S: DrawSurface, L: LabelOverlay> FlowViz<M, S, L> {
    /// Create the context and build the initial (unfiltered) flow set.
    pub fn new(map: M, surface: S, overlay: L, dataset: Dataset, rng: PhaseRng) -> Self {
        let mut viz = Self {
            map,
            surface,
            overlay,
            dataset,
            filters: Filters::new(),
            flows: Vec::new(),
            cache: ProjectionCache::new(),
            rng,
            paused: false,
            ready: false,
        };
        viz.rebuild_flows();
        viz
    }

    // ── Render loop ───────────────────────────────────────────────────────

    /// Run one animation frame in fixed order: surface resize, base routes,
    /// particles (unless paused), labels.  The host schedules the next
    /// frame; the loop has no termination of its own.
    pub fn render_frame(&mut self) {
        self.surface.sync_size();
        self.draw_base_routes();
        if !self.paused {
            animate_flows(&mut self.surface, &mut self.flows);
        }
        update_labels(&mut self.overlay, &self.map, &self.dataset, &self.filters);

        if !self.ready {
            self.ready = true;
            tracing::info!(flows = self.flows.len(), "visualization ready");
        }
    }

    /// Redraw all base routes from scratch, refreshing cached projections
    /// per the projection-cache contract.
    fn draw_base_routes(&mut self) {
        self.surface.set_blend(BlendMode::SourceOver);
        self.surface.clear();

        if self.cache.sync_camera(self.map.camera()) {
            // Camera moved beyond tolerance: all projections are stale.
            for flow in &mut self.flows {
                flow.projected = None;
            }
        }

        self.surface.set_alpha(BASE_ROUTE_ALPHA);
        for flow in &mut self.flows {
            if flow.projected.is_none() || self.cache.is_stale() {
                flow.projected = flow
                    .waypoints()
                    .map(|waypoints| self.cache.project(flow.id, &waypoints, &self.map));
            }

            let Some(path) = flow.projected.as_deref() else {
                continue; // unresolved endpoints: skipped, never an error
            };
            if path.len() < 2 {
                continue;
            }
            self.surface.stroke_path(path, flow.color, BASE_ROUTE_WIDTH);
        }
        self.cache.mark_fresh();
        self.surface.set_alpha(1.0);
    }

    // ── Control API ───────────────────────────────────────────────────────

    /// Replace the landfill filter (empty = all) and rebuild flows.
    pub fn update_flows<I, T>(&mut self, selected_landfills: I)
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.filters.set_landfills(selected_landfills);
        self.rebuild_flows();
    }

    /// Replace the municipality filter (`None` = no filter) and rebuild.
    pub fn filter_by_municipalities(&mut self, names: Option<Vec<String>>) {
        self.filters.set_municipalities(names);
        self.rebuild_flows();
    }

    /// Toggle one municipality's filter membership (label click path).
    /// Returns whether the municipality is selected afterwards.
    pub fn toggle_municipality(&mut self, name: &str) -> bool {
        let selected = self.filters.toggle_municipality(name);
        self.rebuild_flows();
        selected
    }

    pub fn pause_animation(&mut self) {
        self.paused = true;
    }

    pub fn resume_animation(&mut self) {
        self.paused = false;
    }

    /// Re-randomize every particle's phase.
    pub fn reset_particles(&mut self) {
        for flow in &mut self.flows {
            flow.phase = self.rng.next_phase();
        }
    }

    /// Drop every cached projection (host surface resized, etc.).
    pub fn invalidate_projection_cache(&mut self) {
        self.cache.invalidate();
        for flow in &mut self.flows {
            flow.projected = None;
        }
    }

    /// Out-of-band camera event (pan/zoom/rotate/pitch from the host map).
    /// Rebuilds the flow set — zoom may have crossed the simplification
    /// threshold — and forces reprojection.  Handlers are synchronous and
    /// never interleave with each other.
    pub fn handle_camera_event(&mut self) {
        self.rebuild_flows();
    }

    pub fn get_camera_state(&self) -> CameraState {
        self.map.camera()
    }

    /// Snap the camera instantaneously to `state`.
    pub fn set_camera_state(&mut self, state: CameraState) {
        self.map.jump_to(&CameraRequest::to_state(state, 0));
    }

    // ── Introspection ─────────────────────────────────────────────────────

    pub fn flows(&self) -> &[Flow] {
        &self.flows
    }

    pub fn active_filters(&self) -> &Filters {
        &self.filters
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// `true` once the first frame has rendered; hosts construct the story
    /// controller after observing this.
    pub fn is_ready(&self) -> bool {
        self.ready
    }

    pub fn perf_stats(&self) -> PerfStats {
        PerfStats {
            flow_count: self.flows.len(),
            cache_size: self.cache.len(),
            camera:     self.cache.last_camera(),
        }
    }

    pub fn map(&self) -> &M {
        &self.map
    }

    /// Mutable map handle for camera transitions (story controller).
    pub fn map_mut(&mut self) -> &mut M {
        &mut self.map
    }

    // ── Internals ─────────────────────────────────────────────────────────

    /// Rebuild the flow list for the current filters and zoom.  A rebuild
    /// always forces reprojection.
    fn rebuild_flows(&mut self) {
        self.flows = build_flows(&self.dataset, &self.filters, self.map.zoom(), &mut self.rng);
        self.cache.mark_stale();
        tracing::debug!(flows = self.flows.len(), "flow set rebuilt");
    }
}
