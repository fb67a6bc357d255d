//! The `Flow` — one animatable transport arc.

use fv_core::{Color, FlowId, GeoPoint, ScreenPoint};

use crate::Tier;

/// One directional transport arc between a municipality and a landfill
/// (or the reverse, for recycling).
///
/// Flows are rebuilt wholesale whenever filters or the zoom-simplification
/// threshold change; only the renderer mutates `phase` and `projected` in
/// place between rebuilds.
#[derive(Clone, Debug)]
pub struct Flow {
    pub id: FlowId,

    /// Geographic start point.  `None` when the origin name is missing from
    /// the coordinate lookup — the flow is then unrenderable unless a route
    /// geometry is present.
    pub start: Option<GeoPoint>,

    /// Geographic end point; same resolution rules as `start`.
    pub end: Option<GeoPoint>,

    /// Curved route geometry, already oriented in travel direction.
    /// `None` means a straight two-point path between the endpoints.
    pub route: Option<Vec<GeoPoint>>,

    /// Display color: the destination landfill's color for waste flows, the
    /// fixed recycling color for reverse flows.
    pub color: Color,

    /// Volume bucket backing the arc multiplicity.
    pub tier: Tier,

    /// Transported tonnage, informational only.
    pub volume: f64,

    /// Fraction of the path the particle advances per rendered frame.
    pub speed: f64,

    /// Particle progress along the path, always in `[0, 1)`.  Initialized to
    /// a random phase so rebuilt flow sets don't animate in lock-step.
    pub phase: f64,

    /// Cached screen-space projection of the waypoints; `None` until first
    /// projected, cleared on cache invalidation.
    pub projected: Option<Vec<ScreenPoint>>,
}

impl Flow {
    /// The geographic waypoints to project: the route geometry when present,
    /// otherwise the straight two-point path.  `None` when neither is
    /// resolvable — such a flow is skipped by the renderer for the frame.
    pub fn waypoints(&self) -> Option<Vec<GeoPoint>> {
        if let Some(route) = &self.route {
            if route.len() >= 2 {
                return Some(route.clone());
            }
        }
        match (self.start, self.end) {
            (Some(start), Some(end)) => Some(vec![start, end]),
            _ => None,
        }
    }

    /// Advance the particle one frame, wrapping modulo 1.
    #[inline]
    pub fn advance_phase(&mut self) {
        self.phase = (self.phase + self.speed) % 1.0;
    }
}
