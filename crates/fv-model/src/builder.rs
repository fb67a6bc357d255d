//! The flow model builder: dataset + filters + zoom → `Vec<Flow>`.

use fv_core::color::RECYCLING_COLOR;
use fv_core::{FlowId, FlowKind, GeoPoint, PhaseRng, RouteId};

use crate::{Dataset, Filters, Flow, Tier};

/// Below this zoom the map is in simplified mode: every transport relation
/// collapses to a single arc regardless of tier.
pub const SIMPLIFY_BELOW_ZOOM: f64 = 8.06;

/// Particle advance rate for forward waste flows, fraction of path per frame.
pub const FORWARD_SPEED: f64 = 0.002;

/// Particle advance rate for reverse recycling flows.  Slightly faster so
/// return flows read as distinct motion against the forward traffic.
pub const REVERSE_SPEED: f64 = 0.0022;

/// Build the complete flow list for the current filters and zoom.
///
/// Every emitted flow gets a freshly randomized particle phase from `rng`;
/// rebuilding with identical inputs yields identical geometry, colors, and
/// tiers but new phases.
///
/// Rows excluded by `filters` are skipped.  Missing route geometry falls
/// back to a straight two-point path; missing place coordinates yield flows
/// with unresolved endpoints which the renderer treats as non-renderable.
pub fn build_flows(
    dataset: &Dataset,
    filters: &Filters,
    zoom:    f64,
    rng:     &mut PhaseRng,
) -> Vec<Flow> {
    let simplified = zoom < SIMPLIFY_BELOW_ZOOM;
    let mut flows = Vec::new();

    for (row_index, row) in dataset.rows.iter().enumerate() {
        if !filters.allows(row) {
            continue;
        }

        let start = dataset.municipality_coord(&row.municipality);
        let end = dataset.landfill_coord(&row.landfill);
        let (route_id, route_path) = match dataset.route(&row.route) {
            Some((id, path)) if path.len() >= 2 => (id, Some(path.to_vec())),
            _ => (RouteId::INVALID, None),
        };

        // ── Forward waste flows ───────────────────────────────────────────
        let color = dataset.landfill_color(&row.landfill);
        let tier = Tier::from_volume(row.tons);
        let arcs = if simplified { 1 } else { tier.arc_count() };

        for arc in 0..arcs {
            flows.push(Flow {
                id: FlowId::new(route_id, row_index as u32, arc, FlowKind::Waste),
                start,
                end,
                route: route_path.clone(),
                color,
                tier,
                volume: row.tons,
                speed: FORWARD_SPEED,
                phase: rng.next_phase(),
                projected: None,
            });
        }

        // ── Reverse recycling flows ───────────────────────────────────────
        if row.recycled_tons > 0.0 {
            let reverse_route: Option<Vec<GeoPoint>> =
                route_path.as_ref().map(|path| {
                    let mut reversed = path.clone();
                    reversed.reverse();
                    reversed
                });
            let reverse_tier = Tier::from_volume(row.recycled_tons);
            let reverse_arcs = if simplified { 1 } else { reverse_tier.arc_count() };

            for arc in 0..reverse_arcs {
                flows.push(Flow {
                    id: FlowId::new(route_id, row_index as u32, arc, FlowKind::Recycling),
                    start: end,
                    end: start,
                    route: reverse_route.clone(),
                    color: RECYCLING_COLOR,
                    tier: reverse_tier,
                    volume: row.recycled_tons,
                    speed: REVERSE_SPEED,
                    phase: rng.next_phase(),
                    projected: None,
                });
            }
        }
    }

    flows
}
