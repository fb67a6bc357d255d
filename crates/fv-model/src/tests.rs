//! Unit tests for the flow model.

use fv_core::color::RECYCLING_COLOR;
use fv_core::{Color, FlowKind, GeoPoint, PhaseRng, RouteId};

use crate::{Dataset, Filters, Tier, TransportRow, build_flows};

// ── Helpers ───────────────────────────────────────────────────────────────────

const MUNI_A: GeoPoint = GeoPoint { lng: -72.95, lat: -36.81 };
const LANDFILL_L: GeoPoint = GeoPoint { lng: -72.98, lat: -36.76 };

fn row(tons: f64, recycled: f64) -> TransportRow {
    TransportRow {
        municipality:  "A".into(),
        landfill:      "L".into(),
        route:         "A_L".into(),
        tons,
        recycled_tons: recycled,
    }
}

fn dataset_with(rows: Vec<TransportRow>) -> Dataset {
    let mut data = Dataset::new(rows);
    data.set_municipality_coord("A", MUNI_A);
    data.set_landfill("L", LANDFILL_L, Color::rgb(0xFF, 0xF3, 0xA3));
    data
}

fn curved_route() -> Vec<GeoPoint> {
    vec![
        MUNI_A,
        GeoPoint::new(-72.96, -36.79),
        GeoPoint::new(-72.97, -36.77),
        LANDFILL_L,
    ]
}

// ── Tier boundaries ───────────────────────────────────────────────────────────

mod tier {
    use super::*;

    #[test]
    fn thresholds_are_strict() {
        assert_eq!(Tier::from_volume(30_000.0), Tier::Two);
        assert_eq!(Tier::from_volume(30_001.0), Tier::Three);
        assert_eq!(Tier::from_volume(10_000.0), Tier::One);
        assert_eq!(Tier::from_volume(10_001.0), Tier::Two);
    }

    #[test]
    fn arc_counts() {
        assert_eq!(Tier::One.arc_count(), 1);
        assert_eq!(Tier::Two.arc_count(), 2);
        assert_eq!(Tier::Three.arc_count(), 3);
    }
}

// ── Filters ───────────────────────────────────────────────────────────────────

mod filters {
    use super::*;

    #[test]
    fn empty_landfill_set_allows_all() {
        let filters = Filters::new();
        assert!(filters.allows(&row(100.0, 0.0)));
    }

    #[test]
    fn landfill_allow_set_excludes_others() {
        let mut filters = Filters::new();
        filters.set_landfills(["Other"]);
        assert!(!filters.allows(&row(100.0, 0.0)));
        filters.set_landfills(["L"]);
        assert!(filters.allows(&row(100.0, 0.0)));
    }

    #[test]
    fn municipality_none_vs_some() {
        let mut filters = Filters::new();
        assert!(filters.allows_municipality("A"));
        filters.set_municipalities(Some(vec!["B".into()]));
        assert!(!filters.allows_municipality("A"));
        filters.set_municipalities(None);
        assert!(filters.allows_municipality("A"));
    }

    #[test]
    fn some_empty_means_no_filter() {
        let mut filters = Filters::new();
        filters.set_municipalities(Some(vec![]));
        assert!(filters.allows_municipality("anything"));
    }

    #[test]
    fn toggle_selects_then_clears() {
        let mut filters = Filters::new();
        assert!(filters.toggle_municipality("A"));
        assert!(filters.municipality_selected("A"));
        assert!(!filters.allows_municipality("B"));

        // Removing the last selection clears the filter entirely.
        assert!(!filters.toggle_municipality("A"));
        assert!(filters.municipalities().is_none());
        assert!(filters.allows_municipality("B"));
    }
}

// ── Flow building ─────────────────────────────────────────────────────────────

mod builder {
    use super::*;

    #[test]
    fn single_row_no_recycling() {
        // One row (A → L, 12 000 t), zoom 9, no filters: tier 2, and at
        // zoom 9 the map is not simplified, so the tier emits two arcs.
        let data = dataset_with(vec![row(12_000.0, 0.0)]);
        let mut rng = PhaseRng::seeded(1);
        let flows = build_flows(&data, &Filters::new(), 9.0, &mut rng);

        assert_eq!(flows.len(), 2); // tier 2 → two parallel arcs
        for flow in &flows {
            assert_eq!(flow.id.kind, FlowKind::Waste);
            assert_eq!(flow.tier, Tier::Two);
            assert_eq!(flow.start, Some(MUNI_A));
            assert_eq!(flow.end, Some(LANDFILL_L));
        }
        // Parallel arcs differ only in their ordinal.
        assert_ne!(flows[0].id.arc, flows[1].id.arc);
    }

    #[test]
    fn recycled_row_emits_reverse_flow() {
        let data = dataset_with(vec![row(12_000.0, 300.0)]);
        let mut rng = PhaseRng::seeded(1);
        let flows = build_flows(&data, &Filters::new(), 9.0, &mut rng);

        let reverse: Vec<_> = flows
            .iter()
            .filter(|f| f.id.kind == FlowKind::Recycling)
            .collect();
        assert_eq!(reverse.len(), 1); // 300 t → tier 1 → one arc
        let flow = reverse[0];
        assert_eq!(flow.tier, Tier::One);
        assert_eq!(flow.color, RECYCLING_COLOR);
        assert_eq!(flow.start, Some(LANDFILL_L));
        assert_eq!(flow.end, Some(MUNI_A));
    }

    #[test]
    fn simplified_mode_collapses_tiers() {
        let data = dataset_with(vec![row(40_000.0, 0.0)]); // tier 3
        let mut rng = PhaseRng::seeded(1);

        let simplified = build_flows(&data, &Filters::new(), 8.05, &mut rng);
        assert_eq!(simplified.len(), 1);

        let full = build_flows(&data, &Filters::new(), 8.07, &mut rng);
        assert_eq!(full.len(), 3);
    }

    #[test]
    fn rebuild_is_idempotent_except_phases() {
        let mut data = dataset_with(vec![row(12_000.0, 300.0)]);
        data.register_route("A_L", curved_route());

        let mut rng = PhaseRng::seeded(99);
        let first = build_flows(&data, &Filters::new(), 9.0, &mut rng);
        let second = build_flows(&data, &Filters::new(), 9.0, &mut rng);

        assert_eq!(first.len(), second.len());
        for (a, b) in first.iter().zip(&second) {
            assert_eq!(a.id, b.id);
            assert_eq!(a.color, b.color);
            assert_eq!(a.tier, b.tier);
            assert_eq!(a.route, b.route);
            assert!((0.0..1.0).contains(&a.phase));
            assert!((0.0..1.0).contains(&b.phase));
        }
        // Phases are re-randomized: at least one pair must differ.
        assert!(first.iter().zip(&second).any(|(a, b)| a.phase != b.phase));
    }

    #[test]
    fn missing_route_falls_back_to_straight_path() {
        let data = dataset_with(vec![row(5_000.0, 0.0)]); // route "A_L" not registered
        let mut rng = PhaseRng::seeded(1);
        let flows = build_flows(&data, &Filters::new(), 9.0, &mut rng);

        assert_eq!(flows.len(), 1);
        assert_eq!(flows[0].id.route, RouteId::INVALID);
        assert_eq!(flows[0].route, None);
        assert_eq!(flows[0].waypoints(), Some(vec![MUNI_A, LANDFILL_L]));
    }

    #[test]
    fn recycling_flow_reverses_route_geometry() {
        let mut data = dataset_with(vec![row(5_000.0, 100.0)]);
        data.register_route("A_L", curved_route());
        let mut rng = PhaseRng::seeded(1);
        let flows = build_flows(&data, &Filters::new(), 9.0, &mut rng);

        let forward = flows.iter().find(|f| f.id.kind == FlowKind::Waste).unwrap();
        let reverse = flows.iter().find(|f| f.id.kind == FlowKind::Recycling).unwrap();

        let mut expected = curved_route();
        assert_eq!(forward.route.as_deref(), Some(expected.as_slice()));
        expected.reverse();
        assert_eq!(reverse.route.as_deref(), Some(expected.as_slice()));
    }

    #[test]
    fn unknown_place_yields_unresolved_flow() {
        let mut data = dataset_with(vec![TransportRow {
            municipality:  "Nowhere".into(),
            landfill:      "L".into(),
            route:         "none".into(),
            tons:          1_000.0,
            recycled_tons: 0.0,
        }]);
        data.rows.push(row(1_000.0, 0.0));
        let mut rng = PhaseRng::seeded(1);
        let flows = build_flows(&data, &Filters::new(), 9.0, &mut rng);

        assert_eq!(flows.len(), 2);
        assert_eq!(flows[0].start, None);
        assert_eq!(flows[0].waypoints(), None); // non-renderable, not an error
        assert!(flows[1].waypoints().is_some());
    }

    #[test]
    fn filtered_rows_are_skipped() {
        let data = dataset_with(vec![row(12_000.0, 0.0)]);
        let mut filters = Filters::new();
        filters.set_landfills(["Somewhere Else"]);
        let mut rng = PhaseRng::seeded(1);
        assert!(build_flows(&data, &filters, 9.0, &mut rng).is_empty());
    }
}

// ── Flow phase arithmetic ─────────────────────────────────────────────────────

mod flow {
    use super::*;

    #[test]
    fn phase_wraps_modulo_one() {
        let data = dataset_with(vec![row(1_000.0, 0.0)]);
        let mut rng = PhaseRng::seeded(3);
        let mut flows = build_flows(&data, &Filters::new(), 9.0, &mut rng);
        let flow = &mut flows[0];

        for _ in 0..10_000 {
            flow.advance_phase();
            assert!((0.0..1.0).contains(&flow.phase), "phase escaped: {}", flow.phase);
        }
    }
}
