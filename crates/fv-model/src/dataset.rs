//! The static transport dataset and its lookup tables.
//!
//! The dataset arrives pre-validated from the host application: one row per
//! municipality → landfill transport relation, plus coordinate tables keyed
//! by place name and a registry of curved route geometries keyed by route
//! key.  Lookups that miss are not errors — the flow builder degrades to
//! straight lines or unresolved endpoints.

use fv_core::{Color, GeoPoint, RouteId};
use fv_core::color::FALLBACK_COLOR;
use rustc_hash::FxHashMap;

/// One transport relation: yearly tonnage hauled from a municipality to a
/// landfill, optionally with a recycled return volume.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TransportRow {
    pub municipality: String,
    pub landfill:     String,
    /// Key into the route-geometry registry.
    pub route:        String,
    /// Transported volume, tons per year.
    pub tons:         f64,
    /// Recycled return volume, tons per year.  Zero means no reverse flow.
    #[cfg_attr(feature = "serde", serde(default))]
    pub recycled_tons: f64,
}

// ── Route registry entry ──────────────────────────────────────────────────────

#[derive(Clone, Debug)]
struct RegisteredRoute {
    id:   RouteId,
    path: Vec<GeoPoint>,
}

// ── Dataset ───────────────────────────────────────────────────────────────────

/// The full input dataset: rows plus name-keyed coordinate, color, and route
/// lookups.
#[derive(Clone, Debug, Default)]
pub struct Dataset {
    pub rows: Vec<TransportRow>,
    municipality_coords: FxHashMap<String, GeoPoint>,
    landfill_coords:     FxHashMap<String, GeoPoint>,
    landfill_colors:     FxHashMap<String, Color>,
    routes:              FxHashMap<String, RegisteredRoute>,
}

impl Dataset {
    pub fn new(rows: Vec<TransportRow>) -> Self {
        Self {
            rows,
            ..Self::default()
        }
    }

    // ── Registration ──────────────────────────────────────────────────────

    pub fn set_municipality_coord(&mut self, name: impl Into<String>, coord: GeoPoint) {
        self.municipality_coords.insert(name.into(), coord);
    }

    pub fn set_landfill(&mut self, name: impl Into<String>, coord: GeoPoint, color: Color) {
        let name = name.into();
        self.landfill_coords.insert(name.clone(), coord);
        self.landfill_colors.insert(name, color);
    }

    /// Register a curved route geometry under `key`, assigning the next
    /// `RouteId`.  Re-registering a key replaces its path but keeps its ID.
    pub fn register_route(&mut self, key: impl Into<String>, path: Vec<GeoPoint>) -> RouteId {
        let next = RouteId(self.routes.len() as u32);
        let entry = self
            .routes
            .entry(key.into())
            .or_insert(RegisteredRoute { id: next, path: Vec::new() });
        entry.path = path;
        entry.id
    }

    // ── Lookups ───────────────────────────────────────────────────────────

    pub fn municipality_coord(&self, name: &str) -> Option<GeoPoint> {
        self.municipality_coords.get(name).copied()
    }

    pub fn landfill_coord(&self, name: &str) -> Option<GeoPoint> {
        self.landfill_coords.get(name).copied()
    }

    /// Display color for a landfill; unknown names get the white fallback.
    pub fn landfill_color(&self, name: &str) -> Color {
        self.landfill_colors
            .get(name)
            .copied()
            .unwrap_or(FALLBACK_COLOR)
    }

    /// Route geometry and ID for `key`, if registered.
    pub fn route(&self, key: &str) -> Option<(RouteId, &[GeoPoint])> {
        self.routes.get(key).map(|r| (r.id, r.path.as_slice()))
    }

    /// Iterator over all registered landfill names and coordinates.
    pub fn landfills(&self) -> impl Iterator<Item = (&str, GeoPoint)> {
        self.landfill_coords.iter().map(|(n, &c)| (n.as_str(), c))
    }
}
