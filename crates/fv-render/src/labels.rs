//! Label renderer — positions overlay labels from current projections.
//!
//! Labels are repositioned every frame and never cached: they must track
//! pan/zoom/rotate continuously, and there are few enough of them that
//! re-projection is cheap.

use fv_core::MapControl;
use fv_model::{Dataset, Filters};
use rustc_hash::FxHashSet;

use crate::overlay::LabelOverlay;

/// Municipality pins only appear above this zoom level.
pub const MUNICIPALITY_LABEL_ZOOM: f64 = 8.5;

/// Reposition all labels for the current frame.
///
/// Landfill labels are always shown (subject to the landfill filter).
/// Municipality pins appear only at zoom ≥ [`MUNICIPALITY_LABEL_ZOOM`] and
/// only for municipalities that occur in filter-passing dataset rows; their
/// selected state mirrors the active municipality filter.
pub fn update_labels<M, L>(overlay: &mut L, map: &M, dataset: &Dataset, filters: &Filters)
where
    M: MapControl,
    L: LabelOverlay,
{
    overlay.clear();

    for (name, coord) in dataset.landfills() {
        if !filters.allows_landfill(name) {
            continue;
        }
        overlay.place_landfill(name, map.project(coord));
    }

    if map.zoom() < MUNICIPALITY_LABEL_ZOOM {
        return;
    }

    let mut shown: FxHashSet<&str> = FxHashSet::default();
    for row in &dataset.rows {
        if filters.allows(row) {
            shown.insert(row.municipality.as_str());
        }
    }

    for name in shown {
        // A municipality named in a row but missing from the coordinate
        // table simply gets no pin.
        let Some(coord) = dataset.municipality_coord(name) else {
            continue;
        };
        overlay.place_municipality(name, map.project(coord), filters.municipality_selected(name));
    }
}
