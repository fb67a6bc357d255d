//! Active filter state: which landfills and municipalities are visible.

use rustc_hash::FxHashSet;

use crate::TransportRow;

/// The active filter set.
///
/// Landfill filtering uses an allow-set where **empty means all** (the
/// default view shows every landfill).  Municipality filtering distinguishes
/// "no filter" (`None`) from "filter to this set" (`Some`), because an empty
/// selection arises transiently while toggling labels and must mean
/// "show everything", not "show nothing".
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Filters {
    landfills:      FxHashSet<String>,
    municipalities: Option<FxHashSet<String>>,
}

impl Filters {
    pub fn new() -> Self {
        Self::default()
    }

    // ── Mutation ──────────────────────────────────────────────────────────

    /// Replace the landfill allow-set.  An empty iterator clears the filter.
    pub fn set_landfills<I, S>(&mut self, names: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.landfills = names.into_iter().map(Into::into).collect();
    }

    /// Replace the municipality filter.  `None` and `Some(empty)` both clear
    /// it.
    pub fn set_municipalities(&mut self, names: Option<Vec<String>>) {
        self.municipalities = match names {
            Some(list) if !list.is_empty() => Some(list.into_iter().collect()),
            _ => None,
        };
    }

    /// Toggle `name`'s membership in the municipality filter, returning
    /// `true` if the municipality is selected afterwards.  Removing the last
    /// selected municipality clears the filter entirely.
    pub fn toggle_municipality(&mut self, name: &str) -> bool {
        let set = self.municipalities.get_or_insert_with(FxHashSet::default);
        let selected = if set.remove(name) {
            false
        } else {
            set.insert(name.to_string());
            true
        };
        if set.is_empty() {
            self.municipalities = None;
        }
        selected
    }

    // ── Queries ───────────────────────────────────────────────────────────

    /// `true` if `row` passes both the landfill and municipality filters.
    pub fn allows(&self, row: &TransportRow) -> bool {
        self.allows_landfill(&row.landfill) && self.allows_municipality(&row.municipality)
    }

    pub fn allows_landfill(&self, name: &str) -> bool {
        self.landfills.is_empty() || self.landfills.contains(name)
    }

    pub fn allows_municipality(&self, name: &str) -> bool {
        match &self.municipalities {
            None      => true,
            Some(set) => set.contains(name),
        }
    }

    /// `true` if `name` is explicitly selected in the municipality filter.
    pub fn municipality_selected(&self, name: &str) -> bool {
        self.municipalities
            .as_ref()
            .is_some_and(|set| set.contains(name))
    }

    /// Selected landfill names (empty = all).
    pub fn landfills(&self) -> &FxHashSet<String> {
        &self.landfills
    }

    /// Selected municipality names, or `None` when unfiltered.
    pub fn municipalities(&self) -> Option<&FxHashSet<String>> {
        self.municipalities.as_ref()
    }
}
