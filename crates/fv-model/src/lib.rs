//! `fv-model` — the flow model: dataset, filters, tiers, and flow building.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                      |
//! |-------------|---------------------------------------------------------------|
//! | [`dataset`] | `TransportRow`, `Dataset` — rows + coordinate/route lookups   |
//! | [`filters`] | `Filters` — landfill allow-set and municipality selection     |
//! | [`tier`]    | `Tier` — volume bucket controlling arc multiplicity           |
//! | [`flow`]    | `Flow` — one animatable transport arc                         |
//! | [`builder`] | `build_flows` — dataset + filters + zoom → `Vec<Flow>`        |
//!
//! # Degradation model
//!
//! Nothing in this crate fails at runtime.  A route key with no registered
//! geometry falls back to a straight two-point path; a municipality or
//! landfill name absent from the coordinate lookup produces a flow with an
//! unresolved endpoint, which the renderer skips.  Empty datasets and
//! zero-match filters are valid states that simply build zero flows.

pub mod builder;
pub mod dataset;
pub mod filters;
pub mod flow;
pub mod tier;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use builder::{FORWARD_SPEED, REVERSE_SPEED, SIMPLIFY_BELOW_ZOOM, build_flows};
pub use dataset::{Dataset, TransportRow};
pub use filters::Filters;
pub use flow::Flow;
pub use tier::Tier;
