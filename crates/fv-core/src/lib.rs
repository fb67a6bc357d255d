//! `fv-core` — foundational types for the flowviz flow-map core.
//!
//! This crate is a dependency of every other `fv-*` crate.  It intentionally
//! has no `fv-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module     | Contents                                                  |
//! |------------|-----------------------------------------------------------|
//! | [`geo`]    | `GeoPoint` (lng/lat), `ScreenPoint` + interpolation       |
//! | [`camera`] | `CameraState` + tolerance comparison, `CameraRequest`     |
//! | [`map`]    | `MapControl` — the consumed slippy-map capability trait   |
//! | [`color`]  | `Color`, hex parsing, fixed palette constants             |
//! | [`ids`]    | `RouteId`, `FlowId`, `FlowKind`                           |
//! | [`rng`]    | `PhaseRng` — seeded particle-phase source                 |
//! | [`error`]  | `CoreError`, `CoreResult`                                 |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.          |

pub mod camera;
pub mod color;
pub mod error;
pub mod geo;
pub mod ids;
pub mod map;
pub mod rng;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use camera::{CameraRequest, CameraState};
pub use color::Color;
pub use error::{CoreError, CoreResult};
pub use geo::{GeoPoint, ScreenPoint};
pub use ids::{FlowId, FlowKind, RouteId};
pub use map::MapControl;
pub use rng::PhaseRng;
