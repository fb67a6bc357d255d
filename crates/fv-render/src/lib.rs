//! `fv-render` — the flow-animation and camera-synchronized render pipeline.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                     |
//! |----------------|--------------------------------------------------------------|
//! | [`projection`] | `ProjectionCache` — camera-keyed screen-space path memo     |
//! | [`surface`]    | `DrawSurface` + `BlendMode` — drawing abstraction           |
//! | [`overlay`]    | `LabelOverlay` — DOM-label abstraction                      |
//! | [`particles`]  | Particle/trail animator and its visual constants            |
//! | [`labels`]     | Label renderer — per-frame overlay positioning              |
//! | [`viz`]        | `FlowViz` — render-loop context + public control API        |
//!
//! # Per-frame order
//!
//! `FlowViz::render_frame` runs a fixed sequence each frame:
//!
//! ```text
//! ① sync surface size   ② base routes (faint, cached projections)
//! ③ particles + trails (skipped while paused)   ④ label overlays
//! ```
//!
//! Later steps read geometry established earlier in the same frame (the
//! particle pass reads projections refreshed by the base-route pass) and the
//! visual layering depends on the order, so it never varies.
//!
//! # Degradation
//!
//! This crate surfaces no errors from the render path.  Flows with fewer
//! than two resolvable projected points are skipped for the frame (their
//! particle phase does not advance); empty flow lists draw nothing.

pub mod labels;
pub mod overlay;
pub mod particles;
pub mod projection;
pub mod surface;
pub mod viz;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use overlay::{LabelOverlay, NoopOverlay};
pub use projection::ProjectionCache;
pub use surface::{BlendMode, DrawSurface, NoopSurface};
pub use viz::{FlowViz, PerfStats};
