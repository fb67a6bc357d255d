//! Strongly typed identifiers for routes and flows.
//!
//! IDs are `Copy + Ord + Hash` so they can be used as map keys without
//! ceremony.  `FlowId` is a composite: it must stay stable across frames
//! (it keys the projection cache) yet distinguish the parallel arcs and the
//! reverse recycling variant emitted for a single dataset row.

use std::fmt;

/// Generate a typed ID wrapper around a primitive integer.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub $inner);

        impl $name {
            /// Sentinel meaning "no valid ID".
            pub const INVALID: $name = $name(<$inner>::MAX);

            /// Cast to `usize` for direct use as a `Vec` index.
            #[inline(always)]
            pub fn index(self) -> usize {
                self.0 as usize
            }
        }

        impl Default for $name {
            /// Returns the `INVALID` sentinel so uninitialized IDs are visibly invalid.
            #[inline(always)]
            fn default() -> Self {
                Self::INVALID
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }
    };
}

typed_id! {
    /// Index of a registered route geometry.  Rows whose route key is absent
    /// from the registry carry `RouteId::INVALID` and fall back to a straight
    /// two-point path.
    pub struct RouteId(u32);
}

// ── FlowId ────────────────────────────────────────────────────────────────────

/// Direction of a flow: forward waste transport or reverse recycling.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FlowKind {
    Waste,
    Recycling,
}

/// Stable identifier of one animatable flow arc.
///
/// Derived from the route key, the dataset row index, the arc ordinal within
/// the row's tier, and the direction flag — together unique across a build.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FlowId {
    pub route: RouteId,
    pub row:   u32,
    pub arc:   u8,
    pub kind:  FlowKind,
}

impl FlowId {
    pub fn new(route: RouteId, row: u32, arc: u8, kind: FlowKind) -> Self {
        Self { route, row, arc, kind }
    }
}

impl fmt::Display for FlowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self.kind {
            FlowKind::Waste     => "waste",
            FlowKind::Recycling => "recycle",
        };
        write!(f, "{}_{}_{}_{}", self.route.0, tag, self.row, self.arc)
    }
}
