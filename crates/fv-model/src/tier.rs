//! Volume tier bucketing.
//!
//! A flow's tier is a coarse bucket of its yearly tonnage and controls how
//! many parallel arcs represent it when the map is not in simplified
//! (low-zoom) mode.

/// Coarse volume bucket.  Thresholds are strict: exactly 30 000 tons is
/// still `Two`, exactly 10 000 is still `One`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Tier {
    One,
    Two,
    Three,
}

impl Tier {
    /// Bucket a yearly tonnage: `> 30 000 → Three`, `> 10 000 → Two`,
    /// otherwise `One`.
    pub fn from_volume(tons: f64) -> Tier {
        if tons > 30_000.0 {
            Tier::Three
        } else if tons > 10_000.0 {
            Tier::Two
        } else {
            Tier::One
        }
    }

    /// Parallel arcs drawn for this tier when not in simplified mode.
    #[inline]
    pub fn arc_count(self) -> u8 {
        self.as_u8()
    }

    #[inline]
    pub fn as_u8(self) -> u8 {
        match self {
            Tier::One   => 1,
            Tier::Two   => 2,
            Tier::Three => 3,
        }
    }
}

impl std::fmt::Display for Tier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_u8())
    }
}
