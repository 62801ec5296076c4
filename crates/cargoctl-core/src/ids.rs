//! Strongly typed, zero-cost identifier wrappers.
//!
//! All IDs are `Copy + Ord + Hash` so they can be used as map keys and sorted
//! collection elements without ceremony. The inner integer is `pub` to allow
//! direct indexing into flat `Vec`s via `id.0 as usize`, but callers should
//! prefer the `.index()` helpers for clarity.

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

        impl From<$name> for usize {
            #[inline(always)]
            fn from(id: $name) -> usize {
                id.0 as usize
            }
        }

        impl TryFrom<usize> for $name {
            type Error = std::num::TryFromIntError;
            fn try_from(n: usize) -> Result<$name, Self::Error> {
                <$inner>::try_from(n).map($name)
            }
        }
    };
}

typed_id! {
    /// Index of an airport in the route network.
    pub struct AirportId(u32);
}

typed_id! {
    /// Index of a plane type. Each type owns its own directed route subgraph.
    pub struct PlaneTypeId(u16);
}

typed_id! {
    /// Index of an aircraft in the plane store.
    pub struct PlaneId(u32);
}

typed_id! {
    /// Index of a cargo item.
    pub struct CargoId(u32);
}

/// Sentinel airport id meaning "no destination" in action messages — a plane
/// reporting this destination is not taking off this tick.
pub const NO_AIRPORT: AirportId = AirportId::INVALID;

/// A `(plane_type, weakly-connected-component)` pair naming a reachability group.
///
/// Unlike the other IDs this is not a bare integer wrapper — it is a compound
/// key, constructed directly by whoever builds the group partition rather than
/// allocated sequentially.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GroupId {
    pub plane_type: PlaneTypeId,
    pub component: u32,
}

impl GroupId {
    pub fn new(plane_type: PlaneTypeId, component: u32) -> Self {
        Self {
            plane_type,
            component,
        }
    }
}

impl fmt::Display for GroupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Group({}, {})", self.plane_type, self.component)
    }
}
