//! Actions the dispatcher can emit for a plane in a single tick.

use cargoctl_core::{AirportId, CargoId};

/// One tick's worth of decision for a single aircraft.
///
/// Only `Load`/`Unload`/`SetDestination` carry environment-visible effect;
/// `NoOp` means the aircraft does nothing observable this tick (it may still
/// have been released back to the free pool, or have advanced internal
/// dispatch bookkeeping).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Load { cargo_id: CargoId, priority: u32 },
    Unload { cargo_id: CargoId, priority: u32 },
    SetDestination { airport: AirportId },
    NoOp,
}
