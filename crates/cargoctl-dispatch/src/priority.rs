//! Priority policy (C11): the tick-visible urgency attached to load/unload
//! actions.

use cargoctl_core::PriorityBand;

/// Priority for a load/unload action: the minimum of the plane's baseline
/// band and the band derived from the edge's own deadline, per the tie-break
/// rule (the more urgent of the two always wins).
pub fn action_priority(baseline: PriorityBand, deadline: Option<u64>, now: u64, latest_deadline: u64, n_agents: u32) -> u32 {
    let derived = match deadline {
        Some(d) if d < latest_deadline => PriorityBand::from_deadline(now, d, latest_deadline, n_agents),
        _ => PriorityBand::max(n_agents),
    };
    baseline.min(derived).0
}
