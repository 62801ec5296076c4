//! Window propagator (C6).
//!
//! After a cargo edge is committed to a plane, four fixed-order stages push
//! the resulting ep/lp shifts onto the rest of the plan: forward ep on the
//! same cargo, forward ep through leg siblings, backward lp on the same
//! cargo/leg chain, backward lp through leg siblings.
//!
//! Termination: each propagated message strictly decreases available
//! lp-slack or increases ep, both bounded by `BIG_TIME`.

use std::collections::{HashSet, VecDeque};

use cargoctl_cargo::CargoEdge;
use cargoctl_core::{CargoId, PlaneId};

use crate::store::PlaneStore;

/// The four diffs `add_cargo_edge` reports back to the propagator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WindowDiffs {
    pub ep_diff_ce: u64,
    pub lp_diff_ce: u64,
    pub ep_diff_leg: u64,
    pub lp_diff_leg: u64,
}

/// Apply `diffs` resulting from committing `committed` to `plane_id`.
///
/// `pre_leg_ep`/`pre_leg_lp` are the leg's ep/lp *before* this commit, needed
/// by the leg-sibling stages to compute each sibling's already-applied
/// share.
pub fn propagate(
    cargo_edges: &mut [CargoEdge],
    store: &mut PlaneStore,
    committed: &CargoEdge,
    plane_id: PlaneId,
    pre_leg_ep: u64,
    pre_leg_lp: u64,
    diffs: WindowDiffs,
) {
    if diffs.ep_diff_ce > 0 {
        forward_ep_same_cargo(cargo_edges, committed, diffs.ep_diff_ce);
    }
    if diffs.ep_diff_leg > 0 {
        forward_ep_leg_siblings(cargo_edges, store, committed, plane_id, pre_leg_ep, diffs.ep_diff_leg);
    }
    if diffs.lp_diff_ce > 0 && committed.sequence > 1 {
        backward_lp_chain(store, committed.cargo_id, committed.sequence - 1, diffs.lp_diff_ce);
    }
    if diffs.lp_diff_leg > 0 {
        backward_lp_leg_siblings(cargo_edges, store, committed, plane_id, pre_leg_lp, diffs.lp_diff_leg);
    }
}

fn forward_ep_same_cargo(cargo_edges: &mut [CargoEdge], committed: &CargoEdge, delta: u64) {
    for ce in cargo_edges.iter_mut() {
        if ce.cargo_id == committed.cargo_id && ce.sequence > committed.sequence {
            ce.ep += delta;
        }
    }
}

fn forward_ep_leg_siblings(
    cargo_edges: &mut [CargoEdge],
    store: &mut PlaneStore,
    committed: &CargoEdge,
    plane_id: PlaneId,
    pre_leg_ep: u64,
    delta: u64,
) {
    let mut visited: HashSet<(CargoId, u32)> = HashSet::new();
    visited.insert(committed.key());

    let mut queue: VecDeque<(Vec<CargoEdge>, u64, u64)> = VecDeque::new();
    let siblings = leg_siblings_of(store, plane_id, committed.key());
    queue.push_back((siblings, delta, pre_leg_ep));

    while let Some((siblings, delta, pre_ep)) = queue.pop_front() {
        for sib in siblings {
            if !visited.insert(sib.key()) {
                continue;
            }
            let already_added = pre_ep.saturating_sub(sib.ep);
            let to_add = delta.saturating_sub(already_added);
            if to_add == 0 {
                continue;
            }
            match store.plane_for(sib.cargo_id, sib.sequence) {
                Some(pid) => {
                    if let Some(leg_idx) = leg_index_containing(store, pid, sib.key()) {
                        let pre_leg_ep2 = store.get(pid).legs[leg_idx].ep;
                        store.get_mut(pid).legs[leg_idx].ep += delta;
                        let next_siblings = leg_siblings_at(store, pid, leg_idx, sib.key());
                        queue.push_back((next_siblings, delta, pre_leg_ep2));
                    }
                }
                None => {
                    for ce in cargo_edges.iter_mut() {
                        if ce.cargo_id == sib.cargo_id && ce.sequence >= sib.sequence + 1 {
                            ce.ep += to_add;
                        }
                    }
                }
            }
        }
    }
}

fn backward_lp_chain(store: &mut PlaneStore, cargo_id: CargoId, seed_seq: u32, seed_delta: u64) {
    let mut visited: HashSet<(CargoId, u32)> = HashSet::new();
    let mut queue: VecDeque<(CargoId, u32, u64)> = VecDeque::new();
    queue.push_back((cargo_id, seed_seq, seed_delta));

    while let Some((cid, seq, delta)) = queue.pop_front() {
        if seq == 0 || !visited.insert((cid, seq)) {
            continue;
        }
        let Some(pid) = store.plane_for(cid, seq) else { continue };
        let Some(leg_idx) = leg_index_containing(store, pid, (cid, seq)) else { continue };

        let leg = &store.get(pid).legs[leg_idx];
        let member_lp = leg.members.iter().find(|m| m.key() == (cid, seq)).expect("leg contains member").lp;
        let already_subtracted = member_lp.saturating_sub(leg.lp);
        let to_subtract = delta.saturating_sub(already_subtracted);
        if to_subtract == 0 {
            continue;
        }

        let member_keys: Vec<(CargoId, u32)> = leg.members.iter().map(|m| m.key()).collect();
        let new_lp = leg.lp.saturating_sub(to_subtract);
        store.get_mut(pid).legs[leg_idx].lp = new_lp;

        for (mcid, mseq) in member_keys {
            if mseq > 0 {
                queue.push_back((mcid, mseq - 1, to_subtract));
            }
        }
    }
}

fn backward_lp_leg_siblings(
    cargo_edges: &mut [CargoEdge],
    store: &mut PlaneStore,
    committed: &CargoEdge,
    plane_id: PlaneId,
    pre_leg_lp: u64,
    delta: u64,
) {
    let mut visited: HashSet<(CargoId, u32)> = HashSet::new();
    visited.insert(committed.key());

    let mut queue: VecDeque<(Vec<CargoEdge>, u64, u64)> = VecDeque::new();
    let siblings = leg_siblings_of(store, plane_id, committed.key());
    queue.push_back((siblings, delta, pre_leg_lp));

    while let Some((siblings, delta, pre_lp)) = queue.pop_front() {
        for sib in siblings {
            if !visited.insert(sib.key()) {
                continue;
            }
            let already_subtracted = sib.lp.saturating_sub(pre_lp);
            let to_subtract = delta.saturating_sub(already_subtracted);
            if to_subtract == 0 {
                continue;
            }
            match store.plane_for(sib.cargo_id, sib.sequence) {
                Some(pid) => {
                    if let Some(leg_idx) = leg_index_containing(store, pid, sib.key()) {
                        let pre_leg_lp2 = store.get(pid).legs[leg_idx].lp;
                        store.get_mut(pid).legs[leg_idx].lp = store.get(pid).legs[leg_idx].lp.saturating_sub(delta);
                        let next_siblings = leg_siblings_at(store, pid, leg_idx, sib.key());
                        queue.push_back((next_siblings, delta, pre_leg_lp2));
                    }
                }
                None if sib.sequence > 1 => {
                    for ce in cargo_edges.iter_mut() {
                        if ce.cargo_id == sib.cargo_id && ce.sequence <= sib.sequence - 1 {
                            ce.lp = ce.lp.saturating_sub(to_subtract);
                        }
                    }
                }
                None => {}
            }
        }
    }
}

fn leg_siblings_of(store: &PlaneStore, plane_id: PlaneId, exclude: (CargoId, u32)) -> Vec<CargoEdge> {
    store
        .get(plane_id)
        .last_leg()
        .map(|leg| leg.members.iter().filter(|m| m.key() != exclude).cloned().collect())
        .unwrap_or_default()
}

fn leg_siblings_at(store: &PlaneStore, plane_id: PlaneId, leg_idx: usize, exclude: (CargoId, u32)) -> Vec<CargoEdge> {
    store.get(plane_id).legs[leg_idx]
        .members
        .iter()
        .filter(|m| m.key() != exclude)
        .cloned()
        .collect()
}

fn leg_index_containing(store: &PlaneStore, plane_id: PlaneId, key: (CargoId, u32)) -> Option<usize> {
    store.get(plane_id).legs.iter().position(|l| l.members.iter().any(|m| m.key() == key))
}
