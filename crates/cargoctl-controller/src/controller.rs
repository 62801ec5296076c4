//! The [`Controller`] struct: `reset`/`policies` lifecycle tying the cargo
//! builder, assignment engine, window propagator, and dispatcher together.

use std::collections::{HashMap, HashSet};

use cargoctl_cargo::{build_cargo_edges, Cargo, CargoEdge};
use cargoctl_core::{AirportId, CargoId, GroupId, PlaneId, PlaneTypeId, PriorityBand, BIG_TIME, NO_AIRPORT};
use cargoctl_dispatch::{
    dispatch_ready_for_takeoff, dispatch_waiting, extract_assigned_path, Action, AgentAssignment, Assignment, CargoPlan, DispatchState, FreePool,
};
use cargoctl_graph::{NetworkSet, NetworkSetBuilder, OfflineEdges, PathCache, Router};
use cargoctl_plan::{plan_all, PlaneStore};

use crate::boundary::{ActionOut, Info, Observation};
use crate::error::ControllerResult;
use crate::observer::ControllerObserver;

/// Where a plane is within its queued legs: the next not-yet-dispatched leg
/// and the next not-yet-dispatched member of that leg.
///
/// A leg can carry several cargo edges sharing its origin/destination; this
/// core dispatches one cargo at a time per leg (one load/unload action per
/// tick, per the per-tick FSM), advancing the cursor as each member is
/// delivered or purged.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlaneCursor {
    pub next_leg: usize,
    pub next_member: usize,
}

/// Owns all per-episode mutable state: plane/leg state, cargo-plan and
/// assignment registries, the free-agent pool, the offline-edge tracker, and
/// the route cache. Single-threaded and synchronous per §5 — `reset` and
/// `policies` both run to completion before returning.
pub struct Controller<R: Router> {
    pub(crate) router: R,
    pub(crate) network: NetworkSet,
    pub(crate) cache: PathCache,
    pub(crate) store: PlaneStore,
    pub(crate) cargo_plans: HashMap<CargoId, CargoPlan>,
    pub(crate) cargos: HashMap<CargoId, Cargo>,
    pub(crate) assignments: HashMap<PlaneId, AgentAssignment>,
    pub(crate) cursors: HashMap<PlaneId, PlaneCursor>,
    pub(crate) free_pool: FreePool,
    pub(crate) offline: OfflineEdges,
    pub(crate) processing_time: u64,
    pub(crate) latest_deadline: u64,
    pub(crate) n_agents: u32,
    pub(crate) tick: u64,
}

impl<R: Router> Controller<R> {
    /// Build the route network, cargo edges, and initial plan from `obs`.
    /// Called once per episode.
    pub fn reset(&mut self, obs: &Observation, _seed: u64) -> ControllerResult<()> {
        let mut builder = NetworkSetBuilder::new();
        for e in &obs.global.route_map {
            builder.add_edge(e.plane_type, e.from, e.to, e.cost, e.time);
        }
        self.network = builder.build();
        self.cache = PathCache::new();

        self.processing_time = match obs.global.scenario_info.first() {
            Some(info) => info.processing_time,
            None => {
                tracing::warn!("reset observation carries no scenario_info; defaulting processing_time to 0");
                0
            }
        };

        self.latest_deadline = obs.global.active_cargo.iter().map(|c| c.soft_deadline).max().unwrap_or(BIG_TIME);
        self.n_agents = obs.agents.len() as u32;
        self.tick = 0;

        self.cargo_plans.clear();
        self.cargos.clear();
        let mut cargo_edges: Vec<CargoEdge> = Vec::new();
        for cargo in &obs.global.active_cargo {
            self.cargo_plans.insert(cargo.id, CargoPlan::new(cargo.origin, cargo.destination));
            self.cargos.insert(cargo.id, cargo.clone());
            cargo_edges.extend(build_cargo_edges(cargo, &self.network, &self.cache, &self.router, self.processing_time));
        }

        plan_all(&mut cargo_edges, &mut self.store, &self.network, &self.cache, &self.router);

        self.assignments = obs.agents.keys().map(|&id| (id, AgentAssignment::default())).collect();
        self.cursors = obs.agents.keys().map(|&id| (id, PlaneCursor::default())).collect();
        self.free_pool = FreePool::new();

        Ok(())
    }

    /// Process one tick: validate `obs`/`infos` against known agents, ingest
    /// outage warnings, handle missed cargo, add any new cargo, and run the
    /// per-tick FSM for every agent. Returns the boundary action for each.
    pub fn policies<O: ControllerObserver>(
        &mut self,
        obs: &Observation,
        infos: &HashMap<PlaneId, Info>,
        observer: &mut O,
    ) -> HashMap<PlaneId, ActionOut> {
        observer.on_tick_start(self.tick);

        for info in infos.values() {
            self.offline.ingest(cargoctl_core::Tick(self.tick), &info.warnings);
        }

        for cargo in &obs.global.event_new_cargo {
            if !self.cargo_plans.contains_key(&cargo.id) {
                self.cargo_plans.insert(cargo.id, CargoPlan::new(cargo.origin, cargo.destination));
                self.cargos.insert(cargo.id, cargo.clone());
                let mut edges = build_cargo_edges(cargo, &self.network, &self.cache, &self.router, self.processing_time);
                plan_all(&mut edges, &mut self.store, &self.network, &self.cache, &self.router);
            }
        }

        let active_cargo_ids: HashSet<CargoId> = obs.global.active_cargo.iter().map(|c| c.id).collect();

        let mut out = HashMap::new();
        for (&plane_id, agent_obs) in &obs.agents {
            let action = self.dispatch_one(plane_id, agent_obs, &active_cargo_ids, observer);
            out.insert(plane_id, to_action_out(action));
        }

        observer.on_tick_end(self.tick);
        self.tick += 1;
        out
    }

    #[tracing::instrument(level = "trace", skip(self, agent_obs, active_cargo_ids, observer), fields(tick = self.tick))]
    fn dispatch_one<O: ControllerObserver>(
        &mut self,
        plane_id: PlaneId,
        agent_obs: &crate::boundary::AgentObservation,
        active_cargo_ids: &HashSet<CargoId>,
        observer: &mut O,
    ) -> Action {
        if agent_obs.state == DispatchState::Moving || agent_obs.state == DispatchState::Processing {
            return Action::NoOp;
        }

        if let Some(cid) = self.missed_cargo(plane_id, agent_obs, active_cargo_ids) {
            self.purge_cargo(cid);
            observer.on_missed_cargo(plane_id, cid);
            tracing::info!(plane = ?plane_id, cargo = ?cid, tick = self.tick, "cargo missed, purging from all plans");
            let priority = PriorityBand::max(self.n_agents).0;
            return Action::Unload { cargo_id: cid, priority };
        }

        self.refill_if_idle(plane_id, agent_obs.plane_type);

        let priority = self.action_priority(plane_id, agent_obs.current_airport);
        let group = self.network.group_of(agent_obs.plane_type, agent_obs.current_airport);

        match agent_obs.state {
            DispatchState::Waiting => {
                let assignment = self.assignments.entry(plane_id).or_default();
                dispatch_waiting(
                    assignment,
                    &mut self.cargo_plans,
                    agent_obs.current_airport,
                    agent_obs.cargo_at_current_airport,
                    agent_obs.cargo_onboard,
                    priority,
                )
            }
            DispatchState::ReadyForTakeoff => {
                let offline_before = self.offline.len();
                let assignment = self.assignments.entry(plane_id).or_default();
                let action = dispatch_ready_for_takeoff(
                    plane_id,
                    agent_obs.plane_type,
                    assignment,
                    agent_obs.current_airport,
                    agent_obs.cargo_at_current_airport,
                    agent_obs.cargo_onboard,
                    &self.network,
                    &self.offline,
                    &self.router,
                    &mut self.free_pool,
                    group,
                    priority,
                );
                if offline_before > 0 {
                    observer.on_reroute(plane_id);
                    tracing::info!(plane = ?plane_id, offline_edges = offline_before, tick = self.tick, "plane rerouted around an offline edge");
                }
                action
            }
            DispatchState::Moving | DispatchState::Processing => Action::NoOp,
        }
    }

    /// A cargo this plane is carrying has vanished from `active_cargo`.
    fn missed_cargo(&self, plane_id: PlaneId, agent_obs: &crate::boundary::AgentObservation, active_cargo_ids: &HashSet<CargoId>) -> Option<CargoId> {
        if !agent_obs.cargo_onboard {
            return None;
        }
        let cid = self.assignments.get(&plane_id)?.cargo_id?;
        if active_cargo_ids.contains(&cid) {
            None
        } else {
            Some(cid)
        }
    }

    /// Remove every plan entry referencing `cargo_id` from every plane, per
    /// §7/§9a ("all planes, not just the one currently holding it").
    fn purge_cargo(&mut self, cargo_id: CargoId) {
        for plane in &mut self.store.planes {
            for leg in &mut plane.legs {
                leg.members.retain(|m| m.cargo_id != cargo_id);
            }
            plane.legs.retain(|leg| !leg.members.is_empty());
        }
        self.store.ce_plane_map.retain(|&(cid, _), _| cid != cargo_id);

        for assignment in self.assignments.values_mut() {
            if assignment.cargo_id == Some(cargo_id) {
                *assignment = AgentAssignment::default();
            }
        }

        if let Some(plan) = self.cargo_plans.get_mut(&cargo_id) {
            plan.assignment = Assignment::Unassigned;
        }
    }

    /// If `plane_id` is idle, pull the next un-dispatched cargo member from
    /// its queued legs and set its assignment's path to the route the plane
    /// must actually fly (possibly several hops on its own subgraph) to
    /// cover that leg's single origin→destination edge.
    fn refill_if_idle(&mut self, plane_id: PlaneId, plane_type: PlaneTypeId) {
        let is_idle = self.assignments.get(&plane_id).map(|a| a.is_idle()).unwrap_or(true);
        if !is_idle {
            return;
        }

        loop {
            let cursor = *self.cursors.entry(plane_id).or_default();
            let legs_len = self.store.get(plane_id).legs.len();
            if cursor.next_leg >= legs_len {
                return;
            }
            let members_len = self.store.get(plane_id).legs[cursor.next_leg].members.len();
            if cursor.next_member >= members_len {
                let c = self.cursors.get_mut(&plane_id).unwrap();
                c.next_leg += 1;
                c.next_member = 0;
                continue;
            }

            let leg = &self.store.get(plane_id).legs[cursor.next_leg];
            if cursor.next_member == 0 && !self.leg_ready_to_start(leg) {
                return;
            }

            let cargo_id = leg.members[cursor.next_member].cargo_id;
            let (origin, destination) = (leg.origin(), leg.destination());

            let path = self
                .network
                .graph_for(plane_type)
                .and_then(|graph| self.router.route(graph, origin, destination).ok())
                .map(|p| p.airports)
                .unwrap_or_else(|| vec![origin, destination]);
            let path = extract_assigned_path(&self.network, plane_type, &path);

            self.cursors.get_mut(&plane_id).unwrap().next_member += 1;
            self.assignments.insert(plane_id, AgentAssignment { cargo_id: Some(cargo_id), path });
            return;
        }
    }

    /// All-or-wait loading: a multi-cargo leg only starts once every member
    /// is physically present at the leg's origin, unless one member has
    /// already run out of slack (`tick >= lp`), in which case the plane
    /// proceeds with whatever is loadable rather than miss that deadline.
    fn leg_ready_to_start(&self, leg: &cargoctl_plan::Leg) -> bool {
        if leg.members.len() <= 1 {
            return true;
        }
        let origin = leg.origin();
        let all_present = leg.members.iter().all(|m| self.cargo_plans.get(&m.cargo_id).map(|p| p.cur_loc == origin).unwrap_or(false));
        if all_present {
            return true;
        }
        leg.members.iter().any(|m| self.tick >= m.lp)
    }

    /// The tie-break priority (§4.7, §9a): the minimum of the plane's
    /// baseline band (from its outstanding legs) and the band derived from
    /// the nearest deadline among cargo at the current airport.
    fn action_priority(&self, plane_id: PlaneId, location: AirportId) -> u32 {
        let plane = self.store.get(plane_id);
        let baseline = if plane.has_legs() {
            PriorityBand::from_deadline(self.tick, plane.lp(), self.latest_deadline, self.n_agents)
        } else {
            PriorityBand::max(self.n_agents)
        };

        let nearest_deadline = self
            .assignments
            .get(&plane_id)
            .and_then(|a| a.cargo_id)
            .and_then(|cid| self.cargos.get(&cid))
            .filter(|c| c.origin == location || c.destination == location)
            .map(|c| c.soft_deadline);

        cargoctl_dispatch::action_priority(baseline, nearest_deadline, self.tick, self.latest_deadline, self.n_agents)
    }

    pub fn free_pool(&self) -> &FreePool {
        &self.free_pool
    }

    pub fn group_of(&self, plane_type: PlaneTypeId, airport: AirportId) -> Option<GroupId> {
        self.network.group_of(plane_type, airport)
    }

    pub fn cargo_plan(&self, id: CargoId) -> Option<&CargoPlan> {
        self.cargo_plans.get(&id)
    }

    pub fn assignment(&self, plane_id: PlaneId) -> Option<&AgentAssignment> {
        self.assignments.get(&plane_id)
    }
}

fn to_action_out(action: Action) -> ActionOut {
    match action {
        Action::Load { cargo_id, priority } => ActionOut { priority: Some(priority), cargo_to_load: Some(cargo_id), cargo_to_unload: None, destination: NO_AIRPORT },
        Action::Unload { cargo_id, priority } => ActionOut { priority: Some(priority), cargo_to_load: None, cargo_to_unload: Some(cargo_id), destination: NO_AIRPORT },
        Action::SetDestination { airport } => ActionOut { priority: None, cargo_to_load: None, cargo_to_unload: None, destination: airport },
        Action::NoOp => ActionOut::no_op(),
    }
}
