//! basic — smallest example for the cargoctl routing controller.
//!
//! Two airports, one plane, one cargo item. Runs `reset` then a handful of
//! `policies` ticks and prints the action chosen for the plane each tick.

use std::collections::{BTreeMap, HashMap};
use std::time::Instant;

use anyhow::Result;

use cargoctl_cargo::Cargo;
use cargoctl_cargo::loader::PlaneSpec;
use cargoctl_controller::{
    AgentObservation, ControllerBuilder, GlobalState, Info, NoopObserver, Observation, RouteEdge, ScenarioInfo,
};
use cargoctl_core::{AirportId, CargoId, PlaneId, PlaneTypeId};
use cargoctl_dispatch::DispatchState;
use cargoctl_graph::DijkstraRouter;

const NORTH: AirportId = AirportId(0);
const SOUTH: AirportId = AirportId(1);
const CARGO: CargoId = CargoId(0);
const PLANE: PlaneId = PlaneId(0);
const TYPE_A: PlaneTypeId = PlaneTypeId(0);

fn global_state() -> GlobalState {
    GlobalState {
        route_map: vec![
            RouteEdge { plane_type: TYPE_A, from: NORTH, to: SOUTH, cost: 1, time: 4 },
            RouteEdge { plane_type: TYPE_A, from: SOUTH, to: NORTH, cost: 1, time: 4 },
        ],
        active_cargo: vec![Cargo {
            id: CARGO,
            origin: NORTH,
            destination: SOUTH,
            earliest_pickup_time: 0,
            soft_deadline: 20,
            hard_deadline: 40,
            weight: 500,
        }],
        event_new_cargo: vec![],
        scenario_info: vec![ScenarioInfo { processing_time: 2 }],
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    println!("=== basic — cargoctl routing controller ===");
    println!("Airports: 2  |  Planes: 1  |  Cargo: 1");
    println!();

    // 1. Build the controller and reset it with the starting scenario.
    let mut controller = ControllerBuilder::new(DijkstraRouter)
        .planes(vec![PlaneSpec { id: PLANE, plane_type: TYPE_A, location: NORTH, max_weight: 1_000 }])
        .build();

    let global = global_state();
    let reset_obs = Observation {
        global: global.clone(),
        agents: BTreeMap::from([(PLANE, grounded(NORTH, true, false))]),
    };
    controller.reset(&reset_obs, 42)?;

    // 2. Step through a handful of ticks, driving the observation by hand to
    // mirror what the actual flight-state reporter would send each tick.
    let t0 = Instant::now();
    let mut location = NORTH;
    let mut onboard = false;

    for tick in 0..6 {
        let at_current = !onboard && location == NORTH;
        let state = if onboard && location == NORTH { DispatchState::ReadyForTakeoff } else { DispatchState::Waiting };

        let obs = Observation {
            global: global.clone(),
            agents: BTreeMap::from([(PLANE, AgentObservation {
                state,
                current_airport: location,
                destination: location,
                plane_type: TYPE_A,
                max_weight: 1_000,
                current_weight: if onboard { 500 } else { 0 },
                cargo_at_current_airport: at_current,
                cargo_onboard: onboard,
            })]),
        };

        let actions = controller.policies(&obs, &HashMap::<PlaneId, Info>::new(), &mut NoopObserver);
        let action = &actions[&PLANE];

        println!("tick {tick:>2}  at {location:?}  -> load={:?} unload={:?} dest={:?}", action.cargo_to_load, action.cargo_to_unload, action.destination);

        if action.cargo_to_load.is_some() {
            onboard = true;
        }
        if action.destination != cargoctl_core::NO_AIRPORT {
            location = action.destination;
        }
        if action.cargo_to_unload.is_some() {
            onboard = false;
            break;
        }
    }

    let elapsed = t0.elapsed();
    println!();
    println!("done in {:.3} ms", elapsed.as_secs_f64() * 1000.0);
    println!("cargo delivered: {}", controller.cargo_plan(CARGO).map(|p| p.is_delivered()).unwrap_or(false));

    Ok(())
}

fn grounded(location: AirportId, cargo_at_current_airport: bool, cargo_onboard: bool) -> AgentObservation {
    AgentObservation {
        state: DispatchState::Waiting,
        current_airport: location,
        destination: location,
        plane_type: TYPE_A,
        max_weight: 1_000,
        current_weight: 0,
        cargo_at_current_airport,
        cargo_onboard,
    }
}
