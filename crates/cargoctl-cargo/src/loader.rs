//! CSV scenario loader (C12, this crate's ambient addition).
//!
//! A scenario is described by three independent CSV tables: route edges (one
//! row per directed, per-plane-type edge), planes (one row per aircraft), and
//! cargo (one row per cargo item). Each has its own loader, mirroring the
//! single-table-per-concept convention used elsewhere in this codebase.
//!
//! # Route edges
//!
//! ```csv
//! plane_type,from,to,cost,time
//! 0,1,2,10,10
//! 0,2,3,10,10
//! 1,1,3,5,20
//! ```
//!
//! # Planes
//!
//! ```csv
//! id,plane_type,location,max_weight
//! 0,0,1,100
//! 1,1,1,50
//! ```
//!
//! # Cargo
//!
//! ```csv
//! id,origin,destination,earliest_pickup_time,soft_deadline,hard_deadline,weight
//! 7,1,2,0,100,200,20
//! ```

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use cargoctl_core::{AirportId, CargoId, PlaneId, PlaneTypeId};
use cargoctl_graph::NetworkSetBuilder;

use crate::types::Cargo;
use crate::CargoError;

#[derive(Deserialize)]
struct RouteRecord {
    plane_type: u16,
    from: u32,
    to: u32,
    cost: u32,
    time: u32,
}

#[derive(Deserialize)]
struct CargoRecord {
    id: u32,
    origin: u32,
    destination: u32,
    earliest_pickup_time: u64,
    soft_deadline: u64,
    hard_deadline: u64,
    weight: u32,
}

#[derive(Deserialize)]
struct PlaneRecord {
    id: u32,
    plane_type: u16,
    location: u32,
    max_weight: u32,
}

/// A loaded plane definition; turned into the live `Plane` state by
/// `cargoctl-plan`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaneSpec {
    pub id: PlaneId,
    pub plane_type: PlaneTypeId,
    pub location: AirportId,
    pub max_weight: u32,
}

pub fn load_routes_csv(path: &Path) -> Result<NetworkSetBuilder, CargoError> {
    let file = std::fs::File::open(path)?;
    load_routes_reader(file)
}

pub fn load_routes_reader<R: Read>(reader: R) -> Result<NetworkSetBuilder, CargoError> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut builder = NetworkSetBuilder::new();
    for result in csv_reader.deserialize::<RouteRecord>() {
        let row = result.map_err(|e| CargoError::Parse(e.to_string()))?;
        builder.add_edge(
            PlaneTypeId(row.plane_type),
            AirportId(row.from),
            AirportId(row.to),
            row.cost,
            row.time,
        );
    }
    Ok(builder)
}

pub fn load_cargo_csv(path: &Path) -> Result<Vec<Cargo>, CargoError> {
    let file = std::fs::File::open(path)?;
    load_cargo_reader(file)
}

pub fn load_cargo_reader<R: Read>(reader: R) -> Result<Vec<Cargo>, CargoError> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut cargo = Vec::new();
    for result in csv_reader.deserialize::<CargoRecord>() {
        let row = result.map_err(|e| CargoError::Parse(e.to_string()))?;
        cargo.push(Cargo {
            id: CargoId(row.id),
            origin: AirportId(row.origin),
            destination: AirportId(row.destination),
            earliest_pickup_time: row.earliest_pickup_time,
            soft_deadline: row.soft_deadline,
            hard_deadline: row.hard_deadline,
            weight: row.weight,
        });
    }
    Ok(cargo)
}

pub fn load_planes_csv(path: &Path) -> Result<Vec<PlaneSpec>, CargoError> {
    let file = std::fs::File::open(path)?;
    load_planes_reader(file)
}

pub fn load_planes_reader<R: Read>(reader: R) -> Result<Vec<PlaneSpec>, CargoError> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut planes = Vec::new();
    for result in csv_reader.deserialize::<PlaneRecord>() {
        let row = result.map_err(|e| CargoError::Parse(e.to_string()))?;
        planes.push(PlaneSpec {
            id: PlaneId(row.id),
            plane_type: PlaneTypeId(row.plane_type),
            location: AirportId(row.location),
            max_weight: row.max_weight,
        });
    }
    Ok(planes)
}
