//! Metrorail API client.
//!
//! Typed async methods for the rail endpoints: lines, stations, schedules,
//! paths, parking, arrival predictions, live train positions, track
//! topology, and incident feeds. Request parameters are [`Station`] and
//! [`Line`](crate::domain::Line) values, so invalid codes are rejected
//! before a request is ever built.
//!
//! [`Station`]: crate::domain::Station

mod client;
mod types;

pub use client::RailClient;
pub use types::{
    AllDayParking, CircuitNeighbor, DailyTimes, ElevatorIncident, LineInfo, PathItem,
    RailFare, RailIncident, RailPrediction, RouteCircuit, ShortTermParking, StandardRoute,
    StationAddress, StationEntrance, StationInfo, StationParking, StationTime,
    StationToStationInfo, TrackCircuit, TrainPosition, TrainTime,
};
