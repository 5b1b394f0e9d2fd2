//! Metrobus API client.
//!
//! Typed async methods for the bus endpoints: routes, stops, schedules,
//! live positions, arrival predictions, and incidents. Route and stop
//! identifiers are open sets (service changes add and retire them), so
//! they are plain strings rather than enumerations.

mod client;
mod types;

pub use client::BusClient;
pub use types::{
    BusArrival, BusIncident, BusPathDetails, BusPosition, BusPrediction, BusRoute,
    BusRouteSchedule, BusStop, BusStopSchedule, BusStopTime, BusTrip, PathDirection,
    PathShapePoint,
};
