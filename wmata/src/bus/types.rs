//! Bus API response DTOs.
//!
//! Bus route and stop identifiers are open sets maintained by the agency
//! (routes come and go with service changes), so unlike rail codes they
//! stay as strings rather than enumerated types.

use serde::Deserialize;

/// One vehicle from `jBusPositions`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct BusPosition {
    #[serde(rename = "VehicleID")]
    pub vehicle_id: String,

    pub lat: f64,
    pub lon: f64,

    /// Minutes off schedule; negative means running early.
    pub deviation: f64,

    /// Last position report, in the API's local datetime format.
    pub date_time: String,

    #[serde(rename = "TripID")]
    pub trip_id: String,

    #[serde(rename = "RouteID")]
    pub route_id: String,

    /// e.g. "NORTH", "SOUTH".
    pub direction_text: String,

    pub trip_headsign: String,
    pub trip_start_time: String,
    pub trip_end_time: String,
}

/// Response from `jBusPositions`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct BusPositionsResponse {
    pub bus_positions: Vec<BusPosition>,
}

/// One route from `jRoutes`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct BusRoute {
    #[serde(rename = "RouteID")]
    pub route_id: String,

    /// Route name, e.g. "10A - HUNTINGTON STA - PENTAGON".
    pub name: String,

    pub line_description: String,
}

/// Response from `jRoutes`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct BusRoutesResponse {
    pub routes: Vec<BusRoute>,
}

/// One stop as returned by the bus endpoints.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct BusStop {
    /// Regional stop ID; absent for unnumbered temporary stops.
    #[serde(rename = "StopID")]
    pub stop_id: Option<String>,

    pub name: String,
    pub lat: f64,
    pub lon: f64,

    /// Routes serving this stop.
    pub routes: Vec<String>,
}

/// Response from `jStops`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct BusStopsResponse {
    pub stops: Vec<BusStop>,
}

/// A latitude/longitude point along a route shape.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PathShapePoint {
    pub lat: f64,
    pub lon: f64,
    pub seq_num: i32,
}

/// One direction of a route from `jRouteDetails`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PathDirection {
    pub trip_headsign: String,
    pub direction_text: String,
    pub shape: Vec<PathShapePoint>,
    pub stops: Vec<BusStop>,
}

/// Response from `jRouteDetails`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct BusPathDetails {
    #[serde(rename = "RouteID")]
    pub route_id: String,

    pub name: String,

    /// Absent when the route does not run in that direction.
    pub direction0: Option<PathDirection>,
    pub direction1: Option<PathDirection>,
}

/// A scheduled stop call within a trip.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct BusStopTime {
    #[serde(rename = "StopID")]
    pub stop_id: Option<String>,

    pub stop_name: String,
    pub stop_seq: i32,

    /// Scheduled time, in the API's local datetime format.
    pub time: String,
}

/// One scheduled trip from `jRouteSchedule`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct BusTrip {
    #[serde(rename = "TripID")]
    pub trip_id: String,

    #[serde(rename = "RouteID")]
    pub route_id: String,

    pub trip_direction_text: String,
    pub trip_headsign: String,
    pub start_time: String,
    pub end_time: String,

    pub stop_times: Vec<BusStopTime>,
}

/// Response from `jRouteSchedule`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct BusRouteSchedule {
    pub name: String,

    /// Trips in each direction; absent when the route does not run in
    /// that direction.
    pub direction0: Option<Vec<BusTrip>>,
    pub direction1: Option<Vec<BusTrip>>,
}

/// One scheduled arrival from `jStopSchedule`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct BusArrival {
    pub schedule_time: String,
    pub direction_num: String,
    pub start_time: String,
    pub end_time: String,

    #[serde(rename = "RouteID")]
    pub route_id: String,

    #[serde(rename = "TripID")]
    pub trip_id: String,

    pub trip_direction_text: String,
    pub trip_headsign: String,
}

/// Response from `jStopSchedule`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct BusStopSchedule {
    pub schedule_arrivals: Vec<BusArrival>,
    pub stop: BusStop,
}

/// One predicted arrival from `jPredictions`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct BusPrediction {
    #[serde(rename = "RouteID")]
    pub route_id: String,

    pub direction_text: String,
    pub direction_num: String,

    /// Minutes until arrival.
    pub minutes: i32,

    #[serde(rename = "VehicleID")]
    pub vehicle_id: String,

    #[serde(rename = "TripID")]
    pub trip_id: String,
}

/// Response from `jPredictions`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct BusPredictionsResponse {
    pub predictions: Vec<BusPrediction>,
    pub stop_name: String,
}

/// One incident from `BusIncidents`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct BusIncident {
    #[serde(rename = "IncidentID")]
    pub incident_id: String,

    /// e.g. "Delay" or "Alert".
    pub incident_type: String,

    pub routes_affected: Vec<String>,
    pub description: String,
    pub date_updated: String,
}

/// Response from `BusIncidents`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct BusIncidentsResponse {
    pub bus_incidents: Vec<BusIncident>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_bus_position() {
        let json = r#"{
            "VehicleID": "7205",
            "Lat": 38.894306,
            "Lon": -77.07149,
            "Deviation": 7.0,
            "DateTime": "2024-03-12T10:11:00",
            "TripID": "6794838",
            "RouteID": "38B",
            "DirectionText": "WEST",
            "TripHeadsign": "BALLSTON",
            "TripStartTime": "2024-03-12T09:45:00",
            "TripEndTime": "2024-03-12T10:20:00"
        }"#;

        let position: BusPosition = serde_json::from_str(json).unwrap();
        assert_eq!(position.vehicle_id, "7205");
        assert_eq!(position.route_id, "38B");
        assert_eq!(position.deviation, 7.0);
    }

    #[test]
    fn decode_stop_with_null_id() {
        let json = r#"{
            "StopID": null,
            "Name": "TEMPORARY STOP",
            "Lat": 38.9,
            "Lon": -77.03,
            "Routes": ["52", "54"]
        }"#;

        let stop: BusStop = serde_json::from_str(json).unwrap();
        assert_eq!(stop.stop_id, None);
        assert_eq!(stop.routes.len(), 2);
    }
}
