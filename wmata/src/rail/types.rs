//! Rail API response DTOs.
//!
//! These types map directly to the WMATA JSON responses, which use
//! PascalCase field names. Fields are typed as [`Station`]/[`Line`] only
//! where the API guarantees an enumerated code; fields the API leaves
//! empty or fills with sentinel values ("--", "No") stay as strings.

use serde::Deserialize;

use crate::domain::{Line, Station};

/// One line from `jLines`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct LineInfo {
    /// Two-letter line code.
    pub line_code: Line,

    /// Full display name of the line.
    pub display_name: String,

    /// First station on the line.
    pub start_station_code: Station,

    /// Last station on the line.
    pub end_station_code: Station,

    /// Intermediate terminal for short-turn trips, empty if none.
    pub internal_destination1: String,

    /// Second intermediate terminal, empty if none.
    pub internal_destination2: String,
}

/// Response from `jLines`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct LinesResponse {
    pub lines: Vec<LineInfo>,
}

/// Street address of a station.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct StationAddress {
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip: String,
}

/// One station from `jStationInfo` or `jStations`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct StationInfo {
    /// Station code.
    pub code: Station,

    /// Display name.
    pub name: String,

    /// Code of the other level of a multi-level station, empty otherwise.
    pub station_together1: String,

    /// Reserved by the API; always empty today.
    pub station_together2: String,

    /// First line serving this station.
    pub line_code1: Line,

    /// Additional lines, if any.
    pub line_code2: Option<Line>,
    pub line_code3: Option<Line>,
    pub line_code4: Option<Line>,

    pub lat: f64,
    pub lon: f64,

    pub address: StationAddress,
}

/// Response from `jStations`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct StationsResponse {
    pub stations: Vec<StationInfo>,
}

/// One entrance from `jStationEntrances`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct StationEntrance {
    /// Entrance identifier.
    #[serde(rename = "ID")]
    pub id: String,

    /// Entrance name (e.g. "WEST ENTRANCE").
    pub name: String,

    /// Station this entrance serves.
    pub station_code1: Station,

    /// Second station code for multi-level complexes, empty otherwise.
    pub station_code2: String,

    /// Rider-facing description of the entrance location.
    pub description: String,

    pub lat: f64,
    pub lon: f64,
}

/// Response from `jStationEntrances`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct StationEntrancesResponse {
    pub entrances: Vec<StationEntrance>,
}

/// A first/last train entry in a station's daily schedule.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TrainTime {
    /// Time in "HH:mm" (may exceed 24:00 for post-midnight service).
    pub time: String,

    /// Destination station code.
    pub destination_station: String,
}

/// One day's schedule within `jStationTimes`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DailyTimes {
    /// Station opening time in "HH:mm".
    pub opening_time: String,

    pub first_trains: Vec<TrainTime>,
    pub last_trains: Vec<TrainTime>,
}

/// One station's weekly schedule from `jStationTimes`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct StationTime {
    pub code: Station,
    pub station_name: String,
    pub monday: DailyTimes,
    pub tuesday: DailyTimes,
    pub wednesday: DailyTimes,
    pub thursday: DailyTimes,
    pub friday: DailyTimes,
    pub saturday: DailyTimes,
    pub sunday: DailyTimes,
}

/// Response from `jStationTimes`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct StationTimesResponse {
    pub station_times: Vec<StationTime>,
}

/// Fare information between two stations.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RailFare {
    pub off_peak_time: f64,
    pub peak_time: f64,
    pub senior_disabled: f64,
}

/// One entry from `jSrcStationToDstStationInfo`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct StationToStationInfo {
    pub source_station: Station,
    pub destination_station: Station,

    /// Track distance in miles.
    pub composite_miles: f64,

    /// Typical travel time in minutes.
    pub rail_time: i32,

    pub rail_fare: RailFare,
}

/// Response from `jSrcStationToDstStationInfo`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct StationToStationResponse {
    pub station_to_station_infos: Vec<StationToStationInfo>,
}

/// One stop along the path between two stations, from `jPath`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PathItem {
    /// Line this path segment runs on.
    pub line_code: Line,

    pub station_code: Station,
    pub station_name: String,

    /// Position along the path, starting at 1.
    pub seq_num: i32,

    /// Track distance to the previous station in feet.
    pub distance_to_prev: i32,
}

/// Response from `jPath`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PathResponse {
    pub path: Vec<PathItem>,
}

/// All-day parking availability at a station.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AllDayParking {
    pub total_count: i32,
    pub rider_cost: Option<f64>,
    pub non_rider_cost: Option<f64>,
    pub saturday_rider_cost: Option<f64>,
    pub saturday_non_rider_cost: Option<f64>,
}

/// Short-term (metered) parking availability at a station.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ShortTermParking {
    pub total_count: i32,
    pub notes: Option<String>,
}

/// One station's parking information from `jStationParking`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct StationParking {
    pub code: Station,
    pub notes: Option<String>,
    pub all_day_parking: AllDayParking,
    pub short_term_parking: ShortTermParking,
}

/// Response from `jStationParking`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct StationParkingResponse {
    pub stations_parking: Vec<StationParking>,
}

/// One arriving train from `GetPrediction`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RailPrediction {
    /// Number of cars, or None when unknown.
    pub car: Option<String>,

    /// Abbreviated destination name shown on signs.
    pub destination: String,

    /// Destination station code; empty or absent for non-revenue trains.
    pub destination_code: Option<String>,

    /// Full destination name.
    pub destination_name: Option<String>,

    /// Track group ("1" or "2").
    pub group: String,

    /// Line code, or "--"/"No" for non-revenue trains.
    pub line: String,

    /// Station the prediction is for.
    pub location_code: Station,
    pub location_name: String,

    /// Minutes until arrival, or "ARR"/"BRD"/"---".
    pub min: String,
}

/// Response from `GetPrediction`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RailPredictionsResponse {
    pub trains: Vec<RailPrediction>,
}

/// One live train from `TrainPositions`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TrainPosition {
    pub train_id: String,
    pub train_number: String,
    pub car_count: i32,
    pub direction_num: i32,
    pub circuit_id: i32,

    /// Destination station, absent for non-revenue movements.
    pub destination_station_code: Option<String>,

    /// Line code, absent for non-revenue movements.
    pub line_code: Option<String>,

    pub seconds_at_location: i32,
    pub service_type: String,
}

/// Response from `TrainPositions`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TrainPositionsResponse {
    pub train_positions: Vec<TrainPosition>,
}

/// A track circuit along a standard route.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RouteCircuit {
    pub seq_num: i32,
    pub circuit_id: i32,

    /// Station at this circuit, if any.
    pub station_code: Option<String>,
}

/// One revenue track from `StandardRoutes`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct StandardRoute {
    pub line_code: Line,
    pub track_num: i32,
    pub track_circuits: Vec<RouteCircuit>,
}

/// Response from `StandardRoutes`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct StandardRoutesResponse {
    pub standard_routes: Vec<StandardRoute>,
}

/// A neighbor reference between track circuits.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CircuitNeighbor {
    pub neighbor_type: String,
    pub circuit_ids: Vec<i32>,
}

/// One circuit from `TrackCircuits`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TrackCircuit {
    pub track: i32,
    pub circuit_id: i32,
    pub neighbors: Vec<CircuitNeighbor>,
}

/// Response from `TrackCircuits`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TrackCircuitsResponse {
    pub track_circuits: Vec<TrackCircuit>,
}

/// One incident from `Incidents`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RailIncident {
    #[serde(rename = "IncidentID")]
    pub incident_id: String,

    pub description: String,

    /// e.g. "Delay" or "Alert".
    pub incident_type: String,

    /// Semicolon-separated line codes, e.g. "RD;".
    pub lines_affected: String,

    /// Last update, in the API's local datetime format.
    pub date_updated: String,
}

/// Response from `Incidents`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RailIncidentsResponse {
    pub incidents: Vec<RailIncident>,
}

/// One outage from `ElevatorIncidents`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ElevatorIncident {
    /// Unit identifier within the station.
    pub unit_name: String,

    /// "ELEVATOR" or "ESCALATOR".
    pub unit_type: String,

    pub station_code: Station,
    pub station_name: String,

    pub location_description: String,
    pub symptom_description: String,

    pub date_out_of_serv: String,
    pub date_updated: String,
    pub estimated_return_to_service: Option<String>,
}

/// Response from `ElevatorIncidents`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ElevatorIncidentsResponse {
    pub elevator_incidents: Vec<ElevatorIncident>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_line_info() {
        let json = r#"{
            "LineCode": "RD",
            "DisplayName": "Red",
            "StartStationCode": "A15",
            "EndStationCode": "B11",
            "InternalDestination1": "A11",
            "InternalDestination2": ""
        }"#;

        let line: LineInfo = serde_json::from_str(json).unwrap();
        assert_eq!(line.line_code, Line::Red);
        assert_eq!(line.start_station_code, Station::ShadyGrove);
        assert_eq!(line.end_station_code, Station::Glenmont);
        assert_eq!(line.internal_destination2, "");
    }

    #[test]
    fn decode_station_info() {
        let json = r#"{
            "Code": "A01",
            "Name": "Metro Center",
            "StationTogether1": "C01",
            "StationTogether2": "",
            "LineCode1": "RD",
            "LineCode2": null,
            "LineCode3": null,
            "LineCode4": null,
            "Lat": 38.898303,
            "Lon": -77.028099,
            "Address": {
                "Street": "607 13th St. NW",
                "City": "Washington",
                "State": "DC",
                "Zip": "20005"
            }
        }"#;

        let info: StationInfo = serde_json::from_str(json).unwrap();
        assert_eq!(info.code, Station::MetroCenterUpper);
        assert_eq!(info.station_together1, "C01");
        assert_eq!(info.line_code1, Line::Red);
        assert_eq!(info.line_code2, None);
        assert_eq!(info.address.state, "DC");
    }

    #[test]
    fn decode_prediction_with_sentinel_values() {
        let json = r#"{
            "Car": "8",
            "Destination": "NoPssngr",
            "DestinationCode": null,
            "DestinationName": null,
            "Group": "1",
            "Line": "No",
            "LocationCode": "C07",
            "LocationName": "Pentagon",
            "Min": "ARR"
        }"#;

        let prediction: RailPrediction = serde_json::from_str(json).unwrap();
        assert_eq!(prediction.location_code, Station::Pentagon);
        assert_eq!(prediction.line, "No");
        assert_eq!(prediction.destination_code, None);
        assert_eq!(prediction.min, "ARR");
    }

    #[test]
    fn reject_unknown_station_code_in_dto() {
        let json = r#"{
            "LineCode": "RD",
            "DisplayName": "Red",
            "StartStationCode": "Z99",
            "EndStationCode": "B11",
            "InternalDestination1": "",
            "InternalDestination2": ""
        }"#;

        assert!(serde_json::from_str::<LineInfo>(json).is_err());
    }
}
