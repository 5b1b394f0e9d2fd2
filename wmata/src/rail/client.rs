//! Rail API endpoint methods.

use crate::api::{ApiClient, ApiConfig, ApiError, RadiusSearch};
use crate::domain::{Line, Station};

use super::types::{
    ElevatorIncident, ElevatorIncidentsResponse, LineInfo, LinesResponse, PathItem, PathResponse,
    RailIncident, RailIncidentsResponse, RailPrediction, RailPredictionsResponse, StandardRoute,
    StandardRoutesResponse, StationEntrance, StationEntrancesResponse, StationInfo,
    StationParking, StationParkingResponse, StationTime, StationTimesResponse,
    StationToStationInfo, StationToStationResponse, StationsResponse, TrackCircuit,
    TrackCircuitsResponse, TrainPosition, TrainPositionsResponse,
};

/// WMATA Metrorail API client.
///
/// Station and line parameters are typed; validation happens when the
/// caller constructs the [`Station`]/[`Line`] values, never here.
#[derive(Debug, Clone)]
pub struct RailClient {
    api: ApiClient,
}

impl RailClient {
    /// Create a new rail client with the given configuration.
    pub fn new(config: ApiConfig) -> Result<Self, ApiError> {
        Ok(Self {
            api: ApiClient::new(config)?,
        })
    }

    /// Create a rail client sharing an existing transport (e.g. with a
    /// [`BusClient`](crate::bus::BusClient)).
    pub fn with_api(api: ApiClient) -> Self {
        Self { api }
    }

    /// All Metrorail lines.
    pub async fn lines(&self) -> Result<Vec<LineInfo>, ApiError> {
        let response: LinesResponse = self.api.get_json("/Rail.svc/json/jLines", &[]).await?;
        Ok(response.lines)
    }

    /// Station list, optionally restricted to one line.
    pub async fn stations(&self, line: Option<Line>) -> Result<Vec<StationInfo>, ApiError> {
        let mut query = Vec::new();
        if let Some(line) = line {
            query.push(("LineCode", line.code().to_string()));
        }

        let response: StationsResponse = self
            .api
            .get_json("/Rail.svc/json/jStations", &query)
            .await?;
        Ok(response.stations)
    }

    /// Location and address details for one station.
    pub async fn station_info(&self, station: Station) -> Result<StationInfo, ApiError> {
        let query = [("StationCode", station.code().to_string())];
        self.api.get_json("/Rail.svc/json/jStationInfo", &query).await
    }

    /// Station entrances within a search area, or all entrances.
    pub async fn entrances(
        &self,
        area: Option<RadiusSearch>,
    ) -> Result<Vec<StationEntrance>, ApiError> {
        let mut query = Vec::new();
        if let Some(area) = area {
            area.push_query(&mut query);
        }

        let response: StationEntrancesResponse = self
            .api
            .get_json("/Rail.svc/json/jStationEntrances", &query)
            .await?;
        Ok(response.entrances)
    }

    /// Scheduled opening and first/last train times, for one station or
    /// the whole system.
    pub async fn station_times(
        &self,
        station: Option<Station>,
    ) -> Result<Vec<StationTime>, ApiError> {
        let mut query = Vec::new();
        if let Some(station) = station {
            query.push(("StationCode", station.code().to_string()));
        }

        let response: StationTimesResponse = self
            .api
            .get_json("/Rail.svc/json/jStationTimes", &query)
            .await?;
        Ok(response.station_times)
    }

    /// Distance, fare, and travel time between stations. With both ends
    /// `None` the API returns every station pair.
    pub async fn station_to_station(
        &self,
        from: Option<Station>,
        to: Option<Station>,
    ) -> Result<Vec<StationToStationInfo>, ApiError> {
        let mut query = Vec::new();
        if let Some(from) = from {
            query.push(("FromStationCode", from.code().to_string()));
        }
        if let Some(to) = to {
            query.push(("ToStationCode", to.code().to_string()));
        }

        let response: StationToStationResponse = self
            .api
            .get_json("/Rail.svc/json/jSrcStationToDstStationInfo", &query)
            .await?;
        Ok(response.station_to_station_infos)
    }

    /// The ordered stations between two stations on the same line.
    ///
    /// The endpoints must share a line; the API returns an empty path
    /// otherwise.
    pub async fn path(&self, from: Station, to: Station) -> Result<Vec<PathItem>, ApiError> {
        let query = [
            ("FromStationCode", from.code().to_string()),
            ("ToStationCode", to.code().to_string()),
        ];

        let response: PathResponse = self.api.get_json("/Rail.svc/json/jPath", &query).await?;
        Ok(response.path)
    }

    /// Parking information for one station or the whole system. Stations
    /// without parking are omitted.
    pub async fn parking(
        &self,
        station: Option<Station>,
    ) -> Result<Vec<StationParking>, ApiError> {
        let mut query = Vec::new();
        if let Some(station) = station {
            query.push(("StationCode", station.code().to_string()));
        }

        let response: StationParkingResponse = self
            .api
            .get_json("/Rail.svc/json/jStationParking", &query)
            .await?;
        Ok(response.stations_parking)
    }

    /// Next-train arrival predictions for the given stations. An empty
    /// slice requests predictions for every station.
    pub async fn next_trains(
        &self,
        stations: &[Station],
    ) -> Result<Vec<RailPrediction>, ApiError> {
        let codes = if stations.is_empty() {
            "All".to_string()
        } else {
            stations
                .iter()
                .map(|s| s.code())
                .collect::<Vec<_>>()
                .join(",")
        };

        let path = format!("/StationPrediction.svc/json/GetPrediction/{codes}");
        let response: RailPredictionsResponse = self.api.get_json(&path, &[]).await?;
        Ok(response.trains)
    }

    /// Live train positions across the system.
    pub async fn positions(&self) -> Result<Vec<TrainPosition>, ApiError> {
        let query = [("contentType", "json".to_string())];
        let response: TrainPositionsResponse = self
            .api
            .get_json("/TrainPositions/TrainPositions", &query)
            .await?;
        Ok(response.train_positions)
    }

    /// The ordered track circuits of each revenue track.
    pub async fn standard_routes(&self) -> Result<Vec<StandardRoute>, ApiError> {
        let query = [("contentType", "json".to_string())];
        let response: StandardRoutesResponse = self
            .api
            .get_json("/TrainPositions/StandardRoutes", &query)
            .await?;
        Ok(response.standard_routes)
    }

    /// Every track circuit with its neighbor topology.
    pub async fn track_circuits(&self) -> Result<Vec<TrackCircuit>, ApiError> {
        let query = [("contentType", "json".to_string())];
        let response: TrackCircuitsResponse = self
            .api
            .get_json("/TrainPositions/TrackCircuits", &query)
            .await?;
        Ok(response.track_circuits)
    }

    /// Reported rail incidents and delays.
    pub async fn incidents(&self) -> Result<Vec<RailIncident>, ApiError> {
        let response: RailIncidentsResponse = self
            .api
            .get_json("/Incidents.svc/json/Incidents", &[])
            .await?;
        Ok(response.incidents)
    }

    /// Elevator and escalator outages, for one station or system-wide.
    pub async fn elevator_incidents(
        &self,
        station: Option<Station>,
    ) -> Result<Vec<ElevatorIncident>, ApiError> {
        let mut query = Vec::new();
        if let Some(station) = station {
            query.push(("StationCode", station.code().to_string()));
        }

        let response: ElevatorIncidentsResponse = self
            .api
            .get_json("/Incidents.svc/json/ElevatorIncidents", &query)
            .await?;
        Ok(response.elevator_incidents)
    }
}
