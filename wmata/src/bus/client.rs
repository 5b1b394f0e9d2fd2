//! Bus API endpoint methods.

use chrono::NaiveDate;

use crate::api::{ApiClient, ApiConfig, ApiError, RadiusSearch};

use super::types::{
    BusIncident, BusIncidentsResponse, BusPathDetails, BusPosition, BusPositionsResponse,
    BusPrediction, BusPredictionsResponse, BusRoute, BusRouteSchedule, BusRoutesResponse,
    BusStop, BusStopSchedule, BusStopsResponse,
};

/// WMATA Metrobus API client.
#[derive(Debug, Clone)]
pub struct BusClient {
    api: ApiClient,
}

impl BusClient {
    /// Create a new bus client with the given configuration.
    pub fn new(config: ApiConfig) -> Result<Self, ApiError> {
        Ok(Self {
            api: ApiClient::new(config)?,
        })
    }

    /// Create a bus client sharing an existing transport (e.g. with a
    /// [`RailClient`](crate::rail::RailClient)).
    pub fn with_api(api: ApiClient) -> Self {
        Self { api }
    }

    /// Live vehicle positions, optionally filtered by route and/or a
    /// search area.
    pub async fn positions(
        &self,
        route: Option<&str>,
        area: Option<RadiusSearch>,
    ) -> Result<Vec<BusPosition>, ApiError> {
        let mut query = Vec::new();
        if let Some(route) = route {
            query.push(("RouteID", route.to_string()));
        }
        if let Some(area) = area {
            area.push_query(&mut query);
        }

        let response: BusPositionsResponse = self
            .api
            .get_json("/Bus.svc/json/jBusPositions", &query)
            .await?;
        Ok(response.bus_positions)
    }

    /// All bus routes and their variants.
    pub async fn routes(&self) -> Result<Vec<BusRoute>, ApiError> {
        let response: BusRoutesResponse = self.api.get_json("/Bus.svc/json/jRoutes", &[]).await?;
        Ok(response.routes)
    }

    /// The shape and stops of a route, for the given service date
    /// (defaults to today on the API side).
    pub async fn path(
        &self,
        route: &str,
        date: Option<NaiveDate>,
    ) -> Result<BusPathDetails, ApiError> {
        let mut query = vec![("RouteID", route.to_string())];
        if let Some(date) = date {
            query.push(("Date", date.format("%Y-%m-%d").to_string()));
        }

        self.api.get_json("/Bus.svc/json/jRouteDetails", &query).await
    }

    /// Scheduled trips on a route for the given service date.
    pub async fn route_schedule(
        &self,
        route: &str,
        date: Option<NaiveDate>,
        including_variations: bool,
    ) -> Result<BusRouteSchedule, ApiError> {
        let mut query = vec![("RouteID", route.to_string())];
        if let Some(date) = date {
            query.push(("Date", date.format("%Y-%m-%d").to_string()));
        }
        if including_variations {
            query.push(("IncludingVariations", "true".to_string()));
        }

        self.api.get_json("/Bus.svc/json/jRouteSchedule", &query).await
    }

    /// Stops within a search area, or all stops.
    pub async fn stops(&self, area: Option<RadiusSearch>) -> Result<Vec<BusStop>, ApiError> {
        let mut query = Vec::new();
        if let Some(area) = area {
            area.push_query(&mut query);
        }

        let response: BusStopsResponse = self.api.get_json("/Bus.svc/json/jStops", &query).await?;
        Ok(response.stops)
    }

    /// Scheduled arrivals at a stop for the given service date.
    pub async fn stop_schedule(
        &self,
        stop_id: &str,
        date: Option<NaiveDate>,
    ) -> Result<BusStopSchedule, ApiError> {
        let mut query = vec![("StopID", stop_id.to_string())];
        if let Some(date) = date {
            query.push(("Date", date.format("%Y-%m-%d").to_string()));
        }

        self.api.get_json("/Bus.svc/json/jStopSchedule", &query).await
    }

    /// Real-time arrival predictions at a stop.
    pub async fn predictions(&self, stop_id: &str) -> Result<Vec<BusPrediction>, ApiError> {
        let query = [("StopID", stop_id.to_string())];

        let response: BusPredictionsResponse = self
            .api
            .get_json("/NextBusService.svc/json/jPredictions", &query)
            .await?;
        Ok(response.predictions)
    }

    /// Reported bus incidents, optionally filtered by route.
    pub async fn incidents(&self, route: Option<&str>) -> Result<Vec<BusIncident>, ApiError> {
        let mut query = Vec::new();
        if let Some(route) = route {
            query.push(("Route", route.to_string()));
        }

        let response: BusIncidentsResponse = self
            .api
            .get_json("/Incidents.svc/json/BusIncidents", &query)
            .await?;
        Ok(response.bus_incidents)
    }
}
