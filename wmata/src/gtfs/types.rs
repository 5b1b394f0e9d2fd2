//! Rows from the bundled GTFS static dataset.

/// A row from the `stops` table.
#[derive(Debug, Clone, PartialEq)]
pub struct Stop {
    pub stop_id: String,
    pub stop_name: String,
    pub stop_lat: f64,
    pub stop_lon: f64,

    /// GTFS location type: 0 platform, 1 station, 2 entrance/exit,
    /// 3 generic node, 4 boarding area.
    pub location_type: i64,

    /// Enclosing station for platforms, entrances, and nodes.
    pub parent_station: Option<String>,

    /// Level within the enclosing station, if modeled.
    pub level_id: Option<String>,
}

/// A row from the `levels` table.
#[derive(Debug, Clone, PartialEq)]
pub struct Level {
    pub level_id: String,

    /// Relative position: 0 is ground, negative is below ground.
    pub level_index: f64,

    pub level_name: Option<String>,
}

/// A row from the `agency` table.
#[derive(Debug, Clone, PartialEq)]
pub struct Agency {
    pub agency_id: String,
    pub agency_name: String,
    pub agency_url: String,
    pub agency_timezone: String,
}
