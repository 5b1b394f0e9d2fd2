//! Read-only lookups over the bundled GTFS sqlite extract.

use std::path::Path;

use rusqlite::{Connection, OpenFlags, OptionalExtension};

use crate::domain::Station;

use super::error::GtfsError;
use super::types::{Agency, Level, Stop};

/// The bundled GTFS static dataset.
///
/// A pre-built sqlite file containing the agency's published static feed.
/// Lookups are simple primary-key reads; there is no write path. The
/// connection is opened read-only, so a corrupt or missing file surfaces
/// at [`open`](Self::open) rather than on first query.
pub struct StaticDataset {
    conn: Connection,
}

impl StaticDataset {
    /// Open a dataset file read-only.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, GtfsError> {
        let conn = Connection::open_with_flags(path, OpenFlags::SQLITE_OPEN_READ_ONLY)?;
        Ok(Self { conn })
    }

    /// Look up a stop by its GTFS stop ID.
    pub fn stop(&self, stop_id: &str) -> Result<Option<Stop>, GtfsError> {
        let mut stmt = self.conn.prepare(
            "SELECT stop_id, stop_name, stop_lat, stop_lon, location_type, \
                    parent_station, level_id \
             FROM stops WHERE stop_id = ?1",
        )?;

        let row = stmt
            .query_row([stop_id], |row| {
                Ok(Stop {
                    stop_id: row.get(0)?,
                    stop_name: row.get(1)?,
                    stop_lat: row.get(2)?,
                    stop_lon: row.get(3)?,
                    location_type: row.get(4)?,
                    parent_station: row.get(5)?,
                    level_id: row.get(6)?,
                })
            })
            .optional()?;

        Ok(row)
    }

    /// The station-level stop record for a rail station, cross-referenced
    /// via [`Station::gtfs_stop_id`].
    pub fn stop_for_station(&self, station: Station) -> Result<Option<Stop>, GtfsError> {
        self.stop(&station.gtfs_stop_id())
    }

    /// Look up a level by its GTFS level ID.
    pub fn level(&self, level_id: &str) -> Result<Option<Level>, GtfsError> {
        let mut stmt = self.conn.prepare(
            "SELECT level_id, level_index, level_name FROM levels WHERE level_id = ?1",
        )?;

        let row = stmt
            .query_row([level_id], |row| {
                Ok(Level {
                    level_id: row.get(0)?,
                    level_index: row.get(1)?,
                    level_name: row.get(2)?,
                })
            })
            .optional()?;

        Ok(row)
    }

    /// Look up an agency by its GTFS agency ID.
    pub fn agency(&self, agency_id: &str) -> Result<Option<Agency>, GtfsError> {
        let mut stmt = self.conn.prepare(
            "SELECT agency_id, agency_name, agency_url, agency_timezone \
             FROM agency WHERE agency_id = ?1",
        )?;

        let row = stmt
            .query_row([agency_id], |row| {
                Ok(Agency {
                    agency_id: row.get(0)?,
                    agency_name: row.get(1)?,
                    agency_url: row.get(2)?,
                    agency_timezone: row.get(3)?,
                })
            })
            .optional()?;

        Ok(row)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Build a small dataset file in a temp directory and open it
    /// read-only, the way the bundled file is consumed.
    fn sample_dataset() -> (tempfile::TempDir, StaticDataset) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("metro.sqlite3");

        let conn = Connection::open(&path).unwrap();
        conn.execute_batch(
            r#"
            CREATE TABLE stops (
                stop_id TEXT PRIMARY KEY,
                stop_name TEXT NOT NULL,
                stop_lat REAL NOT NULL,
                stop_lon REAL NOT NULL,
                location_type INTEGER NOT NULL,
                parent_station TEXT,
                level_id TEXT
            );
            CREATE TABLE levels (
                level_id TEXT PRIMARY KEY,
                level_index REAL NOT NULL,
                level_name TEXT
            );
            CREATE TABLE agency (
                agency_id TEXT PRIMARY KEY,
                agency_name TEXT NOT NULL,
                agency_url TEXT NOT NULL,
                agency_timezone TEXT NOT NULL
            );

            INSERT INTO stops VALUES
                ('STN_A01_C01', 'METRO CENTER', 38.898303, -77.028099, 1, NULL, NULL),
                ('STN_B07', 'TAKOMA', 38.975532, -77.017834, 1, NULL, NULL),
                ('PF_A01_RD', 'METRO CENTER RED PLATFORM', 38.898303, -77.028099,
                 0, 'STN_A01_C01', 'A01_L1');
            INSERT INTO levels VALUES
                ('A01_L1', -1.0, 'Red line platform level');
            INSERT INTO agency VALUES
                ('MET', 'WMATA', 'http://www.wmata.com', 'America/New_York');
            "#,
        )
        .unwrap();
        drop(conn);

        let dataset = StaticDataset::open(&path).unwrap();
        (dir, dataset)
    }

    #[test]
    fn stop_lookup() {
        let (_dir, dataset) = sample_dataset();

        let stop = dataset.stop("STN_B07").unwrap().unwrap();
        assert_eq!(stop.stop_name, "TAKOMA");
        assert_eq!(stop.location_type, 1);
        assert_eq!(stop.parent_station, None);
    }

    #[test]
    fn missing_stop_is_none() {
        let (_dir, dataset) = sample_dataset();
        assert!(dataset.stop("STN_Z99").unwrap().is_none());
    }

    #[test]
    fn platform_references_parent_and_level() {
        let (_dir, dataset) = sample_dataset();

        let platform = dataset.stop("PF_A01_RD").unwrap().unwrap();
        assert_eq!(platform.location_type, 0);
        assert_eq!(platform.parent_station.as_deref(), Some("STN_A01_C01"));

        let level = dataset
            .level(platform.level_id.as_deref().unwrap())
            .unwrap()
            .unwrap();
        assert_eq!(level.level_index, -1.0);
    }

    #[test]
    fn station_cross_reference_uses_paired_id() {
        let (_dir, dataset) = sample_dataset();

        // Both levels of Metro Center resolve to the same stop record.
        let upper = dataset
            .stop_for_station(Station::MetroCenterUpper)
            .unwrap()
            .unwrap();
        let lower = dataset
            .stop_for_station(Station::MetroCenterLower)
            .unwrap()
            .unwrap();
        assert_eq!(upper, lower);
        assert_eq!(upper.stop_id, "STN_A01_C01");

        // Single-level stations use their own code.
        let takoma = dataset
            .stop_for_station(Station::Takoma)
            .unwrap()
            .unwrap();
        assert_eq!(takoma.stop_id, "STN_B07");
    }

    #[test]
    fn agency_lookup() {
        let (_dir, dataset) = sample_dataset();

        let agency = dataset.agency("MET").unwrap().unwrap();
        assert_eq!(agency.agency_name, "WMATA");
        assert_eq!(agency.agency_timezone, "America/New_York");
        assert!(dataset.agency("XXX").unwrap().is_none());
    }
}
