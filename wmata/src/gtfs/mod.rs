//! Bundled GTFS static dataset reader.
//!
//! The agency publishes its static feed (stops, levels, agencies) as a
//! pre-built sqlite file that ships with the library's consumers. This
//! module is a read-only key-column lookup over that file — no query
//! planning, no write path. Rail stations cross-reference into the feed
//! via [`Station::gtfs_stop_id`]: the feed models a multi-level complex
//! as one station record carrying both platform codes.

mod dataset;
mod error;
mod types;

pub use dataset::StaticDataset;
pub use error::GtfsError;
pub use types::{Agency, Level, Stop};

use crate::domain::Station;

impl Station {
    /// The GTFS stop ID of this station's record in the static feed.
    ///
    /// Multi-level complexes have one record named after both codes, in
    /// lexicographic order.
    ///
    /// # Examples
    ///
    /// ```
    /// use wmata::domain::Station;
    ///
    /// assert_eq!(Station::Takoma.gtfs_stop_id(), "STN_B07");
    /// assert_eq!(Station::MetroCenterUpper.gtfs_stop_id(), "STN_A01_C01");
    /// assert_eq!(Station::MetroCenterLower.gtfs_stop_id(), "STN_A01_C01");
    /// ```
    pub fn gtfs_stop_id(self) -> String {
        match self.paired_with() {
            Some(pair) => {
                let (first, second) = if self.code() <= pair.code() {
                    (self.code(), pair.code())
                } else {
                    (pair.code(), self.code())
                };
                format!("STN_{first}_{second}")
            }
            None => format!("STN_{}", self.code()),
        }
    }
}
