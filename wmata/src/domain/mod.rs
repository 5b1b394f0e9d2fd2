//! Domain types for the Metrorail network.
//!
//! The line and station registries are closed enumerations backed by a
//! single static record table; all values are validated at construction
//! time, so code that receives these types can trust their validity. The
//! opening-time calculator derives a timestamp from a station's weekly
//! schedule and a calendar date.

mod hours;
mod line;
mod records;
mod station;

pub use hours::{ClockTime, DayBucket, OpeningHours, ScheduleError};
pub use line::{InvalidLineCode, Line};
pub use station::{InvalidStationCode, Station};
