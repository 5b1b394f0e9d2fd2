//! Typed client for the WMATA (Washington Metropolitan Area Transit
//! Authority) public API, with an offline model of the Metrorail network.
//!
//! The offline model — line and station registries, station pairing for
//! multi-level complexes, the connection graph between lines, and the
//! scheduled opening-time calculator — is pure data and computation with no
//! network dependency. The [`rail`] and [`bus`] modules provide async HTTP
//! clients for the live API, and [`gtfs`] reads the bundled GTFS static
//! extract.

pub mod api;
pub mod bus;
pub mod domain;
pub mod gtfs;
pub mod interchange;
pub mod rail;
