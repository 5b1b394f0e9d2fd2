//! Metrorail station codes.

use std::fmt;

use serde::de::{self, Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};

use super::hours::OpeningHours;
use super::line::Line;
use super::records;

/// Error returned when parsing an invalid station code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid station code: {code}")]
pub struct InvalidStationCode {
    code: String,
}

/// A Metrorail station code.
///
/// Station codes identify one platform level within a physical station:
/// multi-level complexes such as Metro Center are split across two codes
/// (`A01` for the Red line level, `C01` for the Orange/Blue/Silver level).
/// The enumeration is closed; any string outside it is rejected at
/// construction.
///
/// Everything a station reports — display name, served lines, open flag,
/// opening hours — comes from a single static record table, so the
/// accessors here are total and never allocate.
///
/// # Examples
///
/// ```
/// use wmata::domain::{Line, Station};
///
/// let station = Station::parse("A01").unwrap();
/// assert_eq!(station, Station::MetroCenterUpper);
/// assert_eq!(station.name(), "Metro Center");
/// assert_eq!(station.lines(), &[Line::Red]);
///
/// assert!(Station::parse("Z99").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Station {
    MetroCenterUpper,
    FarragutNorth,
    DupontCircle,
    WoodleyPark,
    ClevelandPark,
    VanNess,
    Tenleytown,
    FriendshipHeights,
    Bethesda,
    MedicalCenter,
    GrosvenorStrathmore,
    NorthBethesda,
    Twinbrook,
    Rockville,
    ShadyGrove,
    GalleryPlaceUpper,
    JudiciarySquare,
    UnionStation,
    RhodeIslandAve,
    Brookland,
    FortTottenUpper,
    Takoma,
    SilverSpring,
    ForestGlen,
    Wheaton,
    Glenmont,
    NoMaGallaudetU,
    MetroCenterLower,
    McPhersonSquare,
    FarragutWest,
    FoggyBottom,
    Rosslyn,
    ArlingtonCemetery,
    Pentagon,
    PentagonCity,
    CrystalCity,
    NationalAirport,
    PotomacYard,
    BraddockRoad,
    KingStreet,
    EisenhowerAvenue,
    Huntington,
    FederalTriangle,
    Smithsonian,
    LenfantPlazaLower,
    FederalCenterSW,
    CapitolSouth,
    EasternMarket,
    PotomacAve,
    StadiumArmory,
    MinnesotaAve,
    Deanwood,
    Cheverly,
    Landover,
    NewCarrollton,
    MtVernonSq,
    ShawHowardU,
    UStreet,
    ColumbiaHeights,
    GeorgiaAvePetworth,
    FortTottenLower,
    WestHyattsville,
    HyattsvilleCrossing,
    CollegePark,
    Greenbelt,
    GalleryPlaceLower,
    Archives,
    LenfantPlazaUpper,
    Waterfront,
    NavyYard,
    Anacostia,
    CongressHeights,
    SouthernAvenue,
    NaylorRoad,
    Suitland,
    BranchAve,
    BenningRoad,
    CapitolHeights,
    AddisonRoad,
    MorganBoulevard,
    DowntownLargo,
    VanDornStreet,
    FranconiaSpringfield,
    CourtHouse,
    Clarendon,
    VirginiaSquare,
    Ballston,
    EastFallsChurch,
    WestFallsChurch,
    DunnLoring,
    Vienna,
    McLean,
    Tysons,
    Greensboro,
    SpringHill,
    WiehleRestonEast,
    RestonTownCenter,
    Herndon,
    InnovationCenter,
    DullesAirport,
    LoudounGateway,
    Ashburn,
}

impl Station {
    /// Parse a station from its API code (e.g. `"A01"`).
    pub fn parse(s: &str) -> Result<Self, InvalidStationCode> {
        records::by_code(s).ok_or_else(|| InvalidStationCode {
            code: s.to_string(),
        })
    }

    /// Every station code, in declaration order.
    pub fn all() -> impl Iterator<Item = Station> {
        records::TABLE.iter().map(|rec| rec.station)
    }

    /// Every station currently in service, in declaration order.
    pub fn all_open() -> impl Iterator<Item = Station> {
        records::TABLE
            .iter()
            .filter(|rec| rec.open)
            .map(|rec| rec.station)
    }

    /// The station code used by the API.
    pub fn code(self) -> &'static str {
        records::record(self).code
    }

    /// Rider-facing display name. Both levels of a paired complex share
    /// one name.
    pub fn name(self) -> &'static str {
        records::record(self).name
    }

    /// The lines serving this station directly (this level only, no
    /// interchange traversal), in [`Line`] declaration order.
    pub fn lines(self) -> &'static [Line] {
        records::record(self).lines
    }

    /// Whether the station was in service as of the bundled dataset's
    /// authoring date. A static snapshot, not a live status.
    pub fn is_open(self) -> bool {
        records::record(self).open
    }

    /// The weekly opening-time table, absent for stations not yet in
    /// service.
    pub fn opening_hours(self) -> Option<&'static OpeningHours> {
        records::record(self).hours.as_ref()
    }
}

impl fmt::Display for Station {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl Serialize for Station {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.code())
    }
}

impl<'de> Deserialize<'de> for Station {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let code = String::deserialize(deserializer)?;
        Station::parse(&code).map_err(de::Error::custom)
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Anything outside the enumerated code set is rejected
        #[test]
        fn unknown_strings_rejected(s in "[A-Za-z0-9]{0,4}".prop_filter(
            "not a valid code",
            |s| Station::all().all(|station| station.code() != s.as_str()),
        )) {
            prop_assert!(Station::parse(&s).is_err());
        }

        /// Parsing a valid code then reading it back is the identity
        #[test]
        fn roundtrip(idx in 0usize..102) {
            let station = Station::all().nth(idx).unwrap();
            prop_assert_eq!(Station::parse(station.code()).unwrap(), station);
        }
    }
}
