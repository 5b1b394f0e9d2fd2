//! The static per-station record table.
//!
//! One record per station code: display name, served lines, open flag, and
//! the weekly opening-time table. Everything the registry exposes is derived
//! from this table, so adding or amending a station is a single-record
//! change. Table order must match the [`Station`] declaration order; a test
//! below enforces the alignment.
//!
//! The open flag and opening hours are a snapshot as of the bundled
//! dataset's authoring date, not a live status feed. Stations not yet in
//! service carry `open: false` and no hours table.

use std::collections::HashMap;
use std::sync::LazyLock;

use super::hours::{ClockTime, OpeningHours};
use super::line::Line;
use super::station::Station;
use super::station::Station::*;

pub(crate) struct StationRecord {
    pub(crate) station: Station,
    pub(crate) code: &'static str,
    pub(crate) name: &'static str,
    pub(crate) lines: &'static [Line],
    pub(crate) open: bool,
    pub(crate) hours: Option<OpeningHours>,
}

const fn open_station(
    station: Station,
    code: &'static str,
    name: &'static str,
    lines: &'static [Line],
    hours: OpeningHours,
) -> StationRecord {
    StationRecord {
        station,
        code,
        name,
        lines,
        open: true,
        hours: Some(hours),
    }
}

const fn unopened_station(
    station: Station,
    code: &'static str,
    name: &'static str,
    lines: &'static [Line],
) -> StationRecord {
    StationRecord {
        station,
        code,
        name,
        lines,
        open: false,
        hours: None,
    }
}

const fn at(weekday: (u8, u8), saturday: (u8, u8), sunday: (u8, u8)) -> OpeningHours {
    OpeningHours::new(
        ClockTime::new(weekday.0, weekday.1),
        ClockTime::new(saturday.0, saturday.1),
        ClockTime::new(sunday.0, sunday.1),
    )
}

const RD: &[Line] = &[Line::Red];
const OR: &[Line] = &[Line::Orange];
const BL: &[Line] = &[Line::Blue];
const GR: &[Line] = &[Line::Green];
const YL: &[Line] = &[Line::Yellow];
const SV: &[Line] = &[Line::Silver];
const OR_BL_SV: &[Line] = &[Line::Orange, Line::Blue, Line::Silver];
const OR_SV: &[Line] = &[Line::Orange, Line::Silver];
const BL_SV: &[Line] = &[Line::Blue, Line::Silver];
const BL_YL: &[Line] = &[Line::Blue, Line::Yellow];
const GR_YL: &[Line] = &[Line::Green, Line::Yellow];

#[rustfmt::skip]
pub(crate) static TABLE: [StationRecord; 102] = [
    // Red line, A branch (Shady Grove side)
    open_station(MetroCenterUpper, "A01", "Metro Center", RD, at((5, 14), (7, 14), (8, 14))),
    open_station(FarragutNorth, "A02", "Farragut North", RD, at((5, 13), (7, 13), (8, 13))),
    open_station(DupontCircle, "A03", "Dupont Circle", RD, at((5, 12), (7, 12), (8, 12))),
    open_station(WoodleyPark, "A04", "Woodley Park-Zoo/Adams Morgan", RD, at((5, 11), (7, 11), (8, 11))),
    open_station(ClevelandPark, "A05", "Cleveland Park", RD, at((5, 10), (7, 10), (8, 10))),
    open_station(VanNess, "A06", "Van Ness-UDC", RD, at((5, 9), (7, 9), (8, 9))),
    open_station(Tenleytown, "A07", "Tenleytown-AU", RD, at((5, 8), (7, 8), (8, 8))),
    open_station(FriendshipHeights, "A08", "Friendship Heights", RD, at((5, 7), (7, 7), (8, 7))),
    open_station(Bethesda, "A09", "Bethesda", RD, at((5, 6), (7, 6), (8, 6))),
    open_station(MedicalCenter, "A10", "Medical Center", RD, at((5, 5), (7, 5), (8, 5))),
    open_station(GrosvenorStrathmore, "A11", "Grosvenor-Strathmore", RD, at((5, 4), (7, 4), (8, 4))),
    open_station(NorthBethesda, "A12", "North Bethesda", RD, at((5, 3), (7, 3), (8, 3))),
    open_station(Twinbrook, "A13", "Twinbrook", RD, at((5, 2), (7, 2), (8, 2))),
    open_station(Rockville, "A14", "Rockville", RD, at((5, 1), (7, 1), (8, 1))),
    open_station(ShadyGrove, "A15", "Shady Grove", RD, at((5, 0), (7, 0), (8, 0))),
    // Red line, B branch (Glenmont side)
    open_station(GalleryPlaceUpper, "B01", "Gallery Pl-Chinatown", RD, at((5, 11), (7, 11), (8, 11))),
    open_station(JudiciarySquare, "B02", "Judiciary Square", RD, at((5, 10), (7, 10), (8, 10))),
    open_station(UnionStation, "B03", "Union Station", RD, at((5, 9), (7, 9), (8, 9))),
    open_station(RhodeIslandAve, "B04", "Rhode Island Ave-Brentwood", RD, at((5, 7), (7, 7), (8, 7))),
    open_station(Brookland, "B05", "Brookland-CUA", RD, at((5, 6), (7, 6), (8, 6))),
    open_station(FortTottenUpper, "B06", "Fort Totten", RD, at((5, 5), (7, 5), (8, 5))),
    open_station(Takoma, "B07", "Takoma", RD, at((5, 4), (7, 4), (8, 4))),
    open_station(SilverSpring, "B08", "Silver Spring", RD, at((5, 3), (7, 3), (8, 3))),
    open_station(ForestGlen, "B09", "Forest Glen", RD, at((5, 2), (7, 2), (8, 2))),
    open_station(Wheaton, "B10", "Wheaton", RD, at((5, 1), (7, 1), (8, 1))),
    open_station(Glenmont, "B11", "Glenmont", RD, at((5, 0), (7, 0), (8, 0))),
    open_station(NoMaGallaudetU, "B35", "NoMa-Gallaudet U", RD, at((5, 8), (7, 8), (8, 8))),
    // Blue/Orange/Silver core and the Virginia BL/YL corridor (C codes)
    open_station(MetroCenterLower, "C01", "Metro Center", OR_BL_SV, at((5, 14), (7, 14), (8, 14))),
    open_station(McPhersonSquare, "C02", "McPherson Square", OR_BL_SV, at((5, 13), (7, 13), (8, 13))),
    open_station(FarragutWest, "C03", "Farragut West", OR_BL_SV, at((5, 12), (7, 12), (8, 12))),
    open_station(FoggyBottom, "C04", "Foggy Bottom-GWU", OR_BL_SV, at((5, 11), (7, 11), (8, 11))),
    open_station(Rosslyn, "C05", "Rosslyn", OR_BL_SV, at((5, 10), (7, 10), (8, 10))),
    open_station(ArlingtonCemetery, "C06", "Arlington Cemetery", BL, at((5, 9), (7, 9), (8, 9))),
    open_station(Pentagon, "C07", "Pentagon", BL_YL, at((5, 8), (7, 8), (8, 8))),
    open_station(PentagonCity, "C08", "Pentagon City", BL_YL, at((5, 7), (7, 7), (8, 7))),
    open_station(CrystalCity, "C09", "Crystal City", BL_YL, at((5, 6), (7, 6), (8, 6))),
    open_station(NationalAirport, "C10", "Ronald Reagan Washington National Airport", BL_YL, at((5, 5), (7, 5), (8, 5))),
    unopened_station(PotomacYard, "C11", "Potomac Yard", BL_YL),
    open_station(BraddockRoad, "C12", "Braddock Road", BL_YL, at((5, 3), (7, 3), (8, 3))),
    open_station(KingStreet, "C13", "King St-Old Town", BL_YL, at((5, 2), (7, 2), (8, 2))),
    open_station(EisenhowerAvenue, "C14", "Eisenhower Avenue", YL, at((5, 1), (7, 1), (8, 1))),
    open_station(Huntington, "C15", "Huntington", YL, at((5, 0), (7, 0), (8, 0))),
    // Blue/Orange/Silver east of the core (D codes)
    open_station(FederalTriangle, "D01", "Federal Triangle", OR_BL_SV, at((5, 12), (7, 12), (8, 12))),
    open_station(Smithsonian, "D02", "Smithsonian", OR_BL_SV, at((5, 11), (7, 11), (8, 11))),
    open_station(LenfantPlazaLower, "D03", "L'Enfant Plaza", OR_BL_SV, at((5, 10), (7, 10), (8, 10))),
    open_station(FederalCenterSW, "D04", "Federal Center SW", OR_BL_SV, at((5, 9), (7, 9), (8, 9))),
    open_station(CapitolSouth, "D05", "Capitol South", OR_BL_SV, at((5, 8), (7, 8), (8, 8))),
    open_station(EasternMarket, "D06", "Eastern Market", OR_BL_SV, at((5, 7), (7, 7), (8, 7))),
    open_station(PotomacAve, "D07", "Potomac Ave", OR_BL_SV, at((5, 6), (7, 6), (8, 6))),
    open_station(StadiumArmory, "D08", "Stadium-Armory", OR_BL_SV, at((5, 5), (7, 5), (8, 5))),
    open_station(MinnesotaAve, "D09", "Minnesota Ave", OR, at((5, 4), (7, 4), (8, 4))),
    open_station(Deanwood, "D10", "Deanwood", OR, at((5, 3), (7, 3), (8, 3))),
    open_station(Cheverly, "D11", "Cheverly", OR, at((5, 2), (7, 2), (8, 2))),
    open_station(Landover, "D12", "Landover", OR, at((5, 1), (7, 1), (8, 1))),
    open_station(NewCarrollton, "D13", "New Carrollton", OR, at((5, 0), (7, 0), (8, 0))),
    // Green/Yellow north of the core (E codes)
    open_station(MtVernonSq, "E01", "Mt Vernon Sq 7th St-Convention Center", GR_YL, at((5, 9), (7, 9), (8, 9))),
    open_station(ShawHowardU, "E02", "Shaw-Howard U", GR_YL, at((5, 8), (7, 8), (8, 8))),
    open_station(UStreet, "E03", "U Street/African-Amer Civil War Memorial/Cardozo", GR_YL, at((5, 7), (7, 7), (8, 7))),
    open_station(ColumbiaHeights, "E04", "Columbia Heights", GR_YL, at((5, 6), (7, 6), (8, 6))),
    open_station(GeorgiaAvePetworth, "E05", "Georgia Ave-Petworth", GR_YL, at((5, 5), (7, 5), (8, 5))),
    open_station(FortTottenLower, "E06", "Fort Totten", GR_YL, at((5, 4), (7, 4), (8, 4))),
    open_station(WestHyattsville, "E07", "West Hyattsville", GR_YL, at((5, 3), (7, 3), (8, 3))),
    open_station(HyattsvilleCrossing, "E08", "Hyattsville Crossing", GR_YL, at((5, 2), (7, 2), (8, 2))),
    open_station(CollegePark, "E09", "College Park-U of Md", GR_YL, at((5, 1), (7, 1), (8, 1))),
    open_station(Greenbelt, "E10", "Greenbelt", GR_YL, at((5, 0), (7, 0), (8, 0))),
    // Green/Yellow south of the core (F codes)
    open_station(GalleryPlaceLower, "F01", "Gallery Pl-Chinatown", GR_YL, at((5, 10), (7, 10), (8, 10))),
    open_station(Archives, "F02", "Archives-Navy Memorial-Penn Quarter", GR_YL, at((5, 9), (7, 9), (8, 9))),
    open_station(LenfantPlazaUpper, "F03", "L'Enfant Plaza", GR_YL, at((5, 8), (7, 8), (8, 8))),
    open_station(Waterfront, "F04", "Waterfront", GR, at((5, 7), (7, 7), (8, 7))),
    open_station(NavyYard, "F05", "Navy Yard-Ballpark", GR, at((5, 6), (7, 6), (8, 6))),
    open_station(Anacostia, "F06", "Anacostia", GR, at((5, 5), (7, 5), (8, 5))),
    open_station(CongressHeights, "F07", "Congress Heights", GR, at((5, 4), (7, 4), (8, 4))),
    open_station(SouthernAvenue, "F08", "Southern Avenue", GR, at((5, 3), (7, 3), (8, 3))),
    open_station(NaylorRoad, "F09", "Naylor Road", GR, at((5, 2), (7, 2), (8, 2))),
    open_station(Suitland, "F10", "Suitland", GR, at((5, 1), (7, 1), (8, 1))),
    open_station(BranchAve, "F11", "Branch Ave", GR, at((5, 0), (7, 0), (8, 0))),
    // Blue/Silver east of the Anacostia (G codes)
    open_station(BenningRoad, "G01", "Benning Road", BL_SV, at((5, 4), (7, 4), (8, 4))),
    open_station(CapitolHeights, "G02", "Capitol Heights", BL_SV, at((5, 3), (7, 3), (8, 3))),
    open_station(AddisonRoad, "G03", "Addison Road-Seat Pleasant", BL_SV, at((5, 2), (7, 2), (8, 2))),
    open_station(MorganBoulevard, "G04", "Morgan Boulevard", BL_SV, at((5, 1), (7, 1), (8, 1))),
    open_station(DowntownLargo, "G05", "Downtown Largo", BL_SV, at((5, 0), (7, 0), (8, 0))),
    // Blue south of King Street (J codes)
    open_station(VanDornStreet, "J02", "Van Dorn Street", BL, at((5, 1), (7, 1), (8, 1))),
    open_station(FranconiaSpringfield, "J03", "Franconia-Springfield", BL, at((5, 0), (7, 0), (8, 0))),
    // Orange/Silver west of the core (K codes)
    open_station(CourtHouse, "K01", "Court House", OR_SV, at((5, 7), (7, 7), (8, 7))),
    open_station(Clarendon, "K02", "Clarendon", OR_SV, at((5, 6), (7, 6), (8, 6))),
    open_station(VirginiaSquare, "K03", "Virginia Square-GMU", OR_SV, at((5, 5), (7, 5), (8, 5))),
    open_station(Ballston, "K04", "Ballston-MU", OR_SV, at((5, 4), (7, 4), (8, 4))),
    open_station(EastFallsChurch, "K05", "East Falls Church", OR_SV, at((5, 3), (7, 3), (8, 3))),
    open_station(WestFallsChurch, "K06", "West Falls Church", OR, at((5, 2), (7, 2), (8, 2))),
    open_station(DunnLoring, "K07", "Dunn Loring-Merrifield", OR, at((5, 1), (7, 1), (8, 1))),
    open_station(Vienna, "K08", "Vienna/Fairfax-GMU", OR, at((5, 0), (7, 0), (8, 0))),
    // Silver line west of East Falls Church (N codes)
    open_station(McLean, "N01", "McLean", SV, at((5, 5), (7, 5), (8, 5))),
    open_station(Tysons, "N02", "Tysons", SV, at((5, 4), (7, 4), (8, 4))),
    open_station(Greensboro, "N03", "Greensboro", SV, at((5, 3), (7, 3), (8, 3))),
    open_station(SpringHill, "N04", "Spring Hill", SV, at((5, 2), (7, 2), (8, 2))),
    open_station(WiehleRestonEast, "N06", "Wiehle-Reston East", SV, at((5, 0), (7, 0), (8, 0))),
    unopened_station(RestonTownCenter, "N07", "Reston Town Center", SV),
    unopened_station(Herndon, "N08", "Herndon", SV),
    unopened_station(InnovationCenter, "N09", "Innovation Center", SV),
    unopened_station(DullesAirport, "N10", "Washington Dulles International Airport", SV),
    unopened_station(LoudounGateway, "N11", "Loudoun Gateway", SV),
    unopened_station(Ashburn, "N12", "Ashburn", SV),
];

/// Code → station index, built once on first use.
static CODE_INDEX: LazyLock<HashMap<&'static str, Station>> =
    LazyLock::new(|| TABLE.iter().map(|rec| (rec.code, rec.station)).collect());

/// The record for a station. Table order matches declaration order, so the
/// discriminant is the index.
pub(crate) fn record(station: Station) -> &'static StationRecord {
    let rec = &TABLE[station as usize];
    debug_assert_eq!(rec.station, station);
    rec
}

/// Look up a station by its code.
pub(crate) fn by_code(code: &str) -> Option<Station> {
    CODE_INDEX.get(code).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_order_matches_declaration_order() {
        for (index, rec) in TABLE.iter().enumerate() {
            assert_eq!(
                rec.station as usize, index,
                "table entry {} ({}) is out of order",
                index, rec.code
            );
        }
    }

    #[test]
    fn codes_are_unique() {
        assert_eq!(CODE_INDEX.len(), TABLE.len());
    }

    #[test]
    fn open_stations_have_hours_and_lines() {
        for rec in &TABLE {
            if rec.open {
                assert!(rec.hours.is_some(), "{} has no hours", rec.code);
                assert!(!rec.lines.is_empty(), "{} serves no lines", rec.code);
            }
        }
    }

    #[test]
    fn unopened_stations_have_no_hours() {
        for rec in &TABLE {
            if !rec.open {
                assert!(rec.hours.is_none(), "{} is unopened but has hours", rec.code);
            }
        }
    }

    #[test]
    fn line_sets_follow_declaration_order() {
        for rec in &TABLE {
            let positions: Vec<usize> = rec
                .lines
                .iter()
                .map(|line| Line::ALL.iter().position(|l| l == line).unwrap())
                .collect();
            let mut sorted = positions.clone();
            sorted.sort_unstable();
            assert_eq!(positions, sorted, "{} lines out of order", rec.code);
        }
    }
}
