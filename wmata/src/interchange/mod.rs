//! Station pairing and the line connection graph.
//!
//! Four physical stations are split across two codes, one per platform
//! level (Metro Center, Gallery Place, Fort Totten, L'Enfant Plaza). A
//! rider at one level can reach the other level's lines without exiting
//! the fare gates, so those lines are "connections" — distinct from the
//! lines the station already serves directly. No station has more than one
//! pair, so reachability is a fixed-depth computation, not a graph search.

use std::collections::HashMap;
use std::sync::LazyLock;

use crate::domain::{Line, Station};

/// A set of station pairs, each joining the two levels of one physical
/// station.
///
/// Pairs are symmetric: both directions are stored on [`add`](Self::add),
/// so `paired(a) == Some(b)` implies `paired(b) == Some(a)` by
/// construction. A station appears in at most one pair.
#[derive(Debug, Clone, Default)]
pub struct StationPairs {
    pairs: HashMap<Station, Station>,
}

impl StationPairs {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Join two station codes as levels of one physical station.
    ///
    /// The pair is stored symmetrically (both a→b and b→a).
    pub fn add(&mut self, a: Station, b: Station) {
        self.pairs.insert(a, b);
        self.pairs.insert(b, a);
    }

    /// The other level of the station, if it has one.
    pub fn paired(&self, station: Station) -> Option<Station> {
        self.pairs.get(&station).copied()
    }

    /// Returns the number of pairs (counting a→b and b→a as one).
    pub fn len(&self) -> usize {
        self.pairs.len() / 2
    }

    /// Returns true if there are no pairs.
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

/// The Metrorail system's multi-level station pairs.
pub fn system_pairs() -> StationPairs {
    let mut pairs = StationPairs::new();
    pairs.add(Station::MetroCenterUpper, Station::MetroCenterLower);
    pairs.add(Station::GalleryPlaceUpper, Station::GalleryPlaceLower);
    pairs.add(Station::FortTottenUpper, Station::FortTottenLower);
    pairs.add(Station::LenfantPlazaLower, Station::LenfantPlazaUpper);
    pairs
}

/// Built once; the pair table is immutable for the process lifetime.
static SYSTEM: LazyLock<StationPairs> = LazyLock::new(system_pairs);

/// The subset of `lines` present, in [`Line`] declaration order, with
/// `excluding` removed.
fn ordered_lines(lines: &[Line], excluding: Option<Line>) -> Vec<Line> {
    Line::ALL
        .into_iter()
        .filter(|line| lines.contains(line))
        .filter(|line| Some(*line) != excluding)
        .collect()
}

impl Station {
    /// The station code for the other level of this physical station, or
    /// `None` for single-level stations.
    ///
    /// # Examples
    ///
    /// ```
    /// use wmata::domain::Station;
    ///
    /// assert_eq!(
    ///     Station::MetroCenterUpper.paired_with(),
    ///     Some(Station::MetroCenterLower),
    /// );
    /// assert_eq!(Station::DupontCircle.paired_with(), None);
    /// ```
    pub fn paired_with(self) -> Option<Station> {
        SYSTEM.paired(self)
    }

    /// This station followed by its pair, if any. Self is always first;
    /// the order matters for display, not correctness.
    pub fn all_together(self) -> Vec<Station> {
        match self.paired_with() {
            Some(pair) => vec![self, pair],
            None => vec![self],
        }
    }

    /// Lines reachable only via the paired station — the other level's
    /// direct lines, never this station's own.
    ///
    /// Unpaired stations have no connections, whatever `excluding` is.
    /// `excluding` removes that line from the result if present
    /// (typically the line the rider arrived on).
    ///
    /// # Examples
    ///
    /// ```
    /// use wmata::domain::{Line, Station};
    ///
    /// // The Red line level at Metro Center connects to the lower level's
    /// // lines only.
    /// assert_eq!(
    ///     Station::MetroCenterUpper.connections(None),
    ///     vec![Line::Orange, Line::Blue, Line::Silver],
    /// );
    /// assert!(Station::DupontCircle.connections(None).is_empty());
    /// ```
    pub fn connections(self, excluding: Option<Line>) -> Vec<Line> {
        match self.paired_with() {
            Some(pair) => ordered_lines(pair.lines(), excluding),
            None => Vec::new(),
        }
    }

    /// Every line usable at this physical station: connections first, then
    /// the station's own lines, each group in [`Line`] declaration order,
    /// de-duplicated, with `excluding` removed from the final result.
    pub fn all_connections(self, excluding: Option<Line>) -> Vec<Line> {
        let mut result = self.connections(excluding);
        for line in ordered_lines(self.lines(), excluding) {
            if !result.contains(&line) {
                result.push(line);
            }
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_pairs() {
        let pairs = StationPairs::new();
        assert!(pairs.is_empty());
        assert_eq!(pairs.len(), 0);
        assert!(pairs.paired(Station::MetroCenterUpper).is_none());
    }

    #[test]
    fn add_is_symmetric() {
        let mut pairs = StationPairs::new();
        pairs.add(Station::MetroCenterUpper, Station::MetroCenterLower);

        assert_eq!(pairs.len(), 1);
        assert_eq!(
            pairs.paired(Station::MetroCenterUpper),
            Some(Station::MetroCenterLower)
        );
        assert_eq!(
            pairs.paired(Station::MetroCenterLower),
            Some(Station::MetroCenterUpper)
        );
    }

    #[test]
    fn system_has_four_pairs() {
        assert_eq!(system_pairs().len(), 4);
    }

    #[test]
    fn pairing_is_symmetric_and_involutive_for_all_stations() {
        for station in Station::all() {
            if let Some(pair) = station.paired_with() {
                assert_ne!(pair, station);
                assert_eq!(pair.paired_with(), Some(station));
            }
        }
    }

    #[test]
    fn all_together_shape() {
        for station in Station::all() {
            let together = station.all_together();
            assert_eq!(together[0], station, "self must come first");
            match station.paired_with() {
                Some(pair) => assert_eq!(together, vec![station, pair]),
                None => assert_eq!(together, vec![station]),
            }
        }
    }

    #[test]
    fn connections_come_only_from_the_pair() {
        for station in Station::all() {
            let connections = station.connections(None);
            match station.paired_with() {
                Some(pair) => {
                    for line in &connections {
                        assert!(pair.lines().contains(line));
                    }
                    // Paired levels serve disjoint line sets in this
                    // network, so connections never overlap own lines.
                    for line in station.lines() {
                        assert!(!connections.contains(line));
                    }
                }
                None => assert!(connections.is_empty()),
            }
        }
    }

    #[test]
    fn all_connections_is_union_of_connections_and_own_lines() {
        use std::collections::BTreeSet;

        for station in Station::all() {
            let all: BTreeSet<Line> = station.all_connections(None).into_iter().collect();
            let expected: BTreeSet<Line> = station
                .connections(None)
                .into_iter()
                .chain(station.lines().iter().copied())
                .collect();
            assert_eq!(all, expected, "mismatch at {station}");
        }
    }

    #[test]
    fn metro_center_upper_level() {
        let direct = Station::MetroCenterUpper.connections(None);
        assert_eq!(direct, vec![Line::Orange, Line::Blue, Line::Silver]);

        let all = Station::MetroCenterUpper.all_connections(None);
        assert_eq!(
            all,
            vec![Line::Orange, Line::Blue, Line::Silver, Line::Red]
        );
    }

    #[test]
    fn fort_totten_excluding_arrival_line() {
        // Rider arrives at the Red level on Red: the other usable lines.
        let others = Station::FortTottenUpper.all_connections(Some(Line::Red));
        assert_eq!(others, vec![Line::Green, Line::Yellow]);
    }

    #[test]
    fn unpaired_station_has_no_connections() {
        for excluding in [None, Some(Line::Red), Some(Line::Green)] {
            assert!(Station::Wheaton.connections(excluding).is_empty());
        }
        assert_eq!(
            Station::Wheaton.all_connections(None),
            vec![Line::Red]
        );
    }

    #[test]
    fn excluding_removes_from_final_result() {
        // Unpaired station, excluding one of its own lines.
        assert_eq!(
            Station::Rosslyn.all_connections(Some(Line::Blue)),
            vec![Line::Orange, Line::Silver]
        );
        // Excluding a line not present is a no-op.
        assert_eq!(
            Station::Rosslyn.all_connections(Some(Line::Red)),
            vec![Line::Orange, Line::Blue, Line::Silver]
        );
    }

    #[test]
    fn connections_excluding_a_paired_line() {
        let direct = Station::MetroCenterUpper.connections(Some(Line::Blue));
        assert_eq!(direct, vec![Line::Orange, Line::Silver]);
    }

    #[test]
    fn output_order_is_deterministic() {
        // L'Enfant Plaza upper (Green/Yellow) over lower (Orange/Blue/Silver):
        // connection lines first, then own lines, declaration order within
        // each group.
        assert_eq!(
            Station::LenfantPlazaUpper.all_connections(None),
            vec![
                Line::Orange,
                Line::Blue,
                Line::Silver,
                Line::Green,
                Line::Yellow,
            ]
        );
    }
}
