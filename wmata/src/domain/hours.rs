//! Scheduled station opening times.
//!
//! Each open station carries a weekly opening-time table with one entry per
//! day bucket (weekday, Saturday, Sunday). The calculator combines a table
//! entry with a calendar date to produce the opening timestamp on that date.
//! No holiday calendar is consulted: the bucket is a pure function of the
//! date's day of week.

use chrono::{DateTime, Datelike, Local, NaiveDate, NaiveDateTime, NaiveTime, Weekday};

use super::station::Station;

/// Error from the opening-time calculator.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScheduleError {
    /// The station has no opening-hours table (not yet in service).
    #[error("no opening hours recorded for station {0}")]
    HoursUnavailable(Station),

    /// The computed wall-clock time does not exist in the local timezone
    /// (skipped by a clock change).
    #[error("local time {0} does not exist (clock change)")]
    NonexistentLocalTime(NaiveDateTime),
}

/// A wall-clock time of day with minute precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ClockTime {
    hour: u8,
    minute: u8,
}

impl ClockTime {
    /// Create a clock time. Range-checked at compile time when used in a
    /// const context, so an out-of-range table literal fails the build.
    pub const fn new(hour: u8, minute: u8) -> Self {
        assert!(hour < 24, "hour out of range");
        assert!(minute < 60, "minute out of range");
        Self { hour, minute }
    }

    /// Hour of day (0-23).
    pub const fn hour(self) -> u8 {
        self.hour
    }

    /// Minute of hour (0-59).
    pub const fn minute(self) -> u8 {
        self.minute
    }
}

/// A station's weekly opening-time table.
///
/// All three day buckets are always present; a partial table is not
/// representable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpeningHours {
    weekday: ClockTime,
    saturday: ClockTime,
    sunday: ClockTime,
}

impl OpeningHours {
    /// Create a table from its three bucket entries.
    pub const fn new(weekday: ClockTime, saturday: ClockTime, sunday: ClockTime) -> Self {
        Self {
            weekday,
            saturday,
            sunday,
        }
    }

    /// The opening time for a day bucket.
    pub const fn for_bucket(&self, bucket: DayBucket) -> ClockTime {
        match bucket {
            DayBucket::Weekday => self.weekday,
            DayBucket::Saturday => self.saturday,
            DayBucket::Sunday => self.sunday,
        }
    }
}

/// The schedule bucket a calendar date falls into.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use wmata::domain::DayBucket;
///
/// // 2024-03-15 is a Friday
/// let date = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
/// assert_eq!(DayBucket::for_date(date), DayBucket::Weekday);
///
/// // 2024-03-17 is a Sunday
/// let date = NaiveDate::from_ymd_opt(2024, 3, 17).unwrap();
/// assert_eq!(DayBucket::for_date(date), DayBucket::Sunday);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DayBucket {
    /// Monday through Friday.
    Weekday,
    Saturday,
    Sunday,
}

impl DayBucket {
    /// Classify a date by its day of week.
    pub fn for_date(date: NaiveDate) -> Self {
        match date.weekday() {
            Weekday::Sat => DayBucket::Saturday,
            Weekday::Sun => DayBucket::Sunday,
            _ => DayBucket::Weekday,
        }
    }
}

impl Station {
    /// The opening timestamp of this station on the given calendar date.
    ///
    /// Selects the weekday/Saturday/Sunday bucket for the date and places
    /// that bucket's opening time on the same calendar day. Pure function
    /// of the inputs; fails for stations with no opening-hours table
    /// rather than substituting a default.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use wmata::domain::Station;
    ///
    /// // 2024-03-12 is a Tuesday
    /// let date = NaiveDate::from_ymd_opt(2024, 3, 12).unwrap();
    /// let opens = Station::MetroCenterUpper.opening_time_on(date).unwrap();
    /// assert_eq!(opens.to_string(), "2024-03-12 05:14:00");
    /// ```
    pub fn opening_time_on(self, date: NaiveDate) -> Result<NaiveDateTime, ScheduleError> {
        let hours = self
            .opening_hours()
            .ok_or(ScheduleError::HoursUnavailable(self))?;
        let at = hours.for_bucket(DayBucket::for_date(date));

        // ClockTime construction is range-checked, so this cannot fail.
        let time = NaiveTime::from_hms_opt(at.hour() as u32, at.minute() as u32, 0)
            .expect("range-checked clock time");

        Ok(date.and_time(time))
    }

    /// The opening timestamp of this station today, in the local timezone.
    ///
    /// Samples the local clock once to obtain today's date, then delegates
    /// to [`Station::opening_time_on`].
    pub fn opening_time_today(self) -> Result<DateTime<Local>, ScheduleError> {
        let today = Local::now().date_naive();
        let naive = self.opening_time_on(today)?;

        naive
            .and_local_timezone(Local)
            .earliest()
            .ok_or(ScheduleError::NonexistentLocalTime(naive))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bucket_covers_whole_week() {
        // 2024-03-11 is a Monday
        let monday = NaiveDate::from_ymd_opt(2024, 3, 11).unwrap();
        for offset in 0..5 {
            let date = monday + chrono::Duration::days(offset);
            assert_eq!(DayBucket::for_date(date), DayBucket::Weekday);
        }
        let saturday = monday + chrono::Duration::days(5);
        assert_eq!(DayBucket::for_date(saturday), DayBucket::Saturday);
        let sunday = monday + chrono::Duration::days(6);
        assert_eq!(DayBucket::for_date(sunday), DayBucket::Sunday);
    }

    #[test]
    fn for_bucket_selects_entry() {
        let hours = OpeningHours::new(
            ClockTime::new(5, 14),
            ClockTime::new(7, 14),
            ClockTime::new(8, 14),
        );
        assert_eq!(hours.for_bucket(DayBucket::Weekday), ClockTime::new(5, 14));
        assert_eq!(hours.for_bucket(DayBucket::Saturday), ClockTime::new(7, 14));
        assert_eq!(hours.for_bucket(DayBucket::Sunday), ClockTime::new(8, 14));
    }

    #[test]
    fn weekday_opening() {
        // 2024-03-12 is a Tuesday; Metro Center opens 05:14 on weekdays
        let date = NaiveDate::from_ymd_opt(2024, 3, 12).unwrap();
        let opens = Station::MetroCenterUpper.opening_time_on(date).unwrap();

        assert_eq!(opens.date(), date);
        assert_eq!(
            opens.time(),
            NaiveTime::from_hms_opt(5, 14, 0).unwrap()
        );
    }

    #[test]
    fn sunday_opening() {
        // 2024-03-17 is a Sunday; Metro Center opens 08:14 on Sundays
        let date = NaiveDate::from_ymd_opt(2024, 3, 17).unwrap();
        let opens = Station::MetroCenterUpper.opening_time_on(date).unwrap();

        assert_eq!(opens.date(), date);
        assert_eq!(
            opens.time(),
            NaiveTime::from_hms_opt(8, 14, 0).unwrap()
        );
    }

    #[test]
    fn repeated_calls_are_identical() {
        // 2024-03-16 is a Saturday
        let date = NaiveDate::from_ymd_opt(2024, 3, 16).unwrap();
        let first = Station::Glenmont.opening_time_on(date).unwrap();
        let second = Station::Glenmont.opening_time_on(date).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn unopened_station_fails_loudly() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 12).unwrap();
        let err = Station::PotomacYard.opening_time_on(date).unwrap_err();
        assert_eq!(err, ScheduleError::HoursUnavailable(Station::PotomacYard));
    }

    #[test]
    fn every_open_station_has_an_opening_time() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 12).unwrap();
        for station in Station::all_open() {
            assert!(
                station.opening_time_on(date).is_ok(),
                "open station {station} has no opening time"
            );
        }
    }
}
