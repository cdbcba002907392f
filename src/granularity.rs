//! Calendar bucket alignment rules
//!
//! A bucket is a calendar-aligned time interval (day, week, month or year)
//! used as the aggregation unit of the capacity chart. Buckets are half-open:
//! a bucket covers `[bucket_start, advance(bucket_start))`, so adjacent
//! buckets tile the timeline with no gap and no shared instant. All
//! operations return new values; nothing mutates its argument.

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime};
use std::fmt;
use std::str::FromStr;

/// Bucket size selector for the capacity chart
///
/// A closed set: every alignment rule matches exhaustively on it, so adding
/// a granularity is a compile-time checklist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Granularity {
    Day,
    Week,
    Month,
    Year,
}

impl FromStr for Granularity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "day" => Ok(Granularity::Day),
            "week" => Ok(Granularity::Week),
            "month" => Ok(Granularity::Month),
            "year" => Ok(Granularity::Year),
            _ => Err(format!(
                "Invalid granularity '{}'. Valid options are: day, week, month, year",
                s
            )),
        }
    }
}

impl fmt::Display for Granularity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Granularity::Day => "day",
            Granularity::Week => "week",
            Granularity::Month => "month",
            Granularity::Year => "year",
        };
        write!(f, "{}", name)
    }
}

/// First day of the given month at midnight
fn first_of_month(year: i32, month: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, 1)
        .expect("first of month is a valid calendar date")
        .and_time(NaiveTime::MIN)
}

impl Granularity {
    /// Canonical start of the bucket containing `instant`
    ///
    /// Day: midnight of that calendar day. Week: midnight of the Monday of
    /// that week (a Sunday normalizes to the previous Monday). Month: first
    /// of the month. Year: January 1st.
    pub fn bucket_start(&self, instant: NaiveDateTime) -> NaiveDateTime {
        let date = instant.date();
        match self {
            Granularity::Day => date.and_time(NaiveTime::MIN),
            Granularity::Week => {
                let back = date.weekday().num_days_from_monday() as i64;
                (date - Duration::days(back)).and_time(NaiveTime::MIN)
            }
            Granularity::Month => first_of_month(date.year(), date.month()),
            Granularity::Year => first_of_month(date.year(), 1),
        }
    }

    /// Start of the bucket following the one starting at `bucket_start`
    pub fn advance(&self, bucket_start: NaiveDateTime) -> NaiveDateTime {
        match self {
            Granularity::Day => bucket_start + Duration::days(1),
            Granularity::Week => bucket_start + Duration::days(7),
            Granularity::Month => {
                let (year, month) = (bucket_start.year(), bucket_start.month());
                if month == 12 {
                    first_of_month(year + 1, 1)
                } else {
                    first_of_month(year, month + 1)
                }
            }
            Granularity::Year => first_of_month(bucket_start.year() + 1, 1),
        }
    }

    /// Exclusive end of the bucket starting at `bucket_start`
    ///
    /// Equal to the next bucket's start: the bucket interval is
    /// `[bucket_start, bucket_end)`. Computing overlap against the
    /// half-open interval keeps duration conservation exact across bucket
    /// boundaries (an inclusive `23:59:59.999` end drops a millisecond at
    /// every crossed boundary).
    pub fn bucket_end(&self, bucket_start: NaiveDateTime) -> NaiveDateTime {
        self.advance(bucket_start)
    }

    /// Canonical sortable key for the bucket starting at `bucket_start`
    ///
    /// ISO calendar date plus a fixed midnight suffix, so lexicographic
    /// order equals chronological order and empty buckets sort correctly
    /// among occupied ones.
    pub fn bucket_key(&self, bucket_start: NaiveDateTime) -> String {
        bucket_start.format("%Y-%m-%d 00:00:00").to_string()
    }
}

/// Ordered bucket-divider instants covering `[range_start, range_end]`
///
/// Walks from the bucket containing `range_start` one `advance` step at a
/// time while the cursor has not passed `range_end`. This is the same walk
/// the aggregation seeding uses, so the grid's column dividers and the
/// aggregate series agree bucket-for-bucket.
pub fn boundary_dates(
    range_start: NaiveDateTime,
    range_end: NaiveDateTime,
    granularity: Granularity,
) -> Vec<NaiveDateTime> {
    let mut dates = Vec::new();
    let mut cursor = granularity.bucket_start(range_start);
    while cursor <= range_end {
        dates.push(cursor);
        cursor = granularity.advance(cursor);
    }
    dates
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dt(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, 0)
            .unwrap()
    }

    #[test]
    fn test_day_alignment() {
        let g = Granularity::Day;
        let start = g.bucket_start(dt(2024, 3, 15, 13, 45));
        assert_eq!(start, dt(2024, 3, 15, 0, 0));
        assert_eq!(g.advance(start), dt(2024, 3, 16, 0, 0));
        assert_eq!(g.bucket_end(start), dt(2024, 3, 16, 0, 0));
    }

    #[test]
    fn test_week_alignment_midweek() {
        let g = Granularity::Week;
        // 2024-01-03 is a Wednesday; its week starts Monday 2024-01-01
        let start = g.bucket_start(dt(2024, 1, 3, 9, 0));
        assert_eq!(start, dt(2024, 1, 1, 0, 0));
        assert_eq!(g.advance(start), dt(2024, 1, 8, 0, 0));
    }

    #[test]
    fn test_week_alignment_sunday_maps_to_previous_monday() {
        let g = Granularity::Week;
        // 2024-01-07 is a Sunday; it belongs to the week of Monday 2024-01-01
        let start = g.bucket_start(dt(2024, 1, 7, 23, 59));
        assert_eq!(start, dt(2024, 1, 1, 0, 0));
    }

    #[test]
    fn test_week_alignment_monday_is_fixed_point() {
        let g = Granularity::Week;
        let monday = dt(2024, 1, 8, 0, 0);
        assert_eq!(g.bucket_start(monday), monday);
    }

    #[test]
    fn test_month_alignment_and_rollover() {
        let g = Granularity::Month;
        let start = g.bucket_start(dt(2024, 12, 25, 8, 0));
        assert_eq!(start, dt(2024, 12, 1, 0, 0));
        assert_eq!(g.advance(start), dt(2025, 1, 1, 0, 0));
    }

    #[test]
    fn test_month_advance_handles_varying_lengths() {
        let g = Granularity::Month;
        // Leap-year February still advances to March 1st
        let feb = g.bucket_start(dt(2024, 2, 29, 12, 0));
        assert_eq!(feb, dt(2024, 2, 1, 0, 0));
        assert_eq!(g.advance(feb), dt(2024, 3, 1, 0, 0));
    }

    #[test]
    fn test_year_alignment() {
        let g = Granularity::Year;
        let start = g.bucket_start(dt(2024, 7, 4, 12, 0));
        assert_eq!(start, dt(2024, 1, 1, 0, 0));
        assert_eq!(g.advance(start), dt(2025, 1, 1, 0, 0));
    }

    #[test]
    fn test_bucket_key_format() {
        let g = Granularity::Day;
        let key = g.bucket_key(dt(2024, 1, 5, 0, 0));
        assert_eq!(key, "2024-01-05 00:00:00");
    }

    #[test]
    fn test_bucket_keys_sort_chronologically() {
        let g = Granularity::Month;
        let dates = vec![
            dt(2023, 12, 1, 0, 0),
            dt(2024, 1, 1, 0, 0),
            dt(2024, 2, 1, 0, 0),
            dt(2024, 10, 1, 0, 0),
        ];
        let keys: Vec<String> = dates.iter().map(|d| g.bucket_key(*d)).collect();
        let mut sorted = keys.clone();
        sorted.sort();
        assert_eq!(keys, sorted);
    }

    #[test]
    fn test_boundary_dates_cover_range() {
        let dates = boundary_dates(dt(2024, 1, 1, 10, 0), dt(2024, 1, 4, 2, 0), Granularity::Day);
        assert_eq!(
            dates,
            vec![
                dt(2024, 1, 1, 0, 0),
                dt(2024, 1, 2, 0, 0),
                dt(2024, 1, 3, 0, 0),
                dt(2024, 1, 4, 0, 0),
            ]
        );
    }

    #[test]
    fn test_boundary_dates_contiguous_for_all_granularities() {
        let start = dt(2023, 11, 18, 6, 30);
        let end = dt(2024, 3, 9, 21, 0);
        for g in [
            Granularity::Day,
            Granularity::Week,
            Granularity::Month,
            Granularity::Year,
        ] {
            let dates = boundary_dates(start, end, g);
            assert!(!dates.is_empty());
            assert!(dates[0] <= start);
            assert!(*dates.last().unwrap() <= end);
            for pair in dates.windows(2) {
                assert_eq!(g.advance(pair[0]), pair[1]);
            }
        }
    }

    #[test]
    fn test_granularity_from_str() {
        assert_eq!("day".parse::<Granularity>().unwrap(), Granularity::Day);
        assert_eq!("week".parse::<Granularity>().unwrap(), Granularity::Week);
        assert_eq!("month".parse::<Granularity>().unwrap(), Granularity::Month);
        assert_eq!("year".parse::<Granularity>().unwrap(), Granularity::Year);
        assert!("quarter".parse::<Granularity>().is_err());
    }
}
