//! Interval overlap arithmetic

use chrono::NaiveDateTime;

/// Overlapping duration of two intervals, in milliseconds
///
/// `max(0, min(item_end, bucket_end) - max(item_start, bucket_start))`.
/// Never negative: disjoint intervals, intervals touching at a single
/// instant, and zero-length intervals all yield 0. A malformed interval
/// (`start > end`) also clamps to 0 instead of going negative.
pub fn overlap_ms(
    item_start: NaiveDateTime,
    item_end: NaiveDateTime,
    bucket_start: NaiveDateTime,
    bucket_end: NaiveDateTime,
) -> i64 {
    let start = item_start.max(bucket_start);
    let end = item_end.min(bucket_end);
    (end - start).num_milliseconds().max(0)
}
