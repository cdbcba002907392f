//! Workload aggregation per calendar bucket
//!
//! Turns a set of work items and a granularity into the ordered
//! (bucket start, accumulated duration) series the capacity chart renders.
//! The computation is a pure function of its inputs: no wall clock, no
//! shared state, identical input yields identical output.

use crate::granularity::Granularity;
use crate::overlap::overlap_ms;
use crate::schedule::WorkItem;
use chrono::NaiveDateTime;
use std::collections::BTreeMap;

/// Label attached to non-empty buckets (hours of workload)
const UNIT_LABEL: &str = "h";

/// One entry of the aggregate capacity series
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapacityValue {
    /// Bucket start instant
    pub date: NaiveDateTime,
    /// Accumulated overlap duration in milliseconds
    pub value: i64,
    /// Unit label, empty when the bucket holds no workload
    pub label: String,
}

/// Aggregate workload per bucket at the given granularity
///
/// Only well-formed `task`-kind items participate; projects and milestones
/// are excluded so rolled-up time is not double-counted, and an item with
/// `start > end` is skipped rather than aborting the run. The series covers
/// every bucket from the earliest task start to the latest task end, one
/// entry per bucket including empty ones, ordered by date ascending. An
/// empty item set (or one with no tasks) yields an empty series.
pub fn aggregate(items: &[WorkItem], granularity: Granularity) -> Vec<CapacityValue> {
    let tasks: Vec<&WorkItem> = items
        .iter()
        .filter(|i| i.is_task() && i.is_well_formed())
        .collect();
    if tasks.is_empty() {
        return Vec::new();
    }

    // Derivable because tasks is non-empty
    let range_start = tasks.iter().map(|i| i.start).min().unwrap_or_default();
    let range_end = tasks.iter().map(|i| i.end).max().unwrap_or_default();

    // Seed every bucket covering the overall range with zero, so buckets
    // without workload still appear and the grid has no gaps. Keyed by the
    // canonical bucket key: lexicographic map order is chronological order.
    let mut buckets: BTreeMap<String, (NaiveDateTime, i64)> = BTreeMap::new();
    let mut cursor = granularity.bucket_start(range_start);
    while cursor <= range_end {
        buckets.insert(granularity.bucket_key(cursor), (cursor, 0));
        cursor = granularity.advance(cursor);
    }

    // Each item walks its own bucket range rather than reusing the global
    // walk above, attributing to each bucket exactly the overlapped span.
    for item in &tasks {
        let last = granularity.bucket_start(item.end);
        let mut cursor = granularity.bucket_start(item.start);
        while cursor <= last {
            let end = granularity.bucket_end(cursor);
            let contribution = overlap_ms(item.start, item.end, cursor, end);
            buckets
                .entry(granularity.bucket_key(cursor))
                .or_insert((cursor, 0))
                .1 += contribution;
            cursor = granularity.advance(cursor);
        }
    }

    buckets
        .into_values()
        .map(|(date, value)| CapacityValue {
            date,
            value,
            label: if value == 0 {
                String::new()
            } else {
                UNIT_LABEL.to_string()
            },
        })
        .collect()
}
