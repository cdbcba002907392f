//! Common test utilities for integration tests

use capacity_chart::{ItemKind, WorkItem};
use chrono::{NaiveDate, NaiveDateTime};

pub const HOUR_MS: i64 = 3_600_000;
pub const DAY_MS: i64 = 24 * HOUR_MS;

/// Build an instant from calendar fields
pub fn dt(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .unwrap()
        .and_hms_opt(h, min, 0)
        .unwrap()
}

/// Create a test work item with the given kind
pub fn create_item(id: &str, kind: ItemKind, start: NaiveDateTime, end: NaiveDateTime) -> WorkItem {
    WorkItem {
        id: id.to_string(),
        kind,
        title: format!("Item {}", id),
        start,
        end,
    }
}

/// Create a test task
pub fn create_task(id: &str, start: NaiveDateTime, end: NaiveDateTime) -> WorkItem {
    create_item(id, ItemKind::task, start, end)
}
