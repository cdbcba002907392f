//! Capacity Chart Library
//!
//! Time-bucketing and overlap-aggregation engine for Gantt-style capacity
//! charts. Takes a set of scheduled work items and a granularity (day, week,
//! month or year) and produces the ordered per-bucket workload series plus
//! the column geometry needed to render it.
//!
//! # Architecture
//!
//! The library is layered from pure leaves up:
//! - **Calendar Layer**: `granularity` module - bucket alignment, stepping
//!   and canonical keys; `overlap` module - interval intersection math
//! - **Engine Layer**: `aggregate` module - per-bucket workload accumulation
//! - **Geometry Layer**: `chart` module - gridlines, value columns and the
//!   today-marker, mapped onto pixel columns
//! - **I/O Layer**: `storage` and `formatting` modules - TOML schedule input
//!   and plain-text output for the CLI
//!
//! Everything is synchronous and free of shared state: each call recomputes
//! from scratch, so repeated invocations from a reactive render loop are
//! safe by construction.
//!
//! # Example
//!
//! ```
//! use capacity_chart::{Granularity, ItemKind, WorkItem, aggregate};
//! use chrono::NaiveDate;
//!
//! let items = vec![WorkItem {
//!     id: "t1".to_string(),
//!     kind: ItemKind::task,
//!     title: "Write report".to_string(),
//!     start: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap().and_hms_opt(10, 0, 0).unwrap(),
//!     end: NaiveDate::from_ymd_opt(2024, 1, 2).unwrap().and_hms_opt(14, 0, 0).unwrap(),
//! }];
//!
//! let series = aggregate(&items, Granularity::Day);
//! assert_eq!(series.len(), 2);
//! assert_eq!(series[0].value + series[1].value, 28 * 3_600_000);
//! ```

mod aggregate;
mod chart;
mod formatting;
mod granularity;
mod overlap;
mod schedule;
mod storage;

// Re-export commonly used types
pub use aggregate::{CapacityValue, aggregate};
pub use chart::{GridLine, TodayMarker, ValueColumn, gridlines, locate_today, value_columns};
pub use formatting::{format_marker, format_series};
pub use granularity::{Granularity, boundary_dates};
pub use overlap::overlap_ms;
pub use schedule::{ItemKind, Schedule, WorkItem};
pub use storage::Storage;
