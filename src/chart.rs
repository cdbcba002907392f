//! Column geometry for the capacity chart
//!
//! Pure pixel mapping: takes the ordered bucket-divider instants supplied by
//! the grid layout plus the aggregate series and produces gridline,
//! value-column and today-marker geometry. No SVG composition or styling
//! happens here; the structs are consumable by any renderer.
//!
//! The boundary list is an independent derivation of the same granularity
//! the series was aggregated at, so series entries match dividers by exact
//! instant (both are canonical bucket starts).

use crate::aggregate::CapacityValue;
use chrono::NaiveDateTime;
use std::collections::HashMap;

/// Vertical gridline at a column divider
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridLine {
    pub x: f64,
}

/// One colored capacity column
#[derive(Debug, Clone, PartialEq)]
pub struct ValueColumn {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    /// Unit label of the matched series entry, empty for zero-value buckets
    pub label: String,
}

/// Highlight rectangle for the column containing "now"
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TodayMarker {
    pub x: f64,
    pub width: f64,
}

/// Gridline x-offsets, one per boundary at `i * column_width`
pub fn gridlines(boundaries: &[NaiveDateTime], column_width: f64) -> Vec<GridLine> {
    (0..boundaries.len())
        .map(|i| GridLine {
            x: i as f64 * column_width,
        })
        .collect()
}

/// Locate the column containing `now`
///
/// Scans adjacent boundary pairs for `boundaries[i] <= now <
/// boundaries[i+1]`. The last boundary has no successor, so one implicit
/// boundary is synthesized past the end at the spacing of the final pair;
/// this matches uniform day/week grids and is kept as-is for the varying
/// month/year spacings. With `rtl` the boundary list descends and the match
/// condition inverts (`boundaries[i] >= now > boundaries[i+1]`), with the
/// marker placed one column to the right of the matched index. `None` means
/// the marker is simply not drawn, never an error.
pub fn locate_today(
    boundaries: &[NaiveDateTime],
    now: NaiveDateTime,
    column_width: f64,
    rtl: bool,
) -> Option<TodayMarker> {
    if rtl {
        for i in 0..boundaries.len().saturating_sub(1) {
            if boundaries[i] >= now && now > boundaries[i + 1] {
                return Some(TodayMarker {
                    x: (i + 1) as f64 * column_width,
                    width: column_width,
                });
            }
        }
        return None;
    }

    for i in 0..boundaries.len() {
        let next = if i + 1 < boundaries.len() {
            boundaries[i + 1]
        } else if i > 0 {
            // Extrapolate one bucket past the end at the last known spacing
            boundaries[i] + (boundaries[i] - boundaries[i - 1])
        } else {
            break;
        };
        if boundaries[i] <= now && now < next {
            return Some(TodayMarker {
                x: i as f64 * column_width,
                width: column_width,
            });
        }
    }
    None
}

/// Colored value columns, one per boundary with a matching series entry
///
/// Heights scale by `value / max(values, 1)` against `chart_height`; the
/// floor of 1 in the denominator keeps an all-zero series from dividing by
/// zero. Zero-value entries produce a zero-height column.
pub fn value_columns(
    series: &[CapacityValue],
    boundaries: &[NaiveDateTime],
    column_width: f64,
    chart_height: f64,
) -> Vec<ValueColumn> {
    let by_date: HashMap<NaiveDateTime, &CapacityValue> =
        series.iter().map(|v| (v.date, v)).collect();
    let max_value = series.iter().map(|v| v.value).max().unwrap_or(0).max(1);

    let mut columns = Vec::new();
    for (i, boundary) in boundaries.iter().enumerate() {
        if let Some(entry) = by_date.get(boundary) {
            let height = entry.value as f64 / max_value as f64 * chart_height;
            columns.push(ValueColumn {
                x: i as f64 * column_width,
                y: chart_height - height,
                width: column_width,
                height,
                label: entry.label.clone(),
            });
        }
    }
    columns
}
