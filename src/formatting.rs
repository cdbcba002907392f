//! Formatting helper functions for the capacity-chart CLI
//!
//! This module contains formatting logic for displaying the aggregate
//! series and the today-marker as plain text.

use crate::aggregate::CapacityValue;
use crate::chart::TodayMarker;

const MS_PER_HOUR: f64 = 3_600_000.0;
/// Width of the ASCII bar drawn for the fullest bucket
const BAR_WIDTH: usize = 40;

/// Format the aggregate series into a display string
///
/// One line per bucket: the bucket date, the workload in hours, and an
/// ASCII bar scaled against the fullest bucket.
pub fn format_series(series: &[CapacityValue]) -> String {
    if series.is_empty() {
        return "No workload found".to_string();
    }

    let max_value = series.iter().map(|v| v.value).max().unwrap_or(0).max(1);

    let mut result = format!("Found {} bucket(s):\n\n", series.len());
    for entry in series {
        let bar_len = (entry.value as f64 / max_value as f64 * BAR_WIDTH as f64).round() as usize;
        result.push_str(&format!(
            "- {}  {:>8.2}{}  {}\n",
            entry.date.format("%Y-%m-%d"),
            entry.value as f64 / MS_PER_HOUR,
            if entry.label.is_empty() { " " } else { entry.label.as_str() },
            "#".repeat(bar_len)
        ));
    }

    result
}

/// Format the today-marker position into a display string
pub fn format_marker(marker: Option<TodayMarker>) -> String {
    match marker {
        Some(m) => format!("Today marker: x={}, width={}", m.x, m.width),
        None => "Today marker: none".to_string(),
    }
}
