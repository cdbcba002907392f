use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Kind of a scheduled work item
///
/// Only `task` items carry real workload; `project` and `milestone` items
/// roll up or mark their children and are excluded from capacity
/// aggregation to avoid double-counting.
/// Uses snake_case naming to match TOML serialization format.
#[allow(non_camel_case_types)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ItemKind {
    /// A concrete unit of work with a duration
    task,
    /// A container rolling up the dates of its tasks
    project,
    /// A zero-duration marker date
    milestone,
}

impl FromStr for ItemKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "task" => Ok(ItemKind::task),
            "project" => Ok(ItemKind::project),
            "milestone" => Ok(ItemKind::milestone),
            _ => Err(format!(
                "Invalid item kind '{}'. Valid options are: task, project, milestone",
                s
            )),
        }
    }
}

/// A scheduled work item on the timeline
///
/// The engine reads items but never mutates them; all date arithmetic is
/// done on copies of the `start`/`end` values.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkItem {
    /// Unique identifier (e.g., "task-1", "website-redesign")
    pub id: String,
    /// Kind of item (task, project, milestone)
    pub kind: ItemKind,
    /// Title describing the item
    pub title: String,
    /// Scheduled start (format: YYYY-MM-DDTHH:MM:SS)
    pub start: NaiveDateTime,
    /// Scheduled end, must not precede `start` (a zero-length item with
    /// `start == end` is legal and contributes no workload)
    pub end: NaiveDateTime,
}

impl WorkItem {
    /// Check if this item is a plain task
    pub fn is_task(&self) -> bool {
        self.kind == ItemKind::task
    }

    /// Check if the item's interval is well-formed (`start <= end`)
    ///
    /// Items violating this are skipped during aggregation rather than
    /// aborting the whole computation.
    pub fn is_well_formed(&self) -> bool {
        self.start <= self.end
    }
}

/// The externally owned set of work items feeding the chart
#[derive(Debug, Serialize, Deserialize, Default)]
pub struct Schedule {
    pub items: Vec<WorkItem>,
}

impl Schedule {
    pub fn new() -> Self {
        Self::default()
    }

    /// Well-formed task-kind items, the only items that carry workload
    pub fn tasks(&self) -> Vec<&WorkItem> {
        self.items
            .iter()
            .filter(|i| i.is_task() && i.is_well_formed())
            .collect()
    }

    /// Overall `[min(start), max(end)]` range over task-kind items
    ///
    /// Returns `None` when no well-formed task exists.
    pub fn task_range(&self) -> Option<(NaiveDateTime, NaiveDateTime)> {
        let tasks = self.tasks();
        let start = tasks.iter().map(|i| i.start).min()?;
        let end = tasks.iter().map(|i| i.end).max()?;
        Some((start, end))
    }
}
