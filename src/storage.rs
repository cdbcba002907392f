use crate::schedule::Schedule;
use anyhow::Result;
use std::fs;
use std::path::{Path, PathBuf};

/// Read-only loader for a TOML schedule file
///
/// The engine never writes: work items are owned by the caller and the
/// chart is a pure derivation of them.
pub struct Storage {
    file_path: PathBuf,
}

impl Storage {
    pub fn new(file_path: impl AsRef<Path>) -> Self {
        Self {
            file_path: file_path.as_ref().to_path_buf(),
        }
    }

    pub fn load(&self) -> Result<Schedule> {
        if !self.file_path.exists() {
            return Ok(Schedule::new());
        }

        let content = fs::read_to_string(&self.file_path)?;
        let schedule: Schedule = toml::from_str(&content)?;
        Ok(schedule)
    }
}
