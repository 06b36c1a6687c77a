//! Best-effort report recording
//!
//! The assembler hands every report to a `ReportRecorder` exactly once and
//! discards any error. No target configured means `NoopRecorder`.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use crate::types::{RecordError, Report};

/// Capability to persist one anonymized report row
pub trait ReportRecorder: Send + Sync {
    fn record(&self, report: &Report) -> Result<(), RecordError>;
}

/// Recorder used when no storage target is configured
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopRecorder;

impl ReportRecorder for NoopRecorder {
    fn record(&self, _report: &Report) -> Result<(), RecordError> {
        Ok(())
    }
}

/// Appends each row as one JSON array line
#[derive(Debug)]
pub struct JsonlRecorder {
    path: PathBuf,
    // Serializes appends from concurrent API requests
    lock: Mutex<()>,
}

impl JsonlRecorder {
    /// Create recorder writing to `path` (parent dirs created on first write)
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ReportRecorder for JsonlRecorder {
    fn record(&self, report: &Report) -> Result<(), RecordError> {
        let row = serde_json::to_string(&report.log_record().to_row())?;

        let _guard = self.lock.lock().unwrap_or_else(|poisoned| poisoned.into_inner());

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let mut file = OpenOptions::new().create(true).append(true).open(&self.path)?;
        writeln!(file, "{}", row)?;
        Ok(())
    }
}

/// Load every recorded row back (for inspection and tests)
pub fn load_rows(path: impl AsRef<Path>) -> Result<Vec<Vec<serde_json::Value>>, RecordError> {
    let content = std::fs::read_to_string(path)?;
    content
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| serde_json::from_str(line).map_err(RecordError::from))
        .collect()
}
