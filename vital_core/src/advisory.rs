//! Notification sinks for user-facing advisories.
//!
//! The BMI engine only ever pushes into a sink; deduplication and display
//! are the sink's concern.

use crate::{Advisory, Result, Severity};
use fs2::FileExt;
use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

/// Destination for advisories produced during computation
pub trait AdvisorySink {
    fn emit(&mut self, advisory: &Advisory);
}

/// In-memory sink that keeps advisories in emission order
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Advisories {
    items: Vec<Advisory>,
}

impl Advisories {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[Advisory] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl AdvisorySink for Advisories {
    fn emit(&mut self, advisory: &Advisory) {
        self.items.push(advisory.clone());
    }
}

/// Sink that forwards advisories to the tracing subscriber
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingSink;

impl AdvisorySink for TracingSink {
    fn emit(&mut self, advisory: &Advisory) {
        match advisory.severity {
            Severity::Info => tracing::info!(kind = ?advisory.kind, "{}", advisory.message),
            Severity::Error => tracing::error!(kind = ?advisory.kind, "{}", advisory.message),
        }
    }
}

/// JSONL advisory log with file locking
///
/// Several processes may append to the same log; each line is written
/// under an exclusive lock.
pub struct JsonlAdvisorySink {
    path: PathBuf,
}

impl JsonlAdvisorySink {
    /// Create a new JSONL sink for the given path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Append one advisory as a JSON line
    pub fn append(&mut self, advisory: &Advisory) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;

        file.lock_exclusive()?;

        let mut writer = std::io::BufWriter::new(&file);
        let line = serde_json::to_string(advisory)?;
        writer.write_all(line.as_bytes())?;
        writer.write_all(b"\n")?;
        writer.flush()?;
        drop(writer);

        file.unlock()?;

        tracing::debug!("Appended {:?} advisory to {:?}", advisory.kind, self.path);
        Ok(())
    }
}

impl AdvisorySink for JsonlAdvisorySink {
    fn emit(&mut self, advisory: &Advisory) {
        if let Err(e) = self.append(advisory) {
            tracing::warn!(
                "Failed to write advisory to {:?}: {}. Dropping it.",
                self.path,
                e
            );
        }
    }
}

/// Fan-out: emit into both sinks
impl<A, B> AdvisorySink for (A, B)
where
    A: AdvisorySink,
    B: AdvisorySink,
{
    fn emit(&mut self, advisory: &Advisory) {
        self.0.emit(advisory);
        self.1.emit(advisory);
    }
}

/// Read all advisories from a JSONL log
///
/// Malformed lines are skipped with a warning.
pub fn read_advisories(path: &Path) -> Result<Vec<Advisory>> {
    if !path.exists() {
        return Ok(Vec::new());
    }

    let file = File::open(path)?;
    file.lock_shared()?;

    let reader = BufReader::new(&file);
    let mut advisories = Vec::new();

    for (line_num, line_result) in reader.lines().enumerate() {
        let line = line_result?;
        if line.trim().is_empty() {
            continue;
        }

        match serde_json::from_str::<Advisory>(&line) {
            Ok(advisory) => advisories.push(advisory),
            Err(e) => {
                tracing::warn!("Failed to parse advisory at line {}: {}", line_num + 1, e);
            }
        }
    }

    file.unlock()?;
    Ok(advisories)
}
