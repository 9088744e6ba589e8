//! Survey result persistence
//!
//! Results accumulate in a single JSON file: an array of timestamped
//! records, one per completed run. Appending reads the whole file, pushes
//! the new record and rewrites it pretty-printed.
//!
//! The write is not atomic; a crash mid-write can leave a truncated file,
//! which the next load treats as empty history.

use crate::types::SurveyRecord;
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Default location of the results file, relative to the working directory
pub const DEFAULT_RESULTS_PATH: &str = "simulations/survey_results.json";

/// Cumulative store of completed surveys
#[derive(Debug, Clone)]
pub struct ResultStore {
    path: PathBuf,
}

impl ResultStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// All stored records, oldest first
    ///
    /// A missing, unreadable or malformed file yields an empty history.
    pub fn load(&self) -> Vec<SurveyRecord> {
        if !self.path.exists() {
            return Vec::new();
        }

        let content = match fs::read_to_string(&self.path) {
            Ok(c) => c,
            Err(e) => {
                tracing::warn!("Could not read {:?}, starting fresh: {}", self.path, e);
                return Vec::new();
            }
        };

        match serde_json::from_str(&content) {
            Ok(records) => records,
            Err(e) => {
                tracing::warn!("Malformed results in {:?}, starting fresh: {}", self.path, e);
                Vec::new()
            }
        }
    }

    /// Most recently appended record
    pub fn latest(&self) -> Option<SurveyRecord> {
        self.load().pop()
    }

    /// Append one record and rewrite the file
    pub fn append(&self, record: &SurveyRecord) -> Result<usize> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create {:?}", parent))?;
            }
        }

        let mut records = self.load();
        records.push(record.clone());

        let json = serde_json::to_string_pretty(&records)
            .context("Failed to serialize survey results")?;
        fs::write(&self.path, json)
            .with_context(|| format!("Failed to write results to {:?}", self.path))?;

        tracing::info!("Saved run {} to {:?}", records.len(), self.path);
        Ok(records.len())
    }
}
