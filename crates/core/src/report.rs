use crate::error::RenameError;
use crate::offset::TimeOffset;
use serde::{Deserialize, Serialize};
use std::error::Error as _;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum FileStatus {
    Renamed { target: PathBuf, collisions: usize },
    Unchanged,
    NoTimestamp,
    Unparseable { message: String },
    Failed { message: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportEntry {
    pub path: PathBuf,
    #[serde(flatten)]
    pub status: FileStatus,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct RenameStats {
    pub scanned: usize,
    pub renamed: usize,
    pub unchanged: usize,
    pub no_timestamp: usize,
    pub unparseable: usize,
    pub failed: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenameReport {
    pub root: PathBuf,
    pub dry_run: bool,
    pub offset: TimeOffset,
    pub entries: Vec<ReportEntry>,
    pub stats: RenameStats,
}

impl RenameReport {
    pub fn new(root: PathBuf, dry_run: bool, offset: TimeOffset) -> Self {
        Self {
            root,
            dry_run,
            offset,
            entries: Vec::new(),
            stats: RenameStats::default(),
        }
    }

    pub fn record(&mut self, path: PathBuf, status: FileStatus) {
        self.stats.scanned += 1;
        match &status {
            FileStatus::Renamed { .. } => self.stats.renamed += 1,
            FileStatus::Unchanged => self.stats.unchanged += 1,
            FileStatus::NoTimestamp => self.stats.no_timestamp += 1,
            FileStatus::Unparseable { .. } => self.stats.unparseable += 1,
            FileStatus::Failed { .. } => self.stats.failed += 1,
        }
        self.entries.push(ReportEntry { path, status });
    }

    pub fn record_error(&mut self, path: PathBuf, err: &RenameError) {
        let message = describe(err);
        let status = match err {
            RenameError::MetadataParse { .. } => FileStatus::Unparseable { message },
            _ => FileStatus::Failed { message },
        };
        self.record(path, status);
    }

    pub fn renamed(&self) -> impl Iterator<Item = &ReportEntry> {
        self.entries
            .iter()
            .filter(|entry| matches!(entry.status, FileStatus::Renamed { .. }))
    }
}

/// Error message followed by its source chain.
pub fn describe(err: &RenameError) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}
