use crate::apply::{CollisionResolver, MoveOutcome};
use crate::config::RenameOptions;
use crate::error::RenameError;
use crate::exif_reader::ExifTimestampReader;
use crate::metadata::TimestampSource;
use crate::naming::CanonicalName;
use crate::offset::TimeOffset;
use crate::report::{describe, FileStatus, RenameReport};
use crate::scanner::collect_files;
use log::{info, warn};
use std::fs;
use std::path::Path;

/// Runs extract → correct → format → move for each photo under a root.
pub struct PhotoRenamer<S = ExifTimestampReader> {
    source: S,
    offset: TimeOffset,
    resolver: CollisionResolver,
}

impl PhotoRenamer<ExifTimestampReader> {
    pub fn new(options: &RenameOptions) -> Self {
        Self::with_source(ExifTimestampReader, options)
    }
}

impl<S: TimestampSource> PhotoRenamer<S> {
    pub fn with_source(source: S, options: &RenameOptions) -> Self {
        Self {
            source,
            offset: options.offset,
            resolver: CollisionResolver::new(options.max_attempts, options.dry_run),
        }
    }

    /// Renames every photo below `root`. Only an unreadable folder aborts;
    /// per-file problems are logged and recorded in the report.
    pub fn rename_tree(&mut self, root: &Path) -> Result<RenameReport, RenameError> {
        let files = collect_files(root)?;
        info!("{}件のファイルを処理します: {}", files.len(), root.display());

        let mut report =
            RenameReport::new(root.to_path_buf(), self.resolver.is_dry_run(), self.offset);
        for path in files {
            match self.rename_by_date(&path) {
                Ok(status) => report.record(path, status),
                Err(err) if err.is_fatal() => return Err(err),
                Err(err) => {
                    warn!("スキップ: {}", describe(&err));
                    report.record_error(path, &err);
                }
            }
        }

        info!(
            "完了: renamed={} unchanged={} no_timestamp={} unparseable={} failed={}",
            report.stats.renamed,
            report.stats.unchanged,
            report.stats.no_timestamp,
            report.stats.unparseable,
            report.stats.failed
        );
        Ok(report)
    }

    /// Renames a single file after its capture time.
    pub fn rename_by_date(&mut self, path: &Path) -> Result<FileStatus, RenameError> {
        fs::metadata(path).map_err(|source| RenameError::FileUnreadable {
            path: path.to_path_buf(),
            source,
        })?;

        let Some(timestamp) = self.source.read_timestamp(path)? else {
            info!("撮影日時がないためスキップ: {}", path.display());
            return Ok(FileStatus::NoTimestamp);
        };
        let corrected = self
            .offset
            .correct(&timestamp)
            .ok_or_else(|| RenameError::TimestampOutOfRange {
                path: path.to_path_buf(),
            })?;

        let name = CanonicalName::for_file(&corrected, path);
        Ok(match self.rename_to(path, &name)? {
            MoveOutcome::Renamed { target, collisions } => {
                FileStatus::Renamed { target, collisions }
            }
            MoveOutcome::Unchanged => FileStatus::Unchanged,
        })
    }

    /// Moves `path` onto `name` in its own directory, resolving collisions.
    pub fn rename_to(
        &mut self,
        path: &Path,
        name: &CanonicalName,
    ) -> Result<MoveOutcome, RenameError> {
        self.resolver.resolve(path, name)
    }
}
