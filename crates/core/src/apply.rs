use crate::error::RenameError;
use crate::naming::CanonicalName;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

pub const DEFAULT_MAX_ATTEMPTS: usize = 10_000;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveOutcome {
    /// `collisions` counts occupied candidates skipped before `target`.
    Renamed { target: PathBuf, collisions: usize },
    /// The source already carries the name it would be given.
    Unchanged,
}

/// Moves files onto canonical names without ever overwriting, stepping
/// through the collision suffix sequence while candidates are taken.
#[derive(Debug)]
pub struct CollisionResolver {
    max_attempts: usize,
    dry_run: bool,
    reserved: HashSet<PathBuf>,
    vacated: HashSet<PathBuf>,
}

impl CollisionResolver {
    pub fn new(max_attempts: usize, dry_run: bool) -> Self {
        Self {
            max_attempts: max_attempts.max(1),
            dry_run,
            reserved: HashSet::new(),
            vacated: HashSet::new(),
        }
    }

    pub fn is_dry_run(&self) -> bool {
        self.dry_run
    }

    pub fn resolve(
        &mut self,
        source: &Path,
        name: &CanonicalName,
    ) -> Result<MoveOutcome, RenameError> {
        let parent = source.parent().unwrap_or_else(|| Path::new("."));

        for iteration in 0..self.max_attempts {
            let candidate = parent.join(name.file_name(iteration));
            if candidate == source {
                debug!("既に正しい名前です: {}", source.display());
                return Ok(MoveOutcome::Unchanged);
            }

            info!("リネーム [{}] -> [{}]", source.display(), candidate.display());
            if self.is_occupied(&candidate) {
                debug!("使用中のためスキップ: {}", candidate.display());
                continue;
            }

            if self.dry_run {
                self.reserved.insert(candidate.clone());
                self.vacated.insert(source.to_path_buf());
            } else {
                match fs::rename(source, &candidate) {
                    Ok(()) => {}
                    Err(err) if err.kind() == io::ErrorKind::AlreadyExists => {
                        debug!("使用中のためスキップ: {}", candidate.display());
                        continue;
                    }
                    Err(source_err) => {
                        return Err(RenameError::MoveIo {
                            from: source.to_path_buf(),
                            to: candidate,
                            source: source_err,
                        })
                    }
                }
            }

            return Ok(MoveOutcome::Renamed {
                target: candidate,
                collisions: iteration,
            });
        }

        Err(RenameError::RenameExhausted {
            path: source.to_path_buf(),
            attempts: self.max_attempts,
        })
    }

    fn is_occupied(&self, candidate: &Path) -> bool {
        if self.reserved.contains(candidate) {
            return true;
        }
        // symlink_metadata so that a dangling link still counts as taken.
        fs::symlink_metadata(candidate).is_ok() && !self.vacated.contains(candidate)
    }
}
