use crate::error::RenameError;
use log::debug;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Collects every regular file below `root`, depth first, sorted by name
/// within each directory. Symlinks count only when they point at a regular
/// file and are never descended into.
pub fn collect_files(root: &Path) -> Result<Vec<PathBuf>, RenameError> {
    ensure_readable_dir(root)?;

    let mut out = Vec::new();
    for entry in WalkDir::new(root).follow_links(false).sort_by_file_name() {
        let entry = entry.map_err(|err| {
            let path = err
                .path()
                .map(Path::to_path_buf)
                .unwrap_or_else(|| root.to_path_buf());
            RenameError::FolderUnreadable {
                path,
                source: err.into_io_error(),
            }
        })?;

        let file_type = entry.file_type();
        if file_type.is_dir() {
            continue;
        }
        if file_type.is_file() || (file_type.is_symlink() && entry.path().is_file()) {
            out.push(entry.into_path());
        } else {
            debug!("通常ファイルではないためスキップ: {}", entry.path().display());
        }
    }

    Ok(out)
}

fn ensure_readable_dir(path: &Path) -> Result<(), RenameError> {
    let unreadable = |source| RenameError::FolderUnreadable {
        path: path.to_path_buf(),
        source,
    };

    let meta = fs::metadata(path).map_err(|err| unreadable(Some(err)))?;
    if !meta.is_dir() {
        return Err(unreadable(None));
    }
    fs::read_dir(path).map_err(|err| unreadable(Some(err)))?;
    Ok(())
}
