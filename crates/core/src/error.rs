use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenameError {
    #[error("フォルダを読めませんでした: {}", path.display())]
    FolderUnreadable {
        path: PathBuf,
        #[source]
        source: Option<io::Error>,
    },
    #[error("ファイルを読めませんでした: {}", path.display())]
    FileUnreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("メタデータを解析できませんでした: {}", path.display())]
    MetadataParse {
        path: PathBuf,
        #[source]
        source: exif::Error,
    },
    #[error("補正後の日時が範囲外です: {}", path.display())]
    TimestampOutOfRange { path: PathBuf },
    #[error("リネーム先が{attempts}回連続で使用中でした: {}", path.display())]
    RenameExhausted { path: PathBuf, attempts: usize },
    #[error("リネームに失敗しました: {} -> {}", from.display(), to.display())]
    MoveIo {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl RenameError {
    /// Only an unreadable folder stops the whole run; everything else is per file.
    pub fn is_fatal(&self) -> bool {
        matches!(self, RenameError::FolderUnreadable { .. })
    }
}
