mod apply;
mod config;
mod error;
mod exif_reader;
mod metadata;
mod naming;
mod offset;
mod renamer;
mod report;
mod scanner;
#[cfg(test)]
mod test_support;

pub use apply::{CollisionResolver, MoveOutcome, DEFAULT_MAX_ATTEMPTS};
pub use config::{OptionsError, RenameOptions};
pub use error::RenameError;
pub use exif_reader::{read_exif_timestamp, ExifTimestampReader};
pub use metadata::{CaptureTimestamp, TimestampSource};
pub use naming::{candidate_stem, format_stem, parse_stem, CanonicalName};
pub use offset::TimeOffset;
pub use renamer::PhotoRenamer;
pub use report::{describe, FileStatus, RenameReport, RenameStats, ReportEntry};
pub use scanner::collect_files;
