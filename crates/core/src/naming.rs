use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike};
use std::ffi::{OsStr, OsString};
use std::path::Path;

// "-MM-DD_HH-MM-SS" following the year.
const FIXED_TAIL_LEN: usize = 15;

/// Target file name derived from a corrected timestamp, before any collision
/// suffix is applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CanonicalName {
    stem: String,
    extension: Option<OsString>,
}

impl CanonicalName {
    pub fn new(stem: impl Into<String>, extension: Option<&OsStr>) -> Self {
        Self {
            stem: stem.into(),
            extension: extension.map(OsStr::to_os_string),
        }
    }

    /// Uses the source file's extension verbatim, case included.
    pub fn for_file(datetime: &NaiveDateTime, source: &Path) -> Self {
        Self::new(format_stem(datetime), source_extension(source))
    }

    pub fn stem(&self) -> &str {
        &self.stem
    }

    pub fn extension(&self) -> Option<&OsStr> {
        self.extension.as_deref()
    }

    /// File name for the given collision iteration; 0 is the plain name.
    pub fn file_name(&self, iteration: usize) -> OsString {
        let mut name = OsString::from(candidate_stem(&self.stem, iteration));
        if let Some(ext) = &self.extension {
            name.push(".");
            name.push(ext);
        }
        name
    }
}

/// Like `Path::extension`, but a dotfile such as `.jpg` yields `jpg`.
fn source_extension(source: &Path) -> Option<&OsStr> {
    if let Some(ext) = source.extension() {
        return Some(ext);
    }
    let name = source.file_name()?.to_str()?;
    let ext = name.strip_prefix('.')?;
    (!ext.is_empty()).then(|| OsStr::new(ext))
}

/// `YYYY-MM-DD_HH-MM-SS`; the year is printed at its natural width.
pub fn format_stem(datetime: &NaiveDateTime) -> String {
    format!(
        "{}-{:02}-{:02}_{:02}-{:02}-{:02}",
        datetime.year(),
        datetime.month(),
        datetime.day(),
        datetime.hour(),
        datetime.minute(),
        datetime.second()
    )
}

/// Suffix sequence for burst collisions: `_01`, then bare `2`, `3`, ... `10`.
pub fn candidate_stem(stem: &str, iteration: usize) -> String {
    match iteration {
        0 => stem.to_string(),
        1 => format!("{stem}_01"),
        n => format!("{stem}{n}"),
    }
}

/// Inverse of [`format_stem`]. Collision suffixes are not accepted.
pub fn parse_stem(stem: &str) -> Option<NaiveDateTime> {
    let split = stem.len().checked_sub(FIXED_TAIL_LEN)?;
    if !stem.is_char_boundary(split) {
        return None;
    }
    let (year, tail) = stem.split_at(split);
    let year: i32 = year.parse().ok()?;

    let bytes = tail.as_bytes();
    let separators = [(0, b'-'), (3, b'-'), (6, b'_'), (9, b'-'), (12, b'-')];
    if separators.iter().any(|&(i, sep)| bytes[i] != sep) {
        return None;
    }
    let field = |at: usize| -> Option<u32> {
        let digits = tail.get(at..at + 2)?;
        if !digits.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        digits.parse().ok()
    };

    NaiveDate::from_ymd_opt(year, field(1)?, field(4)?)?.and_hms_opt(
        field(7)?,
        field(10)?,
        field(13)?,
    )
}
