use crate::error::RenameError;
use crate::metadata::{CaptureTimestamp, TimestampSource};
use chrono::{NaiveDate, NaiveDateTime};
use exif::{Exif, In, Reader, Tag, Value};
use log::debug;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Reads IFD0 `DateTime` (plus `OffsetTime` when present) with kamadak-exif.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExifTimestampReader;

impl TimestampSource for ExifTimestampReader {
    fn read_timestamp(&self, path: &Path) -> Result<Option<CaptureTimestamp>, RenameError> {
        read_exif_timestamp(path)
    }
}

pub fn read_exif_timestamp(path: &Path) -> Result<Option<CaptureTimestamp>, RenameError> {
    let file = File::open(path).map_err(|source| RenameError::FileUnreadable {
        path: path.to_path_buf(),
        source,
    })?;
    let mut buf = BufReader::new(file);
    let exif = match Reader::new().read_from_container(&mut buf) {
        Ok(exif) => exif,
        Err(exif::Error::NotFound(_)) => {
            debug!("EXIFがありません: {}", path.display());
            return Ok(None);
        }
        Err(source) => {
            return Err(RenameError::MetadataParse {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    let Some(mut datetime) = ascii_field(&exif, Tag::DateTime)
        .and_then(|raw| exif::DateTime::from_ascii(raw).ok())
    else {
        debug!("DateTimeタグがありません: {}", path.display());
        return Ok(None);
    };

    if let Some(raw) = ascii_field(&exif, Tag::OffsetTime) {
        if datetime.parse_offset(raw).is_err() {
            debug!("OffsetTimeを解釈できませんでした: {}", path.display());
        }
    }

    let Some(wall_clock) = to_naive(&datetime) else {
        debug!("DateTimeが不正です: {}", path.display());
        return Ok(None);
    };
    let zone_offset = datetime.offset.map(i32::from).unwrap_or(0);

    Ok(Some(CaptureTimestamp::from_wall_clock(
        wall_clock,
        zone_offset,
        0,
    )))
}

fn ascii_field(exif: &Exif, tag: Tag) -> Option<&[u8]> {
    let field = exif.get_field(tag, In::PRIMARY)?;
    match field.value {
        Value::Ascii(ref values) => values.first().map(Vec::as_slice),
        _ => None,
    }
}

fn to_naive(datetime: &exif::DateTime) -> Option<NaiveDateTime> {
    NaiveDate::from_ymd_opt(
        i32::from(datetime.year),
        u32::from(datetime.month),
        u32::from(datetime.day),
    )?
    .and_hms_opt(
        u32::from(datetime.hour),
        u32::from(datetime.minute),
        u32::from(datetime.second),
    )
}
