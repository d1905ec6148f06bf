use crate::error::RenameError;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::path::Path;

const MILLIS_PER_MINUTE: i64 = 60_000;

/// Capture time as a calendar would hold it: a millisecond instant that still
/// carries the zone and DST skew reported alongside the tag.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct CaptureTimestamp {
    pub local_millis: i64,
    pub zone_offset_minutes: i32,
    pub dst_offset_minutes: i32,
}

impl CaptureTimestamp {
    /// Builds a timestamp from the wall-clock fields written by the camera.
    pub fn from_wall_clock(
        wall_clock: NaiveDateTime,
        zone_offset_minutes: i32,
        dst_offset_minutes: i32,
    ) -> Self {
        let skew = i64::from(zone_offset_minutes) + i64::from(dst_offset_minutes);
        Self {
            local_millis: wall_clock.and_utc().timestamp_millis() + skew * MILLIS_PER_MINUTE,
            zone_offset_minutes,
            dst_offset_minutes,
        }
    }

    pub fn skew_millis(&self) -> i64 {
        (i64::from(self.zone_offset_minutes) + i64::from(self.dst_offset_minutes))
            * MILLIS_PER_MINUTE
    }
}

/// Anything that can report a capture time for a file.
///
/// `Ok(None)` means the file is readable but carries no usable timestamp,
/// which is a normal skip and not an error.
pub trait TimestampSource {
    fn read_timestamp(&self, path: &Path) -> Result<Option<CaptureTimestamp>, RenameError>;
}
