use crate::metadata::CaptureTimestamp;
use chrono::{DateTime, Months, NaiveDateTime, TimeDelta};
use serde::{Deserialize, Serialize};

/// User supplied correction applied to every timestamp in a run.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct TimeOffset {
    pub years: i32,
    pub hours: i32,
    pub minutes: i32,
}

impl TimeOffset {
    pub fn new(years: i32, hours: i32, minutes: i32) -> Self {
        Self {
            years,
            hours,
            minutes,
        }
    }

    pub fn is_zero(&self) -> bool {
        self.years == 0 && self.hours == 0 && self.minutes == 0
    }

    /// Strips the zone/DST skew, then shifts years, hours and minutes in that
    /// order with calendar rollover. Returns `None` when the result leaves
    /// chrono's representable range.
    pub fn correct(&self, timestamp: &CaptureTimestamp) -> Option<NaiveDateTime> {
        let millis = timestamp
            .local_millis
            .checked_sub(timestamp.skew_millis())?;
        let naive = DateTime::from_timestamp_millis(millis)?.naive_utc();
        self.apply(naive)
    }

    /// Field arithmetic on an already zone-naive value.
    pub fn apply(&self, naive: NaiveDateTime) -> Option<NaiveDateTime> {
        let shifted = add_years(naive, self.years)?;
        let shifted = shifted.checked_add_signed(TimeDelta::try_hours(i64::from(self.hours))?)?;
        shifted.checked_add_signed(TimeDelta::try_minutes(i64::from(self.minutes))?)
    }
}

// Month arithmetic clamps Feb 29 to Feb 28 in non-leap years.
fn add_years(naive: NaiveDateTime, years: i32) -> Option<NaiveDateTime> {
    let months = Months::new(years.unsigned_abs().checked_mul(12)?);
    if years >= 0 {
        naive.checked_add_months(months)
    } else {
        naive.checked_sub_months(months)
    }
}
