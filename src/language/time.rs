use serde::Serialize;

use crate::language::digits;

/// A point in time as reported on the wire: an optional day of month, an
/// hour and a minute. Reports never carry month or year; hour 24 is legal
/// and refers to midnight at the end of the day.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TimePoint {
    pub day: Option<u32>,
    pub hour: u32,
    pub minute: u32,
}

impl TimePoint {
    const MAX_DAY: u32 = 31;
    const MAX_HOUR: u32 = 24;
    const MAX_MINUTE: u32 = 59;

    /// Six digits are DDHHMM; four digits are HHMM with the day omitted.
    pub fn from_ddhhmm(s: &str) -> Option<TimePoint> {
        match s.len() {
            4 => {
                let hour = digits(s, 0, 2)?;
                let minute = digits(s, 2, 2)?;
                Some(TimePoint {
                    day: None,
                    hour,
                    minute,
                })
            }
            6 => {
                let day = digits(s, 0, 2)?;
                let hour = digits(s, 2, 2)?;
                let minute = digits(s, 4, 2)?;
                Some(TimePoint {
                    day: Some(day),
                    hour,
                    minute,
                })
            }
            _ => None,
        }
    }

    /// Four digits are DDHH, the shape used by validity spans.
    pub fn from_ddhh(s: &str) -> Option<TimePoint> {
        if s.len() != 4 {
            return None;
        }
        let day = digits(s, 0, 2)?;
        let hour = digits(s, 2, 2)?;
        Some(TimePoint {
            day: Some(day),
            hour,
            minute: 0,
        })
    }

    pub fn is_valid(&self) -> bool {
        if let Some(day) = self.day {
            if day == 0 || day > Self::MAX_DAY {
                return false;
            }
        }
        self.hour <= Self::MAX_HOUR && self.minute <= Self::MAX_MINUTE
    }
}
