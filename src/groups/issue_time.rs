use crate::regex;
use serde::Serialize;

use crate::groups::ReportPart;
use crate::language::TimePoint;

/// The `DDHHMMZ` issue time in the report header.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct IssueTime(pub TimePoint);

impl IssueTime {
    pub fn parse(token: &str, part: ReportPart) -> Option<IssueTime> {
        if part != ReportPart::Header {
            return None;
        }
        if !regex!(r"^\d{6}Z$").is_match(token) {
            return None;
        }
        let time = TimePoint::from_ddhhmm(&token[..6])?;
        time.day?;
        Some(IssueTime(time))
    }

    pub fn is_valid(&self) -> bool {
        self.0.is_valid() && self.0.day.is_some()
    }
}
