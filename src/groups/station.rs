use crate::regex;
use serde::Serialize;

use crate::groups::ReportPart;

/// The four-character ICAO identifier of the issuing station, e.g. `KABQ`
/// or `EGYD`. Only recognized in the report header.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Station<'i>(pub &'i str);

impl<'i> Station<'i> {
    pub fn parse(token: &'i str, part: ReportPart) -> Option<Station<'i>> {
        if part != ReportPart::Header {
            return None;
        }
        if !regex!("^[A-Z][A-Z0-9]{3}$").is_match(token) {
            return None;
        }
        Some(Station(token))
    }
}
