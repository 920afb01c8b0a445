use crate::regex;
use serde::Serialize;

use crate::groups::{Group, ReportPart};
use crate::language::{Direction, Distance, DistanceUnit};

/// Prevailing or directional visibility. A bare single digit is an
/// incomplete integer part waiting for the fraction in the next token
/// (`1 1/2SM`); the combiner performs the join.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct VisibilityGroup {
    pub visibility: Distance,
    pub direction: Direction,
    pub incomplete_integer: bool,
}

impl VisibilityGroup {
    pub fn parse(token: &str, part: ReportPart) -> Option<VisibilityGroup> {
        if part != ReportPart::Metar && part != ReportPart::Taf {
            return None;
        }
        // A single digit is the integer part of a mixed miles value
        if token.len() == 1 && token.as_bytes()[0].is_ascii_digit() {
            let value = (token.as_bytes()[0] - b'0') as u32;
            return Some(VisibilityGroup {
                visibility: Distance::of(value, DistanceUnit::StatuteMiles),
                direction: Direction::Omitted,
                incomplete_integer: true,
            });
        }
        // Visibility in meters with an optional direction suffix
        if let Some(cap) = regex!(r"^(\d{4}|////)([NSWE][WED]?V?)?$").captures(token) {
            let visibility = Distance::from_meters(cap.get(1)?.as_str())?;
            let direction =
                Direction::from_cardinal_token(cap.get(2).map_or("", |m| m.as_str()))?;
            return Some(VisibilityGroup {
                visibility,
                direction,
                incomplete_integer: false,
            });
        }
        // Visibility in statute miles
        let visibility = Distance::from_miles(token)?;
        Some(VisibilityGroup {
            visibility,
            direction: Direction::Omitted,
            incomplete_integer: false,
        })
    }

    pub(crate) fn combine<'i>(&self, next: &Group<'i>) -> Option<Group<'i>> {
        let Group::Visibility(next) = next else {
            return None;
        };
        if self.visibility.unit != DistanceUnit::StatuteMiles
            || next.visibility.unit != DistanceUnit::StatuteMiles
        {
            return None;
        }
        if self.incomplete_integer && next.visibility.is_fraction() {
            let joined = Distance::from_integer_and_fraction(self.visibility, next.visibility)?;
            return Some(Group::Visibility(VisibilityGroup {
                visibility: joined,
                incomplete_integer: false,
                ..*self
            }));
        }
        None
    }

    /// Prevailing visibility: no direction given, or explicitly reported
    /// as having no directional variation.
    pub fn is_prevailing(&self) -> bool {
        self.direction == Direction::Omitted
            || self.direction == Direction::NoDirectionalVariation
    }

    pub fn is_directional(&self) -> bool {
        !self.is_prevailing()
    }

    pub fn is_valid(&self) -> bool {
        !self.incomplete_integer && self.visibility.is_valid() && self.direction.is_valid()
    }
}
