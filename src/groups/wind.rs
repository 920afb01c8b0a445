use crate::regex;
use serde::Serialize;

use crate::groups::{Group, ReportPart};
use crate::language::{Direction, Distance, DistanceUnit, Speed};

/// Surface wind, wind shear aloft (`WSnnn/` prefix) or a variable wind
/// sector. A sector token `dddVddd` parses into a group of its own and is
/// folded into the preceding surface wind by the combiner.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WindGroup {
    pub direction: Direction,
    pub speed: Speed,
    pub gust: Speed,
    pub shear_height: Distance,
    pub sector_begin: Direction,
    pub sector_end: Direction,
}

impl WindGroup {
    pub fn parse(token: &str, part: ReportPart) -> Option<WindGroup> {
        if part != ReportPart::Metar && part != ReportPart::Taf {
            return None;
        }
        let wind = regex!(
            r"^(?:WS(\d{3})/)?(\d\d0|VRB|///)([1-9]?\d\d|//)(?:G([1-9]?\d\d))?([KM][TMP][HS]?)$"
        );
        if let Some(cap) = wind.captures(token) {
            let unit = Speed::unit_from_suffix(cap.get(5)?.as_str())?;
            let direction = Direction::from_degrees_token(cap.get(2)?.as_str())?;
            let speed = Speed::from_token(cap.get(3)?.as_str(), unit)?;
            let gust = Speed::from_token(cap.get(4).map_or("", |m| m.as_str()), unit)?;
            let shear_height = match cap.get(1) {
                Some(m) => Distance::from_height(m.as_str())?,
                None => Distance::unreported(DistanceUnit::Feet),
            };
            return Some(WindGroup {
                direction,
                speed,
                gust,
                shear_height,
                ..WindGroup::default()
            });
        }
        let sector = regex!(r"^(\d\d0)V(\d\d0)$");
        if let Some(cap) = sector.captures(token) {
            let sector_begin = Direction::from_degrees_token(cap.get(1)?.as_str())?;
            let sector_end = Direction::from_degrees_token(cap.get(2)?.as_str())?;
            return Some(WindGroup {
                sector_begin,
                sector_end,
                ..WindGroup::default()
            });
        }
        None
    }

    pub(crate) fn combine<'i>(&self, next: &Group<'i>) -> Option<Group<'i>> {
        let Group::Wind(next) = next else {
            return None;
        };
        if !self.is_surface_wind_group() || !next.is_sector_group() {
            return None;
        }
        Some(Group::Wind(WindGroup {
            sector_begin: next.sector_begin,
            sector_end: next.sector_end,
            ..*self
        }))
    }

    pub fn is_wind_shear(&self) -> bool {
        self.shear_height.is_reported()
    }

    pub fn is_surface_wind(&self) -> bool {
        !self.is_wind_shear()
    }

    pub fn has_variable_sector(&self) -> bool {
        self.is_surface_wind()
            && matches!(self.sector_begin, Direction::Degrees(_))
            && matches!(self.sector_end, Direction::Degrees(_))
    }

    /// Calm wind: direction and speed both reported as zero, nothing else.
    pub fn is_calm(&self) -> bool {
        self.direction == Direction::Degrees(0)
            && self.speed.value == Some(0)
            && self.gust.value.is_none()
            && !self.shear_height.is_reported()
            && self.sector_begin == Direction::Omitted
            && self.sector_end == Direction::Omitted
    }

    pub fn is_valid(&self) -> bool {
        // A reported gust must exceed the wind speed
        if self.speed.value.unwrap_or(0) >= self.gust.value.unwrap_or(u32::MAX) {
            return false;
        }
        // A reported gust cannot be zero
        if self.gust.value == Some(0) {
            return false;
        }
        // A reported wind shear height cannot be zero
        if self.shear_height.integer == Some(0) {
            return false;
        }
        self.direction.is_valid()
            && self.shear_height.is_valid()
            && self.sector_begin.is_valid()
            && self.sector_end.is_valid()
    }

    fn is_surface_wind_group(&self) -> bool {
        self.direction != Direction::Omitted
            && !self.shear_height.is_reported()
            && self.sector_begin == Direction::Omitted
            && self.sector_end == Direction::Omitted
    }

    fn is_sector_group(&self) -> bool {
        self.direction == Direction::Omitted
            && self.speed.value.is_none()
            && self.gust.value.is_none()
            && !self.shear_height.is_reported()
            && matches!(self.sector_begin, Direction::Degrees(_))
            && matches!(self.sector_end, Direction::Degrees(_))
    }
}
