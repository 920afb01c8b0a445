use serde::Serialize;

use crate::language::digits;

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cardinal {
    /// Not reported, variable, or no corresponding cardinal direction.
    None,
    /// No directional variation.
    Ndv,
    N,
    S,
    W,
    E,
    Nw,
    Ne,
    Sw,
    Se,
    TrueN,
    TrueW,
    TrueS,
    TrueE,
}

/// A direction as reported on the wire. Degree values come from tokens like
/// `230` (always a multiple of ten); cardinal values come from the letter
/// suffixes of directional visibility.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    Omitted,
    NotReported,
    Variable,
    NoDirectionalVariation,
    Degrees(u32),
    CardinalPoint(u32),
}

const MAX_DEGREES: u32 = 360;
const TRUE_NORTH: u32 = 360;
const TRUE_WEST: u32 = 270;
const TRUE_SOUTH: u32 = 180;
const TRUE_EAST: u32 = 90;
const NORTH_WEST: u32 = 315;
const NORTH_EAST: u32 = 45;
const SOUTH_WEST: u32 = 225;
const SOUTH_EAST: u32 = 135;

impl Direction {
    /// Parse the cardinal-letter shape: empty means omitted, `NDV` means no
    /// directional variation, otherwise one of the eight compass points.
    pub fn from_cardinal_token(s: &str) -> Option<Direction> {
        match s {
            "" => Some(Direction::Omitted),
            "NDV" => Some(Direction::NoDirectionalVariation),
            "N" => Some(Direction::CardinalPoint(TRUE_NORTH)),
            "W" => Some(Direction::CardinalPoint(TRUE_WEST)),
            "S" => Some(Direction::CardinalPoint(TRUE_SOUTH)),
            "E" => Some(Direction::CardinalPoint(TRUE_EAST)),
            "NW" => Some(Direction::CardinalPoint(NORTH_WEST)),
            "NE" => Some(Direction::CardinalPoint(NORTH_EAST)),
            "SW" => Some(Direction::CardinalPoint(SOUTH_WEST)),
            "SE" => Some(Direction::CardinalPoint(SOUTH_EAST)),
            _ => None,
        }
    }

    /// Parse the three-character degree shape: `///` not reported, `VRB`
    /// variable, or a multiple of ten ending in `0`.
    pub fn from_degrees_token(s: &str) -> Option<Direction> {
        if s.is_empty() {
            return Some(Direction::Omitted);
        }
        if s.len() != 3 {
            return None;
        }
        if s == "///" {
            return Some(Direction::NotReported);
        }
        if s == "VRB" {
            return Some(Direction::Variable);
        }
        if !s.ends_with('0') {
            return None;
        }
        let value = digits(s, 0, 3)?;
        Some(Direction::Degrees(value))
    }

    pub fn degrees(&self) -> Option<u32> {
        match self {
            Direction::Degrees(d) | Direction::CardinalPoint(d) => Some(*d),
            _ => None,
        }
    }

    pub fn is_value(&self) -> bool {
        matches!(self, Direction::Degrees(_) | Direction::CardinalPoint(_))
    }

    pub fn is_valid(&self) -> bool {
        match self.degrees() {
            Some(d) => d <= MAX_DEGREES,
            None => true,
        }
    }

    /// Map to a compass point using 45-degree sectors, with north covering
    /// the wraparound at 0/360. With `true_directions` set, the four axes
    /// report their "true" variants at exactly 90/180/270/360 degrees.
    pub fn cardinal(&self, true_directions: bool) -> Cardinal {
        let degrees = match self {
            Direction::Omitted | Direction::NotReported | Direction::Variable => {
                return Cardinal::None
            }
            Direction::NoDirectionalVariation => return Cardinal::Ndv,
            Direction::Degrees(d) | Direction::CardinalPoint(d) => *d,
        };
        if true_directions {
            match degrees {
                TRUE_NORTH => return Cardinal::TrueN,
                TRUE_SOUTH => return Cardinal::TrueS,
                TRUE_WEST => return Cardinal::TrueW,
                TRUE_EAST => return Cardinal::TrueE,
                _ => {}
            }
        }
        // Sector bounds must stay sorted.
        let half_sector = 45 / 2;
        if degrees <= half_sector {
            Cardinal::N
        } else if degrees <= NORTH_EAST + half_sector {
            Cardinal::Ne
        } else if degrees <= TRUE_EAST + half_sector {
            Cardinal::E
        } else if degrees <= SOUTH_EAST + half_sector {
            Cardinal::Se
        } else if degrees <= TRUE_SOUTH + half_sector {
            Cardinal::S
        } else if degrees <= SOUTH_WEST + half_sector {
            Cardinal::Sw
        } else if degrees <= TRUE_WEST + half_sector {
            Cardinal::W
        } else if degrees <= NORTH_WEST + half_sector {
            Cardinal::Nw
        } else if degrees <= MAX_DEGREES {
            Cardinal::N
        } else {
            Cardinal::None
        }
    }
}
