use serde::Serialize;

use crate::language::digits;

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WaveHeightKind {
    /// Descriptive state of the sea surface was reported (`Sn`).
    #[default]
    StateOfSurface,
    /// An actual wave height was reported (`Hddd`).
    WaveHeight,
}

/// State of sea surface, see Table 3700 in Manual on Codes (WMO No. 306).
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum StateOfSurface {
    NotReported,
    CalmGlassy,
    CalmRippled,
    Smooth,
    Slight,
    Moderate,
    Rough,
    VeryRough,
    High,
    VeryHigh,
    Phenomenal,
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum WaveHeightUnit {
    Meters,
    Feet,
}

/// Wave height in decimeters. Descriptive state codes store the upper
/// bound of their band so that `state_of_surface` and `wave_height` stay
/// consistent whichever shape was reported.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WaveHeight {
    pub kind: WaveHeightKind,
    pub decimeters: Option<u32>,
}

// Band bounds in decimeters.
const MAX_CALM_GLASSY: u32 = 0;
const MAX_CALM_RIPPLED: u32 = 1;
const MAX_SMOOTH: u32 = 5;
const MAX_SLIGHT: u32 = 12;
const MAX_MODERATE: u32 = 25;
const MAX_ROUGH: u32 = 40;
const MAX_VERY_ROUGH: u32 = 60;
const MAX_HIGH: u32 = 90;
const MAX_VERY_HIGH: u32 = 140;
const MIN_PHENOMENAL: u32 = 141;

impl WaveHeight {
    pub fn from_token(s: &str) -> Option<WaveHeight> {
        if s.len() < 2 || s.len() > 4 {
            return None;
        }
        if s == "H///" {
            return Some(WaveHeight {
                kind: WaveHeightKind::WaveHeight,
                decimeters: None,
            });
        }
        if s == "S/" {
            return Some(WaveHeight {
                kind: WaveHeightKind::StateOfSurface,
                decimeters: None,
            });
        }
        if let Some(code) = s.strip_prefix('S') {
            if code.len() != 1 {
                return None;
            }
            let height = Self::height_from_state_char(code.as_bytes()[0])?;
            return Some(WaveHeight {
                kind: WaveHeightKind::StateOfSurface,
                decimeters: Some(height),
            });
        }
        if s.starts_with('H') {
            let height = digits(s, 1, s.len() - 1)?;
            return Some(WaveHeight {
                kind: WaveHeightKind::WaveHeight,
                decimeters: Some(height),
            });
        }
        None
    }

    pub fn is_reported(&self) -> bool {
        self.decimeters.is_some()
    }

    /// Height in meters.
    pub fn wave_height(&self) -> Option<f64> {
        Some(self.decimeters? as f64 * 0.1)
    }

    pub fn to_unit(&self, unit: WaveHeightUnit) -> Option<f64> {
        let meters = self.wave_height()?;
        match unit {
            WaveHeightUnit::Meters => Some(meters),
            WaveHeightUnit::Feet => Some(meters / 0.3048),
        }
    }

    pub fn state_of_surface(&self) -> StateOfSurface {
        let height = match self.decimeters {
            None => return StateOfSurface::NotReported,
            Some(h) => h,
        };
        // Band bounds must stay sorted.
        if height == 0 {
            StateOfSurface::CalmGlassy
        } else if height <= MAX_CALM_RIPPLED {
            StateOfSurface::CalmRippled
        } else if height <= MAX_SMOOTH {
            StateOfSurface::Smooth
        } else if height <= MAX_SLIGHT {
            StateOfSurface::Slight
        } else if height <= MAX_MODERATE {
            StateOfSurface::Moderate
        } else if height <= MAX_ROUGH {
            StateOfSurface::Rough
        } else if height <= MAX_VERY_ROUGH {
            StateOfSurface::VeryRough
        } else if height <= MAX_HIGH {
            StateOfSurface::High
        } else if height <= MAX_VERY_HIGH {
            StateOfSurface::VeryHigh
        } else {
            StateOfSurface::Phenomenal
        }
    }

    fn height_from_state_char(c: u8) -> Option<u32> {
        match c {
            b'0' => Some(MAX_CALM_GLASSY),
            b'1' => Some(MAX_CALM_RIPPLED),
            b'2' => Some(MAX_SMOOTH),
            b'3' => Some(MAX_SLIGHT),
            b'4' => Some(MAX_MODERATE),
            b'5' => Some(MAX_ROUGH),
            b'6' => Some(MAX_VERY_ROUGH),
            b'7' => Some(MAX_HIGH),
            b'8' => Some(MAX_VERY_HIGH),
            b'9' => Some(MIN_PHENOMENAL),
            _ => None,
        }
    }
}
