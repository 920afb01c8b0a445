use serde::Serialize;

use crate::language::digits;

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PrecipitationStatus {
    #[default]
    NotReported,
    Reported,
    RunwayNotOperational,
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrecipitationUnit {
    Millimeters,
    Inches,
}

/// An amount of precipitation or deposit depth, in millimeters. Runway
/// deposit depths use coded sentinels above 90 (see Table 1079, Manual on
/// Codes, WMO No. 306).
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Default)]
pub struct Precipitation {
    pub status: PrecipitationStatus,
    pub millimeters: f64,
}

impl Precipitation {
    /// Rainfall amounts `dd.d` or `ddd.d`; `//./`, `///./` and the empty
    /// field mean not reported.
    pub fn from_rainfall(s: &str) -> Option<Precipitation> {
        if s.is_empty() || s == "///./" || s == "//./" {
            return Some(Precipitation::default());
        }
        if s.len() != 4 && s.len() != 5 {
            return None;
        }
        if s.as_bytes()[s.len() - 2] != b'.' {
            return None;
        }
        let fraction = digits(s, s.len() - 1, 1)?;
        let whole = digits(s, 0, s.len() - 2)?;
        Some(Precipitation {
            status: PrecipitationStatus::Reported,
            millimeters: whole as f64 + 0.1 * fraction as f64,
        })
    }

    /// Two-digit runway deposit depth. 00..90 are millimeters; 92..98 step
    /// through 10..40 cm; 99 means the runway is not operational; 91 is
    /// reserved and fails the parse.
    pub fn from_runway_deposits(s: &str) -> Option<Precipitation> {
        if s.len() != 2 {
            return None;
        }
        if s == "//" {
            return Some(Precipitation::default());
        }
        let coded = digits(s, 0, 2)?;
        let millimeters = match coded {
            91 => return None,
            92 => 100,
            93 => 150,
            94 => 200,
            95 => 250,
            96 => 300,
            97 => 350,
            98 => 400,
            99 => {
                return Some(Precipitation {
                    status: PrecipitationStatus::RunwayNotOperational,
                    millimeters: 0.0,
                })
            }
            value => value,
        };
        Some(Precipitation {
            status: PrecipitationStatus::Reported,
            millimeters: millimeters as f64,
        })
    }

    pub fn amount(&self) -> Option<f64> {
        if self.status != PrecipitationStatus::Reported {
            return None;
        }
        Some(self.millimeters)
    }

    pub fn to_unit(&self, unit: PrecipitationUnit) -> Option<f64> {
        let value = self.amount()?;
        match unit {
            PrecipitationUnit::Millimeters => Some(value),
            PrecipitationUnit::Inches => Some(value / 25.4),
        }
    }
}
