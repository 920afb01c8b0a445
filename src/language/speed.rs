use serde::Serialize;

use crate::language::digits;

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SpeedUnit {
    #[default]
    Knots,
    MetersPerSecond,
    KilometersPerHour,
    MilesPerHour,
}

/// A wind or gust speed. A value is two or three digits on the wire; an
/// empty field or `//` means the speed was not reported.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Speed {
    pub value: Option<u32>,
    pub unit: SpeedUnit,
}

impl Speed {
    pub fn from_token(s: &str, unit: SpeedUnit) -> Option<Speed> {
        if s.is_empty() || s == "//" {
            return Some(Speed { value: None, unit });
        }
        if s.len() != 2 && s.len() != 3 {
            return None;
        }
        if s.len() == 3 && s.starts_with('0') {
            return None;
        }
        let value = digits(s, 0, s.len())?;
        Some(Speed {
            value: Some(value),
            unit,
        })
    }

    /// Units as they appear as wind group suffixes. MPH never appears on
    /// the wire; it exists for conversions only.
    pub fn unit_from_suffix(s: &str) -> Option<SpeedUnit> {
        match s {
            "KT" => Some(SpeedUnit::Knots),
            "MPS" => Some(SpeedUnit::MetersPerSecond),
            "KMH" => Some(SpeedUnit::KilometersPerHour),
            _ => None,
        }
    }

    pub fn to_unit(&self, unit: SpeedUnit) -> Option<f64> {
        let value = self.value? as f64;
        Some(match (self.unit, unit) {
            (SpeedUnit::Knots, SpeedUnit::Knots) => value,
            (SpeedUnit::Knots, SpeedUnit::MetersPerSecond) => value * 0.514444,
            (SpeedUnit::Knots, SpeedUnit::KilometersPerHour) => value * 1.852,
            (SpeedUnit::Knots, SpeedUnit::MilesPerHour) => value * 1.150779,
            (SpeedUnit::MetersPerSecond, SpeedUnit::Knots) => value * 1.943844,
            (SpeedUnit::MetersPerSecond, SpeedUnit::MetersPerSecond) => value,
            (SpeedUnit::MetersPerSecond, SpeedUnit::KilometersPerHour) => value * 3.6,
            (SpeedUnit::MetersPerSecond, SpeedUnit::MilesPerHour) => value * 2.236936,
            (SpeedUnit::KilometersPerHour, SpeedUnit::Knots) => value / 1.852,
            (SpeedUnit::KilometersPerHour, SpeedUnit::MetersPerSecond) => value / 3.6,
            (SpeedUnit::KilometersPerHour, SpeedUnit::KilometersPerHour) => value,
            (SpeedUnit::KilometersPerHour, SpeedUnit::MilesPerHour) => value * 0.621371,
            (SpeedUnit::MilesPerHour, SpeedUnit::Knots) => value * 0.868976,
            (SpeedUnit::MilesPerHour, SpeedUnit::MetersPerSecond) => value * 0.44704,
            (SpeedUnit::MilesPerHour, SpeedUnit::KilometersPerHour) => value * 1.609344,
            (SpeedUnit::MilesPerHour, SpeedUnit::MilesPerHour) => value,
        })
    }
}
