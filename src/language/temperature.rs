use serde::Serialize;

use crate::language::digits;

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemperatureUnit {
    Celsius,
    Fahrenheit,
}

/// A temperature in whole degrees Celsius. The `freezing` flag records the
/// wire distinction between `M00` (slightly below zero) and `00` (slightly
/// above zero); for any other magnitude it simply mirrors the sign.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Temperature {
    pub degrees: Option<i32>,
    pub freezing: bool,
}

impl Temperature {
    /// Parse `dd`, `Mdd` or the not-reported marker `//`.
    pub fn from_token(s: &str) -> Option<Temperature> {
        if s == "//" {
            return Some(Temperature::default());
        }
        match s.len() {
            3 => {
                if !s.starts_with('M') {
                    return None;
                }
                let value = digits(s, 1, 2)?;
                Some(Temperature {
                    degrees: Some(-(value as i32)),
                    freezing: true,
                })
            }
            2 => {
                let value = digits(s, 0, 2)?;
                Some(Temperature {
                    degrees: Some(value as i32),
                    freezing: false,
                })
            }
            _ => None,
        }
    }

    pub fn to_unit(&self, unit: TemperatureUnit) -> Option<f64> {
        let value = self.degrees? as f64;
        match unit {
            TemperatureUnit::Celsius => Some(value),
            TemperatureUnit::Fahrenheit => Some(value * 1.8 + 32.0),
        }
    }
}
