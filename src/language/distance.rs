use serde::Serialize;

use crate::language::digits;

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DistanceUnit {
    #[default]
    Meters,
    StatuteMiles,
    Feet,
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DistanceModifier {
    #[default]
    None,
    LessThan,
    MoreThan,
}

/// A distance, height or visual range. The value is an optional integer
/// part plus an optional numerator/denominator pair so that mixed values
/// like 1 1/2 statute miles survive intact; nothing reported at all means
/// the wire carried a `////`-style placeholder.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Distance {
    pub modifier: DistanceModifier,
    pub integer: Option<u32>,
    pub numerator: Option<u32>,
    pub denominator: Option<u32>,
    pub unit: DistanceUnit,
}

// Cloud bases and shear heights are reported in hundreds of feet.
const HEIGHT_FACTOR: u32 = 100;

impl Distance {
    pub fn unreported(unit: DistanceUnit) -> Distance {
        Distance {
            unit,
            ..Distance::default()
        }
    }

    pub fn of(value: u32, unit: DistanceUnit) -> Distance {
        Distance {
            integer: Some(value),
            unit,
            ..Distance::default()
        }
    }

    /// Four digits of meters; `9999` means "10 km or more" and `////`
    /// means not reported.
    pub fn from_meters(s: &str) -> Option<Distance> {
        if s.len() != 4 {
            return None;
        }
        if s == "////" {
            return Some(Distance::unreported(DistanceUnit::Meters));
        }
        let value = digits(s, 0, 4)?;
        let mut result = Distance::of(value, DistanceUnit::Meters);
        if value == 9999 {
            result.integer = Some(10_000);
            result.modifier = DistanceModifier::MoreThan;
        }
        Some(result)
    }

    /// Statute miles with the `SM` suffix: an optional P/M modifier, then
    /// an integer or a fraction. Improper fractions like `11/2` denote a
    /// mixed value and are split into 1 1/2.
    pub fn from_miles(s: &str) -> Option<Distance> {
        let body = s.strip_suffix("SM")?;
        if body.is_empty() {
            return None;
        }
        if body == "////" {
            return Some(Distance::unreported(DistanceUnit::StatuteMiles));
        }
        let mut result = Distance::unreported(DistanceUnit::StatuteMiles);
        let mut rest = body;
        if let Some(modifier) = modifier_from_char(body.as_bytes()[0]) {
            result.modifier = modifier;
            rest = &body[1..];
        }
        match rest.find('/') {
            None => {
                if rest.is_empty() || rest.len() > 2 {
                    return None;
                }
                result.integer = Some(digits(rest, 0, rest.len())?);
            }
            Some(slash) => {
                let num = &rest[..slash];
                let den = &rest[slash + 1..];
                if num.is_empty() || num.len() > 2 || den.is_empty() || den.len() > 2 {
                    return None;
                }
                let num = digits(num, 0, num.len())?;
                let den = digits(den, 0, den.len())?;
                result.numerator = Some(num);
                result.denominator = Some(den);
                if num >= den {
                    result.integer = Some(num / 10);
                    result.numerator = Some(num % 10);
                }
            }
        }
        Some(result)
    }

    /// Three digits of hundreds of feet, or `///` when not reported.
    pub fn from_height(s: &str) -> Option<Distance> {
        if s.len() != 3 {
            return None;
        }
        if s == "///" {
            return Some(Distance::unreported(DistanceUnit::Feet));
        }
        let value = digits(s, 0, 3)?;
        Some(Distance::of(value * HEIGHT_FACTOR, DistanceUnit::Feet))
    }

    /// Four digits of visual range with an optional P/M modifier; the unit
    /// is meters unless the enclosing group carries an `FT` marker.
    pub fn from_rvr(s: &str, unit_feet: bool) -> Option<Distance> {
        let unit = if unit_feet {
            DistanceUnit::Feet
        } else {
            DistanceUnit::Meters
        };
        match s.len() {
            4 => {
                if s == "////" {
                    return Some(Distance::unreported(unit));
                }
                Some(Distance::of(digits(s, 0, 4)?, unit))
            }
            5 => {
                let modifier = modifier_from_char(s.as_bytes()[0])?;
                let mut result = Distance::of(digits(s, 1, 4)?, unit);
                result.modifier = modifier;
                Some(result)
            }
            _ => None,
        }
    }

    /// Join an integer-only distance with a fraction-only distance of the
    /// same unit into one mixed value; used when a report splits a value
    /// like `1 1/2SM` across two tokens.
    pub fn from_integer_and_fraction(integer: Distance, fraction: Distance) -> Option<Distance> {
        if !integer.is_valid()
            || !fraction.is_valid()
            || integer.modifier != DistanceModifier::None
            || fraction.modifier != DistanceModifier::None
            || integer.unit != fraction.unit
            || !integer.is_integer()
            || !fraction.is_fraction()
        {
            return None;
        }
        Some(Distance {
            numerator: fraction.numerator,
            denominator: fraction.denominator,
            ..integer
        })
    }

    pub fn is_integer(&self) -> bool {
        self.integer.is_some() && self.numerator.is_none() && self.denominator.is_none()
    }

    pub fn is_fraction(&self) -> bool {
        self.integer.is_none() && self.numerator.is_some() && self.denominator.is_some()
    }

    pub fn is_reported(&self) -> bool {
        self.integer.is_some() || (self.numerator.is_some() && self.denominator.is_some())
    }

    pub fn has_integer(&self) -> bool {
        self.integer.is_some()
    }

    pub fn has_fraction(&self) -> bool {
        self.numerator.is_some() && self.denominator.is_some()
    }

    pub fn is_valid(&self) -> bool {
        if self.denominator == Some(0) {
            return false;
        }
        if self.numerator == Some(0) {
            return false;
        }
        true
    }

    pub fn to_unit(&self, unit: DistanceUnit) -> Option<f64> {
        if !self.is_reported() {
            return None;
        }
        if self.denominator == Some(0) {
            return None;
        }
        let value = self.integer.unwrap_or(0) as f64
            + self.numerator.unwrap_or(0) as f64 / self.denominator.unwrap_or(1) as f64;
        Some(match (self.unit, unit) {
            (DistanceUnit::Meters, DistanceUnit::Meters) => value,
            (DistanceUnit::Meters, DistanceUnit::StatuteMiles) => value / 1609.347,
            (DistanceUnit::Meters, DistanceUnit::Feet) => value / 0.3048,
            (DistanceUnit::StatuteMiles, DistanceUnit::Meters) => value * 1609.347,
            (DistanceUnit::StatuteMiles, DistanceUnit::StatuteMiles) => value,
            (DistanceUnit::StatuteMiles, DistanceUnit::Feet) => value * 5280.0,
            (DistanceUnit::Feet, DistanceUnit::Meters) => value * 0.3048,
            (DistanceUnit::Feet, DistanceUnit::StatuteMiles) => value / 5280.0,
            (DistanceUnit::Feet, DistanceUnit::Feet) => value,
        })
    }
}

fn modifier_from_char(c: u8) -> Option<DistanceModifier> {
    match c {
        b'M' => Some(DistanceModifier::LessThan),
        b'P' => Some(DistanceModifier::MoreThan),
        _ => None,
    }
}
