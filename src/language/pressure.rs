use serde::Serialize;

use crate::language::digits;

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PressureUnit {
    #[default]
    Hectopascal,
    InchesHg,
    MmHg,
}

/// An atmospheric pressure. Four wire encodings feed this type: the Q/A
/// altimeter group, the forecast `QNHddddINS` group, the `SLPppp` sea-level
/// pressure remark, and the `QFEmmm` remark.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Default)]
pub struct Pressure {
    pub value: Option<f64>,
    pub unit: PressureUnit,
}

const HPA_PER_IN_HG: f64 = 33.8639;
const HPA_PER_MM_HG: f64 = 1.3332;
const MM_PER_INCH: f64 = 25.4;

impl Pressure {
    /// `Qdddd` is whole hectopascals, `Adddd` is hundredths of an inch of
    /// mercury; `Q////` and `A////` are not reported.
    pub fn from_altimeter(s: &str) -> Option<Pressure> {
        if s.len() != 5 {
            return None;
        }
        if s == "A////" {
            return Some(Pressure {
                value: None,
                unit: PressureUnit::InchesHg,
            });
        }
        if s == "Q////" {
            return Some(Pressure {
                value: None,
                unit: PressureUnit::Hectopascal,
            });
        }
        let value = digits(s, 1, 4)?;
        match s.as_bytes()[0] {
            b'A' => Some(Pressure {
                value: Some(value as f64 * 0.01),
                unit: PressureUnit::InchesHg,
            }),
            b'Q' => Some(Pressure {
                value: Some(value as f64),
                unit: PressureUnit::Hectopascal,
            }),
            _ => None,
        }
    }

    /// `QNHddddINS`: the lowest forecast sea-level pressure, in hundredths
    /// of an inch of mercury.
    pub fn from_forecast(s: &str) -> Option<Pressure> {
        if s.len() != 10 || !s.starts_with("QNH") || !s.ends_with("INS") {
            return None;
        }
        let value = digits(s, 3, 4)?;
        Some(Pressure {
            value: Some(value as f64 * 0.01),
            unit: PressureUnit::InchesHg,
        })
    }

    /// `SLPppp`: tenths of hectopascals with the thousands implied, e.g.
    /// SLP982 is 998.2 hPa and SLP015 is 1001.5 hPa. Values below 500 are
    /// based at 1000 hPa, the rest at 900 hPa.
    pub fn from_slp(s: &str) -> Option<Pressure> {
        if s.len() != 6 || !s.starts_with("SLP") {
            return None;
        }
        let value = digits(s, 3, 3)?;
        let base = if value < 500 { 1000.0 } else { 900.0 };
        Some(Pressure {
            value: Some(value as f64 * 0.1 + base),
            unit: PressureUnit::Hectopascal,
        })
    }

    /// `QFEmmm` or `QFEmmm/hhhh`: actual pressure at aerodrome elevation in
    /// millimeters of mercury. The hectopascal part after the slash is
    /// checked for shape but its value is not kept.
    pub fn from_qfe(s: &str) -> Option<Pressure> {
        if s.len() != 6 && s.len() != 11 {
            return None;
        }
        if !s.starts_with("QFE") {
            return None;
        }
        let mm_hg = digits(s, 3, 3)?;
        if s.len() == 11 {
            if s.as_bytes()[6] != b'/' {
                return None;
            }
            digits(s, 7, 4)?;
        }
        Some(Pressure {
            value: Some(mm_hg as f64),
            unit: PressureUnit::MmHg,
        })
    }

    pub fn to_unit(&self, unit: PressureUnit) -> Option<f64> {
        let value = self.value?;
        Some(match (self.unit, unit) {
            (PressureUnit::Hectopascal, PressureUnit::Hectopascal) => value,
            (PressureUnit::Hectopascal, PressureUnit::InchesHg) => value / HPA_PER_IN_HG,
            (PressureUnit::Hectopascal, PressureUnit::MmHg) => value / HPA_PER_MM_HG,
            (PressureUnit::InchesHg, PressureUnit::Hectopascal) => value * HPA_PER_IN_HG,
            (PressureUnit::InchesHg, PressureUnit::InchesHg) => value,
            (PressureUnit::InchesHg, PressureUnit::MmHg) => value * MM_PER_INCH,
            (PressureUnit::MmHg, PressureUnit::Hectopascal) => value * HPA_PER_MM_HG,
            (PressureUnit::MmHg, PressureUnit::InchesHg) => value / MM_PER_INCH,
            (PressureUnit::MmHg, PressureUnit::MmHg) => value,
        })
    }
}
