use serde::Serialize;

use crate::groups::ReportPart;
use crate::language::Pressure;

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PressureKind {
    /// Observed mean sea level pressure (METAR altimeter or SLP remark).
    ObservedQnh,
    /// Forecast lowest sea level pressure (TAF `QNHddddINS`).
    ForecastLowestQnh,
    /// Observed actual pressure at aerodrome elevation (QFE remark).
    ObservedQfe,
}

/// An atmospheric pressure group. The accepted wire shape depends on the
/// report part: the altimeter in a METAR body, the forecast lowest QNH in
/// a TAF body, SLP and QFE in remarks.
#[derive(Serialize, Debug, Clone, Copy, PartialEq)]
pub struct PressureGroup {
    pub kind: PressureKind,
    pub pressure: Pressure,
}

impl PressureGroup {
    pub fn parse(token: &str, part: ReportPart) -> Option<PressureGroup> {
        match part {
            ReportPart::Metar => {
                let pressure = Pressure::from_altimeter(token)?;
                Some(PressureGroup {
                    kind: PressureKind::ObservedQnh,
                    pressure,
                })
            }
            ReportPart::Taf => {
                let pressure = Pressure::from_forecast(token)?;
                Some(PressureGroup {
                    kind: PressureKind::ForecastLowestQnh,
                    pressure,
                })
            }
            ReportPart::Remarks => {
                if let Some(pressure) = Pressure::from_slp(token) {
                    return Some(PressureGroup {
                        kind: PressureKind::ObservedQnh,
                        pressure,
                    });
                }
                if let Some(pressure) = Pressure::from_qfe(token) {
                    return Some(PressureGroup {
                        kind: PressureKind::ObservedQfe,
                        pressure,
                    });
                }
                None
            }
            _ => None,
        }
    }

    pub fn is_valid(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod check {
    use super::*;
    use crate::language::PressureUnit;

    #[test]
    fn altimeter_in_metar() {
        let q = PressureGroup::parse("Q1020", ReportPart::Metar).unwrap();
        assert_eq!(q.kind, PressureKind::ObservedQnh);
        assert_eq!(q.pressure.value, Some(1020.0));

        let a = PressureGroup::parse("A3005", ReportPart::Metar).unwrap();
        assert_eq!(a.pressure.unit, PressureUnit::InchesHg);
        assert_eq!(a.pressure.value, Some(30.05));

        assert_eq!(PressureGroup::parse("Q1020", ReportPart::Taf), None);
    }

    #[test]
    fn forecast_in_taf() {
        let p = PressureGroup::parse("QNH2979INS", ReportPart::Taf).unwrap();
        assert_eq!(p.kind, PressureKind::ForecastLowestQnh);
        assert_eq!(p.pressure.value, Some(29.79));
        assert_eq!(PressureGroup::parse("QNH2979INS", ReportPart::Metar), None);
    }

    #[test]
    fn remarks_take_slp_and_qfe() {
        let slp = PressureGroup::parse("SLP982", ReportPart::Remarks).unwrap();
        assert_eq!(slp.kind, PressureKind::ObservedQnh);
        assert!((slp.pressure.value.unwrap() - 998.2).abs() < 1e-9);

        let qfe = PressureGroup::parse("QFE761/1015", ReportPart::Remarks).unwrap();
        assert_eq!(qfe.kind, PressureKind::ObservedQfe);
        assert_eq!(qfe.pressure.unit, PressureUnit::MmHg);

        assert_eq!(PressureGroup::parse("SLP982", ReportPart::Metar), None);
        assert_eq!(PressureGroup::parse("QFE761", ReportPart::Taf), None);
    }
}
