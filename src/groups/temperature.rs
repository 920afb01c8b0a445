use crate::regex;
use serde::Serialize;

use crate::groups::ReportPart;
use crate::language::{Temperature, TemperatureUnit, TimePoint};

/// Air temperature and dew point, `TT/DD` with either side optionally `//`.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TemperatureGroup {
    pub air: Temperature,
    pub dew_point: Temperature,
}

impl TemperatureGroup {
    pub fn parse(token: &str, part: ReportPart) -> Option<TemperatureGroup> {
        if part != ReportPart::Metar {
            return None;
        }
        let cap = regex!(r"^(M?\d\d|//)/(M?\d\d|//)?$").captures(token)?;
        let air = Temperature::from_token(cap.get(1)?.as_str())?;
        let dew_point = match cap.get(2) {
            Some(m) => Temperature::from_token(m.as_str())?,
            None => Temperature::default(),
        };
        Some(TemperatureGroup { air, dew_point })
    }

    pub fn relative_humidity(&self) -> Option<f64> {
        let temperature = self.air.to_unit(TemperatureUnit::Celsius)?;
        let dew_point = self.dew_point.to_unit(TemperatureUnit::Celsius)?;
        if temperature < dew_point {
            return Some(100.0);
        }
        let saturation = 6.11 * f64::powf(10.0, 7.5 * temperature / (237.7 + temperature));
        let actual = 6.11 * f64::powf(10.0, 7.5 * dew_point / (237.7 + dew_point));
        Some(100.0 * actual / saturation)
    }

    pub fn is_valid(&self) -> bool {
        let (air, dew_point) = match (self.air.degrees, self.dew_point.degrees) {
            (Some(a), Some(d)) => (a, d),
            // Either side missing: nothing to cross-check
            _ => return true,
        };
        // M00 air with 00 dew point would put the dew point above the
        // temperature within the last degree
        if air == 0 && dew_point == 0 && self.air.freezing && !self.dew_point.freezing {
            return false;
        }
        air >= dew_point
    }
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ForecastPoint {
    Minimum,
    Maximum,
}

/// Forecast temperature extreme, `TXdd/DDHHZ` or `TNdd/DDHHZ`.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct TemperatureForecastGroup {
    pub point: ForecastPoint,
    pub temperature: Temperature,
    pub time: TimePoint,
}

impl TemperatureForecastGroup {
    pub fn parse(token: &str, part: ReportPart) -> Option<TemperatureForecastGroup> {
        if part != ReportPart::Taf {
            return None;
        }
        let cap = regex!(r"^(TX|TN)(M?\d\d)/(\d{4})Z$").captures(token)?;
        let point = match cap.get(1)?.as_str() {
            "TX" => ForecastPoint::Maximum,
            "TN" => ForecastPoint::Minimum,
            _ => return None,
        };
        let temperature = Temperature::from_token(cap.get(2)?.as_str())?;
        let time = TimePoint::from_ddhh(cap.get(3)?.as_str())?;
        Some(TemperatureForecastGroup {
            point,
            temperature,
            time,
        })
    }

    pub fn is_valid(&self) -> bool {
        self.time.is_valid()
    }
}

#[cfg(test)]
mod check {
    use super::*;

    #[test]
    fn plain_pairs() {
        let g = TemperatureGroup::parse("29/07", ReportPart::Metar).unwrap();
        assert_eq!(g.air.degrees, Some(29));
        assert_eq!(g.dew_point.degrees, Some(7));
        assert!(g.is_valid());

        let freezing = TemperatureGroup::parse("M04/M05", ReportPart::Metar).unwrap();
        assert_eq!(freezing.air.degrees, Some(-4));
        assert_eq!(freezing.dew_point.degrees, Some(-5));
        assert!(freezing.is_valid());
    }

    #[test]
    fn missing_sides() {
        let no_dew = TemperatureGroup::parse("25/", ReportPart::Metar).unwrap();
        assert_eq!(no_dew.dew_point.degrees, None);
        assert!(no_dew.is_valid());

        // A bare "//" is recognized by the weather group, not here
        let none = TemperatureGroup::parse("//", ReportPart::Metar);
        assert_eq!(none, None);

        let both_missing = TemperatureGroup::parse("///", ReportPart::Metar).unwrap();
        assert_eq!(both_missing.air.degrees, None);
        assert_eq!(both_missing.dew_point.degrees, None);

        let slashes = TemperatureGroup::parse("/////", ReportPart::Metar).unwrap();
        assert_eq!(slashes.air.degrees, None);
        assert_eq!(slashes.dew_point.degrees, None);
    }

    #[test]
    fn dew_point_must_not_exceed_temperature() {
        let inverted = TemperatureGroup::parse("05/06", ReportPart::Metar).unwrap();
        assert!(!inverted.is_valid());

        // M00 temperature with 00 dew point is the one zero-pair that is
        // inconsistent
        let freezing_zero = TemperatureGroup::parse("M00/00", ReportPart::Metar).unwrap();
        assert!(!freezing_zero.is_valid());
        let zero_freezing = TemperatureGroup::parse("00/M00", ReportPart::Metar).unwrap();
        assert!(zero_freezing.is_valid());
    }

    #[test]
    fn humidity() {
        let saturated = TemperatureGroup::parse("15/15", ReportPart::Metar).unwrap();
        let rh = saturated.relative_humidity().unwrap();
        assert!((rh - 100.0).abs() < 0.01);

        let dry = TemperatureGroup::parse("30/05", ReportPart::Metar).unwrap();
        let rh = dry.relative_humidity().unwrap();
        assert!(rh > 18.0 && rh < 25.0);

        let missing = TemperatureGroup::parse("30/", ReportPart::Metar).unwrap();
        assert_eq!(missing.relative_humidity(), None);
    }

    #[test]
    fn part_gating() {
        assert_eq!(TemperatureGroup::parse("29/07", ReportPart::Taf), None);
        assert_eq!(TemperatureGroup::parse("29/07", ReportPart::Remarks), None);
    }

    #[test]
    fn forecast_extremes() {
        let max = TemperatureForecastGroup::parse("TX15/0612Z", ReportPart::Taf).unwrap();
        assert_eq!(max.point, ForecastPoint::Maximum);
        assert_eq!(max.temperature.degrees, Some(15));
        assert_eq!(max.time.day, Some(6));
        assert_eq!(max.time.hour, 12);
        assert!(max.is_valid());

        let min = TemperatureForecastGroup::parse("TNM02/0704Z", ReportPart::Taf).unwrap();
        assert_eq!(min.point, ForecastPoint::Minimum);
        assert_eq!(min.temperature.degrees, Some(-2));

        assert_eq!(
            TemperatureForecastGroup::parse("TX15/0612Z", ReportPart::Metar),
            None
        );
        assert_eq!(
            TemperatureForecastGroup::parse("TX15/612Z", ReportPart::Taf),
            None
        );
    }
}
