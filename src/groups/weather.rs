use crate::regex;
use serde::Serialize;

use crate::groups::ReportPart;

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WeatherQualifier {
    #[default]
    None,
    Recent,
    Vicinity,
    Light,
    Moderate,
    Heavy,
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WeatherDescriptor {
    #[default]
    None,
    Shallow,
    Partial,
    Patches,
    LowDrifting,
    Blowing,
    Showers,
    Thunderstorm,
    Freezing,
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phenomenon {
    NotReported,
    Drizzle,
    Rain,
    Snow,
    SnowGrains,
    IceCrystals,
    IcePellets,
    Hail,
    SmallHail,
    Undetermined,
    Mist,
    Fog,
    Smoke,
    VolcanicAsh,
    Dust,
    Sand,
    Haze,
    Spray,
    DustWhirls,
    Squalls,
    FunnelCloud,
    Sandstorm,
    Duststorm,
}

const MAX_PHENOMENA: usize = 8;

/// Present, recent or vicinity weather: an optional qualifier, an optional
/// descriptor, and a run of two-letter phenomena codes.
#[derive(Serialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct WeatherGroup {
    pub qualifier: WeatherQualifier,
    pub descriptor: WeatherDescriptor,
    pub phenomena: Vec<Phenomenon>,
}

impl WeatherGroup {
    pub fn parse(token: &str, part: ReportPart) -> Option<WeatherGroup> {
        if part != ReportPart::Metar && part != ReportPart::Taf {
            return None;
        }
        if part == ReportPart::Metar {
            if token == "RE//" {
                return Some(WeatherGroup {
                    qualifier: WeatherQualifier::Recent,
                    phenomena: vec![Phenomenon::NotReported],
                    ..WeatherGroup::default()
                });
            }
            if token == "//" {
                return Some(WeatherGroup {
                    phenomena: vec![Phenomenon::NotReported],
                    ..WeatherGroup::default()
                });
            }
        }
        if token.is_empty() {
            return None;
        }
        let cap = regex!(r"^(RE|[+-]|VC)?(MI|PR|BC|DR|BL|SH|TS|FZ)?((?:[A-Z][A-Z])*)$")
            .captures(token)?;
        let qualifier = Self::qualifier_from_str(cap.get(1).map_or("", |m| m.as_str()))?;
        let descriptor = Self::descriptor_from_str(cap.get(2).map_or("", |m| m.as_str()))?;
        let mut phenomena = Vec::new();
        let codes = cap.get(3).map_or("", |m| m.as_str());
        for i in (0..codes.len()).step_by(2) {
            let phenomenon = Self::phenomenon_from_str(&codes[i..i + 2])?;
            if phenomena.len() >= MAX_PHENOMENA {
                return None;
            }
            phenomena.push(phenomenon);
        }
        let mut result = WeatherGroup {
            qualifier,
            descriptor,
            phenomena,
        };
        if result.qualifier == WeatherQualifier::None && result.implies_moderate() {
            result.qualifier = WeatherQualifier::Moderate;
        }
        Some(result)
    }

    /// Precipitation reported without an intensity sign is moderate by
    /// definition; drifting or blowing snow is not precipitation.
    fn implies_moderate(&self) -> bool {
        for phenomenon in &self.phenomena {
            match phenomenon {
                Phenomenon::Drizzle
                | Phenomenon::Rain
                | Phenomenon::SnowGrains
                | Phenomenon::IcePellets
                | Phenomenon::Undetermined => return true,
                Phenomenon::Snow => {
                    if self.descriptor != WeatherDescriptor::LowDrifting
                        && self.descriptor != WeatherDescriptor::Blowing
                    {
                        return true;
                    }
                }
                _ => {}
            }
        }
        false
    }

    pub fn is_valid(&self) -> bool {
        true
    }

    fn qualifier_from_str(s: &str) -> Option<WeatherQualifier> {
        match s {
            "" => Some(WeatherQualifier::None),
            "RE" => Some(WeatherQualifier::Recent),
            "-" => Some(WeatherQualifier::Light),
            "+" => Some(WeatherQualifier::Heavy),
            "VC" => Some(WeatherQualifier::Vicinity),
            _ => None,
        }
    }

    fn descriptor_from_str(s: &str) -> Option<WeatherDescriptor> {
        match s {
            "" => Some(WeatherDescriptor::None),
            "MI" => Some(WeatherDescriptor::Shallow),
            "PR" => Some(WeatherDescriptor::Partial),
            "BC" => Some(WeatherDescriptor::Patches),
            "DR" => Some(WeatherDescriptor::LowDrifting),
            "BL" => Some(WeatherDescriptor::Blowing),
            "SH" => Some(WeatherDescriptor::Showers),
            "TS" => Some(WeatherDescriptor::Thunderstorm),
            "FZ" => Some(WeatherDescriptor::Freezing),
            _ => None,
        }
    }

    fn phenomenon_from_str(s: &str) -> Option<Phenomenon> {
        match s {
            "DZ" => Some(Phenomenon::Drizzle),
            "RA" => Some(Phenomenon::Rain),
            "SN" => Some(Phenomenon::Snow),
            "SG" => Some(Phenomenon::SnowGrains),
            "IC" => Some(Phenomenon::IceCrystals),
            "PL" => Some(Phenomenon::IcePellets),
            "GR" => Some(Phenomenon::Hail),
            "GS" => Some(Phenomenon::SmallHail),
            "UP" => Some(Phenomenon::Undetermined),
            "BR" => Some(Phenomenon::Mist),
            "FG" => Some(Phenomenon::Fog),
            "FU" => Some(Phenomenon::Smoke),
            "VA" => Some(Phenomenon::VolcanicAsh),
            "DU" => Some(Phenomenon::Dust),
            "SA" => Some(Phenomenon::Sand),
            "HZ" => Some(Phenomenon::Haze),
            "PY" => Some(Phenomenon::Spray),
            "PO" => Some(Phenomenon::DustWhirls),
            "SQ" => Some(Phenomenon::Squalls),
            "FC" => Some(Phenomenon::FunnelCloud),
            "SS" => Some(Phenomenon::Sandstorm),
            "DS" => Some(Phenomenon::Duststorm),
            _ => None,
        }
    }
}

#[cfg(test)]
mod check {
    use super::*;

    #[test]
    fn qualified_precipitation() {
        let light = WeatherGroup::parse("-SHRASN", ReportPart::Taf).unwrap();
        assert_eq!(light.qualifier, WeatherQualifier::Light);
        assert_eq!(light.descriptor, WeatherDescriptor::Showers);
        assert_eq!(light.phenomena, vec![Phenomenon::Rain, Phenomenon::Snow]);

        let heavy = WeatherGroup::parse("+TSRA", ReportPart::Metar).unwrap();
        assert_eq!(heavy.qualifier, WeatherQualifier::Heavy);
        assert_eq!(heavy.descriptor, WeatherDescriptor::Thunderstorm);
    }

    #[test]
    fn moderate_promotion() {
        let rain = WeatherGroup::parse("RA", ReportPart::Metar).unwrap();
        assert_eq!(rain.qualifier, WeatherQualifier::Moderate);

        let snow = WeatherGroup::parse("SN", ReportPart::Metar).unwrap();
        assert_eq!(snow.qualifier, WeatherQualifier::Moderate);

        // Drifting snow is not falling precipitation
        let drifting = WeatherGroup::parse("DRSN", ReportPart::Metar).unwrap();
        assert_eq!(drifting.qualifier, WeatherQualifier::None);
        let blowing = WeatherGroup::parse("BLSN", ReportPart::Metar).unwrap();
        assert_eq!(blowing.qualifier, WeatherQualifier::None);

        // Obstructions to visibility stay unqualified
        let mist = WeatherGroup::parse("BR", ReportPart::Metar).unwrap();
        assert_eq!(mist.qualifier, WeatherQualifier::None);
    }

    #[test]
    fn vicinity_and_recent() {
        let vc = WeatherGroup::parse("VCSH", ReportPart::Metar).unwrap();
        assert_eq!(vc.qualifier, WeatherQualifier::Vicinity);
        assert_eq!(vc.descriptor, WeatherDescriptor::Showers);
        assert!(vc.phenomena.is_empty());

        let re = WeatherGroup::parse("RETSRA", ReportPart::Metar).unwrap();
        assert_eq!(re.qualifier, WeatherQualifier::Recent);
        assert_eq!(re.descriptor, WeatherDescriptor::Thunderstorm);
        assert_eq!(re.phenomena, vec![Phenomenon::Rain]);
    }

    #[test]
    fn not_reported_markers() {
        let nr = WeatherGroup::parse("//", ReportPart::Metar).unwrap();
        assert_eq!(nr.phenomena, vec![Phenomenon::NotReported]);
        let recent = WeatherGroup::parse("RE//", ReportPart::Metar).unwrap();
        assert_eq!(recent.qualifier, WeatherQualifier::Recent);
        // Only a METAR reports these
        assert_eq!(WeatherGroup::parse("//", ReportPart::Taf), None);
    }

    #[test]
    fn freezing_fog_and_friends() {
        let fzfg = WeatherGroup::parse("FZFG", ReportPart::Metar).unwrap();
        assert_eq!(fzfg.descriptor, WeatherDescriptor::Freezing);
        assert_eq!(fzfg.phenomena, vec![Phenomenon::Fog]);

        let mifg = WeatherGroup::parse("MIFG", ReportPart::Metar).unwrap();
        assert_eq!(mifg.descriptor, WeatherDescriptor::Shallow);
    }

    #[test]
    fn unknown_codes_decline() {
        assert_eq!(WeatherGroup::parse("XX", ReportPart::Metar), None);
        assert_eq!(WeatherGroup::parse("RAX", ReportPart::Metar), None);
        assert_eq!(WeatherGroup::parse("RA", ReportPart::Header), None);
    }
}
