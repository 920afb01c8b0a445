use crate::regex;
use serde::Serialize;

use crate::groups::ReportPart;
use crate::language::{Temperature, WaveHeight};

/// Sea surface conditions reported by oil platforms: `Wtt/Sx` with a
/// descriptive state of the surface, or `Wtt/Hxxx` with an actual wave
/// height.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeaSurfaceGroup {
    pub temperature: Temperature,
    pub waves: WaveHeight,
}

impl SeaSurfaceGroup {
    pub fn parse(token: &str, part: ReportPart) -> Option<SeaSurfaceGroup> {
        if part != ReportPart::Metar {
            return None;
        }
        let cap = regex!(r"^W(\d\d|//)/([HS](?:\d\d?\d?|///|/))$").captures(token)?;
        let temperature = Temperature::from_token(cap.get(1)?.as_str())?;
        let waves = WaveHeight::from_token(cap.get(2)?.as_str())?;
        Some(SeaSurfaceGroup { temperature, waves })
    }

    pub fn is_valid(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod check {
    use super::*;
    use crate::language::{StateOfSurface, WaveHeightKind};

    #[test]
    fn state_of_surface() {
        let g = SeaSurfaceGroup::parse("W15/S4", ReportPart::Metar).unwrap();
        assert_eq!(g.temperature.degrees, Some(15));
        assert_eq!(g.waves.kind, WaveHeightKind::StateOfSurface);
        assert_eq!(g.waves.state_of_surface(), StateOfSurface::Moderate);
    }

    #[test]
    fn explicit_wave_height() {
        let g = SeaSurfaceGroup::parse("W17/H23", ReportPart::Metar).unwrap();
        assert_eq!(g.waves.kind, WaveHeightKind::WaveHeight);
        assert_eq!(g.waves.wave_height(), Some(2.3));
    }

    #[test]
    fn not_reported_sides() {
        let g = SeaSurfaceGroup::parse("W///S3", ReportPart::Metar).unwrap();
        assert_eq!(g.temperature.degrees, None);
        let no_waves = SeaSurfaceGroup::parse("W22/H///", ReportPart::Metar).unwrap();
        assert!(!no_waves.waves.is_reported());
        let no_state = SeaSurfaceGroup::parse("W22/S/", ReportPart::Metar).unwrap();
        assert_eq!(no_state.waves.state_of_surface(), StateOfSurface::NotReported);
    }

    #[test]
    fn shape_and_part_rules() {
        assert_eq!(SeaSurfaceGroup::parse("W15/S4", ReportPart::Taf), None);
        assert_eq!(SeaSurfaceGroup::parse("W15/X4", ReportPart::Metar), None);
        assert_eq!(SeaSurfaceGroup::parse("W15S4", ReportPart::Metar), None);
    }
}
