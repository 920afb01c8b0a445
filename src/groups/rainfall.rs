use crate::regex;
use serde::Serialize;

use crate::groups::ReportPart;
use crate::language::Precipitation;

/// Rainfall amounts as reported by Australian stations:
/// `RFxx.x/xxx.x` or `RFxx.x/xxx.x/xxx.x` with the fields holding the
/// last ten minutes, the total since 09:00 local, and the last sixty
/// minutes.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Default)]
pub struct RainfallGroup {
    pub last_10_minutes: Precipitation,
    pub since_9am: Precipitation,
    pub last_60_minutes: Precipitation,
}

impl RainfallGroup {
    pub fn parse(token: &str, part: ReportPart) -> Option<RainfallGroup> {
        if part != ReportPart::Metar {
            return None;
        }
        let cap = regex!(r"^RF(\d\d\.\d|//\./)/(\d\d\d\.\d|///\./)(?:/(\d\d\d\.\d))?$")
            .captures(token)?;
        let last_10_minutes = Precipitation::from_rainfall(cap.get(1)?.as_str())?;
        let since_9am = Precipitation::from_rainfall(cap.get(2)?.as_str())?;
        let last_60_minutes =
            Precipitation::from_rainfall(cap.get(3).map_or("", |m| m.as_str()))?;
        Some(RainfallGroup {
            last_10_minutes,
            since_9am,
            last_60_minutes,
        })
    }

    pub fn is_valid(&self) -> bool {
        true
    }
}
