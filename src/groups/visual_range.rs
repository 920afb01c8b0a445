use crate::regex;
use serde::Serialize;

use crate::groups::ReportPart;
use crate::language::{Distance, Runway};

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VisualRangeTrend {
    #[default]
    None,
    NotReported,
    Upward,
    Neutral,
    Downward,
}

/// Runway visual range: `Rdd[LCR]/xxxx` with an optional variable range
/// and an optional trend letter. The unit is meters unless the group ends
/// in `FT`.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisualRangeGroup {
    pub runway: Runway,
    pub range: Distance,
    pub variable_range: Distance,
    pub trend: VisualRangeTrend,
}

impl VisualRangeGroup {
    pub fn parse(token: &str, part: ReportPart) -> Option<VisualRangeGroup> {
        if part != ReportPart::Metar {
            return None;
        }
        let cap = regex!(r"^(R\d\d[RCL]?)/(////|[PM]?\d{4})(?:V([PM]?\d{4}))?(FT/?)?([UND/])?$")
            .captures(token)?;
        let trend = Self::trend_from_str(cap.get(5).map_or("", |m| m.as_str()))?;
        let unit_feet = cap.get(4).is_some();
        let runway = Runway::from_token(cap.get(1)?.as_str(), false)?;
        let range = Distance::from_rvr(cap.get(2)?.as_str(), unit_feet)?;
        let variable_range = match cap.get(3) {
            Some(m) => Distance::from_rvr(m.as_str(), unit_feet)?,
            None => Distance::unreported(range.unit),
        };
        Some(VisualRangeGroup {
            runway,
            range,
            variable_range,
            trend,
        })
    }

    pub fn is_variable(&self) -> bool {
        self.variable_range.is_reported()
    }

    /// The single reported range; unreported when the range is variable.
    pub fn visual_range(&self) -> Distance {
        if self.is_variable() {
            return Distance::unreported(self.range.unit);
        }
        self.range
    }

    /// Lower end of a variable range.
    pub fn min_visual_range(&self) -> Distance {
        if !self.is_variable() {
            return Distance::unreported(self.range.unit);
        }
        self.range
    }

    /// Upper end of a variable range.
    pub fn max_visual_range(&self) -> Distance {
        self.variable_range
    }

    pub fn is_valid(&self) -> bool {
        self.runway.is_valid() && self.range.is_valid() && self.variable_range.is_valid()
    }

    fn trend_from_str(s: &str) -> Option<VisualRangeTrend> {
        match s {
            "" => Some(VisualRangeTrend::None),
            "/" => Some(VisualRangeTrend::NotReported),
            "U" => Some(VisualRangeTrend::Upward),
            "N" => Some(VisualRangeTrend::Neutral),
            "D" => Some(VisualRangeTrend::Downward),
            _ => None,
        }
    }
}
