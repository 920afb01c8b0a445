// Group types for METAR and TAF reports, one recognizer per group kind.

use serde::Serialize;

mod cloud;
mod colour;
mod issue_time;
mod keyword;
mod pressure;
mod rainfall;
mod runway_state;
mod sea;
mod shear;
mod station;
mod temperature;
mod trend;
mod visibility;
mod visual_range;
mod weather;
mod wind;

// Re-export all public symbols
pub use cloud::*;
pub use colour::*;
pub use issue_time::*;
pub use keyword::*;
pub use pressure::*;
pub use rainfall::*;
pub use runway_state::*;
pub use sea::*;
pub use shear::*;
pub use station::*;
pub use temperature::*;
pub use trend::*;
pub use visibility::*;
pub use visual_range::*;
pub use weather::*;
pub use wind::*;

/// Which section of the report is currently being parsed. Recognition is
/// gated on this: most groups are only legal in particular sections.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportPart {
    Unknown,
    Header,
    Metar,
    Taf,
    Remarks,
}

/// The coarse syntactic category the state machine transitions on. Most
/// groups fall into `Other`; only the header and structure words matter
/// for report-level syntax.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyntaxCategory {
    Other,
    Metar,
    Speci,
    Taf,
    Cor,
    Amd,
    Location,
    ReportTime,
    TimeSpan,
    Nil,
    Cnl,
    Remark,
    Maintenance,
}

/// The fallback group: a token no recognizer claimed, kept verbatim.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Text<'i>(pub &'i str);

impl<'i> Text<'i> {
    pub fn is_valid(&self) -> bool {
        !self.0.is_empty()
    }
}

/// One recognized group of a METAR or TAF report.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub enum Group<'i> {
    Text(Text<'i>),
    Keyword(Keyword),
    Station(Station<'i>),
    IssueTime(IssueTime),
    Trend(TrendGroup),
    Wind(WindGroup),
    Visibility(VisibilityGroup),
    Cloud(CloudGroup),
    Weather(WeatherGroup),
    Temperature(TemperatureGroup),
    TemperatureForecast(TemperatureForecastGroup),
    Pressure(PressureGroup),
    VisualRange(VisualRangeGroup),
    RunwayState(RunwayStateGroup),
    WindShear(WindShearGroup),
    Rainfall(RainfallGroup),
    SeaSurface(SeaSurfaceGroup),
    ColourCode(ColourCodeGroup),
}

impl<'i> Group<'i> {
    /// Try every recognizer in a fixed order; the first that claims the
    /// token wins, and a token nobody claims becomes plain text.
    pub fn parse(token: &'i str, part: ReportPart) -> Group<'i> {
        if let Some(g) = Keyword::parse(token, part) {
            return Group::Keyword(g);
        }
        if let Some(g) = Station::parse(token, part) {
            return Group::Station(g);
        }
        if let Some(g) = IssueTime::parse(token, part) {
            return Group::IssueTime(g);
        }
        if let Some(g) = TrendGroup::parse(token, part) {
            return Group::Trend(g);
        }
        if let Some(g) = WindGroup::parse(token, part) {
            return Group::Wind(g);
        }
        if let Some(g) = VisibilityGroup::parse(token, part) {
            return Group::Visibility(g);
        }
        if let Some(g) = CloudGroup::parse(token, part) {
            return Group::Cloud(g);
        }
        if let Some(g) = WeatherGroup::parse(token, part) {
            return Group::Weather(g);
        }
        if let Some(g) = TemperatureGroup::parse(token, part) {
            return Group::Temperature(g);
        }
        if let Some(g) = TemperatureForecastGroup::parse(token, part) {
            return Group::TemperatureForecast(g);
        }
        if let Some(g) = PressureGroup::parse(token, part) {
            return Group::Pressure(g);
        }
        if let Some(g) = VisualRangeGroup::parse(token, part) {
            return Group::VisualRange(g);
        }
        if let Some(g) = RunwayStateGroup::parse(token, part) {
            return Group::RunwayState(g);
        }
        if let Some(g) = WindShearGroup::parse(token, part) {
            return Group::WindShear(g);
        }
        if let Some(g) = RainfallGroup::parse(token, part) {
            return Group::Rainfall(g);
        }
        if let Some(g) = SeaSurfaceGroup::parse(token, part) {
            return Group::SeaSurface(g);
        }
        if let Some(g) = ColourCodeGroup::parse(token, part) {
            return Group::ColourCode(g);
        }
        Group::Text(Text(token))
    }

    /// Offer the next accepted group to this one. Only a few pairs fuse:
    /// trend fragments, surface wind plus variable sector, incomplete
    /// visibility plus fraction, and low-level wind shear plus its
    /// runway locator tokens.
    pub fn combine(&self, next: &Group<'i>) -> Option<Group<'i>> {
        match self {
            Group::Trend(g) => g.combine(next),
            Group::Wind(g) => g.combine(next),
            Group::Visibility(g) => g.combine(next),
            Group::WindShear(g) => g.combine(next),
            _ => None,
        }
    }

    pub fn category(&self) -> SyntaxCategory {
        match self {
            Group::Keyword(keyword) => match keyword {
                Keyword::Metar => SyntaxCategory::Metar,
                Keyword::Speci => SyntaxCategory::Speci,
                Keyword::Taf => SyntaxCategory::Taf,
                Keyword::Cor => SyntaxCategory::Cor,
                Keyword::Amd => SyntaxCategory::Amd,
                Keyword::Nil => SyntaxCategory::Nil,
                Keyword::Cnl => SyntaxCategory::Cnl,
                Keyword::Rmk => SyntaxCategory::Remark,
                Keyword::Maintenance => SyntaxCategory::Maintenance,
                _ => SyntaxCategory::Other,
            },
            Group::Station(_) => SyntaxCategory::Location,
            Group::IssueTime(_) => SyntaxCategory::ReportTime,
            Group::Trend(trend) if trend.is_time_span() => SyntaxCategory::TimeSpan,
            _ => SyntaxCategory::Other,
        }
    }

    /// Whether the group is semantically consistent. Shape problems never
    /// get this far; this flags things like a gust below the wind speed.
    pub fn is_valid(&self) -> bool {
        match self {
            Group::Text(g) => g.is_valid(),
            Group::Keyword(_) => true,
            Group::Station(_) => true,
            Group::IssueTime(g) => g.is_valid(),
            Group::Trend(g) => g.is_valid(),
            Group::Wind(g) => g.is_valid(),
            Group::Visibility(g) => g.is_valid(),
            Group::Cloud(g) => g.is_valid(),
            Group::Weather(g) => g.is_valid(),
            Group::Temperature(g) => g.is_valid(),
            Group::TemperatureForecast(g) => g.is_valid(),
            Group::Pressure(g) => g.is_valid(),
            Group::VisualRange(g) => g.is_valid(),
            Group::RunwayState(g) => g.is_valid(),
            Group::WindShear(g) => g.is_valid(),
            Group::Rainfall(g) => g.is_valid(),
            Group::SeaSurface(g) => g.is_valid(),
            Group::ColourCode(g) => g.is_valid(),
        }
    }
}

#[cfg(test)]
mod check {
    use super::*;

    #[test]
    fn recognizer_order_keyword_first() {
        // METAR is a keyword in the header, not a location
        let g = Group::parse("METAR", ReportPart::Header);
        assert_eq!(g, Group::Keyword(Keyword::Metar));
        // but SPECI-like four letter words fall to location
        let g = Group::parse("KABQ", ReportPart::Header);
        assert_eq!(g, Group::Station(Station("KABQ")));
    }

    #[test]
    fn fallback_is_verbatim_text() {
        let g = Group::parse("BOGUS?!", ReportPart::Metar);
        assert_eq!(g, Group::Text(Text("BOGUS?!")));
        // Section gating sends out-of-place groups to text as well
        let g = Group::parse("SLP982", ReportPart::Metar);
        assert_eq!(g, Group::Text(Text("SLP982")));
    }

    #[test]
    fn categories() {
        assert_eq!(
            Group::parse("METAR", ReportPart::Header).category(),
            SyntaxCategory::Metar
        );
        assert_eq!(
            Group::parse("092052Z", ReportPart::Header).category(),
            SyntaxCategory::ReportTime
        );
        assert_eq!(
            Group::parse("0609/0715", ReportPart::Header).category(),
            SyntaxCategory::TimeSpan
        );
        assert_eq!(
            Group::parse("$", ReportPart::Remarks).category(),
            SyntaxCategory::Maintenance
        );
        assert_eq!(
            Group::parse("23004KT", ReportPart::Metar).category(),
            SyntaxCategory::Other
        );
        // A bare BECMG is a trend but not a time span
        assert_eq!(
            Group::parse("BECMG", ReportPart::Taf).category(),
            SyntaxCategory::Other
        );
    }

    #[test]
    fn only_listed_pairs_combine() {
        let wind = Group::parse("23004KT", ReportPart::Metar);
        let cloud = Group::parse("FEW080", ReportPart::Metar);
        assert_eq!(wind.combine(&cloud), None);
        assert_eq!(cloud.combine(&wind), None);

        let text = Group::parse("BOGUS", ReportPart::Metar);
        assert_eq!(text.combine(&wind), None);
    }
}
