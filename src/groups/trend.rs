use crate::regex;
use serde::Serialize;

use crate::groups::{Group, ReportPart};
use crate::language::TimePoint;

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TrendType {
    /// An incomplete trend fragment awaiting combination.
    #[default]
    None,
    Nosig,
    Becmg,
    Tempo,
    Inter,
    From,
    TimeSpan,
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Probability {
    /// No explicit probability; by convention this means 50% or more.
    #[default]
    None,
    Prob30,
    Prob40,
}

/// A trend envelope. On the wire a trend is spread over up to three tokens
/// (probability, type, time); each token parses to a fragment and the
/// combiner fuses consecutive fragments into the final envelope.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TrendGroup {
    pub trend_type: TrendType,
    pub probability: Probability,
    pub from: Option<TimePoint>,
    pub till: Option<TimePoint>,
    pub at: Option<TimePoint>,
}

impl TrendGroup {
    pub fn parse(token: &str, part: ReportPart) -> Option<TrendGroup> {
        if part == ReportPart::Metar || part == ReportPart::Taf {
            match token {
                "BECMG" => return Some(TrendGroup::of_type(TrendType::Becmg)),
                "TEMPO" => return Some(TrendGroup::of_type(TrendType::Tempo)),
                "INTER" => return Some(TrendGroup::of_type(TrendType::Inter)),
                _ => {}
            }
        }
        if part == ReportPart::Taf {
            match token {
                "PROB30" => return Some(TrendGroup::of_probability(Probability::Prob30)),
                "PROB40" => return Some(TrendGroup::of_probability(Probability::Prob40)),
                _ => {}
            }
            if let Some(span) = Self::from_time_span(token) {
                return Some(span);
            }
            if let Some(from) = Self::from_long_fm(token) {
                return Some(from);
            }
        }
        if part == ReportPart::Metar {
            if token == "NOSIG" {
                return Some(TrendGroup::of_type(TrendType::Nosig));
            }
            if let Some(time) = Self::from_trend_time(token) {
                return Some(time);
            }
        }
        if part == ReportPart::Header || part == ReportPart::Taf {
            if let Some(span) = Self::from_time_span(token) {
                return Some(span);
            }
        }
        None
    }

    /// `DDhh/DDhh` validity spans.
    fn from_time_span(s: &str) -> Option<TrendGroup> {
        let cap = regex!(r"^(\d{4})/(\d{4})$").captures(s)?;
        let from = TimePoint::from_ddhh(cap.get(1)?.as_str())?;
        let till = TimePoint::from_ddhh(cap.get(2)?.as_str())?;
        Some(TrendGroup {
            trend_type: TrendType::TimeSpan,
            from: Some(from),
            till: Some(till),
            ..TrendGroup::default()
        })
    }

    /// `FMDDhhmm` groups used by TAF.
    fn from_long_fm(s: &str) -> Option<TrendGroup> {
        if !regex!(r"^FM\d{6}$").is_match(s) {
            return None;
        }
        let time = TimePoint::from_ddhhmm(&s[2..])?;
        Some(TrendGroup {
            trend_type: TrendType::From,
            from: Some(time),
            ..TrendGroup::default()
        })
    }

    /// `FMhhmm`, `TLhhmm` and `AThhmm` anchor times used by METAR trends.
    fn from_trend_time(s: &str) -> Option<TrendGroup> {
        let cap = regex!(r"^([FTA][MLT])(\d{4})$").captures(s)?;
        let time = TimePoint::from_ddhhmm(cap.get(2)?.as_str())?;
        let mut result = TrendGroup::default();
        match cap.get(1)?.as_str() {
            "FM" => result.from = Some(time),
            "TL" => result.till = Some(time),
            "AT" => result.at = Some(time),
            _ => return None,
        }
        Some(result)
    }

    pub(crate) fn combine<'i>(&self, next: &Group<'i>) -> Option<Group<'i>> {
        let Group::Trend(next) = next else {
            return None;
        };
        let mut merged = *self;
        if merged.fuse_probability_and_type(next)
            || merged.fuse_type_and_time(next)
            || merged.fuse_probability_and_span(next)
            || merged.fuse_incomplete_times(next)
        {
            return Some(Group::Trend(merged));
        }
        None
    }

    fn fuse_probability_and_type(&mut self, next: &TrendGroup) -> bool {
        if !self.is_probability_fragment() || !next.is_type_fragment() {
            return false;
        }
        if next.trend_type != TrendType::Tempo && next.trend_type != TrendType::Inter {
            return false;
        }
        self.trend_type = next.trend_type;
        true
    }

    fn fuse_type_and_time(&mut self, next: &TrendGroup) -> bool {
        if self.trend_type != TrendType::Becmg
            && self.trend_type != TrendType::Tempo
            && self.trend_type != TrendType::Inter
        {
            return false;
        }
        if !next.is_time_span() && !next.is_time_fragment() {
            return false;
        }
        if !Self::can_merge_times(self, next) {
            return false;
        }
        self.merge_times(next);
        true
    }

    fn fuse_probability_and_span(&mut self, next: &TrendGroup) -> bool {
        if !self.is_probability_fragment() || !next.is_time_span() {
            return false;
        }
        self.merge_times(next);
        self.trend_type = TrendType::TimeSpan;
        true
    }

    fn fuse_incomplete_times(&mut self, next: &TrendGroup) -> bool {
        if self.trend_type != TrendType::None || self.probability != Probability::None {
            return false;
        }
        if !next.is_time_fragment() {
            return false;
        }
        if !Self::can_merge_times(self, next) {
            return false;
        }
        self.merge_times(next);
        true
    }

    /// A `PROB30`/`PROB40` token on its own: probability reported, nothing
    /// else.
    fn is_probability_fragment(&self) -> bool {
        self.trend_type == TrendType::None
            && self.probability != Probability::None
            && self.from.is_none()
            && self.till.is_none()
            && self.at.is_none()
    }

    /// A bare BECMG / TEMPO / INTER keyword: no probability or time.
    fn is_type_fragment(&self) -> bool {
        matches!(
            self.trend_type,
            TrendType::Becmg | TrendType::Tempo | TrendType::Inter
        ) && self.probability == Probability::None
            && self.from.is_none()
            && self.till.is_none()
            && self.at.is_none()
    }

    /// A bare FM / TL / AT anchor: exactly one of the three times.
    fn is_time_fragment(&self) -> bool {
        if self.trend_type != TrendType::None || self.probability != Probability::None {
            return false;
        }
        match (self.from, self.till, self.at) {
            (Some(_), None, None) | (None, Some(_), None) | (None, None, Some(_)) => true,
            _ => false,
        }
    }

    /// A complete `DDhh/DDhh` span: from and till, nothing else.
    pub fn is_time_span(&self) -> bool {
        self.trend_type == TrendType::TimeSpan
            && self.probability == Probability::None
            && self.from.is_some()
            && self.till.is_some()
            && self.at.is_none()
    }

    fn can_merge_times(a: &TrendGroup, b: &TrendGroup) -> bool {
        // from, till and at may each be given once
        if a.from.is_some() && b.from.is_some() {
            return false;
        }
        if a.till.is_some() && b.till.is_some() {
            return false;
        }
        if a.at.is_some() && b.at.is_some() {
            return false;
        }
        // a precise time excludes a span in either direction
        if a.at.is_some() && (b.from.is_some() || b.till.is_some()) {
            return false;
        }
        if b.at.is_some() && (a.from.is_some() || a.till.is_some()) {
            return false;
        }
        true
    }

    fn merge_times(&mut self, next: &TrendGroup) {
        if self.from.is_none() {
            self.from = next.from;
        }
        if self.till.is_none() {
            self.till = next.till;
        }
        if self.at.is_none() {
            self.at = next.at;
        }
    }

    pub fn is_valid(&self) -> bool {
        if let Some(from) = self.from {
            if !from.is_valid() {
                return false;
            }
        }
        if let Some(till) = self.till {
            if !till.is_valid() {
                return false;
            }
        }
        if let Some(at) = self.at {
            if !at.is_valid() {
                return false;
            }
        }
        // Fragments that never combined are invalid
        self.trend_type != TrendType::None
    }

    fn of_type(trend_type: TrendType) -> TrendGroup {
        TrendGroup {
            trend_type,
            ..TrendGroup::default()
        }
    }

    fn of_probability(probability: Probability) -> TrendGroup {
        TrendGroup {
            probability,
            ..TrendGroup::default()
        }
    }
}
