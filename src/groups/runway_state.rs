use crate::regex;
use serde::Serialize;

use crate::groups::ReportPart;
use crate::language::{Precipitation, Runway, SurfaceFriction};

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RunwayStateStatus {
    /// Deposits, extent, depth and friction reported as usual.
    #[default]
    Normal,
    /// Deposits ceased to exist: `CLRD` plus surface friction.
    Cleared,
    /// Runway closed due to snow accumulation.
    SnowClosed,
}

/// Deposits type, see Table 0919 in Manual on Codes (WMO No. 306).
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Deposits {
    ClearAndDry,
    Damp,
    WetAndWaterPatches,
    RimeAndFrostCovered,
    DrySnow,
    WetSnow,
    Slush,
    Ice,
    CompactedOrRolledSnow,
    FrozenRutsOrRidges,
    #[default]
    NotReported,
}

/// Extent of runway contamination, see Table 0519 in Manual on Codes (WMO
/// No. 306). The reserved codes parse but flag the group invalid.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Extent {
    None,
    LessThan10Percent,
    From11To25Percent,
    Reserved3,
    Reserved4,
    From26To50Percent,
    Reserved6,
    Reserved7,
    Reserved8,
    MoreThan51Percent,
    #[default]
    NotReported,
}

/// State of the runway surface: deposits, contamination extent, deposit
/// depth and surface friction, or one of the `SNOCLO` / `CLRD` shortcuts.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Default)]
pub struct RunwayStateGroup {
    pub runway: Runway,
    pub status: RunwayStateStatus,
    pub deposits: Deposits,
    pub extent: Extent,
    pub depth: Precipitation,
    pub friction: SurfaceFriction,
}

impl RunwayStateGroup {
    pub fn parse(token: &str, part: ReportPart) -> Option<RunwayStateGroup> {
        if part != ReportPart::Metar {
            return None;
        }
        let cap = regex!(r"^(R\d\d[RCL]?)/(?:(SNOCLO)|(?:(\d|/)(\d|/)(\d\d|//)|(CLRD))(\d\d|//))$")
            .captures(token)?;
        let runway = Runway::from_token(cap.get(1)?.as_str(), false)?;
        if cap.get(2).is_some() {
            return Some(RunwayStateGroup {
                runway,
                status: RunwayStateStatus::SnowClosed,
                ..RunwayStateGroup::default()
            });
        }
        let friction = SurfaceFriction::from_token(cap.get(7)?.as_str())?;
        if cap.get(6).is_some() {
            return Some(RunwayStateGroup {
                runway,
                status: RunwayStateStatus::Cleared,
                friction,
                ..RunwayStateGroup::default()
            });
        }
        let deposits = Self::deposits_from_str(cap.get(3)?.as_str())?;
        let extent = Self::extent_from_str(cap.get(4)?.as_str())?;
        let depth = Precipitation::from_runway_deposits(cap.get(5)?.as_str())?;
        Some(RunwayStateGroup {
            runway,
            status: RunwayStateStatus::Normal,
            deposits,
            extent,
            depth,
            friction,
        })
    }

    pub fn is_valid(&self) -> bool {
        self.runway.is_valid()
            && !matches!(
                self.extent,
                Extent::Reserved3
                    | Extent::Reserved4
                    | Extent::Reserved6
                    | Extent::Reserved7
                    | Extent::Reserved8
            )
    }

    fn deposits_from_str(s: &str) -> Option<Deposits> {
        match s {
            "0" => Some(Deposits::ClearAndDry),
            "1" => Some(Deposits::Damp),
            "2" => Some(Deposits::WetAndWaterPatches),
            "3" => Some(Deposits::RimeAndFrostCovered),
            "4" => Some(Deposits::DrySnow),
            "5" => Some(Deposits::WetSnow),
            "6" => Some(Deposits::Slush),
            "7" => Some(Deposits::Ice),
            "8" => Some(Deposits::CompactedOrRolledSnow),
            "9" => Some(Deposits::FrozenRutsOrRidges),
            "/" => Some(Deposits::NotReported),
            _ => None,
        }
    }

    fn extent_from_str(s: &str) -> Option<Extent> {
        match s {
            "0" => Some(Extent::None),
            "1" => Some(Extent::LessThan10Percent),
            "2" => Some(Extent::From11To25Percent),
            "3" => Some(Extent::Reserved3),
            "4" => Some(Extent::Reserved4),
            "5" => Some(Extent::From26To50Percent),
            "6" => Some(Extent::Reserved6),
            "7" => Some(Extent::Reserved7),
            "8" => Some(Extent::Reserved8),
            "9" => Some(Extent::MoreThan51Percent),
            "/" => Some(Extent::NotReported),
            _ => None,
        }
    }
}
