use serde::Serialize;

use crate::groups::{Group, ReportPart};
use crate::language::Runway;

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ShearStage {
    /// A bare `WS` token: the runway locator is still to come.
    #[default]
    AwaitingRunway,
    /// `WS ALL` seen: only `RWY` may follow.
    AwaitingRwy,
    Complete,
}

/// Low-level wind shear along the landing or take-off path. The group is
/// assembled from plain-text tokens by the combiner: `WS ALL RWY` or
/// `WS Rdd[LCR]`.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WindShearGroup {
    pub runway: Runway,
    pub stage: ShearStage,
}

impl WindShearGroup {
    pub fn parse(token: &str, part: ReportPart) -> Option<WindShearGroup> {
        if part != ReportPart::Metar {
            return None;
        }
        if token == "WS" {
            return Some(WindShearGroup::default());
        }
        None
    }

    pub(crate) fn combine<'i>(&self, next: &Group<'i>) -> Option<Group<'i>> {
        let Group::Text(text) = next else {
            return None;
        };
        match self.stage {
            ShearStage::Complete => None,
            ShearStage::AwaitingRunway => {
                if text.0 == "ALL" {
                    return Some(Group::WindShear(WindShearGroup {
                        stage: ShearStage::AwaitingRwy,
                        ..*self
                    }));
                }
                let runway = Runway::from_token(text.0, true)?;
                Some(Group::WindShear(WindShearGroup {
                    runway,
                    stage: ShearStage::Complete,
                }))
            }
            ShearStage::AwaitingRwy => {
                if text.0 == "RWY" {
                    return Some(Group::WindShear(WindShearGroup {
                        runway: Runway::all_runways(),
                        stage: ShearStage::Complete,
                    }));
                }
                None
            }
        }
    }

    pub fn is_valid(&self) -> bool {
        self.runway.is_valid() && self.stage == ShearStage::Complete
    }
}
