use serde::Serialize;

use crate::language::digits;

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FrictionStatus {
    #[default]
    NotReported,
    CoefficientReported,
    BrakingActionReported,
    /// Value unreliable or unmeasurable.
    Unreliable,
}

/// Braking action bands, see Table 0366 in Manual on Codes (WMO No. 306).
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrakingAction {
    /// Not reported or unreliable.
    None,
    /// Friction coefficient below 0.26.
    Poor,
    /// 0.26 to 0.29.
    MediumPoor,
    /// 0.30 to 0.35.
    Medium,
    /// 0.36 to 0.39.
    MediumGood,
    /// Above 0.39.
    Good,
}

/// Runway surface friction from the two-digit field of a runway state
/// group: either a friction coefficient in hundredths or a coded braking
/// action.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SurfaceFriction {
    pub status: FrictionStatus,
    /// 0 to 100; multiply by 0.01 for the actual coefficient.
    pub coefficient: u32,
}

const MEDIUM_POOR_LOW: u32 = 26;
const MEDIUM_LOW: u32 = 30;
const MEDIUM_GOOD_LOW: u32 = 36;
const GOOD_LOW: u32 = 40;

impl SurfaceFriction {
    pub fn from_token(s: &str) -> Option<SurfaceFriction> {
        if s.len() != 2 {
            return None;
        }
        if s == "//" {
            return Some(SurfaceFriction::default());
        }
        let coded = digits(s, 0, 2)?;
        let sf = match coded {
            91 => SurfaceFriction::braking(0),
            92 => SurfaceFriction::braking(MEDIUM_POOR_LOW),
            93 => SurfaceFriction::braking(MEDIUM_LOW),
            94 => SurfaceFriction::braking(MEDIUM_GOOD_LOW),
            95 => SurfaceFriction::braking(GOOD_LOW),
            96..=98 => return None,
            99 => SurfaceFriction {
                status: FrictionStatus::Unreliable,
                coefficient: 0,
            },
            value => SurfaceFriction {
                status: FrictionStatus::CoefficientReported,
                coefficient: value,
            },
        };
        Some(sf)
    }

    pub fn coefficient(&self) -> Option<f64> {
        match self.status {
            FrictionStatus::NotReported | FrictionStatus::Unreliable => None,
            _ => Some(self.coefficient as f64 * 0.01),
        }
    }

    pub fn braking_action(&self) -> BrakingAction {
        match self.status {
            FrictionStatus::NotReported | FrictionStatus::Unreliable => BrakingAction::None,
            _ => {
                if self.coefficient < MEDIUM_POOR_LOW {
                    BrakingAction::Poor
                } else if self.coefficient < MEDIUM_LOW {
                    BrakingAction::MediumPoor
                } else if self.coefficient < MEDIUM_GOOD_LOW {
                    BrakingAction::Medium
                } else if self.coefficient < GOOD_LOW {
                    BrakingAction::MediumGood
                } else {
                    BrakingAction::Good
                }
            }
        }
    }

    fn braking(low_limit: u32) -> SurfaceFriction {
        SurfaceFriction {
            status: FrictionStatus::BrakingActionReported,
            coefficient: low_limit,
        }
    }
}

#[cfg(test)]
mod check {
    use super::*;

    #[test]
    fn coefficients() {
        let sf = SurfaceFriction::from_token("55").unwrap();
        assert_eq!(sf.status, FrictionStatus::CoefficientReported);
        assert_eq!(sf.coefficient(), Some(0.55));
        assert_eq!(sf.braking_action(), BrakingAction::Good);
    }

    #[test]
    fn coded_braking_actions() {
        assert_eq!(
            SurfaceFriction::from_token("91").unwrap().braking_action(),
            BrakingAction::Poor
        );
        assert_eq!(
            SurfaceFriction::from_token("92").unwrap().braking_action(),
            BrakingAction::MediumPoor
        );
        assert_eq!(
            SurfaceFriction::from_token("93").unwrap().braking_action(),
            BrakingAction::Medium
        );
        assert_eq!(
            SurfaceFriction::from_token("94").unwrap().braking_action(),
            BrakingAction::MediumGood
        );
        assert_eq!(
            SurfaceFriction::from_token("95").unwrap().braking_action(),
            BrakingAction::Good
        );
    }

    #[test]
    fn band_boundaries() {
        for (coded, band) in [
            ("25", BrakingAction::Poor),
            ("26", BrakingAction::MediumPoor),
            ("29", BrakingAction::MediumPoor),
            ("30", BrakingAction::Medium),
            ("35", BrakingAction::Medium),
            ("36", BrakingAction::MediumGood),
            ("39", BrakingAction::MediumGood),
            ("40", BrakingAction::Good),
        ] {
            assert_eq!(
                SurfaceFriction::from_token(coded).unwrap().braking_action(),
                band,
                "code {}",
                coded
            );
        }
    }

    #[test]
    fn reserved_and_unreliable() {
        assert_eq!(SurfaceFriction::from_token("96"), None);
        assert_eq!(SurfaceFriction::from_token("97"), None);
        assert_eq!(SurfaceFriction::from_token("98"), None);

        let unreliable = SurfaceFriction::from_token("99").unwrap();
        assert_eq!(unreliable.status, FrictionStatus::Unreliable);
        assert_eq!(unreliable.coefficient(), None);
        assert_eq!(unreliable.braking_action(), BrakingAction::None);

        let missing = SurfaceFriction::from_token("//").unwrap();
        assert_eq!(missing.status, FrictionStatus::NotReported);
        assert_eq!(missing.coefficient(), None);
    }
}
