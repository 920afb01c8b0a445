use crate::regex;
use serde::Serialize;

use crate::groups::ReportPart;
use crate::language::{Distance, DistanceUnit};

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloudAmount {
    NotReported,
    /// No clouds detected by an automatic station.
    Ncd,
    /// No significant clouds.
    Nsc,
    /// `CLR`: no clouds below 12 000 ft detected.
    Clear,
    /// `SKC`: sky clear as reported by a human observer.
    SkyClear,
    Few,
    Scattered,
    Broken,
    Overcast,
    /// `VV`: sky obscured, the height field is a vertical visibility.
    Obscured,
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConvectiveType {
    NotReported,
    #[default]
    None,
    ToweringCumulus,
    Cumulonimbus,
}

/// One cloud layer, or vertical visibility when the sky is obscured.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct CloudGroup {
    pub amount: CloudAmount,
    base: Distance,
    pub convective: ConvectiveType,
}

impl CloudGroup {
    pub fn parse(token: &str, part: ReportPart) -> Option<CloudGroup> {
        if part != ReportPart::Metar && part != ReportPart::Taf {
            return None;
        }
        match token {
            "NCD" => return Some(CloudGroup::no_layer(CloudAmount::Ncd)),
            "NSC" => return Some(CloudGroup::no_layer(CloudAmount::Nsc)),
            "CLR" => return Some(CloudGroup::no_layer(CloudAmount::Clear)),
            "SKC" => return Some(CloudGroup::no_layer(CloudAmount::SkyClear)),
            _ => {}
        }
        let cap = regex!(r"^([BFOSV][CEKV][CNTW]?|///)(\d{3}|///)([CT][BC]U?|///)?$")
            .captures(token)?;
        let amount = Self::amount_from_str(cap.get(1)?.as_str())?;
        let base = Distance::from_height(cap.get(2)?.as_str())?;
        let convective = Self::type_from_str(cap.get(3).map_or("", |m| m.as_str()))?;
        // Vertical visibility cannot carry a convective type
        if amount == CloudAmount::Obscured && convective != ConvectiveType::None {
            return None;
        }
        Some(CloudGroup {
            amount,
            base,
            convective,
        })
    }

    /// Base height of the layer, in hundreds of feet on the wire.
    pub fn height(&self) -> Distance {
        match self.amount {
            CloudAmount::NotReported
            | CloudAmount::Few
            | CloudAmount::Scattered
            | CloudAmount::Broken
            | CloudAmount::Overcast => self.base,
            _ => Distance::unreported(DistanceUnit::Feet),
        }
    }

    pub fn vertical_visibility(&self) -> Distance {
        if self.amount != CloudAmount::Obscured {
            return Distance::unreported(DistanceUnit::Feet);
        }
        self.base
    }

    pub fn is_vertical_visibility(&self) -> bool {
        self.amount == CloudAmount::Obscured
    }

    pub fn is_no_clouds(&self) -> bool {
        matches!(
            self.amount,
            CloudAmount::Ncd | CloudAmount::Nsc | CloudAmount::Clear | CloudAmount::SkyClear
        )
    }

    pub fn is_cloud_layer(&self) -> bool {
        matches!(
            self.amount,
            CloudAmount::Few | CloudAmount::Scattered | CloudAmount::Broken | CloudAmount::Overcast
        )
    }

    pub fn is_valid(&self) -> bool {
        self.base.is_valid()
    }

    fn no_layer(amount: CloudAmount) -> CloudGroup {
        CloudGroup {
            amount,
            base: Distance::unreported(DistanceUnit::Feet),
            convective: ConvectiveType::None,
        }
    }

    fn amount_from_str(s: &str) -> Option<CloudAmount> {
        match s {
            "FEW" => Some(CloudAmount::Few),
            "SCT" => Some(CloudAmount::Scattered),
            "BKN" => Some(CloudAmount::Broken),
            "OVC" => Some(CloudAmount::Overcast),
            "VV" => Some(CloudAmount::Obscured),
            "///" => Some(CloudAmount::NotReported),
            _ => None,
        }
    }

    fn type_from_str(s: &str) -> Option<ConvectiveType> {
        match s {
            "" => Some(ConvectiveType::None),
            "TCU" => Some(ConvectiveType::ToweringCumulus),
            "CB" => Some(ConvectiveType::Cumulonimbus),
            "///" => Some(ConvectiveType::NotReported),
            _ => None,
        }
    }
}

#[cfg(test)]
mod check {
    use super::*;

    #[test]
    fn layers() {
        let few = CloudGroup::parse("FEW080", ReportPart::Metar).unwrap();
        assert_eq!(few.amount, CloudAmount::Few);
        assert_eq!(few.height().integer, Some(8000));
        assert!(few.is_cloud_layer());
        assert!(few.is_valid());

        let ovc = CloudGroup::parse("OVC003", ReportPart::Taf).unwrap();
        assert_eq!(ovc.amount, CloudAmount::Overcast);
        assert_eq!(ovc.height().integer, Some(300));
    }

    #[test]
    fn convective_types() {
        let tcu = CloudGroup::parse("SCT025TCU", ReportPart::Metar).unwrap();
        assert_eq!(tcu.convective, ConvectiveType::ToweringCumulus);
        let cb = CloudGroup::parse("BKN030CB", ReportPart::Metar).unwrap();
        assert_eq!(cb.convective, ConvectiveType::Cumulonimbus);
        let missing = CloudGroup::parse("BKN030///", ReportPart::Metar).unwrap();
        assert_eq!(missing.convective, ConvectiveType::NotReported);
    }

    #[test]
    fn vertical_visibility() {
        let vv = CloudGroup::parse("VV002", ReportPart::Metar).unwrap();
        assert!(vv.is_vertical_visibility());
        assert_eq!(vv.vertical_visibility().integer, Some(200));
        assert!(!vv.height().is_reported());
        // A convective type on vertical visibility declines
        assert_eq!(CloudGroup::parse("VV002TCU", ReportPart::Metar), None);
    }

    #[test]
    fn sky_clear_keywords() {
        for (token, amount) in [
            ("NCD", CloudAmount::Ncd),
            ("NSC", CloudAmount::Nsc),
            ("CLR", CloudAmount::Clear),
            ("SKC", CloudAmount::SkyClear),
        ] {
            let g = CloudGroup::parse(token, ReportPart::Metar).unwrap();
            assert_eq!(g.amount, amount);
            assert!(g.is_no_clouds());
        }
    }

    #[test]
    fn unreported_fields() {
        let g = CloudGroup::parse("///015", ReportPart::Metar).unwrap();
        assert_eq!(g.amount, CloudAmount::NotReported);
        assert_eq!(g.height().integer, Some(1500));

        let no_height = CloudGroup::parse("BKN///", ReportPart::Metar).unwrap();
        assert!(!no_height.height().is_reported());
    }

    #[test]
    fn shape_and_part_rules() {
        assert_eq!(CloudGroup::parse("FEW080", ReportPart::Header), None);
        assert_eq!(CloudGroup::parse("FEW80", ReportPart::Metar), None);
        assert_eq!(CloudGroup::parse("FOG080", ReportPart::Metar), None);
        assert_eq!(CloudGroup::parse("FEW080XX", ReportPart::Metar), None);
    }
}
