use serde::Serialize;

use crate::groups::ReportPart;

/// NATO colour states, best visibility and cloud base first.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColourCode {
    /// Visibility above 8000 m and no cloud of 3/8 or more below 2500 ft.
    Blue,
    /// Visibility above 5000 m and no cloud of 3/8 or more below 1500 ft.
    White,
    /// Visibility above 3700 m and no cloud of 3/8 or more below 700 ft.
    Green,
    /// Visibility above 2500 m and no cloud of 3/8 or more below 500 ft.
    Yellow1,
    /// Visibility above 1600 m and no cloud of 3/8 or more below 300 ft.
    Yellow2,
    /// Visibility above 800 m and no cloud of 3/8 or more below 200 ft.
    Amber,
    /// Visibility below 800 m or clouds of 3/8 or more below 200 ft.
    Red,
}

/// A colour code summarizing visibility and cloud base, used mostly at
/// military aerodromes. A `BLACK` prefix means the aerodrome is also
/// closed for non-weather reasons.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColourCodeGroup {
    pub code: ColourCode,
    pub black: bool,
}

impl ColourCodeGroup {
    pub fn parse(token: &str, part: ReportPart) -> Option<ColourCodeGroup> {
        if part != ReportPart::Metar {
            return None;
        }
        let (body, black) = match token.strip_prefix("BLACK") {
            Some(rest) => (rest, true),
            None => (token, false),
        };
        let code = match body {
            "BLU" => ColourCode::Blue,
            "WHT" => ColourCode::White,
            "GRN" => ColourCode::Green,
            "YLO1" => ColourCode::Yellow1,
            "YLO2" => ColourCode::Yellow2,
            "AMB" => ColourCode::Amber,
            "RED" => ColourCode::Red,
            _ => return None,
        };
        Some(ColourCodeGroup { code, black })
    }

    pub fn is_valid(&self) -> bool {
        true
    }
}
