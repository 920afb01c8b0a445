use serde::Serialize;

use crate::groups::ReportPart;

/// The closed vocabulary of fixed keywords. Most are only recognized in
/// particular report parts; outside those parts the token falls through to
/// the plain-text group.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Keyword {
    Metar,
    Speci,
    Taf,
    Amd,
    Nil,
    Cnl,
    Cor,
    Auto,
    /// Aerodrome closed due to snow accumulation (`SNOCLO` / `R/SNOCLO`).
    Snoclo,
    Cavok,
    Nsw,
    Rmk,
    Wsconds,
    /// The `$` sign: automated station requires maintenance.
    Maintenance,
    Ao1,
    Ao2,
    Nospeci,
    Presfr,
    Presrr,
    Rvrno,
    Pwino,
    Pno,
    Fzrano,
    Tsno,
    Slpno,
}

impl Keyword {
    pub fn parse(token: &str, part: ReportPart) -> Option<Keyword> {
        if part == ReportPart::Header {
            match token {
                "METAR" => return Some(Keyword::Metar),
                "SPECI" => return Some(Keyword::Speci),
                "TAF" => return Some(Keyword::Taf),
                "AMD" => return Some(Keyword::Amd),
                _ => {}
            }
        }
        if (part == ReportPart::Header || part == ReportPart::Metar) && token == "COR" {
            return Some(Keyword::Cor);
        }
        if part == ReportPart::Header || part == ReportPart::Metar || part == ReportPart::Taf {
            match token {
                "NIL" => return Some(Keyword::Nil),
                "CNL" => return Some(Keyword::Cnl),
                _ => {}
            }
        }
        if part == ReportPart::Metar {
            match token {
                "AUTO" => return Some(Keyword::Auto),
                "SNOCLO" | "R/SNOCLO" => return Some(Keyword::Snoclo),
                _ => {}
            }
        }
        if part == ReportPart::Taf && token == "WSCONDS" {
            return Some(Keyword::Wsconds);
        }
        if part == ReportPart::Metar || part == ReportPart::Taf {
            match token {
                "CAVOK" => return Some(Keyword::Cavok),
                "NSW" => return Some(Keyword::Nsw),
                "RMK" => return Some(Keyword::Rmk),
                _ => {}
            }
        }
        if part == ReportPart::Remarks {
            match token {
                "AO1" => return Some(Keyword::Ao1),
                "AO2" => return Some(Keyword::Ao2),
                "NOSPECI" => return Some(Keyword::Nospeci),
                "PRESFR" => return Some(Keyword::Presfr),
                "PRESRR" => return Some(Keyword::Presrr),
                "RVRNO" => return Some(Keyword::Rvrno),
                "PWINO" => return Some(Keyword::Pwino),
                "PNO" => return Some(Keyword::Pno),
                "FZRANO" => return Some(Keyword::Fzrano),
                "TSNO" => return Some(Keyword::Tsno),
                "SLPNO" => return Some(Keyword::Slpno),
                _ => {}
            }
        }
        // The maintenance indicator is recognized anywhere; the syntax
        // machine decides whether it is legal.
        if token == "$" {
            return Some(Keyword::Maintenance);
        }
        None
    }
}
