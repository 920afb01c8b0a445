// The report-level syntax state machine.
//
// A METAR or TAF has a rigid header (type word, correction, location,
// issue time, and for a TAF a validity span) followed by a body and
// optional remarks. The machine walks the coarse syntactic category of
// each accepted group, decides which section the next token belongs to,
// and classifies structural errors. When a report starts with a bare
// location the kind stays unknown until the body shape disambiguates
// METAR from TAF; that disambiguation may require re-parsing the current
// token in the body section.

use serde::Serialize;
use std::fmt;

use crate::groups::{ReportPart, SyntaxCategory};

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportKind {
    #[default]
    Unknown,
    Metar,
    Taf,
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportError {
    EmptyReport,
    ExpectedReportTypeOrLocation,
    ExpectedLocation,
    ExpectedReportTime,
    ExpectedTimeSpan,
    UnexpectedReportEnd,
    UnexpectedGroupAfterNil,
    UnexpectedGroupAfterCnl,
    UnexpectedGroupAfterMaintenanceIndicator,
    UnexpectedNilOrCnlInReportBody,
    AmdAllowedInTafOnly,
    CnlAllowedInTafOnly,
    MaintenanceIndicatorAllowedInMetarOnly,
    InternalParserState,
}

impl fmt::Display for ReportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = match self {
            ReportError::EmptyReport => "the report contains no groups",
            ReportError::ExpectedReportTypeOrLocation => {
                "expected a report type word or an ICAO location at the start of the report"
            }
            ReportError::ExpectedLocation => "expected an ICAO location in the report header",
            ReportError::ExpectedReportTime => "expected an issue time in the report header",
            ReportError::ExpectedTimeSpan => "expected a validity time span in the TAF header",
            ReportError::UnexpectedReportEnd => "the report ended inside its header",
            ReportError::UnexpectedGroupAfterNil => "no groups may follow NIL",
            ReportError::UnexpectedGroupAfterCnl => "no groups may follow CNL",
            ReportError::UnexpectedGroupAfterMaintenanceIndicator => {
                "no groups may follow the maintenance indicator"
            }
            ReportError::UnexpectedNilOrCnlInReportBody => {
                "NIL and CNL are only allowed before the report body"
            }
            ReportError::AmdAllowedInTafOnly => "AMD is only used in TAF reports",
            ReportError::CnlAllowedInTafOnly => "CNL is only used in TAF reports",
            ReportError::MaintenanceIndicatorAllowedInMetarOnly => {
                "the maintenance indicator is only used in METAR reports"
            }
            ReportError::InternalParserState => "internal parser state error",
        };
        f.write_str(message)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    ReportTypeOrLocation,
    Correction,
    Location,
    ReportTime,
    TimeSpan,
    BodyBeginMetar,
    BodyBeginMetarRepeatParse,
    BodyMetar,
    BodyBeginTaf,
    BodyTaf,
    RemarkMetar,
    RemarkTaf,
    MaintenanceIndicator,
    Nil,
    Cnl,
    Error,
}

/// Tracks the structural state of the report across tokens.
#[derive(Debug, Clone)]
pub struct SyntaxMachine {
    state: State,
    kind: ReportKind,
    error: Option<ReportError>,
}

impl Default for SyntaxMachine {
    fn default() -> Self {
        Self::new()
    }
}

impl SyntaxMachine {
    pub fn new() -> SyntaxMachine {
        SyntaxMachine {
            state: State::ReportTypeOrLocation,
            kind: ReportKind::Unknown,
            error: None,
        }
    }

    pub fn kind(&self) -> ReportKind {
        self.kind
    }

    pub fn error(&self) -> Option<ReportError> {
        self.error
    }

    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }

    /// The section the next token should be recognized in.
    pub fn report_part(&self) -> ReportPart {
        match self.state {
            State::ReportTypeOrLocation
            | State::Correction
            | State::Location
            | State::ReportTime
            | State::TimeSpan => ReportPart::Header,
            State::BodyBeginMetar | State::BodyBeginMetarRepeatParse | State::BodyMetar => {
                ReportPart::Metar
            }
            State::BodyBeginTaf | State::BodyTaf => ReportPart::Taf,
            State::RemarkMetar | State::RemarkTaf => ReportPart::Remarks,
            State::MaintenanceIndicator | State::Nil | State::Cnl | State::Error => {
                ReportPart::Unknown
            }
        }
    }

    /// Set when a header-ambiguous report just turned out to be a METAR:
    /// the driver must re-run the current token against the body section.
    pub fn is_reparse_required(&self) -> bool {
        self.state == State::BodyBeginMetarRepeatParse
    }

    pub fn transition(&mut self, category: SyntaxCategory) {
        match self.state {
            State::ReportTypeOrLocation => self.from_report_type_or_location(category),
            State::Correction => self.from_correction(category),
            State::Location => {
                if category == SyntaxCategory::Location {
                    self.state = State::ReportTime;
                } else {
                    self.fail(ReportError::ExpectedLocation);
                }
            }
            State::ReportTime => self.from_report_time(category),
            State::TimeSpan => self.from_time_span(category),
            State::BodyBeginMetar | State::BodyBeginMetarRepeatParse => {
                self.from_body_begin_metar(category)
            }
            State::BodyMetar => self.from_body_metar(category),
            State::BodyBeginTaf => self.from_body_begin_taf(category),
            State::BodyTaf => self.from_body_taf(category),
            State::RemarkMetar => {
                if category == SyntaxCategory::Maintenance {
                    self.state = State::MaintenanceIndicator;
                }
            }
            State::RemarkTaf => {
                if category == SyntaxCategory::Maintenance {
                    self.fail(ReportError::MaintenanceIndicatorAllowedInMetarOnly);
                }
            }
            State::MaintenanceIndicator => {
                self.fail(ReportError::UnexpectedGroupAfterMaintenanceIndicator)
            }
            State::Nil => self.fail(ReportError::UnexpectedGroupAfterNil),
            State::Cnl => self.fail(ReportError::UnexpectedGroupAfterCnl),
            State::Error => {}
        }
    }

    /// Input is exhausted: states inside the header become errors, states
    /// at or past the body are accepted.
    pub fn final_transition(&mut self) {
        match self.state {
            State::BodyMetar
            | State::BodyTaf
            | State::RemarkMetar
            | State::RemarkTaf
            | State::MaintenanceIndicator
            | State::Nil
            | State::Cnl
            | State::Error => {}
            State::ReportTypeOrLocation => self.fail(ReportError::EmptyReport),
            State::Correction
            | State::Location
            | State::ReportTime
            | State::TimeSpan
            | State::BodyBeginMetar
            | State::BodyBeginMetarRepeatParse
            | State::BodyBeginTaf => self.fail(ReportError::UnexpectedReportEnd),
        }
    }

    fn fail(&mut self, error: ReportError) {
        self.state = State::Error;
        self.error = Some(error);
    }

    fn from_report_type_or_location(&mut self, category: SyntaxCategory) {
        match category {
            SyntaxCategory::Metar | SyntaxCategory::Speci => {
                self.kind = ReportKind::Metar;
                self.state = State::Correction;
            }
            SyntaxCategory::Taf => {
                self.kind = ReportKind::Taf;
                self.state = State::Correction;
            }
            SyntaxCategory::Location => self.state = State::ReportTime,
            _ => self.fail(ReportError::ExpectedReportTypeOrLocation),
        }
    }

    fn from_correction(&mut self, category: SyntaxCategory) {
        match category {
            SyntaxCategory::Amd => {
                self.state = State::Location;
                if self.kind != ReportKind::Taf {
                    self.fail(ReportError::AmdAllowedInTafOnly);
                }
            }
            SyntaxCategory::Cor => self.state = State::Location,
            SyntaxCategory::Location => self.state = State::ReportTime,
            _ => self.fail(ReportError::ExpectedLocation),
        }
    }

    fn from_report_time(&mut self, category: SyntaxCategory) {
        match category {
            SyntaxCategory::ReportTime => {
                if self.kind == ReportKind::Metar {
                    self.state = State::BodyBeginMetar;
                } else {
                    self.state = State::TimeSpan;
                }
            }
            SyntaxCategory::TimeSpan => {
                if self.kind == ReportKind::Taf {
                    self.state = State::BodyBeginTaf;
                } else {
                    self.fail(ReportError::ExpectedReportTime);
                }
            }
            SyntaxCategory::Nil => self.state = State::Nil,
            _ => self.fail(ReportError::ExpectedReportTime),
        }
    }

    fn from_time_span(&mut self, category: SyntaxCategory) {
        match category {
            SyntaxCategory::TimeSpan => {
                self.kind = ReportKind::Taf;
                self.state = State::BodyBeginTaf;
            }
            SyntaxCategory::Nil => self.state = State::Nil,
            _ => {
                // An issue time followed by something that is not a
                // validity span means the report is a METAR after all
                if self.kind == ReportKind::Unknown {
                    self.kind = ReportKind::Metar;
                    self.state = State::BodyBeginMetarRepeatParse;
                } else {
                    self.fail(ReportError::ExpectedTimeSpan);
                }
            }
        }
    }

    fn from_body_begin_metar(&mut self, category: SyntaxCategory) {
        match category {
            SyntaxCategory::Nil => self.state = State::Nil,
            SyntaxCategory::Cnl => self.fail(ReportError::CnlAllowedInTafOnly),
            SyntaxCategory::Remark => self.state = State::RemarkMetar,
            SyntaxCategory::Maintenance => self.state = State::MaintenanceIndicator,
            _ => self.state = State::BodyMetar,
        }
    }

    fn from_body_metar(&mut self, category: SyntaxCategory) {
        match category {
            SyntaxCategory::Remark => self.state = State::RemarkMetar,
            SyntaxCategory::Maintenance => self.state = State::MaintenanceIndicator,
            SyntaxCategory::Nil | SyntaxCategory::Cnl => {
                self.fail(ReportError::UnexpectedNilOrCnlInReportBody)
            }
            _ => {}
        }
    }

    fn from_body_begin_taf(&mut self, category: SyntaxCategory) {
        match category {
            SyntaxCategory::Nil => self.state = State::Nil,
            SyntaxCategory::Cnl => self.state = State::Cnl,
            SyntaxCategory::Remark => self.state = State::RemarkTaf,
            SyntaxCategory::Maintenance => {
                self.fail(ReportError::MaintenanceIndicatorAllowedInMetarOnly)
            }
            _ => self.state = State::BodyTaf,
        }
    }

    fn from_body_taf(&mut self, category: SyntaxCategory) {
        match category {
            SyntaxCategory::Remark => self.state = State::RemarkTaf,
            SyntaxCategory::Nil | SyntaxCategory::Cnl => {
                self.fail(ReportError::UnexpectedNilOrCnlInReportBody)
            }
            SyntaxCategory::Maintenance => {
                self.fail(ReportError::MaintenanceIndicatorAllowedInMetarOnly)
            }
            _ => {}
        }
    }
}
