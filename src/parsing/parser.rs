use serde::Serialize;
use tracing::debug;

use crate::groups::{Group, ReportPart};
use crate::parsing::machine::{ReportError, ReportKind, SyntaxMachine};

/// A parsed report: its kind, the structural error if any, and the
/// recognized groups in order.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Parsed<'i> {
    pub kind: ReportKind,
    pub error: Option<ReportError>,
    pub groups: Vec<Group<'i>>,
}

/// One entry of an extended parse: the group, the report part it was
/// recognized in, and the whitespace-joined source tokens that formed it.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ScannedGroup<'i> {
    pub group: Group<'i>,
    pub part: ReportPart,
    pub source: String,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ParsedExtended<'i> {
    pub kind: ReportKind,
    pub error: Option<ReportError>,
    pub groups: Vec<ScannedGroup<'i>>,
}

/// Parse a single report into its group list.
pub fn parse(report: &str) -> Parsed<'_> {
    let extended = parse_extended(report);
    Parsed {
        kind: extended.kind,
        error: extended.error,
        groups: extended
            .groups
            .into_iter()
            .map(|entry| entry.group)
            .collect(),
    }
}

/// Parse a single report, keeping the report part and the original source
/// text of every group.
pub fn parse_extended(report: &str) -> ParsedExtended<'_> {
    let mut machine = SyntaxMachine::new();
    let mut groups: Vec<ScannedGroup> = Vec::new();

    for raw in report.split_whitespace() {
        // A trailing '=' terminates the report; anything after it is
        // disregarded
        let (token, report_end) = match raw.strip_suffix('=') {
            Some(stripped) => (stripped, true),
            None => (raw, false),
        };
        if !token.is_empty() {
            let mut part = machine.report_part();
            let mut group = Group::parse(token, part);
            machine.transition(group.category());
            while machine.is_reparse_required() {
                part = machine.report_part();
                group = Group::parse(token, part);
                machine.transition(group.category());
            }
            if machine.is_error() {
                debug!(token, error = ?machine.error(), "stopping at syntax error");
                break;
            }
            append(&mut groups, group, part, token);
        }
        if report_end {
            break;
        }
    }

    machine.final_transition();
    ParsedExtended {
        kind: machine.kind(),
        error: machine.error(),
        groups,
    }
}

/// Offer the new group to the previous one; on a successful combine the
/// last entry is replaced in place and the source text extended.
fn append<'i>(
    groups: &mut Vec<ScannedGroup<'i>>,
    group: Group<'i>,
    part: ReportPart,
    token: &'i str,
) {
    if let Some(last) = groups.last_mut() {
        if let Some(combined) = last.group.combine(&group) {
            last.group = combined;
            last.part = part;
            last.source.push(' ');
            last.source.push_str(token);
            return;
        }
    }
    groups.push(ScannedGroup {
        group,
        part,
        source: token.to_string(),
    });
}
