// Report-level parsing: the syntax state machine and the token driver.

mod machine;
mod parser;

pub use machine::{ReportError, ReportKind, SyntaxMachine};
pub use parser::{parse, parse_extended, Parsed, ParsedExtended, ScannedGroup};
