//! Parser for METAR and TAF aviation weather bulletins.
//!
//! A report is a whitespace-delimited sequence of coded groups. Parsing
//! produces an ordered list of strongly typed groups, each carrying its
//! physical quantities, together with the report kind (METAR or TAF) and an
//! error classification when the report structure is malformed.

mod regex;

pub mod groups;
pub mod language;
pub mod parsing;
pub mod rendering;
