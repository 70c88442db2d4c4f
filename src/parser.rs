//! Parser for the delimited accelerometer string.
//!
//! ```text
//! records := record (';' record)*
//! record  := group ('|' group)?
//! group   := float ',' float ',' float
//! ```
//!
//! A record with one group carries total acceleration (combined format). A
//! record with two groups carries user acceleration followed by gravity
//! (separated format).
use alloc::vec::Vec;

use crate::sample::Sample;
use crate::vector::Vector3;

pub const RECORD_SEPARATOR: char = ';';
pub const GROUP_SEPARATOR: char = '|';
pub const COMPONENT_SEPARATOR: char = ',';

/// The parser's name for one axis triple.
pub type RawGroup = Vector3;

/// Layout of every record in one input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// Total acceleration only; gravity still has to be filtered out.
    Combined,
    /// User acceleration and gravity already separated.
    Separated,
}

impl Format {
    pub const fn group_count(&self) -> usize {
        match self {
            Format::Combined => 1,
            Format::Separated => 2,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ParseError {
    EmptyInput,
    MalformedNumber {
        record: usize,
        group: usize,
        component: usize,
    },
    InconsistentGroupCount {
        record: usize,
        expected: usize,
        found: usize,
    },
    InvalidGroupCount {
        record: usize,
        found: usize,
    },
    InvalidGroupArity {
        record: usize,
        group: usize,
        found: usize,
    },
}

impl core::fmt::Display for ParseError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "malformed input: ")?;
        match self {
            ParseError::EmptyInput => write!(f, "no records present"),
            ParseError::MalformedNumber {
                record,
                group,
                component,
            } => write!(
                f,
                "record {record}, group {group}, component {component} is not a finite number"
            ),
            ParseError::InconsistentGroupCount {
                record,
                expected,
                found,
            } => write!(
                f,
                "record {record} has {found} group(s), expected {expected} like the first record"
            ),
            ParseError::InvalidGroupCount { record, found } => {
                write!(f, "record {record} has {found} groups, at most 2 are allowed")
            }
            ParseError::InvalidGroupArity {
                record,
                group,
                found,
            } => write!(
                f,
                "record {record}, group {group} has {found} component(s), expected 3"
            ),
        }
    }
}

impl core::error::Error for ParseError {}

/// One record: a total-acceleration group, or a user group then a gravity group.
#[derive(Debug, Clone, PartialEq)]
pub struct RawRecord {
    groups: heapless::Vec<RawGroup, 2>,
}

impl RawRecord {
    pub fn groups(&self) -> &[RawGroup] {
        &self.groups
    }

    /// `None` only for a record with no groups, which the parser never builds.
    pub fn format(&self) -> Option<Format> {
        match self.groups.len() {
            1 => Some(Format::Combined),
            2 => Some(Format::Separated),
            _ => None,
        }
    }
}

/// Parser output, before any gravity decomposition.
#[derive(Debug, Clone, PartialEq)]
pub enum ParsedInput {
    /// Total acceleration per record.
    Combined(Vec<RawGroup>),
    /// Samples read directly from user/gravity record pairs.
    Separated(Vec<Sample>),
}

impl ParsedInput {
    pub fn format(&self) -> Format {
        match self {
            ParsedInput::Combined(_) => Format::Combined,
            ParsedInput::Separated(_) => Format::Separated,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            ParsedInput::Combined(totals) => totals.len(),
            ParsedInput::Separated(samples) => samples.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Parse `input` into records, resolving the format from the first record.
pub fn parse(input: &str) -> Result<ParsedInput, ParseError> {
    let records = parse_records(input)?;

    // parse_records never returns an empty list
    let format = match records.first().and_then(RawRecord::format) {
        Some(format) => format,
        None => return Err(ParseError::EmptyInput),
    };

    let parsed = match format {
        Format::Combined => {
            ParsedInput::Combined(records.iter().map(|r| r.groups[0]).collect())
        }
        Format::Separated => ParsedInput::Separated(
            records
                .iter()
                .map(|r| Sample::new(r.groups[0], r.groups[1]))
                .collect(),
        ),
    };

    log::debug!("parsed {} records in {:?} format", parsed.len(), format);
    Ok(parsed)
}

/// Split and validate every record, checking each against the first one.
pub fn parse_records(input: &str) -> Result<Vec<RawRecord>, ParseError> {
    let input = input.trim().trim_end_matches(RECORD_SEPARATOR);
    if input.trim().is_empty() {
        return Err(ParseError::EmptyInput);
    }

    let mut records: Vec<RawRecord> = Vec::new();
    let mut expected: Option<usize> = None;

    for (index, text) in input.split(RECORD_SEPARATOR).enumerate() {
        let record = parse_record(index, text)?;
        let found = record.groups.len();

        let expected = *expected.get_or_insert(found);
        if found != expected {
            return Err(ParseError::InconsistentGroupCount {
                record: index,
                expected,
                found,
            });
        }

        records.push(record);
    }

    Ok(records)
}

fn parse_record(index: usize, text: &str) -> Result<RawRecord, ParseError> {
    let mut groups = heapless::Vec::new();

    for (group, group_text) in text.split(GROUP_SEPARATOR).enumerate() {
        let parsed = parse_group(index, group, group_text)?;
        if groups.push(parsed).is_err() {
            return Err(ParseError::InvalidGroupCount {
                record: index,
                found: text.split(GROUP_SEPARATOR).count(),
            });
        }
    }

    Ok(RawRecord { groups })
}

fn parse_group(record: usize, group: usize, text: &str) -> Result<RawGroup, ParseError> {
    if text.trim().is_empty() {
        return Err(ParseError::InvalidGroupArity {
            record,
            group,
            found: 0,
        });
    }

    let found = text.split(COMPONENT_SEPARATOR).count();
    if found != 3 {
        return Err(ParseError::InvalidGroupArity {
            record,
            group,
            found,
        });
    }

    let mut values = [0.0; 3];
    for (component, (slot, raw)) in values
        .iter_mut()
        .zip(text.split(COMPONENT_SEPARATOR))
        .enumerate()
    {
        *slot = match raw.trim().parse::<f64>() {
            Ok(value) if value.is_finite() => value,
            _ => {
                return Err(ParseError::MalformedNumber {
                    record,
                    group,
                    component,
                });
            }
        };
    }

    Ok(RawGroup::from(values))
}
