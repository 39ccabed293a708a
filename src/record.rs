use crate::error::RecordError;
use nom::IResult;
use nom::Parser;
use nom::bytes::complete::{tag, take_until};
use nom::combinator::rest;
use nom::sequence::separated_pair;
use std::str::FromStr;

pub const SEPARATOR: &str = ", ";

/// One `name, code` row. Both fields are stored already entity-escaped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub name: String,
    pub code: String,
}

/// Replaces every `&` with `&amp;` in one blind pass, so `&amp;` becomes `&amp;amp;`.
pub fn escape_ampersands(input: &str) -> String {
    input.replace('&', "&amp;")
}

/// Removes a single trailing `\n` (or `\r\n`).
pub fn strip_newline(line: &str) -> &str {
    match line.strip_suffix('\n') {
        Some(line) => line.strip_suffix('\r').unwrap_or(line),
        None => line,
    }
}

impl Record {
    fn parse_fields(input: &str) -> IResult<&str, (&str, &str)> {
        separated_pair(take_until(SEPARATOR), tag(SEPARATOR), rest).parse(input)
    }

    pub fn parse(line: &str) -> Result<Self, RecordError> {
        let escaped = escape_ampersands(strip_newline(line));
        let (_, (name, code)) = Self::parse_fields(&escaped)?;
        // the name ends at the first separator, so any others are left in the code
        let extra = code.matches(SEPARATOR).count();
        if extra > 0 {
            return Err(RecordError::ExtraSeparator { count: extra + 1 });
        }
        Ok(Record {
            name: name.to_string(),
            code: code.to_string(),
        })
    }

    pub fn key_line(&self) -> String {
        format!("<key>{}</key>", self.code)
    }

    pub fn string_line(&self) -> String {
        format!("<string>{}</string>", self.name)
    }
}

impl FromStr for Record {
    type Err = RecordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Record::parse(s)
    }
}
