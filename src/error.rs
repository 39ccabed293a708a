use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("cannot open {}: {source}", path.display())]
    FileOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("line {line_number}: {source}: {line:?}")]
    MalformedLine {
        line_number: usize,
        line: String,
        #[source]
        source: RecordError,
    },
    #[error("line {line_number}: {source}")]
    Read {
        line_number: usize,
        #[source]
        source: std::io::Error,
    },
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Why a single line could not be turned into a [`Record`](crate::record::Record).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordError {
    #[error("missing \", \" separator")]
    MissingSeparator,
    #[error("expected one \", \" separator, found {count}")]
    ExtraSeparator { count: usize },
}

impl From<nom::Err<nom::error::Error<&str>>> for RecordError {
    fn from(_: nom::Err<nom::error::Error<&str>>) -> Self {
        // the only way the field parser fails is not finding the separator
        Self::MissingSeparator
    }
}

impl Error {
    pub fn malformed(line_number: usize, line: &str, source: RecordError) -> Self {
        Self::MalformedLine {
            line_number,
            line: line.to_string(),
            source,
        }
    }
}
