use std::fmt;

use serde_json::error::Category;

use crate::arena::NodeKind;

/// Why a document failed to parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParseErrorKind {
    UnexpectedToken,
    UnterminatedString,
    InvalidNumber,
    UnexpectedEnd,
    TrailingData,
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ParseErrorKind::UnexpectedToken => "unexpected token",
            ParseErrorKind::UnterminatedString => "unterminated string",
            ParseErrorKind::InvalidNumber => "invalid number",
            ParseErrorKind::UnexpectedEnd => "unexpected end of input",
            ParseErrorKind::TrailingData => "trailing data",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Parse(ParseErrorKind),
    TypeMismatch,
    Bounds,
    MissingAllocator,
}

/// 1-based position of a parse failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Location {
    pub line: usize,
    pub column: usize,
}

#[derive(Debug, Clone, thiserror::Error)]
#[error("{message}")]
pub struct Error {
    pub kind: ErrorKind,
    pub message: String,
    pub location: Option<Location>,
}

impl Error {
    pub fn parse(kind: ParseErrorKind, message: impl Into<String>, location: Option<Location>) -> Self {
        Self {
            kind: ErrorKind::Parse(kind),
            message: message.into(),
            location,
        }
    }

    pub fn type_mismatch(op: &'static str, expected: NodeKind, found: NodeKind) -> Self {
        Self {
            kind: ErrorKind::TypeMismatch,
            message: format!("{op}: expected {expected}, found {found}"),
            location: None,
        }
    }

    pub fn bounds(op: &'static str, start: usize, end: usize, len: usize) -> Self {
        let message = if end.checked_sub(start) == Some(1) {
            format!("{op}: index {start} out of range for array of length {len}")
        } else {
            format!("{op}: range {start}..{end} out of range for array of length {len}")
        };
        Self {
            kind: ErrorKind::Bounds,
            message,
            location: None,
        }
    }

    pub fn missing_allocator(op: &'static str) -> Self {
        Self {
            kind: ErrorKind::MissingAllocator,
            message: format!("{op}: detached value has no arena to allocate in"),
            location: None,
        }
    }

    pub fn parse_kind(&self) -> Option<ParseErrorKind> {
        match self.kind {
            ErrorKind::Parse(kind) => Some(kind),
            _ => None,
        }
    }

    pub fn is_parse(&self) -> bool {
        self.parse_kind().is_some()
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        let kind = classify(&err);
        let location = (err.line() > 0).then(|| Location {
            line: err.line(),
            column: err.column(),
        });
        Error::parse(kind, err.to_string(), location)
    }
}

// serde_json only exposes a coarse category; the message carries the rest.
fn classify(err: &serde_json::Error) -> ParseErrorKind {
    let message = err.to_string();
    match err.classify() {
        Category::Eof if message.starts_with("EOF while parsing a string") => {
            ParseErrorKind::UnterminatedString
        }
        Category::Eof => ParseErrorKind::UnexpectedEnd,
        Category::Syntax if message.starts_with("trailing characters") => {
            ParseErrorKind::TrailingData
        }
        Category::Syntax
            if message.starts_with("invalid number")
                || message.starts_with("number out of range") =>
        {
            ParseErrorKind::InvalidNumber
        }
        Category::Syntax | Category::Data | Category::Io => ParseErrorKind::UnexpectedToken,
    }
}
