/*!
Error types used in the library.

There are only two kinds, and neither is fatal to a caller: a failed unification is a normal "no
unifier" outcome and never an error at all (see [`crate::unify`]); the only thing that is reported
as an [`ErrorKind`] is malformed input at the serialization boundary (C7), where it is always
caught before the proving core is ever entered.
*/

use std::fmt;

/// A union of the error kinds this crate can surface.
#[derive(Debug)]
pub enum ErrorKind {
    /// The structured clause-set input was syntactically unparseable.
    Parse(ParseError),

    /// An I/O failure while reading a clause-set file.
    Io(std::io::Error),
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::Parse(e) => write!(f, "malformed clause-set input: {e}"),
            ErrorKind::Io(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for ErrorKind {}

impl From<ParseError> for ErrorKind {
    fn from(e: ParseError) -> Self {
        ErrorKind::Parse(e)
    }
}

impl From<std::io::Error> for ErrorKind {
    fn from(e: std::io::Error) -> Self {
        ErrorKind::Io(e)
    }
}

/// Errors while decoding a structured clause-set document (C7).
#[derive(Debug)]
pub enum ParseError {
    /// The document did not match the expected clause/literal/argument shape at all.
    Malformed(serde_json::Error),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::Malformed(e) => write!(f, "{e}"),
        }
    }
}

impl From<serde_json::Error> for ParseError {
    fn from(e: serde_json::Error) -> Self {
        ParseError::Malformed(e)
    }
}
