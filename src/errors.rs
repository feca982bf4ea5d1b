//! Errors and error-related utilities.
//!
//! The statistics themselves never fail; errors only arise at the edges
//! (reading records, parsing command line restrictions, writing exports).

use std::{error, fmt, result};

/// The result type used throughout this library.
pub type Result<T> = result::Result<T, Box<dyn error::Error>>;

/// Input that cannot be interpreted as a list of concordance records.
#[derive(Debug)]
pub struct InvalidInput(pub String);

/// Invalid command line argument, e.g. a malformed restriction.
#[derive(Debug)]
pub struct InvalidArgument(pub String);

/// Export target that could not be produced.
#[derive(Debug)]
pub struct ExportFailed {
    pub target: String,
    pub reason: String,
}

impl fmt::Display for InvalidInput {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "invalid input: {}", self.0)
    }
}

impl fmt::Display for InvalidArgument {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "invalid argument: {}", self.0)
    }
}

impl fmt::Display for ExportFailed {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "cannot export {}: {}", self.target, self.reason)
    }
}

impl error::Error for InvalidInput {}

impl error::Error for InvalidArgument {}

impl error::Error for ExportFailed {}

/// A helper for constructing [InvalidInput].
pub fn invalid_input(s: String) -> Box<dyn error::Error> {
    InvalidInput(s).into()
}

/// A helper for constructing [InvalidArgument].
pub fn invalid_argument(s: String) -> Box<dyn error::Error> {
    InvalidArgument(s).into()
}

/// A helper for constructing [InvalidArgument].
pub fn invalid_argument_ref(s: &str) -> Box<dyn error::Error> {
    InvalidArgument(s.to_owned()).into()
}

/// A helper for constructing [ExportFailed] from any displayable cause.
pub fn export_failed(target: &str, reason: impl fmt::Display) -> Box<dyn error::Error> {
    ExportFailed {
        target: target.to_owned(),
        reason: reason.to_string(),
    }
    .into()
}
