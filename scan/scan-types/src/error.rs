//! Error types for scanner report parsing.

use thiserror::Error;

/// Errors that can occur while parsing a scanner report.
#[derive(Debug, Error)]
pub enum ParseError {
    /// The report contains no scanner blocks.
    #[error("report contains no scanner blocks")]
    EmptyReport,

    /// A block does not start with a `--- scanner N ---` header.
    #[error("invalid scanner header: {0:?}")]
    InvalidHeader(String),

    /// A coordinate line is not three comma-separated integers.
    #[error("invalid coordinate line: {0:?}")]
    InvalidCoordinate(String),
}

/// Result type for parsing operations.
pub type ParseResult<T> = Result<T, ParseError>;
