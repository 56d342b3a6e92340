//! # Parse Error Definitions
//!
//! Failures inside a grammar are carried as [`Outcome::Failure`] values and
//! never raise. This module defines the error the entry points return once a
//! top-level attempt has failed:
//!
//! - the grammar did not match (`Mismatch`)
//! - the grammar matched but left input behind (`Incomplete`), only reported
//!   by [`Parser::parse_complete`]
//!
//! [`Outcome::Failure`]: super::Outcome::Failure
//! [`Parser::parse_complete`]: super::Parser::parse_complete

/// Expectation reported when input remains after a successful parse.
pub const END_OF_INPUT: &str = "end of input";

/// Error returned by [`Parser::parse`](super::Parser::parse).
///
/// # Example Error Messages
///
/// ```text
/// Unexpected value: '[Python]'. Expected: '{' at: 0
/// Unexpected trailing input in '{JS}}' at: 4
/// ```
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// The grammar failed to match.
    #[error("Unexpected value: '{input}'. Expected: '{expected}' at: {position}")]
    Mismatch {
        /// The full input handed to the parser
        input: String,
        /// Composite description of what the deepest failure was looking for
        expected: String,
        /// Byte offset of that failure
        position: usize,
    },

    /// The grammar matched a prefix of the input only.
    #[error("Unexpected trailing input in '{input}' at: {position}")]
    Incomplete {
        /// The full input handed to the parser
        input: String,
        /// Byte offset where the successful match ended
        position: usize,
    },
}

impl ParseError {
    pub fn mismatch(input: &str, expected: impl Into<String>, position: usize) -> Self {
        ParseError::Mismatch {
            input: input.to_string(),
            expected: expected.into(),
            position,
        }
    }

    pub fn incomplete(input: &str, position: usize) -> Self {
        ParseError::Incomplete {
            input: input.to_string(),
            position,
        }
    }

    pub fn input(&self) -> &str {
        match self {
            ParseError::Mismatch { input, .. } | ParseError::Incomplete { input, .. } => input,
        }
    }

    pub fn expected(&self) -> &str {
        match self {
            ParseError::Mismatch { expected, .. } => expected,
            ParseError::Incomplete { .. } => END_OF_INPUT,
        }
    }

    pub fn position(&self) -> usize {
        match self {
            ParseError::Mismatch { position, .. } | ParseError::Incomplete { position, .. } => {
                *position
            }
        }
    }
}
