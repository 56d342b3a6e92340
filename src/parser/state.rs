use super::combinators::{BoxedParser, Choice, Label, Map, Skip, Then};
use super::error::ParseError;

/// The outcome of attempting one parser at one position.
///
/// A failure is ordinary data here; only [`Parser::parse`] turns it into a
/// [`ParseError`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome<T> {
    Success {
        value: T,
        /// Cursor immediately after the consumed input.
        position: usize,
        expected: Option<String>,
    },
    Failure {
        /// Where the failing parser gave up.
        position: usize,
        expected: String,
    },
}

impl<T> Outcome<T> {
    pub fn success(value: T, position: usize, expected: Option<String>) -> Self {
        Outcome::Success {
            value,
            position,
            expected,
        }
    }

    pub fn failure(position: usize, expected: impl Into<String>) -> Self {
        Outcome::Failure {
            position,
            expected: expected.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success { .. })
    }

    /// The parsed value, absent on failure.
    pub fn value(&self) -> Option<&T> {
        match self {
            Outcome::Success { value, .. } => Some(value),
            Outcome::Failure { .. } => None,
        }
    }

    pub fn into_value(self) -> Option<T> {
        match self {
            Outcome::Success { value, .. } => Some(value),
            Outcome::Failure { .. } => None,
        }
    }

    pub fn position(&self) -> usize {
        match self {
            Outcome::Success { position, .. } | Outcome::Failure { position, .. } => *position,
        }
    }

    pub fn expected(&self) -> Option<&str> {
        match self {
            Outcome::Success { expected, .. } => expected.as_deref(),
            Outcome::Failure { expected, .. } => Some(expected),
        }
    }
}

/// Value produced by a successful top-level parse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parsed<T> {
    pub value: T,
    /// Final cursor. Equals the input length when everything was consumed.
    pub position: usize,
}

pub trait Parser {
    type Output;

    /// Attempt this parser on `text` starting at byte offset `position`.
    ///
    /// Never panics: reading past the end of `text` is a failed match.
    fn attempt(&self, text: &str, position: usize) -> Outcome<Self::Output>;

    /// Run from position 0 and report a failure as a [`ParseError`].
    ///
    /// Trailing input is left to the caller; see [`Parser::parse_complete`].
    fn parse(&self, text: &str) -> Result<Parsed<Self::Output>, ParseError> {
        match self.attempt(text, 0) {
            Outcome::Success {
                value, position, ..
            } => Ok(Parsed { value, position }),
            Outcome::Failure { position, expected } => {
                Err(ParseError::mismatch(text, expected, position))
            }
        }
    }

    /// Like [`Parser::parse`], but the whole input must be consumed.
    fn parse_complete(&self, text: &str) -> Result<Parsed<Self::Output>, ParseError> {
        let parsed = self.parse(text)?;
        if parsed.position != text.len() {
            return Err(ParseError::incomplete(text, parsed.position));
        }
        Ok(parsed)
    }

    /// Choice: try self, if fails try other
    fn or<P>(self, other: P) -> Choice<Self, P>
    where
        Self: Sized,
        P: Parser<Output = Self::Output>,
    {
        Choice::new(self, other)
    }

    /// Keep right: parse self then other, discard self's result
    fn then<P: Parser>(self, other: P) -> Then<Self, P>
    where
        Self: Sized,
    {
        Then::new(self, other)
    }

    /// Keep left: parse self then other, discard other's result
    fn skip<P: Parser>(self, other: P) -> Skip<Self, P>
    where
        Self: Sized,
    {
        Skip::new(self, other)
    }

    /// Map: transform result
    fn map<U, F>(self, f: F) -> Map<Self, F>
    where
        Self: Sized,
        F: Fn(Self::Output) -> U,
    {
        Map::new(self, f)
    }

    /// Report failures as `name` instead of the inner expectation
    fn label(self, name: impl Into<String>) -> Label<Self>
    where
        Self: Sized,
    {
        Label::new(self, name)
    }

    fn boxed(self) -> BoxedParser<Self::Output>
    where
        Self: Sized + Send + Sync + 'static,
        Self::Output: 'static,
    {
        BoxedParser::new(self)
    }
}

// Allow closures to be parsers
impl<T, F> Parser for F
where
    F: Fn(&str, usize) -> Outcome<T>,
{
    type Output = T;

    fn attempt(&self, text: &str, position: usize) -> Outcome<T> {
        self(text, position)
    }
}
