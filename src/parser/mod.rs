//! The combinator engine
//!
//! - `state`: the [`Outcome`] of one attempt and the [`Parser`] trait
//! - `primitives`: the [`literal`] string matcher
//! - `combinators`: choice, sequencing, repetition and their operator forms
//! - `error`: the [`ParseError`] reported by the entry points

mod combinators;
mod error;
mod primitives;
mod state;

pub use combinators::*;
pub use error::{END_OF_INPUT, ParseError};
pub use primitives::*;
pub use state::*;

/// Run `parser` over `text` from position 0.
pub fn parse<P: Parser>(parser: &P, text: &str) -> Result<Parsed<P::Output>, ParseError> {
    parser.parse(text)
}
