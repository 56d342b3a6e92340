//! # Parsnip - A Small Parser-Combinator Engine
//!
//! Parsnip builds text parsers by composing small parsers with a fixed set of
//! combinators. Every parser is an immutable value; combinators take their
//! operands by value and return a new parser that owns them, so a grammar is
//! an expression tree built bottom-up.
//!
//! ## Result Model
//!
//! Attempting a parser at a position yields an [`Outcome`](parser::Outcome):
//!
//! - `Success { value, position, expected }` - `position` is the cursor right
//!   after the consumed input
//! - `Failure { position, expected }` - `expected` describes what the failing
//!   parser was looking for
//!
//! Failures are plain data inside a grammar. Only the entry point
//! [`Parser::parse`](parser::Parser::parse) turns a failure into a
//! [`ParseError`](parser::ParseError).
//!
//! ## Combinators
//!
//! | operator | method  | function  | behaviour                                  |
//! |----------|---------|-----------|--------------------------------------------|
//! | `a \| b` | `or`    | `choice`  | ordered choice, both tried at the same spot |
//! | `a >> b` | `then`  | `then`    | sequence, keep `b`'s value                  |
//! | `a << b` | `skip`  | `skip`    | sequence, keep `a`'s value                  |
//! |          |         | `sep_by`  | one or more items between separators        |
//! |          |         | `sep_by0` | zero or more items between separators       |
//! |          | `map`   |           | transform a successful value                |
//! |          | `label` |           | rename the expectation of a failure         |
//!
//! Rust gives the shift operators a higher precedence than `|`, and both shifts
//! associate to the left, so `a >> b << c` reads as `(a >> b) << c`.
//!
//! ## Positions
//!
//! Positions are byte offsets into the input. Reading past the end of the
//! input, or from an offset inside a multi-byte character, is a failed match
//! and never a panic.
//!
//! ## Example
//!
//! ```
//! use parsnip::parser::{Parser, literal, sep_by};
//!
//! let language = literal("Python") | literal("Haskell") | literal("JS");
//! let languages = literal("{") >> sep_by(language, literal(",")) << literal("}");
//!
//! let parsed = languages.parse("{Python,Haskell,JS}").unwrap();
//! assert_eq!(parsed.value, vec!["Python", "Haskell", "JS"]);
//!
//! let err = languages.parse("{JS,CSS}").unwrap_err();
//! assert_eq!(err.expected(), "Python or Haskell or JS");
//! assert_eq!(err.position(), 4);
//! ```
//!
//! ## Module Structure
//!
//! - [`parser`] - Outcomes, the `Parser` trait, primitives and combinators
//! - [`grammar`] - The languages example grammar used by the demo binary

pub mod grammar;
pub mod parser;

pub use parser::{Outcome, ParseError, Parsed, Parser};
