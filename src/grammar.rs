//! Example grammar: a braced, comma-separated list of language names
//!
//! ```text
//! languages := "{" language ("," language)* "}"
//! language  := "Python" | "Haskell" | "JS"
//! ```

use crate::parser::{BoxedParser, Parser, literal, sep_by};

/// language := "Python" | "Haskell" | "JS"
pub fn language() -> BoxedParser<String> {
    (literal("Python") | literal("Haskell") | literal("JS")).boxed()
}

/// languages := "{" language ("," language)* "}"
pub fn languages() -> BoxedParser<Vec<String>> {
    (literal("{") >> sep_by(language(), literal(",")) << literal("}")).boxed()
}
