//! Primitive parsers

use super::state::{Outcome, Parser};

/// Matches one exact string, byte for byte.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Literal {
    text: String,
}

impl Literal {
    pub fn new(text: impl Into<String>) -> Self {
        Literal { text: text.into() }
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

impl Parser for Literal {
    type Output = String;

    fn attempt(&self, text: &str, position: usize) -> Outcome<String> {
        // Compare bytes so a position off a char boundary is a mismatch, not a panic.
        let window = position
            .checked_add(self.text.len())
            .and_then(|end| text.as_bytes().get(position..end));

        match window {
            Some(window) if window == self.text.as_bytes() => Outcome::success(
                self.text.clone(),
                position + self.text.len(),
                Some(self.text.clone()),
            ),
            _ => Outcome::failure(position, self.text.clone()),
        }
    }
}

/// Parse the exact string `text`
pub fn literal(text: impl Into<String>) -> Literal {
    Literal::new(text)
}
