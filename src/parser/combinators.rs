use std::fmt;
use std::ops::{BitOr, Shl, Shr};
use std::sync::Arc;

use super::primitives::Literal;
use super::state::{Outcome, Parser};

type ParserFn<T> = Arc<dyn Parser<Output = T> + Send + Sync>;

// === Boxed Parser for type erasure ===

pub struct BoxedParser<T> {
    parser: ParserFn<T>,
}

impl<T> Clone for BoxedParser<T> {
    fn clone(&self) -> Self {
        BoxedParser {
            parser: Arc::clone(&self.parser),
        }
    }
}

impl<T> fmt::Debug for BoxedParser<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("BoxedParser")
    }
}

impl<T: 'static> BoxedParser<T> {
    pub fn new<P>(parser: P) -> Self
    where
        P: Parser<Output = T> + Send + Sync + 'static,
    {
        BoxedParser {
            parser: Arc::new(parser),
        }
    }
}

impl<T> Parser for BoxedParser<T> {
    type Output = T;

    fn attempt(&self, text: &str, position: usize) -> Outcome<T> {
        self.parser.attempt(text, position)
    }
}

// === Combinators ===

/// Ordered choice: the first alternative that succeeds wins
#[derive(Debug, Clone)]
pub struct Choice<A, B> {
    first: A,
    second: B,
}

impl<A, B> Choice<A, B> {
    pub fn new(first: A, second: B) -> Self {
        Choice { first, second }
    }
}

impl<A, B> Parser for Choice<A, B>
where
    A: Parser,
    B: Parser<Output = A::Output>,
{
    type Output = A::Output;

    fn attempt(&self, text: &str, position: usize) -> Outcome<A::Output> {
        let first = match self.first.attempt(text, position) {
            success @ Outcome::Success { .. } => return success,
            Outcome::Failure { expected, .. } => expected,
        };

        // Both alternatives start from the same position
        match self.second.attempt(text, position) {
            success @ Outcome::Success { .. } => success,
            Outcome::Failure {
                position,
                expected,
            } => Outcome::failure(position, format!("{first} or {expected}")),
        }
    }
}

/// Keep right: run both in sequence, keep the second value
#[derive(Debug, Clone)]
pub struct Then<A, B> {
    first: A,
    second: B,
}

impl<A, B> Then<A, B> {
    pub fn new(first: A, second: B) -> Self {
        Then { first, second }
    }
}

impl<A, B> Parser for Then<A, B>
where
    A: Parser,
    B: Parser,
{
    type Output = B::Output;

    fn attempt(&self, text: &str, position: usize) -> Outcome<B::Output> {
        match self.first.attempt(text, position) {
            Outcome::Success { position, .. } => self.second.attempt(text, position),
            Outcome::Failure { position, expected } => Outcome::Failure { position, expected },
        }
    }
}

/// Keep left: run both in sequence, keep the first value
#[derive(Debug, Clone)]
pub struct Skip<A, B> {
    first: A,
    second: B,
}

impl<A, B> Skip<A, B> {
    pub fn new(first: A, second: B) -> Self {
        Skip { first, second }
    }
}

impl<A, B> Parser for Skip<A, B>
where
    A: Parser,
    B: Parser,
{
    type Output = A::Output;

    fn attempt(&self, text: &str, position: usize) -> Outcome<A::Output> {
        let (value, after, expected) = match self.first.attempt(text, position) {
            Outcome::Success {
                value,
                position,
                expected,
            } => (value, position, expected),
            Outcome::Failure { position, expected } => {
                return Outcome::Failure { position, expected };
            }
        };

        match self.second.attempt(text, after) {
            Outcome::Success { position, .. } => Outcome::Success {
                value,
                position,
                expected,
            },
            Outcome::Failure { position, expected } => Outcome::Failure { position, expected },
        }
    }
}

/// One or more `item`s separated by `separator`
#[derive(Debug, Clone)]
pub struct SepBy<P, S> {
    item: P,
    separator: S,
}

impl<P: Parser, S: Parser> Parser for SepBy<P, S> {
    type Output = Vec<P::Output>;

    fn attempt(&self, text: &str, position: usize) -> Outcome<Self::Output> {
        separated(&self.item, &self.separator, text, position, false)
    }
}

/// Zero or more `item`s separated by `separator`
#[derive(Debug, Clone)]
pub struct SepBy0<P, S> {
    item: P,
    separator: S,
}

impl<P: Parser, S: Parser> Parser for SepBy0<P, S> {
    type Output = Vec<P::Output>;

    fn attempt(&self, text: &str, position: usize) -> Outcome<Self::Output> {
        separated(&self.item, &self.separator, text, position, true)
    }
}

fn separated<P: Parser, S: Parser>(
    item: &P,
    separator: &S,
    text: &str,
    start: usize,
    allow_empty: bool,
) -> Outcome<Vec<P::Output>> {
    let mut values = Vec::new();
    let mut cursor = start;

    loop {
        let round = cursor;

        let expected = match item.attempt(text, cursor) {
            Outcome::Success {
                value,
                position,
                expected,
            } => {
                values.push(value);
                cursor = position;
                expected
            }
            Outcome::Failure { expected, .. } if allow_empty && values.is_empty() => {
                return Outcome::success(values, start, Some(expected));
            }
            // An item after a consumed separator is required
            Outcome::Failure { position, expected } => {
                return Outcome::Failure { position, expected };
            }
        };

        match separator.attempt(text, cursor) {
            // A round that consumed nothing would repeat forever
            Outcome::Success { position, .. } if position == round => {
                return Outcome::success(values, cursor, expected);
            }
            Outcome::Success { position, .. } => cursor = position,
            Outcome::Failure { .. } => return Outcome::success(values, cursor, expected),
        }
    }
}

/// Map: transform the value of a successful parse
#[derive(Clone)]
pub struct Map<P, F> {
    parser: P,
    f: F,
}

impl<P, F> Map<P, F> {
    pub fn new(parser: P, f: F) -> Self {
        Map { parser, f }
    }
}

impl<P: fmt::Debug, F> fmt::Debug for Map<P, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Map").field("parser", &self.parser).finish()
    }
}

impl<P, F, U> Parser for Map<P, F>
where
    P: Parser,
    F: Fn(P::Output) -> U,
{
    type Output = U;

    fn attempt(&self, text: &str, position: usize) -> Outcome<U> {
        match self.parser.attempt(text, position) {
            Outcome::Success {
                value,
                position,
                expected,
            } => Outcome::Success {
                value: (self.f)(value),
                position,
                expected,
            },
            Outcome::Failure { position, expected } => Outcome::Failure { position, expected },
        }
    }
}

/// Replace the expectation of a failing parser with a name
#[derive(Debug, Clone)]
pub struct Label<P> {
    parser: P,
    name: String,
}

impl<P> Label<P> {
    pub fn new(parser: P, name: impl Into<String>) -> Self {
        Label {
            parser,
            name: name.into(),
        }
    }
}

impl<P: Parser> Parser for Label<P> {
    type Output = P::Output;

    fn attempt(&self, text: &str, position: usize) -> Outcome<P::Output> {
        match self.parser.attempt(text, position) {
            Outcome::Failure { position, .. } => Outcome::failure(position, self.name.clone()),
            success => success,
        }
    }
}

// === Function forms ===

/// Try `first`, and `second` from the same position if it fails
pub fn choice<A, B>(first: A, second: B) -> Choice<A, B>
where
    A: Parser,
    B: Parser<Output = A::Output>,
{
    Choice::new(first, second)
}

/// Parse `first` then `second`, keep `second`'s value
pub fn then<A: Parser, B: Parser>(first: A, second: B) -> Then<A, B> {
    Then::new(first, second)
}

/// Parse `first` then `second`, keep `first`'s value
pub fn skip<A: Parser, B: Parser>(first: A, second: B) -> Skip<A, B> {
    Skip::new(first, second)
}

/// Parse one or more `item`s separated by `separator`.
///
/// Fails when not even one item matches, or when an item is missing after a
/// separator. Stops before the first separator that does not match.
pub fn sep_by<P: Parser, S: Parser>(item: P, separator: S) -> SepBy<P, S> {
    SepBy { item, separator }
}

/// Parse zero or more `item`s separated by `separator`
pub fn sep_by0<P: Parser, S: Parser>(item: P, separator: S) -> SepBy0<P, S> {
    SepBy0 { item, separator }
}

// === Operator Overloading ===

/// `|` for choice, `>>` for keep right, `<<` for keep left
macro_rules! impl_operators {
    ($($ty:ident $(<$($param:ident),+>)?),* $(,)?) => {$(
        impl<$($($param,)+)? Rhs> BitOr<Rhs> for $ty $(<$($param),+>)?
        where
            Self: Parser,
            Rhs: Parser<Output = <Self as Parser>::Output>,
        {
            type Output = Choice<Self, Rhs>;

            fn bitor(self, rhs: Rhs) -> Choice<Self, Rhs> {
                Choice::new(self, rhs)
            }
        }

        impl<$($($param,)+)? Rhs> Shr<Rhs> for $ty $(<$($param),+>)?
        where
            Self: Parser,
            Rhs: Parser,
        {
            type Output = Then<Self, Rhs>;

            fn shr(self, rhs: Rhs) -> Then<Self, Rhs> {
                Then::new(self, rhs)
            }
        }

        impl<$($($param,)+)? Rhs> Shl<Rhs> for $ty $(<$($param),+>)?
        where
            Self: Parser,
            Rhs: Parser,
        {
            type Output = Skip<Self, Rhs>;

            fn shl(self, rhs: Rhs) -> Skip<Self, Rhs> {
                Skip::new(self, rhs)
            }
        }
    )*};
}

impl_operators!(
    Literal,
    BoxedParser<T>,
    Choice<A, B>,
    Then<A, B>,
    Skip<A, B>,
    SepBy<P, S>,
    SepBy0<P, S>,
    Map<P, F>,
    Label<P>,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::literal;

    fn lang() -> impl Parser<Output = String> {
        literal("Python") | literal("Haskell") | literal("JS")
    }

    #[test]
    fn test_choice_first_wins() {
        let outcome = (literal("a") | literal("ab")).attempt("ab", 0);
        assert_eq!(outcome.value().map(String::as_str), Some("a"));
        assert_eq!(outcome.position(), 1);
    }

    #[test]
    fn test_choice_second_from_original_position() {
        let outcome = (literal("ax") | literal("ab")).attempt("ab", 0);
        assert_eq!(outcome.value().map(String::as_str), Some("ab"));
        assert_eq!(outcome.position(), 2);
    }

    #[test]
    fn test_choice_joins_expectations() {
        let outcome = lang().attempt("CSS", 0);
        assert_eq!(outcome, Outcome::failure(0, "Python or Haskell or JS"));
    }

    #[test]
    fn test_choice_grouping_keeps_order() {
        let left = (literal("a") | literal("b")) | literal("c");
        let right = literal("a") | (literal("b") | literal("c"));
        assert_eq!(left.attempt("d", 0), right.attempt("d", 0));
        assert_eq!(left.attempt("d", 0).expected(), Some("a or b or c"));
    }

    #[test]
    fn test_choice_takes_second_failure_position() {
        let longer = literal("a") >> literal("b");
        let outcome = (literal("x") | longer).attempt("ac", 0);
        assert_eq!(outcome, Outcome::failure(1, "x or b"));
    }

    #[test]
    fn test_then_keeps_right() {
        let outcome = (literal("{") >> literal("x")).attempt("{x", 0);
        assert_eq!(
            outcome,
            Outcome::success("x".to_string(), 2, Some("x".to_string()))
        );
    }

    #[test]
    fn test_then_short_circuits() {
        let outcome = (literal("{") >> literal("x")).attempt("[x", 0);
        assert_eq!(outcome, Outcome::failure(0, "{"));
    }

    #[test]
    fn test_then_propagates_second_failure() {
        let outcome = (literal("{") >> literal("x")).attempt("{y", 0);
        assert_eq!(outcome, Outcome::failure(1, "x"));
    }

    #[test]
    fn test_skip_keeps_left() {
        let outcome = (literal("x") << literal("}")).attempt("x}", 0);
        assert_eq!(
            outcome,
            Outcome::success("x".to_string(), 2, Some("x".to_string()))
        );
    }

    #[test]
    fn test_skip_reports_second_failure() {
        let outcome = (literal("x") << literal("}")).attempt("x]", 0);
        assert_eq!(outcome, Outcome::failure(1, "}"));
    }

    #[test]
    fn test_sep_by_collects_items() {
        let outcome = sep_by(lang(), literal(",")).attempt("JS,Python", 0);
        assert_eq!(
            outcome,
            Outcome::success(
                vec!["JS".to_string(), "Python".to_string()],
                9,
                Some("Python".to_string())
            )
        );
    }

    #[test]
    fn test_sep_by_requires_one_item() {
        let outcome = sep_by(literal("x"), literal(",")).attempt("", 0);
        assert_eq!(outcome, Outcome::failure(0, "x"));
    }

    #[test]
    fn test_sep_by_stops_before_failed_separator() {
        let outcome = sep_by(literal("x"), literal(",")).attempt("x,x;x", 0);
        assert_eq!(outcome.value().map(Vec::len), Some(2));
        assert_eq!(outcome.position(), 3);
    }

    #[test]
    fn test_sep_by_item_required_after_separator() {
        let outcome = sep_by(lang(), literal(",")).attempt("JS,", 0);
        assert_eq!(outcome, Outcome::failure(3, "Python or Haskell or JS"));
    }

    #[test]
    fn test_sep_by0_allows_empty() {
        let outcome = sep_by0(literal("x"), literal(",")).attempt("}", 0);
        assert_eq!(outcome, Outcome::success(vec![], 0, Some("x".to_string())));
    }

    #[test]
    fn test_sep_by0_matches_like_sep_by() {
        let zero = sep_by0(literal("x"), literal(",")).attempt("x,x", 0);
        let one = sep_by(literal("x"), literal(",")).attempt("x,x", 0);
        assert_eq!(zero, one);
    }

    #[test]
    fn test_sep_by0_item_required_after_separator() {
        let outcome = sep_by0(literal("x"), literal(",")).attempt("x,", 0);
        assert_eq!(outcome, Outcome::failure(2, "x"));
    }

    #[test]
    fn test_sep_by_terminates_on_empty_matches() {
        let outcome = sep_by(literal(""), literal("")).attempt("abc", 0);
        assert_eq!(outcome.value().map(Vec::len), Some(1));
        assert_eq!(outcome.position(), 0);
    }

    #[test]
    fn test_map_transforms_value() {
        let length = lang().map(|s| s.len());
        assert_eq!(length.attempt("Haskell", 0).into_value(), Some(7));
        assert_eq!(length.attempt("C", 0).position(), 0);
    }

    #[test]
    fn test_label_replaces_expected() {
        let outcome = lang().label("language").attempt("{C}", 1);
        assert_eq!(outcome, Outcome::failure(1, "language"));
    }

    #[test]
    fn test_label_keeps_success() {
        let outcome = literal("JS").label("language").attempt("JS", 0);
        assert_eq!(outcome.expected(), Some("JS"));
    }

    #[test]
    fn test_method_and_operator_forms_agree() {
        let methods = literal("{").then(sep_by(lang(), literal(","))).skip(literal("}"));
        let operators = literal("{") >> sep_by(lang(), literal(",")) << literal("}");
        let functions = skip(
            then(literal("{"), sep_by(lang(), literal(","))),
            literal("}"),
        );

        for input in ["{JS,Haskell}", "{JS,}", "{", ""] {
            assert_eq!(methods.attempt(input, 0), operators.attempt(input, 0));
            assert_eq!(methods.attempt(input, 0), functions.attempt(input, 0));
        }
    }

    #[test]
    fn test_boxed_parser_is_shareable() {
        let parser = lang().boxed();
        let clone = parser.clone();

        let handle = std::thread::spawn(move || clone.attempt("JS", 0).into_value());
        assert_eq!(handle.join().unwrap(), Some("JS".to_string()));
        assert!(parser.attempt("JS", 0).is_success());
    }

    #[test]
    fn test_choice_function_form() {
        let outcome = choice(literal("a"), literal("b")).attempt("b", 0);
        assert_eq!(outcome.position(), 1);
    }
}
