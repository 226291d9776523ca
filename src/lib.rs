#![warn(missing_docs)]

//! A flexible, zero-copy PEG parser combinator toolkit.
//!
//! This library provides small parser values, leaf matchers over
//! characters and combinators which compose them, for parsing-expression
//! grammars over fully buffered input. A parser consumes a prefix of its
//! input and either succeeds with a value plus the unconsumed remainder,
//! or fails with a message. Character data is never copied: every
//! slice-valued result borrows from the caller's input.
//!
//! Parsers are described by the [`Parse`] trait. Composition is static and
//! strategy is fixed: [`choice`] is ordered and leftmost-success,
//! [`many`] is greedy, and no combinator retries a child at a different
//! offset. Evaluation is synchronous and allocation-free, and parsers are
//! immutable after construction, so one parser value may be reused across
//! inputs (and threads) freely.
//!
//! ## Example
//!
//! ```
//! use pique::{sequence, Char, Digit, Output, Parse, Value};
//!
//! // One letter grade followed by one digit.
//! let grade = sequence((Char::any(), Digit::any()));
//!
//! let (out, rest): (Output, _) = grade.parse("b7 pass").unwrap();
//! let slots = out.into_slots().unwrap();
//! assert_eq!(slots.get(0), Some(&Value::Char('b')));
//! assert_eq!(slots.get(1), Some(&Value::Int(7)));
//! assert_eq!(rest, " pass");
//!
//! let res: pique::Parsed = grade.parse("b");
//! assert!(res.is_err());
//! ```

pub mod combinator;
pub mod error;
pub mod slots;
pub mod terminal;
pub mod value;

mod trace;

pub use combinator::{
    choice, complete, empty, many, maybe, not, sequence, skip, Choice, Empty, Final, Many, Maybe,
    Not, Sequence, Skip,
};
pub use error::ParseError;
pub use slots::{Slots, MAX_SEQUENCE_LEN};
pub use terminal::{Char, Digit, Int, Str};
pub use value::{NoExt, Output, Payload, Value};

/// The outcome of one parser invocation.
///
/// Success carries the parsed [`Output`] and the unconsumed remainder,
/// which is always a suffix of the invocation's input. Failure carries a
/// [`ParseError`]. `X` is the grammar-registered payload type; see
/// [`Payload`].
pub type Parsed<'i, X = NoExt> = Result<(Output<'i, X>, &'i str), ParseError>;

/// A trait for parsers.
///
/// A parser is a pure function from an input to a [`Parsed`] outcome:
/// invoking it has no side effects and the same input always produces the
/// same result. Terminal parsers may be parameterized with a literal at
/// construction but carry no mutable state afterwards.
///
/// The trait is implemented by every terminal and combinator in this
/// crate, and blanket-implemented for compatible functions and closures,
/// so a grammar can interpose plain functions wherever a result needs
/// reshaping:
///
/// ```
/// use pique::{choice, Char, Parse, Parsed, Value};
///
/// /// Parses a sign, yielding +1 or -1.
/// fn sign(input: &str) -> Parsed<'_> {
///     let (out, rest): (pique::Output, _) = choice((Char::lit('+'), Char::lit('-'))).parse(input)?;
///     let val = match out.into_single() {
///         Some(Value::Char('-')) => -1,
///         _ => 1,
///     };
///     Ok((Value::Int(val).into(), rest))
/// }
///
/// let (out, _) = sign.parse("-3").unwrap();
/// assert_eq!(out.into_single(), Some(Value::Int(-1)));
/// ```
pub trait Parse<'i, X = NoExt>
where
    X: Payload,
{
    /// Attempts to parse a prefix of `input`.
    fn parse(&self, input: &'i str) -> Parsed<'i, X>;
}

impl<'i, X, F> Parse<'i, X> for F
where
    X: Payload,
    F: Fn(&'i str) -> Parsed<'i, X>,
{
    fn parse(&self, input: &'i str) -> Parsed<'i, X> {
        self(input)
    }
}
