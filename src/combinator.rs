//! Combinators which build larger parsers out of smaller ones.
//!
//! `Sequence` and `Choice` take their children as a tuple (up to eight),
//! so composition is static: the call graph of a finished parser mirrors
//! the grammar's expression tree, with no dispatch or scheduling layer in
//! between. Strategy is fixed left-to-right: `Choice` is ordered and
//! leftmost-success, `Many` is greedy, and no combinator ever retries a
//! child at a different offset.

use crate::{
    error::ParseError,
    slots::{Slots, MAX_SEQUENCE_LEN},
    terminal::Char,
    trace::trace,
    value::{Payload, Value},
    Parse, Parsed,
};

const NESTED_SLOT: &str = "a nested sequence cannot occupy a single slot";

/// Always succeeds, consumes nothing, yields [`Value::Empty`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub struct Empty;

/// Constructs the trivial parser: see [`Empty`].
pub const fn empty() -> Empty {
    Empty
}

impl<'i, X: Payload> Parse<'i, X> for Empty {
    fn parse(&self, input: &'i str) -> Parsed<'i, X> {
        Ok((Value::Empty.into(), input))
    }
}

/// Ordered alternation: see [`choice`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Choice<T> {
    alts: T,
}

/// Tries each alternative in turn, returning the first success unmodified.
///
/// Every alternative is applied to the original input; a failed attempt
/// carries nothing over to the next one. Alternation is ordered and
/// leftmost-success, not longest-match: once an alternative succeeds the
/// rest are never evaluated. A choice over the unit tuple `()` has no
/// alternatives and always fails.
///
/// ```
/// use pique::{choice, Char, Output, Parse, Value};
///
/// let ab = choice((Char::lit('a'), Char::lit('b')));
/// let (out, rest): (Output, _) = ab.parse("bcd").unwrap();
/// assert_eq!(out.into_single(), Some(Value::Char('b')));
/// assert_eq!(rest, "cd");
/// let res: pique::Parsed = ab.parse("cd");
/// assert!(res.is_err());
/// ```
pub const fn choice<T>(alts: T) -> Choice<T> {
    Choice { alts }
}

impl<'i, X: Payload> Parse<'i, X> for Choice<()> {
    fn parse(&self, input: &'i str) -> Parsed<'i, X> {
        trace!("Choice: failed on input {:?}", input);
        let _ = input;
        Err(ParseError::Mismatch("no alternative matched"))
    }
}

macro_rules! impl_choice {
    ($( $alt:ident . $idx:tt ),+) => {
        impl<'i, X, $( $alt ),+> Parse<'i, X> for Choice<($( $alt, )+)>
        where
            X: Payload,
            $( $alt: Parse<'i, X> ),+
        {
            fn parse(&self, input: &'i str) -> Parsed<'i, X> {
                $(
                    if let Ok((out, rest)) = self.alts.$idx.parse(input) {
                        trace!(
                            "Choice: matched input {:?}, remaining {:?}",
                            input, rest
                        );
                        return Ok((out, rest));
                    }
                )+

                trace!("Choice: failed on input {:?}", input);
                Err(ParseError::Mismatch("no alternative matched"))
            }
        }
    };
}

impl_choice!(P0.0);
impl_choice!(P0.0, P1.1);
impl_choice!(P0.0, P1.1, P2.2);
impl_choice!(P0.0, P1.1, P2.2, P3.3);
impl_choice!(P0.0, P1.1, P2.2, P3.3, P4.4);
impl_choice!(P0.0, P1.1, P2.2, P3.3, P4.4, P5.5);
impl_choice!(P0.0, P1.1, P2.2, P3.3, P4.4, P5.5, P6.6);
impl_choice!(P0.0, P1.1, P2.2, P3.3, P4.4, P5.5, P6.6, P7.7);

/// Sequential composition: see [`sequence`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Sequence<T> {
    steps: T,
}

/// Applies each step in order, each to the remainder left by the previous.
///
/// The first failing step aborts the whole sequence and its error is
/// propagated verbatim; later steps are never evaluated. On success every
/// step's value is bridged into one [`Slots`] array, filled left to right,
/// and returned along with the last step's remainder. The number of steps
/// is fixed when the sequence is constructed.
///
/// A step which itself yields a slot array (a bare nested `Sequence` or
/// `Many`) cannot be bridged into a single slot and produces
/// [`ParseError::Internal`]; wrap such grammars in a function that reshapes
/// the inner result first.
pub const fn sequence<T>(steps: T) -> Sequence<T> {
    Sequence { steps }
}

macro_rules! impl_sequence {
    ($( $step:ident . $idx:tt ),+) => {
        impl<'i, X, $( $step ),+> Parse<'i, X> for Sequence<($( $step, )+)>
        where
            X: Payload,
            $( $step: Parse<'i, X> ),+
        {
            fn parse(&self, input: &'i str) -> Parsed<'i, X> {
                let mut out = Slots::new();
                let mut rest = input;

                $(
                    let (val, after) = self.steps.$idx.parse(rest)?;
                    let single = val
                        .into_single()
                        .ok_or(ParseError::Internal(NESTED_SLOT))?;
                    out.push(single)?;
                    rest = after;
                )+

                trace!(
                    "Sequence: matched input {:?}, remaining {:?}",
                    input, rest
                );
                Ok((out.into(), rest))
            }
        }
    };
}

impl_sequence!(P0.0);
impl_sequence!(P0.0, P1.1);
impl_sequence!(P0.0, P1.1, P2.2);
impl_sequence!(P0.0, P1.1, P2.2, P3.3);
impl_sequence!(P0.0, P1.1, P2.2, P3.3, P4.4);
impl_sequence!(P0.0, P1.1, P2.2, P3.3, P4.4, P5.5);
impl_sequence!(P0.0, P1.1, P2.2, P3.3, P4.4, P5.5, P6.6);
impl_sequence!(P0.0, P1.1, P2.2, P3.3, P4.4, P5.5, P6.6, P7.7);

/// Greedy repetition: see [`many`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Many<P> {
    inner: P,
}

/// Applies a parser zero or more times, greedily.
///
/// Each success is bridged into the next slot and parsing resumes on its
/// remainder, until either the input is exhausted (success with an empty
/// remainder) or the parser fails (success; the failing attempt leaves the
/// remainder untouched). Zero matches is an ordinary success, so `many`
/// never fails on mismatched input; one-or-more is spelled
/// `sequence((p, many(p)))`.
///
/// Filling every slot without terminating is a grammar defect reported as
/// [`ParseError::Internal`]; a parser which succeeds without consuming
/// (such as [`Empty`]) always ends up there.
pub const fn many<P>(inner: P) -> Many<P> {
    Many { inner }
}

impl<'i, X, P> Parse<'i, X> for Many<P>
where
    X: Payload,
    P: Parse<'i, X>,
{
    fn parse(&self, input: &'i str) -> Parsed<'i, X> {
        let mut out = Slots::new();
        let mut rest = input;

        for _ in 0..MAX_SEQUENCE_LEN {
            let (val, after) = match self.inner.parse(rest) {
                Ok(res) => res,
                Err(_) => {
                    trace!("Many: matched input {:?}, remaining {:?}", input, rest);
                    return Ok((out.into(), rest));
                }
            };

            let single = val
                .into_single()
                .ok_or(ParseError::Internal(NESTED_SLOT))?;
            out.push(single)?;
            rest = after;

            if rest.is_empty() {
                trace!("Many: matched input {:?} to the end", input);
                return Ok((out.into(), rest));
            }
        }

        trace!("Many: filled every slot on input {:?}", input);
        Err(ParseError::Internal(
            "repetition filled every slot without terminating",
        ))
    }
}

/// Negative lookahead: see [`not`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Not<P> {
    inner: P,
}

/// Succeeds, consuming nothing, exactly when its parser fails.
///
/// On success the value is [`Value::Empty`] and the remainder is the input
/// unchanged. Fails whenever the inner parser succeeds, no matter how much
/// the inner parser would have consumed.
pub const fn not<P>(inner: P) -> Not<P> {
    Not { inner }
}

impl<'i, X, P> Parse<'i, X> for Not<P>
where
    X: Payload,
    P: Parse<'i, X>,
{
    fn parse(&self, input: &'i str) -> Parsed<'i, X> {
        match self.inner.parse(input) {
            Ok(_) => {
                trace!("Not: failed on input {:?}", input);
                Err(ParseError::Mismatch("negative lookahead matched"))
            }
            Err(_) => {
                trace!("Not: matched on input {:?}", input);
                Ok((Value::Empty.into(), input))
            }
        }
    }
}

/// Value discard: see [`skip`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Skip<P> {
    inner: P,
}

/// Runs a parser and discards its value.
///
/// Consumption is kept; the value is replaced with [`Value::Empty`].
/// Failure is forwarded unchanged. Useful for delimiters and padding whose
/// presence matters but whose content does not, e.g.
/// `skip(many(Char::lit(' ')))`.
pub const fn skip<P>(inner: P) -> Skip<P> {
    Skip { inner }
}

impl<'i, X, P> Parse<'i, X> for Skip<P>
where
    X: Payload,
    P: Parse<'i, X>,
{
    fn parse(&self, input: &'i str) -> Parsed<'i, X> {
        let (_, rest) = self.inner.parse(input)?;
        trace!("Skip: matched input {:?}, remaining {:?}", input, rest);
        Ok((Value::Empty.into(), rest))
    }
}

/// Optional match: see [`maybe`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Maybe<P> {
    inner: Choice<(P, Empty)>,
}

/// Makes a parser optional.
///
/// Exactly `choice((p, empty()))`: the parser's own result on success,
/// otherwise a zero-consumption [`Value::Empty`] success.
pub const fn maybe<P>(inner: P) -> Maybe<P> {
    Maybe {
        inner: choice((inner, Empty)),
    }
}

impl<'i, X, P> Parse<'i, X> for Maybe<P>
where
    X: Payload,
    P: Parse<'i, X>,
{
    fn parse(&self, input: &'i str) -> Parsed<'i, X> {
        self.inner.parse(input)
    }
}

/// Whole-input anchor: see [`complete`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Final<P> {
    inner: Sequence<(P, Not<Char>)>,
}

/// Requires a parser to consume the entire input.
///
/// Exactly `sequence((p, not(Char::any())))` with the parser's own value
/// unwrapped back out of slot 0: succeeds only when `p` succeeds and no
/// character remains. This is the canonical top-level entry point for
/// "parse this whole buffer or fail".
///
/// Because the anchor is built on [`sequence`], a parser whose own result
/// is a slot array fails here with [`ParseError::Internal`]; anchor such
/// grammars through a reshaping function instead.
pub const fn complete<P>(inner: P) -> Final<P> {
    Final {
        inner: sequence((inner, not(Char::any()))),
    }
}

impl<'i, X, P> Parse<'i, X> for Final<P>
where
    X: Payload,
    P: Parse<'i, X>,
{
    fn parse(&self, input: &'i str) -> Parsed<'i, X> {
        let (out, rest) = self.inner.parse(input)?;
        let slots = out
            .into_slots()
            .ok_or(ParseError::Internal("anchor sequence produced a single value"))?;
        let val = slots
            .get(0)
            .copied()
            .ok_or(ParseError::Internal("anchor sequence produced no value"))?;

        trace!("Final: matched the whole input {:?}", input);
        Ok((val.into(), rest))
    }
}
