//! Leaf parsers which match directly against characters.
//!
//! Each terminal is constructed either as a wildcard (`any`, matches any
//! instance of its class) or anchored to one fixed value (`lit`). All of
//! them consume from the front of the input and borrow rather than copy:
//! the only values derived from character data are zero-copy slices.

use crate::{
    error::ParseError,
    trace::trace,
    value::{Payload, Value},
    Parse, Parsed,
};

/// Matches a single character.
///
/// The wildcard form consumes and yields any one character; the anchored
/// form requires the next character to equal its target. Fails on empty
/// input. Consumes exactly one character on success.
///
/// ```
/// use pique::{Char, Output, Parse, Value};
///
/// let a = Char::lit('a');
/// let (out, rest): (Output, _) = a.parse("abc").unwrap();
/// assert_eq!(out.into_single(), Some(Value::Char('a')));
/// assert_eq!(rest, "bc");
/// let res: pique::Parsed = a.parse("xyz");
/// assert!(res.is_err());
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Char {
    want: Option<char>,
}

impl Char {
    /// Matches any one character.
    pub const fn any() -> Char {
        Char { want: None }
    }

    /// Matches exactly the character `c`.
    pub const fn lit(c: char) -> Char {
        Char { want: Some(c) }
    }
}

impl<'i, X: Payload> Parse<'i, X> for Char {
    fn parse(&self, input: &'i str) -> Parsed<'i, X> {
        let c = match input.chars().next() {
            Some(c) => c,
            None => {
                trace!("Char: failed on empty input");
                return Err(ParseError::Mismatch(
                    "unexpected end of input while matching a character",
                ));
            }
        };

        match self.want {
            Some(want) if want != c => {
                trace!("Char({:?}): failed on input {:?}", want, input);
                Err(ParseError::Mismatch("character mismatch"))
            }
            _ => {
                let rest = &input[c.len_utf8()..];
                trace!("Char: matched {:?}, remaining {:?}", c, rest);
                Ok((Value::Char(c).into(), rest))
            }
        }
    }
}

/// Matches an exact literal run of characters.
///
/// Fails when the input is shorter than the literal or their prefixes
/// differ; consumes the literal's length on success. The yielded value is
/// the matched prefix of the *input*, so it borrows from the input like
/// every other slice result.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Str<'p> {
    want: &'p str,
}

impl<'p> Str<'p> {
    /// Matches exactly the literal `s`.
    pub const fn lit(s: &'p str) -> Str<'p> {
        Str { want: s }
    }
}

impl<'i, 'p, X: Payload> Parse<'i, X> for Str<'p> {
    fn parse(&self, input: &'i str) -> Parsed<'i, X> {
        if input.len() < self.want.len() {
            trace!("Str({:?}): input {:?} too short", self.want, input);
            return Err(ParseError::Mismatch(
                "unexpected end of input while matching a literal",
            ));
        }

        if !input.starts_with(self.want) {
            trace!("Str({:?}): failed on input {:?}", self.want, input);
            return Err(ParseError::Mismatch("literal mismatch"));
        }

        let (matched, rest) = input.split_at(self.want.len());
        trace!("Str({:?}): matched, remaining {:?}", self.want, rest);
        Ok((Value::Str(matched).into(), rest))
    }
}

/// Matches a single ASCII decimal digit, yielding its value `0..=9`.
///
/// The anchored form additionally requires equality with a fixed digit.
/// Fails on empty input or a non-digit character.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Digit {
    want: Option<i64>,
}

impl Digit {
    /// Matches any one decimal digit.
    pub const fn any() -> Digit {
        Digit { want: None }
    }

    /// Matches exactly the digit `d`.
    ///
    /// `d` must be in `0..=9`.
    pub const fn lit(d: i64) -> Digit {
        debug_assert!(0 <= d && d <= 9);
        Digit { want: Some(d) }
    }
}

impl<'i, X: Payload> Parse<'i, X> for Digit {
    fn parse(&self, input: &'i str) -> Parsed<'i, X> {
        let c = match input.chars().next() {
            Some(c) => c,
            None => {
                trace!("Digit: failed on empty input");
                return Err(ParseError::Mismatch(
                    "unexpected end of input while matching a digit",
                ));
            }
        };

        let val = match c.to_digit(10) {
            Some(val) => i64::from(val),
            None => {
                trace!("Digit: failed on input {:?}", input);
                return Err(ParseError::Mismatch("expected a digit"));
            }
        };

        match self.want {
            Some(want) if want != val => {
                trace!("Digit({}): failed on input {:?}", want, input);
                Err(ParseError::Mismatch("digit mismatch"))
            }
            _ => {
                let rest = &input[1..];
                trace!("Digit: matched {}, remaining {:?}", val, rest);
                Ok((Value::Int(val).into(), rest))
            }
        }
    }
}

/// Matches an unsigned run of decimal digits, yielding its integer value.
///
/// The wildcard form greedily consumes the maximal run of at least one
/// leading digit; the accumulated value wraps around on `i64` overflow
/// rather than failing, so a long enough run can yield a negative value.
/// The anchored form requires the input to begin with the
/// exact decimal rendering of its target; the number of characters
/// examined is derived from the target, and no non-digit boundary is
/// required after the match, so `Int::lit(12)` matches the first two
/// characters of `"123"` and leaves `"3"` unconsumed.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Int {
    want: Option<i64>,
}

impl Int {
    /// Matches any run of one or more decimal digits.
    pub const fn any() -> Int {
        Int { want: None }
    }

    /// Matches exactly the decimal rendering of `i`.
    pub const fn lit(i: i64) -> Int {
        Int { want: Some(i) }
    }
}

impl<'i, X: Payload> Parse<'i, X> for Int {
    fn parse(&self, input: &'i str) -> Parsed<'i, X> {
        let want = match self.want {
            Some(want) => want,
            None => {
                let digits = input.bytes().take_while(u8::is_ascii_digit).count();
                if digits == 0 {
                    trace!("Int: failed on input {:?}", input);
                    return Err(ParseError::Mismatch("expected at least one digit"));
                }

                let (matched, rest) = input.split_at(digits);
                let val = matched
                    .bytes()
                    .fold(0i64, |acc, b| acc.wrapping_mul(10).wrapping_add(i64::from(b - b'0')));
                trace!("Int: matched {}, remaining {:?}", val, rest);
                return Ok((Value::Int(val).into(), rest));
            }
        };

        let len = decimal_len(want);
        let bytes = input.as_bytes();
        if bytes.len() < len {
            trace!("Int({}): input {:?} too short", want, input);
            return Err(ParseError::Mismatch(
                "unexpected end of input while matching an integer",
            ));
        }

        let mut val = 0i64;
        for &b in &bytes[..len] {
            if !b.is_ascii_digit() {
                trace!("Int({}): failed on input {:?}", want, input);
                return Err(ParseError::Mismatch("integer mismatch"));
            }
            val = val * 10 + i64::from(b - b'0');
        }

        if val != want {
            trace!("Int({}): failed on input {:?}", want, input);
            return Err(ParseError::Mismatch("integer mismatch"));
        }

        // The first `len` bytes are ASCII digits, so this is a character
        // boundary.
        let rest = &input[len..];
        trace!("Int({}): matched, remaining {:?}", want, rest);
        Ok((Value::Int(want).into(), rest))
    }
}

/// The number of characters in the decimal rendering of `i`.
fn decimal_len(mut i: i64) -> usize {
    let mut len = 1;
    while i >= 10 {
        i /= 10;
        len += 1;
    }
    len
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Parsed;

    fn assert_match<'i>(p: &impl Parse<'i>, input: &'i str, want: Value<'i>, want_rest: &str) {
        let res: Parsed = p.parse(input);
        let (out, rest) = res.expect("parse should succeed");
        assert_eq!(out.into_single(), Some(want));
        assert_eq!(rest, want_rest);
    }

    fn assert_fails<'i>(p: &impl Parse<'i>, input: &'i str) {
        assert!(p.parse(input).is_err());
    }

    #[test]
    fn test_char_any() {
        assert_match(&Char::any(), "abc", Value::Char('a'), "bc");
        assert_match(&Char::any(), "xyz", Value::Char('x'), "yz");
        assert_fails(&Char::any(), "");
    }

    #[test]
    fn test_char_lit() {
        assert_match(&Char::lit('a'), "abc", Value::Char('a'), "bc");
        assert_fails(&Char::lit('a'), "xyz");
        assert_fails(&Char::lit('a'), "");
    }

    #[test]
    fn test_str() {
        assert_match(&Str::lit("abc"), "abcdef", Value::Str("abc"), "def");
        assert_fails(&Str::lit("abc"), "abxyz");
        assert_fails(&Str::lit("abc"), "axcxyz");
        assert_fails(&Str::lit("abc"), "xbcxyz");
        assert_fails(&Str::lit("abc"), "ab");
        assert_fails(&Str::lit("abc"), "");
    }

    #[test]
    fn test_str_yields_input_slice() {
        let input = String::from("abcdef");
        let (out, _): (crate::Output, _) = Str::lit("abc").parse(&input).unwrap();
        let matched = out.into_single().and_then(|v| v.as_str()).unwrap();

        // Zero-copy: the value aliases the input, not the literal.
        assert!(std::ptr::eq(matched.as_ptr(), input.as_ptr()));
    }

    #[test]
    fn test_digit_any() {
        assert_match(&Digit::any(), "1ab", Value::Int(1), "ab");
        assert_fails(&Digit::any(), "abc");
        assert_fails(&Digit::any(), "");
    }

    #[test]
    fn test_digit_lit() {
        assert_match(&Digit::lit(1), "1ab", Value::Int(1), "ab");
        assert_fails(&Digit::lit(1), "2ab");
        assert_fails(&Digit::lit(1), "abc");
        assert_fails(&Digit::lit(1), "");
    }

    #[test]
    fn test_int_any() {
        assert_match(&Int::any(), "123abc", Value::Int(123), "abc");
        assert_match(&Int::any(), "0x", Value::Int(0), "x");
        assert_fails(&Int::any(), "abcdef");
        assert_fails(&Int::any(), "");
    }

    #[test]
    fn test_int_any_wraps_on_overflow() {
        // One past i64::MAX wraps around; the run is never rejected for
        // its magnitude.
        assert_match(
            &Int::any(),
            "9223372036854775808x",
            Value::Int(i64::MIN),
            "x",
        );
    }

    #[test]
    fn test_int_lit() {
        assert_match(&Int::lit(12), "12ab", Value::Int(12), "ab");
        assert_fails(&Int::lit(12), "14abc");
        assert_fails(&Int::lit(12), "143abc");
        assert_fails(&Int::lit(12), "423abc");
        assert_fails(&Int::lit(12), "1abc");
        assert_fails(&Int::lit(12), "abc");
        assert_fails(&Int::lit(12), "1");
        assert_fails(&Int::lit(12), "");
    }

    #[test]
    fn test_int_lit_no_boundary_check() {
        // The anchored form matches a digit-count-bounded prefix and does
        // not require a non-digit to follow.
        assert_match(&Int::lit(12), "123abc", Value::Int(12), "3abc");
    }

    #[test]
    fn test_decimal_len() {
        assert_eq!(decimal_len(0), 1);
        assert_eq!(decimal_len(9), 1);
        assert_eq!(decimal_len(10), 2);
        assert_eq!(decimal_len(1337), 4);
    }
}
