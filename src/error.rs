//! Parse failure reporting.

use thiserror::Error;

/// An error produced by a parser.
///
/// Both variants travel the same [`Parsed`] channel and combinators treat
/// them identically: `Choice` moves on to its next alternative and
/// `Many`/`Maybe` absorb the failure into a zero-match success, regardless
/// of kind. The discriminant is for reporting only; an `Internal` error
/// that reaches the top level points at a defect in the grammar itself,
/// not at the input.
///
/// No allocation occurs when constructing either variant, and no location
/// metadata is attached; grammars needing positions can compare the slice
/// addresses of their inputs and remainders.
///
/// [`Parsed`]: crate::Parsed
#[derive(Copy, Clone, Debug, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The input did not match the grammar at this point.
    #[error("{0}")]
    Mismatch(&'static str),

    /// A grammar-authoring defect: a sequence result where a single value
    /// was required, or a repetition that filled every slot.
    #[error("internal error: {0}")]
    Internal(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(
            ParseError::Mismatch("character mismatch").to_string(),
            "character mismatch"
        );
        assert_eq!(
            ParseError::Internal("slot array capacity exceeded").to_string(),
            "internal error: slot array capacity exceeded"
        );
    }
}
