//! A fixed-capacity, left-to-right array of parsed values.

use std::fmt;

use crate::{
    error::ParseError,
    value::{NoExt, Payload, Value},
};

/// The capacity of every [`Slots`] array in the program.
///
/// This bounds both the arity of a `Sequence` and the number of repetitions
/// a `Many` may collect before reporting an internal error.
pub const MAX_SEQUENCE_LEN: usize = 100;

/// A fixed-capacity ordered array of [`Value`]s.
///
/// Filled left to right from index 0 with no gaps; unfilled slots hold
/// [`Value::Uninit`]. Produced by `Sequence` (one slot per step) and `Many`
/// (one slot per repetition). Lives entirely on the stack; no allocation
/// occurs when filling it.
#[derive(Copy, Clone, PartialEq, Eq)]
pub struct Slots<'i, X = NoExt> {
    vals: [Value<'i, X>; MAX_SEQUENCE_LEN],
    len: usize,
}

impl<'i, X: Payload> Slots<'i, X> {
    /// Creates an empty slot array.
    pub fn new() -> Self {
        Slots {
            vals: [Value::Uninit; MAX_SEQUENCE_LEN],
            len: 0,
        }
    }

    /// The number of filled slots.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether no slot has been filled.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the value in slot `index`, if that slot is filled.
    pub fn get(&self, index: usize) -> Option<&Value<'i, X>> {
        self.vals[..self.len].get(index)
    }

    /// Appends a value to the next free slot.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::Internal`] if every slot is already filled.
    pub fn push(&mut self, val: Value<'i, X>) -> Result<(), ParseError> {
        if self.len == MAX_SEQUENCE_LEN {
            return Err(ParseError::Internal("slot array capacity exceeded"));
        }

        self.vals[self.len] = val;
        self.len += 1;
        Ok(())
    }

    /// Returns an iterator over the filled slots, in order.
    pub fn iter(&self) -> impl Iterator<Item = &Value<'i, X>> {
        self.vals[..self.len].iter()
    }

    /// Returns an iterator over the filled slots, skipping `Empty` values.
    ///
    /// `Skip`ped steps and lookaheads leave `Empty` residue in a sequence's
    /// slots; grammars walking the meaningful results use this to step past
    /// it.
    pub fn values(&self) -> impl Iterator<Item = &Value<'i, X>> {
        self.iter().filter(|val| !matches!(val, Value::Empty))
    }
}

impl<'i, X: Payload> Default for Slots<'i, X> {
    fn default() -> Self {
        Slots::new()
    }
}

impl<'i, X: fmt::Debug> fmt::Debug for Slots<'i, X> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_list().entries(self.vals[..self.len].iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fill_in_order() {
        let mut slots: Slots<NoExt> = Slots::new();
        assert!(slots.is_empty());

        slots.push(Value::Char('a')).unwrap();
        slots.push(Value::Int(2)).unwrap();
        assert_eq!(slots.len(), 2);
        assert_eq!(slots.get(0), Some(&Value::Char('a')));
        assert_eq!(slots.get(1), Some(&Value::Int(2)));
        assert_eq!(slots.get(2), None);
    }

    #[test]
    fn test_capacity_error() {
        let mut slots: Slots<NoExt> = Slots::new();
        for _ in 0..MAX_SEQUENCE_LEN {
            slots.push(Value::Empty).unwrap();
        }

        let err = slots.push(Value::Empty).unwrap_err();
        assert!(matches!(err, ParseError::Internal(_)));
    }

    #[test]
    fn test_values_skips_empty() {
        let mut slots: Slots<NoExt> = Slots::new();
        slots.push(Value::Int(1)).unwrap();
        slots.push(Value::Empty).unwrap();
        slots.push(Value::Int(2)).unwrap();

        let vals: Vec<_> = slots.values().copied().collect();
        assert_eq!(vals, vec![Value::Int(1), Value::Int(2)]);

        let all: Vec<_> = slots.iter().copied().collect();
        assert_eq!(all.len(), 3);
    }

    #[test]
    fn test_eq_ignores_unfilled_tail() {
        let mut a: Slots<NoExt> = Slots::new();
        let mut b: Slots<NoExt> = Slots::new();
        a.push(Value::Char('x')).unwrap();
        b.push(Value::Char('x')).unwrap();
        assert_eq!(a, b);

        b.push(Value::Char('y')).unwrap();
        assert_ne!(a, b);
    }
}
