//! The tagged value types shared by every parser.
//!
//! Each successful parse yields an [`Output`]: either a single [`Value`]
//! (terminal parsers, lookahead, `Skip`) or a [`Slots`] array of values
//! (`Sequence`, `Many`). Grammars may register one extra payload type via
//! the `X` type parameter; see [`Payload`].

use std::fmt;

use crate::slots::Slots;

/// A marker trait for grammar-registered payload types.
///
/// A grammar which needs to carry its own datatypes through the combinators
/// (syntax nodes, operator tags, and so on) wraps them in a single type and
/// uses it as the `X` parameter of [`Value`] and [`Parse`]. The type must be
/// cheap to copy and structurally comparable; every such type implements
/// this trait automatically.
///
/// All parsers composed into one grammar must agree on `X`. This is enforced
/// by the type system, so a mixed-up grammar fails to compile rather than
/// surfacing a conversion error at parse time.
///
/// [`Parse`]: crate::Parse
pub trait Payload: Copy + fmt::Debug + PartialEq + Eq {}
impl<X> Payload for X where X: Copy + fmt::Debug + PartialEq + Eq {}

/// The default payload for grammars with no registered types.
///
/// This enum has no variants, so a [`Value::Ext`] carrying it can never be
/// constructed.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum NoExt {}

/// A single parsed value.
///
/// Exactly one variant is active at a time. Equality is structural;
/// `Empty` always equals `Empty`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Value<'i, X = NoExt> {
    /// Sentinel marking an unfilled slot. Never escapes a successful parse.
    Uninit,

    /// An explicit "no value", distinct from the absence of a value.
    ///
    /// Produced by `Empty`, `Not`, `Skip` and a fallen-through `Maybe`.
    Empty,

    /// A single character.
    Char(char),

    /// A contiguous run of characters, borrowed from the input.
    Str(&'i str),

    /// A 64-bit signed integer.
    Int(i64),

    /// A grammar-registered payload.
    Ext(X),
}

impl<'i, X: Payload> Value<'i, X> {
    /// Returns the contained character, if this is a `Char` value.
    pub fn as_char(&self) -> Option<char> {
        match *self {
            Value::Char(c) => Some(c),
            _ => None,
        }
    }

    /// Returns the borrowed input slice, if this is a `Str` value.
    pub fn as_str(&self) -> Option<&'i str> {
        match *self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the contained integer, if this is an `Int` value.
    pub fn as_int(&self) -> Option<i64> {
        match *self {
            Value::Int(i) => Some(i),
            _ => None,
        }
    }

    /// Returns a reference to the grammar payload, if this is an `Ext` value.
    pub fn as_ext(&self) -> Option<&X> {
        match self {
            Value::Ext(x) => Some(x),
            _ => None,
        }
    }
}

/// The result payload of a successful parse.
///
/// This is the wide union: everything a [`Value`] can hold, plus a whole
/// slot array. `Sequence` and `Many` produce the `Slots` variant; every
/// other parser produces `Single`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Output<'i, X = NoExt> {
    /// One value.
    Single(Value<'i, X>),

    /// An ordered array of values, one per matched step.
    Slots(Slots<'i, X>),
}

impl<'i, X> Output<'i, X> {
    /// Bridges this output into a single [`Value`].
    ///
    /// Returns `None` when the active kind is not a member of the narrow
    /// set, i.e. when this output is itself a slot array. `Sequence` and
    /// `Many` use this to normalize each child's result into one slot; a
    /// `None` there means a nested sequence was used where a single value
    /// was required, which is a grammar-authoring defect rather than an
    /// input mismatch.
    pub fn into_single(self) -> Option<Value<'i, X>> {
        match self {
            Output::Single(val) => Some(val),
            Output::Slots(_) => None,
        }
    }

    /// Extracts the slot array, if this output holds one.
    pub fn into_slots(self) -> Option<Slots<'i, X>> {
        match self {
            Output::Slots(slots) => Some(slots),
            Output::Single(_) => None,
        }
    }
}

impl<'i, X> From<Value<'i, X>> for Output<'i, X> {
    fn from(val: Value<'i, X>) -> Self {
        Output::Single(val)
    }
}

impl<'i, X> From<Slots<'i, X>> for Output<'i, X> {
    fn from(slots: Slots<'i, X>) -> Self {
        Output::Slots(slots)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_equals_empty() {
        let a: Value<NoExt> = Value::Empty;
        let b: Value<NoExt> = Value::Empty;
        assert_eq!(a, b);
        assert_ne!(a, Value::Uninit);
        assert_ne!(a, Value::Char('e'));
    }

    #[test]
    fn test_accessors() {
        let c: Value<NoExt> = Value::Char('x');
        assert_eq!(c.as_char(), Some('x'));
        assert_eq!(c.as_int(), None);

        let i: Value<NoExt> = Value::Int(42);
        assert_eq!(i.as_int(), Some(42));
        assert_eq!(i.as_str(), None);

        let s: Value<NoExt> = Value::Str("abc");
        assert_eq!(s.as_str(), Some("abc"));
        assert_eq!(s.as_char(), None);
    }

    #[test]
    fn test_bridge_single() {
        let out: Output<NoExt> = Value::Int(7).into();
        assert_eq!(out.into_single(), Some(Value::Int(7)));
        assert_eq!(out.into_slots(), None);
    }

    #[test]
    fn test_bridge_slots() {
        let mut slots: Slots<NoExt> = Slots::new();
        slots.push(Value::Char('a')).unwrap();

        let out: Output<NoExt> = slots.into();
        assert_eq!(out.into_single(), None);
        assert!(out.into_slots().is_some());
    }

    #[test]
    fn test_ext_payload() {
        #[derive(Copy, Clone, Debug, PartialEq, Eq)]
        enum Op {
            Plus,
        }

        let v: Value<Op> = Value::Ext(Op::Plus);
        assert_eq!(v.as_ext(), Some(&Op::Plus));
        assert_eq!(v, Value::Ext(Op::Plus));
    }
}
