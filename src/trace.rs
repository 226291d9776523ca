//! Combinator tracing.
//!
//! With the `trace` cargo feature enabled, parsers emit a `log::trace!`
//! line at each decision point (match, mismatch, remaining input). With the
//! feature disabled (the default) the calls compile away entirely and the
//! `log` crate is not linked. Tracing never affects parse outcomes.

macro_rules! trace {
    ($($arg:tt)*) => {{
        #[cfg(feature = "trace")]
        {
            log::trace!($($arg)*);
        }
    }};
}

pub(crate) use trace;
