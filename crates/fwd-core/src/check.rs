//! Checked assertions for user misuse and engine invariants.
//!
//! Both checks are active when the `checked` feature is enabled (default) or
//! the crate is built with debug assertions. A failed check logs the error and
//! panics; there is no recovery path inside an operator.

use crate::error::Error;

/// Whether assertions are compiled in for this build.
pub const CHECKS_ENABLED: bool = cfg!(any(feature = "checked", debug_assertions));

/// Report misuse of the public API (bad index, width mismatch, ...).
#[inline]
#[track_caller]
pub fn user_assert(ok: bool, err: impl FnOnce() -> Error) {
    if CHECKS_ENABLED && !ok {
        user_failure(err())
    }
}

/// Report a broken engine invariant.
#[inline]
#[track_caller]
pub fn internal_assert(ok: bool, err: impl FnOnce() -> String) {
    if CHECKS_ENABLED && !ok {
        internal_failure(Error::Internal(err()))
    }
}

/// Abort the current computation with a user-misuse error.
#[cold]
#[track_caller]
pub fn user_failure(err: Error) -> ! {
    tracing::error!(error = %err, internal = false, "user assertion failed");
    panic!("user assertion failed: {err}")
}

/// Abort the current computation with an internal error.
#[cold]
#[track_caller]
pub fn internal_failure(err: Error) -> ! {
    tracing::error!(error = %err, internal = true, "internal error");
    panic!("internal error: {err}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_passing_checks_are_silent() {
        user_assert(true, || Error::NotDependent { index: 0 });
        internal_assert(true, || "unreachable".to_string());
    }

    #[test]
    #[should_panic(expected = "user assertion failed: index 4 out of bounds [0,2)")]
    fn test_user_assert_panics() {
        user_assert(false, || Error::IndexOutOfBounds { index: 4, width: 2 });
    }

    #[test]
    #[should_panic(expected = "internal error: lhs-input is not a dependent variable")]
    fn test_internal_assert_panics() {
        internal_assert(false, || "lhs-input is not a dependent variable".to_string());
    }
}
