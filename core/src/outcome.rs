//! Terminal operators over a finished [`Case`].
//!
//! The outcome of a match expression is `Option<R>`: `Some` when a clause
//! action ran, `None` when nothing matched. These operators unwrap it in the
//! usual ways. Fallback closures only run when nothing matched.

use crate::{Case, CaseError};

impl<R> Case<R> {
    /// Returns `true` once a clause action has produced a value.
    #[must_use]
    pub fn is_resolved(&self) -> bool {
        self.state.is_resolved()
    }

    /// Borrow the produced value, if any.
    #[must_use]
    pub fn result(&self) -> Option<&R> {
        self.state.outcome()
    }

    /// Take the produced value, if any.
    #[must_use]
    pub fn into_result(self) -> Option<R> {
        self.state.into_outcome()
    }

    /// Take the produced value.
    ///
    /// # Errors
    ///
    /// Returns [`CaseError::EmptyResult`] if no clause matched.
    pub fn get(self) -> Result<R, CaseError> {
        self.into_result().ok_or(CaseError::EmptyResult)
    }

    /// Take the produced value or `default`.
    pub fn or_else(self, default: R) -> R {
        self.into_result().unwrap_or(default)
    }

    /// Take the produced value, or compute a fallback if no clause matched.
    pub fn or_else_get(self, fallback: impl FnOnce() -> R) -> R {
        self.into_result().unwrap_or_else(fallback)
    }

    /// Take the produced value, or raise the supplied error if no clause matched.
    ///
    /// # Errors
    ///
    /// Returns `error()` if no clause matched.
    pub fn or_else_throw<E>(self, error: impl FnOnce() -> E) -> Result<R, E> {
        self.into_result().ok_or_else(error)
    }

    /// Take the produced value.
    ///
    /// # Errors
    ///
    /// Returns [`CaseError::NoClauseMatched`] if no clause matched.
    pub fn or_no_match(self) -> Result<R, CaseError> {
        if !self.is_resolved() {
            tracing::debug!(clauses = self.trace().len(), "no clause matched");
        }
        self.into_result().ok_or(CaseError::NoClauseMatched)
    }

    /// Transform the produced value, propagating absence.
    pub fn map<U>(self, f: impl FnOnce(R) -> U) -> Option<U> {
        self.into_result().map(f)
    }

    /// Transform the produced value with a function that may itself produce nothing.
    pub fn flat_map<U>(self, f: impl FnOnce(R) -> Option<U>) -> Option<U> {
        self.into_result().and_then(f)
    }
}
