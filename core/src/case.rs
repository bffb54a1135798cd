//! Case — Guarded multi-value matching with first-match-wins semantics
//!
//! A [`Case`] captures a tuple of subject [`Value`]s once, then accepts
//! clauses in declaration order. Each clause is one [`Criterion`] per subject
//! plus a deferred action. The first clause whose criteria all match gets to
//! run its action; every other action is dropped without being called.
//!
//! # INV: at most one action runs
//!
//! The whole chain is driven by a single [`MatchState`]. Only the `Pending`
//! state (entered when a clause matches while `Unresolved`) lets a
//! [`Clause`] run its action, and running it moves the state to `Resolved`
//! for good. Clauses registered after that are still arity-checked, but their
//! actions are never invoked.
//!
//! # Example
//!
//! ```
//! use kase::{criteria, subjects, Case, Value, NON_NULL, NULL};
//!
//! fn describe(x: Option<i64>, y: Option<i64>) -> String {
//!     Case::of(subjects![Value::nullable(x), Value::nullable(y)])
//!         .when(criteria![NON_NULL, NON_NULL]).unwrap().apply_with(|v| format!("both {:?}", v))
//!         .when(criteria![NON_NULL, NULL]).unwrap().apply(|| "only x".to_string())
//!         .when(criteria![NULL, NON_NULL]).unwrap().apply(|| "only y".to_string())
//!         .or_else("neither".to_string())
//! }
//!
//! assert_eq!(describe(Some(1), None), "only x");
//! assert_eq!(describe(None, None), "neither");
//! ```

use std::fmt;

use crate::criterion::first_mismatch;
use crate::{CaseError, Criterion, EvalTrace, StepOutcome, Value};

/// Where a match expression stands.
///
/// Transitions only go forward:
///
/// ```text
/// Unresolved --arm--> Pending --settle--> Resolved(R)
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchState<R> {
    /// No clause has matched yet.
    Unresolved,
    /// A clause matched and its action has not run yet.
    Pending,
    /// An action ran and produced this value.
    Resolved(R),
}

impl<R> MatchState<R> {
    /// Returns `true` once an action has produced a value.
    #[must_use]
    pub fn is_resolved(&self) -> bool {
        matches!(self, Self::Resolved(_))
    }

    /// Returns `true` while no clause has matched.
    #[must_use]
    pub fn is_unresolved(&self) -> bool {
        matches!(self, Self::Unresolved)
    }

    /// `Unresolved` becomes `Pending`. Other states are kept.
    fn arm(self) -> Self {
        match self {
            Self::Unresolved => Self::Pending,
            other => other,
        }
    }

    /// Run `action` if and only if the state is `Pending`.
    fn settle(self, action: impl FnOnce() -> R) -> Self {
        match self {
            Self::Pending => Self::Resolved(action()),
            other => other,
        }
    }

    /// Fallible form of [`settle`](Self::settle). An `Err` from the action
    /// ends the expression.
    fn try_settle<E>(self, action: impl FnOnce() -> Result<R, E>) -> Result<Self, E> {
        match self {
            Self::Pending => action().map(Self::Resolved),
            other => Ok(other),
        }
    }

    /// The produced value, if any.
    pub(crate) fn into_outcome(self) -> Option<R> {
        match self {
            Self::Resolved(value) => Some(value),
            Self::Unresolved | Self::Pending => None,
        }
    }

    /// Borrow the produced value, if any.
    pub(crate) fn outcome(&self) -> Option<&R> {
        match self {
            Self::Resolved(value) => Some(value),
            Self::Unresolved | Self::Pending => None,
        }
    }
}

/// A match expression over a fixed tuple of subjects.
///
/// Built with [`Case::of`], extended with [`Case::when`], and finished with one
/// of the terminal operators ([`or_else`](Case::or_else), [`get`](Case::get),
/// [`or_no_match`](Case::or_no_match), ...).
///
/// # Type Parameters
///
/// - `R`: the value produced by the winning clause's action
pub struct Case<R> {
    subjects: Vec<Value>,
    pub(crate) state: MatchState<R>,
    trace: EvalTrace,
}

impl<R> Case<R> {
    /// Begin a match over the given subjects.
    ///
    /// Subjects may contain [`Value::Null`]. The number of subjects fixes the
    /// arity every clause must have.
    pub fn of<I>(subjects: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        Self {
            subjects: subjects.into_iter().map(Into::into).collect(),
            state: MatchState::Unresolved,
            trace: EvalTrace::default(),
        }
    }

    /// Begin a match over a subject tuple that may itself be absent.
    ///
    /// # Errors
    ///
    /// Returns [`CaseError::MissingArgument`] if `subjects` is `None`. A tuple
    /// that contains null elements is fine.
    pub fn try_of<I>(subjects: Option<I>) -> Result<Self, CaseError>
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        subjects
            .map(Self::of)
            .ok_or(CaseError::MissingArgument { what: "subjects" })
    }

    /// Register a clause.
    ///
    /// Criteria are tested left to right against the subjects and testing
    /// stops at the first rejection. The returned [`Clause`] decides whether the
    /// action given to it may run.
    ///
    /// # Errors
    ///
    /// Returns [`CaseError::Arity`] if the number of criteria differs from the
    /// number of subjects. Once the match is resolved, registration is a no-op
    /// and the criteria are not checked.
    pub fn when<I>(self, criteria: I) -> Result<Clause<R>, CaseError>
    where
        I: IntoIterator,
        I::Item: Into<Criterion>,
    {
        let Self {
            subjects,
            state,
            mut trace,
        } = self;
        let index = trace.len();

        let state = if state.is_unresolved() {
            let criteria: Vec<Criterion> = criteria.into_iter().map(Into::into).collect();
            if criteria.len() != subjects.len() {
                return Err(CaseError::Arity {
                    expected: subjects.len(),
                    actual: criteria.len(),
                });
            }
            match first_mismatch(&criteria, &subjects) {
                None => {
                    tracing::trace!(clause = index, "clause matched");
                    trace.record(StepOutcome::Matched);
                    state.arm()
                }
                Some(slot) => {
                    tracing::trace!(clause = index, slot, "clause rejected");
                    trace.record(StepOutcome::Rejected { slot });
                    state
                }
            }
        } else {
            tracing::trace!(clause = index, "clause skipped, match already resolved");
            trace.record(StepOutcome::Skipped);
            state
        };

        Ok(Clause {
            case: Self {
                subjects,
                state,
                trace,
            },
        })
    }

    /// Register a clause whose criteria list may be absent.
    ///
    /// # Errors
    ///
    /// Returns [`CaseError::MissingArgument`] if `criteria` is `None`, otherwise
    /// behaves like [`when`](Self::when).
    pub fn try_when<I>(self, criteria: Option<I>) -> Result<Clause<R>, CaseError>
    where
        I: IntoIterator,
        I::Item: Into<Criterion>,
    {
        match criteria {
            Some(criteria) => self.when(criteria),
            None => Err(CaseError::MissingArgument { what: "criteria" }),
        }
    }

    /// The captured subjects.
    #[must_use]
    pub fn subjects(&self) -> &[Value] {
        &self.subjects
    }

    /// Number of subjects (the arity of every clause).
    #[must_use]
    pub fn arity(&self) -> usize {
        self.subjects.len()
    }

    /// Current state of the expression.
    #[must_use]
    pub fn state(&self) -> &MatchState<R> {
        &self.state
    }

    /// Per-clause record of the evaluation so far.
    #[must_use]
    pub fn trace(&self) -> &EvalTrace {
        &self.trace
    }

    fn settle(self, action: impl FnOnce(&[Value]) -> R) -> Self {
        let Self {
            subjects,
            state,
            trace,
        } = self;
        let state = state.settle(|| {
            tracing::debug!(clause = ?trace.resolved_at(), "running clause action");
            action(&subjects)
        });
        Self {
            subjects,
            state,
            trace,
        }
    }

    fn try_settle<E>(
        self,
        action: impl FnOnce(&[Value]) -> Result<R, E>,
    ) -> Result<Self, E> {
        let Self {
            subjects,
            state,
            trace,
        } = self;
        let state = state.try_settle(|| {
            tracing::debug!(clause = ?trace.resolved_at(), "running fallible clause action");
            action(&subjects)
        })?;
        Ok(Self {
            subjects,
            state,
            trace,
        })
    }
}

impl<R: fmt::Debug> fmt::Debug for Case<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Case")
            .field("subjects", &self.subjects)
            .field("state", &self.state)
            .field("clauses", &self.trace.len())
            .finish()
    }
}

/// The handle returned by [`Case::when`].
///
/// Exactly one of three things is true of a clause:
///
/// - **active**: it matched while the case was unresolved; its action runs
/// - **passive**: it did not match; its action is dropped, the case stays unresolved
/// - **inert**: an earlier clause already won; its action is dropped
///
/// Every action method consumes the clause and hands the [`Case`] back, so
/// chaining continues with the next `when`.
pub struct Clause<R> {
    case: Case<R>,
}

impl<R> Clause<R> {
    /// Returns `true` if this clause will run the action given to it.
    #[must_use]
    pub fn is_active(&self) -> bool {
        matches!(self.case.state, MatchState::Pending)
    }

    /// Run a zero-argument action if this clause is active.
    pub fn apply(self, action: impl FnOnce() -> R) -> Case<R> {
        self.case.settle(|_| action())
    }

    /// Run an action that receives the full subject tuple, if this clause is active.
    pub fn apply_with(self, action: impl FnOnce(&[Value]) -> R) -> Case<R> {
        self.case.settle(action)
    }

    /// Run a fallible action if this clause is active.
    ///
    /// # Errors
    ///
    /// Returns the action's error verbatim. The expression ends there.
    pub fn try_apply<E>(self, action: impl FnOnce() -> Result<R, E>) -> Result<Case<R>, E> {
        self.case.try_settle(|_| action())
    }

    /// Raise an error if this clause is active.
    ///
    /// Passive and inert clauses return the case unchanged and never call
    /// `error`.
    ///
    /// # Errors
    ///
    /// Returns the produced error verbatim when the clause is active. No later
    /// clause can recover from it.
    pub fn then_throw<E>(self, error: impl FnOnce() -> E) -> Result<Case<R>, E> {
        self.case.try_settle(|_| Err(error()))
    }

    /// Raise an error built from the subject tuple if this clause is active.
    ///
    /// # Errors
    ///
    /// Returns the produced error verbatim when the clause is active.
    pub fn then_throw_with<E>(self, error: impl FnOnce(&[Value]) -> E) -> Result<Case<R>, E> {
        self.case.try_settle(|subjects| Err(error(subjects)))
    }
}

impl<R: fmt::Debug> fmt::Debug for Clause<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let disposition = match self.case.state {
            MatchState::Pending => "active",
            MatchState::Unresolved => "passive",
            MatchState::Resolved(_) => "inert",
        };
        f.debug_struct("Clause")
            .field("disposition", &disposition)
            .field("case", &self.case)
            .finish()
    }
}

/// Build a subject array, converting each element with `Value::from`.
///
/// `u64` and `usize` have no infallible conversion. Convert them first with
/// `Value::try_from(n)?`.
///
/// ```
/// use kase::{subjects, Value};
///
/// let s = subjects!["div", 3, Value::Null];
/// assert_eq!(s[1], Value::Int(3));
/// ```
#[macro_export]
macro_rules! subjects {
    ($($value:expr),* $(,)?) => {
        [$($crate::Value::from($value)),*]
    };
}

/// Build a criteria array, converting each element with `Criterion::from`.
///
/// Plain values become literals; `ANY`, `NULL`, `NON_NULL`, `SOME`, `NONE` and
/// other criteria pass through.
///
/// ```
/// use kase::{criteria, Criterion, NON_NULL};
///
/// let c = criteria!["div", NON_NULL, 0];
/// assert!(c[0].is_literal());
/// assert!(c[1].is_builtin());
/// ```
#[macro_export]
macro_rules! criteria {
    ($($criterion:expr),* $(,)?) => {
        [$($crate::Criterion::from($criterion)),*]
    };
}
