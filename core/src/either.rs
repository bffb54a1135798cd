//! `Either` — A two-track result: `Left` for failure, `Right` for success
//!
//! Every operator consumes the value and returns a new one. `Right` operators
//! (`map`, `flat_map`, `map2`) leave a `Left` untouched and never call their
//! closure on it, so the first `Left` in a chain is the chain's result.
//!
//! # Example
//!
//! ```
//! use kase::{right, Either};
//!
//! let chained: Either<String, i32> = right(10).map(|x| x * 2).flat_map(|x| right(x % 3));
//! assert_eq!(chained, Either::Right(2));
//!
//! let caught = Either::catching(|| i32::MAX.checked_add(1).expect("overflow"));
//! assert!(caught.is_left());
//! ```

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

/// Either a failure (`Left`) or a success (`Right`).
///
/// Equality, ordering and hashing are structural over variant and payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Either<L, R> {
    /// The failure or alternate track.
    Left(L),
    /// The success track.
    Right(R),
}

/// Shorthand for [`Either::Left`].
pub fn left<L, R>(value: L) -> Either<L, R> {
    Either::Left(value)
}

/// Shorthand for [`Either::Right`].
pub fn right<L, R>(value: R) -> Either<L, R> {
    Either::Right(value)
}

/// A panic captured by [`Either::catching`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("computation panicked: {message}")]
pub struct Panic {
    /// The panic payload, if it was a string.
    pub message: String,
}

impl Panic {
    fn from_payload(payload: &(dyn Any + Send)) -> Self {
        let message = if let Some(s) = payload.downcast_ref::<&str>() {
            (*s).to_owned()
        } else if let Some(s) = payload.downcast_ref::<String>() {
            s.clone()
        } else {
            "non-string panic payload".to_owned()
        };
        Self { message }
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Construction
// ═══════════════════════════════════════════════════════════════════════════════

impl<L, R> Either<L, R> {
    /// Run a fallible computation, keeping its error as a `Left`.
    pub fn trying<F>(f: F) -> Self
    where
        F: FnOnce() -> Result<R, L>,
    {
        f().into()
    }

    /// Run a fallible computation and route its error through `handler`.
    ///
    /// The handler may recover to a `Right` or substitute a different `Left`.
    pub fn trying_with<E, F, H>(f: F, handler: H) -> Self
    where
        F: FnOnce() -> Result<R, E>,
        H: FnOnce(E) -> Self,
    {
        match f() {
            Ok(value) => Self::Right(value),
            Err(error) => handler(error),
        }
    }

    /// Compute a `Left` on purpose. If computing it fails, `handler` turns the
    /// error into the `Left` payload instead.
    pub fn failing<X, F, H>(f: F, handler: H) -> Self
    where
        F: FnOnce() -> Result<L, X>,
        H: FnOnce(X) -> L,
    {
        Self::Left(f().unwrap_or_else(handler))
    }

    /// `Right(value)` when present, otherwise `Left(fallback)`.
    pub fn from_optional(value: Option<R>, fallback: L) -> Self {
        match value {
            Some(value) => Self::Right(value),
            None => Self::Left(fallback),
        }
    }

    /// Like [`from_optional`](Self::from_optional), with a lazily built fallback.
    pub fn from_optional_with(value: Option<R>, fallback: impl FnOnce() -> L) -> Self {
        match value {
            Some(value) => Self::Right(value),
            None => Self::Left(fallback()),
        }
    }

    /// Convert into a standard `Result`, `Right` becoming `Ok`.
    ///
    /// # Errors
    ///
    /// Returns the `Left` payload as `Err`.
    pub fn into_result(self) -> Result<R, L> {
        match self {
            Self::Left(l) => Err(l),
            Self::Right(r) => Ok(r),
        }
    }
}

impl<R> Either<Panic, R> {
    /// Run a computation, capturing a panic as `Left(Panic)`.
    ///
    /// The default panic hook still reports the panic. Anything the closure
    /// borrows must stay consistent if it unwinds halfway.
    pub fn catching<F>(f: F) -> Self
    where
        F: FnOnce() -> R,
    {
        match panic::catch_unwind(AssertUnwindSafe(f)) {
            Ok(value) => Self::Right(value),
            Err(payload) => {
                let caught = Panic::from_payload(payload.as_ref());
                tracing::debug!(message = %caught.message, "captured panic as Left");
                Self::Left(caught)
            }
        }
    }
}

impl<L, R> From<Result<R, L>> for Either<L, R> {
    fn from(result: Result<R, L>) -> Self {
        match result {
            Ok(r) => Self::Right(r),
            Err(l) => Self::Left(l),
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Inspection
// ═══════════════════════════════════════════════════════════════════════════════

impl<L, R> Either<L, R> {
    /// Returns `true` for `Left`.
    #[must_use]
    pub fn is_left(&self) -> bool {
        matches!(self, Self::Left(_))
    }

    /// Returns `true` for `Right`.
    #[must_use]
    pub fn is_right(&self) -> bool {
        matches!(self, Self::Right(_))
    }

    /// Returns `true` for a `Left` whose payload satisfies `f`.
    pub fn is_left_and(&self, f: impl FnOnce(&L) -> bool) -> bool {
        match self {
            Self::Left(l) => f(l),
            Self::Right(_) => false,
        }
    }

    /// Returns `true` for a `Right` whose payload satisfies `f`.
    pub fn is_right_and(&self, f: impl FnOnce(&R) -> bool) -> bool {
        match self {
            Self::Left(_) => false,
            Self::Right(r) => f(r),
        }
    }

    /// The `Left` payload, if any.
    #[must_use]
    pub fn left(self) -> Option<L> {
        match self {
            Self::Left(l) => Some(l),
            Self::Right(_) => None,
        }
    }

    /// The `Right` payload, if any.
    #[must_use]
    pub fn right(self) -> Option<R> {
        match self {
            Self::Left(_) => None,
            Self::Right(r) => Some(r),
        }
    }

    /// Borrow both payloads.
    #[must_use]
    pub fn as_ref(&self) -> Either<&L, &R> {
        match self {
            Self::Left(l) => Either::Left(l),
            Self::Right(r) => Either::Right(r),
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Composition
// ═══════════════════════════════════════════════════════════════════════════════

impl<L, R> Either<L, R> {
    /// Transform the `Right` payload.
    pub fn map<T>(self, f: impl FnOnce(R) -> T) -> Either<L, T> {
        match self {
            Self::Left(l) => Either::Left(l),
            Self::Right(r) => Either::Right(f(r)),
        }
    }

    /// Chain a computation that may itself fail.
    pub fn flat_map<T>(self, f: impl FnOnce(R) -> Either<L, T>) -> Either<L, T> {
        match self {
            Self::Left(l) => Either::Left(l),
            Self::Right(r) => f(r),
        }
    }

    /// Combine two `Right`s. If either is `Left`, `self` is checked first.
    pub fn map2<S, T>(self, other: Either<L, S>, f: impl FnOnce(R, S) -> T) -> Either<L, T> {
        match (self, other) {
            (Self::Left(l), _) | (Self::Right(_), Either::Left(l)) => Either::Left(l),
            (Self::Right(r), Either::Right(s)) => Either::Right(f(r, s)),
        }
    }

    /// Transform the `Left` payload.
    pub fn map_left<F>(self, f: impl FnOnce(L) -> F) -> Either<F, R> {
        match self {
            Self::Left(l) => Either::Left(f(l)),
            Self::Right(r) => Either::Right(r),
        }
    }

    /// Chain on the `Left` track.
    pub fn flat_map_left<F>(self, f: impl FnOnce(L) -> Either<F, R>) -> Either<F, R> {
        match self {
            Self::Left(l) => f(l),
            Self::Right(r) => Either::Right(r),
        }
    }

    /// Turn a `Left` into a `Right`.
    pub fn recover(self, f: impl FnOnce(L) -> R) -> Self {
        match self {
            Self::Left(l) => Self::Right(f(l)),
            right @ Self::Right(_) => right,
        }
    }

    /// Fail to the `Left` whatever the current track, computing the new payload
    /// from the whole value.
    pub fn fail(self, f: impl FnOnce(Self) -> L) -> Self {
        Self::Left(f(self))
    }

    /// Fail to the `Left` with a supplied payload, discarding the current value.
    pub fn fail_with(self, f: impl FnOnce() -> L) -> Self {
        Self::Left(f())
    }

    /// Apply `f` to the whole value. Prefer the track-specific operators.
    pub fn transform<F, S>(self, f: impl FnOnce(Self) -> Either<F, S>) -> Either<F, S> {
        f(self)
    }

    /// Collapse into a single value by applying exactly one of the two functions.
    pub fn fold<T>(self, on_left: impl FnOnce(L) -> T, on_right: impl FnOnce(R) -> T) -> T {
        match self {
            Self::Left(l) => on_left(l),
            Self::Right(r) => on_right(r),
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Elimination
// ═══════════════════════════════════════════════════════════════════════════════

impl<L, R> Either<L, R> {
    /// The `Right` payload, or `default`.
    pub fn or_else(self, default: R) -> R {
        match self {
            Self::Left(_) => default,
            Self::Right(r) => r,
        }
    }

    /// The `Right` payload, or a value computed from the `Left` payload.
    pub fn or_else_get(self, f: impl FnOnce(L) -> R) -> R {
        match self {
            Self::Left(l) => f(l),
            Self::Right(r) => r,
        }
    }

    /// The `Right` payload, or an error built from the `Left` payload.
    ///
    /// # Errors
    ///
    /// Returns `f(left)` for a `Left`.
    pub fn or_else_throw<X>(self, f: impl FnOnce(L) -> X) -> Result<R, X> {
        self.into_result().map_err(f)
    }

    /// `Some` for a `Right`, `None` for a `Left`.
    #[must_use]
    pub fn to_optional(self) -> Option<R> {
        self.right()
    }

    /// Transform a `Right` into an optional value. A `Left` gives `None`.
    pub fn to_optional_with<T>(self, f: impl FnOnce(R) -> Option<T>) -> Option<T> {
        self.right().and_then(f)
    }

    /// Observe the whole value without changing it.
    #[must_use]
    pub fn peek(self, f: impl FnOnce(&Self)) -> Self {
        f(&self);
        self
    }

    /// Observe a `Left` payload without changing anything.
    #[must_use]
    pub fn if_left(self, f: impl FnOnce(&L)) -> Self {
        if let Self::Left(l) = &self {
            f(l);
        }
        self
    }

    /// Observe a `Right` payload without changing anything.
    #[must_use]
    pub fn if_right(self, f: impl FnOnce(&R)) -> Self {
        if let Self::Right(r) = &self {
            f(r);
        }
        self
    }
}
