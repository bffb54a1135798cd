//! Matcher adapters between [`Either`] and the clause engine.
//!
//! An `Either` subject becomes [`Value::Left`] or [`Value::Right`] with its
//! payload converted to a [`Value`]. The criteria here test the track and,
//! optionally, the payload with any nested [`Criterion`].
//!
//! ```
//! use kase::{is_right, left_matching, right, subjects, Case, Either, ANY};
//!
//! let outcome: Either<&str, i64> = right(7);
//! let label = Case::of(subjects![outcome])
//!     .when([left_matching("timeout")]).unwrap().apply(|| "retry")
//!     .when([is_right()]).unwrap().apply(|| "done")
//!     .when([ANY]).unwrap().apply(|| "fail")
//!     .or_else("unreachable");
//!
//! assert_eq!(label, "done");
//! ```

use crate::{Criterion, Either, Guard, Value};

impl<L, R> From<Either<L, R>> for Value
where
    L: Into<Value>,
    R: Into<Value>,
{
    fn from(either: Either<L, R>) -> Self {
        match either {
            Either::Left(l) => Value::Left(Box::new(l.into())),
            Either::Right(r) => Value::Right(Box::new(r.into())),
        }
    }
}

/// Matches any `Left` subject.
#[must_use]
pub fn is_left() -> Criterion {
    Criterion::Predicate(Guard::new("is_left", Value::is_left))
}

/// Matches any `Right` subject.
#[must_use]
pub fn is_right() -> Criterion {
    Criterion::Predicate(Guard::new("is_right", Value::is_right))
}

/// Matches a `Left` subject whose payload satisfies `inner`.
pub fn left_matching(inner: impl Into<Criterion>) -> Criterion {
    let inner = inner.into();
    let label = format!("left({inner:?})");
    Criterion::Predicate(Guard::new(label, move |value| {
        value.as_left().is_some_and(|payload| inner.evaluate(payload))
    }))
}

/// Matches a `Right` subject whose payload satisfies `inner`.
pub fn right_matching(inner: impl Into<Criterion>) -> Criterion {
    let inner = inner.into();
    let label = format!("right({inner:?})");
    Criterion::Predicate(Guard::new(label, move |value| {
        value.as_right().is_some_and(|payload| inner.evaluate(payload))
    }))
}

impl<L, R> Either<L, R>
where
    L: Clone + Into<Value>,
{
    /// Returns `true` for a `Left` whose payload satisfies `criterion`.
    #[must_use]
    pub fn is_left_matching(&self, criterion: &Criterion) -> bool {
        self.is_left_and(|l| criterion.evaluate(&l.clone().into()))
    }
}

impl<L, R> Either<L, R>
where
    R: Clone + Into<Value>,
{
    /// Returns `true` for a `Right` whose payload satisfies `criterion`.
    #[must_use]
    pub fn is_right_matching(&self, criterion: &Criterion) -> bool {
        self.is_right_and(|r| criterion.evaluate(&r.clone().into()))
    }
}
