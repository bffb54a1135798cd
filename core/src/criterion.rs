//! `Criterion` — Single-slot tests against a subject [`Value`]
//!
//! A criterion is intentionally **non-generic**: it operates on erased
//! [`Value`]s, so the same criterion can guard any slot of any match.
//!
//! # Kinds
//!
//! - [`Criterion::Literal`] — structural equality (a null literal never matches)
//! - [`Criterion::Predicate`] — a user [`Guard`] closure
//! - [`Criterion::BuiltIn`] — one of [`BuiltIn::Any`], [`BuiltIn::Null`],
//!   [`BuiltIn::NonNull`], [`BuiltIn::Present`], [`BuiltIn::Absent`]

use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

use crate::{CaseError, Value, MAX_REGEX_PATTERN_LENGTH};

/// Closure type behind a [`Guard`].
type GuardFn = dyn Fn(&Value) -> bool + Send + Sync;

/// A labelled predicate over a subject value.
///
/// Guards receive `&Value`, so a null subject is just `Value::Null` and never
/// a hazard. The label only feeds `Debug` output and traces.
#[derive(Clone)]
pub struct Guard {
    label: Cow<'static, str>,
    test: Arc<GuardFn>,
}

impl Guard {
    /// Create a guard with a descriptive label.
    pub fn new<F>(label: impl Into<Cow<'static, str>>, test: F) -> Self
    where
        F: Fn(&Value) -> bool + Send + Sync + 'static,
    {
        Self {
            label: label.into(),
            test: Arc::new(test),
        }
    }

    /// Run the guard against a subject.
    #[inline]
    pub fn test(&self, value: &Value) -> bool {
        (self.test)(value)
    }

    /// Returns the guard's label.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }
}

impl fmt::Debug for Guard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Guard").field(&self.label).finish()
    }
}

/// Built-in classifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum BuiltIn {
    /// Matches anything, including null.
    Any,
    /// Matches only [`Value::Null`].
    Null,
    /// Matches anything except [`Value::Null`].
    NonNull,
    /// Matches an optional container holding a value.
    Present,
    /// Matches an optional container holding nothing.
    Absent,
}

impl BuiltIn {
    /// Classify a subject.
    #[must_use]
    pub fn matches(self, value: &Value) -> bool {
        match self {
            Self::Any => true,
            Self::Null => value.is_null(),
            Self::NonNull => !value.is_null(),
            Self::Present => value.is_present(),
            Self::Absent => value.is_absent(),
        }
    }
}

/// A single-slot test.
///
/// # Example
///
/// ```
/// use kase::{lit, pred, Criterion, Value, NON_NULL, NULL};
///
/// assert!(lit(3).evaluate(&Value::Int(3)));
/// assert!(!lit(Value::Null).evaluate(&Value::Null)); // null literal never matches
/// assert!(NULL.evaluate(&Value::Null));
/// assert!(!NON_NULL.evaluate(&Value::Null));
/// assert!(pred(|v| v.as_int().is_some_and(|n| n > 2)).evaluate(&5.into()));
/// ```
#[derive(Debug, Clone)]
pub enum Criterion {
    /// Structural equality with a non-null value.
    Literal(Value),
    /// A user-supplied guard.
    Predicate(Guard),
    /// One of the built-in classifiers.
    BuiltIn(BuiltIn),
}

/// Matches anything, including null.
pub const ANY: Criterion = Criterion::BuiltIn(BuiltIn::Any);
/// Matches only null.
pub const NULL: Criterion = Criterion::BuiltIn(BuiltIn::Null);
/// Matches any non-null value.
pub const NON_NULL: Criterion = Criterion::BuiltIn(BuiltIn::NonNull);
/// Matches a present optional container.
pub const SOME: Criterion = Criterion::BuiltIn(BuiltIn::Present);
/// Matches an absent optional container.
pub const NONE: Criterion = Criterion::BuiltIn(BuiltIn::Absent);

impl Criterion {
    /// Create a literal criterion.
    pub fn literal(value: impl Into<Value>) -> Self {
        Self::Literal(value.into())
    }

    /// Create a predicate criterion from a closure.
    pub fn predicate<F>(test: F) -> Self
    where
        F: Fn(&Value) -> bool + Send + Sync + 'static,
    {
        Self::Predicate(Guard::new("predicate", test))
    }

    /// Create a regex criterion over string subjects.
    ///
    /// Non-string subjects never match. Uses Rust's `regex` crate, which
    /// guarantees linear-time matching.
    ///
    /// # Errors
    ///
    /// Returns [`CaseError::PatternTooLong`] if the pattern exceeds
    /// [`MAX_REGEX_PATTERN_LENGTH`], or [`CaseError::InvalidPattern`] if it
    /// does not compile.
    pub fn regex(pattern: &str) -> Result<Self, CaseError> {
        let re = compile_regex(pattern, false)?;
        Ok(Self::Predicate(Guard::new(
            format!("regex({pattern})"),
            move |value| value.as_str().is_some_and(|s| re.is_match(s)),
        )))
    }

    /// Create a case-insensitive regex criterion.
    ///
    /// The length limit applies to `pattern` as given.
    ///
    /// # Errors
    ///
    /// Same as [`regex`](Self::regex).
    pub fn regex_ignore_case(pattern: &str) -> Result<Self, CaseError> {
        let re = compile_regex(pattern, true)?;
        Ok(Self::Predicate(Guard::new(
            format!("regex_ignore_case({pattern})"),
            move |value| value.as_str().is_some_and(|s| re.is_match(s)),
        )))
    }

    /// Evaluate this criterion against a subject.
    ///
    /// A `Literal(Value::Null)` returns `false` for every subject, including
    /// `Value::Null`. Use [`NULL`] to match null subjects.
    #[must_use]
    pub fn evaluate(&self, subject: &Value) -> bool {
        match self {
            Self::Literal(Value::Null) => false,
            Self::Literal(expected) => expected == subject,
            Self::Predicate(guard) => guard.test(subject),
            Self::BuiltIn(kind) => kind.matches(subject),
        }
    }

    /// Returns `true` if this is a `Literal` criterion.
    #[must_use]
    pub fn is_literal(&self) -> bool {
        matches!(self, Self::Literal(_))
    }

    /// Returns `true` if this is a `Predicate` criterion.
    #[must_use]
    pub fn is_predicate(&self) -> bool {
        matches!(self, Self::Predicate(_))
    }

    /// Returns `true` if this is a `BuiltIn` criterion.
    #[must_use]
    pub fn is_builtin(&self) -> bool {
        matches!(self, Self::BuiltIn(_))
    }
}

fn compile_regex(pattern: &str, case_insensitive: bool) -> Result<::regex::Regex, CaseError> {
    if pattern.len() > MAX_REGEX_PATTERN_LENGTH {
        return Err(CaseError::PatternTooLong {
            len: pattern.len(),
            max: MAX_REGEX_PATTERN_LENGTH,
        });
    }
    ::regex::RegexBuilder::new(pattern)
        .case_insensitive(case_insensitive)
        .build()
        .map_err(|e| CaseError::InvalidPattern {
            pattern: pattern.to_owned(),
            message: e.to_string(),
        })
}

/// Index of the first slot whose criterion rejects its subject.
///
/// Slots are tested left to right; later slots are not evaluated once one fails.
/// Callers check arity before calling this.
pub(crate) fn first_mismatch(criteria: &[Criterion], subjects: &[Value]) -> Option<usize> {
    criteria
        .iter()
        .zip(subjects)
        .position(|(criterion, subject)| !criterion.evaluate(subject))
}

/// Shorthand for [`Criterion::literal`].
pub fn lit(value: impl Into<Value>) -> Criterion {
    Criterion::literal(value)
}

/// Shorthand for [`Criterion::predicate`].
pub fn pred<F>(test: F) -> Criterion
where
    F: Fn(&Value) -> bool + Send + Sync + 'static,
{
    Criterion::predicate(test)
}

/// Shorthand for [`Criterion::regex`].
///
/// # Errors
///
/// Returns [`CaseError::InvalidPattern`] if the pattern does not compile.
pub fn regex(pattern: &str) -> Result<Criterion, CaseError> {
    Criterion::regex(pattern)
}

impl From<BuiltIn> for Criterion {
    fn from(kind: BuiltIn) -> Self {
        Self::BuiltIn(kind)
    }
}

impl From<Guard> for Criterion {
    fn from(guard: Guard) -> Self {
        Self::Predicate(guard)
    }
}

impl From<Value> for Criterion {
    fn from(value: Value) -> Self {
        Self::Literal(value)
    }
}

macro_rules! literal_criterion {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Criterion {
                fn from(v: $t) -> Self {
                    Self::Literal(Value::from(v))
                }
            }
        )*
    };
}

literal_criterion!(&str, String, i8, i16, i32, i64, u8, u16, u32, f32, f64, bool);
