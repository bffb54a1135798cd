//! kase - Guarded multi-value case matching and a two-track `Either`
//!
//! Branch on several values at once without nested conditionals, and thread
//! fallible computations through a chain without early returns.
//!
//! # Architecture
//!
//! The type system uses erasure at the data level:
//!
//! - [`Value`] — Erased subject type (primitives, optionals, either tracks, `Custom`)
//! - [`Criterion`] — Non-generic single-slot test (literal, guard, built-in)
//! - [`Case<R>`] — Subject tuple plus [`MatchState<R>`], first-match-wins
//! - [`Clause<R>`] — Handle returned by `when`; runs or drops the next action
//! - [`Either<L, R>`] — Two-track result with `map`/`flat_map`/`fold`
//!
//! # Key Design Insights
//!
//! 1. **Type erasure at data level**: `Value` lets `Criterion` stay non-generic,
//!    so one criterion can guard any slot of any match.
//!
//! 2. **At most one action runs**: actions are closures handed to a [`Clause`].
//!    Only a clause that matched while the case was unresolved calls its closure.
//!
//! 3. **A null literal never matches**: `lit(Value::Null)` rejects every subject,
//!    including null. Use [`NULL`] to match null subjects.
//!
//! # Example
//!
//! ```
//! use kase::prelude::*;
//!
//! #[derive(Debug, PartialEq)]
//! enum CalcError { DivideByZero }
//!
//! fn calculate(op: &str, a: i64, b: i64) -> Result<i64, CalcError> {
//!     let case = Case::of(subjects![op, a, b])
//!         .when(criteria!["div", NON_NULL, 0]).unwrap().then_throw(|| CalcError::DivideByZero)?
//!         .when(criteria!["div", ANY, ANY]).unwrap().apply(|| a / b)
//!         .when(criteria!["mul", ANY, ANY]).unwrap().apply(|| a * b);
//!     Ok(case.or_else(0))
//! }
//!
//! assert_eq!(calculate("div", 3, 0), Err(CalcError::DivideByZero));
//! assert_eq!(calculate("mul", 6, 7), Ok(42));
//!
//! let parsed: Either<_, i64> = Either::trying(|| "21".parse::<i64>()).map(|n| n * 2);
//! assert_eq!(parsed, Either::Right(42));
//! ```
//!
//! # Features
//!
//! - `serde` — `Serialize`/`Deserialize` for [`Either`] and [`BuiltIn`]
//! - `config` — [`CriterionConfig`] and [`ValueConfig`] for JSON/YAML match tables

// ═══════════════════════════════════════════════════════════════════════════════
// Modules
// ═══════════════════════════════════════════════════════════════════════════════

mod adapters;
mod case;
mod criterion;
mod either;
mod error;
mod outcome;
mod trace;
mod value;

pub mod support;

#[cfg(feature = "config")]
mod config;

// ═══════════════════════════════════════════════════════════════════════════════
// Public API
// ═══════════════════════════════════════════════════════════════════════════════

// Core types
pub use case::{Case, Clause, MatchState};
pub use criterion::{lit, pred, regex, BuiltIn, Criterion, Guard};
pub use criterion::{ANY, NON_NULL, NONE, NULL, SOME};
pub use either::{left, right, Either, Panic};
pub use error::CaseError;
pub use value::{CustomValue, Value};

// Either adapters
pub use adapters::{is_left, is_right, left_matching, right_matching};

// Trace types
pub use trace::{ClauseStep, EvalTrace, StepOutcome};

// Collaborators
pub use support::{cached, curry, curry_supplier, Cache, Cached, Memoize};

// Config (feature-gated)
#[cfg(feature = "config")]
pub use config::{criteria_from_json, CriterionConfig, TaggedValueConfig, ValueConfig};

// ═══════════════════════════════════════════════════════════════════════════════
// Prelude
// ═══════════════════════════════════════════════════════════════════════════════

/// Prelude module for convenient imports.
///
/// ```
/// use kase::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{
        // Macros
        criteria,
        // Adapters
        is_left,
        is_right,
        // Either
        left,
        left_matching,
        // Criteria
        lit,
        pred,
        right,
        right_matching,
        subjects,
        // Core types
        Case,
        CaseError,
        Clause,
        Criterion,
        Either,
        MatchState,
        Value,
        ANY,
        NONE,
        NON_NULL,
        NULL,
        SOME,
    };
}

// ═══════════════════════════════════════════════════════════════════════════════
// Constants
// ═══════════════════════════════════════════════════════════════════════════════

/// Maximum length for regex criterion patterns.
///
/// Regex compilation is expensive even with the linear-time Rust `regex` crate.
pub const MAX_REGEX_PATTERN_LENGTH: usize = 4096;
