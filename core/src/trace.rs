//! Evaluation trace for debugging match expressions.
//!
//! Every clause registered on a [`Case`](crate::Case) leaves one
//! [`ClauseStep`] behind, recording whether it matched, which slot rejected
//! it, or whether it was skipped because an earlier clause already won.
//!
//! # Example
//!
//! ```
//! use kase::{lit, Case, StepOutcome, ANY};
//!
//! let case = Case::of([2, 5])
//!     .when([lit(1), ANY]).unwrap().apply(|| "one")
//!     .when([lit(2), ANY]).unwrap().apply(|| "two")
//!     .when([ANY, ANY]).unwrap().apply(|| "other");
//!
//! let trace = case.trace();
//! assert_eq!(trace.resolved_at(), Some(1));
//! assert_eq!(trace.steps()[0].outcome, StepOutcome::Rejected { slot: 0 });
//! assert_eq!(trace.steps()[2].outcome, StepOutcome::Skipped);
//! ```

use std::fmt;

/// What happened to one registered clause.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// Every criterion matched; this clause's action was the one allowed to run.
    Matched,
    /// The criterion at `slot` rejected its subject. Later slots were not tested.
    Rejected {
        /// Zero-based index of the first failing slot.
        slot: usize,
    },
    /// Registered after the expression was already resolved. Nothing was tested.
    Skipped,
}

/// Trace entry for one clause.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClauseStep {
    /// Zero-based registration order of the clause.
    pub index: usize,
    /// What happened to it.
    pub outcome: StepOutcome,
}

/// Trace of a whole match expression.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EvalTrace {
    steps: Vec<ClauseStep>,
}

impl EvalTrace {
    pub(crate) fn record(&mut self, outcome: StepOutcome) {
        let index = self.steps.len();
        self.steps.push(ClauseStep { index, outcome });
    }

    /// All clause steps in registration order.
    #[must_use]
    pub fn steps(&self) -> &[ClauseStep] {
        &self.steps
    }

    /// Number of clauses registered so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Returns `true` if no clause has been registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Index of the clause that matched, if any.
    #[must_use]
    pub fn resolved_at(&self) -> Option<usize> {
        self.steps
            .iter()
            .find(|s| s.outcome == StepOutcome::Matched)
            .map(|s| s.index)
    }
}

impl fmt::Display for EvalTrace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for step in &self.steps {
            match step.outcome {
                StepOutcome::Matched => writeln!(f, "clause[{}]: matched", step.index)?,
                StepOutcome::Rejected { slot } => {
                    writeln!(f, "clause[{}]: rejected at slot {slot}", step.index)?;
                }
                StepOutcome::Skipped => writeln!(f, "clause[{}]: skipped", step.index)?,
            }
        }
        Ok(())
    }
}
