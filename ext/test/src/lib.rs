//! kase-test: Probes and fixtures for conformance testing
//!
//! Provides an invocation [`Probe`] for checking that clause actions run at
//! most once, and (feature `fixtures`) a YAML fixture runner.
//!
//! # Example
//!
//! ```
//! use kase_test::prelude::*;
//!
//! let probe = Probe::new();
//! let result = Case::of(subjects![2, Value::Null])
//!     .when(criteria![1, ANY]).unwrap().apply(|| probe.record(0, "one"))
//!     .when(criteria![2, ANY]).unwrap().apply(|| probe.record(1, "two"))
//!     .when(criteria![ANY, ANY]).unwrap().apply(|| probe.record(2, "other"))
//!     .or_else("none");
//!
//! assert_eq!(result, "two");
//! assert_eq!(probe.invoked(), vec![1]);
//! ```

use std::sync::{Arc, Mutex, PoisonError};

#[cfg(feature = "fixtures")]
pub mod fixture;

/// Records which clause actions ran.
///
/// Clones share the same log, so a probe can be moved into `Send` closures.
#[derive(Debug, Clone, Default)]
pub struct Probe {
    invoked: Arc<Mutex<Vec<usize>>>,
}

impl Probe {
    /// Create an empty probe.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Log that the action of clause `index` ran, passing `value` through.
    pub fn record<T>(&self, index: usize, value: T) -> T {
        tracing::trace!(clause = index, "probe recorded action");
        self.invoked
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(index);
        value
    }

    /// Indices of the clauses whose actions ran, in order.
    #[must_use]
    pub fn invoked(&self) -> Vec<usize> {
        self.invoked
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Number of actions that ran.
    #[must_use]
    pub fn count(&self) -> usize {
        self.invoked
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}

/// Prelude for convenient imports.
pub mod prelude {
    pub use super::Probe;
    pub use kase::prelude::*;
}

#[cfg(test)]
mod tests {
    use super::*;
    use kase::prelude::*;

    #[test]
    fn test_probe_shares_log_between_clones() {
        let probe = Probe::new();
        let clone = probe.clone();
        assert_eq!(clone.record(3, "x"), "x");
        assert_eq!(probe.invoked(), vec![3]);
        assert_eq!(probe.count(), 1);
    }

    #[test]
    fn test_probe_sees_only_winning_action() {
        let probe = Probe::new();

        let result = Case::of(subjects![Value::Null, 2, 3])
            .when(criteria![Value::Null, 2, 3])
            .unwrap()
            .apply(|| probe.record(0, 1))
            .when(criteria![NULL, 2, 3])
            .unwrap()
            .apply(|| probe.record(1, 2))
            .when(criteria![ANY, ANY, ANY])
            .unwrap()
            .apply(|| probe.record(2, 3))
            .or_else(0);

        assert_eq!(result, 2);
        assert_eq!(probe.invoked(), vec![1]);
    }

    #[test]
    fn test_probe_in_either_chain() {
        let probe = Probe::new();
        let out: Either<&str, i32> = left("stop")
            .map(|x: i32| probe.record(0, x))
            .flat_map(|x| right(probe.record(1, x)));

        assert_eq!(out, Either::Left("stop"));
        assert_eq!(probe.count(), 0);
    }
}
