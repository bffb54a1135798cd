//! Single-assignment memoizing supplier.

use std::fmt;
use std::sync::LazyLock;

type Compute<R, E> = Box<dyn FnOnce() -> Result<R, E> + Send>;

/// A fallible computation that runs at most once.
///
/// The first caller of [`get`](Self::get) runs the computation; concurrent
/// callers block until it finishes. Every caller then sees the same outcome,
/// including a failure, for the lifetime of the `Memoize`.
///
/// ```
/// use kase::Memoize;
///
/// let config = Memoize::new(|| "42".parse::<u16>());
/// assert_eq!(config.get(), Ok(&42));
/// assert_eq!(config.get(), Ok(&42));
/// ```
pub struct Memoize<R, E> {
    cell: LazyLock<Result<R, E>, Compute<R, E>>,
}

impl<R, E> Memoize<R, E> {
    /// Wrap a computation without running it.
    pub fn new<F>(compute: F) -> Self
    where
        F: FnOnce() -> Result<R, E> + Send + 'static,
    {
        let traced: Compute<R, E> = Box::new(move || {
            tracing::debug!("computing memoized value");
            let outcome = compute();
            if outcome.is_err() {
                tracing::debug!("memoized computation failed, failure will be replayed");
            }
            outcome
        });
        Self {
            cell: LazyLock::new(traced),
        }
    }

    /// Run the computation if nobody has yet, then return its outcome.
    ///
    /// # Errors
    ///
    /// Returns the computation's error, on this and every later call.
    ///
    /// # Panics
    ///
    /// If the computation panics, this call and every later one panics.
    pub fn get(&self) -> Result<&R, &E> {
        LazyLock::force(&self.cell).as_ref()
    }
}

impl<R, E> fmt::Debug for Memoize<R, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Memoize").finish_non_exhaustive()
    }
}
