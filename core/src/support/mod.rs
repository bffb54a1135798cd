//! Small helpers that sit next to the matcher and `Either`.
//!
//! - [`Memoize`]: compute once across threads, replay forever
//! - [`Cache`] / [`Cached`]: route a function through an injected cache
//! - [`curry`] / [`curry_supplier`]: fix a leading argument
//! - [`collections`]: map re-valuing, first-present selection, null filtering

pub mod collections;

mod cache;
mod curry;
mod memo;

pub use cache::{cached, Cache, Cached};
pub use curry::{curry, curry_supplier};
pub use memo::Memoize;
