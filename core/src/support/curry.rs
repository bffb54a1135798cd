//! Partial application of a leading argument.

/// Fix the first argument of a binary function.
///
/// `t` is cloned for every call.
///
/// ```
/// use kase::curry;
///
/// let add_ten = curry(|a: i32, b: i32| a + b, 10);
/// assert_eq!(add_ten(5), 15);
/// ```
pub fn curry<T, U, R, F>(f: F, t: T) -> impl Fn(U) -> R
where
    F: Fn(T, U) -> R,
    T: Clone,
{
    move |u| f(t.clone(), u)
}

/// Fix the only argument of a unary function, leaving a supplier.
///
/// ```
/// use kase::curry_supplier;
///
/// let greeting = curry_supplier(|name: &str| format!("hello {name}"), "kase");
/// assert_eq!(greeting(), "hello kase");
/// ```
pub fn curry_supplier<T, R, F>(f: F, t: T) -> impl FnOnce() -> R
where
    F: FnOnce(T) -> R,
{
    move || f(t)
}
