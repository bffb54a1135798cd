//! `Value` — Type-erased subject data matched by a [`Case`](crate::Case)
//!
//! A match expression captures its subjects once as a tuple of `Value`s.
//! Erasing at the data level keeps [`Criterion`](crate::Criterion) non-generic:
//! the same criterion can be used against any slot of any match.
//!
//! # Null vs. absent
//!
//! `Value::Null` is a missing reference. `Value::Optional(None)` is an optional
//! container that holds nothing. The two are distinct on purpose: the built-in
//! `NULL` criterion matches the first, `NONE` matches the second.
//!
//! # Extensibility via `Custom`
//!
//! For domain types not covered by the primitives, implement [`CustomValue`]
//! and wrap in `Value::Custom(Arc::new(your_type))`.

use std::any::Any;
use std::fmt::Debug;
use std::num::TryFromIntError;
use std::sync::Arc;

/// Extension trait for custom subject types.
///
/// Implement this for domain-specific types, then wrap with
/// `Value::Custom(Arc::new(your_type))`. Match on it with a predicate that
/// downcasts through [`as_any`](Self::as_any).
///
/// # Example
///
/// ```
/// use std::any::Any;
/// use std::sync::Arc;
/// use kase::{CustomValue, Value};
///
/// #[derive(Debug)]
/// struct Point {
///     x: i32,
///     y: i32,
/// }
///
/// impl CustomValue for Point {
///     fn custom_type_name(&self) -> &'static str {
///         "point"
///     }
///
///     fn as_any(&self) -> &dyn Any {
///         self
///     }
/// }
///
/// let value = Value::Custom(Arc::new(Point { x: 1, y: 2 }));
/// assert!(value.is_custom());
/// assert_eq!(value.type_name(), "point");
/// ```
pub trait CustomValue: Send + Sync + Debug {
    /// Returns a human-readable type identifier, e.g. `"point"`.
    fn custom_type_name(&self) -> &'static str;

    /// Returns a reference to `self` as `&dyn Any` for downcasting.
    fn as_any(&self) -> &dyn Any;
}

/// A single subject slot.
///
/// # Variants
///
/// - `Null` — no reference at all
/// - `String`, `Int`, `Float`, `Bool`, `Bytes` — primitives
/// - `Optional` — an optional container, present or absent
/// - `Left`, `Right` — the two tracks of an [`Either`](crate::Either)
/// - `Custom` — user-defined types implementing [`CustomValue`]
///
/// # Example
///
/// ```
/// use kase::Value;
///
/// let v: Value = "div".into();
/// assert_eq!(v.as_str(), Some("div"));
/// assert!(!v.is_null());
///
/// let absent: Value = Option::<i64>::None.into();
/// assert!(absent.is_absent());
/// assert!(!absent.is_null());
/// ```
#[derive(Debug, Clone, Default)]
pub enum Value {
    /// A missing reference.
    #[default]
    Null,

    /// String data.
    String(String),

    /// Integer data.
    Int(i64),

    /// Floating point data.
    Float(f64),

    /// Boolean data.
    Bool(bool),

    /// Raw bytes.
    Bytes(Vec<u8>),

    /// An optional container: `Some(value)` when present, `None` when absent.
    Optional(Option<Box<Value>>),

    /// The failure track of an `Either`.
    Left(Box<Value>),

    /// The success track of an `Either`.
    Right(Box<Value>),

    /// Custom data type for domain-specific extensions.
    Custom(Arc<dyn CustomValue>),
}

// Trait objects don't derive PartialEq. Custom values compare by Arc identity.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Null, Self::Null) => true,
            (Self::String(a), Self::String(b)) => a == b,
            (Self::Int(a), Self::Int(b)) => a == b,
            (Self::Float(a), Self::Float(b)) => a == b,
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Bytes(a), Self::Bytes(b)) => a == b,
            (Self::Optional(a), Self::Optional(b)) => a == b,
            (Self::Left(a), Self::Left(b)) | (Self::Right(a), Self::Right(b)) => a == b,
            (Self::Custom(a), Self::Custom(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl Value {
    /// Build a nullable value: `Some(v)` becomes `v`, `None` becomes [`Value::Null`].
    ///
    /// Use this when an `Option` models a possibly-missing reference rather than
    /// an optional container (`From<Option<T>>` builds [`Value::Optional`]).
    ///
    /// ```
    /// use kase::Value;
    ///
    /// assert!(Value::nullable(Option::<&str>::None).is_null());
    /// assert_eq!(Value::nullable(Some(3)), Value::Int(3));
    /// ```
    pub fn nullable<T: Into<Value>>(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }

    /// Build a present optional container.
    pub fn some(value: impl Into<Value>) -> Self {
        Self::Optional(Some(Box::new(value.into())))
    }

    /// Build an absent optional container.
    #[must_use]
    pub fn none() -> Self {
        Self::Optional(None)
    }

    /// Returns `true` if this is the `Null` variant.
    #[inline]
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns `true` if this is an optional container holding a value.
    #[inline]
    #[must_use]
    pub fn is_present(&self) -> bool {
        matches!(self, Self::Optional(Some(_)))
    }

    /// Returns `true` if this is an optional container holding nothing.
    #[inline]
    #[must_use]
    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Optional(None))
    }

    /// Returns `true` if this is the `Left` variant.
    #[inline]
    #[must_use]
    pub fn is_left(&self) -> bool {
        matches!(self, Self::Left(_))
    }

    /// Returns `true` if this is the `Right` variant.
    #[inline]
    #[must_use]
    pub fn is_right(&self) -> bool {
        matches!(self, Self::Right(_))
    }

    /// Returns `true` if this is the `Custom` variant.
    #[inline]
    #[must_use]
    pub fn is_custom(&self) -> bool {
        matches!(self, Self::Custom(_))
    }

    /// Try to get the value as a string slice.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s.as_str()),
            _ => None,
        }
    }

    /// Try to get the value as an integer.
    #[inline]
    #[must_use]
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Try to get the value as a float. Integers widen.
    #[inline]
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Self::Float(f) => Some(*f),
            Self::Int(i) => Some(*i as f64),
            _ => None,
        }
    }

    /// Try to get the value as a boolean.
    #[inline]
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Try to get the value as a byte slice.
    #[inline]
    #[must_use]
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Self::Bytes(b) => Some(b.as_slice()),
            _ => None,
        }
    }

    /// Try to get the contents of a present optional container.
    #[inline]
    #[must_use]
    pub fn as_present(&self) -> Option<&Value> {
        match self {
            Self::Optional(Some(v)) => Some(v),
            _ => None,
        }
    }

    /// Try to get the payload of a `Left`.
    #[inline]
    #[must_use]
    pub fn as_left(&self) -> Option<&Value> {
        match self {
            Self::Left(v) => Some(v),
            _ => None,
        }
    }

    /// Try to get the payload of a `Right`.
    #[inline]
    #[must_use]
    pub fn as_right(&self) -> Option<&Value> {
        match self {
            Self::Right(v) => Some(v),
            _ => None,
        }
    }

    /// Try to get the value as a custom trait object.
    ///
    /// Use [`CustomValue::as_any`] to downcast to the concrete type.
    #[inline]
    #[must_use]
    pub fn as_custom(&self) -> Option<&dyn CustomValue> {
        match self {
            Self::Custom(c) => Some(c.as_ref()),
            _ => None,
        }
    }

    /// Returns a string describing the type of this value.
    ///
    /// For `Custom` variants this delegates to [`CustomValue::custom_type_name`].
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::String(_) => "string",
            Self::Int(_) => "int",
            Self::Float(_) => "float",
            Self::Bool(_) => "bool",
            Self::Bytes(_) => "bytes",
            Self::Optional(_) => "optional",
            Self::Left(_) => "left",
            Self::Right(_) => "right",
            Self::Custom(c) => c.custom_type_name(),
        }
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::String(s.to_string())
    }
}

impl From<&String> for Value {
    fn from(s: &String) -> Self {
        Self::String(s.clone())
    }
}

macro_rules! int_value {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Value {
                fn from(i: $t) -> Self {
                    Self::Int(i64::from(i))
                }
            }
        )*
    };
}

int_value!(i8, i16, i32, i64, u8, u16, u32);

macro_rules! wide_int_value {
    ($($t:ty),*) => {
        $(
            /// Fails for values above `i64::MAX`.
            impl TryFrom<$t> for Value {
                type Error = TryFromIntError;

                fn try_from(i: $t) -> Result<Self, Self::Error> {
                    i64::try_from(i).map(Self::Int)
                }
            }
        )*
    };
}

wide_int_value!(u64, usize);

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Self::Float(f)
    }
}

impl From<f32> for Value {
    fn from(f: f32) -> Self {
        Self::Float(f64::from(f))
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<Vec<u8>> for Value {
    fn from(b: Vec<u8>) -> Self {
        Self::Bytes(b)
    }
}

/// `Option<T>` becomes an optional container. See [`Value::nullable`] for the
/// null mapping.
impl<T> From<Option<T>> for Value
where
    T: Into<Value>,
{
    fn from(opt: Option<T>) -> Self {
        Self::Optional(opt.map(|v| Box::new(v.into())))
    }
}
