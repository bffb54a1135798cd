//! Config types for data-driven criteria and subjects.
//!
//! These types mirror [`Criterion`] and [`Value`] but are serde-deserializable,
//! so match tables can live in JSON or YAML.
//!
//! # Relationship to runtime types
//!
//! | Config type | Runtime type | Loader method |
//! |-------------|-------------|---------------|
//! | [`CriterionConfig`] | [`Criterion`] | [`CriterionConfig::into_criterion`] |
//! | [`ValueConfig`] | [`Value`] | [`ValueConfig::into_value`] |
//!
//! ```json
//! [{ "literal": "div" }, { "builtin": "non_null" }, { "literal": 0 }]
//! [{ "right": { "regex": "^ok" } }, "is_left"]
//! ```

use serde::de::IgnoredAny;
use serde::Deserialize;

use crate::{left_matching, right_matching, BuiltIn, CaseError, Criterion, Value};

/// Configuration for a [`Criterion`].
///
/// Externally tagged, snake_case. Unit variants are plain strings.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CriterionConfig {
    /// Structural equality with a value.
    Literal(ValueConfig),
    /// A built-in classifier: `any`, `null`, `non_null`, `present`, `absent`.
    Builtin(BuiltIn),
    /// A regex over string subjects.
    Regex(String),
    /// A `Left` subject whose payload matches the nested criterion.
    Left(Box<CriterionConfig>),
    /// A `Right` subject whose payload matches the nested criterion.
    Right(Box<CriterionConfig>),
    /// Any `Left` subject.
    IsLeft,
    /// Any `Right` subject.
    IsRight,
}

impl CriterionConfig {
    /// Build the runtime criterion.
    ///
    /// # Errors
    ///
    /// Returns [`CaseError::InvalidPattern`] for a regex that does not compile,
    /// or [`CaseError::InvalidConfig`] for a literal that is not a valid value.
    pub fn into_criterion(self) -> Result<Criterion, CaseError> {
        Ok(match self {
            Self::Literal(value) => Criterion::Literal(value.into_value()?),
            Self::Builtin(kind) => Criterion::BuiltIn(kind),
            Self::Regex(pattern) => Criterion::regex(&pattern)?,
            Self::Left(inner) => left_matching(inner.into_criterion()?),
            Self::Right(inner) => right_matching(inner.into_criterion()?),
            Self::IsLeft => crate::is_left(),
            Self::IsRight => crate::is_right(),
        })
    }
}

/// Configuration for a subject or literal [`Value`].
///
/// JSON scalars map directly: `null`, booleans, integers, floats, strings.
/// Single-key maps build wrapped values:
///
/// ```yaml
/// - { some: 3 }
/// - { none: ~ }
/// - { left: "timeout" }
/// - { right: { some: true } }
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ValueConfig {
    /// An optional or either wrapper.
    Tagged(TaggedValueConfig),
    /// Any other JSON value. Only scalars convert.
    Scalar(serde_json::Value),
}

/// Wrapper forms of [`ValueConfig`].
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaggedValueConfig {
    /// A present optional.
    Some(Box<ValueConfig>),
    /// An absent optional. The payload is ignored.
    None(IgnoredAny),
    /// A `Left` either.
    Left(Box<ValueConfig>),
    /// A `Right` either.
    Right(Box<ValueConfig>),
}

impl ValueConfig {
    /// Build the runtime value.
    ///
    /// # Errors
    ///
    /// Returns [`CaseError::InvalidConfig`] for arrays and for maps that are
    /// not one of the wrapper forms.
    pub fn into_value(self) -> Result<Value, CaseError> {
        match self {
            Self::Tagged(TaggedValueConfig::Some(inner)) => Ok(Value::some(inner.into_value()?)),
            Self::Tagged(TaggedValueConfig::None(_)) => Ok(Value::none()),
            Self::Tagged(TaggedValueConfig::Left(inner)) => {
                Ok(Value::Left(Box::new(inner.into_value()?)))
            }
            Self::Tagged(TaggedValueConfig::Right(inner)) => {
                Ok(Value::Right(Box::new(inner.into_value()?)))
            }
            Self::Scalar(json) => scalar(json),
        }
    }
}

fn scalar(json: serde_json::Value) -> Result<Value, CaseError> {
    match json {
        serde_json::Value::Null => Ok(Value::Null),
        serde_json::Value::Bool(b) => Ok(Value::Bool(b)),
        serde_json::Value::String(s) => Ok(Value::String(s)),
        serde_json::Value::Number(n) => n
            .as_i64()
            .map(Value::Int)
            .or_else(|| n.as_f64().map(Value::Float))
            .ok_or_else(|| CaseError::InvalidConfig {
                message: format!("unrepresentable number {n}"),
            }),
        other @ (serde_json::Value::Array(_) | serde_json::Value::Object(_)) => {
            Err(CaseError::InvalidConfig {
                message: format!("expected a scalar or wrapper map, got {other}"),
            })
        }
    }
}

/// Decode a criteria list from JSON.
///
/// # Errors
///
/// Returns [`CaseError::InvalidConfig`] if the JSON is malformed, or any error
/// from [`CriterionConfig::into_criterion`].
pub fn criteria_from_json(json: &str) -> Result<Vec<Criterion>, CaseError> {
    let configs: Vec<CriterionConfig> =
        serde_json::from_str(json).map_err(|e| CaseError::InvalidConfig {
            message: e.to_string(),
        })?;
    configs
        .into_iter()
        .map(CriterionConfig::into_criterion)
        .collect()
}
