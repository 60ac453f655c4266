//! Defines the filter expression model consumed by the compiler.

use crate::error::FilterError;
use serde::de::{self, Deserialize, Deserializer, MapAccess, SeqAccess, Visitor};
use serde_json::Value as JsonValue;
use std::fmt;

/// A scalar value appearing in a filter expression.
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    String(String),
    Int(i64),
    Float(f64),
    Bool(bool),
}

impl Literal {
    /// Bare textual form, used when no operator context applies.
    pub fn to_bare(&self) -> String {
        match self {
            Literal::String(s) => s.clone(),
            Literal::Int(v) => v.to_string(),
            Literal::Float(v) => v.to_string(),
            Literal::Bool(v) => v.to_string(),
        }
    }

    /// Quoted SQL form: strings are single-quoted with embedded quotes
    /// doubled, other scalars use their bare form.
    pub fn to_sql(&self) -> String {
        match self {
            Literal::String(s) => format!("'{}'", s.replace('\'', "''")),
            other => other.to_bare(),
        }
    }
}

/// A structured filter condition.
///
/// Mapping keys starting with [`crate::ops::OPERATOR_MARKER`] select
/// operators from the operator table; any other key names a field. Key order
/// is semantically significant and determines output fragment order, so
/// mappings are kept as insertion-ordered pairs.
#[derive(Debug, Clone, PartialEq)]
pub enum FilterExpr {
    Literal(Literal),
    /// Only meaningful under an enclosing operator (e.g. `$in`, `$or`).
    Array(Vec<FilterExpr>),
    Map(Vec<(String, FilterExpr)>),
}

impl FilterExpr {
    /// Builds a single-entry mapping, e.g. `field("age", 18)` for `age = 18`.
    pub fn field(name: impl Into<String>, value: impl Into<FilterExpr>) -> Self {
        FilterExpr::Map(vec![(name.into(), value.into())])
    }

    pub fn map<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<FilterExpr>,
    {
        FilterExpr::Map(
            pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    pub fn array<I, V>(items: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<FilterExpr>,
    {
        FilterExpr::Array(items.into_iter().map(Into::into).collect())
    }
}

/// Input to the compile entry point: either a backend-native condition
/// passed through unmodified, or a structured expression to compile.
#[derive(Debug, Clone, PartialEq)]
pub enum Filter {
    Raw(String),
    Expr(FilterExpr),
}

impl From<&str> for Literal {
    fn from(v: &str) -> Self {
        Literal::String(v.to_string())
    }
}

impl From<String> for Literal {
    fn from(v: String) -> Self {
        Literal::String(v)
    }
}

impl From<i64> for Literal {
    fn from(v: i64) -> Self {
        Literal::Int(v)
    }
}

impl From<i32> for Literal {
    fn from(v: i32) -> Self {
        Literal::Int(v as i64)
    }
}

impl From<f64> for Literal {
    fn from(v: f64) -> Self {
        Literal::Float(v)
    }
}

impl From<bool> for Literal {
    fn from(v: bool) -> Self {
        Literal::Bool(v)
    }
}

impl From<Literal> for FilterExpr {
    fn from(v: Literal) -> Self {
        FilterExpr::Literal(v)
    }
}

impl From<&str> for FilterExpr {
    fn from(v: &str) -> Self {
        FilterExpr::Literal(v.into())
    }
}

impl From<String> for FilterExpr {
    fn from(v: String) -> Self {
        FilterExpr::Literal(v.into())
    }
}

impl From<i64> for FilterExpr {
    fn from(v: i64) -> Self {
        FilterExpr::Literal(v.into())
    }
}

impl From<i32> for FilterExpr {
    fn from(v: i32) -> Self {
        FilterExpr::Literal(v.into())
    }
}

impl From<f64> for FilterExpr {
    fn from(v: f64) -> Self {
        FilterExpr::Literal(v.into())
    }
}

impl From<bool> for FilterExpr {
    fn from(v: bool) -> Self {
        FilterExpr::Literal(v.into())
    }
}

impl From<FilterExpr> for Filter {
    fn from(expr: FilterExpr) -> Self {
        Filter::Expr(expr)
    }
}

impl From<&str> for Filter {
    fn from(text: &str) -> Self {
        Filter::Raw(text.to_string())
    }
}

impl From<String> for Filter {
    fn from(text: String) -> Self {
        Filter::Raw(text)
    }
}

impl TryFrom<&JsonValue> for FilterExpr {
    type Error = FilterError;

    /// Object key order follows the underlying map; the `preserve_order`
    /// feature of `serde_json` keeps document order.
    fn try_from(value: &JsonValue) -> Result<Self, FilterError> {
        match value {
            JsonValue::Null => Err(FilterError::UnsupportedExpression(
                "null value in filter expression".to_string(),
            )),
            JsonValue::Bool(b) => Ok(Literal::Bool(*b).into()),
            JsonValue::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Ok(Literal::Int(i).into())
                } else if let Some(f) = n.as_f64() {
                    Ok(Literal::Float(f).into())
                } else {
                    Err(FilterError::UnsupportedExpression(format!(
                        "numeric literal out of range: {n}"
                    )))
                }
            }
            JsonValue::String(s) => Ok(Literal::String(s.clone()).into()),
            JsonValue::Array(items) => items
                .iter()
                .map(FilterExpr::try_from)
                .collect::<Result<Vec<_>, _>>()
                .map(FilterExpr::Array),
            JsonValue::Object(map) => map
                .iter()
                .map(|(k, v)| Ok((k.clone(), FilterExpr::try_from(v)?)))
                .collect::<Result<Vec<_>, _>>()
                .map(FilterExpr::Map),
        }
    }
}

struct FilterExprVisitor;

impl<'de> Visitor<'de> for FilterExprVisitor {
    type Value = FilterExpr;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a scalar, an array, or a key/value mapping")
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<Self::Value, E> {
        Ok(Literal::Bool(v).into())
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
        Ok(Literal::Int(v).into())
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
        i64::try_from(v)
            .map(|v| Literal::Int(v).into())
            .map_err(|_| E::custom(format!("integer literal out of range: {v}")))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
        Ok(Literal::Float(v).into())
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        Ok(Literal::String(v.to_string()).into())
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut items = Vec::with_capacity(access.size_hint().unwrap_or(0));
        while let Some(item) = access.next_element::<FilterExpr>()? {
            items.push(item);
        }
        Ok(FilterExpr::Array(items))
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        // Entries are taken in document order, which the compiler preserves.
        let mut pairs = Vec::with_capacity(access.size_hint().unwrap_or(0));
        while let Some((key, value)) = access.next_entry::<String, FilterExpr>()? {
            pairs.push((key, value));
        }
        Ok(FilterExpr::Map(pairs))
    }
}

impl<'de> Deserialize<'de> for FilterExpr {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(FilterExprVisitor)
    }
}

struct FilterVisitor;

impl<'de> Visitor<'de> for FilterVisitor {
    type Value = Filter;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a raw condition string or a structured filter expression")
    }

    // A top-level string is a raw backend-native condition, not a literal.
    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        Ok(Filter::Raw(v.to_string()))
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<Self::Value, E> {
        FilterExprVisitor.visit_bool(v).map(Filter::Expr)
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
        FilterExprVisitor.visit_i64(v).map(Filter::Expr)
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
        FilterExprVisitor.visit_u64(v).map(Filter::Expr)
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
        FilterExprVisitor.visit_f64(v).map(Filter::Expr)
    }

    fn visit_seq<A: SeqAccess<'de>>(self, access: A) -> Result<Self::Value, A::Error> {
        FilterExprVisitor.visit_seq(access).map(Filter::Expr)
    }

    fn visit_map<A: MapAccess<'de>>(self, access: A) -> Result<Self::Value, A::Error> {
        FilterExprVisitor.visit_map(access).map(Filter::Expr)
    }
}

impl<'de> Deserialize<'de> for Filter {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(FilterVisitor)
    }
}
