use indexmap::IndexMap;

use crate::ast::{Name, Value};

/// The output-value algebra produced by resolvers. Unlike [`Value`], it
/// carries no variables and no bare enum references: an enum resolves to
/// the wire-level name of its case, carried as a scalar string.
#[derive(Debug, Clone, PartialEq)]
pub enum ResolvedValue {
    Null,
    Scalar(Value),
    List(Vec<ResolvedValue>),
    Object(ResolvedObject),
}

/// An ordered field-name -> value map, as produced by an object-type resolver.
pub type ResolvedObject = IndexMap<Name, ResolvedValue>;

impl ResolvedValue {
    pub fn scalar(value: impl Into<Value>) -> Self {
        ResolvedValue::Scalar(value.into())
    }

    pub fn string(s: impl Into<String>) -> Self {
        ResolvedValue::Scalar(Value::String(s.into()))
    }

    pub fn int(i: i32) -> Self {
        ResolvedValue::Scalar(Value::Int(i))
    }

    pub fn boolean(b: bool) -> Self {
        ResolvedValue::Scalar(Value::Boolean(b))
    }

    pub fn is_null(&self) -> bool {
        matches!(self, ResolvedValue::Null)
    }
}

impl From<Value> for ResolvedValue {
    fn from(v: Value) -> Self {
        ResolvedValue::Scalar(v)
    }
}

/// The error a resolver may produce in place of a successful [`ResolvedValue`].
#[derive(Debug, Clone, PartialEq)]
pub struct FieldError {
    message: String,
    extensions: ResolvedValue,
}

impl FieldError {
    pub fn new(message: impl Into<String>) -> Self {
        FieldError {
            message: message.into(),
            extensions: ResolvedValue::Null,
        }
    }

    pub fn with_extensions(message: impl Into<String>, extensions: ResolvedValue) -> Self {
        FieldError {
            message: message.into(),
            extensions,
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn extensions(&self) -> &ResolvedValue {
        &self.extensions
    }
}

impl<T: std::fmt::Display> From<T> for FieldError {
    fn from(value: T) -> Self {
        FieldError::new(value.to_string())
    }
}

/// The contract a host Rust type implements to act as a GraphQL scalar:
/// parsing out of a literal/variable-substituted [`Value`], and rendering
/// back out as a [`ResolvedValue`] when returned by a resolver.
pub trait ScalarResolve: Sized {
    fn try_from_value(value: &Value) -> Option<Self>;
    fn to_resolved_value(&self) -> ResolvedValue;
}

impl ScalarResolve for String {
    fn try_from_value(value: &Value) -> Option<Self> {
        value.as_str().map(str::to_owned)
    }

    fn to_resolved_value(&self) -> ResolvedValue {
        ResolvedValue::string(self.clone())
    }
}

impl ScalarResolve for i32 {
    fn try_from_value(value: &Value) -> Option<Self> {
        value.as_int()
    }

    fn to_resolved_value(&self) -> ResolvedValue {
        ResolvedValue::int(*self)
    }
}

impl ScalarResolve for bool {
    fn try_from_value(value: &Value) -> Option<Self> {
        value.as_bool()
    }

    fn to_resolved_value(&self) -> ResolvedValue {
        ResolvedValue::boolean(*self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_error_from_display() {
        let err: FieldError = "user not found".into();
        assert_eq!(err.message(), "user not found");
        assert_eq!(err.extensions(), &ResolvedValue::Null);
    }

    #[test]
    fn string_scalar_round_trips() {
        let v = Value::String("hi".to_string());
        let parsed = String::try_from_value(&v).unwrap();
        assert_eq!(parsed, "hi");
        assert_eq!(parsed.to_resolved_value(), ResolvedValue::string("hi"));
    }
}
