use crate::ast::{Name, TypeRef, Value};

use super::resolved_value::ScalarResolve;

/// Describes one argument accepted by a field.
#[derive(Debug, Clone, PartialEq)]
pub struct ArgMeta {
    pub name: Name,
    pub description: Option<String>,
    pub type_ref: TypeRef,
    pub default_value: Option<Value>,
}

impl ArgMeta {
    pub fn new(name: impl Into<Name>, type_ref: TypeRef) -> Self {
        ArgMeta {
            name: name.into(),
            description: None,
            type_ref,
            default_value: None,
        }
    }

    pub fn describe(mut self, text: impl Into<String>) -> Self {
        self.description = Some(text.into());
        self
    }

    pub fn default_value(mut self, value: Value) -> Self {
        self.default_value = Some(value);
        self
    }
}

/// Describes one field of an object type: its type, documentation, and arguments.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldMeta {
    pub name: Name,
    pub description: Option<String>,
    pub deprecation_reason: Option<String>,
    pub arguments: Vec<ArgMeta>,
    pub type_ref: TypeRef,
}

impl FieldMeta {
    pub fn new(name: impl Into<Name>, type_ref: TypeRef) -> Self {
        FieldMeta {
            name: name.into(),
            description: None,
            deprecation_reason: None,
            arguments: Vec::new(),
            type_ref,
        }
    }

    pub fn describe(mut self, text: impl Into<String>) -> Self {
        self.description = Some(text.into());
        self
    }

    pub fn deprecated(mut self, reason: impl Into<String>) -> Self {
        self.deprecation_reason = Some(reason.into());
        self
    }

    pub fn argument(mut self, arg: ArgMeta) -> Self {
        self.arguments.push(arg);
        self
    }
}

/// The descriptive (introspectable) half of an object type.
#[derive(Debug, Clone, PartialEq)]
pub struct ObjectMeta {
    pub name: Name,
    pub description: Option<String>,
    pub fields: Vec<FieldMeta>,
}

/// Describes one case of an enum type.
#[derive(Debug, Clone, PartialEq)]
pub struct EnumCaseMeta {
    pub name: Name,
    pub description: Option<String>,
    pub deprecation_reason: Option<String>,
}

impl EnumCaseMeta {
    pub fn new(name: impl Into<Name>) -> Self {
        EnumCaseMeta {
            name: name.into(),
            description: None,
            deprecation_reason: None,
        }
    }

    pub fn describe(mut self, text: impl Into<String>) -> Self {
        self.description = Some(text.into());
        self
    }

    pub fn deprecated(mut self, reason: impl Into<String>) -> Self {
        self.deprecation_reason = Some(reason.into());
        self
    }
}

/// The descriptive half of an enum type.
#[derive(Debug, Clone, PartialEq)]
pub struct EnumMeta {
    pub name: Name,
    pub description: Option<String>,
    pub cases: Vec<EnumCaseMeta>,
}

/// Describes a scalar type and carries the predicate used to validate that
/// an arbitrary [`Value`] can be parsed into the scalar's host Rust type.
pub struct ScalarMeta {
    pub name: Name,
    pub description: Option<String>,
    try_parse_fn: Box<dyn Fn(&Value) -> bool + Send + Sync>,
}

impl ScalarMeta {
    /// Builds a `ScalarMeta` generically over any host type implementing
    /// [`ScalarResolve`], the same way a metadata value's `try_parse_fn` is
    /// built from `FromInputValue` in the type this crate is descended from.
    pub fn new<T: ScalarResolve + 'static>(name: impl Into<Name>) -> Self {
        ScalarMeta {
            name: name.into(),
            description: None,
            try_parse_fn: Box::new(|v: &Value| T::try_from_value(v).is_some()),
        }
    }

    pub fn describe(mut self, text: impl Into<String>) -> Self {
        self.description = Some(text.into());
        self
    }

    pub fn can_parse(&self, value: &Value) -> bool {
        (self.try_parse_fn)(value)
    }
}

impl std::fmt::Debug for ScalarMeta {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScalarMeta")
            .field("name", &self.name)
            .field("description", &self.description)
            .finish_non_exhaustive()
    }
}
