//! The executable-document abstract syntax tree produced by [`crate::parser::parse_document`].

use compact_str::CompactString;

/// A GraphQL name: `[_A-Za-z][_A-Za-z0-9]*`.
pub type Name = CompactString;

/// A complete executable document: an ordered sequence of definitions.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Document {
    pub definitions: Vec<Definition>,
}

/// One top-level definition in a document.
#[derive(Debug, Clone, PartialEq)]
pub enum Definition {
    Operation(Operation),
    Fragment(Fragment),
}

/// A query, mutation, or subscription.
#[derive(Debug, Clone, PartialEq)]
pub struct Operation {
    pub operation_type: OperationType,
    pub name: Option<Name>,
    pub variable_definitions: Vec<VariableDefinition>,
    pub directives: Vec<Directive>,
    pub selection_set: Vec<Selection>,
}

/// A named, reusable selection set bound to a type condition.
#[derive(Debug, Clone, PartialEq)]
pub struct Fragment {
    pub name: Name,
    pub type_name: Name,
    pub directives: Vec<Directive>,
    pub selection_set: Vec<Selection>,
}

/// One of the three GraphQL operation kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OperationType {
    #[default]
    Query,
    Mutation,
    Subscription,
}

/// A `$name: Type = default` clause in an operation's parameter list.
#[derive(Debug, Clone, PartialEq)]
pub struct VariableDefinition {
    pub name: Name,
    pub var_type: TypeRef,
    pub default_value: Option<Value>,
    pub directives: Vec<Directive>,
}

/// A reference to a GraphQL type, as written in source (`Name`, `[Name]`, `Name!`, ...).
#[derive(Debug, Clone, PartialEq)]
pub enum TypeRef {
    Nullable(InnerType),
    NonNull(InnerType),
}

/// The part of a [`TypeRef`] beneath an optional trailing `!`.
#[derive(Debug, Clone, PartialEq)]
pub enum InnerType {
    Named(Name),
    List(Box<TypeRef>),
}

impl TypeRef {
    pub fn named(name: impl Into<Name>) -> Self {
        TypeRef::Nullable(InnerType::Named(name.into()))
    }

    pub fn is_non_null(&self) -> bool {
        matches!(self, TypeRef::NonNull(_))
    }

    /// The inner type, stripped of whichever nullability wrapper is present.
    pub fn inner(&self) -> &InnerType {
        match self {
            TypeRef::Nullable(i) | TypeRef::NonNull(i) => i,
        }
    }
}

/// One entry of a selection set: a field pick, a named fragment spread, or an inline fragment.
#[derive(Debug, Clone, PartialEq)]
pub enum Selection {
    Field(Field),
    FragmentSpread(FragmentSpread),
    InlineFragment(InlineFragment),
}

/// A single field selection, optionally aliased, with arguments and a nested selection set.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    pub alias: Option<Name>,
    pub name: Name,
    pub arguments: Vec<Argument>,
    pub directives: Vec<Directive>,
    pub selection_set: Vec<Selection>,
}

impl Field {
    /// The name under which this field's result is written: the alias if present, else the field name.
    pub fn response_key(&self) -> &Name {
        self.alias.as_ref().unwrap_or(&self.name)
    }
}

/// A `...FragmentName` selection.
#[derive(Debug, Clone, PartialEq)]
pub struct FragmentSpread {
    pub name: Name,
    pub directives: Vec<Directive>,
}

/// A `... on Type { ... }` or bare `... { ... }` selection.
#[derive(Debug, Clone, PartialEq)]
pub struct InlineFragment {
    pub type_condition: Option<Name>,
    pub directives: Vec<Directive>,
    pub selection_set: Vec<Selection>,
}

/// A `name: value` pair supplied to a field or directive.
#[derive(Debug, Clone, PartialEq)]
pub struct Argument {
    pub name: Name,
    pub value: Value,
}

/// An `@name(args)` annotation.
#[derive(Debug, Clone, PartialEq)]
pub struct Directive {
    pub name: Name,
    pub arguments: Vec<Argument>,
}

/// The input-value algebra: variables, literals, lists, and object literals.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Var(Name),
    Int(i32),
    String(String),
    Boolean(bool),
    Null,
    Enum(Name),
    List(Vec<Value>),
    Object(Vec<(Name, Value)>),
}

impl Value {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s.as_str()),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i32> {
        match self {
            Value::Int(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }
}
