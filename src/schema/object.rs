use std::collections::HashMap;
use std::sync::Arc;

use indexmap::IndexMap;

use crate::ast::{Name, Selection, Value};

use super::meta::{FieldMeta, ObjectMeta};
use super::resolved_value::{FieldError, ResolvedValue};

/// The argument values supplied to a single field invocation, with defaults
/// already substituted in by the caller for any argument the query omitted.
pub type ArgumentValues = IndexMap<Name, Value>;

/// A field's resolve function: a pure mapping from the parent value, this
/// invocation's argument values, and its requested sub-selection, to a
/// result or a typed error.
pub type Resolver<Ctx> = Arc<
    dyn Fn(&Ctx, &ArgumentValues, &[Selection]) -> Result<ResolvedValue, FieldError> + Send + Sync,
>;

/// Accumulates field metadata and resolvers for one object type.
pub struct ObjectTypeBuilder<Ctx> {
    name: Name,
    description: Option<String>,
    fields: Vec<FieldMeta>,
    resolvers: HashMap<Name, Resolver<Ctx>>,
}

impl<Ctx> ObjectTypeBuilder<Ctx> {
    pub fn new(name: impl Into<Name>) -> Self {
        ObjectTypeBuilder {
            name: name.into(),
            description: None,
            fields: Vec::new(),
            resolvers: HashMap::new(),
        }
    }

    pub fn describe(mut self, text: impl Into<String>) -> Self {
        self.description = Some(text.into());
        self
    }

    /// Registers a field's metadata together with the resolver that
    /// answers it. Panics if this object type already has a field with
    /// this name: a duplicate field name is a programming error, not a
    /// user-input error.
    pub fn field<F>(mut self, meta: FieldMeta, resolve: F) -> Self
    where
        F: Fn(&Ctx, &ArgumentValues, &[Selection]) -> Result<ResolvedValue, FieldError>
            + Send
            + Sync
            + 'static,
    {
        assert!(
            !self.resolvers.contains_key(&meta.name),
            "duplicate field '{}' on object type '{}'",
            meta.name,
            self.name
        );
        self.resolvers.insert(meta.name.clone(), Arc::new(resolve));
        self.fields.push(meta);
        self
    }

    pub fn finalize(self) -> ObjectType<Ctx> {
        ObjectType {
            meta: ObjectMeta {
                name: self.name,
                description: self.description,
                fields: self.fields,
            },
            resolvers: self.resolvers,
        }
    }
}

/// A finished object type: its introspectable metadata plus a resolver
/// table keyed by field name.
pub struct ObjectType<Ctx> {
    meta: ObjectMeta,
    resolvers: HashMap<Name, Resolver<Ctx>>,
}

impl<Ctx> ObjectType<Ctx> {
    pub fn meta(&self) -> &ObjectMeta {
        &self.meta
    }

    pub fn field_meta(&self, name: &str) -> Option<&FieldMeta> {
        self.meta.fields.iter().find(|f| f.name == name)
    }

    /// Resolves one field by name against `parent`/`arguments`/`selection_set`.
    /// Returns `None` if this type has no such field (the caller's job to
    /// have validated the selection against the schema first).
    pub fn resolve_field(
        &self,
        field_name: &str,
        parent: &Ctx,
        arguments: &ArgumentValues,
        selection_set: &[Selection],
    ) -> Option<Result<ResolvedValue, FieldError>> {
        self.resolvers
            .get(field_name)
            .map(|resolver| resolver(parent, arguments, selection_set))
    }
}

/// Builds the effective argument map for a field invocation: values
/// supplied in the query override declared defaults, and an argument
/// neither supplied nor defaulted is bound to `Value::Null`.
pub fn bind_arguments(meta: &FieldMeta, supplied: &ArgumentValues) -> ArgumentValues {
    let mut bound = IndexMap::with_capacity(meta.arguments.len());
    for arg in &meta.arguments {
        let value = supplied
            .get(&arg.name)
            .cloned()
            .or_else(|| arg.default_value.clone())
            .unwrap_or(Value::Null);
        bound.insert(arg.name.clone(), value);
    }
    bound
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::TypeRef;

    struct User {
        id: i32,
    }

    #[test]
    fn builds_object_and_resolves_field() {
        let object = ObjectTypeBuilder::<User>::new("User")
            .describe("A user")
            .field(
                FieldMeta::new("id", TypeRef::named("ID")),
                |user, _args, _sels| Ok(ResolvedValue::int(user.id)),
            )
            .finalize();

        assert_eq!(object.meta().name, "User");
        let result = object
            .resolve_field("id", &User { id: 7 }, &ArgumentValues::new(), &[])
            .unwrap();
        assert_eq!(result, Ok(ResolvedValue::int(7)));
    }

    #[test]
    #[should_panic(expected = "duplicate field")]
    fn duplicate_field_names_panic() {
        let _ = ObjectTypeBuilder::<User>::new("User")
            .field(
                FieldMeta::new("id", TypeRef::named("ID")),
                |u: &User, _, _| Ok(ResolvedValue::int(u.id)),
            )
            .field(
                FieldMeta::new("id", TypeRef::named("ID")),
                |u: &User, _, _| Ok(ResolvedValue::int(u.id)),
            );
    }

    #[test]
    fn resolver_sees_the_requested_sub_selection() {
        use crate::ast::Field;

        let object = ObjectTypeBuilder::<User>::new("User")
            .field(
                FieldMeta::new("id", TypeRef::named("ID")),
                |_user, _args, sels| Ok(ResolvedValue::int(sels.len() as i32)),
            )
            .finalize();

        let requested = [Selection::Field(Field {
            alias: None,
            name: "name".into(),
            arguments: Vec::new(),
            directives: Vec::new(),
            selection_set: Vec::new(),
        })];
        let result = object
            .resolve_field("id", &User { id: 7 }, &ArgumentValues::new(), &requested)
            .unwrap();
        assert_eq!(result, Ok(ResolvedValue::int(1)));
    }

    #[test]
    fn bind_arguments_falls_back_to_default_then_null() {
        use super::super::meta::ArgMeta;

        let meta = FieldMeta::new("posts", TypeRef::named("Post")).argument(
            ArgMeta::new("limit", TypeRef::named("Int")).default_value(Value::Int(10)),
        );
        let supplied = ArgumentValues::new();
        let bound = bind_arguments(&meta, &supplied);
        assert_eq!(bound.get("limit"), Some(&Value::Int(10)));
    }
}
