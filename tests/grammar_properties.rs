use graphql_toolkit::ast::{Definition, InnerType, OperationType, Selection, TypeRef};
use graphql_toolkit::parse_document;
use proptest::prelude::*;

fn name_strategy() -> impl Strategy<Value = String> {
    "[A-Za-z_][A-Za-z0-9_]{0,9}".prop_filter("must not be a reserved word", |s| {
        !matches!(s.as_str(), "on" | "true" | "false" | "null" | "fragment" | "query")
    })
}

proptest! {
    /// Any single valid field name, wrapped in a shorthand query, parses
    /// back out to a one-field selection set with that exact name.
    #[test]
    fn shorthand_query_round_trips_field_name(field in name_strategy()) {
        let source = format!("{{ {field} }}");
        let doc = parse_document(&source).expect("well-formed shorthand query must parse");
        prop_assert_eq!(doc.definitions.len(), 1);
        let Definition::Operation(op) = &doc.definitions[0] else {
            panic!("expected an operation");
        };
        prop_assert_eq!(op.operation_type, OperationType::Query);
        match &op.selection_set[..] {
            [Selection::Field(f)] => prop_assert_eq!(f.name.as_str(), field.as_str()),
            other => panic!("unexpected selection set: {other:?}"),
        }
    }

    /// `Type!` always parses as `NonNull`, and a bare `Type` always parses
    /// as `Nullable`, for any valid type name.
    #[test]
    fn bang_suffix_controls_nullability(type_name in name_strategy()) {
        let nullable_src = format!("query($v: {type_name}) {{ f }}");
        let doc = parse_document(&nullable_src).unwrap();
        let Definition::Operation(op) = &doc.definitions[0] else {
            panic!("expected an operation");
        };
        prop_assert_eq!(
            &op.variable_definitions[0].var_type,
            &TypeRef::Nullable(InnerType::Named(type_name.clone().into()))
        );

        let non_null_src = format!("query($v: {type_name}!) {{ f }}");
        let doc = parse_document(&non_null_src).unwrap();
        let Definition::Operation(op) = &doc.definitions[0] else {
            panic!("expected an operation");
        };
        prop_assert_eq!(
            &op.variable_definitions[0].var_type,
            &TypeRef::NonNull(InnerType::Named(type_name.into()))
        );
    }

    /// An empty selection set is never accepted, regardless of what
    /// surrounds it.
    #[test]
    fn empty_braces_never_parse_as_a_selection_set(prefix in "(query|mutation|subscription)?") {
        let source = format!("{prefix} {{}}");
        prop_assert!(parse_document(&source).is_err());
    }
}
