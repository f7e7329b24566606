use crate::ast::{Definition, Document, Fragment, Operation, OperationType};

use super::directive::directives;
use super::kernel::{fail, many1, maybe, one_of, token, Input, PResult};
use super::name::name;
use super::selection::selection_set;
use super::variable::variable_definitions;

/// Parses a full executable document: one or more definitions.
pub fn document(input: Input) -> PResult<Document> {
    let (rest, definitions) = many1(input, definition)?;
    Ok((rest, Document { definitions }))
}

fn definition(input: Input) -> PResult<Definition> {
    one_of(input, &[operation_definition, fragment_definition])
}

fn operation_definition(input: Input) -> PResult<Definition> {
    let (rest, op_type) = maybe(input, operation_type)?;
    // The shorthand form (bare `{ ... }`, no `operationType` keyword) admits
    // neither a name, variable definitions, nor directives; only the full
    // form does. Gating all three on `op_type.is_some()` is what keeps
    // something like `($x: Int) { f }` from being accepted as shorthand.
    let (rest, op_name, variables, dirs) = if op_type.is_some() {
        let (rest, op_name) = maybe(rest, name)?;
        let (rest, variables) = variable_definitions(rest)?;
        let (rest, dirs) = directives(rest)?;
        (rest, op_name, variables, dirs)
    } else {
        (rest, None, Vec::new(), Vec::new())
    };
    let (rest, sels) = selection_set(rest)?;
    Ok((
        rest,
        Definition::Operation(Operation {
            operation_type: op_type.unwrap_or_default(),
            name: op_name,
            variable_definitions: variables,
            directives: dirs,
            selection_set: sels,
        }),
    ))
}

fn operation_type(input: Input) -> PResult<OperationType> {
    one_of(
        input,
        &[
            |i| {
                let (rest, ()) = token(i, "query")?;
                Ok((rest, OperationType::Query))
            },
            |i| {
                let (rest, ()) = token(i, "mutation")?;
                Ok((rest, OperationType::Mutation))
            },
            |i| {
                let (rest, ()) = token(i, "subscription")?;
                Ok((rest, OperationType::Subscription))
            },
        ],
    )
}

fn fragment_definition(input: Input) -> PResult<Definition> {
    let (rest, ()) = token(input, "fragment")?;
    let (rest, frag_name) = name(rest)?;
    if frag_name == "on" {
        return fail(input, "fragment name must not be 'on'");
    }
    let (rest, ()) = token(rest, "on")?;
    let (rest, type_name) = name(rest)?;
    let (rest, dirs) = directives(rest)?;
    let (rest, sels) = selection_set(rest)?;
    Ok((
        rest,
        Definition::Fragment(Fragment {
            name: frag_name,
            type_name,
            directives: dirs,
            selection_set: sels,
        }),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{Selection, Value};

    #[test]
    fn parses_shorthand_query() {
        let (_, doc) = document(Input::new("query { user }")).unwrap();
        assert_eq!(doc.definitions.len(), 1);
        match &doc.definitions[0] {
            Definition::Operation(op) => {
                assert_eq!(op.operation_type, OperationType::Query);
                assert!(op.name.is_none());
                assert!(op.variable_definitions.is_empty());
                assert!(op.directives.is_empty());
            }
            other => panic!("expected operation, got {other:?}"),
        }
    }

    #[test]
    fn parses_bare_brace_shorthand() {
        let (_, doc) = document(Input::new("{ user }")).unwrap();
        match &doc.definitions[0] {
            Definition::Operation(op) => {
                assert_eq!(op.operation_type, OperationType::Query);
                assert!(op.name.is_none());
            }
            other => panic!("expected operation, got {other:?}"),
        }
    }

    #[test]
    fn parses_named_operation_with_variable() {
        let (_, doc) =
            document(Input::new("query GetUser($id: ID!) { user(id: $id) { id } }")).unwrap();
        match &doc.definitions[0] {
            Definition::Operation(op) => {
                assert_eq!(op.name.as_deref(), Some("GetUser"));
                assert_eq!(op.variable_definitions[0].name, "id");
                match &op.selection_set[0] {
                    Selection::Field(f) => {
                        assert_eq!(f.name, "user");
                        assert_eq!(f.arguments[0].value, Value::Var("id".into()));
                    }
                    other => panic!("expected field, got {other:?}"),
                }
            }
            other => panic!("expected operation, got {other:?}"),
        }
    }

    #[test]
    fn parses_fragment_definition() {
        let (_, doc) = document(Input::new("fragment UserDetails on User { id name }")).unwrap();
        match &doc.definitions[0] {
            Definition::Fragment(frag) => {
                assert_eq!(frag.name, "UserDetails");
                assert_eq!(frag.type_name, "User");
                assert_eq!(frag.selection_set.len(), 2);
            }
            other => panic!("expected fragment, got {other:?}"),
        }
    }

    #[test]
    fn fragment_named_on_is_rejected() {
        assert!(super::super::parse_document("fragment on on Type { x }").is_err());
    }

    #[test]
    fn empty_document_is_rejected() {
        assert!(document(Input::new("")).is_err());
    }
}
