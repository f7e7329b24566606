use crate::ast::VariableDefinition;

use super::directive::directives;
use super::kernel::{many1, maybe, token, Input, PResult};
use super::name::name;
use super::ty::type_ref;
use super::value::value;

/// Parses an optional, parenthesized, non-empty `($name: Type = default ...)` list.
pub fn variable_definitions(input: Input) -> PResult<Vec<VariableDefinition>> {
    let (rest, opened) = maybe(input, |i| token(i, "("))?;
    if opened.is_none() {
        return Ok((rest, Vec::new()));
    }
    let (rest, vars) = many1(rest, variable_definition)?;
    let (rest, ()) = token(rest, ")")?;
    Ok((rest, vars))
}

fn variable_definition(input: Input) -> PResult<VariableDefinition> {
    let (rest, ()) = token(input, "$")?;
    let (rest, n) = name(rest)?;
    let (rest, ()) = token(rest, ":")?;
    let (rest, var_type) = type_ref(rest)?;
    let (rest, default) = maybe(rest, default_value)?;
    let (rest, dirs) = directives(rest)?;
    Ok((
        rest,
        VariableDefinition {
            name: n,
            var_type,
            default_value: default,
            directives: dirs,
        },
    ))
}

fn default_value(input: Input) -> PResult<crate::ast::Value> {
    let (rest, ()) = token(input, "=")?;
    value(rest)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{InnerType, TypeRef, Value};

    #[test]
    fn parses_variable_with_default() {
        let (_, vars) = variable_definitions(Input::new("($limit: Int = 10)")).unwrap();
        assert_eq!(vars.len(), 1);
        assert_eq!(vars[0].name, "limit");
        assert_eq!(vars[0].var_type, TypeRef::named("Int"));
        assert_eq!(vars[0].default_value, Some(Value::Int(10)));
    }

    #[test]
    fn parses_non_null_variable() {
        let (_, vars) = variable_definitions(Input::new("($id: ID!)")).unwrap();
        assert_eq!(
            vars[0].var_type,
            TypeRef::NonNull(InnerType::Named("ID".into()))
        );
    }

    #[test]
    fn absent_list_is_empty() {
        let (_, vars) = variable_definitions(Input::new("{ x }")).unwrap();
        assert!(vars.is_empty());
    }
}
