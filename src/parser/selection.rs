use crate::ast::{Field, FragmentSpread, InlineFragment, Selection};

use super::directive::{arguments, directives};
use super::kernel::{fail, many1, maybe, one_of, recursive, token, Input, PResult};
use super::name::name;

/// Parses a non-empty `{ ... }` selection set.
pub fn selection_set(input: Input) -> PResult<Vec<Selection>> {
    let (rest, ()) = token(input, "{")?;
    let (rest, selections) = many1(rest, recursive(selection))?;
    let (rest, ()) = token(rest, "}")?;
    Ok((rest, selections))
}

fn selection(input: Input) -> PResult<Selection> {
    one_of(input, &[dotted_selection, field_selection])
}

fn dotted_selection(input: Input) -> PResult<Selection> {
    let (rest, ()) = token(input, "...")?;
    one_of(rest, &[fragment_spread_rest, inline_fragment_rest])
}

fn fragment_spread_rest(input: Input) -> PResult<Selection> {
    let (rest, n) = name(input)?;
    if n == "on" {
        return fail(input, "fragment name must not be 'on'");
    }
    let (rest, dirs) = directives(rest)?;
    Ok((
        rest,
        Selection::FragmentSpread(FragmentSpread {
            name: n,
            directives: dirs,
        }),
    ))
}

fn inline_fragment_rest(input: Input) -> PResult<Selection> {
    let (rest, type_condition) = maybe(input, type_condition)?;
    let (rest, dirs) = directives(rest)?;
    let (rest, sels) = selection_set(rest)?;
    Ok((
        rest,
        Selection::InlineFragment(InlineFragment {
            type_condition,
            directives: dirs,
            selection_set: sels,
        }),
    ))
}

fn type_condition(input: Input) -> PResult<compact_str::CompactString> {
    let (rest, ()) = token(input, "on")?;
    name(rest)
}

fn field_selection(input: Input) -> PResult<Selection> {
    let (rest, first) = name(input)?;
    let (rest, colon) = maybe(rest, |i| token(i, ":"))?;
    let (rest, alias, field_name) = if colon.is_some() {
        let (rest, second) = name(rest)?;
        (rest, Some(first), second)
    } else {
        (rest, None, first)
    };
    let (rest, args) = arguments(rest)?;
    let (rest, dirs) = directives(rest)?;
    let (rest, sels) = maybe(rest, selection_set)?;
    Ok((
        rest,
        Selection::Field(Field {
            alias,
            name: field_name,
            arguments: args,
            directives: dirs,
            selection_set: sels.unwrap_or_default(),
        }),
    ))
}
