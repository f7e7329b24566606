use crate::ast::{Argument, Directive};

use super::kernel::{many, maybe, token, Input, PResult};
use super::name::name;
use super::value::value;

/// Parses zero or more `@name(args)` directives.
pub fn directives(input: Input) -> PResult<Vec<Directive>> {
    many(input, directive)
}

fn directive(input: Input) -> PResult<Directive> {
    let (rest, ()) = token(input, "@")?;
    let (rest, n) = name(rest)?;
    let (rest, args) = arguments(rest)?;
    Ok((
        rest,
        Directive {
            name: n,
            arguments: args,
        },
    ))
}

/// Parses an optional, parenthesized, non-empty argument list.
pub fn arguments(input: Input) -> PResult<Vec<Argument>> {
    let (rest, opened) = maybe(input, |i| token(i, "("))?;
    if opened.is_none() {
        return Ok((rest, Vec::new()));
    }
    let (rest, args) = super::kernel::many1(rest, argument)?;
    let (rest, ()) = token(rest, ")")?;
    Ok((rest, args))
}

fn argument(input: Input) -> PResult<Argument> {
    let (rest, n) = name(input)?;
    let (rest, ()) = token(rest, ":")?;
    let (rest, v) = value(rest)?;
    Ok((rest, Argument { name: n, value: v }))
}
