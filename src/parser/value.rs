use crate::ast::Value;

use super::kernel::{fail, many, one_of, skip_ignored, token, Input, PResult};
use super::name::name;

/// Parses a GraphQL input value. Alternatives are tried in an order that
/// keeps `true`/`false`/`null` from ever being mistaken for an `Enum` name.
pub fn value(input: Input) -> PResult<Value> {
    one_of(
        input,
        &[
            variable,
            int,
            string,
            boolean,
            null,
            list,
            object,
            enum_value,
        ],
    )
}

fn variable(input: Input) -> PResult<Value> {
    let (rest, ()) = token(input, "$")?;
    let (rest, n) = name(rest)?;
    Ok((rest, Value::Var(n)))
}

fn int(input: Input) -> PResult<Value> {
    let neg = input.remainder().starts_with('-');
    let digits_start = if neg { input.advance(1) } else { input };
    match digits_start.peek_byte() {
        Some(b) if b.is_ascii_digit() => {}
        _ => return fail(input, "expected an integer"),
    }
    let mut len = 1;
    while digits_start
        .advance(len)
        .peek_byte()
        .is_some_and(|b| b.is_ascii_digit())
    {
        len += 1;
    }
    let digits = &digits_start.remainder()[..len];
    let text = if neg {
        format!("-{digits}")
    } else {
        digits.to_string()
    };
    match text.parse::<i32>() {
        Ok(n) => {
            let rest = skip_ignored(digits_start.advance(len));
            Ok((rest, Value::Int(n)))
        }
        Err(_) => fail(
            digits_start.advance(len),
            format!("integer literal '{text}' out of i32 range"),
        ),
    }
}

fn string(input: Input) -> PResult<Value> {
    let (mut rest, ()) = token_no_skip(input, "\"")?;
    let mut out = String::new();
    loop {
        match rest.peek_byte() {
            None => return fail(rest, "unterminated string"),
            Some(b'"') => {
                rest = skip_ignored(rest.advance(1));
                return Ok((rest, Value::String(out)));
            }
            Some(b'\n') | Some(b'\r') => return fail(rest, "unescaped newline in string"),
            Some(b'\\') => {
                let escape = rest.advance(1);
                match escape.peek_byte() {
                    Some(b'"') => {
                        out.push('"');
                        rest = escape.advance(1);
                    }
                    Some(b'\\') => {
                        out.push('\\');
                        rest = escape.advance(1);
                    }
                    Some(b'/') => {
                        out.push('/');
                        rest = escape.advance(1);
                    }
                    Some(b'b') => {
                        out.push('\u{8}');
                        rest = escape.advance(1);
                    }
                    Some(b'f') => {
                        out.push('\u{c}');
                        rest = escape.advance(1);
                    }
                    Some(b'n') => {
                        out.push('\n');
                        rest = escape.advance(1);
                    }
                    Some(b'r') => {
                        out.push('\r');
                        rest = escape.advance(1);
                    }
                    Some(b't') => {
                        out.push('\t');
                        rest = escape.advance(1);
                    }
                    _ => return fail(rest, "invalid escape sequence"),
                }
            }
            Some(_) => {
                let ch = rest.remainder().chars().next().expect("non-empty remainder");
                out.push(ch);
                rest = rest.advance(ch.len_utf8());
            }
        }
    }
}

/// Parses a full `name` token and compares it whole, so that e.g. `trueType`
/// or `nullable` is never mistaken for the keyword `true`/`null` followed by
/// leftover input — it is an `Enum` name instead.
fn boolean(input: Input) -> PResult<Value> {
    let (rest, n) = name(input)?;
    match n.as_str() {
        "true" => Ok((rest, Value::Boolean(true))),
        "false" => Ok((rest, Value::Boolean(false))),
        _ => fail(input, "expected 'true' or 'false'"),
    }
}

fn null(input: Input) -> PResult<Value> {
    let (rest, n) = name(input)?;
    match n.as_str() {
        "null" => Ok((rest, Value::Null)),
        _ => fail(input, "expected 'null'"),
    }
}

fn enum_value(input: Input) -> PResult<Value> {
    let (rest, n) = name(input)?;
    match n.as_str() {
        "true" | "false" | "null" => fail(input, "reserved word is not a valid enum value"),
        _ => Ok((rest, Value::Enum(n))),
    }
}

fn list(input: Input) -> PResult<Value> {
    let (rest, ()) = token(input, "[")?;
    let (rest, items) = many(rest, value)?;
    let (rest, ()) = token(rest, "]")?;
    Ok((rest, Value::List(items)))
}

fn object(input: Input) -> PResult<Value> {
    let (rest, ()) = token(input, "{")?;
    let (rest, fields) = many(rest, object_field)?;
    let (rest, ()) = token(rest, "}")?;
    Ok((rest, Value::Object(fields)))
}

fn object_field(input: Input) -> PResult<(compact_str::CompactString, Value)> {
    let (rest, key) = name(input)?;
    let (rest, ()) = token(rest, ":")?;
    let (rest, val) = value(rest)?;
    Ok((rest, (key, val)))
}

/// Like [`token`], but does not skip trailing ignored tokens — used for the
/// opening quote of a string, whose contents are not subject to the normal
/// ignored-token rules.
fn token_no_skip<'s>(input: Input<'s>, literal: &str) -> PResult<'s, ()> {
    super::kernel::match_literal(input, literal)
}
