use compact_str::CompactString;

use super::kernel::{fail, is_name_continue, is_name_start, skip_ignored, Input, PResult};

/// Parses a GraphQL name: `[_A-Za-z][_A-Za-z0-9]*`.
pub fn name(input: Input) -> PResult<CompactString> {
    match input.peek_byte() {
        Some(b) if is_name_start(b) => {}
        _ => return fail(input, "expected a name"),
    }
    let mut len = 1;
    while input.advance(len).peek_byte().is_some_and(is_name_continue) {
        len += 1;
    }
    let text = &input.remainder()[..len];
    Ok((skip_ignored(input.advance(len)), CompactString::new(text)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_simple_name() {
        let (rest, n) = name(Input::new("user_name rest")).unwrap();
        assert_eq!(n, "user_name");
        assert_eq!(rest.remainder(), "rest");
    }

    #[test]
    fn rejects_leading_digit() {
        assert!(name(Input::new("1abc")).is_err());
    }
}
