//! A small, lexerless parser-combinator kernel.
//!
//! Grammar rules are ordinary (mutually) recursive Rust functions of shape
//! `fn(Input<'s>) -> PResult<'s, T>`. There is no separate tokenization pass:
//! every rule operates directly on the byte-indexed [`Input`]. Alternation
//! via [`one_of`] backtracks only when an alternative fails having consumed
//! no input; a failure that occurred after consuming some input is treated
//! as a hard parse error and propagated without trying further alternatives.
//! This gives predictable, non-backtracking LL(1)-style semantics, with
//! [`maybe`] providing explicit lookahead where needed.

/// A cursor into a source document. Cheap to copy; carries only a byte offset.
#[derive(Debug, Clone, Copy)]
pub struct Input<'s> {
    source: &'s str,
    pos: usize,
}

impl<'s> Input<'s> {
    pub fn new(source: &'s str) -> Self {
        Input { source, pos: 0 }
    }

    pub(crate) fn at(source: &'s str, pos: usize) -> Self {
        Input { source, pos }
    }

    pub fn is_empty(&self) -> bool {
        self.pos >= self.source.len()
    }

    pub fn pos(&self) -> usize {
        self.pos
    }

    pub fn remainder(&self) -> &'s str {
        &self.source[self.pos..]
    }

    pub(crate) fn peek_byte(&self) -> Option<u8> {
        self.source.as_bytes().get(self.pos).copied()
    }

    pub(crate) fn advance(&self, n: usize) -> Input<'s> {
        Input {
            source: self.source,
            pos: self.pos + n,
        }
    }

    /// Line and column (both 1-based) of the current position, computed by
    /// scanning the consumed prefix. Used only to render diagnostics.
    pub fn source_position(&self) -> SourcePosition {
        let consumed = &self.source[..self.pos.min(self.source.len())];
        let line = consumed.bytes().filter(|&b| b == b'\n').count() + 1;
        let column = match consumed.rfind('\n') {
            Some(idx) => consumed[idx + 1..].chars().count() + 1,
            None => consumed.chars().count() + 1,
        };
        SourcePosition { line, column }
    }
}

/// A 1-based line/column pair used only for diagnostic messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourcePosition {
    pub line: usize,
    pub column: usize,
}

/// A failed parse attempt: a message plus the byte offset it occurred at.
#[derive(Debug, Clone)]
pub struct Failure {
    pub message: String,
    pub pos: usize,
}

pub type PResult<'s, T> = Result<(Input<'s>, T), Failure>;

pub fn fail<'s, T>(input: Input<'s>, message: impl Into<String>) -> PResult<'s, T> {
    Err(Failure {
        message: message.into(),
        pos: input.pos(),
    })
}

/// Matches a single byte satisfying `pred`, consuming it.
pub fn match_byte_pred<'s>(
    input: Input<'s>,
    pred: impl Fn(u8) -> bool,
    expected: &str,
) -> PResult<'s, u8> {
    match input.peek_byte() {
        Some(b) if pred(b) => Ok((input.advance(1), b)),
        _ => fail(input, format!("expected {expected}")),
    }
}

/// Matches an exact literal string (ASCII only), consuming it on success.
pub fn match_literal<'s>(input: Input<'s>, literal: &str) -> PResult<'s, ()> {
    if input.remainder().starts_with(literal) {
        Ok((input.advance(literal.len()), ()))
    } else {
        fail(input, format!("expected '{literal}'"))
    }
}

/// Matches a punctuation literal and consumes any trailing ignored tokens.
/// Every grammar rule in this crate assumes its input has no leading ignored
/// tokens and leaves none behind on success; this is the primitive that
/// upholds that invariant for fixed punctuation (`{`, `(`, `:`, `$`, `!`, ...).
pub fn token<'s>(input: Input<'s>, literal: &str) -> PResult<'s, ()> {
    let (rest, ()) = match_literal(input, literal)?;
    Ok((skip_ignored(rest), ()))
}

/// Tries each alternative in order. An alternative that fails without
/// consuming input lets the next be tried; one that fails after consuming
/// input is a hard failure and is returned immediately.
pub fn one_of<'s, T>(input: Input<'s>, alts: &[fn(Input<'s>) -> PResult<'s, T>]) -> PResult<'s, T> {
    let mut last: Option<Failure> = None;
    for alt in alts {
        match alt(input) {
            Ok(ok) => return Ok(ok),
            Err(e) if e.pos == input.pos() => last = Some(e),
            Err(e) => return Err(e),
        }
    }
    Err(last.unwrap_or_else(|| Failure {
        message: "no alternative matched".to_string(),
        pos: input.pos(),
    }))
}

/// Runs `p`; converts a zero-consumption failure into `Ok(None)`. A
/// consuming failure still propagates as a hard error.
pub fn maybe<'s, T>(
    input: Input<'s>,
    p: impl Fn(Input<'s>) -> PResult<'s, T>,
) -> PResult<'s, Option<T>> {
    match p(input) {
        Ok((rest, v)) => Ok((rest, Some(v))),
        Err(e) if e.pos == input.pos() => Ok((input, None)),
        Err(e) => Err(e),
    }
}

/// Zero-or-more repetitions of `p`, stopping at the first zero-consumption failure.
pub fn many<'s, T>(
    mut input: Input<'s>,
    p: impl Fn(Input<'s>) -> PResult<'s, T>,
) -> PResult<'s, Vec<T>> {
    let mut out = Vec::new();
    loop {
        match p(input) {
            Ok((rest, v)) => {
                out.push(v);
                input = rest;
            }
            Err(e) if e.pos == input.pos() => return Ok((input, out)),
            Err(e) => return Err(e),
        }
    }
}

/// One-or-more repetitions of `p`.
pub fn many1<'s, T>(
    input: Input<'s>,
    p: impl Fn(Input<'s>) -> PResult<'s, T>,
) -> PResult<'s, Vec<T>> {
    let (rest, first) = p(input)?;
    let (rest, mut tail) = many(rest, p)?;
    tail.insert(0, first);
    Ok((rest, tail))
}

/// Zero-or-more occurrences of `p` separated by `sep`.
pub fn sep_by<'s, T, U>(
    input: Input<'s>,
    p: impl Fn(Input<'s>) -> PResult<'s, T>,
    sep: impl Fn(Input<'s>) -> PResult<'s, U>,
) -> PResult<'s, Vec<T>> {
    match sep_by1(input, &p, &sep) {
        Ok(ok) => Ok(ok),
        Err(e) if e.pos == input.pos() => Ok((input, Vec::new())),
        Err(e) => Err(e),
    }
}

/// One-or-more occurrences of `p` separated by `sep`.
pub fn sep_by1<'s, T, U>(
    input: Input<'s>,
    p: impl Fn(Input<'s>) -> PResult<'s, T>,
    sep: impl Fn(Input<'s>) -> PResult<'s, U>,
) -> PResult<'s, Vec<T>> {
    let (mut rest, first) = p(input)?;
    let mut out = vec![first];
    loop {
        match sep(rest) {
            Ok((after_sep, _)) => match p(after_sep) {
                Ok((after_item, item)) => {
                    out.push(item);
                    rest = after_item;
                }
                Err(e) if e.pos == after_sep.pos() => return Ok((rest, out)),
                Err(e) => return Err(e),
            },
            Err(e) if e.pos == rest.pos() => return Ok((rest, out)),
            Err(e) => return Err(e),
        }
    }
}

/// Transforms a successful result's value.
pub fn map<'s, T, U>(
    input: Input<'s>,
    p: impl Fn(Input<'s>) -> PResult<'s, T>,
    f: impl FnOnce(T) -> U,
) -> PResult<'s, U> {
    let (rest, v) = p(input)?;
    Ok((rest, f(v)))
}

/// Runs `p`, then lets `f` either accept the value or reject it as a
/// zero-consumption failure at `p`'s start (so alternation can still
/// backtrack past a semantically-rejected parse, e.g. a reserved name).
pub fn and_then<'s, T, U>(
    input: Input<'s>,
    p: impl Fn(Input<'s>) -> PResult<'s, T>,
    f: impl FnOnce(T) -> Result<U, String>,
) -> PResult<'s, U> {
    let (rest, v) = p(input)?;
    match f(v) {
        Ok(u) => Ok((rest, u)),
        Err(message) => fail(input, message),
    }
}

/// Identity wrapper that names the fact that `f` is meant to be referenced
/// recursively (e.g. placed into a [`one_of`] alternative list) without
/// eagerly evaluating anything at construction time. Plain Rust function
/// recursion already supports self-reference, so this exists purely so a
/// grammar rule's own definition can hand itself to a combinator taking a
/// function pointer.
pub fn recursive<'s, T>(f: fn(Input<'s>) -> PResult<'s, T>) -> fn(Input<'s>) -> PResult<'s, T> {
    f
}

/// Consumes whitespace, commas, `#` line comments, and (only at the very
/// start of input) a leading UTF-8 byte-order mark. Never fails.
pub fn skip_ignored(mut input: Input) -> Input {
    loop {
        match input.peek_byte() {
            Some(b' ' | b'\t' | b'\n' | b'\r' | b',') => input = input.advance(1),
            Some(b'#') => {
                while let Some(b) = input.peek_byte() {
                    if b == b'\n' {
                        break;
                    }
                    input = input.advance(1);
                }
            }
            _ => {
                if input.pos == 0 && input.remainder().starts_with('\u{feff}') {
                    input = input.advance('\u{feff}'.len_utf8());
                    continue;
                }
                break;
            }
        }
    }
    input
}

pub fn is_source_char(b: u8) -> bool {
    b == 0x09 || b == 0x0a || b == 0x0d || (0x20..=0x7e).contains(&b) || b >= 0x80
}

pub fn is_name_start(b: u8) -> bool {
    b == b'_' || b.is_ascii_alphabetic()
}

pub fn is_name_continue(b: u8) -> bool {
    b == b'_' || b.is_ascii_alphanumeric()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn digit(input: Input) -> PResult<u8> {
        match_byte_pred(input, |b| b.is_ascii_digit(), "digit")
    }

    fn letter(input: Input) -> PResult<u8> {
        match_byte_pred(input, |b| b.is_ascii_alphabetic(), "letter")
    }

    #[test]
    fn one_of_backtracks_on_zero_consumption() {
        let input = Input::new("a1");
        let (rest, b) = one_of(input, &[digit, letter]).unwrap();
        assert_eq!(b, b'a');
        assert_eq!(rest.pos(), 1);
    }

    #[test]
    fn many_collects_zero_or_more() {
        let input = Input::new("123abc");
        let (rest, ds) = many(input, digit).unwrap();
        assert_eq!(ds, vec![b'1', b'2', b'3']);
        assert_eq!(rest.remainder(), "abc");
    }

    #[test]
    fn many1_requires_at_least_one() {
        let input = Input::new("abc");
        assert!(many1(input, digit).is_err());
    }

    #[test]
    fn sep_by1_parses_separated_list() {
        fn comma(input: Input) -> PResult<()> {
            match_literal(input, ",")
        }
        let input = Input::new("1,2,3");
        let (rest, ds) = sep_by1(input, digit, comma).unwrap();
        assert_eq!(ds, vec![b'1', b'2', b'3']);
        assert!(rest.is_empty());
    }

    #[test]
    fn source_position_tracks_line_and_column() {
        let input = Input::new("abc\ndef");
        let pos = input.advance(5).source_position();
        assert_eq!(pos, SourcePosition { line: 2, column: 2 });
    }
}
