use derive_more::with_trait::{Display, Error};

use super::kernel::{Failure, Input};

/// The error returned by [`crate::parser::parse_document`].
#[derive(Debug, Display, Error, PartialEq, Eq)]
pub enum Error {
    #[display("Parse failure: {_0}")]
    ParsingFailure(#[error(not(source))] String),

    #[display("Incomplete parsing error: {_0}")]
    ParsingIncomplete(#[error(not(source))] String),
}

pub(crate) fn render_failure(source: &str, failure: Failure) -> Error {
    let pos = Input::at(source, failure.pos).source_position();
    Error::ParsingFailure(format!(
        "{} at {}:{}",
        failure.message, pos.line, pos.column
    ))
}

pub(crate) fn incomplete(remainder: &str) -> Error {
    Error::ParsingIncomplete(remainder.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_prefixes() {
        let f = Error::ParsingFailure("unexpected '}'".to_string());
        assert_eq!(f.to_string(), "Parse failure: unexpected '}'");

        let i = Error::ParsingIncomplete(" extra".to_string());
        assert_eq!(i.to_string(), "Incomplete parsing error:  extra");
    }
}
