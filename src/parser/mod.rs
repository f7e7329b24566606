//! The lexerless GraphQL executable-document parser.

mod directive;
mod document;
mod error;
mod kernel;
mod name;
mod selection;
mod ty;
mod value;
mod variable;

pub use error::Error;
pub use kernel::{Input, SourcePosition};

use crate::ast::Document;

/// Parses a complete GraphQL executable document.
///
/// Returns [`Error::ParsingFailure`] if the grammar rejects the input, or
/// [`Error::ParsingIncomplete`] if a well-formed prefix parsed but trailing
/// bytes remained.
pub fn parse_document(source: &str) -> Result<Document, Error> {
    let input = kernel::skip_ignored(Input::new(source));
    match document::document(input) {
        Ok((rest, doc)) => {
            if rest.is_empty() {
                Ok(doc)
            } else {
                Err(error::incomplete(rest.remainder()))
            }
        }
        Err(failure) => Err(error::render_failure(source, failure)),
    }
}
