//! A GraphQL executable-document parser and schema description toolkit.
//!
//! [`parser::parse_document`] turns GraphQL query/mutation/subscription
//! source text into the [`ast::Document`] tree. The [`schema`] module
//! describes server-side object and enum types — field metadata paired
//! with resolvers, and enum cases paired with a host-value encoder — that
//! a validator and executor (not provided here) drive against that tree.

pub mod ast;
pub mod parser;
pub mod schema;

pub use ast::{Document, Value};
pub use parser::{parse_document, Error};
