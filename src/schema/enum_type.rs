use std::sync::Arc;

use crate::ast::{Name, Value};

use super::meta::{EnumCaseMeta, EnumMeta};

/// Accumulates the cases of one enum type.
pub struct EnumTypeBuilder {
    name: Name,
    description: Option<String>,
    cases: Vec<EnumCaseMeta>,
}

impl EnumTypeBuilder {
    pub fn new(name: impl Into<Name>) -> Self {
        EnumTypeBuilder {
            name: name.into(),
            description: None,
            cases: Vec::new(),
        }
    }

    pub fn describe(mut self, text: impl Into<String>) -> Self {
        self.description = Some(text.into());
        self
    }

    /// Adds a declared case. Panics if this enum already has a case with
    /// this name.
    pub fn case(mut self, case: EnumCaseMeta) -> Self {
        assert!(
            !self.cases.iter().any(|c| c.name == case.name),
            "duplicate case '{}' on enum type '{}'",
            case.name,
            self.name
        );
        self.cases.push(case);
        self
    }

    /// Closes the builder by supplying an encoder from the host value
    /// domain `T` to one of the declared case names. Panics (at encode
    /// time, via [`EnumType::resolve`]) if the encoder returns a name that
    /// was never declared as a case.
    pub fn finalize<T>(
        self,
        encode: impl Fn(&T) -> Name + Send + Sync + 'static,
    ) -> EnumType<T> {
        let known: std::collections::HashSet<Name> =
            self.cases.iter().map(|c| c.name.clone()).collect();
        EnumType {
            meta: EnumMeta {
                name: self.name,
                description: self.description,
                cases: self.cases,
            },
            known_cases: known,
            encode: Arc::new(encode),
        }
    }
}

/// A finished enum type: its cases plus an encoder from a host value to a case name.
pub struct EnumType<T> {
    meta: EnumMeta,
    known_cases: std::collections::HashSet<Name>,
    encode: Arc<dyn Fn(&T) -> Name + Send + Sync>,
}

impl<T> EnumType<T> {
    pub fn meta(&self) -> &EnumMeta {
        &self.meta
    }

    /// Encodes a host value to its wire representation: a [`Value::Enum`]
    /// carrying the case name.
    pub fn resolve(&self, value: &T) -> Value {
        let case = (self.encode)(value);
        assert!(
            self.known_cases.contains(&case),
            "enum '{}' encoder produced undeclared case '{case}'",
            self.meta.name
        );
        Value::Enum(case)
    }
}
