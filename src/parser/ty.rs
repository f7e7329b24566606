use crate::ast::{InnerType, TypeRef};

use super::kernel::{maybe, token, Input, PResult};
use super::name::name;

/// Parses a type reference: an inner type (`Name` or `[Type]`) followed by
/// an optional trailing `!`.
pub fn type_ref(input: Input) -> PResult<TypeRef> {
    let (rest, inner) = inner_type(input)?;
    let (rest, bang) = maybe(rest, |i| token(i, "!"))?;
    Ok((
        rest,
        if bang.is_some() {
            TypeRef::NonNull(inner)
        } else {
            TypeRef::Nullable(inner)
        },
    ))
}

fn inner_type(input: Input) -> PResult<InnerType> {
    if input.peek_byte() == Some(b'[') {
        let (rest, ()) = token(input, "[")?;
        let (rest, elem) = type_ref(rest)?;
        let (rest, ()) = token(rest, "]")?;
        Ok((rest, InnerType::List(Box::new(elem))))
    } else {
        let (rest, n) = name(input)?;
        Ok((rest, InnerType::Named(n)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_named_nullable() {
        let (_, t) = type_ref(Input::new("String")).unwrap();
        assert_eq!(t, TypeRef::named("String"));
    }

    #[test]
    fn parses_non_null_named() {
        let (_, t) = type_ref(Input::new("ID!")).unwrap();
        assert_eq!(t, TypeRef::NonNull(InnerType::Named("ID".into())));
    }

    #[test]
    fn parses_non_null_list_of_non_null() {
        let (_, t) = type_ref(Input::new("[User!]!")).unwrap();
        assert_eq!(
            t,
            TypeRef::NonNull(InnerType::List(Box::new(TypeRef::NonNull(
                InnerType::Named("User".into())
            ))))
        );
    }
}
