//! Schema description primitives: object types with per-field resolvers,
//! enum types with a host-value encoder, and the scalar resolution contract.

mod enum_type;
mod meta;
mod object;
mod resolved_value;

pub use enum_type::{EnumType, EnumTypeBuilder};
pub use meta::{ArgMeta, EnumCaseMeta, EnumMeta, FieldMeta, ObjectMeta, ScalarMeta};
pub use object::{bind_arguments, ArgumentValues, ObjectType, ObjectTypeBuilder, Resolver};
pub use resolved_value::{FieldError, ResolvedObject, ResolvedValue, ScalarResolve};
