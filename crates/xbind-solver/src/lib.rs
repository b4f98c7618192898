//! Type layer of the xbind binder.
//!
//! This crate owns everything the binder asks about types, independent of
//! the syntax tree walk:
//!
//! - **`TypeId` / `TypeInterner`**: interned handles for intrinsic, host and
//!   array types; `TypeId` comparison is type identity
//! - **`TypeCatalog`**: type-name lookup, implicit widening lists,
//!   numeric classification and convertibility
//! - **`TypeMetadataProvider`**: per-type method, field and default-member
//!   enumeration, implemented here by `HostTypeRegistry`
//! - **Expression operations**: operator typing and binary type unification
//! - **Overload selection**: the two-pass arity/exact/widening algorithm
//!
//! All collaborators are queried through shared references. A resolution
//! run only adds array types to the interner, which is idempotent, so one
//! environment can serve many threads.
mod catalog;
mod env;
pub mod expression_ops;
mod intern;
mod metadata;
pub mod overload;
mod registry;
pub mod types;

pub use catalog::{StandardCatalog, TypeCatalog};
pub use env::HostEnvironment;
pub use expression_ops::{
    BinaryOperator, UnaryOperator, binary_result_type, unary_result_type, unify_binary_types,
};
pub use intern::{TypeDatabase, TypeInterner};
pub use metadata::{MemberFilter, TypeMetadataProvider, VisibilityFilter};
pub use overload::{OverloadFailure, select_overload};
pub use registry::{HostTypeInfo, HostTypeRegistry};
pub use types::{
    FieldInfo, IntrinsicKind, MemberHandle, MethodSignature, ParamList, TypeData, TypeId,
    Visibility, literal_type,
};
