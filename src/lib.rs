//! xbind: semantic resolution of embedded expressions against a host type
//! system.
//!
//! This facade re-exports the workspace crates:
//!
//! - [`common`]: name comparison rules, diagnostic messages, limits
//! - [`syntax`]: the untyped expression tree the binder consumes
//! - [`solver`]: type handles, the type catalog, host metadata and overload
//!   selection
//! - [`binder`]: the bound tree, resolution context and [`resolve`]
//!
//! plus [`tracing_config`] for subscriber setup in binaries.

pub use xbind_binder as binder;
pub use xbind_common as common;
pub use xbind_solver as solver;
pub use xbind_syntax as syntax;

pub use xbind_binder::{
    BindError, BindErrorKind, BoundExpr, ResolutionContext, ResolutionContextBuilder, resolve,
};
pub use xbind_solver::{HostEnvironment, HostTypeInfo, TypeId};
pub use xbind_syntax::SyntaxNode;

pub mod tracing_config;
