//! Semantic resolution for embedded expressions.
//!
//! The binder walks an untyped [`SyntaxNode`] tree once, post-order, and
//! builds a [`BoundExpr`] tree in which every node carries its resolved
//! type. Names, members, method calls, indexers and casts are resolved
//! against the host's type catalog and metadata provider. The input tree is
//! never mutated; array types named by casts are interned on demand, which is
//! idempotent and safe across threads.
//!
//! ```ignore
//! let env = HostEnvironment::new();
//! let ctx = ResolutionContext::builder().declare("x", TypeId::INT32).build();
//! let bound = resolve(&ast, &env, &ctx)?;
//! ```

mod bound;
mod context;
mod error;
pub mod format;
mod state;
mod state_calls;
mod state_dispatch;
mod state_names;
mod state_type_names;

pub use bound::BoundExpr;
pub use context::{IdentifierSlot, Import, OWNER_SLOT, ResolutionContext, ResolutionContextBuilder};
pub use error::{BindDiagnostic, BindError, BindErrorKind, Result};
pub use state::{Binder, HostTypes, resolve};
pub use xbind_syntax::SyntaxNode;
