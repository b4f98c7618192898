//! Binder state and the public entry point.

use crate::bound::BoundExpr;
use crate::context::ResolutionContext;
use crate::error::Result;
use tracing::debug;
use xbind_common::CaseSensitivity;
use xbind_solver::{HostEnvironment, TypeCatalog, TypeDatabase, TypeId, TypeMetadataProvider};
use xbind_syntax::SyntaxNode;

/// The three host collaborators the binder queries.
#[derive(Clone, Copy)]
pub struct HostTypes<'a> {
    pub types: &'a dyn TypeDatabase,
    pub catalog: &'a dyn TypeCatalog,
    pub metadata: &'a dyn TypeMetadataProvider,
}

impl<'a> From<&'a HostEnvironment> for HostTypes<'a> {
    fn from(env: &'a HostEnvironment) -> Self {
        Self {
            types: env.interner(),
            catalog: env.catalog(),
            metadata: env.registry(),
        }
    }
}

/// One resolution run.
///
/// Holds only shared references. The context is never mutated and the only
/// write to the host collaborators is interning array types, so a `Binder`
/// can be rebuilt freely per expression and many can run side by side.
pub struct Binder<'a> {
    pub(crate) host: HostTypes<'a>,
    pub(crate) ctx: &'a ResolutionContext,
}

impl<'a> Binder<'a> {
    pub fn new(host: impl Into<HostTypes<'a>>, ctx: &'a ResolutionContext) -> Self {
        Self {
            host: host.into(),
            ctx,
        }
    }

    /// Bind `root` and everything below it.
    ///
    /// Either the whole tree binds or the first failure is returned; partial
    /// trees are never produced.
    pub fn resolve(&self, root: &SyntaxNode) -> Result<BoundExpr> {
        self.bind(root).inspect_err(|err| {
            debug!(code = err.code(), error = %err, "resolution failed");
        })
    }

    #[inline]
    pub(crate) const fn names(&self) -> CaseSensitivity {
        self.ctx.case_sensitivity()
    }

    pub(crate) fn type_name(&self, ty: TypeId) -> String {
        self.host.types.type_name(ty)
    }
}

/// Resolve an untyped expression tree against `host` in scope `ctx`.
#[tracing::instrument(level = "debug", skip_all, fields(root = root.kind_name()))]
pub fn resolve<'a>(
    root: &SyntaxNode,
    host: impl Into<HostTypes<'a>>,
    ctx: &'a ResolutionContext,
) -> Result<BoundExpr> {
    Binder::new(host, ctx).resolve(root)
}
