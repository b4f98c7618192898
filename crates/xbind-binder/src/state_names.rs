//! Identifier and member lookup.

use crate::bound::BoundExpr;
use crate::context::OWNER_SLOT;
use crate::error::{BindError, Result};
use crate::state::Binder;
use crate::state_dispatch::GETTER_PREFIX;
use tracing::trace;
use xbind_common::diagnostic_codes;
use xbind_solver::MemberFilter;

impl Binder<'_> {
    /// Resolve a bare identifier.
    ///
    /// Precedence, first match wins:
    /// 1. typed entries of the identifier table, in declaration order;
    /// 2. instance, then static, members of the owner type;
    /// 3. namespace aliases of imports;
    /// 4. static members of imports without an alias, in import order.
    pub(crate) fn resolve_identifier(&self, name: &str) -> Result<BoundExpr> {
        let names = self.names();

        let declared = self
            .ctx
            .identifiers()
            .iter()
            .enumerate()
            .find_map(|(index, slot)| {
                slot.ty
                    .filter(|_| names.names_equal(&slot.name, name))
                    .map(|ty| (index, ty))
            });
        if let Some((index, ty)) = declared {
            let slot = self.ctx.visible_slot(index);
            trace!(identifier = name, index, slot, "identifier: declared slot");
            return Ok(BoundExpr::VariableAccess { ty, slot });
        }

        if let Some(owner) = self.ctx.owner() {
            let this = BoundExpr::VariableAccess {
                ty: owner,
                slot: OWNER_SLOT,
            };
            if let Some(member) = self
                .resolve_member(this, name)
                .or_else(|| self.resolve_member(BoundExpr::TypeAccess { ty: owner }, name))
            {
                trace!(identifier = name, owner = owner.0, "identifier: owner member");
                return Ok(member);
            }
        }

        let imports = self.ctx.imports();
        if let Some(import) = imports.iter().find(|import| {
            import
                .namespace
                .as_deref()
                .is_some_and(|alias| names.names_equal(alias, name))
        }) {
            trace!(identifier = name, ty = import.ty.0, "identifier: namespace alias");
            return Ok(BoundExpr::TypeAccess { ty: import.ty });
        }

        let imported = imports
            .iter()
            .filter(|import| import.namespace.is_none())
            .find_map(|import| self.resolve_member(BoundExpr::TypeAccess { ty: import.ty }, name));
        if let Some(member) = imported {
            trace!(identifier = name, "identifier: imported static member");
            return Ok(member);
        }

        Err(BindError::unresolved(diagnostic_codes::NAME_NOT_FOUND, &[name]))
    }

    /// Resolve `operand.member` as a property getter or a field.
    ///
    /// Static members are searched when `operand` is a type access, instance
    /// members otherwise. More than one matching getter is treated as no
    /// match so the caller's precedence chain keeps going.
    pub(crate) fn resolve_member(&self, operand: BoundExpr, member: &str) -> Option<BoundExpr> {
        let names = self.names();
        let ty = operand.ty();
        let filter = MemberFilter::public(operand.is_type_access());

        let mut getters = self
            .host
            .metadata
            .methods(ty, filter)
            .into_iter()
            .filter(|method| names.names_equal_prefixed(&method.name, GETTER_PREFIX, member));
        match (getters.next(), getters.next()) {
            (Some(getter), None) => {
                return Some(BoundExpr::MethodCall {
                    operand: Some(Box::new(operand)),
                    method: getter,
                    arguments: Vec::new(),
                });
            }
            (Some(_), Some(_)) => {
                trace!(member, ty = ty.0, "member: ambiguous getter");
                return None;
            }
            _ => {}
        }

        let field = self
            .host
            .metadata
            .fields(ty, filter)
            .into_iter()
            .find(|field| names.names_equal(&field.name, member))?;
        Some(BoundExpr::FieldAccess {
            operand: Box::new(operand),
            field,
        })
    }
}
