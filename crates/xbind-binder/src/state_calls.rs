//! Method resolution: member calls, free-function calls, indexer getters.

use crate::bound::BoundExpr;
use crate::context::OWNER_SLOT;
use crate::error::{BindError, Result};
use crate::state::Binder;
use smallvec::SmallVec;
use tracing::trace;
use xbind_common::diagnostic_codes;
use xbind_solver::{MemberFilter, MethodSignature, TypeId, select_overload};

type ArgTypes = SmallVec<[TypeId; 4]>;

impl Binder<'_> {
    /// Resolve `operand.name(arguments)`.
    ///
    /// Returns `Ok(None)` when the operand's type has no public method of that
    /// name with the operand's static/instance flavor. A name match whose
    /// overloads reject the arguments is an error.
    pub(crate) fn resolve_method(
        &self,
        operand: BoundExpr,
        name: &str,
        arguments: Vec<BoundExpr>,
    ) -> Result<Option<BoundExpr>> {
        let arg_types: ArgTypes = arguments.iter().map(BoundExpr::ty).collect();
        let Some(method) = self.find_method(&operand, name, &arg_types)? else {
            return Ok(None);
        };
        Ok(Some(BoundExpr::MethodCall {
            operand: Some(Box::new(operand)),
            method,
            arguments,
        }))
    }

    fn find_method(
        &self,
        operand: &BoundExpr,
        name: &str,
        arg_types: &[TypeId],
    ) -> Result<Option<MethodSignature>> {
        let names = self.names();
        let candidates: Vec<MethodSignature> = self
            .host
            .metadata
            .methods(operand.ty(), MemberFilter::public(operand.is_type_access()))
            .into_iter()
            .filter(|method| names.names_equal(&method.name, name))
            .collect();
        if candidates.is_empty() {
            return Ok(None);
        }

        match select_overload(self.host.catalog, &candidates, arg_types) {
            Ok(selected) => Ok(Some(selected.clone())),
            Err(failure) => {
                trace!(
                    method = name,
                    ?failure,
                    candidates = candidates.len(),
                    "overload selection failed"
                );
                Err(self.no_matching_overload(name, arg_types))
            }
        }
    }

    fn no_matching_overload(&self, name: &str, arg_types: &[TypeId]) -> BindError {
        let rendered = arg_types
            .iter()
            .map(|&ty| self.type_name(ty))
            .collect::<Vec<_>>()
            .join(", ");
        BindError::unresolved(diagnostic_codes::NO_MATCHING_OVERLOAD, &[name, &rendered])
    }

    /// Resolve a call whose target is a bare name.
    ///
    /// Search order, first success wins:
    /// 1. static methods of the owner type,
    /// 2. instance methods of the owner (implicit `this`),
    /// 3. static methods of each import, in import order.
    ///
    /// A stage with no method of that name hands over to the next one. A
    /// stage whose name matches but whose overloads reject the arguments
    /// ends the search with that failure.
    pub(crate) fn resolve_global_call(
        &self,
        name: &str,
        arguments: Vec<BoundExpr>,
    ) -> Result<BoundExpr> {
        let arg_types: ArgTypes = arguments.iter().map(BoundExpr::ty).collect();

        let owner_stages = self.ctx.owner().into_iter().flat_map(|owner| {
            [
                BoundExpr::TypeAccess { ty: owner },
                BoundExpr::VariableAccess {
                    ty: owner,
                    slot: OWNER_SLOT,
                },
            ]
        });
        let import_stages = self
            .ctx
            .imports()
            .iter()
            .map(|import| BoundExpr::TypeAccess { ty: import.ty });

        for operand in owner_stages.chain(import_stages) {
            if let Some(method) = self.find_method(&operand, name, &arg_types)? {
                trace!(
                    method = name,
                    stage = operand.kind_name(),
                    operand_ty = operand.ty().0,
                    "global call resolved"
                );
                return Ok(BoundExpr::MethodCall {
                    operand: Some(Box::new(operand)),
                    method,
                    arguments,
                });
            }
        }

        Err(BindError::unresolved(diagnostic_codes::NAME_NOT_FOUND, &[name]))
    }
}
