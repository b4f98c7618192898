//! Overload selection.
//!
//! Picks one signature out of a same-named candidate set:
//!
//! 1. Keep candidates whose parameter count equals the argument count.
//! 2. A single survivor wins outright; arity alone decides, argument types
//!    are not checked.
//! 3. Exact pass: the first candidate with *some* parameter position whose
//!    type equals the argument type at that position.
//! 4. Widening pass: the first candidate where *every* parameter is
//!    assignable from its argument or appears in the argument's widening
//!    list.
//!
//! The exact pass is a per-position existence check, not full signature
//! equality. It is kept as-is because callers observe which overload wins.

use crate::catalog::TypeCatalog;
use crate::types::{MethodSignature, TypeId};
use smallvec::SmallVec;
use tracing::trace;

/// Why no overload was selected.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OverloadFailure {
    /// No candidate takes this many arguments.
    ArityMismatch,
    /// Candidates with the right arity exist but none accepts the arguments.
    NoApplicableCandidate,
}

pub fn select_overload<'c>(
    catalog: &dyn TypeCatalog,
    candidates: &'c [MethodSignature],
    argument_types: &[TypeId],
) -> Result<&'c MethodSignature, OverloadFailure> {
    let by_arity: SmallVec<[&MethodSignature; 4]> = candidates
        .iter()
        .filter(|candidate| candidate.arity() == argument_types.len())
        .collect();

    match by_arity.as_slice() {
        [] => {
            trace!(
                candidates = candidates.len(),
                arity = argument_types.len(),
                "select_overload: no candidate with matching arity"
            );
            Err(OverloadFailure::ArityMismatch)
        }
        [only] => Ok(*only),
        many => {
            if let Some(exact) = many
                .iter()
                .find(|candidate| has_exact_position(candidate, argument_types))
            {
                trace!(method = %exact.name, "select_overload: exact pass");
                return Ok(*exact);
            }
            let widened = many
                .iter()
                .find(|candidate| accepts_with_widening(catalog, candidate, argument_types))
                .copied();
            trace!(
                method = ?widened.map(|m| m.name.as_str()),
                "select_overload: widening pass"
            );
            widened.ok_or(OverloadFailure::NoApplicableCandidate)
        }
    }
}

fn has_exact_position(candidate: &MethodSignature, argument_types: &[TypeId]) -> bool {
    candidate
        .parameters
        .iter()
        .zip(argument_types)
        .any(|(parameter, argument)| parameter == argument)
}

fn accepts_with_widening(
    catalog: &dyn TypeCatalog,
    candidate: &MethodSignature,
    argument_types: &[TypeId],
) -> bool {
    candidate
        .parameters
        .iter()
        .zip(argument_types)
        .all(|(&parameter, &argument)| {
            catalog.is_assignable(argument, parameter)
                || catalog
                    .implicit_conversion_candidates(argument)
                    .contains(&parameter)
        })
}

#[cfg(test)]
#[path = "../tests/overload_tests.rs"]
mod tests;
