use crate::error::{BindError, Result};
use crate::state::Binder;
use tracing::trace;
use xbind_common::diagnostic_codes;
use xbind_common::limits::MAX_ARRAY_RANK;
use xbind_solver::TypeId;

impl Binder<'_> {
    /// Resolve a cast target.
    ///
    /// Keywords are looked up under the active case rule; qualified host
    /// names are matched exactly. `array_rank` 0 is the scalar type.
    pub(crate) fn resolve_type_name(&self, name: &str, array_rank: u32) -> Result<TypeId> {
        let catalog = self.host.catalog;
        let element = catalog
            .lookup_builtin(&self.names().normalize(name))
            .or_else(|| catalog.lookup_by_qualified_name(name))
            .ok_or_else(|| BindError::unknown_type(diagnostic_codes::UNKNOWN_TYPE, &[name]))?;

        if array_rank == 0 {
            return Ok(element);
        }
        if array_rank > MAX_ARRAY_RANK {
            return Err(BindError::unknown_type(
                diagnostic_codes::ARRAY_RANK_TOO_LARGE,
                &[
                    &array_rank.to_string(),
                    name,
                    &MAX_ARRAY_RANK.to_string(),
                ],
            ));
        }
        let ty = self.host.types.array(element, array_rank);
        trace!(type_name = name, array_rank, ty = ty.0, "resolved array type");
        Ok(ty)
    }
}
