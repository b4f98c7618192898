use crate::catalog::StandardCatalog;
use crate::intern::TypeInterner;
use crate::registry::{HostTypeInfo, HostTypeRegistry};
use crate::types::TypeId;

/// Interner, standard catalog and host registry bundled together.
///
/// This is the usual way to stand up the collaborators the binder needs;
/// hosts with their own metadata source implement the traits directly.
#[derive(Default)]
pub struct HostEnvironment {
    interner: TypeInterner,
    catalog: StandardCatalog,
    registry: HostTypeRegistry,
}

impl HostEnvironment {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a host type and make it reachable by qualified name.
    pub fn register_type(&self, info: HostTypeInfo) -> TypeId {
        let name = info.qualified_name.clone();
        let ty = self.registry.register(&self.interner, info);
        self.catalog.register_qualified_name(name, ty);
        ty
    }

    pub const fn interner(&self) -> &TypeInterner {
        &self.interner
    }

    pub const fn catalog(&self) -> &StandardCatalog {
        &self.catalog
    }

    pub const fn registry(&self) -> &HostTypeRegistry {
        &self.registry
    }
}
