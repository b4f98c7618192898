//! Host type registry.
//!
//! In-memory `TypeMetadataProvider` for hosts that describe their types up
//! front (embedders, tests, the CLI). Registration is thread-safe; lookups
//! clone member lists out of the map so no guard outlives a call.

use crate::intern::TypeDatabase;
use crate::metadata::{MemberFilter, TypeMetadataProvider};
use crate::types::{FieldInfo, MemberHandle, MethodSignature, TypeId};
use dashmap::DashMap;
use rustc_hash::FxBuildHasher;
use std::sync::atomic::{AtomicU32, Ordering};
use tracing::trace;

/// Description of one host type.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HostTypeInfo {
    pub qualified_name: String,
    pub methods: Vec<MethodSignature>,
    pub fields: Vec<FieldInfo>,
    /// Default-member annotations; indexing `x[..]` calls `get_<name>`.
    pub default_members: Vec<String>,
}

impl HostTypeInfo {
    pub fn new(qualified_name: impl Into<String>) -> Self {
        Self {
            qualified_name: qualified_name.into(),
            methods: Vec::new(),
            fields: Vec::new(),
            default_members: Vec::new(),
        }
    }

    /// Name after the last `.` of the qualified name.
    pub fn simple_name(&self) -> &str {
        self.qualified_name
            .rsplit_once('.')
            .map_or(self.qualified_name.as_str(), |(_, name)| name)
    }

    #[must_use]
    pub fn with_method(mut self, method: MethodSignature) -> Self {
        self.methods.push(method);
        self
    }

    #[must_use]
    pub fn with_field(mut self, field: FieldInfo) -> Self {
        self.fields.push(field);
        self
    }

    #[must_use]
    pub fn with_default_member(mut self, name: impl Into<String>) -> Self {
        self.default_members.push(name.into());
        self
    }
}

/// Thread-safe storage for host type descriptions, keyed by `TypeId`.
pub struct HostTypeRegistry {
    types: DashMap<TypeId, HostTypeInfo, FxBuildHasher>,
    next_handle: AtomicU32,
}

impl Default for HostTypeRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl HostTypeRegistry {
    pub fn new() -> Self {
        Self {
            types: DashMap::with_hasher(FxBuildHasher),
            next_handle: AtomicU32::new(1),
        }
    }

    fn allocate_handle(&self) -> MemberHandle {
        MemberHandle(self.next_handle.fetch_add(1, Ordering::SeqCst))
    }

    /// Intern the type, assign member handles and store the description.
    ///
    /// Registering the same qualified name again replaces the earlier
    /// description but keeps the `TypeId`.
    pub fn register(&self, db: &dyn TypeDatabase, mut info: HostTypeInfo) -> TypeId {
        let ty = db.host(&info.qualified_name);
        for method in &mut info.methods {
            method.handle = self.allocate_handle();
        }
        for field in &mut info.fields {
            field.handle = self.allocate_handle();
        }
        trace!(
            type_id = ty.0,
            name = %info.qualified_name,
            methods = info.methods.len(),
            fields = info.fields.len(),
            "HostTypeRegistry::register"
        );
        self.types.insert(ty, info);
        ty
    }

    pub fn get(&self, ty: TypeId) -> Option<HostTypeInfo> {
        self.types.get(&ty).map(|entry| entry.clone())
    }

    pub fn contains(&self, ty: TypeId) -> bool {
        self.types.contains_key(&ty)
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

impl TypeMetadataProvider for HostTypeRegistry {
    fn methods(&self, ty: TypeId, filter: MemberFilter) -> Vec<MethodSignature> {
        self.types
            .get(&ty)
            .map(|entry| {
                entry
                    .methods
                    .iter()
                    .filter(|m| filter.admits(m.is_static, m.visibility))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default()
    }

    fn fields(&self, ty: TypeId, filter: MemberFilter) -> Vec<FieldInfo> {
        self.types
            .get(&ty)
            .map(|entry| {
                entry
                    .fields
                    .iter()
                    .filter(|f| filter.admits(f.is_static, f.visibility))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default()
    }

    fn default_member_names(&self, ty: TypeId) -> Vec<String> {
        self.types
            .get(&ty)
            .map(|entry| entry.default_members.clone())
            .unwrap_or_default()
    }
}

#[cfg(test)]
#[path = "../tests/registry_tests.rs"]
mod tests;
