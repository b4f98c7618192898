//! Type interning.
//!
//! Every type the binder touches is a `TypeId` into a `TypeInterner`.
//! Interning the same `TypeData` twice yields the same id, so type identity
//! is a plain integer comparison.

use crate::types::{IntrinsicKind, TypeData, TypeId};
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use rustc_hash::FxBuildHasher;
use std::sync::{Arc, PoisonError, RwLock};
use tracing::trace;
use xbind_common::array_rank_suffix;

/// Read/intern access to types.
///
/// Shared by reference between the catalog, the metadata provider and the
/// binder; implementations must tolerate concurrent readers.
pub trait TypeDatabase: Send + Sync {
    fn lookup(&self, id: TypeId) -> Option<TypeData>;

    fn intern(&self, data: TypeData) -> TypeId;

    fn array(&self, element: TypeId, rank: u32) -> TypeId {
        self.intern(TypeData::Array { element, rank })
    }

    fn host(&self, qualified_name: &str) -> TypeId {
        self.intern(TypeData::Host {
            qualified_name: Arc::from(qualified_name),
        })
    }

    /// Element type and rank when `id` is an array type.
    fn array_info(&self, id: TypeId) -> Option<(TypeId, u32)> {
        match self.lookup(id) {
            Some(TypeData::Array { element, rank }) => Some((element, rank)),
            _ => None,
        }
    }

    /// Display name: keywords for intrinsics, qualified names for host
    /// types, bracket suffixes for arrays.
    fn type_name(&self, id: TypeId) -> String {
        match self.lookup(id) {
            Some(TypeData::Intrinsic(kind)) => kind.keyword().to_string(),
            Some(TypeData::Host { qualified_name }) => qualified_name.to_string(),
            Some(TypeData::Array { element, rank }) => {
                format!("{}{}", self.type_name(element), array_rank_suffix(rank))
            }
            None => format!("<unknown type {}>", id.0),
        }
    }
}

/// Thread-safe type interner.
pub struct TypeInterner {
    types: RwLock<Vec<TypeData>>,
    ids: DashMap<TypeData, TypeId, FxBuildHasher>,
}

impl Default for TypeInterner {
    fn default() -> Self {
        Self::new()
    }
}

impl TypeInterner {
    /// Create an interner with the intrinsic types pre-registered at their
    /// reserved ids.
    pub fn new() -> Self {
        let ids = DashMap::with_hasher(FxBuildHasher);
        let mut types = Vec::with_capacity(IntrinsicKind::ALL.len() * 2);
        for kind in IntrinsicKind::ALL {
            let data = TypeData::Intrinsic(kind);
            ids.insert(data.clone(), kind.type_id());
            types.push(data);
        }
        Self {
            types: RwLock::new(types),
            ids,
        }
    }

    /// Number of interned types, intrinsics included.
    pub fn len(&self) -> usize {
        self.types
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl TypeDatabase for TypeInterner {
    fn lookup(&self, id: TypeId) -> Option<TypeData> {
        self.types
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(id.0 as usize)
            .cloned()
    }

    fn intern(&self, data: TypeData) -> TypeId {
        if let Some(existing) = self.ids.get(&data) {
            return *existing;
        }
        // The entry guard serializes racing interns of the same data; the
        // write lock only covers the push.
        match self.ids.entry(data) {
            Entry::Occupied(entry) => *entry.get(),
            Entry::Vacant(entry) => {
                let mut types = self.types.write().unwrap_or_else(PoisonError::into_inner);
                let id = TypeId(types.len() as u32);
                types.push(entry.key().clone());
                trace!(type_id = id.0, data = ?entry.key(), "TypeInterner::intern");
                entry.insert(id);
                id
            }
        }
    }
}

#[cfg(test)]
#[path = "../tests/intern_tests.rs"]
mod tests;
