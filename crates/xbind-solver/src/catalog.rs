//! Type catalog: name lookup and the implicit-conversion table.

use crate::types::{IntrinsicKind, TypeId};
use dashmap::DashMap;
use rustc_hash::{FxBuildHasher, FxHashMap};

/// Type-name lookup and conversion rules consulted by the binder.
pub trait TypeCatalog: Send + Sync {
    /// Built-in type for an expression-language keyword (`int`, `string`, ...).
    fn lookup_builtin(&self, name: &str) -> Option<TypeId>;

    /// Type registered under a host-qualified name (`System.Int32`,
    /// `Acme.Order`, ...).
    fn lookup_by_qualified_name(&self, name: &str) -> Option<TypeId>;

    /// Ordered list of types `ty` may be silently widened to.
    fn implicit_conversion_candidates(&self, ty: TypeId) -> &[TypeId];

    fn is_numeric(&self, ty: TypeId) -> bool;

    /// Whether a value of `from` converts to `to` without an explicit cast.
    fn is_convertible(&self, from: TypeId, to: TypeId) -> bool {
        self.is_assignable(from, to) || self.implicit_conversion_candidates(from).contains(&to)
    }

    /// Whether a value of `from` can be stored in `to` as-is.
    fn is_assignable(&self, from: TypeId, to: TypeId) -> bool {
        from == to || to == TypeId::OBJECT
    }
}

// =============================================================================
// Widening table
// =============================================================================

const SBYTE_WIDENINGS: &[TypeId] = &[
    TypeId::INT16,
    TypeId::INT32,
    TypeId::INT64,
    TypeId::SINGLE,
    TypeId::DOUBLE,
    TypeId::DECIMAL,
];
const BYTE_WIDENINGS: &[TypeId] = &[
    TypeId::INT16,
    TypeId::UINT16,
    TypeId::INT32,
    TypeId::UINT32,
    TypeId::INT64,
    TypeId::UINT64,
    TypeId::SINGLE,
    TypeId::DOUBLE,
    TypeId::DECIMAL,
];
const INT16_WIDENINGS: &[TypeId] = &[
    TypeId::INT32,
    TypeId::INT64,
    TypeId::SINGLE,
    TypeId::DOUBLE,
    TypeId::DECIMAL,
];
const UINT16_WIDENINGS: &[TypeId] = &[
    TypeId::INT32,
    TypeId::UINT32,
    TypeId::INT64,
    TypeId::UINT64,
    TypeId::SINGLE,
    TypeId::DOUBLE,
    TypeId::DECIMAL,
];
const INT32_WIDENINGS: &[TypeId] = &[
    TypeId::INT64,
    TypeId::SINGLE,
    TypeId::DOUBLE,
    TypeId::DECIMAL,
];
const UINT32_WIDENINGS: &[TypeId] = &[
    TypeId::INT64,
    TypeId::UINT64,
    TypeId::SINGLE,
    TypeId::DOUBLE,
    TypeId::DECIMAL,
];
const INT64_WIDENINGS: &[TypeId] = &[TypeId::SINGLE, TypeId::DOUBLE, TypeId::DECIMAL];
const CHAR_WIDENINGS: &[TypeId] = &[
    TypeId::UINT16,
    TypeId::INT32,
    TypeId::UINT32,
    TypeId::INT64,
    TypeId::UINT64,
    TypeId::SINGLE,
    TypeId::DOUBLE,
    TypeId::DECIMAL,
];
const SINGLE_WIDENINGS: &[TypeId] = &[TypeId::DOUBLE];

const fn widenings(kind: IntrinsicKind) -> &'static [TypeId] {
    match kind {
        IntrinsicKind::SByte => SBYTE_WIDENINGS,
        IntrinsicKind::Byte => BYTE_WIDENINGS,
        IntrinsicKind::Int16 => INT16_WIDENINGS,
        IntrinsicKind::UInt16 => UINT16_WIDENINGS,
        IntrinsicKind::Int32 => INT32_WIDENINGS,
        IntrinsicKind::UInt32 => UINT32_WIDENINGS,
        IntrinsicKind::Int64 | IntrinsicKind::UInt64 => INT64_WIDENINGS,
        IntrinsicKind::Char => CHAR_WIDENINGS,
        IntrinsicKind::Single => SINGLE_WIDENINGS,
        IntrinsicKind::Void
        | IntrinsicKind::Object
        | IntrinsicKind::Boolean
        | IntrinsicKind::Double
        | IntrinsicKind::Decimal
        | IntrinsicKind::String => &[],
    }
}

// =============================================================================
// StandardCatalog
// =============================================================================

/// Catalog of the intrinsic types plus any host types registered by
/// qualified name.
///
/// Keyword lookups expect the caller to have normalized case already;
/// qualified names are matched exactly.
pub struct StandardCatalog {
    keywords: FxHashMap<&'static str, TypeId>,
    qualified: DashMap<String, TypeId, FxBuildHasher>,
}

impl Default for StandardCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl StandardCatalog {
    pub fn new() -> Self {
        let mut keywords = FxHashMap::default();
        let qualified = DashMap::with_hasher(FxBuildHasher);
        for kind in IntrinsicKind::ALL {
            keywords.insert(kind.keyword(), kind.type_id());
            qualified.insert(kind.qualified_name().to_string(), kind.type_id());
        }
        Self {
            keywords,
            qualified,
        }
    }

    /// Make `ty` reachable through `lookup_by_qualified_name`.
    pub fn register_qualified_name(&self, name: impl Into<String>, ty: TypeId) {
        self.qualified.insert(name.into(), ty);
    }
}

impl TypeCatalog for StandardCatalog {
    fn lookup_builtin(&self, name: &str) -> Option<TypeId> {
        self.keywords.get(name).copied()
    }

    fn lookup_by_qualified_name(&self, name: &str) -> Option<TypeId> {
        self.qualified.get(name).map(|entry| *entry)
    }

    fn implicit_conversion_candidates(&self, ty: TypeId) -> &[TypeId] {
        match IntrinsicKind::from_type_id(ty) {
            Some(kind) => widenings(kind),
            None => &[],
        }
    }

    fn is_numeric(&self, ty: TypeId) -> bool {
        IntrinsicKind::from_type_id(ty).is_some_and(IntrinsicKind::is_numeric)
    }
}
