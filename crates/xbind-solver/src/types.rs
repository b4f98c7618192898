//! Type and member representation.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::sync::Arc;
use xbind_syntax::Literal;

// =============================================================================
// TypeId
// =============================================================================

/// Interned type handle.
///
/// Ids below [`TypeId::FIRST_INTERNED`] are the intrinsic types and are the
/// same in every interner; everything else is allocated on first use.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct TypeId(pub u32);

impl TypeId {
    pub const VOID: Self = Self(0);
    pub const OBJECT: Self = Self(1);
    pub const BOOLEAN: Self = Self(2);
    pub const CHAR: Self = Self(3);
    pub const SBYTE: Self = Self(4);
    pub const BYTE: Self = Self(5);
    pub const INT16: Self = Self(6);
    pub const UINT16: Self = Self(7);
    pub const INT32: Self = Self(8);
    pub const UINT32: Self = Self(9);
    pub const INT64: Self = Self(10);
    pub const UINT64: Self = Self(11);
    pub const SINGLE: Self = Self(12);
    pub const DOUBLE: Self = Self(13);
    pub const DECIMAL: Self = Self(14);
    pub const STRING: Self = Self(15);

    /// First id handed out for host and array types.
    pub const FIRST_INTERNED: u32 = 16;

    pub const fn is_intrinsic(self) -> bool {
        self.0 < Self::FIRST_INTERNED
    }
}

// =============================================================================
// IntrinsicKind
// =============================================================================

/// The primitive types every host shares.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum IntrinsicKind {
    Void,
    Object,
    Boolean,
    Char,
    SByte,
    Byte,
    Int16,
    UInt16,
    Int32,
    UInt32,
    Int64,
    UInt64,
    Single,
    Double,
    Decimal,
    String,
}

impl IntrinsicKind {
    /// All kinds in `TypeId` order.
    pub const ALL: [Self; 16] = [
        Self::Void,
        Self::Object,
        Self::Boolean,
        Self::Char,
        Self::SByte,
        Self::Byte,
        Self::Int16,
        Self::UInt16,
        Self::Int32,
        Self::UInt32,
        Self::Int64,
        Self::UInt64,
        Self::Single,
        Self::Double,
        Self::Decimal,
        Self::String,
    ];

    pub const fn type_id(self) -> TypeId {
        TypeId(self as u32)
    }

    pub const fn from_type_id(id: TypeId) -> Option<Self> {
        if id.is_intrinsic() {
            Some(Self::ALL[id.0 as usize])
        } else {
            None
        }
    }

    /// Expression-language keyword for the type.
    pub const fn keyword(self) -> &'static str {
        match self {
            Self::Void => "void",
            Self::Object => "object",
            Self::Boolean => "bool",
            Self::Char => "char",
            Self::SByte => "sbyte",
            Self::Byte => "byte",
            Self::Int16 => "short",
            Self::UInt16 => "ushort",
            Self::Int32 => "int",
            Self::UInt32 => "uint",
            Self::Int64 => "long",
            Self::UInt64 => "ulong",
            Self::Single => "float",
            Self::Double => "double",
            Self::Decimal => "decimal",
            Self::String => "string",
        }
    }

    /// Host-qualified name of the type.
    pub const fn qualified_name(self) -> &'static str {
        match self {
            Self::Void => "System.Void",
            Self::Object => "System.Object",
            Self::Boolean => "System.Boolean",
            Self::Char => "System.Char",
            Self::SByte => "System.SByte",
            Self::Byte => "System.Byte",
            Self::Int16 => "System.Int16",
            Self::UInt16 => "System.UInt16",
            Self::Int32 => "System.Int32",
            Self::UInt32 => "System.UInt32",
            Self::Int64 => "System.Int64",
            Self::UInt64 => "System.UInt64",
            Self::Single => "System.Single",
            Self::Double => "System.Double",
            Self::Decimal => "System.Decimal",
            Self::String => "System.String",
        }
    }

    pub const fn is_numeric(self) -> bool {
        matches!(
            self,
            Self::SByte
                | Self::Byte
                | Self::Int16
                | Self::UInt16
                | Self::Int32
                | Self::UInt32
                | Self::Int64
                | Self::UInt64
                | Self::Single
                | Self::Double
                | Self::Decimal
        )
    }
}

// =============================================================================
// TypeData
// =============================================================================

/// Structural description of an interned type.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum TypeData {
    Intrinsic(IntrinsicKind),
    /// A host type, identified by its qualified name.
    Host { qualified_name: Arc<str> },
    /// `rank` is 1 for a single-dimensional array, otherwise the exact rank.
    Array { element: TypeId, rank: u32 },
}

// =============================================================================
// Members
// =============================================================================

/// Declared accessibility of a host member.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    #[default]
    Public,
    Protected,
    Internal,
    Private,
}

/// Opaque handle the host uses to find the member again at evaluation time.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct MemberHandle(pub u32);

impl MemberHandle {
    /// Handle of a member not yet registered with a registry.
    pub const UNASSIGNED: Self = Self(0);
}

pub type ParamList = SmallVec<[TypeId; 4]>;

/// A callable member: ordinary method, property getter (`get_X`) or indexer
/// getter.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct MethodSignature {
    pub name: String,
    pub parameters: ParamList,
    pub return_type: TypeId,
    pub is_static: bool,
    pub visibility: Visibility,
    pub handle: MemberHandle,
}

impl MethodSignature {
    /// Public instance method.
    pub fn new(name: impl Into<String>, parameters: &[TypeId], return_type: TypeId) -> Self {
        Self {
            name: name.into(),
            parameters: parameters.iter().copied().collect(),
            return_type,
            is_static: false,
            visibility: Visibility::Public,
            handle: MemberHandle::UNASSIGNED,
        }
    }

    /// Public instance getter for property `property` (`get_<property>`).
    pub fn getter(property: &str, property_type: TypeId) -> Self {
        Self::new(format!("get_{property}"), &[], property_type)
    }

    #[must_use]
    pub const fn into_static(mut self) -> Self {
        self.is_static = true;
        self
    }

    #[must_use]
    pub const fn with_visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    pub fn arity(&self) -> usize {
        self.parameters.len()
    }
}

/// A data member.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FieldInfo {
    pub name: String,
    pub field_type: TypeId,
    pub is_static: bool,
    pub visibility: Visibility,
    pub handle: MemberHandle,
}

impl FieldInfo {
    /// Public instance field.
    pub fn new(name: impl Into<String>, field_type: TypeId) -> Self {
        Self {
            name: name.into(),
            field_type,
            is_static: false,
            visibility: Visibility::Public,
            handle: MemberHandle::UNASSIGNED,
        }
    }

    #[must_use]
    pub const fn into_static(mut self) -> Self {
        self.is_static = true;
        self
    }

    #[must_use]
    pub const fn with_visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }
}

// =============================================================================
// Literals
// =============================================================================

/// Intrinsic type of a literal.
pub const fn literal_type(literal: &Literal) -> TypeId {
    match literal {
        Literal::Bool(_) => TypeId::BOOLEAN,
        Literal::Char(_) => TypeId::CHAR,
        Literal::Int32(_) => TypeId::INT32,
        Literal::UInt32(_) => TypeId::UINT32,
        Literal::Int64(_) => TypeId::INT64,
        Literal::UInt64(_) => TypeId::UINT64,
        Literal::Single(_) => TypeId::SINGLE,
        Literal::Double(_) => TypeId::DOUBLE,
        Literal::Decimal(_) => TypeId::DECIMAL,
        Literal::String(_) => TypeId::STRING,
        Literal::Null => TypeId::OBJECT,
    }
}

#[cfg(test)]
#[path = "../tests/types_tests.rs"]
mod tests;
