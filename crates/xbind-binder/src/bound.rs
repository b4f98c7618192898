//! Bound expression tree.

use serde::Serialize;
use xbind_solver::{BinaryOperator, FieldInfo, MethodSignature, TypeId, UnaryOperator};
use xbind_syntax::Literal;

/// A typed expression node.
///
/// Every variant's type is fixed when the node is built. Children are owned
/// exclusively by their parent, so the tree has no sharing and no cycles.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "kind")]
pub enum BoundExpr {
    Constant {
        value: Literal,
        ty: TypeId,
    },
    /// Caller-visible storage slot; slot 0 is the implicit owner instance.
    VariableAccess {
        ty: TypeId,
        slot: u32,
    },
    /// The type itself, used as the operand of static member accesses.
    TypeAccess {
        ty: TypeId,
    },
    FieldAccess {
        operand: Box<BoundExpr>,
        field: FieldInfo,
    },
    /// Property getters, ordinary methods and indexer getters.
    MethodCall {
        operand: Option<Box<BoundExpr>>,
        method: MethodSignature,
        arguments: Vec<BoundExpr>,
    },
    Binary {
        left: Box<BoundExpr>,
        right: Box<BoundExpr>,
        operator: BinaryOperator,
        ty: TypeId,
    },
    Unary {
        operand: Box<BoundExpr>,
        operator: UnaryOperator,
        ty: TypeId,
    },
    Cast {
        operand: Box<BoundExpr>,
        ty: TypeId,
    },
    /// True array indexing only; indexers on objects bind to `MethodCall`.
    Index {
        operand: Box<BoundExpr>,
        arguments: Vec<BoundExpr>,
        ty: TypeId,
    },
}

impl BoundExpr {
    /// The resolved type of this node.
    pub fn ty(&self) -> TypeId {
        match self {
            Self::Constant { ty, .. }
            | Self::VariableAccess { ty, .. }
            | Self::TypeAccess { ty }
            | Self::Binary { ty, .. }
            | Self::Unary { ty, .. }
            | Self::Cast { ty, .. }
            | Self::Index { ty, .. } => *ty,
            Self::FieldAccess { field, .. } => field.field_type,
            Self::MethodCall { method, .. } => method.return_type,
        }
    }

    /// Whether this node names a type rather than a value; member lookups
    /// on it see static members.
    pub const fn is_type_access(&self) -> bool {
        matches!(self, Self::TypeAccess { .. })
    }

    pub const fn kind_name(&self) -> &'static str {
        match self {
            Self::Constant { .. } => "Constant",
            Self::VariableAccess { .. } => "VariableAccess",
            Self::TypeAccess { .. } => "TypeAccess",
            Self::FieldAccess { .. } => "FieldAccess",
            Self::MethodCall { .. } => "MethodCall",
            Self::Binary { .. } => "BinaryExpression",
            Self::Unary { .. } => "UnaryExpression",
            Self::Cast { .. } => "Cast",
            Self::Index { .. } => "Index",
        }
    }
}
