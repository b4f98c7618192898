use crate::OperatorToken;
use serde::{Deserialize, Serialize};
use std::fmt;
use xbind_common::array_rank_suffix;

/// A literal value carried by a constant node.
///
/// Each variant has one intrinsic type; the binder assigns it without
/// consulting any collaborator.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub enum Literal {
    Bool(bool),
    Char(char),
    Int32(i32),
    UInt32(u32),
    Int64(i64),
    UInt64(u64),
    Single(f32),
    Double(f64),
    /// Decimal literals keep their source digits; no decimal arithmetic
    /// happens before evaluation.
    Decimal(String),
    String(String),
    Null,
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(value) => write!(f, "{value}"),
            Self::Char(value) => write!(f, "'{}'", value.escape_debug()),
            Self::Int32(value) => write!(f, "{value}"),
            Self::UInt32(value) => write!(f, "{value}u"),
            Self::Int64(value) => write!(f, "{value}L"),
            Self::UInt64(value) => write!(f, "{value}UL"),
            Self::Single(value) => write!(f, "{value}f"),
            Self::Double(value) => write!(f, "{value:?}"),
            Self::Decimal(digits) => write!(f, "{digits}m"),
            Self::String(value) => write!(f, "\"{}\"", value.escape_debug()),
            Self::Null => f.write_str("null"),
        }
    }
}

/// Untyped expression node.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SyntaxNode {
    Constant {
        value: Literal,
    },
    Identifier {
        name: String,
    },
    MemberAccess {
        operand: Box<SyntaxNode>,
        member: String,
    },
    MethodCall {
        target: Box<SyntaxNode>,
        #[serde(default)]
        arguments: Vec<SyntaxNode>,
    },
    Index {
        operand: Box<SyntaxNode>,
        arguments: Vec<SyntaxNode>,
    },
    Cast {
        operand: Box<SyntaxNode>,
        type_name: String,
        /// 0 for a scalar target, otherwise the array rank.
        #[serde(default)]
        array_rank: u32,
    },
    Binary {
        operator: OperatorToken,
        left: Box<SyntaxNode>,
        right: Box<SyntaxNode>,
    },
    Unary {
        operator: OperatorToken,
        operand: Box<SyntaxNode>,
    },
}

impl SyntaxNode {
    pub fn constant(value: Literal) -> Self {
        Self::Constant { value }
    }

    pub fn ident(name: impl Into<String>) -> Self {
        Self::Identifier { name: name.into() }
    }

    pub fn member(operand: Self, member: impl Into<String>) -> Self {
        Self::MemberAccess {
            operand: Box::new(operand),
            member: member.into(),
        }
    }

    pub fn call(target: Self, arguments: Vec<Self>) -> Self {
        Self::MethodCall {
            target: Box::new(target),
            arguments,
        }
    }

    pub fn index(operand: Self, arguments: Vec<Self>) -> Self {
        Self::Index {
            operand: Box::new(operand),
            arguments,
        }
    }

    pub fn cast(operand: Self, type_name: impl Into<String>, array_rank: u32) -> Self {
        Self::Cast {
            operand: Box::new(operand),
            type_name: type_name.into(),
            array_rank,
        }
    }

    pub fn binary(operator: OperatorToken, left: Self, right: Self) -> Self {
        Self::Binary {
            operator,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn unary(operator: OperatorToken, operand: Self) -> Self {
        Self::Unary {
            operator,
            operand: Box::new(operand),
        }
    }

    /// Node kind name used in logs and diagnostics.
    pub const fn kind_name(&self) -> &'static str {
        match self {
            Self::Constant { .. } => "Constant",
            Self::Identifier { .. } => "IdentifierAccess",
            Self::MemberAccess { .. } => "MemberAccess",
            Self::MethodCall { .. } => "MethodCall",
            Self::Index { .. } => "Index",
            Self::Cast { .. } => "Cast",
            Self::Binary { .. } => "BinaryOp",
            Self::Unary { .. } => "UnaryOp",
        }
    }
}

fn write_list(f: &mut fmt::Formatter<'_>, nodes: &[SyntaxNode]) -> fmt::Result {
    for (i, node) in nodes.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{node}")?;
    }
    Ok(())
}

/// Renders the node back to expression text (fully parenthesized binaries).
impl fmt::Display for SyntaxNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Constant { value } => write!(f, "{value}"),
            Self::Identifier { name } => f.write_str(name),
            Self::MemberAccess { operand, member } => write!(f, "{operand}.{member}"),
            Self::MethodCall { target, arguments } => {
                write!(f, "{target}(")?;
                write_list(f, arguments)?;
                f.write_str(")")
            }
            Self::Index { operand, arguments } => {
                write!(f, "{operand}[")?;
                write_list(f, arguments)?;
                f.write_str("]")
            }
            Self::Cast {
                operand,
                type_name,
                array_rank,
            } => write!(
                f,
                "cast({operand}, {type_name}{})",
                array_rank_suffix(*array_rank)
            ),
            Self::Binary {
                operator,
                left,
                right,
            } => write!(f, "({left} {operator} {right})"),
            Self::Unary { operator, operand } => write!(f, "{operator}{operand}"),
        }
    }
}
