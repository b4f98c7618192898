//! Operator typing.
//!
//! AST-agnostic rules that compute the result type of unary and binary
//! operators from already-resolved operand types. These functions operate
//! purely on `TypeId`s and the catalog's conversion table.

use crate::catalog::TypeCatalog;
use crate::types::TypeId;
use serde::Serialize;
use std::fmt;
use tracing::trace;
use xbind_syntax::OperatorToken;

/// Binary operators the binder gives meaning to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum BinaryOperator {
    Add,
    Subtract,
    Multiply,
    Divide,
    Modulo,
    Xor,
    Equal,
    NotEqual,
    LessThan,
    LessThanOrEqual,
    GreaterThan,
    GreaterThanOrEqual,
    And,
    Or,
}

impl BinaryOperator {
    /// Map a parser token to a binary operator.
    pub const fn from_token(token: OperatorToken) -> Option<Self> {
        Some(match token {
            OperatorToken::Plus => Self::Add,
            OperatorToken::Minus => Self::Subtract,
            OperatorToken::Asterisk => Self::Multiply,
            OperatorToken::Slash => Self::Divide,
            OperatorToken::Percent => Self::Modulo,
            OperatorToken::Caret => Self::Xor,
            OperatorToken::EqualsEquals => Self::Equal,
            OperatorToken::ExclamationEquals => Self::NotEqual,
            OperatorToken::LessThan => Self::LessThan,
            OperatorToken::LessThanEquals => Self::LessThanOrEqual,
            OperatorToken::GreaterThan => Self::GreaterThan,
            OperatorToken::GreaterThanEquals => Self::GreaterThanOrEqual,
            OperatorToken::AmpersandAmpersand => Self::And,
            OperatorToken::BarBar => Self::Or,
            _ => return None,
        })
    }

    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
            Self::Modulo => "%",
            Self::Xor => "^",
            Self::Equal => "==",
            Self::NotEqual => "!=",
            Self::LessThan => "<",
            Self::LessThanOrEqual => "<=",
            Self::GreaterThan => ">",
            Self::GreaterThanOrEqual => ">=",
            Self::And => "&&",
            Self::Or => "||",
        }
    }

    pub const fn is_comparison(self) -> bool {
        matches!(
            self,
            Self::Equal
                | Self::NotEqual
                | Self::LessThan
                | Self::LessThanOrEqual
                | Self::GreaterThan
                | Self::GreaterThanOrEqual
        )
    }

    pub const fn is_logical(self) -> bool {
        matches!(self, Self::And | Self::Or)
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Unary operators the binder gives meaning to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum UnaryOperator {
    Plus,
    Minus,
    Not,
}

impl UnaryOperator {
    pub const fn from_token(token: OperatorToken) -> Option<Self> {
        match token {
            OperatorToken::Plus => Some(Self::Plus),
            OperatorToken::Minus => Some(Self::Minus),
            OperatorToken::Exclamation => Some(Self::Not),
            _ => None,
        }
    }

    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Not => "!",
        }
    }
}

impl fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Computes the common operand type of a binary expression.
///
/// # Rules (first that applies wins)
/// 1. Identical types unify to themselves.
/// 2. `Add` with a `string` on either side is string concatenation.
/// 3. If one side's type is in the other side's widening list, the wider
///    side's type is the result.
/// 4. Otherwise the first entry of the left widening list that also appears
///    in the right widening list.
///
/// Returns `None` when the operands have no common type.
pub fn unify_binary_types(
    catalog: &dyn TypeCatalog,
    left: TypeId,
    right: TypeId,
    operator: BinaryOperator,
) -> Option<TypeId> {
    if left == right {
        return Some(left);
    }
    if operator == BinaryOperator::Add && (left == TypeId::STRING || right == TypeId::STRING) {
        return Some(TypeId::STRING);
    }

    let left_candidates = catalog.implicit_conversion_candidates(left);
    let right_candidates = catalog.implicit_conversion_candidates(right);

    if left_candidates.contains(&right) {
        return Some(right);
    }
    if right_candidates.contains(&left) {
        return Some(left);
    }

    let shared = left_candidates
        .iter()
        .copied()
        .find(|candidate| right_candidates.contains(candidate));
    trace!(
        left = left.0,
        right = right.0,
        shared = ?shared.map(|t| t.0),
        "unify_binary_types: shared widening"
    );
    shared
}

/// Result type of a binary expression.
///
/// Arithmetic and `^` produce the unified operand type; comparisons produce
/// `bool`; `&&`/`||` require both operands to unify to `bool`.
pub fn binary_result_type(
    catalog: &dyn TypeCatalog,
    left: TypeId,
    right: TypeId,
    operator: BinaryOperator,
) -> Option<TypeId> {
    let unified = unify_binary_types(catalog, left, right, operator)?;
    if operator.is_logical() {
        return (unified == TypeId::BOOLEAN).then_some(TypeId::BOOLEAN);
    }
    if operator.is_comparison() {
        return Some(TypeId::BOOLEAN);
    }
    Some(unified)
}

/// Result type of a unary expression.
///
/// `+`/`-` need a numeric operand and keep its type; `!` needs `bool`.
pub fn unary_result_type(
    catalog: &dyn TypeCatalog,
    operand: TypeId,
    operator: UnaryOperator,
) -> Option<TypeId> {
    match operator {
        UnaryOperator::Plus | UnaryOperator::Minus => {
            catalog.is_numeric(operand).then_some(operand)
        }
        UnaryOperator::Not => (operand == TypeId::BOOLEAN).then_some(TypeId::BOOLEAN),
    }
}

#[cfg(test)]
#[path = "../tests/expression_ops_tests.rs"]
mod tests;
