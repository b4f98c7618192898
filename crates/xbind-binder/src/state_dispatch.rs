//! Per-kind binding rules.

use crate::bound::BoundExpr;
use crate::error::{BindError, Result};
use crate::state::Binder;
use tracing::trace;
use xbind_common::diagnostic_codes;
use xbind_solver::{
    BinaryOperator, TypeId, UnaryOperator, binary_result_type, literal_type, unary_result_type,
};
use xbind_syntax::{Literal, OperatorToken, SyntaxNode};

/// Prefix of the accessor method an indexer default member binds to.
pub(crate) const GETTER_PREFIX: &str = "get_";

impl Binder<'_> {
    /// Bind one node, children first.
    #[tracing::instrument(level = "trace", skip_all, fields(kind = node.kind_name()))]
    pub(crate) fn bind(&self, node: &SyntaxNode) -> Result<BoundExpr> {
        match node {
            SyntaxNode::Constant { value } => Ok(Self::bind_constant(value)),
            SyntaxNode::Identifier { name } => self.resolve_identifier(name),
            SyntaxNode::MemberAccess { .. } => Err(BindError::unsupported(
                diagnostic_codes::MEMBER_ACCESS_UNSUPPORTED,
                &[&node.to_string()],
            )),
            SyntaxNode::MethodCall { target, arguments } => {
                self.bind_method_call(target, arguments)
            }
            SyntaxNode::Index { operand, arguments } => self.bind_index(operand, arguments),
            SyntaxNode::Cast {
                operand,
                type_name,
                array_rank,
            } => self.bind_cast(operand, type_name, *array_rank),
            SyntaxNode::Binary {
                operator,
                left,
                right,
            } => self.bind_binary(*operator, left, right),
            SyntaxNode::Unary { operator, operand } => self.bind_unary(*operator, operand),
        }
    }

    fn bind_constant(value: &Literal) -> BoundExpr {
        BoundExpr::Constant {
            value: value.clone(),
            ty: literal_type(value),
        }
    }

    pub(crate) fn bind_all(&self, nodes: &[SyntaxNode]) -> Result<Vec<BoundExpr>> {
        nodes.iter().map(|node| self.bind(node)).collect()
    }

    fn bind_cast(&self, operand: &SyntaxNode, type_name: &str, array_rank: u32) -> Result<BoundExpr> {
        let operand = self.bind(operand)?;
        let ty = self.resolve_type_name(type_name, array_rank)?;
        Ok(BoundExpr::Cast {
            operand: Box::new(operand),
            ty,
        })
    }

    fn bind_unary(&self, token: OperatorToken, operand: &SyntaxNode) -> Result<BoundExpr> {
        let operand = self.bind(operand)?;
        let operator = UnaryOperator::from_token(token).ok_or_else(|| {
            BindError::invalid_operation(
                diagnostic_codes::UNKNOWN_OPERATOR_TOKEN,
                &[token.text(), "unary"],
            )
        })?;

        let ty = unary_result_type(self.host.catalog, operand.ty(), operator).ok_or_else(|| {
            BindError::type_mismatch(
                diagnostic_codes::UNARY_OPERATOR_TYPE_MISMATCH,
                &[operator.symbol(), &self.type_name(operand.ty())],
            )
        })?;

        Ok(BoundExpr::Unary {
            operand: Box::new(operand),
            operator,
            ty,
        })
    }

    fn bind_binary(
        &self,
        token: OperatorToken,
        left: &SyntaxNode,
        right: &SyntaxNode,
    ) -> Result<BoundExpr> {
        let left = self.bind(left)?;
        let right = self.bind(right)?;
        let operator = BinaryOperator::from_token(token).ok_or_else(|| {
            BindError::invalid_operation(
                diagnostic_codes::UNKNOWN_OPERATOR_TOKEN,
                &[token.text(), "binary"],
            )
        })?;

        let ty = binary_result_type(self.host.catalog, left.ty(), right.ty(), operator)
            .ok_or_else(|| {
                BindError::type_mismatch(
                    diagnostic_codes::BINARY_OPERATOR_TYPE_MISMATCH,
                    &[
                        operator.symbol(),
                        &self.type_name(left.ty()),
                        &self.type_name(right.ty()),
                    ],
                )
            })?;
        trace!(operator = %operator, ty = ty.0, "bound binary expression");

        Ok(BoundExpr::Binary {
            left: Box::new(left),
            right: Box::new(right),
            operator,
            ty,
        })
    }

    fn bind_index(&self, operand: &SyntaxNode, arguments: &[SyntaxNode]) -> Result<BoundExpr> {
        let operand = self.bind(operand)?;
        let arguments = self.bind_all(arguments)?;
        let operand_ty = operand.ty();

        let Some((element, rank)) = self.host.types.array_info(operand_ty) else {
            return self.bind_indexer_call(operand, arguments);
        };

        if arguments.len() != rank as usize {
            return Err(BindError::type_mismatch(
                diagnostic_codes::ARRAY_RANK_MISMATCH,
                &[
                    &self.type_name(operand_ty),
                    &rank.to_string(),
                    &arguments.len().to_string(),
                ],
            ));
        }
        if let Some(bad) = arguments
            .iter()
            .find(|arg| !self.host.catalog.is_convertible(arg.ty(), TypeId::INT32))
        {
            return Err(BindError::type_mismatch(
                diagnostic_codes::ARRAY_INDEX_NOT_INTEGRAL,
                &[&self.type_name(bad.ty())],
            ));
        }

        Ok(BoundExpr::Index {
            operand: Box::new(operand),
            arguments,
            ty: element,
        })
    }

    /// Indexing a non-array binds to the getter of the type's single
    /// default member.
    fn bind_indexer_call(&self, operand: BoundExpr, arguments: Vec<BoundExpr>) -> Result<BoundExpr> {
        let operand_ty = operand.ty();
        let Some(indexer) = self.host.metadata.default_indexer_name(operand_ty) else {
            let declared = self.host.metadata.default_member_names(operand_ty).len();
            let type_name = self.type_name(operand_ty);
            return Err(if declared == 0 {
                BindError::unsupported(diagnostic_codes::NO_DEFAULT_MEMBER, &[&type_name])
            } else {
                BindError::unsupported(
                    diagnostic_codes::AMBIGUOUS_DEFAULT_MEMBER,
                    &[&type_name, &declared.to_string()],
                )
            });
        };

        let getter = format!("{GETTER_PREFIX}{indexer}");
        match self.resolve_method(operand, &getter, arguments)? {
            Some(call) => Ok(call),
            None => Err(BindError::unsupported(
                diagnostic_codes::INDEXER_NOT_FOUND,
                &[&self.type_name(operand_ty), &getter],
            )),
        }
    }

    fn bind_method_call(&self, target: &SyntaxNode, arguments: &[SyntaxNode]) -> Result<BoundExpr> {
        let arguments = self.bind_all(arguments)?;
        match target {
            SyntaxNode::Identifier { name } => self.resolve_global_call(name, arguments),
            SyntaxNode::MemberAccess { operand, member } => {
                let operand = self.bind(operand)?;
                let operand_ty = operand.ty();
                match self.resolve_method(operand, member, arguments)? {
                    Some(call) => Ok(call),
                    None => Err(BindError::unresolved(
                        diagnostic_codes::METHOD_NOT_FOUND,
                        &[&self.type_name(operand_ty), member],
                    )),
                }
            }
            other => Err(BindError::unsupported(
                diagnostic_codes::EXPRESSION_NOT_CALLABLE,
                &[&other.to_string()],
            )),
        }
    }
}
