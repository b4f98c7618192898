//! Indented text rendering of bound trees, for diagnostics and the CLI.

use crate::bound::BoundExpr;
use xbind_solver::TypeDatabase;

/// Render `expr` one node per line, children indented two spaces, each line
/// ending in `: <type>`.
///
/// ```text
/// BinaryExpression + : int
///   VariableAccess slot 0 : int
///   Constant 1 : int
/// ```
pub fn format_bound_tree(db: &dyn TypeDatabase, expr: &BoundExpr) -> String {
    let mut lines = Vec::new();
    push_node(db, expr, 0, &mut lines);
    lines.join("\n")
}

fn push_node(db: &dyn TypeDatabase, expr: &BoundExpr, depth: usize, lines: &mut Vec<String>) {
    let label = match expr {
        BoundExpr::Constant { value, .. } => format!("Constant {value}"),
        BoundExpr::VariableAccess { slot, .. } => format!("VariableAccess slot {slot}"),
        BoundExpr::TypeAccess { .. } => "TypeAccess".to_string(),
        BoundExpr::FieldAccess { field, .. } => format!(
            "FieldAccess {}{}",
            if field.is_static { "static " } else { "" },
            field.name
        ),
        BoundExpr::MethodCall { method, .. } => format!(
            "MethodCall {}{}({})",
            if method.is_static { "static " } else { "" },
            method.name,
            method
                .parameters
                .iter()
                .map(|&p| db.type_name(p))
                .collect::<Vec<_>>()
                .join(", ")
        ),
        BoundExpr::Binary { operator, .. } => format!("BinaryExpression {operator}"),
        BoundExpr::Unary { operator, .. } => format!("UnaryExpression {operator}"),
        BoundExpr::Cast { .. } => "Cast".to_string(),
        BoundExpr::Index { arguments, .. } => format!("Index [{}]", arguments.len()),
    };
    lines.push(format!(
        "{:indent$}{label} : {}",
        "",
        db.type_name(expr.ty()),
        indent = depth * 2
    ));

    match expr {
        BoundExpr::Constant { .. }
        | BoundExpr::VariableAccess { .. }
        | BoundExpr::TypeAccess { .. } => {}
        BoundExpr::FieldAccess { operand, .. }
        | BoundExpr::Unary { operand, .. }
        | BoundExpr::Cast { operand, .. } => push_node(db, operand, depth + 1, lines),
        BoundExpr::MethodCall {
            operand, arguments, ..
        } => {
            if let Some(operand) = operand {
                push_node(db, operand, depth + 1, lines);
            }
            for arg in arguments {
                push_node(db, arg, depth + 1, lines);
            }
        }
        BoundExpr::Binary { left, right, .. } => {
            push_node(db, left, depth + 1, lines);
            push_node(db, right, depth + 1, lines);
        }
        BoundExpr::Index {
            operand, arguments, ..
        } => {
            push_node(db, operand, depth + 1, lines);
            for arg in arguments {
                push_node(db, arg, depth + 1, lines);
            }
        }
    }
}

#[cfg(test)]
#[path = "../tests/format_tests.rs"]
mod tests;
