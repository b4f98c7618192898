//! Diagnostic message table for the binder.
//!
//! Every resolution failure carries one of the codes below. Templates use
//! `{0}`, `{1}`, ... placeholders filled in by [`format_message`].

use serde::Serialize;

// =============================================================================
// Diagnostic Types
// =============================================================================

/// Diagnostic category.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum DiagnosticCategory {
    Error = 1,
    /// Internal invariant violations; these point at the AST producer.
    Internal = 2,
}

/// A diagnostic message definition with code, category, and message template.
#[derive(Clone, Copy, Debug)]
pub struct DiagnosticMessage {
    pub code: u32,
    pub category: DiagnosticCategory,
    pub message: &'static str,
}

pub mod diagnostic_codes {
    pub const NAME_NOT_FOUND: u32 = 1001;
    pub const METHOD_NOT_FOUND: u32 = 1002;
    pub const NO_MATCHING_OVERLOAD: u32 = 1003;
    pub const AMBIGUOUS_CALL: u32 = 1004;
    pub const BINARY_OPERATOR_TYPE_MISMATCH: u32 = 1101;
    pub const UNARY_OPERATOR_TYPE_MISMATCH: u32 = 1102;
    pub const ARRAY_RANK_MISMATCH: u32 = 1103;
    pub const ARRAY_INDEX_NOT_INTEGRAL: u32 = 1104;
    pub const UNKNOWN_TYPE: u32 = 1201;
    pub const ARRAY_RANK_TOO_LARGE: u32 = 1202;
    pub const MEMBER_ACCESS_UNSUPPORTED: u32 = 1301;
    pub const NO_DEFAULT_MEMBER: u32 = 1302;
    pub const AMBIGUOUS_DEFAULT_MEMBER: u32 = 1303;
    pub const INDEXER_NOT_FOUND: u32 = 1304;
    pub const EXPRESSION_NOT_CALLABLE: u32 = 1305;
    pub const UNKNOWN_OPERATOR_TOKEN: u32 = 1901;
}

use diagnostic_codes as codes;

pub static DIAGNOSTIC_MESSAGES: &[DiagnosticMessage] = &[
    DiagnosticMessage {
        code: codes::NAME_NOT_FOUND,
        category: DiagnosticCategory::Error,
        message: "The name '{0}' does not exist in the current context.",
    },
    DiagnosticMessage {
        code: codes::METHOD_NOT_FOUND,
        category: DiagnosticCategory::Error,
        message: "Type '{0}' has no accessible method named '{1}'.",
    },
    DiagnosticMessage {
        code: codes::NO_MATCHING_OVERLOAD,
        category: DiagnosticCategory::Error,
        message: "No overload of '{0}' accepts the argument list ({1}).",
    },
    DiagnosticMessage {
        code: codes::AMBIGUOUS_CALL,
        category: DiagnosticCategory::Error,
        message: "The call to '{0}' is ambiguous between {1} candidates.",
    },
    DiagnosticMessage {
        code: codes::BINARY_OPERATOR_TYPE_MISMATCH,
        category: DiagnosticCategory::Error,
        message: "Operator '{0}' cannot be applied to operands of type '{1}' and '{2}'.",
    },
    DiagnosticMessage {
        code: codes::UNARY_OPERATOR_TYPE_MISMATCH,
        category: DiagnosticCategory::Error,
        message: "Operator '{0}' cannot be applied to an operand of type '{1}'.",
    },
    DiagnosticMessage {
        code: codes::ARRAY_RANK_MISMATCH,
        category: DiagnosticCategory::Error,
        message: "Wrong number of indices for array of type '{0}': expected {1}, found {2}.",
    },
    DiagnosticMessage {
        code: codes::ARRAY_INDEX_NOT_INTEGRAL,
        category: DiagnosticCategory::Error,
        message: "Array index of type '{0}' cannot be converted to 'int'.",
    },
    DiagnosticMessage {
        code: codes::UNKNOWN_TYPE,
        category: DiagnosticCategory::Error,
        message: "The type '{0}' could not be found.",
    },
    DiagnosticMessage {
        code: codes::ARRAY_RANK_TOO_LARGE,
        category: DiagnosticCategory::Error,
        message: "Array rank {0} of type '{1}' exceeds the maximum rank {2}.",
    },
    DiagnosticMessage {
        code: codes::MEMBER_ACCESS_UNSUPPORTED,
        category: DiagnosticCategory::Error,
        message: "Member access '{0}' is only supported as the target of a method call.",
    },
    DiagnosticMessage {
        code: codes::NO_DEFAULT_MEMBER,
        category: DiagnosticCategory::Error,
        message: "Type '{0}' cannot be indexed because it declares no default member.",
    },
    DiagnosticMessage {
        code: codes::AMBIGUOUS_DEFAULT_MEMBER,
        category: DiagnosticCategory::Error,
        message: "Type '{0}' cannot be indexed because it declares {1} default members.",
    },
    DiagnosticMessage {
        code: codes::INDEXER_NOT_FOUND,
        category: DiagnosticCategory::Error,
        message: "Type '{0}' has no accessible indexer getter '{1}'.",
    },
    DiagnosticMessage {
        code: codes::EXPRESSION_NOT_CALLABLE,
        category: DiagnosticCategory::Error,
        message: "Expression '{0}' cannot be called; expected a name or a member access.",
    },
    DiagnosticMessage {
        code: codes::UNKNOWN_OPERATOR_TOKEN,
        category: DiagnosticCategory::Internal,
        message: "Token '{0}' is not a {1} operator.",
    },
];

/// Format a diagnostic message by replacing {0}, {1}, etc. with arguments.
#[must_use]
pub fn format_message(template: &str, args: &[&str]) -> String {
    let mut result = template.to_string();
    for (i, arg) in args.iter().enumerate() {
        result = result.replace(&format!("{{{i}}}"), arg);
    }
    result
}

/// Render a code the way it is shown to users (`XB1001`).
#[must_use]
pub fn format_diagnostic_code(code: u32) -> String {
    format!("XB{code:04}")
}

/// Look up a diagnostic message definition by code.
#[must_use]
pub fn get_diagnostic_message(code: u32) -> Option<&'static DiagnosticMessage> {
    DIAGNOSTIC_MESSAGES.iter().find(|m| m.code == code)
}

/// Get the message template for a diagnostic code.
///
/// Use `format_message()` to fill in the placeholders.
#[must_use]
pub fn get_message_template(code: u32) -> Option<&'static str> {
    get_diagnostic_message(code).map(|m| m.message)
}

#[cfg(test)]
#[path = "../tests/diagnostics_tests.rs"]
mod tests;
