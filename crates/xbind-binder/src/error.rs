//! Resolution errors.
//!
//! Every failure is terminal for the current [`resolve`](crate::resolve)
//! call. Each variant carries a [`BindDiagnostic`] with the stable code and
//! the rendered message from the `xbind-common` message table.

use std::fmt;
use thiserror::Error;
use xbind_common::{format_diagnostic_code, format_message, get_message_template};

/// Code plus rendered message.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BindDiagnostic {
    pub code: u32,
    pub message: String,
}

impl BindDiagnostic {
    pub fn new(code: u32, args: &[&str]) -> Self {
        let template = get_message_template(code).unwrap_or("{0}");
        Self {
            code,
            message: format_message(template, args),
        }
    }
}

impl fmt::Display for BindDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", format_diagnostic_code(self.code), self.message)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum BindError {
    /// An identifier, member or method has no match anywhere in the
    /// precedence chain, or no overload accepts the arguments.
    #[error("unresolved reference: {0}")]
    UnresolvedReference(BindDiagnostic),

    /// More than one equally ranked overload. Overload selection currently
    /// resolves ties by candidate order, so this is never produced.
    #[error("ambiguous call: {0}")]
    AmbiguousCall(BindDiagnostic),

    #[error("type mismatch: {0}")]
    TypeMismatch(BindDiagnostic),

    #[error("unknown type: {0}")]
    UnknownType(BindDiagnostic),

    #[error("unsupported construct: {0}")]
    UnsupportedConstruct(BindDiagnostic),

    /// Internal invariant violation; points at the AST producer.
    #[error("invalid operation: {0}")]
    InvalidOperation(BindDiagnostic),
}

/// Fieldless mirror of [`BindError`] for matching on the failure class.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BindErrorKind {
    UnresolvedReference,
    AmbiguousCall,
    TypeMismatch,
    UnknownType,
    UnsupportedConstruct,
    InvalidOperation,
}

impl BindError {
    pub fn unresolved(code: u32, args: &[&str]) -> Self {
        Self::UnresolvedReference(BindDiagnostic::new(code, args))
    }

    pub fn type_mismatch(code: u32, args: &[&str]) -> Self {
        Self::TypeMismatch(BindDiagnostic::new(code, args))
    }

    pub fn unknown_type(code: u32, args: &[&str]) -> Self {
        Self::UnknownType(BindDiagnostic::new(code, args))
    }

    pub fn unsupported(code: u32, args: &[&str]) -> Self {
        Self::UnsupportedConstruct(BindDiagnostic::new(code, args))
    }

    pub fn invalid_operation(code: u32, args: &[&str]) -> Self {
        Self::InvalidOperation(BindDiagnostic::new(code, args))
    }

    pub const fn kind(&self) -> BindErrorKind {
        match self {
            Self::UnresolvedReference(_) => BindErrorKind::UnresolvedReference,
            Self::AmbiguousCall(_) => BindErrorKind::AmbiguousCall,
            Self::TypeMismatch(_) => BindErrorKind::TypeMismatch,
            Self::UnknownType(_) => BindErrorKind::UnknownType,
            Self::UnsupportedConstruct(_) => BindErrorKind::UnsupportedConstruct,
            Self::InvalidOperation(_) => BindErrorKind::InvalidOperation,
        }
    }

    pub const fn diagnostic(&self) -> &BindDiagnostic {
        match self {
            Self::UnresolvedReference(d)
            | Self::AmbiguousCall(d)
            | Self::TypeMismatch(d)
            | Self::UnknownType(d)
            | Self::UnsupportedConstruct(d)
            | Self::InvalidOperation(d) => d,
        }
    }

    /// Numeric diagnostic code, e.g. `1001` for an unknown name.
    pub const fn code(&self) -> u32 {
        self.diagnostic().code
    }

    pub fn message(&self) -> &str {
        &self.diagnostic().message
    }
}

pub type Result<T> = std::result::Result<T, BindError>;

#[cfg(test)]
#[path = "../tests/error_tests.rs"]
mod tests;
