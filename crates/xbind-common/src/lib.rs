//! Common types and utilities for the xbind expression binder.
//!
//! This crate provides foundational types used across all xbind crates:
//! - Name comparison under the active case-sensitivity mode (`CaseSensitivity`)
//! - Diagnostic message templates and codes
//! - Centralized limits and thresholds
//! - Small text helpers shared by printers

// Case-sensitive / case-insensitive name comparison
pub mod names;
pub use names::CaseSensitivity;

// Shared text helpers
pub mod format;
pub use format::array_rank_suffix;

// Centralized limits and thresholds
pub mod limits;

// Diagnostic message table
pub mod diagnostics;
pub use diagnostics::{
    DIAGNOSTIC_MESSAGES, DiagnosticCategory, DiagnosticMessage, diagnostic_codes,
    format_diagnostic_code, format_message, get_diagnostic_message, get_message_template,
};
