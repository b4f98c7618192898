//! Centralized limits and thresholds for the binder.

// =============================================================================
// Type Limits
// =============================================================================

/// Maximum array rank accepted when resolving a type name.
///
/// Matches the rank limit of common managed runtimes; a cast to a rank above
/// this reports an unknown type instead of interning a type no host can
/// represent.
pub const MAX_ARRAY_RANK: u32 = 32;
