//! Name comparison rules.
//!
//! Every identifier, member, method and type-keyword comparison made while
//! binding goes through a [`CaseSensitivity`] value that the caller threads
//! explicitly. There is no process-wide mode.

use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// How names are compared during resolution.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CaseSensitivity {
    /// Names must match byte for byte.
    #[default]
    Sensitive,
    /// Names match when their lowercase forms are equal.
    Insensitive,
}

impl CaseSensitivity {
    /// Map a host-supplied "case sensitive" flag to a mode.
    #[must_use]
    pub const fn from_flag(case_sensitive: bool) -> Self {
        if case_sensitive {
            Self::Sensitive
        } else {
            Self::Insensitive
        }
    }

    #[must_use]
    pub const fn is_sensitive(self) -> bool {
        matches!(self, Self::Sensitive)
    }

    /// Compare two names under this mode.
    #[must_use]
    pub fn names_equal(self, a: &str, b: &str) -> bool {
        match self {
            Self::Sensitive => a == b,
            Self::Insensitive => {
                if a.is_ascii() && b.is_ascii() {
                    return a.eq_ignore_ascii_case(b);
                }
                a.chars()
                    .flat_map(char::to_lowercase)
                    .eq(b.chars().flat_map(char::to_lowercase))
            }
        }
    }

    /// Check whether `candidate` spells `prefix` followed by `name`.
    ///
    /// Used for accessor lookups such as `get_Length` without building the
    /// concatenated string for every candidate.
    #[must_use]
    pub fn names_equal_prefixed(self, candidate: &str, prefix: &str, name: &str) -> bool {
        if candidate.len() < prefix.len() || !candidate.is_char_boundary(prefix.len()) {
            return false;
        }
        let (head, tail) = candidate.split_at(prefix.len());
        self.names_equal(head, prefix) && self.names_equal(tail, name)
    }

    /// Normalize a name for keyed lookups (lowercase in insensitive mode).
    #[must_use]
    pub fn normalize(self, name: &str) -> Cow<'_, str> {
        match self {
            Self::Sensitive => Cow::Borrowed(name),
            Self::Insensitive => Cow::Owned(name.to_lowercase()),
        }
    }
}
