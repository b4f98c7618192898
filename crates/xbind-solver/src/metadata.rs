//! Type metadata provider: the binder's only view of host members.

use crate::types::{FieldInfo, MethodSignature, TypeId, Visibility};
use bitflags::bitflags;

bitflags! {
    /// Set of visibilities a member lookup accepts.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct VisibilityFilter: u8 {
        const PUBLIC = 1 << 0;
        const PROTECTED = 1 << 1;
        const INTERNAL = 1 << 2;
        const PRIVATE = 1 << 3;
    }
}

impl VisibilityFilter {
    pub const fn admits(self, visibility: Visibility) -> bool {
        let bit = match visibility {
            Visibility::Public => Self::PUBLIC,
            Visibility::Protected => Self::PROTECTED,
            Visibility::Internal => Self::INTERNAL,
            Visibility::Private => Self::PRIVATE,
        };
        self.contains(bit)
    }
}

/// Static-or-instance plus visibility filter for member enumeration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct MemberFilter {
    pub is_static: bool,
    pub visibility: VisibilityFilter,
}

impl MemberFilter {
    /// Public members on the static or instance side.
    pub const fn public(is_static: bool) -> Self {
        Self {
            is_static,
            visibility: VisibilityFilter::PUBLIC,
        }
    }

    pub const fn admits(self, is_static: bool, visibility: Visibility) -> bool {
        self.is_static == is_static && self.visibility.admits(visibility)
    }
}

/// Member enumeration for host types.
///
/// Results come back in declaration order; the binder's first-match rules
/// depend on it.
pub trait TypeMetadataProvider: Send + Sync {
    fn methods(&self, ty: TypeId, filter: MemberFilter) -> Vec<MethodSignature>;

    fn fields(&self, ty: TypeId, filter: MemberFilter) -> Vec<FieldInfo>;

    /// Every default-member annotation on `ty`, in declaration order.
    fn default_member_names(&self, ty: TypeId) -> Vec<String>;

    /// The default indexer name when `ty` carries exactly one annotation.
    fn default_indexer_name(&self, ty: TypeId) -> Option<String> {
        let mut names = self.default_member_names(ty);
        if names.len() == 1 {
            names.pop()
        } else {
            None
        }
    }
}
