//! Per-run resolution context.

use xbind_common::CaseSensitivity;
use xbind_solver::TypeId;

/// Caller-visible slot of the implicit owner instance.
pub const OWNER_SLOT: u32 = 0;

/// One entry of the parser-assigned identifier table.
///
/// An entry with no type is not a variable and is skipped by name lookup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IdentifierSlot {
    pub name: String,
    pub ty: Option<TypeId>,
}

/// A type brought into scope, optionally under a namespace alias.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Import {
    pub ty: TypeId,
    pub namespace: Option<String>,
}

/// Everything the binder knows about the scope an expression is evaluated
/// in. Built once through [`ResolutionContextBuilder`] and never mutated.
#[derive(Clone, Debug, Default)]
pub struct ResolutionContext {
    owner: Option<TypeId>,
    identifiers: Vec<IdentifierSlot>,
    slot_map: Vec<u32>,
    imports: Vec<Import>,
    case_sensitivity: CaseSensitivity,
}

impl ResolutionContext {
    pub fn builder() -> ResolutionContextBuilder {
        ResolutionContextBuilder::default()
    }

    /// Enclosing-instance type; `None` means there is no implicit `this`.
    pub const fn owner(&self) -> Option<TypeId> {
        self.owner
    }

    pub fn identifiers(&self) -> &[IdentifierSlot] {
        &self.identifiers
    }

    pub fn imports(&self) -> &[Import] {
        &self.imports
    }

    pub const fn case_sensitivity(&self) -> CaseSensitivity {
        self.case_sensitivity
    }

    /// Maps an identifier-table index to the caller-visible storage slot.
    /// Indices past the end of the slot map are their own slot.
    pub fn visible_slot(&self, table_index: usize) -> u32 {
        match self.slot_map.get(table_index) {
            Some(&slot) => slot,
            None => u32::try_from(table_index).unwrap_or(u32::MAX),
        }
    }
}

/// Builder for [`ResolutionContext`].
#[derive(Clone, Debug, Default)]
pub struct ResolutionContextBuilder {
    context: ResolutionContext,
}

impl ResolutionContextBuilder {
    #[must_use]
    pub const fn with_owner(mut self, owner: TypeId) -> Self {
        self.context.owner = Some(owner);
        self
    }

    /// Append a typed identifier to the table.
    #[must_use]
    pub fn declare(mut self, name: impl Into<String>, ty: TypeId) -> Self {
        self.context.identifiers.push(IdentifierSlot {
            name: name.into(),
            ty: Some(ty),
        });
        self
    }

    /// Append a table entry that occupies an index but is not a variable.
    #[must_use]
    pub fn declare_untyped(mut self, name: impl Into<String>) -> Self {
        self.context.identifiers.push(IdentifierSlot {
            name: name.into(),
            ty: None,
        });
        self
    }

    /// Inverse parameter map: entry `i` is the visible slot of table index `i`.
    #[must_use]
    pub fn with_slot_map(mut self, slots: impl IntoIterator<Item = u32>) -> Self {
        self.context.slot_map = slots.into_iter().collect();
        self
    }

    #[must_use]
    pub fn import_type(mut self, ty: TypeId) -> Self {
        self.context.imports.push(Import {
            ty,
            namespace: None,
        });
        self
    }

    #[must_use]
    pub fn import_namespace(mut self, alias: impl Into<String>, ty: TypeId) -> Self {
        self.context.imports.push(Import {
            ty,
            namespace: Some(alias.into()),
        });
        self
    }

    #[must_use]
    pub const fn case_sensitivity(mut self, case_sensitivity: CaseSensitivity) -> Self {
        self.context.case_sensitivity = case_sensitivity;
        self
    }

    pub fn build(self) -> ResolutionContext {
        self.context
    }
}
