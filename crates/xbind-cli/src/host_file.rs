//! JSON host description.
//!
//! ```json
//! {
//!   "types": [{
//!     "name": "Acme.Widget",
//!     "methods": [{ "name": "Foo", "parameters": ["int"], "returns": "string" }],
//!     "fields": [{ "name": "Count", "type": "int", "static": true }],
//!     "default_members": ["Item"]
//!   }],
//!   "owner": "Acme.Widget",
//!   "identifiers": [{ "name": "x", "type": "int" }, { "name": "unused" }],
//!   "slot_map": [1],
//!   "imports": [{ "type": "Acme.Math" }, { "type": "Acme.Math", "alias": "M" }],
//!   "case_insensitive": false
//! }
//! ```
//!
//! Type references are builtin keywords, `System.*` names or names of types
//! declared in the same file, optionally followed by array suffixes such as
//! `[]` or `[,]`.

use anyhow::{Context, Result, bail};
use rustc_hash::FxHashSet;
use serde::Deserialize;
use std::path::Path;
use tracing::debug;
use xbind_binder::ResolutionContext;
use xbind_common::CaseSensitivity;
use xbind_solver::{
    FieldInfo, HostEnvironment, HostTypeInfo, MethodSignature, TypeCatalog, TypeDatabase, TypeId,
    Visibility,
};

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HostDescription {
    #[serde(default)]
    pub types: Vec<TypeEntry>,
    #[serde(default)]
    pub owner: Option<String>,
    #[serde(default)]
    pub identifiers: Vec<IdentifierEntry>,
    #[serde(default)]
    pub slot_map: Vec<u32>,
    #[serde(default)]
    pub imports: Vec<ImportEntry>,
    #[serde(default)]
    pub case_insensitive: bool,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TypeEntry {
    pub name: String,
    #[serde(default)]
    pub methods: Vec<MethodEntry>,
    #[serde(default)]
    pub fields: Vec<FieldEntry>,
    #[serde(default)]
    pub default_members: Vec<String>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MethodEntry {
    pub name: String,
    #[serde(default)]
    pub parameters: Vec<String>,
    #[serde(default = "void_type")]
    pub returns: String,
    #[serde(default, rename = "static")]
    pub is_static: bool,
    #[serde(default)]
    pub visibility: Visibility,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FieldEntry {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: String,
    #[serde(default, rename = "static")]
    pub is_static: bool,
    #[serde(default)]
    pub visibility: Visibility,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct IdentifierEntry {
    pub name: String,
    /// Absent for table entries that are not variables.
    #[serde(default, rename = "type")]
    pub ty: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ImportEntry {
    #[serde(rename = "type")]
    pub ty: String,
    #[serde(default)]
    pub alias: Option<String>,
}

fn void_type() -> String {
    "void".to_string()
}

/// Split `name[][,]` into `name` and the ranks of its bracket suffixes,
/// applied left to right.
fn split_array_suffixes(reference: &str) -> Result<(&str, Vec<u32>)> {
    let Some(open) = reference.find('[') else {
        return Ok((reference, Vec::new()));
    };
    let (element, mut rest) = reference.split_at(open);
    let mut ranks = Vec::new();
    while !rest.is_empty() {
        if !rest.starts_with('[') {
            bail!("malformed array suffix in type reference '{reference}'");
        }
        let Some(close) = rest.find(']') else {
            bail!("unterminated array suffix in type reference '{reference}'");
        };
        let inner = &rest[1..close];
        if inner.chars().any(|c| c != ',') {
            bail!("malformed array suffix in type reference '{reference}'");
        }
        let rank = u32::try_from(inner.len() + 1)
            .with_context(|| format!("array rank too large in '{reference}'"))?;
        ranks.push(rank);
        rest = &rest[close + 1..];
    }
    Ok((element.trim(), ranks))
}

impl HostDescription {
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read host description {}", path.display()))?;
        Self::parse(&text)
            .with_context(|| format!("invalid host description {}", path.display()))
    }

    pub fn parse(text: &str) -> Result<Self> {
        serde_json::from_str(text).context("failed to parse host description JSON")
    }

    /// Register every declared type and build the resolution context.
    ///
    /// `case_sensitivity` overrides the file's own `case_insensitive` flag
    /// when given.
    pub fn build(
        &self,
        case_sensitivity: Option<CaseSensitivity>,
    ) -> Result<(HostEnvironment, ResolutionContext)> {
        let env = HostEnvironment::new();
        let declared: FxHashSet<&str> = self.types.iter().map(|t| t.name.as_str()).collect();
        if declared.len() != self.types.len() {
            bail!("host description declares a type more than once");
        }
        let resolver = TypeRefResolver {
            env: &env,
            declared: &declared,
        };

        for entry in &self.types {
            let mut info = HostTypeInfo::new(entry.name.clone());
            for method in &entry.methods {
                let parameters = method
                    .parameters
                    .iter()
                    .map(|p| resolver.resolve(p))
                    .collect::<Result<Vec<_>>>()
                    .with_context(|| format!("in method {}.{}", entry.name, method.name))?;
                let returns = resolver
                    .resolve(&method.returns)
                    .with_context(|| format!("in method {}.{}", entry.name, method.name))?;
                let mut signature = MethodSignature::new(method.name.clone(), &parameters, returns)
                    .with_visibility(method.visibility);
                if method.is_static {
                    signature = signature.into_static();
                }
                info = info.with_method(signature);
            }
            for field in &entry.fields {
                let ty = resolver
                    .resolve(&field.ty)
                    .with_context(|| format!("in field {}.{}", entry.name, field.name))?;
                let mut info_field =
                    FieldInfo::new(field.name.clone(), ty).with_visibility(field.visibility);
                if field.is_static {
                    info_field = info_field.into_static();
                }
                info = info.with_field(info_field);
            }
            for name in &entry.default_members {
                info = info.with_default_member(name.clone());
            }
            let ty = env.register_type(info);
            debug!(name = %entry.name, type_id = ty.0, "registered host type");
        }

        let mut builder = ResolutionContext::builder()
            .case_sensitivity(
                case_sensitivity
                    .unwrap_or_else(|| CaseSensitivity::from_flag(!self.case_insensitive)),
            )
            .with_slot_map(self.slot_map.iter().copied());
        if let Some(owner) = &self.owner {
            builder = builder.with_owner(resolver.resolve(owner).context("in owner type")?);
        }
        for identifier in &self.identifiers {
            builder = match &identifier.ty {
                Some(ty) => {
                    let ty = resolver
                        .resolve(ty)
                        .with_context(|| format!("in identifier {}", identifier.name))?;
                    builder.declare(identifier.name.clone(), ty)
                }
                None => builder.declare_untyped(identifier.name.clone()),
            };
        }
        for import in &self.imports {
            let ty = resolver.resolve(&import.ty).context("in import")?;
            builder = match &import.alias {
                Some(alias) => builder.import_namespace(alias.clone(), ty),
                None => builder.import_type(ty),
            };
        }

        Ok((env, builder.build()))
    }
}

struct TypeRefResolver<'a> {
    env: &'a HostEnvironment,
    declared: &'a FxHashSet<&'a str>,
}

impl TypeRefResolver<'_> {
    fn resolve(&self, reference: &str) -> Result<TypeId> {
        let (element, ranks) = split_array_suffixes(reference.trim())?;
        let catalog = self.env.catalog();
        let mut ty = match catalog
            .lookup_builtin(element)
            .or_else(|| catalog.lookup_by_qualified_name(element))
        {
            Some(ty) => ty,
            // Declared later in the same file; interning now gives the id
            // registration will reuse.
            None if self.declared.contains(element) => self.env.interner().host(element),
            None => bail!("unknown type '{element}'"),
        };
        for rank in ranks {
            ty = self.env.interner().array(ty, rank);
        }
        Ok(ty)
    }
}

#[cfg(test)]
#[path = "tests/host_file_tests.rs"]
mod tests;
