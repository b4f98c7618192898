//! Load, bind, render.

use crate::args::{CliArgs, OutputFormat};
use crate::host_file::HostDescription;
use anyhow::{Context, Result};
use serde::Serialize;
use std::io::Read;
use tracing::info;
use xbind_binder::format::format_bound_tree;
use xbind_binder::{BoundExpr, resolve};
use xbind_common::CaseSensitivity;
use xbind_solver::{TypeDatabase, TypeId};
use xbind_syntax::SyntaxNode;

/// JSON output: the bound tree plus the names of the types it mentions.
#[derive(Serialize)]
struct JsonReport<'a> {
    #[serde(rename = "type")]
    ty: String,
    /// Indexed by `TypeId`.
    types: Vec<String>,
    tree: &'a BoundExpr,
}

/// Run the CLI end to end and return the text to print.
pub fn run(args: &CliArgs) -> Result<String> {
    let host = HostDescription::load(&args.host)?;
    let expr_text = if args.expr_from_stdin() {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("failed to read expression from stdin")?;
        text
    } else {
        std::fs::read_to_string(&args.expr)
            .with_context(|| format!("failed to read expression {}", args.expr.display()))?
    };
    let case_override = args.case_insensitive.then_some(CaseSensitivity::Insensitive);
    bind_text(&host, &expr_text, case_override, args.format)
}

/// Bind an expression given as JSON against an already loaded host.
pub fn bind_text(
    host: &HostDescription,
    expr_json: &str,
    case_sensitivity: Option<CaseSensitivity>,
    format: OutputFormat,
) -> Result<String> {
    let ast: SyntaxNode =
        serde_json::from_str(expr_json).context("failed to parse expression JSON")?;
    let (env, ctx) = host.build(case_sensitivity)?;
    info!(expression = %ast, "binding");

    let bound = resolve(&ast, &env, &ctx).with_context(|| format!("cannot bind `{ast}`"))?;

    match format {
        OutputFormat::Tree => Ok(format_bound_tree(env.interner(), &bound)),
        OutputFormat::Json => {
            let types = (0..env.interner().len())
                .map(|id| {
                    let id = u32::try_from(id).context("type table too large")?;
                    Ok(env.interner().type_name(TypeId(id)))
                })
                .collect::<Result<Vec<_>>>()?;
            let report = JsonReport {
                ty: env.interner().type_name(bound.ty()),
                types,
                tree: &bound,
            };
            serde_json::to_string_pretty(&report).context("failed to serialize bound tree")
        }
    }
}

#[cfg(test)]
#[path = "tests/driver_tests.rs"]
mod tests;
