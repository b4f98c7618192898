use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// CLI arguments for the xbind binary.
#[derive(Parser, Debug)]
#[command(
    name = "xbind",
    version,
    about = "Resolve an expression tree against a host type description"
)]
pub struct CliArgs {
    /// JSON host description: types, members, owner type, identifiers and
    /// imports.
    #[arg(long, value_name = "FILE")]
    pub host: PathBuf,

    /// JSON expression tree. `-` reads from stdin.
    #[arg(long, value_name = "FILE")]
    pub expr: PathBuf,

    /// Compare names ignoring case. Overrides the host description.
    #[arg(long = "case-insensitive", alias = "caseInsensitive")]
    pub case_insensitive: bool,

    /// Output format for the bound tree.
    #[arg(long, value_enum, default_value_t = OutputFormat::Tree, ignore_case = true)]
    pub format: OutputFormat,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Pretty-printed JSON with a type-name table.
    Json,
    /// Indented text, one node per line.
    Tree,
}

impl CliArgs {
    /// Whether the expression comes from stdin.
    pub fn expr_from_stdin(&self) -> bool {
        self.expr.as_os_str() == "-"
    }
}

#[cfg(test)]
#[path = "tests/args_tests.rs"]
mod tests;
