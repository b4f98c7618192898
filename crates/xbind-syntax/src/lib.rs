//! Untyped expression syntax tree.
//!
//! The tree is produced by a parser outside this workspace and handed to the
//! binder as-is. Nodes are immutable; the binder never rewrites them.

mod node;
mod token;

pub use node::{Literal, SyntaxNode};
pub use token::OperatorToken;
