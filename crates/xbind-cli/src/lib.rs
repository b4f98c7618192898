//! Command-line front end: load a host description and an expression tree,
//! bind the tree and print the result.

pub mod args;
pub mod driver;
pub mod host_file;
