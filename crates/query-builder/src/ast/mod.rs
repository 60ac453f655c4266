//! Defines the AST for the statements a data-access adapter issues.

pub mod common;
pub mod mutate;
pub mod select;
