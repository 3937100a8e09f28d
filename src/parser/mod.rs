//! Parser module for building an Abstract Syntax Tree (AST).
//!
//! This module contains the parser that transforms a stream of tokens
//! into an Abstract Syntax Tree. It uses a Pratt parser for expressions
//! with proper operator precedence and handles:
//!
//! - Statement parsing (variable declarations, functions, control flow)
//! - Expression parsing (binary ops, calls, indexing, literals)
//! - Type annotations
//! - Error recovery and reporting
//!
//! Expression parsing is driven by a single immutable table of prefix
//! (NUD) and infix (LED) handlers with a binding power per token kind.

pub mod expr;
pub mod lookups;
pub mod parser;
pub mod stmt;
pub mod types;

#[cfg(test)]
mod tests;
