//! Error types and error reporting for the front end.
//!
//! This module defines the errors raised while lexing and parsing and the
//! side channel they are reported through. It includes:
//!
//! - Error structures with source position information
//! - Specific error variants for the lexical and syntax phases
//! - The diagnostic sink trait and the caret renderer
//! - Helpful error messages and suggestions

pub mod diagnostics;
pub mod errors;
