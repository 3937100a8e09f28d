#![allow(clippy::module_inception)]

use std::fmt::Display;

use crate::{ast::ast::Program, errors::diagnostics::DiagnosticSink};

pub mod ast;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;

extern crate regex;

/// A 1-based line/column pair pointing at the first character of a lexeme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    pub line: u32,
    pub column: u32,
}

impl Position {
    pub fn new(line: u32, column: u32) -> Self {
        Position { line, column }
    }

    pub fn start() -> Self {
        Position { line: 1, column: 1 }
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Returns the text of the 1-based `line` in `source`, without its line ending.
pub fn get_line_at_position(source: &str, line: u32) -> Option<&str> {
    if line == 0 {
        return None;
    }

    source
        .split('\n')
        .nth((line - 1) as usize)
        .map(|text| text.strip_suffix('\r').unwrap_or(text))
}

/// Runs the lexer and then the parser over `source`.
///
/// Stops after the lexer if it hit a fatal error. Every diagnostic from
/// either phase goes to `sink`; `None` means at least one was reported.
pub fn parse_source(
    source: &str,
    source_name: Option<String>,
    sink: &mut dyn DiagnosticSink,
) -> Option<Program> {
    let file = source_name.unwrap_or_else(|| String::from(lexer::lexer::DEFAULT_SOURCE_NAME));
    let (tokens, complete) =
        lexer::lexer::tokenize_with_sink(source, Some(file.clone()), None, sink);

    if !complete {
        return None;
    }

    parser::parser::parse_with_sink(tokens, &file, sink)
}
