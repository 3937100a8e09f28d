//! Type annotation parsing.
//!
//! Annotations are a single TYPE token (`int`, `float`, `string`, ...).
//! The parser keeps the spelling as written; nothing is resolved here.

use crate::{errors::errors::Error, lexer::tokens::TokenKind};

use super::parser::Parser;

/// Consumes a TYPE token and returns its spelling.
pub fn parse_type(parser: &mut Parser, message: &str) -> Result<String, Error> {
    Ok(parser.expect(TokenKind::Type, message)?.value)
}

/// Parses `: TYPE` if the next token is a colon.
pub fn parse_type_annotation(parser: &mut Parser, message: &str) -> Result<Option<String>, Error> {
    if !parser.advance_if(TokenKind::Colon) {
        return Ok(None);
    }

    Ok(Some(parse_type(parser, message)?))
}
