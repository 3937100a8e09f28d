//! Parser implementation for building the Abstract Syntax Tree.
//!
//! This module contains the main Parser struct and the parse entry points.
//! Expressions go through the Pratt handlers in `expr`, driven by the
//! shared rule table in `lookups`; statements are parsed by recursive
//! descent in `stmt`.
//!
//! Errors use panic mode: the first error in a malformed region is recorded
//! and switches the parser to `Panicking`, which mutes every later report
//! until `synchronize` finds the start of the next declaration.

use std::rc::Rc;

use crate::{
    ast::ast::Program,
    errors::{
        diagnostics::DiagnosticSink,
        errors::{Error, ErrorImpl},
    },
    lexer::{
        lexer::DEFAULT_SOURCE_DIRECTORY,
        tokens::{Token, TokenKind},
    },
    Position,
};

use super::stmt::parse_declaration;

/// Nesting accepted by `parse` before `NestingTooDeep`.
pub const DEFAULT_MAX_NESTING_DEPTH: usize = 512;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParserState {
    Normal,
    Panicking,
}

/// The main parser structure that maintains parsing state.
///
/// This struct owns the token stream (minus comments) and tracks the
/// current position in it, the panic-mode state and every error recorded
/// so far.
pub struct Parser {
    /// The list of tokens to parse, always terminated by EOF
    tokens: Vec<Token>,
    /// Current position in the token stream
    pos: usize,
    /// The name of the source file being parsed
    file: Rc<String>,
    state: ParserState,
    /// Errors recorded outside of panic mode, in source order
    errors: Vec<Error>,
    /// Current statement/expression nesting
    depth: usize,
    /// The maximum allowed nesting depth
    max_depth: usize,
}

impl Parser {
    /// Creates a new Parser instance.
    ///
    /// # Arguments
    ///
    /// * `tokens` - Vector of tokens to parse. COMMENT tokens are dropped and
    ///   an EOF token is appended if the sequence lacks one.
    /// * `file` - Reference-counted string containing the source file name
    /// * `max_depth` - Deepest statement/expression nesting accepted before
    ///   `NestingTooDeep`
    pub fn new(tokens: Vec<Token>, file: Rc<String>, max_depth: usize) -> Self {
        let mut tokens: Vec<Token> = tokens
            .into_iter()
            .filter(|token| token.kind != TokenKind::Comment)
            .collect();

        if tokens.last().map(|token| token.kind) != Some(TokenKind::EOF) {
            let position = tokens
                .last()
                .map(|token| token.position)
                .unwrap_or_else(Position::start);

            tokens.push(Token {
                kind: TokenKind::EOF,
                value: String::new(),
                position,
                file: Rc::clone(&file),
                directory: Rc::new(String::from(DEFAULT_SOURCE_DIRECTORY)),
            });
        }

        Parser {
            tokens,
            pos: 0,
            file,
            state: ParserState::Normal,
            errors: vec![],
            depth: 0,
            max_depth,
        }
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        &self.tokens[self.pos]
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.current_token().kind
    }

    /// Returns the most recently consumed token, if any.
    pub fn previous(&self) -> Option<&Token> {
        self.pos.checked_sub(1).map(|index| &self.tokens[index])
    }

    /// Advances to the next token and returns the one just consumed.
    ///
    /// At EOF nothing is consumed and the EOF token is returned.
    pub fn advance(&mut self) -> &Token {
        if self.at_end() {
            return self.current_token();
        }

        self.pos += 1;
        &self.tokens[self.pos - 1]
    }

    /// Whether the current token is `kind`. Always false at EOF.
    pub fn check(&self, kind: TokenKind) -> bool {
        !self.at_end() && self.current_token_kind() == kind
    }

    /// Consumes the current token if it is `kind`.
    pub fn advance_if(&mut self, kind: TokenKind) -> bool {
        if !self.check(kind) {
            return false;
        }

        self.advance();
        true
    }

    /// Expects a token of the specified kind.
    ///
    /// # Arguments
    ///
    /// * `expected_kind` - The expected TokenKind
    /// * `message` - What was expected, used in the error on mismatch
    ///
    /// # Returns
    ///
    /// Returns Ok(Token) if the current token matches, otherwise records and
    /// returns an UnexpectedToken error.
    pub fn expect(&mut self, expected_kind: TokenKind, message: &str) -> Result<Token, Error> {
        if self.check(expected_kind) {
            return Ok(self.advance().clone());
        }

        let token = describe_token(self.current_token());
        Err(self.error_at_current(ErrorImpl::UnexpectedToken {
            token,
            message: String::from(message),
        }))
    }

    pub fn at_end(&self) -> bool {
        self.current_token_kind() == TokenKind::EOF
    }

    /// Index of the current token; only ever grows.
    pub fn cursor(&self) -> usize {
        self.pos
    }

    /// Returns the position of the current token.
    pub fn get_position(&self) -> Position {
        self.current_token().position
    }

    pub fn state(&self) -> ParserState {
        self.state
    }

    pub fn had_error(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Builds an error located at `token` and records it unless already panicking.
    ///
    /// Missing-token errors raised on an ILLEGAL token become `InvalidChar`.
    pub fn error_at(&mut self, token: &Token, error: ErrorImpl) -> Error {
        let error = match error {
            ErrorImpl::ExpectedExpression { .. } | ErrorImpl::UnexpectedToken { .. }
                if token.kind == TokenKind::Illegal =>
            {
                ErrorImpl::InvalidChar {
                    token: token.value.clone(),
                }
            }
            other => other,
        };
        let error = Error::new(error, token.position, Rc::clone(&self.file));

        if self.state == ParserState::Normal {
            self.state = ParserState::Panicking;
            self.errors.push(error.clone());
        }

        error
    }

    pub fn error_at_current(&mut self, error: ErrorImpl) -> Error {
        let token = self.current_token().clone();
        self.error_at(&token, error)
    }

    /// Leaves panic mode and skips to a likely declaration boundary: just
    /// past a `;`, or at a token that starts a declaration, or at EOF.
    pub fn synchronize(&mut self) {
        self.state = ParserState::Normal;

        while !self.at_end() {
            if self.previous().map(|token| token.kind) == Some(TokenKind::Semicolon) {
                return;
            }

            if self.current_token_kind().starts_declaration() {
                return;
            }

            self.advance();
        }
    }

    /// Runs `parse_fn` one nesting level deeper, failing once the limit is reached.
    pub fn nested<T>(
        &mut self,
        parse_fn: impl FnOnce(&mut Parser) -> Result<T, Error>,
    ) -> Result<T, Error> {
        if self.depth >= self.max_depth {
            let limit = self.max_depth;
            return Err(self.error_at_current(ErrorImpl::NestingTooDeep { limit }));
        }

        self.depth += 1;
        let result = parse_fn(self);
        self.depth -= 1;

        result
    }
}

/// Token text as shown in error messages.
pub fn describe_token(token: &Token) -> String {
    match token.kind {
        TokenKind::EOF => String::from("end of input"),
        _ => token.value.clone(),
    }
}

/// Parses a stream of tokens into a Program.
///
/// This is the main entry point for parsing. It parses declarations until
/// EOF, synchronizing after every failed one so that each malformed region
/// is reported once.
///
/// # Returns
///
/// The program if no error was recorded, otherwise every recorded error.
/// A tree built alongside an error is discarded.
pub fn parse(tokens: Vec<Token>, file: Rc<String>) -> Result<Program, Vec<Error>> {
    parse_with_max_depth(tokens, file, DEFAULT_MAX_NESTING_DEPTH)
}

/// Same as `parse` with a caller-chosen nesting limit.
pub fn parse_with_max_depth(
    tokens: Vec<Token>,
    file: Rc<String>,
    max_depth: usize,
) -> Result<Program, Vec<Error>> {
    let mut parser = Parser::new(tokens, file, max_depth);
    let mut statements = vec![];

    while !parser.at_end() {
        if let Ok(stmt) = parse_declaration(&mut parser) {
            statements.push(stmt);
        }

        if parser.state() == ParserState::Panicking {
            parser.synchronize();
        }
    }

    if parser.had_error() {
        return Err(parser.errors);
    }

    Ok(Program::new(statements))
}

/// Same as `parse`, reporting each recorded error to `sink`.
pub fn parse_with_sink(
    tokens: Vec<Token>,
    file: &str,
    sink: &mut dyn DiagnosticSink,
) -> Option<Program> {
    match parse(tokens, Rc::new(String::from(file))) {
        Ok(program) => Some(program),
        Err(errors) => {
            for error in &errors {
                sink.report(error);
            }
            None
        }
    }
}
