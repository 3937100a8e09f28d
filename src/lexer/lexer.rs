use std::rc::Rc;

use lazy_static::lazy_static;
use regex::Regex;

use crate::{
    errors::{
        diagnostics::DiagnosticSink,
        errors::{Error, ErrorImpl},
    },
    Position, MK_TOKEN,
};

use super::tokens::{classify_word, Token, TokenKind};

pub const DEFAULT_SOURCE_NAME: &str = "unknown";
pub const DEFAULT_SOURCE_DIRECTORY: &str = ".";

lazy_static! {
    static ref WORD_PATTERN: Regex = Regex::new("^[A-Za-z_][A-Za-z0-9_]*").unwrap();
    static ref NUMBER_PATTERN: Regex = Regex::new("^[0-9]+(\\.[0-9]+)?").unwrap();
    static ref WHITESPACE_PATTERN: Regex = Regex::new("^[ \t\r\n]+").unwrap();
}

/// Cursor over one source buffer. Lives only for a single tokenization run.
pub struct Lexer<'a> {
    source: &'a str,
    tokens: Vec<Token>,
    /// Byte offset of the next unread character
    pos: usize,
    line: u32,
    column: u32,
    file: Rc<String>,
    directory: Rc<String>,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str, file: Option<String>, directory: Option<String>) -> Lexer<'a> {
        let file_name = match file {
            Some(file) => Rc::new(file),
            None => Rc::new(String::from(DEFAULT_SOURCE_NAME)),
        };
        let directory = match directory {
            Some(directory) => Rc::new(directory),
            None => Rc::new(String::from(DEFAULT_SOURCE_DIRECTORY)),
        };

        Lexer {
            source,
            tokens: vec![],
            pos: 0,
            line: 1,
            column: 1,
            file: file_name,
            directory,
        }
    }

    pub fn at(&self) -> Option<char> {
        self.remainder().chars().next()
    }

    pub fn peek(&self, offset: usize) -> Option<char> {
        self.remainder().chars().nth(offset)
    }

    pub fn remainder(&self) -> &'a str {
        let source: &'a str = self.source;
        &source[self.pos..]
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    pub fn position(&self) -> Position {
        Position::new(self.line, self.column)
    }

    /// Consumes one character, keeping line and column in step with it.
    pub fn advance(&mut self) -> Option<char> {
        let ch = self.at()?;
        self.pos += ch.len_utf8();

        if ch == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }

        Some(ch)
    }

    pub fn advance_n(&mut self, n: usize) {
        for _ in 0..n {
            if self.advance().is_none() {
                break;
            }
        }
    }

    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    fn error(&self, error: ErrorImpl) -> Error {
        Error::new(error, self.position(), Rc::clone(&self.file))
    }

    /// Consumes `count` characters as a single token of `kind`.
    fn take(&mut self, kind: TokenKind, count: usize) -> Token {
        let start = self.position();
        let begin = self.pos;
        self.advance_n(count);
        let value = String::from(&self.source[begin..self.pos]);

        MK_TOKEN!(self, kind, value, start)
    }

    fn skip_whitespace(&mut self) {
        if let Some(matched) = WHITESPACE_PATTERN.find(self.remainder()) {
            // Whitespace is ASCII, so the byte length is the character count
            self.advance_n(matched.end());
        }
    }

    /// Scans the next token. Errors are fatal to the whole run.
    pub fn next_token(&mut self) -> Result<Token, Error> {
        self.skip_whitespace();

        let ch = match self.at() {
            Some(ch) => ch,
            None => return Ok(MK_TOKEN!(self, TokenKind::EOF, String::new(), self.position())),
        };

        let token = match ch {
            '+' => self.take(TokenKind::Plus, 1),
            '-' => self.take(TokenKind::Dash, 1),
            '*' => self.take(TokenKind::Star, 1),
            ';' => self.take(TokenKind::Semicolon, 1),
            ':' => self.take(TokenKind::Colon, 1),
            ',' => self.take(TokenKind::Comma, 1),
            '(' => self.take(TokenKind::OpenParen, 1),
            ')' => self.take(TokenKind::CloseParen, 1),
            '{' => self.take(TokenKind::OpenCurly, 1),
            '}' => self.take(TokenKind::CloseCurly, 1),
            '[' => self.take(TokenKind::OpenBracket, 1),
            ']' => self.take(TokenKind::CloseBracket, 1),
            '<' => self.take(TokenKind::Less, 1),
            '>' => self.take(TokenKind::Greater, 1),
            '=' if self.peek(1) == Some('=') => self.take(TokenKind::Equals, 2),
            '=' => self.take(TokenKind::Assignment, 1),
            '!' if self.peek(1) == Some('=') => self.take(TokenKind::NotEquals, 2),
            '!' => self.take(TokenKind::Not, 1),
            '/' => return self.slash_or_comment(),
            '"' | '\'' => return self.string(ch),
            '0'..='9' => self.number(),
            c if c.is_ascii_alphabetic() || c == '_' => self.word(),
            _ => self.take(TokenKind::Illegal, 1),
        };

        Ok(token)
    }

    fn number(&mut self) -> Token {
        let length = NUMBER_PATTERN
            .find(self.remainder())
            .map(|matched| matched.end())
            .unwrap_or(1);
        let kind = if self.remainder()[..length].contains('.') {
            TokenKind::Float
        } else {
            TokenKind::Integer
        };

        self.take(kind, length)
    }

    fn word(&mut self) -> Token {
        let length = WORD_PATTERN
            .find(self.remainder())
            .map(|matched| matched.end())
            .unwrap_or(1);
        let kind = classify_word(&self.remainder()[..length]);

        self.take(kind, length)
    }

    fn string(&mut self, quote: char) -> Result<Token, Error> {
        let start = self.position();
        self.advance();

        let mut value = String::new();

        while let Some(ch) = self.at() {
            if ch == quote {
                self.advance();
                return Ok(MK_TOKEN!(self, TokenKind::String, value, start));
            }

            if ch == '\\' {
                self.advance();

                let escaped = match self.at() {
                    Some(escaped) => escaped,
                    None => {
                        return Err(self.error(ErrorImpl::InvalidEscape {
                            sequence: String::from("\\"),
                        }))
                    }
                };

                let resolved = match escaped {
                    'n' => '\n',
                    't' => '\t',
                    'r' => '\r',
                    '\\' => '\\',
                    '"' => '"',
                    '\'' => '\'',
                    other => {
                        return Err(self.error(ErrorImpl::InvalidEscape {
                            sequence: format!("\\{}", other),
                        }))
                    }
                };

                value.push(resolved);
                self.advance();
                continue;
            }

            value.push(ch);
            self.advance();
        }

        Err(self.error(ErrorImpl::UnterminatedString))
    }

    fn slash_or_comment(&mut self) -> Result<Token, Error> {
        let start = self.position();

        match self.peek(1) {
            Some('/') => {
                self.advance_n(2);
                let begin = self.pos;

                while let Some(ch) = self.at() {
                    if ch == '\n' {
                        break;
                    }
                    self.advance();
                }

                let text = String::from(&self.source[begin..self.pos]);
                Ok(MK_TOKEN!(self, TokenKind::Comment, text, start))
            }
            Some('*') => {
                self.advance_n(2);
                let begin = self.pos;

                while !self.at_eof() {
                    if self.remainder().starts_with("*/") {
                        let text = String::from(&self.source[begin..self.pos]);
                        self.advance_n(2);
                        return Ok(MK_TOKEN!(self, TokenKind::Comment, text, start));
                    }
                    self.advance();
                }

                Err(self.error(ErrorImpl::UnterminatedComment))
            }
            _ => Ok(self.take(TokenKind::Slash, 1)),
        }
    }
}

/// Tokenizes `source`, reporting a fatal lexical error to `sink`.
///
/// Returns the tokens produced and whether the run completed. A complete
/// sequence always ends with the EOF token; an incomplete one stops right
/// before the offending lexeme.
pub fn tokenize_with_sink(
    source: &str,
    file: Option<String>,
    directory: Option<String>,
    sink: &mut dyn DiagnosticSink,
) -> (Vec<Token>, bool) {
    let mut lex = Lexer::new(source, file, directory);

    loop {
        match lex.next_token() {
            Ok(token) => {
                let is_eof = token.kind == TokenKind::EOF;
                lex.push(token);

                if is_eof {
                    break;
                }
            }
            Err(error) => {
                sink.report(&error);
                return (lex.tokens, false);
            }
        }
    }

    (lex.tokens, true)
}

pub fn tokenize(source: &str, file: Option<String>) -> Result<Vec<Token>, Error> {
    let mut errors: Vec<Error> = vec![];
    let (tokens, complete) = tokenize_with_sink(source, file, None, &mut errors);

    match errors.into_iter().next() {
        Some(error) if !complete => Err(error),
        _ => Ok(tokens),
    }
}
