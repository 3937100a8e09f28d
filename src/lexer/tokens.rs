use lazy_static::lazy_static;
use std::{
    collections::{HashMap, HashSet},
    fmt::Display,
    rc::Rc,
};

use crate::Position;

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("abeg", TokenKind::Abeg);
        map.insert("oya", TokenKind::Oya);
        map.insert("waka", TokenKind::Waka);
        map.insert("comot", TokenKind::Comot);
        map.insert("abi", TokenKind::Abi);
        map.insert("naso", TokenKind::Naso);
        map.insert("true", TokenKind::True);
        map.insert("false", TokenKind::False);
        map.insert("and", TokenKind::And);
        map.insert("or", TokenKind::Or);
        map.insert("orelse", TokenKind::OrElse);
        map
    };
    pub static ref TYPE_NAMES: HashSet<&'static str> = {
        ["int", "float", "string", "bool", "void", "any", "error", "interface"]
            .into_iter()
            .collect()
    };
}

/// Classifies a scanned word: keywords first, then type names, otherwise an identifier.
pub fn classify_word(word: &str) -> TokenKind {
    if let Some(kind) = RESERVED_LOOKUP.get(word) {
        *kind
    } else if TYPE_NAMES.contains(word) {
        TokenKind::Type
    } else {
        TokenKind::Identifier
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    Illegal,
    EOF,
    Comment,

    Identifier,
    Integer,
    Float,
    String,

    Assignment, // =
    Plus,
    Dash,
    Star,
    Slash,
    Not, // !

    Equals,    // ==
    NotEquals, // !=
    Less,
    Greater,

    Comma,
    Semicolon,
    Colon,
    OpenParen,
    CloseParen,
    OpenCurly,
    CloseCurly,
    OpenBracket,
    CloseBracket,

    // Reserved
    Abeg,  // variable declaration
    Oya,   // function declaration
    Waka,  // while
    Comot, // return
    Abi,   // if
    Naso,  // else
    True,
    False,
    And,
    Or,
    OrElse,

    Type, // int, float, string, bool, void, any, error, interface
}

impl TokenKind {
    /// Stable upper-case name used in diagnostics and debug output.
    pub fn name(&self) -> &'static str {
        match self {
            TokenKind::Illegal => "ILLEGAL",
            TokenKind::EOF => "EOF",
            TokenKind::Comment => "COMMENT",
            TokenKind::Identifier => "IDENT",
            TokenKind::Integer => "INTEGER",
            TokenKind::Float => "FLOAT",
            TokenKind::String => "STRING",
            TokenKind::Assignment => "ASSIGN",
            TokenKind::Plus => "PLUS",
            TokenKind::Dash => "MINUS",
            TokenKind::Star => "ASTERISK",
            TokenKind::Slash => "SLASH",
            TokenKind::Not => "BANG",
            TokenKind::Equals => "EQUAL",
            TokenKind::NotEquals => "NOT_EQUAL",
            TokenKind::Less => "LESS_THAN",
            TokenKind::Greater => "GREATER_THAN",
            TokenKind::Comma => "COMMA",
            TokenKind::Semicolon => "SEMICOLON",
            TokenKind::Colon => "COLON",
            TokenKind::OpenParen => "LPAREN",
            TokenKind::CloseParen => "RPAREN",
            TokenKind::OpenCurly => "LBRACE",
            TokenKind::CloseCurly => "RBRACE",
            TokenKind::OpenBracket => "LBRACKET",
            TokenKind::CloseBracket => "RBRACKET",
            TokenKind::Abeg => "ABEG",
            TokenKind::Oya => "OYA",
            TokenKind::Waka => "WAKA",
            TokenKind::Comot => "COMOT",
            TokenKind::Abi => "ABI",
            TokenKind::Naso => "NASO",
            TokenKind::True => "TRUE",
            TokenKind::False => "FALSE",
            TokenKind::And => "AND",
            TokenKind::Or => "OR",
            TokenKind::OrElse => "OR_ELSE",
            TokenKind::Type => "TYPE",
        }
    }

    /// Operator spelling, as printed in the AST dump. `?` for non-operators.
    pub fn symbol(&self) -> &'static str {
        match self {
            TokenKind::Plus => "+",
            TokenKind::Dash => "-",
            TokenKind::Star => "*",
            TokenKind::Slash => "/",
            TokenKind::Not => "!",
            TokenKind::Equals => "==",
            TokenKind::NotEquals => "!=",
            TokenKind::Less => "<",
            TokenKind::Greater => ">",
            TokenKind::And => "and",
            TokenKind::Or => "or",
            TokenKind::OrElse => "orelse",
            TokenKind::Assignment => "=",
            _ => "?",
        }
    }

    /// Whether this token starts a declaration or statement that recovery can resume at.
    pub fn starts_declaration(&self) -> bool {
        matches!(
            self,
            TokenKind::Abeg
                | TokenKind::Oya
                | TokenKind::Waka
                | TokenKind::Abi
                | TokenKind::Comot
                | TokenKind::Type
        )
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// One lexeme. Owns its text, so it outlives the source buffer it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    pub position: Position,
    pub file: Rc<String>,
    pub directory: Rc<String>,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {:?} at {}:{}",
            self.kind, self.value, self.file, self.position
        )
    }
}
