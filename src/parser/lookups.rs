use std::collections::HashMap;

use lazy_static::lazy_static;

use crate::{ast::ast::Expr, errors::errors::Error, lexer::tokens::{Token, TokenKind}};

use super::{expr::*, parser::Parser};

/// Binding power of an infix operator, lowest first.
#[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Debug)]
pub enum BindingPower {
    None,
    Assignment,
    Or,
    And,
    Equality,
    Comparison,
    Term,
    Factor,
    Unary,
    Call,
    Primary,
}

impl BindingPower {
    /// The next tighter level. Used for the right operand of left-associative operators.
    pub fn next(self) -> BindingPower {
        match self {
            BindingPower::None => BindingPower::Assignment,
            BindingPower::Assignment => BindingPower::Or,
            BindingPower::Or => BindingPower::And,
            BindingPower::And => BindingPower::Equality,
            BindingPower::Equality => BindingPower::Comparison,
            BindingPower::Comparison => BindingPower::Term,
            BindingPower::Term => BindingPower::Factor,
            BindingPower::Factor => BindingPower::Unary,
            BindingPower::Unary => BindingPower::Call,
            BindingPower::Call | BindingPower::Primary => BindingPower::Primary,
        }
    }
}

/// Prefix handler, called with the token that was just consumed.
pub type NUDHandler = fn(&mut Parser, Token) -> Result<Expr, Error>;
/// Infix handler, called with the folded left operand and the operator just consumed.
pub type LEDHandler = fn(&mut Parser, Expr, Token) -> Result<Expr, Error>;

#[derive(Clone, Copy)]
pub struct ParseRule {
    pub prefix: Option<NUDHandler>,
    pub infix: Option<LEDHandler>,
    pub binding_power: BindingPower,
}

impl ParseRule {
    pub const NONE: ParseRule = ParseRule {
        prefix: None,
        infix: None,
        binding_power: BindingPower::None,
    };
}

/// Token kind to parse rule. Kinds that were never registered map to `ParseRule::NONE`.
pub struct ParseRules {
    rules: HashMap<TokenKind, ParseRule>,
}

impl ParseRules {
    fn new() -> Self {
        ParseRules {
            rules: HashMap::new(),
        }
    }

    /// Registers a null denotation (prefix) handler for a token.
    fn nud(&mut self, kind: TokenKind, nud_fn: NUDHandler) {
        self.rules.entry(kind).or_insert(ParseRule::NONE).prefix = Some(nud_fn);
    }

    /// Registers a left denotation (infix) handler and its binding power.
    fn led(&mut self, kind: TokenKind, binding_power: BindingPower, led_fn: LEDHandler) {
        let rule = self.rules.entry(kind).or_insert(ParseRule::NONE);
        rule.infix = Some(led_fn);
        rule.binding_power = binding_power;
    }

    pub fn get(&self, kind: TokenKind) -> ParseRule {
        self.rules.get(&kind).copied().unwrap_or(ParseRule::NONE)
    }
}

lazy_static! {
    /// Built once, never mutated, shared by every parser.
    pub static ref PARSE_RULES: ParseRules = create_token_lookups();
}

pub fn create_token_lookups() -> ParseRules {
    let mut rules = ParseRules::new();

    rules.led(TokenKind::Assignment, BindingPower::Assignment, parse_assignment_expr);

    // Logical
    rules.led(TokenKind::Or, BindingPower::Or, parse_binary_expr);
    rules.led(TokenKind::OrElse, BindingPower::Or, parse_binary_expr);
    rules.led(TokenKind::And, BindingPower::And, parse_binary_expr);

    // Equality and comparison
    rules.led(TokenKind::Equals, BindingPower::Equality, parse_binary_expr);
    rules.led(TokenKind::NotEquals, BindingPower::Equality, parse_binary_expr);
    rules.led(TokenKind::Less, BindingPower::Comparison, parse_binary_expr);
    rules.led(TokenKind::Greater, BindingPower::Comparison, parse_binary_expr);

    // Additive and multiplicative
    rules.led(TokenKind::Plus, BindingPower::Term, parse_binary_expr);
    rules.led(TokenKind::Dash, BindingPower::Term, parse_binary_expr);
    rules.led(TokenKind::Star, BindingPower::Factor, parse_binary_expr);
    rules.led(TokenKind::Slash, BindingPower::Factor, parse_binary_expr);

    // Call and index
    rules.led(TokenKind::OpenParen, BindingPower::Call, parse_call_expr);
    rules.led(TokenKind::OpenBracket, BindingPower::Call, parse_index_expr);

    // Literals and symbols
    rules.nud(TokenKind::Integer, parse_literal_expr);
    rules.nud(TokenKind::Float, parse_literal_expr);
    rules.nud(TokenKind::String, parse_literal_expr);
    rules.nud(TokenKind::True, parse_literal_expr);
    rules.nud(TokenKind::False, parse_literal_expr);
    rules.nud(TokenKind::Identifier, parse_variable_expr);

    rules.nud(TokenKind::Dash, parse_unary_expr);
    rules.nud(TokenKind::Not, parse_unary_expr);
    rules.nud(TokenKind::OpenParen, parse_grouping_expr);
    rules.nud(TokenKind::OpenBracket, parse_array_expr);

    rules
}
