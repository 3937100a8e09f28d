use crate::{lexer::tokens::TokenKind, Position};

use super::ast::Expr;

// LITERALS

#[derive(Debug, Clone, PartialEq)]
pub enum LiteralValue {
    Int(i64),
    Float(f64),
    String(String),
    Bool(bool),
}

/// Literal Expression
/// Represents an integer, float, string or boolean literal in the AST.
#[derive(Debug, Clone, PartialEq)]
pub struct LiteralExpr {
    pub value: LiteralValue,
    pub position: Position,
}

/// Variable Expression
/// Represents a bare identifier in the AST. This includes functions.
#[derive(Debug, Clone, PartialEq)]
pub struct VariableExpr {
    pub name: String,
    pub position: Position,
}

// COMPLEX

/// Binary Expression
/// Represents a binary operation between two expressions in the AST.
///
/// The operator is one of the arithmetic, comparison, equality or logical
/// token kinds.
#[derive(Debug, Clone, PartialEq)]
pub struct BinaryExpr {
    pub left: Box<Expr>,
    pub operator: TokenKind,
    pub right: Box<Expr>,
    pub position: Position,
}

/// Unary Expression
/// Represents `!operand` or `-operand`.
#[derive(Debug, Clone, PartialEq)]
pub struct UnaryExpr {
    pub operator: TokenKind,
    pub operand: Box<Expr>,
    pub position: Position,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CallExpr {
    pub callee: Box<Expr>,
    pub arguments: Vec<Expr>,
    pub position: Position,
}

#[derive(Debug, Clone, PartialEq)]
pub struct IndexExpr {
    pub object: Box<Expr>,
    pub index: Box<Expr>,
    pub position: Position,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ArrayExpr {
    pub elements: Vec<Expr>,
    pub position: Position,
}

/// Assignment Expression
/// The target is always a plain variable name.
#[derive(Debug, Clone, PartialEq)]
pub struct AssignExpr {
    pub name: String,
    pub value: Box<Expr>,
    pub position: Position,
}
