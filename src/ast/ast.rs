use crate::Position;

use super::{
    expressions::{
        ArrayExpr, AssignExpr, BinaryExpr, CallExpr, IndexExpr, LiteralExpr, UnaryExpr,
        VariableExpr,
    },
    statements::{
        BlockStmt, ExpressionStmt, FnDeclStmt, IfStmt, ReturnStmt, VarDeclStmt, WhileStmt,
    },
};

/// Statement Types
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum StmtType {
    ExpressionStmt,
    VarDeclStmt,
    FnDeclStmt,
    IfStmt,
    WhileStmt,
    ReturnStmt,
    BlockStmt,
}

/// Statement
///
/// Every statement exclusively owns its children; dropping a statement
/// releases the whole subtree once.
#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    Expression(ExpressionStmt),
    VarDecl(VarDeclStmt),
    FnDecl(FnDeclStmt),
    If(IfStmt),
    While(WhileStmt),
    Return(ReturnStmt),
    Block(BlockStmt),
}

impl Stmt {
    /// Returns the type of the statement.
    pub fn get_stmt_type(&self) -> StmtType {
        match self {
            Stmt::Expression(_) => StmtType::ExpressionStmt,
            Stmt::VarDecl(_) => StmtType::VarDeclStmt,
            Stmt::FnDecl(_) => StmtType::FnDeclStmt,
            Stmt::If(_) => StmtType::IfStmt,
            Stmt::While(_) => StmtType::WhileStmt,
            Stmt::Return(_) => StmtType::ReturnStmt,
            Stmt::Block(_) => StmtType::BlockStmt,
        }
    }

    /// Returns the position of the token that introduced the statement.
    pub fn get_position(&self) -> Position {
        match self {
            Stmt::Expression(stmt) => stmt.position,
            Stmt::VarDecl(stmt) => stmt.position,
            Stmt::FnDecl(stmt) => stmt.position,
            Stmt::If(stmt) => stmt.position,
            Stmt::While(stmt) => stmt.position,
            Stmt::Return(stmt) => stmt.position,
            Stmt::Block(stmt) => stmt.position,
        }
    }
}

/// Expression Types
///
/// Defines the various kinds of expressions in the AST.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum ExprType {
    Literal,
    Variable,
    Binary,
    Unary,
    Call,
    Index,
    Array,
    Assign,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Literal(LiteralExpr),
    Variable(VariableExpr),
    Binary(BinaryExpr),
    Unary(UnaryExpr),
    Call(CallExpr),
    Index(IndexExpr),
    Array(ArrayExpr),
    Assign(AssignExpr),
}

impl Expr {
    /// Returns the expression type of the expression.
    pub fn get_expr_type(&self) -> ExprType {
        match self {
            Expr::Literal(_) => ExprType::Literal,
            Expr::Variable(_) => ExprType::Variable,
            Expr::Binary(_) => ExprType::Binary,
            Expr::Unary(_) => ExprType::Unary,
            Expr::Call(_) => ExprType::Call,
            Expr::Index(_) => ExprType::Index,
            Expr::Array(_) => ExprType::Array,
            Expr::Assign(_) => ExprType::Assign,
        }
    }

    /// Returns the position of the token that produced the expression.
    pub fn get_position(&self) -> Position {
        match self {
            Expr::Literal(expr) => expr.position,
            Expr::Variable(expr) => expr.position,
            Expr::Binary(expr) => expr.position,
            Expr::Unary(expr) => expr.position,
            Expr::Call(expr) => expr.position,
            Expr::Index(expr) => expr.position,
            Expr::Array(expr) => expr.position,
            Expr::Assign(expr) => expr.position,
        }
    }
}

/// The root of a parsed source file.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Program {
    pub statements: Vec<Stmt>,
}

impl Program {
    pub fn new(statements: Vec<Stmt>) -> Self {
        Program { statements }
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Stmt> {
        self.statements.iter()
    }
}
