/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the AST structure
///
/// Submodules:
/// - ast: Core AST sum types (`Expr`, `Stmt`, `Program`)
/// - expressions: Definitions for the expression node structs
/// - statements: Definitions for the statement node structs
/// - printer: Indented debug dump of a tree
pub mod ast;
pub mod expressions;
pub mod printer;
pub mod statements;
