//! Indented tree dump of the AST, for debugging only.
//!
//! Each nesting level adds two spaces. Labels follow the node names,
//! e.g. `Binary(+)`, `VarDecl(x: int)` or `Block(2 statements)`.

use std::fmt::Display;

use super::{
    ast::{Expr, Program, Stmt},
    expressions::LiteralValue,
};

fn push_line(out: &mut String, indent: usize, text: &str) {
    out.push_str(&"  ".repeat(indent));
    out.push_str(text);
    out.push('\n');
}

pub fn print_expr(expr: &Expr, indent: usize, out: &mut String) {
    match expr {
        Expr::Literal(literal) => {
            let value = match &literal.value {
                LiteralValue::Int(value) => value.to_string(),
                LiteralValue::Float(value) => format!("{:.6}", value),
                LiteralValue::String(value) => format!("\"{}\"", value),
                LiteralValue::Bool(value) => value.to_string(),
            };
            push_line(out, indent, &format!("Literal({})", value));
        }
        Expr::Variable(variable) => {
            push_line(out, indent, &format!("Variable({})", variable.name));
        }
        Expr::Binary(binary) => {
            push_line(out, indent, &format!("Binary({})", binary.operator.symbol()));
            print_expr(&binary.left, indent + 1, out);
            print_expr(&binary.right, indent + 1, out);
        }
        Expr::Unary(unary) => {
            push_line(out, indent, &format!("Unary({})", unary.operator.symbol()));
            print_expr(&unary.operand, indent + 1, out);
        }
        Expr::Call(call) => {
            push_line(out, indent, "Call");
            push_line(out, indent + 1, "Callee:");
            print_expr(&call.callee, indent + 2, out);
            push_line(out, indent + 1, &format!("Args({}):", call.arguments.len()));
            for argument in &call.arguments {
                print_expr(argument, indent + 2, out);
            }
        }
        Expr::Index(index) => {
            push_line(out, indent, "Index");
            push_line(out, indent + 1, "Object:");
            print_expr(&index.object, indent + 2, out);
            push_line(out, indent + 1, "Index:");
            print_expr(&index.index, indent + 2, out);
        }
        Expr::Array(array) => {
            push_line(out, indent, &format!("Array({} elements)", array.elements.len()));
            for element in &array.elements {
                print_expr(element, indent + 1, out);
            }
        }
        Expr::Assign(assign) => {
            push_line(out, indent, &format!("Assign({})", assign.name));
            print_expr(&assign.value, indent + 1, out);
        }
    }
}

pub fn print_stmt(stmt: &Stmt, indent: usize, out: &mut String) {
    match stmt {
        Stmt::Expression(stmt) => {
            push_line(out, indent, "ExprStmt");
            print_expr(&stmt.expression, indent + 1, out);
        }
        Stmt::VarDecl(decl) => {
            match &decl.explicit_type {
                Some(type_name) => push_line(
                    out,
                    indent,
                    &format!("VarDecl({}: {})", decl.identifier, type_name),
                ),
                None => push_line(out, indent, &format!("VarDecl({})", decl.identifier)),
            }
            if let Some(value) = &decl.assigned_value {
                push_line(out, indent + 1, "Initializer:");
                print_expr(value, indent + 2, out);
            }
        }
        Stmt::FnDecl(decl) => {
            push_line(out, indent, &format!("FunctionDecl({})", decl.identifier));
            push_line(out, indent + 1, &format!("Params({}):", decl.parameters.len()));
            for parameter in &decl.parameters {
                push_line(
                    out,
                    indent + 2,
                    &format!("{}: {}", parameter.name, parameter.type_name),
                );
            }
            if let Some(return_type) = &decl.return_type {
                push_line(out, indent + 1, &format!("Returns: {}", return_type));
            }
            push_line(out, indent + 1, "Body:");
            push_line(
                out,
                indent + 2,
                &format!("Block({} statements)", decl.body.body.len()),
            );
            for stmt in decl.body.iter() {
                print_stmt(stmt, indent + 3, out);
            }
        }
        Stmt::If(if_stmt) => {
            push_line(out, indent, "IfStmt");
            push_line(out, indent + 1, "Condition:");
            print_expr(&if_stmt.condition, indent + 2, out);
            push_line(out, indent + 1, "Then:");
            print_stmt(&if_stmt.then_body, indent + 2, out);
            if let Some(else_body) = &if_stmt.else_body {
                push_line(out, indent + 1, "Else:");
                print_stmt(else_body, indent + 2, out);
            }
        }
        Stmt::While(while_stmt) => {
            push_line(out, indent, "WhileStmt");
            push_line(out, indent + 1, "Condition:");
            print_expr(&while_stmt.condition, indent + 2, out);
            push_line(out, indent + 1, "Body:");
            print_stmt(&while_stmt.body, indent + 2, out);
        }
        Stmt::Return(stmt) => {
            push_line(out, indent, "ReturnStmt");
            if let Some(value) = &stmt.value {
                print_expr(value, indent + 1, out);
            }
        }
        Stmt::Block(block) => {
            push_line(out, indent, &format!("Block({} statements)", block.body.len()));
            for stmt in block.iter() {
                print_stmt(stmt, indent + 1, out);
            }
        }
    }
}

impl Expr {
    pub fn to_tree_string(&self) -> String {
        let mut out = String::new();
        print_expr(self, 0, &mut out);
        out
    }
}

impl Stmt {
    pub fn to_tree_string(&self) -> String {
        let mut out = String::new();
        print_stmt(self, 0, &mut out);
        out
    }
}

impl Program {
    pub fn to_tree_string(&self) -> String {
        let mut out = String::new();
        push_line(&mut out, 0, &format!("Program({} statements)", self.statements.len()));
        for stmt in self.iter() {
            print_stmt(stmt, 1, &mut out);
        }
        out
    }
}

impl Display for Program {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_tree_string())
    }
}
