//! Unit tests for the parser module.
//!
//! This module contains tests for parsing the language constructs including:
//! - Variable and function declarations
//! - Expressions, precedence and associativity
//! - Control flow statements
//! - Error reporting and recovery

use std::rc::Rc;

use crate::{
    ast::{
        ast::{Expr, ExprType, Program, Stmt, StmtType},
        expressions::LiteralValue,
    },
    errors::errors::{Error, ErrorImpl},
    lexer::{lexer::tokenize, tokens::TokenKind},
    Position,
};

use super::parser::{parse, parse_with_max_depth, parse_with_sink, DEFAULT_MAX_NESTING_DEPTH};

fn parse_source(source: &str) -> Result<Program, Vec<Error>> {
    let tokens = tokenize(source, Some("test.soro".to_string())).unwrap();
    parse(tokens, Rc::new("test.soro".to_string()))
}

fn first_expr(program: &Program) -> &Expr {
    match &program.statements[0] {
        Stmt::Expression(stmt) => &stmt.expression,
        other => panic!("expected an expression statement, got {:?}", other),
    }
}

#[test]
fn test_parse_empty_source() {
    assert!(parse_source("").unwrap().is_empty());
    assert!(parse_source("  \n\t").unwrap().is_empty());
    assert!(parse_source("// only a comment\n/* and another */").unwrap().is_empty());
}

#[test]
fn test_parse_variable_declaration() {
    let program = parse_source("abeg x: int = 5;").unwrap();

    match &program.statements[0] {
        Stmt::VarDecl(decl) => {
            assert_eq!(decl.identifier, "x");
            assert_eq!(decl.explicit_type.as_deref(), Some("int"));
            assert!(decl.assigned_value.is_some());
            assert_eq!(decl.position, Position::new(1, 1));
        }
        other => panic!("expected a variable declaration, got {:?}", other),
    }
}

#[test]
fn test_parse_variable_declaration_variants() {
    let program = parse_source("abeg a; abeg b: string; abeg c = \"hi\";").unwrap();

    assert_eq!(program.statements.len(), 3);
    for stmt in program.iter() {
        assert_eq!(stmt.get_stmt_type(), StmtType::VarDeclStmt);
    }
}

#[test]
fn test_parse_function_declaration() {
    let program = parse_source("oya add(a: int, b: int): int { comot a + b; }").unwrap();

    match &program.statements[0] {
        Stmt::FnDecl(decl) => {
            assert_eq!(decl.identifier, "add");
            assert_eq!(decl.parameters.len(), 2);
            assert_eq!(decl.parameters[1].name, "b");
            assert_eq!(decl.parameters[1].type_name, "int");
            assert_eq!(decl.return_type.as_deref(), Some("int"));
            assert_eq!(decl.body.body.len(), 1);
            assert_eq!(decl.body.body[0].get_stmt_type(), StmtType::ReturnStmt);
        }
        other => panic!("expected a function declaration, got {:?}", other),
    }
}

#[test]
fn test_parse_function_without_parameters_or_return_type() {
    let program = parse_source("oya main() {}").unwrap();

    match &program.statements[0] {
        Stmt::FnDecl(decl) => {
            assert!(decl.parameters.is_empty());
            assert!(decl.return_type.is_none());
            assert!(decl.body.body.is_empty());
        }
        other => panic!("expected a function declaration, got {:?}", other),
    }
}

#[test]
fn test_function_body_must_be_a_block() {
    let errors = parse_source("oya f() comot 1;").unwrap_err();

    assert_eq!(errors.len(), 1);
    assert_eq!(
        errors[0].get_kind(),
        &ErrorImpl::UnexpectedToken {
            token: "comot".to_string(),
            message: "expected '{' before block".to_string(),
        }
    );
}

#[test]
fn test_parse_if_else_statement() {
    let program = parse_source("abi (x < 1) comot 1; naso { comot 2; }").unwrap();

    match &program.statements[0] {
        Stmt::If(if_stmt) => {
            assert_eq!(if_stmt.condition.get_expr_type(), ExprType::Binary);
            assert_eq!(if_stmt.then_body.get_stmt_type(), StmtType::ReturnStmt);
            assert_eq!(
                if_stmt.else_body.as_ref().map(|stmt| stmt.get_stmt_type()),
                Some(StmtType::BlockStmt)
            );
        }
        other => panic!("expected an if statement, got {:?}", other),
    }
}

#[test]
fn test_dangling_else_binds_to_nearest_if() {
    let program = parse_source("abi (a) abi (b) x; naso y;").unwrap();

    match &program.statements[0] {
        Stmt::If(outer) => {
            assert!(outer.else_body.is_none());
            match outer.then_body.as_ref() {
                Stmt::If(inner) => assert!(inner.else_body.is_some()),
                other => panic!("expected a nested if statement, got {:?}", other),
            }
        }
        other => panic!("expected an if statement, got {:?}", other),
    }
}

#[test]
fn test_parse_while_statement() {
    let program = parse_source("waka (i < 10) { i = i + 1; }").unwrap();

    match &program.statements[0] {
        Stmt::While(while_stmt) => {
            assert_eq!(while_stmt.condition.get_expr_type(), ExprType::Binary);
            assert_eq!(while_stmt.body.get_stmt_type(), StmtType::BlockStmt);
        }
        other => panic!("expected a while statement, got {:?}", other),
    }
}

#[test]
fn test_parse_return_statement() {
    let program = parse_source("comot; comot x;").unwrap();

    match (&program.statements[0], &program.statements[1]) {
        (Stmt::Return(empty), Stmt::Return(valued)) => {
            assert!(empty.value.is_none());
            assert!(valued.value.is_some());
        }
        other => panic!("expected two return statements, got {:?}", other),
    }
}

#[test]
fn test_precedence() {
    let program = parse_source("2 + 3 * 4;").unwrap();

    assert_eq!(
        program.to_tree_string(),
        "Program(1 statements)\n  ExprStmt\n    Binary(+)\n      Literal(2)\n      Binary(*)\n        Literal(3)\n        Literal(4)\n"
    );
}

#[test]
fn test_grouping_overrides_precedence() {
    let program = parse_source("(2 + 3) * 4;").unwrap();

    match first_expr(&program) {
        Expr::Binary(binary) => {
            assert_eq!(binary.operator, TokenKind::Star);
            assert_eq!(binary.left.get_expr_type(), ExprType::Binary);
        }
        other => panic!("expected a binary expression, got {:?}", other),
    }
}

#[test]
fn test_binary_operators_are_left_associative() {
    let program = parse_source("1 - 2 - 3;").unwrap();

    match first_expr(&program) {
        Expr::Binary(outer) => {
            assert_eq!(outer.operator, TokenKind::Dash);
            assert_eq!(outer.left.get_expr_type(), ExprType::Binary);
            assert_eq!(outer.right.get_expr_type(), ExprType::Literal);
        }
        other => panic!("expected a binary expression, got {:?}", other),
    }
}

#[test]
fn test_assignment_is_right_associative() {
    let program = parse_source("a = b = 1;").unwrap();

    assert_eq!(
        first_expr(&program).to_tree_string(),
        "Assign(a)\n  Assign(b)\n    Literal(1)\n"
    );
}

#[test]
fn test_logical_precedence() {
    let program = parse_source("a or b and c == d;").unwrap();

    match first_expr(&program) {
        Expr::Binary(or) => {
            assert_eq!(or.operator, TokenKind::Or);
            match or.right.as_ref() {
                Expr::Binary(and) => {
                    assert_eq!(and.operator, TokenKind::And);
                    assert_eq!(and.right.get_expr_type(), ExprType::Binary);
                }
                other => panic!("expected an and expression, got {:?}", other),
            }
        }
        other => panic!("expected an or expression, got {:?}", other),
    }

    let program = parse_source("a orelse b;").unwrap();
    match first_expr(&program) {
        Expr::Binary(binary) => assert_eq!(binary.operator, TokenKind::OrElse),
        other => panic!("expected a binary expression, got {:?}", other),
    }
}

#[test]
fn test_unary_binds_tighter_than_factor() {
    let program = parse_source("-a * !!b;").unwrap();

    assert_eq!(
        first_expr(&program).to_tree_string(),
        "Binary(*)\n  Unary(-)\n    Variable(a)\n  Unary(!)\n    Unary(!)\n      Variable(b)\n"
    );
}

#[test]
fn test_literals() {
    let program = parse_source("1; 2.5; \"s\"; true; false;").unwrap();
    let values: Vec<LiteralValue> = program
        .iter()
        .map(|stmt| match stmt {
            Stmt::Expression(stmt) => match &stmt.expression {
                Expr::Literal(literal) => literal.value.clone(),
                other => panic!("expected a literal, got {:?}", other),
            },
            other => panic!("expected an expression statement, got {:?}", other),
        })
        .collect();

    assert_eq!(
        values,
        vec![
            LiteralValue::Int(1),
            LiteralValue::Float(2.5),
            LiteralValue::String("s".to_string()),
            LiteralValue::Bool(true),
            LiteralValue::Bool(false),
        ]
    );
}

#[test]
fn test_integer_overflow() {
    let errors = parse_source("99999999999999999999;").unwrap_err();

    assert_eq!(errors.len(), 1);
    assert_eq!(
        errors[0].get_kind(),
        &ErrorImpl::NumberParseError {
            token: "99999999999999999999".to_string()
        }
    );
}

#[test]
fn test_call_index_and_array() {
    let program = parse_source("f(x)(y, 2)[0]; [];").unwrap();

    assert_eq!(
        first_expr(&program).to_tree_string(),
        "Index\n  Object:\n    Call\n      Callee:\n        Call\n          Callee:\n            Variable(f)\n          Args(1):\n            Variable(x)\n      Args(2):\n        Variable(y)\n        Literal(2)\n  Index:\n    Literal(0)\n"
    );

    match &program.statements[1] {
        Stmt::Expression(stmt) => match &stmt.expression {
            Expr::Array(array) => assert!(array.elements.is_empty()),
            other => panic!("expected an array, got {:?}", other),
        },
        other => panic!("expected an expression statement, got {:?}", other),
    }
}

#[test]
fn test_comments_are_ignored() {
    let program = parse_source("// leading\nabeg /* inline */ x = 1; // trailing").unwrap();

    assert_eq!(program.statements.len(), 1);
}

#[test]
fn test_missing_semicolon_at_eof() {
    let errors = parse_source("abeg x = 1").unwrap_err();

    assert_eq!(errors.len(), 1);
    assert_eq!(
        errors[0].get_kind(),
        &ErrorImpl::UnexpectedToken {
            token: "end of input".to_string(),
            message: "expected ';' after variable declaration".to_string(),
        }
    );
    assert_eq!(*errors[0].get_position(), Position::new(1, 11));
}

#[test]
fn test_unclosed_paren_at_eof() {
    let errors = parse_source("(").unwrap_err();

    assert_eq!(errors.len(), 1);
    assert_eq!(
        errors[0].get_kind(),
        &ErrorImpl::ExpectedExpression {
            token: "end of input".to_string()
        }
    );
}

#[test]
fn test_missing_close_paren_in_call() {
    let errors = parse_source("f(1, 2;").unwrap_err();

    assert_eq!(errors.len(), 1);
    assert_eq!(
        errors[0].get_kind(),
        &ErrorImpl::UnexpectedToken {
            token: ";".to_string(),
            message: "expected ')' after arguments".to_string(),
        }
    );
}

#[test]
fn test_recovery_reports_each_declaration_once() {
    let errors = parse_source("abeg = 1; abeg = 2;").unwrap_err();

    assert_eq!(errors.len(), 2);
    assert_eq!(*errors[0].get_position(), Position::new(1, 6));
    assert_eq!(*errors[1].get_position(), Position::new(1, 16));
    for error in &errors {
        assert_eq!(
            error.get_kind(),
            &ErrorImpl::UnexpectedToken {
                token: "=".to_string(),
                message: "expected variable name".to_string(),
            }
        );
    }
}

#[test]
fn test_recovery_resumes_at_keyword() {
    let errors = parse_source("x = = 1 abeg y = ;").unwrap_err();

    assert_eq!(errors.len(), 2);
    assert_eq!(*errors[0].get_position(), Position::new(1, 5));
    assert_eq!(*errors[1].get_position(), Position::new(1, 18));
}

#[test]
fn test_errors_inside_block_are_reported_once() {
    let errors = parse_source("{ abeg = 1; abeg y = 2; }").unwrap_err();

    assert_eq!(errors.len(), 1);
    assert_eq!(*errors[0].get_position(), Position::new(1, 8));
}

#[test]
fn test_invalid_assignment_target() {
    let errors = parse_source("1 = 2;").unwrap_err();

    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].get_kind(), &ErrorImpl::InvalidAssignmentTarget);
    assert_eq!(*errors[0].get_position(), Position::new(1, 3));

    let errors = parse_source("a + b = c;").unwrap_err();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].get_kind(), &ErrorImpl::InvalidAssignmentTarget);
}

#[test]
fn test_illegal_token_reports_invalid_char() {
    let errors = parse_source("abeg x = @;").unwrap_err();

    assert_eq!(errors.len(), 1);
    assert_eq!(
        errors[0].get_kind(),
        &ErrorImpl::InvalidChar {
            token: "@".to_string()
        }
    );
    assert_eq!(*errors[0].get_position(), Position::new(1, 10));
}

#[test]
fn test_deep_nesting_within_limit() {
    let source = format!("{}1{};", "(".repeat(100), ")".repeat(100));

    assert!(parse_source(&source).is_ok());
}

fn parse_limited(source: &str, max_depth: usize) -> Result<Program, Vec<Error>> {
    let tokens = tokenize(source, Some("test.soro".to_string())).unwrap();
    parse_with_max_depth(tokens, Rc::new("test.soro".to_string()), max_depth)
}

/// Runs `test` on a thread with room for the default nesting limit in debug builds.
fn with_large_stack(test: impl FnOnce() + Send + 'static) {
    std::thread::Builder::new()
        .stack_size(64 * 1024 * 1024)
        .spawn(test)
        .unwrap()
        .join()
        .unwrap();
}

#[test]
fn test_nesting_limit() {
    let source = format!("{}1{};", "(".repeat(40), ")".repeat(40));
    let errors = parse_limited(&source, 32).unwrap_err();

    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].get_kind(), &ErrorImpl::NestingTooDeep { limit: 32 });
}

#[test]
fn test_nested_blocks_limit() {
    assert!(parse_limited(&format!("{}{}", "{".repeat(32), "}".repeat(32)), 32).is_ok());

    let source = format!("{}{}", "{".repeat(40), "}".repeat(40));
    let errors = parse_limited(&source, 32).unwrap_err();

    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].get_kind(), &ErrorImpl::NestingTooDeep { limit: 32 });
}

#[test]
fn test_default_nesting_limit() {
    with_large_stack(|| {
        let depth = DEFAULT_MAX_NESTING_DEPTH + 100;
        let source = format!("{}1{};", "(".repeat(depth), ")".repeat(depth));
        let errors = parse_source(&source).unwrap_err();

        assert_eq!(errors.len(), 1);
        assert_eq!(
            errors[0].get_kind(),
            &ErrorImpl::NestingTooDeep {
                limit: DEFAULT_MAX_NESTING_DEPTH
            }
        );
    });
}

#[test]
fn test_long_else_if_chain() {
    let source = format!("abi (x) y;{} naso z;", " naso abi (x) y;".repeat(199));
    let program = parse_limited(&source, 8).unwrap();

    assert_eq!(program.statements.len(), 1);

    let mut links = 0;
    let mut stmt = &program.statements[0];
    while let Stmt::If(if_stmt) = stmt {
        links += 1;
        match &if_stmt.else_body {
            Some(else_body) => stmt = &**else_body,
            None => panic!("chain ended without the final else"),
        }
    }

    assert_eq!(links, 200);
    assert_eq!(stmt.get_stmt_type(), StmtType::ExpressionStmt);
}

#[test]
fn test_nested_if_blocks_in_function() {
    with_large_stack(|| {
        let source = format!(
            "oya f() {{ {} y; {} }}",
            "abi (x) {".repeat(100),
            "}".repeat(100)
        );
        let program = parse_source(&source).unwrap();

        let body = match &program.statements[0] {
            Stmt::FnDecl(decl) => &decl.body,
            other => panic!("expected a function declaration, got {:?}", other),
        };

        let mut levels = 0;
        let mut stmt = &body.body[0];
        while let Stmt::If(if_stmt) = stmt {
            levels += 1;
            match if_stmt.then_body.as_ref() {
                Stmt::Block(block) => stmt = &block.body[0],
                other => panic!("expected a block, got {:?}", other),
            }
        }

        assert_eq!(levels, 100);
    });
}

#[test]
fn test_parse_with_sink_reports_errors() {
    let tokens = tokenize("abeg = 1;", None).unwrap();
    let mut errors: Vec<Error> = vec![];

    assert!(parse_with_sink(tokens, "unknown", &mut errors).is_none());
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].get_file(), "unknown");

    let tokens = tokenize("abeg x = 1;", None).unwrap();
    let mut errors: Vec<Error> = vec![];

    assert!(parse_with_sink(tokens, "unknown", &mut errors).is_some());
    assert!(errors.is_empty());
}
