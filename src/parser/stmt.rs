use crate::{
    ast::{
        ast::{Expr, Stmt},
        statements::{
            BlockStmt, ExpressionStmt, FnDeclStmt, IfStmt, Parameter, ReturnStmt, VarDeclStmt,
            WhileStmt,
        },
    },
    errors::errors::Error,
    lexer::tokens::TokenKind,
    Position,
};

use super::{
    expr::parse_expression,
    parser::Parser,
    types::{parse_type, parse_type_annotation},
};

/// declaration := var_decl | fn_decl | statement
pub fn parse_declaration(parser: &mut Parser) -> Result<Stmt, Error> {
    match parser.current_token_kind() {
        TokenKind::Abeg => parse_var_decl_stmt(parser),
        TokenKind::Oya => parse_fn_decl_stmt(parser),
        _ => parse_stmt(parser),
    }
}

pub fn parse_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    match parser.current_token_kind() {
        // Blocks count their own nesting
        TokenKind::OpenCurly => Ok(Stmt::Block(parse_block_stmt(parser)?)),
        TokenKind::Abi => parser.nested(parse_if_stmt),
        TokenKind::Waka => parser.nested(parse_while_stmt),
        TokenKind::Comot => parse_return_stmt(parser),
        _ => parse_expression_stmt(parser),
    }
}

pub fn parse_var_decl_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let start = parser.advance().position;

    let identifier = parser
        .expect(TokenKind::Identifier, "expected variable name")?
        .value;
    let explicit_type = parse_type_annotation(parser, "expected type after ':'")?;

    let assigned_value = if parser.advance_if(TokenKind::Assignment) {
        Some(parse_expression(parser)?)
    } else {
        None
    };

    parser.expect(TokenKind::Semicolon, "expected ';' after variable declaration")?;

    Ok(Stmt::VarDecl(VarDeclStmt {
        identifier,
        explicit_type,
        assigned_value,
        position: start,
    }))
}

pub fn parse_fn_decl_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let start = parser.advance().position;

    let identifier = parser
        .expect(TokenKind::Identifier, "expected function name after 'oya'")?
        .value;
    parser.expect(TokenKind::OpenParen, "expected '(' after function name")?;

    let mut parameters = vec![];
    if !parser.check(TokenKind::CloseParen) {
        loop {
            let name = parser
                .expect(TokenKind::Identifier, "expected parameter name")?
                .value;
            parser.expect(TokenKind::Colon, "expected ':' after parameter name")?;
            let type_name = parse_type(parser, "expected parameter type")?;

            parameters.push(Parameter { name, type_name });

            if !parser.advance_if(TokenKind::Comma) {
                break;
            }
        }
    }

    parser.expect(TokenKind::CloseParen, "expected ')' after parameters")?;

    let return_type = parse_type_annotation(parser, "expected return type")?;
    let body = parse_block_stmt(parser)?;

    Ok(Stmt::FnDecl(FnDeclStmt {
        identifier,
        parameters,
        return_type,
        body,
        position: start,
    }))
}

/// `{ declaration* }`
///
/// A failed declaration inside the block has already been reported, so the
/// block keeps going with the next one instead of unwinding. Only a failure
/// that consumed nothing is passed up, otherwise the loop would not advance.
pub fn parse_block_stmt(parser: &mut Parser) -> Result<BlockStmt, Error> {
    parser.nested(|parser| {
        let start = parser
            .expect(TokenKind::OpenCurly, "expected '{' before block")?
            .position;

        let mut body = vec![];
        while !parser.check(TokenKind::CloseCurly) && !parser.at_end() {
            let before = parser.cursor();

            match parse_declaration(parser) {
                Ok(stmt) => body.push(stmt),
                Err(error) if parser.cursor() == before => return Err(error),
                Err(_) => {}
            }
        }

        parser.expect(TokenKind::CloseCurly, "expected '}' after block")?;

        Ok(BlockStmt {
            body,
            position: start,
        })
    })
}

/// `abi (cond) stmt` with any number of `naso abi (cond) stmt` links and an
/// optional final `naso stmt`.
///
/// The links are read in a loop and folded into nested `IfStmt`s afterwards,
/// so a long else-if chain does not use up nesting depth.
pub fn parse_if_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let (position, condition, then_body) = parse_if_branch(parser)?;

    let mut branches = vec![];
    let mut else_body = None;

    while parser.advance_if(TokenKind::Naso) {
        if !parser.check(TokenKind::Abi) {
            else_body = Some(Box::new(parse_stmt(parser)?));
            break;
        }

        branches.push(parse_if_branch(parser)?);
    }

    for (position, condition, then_body) in branches.into_iter().rev() {
        else_body = Some(Box::new(Stmt::If(IfStmt {
            condition,
            then_body: Box::new(then_body),
            else_body,
            position,
        })));
    }

    Ok(Stmt::If(IfStmt {
        condition,
        then_body: Box::new(then_body),
        else_body,
        position,
    }))
}

/// `abi (cond) stmt`, returning the position of `abi`.
fn parse_if_branch(parser: &mut Parser) -> Result<(Position, Expr, Stmt), Error> {
    let start = parser.advance().position;

    parser.expect(TokenKind::OpenParen, "expected '(' after 'abi'")?;
    let condition = parse_expression(parser)?;
    parser.expect(TokenKind::CloseParen, "expected ')' after condition")?;

    let then_body = parse_stmt(parser)?;

    Ok((start, condition, then_body))
}

pub fn parse_while_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let start = parser.advance().position;

    parser.expect(TokenKind::OpenParen, "expected '(' after 'waka'")?;
    let condition = parse_expression(parser)?;
    parser.expect(TokenKind::CloseParen, "expected ')' after condition")?;

    let body = parse_stmt(parser)?;

    Ok(Stmt::While(WhileStmt {
        condition,
        body: Box::new(body),
        position: start,
    }))
}

/// `comot;` or `comot value;`
pub fn parse_return_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let start = parser.advance().position;

    let value = if !parser.check(TokenKind::Semicolon) {
        Some(parse_expression(parser)?)
    } else {
        None
    };

    parser.expect(TokenKind::Semicolon, "expected ';' after return statement")?;

    Ok(Stmt::Return(ReturnStmt {
        value,
        position: start,
    }))
}

pub fn parse_expression_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let position = parser.get_position();

    let expression = parse_expression(parser)?;
    parser.expect(TokenKind::Semicolon, "expected ';' after expression")?;

    Ok(Stmt::Expression(ExpressionStmt {
        expression,
        position,
    }))
}
