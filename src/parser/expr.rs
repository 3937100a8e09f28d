use crate::{
    ast::{
        ast::Expr,
        expressions::{
            ArrayExpr, AssignExpr, BinaryExpr, CallExpr, IndexExpr, LiteralExpr, LiteralValue,
            UnaryExpr, VariableExpr,
        },
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{Token, TokenKind},
};

use super::{
    lookups::{BindingPower, PARSE_RULES},
    parser::{describe_token, Parser},
};

/// Parses a full expression, assignment included.
pub fn parse_expression(parser: &mut Parser) -> Result<Expr, Error> {
    parse_expr(parser, BindingPower::Assignment)
}

/// Pratt loop: one prefix, then infix operators for as long as they bind at least as tightly as `bp`.
pub fn parse_expr(parser: &mut Parser, bp: BindingPower) -> Result<Expr, Error> {
    parser.nested(|parser| {
        let token = parser.advance().clone();

        let prefix = match PARSE_RULES.get(token.kind).prefix {
            Some(prefix) => prefix,
            None => {
                return Err(parser.error_at(
                    &token,
                    ErrorImpl::ExpectedExpression {
                        token: describe_token(&token),
                    },
                ))
            }
        };

        let mut left = prefix(parser, token)?;

        while bp <= PARSE_RULES.get(parser.current_token_kind()).binding_power {
            let operator = parser.advance().clone();

            // Any kind with a binding power above None was registered with an infix handler
            let infix = match PARSE_RULES.get(operator.kind).infix {
                Some(infix) => infix,
                None => return Ok(left),
            };

            left = infix(parser, left, operator)?;
        }

        Ok(left)
    })
}

pub fn parse_literal_expr(parser: &mut Parser, token: Token) -> Result<Expr, Error> {
    let value = match token.kind {
        TokenKind::Integer => match token.value.parse::<i64>() {
            Ok(value) => LiteralValue::Int(value),
            Err(_) => {
                return Err(parser.error_at(
                    &token,
                    ErrorImpl::NumberParseError {
                        token: token.value.clone(),
                    },
                ))
            }
        },
        TokenKind::Float => match token.value.parse::<f64>() {
            Ok(value) => LiteralValue::Float(value),
            Err(_) => {
                return Err(parser.error_at(
                    &token,
                    ErrorImpl::NumberParseError {
                        token: token.value.clone(),
                    },
                ))
            }
        },
        TokenKind::String => LiteralValue::String(token.value.clone()),
        TokenKind::True => LiteralValue::Bool(true),
        TokenKind::False => LiteralValue::Bool(false),
        _ => {
            return Err(parser.error_at(
                &token,
                ErrorImpl::ExpectedExpression {
                    token: describe_token(&token),
                },
            ))
        }
    };

    Ok(Expr::Literal(LiteralExpr {
        value,
        position: token.position,
    }))
}

pub fn parse_variable_expr(_parser: &mut Parser, token: Token) -> Result<Expr, Error> {
    Ok(Expr::Variable(VariableExpr {
        name: token.value,
        position: token.position,
    }))
}

pub fn parse_unary_expr(parser: &mut Parser, token: Token) -> Result<Expr, Error> {
    let operand = parse_expr(parser, BindingPower::Unary)?;

    Ok(Expr::Unary(UnaryExpr {
        operator: token.kind,
        operand: Box::new(operand),
        position: token.position,
    }))
}

/// `( expr )`. Parentheses leave no node of their own.
pub fn parse_grouping_expr(parser: &mut Parser, _token: Token) -> Result<Expr, Error> {
    let expr = parse_expression(parser)?;
    parser.expect(TokenKind::CloseParen, "expected ')' after expression")?;

    Ok(expr)
}

pub fn parse_array_expr(parser: &mut Parser, token: Token) -> Result<Expr, Error> {
    let mut elements = vec![];

    if !parser.check(TokenKind::CloseBracket) {
        loop {
            elements.push(parse_expression(parser)?);

            if !parser.advance_if(TokenKind::Comma) {
                break;
            }
        }
    }

    parser.expect(TokenKind::CloseBracket, "expected ']' after array elements")?;

    Ok(Expr::Array(ArrayExpr {
        elements,
        position: token.position,
    }))
}

/// Left-associative: the right operand must bind strictly tighter than the operator.
pub fn parse_binary_expr(parser: &mut Parser, left: Expr, operator: Token) -> Result<Expr, Error> {
    let bp = PARSE_RULES.get(operator.kind).binding_power;
    let right = parse_expr(parser, bp.next())?;

    Ok(Expr::Binary(BinaryExpr {
        left: Box::new(left),
        operator: operator.kind,
        right: Box::new(right),
        position: operator.position,
    }))
}

pub fn parse_call_expr(parser: &mut Parser, left: Expr, paren: Token) -> Result<Expr, Error> {
    let mut arguments = vec![];

    if !parser.check(TokenKind::CloseParen) {
        loop {
            arguments.push(parse_expression(parser)?);

            if !parser.advance_if(TokenKind::Comma) {
                break;
            }
        }
    }

    parser.expect(TokenKind::CloseParen, "expected ')' after arguments")?;

    Ok(Expr::Call(CallExpr {
        callee: Box::new(left),
        arguments,
        position: paren.position,
    }))
}

pub fn parse_index_expr(parser: &mut Parser, left: Expr, bracket: Token) -> Result<Expr, Error> {
    let index = parse_expression(parser)?;
    parser.expect(TokenKind::CloseBracket, "expected ']' after index")?;

    Ok(Expr::Index(IndexExpr {
        object: Box::new(left),
        index: Box::new(index),
        position: bracket.position,
    }))
}

/// Right-associative. Only a bare variable can be assigned to; any other
/// target is reported and the left side is returned unchanged.
pub fn parse_assignment_expr(parser: &mut Parser, left: Expr, equals: Token) -> Result<Expr, Error> {
    let name = match left {
        Expr::Variable(variable) => variable.name,
        other => {
            parser.error_at(&equals, ErrorImpl::InvalidAssignmentTarget);
            return Ok(other);
        }
    };

    let value = parse_expr(parser, BindingPower::Assignment)?;

    Ok(Expr::Assign(AssignExpr {
        name,
        value: Box::new(value),
        position: equals.position,
    }))
}
