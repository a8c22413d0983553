use log::debug;

use crate::{errors::errors::Error, lexer::tokens::TokenKind, semantics::types::Type};

use super::parser::Parser;

// BoolExpr := Expression ('<' | '=' | '>') Expression
pub fn parse_bool_expr(parser: &mut Parser) -> Result<(), Error> {
    debug!("parse_bool_expr()");

    let left = parse_expr(parser)?;

    let operator = match parser.current_token_kind() {
        TokenKind::Less | TokenKind::Equals | TokenKind::Greater => parser.advance().clone(),
        _ => return Err(parser.unexpected("comparison operator `<`, `=` or `>`")),
    };

    let right = parse_expr(parser)?;

    let (semantics, diagnostics) = parser.semantics_mut();
    semantics.unify_comparison(&operator, left, right, diagnostics);

    Ok(())
}

// Expression := Term (('+' | '-') Term)*
pub fn parse_expr(parser: &mut Parser) -> Result<Type, Error> {
    let mut expr_type = parse_term(parser)?;

    while matches!(parser.current_token_kind(), TokenKind::Plus | TokenKind::Dash) {
        let operator = parser.advance().clone();
        let right = parse_term(parser)?;

        let (semantics, diagnostics) = parser.semantics_mut();
        expr_type = semantics.unify_arithmetic(&operator, expr_type, right, diagnostics);
    }

    Ok(expr_type)
}

// Term := Factor (('*' | '/') Factor)*
pub fn parse_term(parser: &mut Parser) -> Result<Type, Error> {
    let mut term_type = parse_factor(parser)?;

    while matches!(parser.current_token_kind(), TokenKind::Star | TokenKind::Slash) {
        let operator = parser.advance().clone();
        let right = parse_factor(parser)?;

        let (semantics, diagnostics) = parser.semantics_mut();
        term_type = semantics.unify_arithmetic(&operator, term_type, right, diagnostics);
    }

    Ok(term_type)
}

// Factor := ('+' | '-')? ( Value | '(' Expression ')' )
pub fn parse_factor(parser: &mut Parser) -> Result<Type, Error> {
    // A sign does not change the operand's type.
    if matches!(parser.current_token_kind(), TokenKind::Plus | TokenKind::Dash) {
        parser.advance();
    }

    if parser.have(TokenKind::OpenParen) {
        parser.advance();
        let grouped = parse_expr(parser)?;
        parser.expect(TokenKind::CloseParen)?;

        return Ok(grouped);
    }

    parse_value(parser)
}

// Value := Identifier | IntegerLiteral | RealLiteral
pub fn parse_value(parser: &mut Parser) -> Result<Type, Error> {
    match parser.current_token_kind() {
        TokenKind::Identifier | TokenKind::IntegerLiteral | TokenKind::RealLiteral => {
            let token = parser.advance().clone();
            let (semantics, diagnostics) = parser.semantics_mut();
            Ok(semantics.classify(&token, diagnostics))
        }
        _ => Err(parser.unexpected("<Value>")),
    }
}
