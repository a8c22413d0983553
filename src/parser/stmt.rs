use log::debug;

use crate::{
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{Token, TokenKind},
    semantics::types::Type,
};

use super::{
    expr::{parse_bool_expr, parse_expr},
    parser::Parser,
};

// Program := 'PROGRAM' Identifier 'WITH' VarDecls 'IN' Statement* 'END' EndOfInput
//
// Each step is a sequencing point: a failed step is recorded and the next
// one is attempted on the same token.
pub fn parse_program(parser: &mut Parser) {
    debug!("parse_program()");

    parser.expect_or_report(TokenKind::Program);

    let error = Error::new(
        ErrorImpl::UnexpectedToken {
            expected: String::from("program name"),
            found: parser.current_token().to_string(),
        },
        parser.current_token().span.start.clone(),
    );
    if let Err(error) = parser.expect_error(TokenKind::Identifier, Some(error)) {
        parser.report(error);
    }

    parser.expect_or_report(TokenKind::With);
    parse_var_decls(parser);

    parser.expect_or_report(TokenKind::In);
    parse_stmt_list(parser);

    parser.expect_or_report(TokenKind::End);
    parser.expect_or_report(TokenKind::EOF);
}

// VarDecls := (IdentList 'AS' Type ','?)*
pub fn parse_var_decls(parser: &mut Parser) {
    debug!("parse_var_decls()");

    while parser.have(TokenKind::Identifier) {
        if let Err(error) = parse_var_decl_group(parser) {
            parser.report(error);
            continue;
        }

        if parser.have(TokenKind::Comma) {
            parser.advance();
        }
    }
}

/// Collects the whole identifier list and its type before declaring any of
/// them, so the group shares one type.
///
/// A malformed type is reported first and the group is then declared as
/// `Undefined`, which keeps later uses from being reported as undeclared.
fn parse_var_decl_group(parser: &mut Parser) -> Result<(), Error> {
    let identifiers = parse_ident_list(parser)?;

    let declared_type = match parser.expect(TokenKind::As).and_then(|_| parse_type(parser)) {
        Ok(declared_type) => declared_type,
        Err(error) => {
            parser.report(error);
            Type::Undefined
        }
    };

    let (semantics, diagnostics) = parser.semantics_mut();
    semantics.set_pending_type(declared_type);
    for identifier in identifiers.iter() {
        semantics.declare(identifier, diagnostics);
    }

    Ok(())
}

// IdentList := Identifier (',' Identifier)*
pub fn parse_ident_list(parser: &mut Parser) -> Result<Vec<Token>, Error> {
    let mut identifiers = vec![parser.expect(TokenKind::Identifier)?];

    while parser.have(TokenKind::Comma) {
        parser.advance();
        identifiers.push(parser.expect(TokenKind::Identifier)?);
    }

    Ok(identifiers)
}

// Type := 'INTEGER' | 'REAL'
pub fn parse_type(parser: &mut Parser) -> Result<Type, Error> {
    match parser.current_token_kind() {
        TokenKind::Integer => {
            parser.advance();
            Ok(Type::Integer)
        }
        TokenKind::Real => {
            parser.advance();
            Ok(Type::Real)
        }
        _ => Err(parser.unexpected("<Type>")),
    }
}

pub fn starts_stmt(kind: TokenKind) -> bool {
    matches!(
        kind,
        TokenKind::Identifier
            | TokenKind::Until
            | TokenKind::If
            | TokenKind::Input
            | TokenKind::Output
    )
}

/// Statement*, recording each failed statement and moving on to the next.
///
/// Every statement alternative consumes its first token before it can fail,
/// so the loop always makes progress.
pub fn parse_stmt_list(parser: &mut Parser) {
    while starts_stmt(parser.current_token_kind()) {
        if let Err(error) = parse_stmt(parser) {
            parser.report(error);
        }
    }
}

// Statement := Assignment | Loop | Conditional | InputOutput
pub fn parse_stmt(parser: &mut Parser) -> Result<(), Error> {
    match parser.current_token_kind() {
        TokenKind::Identifier => parse_assignment_stmt(parser),
        TokenKind::Until => parse_loop_stmt(parser),
        TokenKind::If => parse_if_stmt(parser),
        TokenKind::Input => parse_input_stmt(parser),
        TokenKind::Output => parse_output_stmt(parser),
        _ => Err(parser.unexpected("<Statement>")),
    }
}

// Assignment := Identifier '=' Expression
pub fn parse_assignment_stmt(parser: &mut Parser) -> Result<(), Error> {
    debug!("parse_assignment_stmt()");

    let target = parser.expect(TokenKind::Identifier)?;

    // Looked up before the rest is parsed, so a malformed assignment still
    // reports an undeclared target.
    let (semantics, diagnostics) = parser.semantics_mut();
    let target_type = semantics.resolve(&target, diagnostics);

    let operator = parser.expect(TokenKind::Equals)?;
    let value = parse_expr(parser)?;

    let (semantics, diagnostics) = parser.semantics_mut();
    semantics.check_assignment(&operator, target_type, value, diagnostics);

    Ok(())
}

// Loop := 'UNTIL' BoolExpr 'REPEAT' Statement 'ENDLOOP'
pub fn parse_loop_stmt(parser: &mut Parser) -> Result<(), Error> {
    debug!("parse_loop_stmt()");

    parser.expect(TokenKind::Until)?;
    parse_bool_expr(parser)?;

    parser.expect(TokenKind::Repeat)?;
    parse_stmt(parser)?;

    parser.expect(TokenKind::EndLoop)?;
    Ok(())
}

// Conditional := 'IF' BoolExpr 'THEN' Statement* ('ELSE' Statement*)? 'ENDIF'
pub fn parse_if_stmt(parser: &mut Parser) -> Result<(), Error> {
    debug!("parse_if_stmt()");

    parser.expect(TokenKind::If)?;
    parse_bool_expr(parser)?;

    parser.expect(TokenKind::Then)?;
    parse_stmt_list(parser);

    if parser.have(TokenKind::Else) {
        parser.advance();
        parse_stmt_list(parser);
    }

    parser.expect(TokenKind::EndIf)?;
    Ok(())
}

// 'INPUT' IdentList
pub fn parse_input_stmt(parser: &mut Parser) -> Result<(), Error> {
    debug!("parse_input_stmt()");

    parser.expect(TokenKind::Input)?;
    let identifiers = parse_ident_list(parser)?;

    // Input targets are references, so they must already be declared.
    let (semantics, diagnostics) = parser.semantics_mut();
    for identifier in identifiers.iter() {
        semantics.resolve(identifier, diagnostics);
    }

    Ok(())
}

// 'OUTPUT' Expression (',' Expression)*
pub fn parse_output_stmt(parser: &mut Parser) -> Result<(), Error> {
    debug!("parse_output_stmt()");

    parser.expect(TokenKind::Output)?;
    parse_expr(parser)?;

    while parser.have(TokenKind::Comma) {
        parser.advance();
        parse_expr(parser)?;
    }

    Ok(())
}
