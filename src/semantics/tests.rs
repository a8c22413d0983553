//! Unit tests for the semantic checks, independent of the parser.

use std::rc::Rc;

use crate::{
    errors::diagnostics::Diagnostics,
    lexer::tokens::{Token, TokenKind},
    Position, Span,
};

use super::{
    scope::{ScopeStack, Symbol},
    semantics::Semantics,
    types::Type,
};

fn token(kind: TokenKind, value: &str, offset: usize) -> Token {
    let file = Rc::new("test.prog".to_string());
    Token {
        kind,
        value: value.to_string(),
        span: Span {
            start: Position(offset, Rc::clone(&file)),
            end: Position(offset + value.len(), file),
        },
    }
}

fn ident(name: &str, offset: usize) -> Token {
    token(TokenKind::Identifier, name, offset)
}

fn plus() -> Token {
    token(TokenKind::Plus, "+", 0)
}

#[test]
fn test_unify_absorbs_undefined() {
    assert_eq!(Type::Undefined.unify(Type::Integer), Ok(Type::Integer));
    assert_eq!(Type::Real.unify(Type::Undefined), Ok(Type::Real));
    assert_eq!(Type::Undefined.unify(Type::Undefined), Ok(Type::Undefined));
}

#[test]
fn test_unify_concrete_types() {
    assert_eq!(Type::Integer.unify(Type::Integer), Ok(Type::Integer));
    assert_eq!(Type::Real.unify(Type::Real), Ok(Type::Real));
    assert_eq!(
        Type::Integer.unify(Type::Real),
        Err((Type::Integer, Type::Real))
    );
}

#[test]
fn test_scope_lookup_walks_outward() {
    let mut scopes = ScopeStack::new();
    scopes.open();
    scopes.add(Symbol::new(&ident("x", 0), Type::Integer));
    scopes.open();
    scopes.add(Symbol::new(&ident("y", 2), Type::Real));

    assert_eq!(scopes.depth(), 2);
    assert!(scopes.is_defined("x"));
    assert!(!scopes.is_defined_locally("x"));
    assert!(scopes.is_defined_locally("y"));
    assert_eq!(scopes.get("x").map(|s| s.var_type), Some(Type::Integer));

    scopes.close();
    assert!(!scopes.is_defined("y"));
    assert!(scopes.is_defined("x"));
}

#[test]
fn test_scope_add_opens_global_scope() {
    let mut scopes = ScopeStack::new();
    assert_eq!(scopes.depth(), 0);

    assert!(scopes.add(Symbol::new(&ident("x", 0), Type::Real)).is_none());
    assert_eq!(scopes.depth(), 1);
    assert!(scopes.is_defined("x"));
}

#[test]
fn test_declare_uses_pending_type() {
    let mut semantics = Semantics::new();
    let mut diagnostics = Diagnostics::new();
    semantics.open_scope();

    semantics.set_pending_type(Type::Real);
    semantics.declare(&ident("r", 0), &mut diagnostics);
    semantics.set_pending_type(Type::Integer);
    semantics.declare(&ident("i", 2), &mut diagnostics);
    assert_eq!(semantics.pending_type(), Type::Integer);

    assert!(diagnostics.is_empty());
    assert_eq!(semantics.resolve(&ident("r", 10), &mut diagnostics), Type::Real);
    assert_eq!(semantics.resolve(&ident("i", 12), &mut diagnostics), Type::Integer);
}

#[test]
fn test_redeclaration_keeps_first_binding() {
    let mut semantics = Semantics::new();
    let mut diagnostics = Diagnostics::new();
    semantics.open_scope();

    semantics.set_pending_type(Type::Integer);
    semantics.declare(&ident("x", 4), &mut diagnostics);
    semantics.set_pending_type(Type::Real);
    semantics.declare(&ident("x", 20), &mut diagnostics);

    assert_eq!(diagnostics.count(), 1);
    let error = diagnostics.iter().next().unwrap();
    assert_eq!(error.get_error_name(), "VariableAlreadyDeclared");
    assert_eq!(error.get_position().0, 20);
    assert_eq!(error.get_related_position().map(|p| p.0), Some(4));

    let symbol = semantics.scopes().get("x").unwrap();
    assert_eq!(symbol.var_type, Type::Integer);
    assert_eq!(symbol.token.span.start.0, 4);
}

#[test]
fn test_declare_ignores_non_identifiers() {
    let mut semantics = Semantics::new();
    let mut diagnostics = Diagnostics::new();
    semantics.open_scope();

    semantics.declare(&token(TokenKind::IntegerLiteral, "5", 0), &mut diagnostics);

    assert!(diagnostics.is_empty());
    assert!(!semantics.scopes().is_defined("5"));
}

#[test]
fn test_resolve_undeclared_reports_once_per_reference() {
    let semantics = Semantics::new();
    let mut diagnostics = Diagnostics::new();

    assert_eq!(semantics.resolve(&ident("y", 0), &mut diagnostics), Type::Undefined);
    assert_eq!(semantics.resolve(&ident("y", 5), &mut diagnostics), Type::Undefined);

    assert_eq!(diagnostics.count_named("VariableNotDeclared"), 2);
}

#[test]
fn test_classify_literals() {
    let semantics = Semantics::new();
    let mut diagnostics = Diagnostics::new();

    assert_eq!(
        semantics.classify(&token(TokenKind::IntegerLiteral, "1", 0), &mut diagnostics),
        Type::Integer
    );
    assert_eq!(
        semantics.classify(&token(TokenKind::RealLiteral, "1.5", 0), &mut diagnostics),
        Type::Real
    );
    assert_eq!(semantics.classify(&plus(), &mut diagnostics), Type::Undefined);
    assert!(diagnostics.is_empty());
}

#[test]
fn test_unify_arithmetic_reports_conflict_at_operator() {
    let semantics = Semantics::new();
    let mut diagnostics = Diagnostics::new();
    let operator = token(TokenKind::Star, "*", 9);

    let result = semantics.unify_arithmetic(&operator, Type::Integer, Type::Real, &mut diagnostics);

    assert_eq!(result, Type::Undefined);
    assert_eq!(diagnostics.count_named("TypeConflict"), 1);
    assert_eq!(diagnostics.iter().next().unwrap().get_position().0, 9);
}

#[test]
fn test_unify_arithmetic_absorbs_undefined() {
    let semantics = Semantics::new();
    let mut diagnostics = Diagnostics::new();

    let result = semantics.unify_arithmetic(&plus(), Type::Undefined, Type::Real, &mut diagnostics);

    assert_eq!(result, Type::Real);
    assert!(diagnostics.is_empty());
}

#[test]
fn test_unify_comparison() {
    let semantics = Semantics::new();
    let mut diagnostics = Diagnostics::new();
    let less = token(TokenKind::Less, "<", 0);

    semantics.unify_comparison(&less, Type::Real, Type::Real, &mut diagnostics);
    semantics.unify_comparison(&less, Type::Undefined, Type::Integer, &mut diagnostics);
    assert!(diagnostics.is_empty());

    semantics.unify_comparison(&less, Type::Real, Type::Integer, &mut diagnostics);
    assert_eq!(diagnostics.count_named("TypeConflict"), 1);
}

#[test]
fn test_check_assignment_to_undeclared_target() {
    let semantics = Semantics::new();
    let mut diagnostics = Diagnostics::new();
    let equals = token(TokenKind::Equals, "=", 2);

    let target = semantics.resolve(&ident("y", 0), &mut diagnostics);
    semantics.check_assignment(&equals, target, Type::Integer, &mut diagnostics);

    assert_eq!(target, Type::Undefined);
    assert_eq!(diagnostics.count(), 1);
    assert_eq!(diagnostics.count_named("VariableNotDeclared"), 1);
}

#[test]
fn test_check_assignment_type_mismatch() {
    let mut semantics = Semantics::new();
    let mut diagnostics = Diagnostics::new();
    let equals = token(TokenKind::Equals, "=", 2);
    semantics.open_scope();
    semantics.set_pending_type(Type::Integer);
    semantics.declare(&ident("x", 0), &mut diagnostics);
    assert_eq!(semantics.resolve(&ident("x", 0), &mut diagnostics), Type::Integer);

    semantics.check_assignment(&equals, Type::Integer, Type::Integer, &mut diagnostics);
    semantics.check_assignment(&equals, Type::Integer, Type::Undefined, &mut diagnostics);
    assert!(diagnostics.is_empty());

    semantics.check_assignment(&equals, Type::Integer, Type::Real, &mut diagnostics);
    assert_eq!(diagnostics.count_named("TypeConflict"), 1);
}
