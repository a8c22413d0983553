use log::debug;

use crate::{
    errors::{
        diagnostics::Diagnostics,
        errors::{Error, ErrorImpl},
    },
    lexer::tokens::{Token, TokenKind},
};

use super::{
    scope::{ScopeStack, Symbol},
    types::Type,
};

/// Declaration bookkeeping and type rules applied while parsing.
///
/// Every check reports into the `Diagnostics` it is handed and always
/// produces a usable value, falling back to `Type::Undefined`.
#[derive(Debug, Default)]
pub struct Semantics {
    scopes: ScopeStack,
    pending_type: Type,
}

impl Semantics {
    pub fn new() -> Self {
        Semantics {
            scopes: ScopeStack::new(),
            pending_type: Type::Undefined,
        }
    }

    pub fn open_scope(&mut self) {
        self.scopes.open();
    }

    pub fn close_scope(&mut self) {
        self.scopes.close();
    }

    pub fn scopes(&self) -> &ScopeStack {
        &self.scopes
    }

    /// Sets the type the next `declare` calls bind.
    pub fn set_pending_type(&mut self, var_type: Type) {
        self.pending_type = var_type;
    }

    pub fn pending_type(&self) -> Type {
        self.pending_type
    }

    pub fn declare(&mut self, identifier: &Token, diagnostics: &mut Diagnostics) {
        if identifier.kind != TokenKind::Identifier {
            return;
        }

        if let Some(existing) = self.scopes.get_local(&identifier.value) {
            diagnostics.append(Error::new(
                ErrorImpl::VariableAlreadyDeclared {
                    variable: identifier.value.clone(),
                    original: existing.token.span.start.clone(),
                },
                identifier.span.start.clone(),
            ));
            return;
        }

        debug!("declare {} as {}", identifier.value, self.pending_type);
        self.scopes.add(Symbol::new(identifier, self.pending_type));
    }

    pub fn resolve(&self, identifier: &Token, diagnostics: &mut Diagnostics) -> Type {
        match self.scopes.get(&identifier.value) {
            Some(symbol) => symbol.var_type,
            None => {
                diagnostics.append(Error::new(
                    ErrorImpl::VariableNotDeclared {
                        variable: identifier.value.clone(),
                    },
                    identifier.span.start.clone(),
                ));
                Type::Undefined
            }
        }
    }

    pub fn classify(&self, token: &Token, diagnostics: &mut Diagnostics) -> Type {
        match token.kind {
            TokenKind::Identifier => self.resolve(token, diagnostics),
            TokenKind::IntegerLiteral => Type::Integer,
            TokenKind::RealLiteral => Type::Real,
            _ => Type::Undefined,
        }
    }

    pub fn unify_arithmetic(
        &self,
        operator: &Token,
        left: Type,
        right: Type,
        diagnostics: &mut Diagnostics,
    ) -> Type {
        unify_or_report(operator, left, right, diagnostics)
    }

    /// Comparisons only guard loops and conditionals, so nothing is returned.
    pub fn unify_comparison(
        &self,
        operator: &Token,
        left: Type,
        right: Type,
        diagnostics: &mut Diagnostics,
    ) {
        unify_or_report(operator, left, right, diagnostics);
    }

    /// `target` is the already resolved type of the assigned variable.
    pub fn check_assignment(
        &self,
        operator: &Token,
        target: Type,
        value: Type,
        diagnostics: &mut Diagnostics,
    ) {
        unify_or_report(operator, target, value, diagnostics);
    }
}

fn unify_or_report(operator: &Token, left: Type, right: Type, diagnostics: &mut Diagnostics) -> Type {
    match left.unify(right) {
        Ok(unified) => unified,
        Err((left, right)) => {
            diagnostics.append(Error::new(
                ErrorImpl::TypeConflict { left, right },
                operator.span.start.clone(),
            ));
            Type::Undefined
        }
    }
}
