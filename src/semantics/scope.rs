use std::collections::HashMap;

use crate::lexer::tokens::Token;

use super::types::Type;

/// A declared variable and where it was declared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Symbol {
    pub name: String,
    pub var_type: Type,
    pub token: Token,
}

impl Symbol {
    pub fn new(token: &Token, var_type: Type) -> Self {
        Symbol {
            name: token.value.clone(),
            var_type,
            token: token.clone(),
        }
    }
}

#[derive(Debug, Default)]
pub struct Scope {
    pub variable_lookup: HashMap<String, Symbol>,
}

impl Scope {
    pub fn new() -> Self {
        Scope {
            variable_lookup: HashMap::new(),
        }
    }

    pub fn get_variable(&self, variable_name: &str) -> Option<&Symbol> {
        self.variable_lookup.get(variable_name)
    }
}

/// Nested scopes, innermost last.
#[derive(Debug, Default)]
pub struct ScopeStack {
    scopes: Vec<Scope>,
}

impl ScopeStack {
    pub fn new() -> Self {
        ScopeStack { scopes: vec![] }
    }

    pub fn open(&mut self) {
        self.scopes.push(Scope::new());
    }

    pub fn close(&mut self) {
        self.scopes.pop();
    }

    pub fn depth(&self) -> usize {
        self.scopes.len()
    }

    /// Binds a symbol in the innermost scope, returning any binding it replaced.
    /// A global scope is opened if none is.
    pub fn add(&mut self, symbol: Symbol) -> Option<Symbol> {
        if self.scopes.is_empty() {
            self.open();
        }

        let scope = self.scopes.last_mut()?;
        scope.variable_lookup.insert(symbol.name.clone(), symbol)
    }

    pub fn get(&self, name: &str) -> Option<&Symbol> {
        self.scopes
            .iter()
            .rev()
            .find_map(|scope| scope.get_variable(name))
    }

    pub fn is_defined(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Looks only in the innermost scope.
    pub fn get_local(&self, name: &str) -> Option<&Symbol> {
        self.scopes.last()?.get_variable(name)
    }

    pub fn is_defined_locally(&self, name: &str) -> bool {
        self.get_local(name).is_some()
    }
}
