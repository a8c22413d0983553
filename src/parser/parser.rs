//! Parser state and token-level primitives.
//!
//! The parser owns everything a single parse mutates: the token stream
//! position, the `Semantics` instance (scope stack and pending declared
//! type) and the `Diagnostics` sink. Nothing is shared between parser
//! instances, so independent parses can run side by side.

use std::rc::Rc;

use log::debug;

use crate::{
    errors::{
        diagnostics::Diagnostics,
        errors::{Error, ErrorImpl},
    },
    lexer::tokens::{Token, TokenKind},
    semantics::semantics::Semantics,
    Position, Span,
};

use super::stmt::parse_program;

/// The main parser structure that maintains parsing state.
pub struct Parser {
    /// The list of tokens to parse, always ending in `EOF`
    tokens: Vec<Token>,
    /// Current position in the token stream
    pos: usize,
    /// The name of the source file being parsed
    file: Rc<String>,
    /// Scopes and the pending declaration type
    semantics: Semantics,
    /// Errors found so far, in emission order
    diagnostics: Diagnostics,
}

impl Parser {
    /// Creates a new Parser instance.
    ///
    /// An `EOF` token is appended if the stream does not already end in one,
    /// so lookahead always has a token to inspect.
    pub fn new(mut tokens: Vec<Token>, file: Rc<String>) -> Self {
        if tokens.last().map(|token| token.kind) != Some(TokenKind::EOF) {
            let end = tokens
                .last()
                .map(|token| token.span.end.clone())
                .unwrap_or_else(|| Position(0, Rc::clone(&file)));
            tokens.push(Token {
                kind: TokenKind::EOF,
                value: String::new(),
                span: Span {
                    start: end.clone(),
                    end,
                },
            });
        }

        Parser {
            tokens,
            pos: 0,
            file,
            semantics: Semantics::new(),
            diagnostics: Diagnostics::new(),
        }
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        &self.tokens[self.pos]
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.current_token().kind
    }

    /// Advances to the next token and returns the previous token.
    /// The stream never moves past `EOF`.
    pub fn advance(&mut self) -> &Token {
        let previous = self.pos;
        if self.pos + 1 < self.tokens.len() {
            self.pos += 1;
        }
        &self.tokens[previous]
    }

    /// Whether the current token is of the given kind. Consumes nothing.
    pub fn have(&self, kind: TokenKind) -> bool {
        self.current_token_kind() == kind
    }

    /// Expects a token of the specified kind, with optional custom error.
    ///
    /// Returns the consumed token, or an error describing the mismatch
    /// without consuming anything.
    pub fn expect_error(
        &mut self,
        expected_kind: TokenKind,
        error: Option<Error>,
    ) -> Result<Token, Error> {
        if self.have(expected_kind) {
            return Ok(self.advance().clone());
        }

        match error {
            Some(error) => Err(error),
            None => Err(self.unexpected(expected_kind.describe())),
        }
    }

    /// Expects a token of the specified kind with the default error.
    pub fn expect(&mut self, expected_kind: TokenKind) -> Result<Token, Error> {
        self.expect_error(expected_kind, None)
    }

    /// Like `expect`, but records a mismatch and lets the caller carry on.
    pub fn expect_or_report(&mut self, expected_kind: TokenKind) -> Option<Token> {
        match self.expect(expected_kind) {
            Ok(token) => Some(token),
            Err(error) => {
                self.report(error);
                None
            }
        }
    }

    /// Builds a syntax error at the current token.
    pub fn unexpected(&self, expected: &str) -> Error {
        let token = self.current_token();
        Error::new(
            ErrorImpl::UnexpectedToken {
                expected: expected.to_string(),
                found: token.to_string(),
            },
            token.span.start.clone(),
        )
    }

    pub fn report(&mut self, error: Error) {
        debug!("report {}", error);
        self.diagnostics.append(error);
    }

    /// Splits out the semantic checker and the sink it reports into.
    pub fn semantics_mut(&mut self) -> (&mut Semantics, &mut Diagnostics) {
        (&mut self.semantics, &mut self.diagnostics)
    }

    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    /// Checks if there are more tokens to parse.
    pub fn has_tokens(&self) -> bool {
        self.current_token_kind() != TokenKind::EOF
    }

    /// Returns the current position in the source file.
    pub fn get_position(&self) -> Position {
        Position(self.current_token().span.start.0, Rc::clone(&self.file))
    }
}

/// Parses and checks a token stream.
///
/// This is the single entry point: the program scope is opened, the
/// whole stream is recognized with semantic checks applied inline, the
/// scope is closed, and every error found is returned in the order it
/// was found.
pub fn parse(tokens: Vec<Token>, file: Rc<String>) -> Diagnostics {
    debug!("Input: {} tokens from {}", tokens.len(), file);
    let mut parser = Parser::new(tokens, file);

    parser.semantics.open_scope();
    parse_program(&mut parser);
    parser.semantics.close_scope();

    parser.diagnostics
}
