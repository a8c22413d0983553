use std::fmt::Display;

use thiserror::Error;

use crate::{semantics::types::Type, Position};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_error(&self) -> &ErrorImpl {
        &self.internal_error
    }

    /// A second site worth showing alongside the error, if any.
    pub fn get_related_position(&self) -> Option<&Position> {
        match &self.internal_error {
            ErrorImpl::VariableAlreadyDeclared { original, .. } => Some(original),
            _ => None,
        }
    }

    pub fn get_category(&self) -> ErrorCategory {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => ErrorCategory::Lexical,
            ErrorImpl::UnexpectedToken { .. } => ErrorCategory::Syntax,
            ErrorImpl::VariableAlreadyDeclared { .. }
            | ErrorImpl::VariableNotDeclared { .. }
            | ErrorImpl::TypeConflict { .. } => ErrorCategory::Semantic,
        }
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => "UnrecognisedToken",
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorImpl::VariableAlreadyDeclared { .. } => "VariableAlreadyDeclared",
            ErrorImpl::VariableNotDeclared { .. } => "VariableNotDeclared",
            ErrorImpl::TypeConflict { .. } => "TypeConflict",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => ErrorTip::None,
            ErrorImpl::UnexpectedToken { expected, found } => ErrorTip::Suggestion(format!(
                "Expected {}, found `{}`",
                expected, found
            )),
            ErrorImpl::VariableAlreadyDeclared { variable, .. } => ErrorTip::Suggestion(format!(
                "Variable `{}` is already declared in this scope",
                variable
            )),
            ErrorImpl::VariableNotDeclared { variable } => {
                ErrorTip::Suggestion(format!("Variable `{}` has not been declared", variable))
            }
            ErrorImpl::TypeConflict { left, right } => ErrorTip::Suggestion(format!(
                "Cannot combine `{}` with `{}`",
                left, right
            )),
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} at {}:{}", self.internal_error, self.position.1, self.position.0)
    }
}

impl std::error::Error for Error {}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Lexical,
    Syntax,
    Semantic,
}

impl Display for ErrorCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorCategory::Lexical => write!(f, "Lexical error"),
            ErrorCategory::Syntax => write!(f, "Syntax error"),
            ErrorCategory::Semantic => write!(f, "Semantic error"),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErrorImpl {
    #[error("unrecognised character: {token:?}")]
    UnrecognisedToken { token: String },
    #[error("expected {expected}, found {found:?}")]
    UnexpectedToken { expected: String, found: String },
    #[error("variable {variable:?} already declared")]
    VariableAlreadyDeclared { variable: String, original: Position },
    #[error("variable {variable:?} not declared")]
    VariableNotDeclared { variable: String },
    #[error("type conflict between {left} and {right}")]
    TypeConflict { left: Type, right: Type },
}
