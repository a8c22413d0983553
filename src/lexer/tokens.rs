use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::Span;

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("PROGRAM", TokenKind::Program);
        map.insert("WITH", TokenKind::With);
        map.insert("IN", TokenKind::In);
        map.insert("END", TokenKind::End);
        map.insert("AS", TokenKind::As);
        map.insert("INTEGER", TokenKind::Integer);
        map.insert("REAL", TokenKind::Real);
        map.insert("UNTIL", TokenKind::Until);
        map.insert("REPEAT", TokenKind::Repeat);
        map.insert("ENDLOOP", TokenKind::EndLoop);
        map.insert("IF", TokenKind::If);
        map.insert("THEN", TokenKind::Then);
        map.insert("ELSE", TokenKind::Else);
        map.insert("ENDIF", TokenKind::EndIf);
        map.insert("INPUT", TokenKind::Input);
        map.insert("OUTPUT", TokenKind::Output);
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    EOF,
    Identifier,
    IntegerLiteral,
    RealLiteral,

    OpenParen,
    CloseParen,
    Comma,

    Equals,  // assignment and equality share `=`
    Less,
    Greater,

    Plus,
    Dash,
    Star,
    Slash,

    // Reserved
    Program,
    With,
    In,
    End,
    As,
    Integer,
    Real,
    Until,
    Repeat,
    EndLoop,
    If,
    Then,
    Else,
    EndIf,
    Input,
    Output,
}

impl TokenKind {
    /// How the kind is named in diagnostics.
    pub fn describe(&self) -> &'static str {
        match self {
            TokenKind::EOF => "end of input",
            TokenKind::Identifier => "identifier",
            TokenKind::IntegerLiteral => "integer literal",
            TokenKind::RealLiteral => "real literal",
            TokenKind::OpenParen => "`(`",
            TokenKind::CloseParen => "`)`",
            TokenKind::Comma => "`,`",
            TokenKind::Equals => "`=`",
            TokenKind::Less => "`<`",
            TokenKind::Greater => "`>`",
            TokenKind::Plus => "`+`",
            TokenKind::Dash => "`-`",
            TokenKind::Star => "`*`",
            TokenKind::Slash => "`/`",
            TokenKind::Program => "`PROGRAM`",
            TokenKind::With => "`WITH`",
            TokenKind::In => "`IN`",
            TokenKind::End => "`END`",
            TokenKind::As => "`AS`",
            TokenKind::Integer => "`INTEGER`",
            TokenKind::Real => "`REAL`",
            TokenKind::Until => "`UNTIL`",
            TokenKind::Repeat => "`REPEAT`",
            TokenKind::EndLoop => "`ENDLOOP`",
            TokenKind::If => "`IF`",
            TokenKind::Then => "`THEN`",
            TokenKind::Else => "`ELSE`",
            TokenKind::EndIf => "`ENDIF`",
            TokenKind::Input => "`INPUT`",
            TokenKind::Output => "`OUTPUT`",
        }
    }

    pub fn is_keyword(&self) -> bool {
        RESERVED_LOOKUP.values().any(|kind| kind == self)
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.describe())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    pub span: Span,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            TokenKind::EOF => write!(f, "{}", self.kind),
            _ => write!(f, "{}", self.value),
        }
    }
}
