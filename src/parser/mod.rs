//! Recursive-descent parser with inline semantic checks.
//!
//! This module recognizes a whole program with one token of lookahead and
//! no backtracking. Each nonterminal is a free function over `&mut Parser`;
//! the expression-level ones return the `Type` of what they recognized so
//! type checks happen during recognition, without building a tree.
//!
//! - `parser` - parser state, lookahead and consuming primitives, entry point
//! - `stmt` - program, declarations and statements
//! - `expr` - boolean, arithmetic and primary expressions
//!
//! Syntax errors abort the failing nonterminal and are recorded by the
//! nearest enclosing repetition or sequencing point. No tokens are skipped
//! to resynchronize.

pub mod expr;
pub mod parser;
pub mod stmt;
