//! Error types and the diagnostic sink.
//!
//! This module defines the errors reported while checking a program:
//!
//! - Error structures with source position information
//! - Lexical, syntax and semantic error variants
//! - Error naming, categories and human-readable tips
//! - `Diagnostics`, the ordered collection a parse appends to

pub mod diagnostics;
pub mod errors;
