//! Static semantic analysis performed inline with parsing.
//!
//! - `types` - the value types and the absorption rule
//! - `scope` - symbols and the nested scope stack
//! - `semantics` - declaration, resolution and type-consistency checks
//!
//! No syntax tree is built: the parser calls into `Semantics` at every
//! point the grammar declares, references or combines a typed value.

pub mod scope;
pub mod semantics;
pub mod types;

#[cfg(test)]
mod tests;
