use std::fmt::Display;

/// Types a value can carry.
///
/// `Undefined` is never written in a program. It marks a value whose type
/// could not be determined because an error was already reported for it,
/// and it unifies silently with anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Type {
    Integer,
    Real,
    #[default]
    Undefined,
}

impl Type {
    /// Absorption rule: `Undefined` takes the other side's type, equal
    /// types unify to themselves and differing concrete types conflict.
    pub fn unify(self, other: Type) -> Result<Type, (Type, Type)> {
        match (self, other) {
            (Type::Undefined, ty) | (ty, Type::Undefined) => Ok(ty),
            (left, right) if left == right => Ok(left),
            (left, right) => Err((left, right)),
        }
    }
}

impl Display for Type {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Type::Integer => write!(f, "INTEGER"),
            Type::Real => write!(f, "REAL"),
            Type::Undefined => write!(f, "undefined"),
        }
    }
}
