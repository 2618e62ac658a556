//! Type tags used in DSL function signatures.

use std::fmt;

/// A type tag: the only values that appear in a [`crate::Value`] signature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Type {
    /// Signed integer.
    TInt,
    /// Ordered sequence of integers.
    TSeq,
    /// Boolean, produced only by predicate lambdas.
    TBool,
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Type::TInt => "int",
            Type::TSeq => "[int]",
            Type::TBool => "bool",
        };
        write!(f, "{s}")
    }
}
