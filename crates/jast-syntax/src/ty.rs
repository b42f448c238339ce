//! Attachment point for resolved types.
//!
//! Every node owns one lazily filled slot. Filling it is the job of an
//! external [`TypeResolver`]; this module only defines the values and the
//! memoization contract.

use std::fmt;

use crate::SyntaxNode;

/// Java primitive types.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Primitive {
    Boolean,
    Byte,
    Char,
    Short,
    Int,
    Long,
    Float,
    Double,
}

impl Primitive {
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        Some(match keyword {
            "boolean" => Self::Boolean,
            "byte" => Self::Byte,
            "char" => Self::Char,
            "short" => Self::Short,
            "int" => Self::Int,
            "long" => Self::Long,
            "float" => Self::Float,
            "double" => Self::Double,
            _ => return None,
        })
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Boolean => "boolean",
            Self::Byte => "byte",
            Self::Char => "char",
            Self::Short => "short",
            Self::Int => "int",
            Self::Long => "long",
            Self::Float => "float",
            Self::Double => "double",
        }
    }

    pub fn is_numeric(self) -> bool {
        !matches!(self, Self::Boolean)
    }
}

/// The semantic type of a node.
///
/// `Unknown` is an ordinary value: resolution may legitimately fail, e.g.
/// when a referenced class is not on the analysis classpath.
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq)]
pub enum TypeInfo {
    #[default]
    Unknown,
    Void,
    Null,
    Primitive(Primitive),
    Class { name: Box<str>, arguments: Box<[TypeInfo]> },
    Array { element: Box<TypeInfo>, dimensions: u32 },
}

impl TypeInfo {
    pub fn class(name: impl Into<Box<str>>) -> Self {
        Self::Class { name: name.into(), arguments: Box::default() }
    }

    /// Wraps `self` in `dimensions` more array dimensions.
    pub fn array_of(self, dimensions: u32) -> Self {
        match (self, dimensions) {
            (ty, 0) => ty,
            (Self::Array { element, dimensions: inner }, outer) => {
                Self::Array { element, dimensions: inner + outer }
            }
            (element, dimensions) => Self::Array { element: Box::new(element), dimensions },
        }
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, Self::Unknown)
    }

    pub fn is_array(&self) -> bool {
        matches!(self, Self::Array { .. })
    }
}

impl fmt::Display for TypeInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unknown => f.write_str("?"),
            Self::Void => f.write_str("void"),
            Self::Null => f.write_str("null"),
            Self::Primitive(primitive) => f.write_str(primitive.as_str()),
            Self::Class { name, arguments } => {
                f.write_str(name)?;
                if !arguments.is_empty() {
                    f.write_str("<")?;
                    for (i, argument) in arguments.iter().enumerate() {
                        if i > 0 {
                            f.write_str(", ")?;
                        }
                        write!(f, "{argument}")?;
                    }
                    f.write_str(">")?;
                }
                Ok(())
            }
            Self::Array { element, dimensions } => {
                write!(f, "{element}")?;
                for _ in 0..*dimensions {
                    f.write_str("[]")?;
                }
                Ok(())
            }
        }
    }
}

/// Computes the type of a node on first access.
///
/// Implementations must be deterministic: under concurrent first access the
/// value may be computed more than once, and only one result is kept. A
/// resolver must not request the type of the node it is currently resolving.
pub trait TypeResolver: Sync {
    fn resolve(&self, node: SyntaxNode<'_>) -> TypeInfo;
}

impl<F> TypeResolver for F
where
    F: Fn(SyntaxNode<'_>) -> TypeInfo + Sync,
{
    fn resolve(&self, node: SyntaxNode<'_>) -> TypeInfo {
        self(node)
    }
}
