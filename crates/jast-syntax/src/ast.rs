//! Typed views over [`SyntaxNode`]s.
//!
//! Each node kind with a meaning of its own gets a zero-cost wrapper. Shared
//! accessor semantics live in the capability traits of [`capabilities`],
//! which node kinds opt into one by one.

use std::fmt;

use text_size::TextRange;

use crate::stream::NodeStream as _;
use crate::{SyntaxKind, SyntaxNode};

pub mod capabilities;
mod decls;
mod exprs;
mod stmts;
mod types;

pub use capabilities::{
    Annotatable, AtLeastOneChild, AtLeastOneChildOfType, BinaryExpressionLike, ModifierOwner,
    MultiVariableIdOwner, OperatorLike, QualifierOwner, TypeNode, VariableIdOwner,
};
pub use decls::Modifier;
pub use exprs::{AssignmentOp, BinaryOp, LiteralKind, UnaryOp};

/// A typed view of a syntax node.
pub trait AstNode<'a>: Copy {
    fn can_cast(kind: SyntaxKind) -> bool;

    fn cast(syntax: SyntaxNode<'a>) -> Option<Self>;

    fn syntax(self) -> SyntaxNode<'a>;

    #[inline]
    fn text_range(self) -> TextRange {
        self.syntax().text_range()
    }
}

macro_rules! ast_node_wrappers {
    ($($name:ident = $kind:ident, $visit:ident;)*) => {$(
        #[doc = concat!("Typed view of a `", stringify!($kind), "` node.")]
        #[derive(Clone, Copy, PartialEq, Eq, Hash)]
        pub struct $name<'a>(pub(crate) SyntaxNode<'a>);

        impl<'a> AstNode<'a> for $name<'a> {
            #[inline]
            fn can_cast(kind: SyntaxKind) -> bool {
                kind == SyntaxKind::$kind
            }

            #[inline]
            fn cast(syntax: SyntaxNode<'a>) -> Option<Self> {
                Self::can_cast(syntax.kind()).then_some(Self(syntax))
            }

            #[inline]
            fn syntax(self) -> SyntaxNode<'a> {
                self.0
            }
        }

        impl fmt::Debug for $name<'_> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                fmt::Debug::fmt(&self.0, f)
            }
        }
    )*};
}

for_each_node!(ast_node_wrappers);

macro_rules! ast_enum {
    ($(#[$meta:meta])* $name:ident { $($variant:ident),* $(,)? }) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        pub enum $name<'a> {
            $($variant($variant<'a>),)*
        }

        impl<'a> AstNode<'a> for $name<'a> {
            #[inline]
            fn can_cast(kind: SyntaxKind) -> bool {
                $($variant::can_cast(kind))||*
            }

            fn cast(syntax: SyntaxNode<'a>) -> Option<Self> {
                $(
                    if let Some(it) = $variant::cast(syntax) {
                        return Some(Self::$variant(it));
                    }
                )*
                None
            }

            fn syntax(self) -> SyntaxNode<'a> {
                match self {
                    $(Self::$variant(it) => it.syntax(),)*
                }
            }
        }

        $(
            impl<'a> From<$variant<'a>> for $name<'a> {
                #[inline]
                fn from(it: $variant<'a>) -> Self {
                    Self::$variant(it)
                }
            }
        )*
    };
}

ast_enum! {
    /// Any expression, including the unresolved `AmbiguousName` placeholder.
    Expr {
        AssignmentExpression,
        InfixExpression,
        UnaryExpression,
        ParenthesizedExpression,
        Literal,
        AmbiguousName,
        FieldAccess,
        MethodCall,
        ConstructorCall,
        MethodReference,
        TypeExpression,
        ClassLiteral,
        ThisExpression,
    }
}

ast_enum! {
    /// A type written in source. `void` is not a type, see [`VoidType`].
    Type {
        PrimitiveType,
        ClassType,
        ArrayType,
    }
}

ast_enum! {
    Statement {
        LocalVariableDeclaration,
        ExpressionStatement,
        ReturnStatement,
        IfStatement,
        WhileStatement,
        ForeachStatement,
        TryStatement,
        Block,
    }
}

ast_enum! {
    /// A class body member.
    Member {
        FieldDeclaration,
        MethodDeclaration,
    }
}

/// First child that can be viewed as `N`.
#[inline]
fn child<'a, N: AstNode<'a>>(parent: SyntaxNode<'a>) -> Option<N> {
    parent.children().first_is::<N>()
}

/// All children that can be viewed as `N`.
#[inline]
fn children<'a, N: AstNode<'a>>(parent: SyntaxNode<'a>) -> impl Iterator<Item = N> {
    parent.children().filter_is::<N>()
}

/// Child at a fixed position, viewed as `N`.
#[inline]
fn child_at<'a, N: AstNode<'a>>(parent: SyntaxNode<'a>, index: usize) -> Option<N> {
    parent.get_child(index).and_then(N::cast)
}

impl<'a> Expr<'a> {
    /// Skips any number of enclosing parentheses.
    pub fn unparenthesized(self) -> Expr<'a> {
        let mut expr = self;
        while let Expr::ParenthesizedExpression(parens) = expr {
            match parens.expr() {
                Some(inner) => expr = inner,
                None => break,
            }
        }
        expr
    }
}
