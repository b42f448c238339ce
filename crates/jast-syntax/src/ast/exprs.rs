use super::{
    AmbiguousName, ArgumentList, AtLeastOneChildOfType as _, ClassLiteral, ClassType,
    ConstructorCall, Expr, FieldAccess, Literal, MethodCall, MethodReference, OperatorLike,
    ParenthesizedExpression, Type, TypeArguments, TypeExpression, UnaryExpression, child,
    child_at, children,
};

macro_rules! operators {
    ($(#[$meta:meta])* $name:ident { $($variant:ident = $token:literal),* $(,)? }) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant,)*
        }

        impl OperatorLike for $name {
            #[inline]
            fn token(self) -> &'static str {
                match self {
                    $(Self::$variant => $token,)*
                }
            }

            fn from_token(token: &str) -> Option<Self> {
                match token {
                    $($token => Some(Self::$variant),)*
                    _ => None,
                }
            }
        }
    };
}

operators! {
    /// Operator of an infix expression.
    BinaryOp {
        Or = "||",
        And = "&&",
        Eq = "==",
        Ne = "!=",
        Lt = "<",
        Gt = ">",
        Le = "<=",
        Ge = ">=",
        Add = "+",
        Sub = "-",
        Mul = "*",
        Div = "/",
        Rem = "%",
    }
}

operators! {
    AssignmentOp {
        Assign = "=",
        AddAssign = "+=",
        SubAssign = "-=",
    }
}

operators! {
    UnaryOp {
        Not = "!",
        Neg = "-",
    }
}

impl BinaryOp {
    /// Whether the operator yields a `boolean` whatever its operand types.
    pub fn is_boolean(self) -> bool {
        matches!(
            self,
            Self::Or | Self::And | Self::Eq | Self::Ne | Self::Lt | Self::Gt | Self::Le | Self::Ge
        )
    }
}

impl AssignmentOp {
    #[inline]
    pub fn is_compound(self) -> bool {
        self != Self::Assign
    }
}

impl<'a> UnaryExpression<'a> {
    pub fn operator(self) -> Option<UnaryOp> {
        self.0.image().and_then(UnaryOp::from_token)
    }

    #[inline]
    pub fn operand(self) -> Option<Expr<'a>> {
        child(self.0)
    }
}

impl<'a> ParenthesizedExpression<'a> {
    #[inline]
    pub fn expr(self) -> Option<Expr<'a>> {
        child(self.0)
    }
}

/// Lexical category of a literal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LiteralKind {
    Int,
    Long,
    Float,
    Double,
    Char,
    String,
    Boolean,
    Null,
}

impl<'a> Literal<'a> {
    /// The literal as written.
    #[inline]
    pub fn value(self) -> &'a str {
        self.0.image().unwrap_or_default()
    }

    pub fn kind(self) -> LiteralKind {
        let value = self.value();
        match value {
            "true" | "false" => LiteralKind::Boolean,
            "null" => LiteralKind::Null,
            _ if value.starts_with('"') => LiteralKind::String,
            _ if value.starts_with('\'') => LiteralKind::Char,
            _ if value.ends_with(['l', 'L']) => LiteralKind::Long,
            _ if value.starts_with("0x") || value.starts_with("0X") => LiteralKind::Int,
            _ if value.ends_with(['f', 'F']) => LiteralKind::Float,
            _ if value.ends_with(['d', 'D']) || value.contains(['.', 'e', 'E']) => {
                LiteralKind::Double
            }
            _ => LiteralKind::Int,
        }
    }
}

impl<'a> AmbiguousName<'a> {
    /// The dotted name as written.
    #[inline]
    pub fn name(self) -> &'a str {
        self.0.image().unwrap_or_default()
    }

    pub fn segments(self) -> impl Iterator<Item = &'a str> {
        self.name().split('.')
    }

    pub fn last_segment(self) -> &'a str {
        let name = self.name();
        name.rsplit('.').next().unwrap_or(name)
    }
}

impl<'a> FieldAccess<'a> {
    #[inline]
    pub fn name(self) -> Option<&'a str> {
        self.0.image()
    }
}

impl<'a> MethodCall<'a> {
    #[inline]
    pub fn name(self) -> Option<&'a str> {
        self.0.image()
    }

    #[inline]
    pub fn arguments(self) -> Option<ArgumentList<'a>> {
        child(self.0)
    }
}

impl<'a> ArgumentList<'a> {
    pub fn args(self) -> impl Iterator<Item = Expr<'a>> {
        children(self.0)
    }

    #[inline]
    pub fn len(self) -> usize {
        self.0.child_count()
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.len() == 0
    }
}

impl<'a> ConstructorCall<'a> {
    #[inline]
    pub fn class_type(self) -> Option<ClassType<'a>> {
        child(self.0)
    }

    #[inline]
    pub fn arguments(self) -> Option<ArgumentList<'a>> {
        child(self.0)
    }
}

impl<'a> MethodReference<'a> {
    /// The expression left of `::`. After finalization explicit types are
    /// wrapped in a [`TypeExpression`], so this is always an expression.
    ///
    /// Same node as [`QualifierOwner::qualifier`](super::QualifierOwner::qualifier),
    /// without the `Option`.
    #[track_caller]
    pub fn lhs(self) -> Expr<'a> {
        match child_at(self.0, 0) {
            Some(qualifier) => qualifier,
            None => panic!("{:?} has no qualifier", self.0),
        }
    }

    /// Whether this is `Foo::new`.
    #[inline]
    pub fn is_constructor_reference(self) -> bool {
        self.0.image() == Some("new")
    }

    /// The referenced method name; `None` for constructor references.
    pub fn method_name(self) -> Option<&'a str> {
        self.0.image().filter(|_| !self.is_constructor_reference())
    }

    #[inline]
    pub fn type_arguments(self) -> Option<TypeArguments<'a>> {
        child(self.0)
    }
}

impl<'a> TypeExpression<'a> {
    #[inline]
    pub fn type_node(self) -> Type<'a> {
        self.first()
    }
}

impl<'a> ClassLiteral<'a> {
    #[inline]
    pub fn type_node(self) -> Type<'a> {
        self.first()
    }
}
