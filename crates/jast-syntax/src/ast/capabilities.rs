//! Narrow contracts shared by unrelated node kinds.
//!
//! Every method here is derived from child positions and the node image; a
//! capability carries no state of its own.

use super::{
    AmbiguousName, Annotation, ArrayDimensions, ArrayType, ArrayTypeDim, AssignmentExpression,
    CatchParameter, ClassDeclaration, ClassLiteral, ClassType, ConstructorCall, Expr, FieldAccess,
    FieldDeclaration, FormalParameter, InfixExpression, Literal, LocalVariableDeclaration,
    MethodCall, MethodDeclaration, MethodReference, Modifier, ModifierList,
    ParenthesizedExpression, PrimitiveType, ThisExpression, Type, TypeExpression, UnaryExpression,
    VariableDeclaratorId, child, child_at,
};
use crate::SyntaxKind::*;
use crate::ast::AstNode;
use crate::stream::NodeStream as _;
use crate::{SyntaxNode, TypeInfo, TypeResolver};

/// An operator with a fixed source token.
pub trait OperatorLike: Copy + Eq {
    fn token(self) -> &'static str;

    fn from_token(token: &str) -> Option<Self>;
}

/// A node with exactly two operands and an operator in its image.
pub trait BinaryExpressionLike<'a>: AstNode<'a> {
    type Operator: OperatorLike;

    #[inline]
    fn left_operand(self) -> Option<Expr<'a>> {
        child_at(self.syntax(), 0)
    }

    #[inline]
    fn right_operand(self) -> Option<Expr<'a>> {
        child_at(self.syntax(), 1)
    }

    fn operator(self) -> Option<Self::Operator> {
        self.syntax().image().and_then(Self::Operator::from_token)
    }
}

impl<'a> BinaryExpressionLike<'a> for InfixExpression<'a> {
    type Operator = super::BinaryOp;
}

impl<'a> BinaryExpressionLike<'a> for AssignmentExpression<'a> {
    type Operator = super::AssignmentOp;
}

/// A node that may be qualified by an expression in first position: `a.b()`,
/// `a.b`, `Outer.this`, `a::b`.
pub trait QualifierOwner<'a>: AstNode<'a> {
    #[inline]
    fn qualifier(self) -> Option<Expr<'a>> {
        child_at(self.syntax(), 0)
    }
}

impl<'a> QualifierOwner<'a> for MethodCall<'a> {}
impl<'a> QualifierOwner<'a> for FieldAccess<'a> {}
impl<'a> QualifierOwner<'a> for ThisExpression<'a> {}
impl<'a> QualifierOwner<'a> for MethodReference<'a> {}

/// A node that always has at least one child.
pub trait AtLeastOneChild<'a>: AstNode<'a> {
    #[track_caller]
    fn first_child(self) -> SyntaxNode<'a> {
        let node = self.syntax();
        match node.first_child() {
            Some(first) => first,
            None => panic!("{node:?} must have at least one child"),
        }
    }

    #[track_caller]
    fn last_child(self) -> SyntaxNode<'a> {
        let node = self.syntax();
        match node.last_child() {
            Some(last) => last,
            None => panic!("{node:?} must have at least one child"),
        }
    }
}

/// A node whose children are all of one type, with at least one of them.
pub trait AtLeastOneChildOfType<'a>: AtLeastOneChild<'a> {
    type Child: AstNode<'a>;

    #[track_caller]
    fn first(self) -> Self::Child {
        let first = AtLeastOneChild::first_child(self);
        Self::Child::cast(first).unwrap_or_else(|| panic!("unexpected child {first:?}"))
    }

    #[track_caller]
    fn last(self) -> Self::Child {
        let last = AtLeastOneChild::last_child(self);
        Self::Child::cast(last).unwrap_or_else(|| panic!("unexpected child {last:?}"))
    }
}

impl<'a> AtLeastOneChild<'a> for ArrayDimensions<'a> {}
impl<'a> AtLeastOneChild<'a> for ArrayType<'a> {}
impl<'a> AtLeastOneChild<'a> for TypeExpression<'a> {}
impl<'a> AtLeastOneChild<'a> for ClassLiteral<'a> {}
impl<'a> AtLeastOneChild<'a> for MethodReference<'a> {}
impl<'a> AtLeastOneChild<'a> for InfixExpression<'a> {}
impl<'a> AtLeastOneChild<'a> for AssignmentExpression<'a> {}

impl<'a> AtLeastOneChildOfType<'a> for ArrayDimensions<'a> {
    type Child = ArrayTypeDim<'a>;
}

impl<'a> AtLeastOneChildOfType<'a> for TypeExpression<'a> {
    type Child = Type<'a>;
}

impl<'a> AtLeastOneChildOfType<'a> for ClassLiteral<'a> {
    type Child = Type<'a>;
}

/// A node declaring exactly one variable.
pub trait VariableIdOwner<'a>: AstNode<'a> {
    #[track_caller]
    fn var_id(self) -> VariableDeclaratorId<'a> {
        let node = self.syntax();
        match child(node) {
            Some(id) => id,
            None => panic!("{node:?} has no variable id"),
        }
    }
}

impl<'a> VariableIdOwner<'a> for FormalParameter<'a> {}
impl<'a> VariableIdOwner<'a> for CatchParameter<'a> {}
impl<'a> VariableIdOwner<'a> for super::VariableDeclarator<'a> {}

impl<'a> VariableIdOwner<'a> for super::ForeachStatement<'a> {
    #[track_caller]
    fn var_id(self) -> VariableDeclaratorId<'a> {
        let node = self.syntax();
        match self.variable().and_then(|decl| decl.var_ids().next()) {
            Some(id) => id,
            None => panic!("{node:?} has no variable id"),
        }
    }
}

/// A declaration introducing one or more variables of the same type.
pub trait MultiVariableIdOwner<'a>: AstNode<'a> {
    fn var_ids(self) -> impl Iterator<Item = VariableDeclaratorId<'a>> {
        self.syntax().children().of_kind(VARIABLE_DECLARATOR).children().filter_is()
    }

    #[inline]
    fn type_node(self) -> Option<Type<'a>> {
        child(self.syntax())
    }
}

impl<'a> MultiVariableIdOwner<'a> for LocalVariableDeclaration<'a> {}
impl<'a> MultiVariableIdOwner<'a> for FieldDeclaration<'a> {}

/// A declaration carrying a modifier list.
pub trait ModifierOwner<'a>: AstNode<'a> {
    #[inline]
    fn modifier_list(self) -> Option<ModifierList<'a>> {
        child(self.syntax())
    }

    fn modifiers(self) -> impl Iterator<Item = Modifier> {
        self.modifier_list().into_iter().flat_map(ModifierList::modifiers)
    }

    fn has_modifier(self, modifier: Modifier) -> bool {
        self.modifiers().any(|it| it == modifier)
    }

    fn is_final(self) -> bool {
        self.has_modifier(Modifier::Final)
    }
}

/// A declaration that may be annotated.
pub trait Annotatable<'a>: ModifierOwner<'a> {
    fn annotations(self) -> impl Iterator<Item = Annotation<'a>> {
        self.modifier_list().into_iter().flat_map(ModifierList::annotations)
    }

    /// Matches `name` against the written annotation name, qualified or simple.
    fn is_annotation_present(self, name: &str) -> bool {
        self.annotations().any(|annotation| {
            annotation.name().is_some_and(|written| written == name)
                || annotation.simple_name().is_some_and(|written| written == name)
        })
    }
}

macro_rules! impl_declarations {
    ($($node:ident),* $(,)?) => {$(
        impl<'a> ModifierOwner<'a> for $node<'a> {}
        impl<'a> Annotatable<'a> for $node<'a> {}
    )*};
}

impl_declarations!(
    ClassDeclaration,
    FieldDeclaration,
    MethodDeclaration,
    FormalParameter,
    LocalVariableDeclaration,
    CatchParameter,
);

/// A node with an attached, lazily resolved type.
pub trait TypeNode<'a>: AstNode<'a> {
    /// Returns the type, resolving it on first access.
    #[inline]
    fn type_info(self, resolver: &dyn TypeResolver) -> &'a TypeInfo {
        self.syntax().type_info(resolver)
    }

    #[inline]
    fn cached_type(self) -> Option<&'a TypeInfo> {
        self.syntax().cached_type()
    }

    /// Stores `ty` unless a type is already attached.
    #[inline]
    fn set_type_info(self, ty: TypeInfo) -> bool {
        self.syntax().set_type_info(ty)
    }
}

macro_rules! impl_type_node {
    ($($node:ident),* $(,)?) => {$(
        impl<'a> TypeNode<'a> for $node<'a> {}
    )*};
}

impl_type_node!(
    Expr,
    Type,
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
    PrimitiveType,
    ClassType,
    ArrayType,
    VariableDeclaratorId,
    FormalParameter,
    CatchParameter,
);

