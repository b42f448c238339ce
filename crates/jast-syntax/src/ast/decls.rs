use std::fmt;

use super::{
    Annotation, Block, CatchParameter, ClassBody, ClassDeclaration, CompilationUnit,
    FieldDeclaration, FormalParameter, FormalParameters, LocalVariableDeclaration, Member,
    MethodDeclaration, ModifierList, MultiVariableIdOwner as _, Type, VariableDeclarator,
    VariableDeclaratorId, VoidType, child, child_at, children,
};
use crate::SyntaxKind::{self, *};
use crate::ast::AstNode as _;
use crate::stream::NodeStream as _;

impl<'a> CompilationUnit<'a> {
    pub fn classes(self) -> impl Iterator<Item = ClassDeclaration<'a>> {
        children(self.0)
    }
}

impl<'a> ClassDeclaration<'a> {
    #[inline]
    pub fn name(self) -> Option<&'a str> {
        self.0.image()
    }

    #[inline]
    pub fn body(self) -> Option<ClassBody<'a>> {
        child(self.0)
    }

    pub fn members(self) -> impl Iterator<Item = Member<'a>> {
        self.body().into_iter().flat_map(ClassBody::members)
    }
}

impl<'a> ClassBody<'a> {
    pub fn members(self) -> impl Iterator<Item = Member<'a>> {
        children(self.0)
    }

    pub fn fields(self) -> impl Iterator<Item = FieldDeclaration<'a>> {
        children(self.0)
    }

    pub fn methods(self) -> impl Iterator<Item = MethodDeclaration<'a>> {
        children(self.0)
    }
}

/// A modifier keyword.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Modifier {
    Public,
    Protected,
    Private,
    Static,
    Final,
    Abstract,
}

impl Modifier {
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        Some(match keyword {
            "public" => Self::Public,
            "protected" => Self::Protected,
            "private" => Self::Private,
            "static" => Self::Static,
            "final" => Self::Final,
            "abstract" => Self::Abstract,
            _ => return None,
        })
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Public => "public",
            Self::Protected => "protected",
            Self::Private => "private",
            Self::Static => "static",
            Self::Final => "final",
            Self::Abstract => "abstract",
        }
    }
}

impl fmt::Display for Modifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl<'a> ModifierList<'a> {
    /// Modifier keywords in source order. Annotations are skipped.
    pub fn modifiers(self) -> impl Iterator<Item = Modifier> {
        self.0
            .children()
            .of_kind(MODIFIER)
            .filter_map(|node| node.image().and_then(Modifier::from_keyword))
    }

    pub fn annotations(self) -> impl Iterator<Item = Annotation<'a>> {
        children(self.0)
    }
}

impl<'a> Annotation<'a> {
    /// The name as written, possibly qualified.
    #[inline]
    pub fn name(self) -> Option<&'a str> {
        self.0.image()
    }

    pub fn simple_name(self) -> Option<&'a str> {
        let name = self.name()?;
        Some(name.rsplit('.').next().unwrap_or(name))
    }
}

impl<'a> FieldDeclaration<'a> {
    pub fn declarators(self) -> impl Iterator<Item = VariableDeclarator<'a>> {
        children(self.0)
    }
}

impl<'a> MethodDeclaration<'a> {
    #[inline]
    pub fn name(self) -> Option<&'a str> {
        self.0.image()
    }

    /// The declared return type; `None` for `void`.
    #[inline]
    pub fn result_type(self) -> Option<Type<'a>> {
        child(self.0)
    }

    pub fn is_void(self) -> bool {
        child::<VoidType<'_>>(self.0).is_some()
    }

    #[inline]
    pub fn formal_parameters(self) -> Option<FormalParameters<'a>> {
        child(self.0)
    }

    pub fn parameters(self) -> impl Iterator<Item = FormalParameter<'a>> {
        self.formal_parameters().into_iter().flat_map(FormalParameters::parameters)
    }

    /// Abstract methods have no body.
    #[inline]
    pub fn body(self) -> Option<Block<'a>> {
        child(self.0)
    }

    pub fn is_varargs(self) -> bool {
        self.parameters().last().is_some_and(FormalParameter::is_varargs)
    }
}

impl<'a> FormalParameters<'a> {
    pub fn parameters(self) -> impl Iterator<Item = FormalParameter<'a>> {
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

impl<'a> FormalParameter<'a> {
    #[inline]
    pub fn type_node(self) -> Option<Type<'a>> {
        child(self.0)
    }

    /// Whether the parameter is declared with a trailing `...`.
    pub fn is_varargs(self) -> bool {
        match self.type_node() {
            Some(Type::ArrayType(array)) => array.is_varargs(),
            _ => false,
        }
    }
}

impl<'a> CatchParameter<'a> {
    #[inline]
    pub fn type_node(self) -> Option<Type<'a>> {
        child(self.0)
    }
}

impl<'a> VariableDeclarator<'a> {
    #[inline]
    pub fn initializer(self) -> Option<super::Expr<'a>> {
        child_at(self.0, 1)
    }
}

impl<'a> VariableDeclaratorId<'a> {
    #[inline]
    pub fn name(self) -> Option<&'a str> {
        self.0.image()
    }

    /// The declaration this id belongs to: a parameter, or the local variable
    /// or field declaration around its declarator.
    pub fn owner(self) -> Option<crate::SyntaxNode<'a>> {
        let parent = self.0.parent()?;
        match parent.kind() {
            VARIABLE_DECLARATOR => parent.parent(),
            _ => Some(parent),
        }
    }

    fn owner_kind(self) -> Option<SyntaxKind> {
        self.owner().map(|owner| owner.kind())
    }

    /// The written type of the declaration.
    pub fn type_node(self) -> Option<Type<'a>> {
        let owner = self.owner()?;
        match owner.kind() {
            FORMAL_PARAMETER | CATCH_PARAMETER => child(owner),
            LOCAL_VARIABLE_DECLARATION => LocalVariableDeclaration::cast(owner)?.type_node(),
            FIELD_DECLARATION => FieldDeclaration::cast(owner)?.type_node(),
            _ => None,
        }
    }

    pub fn is_formal_parameter(self) -> bool {
        self.owner_kind() == Some(FORMAL_PARAMETER)
    }

    pub fn is_exception_block_parameter(self) -> bool {
        self.owner_kind() == Some(CATCH_PARAMETER)
    }

    pub fn is_field(self) -> bool {
        self.owner_kind() == Some(FIELD_DECLARATION)
    }

    pub fn is_local_variable(self) -> bool {
        self.owner_kind() == Some(LOCAL_VARIABLE_DECLARATION)
    }

    /// Whether this is the variable of an enhanced `for` loop.
    pub fn is_foreach_variable(self) -> bool {
        self.owner()
            .and_then(|owner| owner.parent())
            .is_some_and(|it| it.kind() == FOREACH_STATEMENT)
    }
}
