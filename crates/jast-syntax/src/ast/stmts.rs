use super::{
    Block, CatchClause, CatchParameter, Expr, ExpressionStatement, ForeachStatement, IfStatement,
    LocalVariableDeclaration, ReturnStatement, Statement, TryStatement, VariableDeclarator,
    WhileStatement, child, child_at, children,
};

impl<'a> Block<'a> {
    pub fn statements(self) -> impl Iterator<Item = Statement<'a>> {
        children(self.0)
    }
}

impl<'a> LocalVariableDeclaration<'a> {
    pub fn declarators(self) -> impl Iterator<Item = VariableDeclarator<'a>> {
        children(self.0)
    }
}

impl<'a> ExpressionStatement<'a> {
    #[inline]
    pub fn expr(self) -> Option<Expr<'a>> {
        child(self.0)
    }
}

impl<'a> ReturnStatement<'a> {
    #[inline]
    pub fn expr(self) -> Option<Expr<'a>> {
        child(self.0)
    }
}

impl<'a> IfStatement<'a> {
    #[inline]
    pub fn condition(self) -> Option<Expr<'a>> {
        child_at(self.0, 0)
    }

    #[inline]
    pub fn then_branch(self) -> Option<Statement<'a>> {
        child_at(self.0, 1)
    }

    #[inline]
    pub fn else_branch(self) -> Option<Statement<'a>> {
        child_at(self.0, 2)
    }
}

impl<'a> WhileStatement<'a> {
    #[inline]
    pub fn condition(self) -> Option<Expr<'a>> {
        child_at(self.0, 0)
    }

    #[inline]
    pub fn body(self) -> Option<Statement<'a>> {
        child_at(self.0, 1)
    }
}

impl<'a> ForeachStatement<'a> {
    /// The loop variable declaration, `String s` in `for (String s : list)`.
    #[inline]
    pub fn variable(self) -> Option<LocalVariableDeclaration<'a>> {
        child_at(self.0, 0)
    }

    #[inline]
    pub fn iterable(self) -> Option<Expr<'a>> {
        child_at(self.0, 1)
    }

    #[inline]
    pub fn body(self) -> Option<Statement<'a>> {
        child_at(self.0, 2)
    }
}

impl<'a> TryStatement<'a> {
    #[inline]
    pub fn body(self) -> Option<Block<'a>> {
        child(self.0)
    }

    pub fn catch_clauses(self) -> impl Iterator<Item = CatchClause<'a>> {
        children(self.0)
    }
}

impl<'a> CatchClause<'a> {
    #[inline]
    pub fn parameter(self) -> Option<CatchParameter<'a>> {
        child(self.0)
    }

    #[inline]
    pub fn body(self) -> Option<Block<'a>> {
        child(self.0)
    }
}
