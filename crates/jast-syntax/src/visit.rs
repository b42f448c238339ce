//! Double dispatch over node kinds.
//!
//! [`SyntaxNode::accept`] picks the `visit_*` method for the node's kind.
//! Every kind-specific method falls back to `visit_node`, which by default
//! walks the children in order with the same visitor. A visitor therefore
//! only overrides the kinds it cares about, and calls [`walk`] itself when it
//! still wants to descend.
//!
//! Kinds without a typed wrapper, such as `MODIFIER` and `ERROR`, go straight
//! to `visit_node`.

use crate::ast::{self, AstNode as _};
use crate::{SyntaxKind, SyntaxNode};

macro_rules! visitors {
    ($($name:ident = $kind:ident, $visit:ident;)*) => {
        /// A visitor threading a value through the traversal.
        pub trait Visitor<'a> {
            type Data;

            fn visit_node(&mut self, node: SyntaxNode<'a>, data: Self::Data) -> Self::Data {
                walk(self, node, data)
            }

            $(
                fn $visit(&mut self, node: ast::$name<'a>, data: Self::Data) -> Self::Data {
                    self.visit_node(node.syntax(), data)
                }
            )*
        }

        /// A visitor accumulating into shared state.
        pub trait SideEffectingVisitor<'a> {
            type Data;

            fn visit_node(&mut self, node: SyntaxNode<'a>, data: &mut Self::Data) {
                walk_mut(self, node, data);
            }

            $(
                fn $visit(&mut self, node: ast::$name<'a>, data: &mut Self::Data) {
                    self.visit_node(node.syntax(), data);
                }
            )*
        }

        impl<'a> SyntaxNode<'a> {
            /// Dispatches to the `visit_*` method for this node's kind.
            pub fn accept<V>(self, visitor: &mut V, data: V::Data) -> V::Data
            where
                V: Visitor<'a> + ?Sized,
            {
                match self.kind() {
                    $(SyntaxKind::$kind => visitor.$visit(ast::$name(self), data),)*
                    _ => visitor.visit_node(self, data),
                }
            }

            pub fn accept_mut<V>(self, visitor: &mut V, data: &mut V::Data)
            where
                V: SideEffectingVisitor<'a> + ?Sized,
            {
                match self.kind() {
                    $(SyntaxKind::$kind => visitor.$visit(ast::$name(self), data),)*
                    _ => visitor.visit_node(self, data),
                }
            }
        }

        $(
            impl<'a> ast::$name<'a> {
                #[inline]
                pub fn accept<V>(self, visitor: &mut V, data: V::Data) -> V::Data
                where
                    V: Visitor<'a> + ?Sized,
                {
                    visitor.$visit(self, data)
                }

                #[inline]
                pub fn accept_mut<V>(self, visitor: &mut V, data: &mut V::Data)
                where
                    V: SideEffectingVisitor<'a> + ?Sized,
                {
                    visitor.$visit(self, data)
                }
            }
        )*
    };
}

for_each_node!(visitors);

macro_rules! enum_accept {
    ($($name:ident),*) => {$(
        impl<'a> ast::$name<'a> {
            #[inline]
            pub fn accept<V>(self, visitor: &mut V, data: V::Data) -> V::Data
            where
                V: Visitor<'a> + ?Sized,
            {
                self.syntax().accept(visitor, data)
            }

            #[inline]
            pub fn accept_mut<V>(self, visitor: &mut V, data: &mut V::Data)
            where
                V: SideEffectingVisitor<'a> + ?Sized,
            {
                self.syntax().accept_mut(visitor, data)
            }
        }
    )*};
}

enum_accept!(Expr, Type, Statement, Member);

/// Visits the children of `node` in order, threading `data` through them.
pub fn walk<'a, V>(visitor: &mut V, node: SyntaxNode<'a>, data: V::Data) -> V::Data
where
    V: Visitor<'a> + ?Sized,
{
    node.children().fold(data, |data, child| child.accept(visitor, data))
}

/// Visits the children of `node` in order.
pub fn walk_mut<'a, V>(visitor: &mut V, node: SyntaxNode<'a>, data: &mut V::Data)
where
    V: SideEffectingVisitor<'a> + ?Sized,
{
    for child in node.children() {
        child.accept_mut(visitor, data);
    }
}

#[cfg(test)]
mod tests {
    use text_size::TextRange;

    use super::*;
    use crate::SyntaxKind::*;
    use crate::{NodeId, SyntaxTree, TreeBuilder};

    /// `a.b(c)` with a stray modifier leaf thrown in.
    fn sample() -> SyntaxTree {
        let mut builder = TreeBuilder::new("a.b(c) final");
        let leaf = |builder: &mut TreeBuilder, kind, image: &str, start: u32| -> NodeId {
            let node = builder.create_node(kind);
            builder.push_image(node, image);
            builder.extend_range(node, TextRange::at(start.into(), (image.len() as u32).into()));
            builder.close(node);
            node
        };

        let root = builder.create_node(EXPRESSION_STATEMENT);
        let call = builder.create_node(METHOD_CALL);
        builder.append_child(root, call);
        let qualifier = leaf(&mut builder, AMBIGUOUS_NAME, "a", 0);
        builder.append_child(call, qualifier);
        builder.set_image(call, "b");
        let args = builder.create_node(ARGUMENT_LIST);
        builder.append_child(call, args);
        let arg = leaf(&mut builder, AMBIGUOUS_NAME, "c", 4);
        builder.append_child(args, arg);
        builder.close(args);
        builder.close(call);
        let modifier = leaf(&mut builder, MODIFIER, "final", 7);
        builder.append_child(root, modifier);
        builder.close(root);
        builder.finish(root)
    }

    struct Collect;

    impl<'a> SideEffectingVisitor<'a> for Collect {
        type Data = Vec<SyntaxKind>;

        fn visit_node(&mut self, node: SyntaxNode<'a>, data: &mut Self::Data) {
            data.push(node.kind());
            walk_mut(self, node, data);
        }
    }

    #[test]
    fn default_visitor_visits_every_node_once() {
        let tree = sample();
        let mut seen = Vec::new();
        tree.root().accept_mut(&mut Collect, &mut seen);

        let expected: Vec<_> = tree.root().descendants_or_self().map(SyntaxNode::kind).collect();
        assert_eq!(seen, expected);
        assert_eq!(seen.len(), tree.len());
    }

    struct CountNames;

    impl<'a> Visitor<'a> for CountNames {
        type Data = usize;

        fn visit_ambiguous_name(&mut self, _node: ast::AmbiguousName<'a>, data: usize) -> usize {
            data + 1
        }
    }

    #[test]
    fn value_visitor_threads_data() {
        let tree = sample();
        assert_eq!(tree.root().accept(&mut CountNames, 0), 2);
    }

    struct SkipArguments;

    impl<'a> Visitor<'a> for SkipArguments {
        type Data = Vec<&'a str>;

        fn visit_argument_list(
            &mut self,
            _node: ast::ArgumentList<'a>,
            data: Self::Data,
        ) -> Self::Data {
            data
        }

        fn visit_ambiguous_name(
            &mut self,
            node: ast::AmbiguousName<'a>,
            mut data: Self::Data,
        ) -> Self::Data {
            data.push(node.name());
            data
        }
    }

    #[test]
    fn override_controls_descent() {
        let tree = sample();
        assert_eq!(tree.root().accept(&mut SkipArguments, Vec::new()), ["a"]);
    }

    #[test]
    fn typed_accept_uses_kind_method() {
        let tree = sample();
        let call = tree.root().child_at(0);
        let call = ast::MethodCall::cast(call).unwrap();
        assert_eq!(call.accept(&mut CountNames, 10), 12);
    }
}
