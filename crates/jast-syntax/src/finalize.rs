//! One-shot rewriting of ambiguous placeholders.
//!
//! Some spans cannot be classified by the grammar alone: `a.b.c` may name a
//! package, a type or a value until the surrounding syntax is known. The
//! parser emits an `AMBIGUOUS_NAME` for those, and the enclosing node's
//! finalizer replaces it when a purely local cue settles the question.
//! Finalizers only look at direct children; deeper placeholders were handled
//! when their own parents closed. Placeholders without a local cue stay in
//! the tree for type resolution to deal with.

use text_size::TextRange;

use crate::SyntaxKind::{self, *};
use crate::builder::{Arena, NodeId};

/// Hook invoked exactly once per node, when the node is closed.
pub trait Finalizer {
    fn finalize(&mut self, cx: &mut FinalizeCx<'_>);
}

/// Leaves every node untouched.
impl Finalizer for () {
    fn finalize(&mut self, _cx: &mut FinalizeCx<'_>) {}
}

/// The Java disambiguation rules.
#[derive(Clone, Copy, Debug, Default)]
pub struct Disambiguator;

impl Finalizer for Disambiguator {
    fn finalize(&mut self, cx: &mut FinalizeCx<'_>) {
        match cx.kind() {
            METHOD_REFERENCE => method_reference(cx),
            CLASS_LITERAL => class_literal(cx),
            THIS_EXPRESSION => this_expression(cx),
            _ => {}
        }
    }
}

/// `Foo::new` can only be a type on the left; an explicit type node on the
/// left is wrapped so that the qualifier is always an expression.
fn method_reference(cx: &mut FinalizeCx<'_>) {
    let Some(lhs) = cx.first_child() else { return };
    match cx.kind_of(lhs) {
        AMBIGUOUS_NAME if cx.image() == Some("new") => {
            cx.force_type_context(0);
            cx.wrap_child_at(0, TYPE_EXPRESSION);
        }
        kind if kind.is_type() => {
            cx.wrap_child_at(0, TYPE_EXPRESSION);
        }
        _ => {}
    }
}

/// `a.b.C.class`: everything before `.class` is a type.
fn class_literal(cx: &mut FinalizeCx<'_>) {
    if cx.first_child().is_some_and(|lhs| cx.kind_of(lhs) == AMBIGUOUS_NAME) {
        cx.force_type_context(0);
    }
}

/// `Outer.this`: the qualifier names the enclosing class.
fn this_expression(cx: &mut FinalizeCx<'_>) {
    if cx.first_child().is_some_and(|lhs| cx.kind_of(lhs) == AMBIGUOUS_NAME) {
        cx.force_type_context(0);
        cx.wrap_child_at(0, TYPE_EXPRESSION);
    }
}

/// Restricted view of the tree under construction handed to a [`Finalizer`].
///
/// Only the direct children of the node being closed can be rewritten.
pub struct FinalizeCx<'b> {
    arena: &'b mut Arena,
    node: NodeId,
}

impl<'b> FinalizeCx<'b> {
    pub(crate) fn new(arena: &'b mut Arena, node: NodeId) -> Self {
        Self { arena, node }
    }

    /// The node being closed.
    #[inline]
    pub fn node(&self) -> NodeId {
        self.node
    }

    #[inline]
    pub fn kind(&self) -> SyntaxKind {
        self.kind_of(self.node)
    }

    #[inline]
    pub fn image(&self) -> Option<&str> {
        self.image_of(self.node)
    }

    #[inline]
    pub fn child_count(&self) -> usize {
        self.arena.node(self.node).children.len()
    }

    #[inline]
    #[track_caller]
    pub fn child_at(&self, index: usize) -> NodeId {
        self.arena.node(self.node).children[index]
    }

    #[inline]
    pub fn first_child(&self) -> Option<NodeId> {
        self.arena.node(self.node).children.first().copied()
    }

    #[inline]
    pub fn kind_of(&self, node: NodeId) -> SyntaxKind {
        self.arena.node(node).kind
    }

    #[inline]
    pub fn image_of(&self, node: NodeId) -> Option<&str> {
        self.arena.node(node).image.as_deref()
    }

    #[inline]
    pub fn range_of(&self, node: NodeId) -> TextRange {
        self.arena.node(node).range.unwrap_or_default()
    }

    /// Creates a complete node with the given detached `children`.
    ///
    /// Synthesized nodes are closed on creation and never finalized.
    #[track_caller]
    pub fn synthesize(
        &mut self,
        kind: SyntaxKind,
        image: Option<&str>,
        range: TextRange,
        children: &[NodeId],
    ) -> NodeId {
        let node = self.arena.alloc(kind);
        self.arena.node_mut(node).image = image.map(str::to_owned);
        for &child in children {
            self.arena.attach(node, child);
        }
        self.arena.seal(node, range);
        node
    }

    /// Puts `new_child` at `index`, detaching and returning the old child.
    #[track_caller]
    pub fn replace_child_at(&mut self, index: usize, new_child: NodeId) -> NodeId {
        let old_child = self.arena.replace_child_at(self.node, index, new_child);
        tracing::trace!(
            parent = ?self.kind(),
            index,
            old = ?self.kind_of(old_child),
            new = ?self.kind_of(new_child),
            "replaced child"
        );
        old_child
    }

    /// Replaces the child at `index` by a new `kind` node that owns it.
    #[track_caller]
    pub fn wrap_child_at(&mut self, index: usize, kind: SyntaxKind) -> NodeId {
        let child = self.child_at(index);
        let range = self.range_of(child);
        let placeholder = self.synthesize(TOMBSTONE, None, range, &[]);
        self.replace_child_at(index, placeholder);

        let wrapper = self.synthesize(kind, None, range, &[child]);
        self.replace_child_at(index, wrapper);
        wrapper
    }

    /// Reinterprets the `AMBIGUOUS_NAME` at `index` as a class type.
    ///
    /// The placeholder is detached; the new `CLASS_TYPE` keeps its name and span.
    #[track_caller]
    pub fn force_type_context(&mut self, index: usize) -> NodeId {
        let name = self.child_at(index);
        assert_eq!(self.kind_of(name), AMBIGUOUS_NAME, "only ambiguous names can be forced");

        let image = self.image_of(name).map(str::to_owned);
        let range = self.range_of(name);
        let class_type = self.synthesize(CLASS_TYPE, image.as_deref(), range, &[]);
        self.replace_child_at(index, class_type);
        tracing::debug!(name = image.as_deref().unwrap_or_default(), "forced type context");
        class_type
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use text_size::TextRange;

    use super::*;
    use crate::TreeBuilder;

    struct Counting<'c>(&'c Cell<usize>);

    impl Finalizer for Counting<'_> {
        fn finalize(&mut self, _cx: &mut FinalizeCx<'_>) {
            self.0.set(self.0.get() + 1);
        }
    }

    fn name(builder: &mut TreeBuilder<impl Finalizer>, text: &str, start: u32) -> NodeId {
        let node = builder.create_node(AMBIGUOUS_NAME);
        builder.push_image(node, text);
        builder.extend_range(node, TextRange::at(start.into(), (text.len() as u32).into()));
        node
    }

    #[test]
    fn close_runs_finalizer_once() {
        let count = Cell::new(0);
        let mut builder = TreeBuilder::with_finalizer("x", Counting(&count));
        let node = builder.create_node(BLOCK);
        builder.close(node);
        builder.close(node);
        builder.close(node);

        assert_eq!(count.get(), 1);
        assert!(builder.is_closed(node));
    }

    #[test]
    fn constructor_reference_forces_type() {
        let text = "ArrayList::new";
        let mut builder = TreeBuilder::new(text);
        let reference = builder.create_node(METHOD_REFERENCE);
        let lhs = name(&mut builder, "ArrayList", 0);
        builder.append_child(reference, lhs);
        builder.close(lhs);
        builder.extend_range(reference, TextRange::new(9.into(), 11.into()));
        builder.push_image(reference, "new");
        builder.extend_range(reference, TextRange::new(11.into(), 14.into()));
        builder.close(reference);

        assert_eq!(builder.parent(lhs), None);
        let qualifier = builder.child_at(reference, 0);
        assert_eq!(builder.kind(qualifier), TYPE_EXPRESSION);
        let ty = builder.child_at(qualifier, 0);
        assert_eq!(builder.kind(ty), CLASS_TYPE);
        assert_eq!(builder.image(ty), Some("ArrayList"));

        let tree = builder.finish(reference);
        assert_eq!(tree.len(), 3);
        assert!(tree.root().descendants().all(|node| node.kind() != AMBIGUOUS_NAME));
        assert_eq!(tree.root().child_at(0).text_range(), TextRange::new(0.into(), 9.into()));
    }

    #[test]
    fn method_reference_keeps_ambiguous_qualifier() {
        let mut builder = TreeBuilder::new("list::add");
        let reference = builder.create_node(METHOD_REFERENCE);
        let lhs = name(&mut builder, "list", 0);
        builder.append_child(reference, lhs);
        builder.close(lhs);
        builder.push_image(reference, "add");
        builder.close(reference);

        assert_eq!(builder.child_at(reference, 0), lhs);
        assert_eq!(builder.parent(lhs), Some(reference));
    }

    #[test]
    fn explicit_type_is_wrapped() {
        let mut builder = TreeBuilder::new("int[]::new");
        let reference = builder.create_node(METHOD_REFERENCE);
        let array = builder.create_node(ARRAY_TYPE);
        builder.append_child(reference, array);
        builder.close(array);
        builder.push_image(reference, "new");
        builder.close(reference);

        let wrapper = builder.child_at(reference, 0);
        assert_eq!(builder.kind(wrapper), TYPE_EXPRESSION);
        assert_eq!(builder.child_at(wrapper, 0), array);
        assert_eq!(builder.parent(array), Some(wrapper));
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn replace_out_of_range_panics() {
        struct Replacing;

        impl Finalizer for Replacing {
            fn finalize(&mut self, cx: &mut FinalizeCx<'_>) {
                let node = cx.synthesize(TOMBSTONE, None, TextRange::default(), &[]);
                cx.replace_child_at(3, node);
            }
        }

        let mut builder = TreeBuilder::with_finalizer("", Replacing);
        let node = builder.create_node(BLOCK);
        builder.close(node);
    }
}
