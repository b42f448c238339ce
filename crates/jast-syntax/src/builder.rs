//! Two-phase construction of a [`SyntaxTree`].
//!
//! Nodes are created open, receive children, payload and span while open, and
//! are closed exactly once. Closing runs the [`Finalizer`], which may rewrite
//! direct children through [`FinalizeCx`]. [`TreeBuilder::finish`] freezes the
//! arena into an immutable tree; nothing can be mutated after that point.

use text_size::{TextRange, TextSize};

use crate::finalize::{Disambiguator, FinalizeCx, Finalizer};
use crate::syntax::{self, TreeInner};
use crate::{SyntaxKind, SyntaxTree};

/// Handle to a node under construction.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct NodeId(u32);

impl NodeId {
    #[inline]
    fn index(self) -> usize {
        self.0 as usize
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum State {
    Open,
    Finalizing,
    Closed,
}

pub(crate) struct Node {
    pub(crate) kind: SyntaxKind,
    pub(crate) state: State,
    pub(crate) parent: Option<NodeId>,
    pub(crate) children: Vec<NodeId>,
    pub(crate) range: Option<TextRange>,
    pub(crate) image: Option<String>,
}

/// Node storage shared by the builder and the finalizer context.
pub(crate) struct Arena {
    nodes: Vec<Node>,
    last_end: TextSize,
    /// Closed nodes that saw no token yet; they get an empty span at the
    /// start of the next token.
    pending: Vec<NodeId>,
}

const DEFAULT_TREE_SIZE: usize = 1024;

impl Arena {
    fn new() -> Self {
        Self {
            nodes: Vec::with_capacity(DEFAULT_TREE_SIZE),
            last_end: TextSize::new(0),
            pending: Vec::new(),
        }
    }

    pub(crate) fn alloc(&mut self, kind: SyntaxKind) -> NodeId {
        let id = NodeId(self.nodes.len().try_into().expect("too many syntax nodes"));
        self.nodes.push(Node {
            kind,
            state: State::Open,
            parent: None,
            children: Vec::new(),
            range: None,
            image: None,
        });
        id
    }

    #[inline]
    #[track_caller]
    pub(crate) fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.index()]
    }

    #[inline]
    #[track_caller]
    pub(crate) fn node_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id.index()]
    }

    #[track_caller]
    fn expect_open(&mut self, id: NodeId) -> &mut Node {
        let node = self.node_mut(id);
        assert_eq!(node.state, State::Open, "{:?} node is already closed", node.kind);
        node
    }

    #[track_caller]
    pub(crate) fn attach(&mut self, parent: NodeId, child: NodeId) {
        assert_ne!(parent, child, "a node cannot be its own child");
        let child_node = self.node_mut(child);
        assert!(
            child_node.parent.is_none(),
            "{:?} node already has a parent",
            child_node.kind
        );
        child_node.parent = Some(parent);
        self.node_mut(parent).children.push(child);
    }

    #[track_caller]
    pub(crate) fn replace_child_at(
        &mut self,
        parent: NodeId,
        index: usize,
        new_child: NodeId,
    ) -> NodeId {
        let child_count = self.node(parent).children.len();
        assert!(
            index < child_count,
            "child index {index} out of range for a node with {child_count} children"
        );
        assert!(self.node(new_child).parent.is_none(), "replacement node already has a parent");

        let old_child = std::mem::replace(&mut self.node_mut(parent).children[index], new_child);
        self.node_mut(old_child).parent = None;
        self.node_mut(new_child).parent = Some(parent);
        old_child
    }

    pub(crate) fn seal(&mut self, id: NodeId, range: TextRange) {
        let node = self.node_mut(id);
        node.range = Some(range);
        node.state = State::Closed;
    }

    /// Gives `id` and its span-less descendants an empty span at `offset`.
    fn place_empty(&mut self, id: NodeId, offset: TextSize) {
        let mut stack = vec![id];
        while let Some(id) = stack.pop() {
            let node = self.node_mut(id);
            if node.range.is_some() {
                continue;
            }
            node.range = Some(TextRange::empty(offset));
            stack.extend(node.children.iter().copied());
        }
    }

    fn place_pending(&mut self, offset: TextSize) {
        for id in std::mem::take(&mut self.pending) {
            self.place_empty(id, offset);
        }
    }
}

/// Builds a [`SyntaxTree`] out of open nodes.
///
/// Structural misuse (appending to a closed node, attaching a node twice,
/// finishing with open nodes) is a bug in the caller and panics.
pub struct TreeBuilder<F = Disambiguator> {
    arena: Arena,
    text: Box<str>,
    finalizer: F,
}

impl TreeBuilder {
    /// Creates a builder for `text` that disambiguates placeholders on close.
    pub fn new(text: &str) -> Self {
        Self::with_finalizer(text, Disambiguator)
    }
}

impl<F: Finalizer> TreeBuilder<F> {
    pub fn with_finalizer(text: &str, finalizer: F) -> Self {
        Self { arena: Arena::new(), text: text.into(), finalizer }
    }

    /// Creates a new open node of the given kind.
    pub fn create_node(&mut self, kind: SyntaxKind) -> NodeId {
        debug_assert!(kind.is_node(), "{kind:?} is a token kind");
        self.arena.alloc(kind)
    }

    /// Appends `child` as the last child of `parent`.
    #[track_caller]
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) {
        self.arena.expect_open(parent);
        self.arena.attach(parent, child);
    }

    /// Replaces the image of an open node.
    #[track_caller]
    pub fn set_image(&mut self, node: NodeId, image: &str) {
        self.arena.expect_open(node).image = Some(image.to_owned());
    }

    /// Appends `text` to the image of an open node.
    #[track_caller]
    pub fn push_image(&mut self, node: NodeId, text: &str) {
        self.arena.expect_open(node).image.get_or_insert_with(String::new).push_str(text);
    }

    /// Extends the span of `node` and of every open ancestor to cover `range`.
    #[track_caller]
    pub fn extend_range(&mut self, node: NodeId, range: TextRange) {
        assert!(
            usize::from(range.end()) <= self.text.len(),
            "range {range:?} is outside of the source text"
        );
        self.arena.last_end = self.arena.last_end.max(range.end());
        self.arena.place_pending(range.start());

        let mut current = Some(node);
        while let Some(id) = current {
            let node = self.arena.node_mut(id);
            if node.state != State::Open {
                break;
            }
            node.range = Some(node.range.map_or(range, |old| old.cover(range)));
            current = node.parent;
        }
    }

    /// Closes `node` and runs the finalizer on it.
    ///
    /// Every child must already be closed. Closing an already closed node
    /// does nothing: the finalizer runs at most once per node.
    ///
    /// A node without tokens of its own spans its children. A node without
    /// any span gets an empty one at the start of the next token, or at the
    /// end of its parent when the parent closes first.
    #[track_caller]
    pub fn close(&mut self, node: NodeId) {
        let data = self.arena.node_mut(node);
        if data.state != State::Open {
            tracing::debug!(kind = ?data.kind, "ignoring repeated close");
            return;
        }
        let kind = data.kind;
        data.state = State::Finalizing;

        let arena = &self.arena;
        if let Some(open_child) = arena
            .node(node)
            .children
            .iter()
            .map(|&child| arena.node(child))
            .find(|child| child.state != State::Closed)
        {
            panic!("closing {kind:?} while its {:?} child is still open", open_child.kind);
        }

        let range = self.arena.node(node).range.or_else(|| {
            arena
                .node(node)
                .children
                .iter()
                .filter_map(|&child| arena.node(child).range)
                .reduce(TextRange::cover)
        });
        match range {
            Some(range) => {
                self.arena.node_mut(node).range = Some(range);
                if !self.arena.pending.is_empty() {
                    let children = self.arena.node(node).children.clone();
                    for child in children {
                        self.arena.place_empty(child, range.end());
                    }
                }
            }
            None => self.arena.pending.push(node),
        }

        self.finalizer.finalize(&mut FinalizeCx::new(&mut self.arena, node));
        self.arena.node_mut(node).state = State::Closed;
    }

    #[inline]
    pub fn kind(&self, node: NodeId) -> SyntaxKind {
        self.arena.node(node).kind
    }

    #[inline]
    pub fn image(&self, node: NodeId) -> Option<&str> {
        self.arena.node(node).image.as_deref()
    }

    #[inline]
    pub fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.arena.node(node).parent
    }

    #[inline]
    pub fn child_count(&self, node: NodeId) -> usize {
        self.arena.node(node).children.len()
    }

    #[inline]
    #[track_caller]
    pub fn child_at(&self, node: NodeId, index: usize) -> NodeId {
        self.arena.node(node).children[index]
    }

    #[inline]
    pub fn is_closed(&self, node: NodeId) -> bool {
        self.arena.node(node).state == State::Closed
    }

    pub fn finalizer(&self) -> &F {
        &self.finalizer
    }

    /// Freezes everything reachable from `root` into a [`SyntaxTree`].
    ///
    /// Nodes are renumbered in document order; nodes detached by the
    /// finalizer are dropped.
    #[track_caller]
    pub fn finish(self, root: NodeId) -> SyntaxTree {
        let Self { mut arena, text, finalizer: _ } = self;
        assert!(arena.node(root).parent.is_none(), "the root node must not have a parent");
        let end = arena.last_end;
        arena.place_pending(end);

        let mut order = Vec::with_capacity(arena.nodes.len());
        let mut stack = vec![root];
        while let Some(id) = stack.pop() {
            let node = arena.node(id);
            assert_eq!(node.state, State::Closed, "{:?} node was never closed", node.kind);
            order.push(id);
            stack.extend(node.children.iter().rev().copied());
        }

        let mut new_index = vec![u32::MAX; arena.nodes.len()];
        for (index, id) in order.iter().enumerate() {
            new_index[id.index()] = index as u32;
        }

        let mut nodes = Vec::with_capacity(order.len());
        let mut children = Vec::with_capacity(order.len().saturating_sub(1));
        for &id in &order {
            let node = arena.node_mut(id);
            let children_start = children.len() as u32;
            children.extend(node.children.iter().map(|child| new_index[child.index()]));
            nodes.push(syntax::Node {
                kind: node.kind,
                parent: node.parent.map(|parent| new_index[parent.index()]),
                index_in_parent: 0,
                children_start,
                children_len: node.children.len() as u32,
                subtree_end: 0,
                range: node.range.unwrap_or_default(),
                image: node.image.take().map(String::into_boxed_str),
            });
        }

        for index in (0..nodes.len()).rev() {
            let node = &nodes[index];
            let start = node.children_start as usize;
            let own_children = &children[start..start + node.children_len as usize];
            let subtree_end = own_children
                .last()
                .map_or(index as u32, |&last| nodes[last as usize].subtree_end);
            for (position, &child) in own_children.iter().enumerate() {
                nodes[child as usize].index_in_parent = position as u32;
            }
            nodes[index].subtree_end = subtree_end;
        }

        tracing::debug!(
            nodes = nodes.len(),
            detached = arena.nodes.len() - nodes.len(),
            "syntax tree finished"
        );

        SyntaxTree::new(TreeInner::new(text, nodes.into(), children.into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SyntaxKind::*;

    fn range(start: u32, end: u32) -> TextRange {
        TextRange::new(start.into(), end.into())
    }

    #[test]
    fn append_sets_parent() {
        let mut builder = TreeBuilder::new("x");
        let root = builder.create_node(BLOCK);
        let child = builder.create_node(EXPRESSION_STATEMENT);
        builder.append_child(root, child);

        assert_eq!(builder.parent(child), Some(root));
        assert_eq!(builder.child_count(root), 1);
        assert_eq!(builder.child_at(root, 0), child);
        assert_eq!(builder.parent(root), None);
    }

    #[test]
    fn ranges_propagate_to_open_ancestors() {
        let mut builder = TreeBuilder::new("a + b");
        let infix = builder.create_node(INFIX_EXPRESSION);
        let lhs = builder.create_node(AMBIGUOUS_NAME);
        builder.append_child(infix, lhs);
        builder.extend_range(lhs, range(0, 1));
        builder.close(lhs);
        builder.extend_range(infix, range(2, 3));
        let rhs = builder.create_node(AMBIGUOUS_NAME);
        builder.append_child(infix, rhs);
        builder.extend_range(rhs, range(4, 5));
        builder.close(rhs);
        builder.close(infix);

        let tree = builder.finish(infix);
        let root = tree.root();
        assert_eq!(root.text_range(), range(0, 5));
        assert_eq!(root.child_at(0).text_range(), range(0, 1));
        assert_eq!(root.child_at(1).text_range(), range(4, 5));
    }

    #[test]
    fn empty_node_sits_at_next_token() {
        let mut builder = TreeBuilder::new("(  x)");
        let params = builder.create_node(FORMAL_PARAMETERS);
        builder.extend_range(params, range(0, 1));
        let modifiers = builder.create_node(MODIFIER_LIST);
        builder.append_child(params, modifiers);
        builder.close(modifiers);
        builder.extend_range(params, range(3, 4));
        builder.extend_range(params, range(4, 5));
        builder.close(params);

        let tree = builder.finish(params);
        assert_eq!(tree.root().child_at(0).text_range(), TextRange::empty(3.into()));
    }

    #[test]
    fn trailing_empty_nodes_end_their_parent() {
        let mut builder = TreeBuilder::new("int ;");
        let field = builder.create_node(FIELD_DECLARATION);
        builder.extend_range(field, range(0, 3));
        let declarator = builder.create_node(VARIABLE_DECLARATOR);
        builder.append_child(field, declarator);
        let id = builder.create_node(VARIABLE_DECLARATOR_ID);
        builder.append_child(declarator, id);
        builder.close(id);
        builder.close(declarator);
        builder.close(field);
        let tree = builder.finish(field);

        let declarator = tree.root().child_at(0);
        assert_eq!(declarator.text_range(), TextRange::empty(3.into()));
        assert_eq!(declarator.child_at(0).text_range(), TextRange::empty(3.into()));
    }

    #[test]
    fn empty_root_sits_at_the_end() {
        let mut builder = TreeBuilder::new("");
        let root = builder.create_node(COMPILATION_UNIT);
        builder.close(root);
        let tree = builder.finish(root);
        assert_eq!(tree.root().text_range(), TextRange::empty(0.into()));
    }

    #[test]
    fn images_accumulate() {
        let mut builder = TreeBuilder::new("java.util");
        let name = builder.create_node(AMBIGUOUS_NAME);
        builder.push_image(name, "java");
        builder.push_image(name, ".");
        builder.push_image(name, "util");
        assert_eq!(builder.image(name), Some("java.util"));
        builder.set_image(name, "util");
        assert_eq!(builder.image(name), Some("util"));
    }

    #[test]
    #[should_panic(expected = "already closed")]
    fn append_after_close_panics() {
        let mut builder = TreeBuilder::new("");
        let root = builder.create_node(BLOCK);
        builder.close(root);
        let late = builder.create_node(BLOCK);
        builder.append_child(root, late);
    }

    #[test]
    #[should_panic(expected = "already has a parent")]
    fn child_cannot_have_two_parents() {
        let mut builder = TreeBuilder::new("");
        let first = builder.create_node(BLOCK);
        let second = builder.create_node(BLOCK);
        let child = builder.create_node(BLOCK);
        builder.append_child(first, child);
        builder.append_child(second, child);
    }

    #[test]
    #[should_panic(expected = "still open")]
    fn close_requires_closed_children() {
        let mut builder = TreeBuilder::new("");
        let root = builder.create_node(BLOCK);
        let child = builder.create_node(BLOCK);
        builder.append_child(root, child);
        builder.close(root);
    }

    #[test]
    #[should_panic(expected = "never closed")]
    fn finish_requires_closed_root() {
        let mut builder = TreeBuilder::new("");
        let root = builder.create_node(BLOCK);
        let _tree = builder.finish(root);
    }
}
