//! Lazy node streams over tree relationships.
//!
//! Every relationship method on [`SyntaxNode`] returns a fresh iterator that
//! has not touched the tree yet; nothing is buffered. Streams are single-pass:
//! to iterate again, ask the node again. [`NodeStream`] adds tree-specific
//! filtering and flattening on top of the usual [`Iterator`] combinators.

use crate::ast::AstNode;
use crate::syntax::{SyntaxNode, TreeInner, WalkEvent};
use crate::{SyntaxKind, SyntaxSet};

/// Iterator over a run of sibling nodes.
#[derive(Clone)]
pub struct Children<'a> {
    tree: &'a TreeInner,
    iter: std::slice::Iter<'a, u32>,
}

impl<'a> Children<'a> {
    #[inline]
    pub(crate) fn new(tree: &'a TreeInner, children: &'a [u32]) -> Self {
        Self { tree, iter: children.iter() }
    }
}

impl<'a> Iterator for Children<'a> {
    type Item = SyntaxNode<'a>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.iter.next().map(|&index| SyntaxNode::new(self.tree, index))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }

    #[inline]
    fn last(mut self) -> Option<Self::Item>
    where
        Self: Sized,
    {
        self.next_back()
    }
}

impl DoubleEndedIterator for Children<'_> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.iter.next_back().map(|&index| SyntaxNode::new(self.tree, index))
    }
}

impl ExactSizeIterator for Children<'_> {
    #[inline]
    fn len(&self) -> usize {
        self.iter.len()
    }
}

/// Document-order iterator over a subtree.
///
/// Nodes are numbered in document order, so a subtree is a contiguous index
/// range and walking it needs no stack.
#[derive(Clone)]
pub struct Descendants<'a> {
    tree: &'a TreeInner,
    next: u32,
    end: u32,
}

impl<'a> Descendants<'a> {
    #[inline]
    pub(crate) fn new(tree: &'a TreeInner, first: u32, last: u32) -> Self {
        Self { tree, next: first, end: last + 1 }
    }
}

impl<'a> Iterator for Descendants<'a> {
    type Item = SyntaxNode<'a>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.end {
            return None;
        }
        let node = SyntaxNode::new(self.tree, self.next);
        self.next += 1;
        Some(node)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.end.saturating_sub(self.next) as usize;
        (len, Some(len))
    }
}

impl ExactSizeIterator for Descendants<'_> {}

/// Iterator walking parent links towards the root.
#[derive(Clone)]
pub struct Ancestors<'a> {
    next: Option<SyntaxNode<'a>>,
}

impl<'a> Ancestors<'a> {
    #[inline]
    pub(crate) fn new(start: Option<SyntaxNode<'a>>) -> Self {
        Self { next: start }
    }
}

impl<'a> Iterator for Ancestors<'a> {
    type Item = SyntaxNode<'a>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let node = self.next?;
        self.next = node.parent();
        Some(node)
    }
}

/// Preorder traversal yielding enter and leave events.
#[derive(Clone)]
pub struct Preorder<'a> {
    stack: Vec<(SyntaxNode<'a>, Children<'a>)>,
    root: Option<SyntaxNode<'a>>,
}

impl<'a> Preorder<'a> {
    #[inline]
    pub(crate) fn new(start: SyntaxNode<'a>) -> Preorder<'a> {
        Preorder { stack: Vec::new(), root: Some(start) }
    }

    /// Skips the rest of the subtree entered last; its leave event is not emitted.
    #[inline]
    pub fn skip_subtree(&mut self) {
        assert!(self.stack.pop().is_some(), "must have a subtree to skip");
    }
}

impl<'a> Iterator for Preorder<'a> {
    type Item = WalkEvent<'a>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let Some((_, active_node)) = self.stack.last_mut() else {
            let root = self.root.take()?;
            self.stack.push((root, root.children()));
            return Some(WalkEvent::Enter(root));
        };
        match active_node.next() {
            Some(child) => {
                self.stack.push((child, child.children()));
                Some(WalkEvent::Enter(child))
            }
            None => {
                let (exited_node, _) = self.stack.pop().expect("should have an exited-from node");
                Some(WalkEvent::Leave(exited_node))
            }
        }
    }
}

/// Tree-aware combinators for any stream of nodes.
pub trait NodeStream<'a>: Iterator<Item = SyntaxNode<'a>> + Sized {
    /// Keeps nodes of the given kind.
    fn of_kind(self, kind: SyntaxKind) -> impl Iterator<Item = SyntaxNode<'a>> {
        self.filter(move |node| node.kind() == kind)
    }

    /// Keeps nodes whose kind is in `kinds`.
    fn of_kinds(self, kinds: SyntaxSet) -> impl Iterator<Item = SyntaxNode<'a>> {
        self.filter(move |node| kinds.contains(node.kind()))
    }

    /// Keeps nodes that can be viewed as `N`, viewed as `N`.
    fn filter_is<N: AstNode<'a>>(self) -> impl Iterator<Item = N> {
        self.filter_map(N::cast)
    }

    /// Flattens to the children of every node.
    fn children(self) -> impl Iterator<Item = SyntaxNode<'a>> {
        self.flat_map(SyntaxNode::children)
    }

    /// Flattens to the children of the given kind of every node.
    fn children_of_kind(self, kind: SyntaxKind) -> impl Iterator<Item = SyntaxNode<'a>> {
        self.children().of_kind(kind)
    }

    /// Flattens to the descendants of every node.
    fn descendants(self) -> impl Iterator<Item = SyntaxNode<'a>> {
        self.flat_map(SyntaxNode::descendants)
    }

    /// Maps every node to its parent, dropping the root.
    fn parents(self) -> impl Iterator<Item = SyntaxNode<'a>> {
        self.filter_map(SyntaxNode::parent)
    }

    /// Returns the first node that can be viewed as `N`.
    fn first_is<N: AstNode<'a>>(mut self) -> Option<N> {
        self.find_map(N::cast)
    }

    fn first_of_kind(mut self, kind: SyntaxKind) -> Option<SyntaxNode<'a>> {
        self.find(|node| node.kind() == kind)
    }
}

impl<'a, I: Iterator<Item = SyntaxNode<'a>>> NodeStream<'a> for I {}
