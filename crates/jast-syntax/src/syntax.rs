//! Public syntax tree API built on an immutable, parent-linked arena.

use std::fmt::{self, Write as _};
use std::hash::{Hash, Hasher};
use std::sync::OnceLock;

use text_size::TextRange;

use crate::stream::{Ancestors, Children, Descendants, Preorder};
use crate::{SyntaxKind, TypeInfo, TypeResolver};

pub(crate) struct Node {
    pub(crate) kind: SyntaxKind,
    pub(crate) parent: Option<u32>,
    pub(crate) index_in_parent: u32,
    pub(crate) children_start: u32,
    pub(crate) children_len: u32,
    /// Index of the last node of this subtree; nodes are numbered in document order.
    pub(crate) subtree_end: u32,
    pub(crate) range: TextRange,
    pub(crate) image: Option<Box<str>>,
}

pub(crate) struct TreeInner {
    text: Box<str>,
    pub(crate) nodes: Box<[Node]>,
    pub(crate) children: Box<[u32]>,
    types: Box<[OnceLock<TypeInfo>]>,
}

impl TreeInner {
    pub(crate) fn new(text: Box<str>, nodes: Box<[Node]>, children: Box<[u32]>) -> Self {
        let types = nodes.iter().map(|_| OnceLock::new()).collect();
        Self { text, nodes, children, types }
    }

    #[inline]
    pub(crate) fn children_of(&self, node: &Node) -> &[u32] {
        let start = node.children_start as usize;
        &self.children[start..start + node.children_len as usize]
    }
}

/// Owned, immutable syntax tree for a single source text.
///
/// The tree is `Send + Sync`; any number of threads may navigate, query and
/// visit it concurrently.
pub struct SyntaxTree {
    inner: TreeInner,
}

impl SyntaxTree {
    pub(crate) fn new(inner: TreeInner) -> Self {
        Self { inner }
    }

    /// Returns the root syntax node.
    #[inline]
    pub fn root(&self) -> SyntaxNode<'_> {
        SyntaxNode { tree: &self.inner, index: 0 }
    }

    /// Returns the full source text for this tree.
    #[inline]
    pub fn text(&self) -> &str {
        &self.inner.text
    }

    /// Number of nodes in the tree.
    #[inline]
    pub fn len(&self) -> usize {
        self.inner.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.inner.nodes.is_empty()
    }

    /// Renders one line per node, `KIND@start..end "image"`, indented by depth.
    pub fn debug_dump(&self) -> String {
        let mut buf = String::new();
        let mut depth = 0usize;
        for event in self.root().preorder() {
            match event {
                WalkEvent::Enter(node) => {
                    let indent = depth * 2;
                    _ = write!(buf, "{:indent$}{node:?}", "");
                    if let Some(image) = node.image() {
                        _ = write!(buf, " {image:?}");
                    }
                    buf.push('\n');
                    depth += 1;
                }
                WalkEvent::Leave(_) => depth -= 1,
            }
        }
        buf
    }
}

impl fmt::Debug for SyntaxTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SyntaxTree")
            .field("text_len", &self.text().len())
            .field("nodes", &self.len())
            .finish_non_exhaustive()
    }
}

/// Node handle tied to the lifetime of the tree.
#[derive(Clone, Copy)]
pub struct SyntaxNode<'a> {
    pub(crate) tree: &'a TreeInner,
    pub(crate) index: u32,
}

impl<'a> SyntaxNode<'a> {
    #[inline]
    pub(crate) fn new(tree: &'a TreeInner, index: u32) -> Self {
        Self { tree, index }
    }

    #[inline]
    fn data(self) -> &'a Node {
        &self.tree.nodes[self.index as usize]
    }

    #[inline]
    pub(crate) fn subtree_end(self) -> u32 {
        self.data().subtree_end
    }

    /// Returns this node's kind.
    #[inline]
    pub fn kind(self) -> SyntaxKind {
        self.data().kind
    }

    /// Returns the kind-specific payload: a name, an operator, a literal.
    #[inline]
    pub fn image(self) -> Option<&'a str> {
        self.data().image.as_deref()
    }

    /// Returns the text range covered by this node.
    #[inline]
    pub fn text_range(self) -> TextRange {
        self.data().range
    }

    /// Returns the text slice covered by this node.
    #[inline]
    pub fn text(self) -> &'a str {
        &self.tree.text[self.text_range()]
    }

    /// Returns the parent node if any.
    #[inline]
    pub fn parent(self) -> Option<Self> {
        Some(Self::new(self.tree, self.data().parent?))
    }

    /// Position of this node among its parent's children; 0 for the root.
    #[inline]
    pub fn index_in_parent(self) -> usize {
        self.data().index_in_parent as usize
    }

    #[inline]
    pub fn child_count(self) -> usize {
        self.data().children_len as usize
    }

    /// Returns the child at `index`, panicking if out of bounds.
    #[inline]
    #[track_caller]
    pub fn child_at(self, index: usize) -> Self {
        Self::new(self.tree, self.tree.children_of(self.data())[index])
    }

    /// Returns the child at `index`, if present.
    #[inline]
    pub fn get_child(self, index: usize) -> Option<Self> {
        Some(Self::new(self.tree, *self.tree.children_of(self.data()).get(index)?))
    }

    #[inline]
    pub fn first_child(self) -> Option<Self> {
        self.get_child(0)
    }

    #[inline]
    pub fn last_child(self) -> Option<Self> {
        self.child_count().checked_sub(1).and_then(|last| self.get_child(last))
    }

    /// Iterates child nodes in declaration order.
    #[inline]
    pub fn children(self) -> Children<'a> {
        Children::new(self.tree, self.tree.children_of(self.data()))
    }

    /// Iterates all descendants in document order, excluding this node.
    #[inline]
    pub fn descendants(self) -> Descendants<'a> {
        Descendants::new(self.tree, self.index + 1, self.subtree_end())
    }

    /// Iterates this node and all its descendants in document order.
    #[inline]
    pub fn descendants_or_self(self) -> Descendants<'a> {
        Descendants::new(self.tree, self.index, self.subtree_end())
    }

    /// Iterates ancestors from the parent up to the root.
    #[inline]
    pub fn ancestors(self) -> Ancestors<'a> {
        Ancestors::new(self.parent())
    }

    /// Iterates this node, then its ancestors up to the root.
    #[inline]
    pub fn ancestors_or_self(self) -> Ancestors<'a> {
        Ancestors::new(Some(self))
    }

    /// Iterates the siblings after this node, nearest first.
    #[inline]
    pub fn following_siblings(self) -> Children<'a> {
        match self.parent() {
            Some(parent) => {
                let siblings = self.tree.children_of(parent.data());
                Children::new(self.tree, &siblings[self.index_in_parent() + 1..])
            }
            None => Children::new(self.tree, &[]),
        }
    }

    /// Iterates the siblings before this node, nearest first.
    #[inline]
    pub fn preceding_siblings(self) -> std::iter::Rev<Children<'a>> {
        match self.parent() {
            Some(parent) => {
                let siblings = self.tree.children_of(parent.data());
                Children::new(self.tree, &siblings[..self.index_in_parent()]).rev()
            }
            None => Children::new(self.tree, &[]).rev(),
        }
    }

    /// Returns a preorder iterator of enter/leave events.
    #[inline]
    pub fn preorder(self) -> Preorder<'a> {
        Preorder::new(self)
    }

    /// Returns the type of this node, computing it with `resolver` on first access.
    ///
    /// Formal and catch parameters answer with the slot of the variable they
    /// declare, so `resolver` sees the `VARIABLE_DECLARATOR_ID` node.
    #[inline]
    pub fn type_info(self, resolver: &dyn TypeResolver) -> &'a TypeInfo {
        let owner = self.type_owner();
        owner.type_slot().get_or_init(|| resolver.resolve(owner))
    }

    /// Returns the cached type, if it was already computed.
    #[inline]
    pub fn cached_type(self) -> Option<&'a TypeInfo> {
        self.type_owner().type_slot().get()
    }

    /// Stores `ty` unless a type is already cached; returns whether it was stored.
    ///
    /// Parameters never store a type of their own.
    pub fn set_type_info(self, ty: TypeInfo) -> bool {
        !self.is_parameter() && self.type_slot().set(ty).is_ok()
    }

    #[inline]
    fn is_parameter(self) -> bool {
        matches!(self.kind(), SyntaxKind::FORMAL_PARAMETER | SyntaxKind::CATCH_PARAMETER)
    }

    fn type_owner(self) -> Self {
        if !self.is_parameter() {
            return self;
        }
        self.children().find(|it| it.kind() == SyntaxKind::VARIABLE_DECLARATOR_ID).unwrap_or(self)
    }

    #[inline]
    fn type_slot(self) -> &'a OnceLock<TypeInfo> {
        &self.tree.types[self.index as usize]
    }
}

impl PartialEq for SyntaxNode<'_> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.tree, other.tree) && self.index == other.index
    }
}

impl Eq for SyntaxNode<'_> {}

impl Hash for SyntaxNode<'_> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::ptr::hash(self.tree, state);
        self.index.hash(state);
    }
}

impl fmt::Debug for SyntaxNode<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}@{:?}", self.kind(), self.text_range())
    }
}

impl fmt::Display for SyntaxNode<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text())
    }
}

/// Preorder walk event for nodes.
#[derive(Clone, Copy, Debug)]
pub enum WalkEvent<'a> {
    Enter(SyntaxNode<'a>),
    Leave(SyntaxNode<'a>),
}
