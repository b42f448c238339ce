//! Java syntax tree with capability-typed views, lazy queries and visitors.
//!
//! Trees are assembled bottom-up through [`TreeBuilder`], which runs a
//! [`Finalizer`] once per node as it closes. The finished [`SyntaxTree`] is
//! immutable and navigated by lightweight, lifetime-guided handles.

#[macro_use]
mod macros;

/// Typed AST wrappers around the raw syntax tree.
pub mod ast;
mod builder;
mod finalize;
mod stream;
mod syntax;
mod syntax_kind;
mod syntax_set;
mod ty;
/// Kind-dispatched visitors over the typed tree.
pub mod visit;

/// Incremental builder for constructing a `SyntaxTree`.
pub use builder::{NodeId, TreeBuilder};
/// Close-time rewriting hooks.
pub use finalize::{Disambiguator, FinalizeCx, Finalizer};
/// Lazy traversal iterators and combinators.
pub use stream::{Ancestors, Children, Descendants, NodeStream, Preorder};
/// Primary syntax tree API types.
pub use syntax::{SyntaxNode, SyntaxTree, WalkEvent};
/// Token and node kinds used throughout the tree.
pub use syntax_kind::SyntaxKind;
/// Compact set for grouping `SyntaxKind` values.
pub use syntax_set::SyntaxSet;
/// Type attachment.
pub use ty::{Primitive, TypeInfo, TypeResolver};
pub use visit::{SideEffectingVisitor, Visitor};
