//! Recursive-descent parser for a subset of Java.
//!
//! The grammar records start/token/finish events; once the input is consumed
//! the events are replayed into a [`TreeBuilder`](jast_syntax::TreeBuilder),
//! which closes every node exactly once and runs the [`Finalizer`] on it.

use std::fmt::Write as _;

use jast_errors::Diagnostic;
use jast_syntax::ast::{AstNode as _, CompilationUnit};
use jast_syntax::{Disambiguator, Finalizer, SyntaxKind, SyntaxNode, SyntaxTree};

mod grammar;
mod parser;

/// A finished tree together with the errors found while parsing it.
#[derive(Debug)]
pub struct Parse {
    tree: SyntaxTree,
    errors: Vec<Diagnostic>,
}

unsafe impl salsa::Update for Parse {
    unsafe fn maybe_update(old_pointer: *mut Self, new_value: Self) -> bool {
        let old = unsafe { &mut *old_pointer };
        *old = new_value;
        true
    }
}

impl Parse {
    pub(crate) fn new(tree: SyntaxTree, errors: Vec<Diagnostic>) -> Self {
        tracing::debug!(nodes = tree.len(), errors = errors.len(), "parsed");
        Self { tree, errors }
    }

    pub fn tree(&self) -> &SyntaxTree {
        &self.tree
    }

    pub fn syntax(&self) -> SyntaxNode<'_> {
        self.tree.root()
    }

    /// The root as a compilation unit; `None` for [`parse_expression`] results.
    pub fn compilation_unit(&self) -> Option<CompilationUnit<'_>> {
        CompilationUnit::cast(self.syntax())
    }

    pub fn errors(&self) -> &[Diagnostic] {
        &self.errors
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// The tree dump followed by one line per error.
    pub fn debug_dump(&self) -> String {
        let mut buf = self.tree.debug_dump();
        buf.push_str("Errors:\n");
        for error in &self.errors {
            _ = writeln!(buf, "  {:?} {}", error.range(), error.message());
        }
        buf
    }
}

/// Parses a compilation unit, resolving placeholders with the Java rules.
pub fn parse(text: &str) -> Parse {
    parse_with(text, Disambiguator)
}

/// Parses a compilation unit, running `finalizer` on every node as it closes.
pub fn parse_with<F: Finalizer>(text: &str, finalizer: F) -> Parse {
    let mut p = parser::Parser::new(text);
    grammar::items::compilation_unit(&mut p);
    p.finish(finalizer)
}

/// Parses a single expression, wrapped in an `EXPRESSION_STATEMENT` root.
pub fn parse_expression(text: &str) -> Parse {
    let mut p = parser::Parser::new(text);
    let m = p.start();
    grammar::exprs::expr(&mut p);
    while !p.at(SyntaxKind::EOF) {
        p.error_and_bump("unexpected input after the expression");
    }
    m.complete(&mut p, SyntaxKind::EXPRESSION_STATEMENT);
    p.finish(Disambiguator)
}
