use drop_bomb::DropBomb;
use jast_errors::Diagnostic;
use jast_syntax::{Finalizer, NodeId, SyntaxKind, SyntaxSet, TreeBuilder};
use jast_tokenizer::{Token, tokenize};
use text_size::TextRange;

use crate::Parse;

pub(crate) struct Parser<'t> {
    text: &'t str,
    tokens: Vec<Token>,
    pos: usize,
    events: Vec<Event>,
    errors: Vec<Diagnostic>,
}

impl<'t> Parser<'t> {
    pub(crate) fn new(text: &'t str) -> Self {
        Self { text, tokens: tokenize(text), pos: 0, events: Vec::new(), errors: Vec::new() }
    }

    /// Kind of the token `n` positions ahead; `EOF` past the end.
    pub(crate) fn nth(&self, n: usize) -> SyntaxKind {
        self.tokens.get(self.pos + n).map_or(SyntaxKind::EOF, |token| token.kind)
    }

    pub(crate) fn peek_kind(&self) -> SyntaxKind {
        self.nth(0)
    }

    fn peek_range(&self) -> TextRange {
        match self.tokens.get(self.pos) {
            Some(token) => token.range,
            None => TextRange::empty(self.text.len().try_into().unwrap_or_default()),
        }
    }

    pub(crate) fn at(&self, kind: SyntaxKind) -> bool {
        self.peek_kind() == kind
    }

    pub(crate) fn at_set(&self, set: &SyntaxSet) -> bool {
        set.contains(self.peek_kind())
    }

    /// Consumes the current token into the open node, leaving its image alone.
    pub(crate) fn advance(&mut self) {
        self.bump(false);
    }

    /// Consumes the current token and appends its text to the node image.
    pub(crate) fn advance_image(&mut self) {
        self.bump(true);
    }

    fn bump(&mut self, image: bool) {
        if self.at(SyntaxKind::EOF) {
            return;
        }

        let range = self.tokens[self.pos].range;
        self.pos += 1;
        self.events.push(Event::Token { range, image });
    }

    pub(crate) fn eat(&mut self, kind: SyntaxKind) -> bool {
        let at = self.at(kind);
        if at {
            self.advance();
        }
        at
    }

    pub(crate) fn expect(&mut self, kind: SyntaxKind) -> bool {
        if self.eat(kind) {
            return true;
        }
        self.error(format!("expected {}", describe(kind)));
        false
    }

    pub(crate) fn start(&mut self) -> Marker {
        let pos = self.events.len() as u32;
        self.events.push(Event::TOMBSTONE);
        Marker::new(pos)
    }

    pub(crate) fn error(&mut self, message: impl Into<String>) {
        let range = self.peek_range();
        self.errors.push(Diagnostic::error(message, range));
    }

    /// Reports an error and wraps the offending token in an `ERROR` node.
    pub(crate) fn error_and_bump(&mut self, message: &str) {
        let m = self.start();
        self.error(message);
        self.advance();
        m.complete(self, SyntaxKind::ERROR);
    }

    /// Replays the events into a [`TreeBuilder`] running `finalizer`.
    pub(crate) fn finish<F: Finalizer>(self, finalizer: F) -> Parse {
        let Parser { text, tokens: _, pos: _, mut events, errors } = self;
        let mut builder = TreeBuilder::with_finalizer(text, finalizer);
        let mut stack: Vec<NodeId> = Vec::new();
        let mut root = None;
        let mut forward_parents = Vec::new();

        for i in 0..events.len() {
            match std::mem::replace(&mut events[i], Event::TOMBSTONE) {
                Event::Start { kind, forward_parent } => {
                    if kind == SyntaxKind::TOMBSTONE {
                        continue;
                    }

                    forward_parents.push(kind);
                    let mut idx = i;
                    let mut fp = forward_parent;
                    while let Some(fwd) = fp {
                        idx += fwd as usize;

                        fp = match std::mem::replace(&mut events[idx], Event::TOMBSTONE) {
                            Event::Start { kind, forward_parent } => {
                                if kind != SyntaxKind::TOMBSTONE {
                                    forward_parents.push(kind);
                                }
                                forward_parent
                            }
                            _ => unreachable!(),
                        };
                    }

                    for kind in forward_parents.drain(..).rev() {
                        let node = builder.create_node(kind);
                        match stack.last() {
                            Some(&parent) => builder.append_child(parent, node),
                            None => {
                                assert!(root.is_none(), "parser produced more than one root");
                                root = Some(node);
                            }
                        }
                        stack.push(node);
                    }
                }
                Event::Finish => {
                    let node = stack.pop().expect("unbalanced finish event");
                    builder.close(node);
                }
                Event::Token { range, image } => {
                    let node = *stack.last().expect("token outside of any node");
                    builder.extend_range(node, range);
                    if image {
                        builder.push_image(node, &text[range]);
                    }
                }
            }
        }

        let tree = builder.finish(root.expect("parser produced no nodes"));
        Parse::new(tree, errors)
    }
}

fn describe(kind: SyntaxKind) -> &'static str {
    use SyntaxKind::*;
    match kind {
        LEFT_PAREN => "'('",
        RIGHT_PAREN => "')'",
        LEFT_BRACE => "'{'",
        RIGHT_BRACE => "'}'",
        RIGHT_BRACKET => "']'",
        GT => "'>'",
        SEMICOLON => "';'",
        COLON => "':'",
        CLASS_KW => "'class'",
        IDENT => "an identifier",
        _ => "a token",
    }
}

enum Event {
    Start { kind: SyntaxKind, forward_parent: Option<u32> },
    Token { range: TextRange, image: bool },
    Finish,
}

impl Event {
    const TOMBSTONE: Self = Event::Start { kind: SyntaxKind::TOMBSTONE, forward_parent: None };
}

pub(crate) struct Marker {
    position: u32,
    bomb: DropBomb,
}

impl Marker {
    fn new(pos: u32) -> Marker {
        Marker {
            position: pos,
            bomb: DropBomb::new("Marker must be either completed or abandoned"),
        }
    }

    pub(crate) fn complete(mut self, p: &mut Parser<'_>, kind: SyntaxKind) -> CompletedMarker {
        self.bomb.defuse();

        match &mut p.events[self.position as usize] {
            Event::Start { kind: slot, .. } => {
                *slot = kind;
            }
            _ => unreachable!(),
        }

        p.events.push(Event::Finish);
        CompletedMarker::new(self.position, kind)
    }
}

#[derive(Clone, Copy)]
pub(crate) struct CompletedMarker {
    pos: u32,
    kind: SyntaxKind,
}

impl CompletedMarker {
    fn new(pos: u32, kind: SyntaxKind) -> Self {
        CompletedMarker { pos, kind }
    }

    pub(crate) fn kind(self) -> SyntaxKind {
        self.kind
    }

    pub(crate) fn precede(self, p: &mut Parser<'_>) -> Marker {
        let new_pos = p.start();

        match &mut p.events[self.pos as usize] {
            Event::Start { forward_parent, .. } => {
                *forward_parent = Some(new_pos.position - self.pos);
            }
            _ => unreachable!(),
        }

        new_pos
    }
}
