use jast_syntax::SyntaxKind::{self, *};
use jast_syntax::SyntaxSet;

use crate::parser::Parser;

pub(crate) mod exprs;
pub(crate) mod items;
mod stmts;
mod types;

const MODIFIERS: SyntaxSet =
    SyntaxSet::new([PUBLIC_KW, PROTECTED_KW, PRIVATE_KW, STATIC_KW, FINAL_KW, ABSTRACT_KW]);

const PRIMITIVES: SyntaxSet = SyntaxSet::new([
    BOOLEAN_KW, BYTE_KW, CHAR_KW, SHORT_KW, INT_KW, LONG_KW, FLOAT_KW, DOUBLE_KW,
]);

/// Modifiers and annotations, always emitted so that declarations keep a
/// fixed child layout.
pub(crate) fn modifier_list(p: &mut Parser<'_>) {
    let m = p.start();

    loop {
        if p.at_set(&MODIFIERS) {
            let modifier = p.start();
            p.advance_image();
            modifier.complete(p, MODIFIER);
        } else if p.at(AT) {
            annotation(p);
        } else {
            break;
        }
    }

    m.complete(p, MODIFIER_LIST);
}

fn annotation(p: &mut Parser<'_>) {
    debug_assert_eq!(p.peek_kind(), AT);

    let m = p.start();
    p.advance();
    if p.at(IDENT) {
        qualified_name(p);
    } else {
        p.error("expected an annotation name");
    }
    m.complete(p, ANNOTATION);
}

/// `a.b.c` into the image of the open node.
pub(crate) fn qualified_name(p: &mut Parser<'_>) {
    debug_assert_eq!(p.peek_kind(), IDENT);

    p.advance_image();
    while p.at(DOT) && p.nth(1) == IDENT {
        p.advance_image();
        p.advance_image();
    }
}

/// `VARIABLE_DECLARATOR_ID`, emitted even when the name is missing.
pub(crate) fn var_decl_id(p: &mut Parser<'_>) {
    let m = p.start();
    if p.at(IDENT) {
        p.advance_image();
    } else {
        p.error("expected a variable name");
    }
    m.complete(p, VARIABLE_DECLARATOR_ID);
}

/// Parses `bra (element (delim element)*)? ket`. `element` returns `false`
/// when it cannot make progress.
pub(crate) fn delimited(
    p: &mut Parser<'_>,
    bra: SyntaxKind,
    ket: SyntaxKind,
    delim: SyntaxKind,
    mut element: impl FnMut(&mut Parser<'_>) -> bool,
) {
    debug_assert_eq!(p.peek_kind(), bra);
    p.advance();

    while !p.at(ket) && !p.at(EOF) {
        if !element(p) {
            break;
        }

        if !p.eat(delim) {
            break;
        }
    }

    p.expect(ket);
}
