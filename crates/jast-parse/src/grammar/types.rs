use jast_syntax::SyntaxKind::*;

use super::{PRIMITIVES, delimited};
use crate::parser::{CompletedMarker, Parser};

pub(crate) fn at_type_start(p: &Parser<'_>) -> bool {
    p.at(IDENT) || p.at_set(&PRIMITIVES)
}

/// A type, optionally followed by array dimensions. With `varargs`, a final
/// `...` counts as one more dimension.
pub(crate) fn type_(p: &mut Parser<'_>, varargs: bool) -> Option<CompletedMarker> {
    let element = if p.at_set(&PRIMITIVES) {
        primitive_type(p)
    } else if p.at(IDENT) {
        class_type(p)
    } else {
        p.error("expected a type");
        return None;
    };

    let at_dims = at_dim(p) || (varargs && p.at(ELLIPSIS));
    if !at_dims {
        return Some(element);
    }

    let array = element.precede(p);
    let dims = p.start();
    while at_dim(p) {
        let dim = p.start();
        p.advance_image();
        p.advance_image();
        dim.complete(p, ARRAY_TYPE_DIM);
    }
    if varargs && p.at(ELLIPSIS) {
        let dim = p.start();
        p.advance_image();
        dim.complete(p, ARRAY_TYPE_DIM);
    }
    dims.complete(p, ARRAY_DIMENSIONS);
    Some(array.complete(p, ARRAY_TYPE))
}

fn at_dim(p: &Parser<'_>) -> bool {
    p.at(LEFT_BRACKET) && p.nth(1) == RIGHT_BRACKET
}

fn primitive_type(p: &mut Parser<'_>) -> CompletedMarker {
    let m = p.start();
    p.advance_image();
    m.complete(p, PRIMITIVE_TYPE)
}

pub(crate) fn class_type(p: &mut Parser<'_>) -> CompletedMarker {
    let m = p.start();
    super::qualified_name(p);
    if p.at(LT) {
        type_arguments(p);
    }
    m.complete(p, CLASS_TYPE)
}

pub(crate) fn type_arguments(p: &mut Parser<'_>) {
    let m = p.start();
    delimited(p, LT, GT, COMMA, |p| type_(p, false).is_some());
    m.complete(p, TYPE_ARGUMENTS);
}

/// Position right after a type starting `n` tokens ahead, if one is there.
pub(crate) fn skip_type(p: &Parser<'_>, mut n: usize) -> Option<usize> {
    let first = p.nth(n);
    if PRIMITIVES.contains(first) {
        n += 1;
    } else if first == IDENT {
        n += 1;
        while p.nth(n) == DOT && p.nth(n + 1) == IDENT {
            n += 2;
        }
        if p.nth(n) == LT {
            n = skip_type_arguments(p, n)?;
        }
    } else {
        return None;
    }

    while p.nth(n) == LEFT_BRACKET && p.nth(n + 1) == RIGHT_BRACKET {
        n += 2;
    }
    Some(n)
}

fn skip_type_arguments(p: &Parser<'_>, mut n: usize) -> Option<usize> {
    debug_assert_eq!(p.nth(n), LT);
    n += 1;
    if p.nth(n) == GT {
        return Some(n + 1);
    }

    loop {
        n = skip_type(p, n)?;
        match p.nth(n) {
            COMMA => n += 1,
            GT => return Some(n + 1),
            _ => return None,
        }
    }
}
