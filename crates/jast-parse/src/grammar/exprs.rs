use jast_syntax::SyntaxKind::{self, *};
use jast_syntax::SyntaxSet;

use super::{PRIMITIVES, delimited, types};
use crate::parser::{CompletedMarker, Parser};

const LITERALS: SyntaxSet = SyntaxSet::new([
    INT_LITERAL,
    FLOAT_LITERAL,
    STRING_LITERAL,
    CHAR_LITERAL,
    TRUE_KW,
    FALSE_KW,
    NULL_KW,
]);

pub(crate) const EXPR_FIRST: SyntaxSet = LITERALS
    .union(&PRIMITIVES)
    .union(&SyntaxSet::new([IDENT, THIS_KW, NEW_KW, LEFT_PAREN, BANG, MINUS]));

/// Tokens an expression never starts with and that are left for the caller.
const EXPR_RECOVERY: SyntaxSet = SyntaxSet::new([
    SEMICOLON,
    COMMA,
    RIGHT_PAREN,
    RIGHT_BRACE,
    RIGHT_BRACKET,
    LEFT_BRACE,
    EOF,
]);

pub(crate) fn expr(p: &mut Parser<'_>) -> Option<CompletedMarker> {
    let lhs = binary(p, 1)?;

    if !matches!(p.peek_kind(), EQ | PLUS_EQ | MINUS_EQ) {
        return Some(lhs);
    }

    let m = lhs.precede(p);
    p.advance_image();
    expr(p);
    Some(m.complete(p, ASSIGNMENT_EXPRESSION))
}

fn precedence(kind: SyntaxKind) -> Option<u8> {
    Some(match kind {
        PIPE_PIPE => 1,
        AMP_AMP => 2,
        EQ_EQ | BANG_EQ => 3,
        LT | GT | LT_EQ | GT_EQ => 4,
        PLUS | MINUS => 5,
        STAR | SLASH | PERCENT => 6,
        _ => return None,
    })
}

fn binary(p: &mut Parser<'_>, min_precedence: u8) -> Option<CompletedMarker> {
    let mut lhs = unary(p)?;

    while let Some(precedence) = precedence(p.peek_kind()) {
        if precedence < min_precedence {
            break;
        }

        let m = lhs.precede(p);
        p.advance_image();
        binary(p, precedence + 1);
        lhs = m.complete(p, INFIX_EXPRESSION);
    }

    Some(lhs)
}

fn unary(p: &mut Parser<'_>) -> Option<CompletedMarker> {
    if p.at(BANG) || p.at(MINUS) {
        let m = p.start();
        p.advance_image();
        unary(p);
        return Some(m.complete(p, UNARY_EXPRESSION));
    }

    postfix(p)
}

fn postfix(p: &mut Parser<'_>) -> Option<CompletedMarker> {
    let mut lhs = primary(p)?;

    loop {
        lhs = match (p.peek_kind(), p.nth(1)) {
            (DOT, IDENT) if p.nth(2) == LEFT_PAREN => {
                let m = lhs.precede(p);
                p.advance();
                p.advance_image();
                argument_list(p);
                m.complete(p, METHOD_CALL)
            }
            (DOT, IDENT) => {
                let m = lhs.precede(p);
                p.advance();
                p.advance_image();
                m.complete(p, FIELD_ACCESS)
            }
            (DOT, CLASS_KW) if lhs.kind() == AMBIGUOUS_NAME || lhs.kind().is_type() => {
                let m = lhs.precede(p);
                p.advance();
                p.advance();
                m.complete(p, CLASS_LITERAL)
            }
            (DOT, THIS_KW) if lhs.kind() == AMBIGUOUS_NAME => {
                let m = lhs.precede(p);
                p.advance();
                p.advance();
                m.complete(p, THIS_EXPRESSION)
            }
            (COLON_COLON, _) => method_reference(p, lhs),
            (DOT, _) => {
                let m = p.start();
                p.error("expected a member name");
                p.advance();
                if matches!(p.peek_kind(), CLASS_KW | THIS_KW) {
                    p.advance();
                }
                m.complete(p, ERROR);
                break;
            }
            _ => break,
        };
    }

    Some(lhs)
}

fn method_reference(p: &mut Parser<'_>, lhs: CompletedMarker) -> CompletedMarker {
    debug_assert_eq!(p.peek_kind(), COLON_COLON);

    let m = lhs.precede(p);
    p.advance();
    if p.at(LT) {
        types::type_arguments(p);
    }
    if p.at(IDENT) || p.at(NEW_KW) {
        p.advance_image();
    } else {
        p.error("expected a method name or 'new'");
    }
    m.complete(p, METHOD_REFERENCE)
}

fn primary(p: &mut Parser<'_>) -> Option<CompletedMarker> {
    let kind = p.peek_kind();
    if LITERALS.contains(kind) {
        let m = p.start();
        p.advance_image();
        return Some(m.complete(p, LITERAL));
    }

    match kind {
        IDENT if p.nth(1) == LEFT_PAREN => {
            let m = p.start();
            p.advance_image();
            argument_list(p);
            Some(m.complete(p, METHOD_CALL))
        }
        IDENT if at_explicit_type_qualifier(p) => types::type_(p, false),
        IDENT => Some(ambiguous_name(p)),
        _ if PRIMITIVES.contains(kind) => {
            let ty = types::type_(p, false);
            let followed = p.at(COLON_COLON) || (p.at(DOT) && p.nth(1) == CLASS_KW);
            if !followed {
                p.error("expected '::' or '.class' after a primitive type");
            }
            ty
        }
        THIS_KW => {
            let m = p.start();
            p.advance();
            Some(m.complete(p, THIS_EXPRESSION))
        }
        LEFT_PAREN => {
            let m = p.start();
            p.advance();
            expr(p);
            p.expect(RIGHT_PAREN);
            Some(m.complete(p, PARENTHESIZED_EXPRESSION))
        }
        NEW_KW => {
            let m = p.start();
            p.advance();
            if p.at(IDENT) {
                types::class_type(p);
            } else {
                p.error("expected a class name");
            }
            if p.at(LEFT_PAREN) {
                argument_list(p);
            } else {
                p.error("expected '('");
            }
            Some(m.complete(p, CONSTRUCTOR_CALL))
        }
        _ if EXPR_RECOVERY.contains(kind) => {
            p.error("expected an expression");
            None
        }
        _ => {
            p.error_and_bump("expected an expression");
            None
        }
    }
}

/// A name whose classification is left to the finalizer or to type resolution.
///
/// Segments followed by a call stay out of the name: `a.b.c()` is a call of
/// `c` on `a.b`.
fn ambiguous_name(p: &mut Parser<'_>) -> CompletedMarker {
    debug_assert_eq!(p.peek_kind(), IDENT);

    let m = p.start();
    p.advance_image();
    while p.at(DOT) && p.nth(1) == IDENT && p.nth(2) != LEFT_PAREN {
        p.advance_image();
        p.advance_image();
    }
    m.complete(p, AMBIGUOUS_NAME)
}

/// `List<String>::new`, `String[]::new` or `String[].class`: a type that is
/// syntactically unmistakable, directly followed by `::` or `.class`.
fn at_explicit_type_qualifier(p: &Parser<'_>) -> bool {
    matches!(p.nth(1), LT | LEFT_BRACKET | DOT)
        && types::skip_type(p, 0).is_some_and(|n| match (p.nth(n - 1), p.nth(n)) {
            (GT | RIGHT_BRACKET, COLON_COLON) => true,
            (RIGHT_BRACKET, DOT) => p.nth(n + 1) == CLASS_KW,
            _ => false,
        })
}

fn argument_list(p: &mut Parser<'_>) {
    let m = p.start();
    delimited(p, LEFT_PAREN, RIGHT_PAREN, COMMA, |p| expr(p).is_some());
    m.complete(p, ARGUMENT_LIST);
}
