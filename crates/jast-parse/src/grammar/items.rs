use jast_syntax::SyntaxKind::*;
use jast_syntax::SyntaxSet;

use super::{MODIFIERS, exprs, modifier_list, stmts, types, var_decl_id};
use crate::parser::Parser;

const CLASS_START: SyntaxSet = MODIFIERS.union(&SyntaxSet::new([AT, CLASS_KW]));
const PARAMETER_RECOVERY: SyntaxSet = SyntaxSet::new([LEFT_BRACE, RIGHT_BRACE, SEMICOLON]);

pub(crate) fn compilation_unit(p: &mut Parser<'_>) {
    let m = p.start();

    while !p.at(EOF) {
        if p.at_set(&CLASS_START) {
            class_declaration(p);
        } else {
            p.error_and_bump("expected a class declaration");
        }
    }

    m.complete(p, COMPILATION_UNIT);
}

fn class_declaration(p: &mut Parser<'_>) {
    let m = p.start();
    modifier_list(p);
    p.expect(CLASS_KW);

    if p.at(IDENT) {
        p.advance_image();
    } else {
        p.error("expected a class name");
    }

    if p.at(LEFT_BRACE) {
        class_body(p);
    } else {
        p.error("expected a class body");
    }

    m.complete(p, CLASS_DECLARATION);
}

fn class_body(p: &mut Parser<'_>) {
    debug_assert_eq!(p.peek_kind(), LEFT_BRACE);

    let m = p.start();
    p.advance();

    while !p.at(RIGHT_BRACE) && !p.at(EOF) {
        member(p);
    }

    p.expect(RIGHT_BRACE);
    m.complete(p, CLASS_BODY);
}

fn member(p: &mut Parser<'_>) {
    if p.eat(SEMICOLON) {
        return;
    }

    if !(p.at_set(&MODIFIERS) || p.at(AT) || p.at(VOID_KW) || types::at_type_start(p)) {
        p.error_and_bump("expected a field or method declaration");
        return;
    }

    let m = p.start();
    modifier_list(p);

    if p.at(VOID_KW) {
        let void = p.start();
        p.advance_image();
        void.complete(p, VOID_TYPE);
    } else {
        types::type_(p, false);
    }

    if p.at(IDENT) && p.nth(1) == LEFT_PAREN {
        p.advance_image();
        formal_parameters(p);
        if p.at(LEFT_BRACE) {
            stmts::block(p);
        } else {
            p.expect(SEMICOLON);
        }
        m.complete(p, METHOD_DECLARATION);
    } else {
        variable_declarators(p);
        p.expect(SEMICOLON);
        m.complete(p, FIELD_DECLARATION);
    }
}

fn formal_parameters(p: &mut Parser<'_>) {
    debug_assert_eq!(p.peek_kind(), LEFT_PAREN);

    let m = p.start();
    p.advance();

    while !p.at(RIGHT_PAREN) && !p.at(EOF) {
        if p.at_set(&PARAMETER_RECOVERY) {
            break;
        }
        if !(p.at_set(&MODIFIERS) || p.at(AT) || types::at_type_start(p)) {
            p.error_and_bump("expected a parameter");
            continue;
        }

        formal_parameter(p);

        if !p.eat(COMMA) {
            break;
        }
    }

    p.expect(RIGHT_PAREN);
    m.complete(p, FORMAL_PARAMETERS);
}

fn formal_parameter(p: &mut Parser<'_>) {
    let m = p.start();
    modifier_list(p);
    types::type_(p, true);
    var_decl_id(p);
    m.complete(p, FORMAL_PARAMETER);
}

pub(crate) fn variable_declarators(p: &mut Parser<'_>) {
    loop {
        let m = p.start();
        var_decl_id(p);
        if p.eat(EQ) {
            exprs::expr(p);
        }
        m.complete(p, VARIABLE_DECLARATOR);

        if !p.eat(COMMA) {
            break;
        }
    }
}
