use jast_syntax::SyntaxKind::*;

use super::items::variable_declarators;
use super::{MODIFIERS, PRIMITIVES, exprs, modifier_list, types, var_decl_id};
use crate::parser::Parser;

pub(crate) fn block(p: &mut Parser<'_>) {
    if !p.at(LEFT_BRACE) {
        p.error("expected a block");
        return;
    }

    let m = p.start();
    p.advance();

    while !p.at(RIGHT_BRACE) && !p.at(EOF) {
        statement(p);
    }

    p.expect(RIGHT_BRACE);
    m.complete(p, BLOCK);
}

fn statement(p: &mut Parser<'_>) {
    match p.peek_kind() {
        LEFT_BRACE => block(p),
        SEMICOLON => p.advance(),
        RETURN_KW => {
            let m = p.start();
            p.advance();
            if !p.at(SEMICOLON) {
                exprs::expr(p);
            }
            p.expect(SEMICOLON);
            m.complete(p, RETURN_STATEMENT);
        }
        IF_KW => {
            let m = p.start();
            p.advance();
            condition(p);
            body(p);
            if p.eat(ELSE_KW) {
                body(p);
            }
            m.complete(p, IF_STATEMENT);
        }
        WHILE_KW => {
            let m = p.start();
            p.advance();
            condition(p);
            body(p);
            m.complete(p, WHILE_STATEMENT);
        }
        FOR_KW => foreach_statement(p),
        TRY_KW => try_statement(p),
        RIGHT_BRACE | EOF => p.error("expected a statement"),
        _ if at_local_variable_declaration(p) => {
            let m = p.start();
            modifier_list(p);
            types::type_(p, false);
            variable_declarators(p);
            p.expect(SEMICOLON);
            m.complete(p, LOCAL_VARIABLE_DECLARATION);
        }
        _ if p.at_set(&exprs::EXPR_FIRST) => {
            let m = p.start();
            exprs::expr(p);
            p.expect(SEMICOLON);
            m.complete(p, EXPRESSION_STATEMENT);
        }
        _ => p.error_and_bump("expected a statement"),
    }
}

/// The body of a compound statement, which must not swallow the enclosing `}`.
fn body(p: &mut Parser<'_>) {
    if p.at(RIGHT_BRACE) || p.at(EOF) {
        p.error("expected a statement");
    } else {
        statement(p);
    }
}

fn condition(p: &mut Parser<'_>) {
    p.expect(LEFT_PAREN);
    exprs::expr(p);
    p.expect(RIGHT_PAREN);
}

fn at_local_variable_declaration(p: &Parser<'_>) -> bool {
    if p.at_set(&MODIFIERS) || p.at(AT) || p.at_set(&PRIMITIVES) {
        return true;
    }
    types::skip_type(p, 0).is_some_and(|n| p.nth(n) == IDENT)
}

/// Only the enhanced form, `for (T x : xs)`, is supported.
fn foreach_statement(p: &mut Parser<'_>) {
    debug_assert_eq!(p.peek_kind(), FOR_KW);

    let m = p.start();
    p.advance();
    p.expect(LEFT_PAREN);

    let variable = p.start();
    modifier_list(p);
    types::type_(p, false);
    let declarator = p.start();
    var_decl_id(p);
    declarator.complete(p, VARIABLE_DECLARATOR);
    variable.complete(p, LOCAL_VARIABLE_DECLARATION);

    p.expect(COLON);
    exprs::expr(p);
    p.expect(RIGHT_PAREN);
    body(p);
    m.complete(p, FOREACH_STATEMENT);
}

fn try_statement(p: &mut Parser<'_>) {
    debug_assert_eq!(p.peek_kind(), TRY_KW);

    let m = p.start();
    p.advance();
    block(p);

    if !p.at(CATCH_KW) {
        p.error("expected 'catch'");
    }
    while p.at(CATCH_KW) {
        catch_clause(p);
    }

    m.complete(p, TRY_STATEMENT);
}

fn catch_clause(p: &mut Parser<'_>) {
    let m = p.start();
    p.advance();
    p.expect(LEFT_PAREN);

    let parameter = p.start();
    modifier_list(p);
    types::type_(p, false);
    var_decl_id(p);
    parameter.complete(p, CATCH_PARAMETER);

    p.expect(RIGHT_PAREN);
    block(p);
    m.complete(p, CATCH_CLAUSE);
}
