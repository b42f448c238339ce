//! On-demand tokenizer for the Java subset.
//!
//! Whitespace and comments are skipped; the tree keeps spans, not trivia.
//! Malformed input never stops tokenization: it surfaces as `UNKNOWN` tokens
//! for the parser to report.

mod cursor;

use cursor::Cursor;
pub use jast_syntax::SyntaxKind;
use jast_syntax::SyntaxKind::*;
use text_size::{TextRange, TextSize};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    pub kind: SyntaxKind,
    pub range: TextRange,
}

impl Token {
    const EOF: Self = Self { kind: EOF, range: TextRange::empty(TextSize::new(0)) };
}

pub struct Tokenizer<'t> {
    text: &'t str,
    cursor: Cursor<'t>,
    current: Token,
}

impl<'t> Tokenizer<'t> {
    pub fn new(text: &'t str) -> Self {
        let mut tokenizer = Self { text, cursor: Cursor::new(text), current: Token::EOF };
        tokenizer.next_token();
        tokenizer
    }

    pub fn peek(&self) -> &Token {
        &self.current
    }

    /// Returns the current token and moves to the next one. Past the end of
    /// input, every call returns `EOF`.
    pub fn next_token(&mut self) -> Token {
        self.trivia();
        let (kind, range) = self.syntax_kind();
        std::mem::replace(&mut self.current, Token { kind, range })
    }

    fn offset(&self) -> TextSize {
        TextSize::of(self.text) - self.cursor.len()
    }

    fn range(&self) -> TextRange {
        let len = self.cursor.pos_within_token();
        TextRange::at(self.offset() - len, len)
    }

    fn text(&self) -> &'t str {
        &self.text[self.range()]
    }

    fn trivia(&mut self) {
        loop {
            match self.cursor.peek() {
                '/' if self.cursor.second() == '/' => {
                    self.cursor.advance_while(|c| c != '\n');
                }
                '/' if self.cursor.second() == '*' => {
                    self.cursor.advance();
                    self.cursor.advance();
                    while !self.cursor.is_eof() {
                        if self.cursor.advance() == '*' && self.cursor.eat('/') {
                            break;
                        }
                    }
                }
                c if c.is_whitespace() => {
                    self.cursor.advance_while(char::is_whitespace);
                }
                _ => break,
            }
            self.cursor.reset_pos_within_token();
        }
    }

    fn syntax_kind(&mut self) -> (SyntaxKind, TextRange) {
        let kind = if self.cursor.is_eof() { EOF } else { self.scan() };

        let range = self.range();
        self.cursor.reset_pos_within_token();

        (kind, range)
    }

    fn scan(&mut self) -> SyntaxKind {
        match self.cursor.advance() {
            '(' => LEFT_PAREN,
            ')' => RIGHT_PAREN,
            '[' => LEFT_BRACKET,
            ']' => RIGHT_BRACKET,
            '{' => LEFT_BRACE,
            '}' => RIGHT_BRACE,
            ',' => COMMA,
            ';' => SEMICOLON,
            '@' => AT,
            '?' => QUESTION,
            '*' => STAR,
            '/' => SLASH,
            '%' => PERCENT,
            ':' if self.cursor.eat(':') => COLON_COLON,
            ':' => COLON,
            '<' if self.cursor.eat('=') => LT_EQ,
            '<' => LT,
            '>' if self.cursor.eat('=') => GT_EQ,
            '>' => GT,
            '=' if self.cursor.eat('=') => EQ_EQ,
            '=' => EQ,
            '!' if self.cursor.eat('=') => BANG_EQ,
            '!' => BANG,
            '+' if self.cursor.eat('=') => PLUS_EQ,
            '+' => PLUS,
            '-' if self.cursor.eat('=') => MINUS_EQ,
            '-' => MINUS,
            '&' if self.cursor.eat('&') => AMP_AMP,
            '|' if self.cursor.eat('|') => PIPE_PIPE,
            '.' if self.cursor.matches('.') && self.cursor.second() == '.' => {
                self.cursor.advance();
                self.cursor.advance();
                ELLIPSIS
            }
            '.' if self.cursor.peek().is_ascii_digit() => {
                self.digits(false);
                self.float_exponent();
                self.float_suffix();
                FLOAT_LITERAL
            }
            '.' => DOT,
            '"' => self.quoted('"', STRING_LITERAL),
            '\'' => self.quoted('\'', CHAR_LITERAL),
            first_char @ '0'..='9' => self.number(first_char),
            c if c == '_' || c == '$' || c.is_alphabetic() => {
                self.cursor.advance_while(|c| c == '_' || c == '$' || c.is_alphanumeric());
                SyntaxKind::from_keyword(self.text()).unwrap_or(IDENT)
            }
            _ => UNKNOWN,
        }
    }

    /// A string or char literal; unterminated ones end at the line end and
    /// come out as `UNKNOWN`.
    fn quoted(&mut self, quote: char, kind: SyntaxKind) -> SyntaxKind {
        loop {
            match self.cursor.peek() {
                '\n' | '\r' => return UNKNOWN,
                _ if self.cursor.is_eof() => return UNKNOWN,
                '\\' => {
                    self.cursor.advance();
                    self.cursor.advance();
                }
                c => {
                    self.cursor.advance();
                    if c == quote {
                        return kind;
                    }
                }
            }
        }
    }

    fn number(&mut self, c: char) -> SyntaxKind {
        if c == '0' {
            match self.cursor.peek() {
                'x' | 'X' => {
                    self.cursor.advance();
                    self.digits(true);
                    return self.int_suffix();
                }
                'b' | 'B' => {
                    self.cursor.advance();
                    self.digits(false);
                    return self.int_suffix();
                }
                _ => {}
            }
        }
        self.digits(false);

        if self.cursor.matches('.') && self.cursor.second().is_ascii_digit() {
            self.cursor.advance();
            self.digits(false);
            self.float_exponent();
            self.float_suffix();
            return FLOAT_LITERAL;
        }

        if self.cursor.matches('e') || self.cursor.matches('E') {
            self.float_exponent();
            self.float_suffix();
            return FLOAT_LITERAL;
        }

        if self.float_suffix() {
            return FLOAT_LITERAL;
        }

        self.int_suffix()
    }

    fn int_suffix(&mut self) -> SyntaxKind {
        if !self.cursor.eat('l') {
            self.cursor.eat('L');
        }
        INT_LITERAL
    }

    fn float_suffix(&mut self) -> bool {
        match self.cursor.peek() {
            'f' | 'F' | 'd' | 'D' => {
                self.cursor.advance();
                true
            }
            _ => false,
        }
    }

    fn digits(&mut self, allow_hex: bool) {
        loop {
            match self.cursor.peek() {
                '_' | '0'..='9' => {
                    self.cursor.advance();
                }
                'a'..='f' | 'A'..='F' if allow_hex => {
                    self.cursor.advance();
                }
                _ => return,
            }
        }
    }

    fn float_exponent(&mut self) {
        if self.cursor.matches('e') || self.cursor.matches('E') {
            self.cursor.advance();
            if self.cursor.matches('-') || self.cursor.matches('+') {
                self.cursor.advance();
            }
            self.digits(false);
        }
    }
}

/// Tokenizes all of `text`. The last token is always `EOF`.
pub fn tokenize(text: &str) -> Vec<Token> {
    let mut tokenizer = Tokenizer::new(text);
    let mut tokens = Vec::with_capacity(text.len() / 4 + 1);
    loop {
        let token = tokenizer.next_token();
        tokens.push(token);
        if token.kind == EOF {
            return tokens;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(text: &str) -> Vec<(SyntaxKind, &str)> {
        tokenize(text).into_iter().map(|token| (token.kind, &text[token.range])).collect()
    }

    #[test]
    fn test_integer_literals() {
        let inputs = ["123", "0", "0b1010", "0x1f", "0XFF", "123_456", "10L"];

        for input in inputs {
            let mut tokenizer = Tokenizer::new(input);
            let kind = tokenizer.next_token().kind;
            assert_eq!(kind, INT_LITERAL, "Input: '{input}'");
            assert!(tokenizer.cursor.is_eof(), "Tokenizer did not consume all input for '{input}'");
        }
    }

    #[test]
    fn test_float_literals() {
        let inputs = ["123.456", "0.0", "1e10", "1.0e-5", "123_456.789_012", "1f", "2.5D", ".5"];

        for input in inputs {
            let mut tokenizer = Tokenizer::new(input);
            let kind = tokenizer.next_token().kind;
            assert_eq!(kind, FLOAT_LITERAL, "Input: '{input}'");
            assert!(tokenizer.cursor.is_eof(), "Tokenizer did not consume all input for '{input}'");
        }
    }

    #[test]
    fn test_string_and_char_literals() {
        assert_eq!(
            kinds(r#""a\"b" 'c' '\n'"#),
            [
                (STRING_LITERAL, r#""a\"b""#),
                (CHAR_LITERAL, "'c'"),
                (CHAR_LITERAL, r"'\n'"),
                (EOF, ""),
            ]
        );
    }

    #[test]
    fn test_unterminated_string() {
        assert_eq!(kinds("\"abc\nx"), [(UNKNOWN, "\"abc"), (IDENT, "x"), (EOF, "")]);
    }

    #[test]
    fn test_keywords_and_identifiers() {
        assert_eq!(
            kinds("public class Foo_1 $bar"),
            [
                (PUBLIC_KW, "public"),
                (CLASS_KW, "class"),
                (IDENT, "Foo_1"),
                (IDENT, "$bar"),
                (EOF, ""),
            ]
        );
    }

    #[test]
    fn test_comments_are_skipped() {
        let text = "a // line\n/* block\n */ b /* unterminated";
        assert_eq!(kinds(text), [(IDENT, "a"), (IDENT, "b"), (EOF, "")]);
    }

    #[test]
    fn test_method_reference() {
        assert_eq!(
            kinds("ArrayList::new"),
            [(IDENT, "ArrayList"), (COLON_COLON, "::"), (NEW_KW, "new"), (EOF, "")]
        );
    }

    #[test]
    fn test_varargs() {
        assert_eq!(
            kinds("int... xs"),
            [(INT_KW, "int"), (ELLIPSIS, "..."), (IDENT, "xs"), (EOF, "")]
        );
    }

    #[test]
    fn test_longest_match_operators() {
        assert_eq!(
            kinds("a<=b==c!=d&&e||f+=g-=h"),
            [
                (IDENT, "a"),
                (LT_EQ, "<="),
                (IDENT, "b"),
                (EQ_EQ, "=="),
                (IDENT, "c"),
                (BANG_EQ, "!="),
                (IDENT, "d"),
                (AMP_AMP, "&&"),
                (IDENT, "e"),
                (PIPE_PIPE, "||"),
                (IDENT, "f"),
                (PLUS_EQ, "+="),
                (IDENT, "g"),
                (MINUS_EQ, "-="),
                (IDENT, "h"),
                (EOF, ""),
            ]
        );
    }

    #[test]
    fn test_nested_generics_close_one_at_a_time() {
        assert_eq!(
            kinds("List<List<T>>"),
            [
                (IDENT, "List"),
                (LT, "<"),
                (IDENT, "List"),
                (LT, "<"),
                (IDENT, "T"),
                (GT, ">"),
                (GT, ">"),
                (EOF, ""),
            ]
        );
    }

    #[test]
    fn test_unknown_characters() {
        assert_eq!(kinds("a # b"), [(IDENT, "a"), (UNKNOWN, "#"), (IDENT, "b"), (EOF, "")]);
    }

    #[test]
    fn test_eof_is_sticky() {
        let mut tokenizer = Tokenizer::new("  ");
        assert_eq!(tokenizer.next_token().kind, EOF);
        assert_eq!(tokenizer.next_token().kind, EOF);
        assert_eq!(tokenizer.peek().range, TextRange::empty(TextSize::new(2)));
    }
}
