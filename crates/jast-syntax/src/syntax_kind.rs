/// Token and node kinds of the Java subset.
///
/// Token kinds come first, node kinds start at [`SyntaxKind::COMPILATION_UNIT`].
#[allow(non_camel_case_types)]
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
#[repr(u16)]
pub enum SyntaxKind {
    LEFT_PAREN,
    RIGHT_PAREN,
    LEFT_BRACKET,
    RIGHT_BRACKET,
    LEFT_BRACE,
    RIGHT_BRACE,
    LT,
    GT,
    LT_EQ,
    GT_EQ,
    EQ,
    EQ_EQ,
    BANG,
    BANG_EQ,
    PLUS,
    MINUS,
    STAR,
    SLASH,
    PERCENT,
    AMP_AMP,
    PIPE_PIPE,
    PLUS_EQ,
    MINUS_EQ,
    COMMA,
    SEMICOLON,
    DOT,
    ELLIPSIS,
    COLON,
    COLON_COLON,
    AT,
    QUESTION,

    ABSTRACT_KW,
    BOOLEAN_KW,
    BYTE_KW,
    CATCH_KW,
    CHAR_KW,
    CLASS_KW,
    DOUBLE_KW,
    ELSE_KW,
    FALSE_KW,
    FINAL_KW,
    FLOAT_KW,
    FOR_KW,
    IF_KW,
    INT_KW,
    LONG_KW,
    NEW_KW,
    NULL_KW,
    PRIVATE_KW,
    PROTECTED_KW,
    PUBLIC_KW,
    RETURN_KW,
    SHORT_KW,
    STATIC_KW,
    THIS_KW,
    TRUE_KW,
    TRY_KW,
    VOID_KW,
    WHILE_KW,

    IDENT,
    INT_LITERAL,
    FLOAT_LITERAL,
    STRING_LITERAL,
    CHAR_LITERAL,

    UNKNOWN,
    EOF,

    COMPILATION_UNIT,
    CLASS_DECLARATION,
    CLASS_BODY,
    MODIFIER_LIST,
    MODIFIER,
    ANNOTATION,
    FIELD_DECLARATION,
    METHOD_DECLARATION,
    FORMAL_PARAMETERS,
    FORMAL_PARAMETER,
    VARIABLE_DECLARATOR,
    VARIABLE_DECLARATOR_ID,

    PRIMITIVE_TYPE,
    CLASS_TYPE,
    ARRAY_TYPE,
    ARRAY_DIMENSIONS,
    ARRAY_TYPE_DIM,
    TYPE_ARGUMENTS,
    VOID_TYPE,

    BLOCK,
    LOCAL_VARIABLE_DECLARATION,
    EXPRESSION_STATEMENT,
    RETURN_STATEMENT,
    IF_STATEMENT,
    WHILE_STATEMENT,
    FOREACH_STATEMENT,
    TRY_STATEMENT,
    CATCH_CLAUSE,
    CATCH_PARAMETER,

    ASSIGNMENT_EXPRESSION,
    INFIX_EXPRESSION,
    UNARY_EXPRESSION,
    PARENTHESIZED_EXPRESSION,
    LITERAL,
    AMBIGUOUS_NAME,
    FIELD_ACCESS,
    METHOD_CALL,
    ARGUMENT_LIST,
    CONSTRUCTOR_CALL,
    METHOD_REFERENCE,
    TYPE_EXPRESSION,
    CLASS_LITERAL,
    THIS_EXPRESSION,

    ERROR,
    TOMBSTONE,
}

impl SyntaxKind {
    /// Returns `true` for node kinds, `false` for token kinds.
    #[inline]
    pub fn is_node(self) -> bool {
        self >= SyntaxKind::COMPILATION_UNIT
    }

    #[inline]
    pub fn is_keyword(self) -> bool {
        (SyntaxKind::ABSTRACT_KW..=SyntaxKind::WHILE_KW).contains(&self)
    }

    #[inline]
    pub fn is_primitive_keyword(self) -> bool {
        use SyntaxKind::*;
        matches!(
            self,
            BOOLEAN_KW | BYTE_KW | CHAR_KW | SHORT_KW | INT_KW | LONG_KW | FLOAT_KW | DOUBLE_KW
        )
    }

    #[inline]
    pub fn is_modifier_keyword(self) -> bool {
        use SyntaxKind::*;
        matches!(self, ABSTRACT_KW | FINAL_KW | PRIVATE_KW | PROTECTED_KW | PUBLIC_KW | STATIC_KW)
    }

    /// Type nodes that may stand on their own, e.g. on the left of a `::`.
    #[inline]
    pub fn is_type(self) -> bool {
        matches!(self, SyntaxKind::PRIMITIVE_TYPE | SyntaxKind::CLASS_TYPE | SyntaxKind::ARRAY_TYPE)
    }

    pub fn from_keyword(ident: &str) -> Option<SyntaxKind> {
        use SyntaxKind::*;
        let kind = match ident {
            "abstract" => ABSTRACT_KW,
            "boolean" => BOOLEAN_KW,
            "byte" => BYTE_KW,
            "catch" => CATCH_KW,
            "char" => CHAR_KW,
            "class" => CLASS_KW,
            "double" => DOUBLE_KW,
            "else" => ELSE_KW,
            "false" => FALSE_KW,
            "final" => FINAL_KW,
            "float" => FLOAT_KW,
            "for" => FOR_KW,
            "if" => IF_KW,
            "int" => INT_KW,
            "long" => LONG_KW,
            "new" => NEW_KW,
            "null" => NULL_KW,
            "private" => PRIVATE_KW,
            "protected" => PROTECTED_KW,
            "public" => PUBLIC_KW,
            "return" => RETURN_KW,
            "short" => SHORT_KW,
            "static" => STATIC_KW,
            "this" => THIS_KW,
            "true" => TRUE_KW,
            "try" => TRY_KW,
            "void" => VOID_KW,
            "while" => WHILE_KW,
            _ => return None,
        };
        Some(kind)
    }
}
