/// Calls `$callback!` with every node kind that has a typed wrapper, as
/// `Wrapper = KIND, visit_method;` entries.
///
/// Typed wrappers and visitor methods are both generated from this list, so
/// adding a kind here gives it a wrapper and a visitor hook at once.
macro_rules! for_each_node {
    ($callback:ident) => {
        $callback! {
            CompilationUnit = COMPILATION_UNIT, visit_compilation_unit;
            ClassDeclaration = CLASS_DECLARATION, visit_class_declaration;
            ClassBody = CLASS_BODY, visit_class_body;
            ModifierList = MODIFIER_LIST, visit_modifier_list;
            Annotation = ANNOTATION, visit_annotation;
            FieldDeclaration = FIELD_DECLARATION, visit_field_declaration;
            MethodDeclaration = METHOD_DECLARATION, visit_method_declaration;
            FormalParameters = FORMAL_PARAMETERS, visit_formal_parameters;
            FormalParameter = FORMAL_PARAMETER, visit_formal_parameter;
            VariableDeclarator = VARIABLE_DECLARATOR, visit_variable_declarator;
            VariableDeclaratorId = VARIABLE_DECLARATOR_ID, visit_variable_declarator_id;
            PrimitiveType = PRIMITIVE_TYPE, visit_primitive_type;
            ClassType = CLASS_TYPE, visit_class_type;
            ArrayType = ARRAY_TYPE, visit_array_type;
            ArrayDimensions = ARRAY_DIMENSIONS, visit_array_dimensions;
            ArrayTypeDim = ARRAY_TYPE_DIM, visit_array_type_dim;
            TypeArguments = TYPE_ARGUMENTS, visit_type_arguments;
            VoidType = VOID_TYPE, visit_void_type;
            Block = BLOCK, visit_block;
            LocalVariableDeclaration = LOCAL_VARIABLE_DECLARATION, visit_local_variable_declaration;
            ExpressionStatement = EXPRESSION_STATEMENT, visit_expression_statement;
            ReturnStatement = RETURN_STATEMENT, visit_return_statement;
            IfStatement = IF_STATEMENT, visit_if_statement;
            WhileStatement = WHILE_STATEMENT, visit_while_statement;
            ForeachStatement = FOREACH_STATEMENT, visit_foreach_statement;
            TryStatement = TRY_STATEMENT, visit_try_statement;
            CatchClause = CATCH_CLAUSE, visit_catch_clause;
            CatchParameter = CATCH_PARAMETER, visit_catch_parameter;
            AssignmentExpression = ASSIGNMENT_EXPRESSION, visit_assignment_expression;
            InfixExpression = INFIX_EXPRESSION, visit_infix_expression;
            UnaryExpression = UNARY_EXPRESSION, visit_unary_expression;
            ParenthesizedExpression = PARENTHESIZED_EXPRESSION, visit_parenthesized_expression;
            Literal = LITERAL, visit_literal;
            AmbiguousName = AMBIGUOUS_NAME, visit_ambiguous_name;
            FieldAccess = FIELD_ACCESS, visit_field_access;
            MethodCall = METHOD_CALL, visit_method_call;
            ArgumentList = ARGUMENT_LIST, visit_argument_list;
            ConstructorCall = CONSTRUCTOR_CALL, visit_constructor_call;
            MethodReference = METHOD_REFERENCE, visit_method_reference;
            TypeExpression = TYPE_EXPRESSION, visit_type_expression;
            ClassLiteral = CLASS_LITERAL, visit_class_literal;
            ThisExpression = THIS_EXPRESSION, visit_this_expression;
        }
    };
}
