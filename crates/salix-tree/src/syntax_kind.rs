#[allow(non_camel_case_types)]
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum SyntaxKind {
    SOURCE_FILE,
    DOC_COMMENT,

    CLASS_DECLARATION,
    INTERFACE_DECLARATION,
    ENUM_DECLARATION,
    METHOD,
    PROPERTY,
    FIELD,
    PARAMETER,
    MODIFIER_LIST,
    ANNOTATION,

    BLOCK,
    IF_STATEMENT,
    WHILE_STATEMENT,
    DO_STATEMENT,
    FOR_STATEMENT,
    FOREACH_STATEMENT,
    SWITCH_STATEMENT,
    CASE_CLAUSE,
    BREAK_STATEMENT,
    CONTINUE_STATEMENT,
    RETURN_STATEMENT,
    THROW_STATEMENT,
    TRY_STATEMENT,
    CATCH_CLAUSE,
    EXPRESSION_STATEMENT,
    VARIABLE_DECLARATION,

    ASSIGNMENT_EXPRESSION,
    BINARY_EXPRESSION,
    UNARY_EXPRESSION,
    CALL_EXPRESSION,
    NEW_EXPRESSION,
    CAST_EXPRESSION,
    TERNARY_EXPRESSION,
    LITERAL_EXPRESSION,
    NAME_REFERENCE,
    THIS_REFERENCE,
    SUPER_REFERENCE,
}

impl SyntaxKind {
    /// Returns `true` for the synthetic comment nodes the closer inserts.
    pub fn is_comment(self) -> bool {
        matches!(self, Self::DOC_COMMENT)
    }
}
