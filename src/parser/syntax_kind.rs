//! Syntax kinds for the Rowan-based CST
//!
//! This enum defines all possible node and token kinds in the syntax tree.
//! It covers the declaration-level subset of C# that container-control
//! sources use: usings, namespaces, type declarations and their members.
//! Statement and expression syntax inside bodies is kept as flat tokens.

/// All syntax kinds (tokens and nodes)
///
/// Tokens are leaf nodes (identifiers, keywords, punctuation, trivia).
/// Nodes are composite (namespaces, type declarations, members).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u16)]
#[allow(non_camel_case_types)]
pub enum SyntaxKind {
    // =========================================================================
    // TRIVIA (preserved but not semantically meaningful)
    // =========================================================================
    WHITESPACE = 0,     // spaces and tabs, never a line break
    NEWLINE,            // \n, \r\n or \r
    LINE_COMMENT,       // // ...
    DOC_COMMENT,        // /// ...
    BLOCK_COMMENT,      // /* ... */
    REGION_START,       // #region ...
    REGION_END,         // #endregion ...
    DIRECTIVE,          // any other #... line

    // =========================================================================
    // LITERALS
    // =========================================================================
    IDENT,
    NUMBER,
    STRING,
    CHAR,

    // =========================================================================
    // PUNCTUATION
    // =========================================================================
    L_BRACE,            // {
    R_BRACE,            // }
    L_PAREN,            // (
    R_PAREN,            // )
    L_BRACKET,          // [
    R_BRACKET,          // ]
    LT,                 // <
    GT,                 // >
    SEMICOLON,          // ;
    COLON,              // :
    COLON_COLON,        // ::
    COMMA,              // ,
    DOT,                // .
    EQ,                 // =
    FAT_ARROW,          // =>
    QUESTION,           // ?
    TILDE,              // ~
    OPERATOR,           // any other operator (+, ==, &&, ...)

    // =========================================================================
    // KEYWORDS
    // =========================================================================
    // Modifiers
    PUBLIC_KW,
    PRIVATE_KW,
    PROTECTED_KW,
    INTERNAL_KW,
    STATIC_KW,
    READONLY_KW,
    SEALED_KW,
    ABSTRACT_KW,
    VIRTUAL_KW,
    OVERRIDE_KW,
    PARTIAL_KW,
    NEW_KW,
    EXTERN_KW,
    UNSAFE_KW,
    ASYNC_KW,
    CONST_KW,
    VOLATILE_KW,
    // Declarations
    CLASS_KW,
    STRUCT_KW,
    INTERFACE_KW,
    ENUM_KW,
    NAMESPACE_KW,
    USING_KW,
    DELEGATE_KW,
    EVENT_KW,
    OPERATOR_KW,
    THIS_KW,

    // =========================================================================
    // NODES
    // =========================================================================
    SOURCE_FILE,
    USING_DIRECTIVE,
    NAMESPACE_DECL,
    NAMESPACE_BODY,
    TYPE_DECL,
    TYPE_BODY,
    BASE_LIST,
    TYPE_REF,
    NAME,
    ATTRIBUTE_LIST,
    BLOCK,

    // Members of a type body
    FIELD,
    METHOD,
    CONSTRUCTOR,
    DESTRUCTOR,
    PROPERTY,
    INDEXER,
    EVENT,
    OPERATOR_DECL,
    DELEGATE_DECL,
    UNKNOWN_MEMBER,

    // Special
    ERROR,

    #[doc(hidden)]
    __LAST,
}

impl SyntaxKind {
    /// Check if this is a trivia token
    pub fn is_trivia(self) -> bool {
        (self as u16) <= (Self::DIRECTIVE as u16)
    }

    /// Check if this is a region marker directive
    pub fn is_region_marker(self) -> bool {
        matches!(self, Self::REGION_START | Self::REGION_END)
    }

    /// Check if this is a keyword
    pub fn is_keyword(self) -> bool {
        (self as u16) >= (Self::PUBLIC_KW as u16) && (self as u16) <= (Self::THIS_KW as u16)
    }

    /// Check if this is a declaration modifier keyword
    pub fn is_modifier(self) -> bool {
        (self as u16) >= (Self::PUBLIC_KW as u16) && (self as u16) <= (Self::VOLATILE_KW as u16)
    }

    /// Check if this keyword introduces a type declaration
    pub fn is_type_keyword(self) -> bool {
        matches!(
            self,
            Self::CLASS_KW | Self::STRUCT_KW | Self::INTERFACE_KW | Self::ENUM_KW
        )
    }

    /// Check if this is a punctuation token
    pub fn is_punct(self) -> bool {
        (self as u16) >= (Self::L_BRACE as u16) && (self as u16) <= (Self::OPERATOR as u16)
    }

    /// Check if this is a literal
    pub fn is_literal(self) -> bool {
        matches!(self, Self::NUMBER | Self::STRING | Self::CHAR)
    }

    /// Check if this is a member node of a type body
    pub fn is_member(self) -> bool {
        matches!(
            self,
            Self::FIELD
                | Self::METHOD
                | Self::CONSTRUCTOR
                | Self::DESTRUCTOR
                | Self::PROPERTY
                | Self::INDEXER
                | Self::EVENT
                | Self::OPERATOR_DECL
                | Self::DELEGATE_DECL
                | Self::TYPE_DECL
                | Self::UNKNOWN_MEMBER
        )
    }
}

impl From<SyntaxKind> for rowan::SyntaxKind {
    fn from(kind: SyntaxKind) -> Self {
        Self(kind as u16)
    }
}

impl From<rowan::SyntaxKind> for SyntaxKind {
    fn from(raw: rowan::SyntaxKind) -> Self {
        assert!(raw.0 < SyntaxKind::__LAST as u16);
        // Safety: we control all syntax kinds and check bounds above
        unsafe { std::mem::transmute::<u16, SyntaxKind>(raw.0) }
    }
}

/// Language definition for Rowan
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CSharpLanguage {}

impl rowan::Language for CSharpLanguage {
    type Kind = SyntaxKind;

    fn kind_from_raw(raw: rowan::SyntaxKind) -> Self::Kind {
        raw.into()
    }

    fn kind_to_raw(kind: Self::Kind) -> rowan::SyntaxKind {
        kind.into()
    }
}

/// Type aliases for convenience
pub type SyntaxNode = rowan::SyntaxNode<CSharpLanguage>;
pub type SyntaxToken = rowan::SyntaxToken<CSharpLanguage>;
pub type SyntaxElement = rowan::SyntaxElement<CSharpLanguage>;
pub type SyntaxNodeChildren = rowan::SyntaxNodeChildren<CSharpLanguage>;
