//! Typed AST wrappers over the untyped rowan CST.
//!
//! This module provides strongly-typed accessors for C# declaration nodes.
//! Each struct wraps a SyntaxNode and provides methods to access children.

use smol_str::SmolStr;

use super::syntax_kind::SyntaxKind;
use super::{SyntaxNode, SyntaxToken};

/// Trait for AST nodes that wrap a SyntaxNode
pub trait AstNode: Sized {
    fn can_cast(kind: SyntaxKind) -> bool;
    fn cast(node: SyntaxNode) -> Option<Self>;
    fn syntax(&self) -> &SyntaxNode;
}

// ============================================================================
// Helper macros and utilities
// ============================================================================

macro_rules! ast_node {
    ($name:ident, $kind:ident) => {
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub struct $name(SyntaxNode);

        impl AstNode for $name {
            fn can_cast(kind: SyntaxKind) -> bool {
                kind == SyntaxKind::$kind
            }

            fn cast(node: SyntaxNode) -> Option<Self> {
                if Self::can_cast(node.kind()) {
                    Some(Self(node))
                } else {
                    None
                }
            }

            fn syntax(&self) -> &SyntaxNode {
                &self.0
            }
        }
    };
}

/// Macro to generate a method that finds the first child of a specific AST type.
macro_rules! first_child_method {
    ($name:ident, $type:ident) => {
        #[doc = concat!("Get the first `", stringify!($type), "` child of this node.")]
        pub fn $name(&self) -> Option<$type> {
            self.0.children().find_map($type::cast)
        }
    };
}

/// Macro to generate a method that returns an iterator over children of a specific AST type.
macro_rules! children_method {
    ($name:ident, $type:ident) => {
        #[doc = concat!("Get all `", stringify!($type), "` children of this node.")]
        pub fn $name(&self) -> impl Iterator<Item = $type> + '_ {
            self.0.children().filter_map($type::cast)
        }
    };
}

/// Check if a syntax node has a direct child token of the specified kind.
#[inline]
fn has_token(node: &SyntaxNode, kind: SyntaxKind) -> bool {
    node.children_with_tokens()
        .filter_map(|e| e.into_token())
        .any(|t| t.kind() == kind)
}

/// Concatenated text of all non-trivia tokens under `node`
pub fn significant_text(node: &SyntaxNode) -> String {
    node.descendants_with_tokens()
        .filter_map(|e| e.into_token())
        .filter(|t| !t.kind().is_trivia())
        .map(|t| t.text().to_string())
        .collect()
}

/// Trivia tokens that precede the first significant token of `node`,
/// in document order.
pub fn leading_trivia(node: &SyntaxNode) -> Vec<SyntaxToken> {
    node.children_with_tokens()
        .map_while(|e| e.into_token().filter(|t| t.kind().is_trivia()))
        .collect()
}

// ============================================================================
// Root
// ============================================================================

ast_node!(SourceFile, SOURCE_FILE);

impl SourceFile {
    children_method!(usings, UsingDirective);
    children_method!(namespaces, NamespaceDecl);
    children_method!(types, TypeDecl);

    /// Every type declaration in the file, nested ones included, in document order
    pub fn all_types(&self) -> impl Iterator<Item = TypeDecl> + '_ {
        self.0.descendants().filter_map(TypeDecl::cast)
    }
}

// ============================================================================
// Usings and namespaces
// ============================================================================

ast_node!(UsingDirective, USING_DIRECTIVE);

impl UsingDirective {
    /// `using static X;`
    pub fn is_static(&self) -> bool {
        has_token(&self.0, SyntaxKind::STATIC_KW)
    }

    /// Alias name for `using Alias = X.Y;`
    pub fn alias(&self) -> Option<SmolStr> {
        if !has_token(&self.0, SyntaxKind::EQ) {
            return None;
        }
        self.significant_tokens()
            .find(|t| t.kind() == SyntaxKind::IDENT)
            .map(|t| SmolStr::new(t.text()))
    }

    /// The imported namespace (or aliased target), e.g. `System.Windows.Forms`
    pub fn target(&self) -> String {
        let tokens: Vec<_> = self.significant_tokens().collect();
        let start = tokens
            .iter()
            .position(|t| t.kind() == SyntaxKind::EQ)
            .map(|eq| eq + 1)
            .unwrap_or(1);
        tokens
            .iter()
            .skip(start)
            .filter(|t| !matches!(t.kind(), SyntaxKind::SEMICOLON | SyntaxKind::STATIC_KW))
            .map(|t| t.text())
            .collect::<String>()
            .trim_start_matches("global::")
            .to_string()
    }

    fn significant_tokens(&self) -> impl Iterator<Item = SyntaxToken> + '_ {
        self.0
            .descendants_with_tokens()
            .filter_map(|e| e.into_token())
            .filter(|t| !t.kind().is_trivia())
    }
}

ast_node!(NamespaceDecl, NAMESPACE_DECL);

impl NamespaceDecl {
    first_child_method!(name_node, Name);
    first_child_method!(body, NamespaceBody);

    /// Qualified namespace name as written, e.g. `App.Forms`
    pub fn name(&self) -> Option<String> {
        self.name_node()
            .map(|n| n.text())
            .filter(|text| !text.is_empty())
    }

    /// Using directives declared inside this namespace
    pub fn usings(&self) -> Vec<UsingDirective> {
        self.body()
            .map(|b| b.0.children().filter_map(UsingDirective::cast).collect())
            .unwrap_or_default()
    }

    /// Whether this is a `namespace X;` declaration
    pub fn is_file_scoped(&self) -> bool {
        has_token(&self.0, SyntaxKind::SEMICOLON)
    }
}

ast_node!(NamespaceBody, NAMESPACE_BODY);

impl NamespaceBody {
    children_method!(types, TypeDecl);
}

// ============================================================================
// Names and type references
// ============================================================================

ast_node!(Name, NAME);

impl Name {
    /// Name text without trivia
    pub fn text(&self) -> String {
        significant_text(&self.0)
    }

    /// The identifier token (the last one for qualified names)
    pub fn ident_token(&self) -> Option<SyntaxToken> {
        self.0
            .children_with_tokens()
            .filter_map(|e| e.into_token())
            .filter(|t| t.kind() == SyntaxKind::IDENT)
            .last()
    }
}

ast_node!(BaseList, BASE_LIST);

impl BaseList {
    children_method!(types, TypeRef);
}

ast_node!(TypeRef, TYPE_REF);

impl TypeRef {
    /// Reference as written, without trivia: `Forms.Form`, `IList<int>`
    pub fn text(&self) -> String {
        significant_text(&self.0)
    }

    /// Reference with `global::` and generic arguments removed, the form
    /// used for name lookup: `System.Collections.Generic.List`
    pub fn lookup_path(&self) -> String {
        let mut path = String::new();
        let mut depth = 0usize;
        for token in self
            .0
            .descendants_with_tokens()
            .filter_map(|e| e.into_token())
            .filter(|t| !t.kind().is_trivia())
        {
            match token.kind() {
                SyntaxKind::LT => depth += 1,
                SyntaxKind::GT => depth = depth.saturating_sub(1),
                SyntaxKind::L_PAREN | SyntaxKind::L_BRACKET | SyntaxKind::QUESTION
                    if depth == 0 =>
                {
                    break;
                }
                SyntaxKind::IDENT | SyntaxKind::DOT if depth == 0 => path.push_str(token.text()),
                SyntaxKind::COLON_COLON if depth == 0 => {
                    // `global::X` and `alias::X`
                    if path == "global" {
                        path.clear();
                    } else {
                        path.push('.');
                    }
                }
                _ => {}
            }
        }
        path
    }
}

// ============================================================================
// Type declarations
// ============================================================================

ast_node!(TypeDecl, TYPE_DECL);

/// The keyword that introduced a type declaration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeKeyword {
    Class,
    Struct,
    Interface,
    Enum,
    Record,
}

impl TypeDecl {
    first_child_method!(name_node, Name);
    first_child_method!(base_list, BaseList);
    first_child_method!(body, TypeBody);

    /// Simple name of the type
    pub fn name(&self) -> Option<SmolStr> {
        self.ident_token().map(|t| SmolStr::new(t.text()))
    }

    /// The identifier token, where hosts place the type's location
    pub fn ident_token(&self) -> Option<SyntaxToken> {
        self.name_node().and_then(|n| n.ident_token())
    }

    /// Declaration keyword token (`class`, `struct`, `interface`, `enum`, `record`)
    pub fn keyword_token(&self) -> Option<SyntaxToken> {
        self.0
            .children_with_tokens()
            .filter_map(|e| e.into_token())
            .find(|t| {
                t.kind().is_type_keyword() || (t.kind() == SyntaxKind::IDENT && t.text() == "record")
            })
    }

    pub fn keyword(&self) -> Option<TypeKeyword> {
        let token = self.keyword_token()?;
        Some(match token.kind() {
            SyntaxKind::CLASS_KW => TypeKeyword::Class,
            SyntaxKind::STRUCT_KW => TypeKeyword::Struct,
            SyntaxKind::INTERFACE_KW => TypeKeyword::Interface,
            SyntaxKind::ENUM_KW => TypeKeyword::Enum,
            _ => TypeKeyword::Record,
        })
    }

    /// Type parameter list as written, e.g. `<TKey, TValue>`
    pub fn type_params_text(&self) -> Option<String> {
        let mut tokens = self
            .0
            .children_with_tokens()
            .skip_while(|e| e.kind() != SyntaxKind::NAME)
            .skip(1)
            .filter_map(|e| e.into_token())
            .skip_while(|t| t.kind().is_trivia());
        let open = tokens.next().filter(|t| t.kind() == SyntaxKind::LT)?;
        let mut text = open.text().to_string();
        let mut depth = 1usize;
        for token in tokens {
            text.push_str(token.text());
            match token.kind() {
                SyntaxKind::LT => depth += 1,
                SyntaxKind::GT => {
                    depth -= 1;
                    if depth == 0 {
                        return Some(text);
                    }
                }
                _ => {}
            }
        }
        None
    }

    /// Modifier keyword tokens in source order
    pub fn modifiers(&self) -> impl Iterator<Item = SyntaxToken> + '_ {
        self.0
            .children_with_tokens()
            .filter_map(|e| e.into_token())
            .take_while(|t| t.kind().is_trivia() || t.kind().is_modifier())
            .filter(|t| t.kind().is_modifier())
    }

    pub fn has_modifier(&self, kind: SyntaxKind) -> bool {
        self.modifiers().any(|t| t.kind() == kind)
    }

    pub fn is_partial(&self) -> bool {
        self.has_modifier(SyntaxKind::PARTIAL_KW)
    }

    /// Direct members of the type body
    pub fn members(&self) -> Vec<Member> {
        self.body()
            .map(|b| b.members().collect())
            .unwrap_or_default()
    }

    /// The type declaration directly containing this one, if nested
    pub fn parent_type(&self) -> Option<TypeDecl> {
        self.0.parent()?.parent().and_then(TypeDecl::cast)
    }

    /// Namespace declarations enclosing this type, innermost first
    pub fn enclosing_namespaces(&self) -> impl Iterator<Item = NamespaceDecl> + '_ {
        self.0.ancestors().skip(1).filter_map(NamespaceDecl::cast)
    }
}

ast_node!(TypeBody, TYPE_BODY);

impl TypeBody {
    /// Member declarations in document order
    pub fn members(&self) -> impl Iterator<Item = Member> + '_ {
        self.0.children().filter_map(Member::cast)
    }
}

// ============================================================================
// Members
// ============================================================================

/// Any declaration directly inside a type body
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Member(SyntaxNode);

impl AstNode for Member {
    fn can_cast(kind: SyntaxKind) -> bool {
        kind.is_member()
    }

    fn cast(node: SyntaxNode) -> Option<Self> {
        if Self::can_cast(node.kind()) {
            Some(Self(node))
        } else {
            None
        }
    }

    fn syntax(&self) -> &SyntaxNode {
        &self.0
    }
}

impl Member {
    pub fn kind(&self) -> SyntaxKind {
        self.0.kind()
    }

    /// Declared name; `None` for operators, indexers and unparsed members
    pub fn name(&self) -> Option<SmolStr> {
        self.0
            .children()
            .find_map(Name::cast)
            .and_then(|n| n.ident_token())
            .map(|t| SmolStr::new(t.text()))
    }

    pub fn is_method(&self) -> bool {
        self.kind() == SyntaxKind::METHOD
    }

    /// Trivia preceding the member's first token
    pub fn leading_trivia(&self) -> Vec<SyntaxToken> {
        leading_trivia(&self.0)
    }
}
