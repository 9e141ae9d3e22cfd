//! Syntax file wrapper for parsed C# documents.
//!
//! A [`SyntaxFile`] is one named document: its file name, its parse result
//! and a line index for converting host locations to offsets. It is an
//! immutable snapshot; edits produce new `SyntaxFile`s.

use std::sync::Arc;

use crate::base::{LineCol, LineIndex, TextSize};
use crate::parser::{AstNode, GreenNode, Parse, SourceFile, SyntaxNode, TypeDecl, parse};

/// A parsed, named source document.
///
/// Holds the green tree rather than a `SyntaxNode` so snapshots can be sent
/// across threads; red nodes are created on demand.
#[derive(Debug, Clone)]
pub struct SyntaxFile {
    /// File name or path, e.g. `Forms/MainForm.cs`
    name: Arc<str>,
    /// The underlying rowan parse result
    parse: Parse,
    line_index: Arc<LineIndex>,
}

impl PartialEq for SyntaxFile {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.parse.green == other.parse.green
    }
}

impl Eq for SyntaxFile {}

impl SyntaxFile {
    /// Parse `source` as the document called `name`
    pub fn new(name: impl Into<Arc<str>>, source: &str) -> Self {
        Self {
            name: name.into(),
            parse: parse(source),
            line_index: Arc::new(LineIndex::new(source)),
        }
    }

    /// Wrap an already built tree (e.g. a synthesized document)
    pub fn from_green(name: impl Into<Arc<str>>, green: GreenNode) -> Self {
        let text = SyntaxNode::new_root(green.clone()).text().to_string();
        Self {
            name: name.into(),
            line_index: Arc::new(LineIndex::new(&text)),
            parse: Parse {
                green,
                errors: Vec::new(),
            },
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn name_arc(&self) -> Arc<str> {
        self.name.clone()
    }

    /// Get the underlying parse result
    pub fn parse(&self) -> &Parse {
        &self.parse
    }

    pub fn green(&self) -> &GreenNode {
        &self.parse.green
    }

    /// A fresh red root over the document's tree
    pub fn root(&self) -> SyntaxNode {
        self.parse.syntax()
    }

    /// Get the root source file AST node
    pub fn source_file(&self) -> Option<SourceFile> {
        SourceFile::cast(self.root())
    }

    /// Full document text
    pub fn text(&self) -> String {
        self.root().text().to_string()
    }

    /// Check if parsing had errors
    pub fn has_errors(&self) -> bool {
        !self.parse.errors.is_empty()
    }

    pub fn line_index(&self) -> &LineIndex {
        &self.line_index
    }

    /// Whether `node` is part of this document's tree
    pub fn contains_node(&self, node: &SyntaxNode) -> bool {
        node.ancestors()
            .last()
            .is_some_and(|root| *root.green() == *self.parse.green)
    }

    /// The innermost type declaration enclosing the token at `position`.
    ///
    /// This is how a diagnostic location is mapped back to the declaration it
    /// was reported on.
    pub fn type_at(&self, position: LineCol) -> Option<TypeDecl> {
        let offset = self.line_index.offset(position)?;
        self.type_at_offset(offset)
    }

    pub fn type_at_offset(&self, offset: TextSize) -> Option<TypeDecl> {
        let root = self.root();
        if offset > root.text_range().end() {
            return None;
        }
        let token = root.token_at_offset(offset).right_biased()?;
        token.parent_ancestors().find_map(TypeDecl::cast)
    }
}

/// Split a file name into everything before the final extension and the
/// extension itself. Dots in directory components are not extensions.
pub fn split_extension(name: &str) -> (&str, Option<&str>) {
    let file_start = name.rfind(['/', '\\']).map(|i| i + 1).unwrap_or(0);
    match name[file_start..].rfind('.') {
        Some(dot) if dot > 0 => {
            let dot = file_start + dot;
            (&name[..dot], Some(&name[dot + 1..]))
        }
        _ => (name, None),
    }
}
