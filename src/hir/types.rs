//! Type model: merged partial types and base-type resolution.
//!
//! A C# type may be declared in several parts across files. Each syntactic
//! declaration becomes a [`TypePart`]; parts sharing a fully-qualified name
//! are merged into one [`MergedType`]. The [`TypeIndex`] owns all merged
//! types of a workspace and resolves base references to walk inheritance
//! chains, falling back to the [`ExternalCatalog`] for framework types.

use std::sync::Arc;

use indexmap::IndexMap;
use rustc_hash::{FxHashMap, FxHashSet};
use smol_str::SmolStr;

use super::config::ExternalCatalog;
use crate::base::{Span, TextRange};
use crate::parser::{NamespaceDecl, SyntaxKind, TypeDecl, TypeKeyword};
use crate::syntax::SyntaxFile;

// ============================================================================
// PARTS
// ============================================================================

/// Kind and name of one member declaration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MemberSummary {
    pub kind: SyntaxKind,
    pub name: Option<SmolStr>,
}

impl MemberSummary {
    pub fn is_method_named(&self, name: &str) -> bool {
        self.kind == SyntaxKind::METHOD && self.name.as_deref() == Some(name)
    }
}

/// Using directives visible at a declaration.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Imports {
    /// Imported namespaces, outermost scope first
    pub namespaces: Vec<SmolStr>,
    /// Alias → target
    pub aliases: FxHashMap<SmolStr, SmolStr>,
}

/// One syntactic declaration of a type.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypePart {
    /// Document the part is declared in
    pub file: Arc<str>,
    /// Range of the type's identifier
    pub range: TextRange,
    /// Line/column span of the identifier (0-indexed)
    pub span: Span,
    pub keyword: TypeKeyword,
    /// Base references as written, in lookup form (no `global::`, no generics)
    pub bases: Vec<SmolStr>,
    pub members: Vec<MemberSummary>,
    /// Qualified name of the enclosing namespaces and types, empty at top level
    pub container: SmolStr,
    pub imports: Imports,
}

impl TypePart {
    /// Summarize `decl` as declared in `file`.
    ///
    /// Returns `None` for declarations without a name (recovered syntax errors).
    pub fn from_decl(file: &SyntaxFile, decl: &TypeDecl) -> Option<Self> {
        let ident = decl.ident_token()?;
        let range = ident.text_range();
        Some(Self {
            file: file.name_arc(),
            range,
            span: file.line_index().span(range),
            keyword: decl.keyword().unwrap_or(TypeKeyword::Class),
            bases: decl
                .base_list()
                .map(|list| list.types().map(|t| SmolStr::new(t.lookup_path())).collect())
                .unwrap_or_default(),
            members: decl
                .members()
                .iter()
                .map(|m| MemberSummary {
                    kind: m.kind(),
                    name: m.name(),
                })
                .collect(),
            container: SmolStr::new(container_of(decl)),
            imports: imports_of(file, decl),
        })
    }

    /// Scopes searched for references written in this part, innermost first.
    /// The global scope is the empty string and always comes last.
    fn scopes(&self) -> impl Iterator<Item = &str> + '_ {
        let container = self.container.as_str();
        let inner = container
            .char_indices()
            .rev()
            .filter(|&(_, c)| c == '.')
            .map(move |(i, _)| &container[..i]);
        std::iter::once(container)
            .filter(|c| !c.is_empty())
            .chain(inner)
            .chain(std::iter::once(""))
    }
}

fn qualify(scope: &str, name: &str) -> String {
    if scope.is_empty() {
        name.to_string()
    } else {
        format!("{}.{}", scope, name)
    }
}

/// `Ns.Inner.Outer` for a type nested in `Outer` inside `namespace Ns { namespace Inner { ... } }`
fn container_of(decl: &TypeDecl) -> String {
    let outer_types = std::iter::successors(decl.parent_type(), TypeDecl::parent_type)
        .filter_map(|t| t.name().map(|n| n.to_string()));
    let namespaces = decl.enclosing_namespaces().filter_map(|ns| ns.name());
    let mut segments: Vec<String> = outer_types.chain(namespaces).collect();
    segments.reverse();
    segments.join(".")
}

fn imports_of(file: &SyntaxFile, decl: &TypeDecl) -> Imports {
    let mut usings = Vec::new();
    if let Some(source) = file.source_file() {
        usings.extend(source.usings());
    }
    let mut namespaces: Vec<NamespaceDecl> = decl.enclosing_namespaces().collect();
    namespaces.reverse();
    for namespace in &namespaces {
        usings.extend(namespace.usings());
    }

    let mut imports = Imports::default();
    for using in usings.iter().filter(|u| !u.is_static()) {
        let target = SmolStr::new(using.target());
        match using.alias() {
            Some(alias) => {
                imports.aliases.insert(alias, target);
            }
            None => imports.namespaces.push(target),
        }
    }
    imports
}

// ============================================================================
// MERGED TYPES
// ============================================================================

/// A logical type: every part declared under one fully-qualified name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MergedType {
    pub name: SmolStr,
    pub qualified_name: SmolStr,
    /// Parts in workspace document order, then source order
    pub parts: Vec<TypePart>,
}

impl MergedType {
    /// The first declared part, where diagnostics are reported
    pub fn primary_part(&self) -> Option<&TypePart> {
        self.parts.first()
    }

    /// Members of all parts
    pub fn members(&self) -> impl Iterator<Item = &MemberSummary> + '_ {
        self.parts.iter().flat_map(|p| p.members.iter())
    }

    /// Whether a direct member method named exactly `name` exists in any part
    pub fn has_method(&self, name: &str) -> bool {
        self.members().any(|m| m.is_method_named(name))
    }

    pub fn is_interface(&self) -> bool {
        self.parts.iter().any(|p| p.keyword == TypeKeyword::Interface)
    }

    /// Documents declaring a part of this type
    pub fn files(&self) -> impl Iterator<Item = &str> + '_ {
        self.parts.iter().map(|p| &*p.file)
    }
}

// ============================================================================
// TYPE INDEX
// ============================================================================

/// Workspace-wide index of merged types (IndexMap preserves insertion order).
#[derive(Clone, Debug, Default)]
pub struct TypeIndex {
    types: IndexMap<SmolStr, MergedType>,
}

impl TypeIndex {
    /// Create a new empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Index every type declared in `files`, in iteration order.
    pub fn build<'a>(files: impl IntoIterator<Item = &'a SyntaxFile>) -> Self {
        let mut index = Self::new();
        for file in files {
            index.add_file(file);
        }
        index
    }

    /// Add all type declarations of one document, nested ones included.
    pub fn add_file(&mut self, file: &SyntaxFile) {
        let Some(source) = file.source_file() else {
            return;
        };
        for decl in source.all_types() {
            let Some(part) = TypePart::from_decl(file, &decl) else {
                continue;
            };
            let Some(name) = decl.name() else {
                continue;
            };
            let qualified_name = SmolStr::new(qualify(&part.container, &name));
            self.types
                .entry(qualified_name.clone())
                .or_insert_with(|| MergedType {
                    name,
                    qualified_name,
                    parts: Vec::new(),
                })
                .parts
                .push(part);
        }
    }

    pub fn get(&self, qualified_name: &str) -> Option<&MergedType> {
        self.types.get(qualified_name)
    }

    /// All merged types in index order
    pub fn types(&self) -> impl Iterator<Item = &MergedType> + '_ {
        self.types.values()
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Resolve a reference written in `part` to a fully-qualified name.
    ///
    /// Candidates are tried in order: the name as written, the name inside
    /// each enclosing scope (innermost first), alias expansion, then each
    /// imported namespace. The first candidate known to the workspace or the
    /// catalog wins.
    pub fn resolve(&self, reference: &str, part: &TypePart, catalog: &ExternalCatalog) -> Option<SmolStr> {
        if reference.is_empty() {
            return None;
        }
        let known = |candidate: &str| self.types.contains_key(candidate) || catalog.contains(candidate);

        let mut candidates: Vec<String> = vec![reference.to_string()];
        candidates.extend(
            part.scopes()
                .filter(|scope| !scope.is_empty())
                .map(|scope| qualify(scope, reference)),
        );
        let (head, rest) = match reference.split_once('.') {
            Some((head, rest)) => (head, Some(rest)),
            None => (reference, None),
        };
        if let Some(target) = part.imports.aliases.get(head) {
            candidates.push(match rest {
                Some(rest) => qualify(target, rest),
                None => target.to_string(),
            });
        }
        candidates.extend(
            part.imports
                .namespaces
                .iter()
                .map(|namespace| qualify(namespace, reference)),
        );

        let resolved = candidates.into_iter().find(|c| known(c)).map(SmolStr::from);
        tracing::trace!(
            "[TYPES] '{}' in scope '{}' -> {:?}",
            reference,
            part.container,
            resolved
        );
        resolved
    }

    fn is_interface(&self, qualified_name: &str, catalog: &ExternalCatalog) -> bool {
        match self.types.get(qualified_name) {
            Some(ty) => ty.is_interface(),
            None => catalog.get(qualified_name).is_some_and(|t| t.is_interface),
        }
    }

    /// The base class of `ty`: the first base-list entry across its parts
    /// that resolves to something other than an interface.
    pub fn base_type(&self, ty: &MergedType, catalog: &ExternalCatalog) -> Option<SmolStr> {
        ty.parts.iter().find_map(|part| {
            part.bases.iter().find_map(|reference| {
                self.resolve(reference, part, catalog)
                    .filter(|name| !self.is_interface(name, catalog))
            })
        })
    }

    /// Fully-qualified ancestors of `ty`, most-derived first.
    ///
    /// The walk stops at a type without a base, at an unresolved reference,
    /// or when a name repeats.
    pub fn base_chain(&self, ty: &MergedType, catalog: &ExternalCatalog) -> Vec<SmolStr> {
        let mut chain = Vec::new();
        let mut seen = FxHashSet::default();
        seen.insert(ty.qualified_name.clone());

        let mut next = self.base_type(ty, catalog);
        while let Some(name) = next {
            if !seen.insert(name.clone()) {
                tracing::debug!("[TYPES] inheritance cycle through '{}'", name);
                break;
            }
            next = match self.types.get(&name) {
                Some(workspace_type) => self.base_type(workspace_type, catalog),
                None => catalog.get(&name).and_then(|t| t.base.clone()),
            };
            chain.push(name);
        }
        chain
    }
}
