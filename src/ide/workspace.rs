//! Workspace: owns the documents and applies fixes to them.
//!
//! The `Workspace` holds every document of a project in insertion order and
//! keeps the type index in sync with them. Fixes never edit a document in
//! place: a split produces two new documents, and both are swapped in
//! together.
//!
//! ## Usage
//!
//! ```ignore
//! let mut workspace = Workspace::new();
//! workspace.set_file_content("MainForm.cs", source);
//!
//! for action in workspace.code_actions("MainForm.cs") {
//!     workspace.apply_fix(&action.diagnostic, &CancellationToken::new())?;
//! }
//! ```

use std::sync::Arc;

use indexmap::IndexMap;
use rayon::prelude::*;
use tokio_util::sync::CancellationToken;

use crate::base::LineCol;
use crate::hir::{AnalyzerConfig, Diagnostic, TypeIndex, analyze};
use crate::parser::SyntaxError;
use crate::split::{SplitError, SplitOptions, TransformResult, split_at};
use crate::syntax::SyntaxFile;

use super::code_actions::{CodeAction, code_actions};

/// Outcome of [`Workspace::fix_all`]
#[derive(Debug, Default)]
pub struct FixAllReport {
    /// Names of the companion documents created
    pub created: Vec<Arc<str>>,
    /// Splits that failed or were cancelled; their documents are unchanged
    pub failed: Vec<SplitError>,
}

/// Owns all documents and the derived type index.
pub struct Workspace {
    files: IndexMap<Arc<str>, SyntaxFile>,
    type_index: TypeIndex,
    /// Whether the index needs rebuilding
    index_dirty: bool,
    config: AnalyzerConfig,
    split_options: SplitOptions,
}

impl Default for Workspace {
    fn default() -> Self {
        Self::new()
    }
}

impl Workspace {
    pub fn new() -> Self {
        Self {
            files: IndexMap::new(),
            type_index: TypeIndex::new(),
            index_dirty: false,
            config: AnalyzerConfig::default(),
            split_options: SplitOptions::default(),
        }
    }

    pub fn with_config(mut self, config: AnalyzerConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_split_options(mut self, options: SplitOptions) -> Self {
        self.split_options = options;
        self
    }

    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    /// Set the content of a document, parsing it and storing the result.
    ///
    /// Returns parse errors if any. A replaced document keeps its position.
    pub fn set_file_content(&mut self, name: &str, content: &str) -> Vec<SyntaxError> {
        let file = SyntaxFile::new(name, content);
        let errors = file.parse().errors.clone();
        self.set_file(file);
        errors
    }

    /// Add or replace a pre-parsed document.
    pub fn set_file(&mut self, file: SyntaxFile) {
        self.files.insert(file.name_arc(), file);
        self.index_dirty = true;
    }

    pub fn remove_file(&mut self, name: &str) -> Option<SyntaxFile> {
        let removed = self.files.shift_remove(name);
        if removed.is_some() {
            self.index_dirty = true;
        }
        removed
    }

    pub fn document(&self, name: &str) -> Option<&SyntaxFile> {
        self.files.get(name)
    }

    pub fn has_file(&self, name: &str) -> bool {
        self.files.contains_key(name)
    }

    /// Documents in insertion order
    pub fn documents(&self) -> impl Iterator<Item = &SyntaxFile> + '_ {
        self.files.values()
    }

    pub fn file_count(&self) -> usize {
        self.files.len()
    }

    /// The type index over the current documents, rebuilt if stale.
    pub fn type_index(&mut self) -> &TypeIndex {
        if self.index_dirty {
            self.rebuild_index();
        }
        &self.type_index
    }

    fn rebuild_index(&mut self) {
        self.type_index = TypeIndex::build(self.files.values());
        self.index_dirty = false;
        tracing::trace!(
            "[WORKSPACE] indexed {} type(s) from {} document(s)",
            self.type_index.len(),
            self.files.len()
        );
    }

    /// Analyzer findings over the current snapshot.
    pub fn diagnostics(&mut self) -> Vec<Diagnostic> {
        if self.index_dirty {
            self.rebuild_index();
        }
        analyze(&self.type_index, &self.config)
    }

    /// Actions offered for the findings in one document.
    pub fn code_actions(&mut self, name: &str) -> Vec<CodeAction> {
        let diagnostics = self.diagnostics();
        code_actions(diagnostics.iter().filter(|d| &*d.file == name))
    }

    /// Split the type a diagnostic points at and swap in both resulting
    /// documents. On error the workspace is unchanged; in particular an
    /// existing document with the companion's name is never overwritten.
    pub fn apply_fix(
        &mut self,
        diagnostic: &Diagnostic,
        cancel: &CancellationToken,
    ) -> Result<TransformResult, SplitError> {
        let result = fix_one(&self.files, diagnostic, &self.split_options, cancel)?;
        self.commit(&result)?;
        Ok(result)
    }

    /// Fix every document that has findings, using the first finding of
    /// each. Splits run in parallel; successful ones are applied afterwards,
    /// in document order.
    pub fn fix_all(&mut self, cancel: &CancellationToken) -> FixAllReport {
        let mut first_per_file: IndexMap<Arc<str>, Diagnostic> = IndexMap::new();
        for diagnostic in self.diagnostics() {
            first_per_file
                .entry(diagnostic.file.clone())
                .or_insert(diagnostic);
        }
        let targets: Vec<Diagnostic> = first_per_file.into_values().collect();

        let files = &self.files;
        let options = &self.split_options;
        let results: Vec<_> = targets
            .par_iter()
            .map(|diagnostic| fix_one(files, diagnostic, options, cancel))
            .collect();

        let mut report = FixAllReport::default();
        for result in results {
            match result.and_then(|result| self.commit(&result).map(|()| result)) {
                Ok(result) => report.created.push(result.secondary.name_arc()),
                Err(error) => {
                    tracing::warn!("[WORKSPACE] fix skipped: {}", error);
                    report.failed.push(error);
                }
            }
        }
        report
    }

    fn commit(&mut self, result: &TransformResult) -> Result<(), SplitError> {
        if self.files.contains_key(result.secondary.name()) {
            return Err(SplitError::designer_file_exists(result.secondary.name_arc()));
        }
        tracing::debug!(
            "[WORKSPACE] replaced {}, added {}",
            result.primary.name(),
            result.secondary.name()
        );
        self.set_file(result.primary.clone());
        self.set_file(result.secondary.clone());
        Ok(())
    }
}

fn fix_one(
    files: &IndexMap<Arc<str>, SyntaxFile>,
    diagnostic: &Diagnostic,
    options: &SplitOptions,
    cancel: &CancellationToken,
) -> Result<TransformResult, SplitError> {
    let position = LineCol::new(diagnostic.start_line, diagnostic.start_col);
    let file = files.get(&*diagnostic.file).ok_or_else(|| {
        SplitError::type_not_found(diagnostic.file.clone(), position.line, position.col)
    })?;
    split_at(file, position, options, cancel)
}
