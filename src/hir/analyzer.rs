//! Missing designer file analysis.
//!
//! A type is flagged when it derives from the configured container control
//! type, declares the reserved initialization method, and none of its parts
//! lives in a companion designer file.

use super::config::AnalyzerConfig;
use super::diagnostics::{Diagnostic, DiagnosticCollector};
use super::types::{MergedType, TypeIndex};

/// Check one merged type. Every non-applicable case yields `None`.
pub fn classify(ty: &MergedType, index: &TypeIndex, config: &AnalyzerConfig) -> Option<Diagnostic> {
    let chain = index.base_chain(ty, &config.catalog);
    if !chain.iter().any(|base| *base == config.marker_type) {
        tracing::trace!(
            "[ANALYZER] '{}' is not a {}",
            ty.qualified_name,
            config.marker_type
        );
        return None;
    }

    if !ty.has_method(&config.reserved_method) {
        tracing::trace!(
            "[ANALYZER] '{}' has no {} method",
            ty.qualified_name,
            config.reserved_method
        );
        return None;
    }

    if let Some(companion) = ty.files().find(|file| config.is_companion_file(file)) {
        tracing::trace!(
            "[ANALYZER] '{}' already has companion file '{}'",
            ty.qualified_name,
            companion
        );
        return None;
    }

    let part = ty.primary_part()?;
    tracing::debug!(
        "[ANALYZER] '{}' lacks a designer file ({}:{}:{})",
        ty.qualified_name,
        part.file,
        part.span.start.line + 1,
        part.span.start.col + 1
    );
    let mut collector = DiagnosticCollector::new();
    collector.missing_designer_file(part.file.clone(), part.span, &ty.name);
    collector.take().pop()
}

/// Check every type in the index, in index order.
pub fn analyze(index: &TypeIndex, config: &AnalyzerConfig) -> Vec<Diagnostic> {
    let mut collector = DiagnosticCollector::new();
    for ty in index.types() {
        if let Some(diagnostic) = classify(ty, index, config) {
            collector.add(diagnostic);
        }
    }
    collector.take()
}
