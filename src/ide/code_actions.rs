//! Code actions offered for analyzer diagnostics.

use crate::hir::{Diagnostic, codes};

/// Title of the fix that creates the companion designer document
pub const CREATE_DESIGNER_FILE: &str = "Create .Designer.cs";

/// A fix the host can offer for one diagnostic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeAction {
    pub title: &'static str,
    /// The diagnostic this action resolves
    pub diagnostic: Diagnostic,
}

/// Actions for `diagnostics`, one per missing designer file finding.
pub fn code_actions<'a>(diagnostics: impl IntoIterator<Item = &'a Diagnostic>) -> Vec<CodeAction> {
    diagnostics
        .into_iter()
        .filter(|d| d.code() == Some(codes::MISSING_DESIGNER_FILE))
        .map(|d| CodeAction {
            title: CREATE_DESIGNER_FILE,
            diagnostic: d.clone(),
        })
        .collect()
}
