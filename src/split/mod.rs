//! Region-splitting transform.
//!
//! Splits one type declaration into two partial declarations: the original
//! document keeps everything except the members inside recognized
//! `#region` blocks, and a new companion document receives those members.
//!
//! ## Phases
//!
//! ```text
//! TypeDecl (immutable)
//!     │
//!     ▼
//! SplitPlan::new        ← markers paired, members claimed per region
//!     │
//!     ▼
//! apply                 ← new green trees for both documents
//!     │
//!     ▼
//! format_node (×2)      ← layout normalized
//!     │
//!     ▼
//! TransformResult       ← [primary, secondary]
//! ```
//!
//! Cancellation is observed before planning and before each reformat. A
//! cancelled or failed split returns an error and produces no documents.

mod apply;
mod error;
mod plan;
mod trivia;

use smol_str::SmolStr;
use tokio_util::sync::CancellationToken;

use crate::base::LineCol;
use crate::parser::{AstNode, GreenNode, SyntaxNode, TypeDecl};
use crate::syntax::{FormatOptions, SyntaxFile, format_node, split_extension};

pub use error::SplitError;
pub use plan::{RegionMatch, SplitPlan};
pub use trivia::{
    RegionName, TriviaAction, TriviaKind, apply_move_policy, classify, filter_trivia, matches_pattern,
};

/// Settings for the split
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitOptions {
    /// Regions to extract, in the order their members join the new declaration
    pub regions: Vec<RegionName>,
    /// Inserted between the primary file's stem and its extension
    pub designer_suffix: SmolStr,
    pub format: FormatOptions,
}

impl Default for SplitOptions {
    fn default() -> Self {
        Self {
            regions: RegionName::PRIORITY.to_vec(),
            designer_suffix: SmolStr::new_static("Designer"),
            format: FormatOptions::default(),
        }
    }
}

impl SplitOptions {
    pub fn with_regions(mut self, regions: impl IntoIterator<Item = RegionName>) -> Self {
        self.regions = regions.into_iter().collect();
        self
    }

    pub fn with_designer_suffix(mut self, suffix: impl Into<SmolStr>) -> Self {
        self.designer_suffix = suffix.into();
        self
    }

    pub fn with_format(mut self, format: FormatOptions) -> Self {
        self.format = format;
        self
    }
}

/// The two documents a split produces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransformResult {
    /// The original document with the type made partial and regions removed
    pub primary: SyntaxFile,
    /// The new companion document
    pub secondary: SyntaxFile,
    /// Regions that were found, in processing order
    pub regions: Vec<RegionName>,
}

impl TransformResult {
    /// `[primary, secondary]`
    pub fn into_documents(self) -> [SyntaxFile; 2] {
        [self.primary, self.secondary]
    }
}

/// Companion file name: `Foo.cs` → `Foo.Designer.cs`, `Foo` → `Foo.Designer`.
/// Directory components are kept.
pub fn designer_file_name(file_name: &str, suffix: &str) -> String {
    match split_extension(file_name) {
        (stem, Some(extension)) => format!("{}.{}.{}", stem, suffix, extension),
        (stem, None) => format!("{}.{}", stem, suffix),
    }
}

/// Split the type declared at `position` (typically a diagnostic's start)
/// in `file`. The innermost type declaration enclosing the position is used.
pub fn split_at(
    file: &SyntaxFile,
    position: LineCol,
    options: &SplitOptions,
    cancel: &CancellationToken,
) -> Result<TransformResult, SplitError> {
    let decl = file
        .type_at(position)
        .ok_or_else(|| SplitError::type_not_found(file.name(), position.line, position.col))?;
    split_type(file, &decl, options, cancel)
}

/// Split `decl`, which must be a node of `file`.
pub fn split_type(
    file: &SyntaxFile,
    decl: &TypeDecl,
    options: &SplitOptions,
    cancel: &CancellationToken,
) -> Result<TransformResult, SplitError> {
    if !file.contains_node(decl.syntax()) {
        let position = file.line_index().line_col(decl.syntax().text_range().start());
        return Err(SplitError::type_not_found(file.name(), position.line, position.col));
    }
    if cancel.is_cancelled() {
        return Err(SplitError::Cancelled);
    }

    let plan = SplitPlan::new(decl, &options.regions);
    let trees = apply::apply(decl, &plan);

    let format = |green: GreenNode| {
        if cancel.is_cancelled() {
            return Err(SplitError::Cancelled);
        }
        format_node(&SyntaxNode::new_root(green), &options.format, cancel).ok_or(SplitError::Cancelled)
    };
    let primary_text = format(trees.primary)?;
    let secondary_text = format(trees.secondary)?;

    let secondary_name = designer_file_name(file.name(), &options.designer_suffix);
    tracing::debug!(
        "[SPLIT] split '{}' in {} into {}",
        decl.name().unwrap_or_default(),
        file.name(),
        secondary_name
    );

    Ok(TransformResult {
        primary: SyntaxFile::new(file.name_arc(), &primary_text),
        secondary: SyntaxFile::new(secondary_name, &secondary_text),
        regions: plan.matched_regions().collect(),
    })
}
