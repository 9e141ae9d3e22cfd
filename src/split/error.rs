//! Error types for split operations.

use std::sync::Arc;

use thiserror::Error;

/// Errors that can occur while splitting a type declaration.
///
/// Every error leaves the input document untouched; no partial result is
/// ever produced.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SplitError {
    /// The requested location or node is not a type declaration of the document.
    #[error("No type declaration at {file}:{}:{}", .line + 1, .col + 1)]
    TypeNotFound {
        file: Arc<str>,
        /// 0-indexed line
        line: u32,
        /// 0-indexed column
        col: u32,
    },

    /// The companion document name is already taken by another document.
    #[error("Designer file {file} already exists")]
    DesignerFileExists { file: Arc<str> },

    /// The cancellation token was signalled before the split completed.
    #[error("Split cancelled")]
    Cancelled,
}

impl SplitError {
    /// Create a type-not-found error.
    pub fn type_not_found(file: impl Into<Arc<str>>, line: u32, col: u32) -> Self {
        Self::TypeNotFound {
            file: file.into(),
            line,
            col,
        }
    }
    /// Create a designer-file-exists error.
    pub fn designer_file_exists(file: impl Into<Arc<str>>) -> Self {
        Self::DesignerFileExists { file: file.into() }
    }
}
