//! Foundation types for formsplit.
//!
//! - [`TextRange`], [`TextSize`] - Source positions (byte offsets)
//! - [`LineCol`], [`LineIndex`] - Line/column conversion
//! - [`Span`] - Line/column ranges used by diagnostics
//!
//! This module has NO dependencies on other formsplit modules.

mod position;

pub use position::{LineCol, LineIndex, Span};

pub use text_size::{TextRange, TextSize};

// Re-export text-size types for convenience
pub use text_size;
