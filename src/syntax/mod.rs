// Named documents, tree synthesis and formatting
pub mod factory;
pub mod file;
pub mod formatter;

pub use file::{SyntaxFile, split_extension};
pub use formatter::{FormatOptions, format_async, format_node};

// Re-export LineCol and Span from base for convenience
pub use crate::base::{LineCol, Span};
