//! # formsplit-base
//!
//! Analyzer and fix for WinForms container controls declared without a
//! companion `.Designer.cs` file.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! ide       → Workspace host, code actions, fix-all
//!   ↓
//! split     → Region-splitting transform (plan + apply)
//!   ↓
//! hir       → Merged partial types, base resolution, analyzer, diagnostics
//!   ↓
//! syntax    → SyntaxFile, green tree factory, formatter
//!   ↓
//! parser    → Logos lexer, lossless rowan parser, typed AST
//!   ↓
//! base      → Primitives (TextRange, LineIndex, Span)
//! ```

// ============================================================================
// MODULES (dependency order: base → parser → syntax → hir → split → ide)
// ============================================================================

/// Foundation types: TextRange, line/column conversion
pub mod base;

/// Parser: Logos lexer, recursive-descent parser, typed AST wrappers
pub mod parser;

/// Syntax: named documents, tree construction, formatting
pub mod syntax;

/// High-level IR: type model and the missing designer file analyzer
pub mod hir;

/// Region-splitting transform
pub mod split;

/// IDE features: workspace, code actions, fix application
pub mod ide;

// Re-export foundation types
pub use base::{LineCol, LineIndex, Span, TextRange, TextSize};
