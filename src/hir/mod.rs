//! High-level IR (HIR): semantic model of container-control types.
//!
//! Syntax trees are summarized into per-declaration [`TypePart`]s, merged by
//! fully-qualified name into [`MergedType`]s, and checked by the analyzer.
//!
//! ## Key Types
//!
//! - [`TypeIndex`]: Workspace-wide index of merged types with base resolution
//! - [`ExternalCatalog`]: Framework types the workspace derives from
//! - [`AnalyzerConfig`]: Marker type, reserved method and companion suffix
//! - [`Diagnostic`]: A finding with a 0-indexed location
//!
//! ## Pipeline
//!
//! ```text
//! SyntaxFile(s)
//!     │
//!     ▼
//! TypeIndex::build          ← parts merged per qualified name
//!     │
//!     ▼
//! base_chain(type)          ← usings, aliases, enclosing scopes, catalog
//!     │
//!     ▼
//! classify(type)            ← WFD0001 or nothing
//! ```

mod analyzer;
mod config;
mod diagnostics;
mod types;

pub use analyzer::{analyze, classify};
pub use config::{AnalyzerConfig, ExternalCatalog, ExternalType};
pub use diagnostics::{Diagnostic, DiagnosticCollector, Severity, codes};
pub use types::{Imports, MemberSummary, MergedType, TypeIndex, TypePart};
