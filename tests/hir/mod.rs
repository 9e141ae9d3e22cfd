//! HIR layer tests
//!
//! Tests for the type model and the missing designer file analyzer:
//! - Merging partial declarations across documents
//! - Base type resolution through usings, aliases and namespaces
//! - Analyzer verdicts and diagnostic locations

pub mod tests_analyzer;
pub mod tests_type_index;
