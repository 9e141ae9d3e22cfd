//! IDE layer tests
//!
//! Tests for the workspace host: code actions, single fixes and fix-all.

pub mod tests_workspace;
