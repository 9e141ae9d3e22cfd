//! Split tests
//!
//! End-to-end region splitting: scenarios, content preservation and naming.

pub mod tests_roundtrip;
pub mod tests_scenarios;
