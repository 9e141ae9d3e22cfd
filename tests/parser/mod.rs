//! Parser tests
//!
//! Lossless parsing and trivia attachment over realistic C# sources.

pub mod tests_lossless;
