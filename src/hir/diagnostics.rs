//! Diagnostics: analyzer findings with locations.
//!
//! A [`Diagnostic`] names the document it was reported in and a 0-indexed
//! line/column range. Rendering through `Display` switches to the 1-indexed
//! `file:line:col` form editors and compilers print.

use std::fmt;
use std::sync::Arc;

use crate::base::{LineCol, Span};

// ============================================================================
// DIAGNOSTIC TYPES
// ============================================================================

/// Severity level of a diagnostic.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Severity {
    Error,
    Warning,
    Info,
    Hint,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Error => "error",
            Severity::Warning => "warning",
            Severity::Info => "info",
            Severity::Hint => "hint",
        }
    }
}

/// A diagnostic message with location.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    /// Name of the document containing this diagnostic.
    pub file: Arc<str>,
    /// Start line (0-indexed).
    pub start_line: u32,
    /// Start column (0-indexed).
    pub start_col: u32,
    /// End line (0-indexed).
    pub end_line: u32,
    /// End column (0-indexed).
    pub end_col: u32,
    /// Severity level.
    pub severity: Severity,
    /// Stable diagnostic code (e.g., "WFD0001").
    pub code: Option<Arc<str>>,
    /// The diagnostic message.
    pub message: Arc<str>,
}

impl Diagnostic {
    /// Create a new error diagnostic.
    pub fn error(file: impl Into<Arc<str>>, line: u32, col: u32, message: impl Into<Arc<str>>) -> Self {
        Self::new(Severity::Error, file.into(), line, col, message.into())
    }

    /// Create a new warning diagnostic.
    pub fn warning(file: impl Into<Arc<str>>, line: u32, col: u32, message: impl Into<Arc<str>>) -> Self {
        Self::new(Severity::Warning, file.into(), line, col, message.into())
    }

    fn new(severity: Severity, file: Arc<str>, line: u32, col: u32, message: Arc<str>) -> Self {
        Self {
            file,
            start_line: line,
            start_col: col,
            end_line: line,
            end_col: col,
            severity,
            code: None,
            message,
        }
    }

    /// Set the span (range) for this diagnostic.
    pub fn with_span(mut self, end_line: u32, end_col: u32) -> Self {
        self.end_line = end_line;
        self.end_col = end_col;
        self
    }

    /// Set the diagnostic code.
    pub fn with_code(mut self, code: impl Into<Arc<str>>) -> Self {
        self.code = Some(code.into());
        self
    }

    pub fn code(&self) -> Option<&str> {
        self.code.as_deref()
    }

    /// The diagnostic's range as a [`Span`].
    pub fn span(&self) -> Span {
        Span::new(
            LineCol::new(self.start_line, self.start_col),
            LineCol::new(self.end_line, self.end_col),
        )
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}:{}: {}",
            self.file,
            self.start_line + 1,
            self.start_col + 1,
            self.severity.as_str()
        )?;
        if let Some(code) = &self.code {
            write!(f, "[{}]", code)?;
        }
        write!(f, ": {}", self.message)
    }
}

// ============================================================================
// DIAGNOSTIC CODES
// ============================================================================

/// Stable diagnostic codes.
///
/// ## Code Ranges
///
/// - **WFD0001-WFD0099**: Designer file layout of container controls
pub mod codes {
    /// Container control with designer code but no companion designer file.
    pub const MISSING_DESIGNER_FILE: &str = "WFD0001";
}

// ============================================================================
// DIAGNOSTIC COLLECTOR
// ============================================================================

/// Collects diagnostics during analysis.
#[derive(Clone, Debug, Default)]
pub struct DiagnosticCollector {
    diagnostics: Vec<Diagnostic>,
}

impl DiagnosticCollector {
    /// Create a new empty collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a diagnostic.
    pub fn add(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    /// Add a missing designer file warning for the type `name` whose
    /// identifier spans `span` in `file`.
    pub fn missing_designer_file(&mut self, file: impl Into<Arc<str>>, span: Span, name: &str) {
        self.add(
            Diagnostic::warning(
                file,
                span.start.line,
                span.start.col,
                format!("Container control '{}' does not have a designer file", name),
            )
            .with_span(span.end.line, span.end.col)
            .with_code(codes::MISSING_DESIGNER_FILE),
        );
    }

    /// Get all diagnostics.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Take all diagnostics, leaving the collector empty.
    pub fn take(&mut self) -> Vec<Diagnostic> {
        std::mem::take(&mut self.diagnostics)
    }
}
