//! IDE features: the host side of the analyzer and its fix.
//!
//! The [`Workspace`] owns the documents of a project. It reports analyzer
//! diagnostics, offers a [`CodeAction`] for each missing designer file, and
//! applies the region split as one atomic swap of two documents.
//!
//! ## Usage
//!
//! ```ignore
//! use formsplit::ide::Workspace;
//!
//! let mut workspace = Workspace::new();
//! workspace.set_file_content("MainForm.cs", source);
//!
//! let report = workspace.fix_all(&CancellationToken::new());
//! ```

mod code_actions;
mod workspace;

pub use code_actions::{CREATE_DESIGNER_FILE, CodeAction, code_actions};
pub use workspace::{FixAllReport, Workspace};
