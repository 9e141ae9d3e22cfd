//! Helpers for building workspaces and inspecting split output.

use formsplit::hir::{AnalyzerConfig, Diagnostic, TypeIndex, analyze};
use formsplit::ide::Workspace;
use formsplit::parser::SyntaxNode;
use formsplit::syntax::SyntaxFile;

/// Parse `(name, source)` pairs into documents
pub fn files(sources: &[(&str, &str)]) -> Vec<SyntaxFile> {
    sources
        .iter()
        .map(|(name, text)| SyntaxFile::new(*name, text))
        .collect()
}

/// Run the analyzer with the default configuration
pub fn diagnostics_for(sources: &[(&str, &str)]) -> Vec<Diagnostic> {
    let files = files(sources);
    analyze(&TypeIndex::build(&files), &AnalyzerConfig::default())
}

pub fn workspace_with(sources: &[(&str, &str)]) -> Workspace {
    let mut workspace = Workspace::new();
    for (name, text) in sources {
        workspace.set_file_content(name, text);
    }
    workspace
}

/// Text of every non-trivia token under `node`, in document order
pub fn significant_tokens(node: &SyntaxNode) -> Vec<String> {
    node.descendants_with_tokens()
        .filter_map(|e| e.into_token())
        .filter(|t| !t.kind().is_trivia())
        .map(|t| t.text().to_string())
        .collect()
}

/// Names of the direct members of the first type in `file`, in order
pub fn member_names(file: &SyntaxFile) -> Vec<String> {
    file.source_file()
        .and_then(|source| source.all_types().next())
        .map(|ty| {
            ty.members()
                .iter()
                .map(|m| m.name().map(|n| n.to_string()).unwrap_or_default())
                .collect()
        })
        .unwrap_or_default()
}
