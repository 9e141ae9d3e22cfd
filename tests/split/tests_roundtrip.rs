//! Content preservation and naming properties of the split.

use crate::helpers::source_fixtures::*;
use crate::helpers::workspace_helpers::significant_tokens;
use formsplit::parser::{AstNode, TypeDecl};
use formsplit::split::{SplitOptions, split_type};
use formsplit::syntax::SyntaxFile;
use rstest::rstest;
use tokio_util::sync::CancellationToken;

/// Tokens the companion declaration may add around the moved members:
/// the namespace wrapper and the type header.
fn allowed_skeleton(decl: &TypeDecl) -> Vec<String> {
    let mut allowed: Vec<String> = ["partial", "namespace", "{", "}", ";", "."]
        .map(String::from)
        .to_vec();
    let body_start = decl.body().map(|b| b.syntax().text_range().start());
    allowed.extend(
        decl.syntax()
            .descendants_with_tokens()
            .filter_map(|e| e.into_token())
            .filter(|t| !t.kind().is_trivia())
            .filter(|t| body_start.is_none_or(|start| t.text_range().start() < start))
            .map(|t| t.text().to_string()),
    );
    for namespace in decl.enclosing_namespaces() {
        if let Some(name) = namespace.name() {
            allowed.extend(name.split('.').map(String::from));
        }
    }
    allowed
}

/// Split every type declared in `source`, one at a time, checking that the
/// significant tokens of the two outputs are exactly the original tokens,
/// apart from the added `partial` and the companion's own declaration.
fn assert_tokens_preserved(name: &str, source: &str) {
    let file = SyntaxFile::new(name, source);
    let Some(root) = file.source_file() else {
        return;
    };
    let mut expected = significant_tokens(&file.root());
    expected.sort();

    for decl in root.all_types() {
        let result = split_type(
            &file,
            &decl,
            &SplitOptions::default(),
            &CancellationToken::new(),
        )
        .unwrap();

        let mut actual = significant_tokens(&result.primary.root());
        if !decl.is_partial() {
            let added = actual.iter().position(|t| t == "partial");
            actual.remove(added.expect("primary declaration was not made partial"));
        }

        let companion = result
            .secondary
            .source_file()
            .and_then(|s| s.all_types().next())
            .unwrap();
        let members: Vec<_> = companion
            .members()
            .iter()
            .map(|m| m.syntax().text_range())
            .collect();
        let allowed = allowed_skeleton(&decl);
        for token in result
            .secondary
            .root()
            .descendants_with_tokens()
            .filter_map(|e| e.into_token())
            .filter(|t| !t.kind().is_trivia())
        {
            if members.iter().any(|r| r.contains_range(token.text_range())) {
                actual.push(token.text().to_string());
            } else {
                assert!(
                    allowed.iter().any(|a| a == token.text()),
                    "unexpected token {:?} in {}",
                    token.text(),
                    result.secondary.text()
                );
            }
        }

        actual.sort();
        assert_eq!(
            actual,
            expected,
            "tokens changed splitting {:?} in {}",
            decl.name(),
            name
        );
    }
}

#[rstest]
#[case::without_regions("Test0.cs", FORM_WITHOUT_REGIONS)]
#[case::with_regions("MainForm.cs", FORM_WITH_REGIONS)]
#[case::designer_region_only("SettingsForm.cs", FORM_WITH_DESIGNER_REGION_ONLY)]
#[case::control_part("Toolbar.cs", CONTROL_PART)]
#[case::non_controls("Model.cs", NON_CONTROLS)]
#[case::nested_regions(
    "Nested.cs",
    "class A\n{\n    #region Designer generated code\n    void InitializeComponent() { }\n    #region Component fields\n    int a;\n    #endregion\n    int b;\n    #endregion\n}\n"
)]
#[case::marker_without_end(
    "Open.cs",
    "class A\n{\n    #region Component fields\n    int a;\n    int b;\n}\n"
)]
#[case::attributes_generics_and_usings(
    "Grid.cs",
    "using System;\nusing Forms = System.Windows.Forms;\n\nnamespace App.Controls\n{\n    [Serializable]\n    public sealed class Grid<TRow, TCell> : Forms.UserControl, IDisposable where TRow : class\n    {\n        #region Component fields\n        [NonSerialized] private Forms.Panel host;\n        #endregion\n\n        #region Windows Form Designer generated code\n        [System.Diagnostics.DebuggerStepThrough]\n        private void InitializeComponent() { host = new Forms.Panel(); }\n        #endregion\n\n        public Grid() { InitializeComponent(); }\n    }\n}\n"
)]
#[case::file_scoped_nested_type(
    "Shell.cs",
    "namespace App.Shell;\n\npartial class Host : Form\n{\n    class Pane : UserControl\n    {\n        #region Component fields\n        private Label caption;\n        #endregion\n    }\n\n    #region Designer generated code\n    void InitializeComponent() { }\n    #endregion\n}\n"
)]
fn test_split_creates_and_loses_nothing(#[case] name: &str, #[case] source: &str) {
    assert_tokens_preserved(name, source);
}

#[rstest]
#[case("Foo.cs", "Foo.Designer.cs")]
#[case("src/Forms/Foo.cs", "src/Forms/Foo.Designer.cs")]
#[case("Foo.vb", "Foo.Designer.vb")]
fn test_secondary_name_depends_only_on_file_name(#[case] name: &str, #[case] expected: &str) {
    for source in [FORM_WITHOUT_REGIONS, FORM_WITH_REGIONS, "struct S { }"] {
        let file = SyntaxFile::new(name, source);
        let decl = file.source_file().unwrap().all_types().next().unwrap();
        let result = split_type(
            &file,
            &decl,
            &SplitOptions::default(),
            &CancellationToken::new(),
        )
        .unwrap();
        assert_eq!(result.secondary.name(), expected);
        assert_eq!(result.primary.name(), name);
    }
}
