//! Type index tests: merging parts and resolving base types.

use crate::helpers::source_fixtures::*;
use crate::helpers::workspace_helpers::files;
use formsplit::hir::{ExternalCatalog, TypeIndex};
use rstest::rstest;

fn chain_of(sources: &[(&str, &str)], qualified_name: &str) -> Vec<String> {
    let files = files(sources);
    let index = TypeIndex::build(&files);
    let ty = index.get(qualified_name).expect("type should be indexed");
    index
        .base_chain(ty, &ExternalCatalog::winforms())
        .into_iter()
        .map(|name| name.to_string())
        .collect()
}

#[test]
fn test_parts_merge_across_documents() {
    let files = files(&[
        ("Toolbar.cs", CONTROL_PART),
        ("Toolbar.Designer.cs", CONTROL_DESIGNER_PART),
    ]);
    let index = TypeIndex::build(&files);
    assert_eq!(index.len(), 1);

    let toolbar = index.get("Demo.Controls.Toolbar").unwrap();
    assert_eq!(toolbar.parts.len(), 2);
    assert_eq!(
        toolbar.files().collect::<Vec<_>>(),
        vec!["Toolbar.cs", "Toolbar.Designer.cs"]
    );
    assert!(toolbar.has_method("InitializeComponent"));
    assert_eq!(toolbar.primary_part().map(|p| &*p.file), Some("Toolbar.cs"));
}

#[test]
fn test_nested_types_are_qualified_by_their_container() {
    let source = "namespace A.B\n{\n    class Outer\n    {\n        class Inner : Outer { }\n    }\n}\n";
    let files = files(&[("Nested.cs", source)]);
    let index = TypeIndex::build(&files);
    assert!(index.get("A.B.Outer").is_some());
    assert!(index.get("A.B.Outer.Inner").is_some());
}

#[rstest]
#[case::using_namespace(
    "using System.Windows.Forms;\nclass F : Form { }",
    "F"
)]
#[case::fully_qualified("class F : System.Windows.Forms.Form { }", "F")]
#[case::global_qualified("class F : global::System.Windows.Forms.Form { }", "F")]
#[case::alias("using WinForms = System.Windows.Forms;\nclass F : WinForms.Form { }", "F")]
#[case::using_inside_namespace(
    "namespace App\n{\n    using System.Windows.Forms;\n    class F : Form { }\n}",
    "App.F"
)]
#[case::interface_listed_first(
    "using System;\nusing System.Windows.Forms;\nclass F : IDisposable, Form { }",
    "F"
)]
fn test_base_resolution_reaches_form(#[case] source: &str, #[case] name: &str) {
    let chain = chain_of(&[("F.cs", source)], name);
    assert_eq!(chain.first().map(String::as_str), Some("System.Windows.Forms.Form"));
    assert!(chain.iter().any(|n| n == "System.Windows.Forms.ContainerControl"));
}

#[test]
fn test_workspace_base_in_other_document() {
    let chain = chain_of(
        &[
            ("Base.cs", "namespace App\n{\n    using System.Windows.Forms;\n    public class BaseForm : Form { }\n}"),
            ("Derived.cs", "namespace App.Screens\n{\n    class Login : BaseForm { }\n}"),
        ],
        "App.Screens.Login",
    );
    assert_eq!(chain[0], "App.BaseForm");
    assert_eq!(chain[1], "System.Windows.Forms.Form");
}

#[test]
fn test_base_declared_on_second_part() {
    let chain = chain_of(
        &[
            ("A.cs", "partial class F { }"),
            ("B.cs", "using System.Windows.Forms;\npartial class F : Form { }"),
        ],
        "F",
    );
    assert_eq!(chain.first().map(String::as_str), Some("System.Windows.Forms.Form"));
}

#[test]
fn test_cycles_terminate() {
    let chain = chain_of(&[("Cycle.cs", "class A : B { }\nclass B : A { }")], "A");
    assert_eq!(chain, vec!["B"]);
}

#[test]
fn test_unresolved_base_ends_chain() {
    let chain = chain_of(&[("F.cs", "class F : Missing.Form { }")], "F");
    assert!(chain.is_empty());
}
