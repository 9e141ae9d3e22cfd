//! Analyzer tests over whole documents.

use crate::helpers::source_fixtures::*;
use crate::helpers::workspace_helpers::*;
use formsplit::hir::{AnalyzerConfig, ExternalCatalog, Severity, TypeIndex, analyze, codes};
use rstest::rstest;

// =============================================================================
// FLAGGED
// =============================================================================

#[test]
fn test_form_without_designer_file_is_flagged() {
    let diagnostics = diagnostics_for(&[("Test0.cs", FORM_WITHOUT_REGIONS)]);
    assert_eq!(diagnostics.len(), 1);

    let diagnostic = &diagnostics[0];
    assert_eq!(diagnostic.severity, Severity::Warning);
    assert_eq!(diagnostic.code(), Some(codes::MISSING_DESIGNER_FILE));
    assert_eq!(&*diagnostic.file, "Test0.cs");
    assert_eq!((diagnostic.start_line, diagnostic.start_col), (3, 6));
    assert_eq!((diagnostic.end_line, diagnostic.end_col), (3, 14));
    assert!(diagnostic.message.contains("'SomeForm'"));
}

#[test]
fn test_generated_single_file_form_is_flagged_at_its_name() {
    let diagnostics = diagnostics_for(&[("MainForm.cs", FORM_WITH_REGIONS)]);
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(
        (diagnostics[0].start_line, diagnostics[0].start_col),
        (8, 17)
    );
    assert_eq!(
        diagnostics[0].to_string(),
        "MainForm.cs:9:18: warning[WFD0001]: Container control 'MainForm' does not have a designer file"
    );
}

#[test]
fn test_parts_without_companion_report_first_document() {
    let diagnostics = diagnostics_for(&[
        ("Toolbar.cs", CONTROL_PART),
        ("ToolbarLayout.cs", CONTROL_DESIGNER_PART),
    ]);
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(&*diagnostics[0].file, "Toolbar.cs");
    assert_eq!(diagnostics[0].start_line, 4);
}

#[test]
fn test_each_flagged_document_gets_one_diagnostic() {
    let diagnostics = diagnostics_for(&[
        ("MainForm.cs", FORM_WITH_REGIONS),
        ("SettingsForm.cs", FORM_WITH_DESIGNER_REGION_ONLY),
        ("Model.cs", NON_CONTROLS),
    ]);
    let files: Vec<_> = diagnostics.iter().map(|d| &*d.file).collect();
    assert_eq!(files, vec!["MainForm.cs", "SettingsForm.cs"]);
}

// =============================================================================
// NOT FLAGGED
// =============================================================================

#[rstest]
#[case::companion_present(&[("Toolbar.cs", CONTROL_PART), ("Toolbar.Designer.cs", CONTROL_DESIGNER_PART)])]
#[case::companion_first(&[("Toolbar.Designer.cs", CONTROL_DESIGNER_PART), ("Toolbar.cs", CONTROL_PART)])]
#[case::companion_lowercase(&[("Toolbar.cs", CONTROL_PART), ("toolbar.designer.cs", CONTROL_DESIGNER_PART)])]
#[case::no_initialize_method(&[("Toolbar.cs", CONTROL_PART)])]
#[case::non_controls(&[("Model.cs", NON_CONTROLS)])]
#[case::empty_document(&[("Empty.cs", "")])]
fn test_not_flagged(#[case] sources: &[(&str, &str)]) {
    assert!(diagnostics_for(sources).is_empty());
}

// =============================================================================
// CONFIGURATION
// =============================================================================

#[test]
fn test_marker_type_is_configurable() {
    let files = files(&[("Model.cs", NON_CONTROLS)]);
    let config = AnalyzerConfig::default().with_marker_type("System.Windows.Forms.ButtonBase");
    let diagnostics = analyze(&TypeIndex::build(&files), &config);
    assert_eq!(diagnostics.len(), 1);
    assert!(diagnostics[0].message.contains("'FancyButton'"));
}

#[test]
fn test_reserved_method_is_configurable() {
    let source = "using System.Windows.Forms;\nclass Dialog : Form\n{\n    void Build() { }\n}\n";
    let files = files(&[("Dialog.cs", source)]);
    let index = TypeIndex::build(&files);

    assert!(analyze(&index, &AnalyzerConfig::default()).is_empty());
    let config = AnalyzerConfig::default().with_reserved_method("Build");
    assert_eq!(analyze(&index, &config).len(), 1);
}

#[test]
fn test_unknown_framework_type_stops_the_chain() {
    let files = files(&[("MainForm.cs", FORM_WITHOUT_REGIONS)]);
    let config = AnalyzerConfig::default().with_catalog(ExternalCatalog::new());
    assert!(analyze(&TypeIndex::build(&files), &config).is_empty());
}
