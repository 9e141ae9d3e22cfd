//! Workspace tests: offering and applying the designer file fix.

use crate::helpers::source_fixtures::*;
use crate::helpers::workspace_helpers::*;
use formsplit::hir::AnalyzerConfig;
use formsplit::ide::{CREATE_DESIGNER_FILE, Workspace};
use formsplit::split::{RegionName, SplitError, SplitOptions};
use tokio_util::sync::CancellationToken;

#[test]
fn test_no_action_when_companion_exists() {
    let mut workspace = workspace_with(&[
        ("Toolbar.cs", CONTROL_PART),
        ("Toolbar.Designer.cs", CONTROL_DESIGNER_PART),
    ]);
    assert!(workspace.diagnostics().is_empty());
    assert!(workspace.code_actions("Toolbar.cs").is_empty());
}

#[test]
fn test_action_is_offered_for_flagged_document_only() {
    let mut workspace = workspace_with(&[
        ("MainForm.cs", FORM_WITH_REGIONS),
        ("Model.cs", NON_CONTROLS),
    ]);
    let actions = workspace.code_actions("MainForm.cs");
    assert_eq!(actions.len(), 1);
    assert_eq!(actions[0].title, CREATE_DESIGNER_FILE);
    assert!(workspace.code_actions("Model.cs").is_empty());
}

#[test]
fn test_apply_fix_adds_companion_document() {
    let mut workspace = workspace_with(&[("MainForm.cs", FORM_WITH_REGIONS)]);
    let action = workspace.code_actions("MainForm.cs").remove(0);
    workspace
        .apply_fix(&action.diagnostic, &CancellationToken::new())
        .unwrap();

    let names: Vec<_> = workspace.documents().map(|d| d.name().to_string()).collect();
    assert_eq!(names, vec!["MainForm.cs", "MainForm.Designer.cs"]);

    let companion = workspace.document("MainForm.Designer.cs").unwrap();
    assert_eq!(
        member_names(companion),
        vec!["Dispose", "InitializeComponent", "components", "okButton", "titleLabel"]
    );
    assert!(workspace.diagnostics().is_empty());

    let index = workspace.type_index();
    let main_form = index.get("Demo.App.MainForm").unwrap();
    assert_eq!(main_form.parts.len(), 2);
}

#[test]
fn test_fix_all_handles_each_document_once() {
    let mut workspace = workspace_with(&[
        ("MainForm.cs", FORM_WITH_REGIONS),
        ("SettingsForm.cs", FORM_WITH_DESIGNER_REGION_ONLY),
        ("Toolbar.cs", CONTROL_PART),
        ("Toolbar.Designer.cs", CONTROL_DESIGNER_PART),
    ]);

    let report = workspace.fix_all(&CancellationToken::new());
    assert!(report.failed.is_empty());
    assert_eq!(report.created.len(), 2);
    assert_eq!(workspace.file_count(), 6);
    assert!(workspace.has_file("SettingsForm.Designer.cs"));
    assert!(workspace.diagnostics().is_empty());

    // A second run has nothing left to do
    let report = workspace.fix_all(&CancellationToken::new());
    assert!(report.created.is_empty());
    assert_eq!(workspace.file_count(), 6);
}

#[test]
fn test_custom_configuration_flows_through() {
    let mut workspace = Workspace::new()
        .with_config(AnalyzerConfig::default().with_companion_suffix("Generated"))
        .with_split_options(
            SplitOptions::default()
                .with_designer_suffix("Generated")
                .with_regions([RegionName::DesignerGeneratedCode]),
        );
    workspace.set_file_content("MainForm.cs", FORM_WITH_REGIONS);

    let report = workspace.fix_all(&CancellationToken::new());
    assert_eq!(
        report.created.iter().map(|n| &**n).collect::<Vec<_>>(),
        vec!["MainForm.Generated.cs"]
    );
    assert!(workspace.diagnostics().is_empty());

    let primary = workspace.document("MainForm.cs").unwrap().text();
    assert!(primary.contains("#region Component fields"));
    assert!(!primary.contains("InitializeComponent()\n"));
}

const UNRELATED_DESIGNER: &str = "class Unrelated { int keepMe; }\n";

#[test]
fn test_apply_fix_refuses_to_replace_existing_designer_file() {
    let mut workspace = workspace_with(&[
        ("Main.cs", FORM_WITH_REGIONS),
        ("Main.Designer.cs", UNRELATED_DESIGNER),
    ]);
    let diagnostics = workspace.diagnostics();
    assert_eq!(diagnostics.len(), 1);

    let error = workspace
        .apply_fix(&diagnostics[0], &CancellationToken::new())
        .unwrap_err();
    assert_eq!(error, SplitError::designer_file_exists("Main.Designer.cs"));
    assert_eq!(error.to_string(), "Designer file Main.Designer.cs already exists");

    assert_eq!(workspace.file_count(), 2);
    assert_eq!(workspace.document("Main.cs").unwrap().text(), FORM_WITH_REGIONS);
    assert_eq!(
        workspace.document("Main.Designer.cs").unwrap().text(),
        UNRELATED_DESIGNER
    );
    assert_eq!(workspace.diagnostics(), diagnostics);
}

#[test]
fn test_fix_all_reports_existing_designer_file() {
    let mut workspace = workspace_with(&[
        ("Main.cs", FORM_WITH_REGIONS),
        ("Main.Designer.cs", UNRELATED_DESIGNER),
        ("SettingsForm.cs", FORM_WITH_DESIGNER_REGION_ONLY),
    ]);

    let report = workspace.fix_all(&CancellationToken::new());
    assert_eq!(
        report.failed,
        vec![SplitError::designer_file_exists("Main.Designer.cs")]
    );
    assert_eq!(
        report.created.iter().map(|n| &**n).collect::<Vec<_>>(),
        vec!["SettingsForm.Designer.cs"]
    );
    assert_eq!(workspace.file_count(), 4);
    assert_eq!(workspace.document("Main.cs").unwrap().text(), FORM_WITH_REGIONS);
    assert_eq!(
        workspace.document("Main.Designer.cs").unwrap().text(),
        UNRELATED_DESIGNER
    );
}
