//! End-to-end split scenarios driven by analyzer diagnostics.

use crate::helpers::source_fixtures::*;
use crate::helpers::workspace_helpers::*;
use formsplit::LineCol;
use formsplit::split::{RegionName, SplitOptions, TransformResult, split_at};
use formsplit::syntax::SyntaxFile;
use tokio_util::sync::CancellationToken;

/// Analyze one document and split it at its only diagnostic
fn split_flagged(name: &str, source: &str) -> TransformResult {
    let diagnostics = diagnostics_for(&[(name, source)]);
    assert_eq!(diagnostics.len(), 1, "expected exactly one diagnostic");
    let diagnostic = &diagnostics[0];

    let file = SyntaxFile::new(name, source);
    split_at(
        &file,
        LineCol::new(diagnostic.start_line, diagnostic.start_col),
        &SplitOptions::default(),
        &CancellationToken::new(),
    )
    .unwrap()
}

#[test]
fn test_method_only_form_gets_empty_companion() {
    let result = split_flagged("Test0.cs", FORM_WITHOUT_REGIONS);
    assert_eq!(result.secondary.name(), "Test0.Designer.cs");
    assert_eq!(result.secondary.text(), "partial class SomeForm\n{\n}\n");
    assert_eq!(member_names(&result.primary), vec!["InitializeComponent"]);
    assert!(result.primary.text().contains("partial class SomeForm : Form"));
}

#[test]
fn test_generated_form_moves_regions_in_priority_order() {
    let result = split_flagged("MainForm.cs", FORM_WITH_REGIONS);

    assert_eq!(member_names(&result.primary), vec!["MainForm", "OnOk"]);
    assert_eq!(
        member_names(&result.secondary),
        vec!["Dispose", "InitializeComponent", "components", "okButton", "titleLabel"]
    );
    assert_eq!(result.regions, RegionName::PRIORITY.to_vec());

    for doc in [&result.primary, &result.secondary] {
        let text = doc.text();
        assert!(!text.contains("#region"), "{}", text);
        assert!(!text.contains("#endregion"), "{}", text);
        assert!(!doc.has_errors());
    }
}

#[test]
fn test_generated_form_layout() {
    let result = split_flagged("MainForm.cs", FORM_WITH_REGIONS);
    assert_eq!(
        result.primary.text(),
        r#"using System;
using System.Windows.Forms;

namespace Demo.App
{
    /// <summary>
    /// Main window.
    /// </summary>
    public partial class MainForm : Form
    {
        public MainForm()
        {
            InitializeComponent();
        }

        // Event handlers stay with the user code
        private void OnOk(object sender, EventArgs e)
        {
            Close();
        }
    }
}
"#
    );
    assert_eq!(
        result.secondary.text(),
        r#"namespace Demo.App
{
    partial class MainForm
    {
        protected override void Dispose(bool disposing)
        {
            if (disposing && (components != null))
            {
                components.Dispose();
            }
            base.Dispose(disposing);
        }

        /// <summary>
        /// Required method for Designer support.
        /// </summary>
        private void InitializeComponent()
        {
            this.okButton = new Button();
            this.titleLabel = new Label();
            this.SuspendLayout();
            this.okButton.Text = "OK";
            this.okButton.Click += new EventHandler(this.OnOk);
            this.Controls.Add(this.okButton);
            this.ResumeLayout(false);
        }

        private System.ComponentModel.IContainer components = null;
        private Button okButton;
        private Label titleLabel;
    }
}
"#
    );
}

#[test]
fn test_missing_regions_are_skipped() {
    let result = split_flagged("SettingsForm.cs", FORM_WITH_DESIGNER_REGION_ONLY);
    assert_eq!(result.regions, vec![RegionName::DesignerGeneratedCode]);
    assert_eq!(member_names(&result.primary), vec!["autoSave"]);
    assert_eq!(member_names(&result.secondary), vec!["InitializeComponent"]);
    assert_eq!(
        result.primary.text(),
        "using System.Windows.Forms;\n\npublic partial class SettingsForm : Form\n{\n    private CheckBox autoSave;\n}\n"
    );
}

#[test]
fn test_split_result_is_no_longer_flagged() {
    let result = split_flagged("MainForm.cs", FORM_WITH_REGIONS);
    let [primary, secondary] = result.into_documents();
    let (primary_text, secondary_text) = (primary.text(), secondary.text());
    let diagnostics = diagnostics_for(&[
        (primary.name(), primary_text.as_str()),
        (secondary.name(), secondary_text.as_str()),
    ]);
    assert!(diagnostics.is_empty());
}
