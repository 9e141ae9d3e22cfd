//! Common C# sources for tests.

/// A form with the initialization method and no regions
pub const FORM_WITHOUT_REGIONS: &str = r#"
using System.Windows.Forms;

class SomeForm : Form
{
    private void InitializeComponent()
    {
    };
}"#;

/// A form as older designers generated it, all in one file
pub const FORM_WITH_REGIONS: &str = r#"using System;
using System.Windows.Forms;

namespace Demo.App
{
    /// <summary>
    /// Main window.
    /// </summary>
    public class MainForm : Form
    {
        #region Component fields
        private System.ComponentModel.IContainer components = null;
        private Button okButton;
        private Label titleLabel;
        #endregion

        public MainForm()
        {
            InitializeComponent();
        }

        // Event handlers stay with the user code
        private void OnOk(object sender, EventArgs e)
        {
            Close();
        }

        #region Windows Form Designer generated code
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
        #endregion

        #region Standard WinForms code
        protected override void Dispose(bool disposing)
        {
            if (disposing && (components != null))
            {
                components.Dispose();
            }
            base.Dispose(disposing);
        }
        #endregion
    }
}
"#;

/// A form whose source has only the designer-generated region
pub const FORM_WITH_DESIGNER_REGION_ONLY: &str = r#"using System.Windows.Forms;

public class SettingsForm : Form
{
    private CheckBox autoSave;

    #region Windows Form Designer generated code
    private void InitializeComponent()
    {
        this.autoSave = new CheckBox();
    }
    #endregion
}
"#;

/// A user control split across two documents already
pub const CONTROL_PART: &str = r#"using System.Windows.Forms;

namespace Demo.Controls
{
    public partial class Toolbar : UserControl
    {
        public Toolbar()
        {
            InitializeComponent();
        }
    }
}
"#;

pub const CONTROL_DESIGNER_PART: &str = r#"namespace Demo.Controls
{
    partial class Toolbar
    {
        private void InitializeComponent()
        {
        }
    }
}
"#;

/// Classes that must never be flagged
pub const NON_CONTROLS: &str = r#"using System.Windows.Forms;

namespace Demo.Model
{
    class Customer
    {
        void InitializeComponent() { }
    }

    class FancyButton : Button
    {
        void InitializeComponent() { }
    }

    interface IView
    {
        void InitializeComponent();
    }
}
"#;
