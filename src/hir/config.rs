//! Analyzer configuration and the external type catalog.

use rustc_hash::FxHashMap;
use smol_str::SmolStr;

use crate::syntax::split_extension;

/// A type defined outside the workspace, in a referenced assembly.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExternalType {
    /// Fully-qualified base class, `None` for `System.Object` and interfaces
    pub base: Option<SmolStr>,
    pub is_interface: bool,
}

/// Fully-qualified name → external type, standing in for the framework
/// assemblies a real compilation would reference.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExternalCatalog {
    types: FxHashMap<SmolStr, ExternalType>,
}

impl ExternalCatalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// The System.Windows.Forms container hierarchy and the interfaces
    /// commonly listed next to it.
    pub fn winforms() -> Self {
        const CLASSES: &[(&str, Option<&str>)] = &[
            ("System.Object", None),
            ("System.MarshalByRefObject", Some("System.Object")),
            ("System.ComponentModel.Component", Some("System.MarshalByRefObject")),
            ("System.Windows.Forms.Control", Some("System.ComponentModel.Component")),
            ("System.Windows.Forms.ScrollableControl", Some("System.Windows.Forms.Control")),
            ("System.Windows.Forms.ContainerControl", Some("System.Windows.Forms.ScrollableControl")),
            ("System.Windows.Forms.Form", Some("System.Windows.Forms.ContainerControl")),
            ("System.Windows.Forms.UserControl", Some("System.Windows.Forms.ContainerControl")),
            ("System.Windows.Forms.SplitContainer", Some("System.Windows.Forms.ContainerControl")),
            ("System.Windows.Forms.ToolStripContainer", Some("System.Windows.Forms.ContainerControl")),
            ("System.Windows.Forms.PropertyGrid", Some("System.Windows.Forms.ContainerControl")),
            ("System.Windows.Forms.PrintPreviewDialog", Some("System.Windows.Forms.Form")),
            ("System.Windows.Forms.Panel", Some("System.Windows.Forms.ScrollableControl")),
            ("System.Windows.Forms.FlowLayoutPanel", Some("System.Windows.Forms.Panel")),
            ("System.Windows.Forms.TableLayoutPanel", Some("System.Windows.Forms.Panel")),
            ("System.Windows.Forms.ButtonBase", Some("System.Windows.Forms.Control")),
            ("System.Windows.Forms.Button", Some("System.Windows.Forms.ButtonBase")),
            ("System.Windows.Forms.Label", Some("System.Windows.Forms.Control")),
            ("System.Windows.Forms.TextBoxBase", Some("System.Windows.Forms.Control")),
            ("System.Windows.Forms.TextBox", Some("System.Windows.Forms.TextBoxBase")),
        ];
        const INTERFACES: &[&str] = &[
            "System.IDisposable",
            "System.ComponentModel.IComponent",
            "System.ComponentModel.ISupportInitialize",
            "System.Windows.Forms.IContainerControl",
            "System.Windows.Forms.IWin32Window",
        ];

        let mut catalog = Self::new();
        for (name, base) in CLASSES {
            catalog = catalog.with_class(*name, *base);
        }
        for name in INTERFACES {
            catalog = catalog.with_interface(*name);
        }
        catalog
    }

    /// Add (or replace) a class deriving from `base`.
    pub fn with_class(mut self, name: &str, base: Option<&str>) -> Self {
        self.types.insert(
            SmolStr::new(name),
            ExternalType {
                base: base.map(SmolStr::new),
                is_interface: false,
            },
        );
        self
    }

    /// Add (or replace) an interface.
    pub fn with_interface(mut self, name: &str) -> Self {
        self.types.insert(
            SmolStr::new(name),
            ExternalType {
                base: None,
                is_interface: true,
            },
        );
        self
    }

    pub fn get(&self, name: &str) -> Option<&ExternalType> {
        self.types.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.types.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

/// Settings for the missing designer file check
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AnalyzerConfig {
    /// Fully-qualified base type that makes a type a container control
    pub marker_type: SmolStr,
    /// Method whose presence marks designer-generated code (case-sensitive)
    pub reserved_method: SmolStr,
    /// Companion file suffix, matched as `.<suffix>.<ext>` case-insensitively
    pub companion_suffix: SmolStr,
    pub catalog: ExternalCatalog,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            marker_type: SmolStr::new_static("System.Windows.Forms.ContainerControl"),
            reserved_method: SmolStr::new_static("InitializeComponent"),
            companion_suffix: SmolStr::new_static("Designer"),
            catalog: ExternalCatalog::winforms(),
        }
    }
}

impl AnalyzerConfig {
    pub fn with_marker_type(mut self, marker_type: impl Into<SmolStr>) -> Self {
        self.marker_type = marker_type.into();
        self
    }

    pub fn with_reserved_method(mut self, name: impl Into<SmolStr>) -> Self {
        self.reserved_method = name.into();
        self
    }

    pub fn with_companion_suffix(mut self, suffix: impl Into<SmolStr>) -> Self {
        self.companion_suffix = suffix.into();
        self
    }

    pub fn with_catalog(mut self, catalog: ExternalCatalog) -> Self {
        self.catalog = catalog;
        self
    }

    /// Whether `file_name` follows the companion naming convention,
    /// e.g. `MainForm.Designer.cs` or `forms/MAIN.designer.CS`.
    pub fn is_companion_file(&self, file_name: &str) -> bool {
        let (stem, extension) = split_extension(file_name);
        if extension.is_none() {
            return false;
        }
        let stem = stem.to_lowercase();
        let suffix = format!(".{}", self.companion_suffix.to_lowercase());
        stem.ends_with(&suffix)
    }
}
