//! Demo blocks and third-party dependency markers.

/// Marker carried by every live component demo.
pub const DEMO_MARKER: &str = r#"class="component-demo""#;

pub const BOOTSTRAP_CSS: &str = "bootstrap.min.css";
pub const BOOTSTRAP_BUNDLE_JS: &str = "bootstrap.bundle.min.js";
pub const BOOTSTRAP_ICONS_CSS: &str = "bootstrap-icons.min.css";

/// Which Bootstrap assets the page references.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DependencyFlags {
    pub css: bool,
    pub bundle_js: bool,
    pub icons: bool,
}

impl DependencyFlags {
    pub fn all_present(&self) -> bool {
        self.css && self.bundle_js && self.icons
    }
}

/// Count non-overlapping demo markers.
pub fn count_demo_markers(content: &str) -> usize {
    content.matches(DEMO_MARKER).count()
}

pub fn check_dependency_flags(content: &str) -> DependencyFlags {
    DependencyFlags {
        css: content.contains(BOOTSTRAP_CSS),
        bundle_js: content.contains(BOOTSTRAP_BUNDLE_JS),
        icons: content.contains(BOOTSTRAP_ICONS_CSS),
    }
}
