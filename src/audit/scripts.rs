//! Component script references and their files on disk.

use once_cell::sync::Lazy;
use regex::Regex;
use std::path::{Path, PathBuf};
use tracing::debug;

/// `<script src="components/<dir>/<file>.js"`. Double quotes only, and `src`
/// must be the first attribute.
static SCRIPT_REFERENCE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"<script src="components/([^/]+)/([^"]+\.js)""#).expect("valid script pattern")
});

/// A script included from a component directory.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ScriptReference {
    /// Component directory directly under the components root.
    pub dir: String,
    /// File name relative to `dir`; always ends in `.js`.
    pub file: String,
}

impl ScriptReference {
    pub fn new(dir: impl Into<String>, file: impl Into<String>) -> Self {
        Self {
            dir: dir.into(),
            file: file.into(),
        }
    }

    /// `<dir>/<file>`, as printed in reports.
    pub fn relative_path(&self) -> String {
        format!("{}/{}", self.dir, self.file)
    }

    /// Location of the referenced file under `components_root`.
    pub fn resolve(&self, components_root: &Path) -> PathBuf {
        components_root.join(&self.dir).join(&self.file)
    }
}

/// Existence of one referenced script.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptCheck {
    pub reference: ScriptReference,
    pub path: PathBuf,
    pub exists: bool,
}

/// Extract every component script reference, in document order.
///
/// Matches do not overlap. A script included twice is returned twice.
pub fn extract_script_references(content: &str) -> Vec<ScriptReference> {
    SCRIPT_REFERENCE
        .captures_iter(content)
        .map(|caps| ScriptReference::new(&caps[1], &caps[2]))
        .collect()
}

/// Check each reference against the filesystem.
///
/// Any error while probing the path counts as "does not exist".
pub fn check_files_exist(
    references: &[ScriptReference],
    components_root: &Path,
) -> Vec<ScriptCheck> {
    references
        .iter()
        .map(|reference| {
            let path = reference.resolve(components_root);
            let exists = path.try_exists().unwrap_or(false);
            if !exists {
                debug!(
                    component = "audit",
                    operation = "check_files_exist",
                    path = %path.display(),
                    "Referenced script is missing"
                );
            }
            ScriptCheck {
                reference: reference.clone(),
                path,
                exists,
            }
        })
        .collect()
}
