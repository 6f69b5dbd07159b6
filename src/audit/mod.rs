//! Documentation page audit.
//!
//! One straight pass over the page text:
//! section anchors, component script references (checked against the
//! components root on disk), demo markers and Bootstrap dependency markers.
//! The verdict is the conjunction of sections, scripts and dependencies;
//! the demo count is informational.

pub mod markers;
pub mod scripts;
pub mod sections;

use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

use crate::config::AuditConfig;

pub use markers::{DependencyFlags, check_dependency_flags, count_demo_markers};
pub use scripts::{ScriptCheck, ScriptReference, check_files_exist, extract_script_references};
pub use sections::{SectionPresence, check_sections};

/// Errors that stop an audit before any report can be produced.
#[derive(Error, Debug)]
pub enum AuditError {
    #[error("Failed to read documentation file {path}: {source}")]
    DocumentUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Read the documentation page.
pub fn load_document(path: &Path) -> Result<String, AuditError> {
    std::fs::read_to_string(path).map_err(|source| AuditError::DocumentUnreadable {
        path: path.to_path_buf(),
        source,
    })
}

/// Everything one audit run found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    pub document: PathBuf,
    pub sections: Vec<SectionPresence>,
    pub scripts: Vec<ScriptCheck>,
    pub demo_count: usize,
    pub dependencies: DependencyFlags,
}

impl ValidationReport {
    pub fn missing_sections(&self) -> Vec<&str> {
        sections::missing_sections(&self.sections)
    }

    pub fn found_sections(&self) -> Vec<&str> {
        self.sections
            .iter()
            .filter(|s| s.found)
            .map(|s| s.component.as_str())
            .collect()
    }

    /// Referenced scripts as `<dir>/<file>`, sorted, duplicates kept.
    pub fn script_listing(&self) -> Vec<String> {
        let mut listing: Vec<String> = self
            .scripts
            .iter()
            .map(|check| check.reference.relative_path())
            .collect();
        listing.sort();
        listing
    }

    /// Scripts that do not exist on disk, in document order.
    pub fn missing_scripts(&self) -> Vec<String> {
        self.scripts
            .iter()
            .filter(|check| !check.exists)
            .map(|check| check.reference.relative_path())
            .collect()
    }

    pub fn sections_ok(&self) -> bool {
        self.sections.iter().all(|s| s.found)
    }

    pub fn scripts_ok(&self) -> bool {
        self.scripts.iter().all(|check| check.exists)
    }

    pub fn dependencies_ok(&self) -> bool {
        self.dependencies.all_present()
    }

    pub fn verdict(&self) -> bool {
        self.sections_ok() && self.scripts_ok() && self.dependencies_ok()
    }
}

/// Runs the audit for one configuration.
#[derive(Debug, Clone, Default)]
pub struct Validator {
    config: AuditConfig,
}

impl Validator {
    pub fn new(config: AuditConfig) -> Self {
        Self { config }
    }

    /// Load the document and audit it.
    pub fn run(&self) -> Result<ValidationReport, AuditError> {
        let content = load_document(&self.config.document)?;
        Ok(self.audit(&content))
    }

    /// Audit already-loaded document text.
    pub fn audit(&self, content: &str) -> ValidationReport {
        let sections = check_sections(content, &self.config.expected_components);
        let references = extract_script_references(content);
        let scripts = check_files_exist(&references, &self.config.components_root);
        let demo_count = count_demo_markers(content);
        let dependencies = check_dependency_flags(content);

        debug!(
            component = "audit",
            operation = "audit",
            document_bytes = content.len(),
            sections_found = sections.iter().filter(|s| s.found).count(),
            sections_expected = sections.len(),
            script_references = scripts.len(),
            demo_count,
            "Completed checks"
        );

        let report = ValidationReport {
            document: self.config.document.clone(),
            sections,
            scripts,
            demo_count,
            dependencies,
        };

        info!(
            component = "audit",
            document = %report.document.display(),
            valid = report.verdict(),
            "Audit finished"
        );

        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const DEPENDENCIES: &str = r#"
        <link href="css/bootstrap.min.css" rel="stylesheet">
        <link href="css/bootstrap-icons.min.css" rel="stylesheet">
        <script src="js/bootstrap.bundle.min.js"></script>
    "#;

    fn fixture(expected: &[&str]) -> (TempDir, Validator) {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path().join("components");
        fs::create_dir_all(root.join("accordion")).unwrap();
        fs::write(root.join("accordion/accordion.js"), "").unwrap();

        let config = AuditConfig::default()
            .with_document(tmp.path().join("index.html"))
            .with_components_root(root)
            .with_expected_components(expected.iter().copied())
            .unwrap();
        (tmp, Validator::new(config))
    }

    fn sample_page() -> String {
        format!(
            r#"{DEPENDENCIES}
            <section id="accordion"><div class="component-demo"></div></section>
            <section id="modal"><div class="component-demo"></div></section>
            <script src="components/accordion/accordion.js"></script>
            "#
        )
    }

    #[test]
    fn test_sample_page_with_builtin_list_is_invalid() {
        let (_tmp, validator) = fixture(crate::config::EXPECTED_COMPONENTS);
        let report = validator.audit(&sample_page());

        assert_eq!(report.found_sections(), vec!["accordion", "modal"]);
        assert_eq!(report.missing_sections().len(), 13);
        assert_eq!(report.script_listing(), vec!["accordion/accordion.js"]);
        assert!(report.missing_scripts().is_empty());
        assert_eq!(report.demo_count, 2);
        assert!(report.dependencies_ok());
        assert!(!report.verdict());
    }

    #[test]
    fn test_sample_page_with_matching_list_is_valid() {
        let (_tmp, validator) = fixture(&["accordion", "modal"]);
        let report = validator.audit(&sample_page());

        assert!(report.sections_ok());
        assert!(report.scripts_ok());
        assert!(report.verdict());
    }

    #[test]
    fn test_missing_script_fails_verdict() {
        let (_tmp, validator) = fixture(&["accordion"]);
        let page = format!(
            r#"{DEPENDENCIES} id="accordion"
            <script src="components/accordion/accordion.js"></script>
            <script src="components/toast/toast.js"></script>"#
        );
        let report = validator.audit(&page);

        assert_eq!(report.missing_scripts(), vec!["toast/toast.js"]);
        assert!(report.sections_ok());
        assert!(!report.verdict());
    }

    #[test]
    fn test_missing_dependency_fails_verdict() {
        let (_tmp, validator) = fixture(&["accordion"]);
        let page = r#"<link href="bootstrap.min.css"> id="accordion""#;
        let report = validator.audit(page);

        assert!(report.sections_ok());
        assert!(report.scripts_ok());
        assert!(!report.verdict());
    }

    #[test]
    fn test_demo_count_does_not_affect_verdict() {
        let (_tmp, validator) = fixture(&["accordion"]);
        let page = format!(r#"{DEPENDENCIES} id="accordion""#);
        let report = validator.audit(&page);

        assert_eq!(report.demo_count, 0);
        assert!(report.verdict());
    }

    #[test]
    fn test_listing_sorted_missing_in_document_order() {
        let (_tmp, validator) = fixture(&["accordion"]);
        let page = r#"
            <script src="components/tooltip/tooltip.js"></script>
            <script src="components/accordion/accordion.js"></script>
            <script src="components/badge/badge.js"></script>
            <script src="components/tooltip/tooltip.js"></script>
        "#;
        let report = validator.audit(page);

        assert_eq!(
            report.script_listing(),
            vec![
                "accordion/accordion.js",
                "badge/badge.js",
                "tooltip/tooltip.js",
                "tooltip/tooltip.js"
            ]
        );
        assert_eq!(
            report.missing_scripts(),
            vec!["tooltip/tooltip.js", "badge/badge.js", "tooltip/tooltip.js"]
        );
    }

    #[test]
    fn test_run_reads_document() {
        let (tmp, validator) = fixture(&["accordion", "modal"]);
        fs::write(tmp.path().join("index.html"), sample_page()).unwrap();

        let first = validator.run().unwrap();
        let second = validator.run().unwrap();
        assert_eq!(first, second);
        assert!(first.verdict());
    }

    #[test]
    fn test_run_missing_document_is_fatal() {
        let (_tmp, validator) = fixture(&["accordion"]);
        let err = validator.run().unwrap_err();

        assert!(matches!(err, AuditError::DocumentUnreadable { .. }));
        assert!(err.to_string().contains("index.html"));
    }
}
