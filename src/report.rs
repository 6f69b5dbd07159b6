//! Report rendering.
//!
//! Text output is meant for a terminal and uses emoji markers so passes and
//! failures stand out. JSON output carries an overall `status` plus a
//! `passed` flag per check.

use colored::Colorize;
use serde_json::{Value, json};

use crate::audit::ValidationReport;

const PASS: &str = "✅";
const FAIL: &str = "❌";

fn mark(ok: bool) -> &'static str {
    if ok { PASS } else { FAIL }
}

/// Applies colour only when enabled, so rendered text stays stable in tests.
struct Painter {
    enabled: bool,
}

impl Painter {
    fn heading(&self, text: &str) -> String {
        if self.enabled {
            text.bold().to_string()
        } else {
            text.to_string()
        }
    }

    fn good(&self, text: &str) -> String {
        if self.enabled {
            text.green().to_string()
        } else {
            text.to_string()
        }
    }

    fn bad(&self, text: &str) -> String {
        if self.enabled {
            text.red().to_string()
        } else {
            text.to_string()
        }
    }

    fn warn(&self, text: &str) -> String {
        if self.enabled {
            text.yellow().bold().to_string()
        } else {
            text.to_string()
        }
    }
}

/// Render the human-readable report.
pub fn compose_report(report: &ValidationReport, color: bool) -> String {
    let paint = Painter { enabled: color };
    let mut output = String::new();

    output.push_str(&paint.heading("=== Documentation Validation Report ==="));
    output.push_str("\n\n");

    let missing_sections = report.missing_sections();
    if missing_sections.is_empty() {
        output.push_str(&paint.good(&format!("{PASS} All component sections are present")));
        output.push('\n');
    } else {
        output.push_str(&paint.bad(&format!("{FAIL} Missing component sections:")));
        output.push('\n');
        for section in missing_sections {
            output.push_str(&format!("  - {section}\n"));
        }
    }
    output.push('\n');

    let listing = report.script_listing();
    output.push_str(&format!(
        "📄 Found {} JavaScript file references:\n",
        listing.len()
    ));
    for script in &listing {
        output.push_str(&format!("  - {script}\n"));
    }
    output.push('\n');

    let missing_scripts = report.missing_scripts();
    if missing_scripts.is_empty() {
        output.push_str(&paint.good(&format!("{PASS} All referenced JavaScript files exist")));
        output.push('\n');
    } else {
        output.push_str(&paint.bad(&format!("{FAIL} Missing JavaScript files:")));
        output.push('\n');
        for script in &missing_scripts {
            output.push_str(&format!("  - {script}\n"));
        }
    }
    output.push('\n');

    output.push_str(&format!("🎯 Found {} component demos\n", report.demo_count));
    output.push('\n');

    let deps = &report.dependencies;
    output.push_str("🔍 Bootstrap dependencies:\n");
    output.push_str(&format!("  - Bootstrap CSS: {}\n", mark(deps.css)));
    output.push_str(&format!("  - Bootstrap JS: {}\n", mark(deps.bundle_js)));
    output.push_str(&format!("  - Bootstrap Icons: {}\n", mark(deps.icons)));
    output.push('\n');

    if report.verdict() {
        output.push_str(&paint.good("🎉 Documentation page is valid and ready for GitHub Pages!"));
    } else {
        output.push_str(&paint.warn("⚠️  Documentation page has some issues that need attention."));
    }
    output.push('\n');

    output
}

/// Render the report as a JSON value.
pub fn report_json(report: &ValidationReport) -> Value {
    let status = if report.verdict() { "valid" } else { "invalid" };
    let references: Vec<Value> = report
        .scripts
        .iter()
        .map(|check| {
            json!({
                "path": check.reference.relative_path(),
                "exists": check.exists,
            })
        })
        .collect();
    let deps = &report.dependencies;

    json!({
        "status": status,
        "document": report.document.display().to_string(),
        "checks": {
            "sections": {
                "passed": report.sections_ok(),
                "found": report.found_sections(),
                "missing": report.missing_sections(),
            },
            "scripts": {
                "passed": report.scripts_ok(),
                "references": references,
                "missing": report.missing_scripts(),
            },
            "dependencies": {
                "passed": report.dependencies_ok(),
                "bootstrap_css": deps.css,
                "bootstrap_js": deps.bundle_js,
                "bootstrap_icons": deps.icons,
            },
        },
        "demo_count": report.demo_count,
    })
}
