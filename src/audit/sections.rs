//! Component section anchors.
//!
//! A component is documented when the page carries the literal anchor
//! `id="<component>"`. The quotes are part of the pattern, so `id="nav"`
//! never matches inside `id="navbar"`.

/// Presence of one expected component section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionPresence {
    pub component: String,
    pub found: bool,
}

/// Build the anchor text searched for a component.
pub fn section_marker(component: &str) -> String {
    format!("id=\"{component}\"")
}

/// Check every expected component against the document, in list order.
pub fn check_sections<S: AsRef<str>>(content: &str, expected: &[S]) -> Vec<SectionPresence> {
    expected
        .iter()
        .map(|component| {
            let component = component.as_ref();
            SectionPresence {
                component: component.to_string(),
                found: content.contains(&section_marker(component)),
            }
        })
        .collect()
}

/// Components whose section anchor was not found, in list order.
pub fn missing_sections(sections: &[SectionPresence]) -> Vec<&str> {
    sections
        .iter()
        .filter(|s| !s.found)
        .map(|s| s.component.as_str())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_found_by_exact_anchor() {
        let html = r#"<section id="accordion"><h2>Accordion</h2></section>"#;
        let result = check_sections(html, &["accordion", "modal"]);

        assert_eq!(
            result,
            vec![
                SectionPresence {
                    component: "accordion".into(),
                    found: true
                },
                SectionPresence {
                    component: "modal".into(),
                    found: false
                },
            ]
        );
    }

    #[test]
    fn test_partial_identifier_does_not_match() {
        let html = r#"<section id="navbar"></section><div id="nav-tabs-demo"></div>"#;
        let result = check_sections(html, &["nav", "nav-tabs", "navbar"]);

        let found: Vec<bool> = result.iter().map(|s| s.found).collect();
        assert_eq!(found, vec![false, false, true]);
    }

    #[test]
    fn test_single_quoted_anchor_is_not_recognised() {
        let result = check_sections("<div id='toast'></div>", &["toast"]);
        assert!(!result[0].found);
    }

    #[test]
    fn test_empty_document_reports_all_missing() {
        let expected = ["alert", "badge", "card"];
        let result = check_sections("", &expected);

        assert_eq!(missing_sections(&result), vec!["alert", "badge", "card"]);
    }

    #[test]
    fn test_missing_sections_preserves_list_order() {
        let html = r#"id="card" id="alert""#;
        let result = check_sections(html, &["tooltip", "alert", "badge", "card"]);

        assert_eq!(missing_sections(&result), vec!["tooltip", "badge"]);
    }
}
