use super::frontmatter::{extract_frontmatter, Frontmatter};

const DELIMITER: &str = "---";

/// A source plugin document split into header fields and body
#[derive(Debug, Clone)]
pub struct SourceDocument {
    pub frontmatter: Frontmatter,
    pub body: String,
}

impl SourceDocument {
    pub fn parse(content: &str) -> Self {
        Self {
            frontmatter: extract_frontmatter(content),
            body: extract_body(content),
        }
    }
}

/// Return everything after the second `---`, trimmed
///
/// Only the first two delimiters are structural. Later `---` sequences
/// (horizontal rules, for instance) stay in the body untouched. Content with
/// fewer than two delimiters has an empty body.
pub fn extract_body(content: &str) -> String {
    // Third piece of a 3-way split is the unsplit remainder.
    content
        .splitn(3, DELIMITER)
        .nth(2)
        .map(|body| body.trim().to_string())
        .unwrap_or_default()
}
