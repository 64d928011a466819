/// Opening delimiter; must sit at the very start of the document.
const OPEN_DELIMITER: &str = "---\n";

/// Closing delimiter; the first occurrence after the opening one wins.
const CLOSE_DELIMITER: &str = "\n---";

/// Flat `key: value` header of a plugin document
///
/// Keys keep the position of their first appearance. Values are stored
/// verbatim (trimmed) and never coerced to other types.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Frontmatter {
    fields: Vec<(String, String)>,
}

impl Frontmatter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a field, overwriting the value of an existing key in place
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.fields.iter_mut().find(|(k, _)| *k == key) {
            Some(existing) => existing.1 = value,
            None => self.fields.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Like [`get`](Self::get), but treats an empty value as absent.
    pub fn get_non_empty(&self, key: &str) -> Option<&str> {
        self.get(key).filter(|v| !v.is_empty())
    }
}

/// Extract the frontmatter fields from document content
///
/// The header is the text between a `---` line at the very start of the
/// content and the next `---` that begins a line. Content without such a
/// block yields an empty [`Frontmatter`]; this never fails.
///
/// Each header line is split at its first `:`. Lines without a colon, or
/// with nothing before it, are ignored.
///
/// # Example
///
/// ```text
/// ---
/// description: Show project status
/// model: haiku
/// ---
/// # Body starts here
/// ```
pub fn extract_frontmatter(content: &str) -> Frontmatter {
    let mut frontmatter = Frontmatter::new();

    let Some(block) = header_block(content) else {
        return frontmatter;
    };

    for line in block.split('\n') {
        match line.find(':') {
            Some(idx) if idx > 0 => {
                let key = line[..idx].trim();
                let value = line[idx + 1..].trim();
                frontmatter.insert(key, value);
            }
            _ => {}
        }
    }

    frontmatter
}

/// Raw text between the opening and closing delimiters, if both exist
fn header_block(content: &str) -> Option<&str> {
    let rest = content.strip_prefix(OPEN_DELIMITER)?;
    let end = rest.find(CLOSE_DELIMITER)?;
    Some(&rest[..end])
}
