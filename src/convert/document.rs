use crate::error::SkipReason;
use crate::output::OutputDocument;
use crate::parser::SourceDocument;
use crate::translate::{map_model, rewrite_command_refs};

use super::kind::DocumentKind;

/// Translate one source document into its OpenCode form
///
/// Pure: no I/O, no logging. A document without a non-empty `description`
/// is skipped rather than translated.
pub fn translate_document(
    kind: DocumentKind,
    content: &str,
) -> Result<OutputDocument, SkipReason> {
    let source = SourceDocument::parse(content);

    let description = source
        .frontmatter
        .get_non_empty("description")
        .ok_or(SkipReason::MissingDescription)?
        .to_string();

    let body = rewrite_command_refs(&source.body);

    let document = match kind {
        DocumentKind::Command => OutputDocument::Command { description, body },
        DocumentKind::Agent => OutputDocument::Agent {
            description,
            model: map_model(source.frontmatter.get_non_empty("model")).to_string(),
            body,
        },
    };

    Ok(document)
}
