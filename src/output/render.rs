//! Rendering of OpenCode command and agent documents.

/// Tool permissions granted to every translated agent, in header order
const AGENT_TOOLS: [(&str, bool); 6] = [
    ("read", true),
    ("glob", true),
    ("grep", true),
    ("bash", true),
    ("write", false),
    ("edit", false),
];

/// A translated document ready to be written in OpenCode format
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputDocument {
    Command {
        description: String,
        body: String,
    },
    Agent {
        description: String,
        model: String,
        body: String,
    },
}

impl OutputDocument {
    /// Serialize to OpenCode markdown
    ///
    /// Header fields are emitted in a fixed order and values are written
    /// verbatim, exactly as they appeared in the source header.
    pub fn to_markdown(&self) -> String {
        match self {
            OutputDocument::Command { description, body } => {
                format!("---\ndescription: {description}\n---\n\n{body}\n")
            }
            OutputDocument::Agent {
                description,
                model,
                body,
            } => {
                let mut lines = vec![
                    "---".to_string(),
                    format!("description: {description}"),
                    "mode: subagent".to_string(),
                    format!("model: {model}"),
                    "tools:".to_string(),
                ];
                lines.extend(
                    AGENT_TOOLS
                        .iter()
                        .map(|(tool, allowed)| format!("  {tool}: {allowed}")),
                );
                lines.push("---".to_string());
                lines.push(String::new());
                lines.push(body.clone());
                lines.push(String::new());
                lines.join("\n")
            }
        }
    }
}
