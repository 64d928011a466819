use serde::Serialize;

/// Logical name of the entry-point command; it keeps its name in OpenCode.
const ROOT_COMMAND: &str = "pm";

/// Prefix that flattens command namespaces into OpenCode command names
const COMMAND_NAME_PREFIX: &str = "pm-";

pub const DOCUMENT_EXTENSION: &str = "md";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentKind {
    Command,
    Agent,
}

impl DocumentKind {
    /// Output file name for a document with the given logical name
    ///
    /// Commands are prefixed with `pm-` unless they are `pm` itself; agents
    /// keep their name.
    pub fn output_file_name(self, name: &str) -> String {
        match self {
            DocumentKind::Command if name == ROOT_COMMAND => {
                format!("{name}.{DOCUMENT_EXTENSION}")
            }
            DocumentKind::Command => {
                format!("{COMMAND_NAME_PREFIX}{name}.{DOCUMENT_EXTENSION}")
            }
            DocumentKind::Agent => format!("{name}.{DOCUMENT_EXTENSION}"),
        }
    }
}

impl std::fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DocumentKind::Command => write!(f, "command"),
            DocumentKind::Agent => write!(f, "agent"),
        }
    }
}
