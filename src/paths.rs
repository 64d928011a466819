//! Source and destination layout for a translation run.

use std::path::{Path, PathBuf};

/// Directory under the plugin root that receives OpenCode output by default
pub const DEFAULT_OUTPUT_DIR: &str = ".opencode";

pub const COMMANDS_DIR: &str = "commands";
pub const AGENTS_DIR: &str = "agents";

/// Resolved directories for one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslatePaths {
    pub commands_src: PathBuf,
    pub agents_src: PathBuf,
    pub commands_out: PathBuf,
    pub agents_out: PathBuf,
}

impl TranslatePaths {
    /// Layout for a plugin root, writing into `<root>/.opencode` unless
    /// `output_root` is given
    pub fn new(plugin_root: &Path, output_root: Option<&Path>) -> Self {
        let output_root = output_root
            .map(Path::to_path_buf)
            .unwrap_or_else(|| plugin_root.join(DEFAULT_OUTPUT_DIR));

        Self {
            commands_src: plugin_root.join(COMMANDS_DIR),
            agents_src: plugin_root.join(AGENTS_DIR),
            commands_out: output_root.join(COMMANDS_DIR),
            agents_out: output_root.join(AGENTS_DIR),
        }
    }
}
