//! Shared test helpers for plugin translation tests

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Test helper: Create an empty plugin root with commands/ and agents/
pub fn init_plugin() -> TempDir {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    fs::create_dir_all(temp_dir.path().join("commands")).expect("Failed to create commands/");
    fs::create_dir_all(temp_dir.path().join("agents")).expect("Failed to create agents/");
    temp_dir
}

/// Test helper: Write a command source document
pub fn write_command(root: &Path, name: &str, content: &str) {
    fs::write(root.join("commands").join(format!("{name}.md")), content)
        .expect("Failed to write command");
}

/// Test helper: Write an agent source document
pub fn write_agent(root: &Path, name: &str, content: &str) {
    fs::write(root.join("agents").join(format!("{name}.md")), content)
        .expect("Failed to write agent");
}

/// Test helper: Read a generated file under `<root>/.opencode`
pub fn read_output(root: &Path, relative: &str) -> String {
    fs::read_to_string(opencode_dir(root).join(relative))
        .unwrap_or_else(|e| panic!("Failed to read output {relative}: {e}"))
}

pub fn opencode_dir(root: &Path) -> PathBuf {
    root.join(".opencode")
}

/// Test helper: Sorted file names in a generated directory
pub fn output_names(root: &Path, sub: &str) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(opencode_dir(root).join(sub))
        .expect("Failed to read output directory")
        .map(|e| {
            e.expect("Failed to read entry")
                .file_name()
                .to_string_lossy()
                .to_string()
        })
        .collect();
    names.sort();
    names
}

/// Test helper: Populate a plugin resembling a real pm plugin
pub fn seed_sample_plugin(root: &Path) {
    write_command(
        root,
        "pm",
        "---\ndescription: Project manager entry point\n---\n\n# PM\n\nStart with /pm:init, then /design:plan.\n",
    );
    write_command(
        root,
        "status",
        "---\ndescription: Show project status\nallowed-tools: Bash, Read\n---\n\nSummarize status. See /backlog:list.\n",
    );
    write_command(root, "draft", "---\nargument-hint: [topic]\n---\n\nNot ready.\n");
    write_agent(
        root,
        "planner",
        "---\nname: planner\ndescription: Breaks work into tasks\nmodel: opus\n---\n\nYou plan.\n\n---\n\nUse /pm:next when done.\n",
    );
    write_agent(
        root,
        "scout",
        "---\ndescription: Explores the codebase\n---\n\nYou explore.\n",
    );
    fs::write(root.join("agents").join("notes.txt"), "ignored").expect("Failed to write notes");
}
