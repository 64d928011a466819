/// Source command namespaces, in the order they are rewritten
pub const COMMAND_PREFIXES: [&str; 3] = ["/pm:", "/design:", "/backlog:"];

/// OpenCode has no command namespaces; everything lands under `/pm-`.
pub const TARGET_PREFIX: &str = "/pm-";

/// Rewrite namespaced slash-command references in a document body
///
/// Each prefix in [`COMMAND_PREFIXES`] is replaced globally, one pass per
/// prefix in listed order, so a later pass sees the output of earlier ones.
pub fn rewrite_command_refs(text: &str) -> String {
    COMMAND_PREFIXES
        .iter()
        .fold(text.to_string(), |acc, prefix| acc.replace(prefix, TARGET_PREFIX))
}
