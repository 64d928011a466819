/// Model aliases understood in source agent documents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModelAlias {
    #[default]
    Sonnet,
    Haiku,
    Opus,
}

impl ModelAlias {
    /// Resolve an alias, falling back to [`ModelAlias::Sonnet`] for anything
    /// outside the known set (including the empty string)
    pub fn from_alias(alias: &str) -> Self {
        match alias {
            "sonnet" => ModelAlias::Sonnet,
            "haiku" => ModelAlias::Haiku,
            "opus" => ModelAlias::Opus,
            _ => ModelAlias::default(),
        }
    }

    /// Fully qualified model identifier used in OpenCode agent headers
    pub fn target_id(self) -> &'static str {
        match self {
            ModelAlias::Sonnet => "anthropic/claude-sonnet",
            ModelAlias::Haiku => "anthropic/claude-haiku",
            ModelAlias::Opus => "anthropic/claude-opus",
        }
    }
}

/// Map an optional source `model` value to its target identifier
pub fn map_model(model: Option<&str>) -> &'static str {
    ModelAlias::from_alias(model.unwrap_or_default()).target_id()
}
