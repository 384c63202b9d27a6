//! Model family detection, the single point of truth for model name classification.

/// Represents which AI provider family a model belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModelFamily {
    /// Anthropic Claude models (via Vertex AI)
    Claude,
    /// Anything else (Gemini, GPT, ...)
    Other,
}

impl ModelFamily {
    /// Determine model family from model name string, ignoring case.
    pub fn from_model_name(name: &str) -> Self {
        if name.to_lowercase().contains("claude") {
            Self::Claude
        } else {
            Self::Other
        }
    }

    /// Returns true if this is a Claude family model.
    pub fn is_claude(self) -> bool {
        self == Self::Claude
    }
}
