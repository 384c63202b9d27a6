//! Display names for upstream model identifiers.

/// Known model identifiers, matched by substring against the lower-cased
/// name. Order matters: the first match wins.
const DISPLAY_NAMES: &[(&str, &str)] = &[
    ("gemini-3-pro-high", "Gemini 3 Pro"),
    ("gemini-3-flash", "Gemini 3 Flash"),
    ("gemini-3-pro-image", "Gemini 3 Image"),
    ("claude-sonnet-4-5", "Claude 4.5"),
    ("claude-opus", "Claude Opus"),
    ("claude-haiku", "Claude Haiku"),
];

/// Format a technical model name into a user-friendly label.
///
/// Unknown names are split on `-` and each segment gets its first character
/// uppercased; the rest of the segment is left as-is, so `"GPT-4O"` stays
/// `"GPT 4O"` rather than becoming `"Gpt 4o"`.
pub fn format_model_name(name: &str) -> String {
    let lower = name.to_lowercase();
    if let Some((_, label)) = DISPLAY_NAMES.iter().find(|(pattern, _)| lower.contains(pattern)) {
        return (*label).to_string();
    }

    name.split('-').map(capitalize_first).collect::<Vec<_>>().join(" ")
}

fn capitalize_first(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_models() {
        assert_eq!(format_model_name("gemini-3-pro-high"), "Gemini 3 Pro");
        assert_eq!(format_model_name("gemini-3-flash-001"), "Gemini 3 Flash");
        assert_eq!(format_model_name("gemini-3-pro-image-preview"), "Gemini 3 Image");
        assert_eq!(format_model_name("claude-sonnet-4-5-thinking"), "Claude 4.5");
        assert_eq!(format_model_name("claude-haiku-4"), "Claude Haiku");
    }

    #[test]
    fn test_matching_ignores_case() {
        assert_eq!(format_model_name("CLAUDE-OPUS-4"), "Claude Opus");
        assert_eq!(format_model_name("Gemini-3-Flash"), "Gemini 3 Flash");
    }

    #[test]
    fn test_first_match_wins() {
        // Mentions both a gemini and a claude pattern; gemini is listed first.
        assert_eq!(format_model_name("gemini-3-flash-vs-claude-opus"), "Gemini 3 Flash");
    }

    #[test]
    fn test_fallback_capitalizes_segments() {
        assert_eq!(format_model_name("gpt-4o-mini"), "Gpt 4o Mini");
        assert_eq!(format_model_name("gemini-2.5-pro"), "Gemini 2.5 Pro");
    }

    #[test]
    fn test_fallback_keeps_rest_of_segment() {
        assert_eq!(format_model_name("GPT-4O"), "GPT 4O");
        assert_eq!(format_model_name("mixTral-8x7b"), "MixTral 8x7b");
    }

    #[test]
    fn test_fallback_edge_cases() {
        assert_eq!(format_model_name(""), "");
        assert_eq!(format_model_name("a--b"), "A  B");
        assert_eq!(format_model_name("-lead"), " Lead");
        assert_eq!(format_model_name("ßeta"), "SSeta");
    }
}
