//! Translation catalogs and the `t(key)` lookup
//!
//! Catalogs use the nested i18next JSON layout and are flattened into dotted
//! keys (`{"common": {"unknown": ..}}` becomes `common.unknown`).

use antigravity_types::LocaleError;
use serde_json::{Map, Value};
use std::collections::HashMap;

/// Translation keys used by the dashboard.
pub mod keys {
    pub const CURRENT_ACCOUNT: &str = "dashboard.current_account";
    pub const NO_ACTIVE_ACCOUNT: &str = "dashboard.no_active_account";
    pub const SWITCH_ACCOUNT: &str = "dashboard.switch_account";
    pub const RESET_TIME: &str = "accounts.reset_time";
    pub const UNKNOWN: &str = "common.unknown";
}

/// Languages with a bundled catalog.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Language {
    #[default]
    En,
    Zh,
}

impl Language {
    /// Resolve a BCP 47 style code by its primary subtag (`zh-CN` -> `Zh`).
    pub fn resolve(code: &str) -> Result<Self, LocaleError> {
        let primary = code.trim().split(['-', '_']).next().unwrap_or_default().to_lowercase();
        match primary.as_str() {
            "en" => Ok(Self::En),
            "zh" => Ok(Self::Zh),
            _ => Err(LocaleError::UnknownLanguage { code: code.to_string() }),
        }
    }

    /// Like [`Language::resolve`], falling back to English.
    pub fn resolve_or_default(code: &str) -> Self {
        Self::resolve(code).unwrap_or_else(|e| {
            log::debug!("{e}, falling back to English");
            Self::default()
        })
    }

    pub fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Zh => "zh",
        }
    }

    fn bundled_source(self) -> &'static str {
        match self {
            Self::En => include_str!("../locales/en.json"),
            Self::Zh => include_str!("../locales/zh.json"),
        }
    }
}

/// Flattened translation table for one language.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    language: Language,
    entries: HashMap<String, String>,
}

impl Catalog {
    /// Parse a nested JSON catalog.
    pub fn from_json(language: Language, json: &str) -> Result<Self, LocaleError> {
        let value: Value = serde_json::from_str(json).map_err(|e| LocaleError::CatalogParse {
            language: language.code().to_string(),
            message: e.to_string(),
        })?;
        let Value::Object(root) = value else {
            return Err(LocaleError::NotAnObject { language: language.code().to_string() });
        };

        let mut entries = HashMap::new();
        flatten_into(&mut entries, "", &root);
        Ok(Self { language, entries })
    }

    /// Catalog shipped with the dashboard. A broken bundle degrades to an empty
    /// catalog, so every lookup shows its key.
    pub fn bundled(language: Language) -> Self {
        Self::from_json(language, language.bundled_source()).unwrap_or_else(|e| {
            log::warn!("Bundled catalog unusable: {e}");
            Self { language, entries: HashMap::new() }
        })
    }

    pub fn language(&self) -> Language {
        self.language
    }

    /// Look up a key; a missing key renders as the key itself.
    pub fn t(&self, key: &str) -> String {
        match self.entries.get(key) {
            Some(text) => text.clone(),
            None => {
                log::debug!("Missing translation for '{key}' ({})", self.language.code());
                key.to_string()
            }
        }
    }
}

fn flatten_into(entries: &mut HashMap<String, String>, prefix: &str, object: &Map<String, Value>) {
    for (name, value) in object {
        let key = if prefix.is_empty() { name.clone() } else { format!("{prefix}.{name}") };
        match value {
            Value::Object(nested) => flatten_into(entries, &key, nested),
            Value::String(text) => {
                entries.insert(key, text.clone());
            }
            Value::Number(n) => {
                entries.insert(key, n.to_string());
            }
            Value::Bool(b) => {
                entries.insert(key, b.to_string());
            }
            Value::Null | Value::Array(_) => {}
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_language() {
        assert_eq!(Language::resolve("en").unwrap(), Language::En);
        assert_eq!(Language::resolve("en-US").unwrap(), Language::En);
        assert_eq!(Language::resolve("zh_CN").unwrap(), Language::Zh);
        assert_eq!(Language::resolve(" ZH-tw ").unwrap(), Language::Zh);
        assert!(matches!(Language::resolve("fr-FR"), Err(LocaleError::UnknownLanguage { .. })));
        assert_eq!(Language::resolve_or_default(""), Language::En);
    }

    #[test]
    fn test_flatten_nested_keys() {
        let json = r#"{"a": {"b": {"c": "deep"}, "n": 3, "skip": null}, "top": "x", "list": [1]}"#;
        let catalog = Catalog::from_json(Language::En, json).unwrap();
        assert_eq!(catalog.t("a.b.c"), "deep");
        assert_eq!(catalog.t("a.n"), "3");
        assert_eq!(catalog.t("top"), "x");
        assert_eq!(catalog.t("a.skip"), "a.skip");
        assert_eq!(catalog.t("list"), "list");
    }

    #[test]
    fn test_missing_key_returns_key() {
        let catalog = Catalog::bundled(Language::En);
        assert_eq!(catalog.t("dashboard.nope"), "dashboard.nope");
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(
            Catalog::from_json(Language::Zh, "{oops"),
            Err(LocaleError::CatalogParse { .. })
        ));
        assert!(matches!(
            Catalog::from_json(Language::Zh, r#"["not", "object"]"#),
            Err(LocaleError::NotAnObject { .. })
        ));
    }

    #[test]
    fn test_bundled_catalogs_cover_dashboard_keys() {
        let all = [
            keys::CURRENT_ACCOUNT,
            keys::NO_ACTIVE_ACCOUNT,
            keys::SWITCH_ACCOUNT,
            keys::RESET_TIME,
            keys::UNKNOWN,
        ];
        for language in [Language::En, Language::Zh] {
            let catalog = Catalog::bundled(language);
            assert_eq!(catalog.language(), language);
            for key in all {
                assert_ne!(catalog.t(key), key, "{key} missing in {}", language.code());
            }
        }
        assert_eq!(Catalog::bundled(Language::En).t(keys::UNKNOWN), "Unknown");
    }
}
