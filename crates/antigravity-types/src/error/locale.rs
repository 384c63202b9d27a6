//! Localization errors.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur while resolving or loading translation catalogs.
#[derive(Debug, Clone, Error, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", content = "details")]
pub enum LocaleError {
    /// No bundled catalog for the requested language
    #[error("Unknown language: {code}")]
    UnknownLanguage {
        /// Language code as requested (e.g. "fr-FR")
        code: String,
    },

    /// Catalog is not valid JSON
    #[error("Catalog for {language} failed to parse: {message}")]
    CatalogParse {
        /// Language the catalog belongs to
        language: String,
        /// Description of the parse failure
        message: String,
    },

    /// Catalog root must be a JSON object
    #[error("Catalog for {language} is not a JSON object")]
    NotAnObject {
        /// Language the catalog belongs to
        language: String,
    },
}
