//! Request and response schemas for the string catalog tools.
//!
//! Field names are the wire contract shared with existing catalog tooling:
//! camelCase throughout, `filePath` for the catalog path argument.

use rmcp::schemars;
use serde::{Deserialize, Serialize};
use xcstrings_catalog::TranslationState;

#[derive(Debug, Deserialize, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ListSupportedLanguagesRequest {
    /// Catalog to inspect
    #[schemars(description = "Absolute path to the .xcstrings file")]
    pub file_path: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SupportedLanguagesResponse {
    pub source_language: String,
    pub supported_languages: Vec<String>,
    pub count: usize,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetTranslationsForKeyRequest {
    /// Catalog to inspect
    #[schemars(description = "Absolute path to the .xcstrings file")]
    pub file_path: String,

    /// Key to look up
    #[schemars(description = "The localization key to look up")]
    pub key: String,
}

/// Soft "no such key" result; a missing key is an expected case for a caller
/// exploring the catalog, not a tool fault.
#[derive(Debug, Serialize)]
pub struct KeyNotFoundResponse {
    pub error: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SearchKeysRequest {
    /// Catalog to search
    #[schemars(description = "Absolute path to the .xcstrings file")]
    pub file_path: String,

    /// Substring to match
    #[schemars(description = "Substring to search for in key names (case-insensitive)")]
    pub query: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchKeysResponse {
    pub query: String,
    pub matching_keys: Vec<String>,
    pub count: usize,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ListAllKeysRequest {
    /// Catalog to list
    #[schemars(description = "Absolute path to the .xcstrings file")]
    pub file_path: String,

    /// Page size (default: 100)
    #[schemars(description = "Maximum number of keys to return (default: 100)")]
    pub limit: Option<usize>,

    /// Pagination offset (default: 0)
    #[schemars(description = "Number of keys to skip (for pagination, default: 0)")]
    pub offset: Option<usize>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListAllKeysResponse {
    pub keys: Vec<String>,
    pub total: usize,
    pub offset: usize,
    pub limit: usize,
    pub has_more: bool,
}

/// Review state accepted on the wire; mirrors
/// [`xcstrings_catalog::TranslationState`] at the schema boundary.
#[derive(Debug, Clone, Copy, Deserialize, schemars::JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum TranslationStateArg {
    New,
    Translated,
    NeedsReview,
    Stale,
}

impl From<TranslationStateArg> for TranslationState {
    fn from(state: TranslationStateArg) -> Self {
        match state {
            TranslationStateArg::New => Self::New,
            TranslationStateArg::Translated => Self::Translated,
            TranslationStateArg::NeedsReview => Self::NeedsReview,
            TranslationStateArg::Stale => Self::Stale,
        }
    }
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct LanguageTranslationArg {
    /// Target language
    #[schemars(description = "Language code (e.g., \"en\", \"de\", \"no\", \"vi\")")]
    pub language: String,

    /// Translated text
    #[schemars(
        description = "The translated text. Preserve any format placeholders like %@, %lld, %d"
    )]
    pub value: String,

    /// Review state (default: translated)
    #[schemars(description = "Translation state (defaults to \"translated\")")]
    pub state: Option<TranslationStateArg>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct TranslationEntryArg {
    /// Key to create or update
    #[schemars(description = "The localization key")]
    pub key: String,

    /// Per-language values to set
    #[schemars(description = "Array of language translations")]
    pub translations: Vec<LanguageTranslationArg>,

    /// Comment overwriting the existing one when supplied
    #[schemars(description = "Optional comment describing the string context")]
    pub comment: Option<String>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTranslationsRequest {
    /// Catalog to modify
    #[schemars(description = "Absolute path to the .xcstrings file")]
    pub file_path: String,

    /// Upsert batch
    #[schemars(description = "Array of translation entries to add or update")]
    pub data: Vec<TranslationEntryArg>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTranslationsResponse {
    pub success: bool,
    pub updated_keys: Vec<String>,
    pub created_keys: Vec<String>,
    pub total_updated: usize,
    pub total_created: usize,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetCatalogStatisticsRequest {
    /// Catalog to inspect
    #[schemars(description = "Absolute path to the .xcstrings file")]
    pub file_path: String,
}
