//! Serde model of the `.xcstrings` document.
//!
//! Field names, enum string values, and nesting are a fixed on-disk contract
//! shared with Xcode; they must survive a load/save round-trip unchanged.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Review lifecycle of a single translated value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TranslationState {
    New,
    Translated,
    NeedsReview,
    Stale,
}

impl TranslationState {
    /// Wire spelling of the state
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::New => "new",
            Self::Translated => "translated",
            Self::NeedsReview => "needs_review",
            Self::Stale => "stale",
        }
    }
}

/// How a key entered the catalog. Preserved on round-trip, never interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExtractionState {
    Manual,
    ExtractedWithValue,
    Stale,
}

/// A single literal translated value plus its review state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StringUnit {
    pub state: TranslationState,
    pub value: String,
}

/// Wrapper for one variation slot: `{ "stringUnit": { ... } }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VariantUnit {
    pub string_unit: StringUnit,
}

/// Plural category slots for one language.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PluralVariations {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zero: Option<VariantUnit>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub one: Option<VariantUnit>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub two: Option<VariantUnit>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub few: Option<VariantUnit>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub many: Option<VariantUnit>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub other: Option<VariantUnit>,
}

/// Plural or device-specific forms for one language.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Variations {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plural: Option<PluralVariations>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device: Option<BTreeMap<String, VariantUnit>>,
}

/// Per-language translated content for one key.
///
/// At most one of `string_unit` / `variations` is populated in a well-formed
/// catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Localization {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub string_unit: Option<StringUnit>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variations: Option<Variations>,
}

impl Localization {
    /// Plain localization carrying `value` in review state `state`.
    #[must_use]
    pub fn plain(value: impl Into<String>, state: TranslationState) -> Self {
        Self {
            string_unit: Some(StringUnit {
                state,
                value: value.into(),
            }),
            variations: None,
        }
    }

    /// Representative plural form for display: `other`, else `one`, else `zero`.
    #[must_use]
    pub fn plural_representative(&self) -> Option<&StringUnit> {
        let plural = self.variations.as_ref()?.plural.as_ref()?;
        plural
            .other
            .as_ref()
            .or(plural.one.as_ref())
            .or(plural.zero.as_ref())
            .map(|variant| &variant.string_unit)
    }
}

/// One translatable string: optional comment, extraction state, and the
/// per-language localizations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StringEntry {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extraction_state: Option<ExtractionState>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub localizations: Option<BTreeMap<String, Localization>>,
}

/// Root of an `.xcstrings` document.
///
/// `strings` lives in a `BTreeMap` so every serialization emits keys in
/// lexicographic order. Field declaration order fixes the serialized layout:
/// `sourceLanguage` first, `version` last and only when present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogDocument {
    pub source_language: String,
    pub strings: BTreeMap<String, StringEntry>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}
