//! Catalog operations: load, query, batched upserts, save.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{CatalogError, Result};
use crate::model::{CatalogDocument, Localization, TranslationState};

/// One translation record for a key, as produced by
/// [`StringCatalog::translations_for_key`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeyTranslation {
    pub language: String,
    pub value: String,
    pub state: TranslationState,
}

/// All translations of one key, sorted by language code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyTranslations {
    pub key: String,
    pub source_language: String,
    pub translations: Vec<KeyTranslation>,
}

/// One language/value pair of an update batch entry.
#[derive(Debug, Clone, Deserialize)]
pub struct LanguageTranslation {
    pub language: String,
    pub value: String,
    /// Defaults to [`TranslationState::Translated`] when absent.
    #[serde(default)]
    pub state: Option<TranslationState>,
}

/// One upsert of an update batch: a key, its new per-language values, and an
/// optional comment.
#[derive(Debug, Clone, Deserialize)]
pub struct TranslationInput {
    pub key: String,
    pub translations: Vec<LanguageTranslation>,
    #[serde(default)]
    pub comment: Option<String>,
}

/// Keys touched by [`StringCatalog::update_translations`], partitioned by
/// whether the key existed before the batch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateOutcome {
    pub updated: Vec<String>,
    pub created: Vec<String>,
}

/// Translation coverage of one language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LanguageCoverage {
    pub translated: usize,
    pub total: usize,
    pub percentage: u32,
}

/// Aggregate catalog statistics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogStatistics {
    pub total_keys: usize,
    pub languages: Vec<String>,
    pub translation_coverage: BTreeMap<String, LanguageCoverage>,
}

/// An `.xcstrings` catalog held in memory, bound to the file it was loaded
/// from.
///
/// Mutations only touch the in-memory document; [`StringCatalog::save`]
/// rewrites the whole file in place. There is no locking: two concurrent
/// update+save sequences on the same path are last-write-wins.
#[derive(Debug, Clone)]
pub struct StringCatalog {
    path: PathBuf,
    data: CatalogDocument,
}

impl StringCatalog {
    /// Load a catalog from disk.
    ///
    /// The path is resolved to an absolute form so that a later
    /// [`save`](Self::save) is unaffected by working-directory changes.
    /// Fails with [`CatalogError::NotFound`] when no file exists and
    /// [`CatalogError::Parse`] when the content does not match the document
    /// schema; there is no partial recovery.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(CatalogError::NotFound {
                path: path.to_path_buf(),
            });
        }
        let path = path.canonicalize()?;
        let content = fs::read_to_string(&path)?;
        let data = serde_json::from_str(&content).map_err(|source| CatalogError::Parse {
            path: path.clone(),
            source,
        })?;
        log::debug!("loaded string catalog {}", path.display());
        Ok(Self { path, data })
    }

    /// Absolute path of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The catalog's declared source language code.
    #[must_use]
    pub fn source_language(&self) -> &str {
        &self.data.source_language
    }

    /// Every language code appearing anywhere in the catalog, source language
    /// included, sorted and deduplicated.
    #[must_use]
    pub fn supported_languages(&self) -> Vec<String> {
        let mut languages = BTreeSet::new();
        languages.insert(self.data.source_language.clone());
        for entry in self.data.strings.values() {
            if let Some(localizations) = &entry.localizations {
                languages.extend(localizations.keys().cloned());
            }
        }
        languages.into_iter().collect()
    }

    /// All keys, sorted lexicographically.
    #[must_use]
    pub fn all_keys(&self) -> Vec<String> {
        self.data.strings.keys().cloned().collect()
    }

    /// Translations of `key`, one record per localized language, sorted by
    /// language code.
    ///
    /// Returns `None` when the key does not exist. A key that exists with no
    /// usable localizations yields `Some` with an empty list; the two cases
    /// are distinct. A plural localization reduces to its representative form
    /// (`other` > `one` > `zero`) with the value prefixed `"[plural] "`.
    #[must_use]
    pub fn translations_for_key(&self, key: &str) -> Option<KeyTranslations> {
        let entry = self.data.strings.get(key)?;
        let mut translations = Vec::new();

        if let Some(localizations) = &entry.localizations {
            for (language, localization) in localizations {
                if let Some(unit) = &localization.string_unit {
                    translations.push(KeyTranslation {
                        language: language.clone(),
                        value: unit.value.clone(),
                        state: unit.state,
                    });
                } else if let Some(unit) = localization.plural_representative() {
                    translations.push(KeyTranslation {
                        language: language.clone(),
                        value: format!("[plural] {}", unit.value),
                        state: unit.state,
                    });
                }
            }
        }

        Some(KeyTranslations {
            key: key.to_string(),
            source_language: self.data.source_language.clone(),
            translations,
        })
    }

    /// Keys whose name contains `query`, case-insensitively, sorted.
    #[must_use]
    pub fn search_keys(&self, query: &str) -> Vec<String> {
        let query = query.to_lowercase();
        self.data
            .strings
            .keys()
            .filter(|key| key.to_lowercase().contains(&query))
            .cloned()
            .collect()
    }

    /// Apply an ordered batch of upserts.
    ///
    /// Missing keys are created as empty entries, existing keys are reused.
    /// A key is classified as created or updated exactly once per batch, at
    /// first touch. A supplied comment overwrites the existing one; absence
    /// leaves it untouched. Each language named in an entry has its
    /// localization replaced wholesale with a plain string unit (any prior
    /// plural or device variations for that language are discarded); missing
    /// state defaults to `translated`. Languages not named are never touched
    /// and keys are never removed.
    pub fn update_translations(&mut self, batch: &[TranslationInput]) -> UpdateOutcome {
        let mut outcome = UpdateOutcome::default();
        let mut seen: BTreeSet<&str> = BTreeSet::new();

        for input in batch {
            let is_new = !self.data.strings.contains_key(&input.key);
            if seen.insert(input.key.as_str()) {
                if is_new {
                    outcome.created.push(input.key.clone());
                } else {
                    outcome.updated.push(input.key.clone());
                }
            }

            let entry = self.data.strings.entry(input.key.clone()).or_default();
            if let Some(comment) = &input.comment {
                entry.comment = Some(comment.clone());
            }

            let localizations = entry.localizations.get_or_insert_with(BTreeMap::new);
            for translation in &input.translations {
                localizations.insert(
                    translation.language.clone(),
                    Localization::plain(
                        translation.value.clone(),
                        translation.state.unwrap_or(TranslationState::Translated),
                    ),
                );
            }
        }

        outcome
    }

    /// Per-language translation coverage across all supported languages.
    ///
    /// A key counts as translated for a language when its plain string unit
    /// is in state `translated`, or, for a plural localization, when the
    /// `other` form is. An empty catalog reports `0` percent everywhere.
    #[must_use]
    pub fn statistics(&self) -> CatalogStatistics {
        let languages = self.supported_languages();
        let total_keys = self.data.strings.len();

        let mut translation_coverage = BTreeMap::new();
        for language in &languages {
            let mut translated = 0usize;
            for entry in self.data.strings.values() {
                let Some(localization) = entry
                    .localizations
                    .as_ref()
                    .and_then(|localizations| localizations.get(language))
                else {
                    continue;
                };

                let mut is_translated = localization
                    .string_unit
                    .as_ref()
                    .is_some_and(|unit| unit.state == TranslationState::Translated);
                if !is_translated {
                    if let Some(plural) = localization
                        .variations
                        .as_ref()
                        .and_then(|variations| variations.plural.as_ref())
                    {
                        is_translated = plural.other.as_ref().is_some_and(|other| {
                            other.string_unit.state == TranslationState::Translated
                        });
                    }
                }
                if is_translated {
                    translated += 1;
                }
            }

            let percentage = if total_keys > 0 {
                ((translated as f64 / total_keys as f64) * 100.0).round() as u32
            } else {
                0
            };
            translation_coverage.insert(
                language.clone(),
                LanguageCoverage {
                    translated,
                    total: total_keys,
                    percentage,
                },
            );
        }

        CatalogStatistics {
            total_keys,
            languages,
            translation_coverage,
        }
    }

    /// Re-serialize the catalog over its backing file.
    ///
    /// Keys are emitted in lexicographic order, `version` only when it was
    /// present in the loaded document, pretty-printed with 2-space indent and
    /// a trailing newline. The file is overwritten in place; there is no
    /// atomic rename.
    pub fn save(&self) -> Result<()> {
        let mut payload =
            serde_json::to_string_pretty(&self.data).map_err(CatalogError::Serialize)?;
        payload.push('\n');
        fs::write(&self.path, payload)?;
        log::debug!("saved string catalog {}", self.path.display());
        Ok(())
    }
}
