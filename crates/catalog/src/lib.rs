//! # xcstrings Catalog
//!
//! Read, query, and update access to Xcode String Catalog (`.xcstrings`) files.
//!
//! A string catalog is a JSON document mapping localization keys to their
//! per-language translations. This crate models that document and the
//! operations an editing workflow needs:
//!
//! - load a catalog from disk (whole-file parse, no partial recovery)
//! - query languages, keys, and per-key translations
//! - apply batched translation upserts
//! - write the catalog back with deterministic key ordering
//!
//! Every operation works on an in-memory [`StringCatalog`] constructed fresh
//! from disk; nothing is cached across calls and persistence only happens
//! through an explicit [`StringCatalog::save`].
//!
//! ## Example
//!
//! ```no_run
//! use xcstrings_catalog::{StringCatalog, TranslationInput, LanguageTranslation};
//!
//! let mut catalog = StringCatalog::load("Localizable.xcstrings")?;
//! let outcome = catalog.update_translations(&[TranslationInput {
//!     key: "welcome_message".into(),
//!     translations: vec![LanguageTranslation {
//!         language: "de".into(),
//!         value: "Willkommen".into(),
//!         state: None,
//!     }],
//!     comment: Some("Shown on the home screen".into()),
//! }]);
//! assert_eq!(outcome.created, vec!["welcome_message".to_string()]);
//! catalog.save()?;
//! # Ok::<(), xcstrings_catalog::CatalogError>(())
//! ```

mod catalog;
mod error;
mod model;

pub use catalog::{
    CatalogStatistics, KeyTranslation, KeyTranslations, LanguageCoverage, LanguageTranslation,
    StringCatalog, TranslationInput, UpdateOutcome,
};
pub use error::{CatalogError, Result};
pub use model::{
    CatalogDocument, ExtractionState, Localization, PluralVariations, StringEntry, StringUnit,
    TranslationState, VariantUnit, Variations,
};
