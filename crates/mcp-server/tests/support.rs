use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

pub fn locate_xcstrings_mcp_bin() -> Result<PathBuf> {
    if let Some(path) = option_env!("CARGO_BIN_EXE_xcstrings-mcp") {
        return Ok(PathBuf::from(path));
    }

    // Cargo doesn't always expose CARGO_BIN_EXE_* at runtime. Derive it from the test exe path:
    // `.../target/{debug|release}/deps/<test>` → `.../target/{debug|release}/xcstrings-mcp`
    if let Ok(exe) = std::env::current_exe() {
        if let Some(target_profile_dir) = exe.parent().and_then(|p| p.parent()) {
            let candidate = target_profile_dir.join("xcstrings-mcp");
            if candidate.exists() {
                return Ok(candidate);
            }
        }
    }

    let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let repo_root = manifest_dir
        .ancestors()
        .nth(2)
        .context("failed to resolve repo root from CARGO_MANIFEST_DIR")?;
    for rel in [
        "target/debug/xcstrings-mcp",
        "target/release/xcstrings-mcp",
    ] {
        let candidate = repo_root.join(rel);
        if candidate.exists() {
            return Ok(candidate);
        }
    }

    anyhow::bail!(
        "failed to locate xcstrings-mcp binary; build with: cargo build -p xcstrings-mcp"
    )
}

/// Five-key catalog covering plain units, an empty entry, and a plural
/// variation. Written as `Localizable.xcstrings` under `dir`.
pub fn write_sample_catalog(dir: &Path) -> Result<PathBuf> {
    let path = dir.join("Localizable.xcstrings");
    let document = serde_json::json!({
        "sourceLanguage": "en",
        "strings": {
            "farewell": {},
            "goodbye": {},
            "hi": {
                "localizations": {
                    "en": { "stringUnit": { "state": "translated", "value": "Hi %@" } }
                }
            },
            "items_count": {
                "localizations": {
                    "en": {
                        "variations": {
                            "plural": {
                                "one": { "stringUnit": { "state": "translated", "value": "%lld item" } },
                                "other": { "stringUnit": { "state": "translated", "value": "%lld items" } }
                            }
                        }
                    }
                }
            },
            "welcome_message": {
                "comment": "Home screen",
                "localizations": {
                    "en": { "stringUnit": { "state": "translated", "value": "Welcome" } },
                    "de": { "stringUnit": { "state": "needs_review", "value": "Willkommen" } }
                }
            }
        }
    });
    std::fs::write(&path, serde_json::to_string_pretty(&document)?).context("write catalog")?;
    Ok(path)
}
