//! Workflow prompts for translation and review flows.
//!
//! Pure text generators: they reference tool names in their guidance but have
//! no dependency on the catalog model.

use rmcp::model::{
    GetPromptResult, JsonObject, Prompt, PromptArgument, PromptMessage, PromptMessageRole,
};
use rmcp::ErrorData as McpError;

/// Prompt metadata advertised via `prompts/list`.
pub fn all() -> Vec<Prompt> {
    vec![
        Prompt::new(
            "translate-strings",
            Some(
                "Generate translations for iOS string catalog keys. Provides guidance on format \
                 placeholders and returns structured JSON for the update_translations tool.",
            ),
            Some(vec![
                argument(
                    "keys",
                    "Comma-separated list of keys to translate (e.g., \"hello_world,goodbye,welcome_message\")",
                    true,
                ),
                argument("sourceLanguage", "Source language code (default: en)", false),
                argument(
                    "targetLanguages",
                    "Comma-separated list of target language codes (e.g., \"de,fr,ja,zh-Hans\")",
                    true,
                ),
                argument(
                    "context",
                    "Optional context about where these strings are used in the app",
                    false,
                ),
            ]),
        ),
        Prompt::new(
            "review-translations",
            Some(
                "Review existing translations for quality, consistency, and proper placeholder \
                 usage.",
            ),
            Some(vec![
                argument("filePath", "Absolute path to the .xcstrings file", true),
                argument(
                    "languages",
                    "Comma-separated list of language codes to review (default: all)",
                    false,
                ),
                argument(
                    "focusAreas",
                    "Comma-separated areas to focus on (e.g., \"placeholders,consistency,tone\")",
                    false,
                ),
            ]),
        ),
        Prompt::new(
            "batch-translate",
            Some("Translate all untranslated or stale strings in a catalog for specified languages."),
            Some(vec![
                argument("filePath", "Absolute path to the .xcstrings file", true),
                argument(
                    "targetLanguages",
                    "Comma-separated list of target language codes (e.g., \"de,fr,ja\")",
                    true,
                ),
                argument(
                    "includeStale",
                    "Whether to re-translate stale entries (default: false)",
                    false,
                ),
                argument(
                    "batchSize",
                    "Number of keys to translate per batch (default: 20)",
                    false,
                ),
            ]),
        ),
    ]
}

/// Render one prompt by name; unknown names are a protocol-level error.
pub fn get(name: &str, arguments: Option<&JsonObject>) -> Result<GetPromptResult, McpError> {
    match name {
        "translate-strings" => {
            let keys = string_arg(arguments, "keys").unwrap_or_default();
            let source_language = string_arg(arguments, "sourceLanguage").unwrap_or("en");
            let target_languages = string_arg(arguments, "targetLanguages").unwrap_or_default();
            let context = string_arg(arguments, "context");
            Ok(prompt_result(
                "Translation request for string catalog keys",
                translate_strings_text(keys, source_language, target_languages, context),
            ))
        }
        "review-translations" => {
            let file_path = string_arg(arguments, "filePath").unwrap_or_default();
            let languages = string_arg(arguments, "languages");
            let focus_areas = string_arg(arguments, "focusAreas");
            Ok(prompt_result(
                "Translation review request",
                review_translations_text(file_path, languages, focus_areas),
            ))
        }
        "batch-translate" => {
            let file_path = string_arg(arguments, "filePath").unwrap_or_default();
            let target_languages = string_arg(arguments, "targetLanguages").unwrap_or_default();
            let include_stale = bool_arg(arguments, "includeStale").unwrap_or(false);
            let batch_size = usize_arg(arguments, "batchSize").unwrap_or(20);
            Ok(prompt_result(
                "Batch translation workflow",
                batch_translate_text(file_path, target_languages, include_stale, batch_size),
            ))
        }
        _ => Err(McpError::invalid_params(
            format!("unknown prompt: {name}"),
            None,
        )),
    }
}

fn argument(name: &str, description: &str, required: bool) -> PromptArgument {
    PromptArgument {
        name: name.to_string(),
        title: None,
        description: Some(description.to_string()),
        required: Some(required),
    }
}

fn prompt_result(description: &str, text: String) -> GetPromptResult {
    GetPromptResult {
        description: Some(description.to_string()),
        messages: vec![PromptMessage::new_text(PromptMessageRole::User, text)],
    }
}

fn string_arg<'a>(arguments: Option<&'a JsonObject>, name: &str) -> Option<&'a str> {
    arguments?.get(name)?.as_str()
}

fn bool_arg(arguments: Option<&JsonObject>, name: &str) -> Option<bool> {
    let value = arguments?.get(name)?;
    value.as_bool().or_else(|| value.as_str()?.parse().ok())
}

fn usize_arg(arguments: Option<&JsonObject>, name: &str) -> Option<usize> {
    let value = arguments?.get(name)?;
    value
        .as_u64()
        .map(|v| v as usize)
        .or_else(|| value.as_str()?.parse().ok())
}

fn split_csv(raw: &str) -> Vec<&str> {
    raw.split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect()
}

fn bulleted(items: &[&str]) -> String {
    items
        .iter()
        .map(|item| format!("- {item}"))
        .collect::<Vec<_>>()
        .join("\n")
}

fn bulleted_quoted(items: &[&str]) -> String {
    items
        .iter()
        .map(|item| format!("- \"{item}\""))
        .collect::<Vec<_>>()
        .join("\n")
}

const PLACEHOLDER_GUIDE: &str = r#"## iOS Format Placeholders
When translating, preserve these iOS format placeholders exactly as they appear:
- `%@` - String placeholder (objects)
- `%d` or `%lld` - Integer placeholder
- `%f` - Floating point number placeholder
- `%1$@`, `%2$@` - Positional arguments (order CAN be changed to fit natural language grammar)
"#;

const UPDATE_PAYLOAD_EXAMPLE: &str = r#"```json
{
    "data": [
        {
            "key": "key_name",
            "translations": [
                { "language": "en", "value": "English text" },
                { "language": "de", "value": "German text" },
                { "language": "fr", "value": "French text" }
            ],
            "comment": "Optional: describe where this string is used"
        }
    ]
}
```
"#;

fn translate_strings_text(
    keys: &str,
    source_language: &str,
    target_languages: &str,
    context: Option<&str>,
) -> String {
    let context_section = context
        .map(|context| format!("\n## Context\nThese strings are used in: {context}\n"))
        .unwrap_or_default();

    let mut text = format!(
        "# Translation Request for iOS String Catalog\n\n## Keys to Translate\n{}\n\n## Source Language\n{}\n\n## Target Languages\n{}\n{}\n",
        bulleted_quoted(&split_csv(keys)),
        source_language,
        bulleted(&split_csv(target_languages)),
        context_section,
    );
    text.push_str(PLACEHOLDER_GUIDE);
    text.push_str(
        r#"
## Example
If source is: "Hello %@, you have %lld items"
German could be: "Hallo %@, Sie haben %lld Artikel"
Japanese could be: "%@さん、%lld個のアイテムがあります"

## Instructions
1. Translate each key into all target languages
2. Preserve all format placeholders
3. Ensure translations sound natural in each language
4. Consider cultural context and localization best practices

## Required Output Format
Return the translations as JSON that can be used with the `update_translations` tool:

"#,
    );
    text.push_str(UPDATE_PAYLOAD_EXAMPLE);
    text.push_str("\nPlease translate the keys now.");
    text
}

fn review_translations_text(
    file_path: &str,
    languages: Option<&str>,
    focus_areas: Option<&str>,
) -> String {
    let language_section = match languages {
        Some(languages) => format!(
            "\n## Languages to Review\n{}\n",
            bulleted(&split_csv(languages))
        ),
        None => "\n## Languages to Review\nAll available languages in the catalog.\n".to_string(),
    };
    let focus_section = focus_areas
        .map(|areas| format!("\n## Focus Areas\n{}\n", bulleted(&split_csv(areas))))
        .unwrap_or_default();

    let mut text = format!(
        "# Translation Review Request\n\n## String Catalog File\n{file_path}\n{language_section}{focus_section}"
    );
    text.push_str(
        r#"
## Review Checklist

### 1. Format Placeholder Verification
- Ensure all `%@`, `%d`, `%lld`, `%f` placeholders are preserved
- Verify positional arguments (`%1$@`, `%2$@`) are used correctly
- Check that placeholder count matches the source string

### 2. Translation Quality
- Verify translations are accurate and natural-sounding
- Check for grammatical errors
- Ensure translations fit the context of a mobile app UI

### 3. Consistency
- Similar strings should have consistent translations
- Terminology should be uniform across the app
- UI element names should match platform conventions

### 4. Cultural Appropriateness
- Verify idioms are properly localized
- Check for culturally sensitive content
- Ensure date/number formats are appropriate

### 5. Length Considerations
- Flag translations that are significantly longer than source
- Consider UI space constraints for mobile apps

## Instructions
1. Use the `get_catalog_statistics` tool to see overall translation coverage
2. Use the `list_all_keys` tool to see available keys
3. Use the `get_translations_for_key` tool to examine specific translations
4. Report any issues found with specific keys and languages
5. Suggest corrections using the `update_translations` tool format

## Output Format
Provide a structured review report:
- Summary of findings
- List of issues by severity (critical, warning, suggestion)
- Recommended fixes in JSON format for the update_translations tool"#,
    );
    text
}

fn batch_translate_text(
    file_path: &str,
    target_languages: &str,
    include_stale: bool,
    batch_size: usize,
) -> String {
    let stale_line = if include_stale {
        "\n- Keys with stale translations that need updating"
    } else {
        ""
    };

    let mut text = format!(
        "# Batch Translation Request\n\n## String Catalog File\n{file_path}\n\n## Target Languages\n{}\n\n## Options\n- Include stale translations: {}\n- Batch size: {batch_size} keys per batch\n",
        bulleted(&split_csv(target_languages)),
        if include_stale { "Yes" } else { "No" },
    );
    text.push_str(&format!(
        r#"
## Workflow

### Step 1: Analyze the Catalog
Use `get_catalog_statistics` to understand the current translation coverage.

### Step 2: Identify Keys Needing Translation
Use `search_keys` or `list_all_keys` to find:
- Keys with missing translations for target languages{stale_line}

### Step 3: Translate in Batches
For each batch of up to {batch_size} keys:
1. Get the source text using `get_translations_for_key`
2. Translate to all target languages
3. Prepare the JSON payload for `update_translations`

"#,
    ));
    text.push_str(PLACEHOLDER_GUIDE);
    text.push_str(
        r#"
## Output Format
For each batch, provide:

```json
{
    "data": [
        {
            "key": "key_name",
            "translations": [
                { "language": "de", "value": "German translation" },
                { "language": "fr", "value": "French translation" }
            ]
        }
    ]
}
```

## Instructions
1. Start by analyzing the catalog
2. Identify which keys need translation
3. Process keys in batches
4. After each batch, use `update_translations` to save
5. Report progress after each batch

Begin the batch translation process now."#,
    );
    text
}
