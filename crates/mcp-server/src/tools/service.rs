//! Tool dispatch for the string catalog service.

use rmcp::handler::server::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{
    CallToolResult, Content, GetPromptRequestParam, GetPromptResult, Implementation,
    ListPromptsResult, PaginatedRequestParam, ServerCapabilities, ServerInfo,
};
use rmcp::service::{RequestContext, RoleServer};
use rmcp::{tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler};
use serde::Serialize;
use xcstrings_catalog::{LanguageTranslation, StringCatalog, TranslationInput};

use super::schemas::{
    GetCatalogStatisticsRequest, GetTranslationsForKeyRequest, KeyNotFoundResponse,
    ListAllKeysRequest, ListAllKeysResponse, ListSupportedLanguagesRequest, SearchKeysRequest,
    SearchKeysResponse, SupportedLanguagesResponse, UpdateTranslationsRequest,
    UpdateTranslationsResponse,
};
use crate::prompts;

/// String Catalog MCP Service
#[derive(Clone)]
pub struct StringCatalogService {
    /// Tool router
    tool_router: ToolRouter<Self>,
}

impl StringCatalogService {
    pub fn new() -> Self {
        Self {
            tool_router: Self::tool_router(),
        }
    }
}

/// Success payload: the value pretty-printed as JSON text content.
fn json_result<T: Serialize>(value: &T) -> CallToolResult {
    CallToolResult::success(vec![Content::text(
        serde_json::to_string_pretty(value).unwrap_or_default(),
    )])
}

/// Failure payload surfaced to the calling agent, never a protocol fault.
fn error_result(error: impl std::fmt::Display) -> CallToolResult {
    CallToolResult::error(vec![Content::text(format!("Error: {error}"))])
}

#[tool_router]
impl StringCatalogService {
    /// Languages present anywhere in the catalog
    #[tool(
        description = "List all supported languages in a given Xcode String Catalog (.xcstrings) file. Returns the source language and all languages that have translations."
    )]
    pub async fn list_supported_languages(
        &self,
        Parameters(request): Parameters<ListSupportedLanguagesRequest>,
    ) -> Result<CallToolResult, McpError> {
        let catalog = match StringCatalog::load(&request.file_path) {
            Ok(catalog) => catalog,
            Err(e) => return Ok(error_result(e)),
        };

        let supported_languages = catalog.supported_languages();
        Ok(json_result(&SupportedLanguagesResponse {
            source_language: catalog.source_language().to_string(),
            count: supported_languages.len(),
            supported_languages,
        }))
    }

    /// Per-language translations of one key
    #[tool(
        description = "Get all translations for a specific key in a String Catalog. Shows the translated text in each supported language along with the translation state."
    )]
    pub async fn get_translations_for_key(
        &self,
        Parameters(request): Parameters<GetTranslationsForKeyRequest>,
    ) -> Result<CallToolResult, McpError> {
        let catalog = match StringCatalog::load(&request.file_path) {
            Ok(catalog) => catalog,
            Err(e) => return Ok(error_result(e)),
        };

        match catalog.translations_for_key(&request.key) {
            Some(result) => Ok(json_result(&result)),
            // Missing key is a soft result the agent can react to.
            None => Ok(json_result(&KeyNotFoundResponse {
                error: format!("Key \"{}\" not found in catalog", request.key),
            })),
        }
    }

    /// Substring search over keys
    #[tool(
        description = "Search for localization keys containing a specific substring. Useful for finding keys when you only know part of the key name."
    )]
    pub async fn search_keys(
        &self,
        Parameters(request): Parameters<SearchKeysRequest>,
    ) -> Result<CallToolResult, McpError> {
        let catalog = match StringCatalog::load(&request.file_path) {
            Ok(catalog) => catalog,
            Err(e) => return Ok(error_result(e)),
        };

        let matching_keys = catalog.search_keys(&request.query);
        Ok(json_result(&SearchKeysResponse {
            query: request.query,
            count: matching_keys.len(),
            matching_keys,
        }))
    }

    /// Paginated key listing
    #[tool(
        description = "List all localization keys in a String Catalog. Returns keys sorted alphabetically."
    )]
    pub async fn list_all_keys(
        &self,
        Parameters(request): Parameters<ListAllKeysRequest>,
    ) -> Result<CallToolResult, McpError> {
        let limit = request.limit.unwrap_or(100);
        let offset = request.offset.unwrap_or(0);

        let catalog = match StringCatalog::load(&request.file_path) {
            Ok(catalog) => catalog,
            Err(e) => return Ok(error_result(e)),
        };

        let all_keys = catalog.all_keys();
        let total = all_keys.len();
        let keys: Vec<String> = all_keys.into_iter().skip(offset).take(limit).collect();

        Ok(json_result(&ListAllKeysResponse {
            keys,
            total,
            offset,
            limit,
            has_more: offset.saturating_add(limit) < total,
        }))
    }

    /// Batched translation upserts, persisted to disk
    #[tool(
        description = "Update or add translations to a String Catalog. Accepts an array of translation entries.\n\nIMPORTANT: iOS strings support format placeholders that must be preserved in translations:\n- %@ for strings (objects)\n- %d or %lld for integers\n- %f for floating point numbers\n- %1$@, %2$@ etc. for positional arguments (order can be changed in translations)"
    )]
    pub async fn update_translations(
        &self,
        Parameters(request): Parameters<UpdateTranslationsRequest>,
    ) -> Result<CallToolResult, McpError> {
        let mut catalog = match StringCatalog::load(&request.file_path) {
            Ok(catalog) => catalog,
            Err(e) => return Ok(error_result(e)),
        };

        let batch: Vec<TranslationInput> = request
            .data
            .into_iter()
            .map(|entry| TranslationInput {
                key: entry.key,
                translations: entry
                    .translations
                    .into_iter()
                    .map(|translation| LanguageTranslation {
                        language: translation.language,
                        value: translation.value,
                        state: translation.state.map(Into::into),
                    })
                    .collect(),
                comment: entry.comment,
            })
            .collect();

        let outcome = catalog.update_translations(&batch);
        if let Err(e) = catalog.save() {
            return Ok(error_result(e));
        }

        Ok(json_result(&UpdateTranslationsResponse {
            success: true,
            total_updated: outcome.updated.len(),
            total_created: outcome.created.len(),
            updated_keys: outcome.updated,
            created_keys: outcome.created,
        }))
    }

    /// Translation coverage per language
    #[tool(
        description = "Get statistics about a String Catalog including total keys, supported languages, and translation coverage percentage for each language."
    )]
    pub async fn get_catalog_statistics(
        &self,
        Parameters(request): Parameters<GetCatalogStatisticsRequest>,
    ) -> Result<CallToolResult, McpError> {
        let catalog = match StringCatalog::load(&request.file_path) {
            Ok(catalog) => catalog,
            Err(e) => return Ok(error_result(e)),
        };

        Ok(json_result(&catalog.statistics()))
    }
}

#[tool_handler]
impl ServerHandler for StringCatalogService {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some("String Catalog lets you read and edit Xcode .xcstrings localization files. Use 'list_supported_languages' and 'get_catalog_statistics' to assess a catalog, 'list_all_keys' and 'search_keys' to find keys, 'get_translations_for_key' to inspect one key, and 'update_translations' to write new translations back to disk.".into()),
            capabilities: ServerCapabilities::builder()
                .enable_tools()
                .enable_prompts()
                .build(),
            server_info: Implementation::from_build_env(),
            ..Default::default()
        }
    }

    #[allow(clippy::manual_async_fn)]
    fn list_prompts(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> impl std::future::Future<Output = Result<ListPromptsResult, McpError>> + Send + '_ {
        async move {
            Ok(ListPromptsResult {
                next_cursor: None,
                prompts: prompts::all(),
            })
        }
    }

    #[allow(clippy::manual_async_fn)]
    fn get_prompt(
        &self,
        request: GetPromptRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> impl std::future::Future<Output = Result<GetPromptResult, McpError>> + Send + '_ {
        async move { prompts::get(&request.name, request.arguments.as_ref()) }
    }
}
