//! String Catalog MCP Server
//!
//! Lets AI agents read and edit Xcode String Catalog (.xcstrings) files via
//! the MCP protocol.
//!
//! ## Tools
//!
//! - `list_supported_languages` - Source language plus every translated language
//! - `list_all_keys` - Paginated, sorted key listing
//! - `search_keys` - Case-insensitive substring search over keys
//! - `get_translations_for_key` - Per-language values and review states for one key
//! - `update_translations` - Batched translation upserts, persisted to disk
//! - `get_catalog_statistics` - Per-language translation coverage
//!
//! ## Usage
//!
//! Add to your MCP client configuration:
//! ```json
//! {
//!   "mcpServers": {
//!     "string-catalog": {
//!       "command": "xcstrings-mcp"
//!     }
//!   }
//! }
//! ```

use anyhow::Result;
use rmcp::transport::stdio;
use rmcp::ServiceExt;

mod prompts;
mod tools;

use tools::StringCatalogService;

#[tokio::main]
async fn main() -> Result<()> {
    // Configure logging to stderr only (stdout is for MCP protocol)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .target(env_logger::Target::Stderr)
        .init();

    log::info!("Starting String Catalog MCP server");

    let service = StringCatalogService::new();
    let server = service.serve(stdio()).await?;

    // Wait for shutdown
    server.waiting().await?;

    log::info!("String Catalog MCP server stopped");
    Ok(())
}
