//! String catalog MCP tool surface.
//!
//! Schemas and dispatch are split so the wire contract stays reviewable next
//! to the per-tool implementations.

mod schemas;
mod service;

pub use service::StringCatalogService;
