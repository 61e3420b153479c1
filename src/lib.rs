//! MCP server for PrimeVue documentation.
//!
//! Loads a JSON corpus of scraped documentation pages into memory and
//! exposes `search_primevue_docs`, `get_component_api`, and
//! `list_categories` tools over JSON-RPC 2.0 stdio transport, compatible
//! with any MCP-aware AI agent. Each page is also addressable as a
//! `primevue://{docPath}` resource.

pub mod config;
pub mod handlers;
pub mod protocol;
pub mod query;
pub mod schema;
pub mod server;
pub mod store;
