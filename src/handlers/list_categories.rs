use crate::protocol::{ListCategoriesParams, ToolResult};
use crate::query;
use crate::server::ServerState;

/// Handle a `list_categories` tool call.
pub async fn handle(params: ListCategoriesParams, state: &ServerState) -> ToolResult {
    ToolResult::text(query::list_categories(
        &state.store,
        params.category.as_deref(),
    ))
}
