use crate::protocol::{ComponentApiParams, ToolResult};
use crate::query;
use crate::server::ServerState;

/// Handle a `get_component_api` tool call.
///
/// An unknown component still answers successfully, with a grouped listing
/// of every known title for the client to pick from.
pub async fn handle(params: ComponentApiParams, state: &ServerState) -> ToolResult {
    ToolResult::text(query::component_api(&state.store, &params.component))
}
