use crate::protocol::{SearchDocsParams, ToolResult};
use crate::query;
use crate::server::ServerState;

/// Handle a `search_primevue_docs` tool call.
///
/// An empty result set is an ordinary answer with explanatory text, not a
/// tool error.
pub async fn handle(params: SearchDocsParams, state: &ServerState) -> ToolResult {
    let entries = query::search(&state.store, &params.query, params.component.as_deref());

    if entries.is_empty() {
        return ToolResult::text(format!("No results found for \"{}\".", params.query));
    }

    let mut out = format!("Found {} result(s) for \"{}\":\n", entries.len(), params.query);
    for entry in &entries {
        out.push_str(&format!("\n## {}\n**Category:** {}\n", entry.title, entry.category));
        if !entry.tags.is_empty() {
            out.push_str(&format!("**Tags:** {}\n", entry.tags.join(", ")));
        }
        out.push_str(&format!("**Resource:** {}\n\n{}\n", entry.uri, entry.snippet));
    }
    ToolResult::text(out)
}
