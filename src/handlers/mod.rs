pub mod component_api;
pub mod list_categories;
pub mod resources;
pub mod search_docs;

use tracing::{debug, info};

use crate::protocol::{
    ComponentApiParams, InitializeParams, JsonRpcError, JsonRpcRequest, JsonRpcResponse,
    ListCategoriesParams, ReadResourceParams, SearchDocsParams, ToolCallParams, ToolResult,
};
use crate::schema;
use crate::server::ServerState;

/// Dispatch a JSON-RPC request to the appropriate handler.
///
/// Returns `None` for notifications (no response required).
pub async fn dispatch(req: &JsonRpcRequest, state: &ServerState) -> Option<JsonRpcResponse> {
    debug!(method = %req.method, "dispatching request");

    match req.method.as_str() {
        "initialize" => {
            if let Some(client) = req
                .params
                .as_ref()
                .and_then(|v| serde_json::from_value::<InitializeParams>(v.clone()).ok())
                .and_then(|p| p.client_info)
            {
                info!(
                    client = %client.name.unwrap_or_else(|| "unknown".into()),
                    version = %client.version.unwrap_or_else(|| "unknown".into()),
                    "client initialized"
                );
            }

            let result = serde_json::json!({
                "protocolVersion": "2024-11-05",
                "capabilities": {
                    "tools": {},
                    "resources": {}
                },
                "serverInfo": {
                    "name": "mcp-primevue-server",
                    "version": env!("CARGO_PKG_VERSION")
                }
            });
            Some(JsonRpcResponse::success(req.id.clone(), result))
        }

        "notifications/initialized" => None,

        "ping" => Some(JsonRpcResponse::success(req.id.clone(), serde_json::json!({}))),

        "tools/list" => {
            let result = serde_json::json!({
                "tools": [
                    {
                        "name": schema::TOOL_SEARCH_DOCS,
                        "description": "Search PrimeVue documentation by keyword across titles, content, and tags",
                        "inputSchema": schema::search_docs_schema()
                    },
                    {
                        "name": schema::TOOL_GET_COMPONENT_API,
                        "description": "Get the API section (props, events, slots) of one PrimeVue component",
                        "inputSchema": schema::component_api_schema()
                    },
                    {
                        "name": schema::TOOL_LIST_CATEGORIES,
                        "description": "List documentation categories with the titles they contain",
                        "inputSchema": schema::list_categories_schema()
                    }
                ]
            });
            Some(JsonRpcResponse::success(req.id.clone(), result))
        }

        "tools/call" => {
            let params: ToolCallParams = match &req.params {
                Some(v) => match serde_json::from_value(v.clone()) {
                    Ok(p) => p,
                    Err(e) => {
                        return Some(JsonRpcResponse::error(
                            req.id.clone(),
                            JsonRpcError::invalid_params(format!(
                                "Invalid tools/call params: {e}"
                            )),
                        ));
                    }
                },
                None => {
                    return Some(JsonRpcResponse::error(
                        req.id.clone(),
                        JsonRpcError::invalid_params("Missing params for tools/call"),
                    ));
                }
            };

            let tool_result = dispatch_tool_call(&params, state).await;
            let result_json = serde_json::to_value(&tool_result).expect("ToolResult must serialize to JSON Value");
            Some(JsonRpcResponse::success(req.id.clone(), result_json))
        }

        "resources/list" => {
            let result = resources::list(state).await;
            let result_json = serde_json::to_value(&result).expect("ListResourcesResult must serialize to JSON Value");
            Some(JsonRpcResponse::success(req.id.clone(), result_json))
        }

        "resources/read" => {
            let params: ReadResourceParams = match &req.params {
                Some(v) => match serde_json::from_value(v.clone()) {
                    Ok(p) => p,
                    Err(e) => {
                        return Some(JsonRpcResponse::error(
                            req.id.clone(),
                            JsonRpcError::invalid_params(format!(
                                "Invalid resources/read params: {e}"
                            )),
                        ));
                    }
                },
                None => {
                    return Some(JsonRpcResponse::error(
                        req.id.clone(),
                        JsonRpcError::invalid_params("Missing params for resources/read"),
                    ));
                }
            };

            match resources::read(params, state).await {
                Ok(result) => {
                    let result_json = serde_json::to_value(&result).expect("ReadResourceResult must serialize to JSON Value");
                    Some(JsonRpcResponse::success(req.id.clone(), result_json))
                }
                Err(err) => Some(JsonRpcResponse::error(req.id.clone(), err)),
            }
        }

        _ => Some(JsonRpcResponse::error(
            req.id.clone(),
            JsonRpcError::method_not_found(&req.method),
        )),
    }
}

/// Validate tool arguments against the advertised schema, then run the tool.
///
/// Failures stay inside the tool-result envelope (`isError: true`); only a
/// malformed `tools/call` frame itself is a JSON-RPC error, handled above.
async fn dispatch_tool_call(params: &ToolCallParams, state: &ServerState) -> ToolResult {
    info!(tool = %params.name, "executing tool call");
    let args = params.arguments.clone().unwrap_or_else(|| serde_json::json!({}));

    match params.name.as_str() {
        schema::TOOL_SEARCH_DOCS => {
            if let Err(detail) = state.schemas.validate_search_docs(&args) {
                return invalid_arguments(schema::TOOL_SEARCH_DOCS, &detail);
            }
            match serde_json::from_value::<SearchDocsParams>(args) {
                Ok(p) => search_docs::handle(p, state).await,
                Err(e) => invalid_arguments(schema::TOOL_SEARCH_DOCS, &e.to_string()),
            }
        }

        schema::TOOL_GET_COMPONENT_API => {
            if let Err(detail) = state.schemas.validate_component_api(&args) {
                return invalid_arguments(schema::TOOL_GET_COMPONENT_API, &detail);
            }
            match serde_json::from_value::<ComponentApiParams>(args) {
                Ok(p) => component_api::handle(p, state).await,
                Err(e) => invalid_arguments(schema::TOOL_GET_COMPONENT_API, &e.to_string()),
            }
        }

        schema::TOOL_LIST_CATEGORIES => {
            if let Err(detail) = state.schemas.validate_list_categories(&args) {
                return invalid_arguments(schema::TOOL_LIST_CATEGORIES, &detail);
            }
            match serde_json::from_value::<ListCategoriesParams>(args) {
                Ok(p) => list_categories::handle(p, state).await,
                Err(e) => invalid_arguments(schema::TOOL_LIST_CATEGORIES, &e.to_string()),
            }
        }

        _ => ToolResult::error(format!("Unknown tool: {}", params.name)),
    }
}

fn invalid_arguments(tool: &str, detail: &str) -> ToolResult {
    ToolResult::error(format!("Invalid arguments for {tool}: {detail}"))
}
