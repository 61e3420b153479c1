use tracing::debug;

use crate::protocol::{
    JsonRpcError, ListResourcesResult, ReadResourceParams, ReadResourceResult, Resource,
    ResourceContent,
};
use crate::server::ServerState;
use crate::store::{doc_id_for_path, RESOURCE_URI_PREFIX};

/// Handle `resources/list`: one entry per loaded document, in id order.
pub async fn list(state: &ServerState) -> ListResourcesResult {
    let resources = state
        .store
        .iter()
        .map(|doc| Resource {
            uri: doc.resource_uri(),
            name: doc.title.clone(),
            description: Some(format!("PrimeVue {} page: {}", doc.category(), doc.title)),
            mime_type: Some(doc.content.kind.clone()),
        })
        .collect();

    ListResourcesResult {
        resources,
        next_cursor: None,
    }
}

/// Handle `resources/read`: resolve a `primevue://{docPath}` URI to the raw
/// document body.
///
/// A URI outside the primevue scheme is an argument error. A well-formed
/// URI naming no document is the one hard not-found the server surfaces;
/// resource resolution has no listing fallback.
pub async fn read(
    params: ReadResourceParams,
    state: &ServerState,
) -> Result<ReadResourceResult, JsonRpcError> {
    debug!(uri = %params.uri, "reading resource");

    let doc_path = params.uri.strip_prefix(RESOURCE_URI_PREFIX).ok_or_else(|| {
        JsonRpcError::invalid_params(format!("Unsupported resource URI: {}", params.uri))
    })?;

    let doc = state
        .store
        .get(&doc_id_for_path(doc_path))
        .ok_or_else(|| JsonRpcError::resource_not_found(&params.uri))?;

    Ok(ReadResourceResult {
        contents: vec![ResourceContent {
            uri: params.uri,
            mime_type: Some(doc.content.kind.clone()),
            text: doc.content.value.clone(),
        }],
    })
}
