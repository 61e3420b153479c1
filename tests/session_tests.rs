//! Session-level tests: message framing, the initialization gate, and a
//! full handshake-to-query flow driven through `process_line`.

use std::fs;
use std::path::Path;

use mcp_primevue_server::protocol::RpcId;
use mcp_primevue_server::schema::ToolSchemas;
use mcp_primevue_server::server::{McpServer, ServerState};
use mcp_primevue_server::store::DocumentStore;

const INIT: &str =
    r#"{"jsonrpc":"2.0","id":1,"method":"initialize","params":{"protocolVersion":"2024-11-05"}}"#;

fn server_for(root: &Path) -> McpServer {
    let (store, _) = DocumentStore::load(root);
    McpServer::new(ServerState {
        store,
        schemas: ToolSchemas::compile().unwrap(),
    })
}

fn server_with_empty_corpus() -> McpServer {
    let tmp = tempfile::tempdir().unwrap();
    server_for(tmp.path())
}

// ---------------------------------------------------------------------------
// Framing
// ---------------------------------------------------------------------------

#[tokio::test]
async fn invalid_json_is_parse_error() {
    let mut server = server_with_empty_corpus();

    let resp = server.process_line("{this is not json").await.unwrap();
    assert!(resp.id.is_none(), "id is unrecoverable from a malformed frame");
    assert_eq!(resp.error.unwrap().code, -32700);
}

#[tokio::test]
async fn wrong_jsonrpc_version_is_invalid_request() {
    let mut server = server_with_empty_corpus();

    let resp = server
        .process_line(r#"{"jsonrpc":"1.0","id":3,"method":"ping"}"#)
        .await
        .unwrap();
    assert_eq!(resp.error.unwrap().code, -32600);
}

#[tokio::test]
async fn blank_lines_are_ignored() {
    let mut server = server_with_empty_corpus();

    assert!(server.process_line("   \n").await.is_none());
    assert!(server.process_line("\n").await.is_none());
}

#[tokio::test]
async fn string_ids_are_echoed_back() {
    let mut server = server_with_empty_corpus();

    let resp = server
        .process_line(r#"{"jsonrpc":"2.0","id":"req-abc","method":"initialize","params":{}}"#)
        .await
        .unwrap();
    assert_eq!(resp.id, Some(RpcId::Str("req-abc".into())));
}

// ---------------------------------------------------------------------------
// Initialization gate
// ---------------------------------------------------------------------------

#[tokio::test]
async fn requests_before_initialize_are_rejected() {
    let mut server = server_with_empty_corpus();

    let resp = server
        .process_line(r#"{"jsonrpc":"2.0","id":7,"method":"tools/list"}"#)
        .await
        .unwrap();
    let err = resp.error.unwrap();
    assert_eq!(err.code, -32600);
    assert_eq!(err.message, "Server not initialized");
}

#[tokio::test]
async fn idless_requests_before_initialize_are_dropped() {
    let mut server = server_with_empty_corpus();

    let resp = server
        .process_line(r#"{"jsonrpc":"2.0","method":"tools/list"}"#)
        .await;
    assert!(resp.is_none(), "pre-init requests without an id are dropped silently");
}

#[tokio::test]
async fn initialize_unlocks_dispatch() {
    let mut server = server_with_empty_corpus();

    let init = server.process_line(INIT).await.unwrap();
    assert!(init.error.is_none());
    assert!(init.result.is_some());

    let list = server
        .process_line(r#"{"jsonrpc":"2.0","id":2,"method":"tools/list"}"#)
        .await
        .unwrap();
    assert!(list.error.is_none());
    assert_eq!(list.result.unwrap()["tools"].as_array().unwrap().len(), 3);
}

// ---------------------------------------------------------------------------
// Full session flow
// ---------------------------------------------------------------------------

#[tokio::test]
async fn handshake_then_query_then_resource_read() {
    let tmp = tempfile::tempdir().unwrap();
    let doc = serde_json::json!({
        "id": "/primevue/components/button",
        "title": "button",
        "tags": ["component"],
        "content": {"type": "text/markdown", "value": "Button usage.\n### API\nprops: label"},
        "metadata": {
            "source": "https://primevue.org/button/",
            "file": "components/button.json",
            "created": "2025-01-15T10:00:00Z",
            "updated": "2025-02-01T12:30:00Z"
        }
    });
    fs::write(
        tmp.path().join("button.json"),
        serde_json::to_string(&doc).unwrap(),
    )
    .unwrap();
    let mut server = server_for(tmp.path());

    server.process_line(INIT).await.unwrap();
    assert!(server
        .process_line(r#"{"jsonrpc":"2.0","method":"notifications/initialized"}"#)
        .await
        .is_none());

    let ping = server
        .process_line(r#"{"jsonrpc":"2.0","id":2,"method":"ping"}"#)
        .await
        .unwrap();
    assert_eq!(ping.result.unwrap(), serde_json::json!({}));

    let call = server
        .process_line(
            r#"{"jsonrpc":"2.0","id":3,"method":"tools/call","params":{"name":"search_primevue_docs","arguments":{"query":"api"}}}"#,
        )
        .await
        .unwrap();
    let text = call.result.unwrap()["content"][0]["text"]
        .as_str()
        .unwrap()
        .to_string();
    assert!(text.contains("## button"));
    assert!(text.contains("### API"));

    let read = server
        .process_line(
            r#"{"jsonrpc":"2.0","id":4,"method":"resources/read","params":{"uri":"primevue://components/button"}}"#,
        )
        .await
        .unwrap();
    let body = read.result.unwrap()["contents"][0]["text"]
        .as_str()
        .unwrap()
        .to_string();
    assert_eq!(body, "Button usage.\n### API\nprops: label");
}
