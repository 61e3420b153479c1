use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::warn;

use crate::handlers;
use crate::protocol::{JsonRpcError, JsonRpcRequest, JsonRpcResponse};
use crate::schema::ToolSchemas;
use crate::store::DocumentStore;

/// Maximum bytes per JSON-RPC message (1 MiB).
const MAX_MESSAGE_BYTES: usize = 1024 * 1024;

/// Everything the handlers read: the loaded corpus and the compiled tool
/// argument validators. Built once before the first request and never
/// mutated afterwards.
pub struct ServerState {
    pub store: DocumentStore,
    pub schemas: ToolSchemas,
}

/// MCP server that communicates over stdio using newline-delimited JSON-RPC 2.0.
pub struct McpServer {
    state: ServerState,
    initialized: bool,
}

impl McpServer {
    pub fn new(state: ServerState) -> Self {
        Self {
            state,
            initialized: false,
        }
    }

    pub async fn run(&mut self) -> Result<(), Box<dyn std::error::Error>> {
        let stdin = tokio::io::stdin();
        let mut stdout = tokio::io::stdout();
        let mut reader = BufReader::new(stdin);
        let mut raw = Vec::new();

        loop {
            raw.clear();
            let n = reader.read_until(b'\n', &mut raw).await?;
            if n == 0 {
                break;
            }

            if n > MAX_MESSAGE_BYTES {
                warn!(bytes = n, limit = MAX_MESSAGE_BYTES, "message too large");
                write_response(
                    &mut stdout,
                    &JsonRpcResponse::error(None, JsonRpcError::parse_error()),
                ).await?;
                continue;
            }

            let line = match std::str::from_utf8(&raw) {
                Ok(s) => s,
                Err(_) => {
                    write_response(
                        &mut stdout,
                        &JsonRpcResponse::error(None, JsonRpcError::parse_error()),
                    ).await?;
                    continue;
                }
            };

            if let Some(resp) = self.process_line(line).await {
                write_response(&mut stdout, &resp).await?;
            }
        }

        Ok(())
    }

    /// Handle one newline-delimited JSON-RPC message.
    ///
    /// `None` means nothing is written back: blank lines, notifications,
    /// and id-less requests dropped by the initialization gate.
    pub async fn process_line(&mut self, line: &str) -> Option<JsonRpcResponse> {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return None;
        }

        let req: JsonRpcRequest = match serde_json::from_str(trimmed) {
            Ok(r) => r,
            Err(e) => {
                warn!(error = %e, "parse error");
                return Some(JsonRpcResponse::error(None, JsonRpcError::parse_error()));
            }
        };

        // Validate jsonrpc version
        if req.jsonrpc != "2.0" {
            return Some(JsonRpcResponse::error(
                req.id.clone(),
                JsonRpcError::invalid_request(),
            ));
        }

        // Initialization gate: only `initialize` is allowed before handshake completes
        if !self.initialized && req.method != "initialize" {
            if req.id.is_none() {
                return None;
            }
            return Some(JsonRpcResponse::error(
                req.id.clone(),
                JsonRpcError::invalid_request_with("Server not initialized"),
            ));
        }

        let resp = handlers::dispatch(&req, &self.state).await;

        if req.method == "initialize" {
            self.initialized = true;
        }

        resp
    }
}

async fn write_response(
    stdout: &mut tokio::io::Stdout,
    resp: &JsonRpcResponse,
) -> Result<(), Box<dyn std::error::Error>> {
    let out = serde_json::to_string(resp)?;
    stdout.write_all(out.as_bytes()).await?;
    stdout.write_all(b"\n").await?;
    stdout.flush().await?;
    Ok(())
}
