use mcp_primevue_server::config::ServerConfig;
use mcp_primevue_server::schema::ToolSchemas;
use mcp_primevue_server::server::{McpServer, ServerState};
use mcp_primevue_server::store::DocumentStore;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Logs go to stderr; stdout carries only JSON-RPC frames.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = ServerConfig::from_args_and_env();

    let schemas = match ToolSchemas::compile() {
        Ok(s) => s,
        Err(e) => {
            eprintln!("mcp-primevue-server: schema error: {e}");
            std::process::exit(1);
        }
    };

    let (store, warnings) = DocumentStore::load(&config.corpus_root);
    for warning in &warnings {
        warn!(%warning, "skipping corpus entry");
    }
    info!(
        documents = store.len(),
        skipped = warnings.len(),
        root = %config.corpus_root.display(),
        "corpus loaded"
    );

    let mut server = McpServer::new(ServerState { store, schemas });
    if let Err(e) = server.run().await {
        eprintln!("mcp-primevue-server: fatal error: {e}");
        std::process::exit(1);
    }
}
