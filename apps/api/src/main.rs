mod chat;
mod config;
mod errors;
mod feedback;
mod llm_client;
mod resolver;
mod retrieval;
mod routes;
mod rules;
mod session;
mod state;

use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{bail, Result};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::feedback::FeedbackSink;
use crate::llm_client::OpenAiClient;
use crate::resolver::Resolver;
use crate::retrieval::corpus::load_corpus;
use crate::retrieval::generator::GroundedGenerator;
use crate::retrieval::index::{IndexRetriever, VectorIndex, DEFAULT_TOP_K};
use crate::routes::build_router;
use crate::rules::answers::default_registry;
use crate::session::SessionStore;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            // Tracing targets use the crate name with underscores.
            EnvFilter::new(format!("portfolio_api={}", &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Portfolio API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize OpenAI client (chat + embeddings)
    let openai = Arc::new(OpenAiClient::new(config.openai_api_key.clone()));
    info!(
        "OpenAI client initialized (chat: {}, embeddings: {})",
        llm_client::CHAT_MODEL,
        llm_client::EMBEDDING_MODEL
    );

    // Build or load the knowledge index before accepting traffic. A missing
    // or empty corpus aborts startup here instead of serving an empty index.
    let index = Arc::new(build_or_load_index(&config, &openai).await?);
    info!("Knowledge index ready ({} chunks)", index.len());

    // Wire the resolver: ordered rule registry plus injected retrieval seams
    let retriever = Arc::new(IndexRetriever::new(index, Arc::clone(&openai)));
    let generator = Arc::new(GroundedGenerator::new(Arc::clone(&openai)));
    let resolver = Arc::new(Resolver::new(
        default_registry(),
        retriever,
        generator,
        DEFAULT_TOP_K,
    ));

    // Build app state
    let state = AppState {
        resolver,
        sessions: Arc::new(SessionStore::new()),
        feedback: Arc::new(FeedbackSink::new(PathBuf::from(&config.feedback_log))),
        config: config.clone(),
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: tighten CORS in production

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Loads the persisted index if one exists, otherwise builds it from the
/// corpus and persists the result for subsequent starts.
async fn build_or_load_index(config: &Config, openai: &Arc<OpenAiClient>) -> Result<VectorIndex> {
    let index_path = Path::new(&config.vector_dir).join("index.json");

    let index = if index_path.exists() {
        info!("Loading knowledge index from {}", index_path.display());
        VectorIndex::load(&index_path)?
    } else {
        info!("No persisted index; building from '{}'", config.knowledge_dir);
        let documents = load_corpus(Path::new(&config.knowledge_dir))?;
        let index = VectorIndex::build(&documents, openai).await?;

        std::fs::create_dir_all(&config.vector_dir)?;
        index.persist(&index_path)?;
        info!("Persisted new index to {}", index_path.display());
        index
    };

    if index.is_empty() {
        bail!("knowledge index is empty; refusing to serve");
    }
    Ok(index)
}
