//! A2A HTTP server.
//!
//! Exposes the registered agent at `POST /a2a/agent/{agent_id}` plus a
//! health probe.

use crate::a2a::{handle_agent_request, AgentRegistry};
use crate::agent::{Agent, OpenAiRunner, ToolContext};
use crate::cli::Output;
use crate::config::Settings;
use crate::facts::FactProvider;
use crate::memory::{ConversationMemory, SqliteMemory};
use axum::{
    extract::{Path, State},
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tracing::info;

/// Shared application state.
struct AppState {
    registry: AgentRegistry,
}

/// Run the A2A HTTP server.
pub async fn run_serve(host: &str, port: u16, settings: Settings) -> anyhow::Result<()> {
    let provider = Arc::new(FactProvider::new(&settings.facts));
    let runner = OpenAiRunner::new(ToolContext::new(provider), &settings.agent.model)
        .with_max_iterations(settings.agent.max_iterations);

    let memory: Arc<dyn ConversationMemory> = match settings.memory.provider.as_str() {
        "memory" => {
            Output::warning("Using in-memory conversation store; history is lost on restart.");
            Arc::new(SqliteMemory::in_memory()?)
        }
        _ => Arc::new(SqliteMemory::new(&settings.memory_sqlite_path())?),
    };

    let mut agent = Agent::new(
        &settings.agent.id,
        &settings.agent.name,
        Arc::new(runner),
        memory,
    );
    if let Some(instructions) = &settings.agent.instructions {
        agent = agent.with_instructions(instructions);
    }
    let agent = Arc::new(agent);

    let mut registry = AgentRegistry::new();
    registry.register(agent.clone());

    let state = Arc::new(AppState { registry });

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = Router::new()
        .route("/health", get(health))
        .route("/a2a/agent/{agent_id}", post(a2a_agent))
        .layer(cors)
        .with_state(state);

    let addr = format!("{}:{}", host, port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!("Faktum A2A server listening on http://{}", addr);

    Output::header("Faktum A2A Server");
    println!();
    Output::success(&format!("Listening on http://{}", addr));
    Output::kv("Agent", &format!("{} ({})", agent.name(), agent.id()));
    println!();
    println!("Endpoints:");
    Output::kv("Health", "GET  /health");
    Output::kv("A2A", &format!("POST /a2a/agent/{}", agent.id()));
    println!();
    Output::info("Press Ctrl+C to stop the server.");

    axum::serve(listener, app).await?;

    Ok(())
}

// === Handlers ===

async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}

async fn a2a_agent(
    State(state): State<Arc<AppState>>,
    Path(agent_id): Path<String>,
    body: String,
) -> impl IntoResponse {
    // An unparseable body is handled by the ready short-circuit, not rejected.
    let parsed = serde_json::from_str::<serde_json::Value>(&body).ok();
    let (status, response) = handle_agent_request(&state.registry, &agent_id, parsed).await;
    (status, Json(response))
}
