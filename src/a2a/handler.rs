//! A2A request handling.
//!
//! One stateless pass per request: parse, validate, resolve the agent,
//! normalize messages, invoke, and package the result as a wire task.
//! The empty-body short-circuit runs before all validation.

use super::protocol::{
    Artifact, JsonRpcResponse, Part, RequestParams, TaskMessage, TaskStatus, WireMessage,
    WireTask, AGENT_NOT_FOUND, INTERNAL_ERROR, INVALID_REQUEST,
};
use crate::agent::{Agent, ChatMessage};
use crate::error::{FaktumError, Result};
use axum::http::StatusCode;
use chrono::Utc;
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, warn};
use uuid::Uuid;

/// Registry of agents addressable by id.
#[derive(Default)]
pub struct AgentRegistry {
    agents: HashMap<String, Arc<Agent>>,
}

impl AgentRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an agent under its id.
    pub fn register(&mut self, agent: Arc<Agent>) {
        self.agents.insert(agent.id().to_string(), agent);
    }

    pub fn get(&self, agent_id: &str) -> Option<Arc<Agent>> {
        self.agents.get(agent_id).cloned()
    }
}

/// Handle one A2A request body for the agent at `agent_id`.
///
/// `body` is the parsed request body, or `None` when the body was empty
/// or unparseable.
pub async fn handle_agent_request(
    registry: &AgentRegistry,
    agent_id: &str,
    body: Option<Value>,
) -> (StatusCode, JsonRpcResponse) {
    // Empty or unparseable body is a readiness probe, not an error.
    let body = match body {
        Some(v) if !is_empty_body(&v) => v,
        _ => {
            debug!("Empty body on /a2a/agent/{}, answering ready", agent_id);
            return (
                StatusCode::OK,
                JsonRpcResponse::success(Value::Null, json!({ "message": "Agent ready" })),
            );
        }
    };

    let request_id = body.get("id").cloned().unwrap_or(Value::Null);
    let jsonrpc = body.get("jsonrpc").and_then(Value::as_str);

    if jsonrpc != Some("2.0") || !has_request_id(&request_id) {
        let echo_id = if has_request_id(&request_id) {
            request_id
        } else {
            Value::Null
        };
        return (
            StatusCode::BAD_REQUEST,
            JsonRpcResponse::error(
                echo_id,
                INVALID_REQUEST,
                "Invalid Request: jsonrpc must be \"2.0\" and id is required",
            ),
        );
    }

    let Some(agent) = registry.get(agent_id) else {
        warn!("Unknown agent requested: {}", agent_id);
        return (
            StatusCode::NOT_FOUND,
            JsonRpcResponse::error(
                request_id,
                AGENT_NOT_FOUND,
                &format!("Agent '{}' not found", agent_id),
            ),
        );
    };

    match invoke_agent(&agent, body.get("params").cloned()).await {
        Ok(task) => {
            // WireTask is plain data; serialization cannot fail here.
            let result = serde_json::to_value(task).unwrap_or(Value::Null);
            (StatusCode::OK, JsonRpcResponse::success(request_id, result))
        }
        Err(e) => {
            warn!("Agent invocation failed: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                JsonRpcResponse::error_with_data(
                    Value::Null,
                    INTERNAL_ERROR,
                    "Internal error",
                    json!({ "details": e.to_string() }),
                ),
            )
        }
    }
}

/// True for anything the empty-body short-circuit should absorb: null,
/// field-less objects and arrays, and the falsy scalars (false, zero, "").
fn is_empty_body(body: &Value) -> bool {
    match body {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Object(map) => map.is_empty(),
        Value::Array(items) => items.is_empty(),
    }
}

/// A request id must be present and non-empty.
fn has_request_id(id: &Value) -> bool {
    match id {
        Value::Null => false,
        Value::String(s) => !s.is_empty(),
        Value::Number(n) => n.as_i64() != Some(0),
        Value::Bool(b) => *b,
        _ => true,
    }
}

/// Normalize params, invoke the agent, and package the wire task.
async fn invoke_agent(agent: &Agent, params: Option<Value>) -> Result<WireTask> {
    let params: RequestParams = match params {
        Some(p) => serde_json::from_value(p)
            .map_err(|e| FaktumError::InvalidRequest(format!("Malformed params: {}", e)))?,
        None => RequestParams::default(),
    };

    // Singular `message` wins over `messages` when both are given.
    let inbound: Vec<WireMessage> = match (params.message, params.messages) {
        (Some(message), _) => vec![message],
        (None, Some(messages)) => messages,
        (None, None) => Vec::new(),
    };

    let normalized: Vec<ChatMessage> = inbound
        .iter()
        .map(|msg| ChatMessage {
            role: msg.role.clone(),
            content: msg
                .parts
                .iter()
                .map(Part::content_fragment)
                .collect::<Vec<_>>()
                .join("\n"),
        })
        .collect();

    // Identifiers round-trip when supplied and are backfilled when not.
    let task_id = params.task_id.unwrap_or_else(fresh_id);
    let context_id = params.context_id.unwrap_or_else(fresh_id);

    let reply = agent.generate(&normalized, &context_id).await?;

    let mut artifacts = vec![Artifact {
        artifact_id: fresh_id(),
        name: format!("{}Response", agent.id()),
        parts: vec![Part::text(&reply.text)],
    }];

    if !reply.tool_results.is_empty() {
        artifacts.push(Artifact {
            artifact_id: fresh_id(),
            name: "ToolResults".to_string(),
            parts: reply.tool_results.iter().cloned().map(Part::data).collect(),
        });
    }

    let mut history: Vec<TaskMessage> = inbound
        .into_iter()
        .map(|msg| TaskMessage {
            kind: "message".to_string(),
            role: msg.role,
            parts: msg.parts,
            message_id: msg.message_id.unwrap_or_else(fresh_id),
            task_id: Some(msg.task_id.unwrap_or_else(|| task_id.clone())),
        })
        .collect();
    history.push(TaskMessage::agent_text(&reply.text, Some(task_id.clone())));

    Ok(WireTask {
        id: task_id,
        context_id,
        status: TaskStatus {
            state: "completed".to_string(),
            timestamp: Utc::now().to_rfc3339(),
            message: TaskMessage::agent_text(&reply.text, None),
        },
        artifacts,
        history,
        kind: "task".to_string(),
    })
}

fn fresh_id() -> String {
    Uuid::new_v4().to_string()
}
