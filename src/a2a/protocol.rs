//! A2A wire protocol types (JSON-RPC 2.0).

use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

/// JSON-RPC error codes used by the A2A endpoint.
pub const INVALID_REQUEST: i32 = -32600;
pub const AGENT_NOT_FOUND: i32 = -32602;
pub const INTERNAL_ERROR: i32 = -32603;

/// JSON-RPC response.
#[derive(Debug, Serialize)]
pub struct JsonRpcResponse {
    pub jsonrpc: String,
    pub id: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<JsonRpcError>,
}

impl JsonRpcResponse {
    pub fn success(id: Value, result: Value) -> Self {
        Self {
            jsonrpc: "2.0".to_string(),
            id,
            result: Some(result),
            error: None,
        }
    }

    pub fn error(id: Value, code: i32, message: &str) -> Self {
        Self {
            jsonrpc: "2.0".to_string(),
            id,
            result: None,
            error: Some(JsonRpcError {
                code,
                message: message.to_string(),
                data: None,
            }),
        }
    }

    pub fn error_with_data(id: Value, code: i32, message: &str, data: Value) -> Self {
        Self {
            jsonrpc: "2.0".to_string(),
            id,
            result: None,
            error: Some(JsonRpcError {
                code,
                message: message.to_string(),
                data: Some(data),
            }),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct JsonRpcError {
    pub code: i32,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

/// Request params for an agent invocation.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestParams {
    #[serde(default)]
    pub message: Option<WireMessage>,
    #[serde(default)]
    pub messages: Option<Vec<WireMessage>>,
    #[serde(default)]
    pub context_id: Option<String>,
    #[serde(default)]
    pub task_id: Option<String>,
}

/// An inbound conversational message.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WireMessage {
    pub role: String,
    #[serde(default)]
    pub parts: Vec<Part>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub task_id: Option<String>,
}

/// One part of a message. `kind` is open-ended; unknown kinds are carried
/// through untouched and contribute nothing to normalized content.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Part {
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

impl Part {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            kind: "text".to_string(),
            text: Some(text.into()),
            data: None,
        }
    }

    pub fn data(data: Value) -> Self {
        Self {
            kind: "data".to_string(),
            text: None,
            data: Some(data),
        }
    }

    /// The fragment this part contributes to normalized message content.
    pub fn content_fragment(&self) -> String {
        match self.kind.as_str() {
            "text" => self.text.clone().unwrap_or_default(),
            "data" => self
                .data
                .as_ref()
                .map(|d| d.to_string())
                .unwrap_or_default(),
            _ => String::new(),
        }
    }
}

/// A message as it appears in task history and status.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskMessage {
    pub kind: String,
    pub role: String,
    pub parts: Vec<Part>,
    pub message_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task_id: Option<String>,
}

impl TaskMessage {
    /// Synthesize an agent message carrying one text part.
    pub fn agent_text(text: &str, task_id: Option<String>) -> Self {
        Self {
            kind: "message".to_string(),
            role: "agent".to_string(),
            parts: vec![Part::text(text)],
            message_id: Uuid::new_v4().to_string(),
            task_id,
        }
    }
}

/// Task status within a wire task.
#[derive(Debug, Serialize)]
pub struct TaskStatus {
    pub state: String,
    pub timestamp: String,
    pub message: TaskMessage,
}

/// A named bundle of output parts.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Artifact {
    pub artifact_id: String,
    pub name: String,
    pub parts: Vec<Part>,
}

/// The structured success result returned to callers.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WireTask {
    pub id: String,
    pub context_id: String,
    pub status: TaskStatus,
    pub artifacts: Vec<Artifact>,
    pub history: Vec<TaskMessage>,
    pub kind: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_part_content_fragments() {
        assert_eq!(Part::text("hello").content_fragment(), "hello");
        assert_eq!(
            Part::data(json!({"a": 1})).content_fragment(),
            r#"{"a":1}"#
        );

        let unknown = Part {
            kind: "file".to_string(),
            text: None,
            data: None,
        };
        assert_eq!(unknown.content_fragment(), "");
    }

    #[test]
    fn test_wire_message_accepts_camel_case_ids() {
        let msg: WireMessage = serde_json::from_value(json!({
            "role": "user",
            "parts": [{"kind": "text", "text": "hi"}],
            "messageId": "m1",
            "taskId": "t1"
        }))
        .unwrap();
        assert_eq!(msg.message_id.as_deref(), Some("m1"));
        assert_eq!(msg.task_id.as_deref(), Some("t1"));
    }

    #[test]
    fn test_error_response_shape() {
        let resp = JsonRpcResponse::error(json!("x"), INVALID_REQUEST, "Invalid Request");
        let value = serde_json::to_value(&resp).unwrap();
        assert_eq!(value["jsonrpc"], "2.0");
        assert_eq!(value["id"], "x");
        assert_eq!(value["error"]["code"], -32600);
        assert!(value.get("result").is_none());
    }
}
