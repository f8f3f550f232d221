//! OpenAI-backed reasoning service with a tool calling loop.

use super::tools::{parse_tool_call, tool_definitions, ToolContext};
use super::{AgentReply, ChatMessage, ReasoningService};
use crate::error::{FaktumError, Result};
use crate::openai::create_client;
use async_openai::types::{
    ChatCompletionMessageToolCall, ChatCompletionRequestAssistantMessageArgs,
    ChatCompletionRequestMessage, ChatCompletionRequestSystemMessageArgs,
    ChatCompletionRequestToolMessageArgs, ChatCompletionRequestUserMessageArgs,
    CreateChatCompletionRequestArgs,
};
use async_trait::async_trait;
use serde_json::json;
use tracing::{debug, info};

/// Reasoning service backed by the OpenAI chat completions API.
pub struct OpenAiRunner {
    client: async_openai::Client<async_openai::config::OpenAIConfig>,
    model: String,
    tools: ToolContext,
    max_iterations: usize,
}

impl OpenAiRunner {
    /// Create a new runner with the given tool context and model.
    pub fn new(tools: ToolContext, model: &str) -> Self {
        Self {
            client: create_client(),
            model: model.to_string(),
            tools,
            max_iterations: 5,
        }
    }

    /// Set maximum iterations for the tool calling loop.
    pub fn with_max_iterations(mut self, max: usize) -> Self {
        self.max_iterations = max;
        self
    }

    /// Execute a single tool call and return its result as JSON.
    async fn execute_tool_call(
        &self,
        tool_call: &ChatCompletionMessageToolCall,
    ) -> serde_json::Value {
        let name = &tool_call.function.name;
        let arguments = &tool_call.function.arguments;

        info!("Agent calling tool: {} with args: {}", name, arguments);

        let result = match parse_tool_call(name, arguments) {
            Ok(tool) => match self.tools.execute(&tool).await {
                Ok(output) => serde_json::to_value(output)
                    .unwrap_or_else(|e| json!({ "error": e.to_string() })),
                Err(e) => json!({ "error": e.to_string() }),
            },
            Err(e) => json!({ "error": format!("Failed to parse tool call: {}", e) }),
        };

        json!({
            "toolName": name,
            "arguments": serde_json::from_str::<serde_json::Value>(arguments)
                .unwrap_or(serde_json::Value::Null),
            "result": result,
        })
    }
}

#[async_trait]
impl ReasoningService for OpenAiRunner {
    async fn generate(&self, instructions: &str, messages: &[ChatMessage]) -> Result<AgentReply> {
        let mut thread: Vec<ChatCompletionRequestMessage> = vec![
            ChatCompletionRequestSystemMessageArgs::default()
                .content(instructions.to_string())
                .build()
                .map_err(|e| FaktumError::Agent(e.to_string()))?
                .into(),
        ];

        for message in messages {
            let msg: ChatCompletionRequestMessage = match message.role.as_str() {
                "agent" | "assistant" => ChatCompletionRequestAssistantMessageArgs::default()
                    .content(message.content.clone())
                    .build()
                    .map_err(|e| FaktumError::Agent(e.to_string()))?
                    .into(),
                _ => ChatCompletionRequestUserMessageArgs::default()
                    .content(message.content.clone())
                    .build()
                    .map_err(|e| FaktumError::Agent(e.to_string()))?
                    .into(),
            };
            thread.push(msg);
        }

        let mut iterations = 0;
        let mut tool_results = Vec::new();

        loop {
            iterations += 1;
            if iterations > self.max_iterations {
                return Err(FaktumError::Agent(format!(
                    "Agent exceeded maximum iterations ({})",
                    self.max_iterations
                )));
            }

            debug!("Agent iteration {}", iterations);

            let request = CreateChatCompletionRequestArgs::default()
                .model(&self.model)
                .messages(thread.clone())
                .tools(tool_definitions())
                .build()
                .map_err(|e| FaktumError::Agent(e.to_string()))?;

            let response = self
                .client
                .chat()
                .create(request)
                .await
                .map_err(|e| FaktumError::OpenAI(format!("Agent API error: {}", e)))?;

            let choice = response
                .choices
                .first()
                .ok_or_else(|| FaktumError::Agent("No response from model".to_string()))?;

            let tool_calls = match &choice.message.tool_calls {
                Some(calls) if !calls.is_empty() => calls.clone(),
                _ => {
                    // No tool calls, the model is done.
                    return Ok(AgentReply {
                        text: choice.message.content.clone().unwrap_or_default(),
                        tool_results,
                    });
                }
            };

            let assistant_msg = ChatCompletionRequestAssistantMessageArgs::default()
                .tool_calls(tool_calls.clone())
                .build()
                .map_err(|e| FaktumError::Agent(e.to_string()))?;
            thread.push(assistant_msg.into());

            for tool_call in &tool_calls {
                let record = self.execute_tool_call(tool_call).await;

                let tool_msg = ChatCompletionRequestToolMessageArgs::default()
                    .tool_call_id(&tool_call.id)
                    .content(record["result"].to_string())
                    .build()
                    .map_err(|e| FaktumError::Agent(e.to_string()))?;
                thread.push(tool_msg.into());

                tool_results.push(record);
            }
        }
    }
}
