//! Tool definitions and implementations for the agent.

use crate::error::{FaktumError, Result};
use crate::facts::{Animal, Fact, FactCategory, FactProvider};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Available tools for the agent.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "name", rename_all = "kebab-case")]
pub enum ToolCall {
    /// Get a fact about cats or dogs.
    #[serde(rename_all = "camelCase")]
    GetAnimalFact { animal_type: FactCategory },
}

/// Output of the `get-animal-fact` tool.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolOutput {
    pub fact: String,
    pub animal_type: Animal,
    pub source: String,
}

impl From<Fact> for ToolOutput {
    fn from(fact: Fact) -> Self {
        let source = fact.source_label().to_string();
        Self {
            fact: fact.text,
            animal_type: fact.animal,
            source,
        }
    }
}

/// Tool execution context with access to the fact provider.
pub struct ToolContext {
    provider: Arc<FactProvider>,
}

impl ToolContext {
    /// Create a new tool context.
    pub fn new(provider: Arc<FactProvider>) -> Self {
        Self { provider }
    }

    /// Execute a tool call.
    pub async fn execute(&self, tool: &ToolCall) -> Result<ToolOutput> {
        match tool {
            ToolCall::GetAnimalFact { animal_type } => {
                let fact = self.provider.get_fact(*animal_type).await;
                Ok(fact.into())
            }
        }
    }
}

/// Get OpenAI function/tool definitions for the agent.
pub fn tool_definitions() -> Vec<async_openai::types::ChatCompletionTool> {
    use async_openai::types::{ChatCompletionTool, ChatCompletionToolType, FunctionObject};

    vec![ChatCompletionTool {
        r#type: ChatCompletionToolType::Function,
        function: FunctionObject {
            name: "get-animal-fact".to_string(),
            description: Some("Get a random fact about cats or dogs".to_string()),
            parameters: Some(serde_json::json!({
                "type": "object",
                "properties": {
                    "animalType": {
                        "type": "string",
                        "enum": ["cat", "dog", "random"],
                        "description": "Type of animal fact to fetch"
                    }
                },
                "required": ["animalType"]
            })),
            strict: None,
        },
    }]
}

/// Parse a tool call from the OpenAI response format.
pub fn parse_tool_call(name: &str, arguments: &str) -> Result<ToolCall> {
    let args: serde_json::Value = serde_json::from_str(arguments)
        .map_err(|e| FaktumError::Agent(format!("Invalid tool arguments: {}", e)))?;

    match name {
        "get-animal-fact" => {
            let animal_type = args["animalType"]
                .as_str()
                .ok_or_else(|| FaktumError::Agent("Missing 'animalType' argument".to_string()))?
                .parse::<FactCategory>()
                .map_err(FaktumError::Agent)?;
            Ok(ToolCall::GetAnimalFact { animal_type })
        }
        _ => Err(FaktumError::Agent(format!("Unknown tool: {}", name))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_get_animal_fact() {
        let tool = parse_tool_call("get-animal-fact", r#"{"animalType": "cat"}"#).unwrap();
        let ToolCall::GetAnimalFact { animal_type } = tool;
        assert_eq!(animal_type, FactCategory::Cat);
    }

    #[test]
    fn test_parse_rejects_unknown_tool() {
        assert!(parse_tool_call("get-weather", r#"{}"#).is_err());
    }

    #[test]
    fn test_parse_rejects_missing_argument() {
        assert!(parse_tool_call("get-animal-fact", r#"{}"#).is_err());
    }

    #[test]
    fn test_tool_output_wire_shape() {
        let output = ToolOutput {
            fact: "Cats sleep a lot.".to_string(),
            animal_type: Animal::Cat,
            source: "Cat Facts API".to_string(),
        };
        let value = serde_json::to_value(&output).unwrap();
        assert_eq!(value["fact"], "Cats sleep a lot.");
        assert_eq!(value["animalType"], "cat");
        assert_eq!(value["source"], "Cat Facts API");
    }
}
