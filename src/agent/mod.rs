//! Agent system for Faktum.
//!
//! Binds the fact provider as a named tool, carries the agent's fixed
//! instructions, and threads conversation memory into each reasoning call.
//! The reasoning itself is delegated to an external service behind the
//! `ReasoningService` trait.

mod runner;
mod tools;

pub use runner::OpenAiRunner;
pub use tools::{parse_tool_call, tool_definitions, ToolCall, ToolContext, ToolOutput};

use crate::error::Result;
use crate::memory::ConversationMemory;
use async_trait::async_trait;
use std::sync::Arc;

/// Instructions for the animal facts agent.
pub const ANIMAL_AGENT_INSTRUCTIONS: &str = r#"You are a friendly and enthusiastic animal facts assistant that shares interesting facts about cats and dogs.

Your primary function is to provide fun and educational animal facts. When responding:
- If the user asks for a cat fact, use animalType: 'cat'
- If the user asks for a dog fact, use animalType: 'dog'
- If the user asks for any animal fact or doesn't specify, use animalType: 'random'
- Present facts in an engaging and conversational way
- Add context or interesting commentary to make the facts more memorable
- Keep responses friendly and enthusiastic

Use the get-animal-fact tool to fetch current animal facts."#;

/// One conversational turn in the agent's input format.
#[derive(Debug, Clone)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

/// Result of one agent invocation.
#[derive(Debug, Clone)]
pub struct AgentReply {
    /// Final text response.
    pub text: String,
    /// Tool invocation records, in execution order.
    pub tool_results: Vec<serde_json::Value>,
}

/// Trait for the external reasoning/generation service.
#[async_trait]
pub trait ReasoningService: Send + Sync {
    /// Produce a reply for an ordered message sequence.
    async fn generate(&self, instructions: &str, messages: &[ChatMessage]) -> Result<AgentReply>;
}

/// A conversational agent with a tool capability and durable memory.
pub struct Agent {
    id: String,
    name: String,
    instructions: String,
    reasoner: Arc<dyn ReasoningService>,
    memory: Arc<dyn ConversationMemory>,
}

impl Agent {
    /// Create a new agent with the default animal-facts instructions.
    pub fn new(
        id: &str,
        name: &str,
        reasoner: Arc<dyn ReasoningService>,
        memory: Arc<dyn ConversationMemory>,
    ) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            instructions: ANIMAL_AGENT_INSTRUCTIONS.to_string(),
            reasoner,
            memory,
        }
    }

    /// Set custom instructions.
    pub fn with_instructions(mut self, instructions: &str) -> Self {
        self.instructions = instructions.to_string();
        self
    }

    /// Agent identifier (the `{agent_id}` path segment).
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Human-readable agent name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Generate a reply for the given turns within a conversation context.
    ///
    /// Prior turns for the context are replayed from memory ahead of the
    /// new messages; the new turns and the reply are recorded afterwards.
    pub async fn generate(
        &self,
        messages: &[ChatMessage],
        context_id: &str,
    ) -> Result<AgentReply> {
        let mut thread: Vec<ChatMessage> = self
            .memory
            .history(context_id)
            .await?
            .into_iter()
            .map(|m| ChatMessage {
                role: m.role,
                content: m.content,
            })
            .collect();
        thread.extend(messages.iter().cloned());

        let reply = self.reasoner.generate(&self.instructions, &thread).await?;

        for message in messages {
            self.memory
                .record(context_id, &message.role, &message.content)
                .await?;
        }
        self.memory.record(context_id, "agent", &reply.text).await?;

        Ok(reply)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::SqliteMemory;

    struct EchoReasoner;

    #[async_trait]
    impl ReasoningService for EchoReasoner {
        async fn generate(
            &self,
            _instructions: &str,
            messages: &[ChatMessage],
        ) -> Result<AgentReply> {
            Ok(AgentReply {
                text: format!("saw {} messages", messages.len()),
                tool_results: Vec::new(),
            })
        }
    }

    fn test_agent() -> Agent {
        Agent::new(
            "animalAgent",
            "Animal Facts Agent",
            Arc::new(EchoReasoner),
            Arc::new(SqliteMemory::in_memory().unwrap()),
        )
    }

    #[tokio::test]
    async fn test_memory_is_threaded_into_reasoning() {
        let agent = test_agent();
        let turn = |content: &str| ChatMessage {
            role: "user".to_string(),
            content: content.to_string(),
        };

        let first = agent.generate(&[turn("hi")], "ctx").await.unwrap();
        assert_eq!(first.text, "saw 1 messages");

        // Second call sees the stored user turn and agent reply plus the new turn.
        let second = agent.generate(&[turn("again")], "ctx").await.unwrap();
        assert_eq!(second.text, "saw 3 messages");
    }

    #[tokio::test]
    async fn test_custom_instructions_reach_the_reasoner() {
        struct InstructionEcho;

        #[async_trait]
        impl ReasoningService for InstructionEcho {
            async fn generate(
                &self,
                instructions: &str,
                _messages: &[ChatMessage],
            ) -> Result<AgentReply> {
                Ok(AgentReply {
                    text: instructions.to_string(),
                    tool_results: Vec::new(),
                })
            }
        }

        let agent = Agent::new(
            "animalAgent",
            "Animal Facts Agent",
            Arc::new(InstructionEcho),
            Arc::new(SqliteMemory::in_memory().unwrap()),
        )
        .with_instructions("Answer in haiku only.");

        let turn = ChatMessage {
            role: "user".to_string(),
            content: "hi".to_string(),
        };
        let reply = agent.generate(&[turn], "ctx").await.unwrap();
        assert_eq!(reply.text, "Answer in haiku only.");
    }

    #[tokio::test]
    async fn test_contexts_are_isolated() {
        let agent = test_agent();
        let turn = ChatMessage {
            role: "user".to_string(),
            content: "hi".to_string(),
        };

        agent.generate(&[turn.clone()], "a").await.unwrap();
        let other = agent.generate(&[turn], "b").await.unwrap();
        assert_eq!(other.text, "saw 1 messages");
    }
}
