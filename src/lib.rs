//! Faktum - A2A Animal Facts Agent
//!
//! An HTTP agent server that answers requests for animal facts over the
//! A2A (agent-to-agent) JSON-RPC protocol.
//!
//! The name "Faktum" comes from the Norwegian/Scandinavian word for "fact."
//!
//! # Overview
//!
//! Faktum allows you to:
//! - Serve a conversational animal-facts agent over `POST /a2a/agent/{agent_id}`
//! - Fetch cat and dog facts from remote APIs with a bundled fallback catalog
//! - Persist conversation history in a local SQLite store
//!
//! # Architecture
//!
//! The library is organized into several modules:
//!
//! - `config` - Configuration management
//! - `facts` - Fact retrieval with remote lookup and local fallback
//! - `agent` - Agent with tool calling against the fact provider
//! - `memory` - Conversation memory store
//! - `a2a` - A2A wire protocol types and request handling
//! - `cli` - Command-line interface and the HTTP server
//!
//! # Example
//!
//! ```rust,no_run
//! use faktum::config::Settings;
//! use faktum::facts::{FactCategory, FactProvider};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let settings = Settings::load()?;
//!     let provider = FactProvider::new(&settings.facts);
//!
//!     let fact = provider.get_fact(FactCategory::Random).await;
//!     println!("{}", fact.text);
//!
//!     Ok(())
//! }
//! ```

pub mod a2a;
pub mod agent;
pub mod cli;
pub mod config;
pub mod error;
pub mod facts;
pub mod memory;
pub mod openai;

pub use error::{FaktumError, Result};
