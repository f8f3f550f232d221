//! A2A (agent-to-agent) protocol support.
//!
//! Wire types and the per-request handler for the JSON-RPC-flavored
//! `POST /a2a/agent/{agent_id}` endpoint.

mod handler;
pub mod protocol;

pub use handler::{handle_agent_request, AgentRegistry};
