//! Configuration module for Faktum.
//!
//! Handles loading and managing application settings.

mod settings;

pub use settings::{
    AgentSettings, FactsSettings, GeneralSettings, MemorySettings, ServerSettings, Settings,
};
