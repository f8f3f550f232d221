//! Configuration settings for Faktum.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct Settings {
    pub general: GeneralSettings,
    pub server: ServerSettings,
    pub facts: FactsSettings,
    pub agent: AgentSettings,
    pub memory: MemorySettings,
}

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralSettings {
    /// Directory for storing application data.
    pub data_dir: String,
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
}

impl Default for GeneralSettings {
    fn default() -> Self {
        Self {
            data_dir: "~/.faktum".to_string(),
            log_level: "info".to_string(),
        }
    }
}

/// HTTP server settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    /// Host to bind to.
    pub host: String,
    /// Port to bind to.
    pub port: u16,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
        }
    }
}

/// Remote fact lookup settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FactsSettings {
    /// Cat facts API endpoint.
    pub cat_api_url: String,
    /// Dog facts API endpoint.
    pub dog_api_url: String,
    /// Timeout for a single remote lookup, in seconds.
    pub timeout_seconds: u64,
}

impl Default for FactsSettings {
    fn default() -> Self {
        Self {
            cat_api_url: "https://cat-fact.herokuapp.com/facts/random".to_string(),
            dog_api_url: "https://dog-facts-api.herokuapp.com/api/v1/resources/dogs?number=1"
                .to_string(),
            timeout_seconds: 10,
        }
    }
}

/// Agent settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AgentSettings {
    /// Identifier the agent is registered under (the `{agent_id}` path segment).
    pub id: String,
    /// Human-readable agent name.
    pub name: String,
    /// LLM model for response generation.
    pub model: String,
    /// Maximum tool-calling iterations per request.
    pub max_iterations: usize,
    /// Custom instructions overriding the built-in prompt.
    pub instructions: Option<String>,
}

impl Default for AgentSettings {
    fn default() -> Self {
        Self {
            id: "animalAgent".to_string(),
            name: "Animal Facts Agent".to_string(),
            model: "gpt-4o-mini".to_string(),
            max_iterations: 5,
            instructions: None,
        }
    }
}

/// Conversation memory settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MemorySettings {
    /// Memory provider (sqlite, memory).
    pub provider: String,
    /// Path to SQLite database (for sqlite provider).
    pub sqlite_path: String,
}

impl Default for MemorySettings {
    fn default() -> Self {
        Self {
            provider: "sqlite".to_string(),
            sqlite_path: "~/.faktum/memory.db".to_string(),
        }
    }
}

impl Settings {
    /// Load settings from the default configuration file.
    pub fn load() -> crate::error::Result<Self> {
        Self::load_from(None)
    }

    /// Load settings from a specific path, or default location if None.
    pub fn load_from(path: Option<&PathBuf>) -> crate::error::Result<Self> {
        let config_path = match path {
            Some(p) => p.clone(),
            None => Self::default_config_path(),
        };

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let settings: Settings = toml::from_str(&content)?;
            Ok(settings)
        } else {
            Ok(Settings::default())
        }
    }

    /// Save settings to a specific path.
    pub fn save_to(&self, path: &PathBuf) -> crate::error::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)
            .map_err(|e| crate::error::FaktumError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Get the default configuration file path.
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("faktum")
            .join("config.toml")
    }

    /// Expand shell variables in paths (e.g., ~).
    pub fn expand_path(path: &str) -> PathBuf {
        PathBuf::from(shellexpand::tilde(path).to_string())
    }

    /// Get the expanded data directory path.
    pub fn data_dir(&self) -> PathBuf {
        Self::expand_path(&self.general.data_dir)
    }

    /// Get the expanded SQLite memory database path.
    pub fn memory_sqlite_path(&self) -> PathBuf {
        Self::expand_path(&self.memory.sqlite_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.server.port, 3000);
        assert_eq!(settings.agent.id, "animalAgent");
        assert_eq!(settings.agent.instructions, None);
        assert_eq!(settings.facts.timeout_seconds, 10);
    }

    #[test]
    fn test_save_and_reload_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let mut settings = Settings::default();
        settings.server.port = 4321;
        settings.save_to(&path).unwrap();

        let reloaded = Settings::load_from(Some(&path)).unwrap();
        assert_eq!(reloaded.server.port, 4321);
    }

    #[test]
    fn test_partial_toml_overrides() {
        let toml = r#"
            [server]
            port = 8080

            [facts]
            timeout_seconds = 3
        "#;
        let settings: Settings = toml::from_str(toml).unwrap();
        assert_eq!(settings.server.port, 8080);
        assert_eq!(settings.server.host, "127.0.0.1");
        assert_eq!(settings.facts.timeout_seconds, 3);
        assert!(settings.facts.cat_api_url.contains("cat-fact"));
    }
}
