//! Conversation memory store.
//!
//! A thin durable collaborator keyed by conversation context. The agent
//! records turns and replays prior history into the reasoning call; no
//! summarization or recall semantics live here.

use crate::error::{FaktumError, Result};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rusqlite::{params, Connection};
use std::path::Path;
use std::sync::Mutex;
use tracing::info;
use uuid::Uuid;

/// A stored conversation turn.
#[derive(Debug, Clone)]
pub struct StoredMessage {
    pub role: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

/// Trait for conversation memory implementations.
#[async_trait]
pub trait ConversationMemory: Send + Sync {
    /// Record one turn for a conversation context.
    async fn record(&self, context_id: &str, role: &str, content: &str) -> Result<()>;

    /// Get all turns for a context, oldest first.
    async fn history(&self, context_id: &str) -> Result<Vec<StoredMessage>>;
}

/// SQLite-backed conversation memory.
pub struct SqliteMemory {
    conn: Mutex<Connection>,
}

impl SqliteMemory {
    /// Open (or create) a memory database at the given path.
    pub fn new(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let conn = Connection::open(path)?;
        conn.execute_batch("PRAGMA journal_mode=WAL;")?;
        Self::init_schema(&conn)?;

        info!("Initialized SQLite conversation memory at {:?}", path);

        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Create an in-memory store (useful for testing).
    pub fn in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        Self::init_schema(&conn)?;

        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    fn init_schema(conn: &Connection) -> Result<()> {
        conn.execute_batch(
            r#"
            CREATE TABLE IF NOT EXISTS messages (
                id TEXT PRIMARY KEY,
                context_id TEXT NOT NULL,
                role TEXT NOT NULL,
                content TEXT NOT NULL,
                created_at TEXT NOT NULL
            );

            CREATE INDEX IF NOT EXISTS idx_messages_context_id ON messages(context_id);
            "#,
        )?;
        Ok(())
    }
}

#[async_trait]
impl ConversationMemory for SqliteMemory {
    async fn record(&self, context_id: &str, role: &str, content: &str) -> Result<()> {
        let conn = self
            .conn
            .lock()
            .map_err(|e| FaktumError::Memory(format!("Failed to acquire lock: {}", e)))?;
        conn.execute(
            "INSERT INTO messages (id, context_id, role, content, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                Uuid::new_v4().to_string(),
                context_id,
                role,
                content,
                Utc::now().to_rfc3339(),
            ],
        )?;
        Ok(())
    }

    async fn history(&self, context_id: &str) -> Result<Vec<StoredMessage>> {
        let conn = self
            .conn
            .lock()
            .map_err(|e| FaktumError::Memory(format!("Failed to acquire lock: {}", e)))?;
        let mut stmt = conn.prepare(
            "SELECT role, content, created_at FROM messages
             WHERE context_id = ?1 ORDER BY created_at, rowid",
        )?;

        let rows = stmt.query_map(params![context_id], |row| {
            let created_at: String = row.get(2)?;
            Ok(StoredMessage {
                role: row.get(0)?,
                content: row.get(1)?,
                created_at: created_at
                    .parse::<DateTime<Utc>>()
                    .unwrap_or_else(|_| Utc::now()),
            })
        })?;

        let mut messages = Vec::new();
        for row in rows {
            messages.push(row?);
        }
        Ok(messages)
    }
}
