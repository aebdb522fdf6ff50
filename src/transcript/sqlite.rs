use anyhow::Result;
use async_trait::async_trait;
use rusqlite::Connection;
use std::sync::Mutex;

use super::{ChatMessage, Transcript};

/// SQLite-backed transcript. Always opened on `:memory:` — a FarmIQ
/// session leaves nothing behind when it ends.
pub struct SqliteTranscript {
    conn: Mutex<Connection>,
}

impl SqliteTranscript {
    pub fn new() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS messages (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                body TEXT NOT NULL
            );",
        )?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }
}

#[async_trait]
impl Transcript for SqliteTranscript {
    async fn append(&self, message: ChatMessage) -> Result<()> {
        let json = serde_json::to_string(&message)?;
        let conn = self.conn.lock().unwrap();
        conn.execute("INSERT INTO messages (body) VALUES (?1)", [&json])?;
        Ok(())
    }

    async fn messages(&self) -> Result<Vec<ChatMessage>> {
        let conn = self.conn.lock().unwrap();
        let mut stmt = conn.prepare("SELECT body FROM messages ORDER BY id ASC")?;
        let jsons = stmt
            .query_map([], |row| row.get::<_, String>(0))?
            .collect::<Result<Vec<_>, _>>()?;
        let messages = jsons
            .iter()
            .map(|json| serde_json::from_str(json))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(messages)
    }

    async fn len(&self) -> Result<usize> {
        let conn = self.conn.lock().unwrap();
        let count: i64 = conn.query_row("SELECT COUNT(*) FROM messages", [], |row| row.get(0))?;
        Ok(count as usize)
    }

    async fn clear(&self) -> Result<()> {
        let conn = self.conn.lock().unwrap();
        conn.execute("DELETE FROM messages", [])?;
        Ok(())
    }
}
