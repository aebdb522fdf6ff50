pub mod sqlite;

use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// Who authored a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Bot,
}

/// One message in a conversation. Messages are created once and never
/// mutated; the transcript only ever appends.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Sequential within the conversation, starting at 1.
    pub id: u64,
    pub text: String,
    pub sender: Sender,
    pub timestamp: DateTime<Local>,
}

impl ChatMessage {
    pub fn new(id: u64, text: impl Into<String>, sender: Sender) -> Self {
        Self {
            id,
            text: text.into(),
            sender,
            timestamp: Local::now(),
        }
    }
}

/// Where a conversation's messages live. Append-only, insertion-ordered.
/// The production store keeps everything in process memory; the trait is
/// the seam a durable store would plug into.
#[async_trait]
pub trait Transcript: Send + Sync {
    async fn append(&self, message: ChatMessage) -> Result<()>;

    /// All messages, oldest first.
    async fn messages(&self) -> Result<Vec<ChatMessage>>;

    async fn len(&self) -> Result<usize>;

    async fn clear(&self) -> Result<()>;
}
