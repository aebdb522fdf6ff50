//! The chat surface.
//!
//! A [`ChatSession`] owns one conversation: an append-only transcript
//! seeded with the assistant greeting, and the single-slot task that
//! simulates the assistant typing. A completed exchange always appends
//! exactly two messages — the user's, then the reply.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use anyhow::Result;

use crate::consts::{CHAT_REPLY_DELAY, GREETING, QUICK_QUESTIONS};
use crate::responder::Responder;
use crate::task::{Phase, SimulatedTask};
use crate::transcript::sqlite::SqliteTranscript;
use crate::transcript::{ChatMessage, Sender, Transcript};

pub struct ChatSession {
    transcript: Arc<dyn Transcript>,
    responder: Arc<dyn Responder>,
    task: SimulatedTask<String>,
    next_id: Arc<AtomicU64>,
    delay: Duration,
}

impl ChatSession {
    /// Start a conversation with the standard in-memory transcript,
    /// seeded with the greeting.
    pub async fn new(responder: Arc<dyn Responder>) -> Result<Self> {
        Self::with_transcript(Arc::new(SqliteTranscript::new()?), responder, CHAT_REPLY_DELAY)
            .await
    }

    /// Start a conversation over a specific transcript and reply delay.
    pub async fn with_transcript(
        transcript: Arc<dyn Transcript>,
        responder: Arc<dyn Responder>,
        delay: Duration,
    ) -> Result<Self> {
        transcript
            .append(ChatMessage::new(1, GREETING, Sender::Bot))
            .await?;
        Ok(Self {
            transcript,
            responder,
            task: SimulatedTask::new(),
            next_id: Arc::new(AtomicU64::new(2)),
            delay,
        })
    }

    /// Send a user message. Returns `Ok(false)` without any effect when
    /// the text is empty or whitespace-only, or when a reply is already
    /// pending — both are silently ignored, matching the reference
    /// behavior. On success the user message is appended immediately and
    /// the reply arrives after the typing delay.
    pub async fn send(&self, text: &str) -> Result<bool> {
        if text.trim().is_empty() {
            return Ok(false);
        }
        if self.task.phase() == Phase::Pending {
            return Ok(false);
        }

        let user_id = self.next_id.fetch_add(1, Ordering::SeqCst);
        self.transcript
            .append(ChatMessage::new(user_id, text, Sender::User))
            .await?;

        let transcript = Arc::clone(&self.transcript);
        let responder = Arc::clone(&self.responder);
        let next_id = Arc::clone(&self.next_id);
        let text = text.to_string();

        self.task.submit(self.delay, move || async move {
            let reply = responder.reply(&text).await;
            let bot_id = next_id.fetch_add(1, Ordering::SeqCst);
            let message = ChatMessage::new(bot_id, reply.clone(), Sender::Bot);
            if let Err(e) = transcript.append(message).await {
                eprintln!("transcript error: {e}");
            }
            reply
        });

        Ok(true)
    }

    /// Wait for the pending reply and return its text.
    pub async fn wait_reply(&self) -> String {
        self.task.wait().await
    }

    /// Whether the assistant is "typing".
    pub fn phase(&self) -> Phase {
        self.task.phase()
    }

    /// The full conversation, oldest first.
    pub async fn messages(&self) -> Result<Vec<ChatMessage>> {
        self.transcript.messages().await
    }

    pub async fn message_count(&self) -> Result<usize> {
        self.transcript.len().await
    }

    /// Suggested openers, offered only while the conversation holds
    /// nothing but the greeting.
    pub async fn quick_questions(&self) -> Result<Option<&'static [&'static str]>> {
        Ok(if self.transcript.len().await? == 1 {
            Some(QUICK_QUESTIONS)
        } else {
            None
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::responder::scripted::ScriptedResponder;

    async fn session() -> ChatSession {
        ChatSession::new(Arc::new(ScriptedResponder::new()))
            .await
            .unwrap()
    }

    #[tokio::test(start_paused = true)]
    async fn greeting_is_seeded() {
        let chat = session().await;
        let messages = chat.messages().await.unwrap();
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].id, 1);
        assert_eq!(messages[0].sender, Sender::Bot);
        assert_eq!(messages[0].text, GREETING);
    }

    #[tokio::test(start_paused = true)]
    async fn empty_and_whitespace_input_is_ignored() {
        let chat = session().await;
        assert!(!chat.send("").await.unwrap());
        assert!(!chat.send("   \t ").await.unwrap());
        assert_eq!(chat.message_count().await.unwrap(), 1);
        assert_eq!(chat.phase(), Phase::Idle);
    }

    #[tokio::test(start_paused = true)]
    async fn quick_questions_only_before_first_exchange() {
        let chat = session().await;
        assert!(chat.quick_questions().await.unwrap().is_some());

        chat.send("weather today?").await.unwrap();
        chat.wait_reply().await;
        assert!(chat.quick_questions().await.unwrap().is_none());
    }
}
