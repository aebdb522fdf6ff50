pub mod scripted;

use async_trait::async_trait;

/// Produces the assistant's side of a chat exchange. Could be a rule
/// table, a real model, or a test script.
#[async_trait]
pub trait Responder: Send + Sync {
    async fn reply(&self, utterance: &str) -> String;
}
