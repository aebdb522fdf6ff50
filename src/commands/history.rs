use async_trait::async_trait;

use super::{Command, CommandResult, SessionContext};
use crate::transcript::Sender;

pub struct HistoryCommand;

#[async_trait]
impl Command for HistoryCommand {
    fn name(&self) -> &str {
        "/history"
    }

    fn description(&self) -> &str {
        "show the conversation so far"
    }

    async fn execute(&self, _args: &str, ctx: &SessionContext) -> CommandResult {
        let messages = match ctx.chat.messages().await {
            Ok(m) => m,
            Err(e) => {
                eprintln!("  ✗ failed to read transcript: {e}");
                return CommandResult::Handled;
            }
        };

        for message in &messages {
            let who = match message.sender {
                Sender::User => "you",
                Sender::Bot => "farmiq",
            };
            println!(
                "  [{}] {:>6}  {}",
                message.timestamp.format("%H:%M"),
                who,
                message.text
            );
        }
        println!("  {} message(s)", messages.len());
        CommandResult::Handled
    }
}
