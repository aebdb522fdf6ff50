use async_trait::async_trait;

use super::{Command, CommandResult, SessionContext};

pub struct QuitCommand;

#[async_trait]
impl Command for QuitCommand {
    fn name(&self) -> &str {
        "/quit"
    }

    fn aliases(&self) -> &[&str] {
        &["/q", "/exit"]
    }

    fn description(&self) -> &str {
        "end the session"
    }

    async fn execute(&self, _args: &str, _ctx: &SessionContext) -> CommandResult {
        CommandResult::Quit
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn returns_quit() {
        let ctx = super::super::tests::test_context().await;
        assert!(matches!(
            QuitCommand.execute("", &ctx).await,
            CommandResult::Quit
        ));
    }
}
