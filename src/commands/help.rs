use async_trait::async_trait;

use super::{Command, CommandResult, SessionContext};

/// Listed for metadata only; the registry renders the actual help text
/// since it needs the full command list.
pub struct HelpCommand;

#[async_trait]
impl Command for HelpCommand {
    fn name(&self) -> &str {
        "/help"
    }

    fn aliases(&self) -> &[&str] {
        &["/h", "/?"]
    }

    fn description(&self) -> &str {
        "show available commands"
    }

    async fn execute(&self, _args: &str, _ctx: &SessionContext) -> CommandResult {
        CommandResult::Handled
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn metadata() {
        assert_eq!(HelpCommand.name(), "/help");
        assert_eq!(HelpCommand.aliases(), &["/h", "/?"]);
    }
}
