use async_trait::async_trait;

use super::{Command, CommandResult, SessionContext};
use crate::weather::{Severity, alerts};

pub struct AlertsCommand;

#[async_trait]
impl Command for AlertsCommand {
    fn name(&self) -> &str {
        "/alerts"
    }

    fn description(&self) -> &str {
        "show active farming alerts"
    }

    async fn execute(&self, _args: &str, _ctx: &SessionContext) -> CommandResult {
        for alert in alerts() {
            let marker = match alert.severity {
                Severity::Low => "·",
                Severity::Medium => "!",
                Severity::High => "!!",
            };
            println!("  {:>2} {} ({})", marker, alert.title, alert.issued);
            println!("     {}", alert.message);
        }
        CommandResult::Handled
    }
}
