use async_trait::async_trait;

use super::{Command, CommandResult, SessionContext};
use crate::session::scan::ADVISORY;
use crate::spinner::Spinner;

pub struct ScanCommand;

#[async_trait]
impl Command for ScanCommand {
    fn name(&self) -> &str {
        "/scan"
    }

    fn description(&self) -> &str {
        "scan a crop photo for diseases: /scan [photo]"
    }

    async fn execute(&self, args: &str, ctx: &SessionContext) -> CommandResult {
        println!("  ⚠ {ADVISORY}");

        let label = if args.is_empty() { "crop photo" } else { args };
        if !ctx.scans.analyze(label) {
            println!("  a scan is already running");
            return CommandResult::Handled;
        }

        let spinner = Spinner::start("analyzing crop image");
        let result = ctx.scans.wait_analysis().await;
        spinner.stop().await;

        println!(
            "  {} — {} ({}% confidence)",
            result.crop, result.issue, result.confidence_percent
        );
        println!("  recommended treatment: {}", result.treatment);

        println!("\n  recent scans:");
        for record in ctx.scans.history() {
            println!(
                "    {}  {:<8} {:<15} {}",
                record.date, record.crop, record.issue, record.treatment
            );
        }
        CommandResult::Handled
    }
}
