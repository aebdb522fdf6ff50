use async_trait::async_trait;

use super::{Command, CommandResult, SessionContext, parse_args};
use crate::catalog::schemes::{filter_schemes, schemes};

pub struct SchemesCommand;

#[async_trait]
impl Command for SchemesCommand {
    fn name(&self) -> &str {
        "/schemes"
    }

    fn description(&self) -> &str {
        "browse government schemes: /schemes [query] [--state <s>] [--crop <c>] [--type <t>]"
    }

    async fn execute(&self, args: &str, _ctx: &SessionContext) -> CommandResult {
        let (query, flags) = parse_args(args);
        let state = flags.get("state").map(String::as_str).unwrap_or("");
        let crop = flags.get("crop").map(String::as_str).unwrap_or("");
        let scheme_type = flags.get("type").map(String::as_str).unwrap_or("");

        let all = schemes();
        let hits = filter_schemes(&all, &query, state, crop, scheme_type);

        if hits.is_empty() {
            println!("  no schemes match");
            return CommandResult::Handled;
        }

        for s in &hits {
            let mut tags = Vec::new();
            if s.is_new {
                tags.push("NEW");
            }
            if s.expiring {
                tags.push("EXPIRING");
            }
            let tags = if tags.is_empty() {
                String::new()
            } else {
                format!(" [{}]", tags.join(", "))
            };
            println!("  {}{}", s.name, tags);
            println!("    {}", s.description);
            println!("    benefits: {} · subsidy: {} · {}", s.benefits, s.subsidy, s.category);
        }
        println!("  {} of {} scheme(s)", hits.len(), all.len());
        CommandResult::Handled
    }
}
