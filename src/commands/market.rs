use async_trait::async_trait;

use super::{Command, CommandResult, SessionContext, parse_args};
use crate::catalog::market::{filter_products, products};

pub struct MarketCommand;

#[async_trait]
impl Command for MarketCommand {
    fn name(&self) -> &str {
        "/market"
    }

    fn description(&self) -> &str {
        "browse marketplace listings: /market [query] [--category <c>]"
    }

    async fn execute(&self, args: &str, _ctx: &SessionContext) -> CommandResult {
        let (query, flags) = parse_args(args);
        let category = flags.get("category").map(String::as_str).unwrap_or("all");

        let all = products();
        let hits = filter_products(&all, &query, category);

        if hits.is_empty() {
            println!("  no products match");
            return CommandResult::Handled;
        }

        for p in &hits {
            let badges = match (p.verified, p.organic) {
                (true, true) => " [verified, organic]",
                (true, false) => " [verified]",
                (false, true) => " [organic]",
                (false, false) => "",
            };
            println!(
                "  {} — {} ({}), {} · {} · ★{}{}",
                p.name, p.price, p.stock, p.seller, p.location, p.rating, badges
            );
        }
        println!("  {} of {} listing(s)", hits.len(), all.len());
        CommandResult::Handled
    }
}
