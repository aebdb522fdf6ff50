use async_trait::async_trait;

use super::{Command, CommandResult, SessionContext};
use crate::catalog::market::{Trend, market_prices};

pub struct PricesCommand;

#[async_trait]
impl Command for PricesCommand {
    fn name(&self) -> &str {
        "/prices"
    }

    fn description(&self) -> &str {
        "show the market price ticker"
    }

    async fn execute(&self, _args: &str, _ctx: &SessionContext) -> CommandResult {
        for price in market_prices() {
            let arrow = match price.trend {
                Trend::Up => "▲",
                Trend::Down => "▼",
            };
            println!(
                "  {:<8} {:>5}/kg  {} {}",
                price.crop, price.current_price, arrow, price.change
            );
        }
        CommandResult::Handled
    }
}
