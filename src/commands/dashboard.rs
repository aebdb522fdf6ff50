use async_trait::async_trait;

use super::{Command, CommandResult, SessionContext};
use crate::catalog::market::Trend;
use crate::spinner::Spinner;

pub struct DashboardCommand;

#[async_trait]
impl Command for DashboardCommand {
    fn name(&self) -> &str {
        "/dashboard"
    }

    fn aliases(&self) -> &[&str] {
        &["/dash"]
    }

    fn description(&self) -> &str {
        "refresh and show the dashboard panels"
    }

    async fn execute(&self, _args: &str, ctx: &SessionContext) -> CommandResult {
        let spinner = Spinner::start("refreshing dashboard");
        let view = ctx.dashboard.refresh().await;
        spinner.stop().await;

        println!(
            "  weather: {}°C {} · humidity {}%",
            view.weather.temperature_c, view.weather.condition, view.weather.humidity_percent
        );

        println!("  prices:");
        for price in &view.prices {
            let arrow = match price.trend {
                Trend::Up => "▲",
                Trend::Down => "▼",
            };
            println!("    {:<8} {:>5}/kg {} {}", price.crop, price.current_price, arrow, price.change);
        }

        println!("  alerts:");
        for alert in &view.alerts {
            println!("    {} — {}", alert.title, alert.issued);
        }
        CommandResult::Handled
    }
}
