use async_trait::async_trait;

use super::{Command, CommandResult, SessionContext, parse_args};
use crate::session::recommend::{FarmDetails, Profitability, current_conditions};
use crate::spinner::Spinner;

pub struct RecommendCommand;

#[async_trait]
impl Command for RecommendCommand {
    fn name(&self) -> &str {
        "/recommend"
    }

    fn description(&self) -> &str {
        "get crop recommendations: /recommend [--location <l>] [--soil <s>] [--season <s>]"
    }

    async fn execute(&self, args: &str, ctx: &SessionContext) -> CommandResult {
        let (_, flags) = parse_args(args);
        let details = FarmDetails {
            location: flags.get("location").cloned().unwrap_or_default(),
            soil_type: flags
                .get("soil")
                .and_then(|s| clap::ValueEnum::from_str(s, true).ok()),
            season: flags
                .get("season")
                .and_then(|s| clap::ValueEnum::from_str(s, true).ok()),
            previous_crop: flags.get("previous-crop").cloned(),
            ..FarmDetails::default()
        };

        let conditions = current_conditions();
        println!(
            "  current conditions: {}°C · humidity {}% · N {} / P {} / K {}",
            conditions.temperature_c,
            conditions.humidity_percent,
            conditions.nitrogen,
            conditions.phosphorus,
            conditions.potassium
        );

        if !ctx.recommender.request(&details) {
            println!("  a recommendation request is already running");
            return CommandResult::Handled;
        }

        let spinner = Spinner::start("analyzing farm details");
        let recommendations = ctx.recommender.wait_recommendations().await;
        spinner.stop().await;

        for rec in &recommendations {
            let profit = match rec.profitability {
                Profitability::High => "high profit",
                Profitability::Medium => "medium profit",
            };
            println!("  {} ({profit})", rec.crop);
            println!(
                "    yield {} · investment {} · {} · market {}",
                rec.yield_estimate, rec.investment, rec.duration, rec.market_price
            );
            println!("    why: {}", rec.reasons.join(", "));
        }

        // Leave the surface ready for the next request.
        ctx.recommender.reset();
        CommandResult::Handled
    }
}
