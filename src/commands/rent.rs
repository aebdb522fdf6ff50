use async_trait::async_trait;

use super::{Command, CommandResult, SessionContext, parse_args};
use crate::catalog::equipment::{RentalStatus, equipment, filter_equipment, rentals};

pub struct RentCommand;

#[async_trait]
impl Command for RentCommand {
    fn name(&self) -> &str {
        "/rent"
    }

    fn description(&self) -> &str {
        "browse rental equipment: /rent [query] [--location <l>]"
    }

    async fn execute(&self, args: &str, _ctx: &SessionContext) -> CommandResult {
        let (query, flags) = parse_args(args);
        let location = flags.get("location").map(String::as_str).unwrap_or("all");

        let all = equipment();
        let hits = filter_equipment(&all, &query, location);

        if hits.is_empty() {
            println!("  no equipment matches");
            return CommandResult::Handled;
        }

        for e in &hits {
            let availability = if e.available { "available" } else { "booked" };
            println!(
                "  {} ({}) — {}/day, {}/hour · {} · {} · ★{}",
                e.name, e.kind, e.price_per_day, e.price_per_hour, e.location, availability, e.rating
            );
        }
        println!("  {} of {} listing(s)", hits.len(), all.len());

        println!("  my rentals:");
        for r in rentals() {
            let status = match r.status {
                RentalStatus::Active => "active",
                RentalStatus::Completed => "completed",
            };
            println!(
                "    {} — {} to {} · {} · {}",
                r.equipment, r.start_date, r.end_date, r.amount, status
            );
        }
        CommandResult::Handled
    }
}
