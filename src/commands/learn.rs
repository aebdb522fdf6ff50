use async_trait::async_trait;

use super::{Command, CommandResult, SessionContext, parse_args};
use crate::catalog::learning::{courses, filter_courses, resources, webinars};

pub struct LearnCommand;

#[async_trait]
impl Command for LearnCommand {
    fn name(&self) -> &str {
        "/learn"
    }

    fn description(&self) -> &str {
        "browse the learning hub: /learn [query] [--category <c>]"
    }

    async fn execute(&self, args: &str, _ctx: &SessionContext) -> CommandResult {
        let (query, flags) = parse_args(args);
        let category = flags.get("category").map(String::as_str).unwrap_or("all");

        let all = courses();
        let hits = filter_courses(&all, &query, category);

        if hits.is_empty() {
            println!("  no courses match");
        } else {
            println!("  courses:");
            for c in &hits {
                println!(
                    "    {} — {} · {} lessons · {} · {} · ★{}",
                    c.title, c.duration, c.lessons, c.level, c.instructor, c.rating
                );
            }
        }

        // Webinars and resources are fixed lists, shown unfiltered.
        println!("  webinars:");
        for w in webinars() {
            println!(
                "    {} — {} {} · {} ({:?})",
                w.title, w.date, w.time, w.speaker, w.status
            );
        }
        println!("  resources:");
        for r in resources() {
            println!("    {} — {} {} · {} downloads", r.title, r.format, r.size, r.downloads);
        }
        CommandResult::Handled
    }
}
