use async_trait::async_trait;

use super::{Command, CommandResult, SessionContext};
use crate::weather::{current_weather, temperature_curve, weekly_forecast};

pub struct WeatherCommand;

#[async_trait]
impl Command for WeatherCommand {
    fn name(&self) -> &str {
        "/weather"
    }

    fn description(&self) -> &str {
        "show current conditions and the weekly forecast"
    }

    async fn execute(&self, _args: &str, _ctx: &SessionContext) -> CommandResult {
        let now = current_weather();
        println!(
            "  {}°C {} (feels like {}°C) · humidity {}% · wind {} km/h · UV {}",
            now.temperature_c,
            now.condition,
            now.feels_like_c,
            now.humidity_percent,
            now.wind_speed_kmh,
            now.uv_index
        );
        for day in weekly_forecast() {
            println!(
                "  {:<9} {:>2}°/{:>2}°  {:<13} rain {}%",
                day.day, day.high_c, day.low_c, day.condition, day.rain_chance_percent
            );
        }
        let curve: Vec<String> = temperature_curve()
            .into_iter()
            .map(|(time, temp)| format!("{time} {temp}°"))
            .collect();
        println!("  today: {}", curve.join(" · "));
        CommandResult::Handled
    }
}
