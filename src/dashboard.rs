//! The dashboard aggregate: a concurrent "refresh" of the read-only
//! panels. Each panel fetch is a fixed-latency simulated call; panels
//! are independent, so completion order across them is whichever timer
//! elapses first and the join imposes none.

use std::time::Duration;

use crate::catalog::market::{MarketPrice, market_prices};
use crate::consts::PANEL_REFRESH_DELAY;
use crate::weather::{CurrentWeather, WeatherAlert, alerts, current_weather};

/// Everything the dashboard shows after a refresh.
#[derive(Debug, Clone)]
pub struct DashboardView {
    pub weather: CurrentWeather,
    pub prices: Vec<MarketPrice>,
    pub alerts: Vec<WeatherAlert>,
}

pub struct Dashboard {
    panel_delay: Duration,
}

impl Dashboard {
    pub fn new() -> Self {
        Self::with_panel_delay(PANEL_REFRESH_DELAY)
    }

    pub fn with_panel_delay(panel_delay: Duration) -> Self {
        Self { panel_delay }
    }

    /// Fetch all panels concurrently and assemble the view. The whole
    /// refresh takes one panel delay, not three.
    pub async fn refresh(&self) -> DashboardView {
        let delay = self.panel_delay;

        let weather_panel = async move {
            tokio::time::sleep(delay).await;
            current_weather()
        };
        let prices_panel = async move {
            tokio::time::sleep(delay).await;
            market_prices()
        };
        let alerts_panel = async move {
            tokio::time::sleep(delay).await;
            alerts()
        };

        let (weather, prices, alerts) =
            futures::future::join3(weather_panel, prices_panel, alerts_panel).await;

        DashboardView {
            weather,
            prices,
            alerts,
        }
    }
}

impl Default for Dashboard {
    fn default() -> Self {
        Self::new()
    }
}
