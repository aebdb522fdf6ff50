//! Static weather data: current conditions, alerts, and forecasts.

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CurrentWeather {
    pub temperature_c: i32,
    pub condition: &'static str,
    pub humidity_percent: u8,
    pub wind_speed_kmh: u32,
    pub visibility_km: u32,
    pub uv_index: u8,
    pub pressure_hpa: u32,
    pub feels_like_c: i32,
}

pub fn current_weather() -> CurrentWeather {
    CurrentWeather {
        temperature_c: 28,
        condition: "Partly Cloudy",
        humidity_percent: 65,
        wind_speed_kmh: 12,
        visibility_km: 8,
        uv_index: 6,
        pressure_hpa: 1013,
        feels_like_c: 32,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum Severity {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeatherAlert {
    pub title: &'static str,
    pub message: &'static str,
    pub issued: &'static str,
    pub severity: Severity,
}

/// The fixed alert feed, as issued.
pub fn alerts() -> Vec<WeatherAlert> {
    vec![
        WeatherAlert {
            title: "Heavy Rain Expected",
            message: "Moderate to heavy rainfall expected tomorrow. Consider protecting sensitive crops.",
            issued: "2 hours ago",
            severity: Severity::Medium,
        },
        WeatherAlert {
            title: "Ideal Spraying Conditions",
            message: "Low wind speed and optimal humidity for pesticide/fertilizer application.",
            issued: "1 hour ago",
            severity: Severity::Low,
        },
        WeatherAlert {
            title: "Frost Warning",
            message: "Temperature may drop below 5°C tonight. Protect sensitive plants.",
            issued: "30 minutes ago",
            severity: Severity::High,
        },
    ]
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayForecast {
    pub day: &'static str,
    pub high_c: i32,
    pub low_c: i32,
    pub condition: &'static str,
    pub rain_chance_percent: u8,
}

pub fn weekly_forecast() -> Vec<DayForecast> {
    vec![
        DayForecast { day: "Today", high_c: 32, low_c: 22, condition: "Partly Cloudy", rain_chance_percent: 20 },
        DayForecast { day: "Tomorrow", high_c: 29, low_c: 20, condition: "Rainy", rain_chance_percent: 80 },
        DayForecast { day: "Wed", high_c: 26, low_c: 18, condition: "Cloudy", rain_chance_percent: 60 },
        DayForecast { day: "Thu", high_c: 30, low_c: 21, condition: "Sunny", rain_chance_percent: 10 },
        DayForecast { day: "Fri", high_c: 33, low_c: 24, condition: "Hot", rain_chance_percent: 5 },
        DayForecast { day: "Sat", high_c: 31, low_c: 23, condition: "Sunny", rain_chance_percent: 15 },
        DayForecast { day: "Sun", high_c: 28, low_c: 20, condition: "Partly Cloudy", rain_chance_percent: 30 },
    ]
}

/// Hourly temperature curve for the current day.
pub fn temperature_curve() -> Vec<(&'static str, i32)> {
    vec![
        ("6 AM", 22),
        ("9 AM", 25),
        ("12 PM", 28),
        ("3 PM", 32),
        ("6 PM", 29),
        ("9 PM", 26),
    ]
}
