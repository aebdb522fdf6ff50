//! The crop-recommendation surface.
//!
//! The farm-details form feeds a simulated analysis that always returns
//! the same three recommendations after a fixed delay.

use std::time::Duration;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::consts::RECOMMENDATION_DELAY;
use crate::task::{Phase, SimulatedTask};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SoilType {
    Clay,
    Loam,
    Sandy,
    Silt,
    Mixed,
}

/// Indian cropping seasons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Season {
    /// Monsoon.
    Kharif,
    /// Winter.
    Rabi,
    /// Summer.
    Zaid,
}

/// What the farmer fills in. All fields optional except the location —
/// the simulated backend ignores them anyway.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FarmDetails {
    pub location: String,
    pub soil_type: Option<SoilType>,
    pub season: Option<Season>,
    pub farm_size_hectares: Option<f64>,
    pub budget_rupees: Option<u64>,
    pub previous_crop: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Profitability {
    High,
    Medium,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CropRecommendation {
    pub crop: &'static str,
    pub profitability: Profitability,
    pub yield_estimate: &'static str,
    pub investment: &'static str,
    pub duration: &'static str,
    pub market_price: &'static str,
    pub reasons: &'static [&'static str],
}

/// The three recommendations every request produces.
pub fn mock_recommendations() -> Vec<CropRecommendation> {
    vec![
        CropRecommendation {
            crop: "Tomato",
            profitability: Profitability::High,
            yield_estimate: "25-30 tons/hectare",
            investment: "₹50,000",
            duration: "90-120 days",
            market_price: "₹45/kg",
            reasons: &[
                "High market demand",
                "Suitable soil conditions",
                "Favorable weather",
            ],
        },
        CropRecommendation {
            crop: "Wheat",
            profitability: Profitability::Medium,
            yield_estimate: "4-5 tons/hectare",
            investment: "₹25,000",
            duration: "120-150 days",
            market_price: "₹22/kg",
            reasons: &["Stable market", "Low maintenance", "Government support"],
        },
        CropRecommendation {
            crop: "Cotton",
            profitability: Profitability::High,
            yield_estimate: "2-3 tons/hectare",
            investment: "₹40,000",
            duration: "180-200 days",
            market_price: "₹60/kg",
            reasons: &["Export potential", "Good soil match", "Premium pricing"],
        },
    ]
}

/// Static "current conditions" panel shown beside the form.
pub struct CurrentConditions {
    pub temperature_c: i32,
    pub humidity_percent: u8,
    pub nitrogen: &'static str,
    pub phosphorus: &'static str,
    pub potassium: &'static str,
}

pub fn current_conditions() -> CurrentConditions {
    CurrentConditions {
        temperature_c: 28,
        humidity_percent: 65,
        nitrogen: "Good",
        phosphorus: "Medium",
        potassium: "High",
    }
}

pub struct RecommendationSession {
    task: SimulatedTask<Vec<CropRecommendation>>,
    delay: Duration,
}

impl RecommendationSession {
    pub fn new() -> Self {
        Self::with_delay(RECOMMENDATION_DELAY)
    }

    pub fn with_delay(delay: Duration) -> Self {
        Self {
            task: SimulatedTask::new(),
            delay,
        }
    }

    /// Submit the form. Returns `false` while a request is pending.
    pub fn request(&self, _details: &FarmDetails) -> bool {
        self.task
            .submit(self.delay, || async { mock_recommendations() })
    }

    pub async fn wait_recommendations(&self) -> Vec<CropRecommendation> {
        self.task.wait().await
    }

    pub fn phase(&self) -> Phase {
        self.task.phase()
    }

    /// Results of the last completed request, if any.
    pub fn recommendations(&self) -> Option<Vec<CropRecommendation>> {
        self.task.result()
    }

    /// Clear results so the form can be shown fresh.
    pub fn reset(&self) -> bool {
        self.task.reset()
    }
}

impl Default for RecommendationSession {
    fn default() -> Self {
        Self::new()
    }
}
