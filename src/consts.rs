//! Project-wide constants.

use std::time::Duration;

pub const AUTHOR: &str = env!("CARGO_PKG_AUTHORS");
pub const HOMEPAGE: &str = env!("CARGO_PKG_HOMEPAGE");
pub const REPO: &str = env!("CARGO_PKG_REPOSITORY");

/// How long the assistant "types" before a chat reply appears.
pub const CHAT_REPLY_DELAY: Duration = Duration::from_millis(1500);

/// How long a crop-recommendation request "analyzes" the farm details.
pub const RECOMMENDATION_DELAY: Duration = Duration::from_secs(2);

/// How long a disease scan "analyzes" the uploaded image.
pub const SCAN_ANALYSIS_DELAY: Duration = Duration::from_millis(2500);

/// How long each dashboard panel takes to "fetch".
pub const PANEL_REFRESH_DELAY: Duration = Duration::from_millis(600);

/// The assistant's opening message, seeded into every new conversation.
pub const GREETING: &str = "Hello! I'm your FarmIQ AI assistant. I can help you with crop recommendations, disease identification, weather queries, and more. How can I help you today?";

/// Suggested openers shown while the conversation holds only the greeting.
pub const QUICK_QUESTIONS: &[&str] = &[
    "What crops should I plant this season?",
    "How to identify tomato diseases?",
    "Current weather for farming?",
    "Government schemes available?",
];
