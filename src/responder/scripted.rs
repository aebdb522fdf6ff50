//! Keyword-matched canned replies.
//!
//! The production responder is an ordered table of [`Rule`]s. Each rule
//! holds the keywords that trigger it and the reply it produces. The
//! utterance is case-folded once, then rules are tried in order and the
//! first whose keyword appears as a substring wins. Unmatched input gets
//! the fallback reply, never an error.

use async_trait::async_trait;

use super::Responder;

/// One entry in the reply table: trigger keywords and the canned reply.
#[derive(Debug, Clone, Copy)]
pub struct Rule {
    pub keywords: &'static [&'static str],
    pub reply: &'static str,
}

impl Rule {
    /// Case-insensitive substring test against an already-lowercased input.
    fn matches(&self, folded: &str) -> bool {
        self.keywords.iter().any(|kw| folded.contains(kw))
    }
}

pub const CROP_REPLY: &str = "Based on your location and current season, I recommend considering tomatoes, wheat, or cotton. These crops show good profit potential with current market prices. Would you like detailed information about any specific crop?";

pub const DISEASE_REPLY: &str = "I can help identify plant diseases! You can upload an image of affected plants in the Disease Detection module, and I'll analyze it for you. Common issues this season include leaf blight and pest attacks. What symptoms are you observing?";

pub const WEATHER_REPLY: &str = "Current weather conditions show 28°C with 65% humidity. There's a chance of rain tomorrow, which would be good for recently planted crops. Check the Weather & Alerts section for detailed forecasts and farming recommendations.";

pub const MARKET_REPLY: &str = "Current market prices: Tomatoes ₹45/kg (+8%), Onions ₹25/kg (-3%), Rice ₹85/kg (+5%). Tomato prices are trending up - good time to sell! Visit the Marketplace for live updates and trading opportunities.";

pub const SCHEMES_REPLY: &str = "Several government schemes are available: PM-KISAN (₹6000/year), Crop Insurance, Soil Health Card scheme, and various state subsidies. I can help you check eligibility and application processes. Which scheme interests you?";

pub const FALLBACK_REPLY: &str = "I understand you need farming assistance! I can help with crop recommendations, disease identification, market prices, weather updates, and government schemes. Could you be more specific about what you'd like to know?";

/// The standard rule table. Order matters: earlier rules shadow later ones.
pub const RULES: &[Rule] = &[
    Rule {
        keywords: &["crop", "plant"],
        reply: CROP_REPLY,
    },
    Rule {
        keywords: &["disease", "pest"],
        reply: DISEASE_REPLY,
    },
    Rule {
        keywords: &["weather"],
        reply: WEATHER_REPLY,
    },
    Rule {
        keywords: &["price", "market"],
        reply: MARKET_REPLY,
    },
    Rule {
        keywords: &["scheme", "government"],
        reply: SCHEMES_REPLY,
    },
];

/// First-match-wins reply selection over a rule table.
pub struct ScriptedResponder {
    rules: &'static [Rule],
}

impl ScriptedResponder {
    pub fn new() -> Self {
        Self { rules: RULES }
    }

    /// Build a responder over a custom table (for tests).
    pub fn with_rules(rules: &'static [Rule]) -> Self {
        Self { rules }
    }

    /// The pure core: always returns one of the table's replies or the
    /// fallback. Never fails.
    pub fn respond(&self, utterance: &str) -> &'static str {
        let folded = utterance.to_lowercase();
        self.rules
            .iter()
            .find(|rule| rule.matches(&folded))
            .map(|rule| rule.reply)
            .unwrap_or(FALLBACK_REPLY)
    }
}

impl Default for ScriptedResponder {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Responder for ScriptedResponder {
    async fn reply(&self, utterance: &str) -> String {
        self.respond(utterance).to_string()
    }
}
