//! Per-surface session state.
//!
//! Each surface (chat, disease scan, crop recommendation) owns its state
//! exclusively and drives its own [`SimulatedTask`](crate::task::SimulatedTask).
//! Nothing is shared across surfaces and nothing survives the process.

pub mod chat;
pub mod prefs;
pub mod recommend;
pub mod scan;
