//! The disease-detection surface.
//!
//! Uploading a photo is simulated by an unvalidated label — the "JPG /
//! PNG / Max 5MB" badges in the reference app are advisory only. A scan
//! "analyzes" for a fixed delay, then the fixed mock result is prepended
//! to the history, most recent first.

use std::sync::{Arc, Mutex};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use chrono::Local;
use serde::{Deserialize, Serialize};

use crate::consts::SCAN_ANALYSIS_DELAY;
use crate::task::{Phase, SimulatedTask};

/// Standing outbreak advisory shown on the scan surface.
pub const ADVISORY: &str =
    "Late blight outbreak reported in Northern regions. Early detection recommended.";

/// One completed scan, as kept in the history list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScanRecord {
    pub id: u64,
    pub crop: String,
    pub issue: String,
    /// Calendar date, `YYYY-MM-DD`.
    pub date: String,
    pub treatment: String,
}

/// What the simulated analyzer reports.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub crop: String,
    pub issue: String,
    pub confidence_percent: u8,
    pub treatment: String,
}

/// The analyzer always reports the same finding.
fn mock_analysis() -> AnalysisResult {
    AnalysisResult {
        crop: "Tomato".to_string(),
        issue: "Late Blight".to_string(),
        confidence_percent: 94,
        treatment: "Copper Fungicide".to_string(),
    }
}

/// The sample scans every session starts with, most recent first.
fn seed_history() -> Vec<ScanRecord> {
    vec![
        ScanRecord {
            id: 1,
            crop: "Tomato".to_string(),
            issue: "Late Blight".to_string(),
            date: "2024-01-15".to_string(),
            treatment: "Copper Fungicide".to_string(),
        },
        ScanRecord {
            id: 2,
            crop: "Wheat".to_string(),
            issue: "Rust Disease".to_string(),
            date: "2024-01-12".to_string(),
            treatment: "Triazole Fungicide".to_string(),
        },
        ScanRecord {
            id: 3,
            crop: "Rice".to_string(),
            issue: "Blast Disease".to_string(),
            date: "2024-01-10".to_string(),
            treatment: "Organic Neem Oil".to_string(),
        },
    ]
}

pub struct ScanSession {
    history: Arc<Mutex<Vec<ScanRecord>>>,
    task: SimulatedTask<AnalysisResult>,
    next_id: Arc<AtomicU64>,
    delay: Duration,
}

impl ScanSession {
    pub fn new() -> Self {
        Self::with_delay(SCAN_ANALYSIS_DELAY)
    }

    pub fn with_delay(delay: Duration) -> Self {
        let seeds = seed_history();
        let next_id = seeds.len() as u64 + 1;
        Self {
            history: Arc::new(Mutex::new(seeds)),
            task: SimulatedTask::new(),
            next_id: Arc::new(AtomicU64::new(next_id)),
            delay,
        }
    }

    /// Start analyzing an "uploaded" image. The label is accepted as-is.
    /// Returns `false` while a previous analysis is still pending.
    pub fn analyze(&self, _image_label: &str) -> bool {
        let history = Arc::clone(&self.history);
        let next_id = Arc::clone(&self.next_id);

        self.task.submit(self.delay, move || async move {
            let result = mock_analysis();
            let record = ScanRecord {
                id: next_id.fetch_add(1, Ordering::SeqCst),
                crop: result.crop.clone(),
                issue: result.issue.clone(),
                date: Local::now().format("%Y-%m-%d").to_string(),
                treatment: result.treatment.clone(),
            };
            history.lock().unwrap().insert(0, record);
            result
        })
    }

    /// Wait for the pending analysis.
    pub async fn wait_analysis(&self) -> AnalysisResult {
        self.task.wait().await
    }

    pub fn phase(&self) -> Phase {
        self.task.phase()
    }

    /// Scan history, most recent first.
    pub fn history(&self) -> Vec<ScanRecord> {
        self.history.lock().unwrap().clone()
    }
}

impl Default for ScanSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn history_starts_with_three_samples() {
        let scans = ScanSession::new();
        let history = scans.history();
        assert_eq!(history.len(), 3);
        assert_eq!(history[0].crop, "Tomato");
        assert_eq!(history[2].issue, "Blast Disease");
    }

    #[tokio::test(start_paused = true)]
    async fn completed_scan_is_prepended() {
        let scans = ScanSession::new();
        assert!(scans.analyze("leaf.jpg"));
        assert_eq!(scans.phase(), Phase::Pending);
        assert_eq!(scans.history().len(), 3, "no append before completion");

        let result = scans.wait_analysis().await;
        assert_eq!(result.issue, "Late Blight");

        let history = scans.history();
        assert_eq!(history.len(), 4);
        assert_eq!(history[0].id, 4, "new record sits at the head");
        assert_eq!(history[0].treatment, result.treatment);
    }

    #[tokio::test(start_paused = true)]
    async fn analyze_while_pending_is_ignored() {
        let scans = ScanSession::new();
        assert!(scans.analyze("a.jpg"));
        assert!(!scans.analyze("b.jpg"));

        scans.wait_analysis().await;
        assert_eq!(scans.history().len(), 4, "exactly one record appended");
    }
}
